pub mod auth;
pub mod filters;
pub mod validation;
