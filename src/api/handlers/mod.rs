pub mod articles;
pub mod auth;
pub mod documents;
pub mod health;
pub mod institutions;
pub mod pages;
