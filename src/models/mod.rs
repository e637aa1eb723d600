pub mod article;
pub mod document;
pub mod institution;
pub mod page;
