pub mod article_service;
pub mod auth_service;
pub mod document_service;
pub mod institution_service;
pub mod page_content_service;
pub mod storage;
