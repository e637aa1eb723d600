pub mod prelude;

pub mod admin_sessions;
pub mod admins;
pub mod articles;
pub mod documents;
pub mod institution_details;
pub mod institutions;
pub mod page_content;
pub mod required_documents;
pub mod test_requirements;
