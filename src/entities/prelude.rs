pub use super::admin_sessions::Entity as AdminSessions;
pub use super::admins::Entity as Admins;
pub use super::articles::Entity as Articles;
pub use super::documents::Entity as Documents;
pub use super::institution_details::Entity as InstitutionDetails;
pub use super::institutions::Entity as Institutions;
pub use super::page_content::Entity as PageContent;
pub use super::required_documents::Entity as RequiredDocuments;
pub use super::test_requirements::Entity as TestRequirements;
