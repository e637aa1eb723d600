use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "institutions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub location: String,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub image_url: String,
    pub created_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::institution_details::Entity")]
    InstitutionDetails,
    #[sea_orm(has_many = "super::required_documents::Entity")]
    RequiredDocuments,
    #[sea_orm(has_many = "super::test_requirements::Entity")]
    TestRequirements,
}

impl Related<super::institution_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InstitutionDetails.def()
    }
}

impl Related<super::required_documents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RequiredDocuments.def()
    }
}

impl Related<super::test_requirements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestRequirements.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
