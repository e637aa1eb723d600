use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "page_content")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub page_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub mission: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub story: Option<String>,
    pub creator_name: Option<String>,
    pub creator_title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub creator_bio: Option<String>,
    pub creator_image: Option<String>,
    pub video_url: Option<String>,
    pub faqs: Option<Json>,
    pub preparation_steps: Option<Json>,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
