use crate::api::error::AppError;
use crate::entities::{articles, prelude::*};
use crate::models::article::{ArticleForm, ArticleView};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set,
};
use tracing::info;
use uuid::Uuid;

pub struct ArticleService {
    db: DatabaseConnection,
}

impl ArticleService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Newest first.
    pub async fn list(&self) -> Result<Vec<ArticleView>, AppError> {
        let rows = Articles::find()
            .order_by_desc(articles::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(ArticleView::from).collect())
    }

    pub async fn find(&self, id: &str) -> Result<Option<ArticleView>, AppError> {
        let row = Articles::find_by_id(id).one(&self.db).await?;
        Ok(row.map(ArticleView::from))
    }

    pub async fn create(&self, form: ArticleForm) -> Result<ArticleView, AppError> {
        let row = articles::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(form.title),
            excerpt: Set(form.excerpt),
            content: Set(form.content),
            image_url: Set(form.image_url),
            category: Set(form.category.as_str().to_string()),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        }
        .insert(&self.db)
        .await?;

        info!("📰 Created article {}", row.id);
        Ok(row.into())
    }

    pub async fn update(&self, id: &str, form: ArticleForm) -> Result<ArticleView, AppError> {
        let existing = Articles::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Article not found".to_string()))?;

        let mut active = existing.into_active_model();
        active.title = Set(form.title);
        active.excerpt = Set(form.excerpt);
        active.content = Set(form.content);
        active.image_url = Set(form.image_url);
        active.category = Set(form.category.as_str().to_string());
        active.updated_at = Set(Some(Utc::now()));

        Ok(active.update(&self.db).await?.into())
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let res = Articles::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Article not found".to_string()));
        }
        info!("🗑️ Deleted article {}", id);
        Ok(())
    }
}
