use crate::api::error::AppError;
use crate::entities::{page_content, prelude::*};
use crate::models::page::{AboutUsForm, DocumentPageForm, InformationForm, PageName};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set,
};
use tracing::info;
use uuid::Uuid;

/// Columns a page editor writes. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct PageContentPatch {
    pub mission: Option<String>,
    pub story: Option<String>,
    pub creator_name: Option<String>,
    pub creator_title: Option<String>,
    pub creator_bio: Option<String>,
    pub creator_image: Option<String>,
    pub video_url: Option<Option<String>>,
    pub faqs: Option<serde_json::Value>,
    pub preparation_steps: Option<serde_json::Value>,
}

impl PageContentPatch {
    fn apply(self, active: &mut page_content::ActiveModel) {
        if let Some(v) = self.mission {
            active.mission = Set(Some(v));
        }
        if let Some(v) = self.story {
            active.story = Set(Some(v));
        }
        if let Some(v) = self.creator_name {
            active.creator_name = Set(Some(v));
        }
        if let Some(v) = self.creator_title {
            active.creator_title = Set(Some(v));
        }
        if let Some(v) = self.creator_bio {
            active.creator_bio = Set(Some(v));
        }
        if let Some(v) = self.creator_image {
            active.creator_image = Set(Some(v));
        }
        if let Some(v) = self.video_url {
            active.video_url = Set(v);
        }
        if let Some(v) = self.faqs {
            active.faqs = Set(Some(v));
        }
        if let Some(v) = self.preparation_steps {
            active.preparation_steps = Set(Some(v));
        }
    }
}

impl From<AboutUsForm> for PageContentPatch {
    fn from(form: AboutUsForm) -> Self {
        Self {
            mission: Some(form.mission),
            story: Some(form.story),
            creator_name: Some(form.creator_name),
            creator_title: Some(form.creator_title),
            creator_bio: Some(form.creator_bio),
            creator_image: Some(form.creator_image),
            ..Default::default()
        }
    }
}

impl From<InformationForm> for PageContentPatch {
    fn from(form: InformationForm) -> Self {
        let video = form.video_url.trim().to_string();
        Self {
            mission: Some(form.title),
            story: Some(form.content),
            video_url: Some((!video.is_empty()).then_some(video)),
            ..Default::default()
        }
    }
}

impl From<&DocumentPageForm> for PageContentPatch {
    fn from(form: &DocumentPageForm) -> Self {
        Self {
            faqs: Some(form.faqs_json()),
            preparation_steps: Some(form.steps_json()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Inserted,
    Updated,
}

pub struct PageContentService {
    db: DatabaseConnection,
}

impl PageContentService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(&self, page: PageName) -> Result<Option<page_content::Model>, AppError> {
        let row = PageContent::find()
            .filter(page_content::Column::PageName.eq(page.as_str()))
            .one(&self.db)
            .await?;
        Ok(row)
    }

    /// Update-by-name when the row exists, insert otherwise; returns the stored row.
    pub async fn save(
        &self,
        page: PageName,
        patch: PageContentPatch,
    ) -> Result<(SaveOutcome, page_content::Model), AppError> {
        let now = Utc::now();

        let outcome = match self.find(page).await? {
            Some(existing) => {
                let mut active = existing.into_active_model();
                patch.apply(&mut active);
                active.updated_at = Set(Some(now));
                active.update(&self.db).await?;
                SaveOutcome::Updated
            }
            None => {
                let mut active = page_content::ActiveModel {
                    id: Set(Uuid::new_v4().to_string()),
                    page_name: Set(page.as_str().to_string()),
                    mission: Set(None),
                    story: Set(None),
                    creator_name: Set(None),
                    creator_title: Set(None),
                    creator_bio: Set(None),
                    creator_image: Set(None),
                    video_url: Set(None),
                    faqs: Set(None),
                    preparation_steps: Set(None),
                    created_at: Set(Some(now)),
                    updated_at: Set(Some(now)),
                };
                patch.apply(&mut active);
                active.insert(&self.db).await?;
                SaveOutcome::Inserted
            }
        };

        info!("📝 Saved page '{}' ({:?})", page, outcome);

        let stored = self
            .find(page)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Page '{}' vanished after save", page)))?;
        Ok((outcome, stored))
    }

    pub async fn load_document_page(&self) -> Result<DocumentPageForm, AppError> {
        let row = self.find(PageName::Documents).await?;
        Ok(DocumentPageForm::from_row(row.as_ref()))
    }

    /// Loads the documents page, applies one list edit and saves the result.
    pub async fn edit_document_page<F, E>(&self, edit: F) -> Result<DocumentPageForm, AppError>
    where
        F: FnOnce(&mut DocumentPageForm) -> Result<(), E>,
        AppError: From<E>,
    {
        let mut form = self.load_document_page().await?;
        edit(&mut form)?;
        let (_, stored) = self
            .save(PageName::Documents, PageContentPatch::from(&form))
            .await?;
        Ok(DocumentPageForm::from_row(Some(&stored)))
    }
}
