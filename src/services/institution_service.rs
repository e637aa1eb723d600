use crate::api::error::AppError;
use crate::entities::{institution_details, institutions, prelude::*};
use crate::models::institution::{InstitutionDetailFields, InstitutionForm, InstitutionRecord};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set,
};
use tracing::info;
use uuid::Uuid;

pub type InstitutionRow = (institutions::Model, Option<institution_details::Model>);

pub struct InstitutionService {
    db: DatabaseConnection,
}

fn apply_details(active: &mut institution_details::ActiveModel, fields: InstitutionDetailFields) {
    active.address = Set(fields.address);
    active.email = Set(fields.email);
    active.website_url = Set(fields.website_url);
    active.region = Set(fields.region);
    active.courses = Set(fields.courses);
    active.application_method = Set(fields.application_method);
    active.application_deadline = Set(fields.application_deadline);
    active.application_test_date = Set(fields.application_test_date);
    active.language_requirements = Set(fields.language_requirements);
    active.status = Set(fields.status);
}

impl InstitutionService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every institution joined with its optional detail row, ordered by name.
    pub async fn list_with_details(&self) -> Result<Vec<InstitutionRow>, AppError> {
        let rows = Institutions::find()
            .find_also_related(InstitutionDetails)
            .order_by_asc(institutions::Column::Name)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    pub async fn find_with_details(&self, id: &str) -> Result<Option<InstitutionRow>, AppError> {
        let row = Institutions::find_by_id(id)
            .find_also_related(InstitutionDetails)
            .one(&self.db)
            .await?;
        Ok(row)
    }

    pub async fn create(&self, form: InstitutionForm) -> Result<InstitutionRecord, AppError> {
        let id = Uuid::new_v4().to_string();

        let institution = institutions::ActiveModel {
            id: Set(id.clone()),
            name: Set(form.name),
            description: Set(form.description),
            location: Set(form.location),
            kind: Set(form.kind),
            image_url: Set(form.image_url),
            created_at: Set(Some(Utc::now())),
        }
        .insert(&self.db)
        .await?;

        let mut details = institution_details::ActiveModel {
            institution_id: Set(id.clone()),
            ..Default::default()
        };
        apply_details(&mut details, form.details);
        let details = details.insert(&self.db).await?;

        info!("🏫 Created institution {} ({})", institution.name, id);
        Ok(InstitutionRecord::from_rows(institution, Some(&details)))
    }

    /// Updates the institution row and upserts its detail row.
    pub async fn update(
        &self,
        id: &str,
        form: InstitutionForm,
    ) -> Result<InstitutionRecord, AppError> {
        let (existing, details) = self
            .find_with_details(id)
            .await?
            .ok_or_else(|| AppError::NotFound("University not found".to_string()))?;

        let mut active = existing.into_active_model();
        active.name = Set(form.name);
        active.description = Set(form.description);
        active.location = Set(form.location);
        active.kind = Set(form.kind);
        active.image_url = Set(form.image_url);
        let institution = active.update(&self.db).await?;

        let details = match details {
            Some(row) => {
                let mut active = row.into_active_model();
                apply_details(&mut active, form.details);
                active.update(&self.db).await?
            }
            None => {
                let mut active = institution_details::ActiveModel {
                    institution_id: Set(id.to_string()),
                    ..Default::default()
                };
                apply_details(&mut active, form.details);
                active.insert(&self.db).await?
            }
        };

        info!("✏️ Updated institution {}", id);
        Ok(InstitutionRecord::from_rows(institution, Some(&details)))
    }

    /// The detail row goes with it through the store's cascade.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let res = Institutions::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("University not found".to_string()));
        }
        info!("🗑️ Deleted institution {}", id);
        Ok(())
    }
}
