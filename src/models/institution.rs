use crate::entities::{institution_details, institutions};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const NOT_AVAILABLE: &str = "Information not available";
pub const NOT_SPECIFIED: &str = "Not specified";
pub const ADDRESS_NOT_AVAILABLE: &str = "Address not available";
pub const EMAIL_NOT_AVAILABLE: &str = "Email not available";
pub const DEFAULT_LEVEL: &str = "B2";
pub const DEFAULT_PHOTO_URL: &str = "https://images.unsplash.com/photo-1592853598064-0029ebd8de92";
pub const NO_LINK: &str = "#";

/// Treats `None`, empty and whitespace-only values alike.
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn or_fallback(value: Option<&str>, fallback: &str) -> String {
    present(value).unwrap_or(fallback).to_string()
}

/// Picks the winter (0) or summer (1) half of a "winter,summer" value.
fn semester_part(value: Option<&str>, index: usize) -> String {
    present(value)
        .and_then(|v| v.split(',').nth(index))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_SPECIFIED)
        .to_string()
}

/// Card shown on the institution listing.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct InstitutionListing {
    pub id: String,
    pub name: String,
    pub registration: String,
    pub level: String,
    pub application_winter: String,
    pub application_summer: String,
    pub test_winter: String,
    pub test_summer: String,
    pub address: String,
    pub email: String,
    pub photo_url: String,
    pub more_info: String,
}

impl InstitutionListing {
    pub fn from_rows(
        institution: &institutions::Model,
        details: Option<&institution_details::Model>,
    ) -> Self {
        let field = |f: fn(&institution_details::Model) -> Option<&String>| {
            details.and_then(f).map(String::as_str)
        };
        let deadline = field(|d| d.application_deadline.as_ref());
        let test_date = field(|d| d.application_test_date.as_ref());

        Self {
            id: institution.id.clone(),
            name: institution.name.clone(),
            registration: or_fallback(field(|d| d.application_method.as_ref()), NOT_AVAILABLE),
            level: or_fallback(field(|d| d.language_requirements.as_ref()), DEFAULT_LEVEL),
            application_winter: semester_part(deadline, 0),
            application_summer: semester_part(deadline, 1),
            test_winter: semester_part(test_date, 0),
            test_summer: semester_part(test_date, 1),
            address: or_fallback(field(|d| d.address.as_ref()), ADDRESS_NOT_AVAILABLE),
            email: or_fallback(field(|d| d.email.as_ref()), EMAIL_NOT_AVAILABLE),
            photo_url: or_fallback(Some(institution.image_url.as_str()), DEFAULT_PHOTO_URL),
            more_info: or_fallback(field(|d| d.website_url.as_ref()), NO_LINK),
        }
    }
}

/// Detail page: the listing card plus the descriptive fields.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct InstitutionDetailView {
    #[serde(flatten)]
    pub listing: InstitutionListing,
    pub description: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub region: String,
    pub courses: String,
    pub status: String,
}

impl InstitutionDetailView {
    pub fn from_rows(
        institution: &institutions::Model,
        details: Option<&institution_details::Model>,
    ) -> Self {
        let detail = |f: fn(&institution_details::Model) -> Option<&String>| {
            or_fallback(details.and_then(f).map(String::as_str), NOT_AVAILABLE)
        };

        Self {
            listing: InstitutionListing::from_rows(institution, details),
            description: or_fallback(Some(institution.description.as_str()), NOT_AVAILABLE),
            location: or_fallback(Some(institution.location.as_str()), NOT_AVAILABLE),
            kind: or_fallback(Some(institution.kind.as_str()), NOT_AVAILABLE),
            region: detail(|d| d.region.as_ref()),
            courses: detail(|d| d.courses.as_ref()),
            status: detail(|d| d.status.as_ref()),
        }
    }
}

/// Editable detail fields, shared by the admin form and the admin listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct InstitutionDetailFields {
    pub address: Option<String>,
    #[validate(email(message = "Must be a valid email address"))]
    pub email: Option<String>,
    #[validate(url(message = "Must be a valid URL"))]
    pub website_url: Option<String>,
    pub region: Option<String>,
    pub courses: Option<String>,
    pub application_method: Option<String>,
    pub application_deadline: Option<String>,
    pub application_test_date: Option<String>,
    pub language_requirements: Option<String>,
    pub status: Option<String>,
}

impl InstitutionDetailFields {
    pub fn from_model(model: &institution_details::Model) -> Self {
        Self {
            address: model.address.clone(),
            email: model.email.clone(),
            website_url: model.website_url.clone(),
            region: model.region.clone(),
            courses: model.courses.clone(),
            application_method: model.application_method.clone(),
            application_deadline: model.application_deadline.clone(),
            application_test_date: model.application_test_date.clone(),
            language_requirements: model.language_requirements.clone(),
            status: model.status.clone(),
        }
    }

    fn normalize(self) -> Self {
        let clean = |v: Option<String>| {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        };
        Self {
            address: clean(self.address),
            email: clean(self.email),
            website_url: clean(self.website_url),
            region: clean(self.region),
            courses: clean(self.courses),
            application_method: clean(self.application_method),
            application_deadline: clean(self.application_deadline),
            application_test_date: clean(self.application_test_date),
            language_requirements: clean(self.language_requirements),
            status: clean(self.status),
        }
    }
}

/// Admin form covering an institution and its detail row.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct InstitutionForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[serde(rename = "type", default)]
    #[validate(length(min = 1, message = "Type is required"))]
    pub kind: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image_url: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub details: InstitutionDetailFields,
}

impl InstitutionForm {
    /// Trims text and turns blank optional fields into `None` so that
    /// empty inputs fall back to display defaults instead of failing
    /// email/url validation.
    pub fn normalize(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            kind: self.kind.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
            details: self.details.normalize(),
        }
    }
}

/// Raw row pair as the institution editor sees it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InstitutionRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub image_url: String,
    pub details: Option<InstitutionDetailFields>,
}

impl InstitutionRecord {
    pub fn from_rows(
        institution: institutions::Model,
        details: Option<&institution_details::Model>,
    ) -> Self {
        Self {
            id: institution.id,
            name: institution.name,
            description: institution.description,
            location: institution.location,
            kind: institution.kind,
            image_url: institution.image_url,
            details: details.map(InstitutionDetailFields::from_model),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn institution() -> institutions::Model {
        institutions::Model {
            id: "heidelberg".into(),
            name: "Heidelberg".into(),
            description: "".into(),
            location: "Heidelberg".into(),
            kind: "public".into(),
            image_url: "".into(),
            created_at: None,
        }
    }

    fn details() -> institution_details::Model {
        institution_details::Model {
            institution_id: "heidelberg".into(),
            address: Some("Im Neuenheimer Feld 684".into()),
            email: None,
            website_url: Some("https://www.isz.uni-heidelberg.de".into()),
            region: None,
            courses: Some("T, M, W".into()),
            application_method: Some("Online".into()),
            application_deadline: None,
            application_test_date: Some("9/10, 8/4".into()),
            language_requirements: Some("B1".into()),
            status: None,
        }
    }

    #[test]
    fn test_null_deadline_falls_back_for_both_semesters() {
        let listing = InstitutionListing::from_rows(&institution(), Some(&details()));
        assert_eq!(listing.application_winter, NOT_SPECIFIED);
        assert_eq!(listing.application_summer, NOT_SPECIFIED);
        assert_eq!(listing.test_winter, "9/10");
        assert_eq!(listing.test_summer, "8/4");
    }

    #[test]
    fn test_missing_detail_row_uses_every_fallback() {
        let listing = InstitutionListing::from_rows(&institution(), None);
        assert_eq!(listing.registration, NOT_AVAILABLE);
        assert_eq!(listing.level, DEFAULT_LEVEL);
        assert_eq!(listing.address, ADDRESS_NOT_AVAILABLE);
        assert_eq!(listing.email, EMAIL_NOT_AVAILABLE);
        assert_eq!(listing.photo_url, DEFAULT_PHOTO_URL);
        assert_eq!(listing.more_info, NO_LINK);
    }

    #[test]
    fn test_single_part_deadline_leaves_summer_unspecified() {
        let mut d = details();
        d.application_deadline = Some("bis 15 Juli".into());
        let listing = InstitutionListing::from_rows(&institution(), Some(&d));
        assert_eq!(listing.application_winter, "bis 15 Juli");
        assert_eq!(listing.application_summer, NOT_SPECIFIED);
    }

    #[test]
    fn test_detail_view_fallbacks() {
        let view = InstitutionDetailView::from_rows(&institution(), Some(&details()));
        assert_eq!(view.description, NOT_AVAILABLE);
        assert_eq!(view.region, NOT_AVAILABLE);
        assert_eq!(view.courses, "T, M, W");
        assert_eq!(view.listing.level, "B1");
    }

    #[test]
    fn test_form_normalize_blanks_become_none() {
        let form = InstitutionForm {
            name: "  KIT ".into(),
            description: " Technische Universität ".into(),
            location: "Karlsruhe".into(),
            kind: "public".into(),
            image_url: "https://example.org/kit.jpg".into(),
            details: InstitutionDetailFields {
                email: Some("   ".into()),
                website_url: Some("".into()),
                ..Default::default()
            },
        }
        .normalize();
        assert_eq!(form.name, "KIT");
        assert_eq!(form.description, "Technische Universität");
        assert!(form.details.email.is_none());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_form_rejects_bad_email() {
        let form = InstitutionForm {
            name: "KIT".into(),
            description: "Technische Universität".into(),
            location: "Karlsruhe".into(),
            kind: "public".into(),
            image_url: "https://example.org/kit.jpg".into(),
            details: InstitutionDetailFields {
                email: Some("not-an-email".into()),
                ..Default::default()
            },
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            crate::api::error::flatten_validation_errors(&errors),
            "details.email: Must be a valid email address"
        );
    }

    #[test]
    fn test_form_requires_card_fields() {
        let form = InstitutionForm {
            name: "KIT".into(),
            description: "   ".into(),
            location: "Karlsruhe".into(),
            kind: String::new(),
            image_url: "https://example.org/kit.jpg".into(),
            details: InstitutionDetailFields::default(),
        }
        .normalize();
        let message = crate::api::error::flatten_validation_errors(&form.validate().unwrap_err());
        assert!(message.starts_with("description: Description is required; "));
        assert!(message.ends_with("Type is required"));
    }
}
