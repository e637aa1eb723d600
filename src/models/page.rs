use crate::api::error::AppError;
use crate::entities::page_content;
use crate::utils::validation::{is_youtube_url, youtube_embed_url};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// Logical pages backed by a `page_content` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageName {
    AboutUs,
    Information,
    Documents,
}

impl PageName {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageName::AboutUs => "uber-uns",
            PageName::Information => "informationen",
            PageName::Documents => "unterlagen",
        }
    }
}

impl fmt::Display for PageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// About us
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct AboutUsForm {
    #[validate(length(min = 10, message = "Mission statement must be at least 10 characters"))]
    pub mission: String,
    #[validate(length(min = 10, message = "Story must be at least 10 characters"))]
    pub story: String,
    #[validate(length(min = 1, message = "Creator name is required"))]
    pub creator_name: String,
    #[validate(length(min = 1, message = "Creator title is required"))]
    pub creator_title: String,
    #[validate(length(min = 10, message = "Creator bio must be at least 10 characters"))]
    pub creator_bio: String,
    #[validate(url(message = "Must be a valid image URL"))]
    pub creator_image: String,
}

impl AboutUsForm {
    pub fn from_row(row: Option<&page_content::Model>) -> Self {
        match row {
            Some(r) => Self {
                mission: text(&r.mission),
                story: text(&r.story),
                creator_name: text(&r.creator_name),
                creator_title: text(&r.creator_title),
                creator_bio: text(&r.creator_bio),
                creator_image: text(&r.creator_image),
            },
            None => Self::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Information page
// ---------------------------------------------------------------------------

/// `title` is stored in the `mission` column and `content` in `story`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InformationForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub video_url: String,
}

impl InformationForm {
    pub fn from_row(row: Option<&page_content::Model>) -> Self {
        match row {
            Some(r) => Self {
                title: text(&r.mission),
                content: text(&r.story),
                video_url: text(&r.video_url),
            },
            None => Self::default(),
        }
    }
}

impl Validate for InformationForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let url = self.video_url.trim();
        if !url.is_empty() && !is_youtube_url(url) {
            errors.add(
                "video_url",
                ValidationError::new("youtube_url")
                    .with_message(Cow::from("Please enter a valid YouTube URL")),
            );
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InformationPage {
    #[serde(flatten)]
    pub form: InformationForm,
    pub embed_url: Option<String>,
}

impl From<InformationForm> for InformationPage {
    fn from(form: InformationForm) -> Self {
        let embed_url = youtube_embed_url(&form.video_url);
        Self { form, embed_url }
    }
}

// ---------------------------------------------------------------------------
// Documents page: FAQs and preparation steps
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PreparationStep {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub required_items: Vec<String>,
}

impl Default for PreparationStep {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            required_items: vec![String::new()],
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListEditError {
    #[error("You need to keep at least one FAQ")]
    LastFaq,
    #[error("You need to keep at least one preparation step")]
    LastStep,
    #[error("Step must have at least one required item")]
    LastStepItem,
    #[error("{what} {index} does not exist")]
    OutOfRange { what: &'static str, index: usize },
}

impl From<ListEditError> for AppError {
    fn from(e: ListEditError) -> Self {
        match e {
            ListEditError::OutOfRange { .. } => AppError::NotFound(e.to_string()),
            _ => AppError::Validation(e.to_string()),
        }
    }
}

/// Form state of the documents page. Every list keeps at least one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DocumentPageForm {
    pub faqs: Vec<FaqItem>,
    pub preparation_steps: Vec<PreparationStep>,
}

impl Default for DocumentPageForm {
    fn default() -> Self {
        Self {
            faqs: vec![FaqItem::default()],
            preparation_steps: vec![PreparationStep::default()],
        }
    }
}

fn decode_list<T: serde::de::DeserializeOwned + Default>(value: Option<&serde_json::Value>) -> Vec<T> {
    let list = value
        .cloned()
        .and_then(|v| serde_json::from_value::<Vec<T>>(v).ok())
        .unwrap_or_default();
    if list.is_empty() { vec![T::default()] } else { list }
}

impl DocumentPageForm {
    /// Stored lists that are absent, malformed or empty load as one blank entry.
    pub fn from_row(row: Option<&page_content::Model>) -> Self {
        let Some(r) = row else {
            return Self::default();
        };
        let mut steps: Vec<PreparationStep> = decode_list(r.preparation_steps.as_ref());
        for step in &mut steps {
            if step.required_items.is_empty() {
                step.required_items.push(String::new());
            }
        }
        Self {
            faqs: decode_list(r.faqs.as_ref()),
            preparation_steps: steps,
        }
    }

    pub fn add_faq(&mut self) {
        self.faqs.push(FaqItem::default());
    }

    pub fn remove_faq(&mut self, index: usize) -> Result<(), ListEditError> {
        if index >= self.faqs.len() {
            return Err(ListEditError::OutOfRange { what: "FAQ", index });
        }
        if self.faqs.len() == 1 {
            return Err(ListEditError::LastFaq);
        }
        self.faqs.remove(index);
        Ok(())
    }

    pub fn add_step(&mut self) {
        self.preparation_steps.push(PreparationStep::default());
    }

    pub fn remove_step(&mut self, index: usize) -> Result<(), ListEditError> {
        if index >= self.preparation_steps.len() {
            return Err(ListEditError::OutOfRange { what: "Step", index });
        }
        if self.preparation_steps.len() == 1 {
            return Err(ListEditError::LastStep);
        }
        self.preparation_steps.remove(index);
        Ok(())
    }

    fn step_mut(&mut self, index: usize) -> Result<&mut PreparationStep, ListEditError> {
        self.preparation_steps
            .get_mut(index)
            .ok_or(ListEditError::OutOfRange { what: "Step", index })
    }

    pub fn add_step_item(&mut self, step: usize) -> Result<(), ListEditError> {
        self.step_mut(step)?.required_items.push(String::new());
        Ok(())
    }

    pub fn remove_step_item(&mut self, step: usize, item: usize) -> Result<(), ListEditError> {
        let items = &mut self.step_mut(step)?.required_items;
        if item >= items.len() {
            return Err(ListEditError::OutOfRange {
                what: "Required item",
                index: item,
            });
        }
        if items.len() == 1 {
            return Err(ListEditError::LastStepItem);
        }
        items.remove(item);
        Ok(())
    }

    /// Full-replace submissions must already satisfy the list invariants.
    pub fn check_lists(&self) -> Result<(), ListEditError> {
        if self.faqs.is_empty() {
            return Err(ListEditError::LastFaq);
        }
        if self.preparation_steps.is_empty() {
            return Err(ListEditError::LastStep);
        }
        if self
            .preparation_steps
            .iter()
            .any(|s| s.required_items.is_empty())
        {
            return Err(ListEditError::LastStepItem);
        }
        Ok(())
    }

    pub fn faqs_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.faqs).unwrap_or_default()
    }

    pub fn steps_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.preparation_steps).unwrap_or_default()
    }
}
