use crate::entities::articles;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ArticleCategory {
    Exams,
    Visa,
    Living,
    Language,
}

impl ArticleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleCategory::Exams => "exams",
            ArticleCategory::Visa => "visa",
            ArticleCategory::Living => "living",
            ArticleCategory::Language => "language",
        }
    }
}

impl FromStr for ArticleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exams" => Ok(ArticleCategory::Exams),
            "visa" => Ok(ArticleCategory::Visa),
            "living" => Ok(ArticleCategory::Living),
            "language" => Ok(ArticleCategory::Language),
            other => Err(format!("Unknown article category '{}'", other)),
        }
    }
}

/// Category tab on the information page; `all` shows everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(ArticleCategory),
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ArticleView {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: Option<String>,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl From<articles::Model> for ArticleView {
    fn from(m: articles::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            excerpt: m.excerpt,
            content: m.content,
            image_url: m.image_url,
            category: m.category,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct ArticleForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    #[validate(url(message = "Must be a valid image URL"))]
    pub image_url: Option<String>,
    pub category: ArticleCategory,
}

impl ArticleForm {
    /// Trims text; a blank image URL means "no image".
    pub fn normalize(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            excerpt: self.excerpt.trim().to_string(),
            content: self.content.trim().to_string(),
            image_url: self
                .image_url
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty()),
            category: self.category,
        }
    }
}
