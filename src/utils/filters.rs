//! In-memory filtering of the small public lists. Every request recomputes
//! the filtered view from the full list; there is no paging.

use crate::models::article::{ArticleView, CategoryFilter};
use crate::models::document::DocumentView;
use crate::models::institution::InstitutionListing;

/// The text a search term is matched against.
pub trait Searchable {
    fn search_text(&self) -> &str;
}

impl Searchable for InstitutionListing {
    fn search_text(&self) -> &str {
        &self.name
    }
}

impl Searchable for ArticleView {
    fn search_text(&self) -> &str {
        &self.title
    }
}

impl Searchable for DocumentView {
    fn search_text(&self) -> &str {
        &self.name
    }
}

/// Case-insensitive substring match; a blank term matches everything.
pub fn matches_search(text: &str, term: &str) -> bool {
    let term = term.trim();
    term.is_empty() || text.to_lowercase().contains(&term.to_lowercase())
}

pub fn filter_by_search<T: Searchable>(items: Vec<T>, term: Option<&str>) -> Vec<T> {
    match term {
        Some(term) if !term.trim().is_empty() => items
            .into_iter()
            .filter(|item| matches_search(item.search_text(), term))
            .collect(),
        _ => items,
    }
}

/// B1/B2 checkboxes. Selected levels combine with OR; none selected shows all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelFilter {
    pub b1: bool,
    pub b2: bool,
}

impl LevelFilter {
    pub fn matches(&self, level: &str) -> bool {
        if !self.b1 && !self.b2 {
            return true;
        }
        (self.b1 && level == "B1") || (self.b2 && level == "B2")
    }

    pub fn apply(&self, items: Vec<InstitutionListing>) -> Vec<InstitutionListing> {
        items.into_iter().filter(|i| self.matches(&i.level)).collect()
    }
}

pub fn filter_by_category(items: Vec<ArticleView>, filter: CategoryFilter) -> Vec<ArticleView> {
    match filter {
        CategoryFilter::All => items,
        CategoryFilter::Only(category) => items
            .into_iter()
            .filter(|a| a.category == category.as_str())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::article::ArticleCategory;
    use chrono::Utc;

    fn listing(name: &str, level: &str) -> InstitutionListing {
        InstitutionListing {
            id: name.to_lowercase(),
            name: name.to_string(),
            registration: String::new(),
            level: level.to_string(),
            application_winter: String::new(),
            application_summer: String::new(),
            test_winter: String::new(),
            test_summer: String::new(),
            address: String::new(),
            email: String::new(),
            photo_url: String::new(),
            more_info: String::new(),
        }
    }

    fn sample() -> Vec<InstitutionListing> {
        vec![
            listing("Heidelberg", "B2"),
            listing("Karlsruhe Institut", "B1"),
            listing("Studienkolleg Bayern", "B2"),
            listing("Kassel", "C1"),
        ]
    }

    fn article(title: &str, category: ArticleCategory) -> ArticleView {
        ArticleView {
            id: title.to_string(),
            title: title.to_string(),
            excerpt: String::new(),
            content: String::new(),
            image_url: None,
            category: category.as_str().to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_search_results_are_matching_subset() {
        for term in ["", "k", "KA", "institut", "bayern", "zzz", " heid "] {
            let all = sample();
            let filtered = filter_by_search(sample(), Some(term));
            assert!(filtered.len() <= all.len());
            for item in &filtered {
                assert!(all.contains(item));
                assert!(
                    item.name
                        .to_lowercase()
                        .contains(&term.trim().to_lowercase())
                );
            }
            // nothing matching is dropped
            let expected = all
                .iter()
                .filter(|i| i.name.to_lowercase().contains(&term.trim().to_lowercase()))
                .count();
            assert_eq!(filtered.len(), expected);
        }
    }

    #[test]
    fn test_both_levels_equal_union_of_each() {
        let b1 = LevelFilter { b1: true, b2: false }.apply(sample());
        let b2 = LevelFilter { b1: false, b2: true }.apply(sample());
        let both = LevelFilter { b1: true, b2: true }.apply(sample());

        assert_eq!(both.len(), b1.len() + b2.len());
        for item in b1.iter().chain(b2.iter()) {
            assert!(both.contains(item));
        }
        assert!(both.iter().all(|i| i.level == "B1" || i.level == "B2"));
    }

    #[test]
    fn test_no_level_selected_shows_all() {
        assert_eq!(LevelFilter::default().apply(sample()).len(), sample().len());
    }

    #[test]
    fn test_category_filter() {
        let items = vec![
            article("Visa steps", ArticleCategory::Visa),
            article("FSP guide", ArticleCategory::Exams),
            article("Aufnahmeprüfung", ArticleCategory::Exams),
        ];
        let exams = filter_by_category(items.clone(), CategoryFilter::Only(ArticleCategory::Exams));
        assert_eq!(exams.len(), 2);
        assert_eq!(filter_by_category(items, CategoryFilter::All).len(), 3);
    }
}
