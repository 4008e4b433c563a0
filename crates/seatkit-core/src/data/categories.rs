//! Category catalog module
//!
//! This module provides:
//! - Preset guest categories with default rank weights
//! - Zone and person colours per category
//! - Lookup by free-text label with graceful fallback
//!
//! People and seat zones refer to categories by label only. A label that is
//! not in the catalog resolves to [`CategoryStyle::default`] rather than an error.

use serde::{Deserialize, Serialize};

/// Preset category labels and their default weights, highest first.
pub const CATEGORY_PRESETS: &[(&str, i64)] = &[
    ("Head of Government", 95),
    ("Foreign Guest & Interpreter", 90),
    ("Legislator", 85),
    ("Minister", 83),
    ("Mayor", 80),
    ("Industry Representative", 78),
    ("Cabinet Staff", 75),
    ("Forum Moderator", 70),
    ("Forum Panelist", 70),
    ("Ministry Staff", 60),
    ("City Staff", 55),
    ("Team: Youth Program", 53),
    ("Team: Grant Recipients", 52),
    ("Team: Heritage Village", 51),
    ("Team: Other", 50),
    ("Land Development Office", 40),
    ("Organizer", 30),
    ("Staff", 0),
];

/// Zone colours assigned round-robin to new categories.
const DEFAULT_COLORS: &[&str] = &[
    "#ef4444", "#f97316", "#f59e0b", "#84cc16", "#10b981", "#06b6d4", "#3b82f6", "#6366f1",
    "#8b5cf6", "#d946ef", "#ec4899", "#f43f5e",
];

/// Zone colour used when a label has no catalog entry
pub const FALLBACK_ZONE_COLOR: &str = "#cbd5e1";

/// Person colour used when a label has no catalog entry
pub const FALLBACK_PERSON_COLOR: &str = "#ffffff";

/// A guest category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Catalog-unique identifier
    pub id: String,
    /// Free-text label people and zones refer to
    pub label: String,
    /// Suggested rank score for people in this category
    pub weight: i64,
    /// Colour of seat zones tagged with this category
    pub color: String,
    /// Background colour of people in this category
    pub person_color: String,
}

/// Resolved presentation and weighting for a label
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStyle {
    pub weight: i64,
    pub color: String,
    pub person_color: String,
}

impl Default for CategoryStyle {
    fn default() -> Self {
        Self {
            weight: 0,
            color: FALLBACK_ZONE_COLOR.to_string(),
            person_color: FALLBACK_PERSON_COLOR.to_string(),
        }
    }
}

impl From<&Category> for CategoryStyle {
    fn from(category: &Category) -> Self {
        Self {
            weight: category.weight,
            color: category.color.clone(),
            person_color: category.person_color.clone(),
        }
    }
}

/// Category catalog
///
/// Keeps insertion order so presets list the way they were defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
    next_id: u64,
}

impl CategoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            next_id: 0,
        }
    }

    /// Create a catalog seeded with [`CATEGORY_PRESETS`]
    pub fn with_presets() -> Self {
        let mut catalog = Self::new();
        for (label, weight) in CATEGORY_PRESETS {
            let color = DEFAULT_COLORS[catalog.categories.len() % DEFAULT_COLORS.len()];
            catalog.add_category(*label, *weight, color, FALLBACK_PERSON_COLOR);
        }
        catalog
    }

    /// Add a category and return its id
    pub fn add_category(
        &mut self,
        label: impl Into<String>,
        weight: i64,
        color: impl Into<String>,
        person_color: impl Into<String>,
    ) -> String {
        let id = format!("cat-{}", self.next_id);
        self.next_id += 1;
        self.categories.push(Category {
            id: id.clone(),
            label: label.into(),
            weight,
            color: color.into(),
            person_color: person_color.into(),
        });
        id
    }

    /// Get a mutable reference to a category by id
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == id)
    }

    /// Remove a category by id
    pub fn remove_category(&mut self, id: &str) -> Option<Category> {
        let index = self.categories.iter().position(|c| c.id == id)?;
        Some(self.categories.remove(index))
    }

    /// Find a category by its label (exact match)
    pub fn get_by_label(&self, label: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.label == label)
    }

    /// Resolve a label to its style, falling back to defaults for unknown labels
    pub fn style_for(&self, label: &str) -> CategoryStyle {
        match self.get_by_label(label) {
            Some(category) => category.into(),
            None => {
                tracing::trace!("No catalog entry for category '{}', using defaults", label);
                CategoryStyle::default()
            }
        }
    }

    /// Suggested rank score for a person in the given category
    pub fn suggested_score(&self, label: &str) -> i64 {
        self.style_for(label).weight
    }

    /// Iterate categories in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::with_presets()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_loaded_in_order() {
        let catalog = CategoryCatalog::with_presets();
        assert_eq!(catalog.len(), CATEGORY_PRESETS.len());
        let first = catalog.iter().next().unwrap();
        assert_eq!(first.label, "Head of Government");
        assert_eq!(first.weight, 95);
        assert_eq!(first.color, "#ef4444");
    }

    #[test]
    fn test_colors_cycle() {
        let catalog = CategoryCatalog::with_presets();
        let colors: Vec<_> = catalog.iter().map(|c| c.color.clone()).collect();
        assert_eq!(colors[0], colors[DEFAULT_COLORS.len()]);
    }

    #[test]
    fn test_unknown_label_degrades() {
        let catalog = CategoryCatalog::with_presets();
        let style = catalog.style_for("Not a category");
        assert_eq!(style, CategoryStyle::default());
        assert_eq!(catalog.suggested_score("Not a category"), 0);
    }
}
