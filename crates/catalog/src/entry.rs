use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Coarse grouping of components. Informational only; never used for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Form,
    Display,
    Overlay,
    Interactive,
    Feedback,
    Navigation,
    Layout,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Form,
        Category::Display,
        Category::Overlay,
        Category::Interactive,
        Category::Feedback,
        Category::Navigation,
        Category::Layout,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Form => "form",
            Category::Display => "display",
            Category::Overlay => "overlay",
            Category::Interactive => "interactive",
            Category::Feedback => "feedback",
            Category::Navigation => "navigation",
            Category::Layout => "layout",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let folded = value.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == folded)
            .ok_or_else(|| CatalogError::UnknownCategory(value.to_string()))
    }
}

/// One placeable component: display name, exact synonyms, loose keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    /// Exact synonyms of `name`.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Loosely related terms; only ever used for fuzzy proximity.
    #[serde(default)]
    pub keywords: Vec<String>,
    pub category: Category,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            keywords: Vec::new(),
            category,
        }
    }

    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Name followed by aliases: every string that counts as an exact hit.
    pub fn surfaces(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Overlay".parse::<Category>().unwrap(), Category::Overlay);
        assert_eq!(" layout ".parse::<Category>().unwrap(), Category::Layout);
        assert!("widget".parse::<Category>().is_err());
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Navigation).unwrap();
        assert_eq!(json, "\"navigation\"");
    }

    #[test]
    fn surfaces_lists_name_then_aliases() {
        let entry = CatalogEntry::new("Button", Category::Form).aliases(["btn", "click"]);
        let surfaces: Vec<&str> = entry.surfaces().collect();
        assert_eq!(surfaces, vec!["Button", "btn", "click"]);
    }

    #[test]
    fn missing_aliases_and_keywords_default_to_empty() {
        let entry: CatalogEntry =
            serde_json::from_str(r#"{"name": "Card", "category": "layout"}"#).unwrap();
        assert!(entry.aliases.is_empty());
        assert!(entry.keywords.is_empty());
    }
}
