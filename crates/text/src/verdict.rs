use intent_catalog::CatalogEntry;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::score::MatchField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Fuzzy,
    Ambiguous,
    #[serde(rename = "none")]
    NoMatch,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Fuzzy => "fuzzy",
            MatchKind::Ambiguous => "ambiguous",
            MatchKind::NoMatch => "none",
        }
    }
}

/// Outcome of resolving one phrase.
///
/// `Exact` and `Fuzzy` carry exactly one entry, `Ambiguous` carries 2..=5
/// entries best-first, `NoMatch` carries none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchVerdict<'c> {
    Exact(&'c CatalogEntry),
    Fuzzy(&'c CatalogEntry),
    Ambiguous(Vec<&'c CatalogEntry>),
    NoMatch,
}

impl<'c> MatchVerdict<'c> {
    pub fn kind(&self) -> MatchKind {
        match self {
            MatchVerdict::Exact(_) => MatchKind::Exact,
            MatchVerdict::Fuzzy(_) => MatchKind::Fuzzy,
            MatchVerdict::Ambiguous(_) => MatchKind::Ambiguous,
            MatchVerdict::NoMatch => MatchKind::NoMatch,
        }
    }

    pub fn candidates(&self) -> Vec<&'c CatalogEntry> {
        match self {
            MatchVerdict::Exact(entry) | MatchVerdict::Fuzzy(entry) => vec![*entry],
            MatchVerdict::Ambiguous(entries) => entries.clone(),
            MatchVerdict::NoMatch => Vec::new(),
        }
    }

    pub fn names(&self) -> Vec<&'c str> {
        self.candidates()
            .into_iter()
            .map(|entry| entry.name.as_str())
            .collect()
    }

    /// The single entry to place without asking, if there is one.
    pub fn confident(&self) -> Option<&'c CatalogEntry> {
        match self {
            MatchVerdict::Exact(entry) | MatchVerdict::Fuzzy(entry) => Some(entry),
            MatchVerdict::Ambiguous(_) | MatchVerdict::NoMatch => None,
        }
    }
}

impl Serialize for MatchVerdict<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MatchVerdict", 2)?;
        state.serialize_field("type", &self.kind())?;
        state.serialize_field("matches", &self.candidates())?;
        state.end()
    }
}

/// One row of the fuzzy ranking.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ScoredEntry<'c> {
    pub entry: &'c CatalogEntry,
    pub distance: f64,
    pub field: MatchField,
}
