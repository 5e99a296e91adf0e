use intent_catalog::{Catalog, CatalogEntry};
use intent_sketch::SketchClassification;
use intent_text::MatchVerdict;
use serde::Serialize;

use crate::geometry::{Bounds, ShapeId};

/// Where a component chosen from a prompt ends up.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum PlacementScope {
    /// Next free slot of the placement grid.
    Fresh,
    /// Replace the sketch shape that triggered the prompt, taking its box.
    ReplaceSketch { shape: ShapeId, bounds: Bounds },
}

/// A candidate list awaiting the user's pick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prompt<'c> {
    pub candidates: Vec<&'c CatalogEntry>,
    /// Set when nothing matched and the whole catalog is offered instead.
    pub full_catalog: bool,
    pub scope: PlacementScope,
}

impl<'c> Prompt<'c> {
    /// Look up a picked name among the offered candidates only.
    pub fn find(&self, name: &str) -> Option<&'c CatalogEntry> {
        self.candidates
            .iter()
            .copied()
            .find(|entry| entry.name == name)
    }

    pub fn names(&self) -> Vec<&'c str> {
        self.candidates
            .iter()
            .map(|entry| entry.name.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", content = "detail", rename_all = "snake_case")]
pub enum Resolution<'c> {
    Place(&'c CatalogEntry),
    Disambiguate(Prompt<'c>),
}

impl<'c> Resolution<'c> {
    pub fn prompt(&self) -> Option<&Prompt<'c>> {
        match self {
            Resolution::Place(_) => None,
            Resolution::Disambiguate(prompt) => Some(prompt),
        }
    }
}

/// Turns verdicts and classifications into UI actions. The user is never
/// left with an empty list: zero candidates offers the whole catalog.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionPolicy<'c> {
    catalog: &'c Catalog,
}

impl<'c> ResolutionPolicy<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    pub fn for_verdict(&self, verdict: &MatchVerdict<'c>) -> Resolution<'c> {
        match verdict.confident() {
            Some(entry) => Resolution::Place(entry),
            None => Resolution::Disambiguate(self.prompt(verdict.candidates(), PlacementScope::Fresh)),
        }
    }

    /// Sketches always go through the picker, even with a single candidate.
    pub fn for_sketch(
        &self,
        shape: ShapeId,
        bounds: Bounds,
        classification: SketchClassification<'c>,
    ) -> Resolution<'c> {
        Resolution::Disambiguate(self.prompt(
            classification.candidates,
            PlacementScope::ReplaceSketch { shape, bounds },
        ))
    }

    fn prompt(&self, candidates: Vec<&'c CatalogEntry>, scope: PlacementScope) -> Prompt<'c> {
        if candidates.is_empty() {
            log::debug!("No candidates, offering all {} components", self.catalog.len());
            return Prompt {
                candidates: self.catalog.iter().collect(),
                full_catalog: true,
                scope,
            };
        }
        Prompt {
            candidates,
            full_catalog: false,
            scope,
        }
    }
}
