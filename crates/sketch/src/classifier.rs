use intent_catalog::{Catalog, CatalogEntry};
use serde::Serialize;

use crate::error::Result;
use crate::features::{SketchFeatures, SketchThresholds};
use crate::signal::SketchSignal;
use crate::table;

/// Upper bound on suggestions for a single sketch.
pub const MAX_CANDIDATES: usize = 4;

/// Ordered suggestions for one sketch, with the branch that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SketchClassification<'c> {
    pub candidates: Vec<&'c CatalogEntry>,
    pub rule: &'static str,
}

impl<'c> SketchClassification<'c> {
    pub fn names(&self) -> Vec<&'c str> {
        self.candidates
            .iter()
            .map(|entry| entry.name.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

pub struct SketchClassifier<'c> {
    catalog: &'c Catalog,
    thresholds: SketchThresholds,
}

impl<'c> SketchClassifier<'c> {
    pub fn new(catalog: &'c Catalog, thresholds: SketchThresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self {
            catalog,
            thresholds,
        })
    }

    pub fn builtin() -> SketchClassifier<'static> {
        SketchClassifier {
            catalog: Catalog::builtin(),
            thresholds: SketchThresholds::default(),
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn thresholds(&self) -> &SketchThresholds {
        &self.thresholds
    }

    pub fn features(&self, signal: &SketchSignal) -> SketchFeatures {
        SketchFeatures::of(signal, &self.thresholds)
    }

    /// Never fails: unknown primitives get a generic guess, and authored
    /// names missing from the catalog are dropped.
    pub fn classify(&self, signal: &SketchSignal) -> SketchClassification<'c> {
        let features = self.features(signal);
        let rule = table::lookup(signal, &features);

        let mut candidates = self.catalog.select(rule.names);
        candidates.truncate(MAX_CANDIDATES);

        log::debug!(
            "sketch {:?} (ratio {:.2}) -> {} {:?}",
            signal,
            features.aspect_ratio,
            rule.label,
            candidates.iter().map(|e| e.name.as_str()).collect::<Vec<_>>()
        );

        SketchClassification {
            candidates,
            rule: rule.label,
        }
    }
}
