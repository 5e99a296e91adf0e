use intent_catalog::{fold, Catalog};
use nucleo_matcher::Matcher;
use std::cmp::Ordering;

use crate::error::Result;
use crate::score::{IndexedEntry, Query};
use crate::tuning::MatchTuning;
use crate::verdict::{MatchVerdict, ScoredEntry};

/// Resolves free-text phrases against a catalog.
///
/// Resolution is pure: the same phrase against the same catalog and tuning
/// always yields the same verdict.
pub struct TextMatcher<'c> {
    catalog: &'c Catalog,
    indexed: Vec<IndexedEntry>,
    tuning: MatchTuning,
}

impl<'c> TextMatcher<'c> {
    pub fn new(catalog: &'c Catalog, tuning: MatchTuning) -> Result<Self> {
        tuning.validate()?;
        let indexed = catalog.iter().map(IndexedEntry::new).collect();
        Ok(Self {
            catalog,
            indexed,
            tuning,
        })
    }

    /// Matcher over the builtin catalog with default tuning.
    pub fn builtin() -> TextMatcher<'static> {
        let catalog = Catalog::builtin();
        TextMatcher {
            catalog,
            indexed: catalog.iter().map(IndexedEntry::new).collect(),
            tuning: MatchTuning::default(),
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn tuning(&self) -> &MatchTuning {
        &self.tuning
    }

    pub fn resolve(&self, phrase: &str) -> MatchVerdict<'c> {
        let normalized = normalize(phrase);
        if normalized.is_empty() {
            return MatchVerdict::NoMatch;
        }

        if let Some(entry) = self.catalog.find_ci(&normalized) {
            log::debug!("'{normalized}' is an exact match for {}", entry.name);
            return MatchVerdict::Exact(entry);
        }

        let ranked = self.rank_normalized(&normalized);
        let Some(top) = ranked.first() else {
            log::debug!("'{normalized}' matched nothing");
            return MatchVerdict::NoMatch;
        };

        let standout = ranked
            .get(1)
            .map_or(true, |second| second.distance > self.tuning.runner_up);
        if top.distance < self.tuning.tight && standout {
            log::debug!(
                "'{normalized}' confidently matched {} ({:.3})",
                top.entry.name,
                top.distance
            );
            return MatchVerdict::Fuzzy(top.entry);
        }

        let close: Vec<_> = ranked
            .iter()
            .filter(|scored| scored.distance < self.tuning.loose)
            .take(self.tuning.max_candidates)
            .map(|scored| scored.entry)
            .collect();

        log::debug!(
            "'{normalized}' has {} candidate(s) inside the loose band",
            close.len()
        );
        match close.len() {
            0 => MatchVerdict::NoMatch,
            1 => MatchVerdict::Fuzzy(close[0]),
            _ => MatchVerdict::Ambiguous(close),
        }
    }

    /// Plausible entries best-first, excluding anything beyond `accept`.
    pub fn rank(&self, phrase: &str) -> Vec<ScoredEntry<'c>> {
        let normalized = normalize(phrase);
        if normalized.is_empty() {
            return Vec::new();
        }
        self.rank_normalized(&normalized)
    }

    fn rank_normalized(&self, normalized: &str) -> Vec<ScoredEntry<'c>> {
        let query = Query::new(normalized, &self.tuning);
        let exponents = self.tuning.weights.exponents();
        let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);

        let mut scored: Vec<(usize, ScoredEntry<'c>)> = self
            .catalog
            .iter()
            .zip(&self.indexed)
            .enumerate()
            .filter_map(|(idx, (entry, indexed))| {
                let (distance, field) = indexed.distance(&query, exponents, &mut matcher);
                log::trace!("{:>16} {distance:.3} via {field:?}", entry.name);
                (distance <= self.tuning.accept).then_some((
                    idx,
                    ScoredEntry {
                        entry,
                        distance,
                        field,
                    },
                ))
            })
            .collect();

        scored.sort_by(|(a_idx, a), (b_idx, b)| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
                .then(a_idx.cmp(b_idx))
        });

        scored.into_iter().map(|(_, scored)| scored).collect()
    }
}

/// Trim and case-fold a phrase.
pub fn normalize(phrase: &str) -> String {
    fold(phrase.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use intent_catalog::{CatalogEntry, Category};
    use pretty_assertions::assert_eq;

    fn overlays() -> Catalog {
        Catalog::from_entries(vec![
            CatalogEntry::new("Tooltip", Category::Overlay).keywords(["hover", "help"]),
            CatalogEntry::new("Hover Card", Category::Overlay).keywords(["hover", "preview"]),
            CatalogEntry::new("Badge", Category::Display).aliases(["chip"]),
        ])
        .unwrap()
    }

    fn eight_sharing(keyword: &str) -> Catalog {
        let names = ["Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel"];
        Catalog::from_entries(
            names
                .iter()
                .map(|name| CatalogEntry::new(*name, Category::Display).keywords([keyword]))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn ambiguous_verdict_never_exceeds_five() {
        let catalog = eight_sharing("shared");
        let matcher = TextMatcher::new(&catalog, MatchTuning::default()).unwrap();
        let verdict = matcher.resolve("shared");
        assert_eq!(verdict.kind(), crate::MatchKind::Ambiguous);
        assert_eq!(
            verdict.names(),
            vec!["Alpha", "Bravo", "Charlie", "Delta", "Echo"]
        );

        let wide = MatchTuning {
            max_candidates: 8,
            ..MatchTuning::default()
        };
        assert!(matches!(
            TextMatcher::new(&catalog, wide),
            Err(crate::TuningError::CandidateCapOutOfRange(8))
        ));
    }

    #[test]
    fn normalize_trims_and_folds() {
        assert_eq!(normalize("  Date PICKER \n"), "date picker");
    }

    #[test]
    fn exact_alias_short_circuits() {
        let catalog = overlays();
        let matcher = TextMatcher::new(&catalog, MatchTuning::default()).unwrap();
        assert_eq!(matcher.resolve("CHIP").names(), vec!["Badge"]);
        assert_eq!(matcher.resolve("CHIP").kind(), crate::MatchKind::Exact);
    }

    #[test]
    fn shared_keyword_is_ambiguous_in_catalog_order() {
        let catalog = overlays();
        let matcher = TextMatcher::new(&catalog, MatchTuning::default()).unwrap();
        let verdict = matcher.resolve("hover");
        assert_eq!(verdict, MatchVerdict::Ambiguous(vec![&catalog.entries()[0], &catalog.entries()[1]]));
    }

    #[test]
    fn ranking_breaks_ties_by_catalog_order() {
        let catalog = overlays();
        let matcher = TextMatcher::new(&catalog, MatchTuning::default()).unwrap();
        let ranked = matcher.rank("hover");
        assert_eq!(ranked[0].entry.name, "Tooltip");
        assert_eq!(ranked[1].entry.name, "Hover Card");
        assert_eq!(ranked[0].distance, ranked[1].distance);
    }

    #[test]
    fn rejects_invalid_tuning() {
        let catalog = overlays();
        let tuning = MatchTuning {
            loose: 0.1,
            ..MatchTuning::default()
        };
        assert!(TextMatcher::new(&catalog, tuning).is_err());
    }

    #[test]
    fn blank_phrase_ranks_nothing() {
        assert!(TextMatcher::builtin().rank("   ").is_empty());
    }
}
