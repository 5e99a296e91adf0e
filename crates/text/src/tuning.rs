use serde::{Deserialize, Serialize};

use crate::error::{Result, TuningError};

/// Relative importance of each searchable field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldWeights {
    pub name: f64,
    pub aliases: f64,
    pub keywords: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            name: 3.0,
            aliases: 2.0,
            keywords: 1.0,
        }
    }
}

impl FieldWeights {
    fn max(&self) -> f64 {
        self.name.max(self.aliases).max(self.keywords)
    }

    /// Exponent applied to a field distance. The strongest field keeps its
    /// distance as-is; weaker fields push imperfect matches further away.
    pub(crate) fn exponents(&self) -> [f64; 3] {
        let max = self.max();
        [self.name / max, self.aliases / max, self.keywords / max]
    }
}

/// Thresholds and weights for fuzzy phrase matching.
///
/// All distances live in `[0, 1]`, lower is closer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchTuning {
    pub weights: FieldWeights,
    /// Entries farther than this are not plausible at all.
    pub accept: f64,
    /// The best entry must be closer than this to be auto-picked...
    pub tight: f64,
    /// ...and the runner-up (if any) farther than this.
    pub runner_up: f64,
    /// Band for the ambiguous candidate set.
    pub loose: f64,
    pub max_candidates: usize,
    /// Added when only the phrase stripped of filler words matches.
    pub filler_penalty: f64,
    /// Added when a single word of a multi-word phrase matches.
    pub token_penalty: f64,
    pub stop_words: Vec<String>,
}

const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "add", "insert", "put", "place", "create", "make", "give", "show", "me",
    "i", "we", "us", "my", "want", "need", "like", "please", "some", "new", "another", "here",
    "there", "to", "of", "for", "with", "and", "in", "can", "could", "would", "you", "let's",
    "lets",
];

impl Default for MatchTuning {
    fn default() -> Self {
        Self {
            weights: FieldWeights::default(),
            accept: 0.6,
            tight: 0.2,
            runner_up: 0.35,
            loose: 0.45,
            max_candidates: 5,
            filler_penalty: 0.05,
            token_penalty: 0.25,
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl MatchTuning {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", self.weights.name),
            ("aliases", self.weights.aliases),
            ("keywords", self.weights.keywords),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(TuningError::NonPositiveWeight { field, value });
            }
        }

        for (name, value) in [
            ("accept", self.accept),
            ("tight", self.tight),
            ("runner_up", self.runner_up),
            ("loose", self.loose),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(TuningError::ThresholdOutOfRange { name, value });
            }
        }

        if !(self.tight < self.loose && self.loose <= self.accept) {
            return Err(TuningError::ThresholdOrder {
                tight: self.tight,
                loose: self.loose,
                accept: self.accept,
            });
        }

        if self.runner_up <= self.tight {
            return Err(TuningError::RunnerUpTooClose {
                runner_up: self.runner_up,
                tight: self.tight,
            });
        }

        if !(2..=5).contains(&self.max_candidates) {
            return Err(TuningError::CandidateCapOutOfRange(self.max_candidates));
        }

        for (name, value) in [
            ("filler_penalty", self.filler_penalty),
            ("token_penalty", self.token_penalty),
        ] {
            if !(0.0..1.0).contains(&value) {
                return Err(TuningError::PenaltyOutOfRange { name, value });
            }
        }

        Ok(())
    }

    pub(crate) fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.iter().any(|stop| stop == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        MatchTuning::default().validate().unwrap();
    }

    #[test]
    fn rejects_inverted_bands() {
        let tuning = MatchTuning {
            tight: 0.5,
            loose: 0.45,
            ..MatchTuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::ThresholdOrder { .. })
        ));
    }

    #[test]
    fn rejects_runner_up_inside_tight_band() {
        let tuning = MatchTuning {
            runner_up: 0.1,
            ..MatchTuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::RunnerUpTooClose { .. })
        ));
    }

    #[test]
    fn rejects_zero_weight() {
        let mut tuning = MatchTuning::default();
        tuning.weights.keywords = 0.0;
        assert_eq!(
            tuning.validate(),
            Err(TuningError::NonPositiveWeight {
                field: "keywords",
                value: 0.0
            })
        );
    }

    #[test]
    fn rejects_single_candidate_cap() {
        let tuning = MatchTuning {
            max_candidates: 1,
            ..MatchTuning::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::CandidateCapOutOfRange(1)));
    }

    #[test]
    fn rejects_candidate_cap_above_five() {
        let tuning = MatchTuning {
            max_candidates: 6,
            ..MatchTuning::default()
        };
        assert_eq!(tuning.validate(), Err(TuningError::CandidateCapOutOfRange(6)));

        let widest = MatchTuning {
            max_candidates: 5,
            ..MatchTuning::default()
        };
        assert_eq!(widest.validate(), Ok(()));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let tuning: MatchTuning = serde_json::from_str(r#"{"tight": 0.15}"#).unwrap();
        assert_eq!(tuning.tight, 0.15);
        assert_eq!(tuning.loose, 0.45);
        assert_eq!(tuning.weights, FieldWeights::default());
    }

    #[test]
    fn exponents_scale_to_strongest_field() {
        let [name, aliases, keywords] = FieldWeights::default().exponents();
        assert_eq!(name, 1.0);
        assert!((aliases - 2.0 / 3.0).abs() < 1e-12);
        assert!((keywords - 1.0 / 3.0).abs() < 1e-12);
    }
}
