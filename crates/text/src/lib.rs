//! Text intent matching: turns a transcribed phrase into a verdict over the
//! component catalog (exact, confident fuzzy, ambiguous, or no match).

mod error;
mod matcher;
mod score;
mod tuning;
mod verdict;

pub use error::{Result, TuningError};
pub use matcher::{normalize, TextMatcher};
pub use score::MatchField;
pub use tuning::{FieldWeights, MatchTuning};
pub use verdict::{MatchKind, MatchVerdict, ScoredEntry};
