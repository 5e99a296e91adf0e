//! Resolution policy: turns text verdicts and sketch classifications into
//! canvas actions, and runs an interactive session against a canvas and a
//! picker.

mod collab;
mod error;
mod geometry;
mod layout;
mod ledger;
mod profile;
mod resolution;
mod session;
mod settle;

pub use collab::{Canvas, Choice, DisambiguationSurface, Placement, Transcript};
pub use error::{PolicyError, ProfileError, Result};
pub use geometry::{Bounds, Point, ShapeId};
pub use layout::PlacementLayout;
pub use ledger::ShapeLedger;
pub use profile::{IntentProfile, BUILTIN_PROFILES};
pub use resolution::{PlacementScope, Prompt, Resolution, ResolutionPolicy};
pub use session::{Outcome, Session};
pub use settle::{SettleDetector, DEFAULT_SETTLE_WINDOW};
