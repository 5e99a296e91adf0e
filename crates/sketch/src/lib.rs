//! Sketch intent classification: a finished shape on the canvas (a named
//! primitive or a freehand stroke) becomes an ordered list of components the
//! user most likely meant.

mod classifier;
mod error;
mod features;
mod signal;
mod table;

pub use classifier::{SketchClassification, SketchClassifier, MAX_CANDIDATES};
pub use error::{Result, ThresholdError};
pub use features::{SketchFeatures, SketchThresholds};
pub use signal::{GeoShape, SketchSignal};
