//! Seams to the canvas and the picker UI. The core only issues commands and
//! asks questions through these; rendering stays on the other side.

use intent_catalog::CatalogEntry;
use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Point, ShapeId};
use crate::resolution::Prompt;

/// A request to put a component on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub component: String,
    pub bounds: Bounds,
}

impl Placement {
    pub fn new(entry: &CatalogEntry, bounds: Bounds) -> Self {
        Self {
            component: entry.name.clone(),
            bounds,
        }
    }
}

/// The drawing surface the session places components on.
pub trait Canvas {
    /// Center of the visible area in page coordinates.
    fn viewport_center(&self) -> Point;

    fn place(&mut self, placement: &Placement);

    fn remove_shape(&mut self, shape: &ShapeId);
}

/// What the user did with a candidate list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "choice", content = "name", rename_all = "lowercase")]
pub enum Choice {
    Selected(String),
    Dismissed,
}

/// Shows a prompt and reports the user's choice.
pub trait DisambiguationSurface {
    fn present(&mut self, prompt: &Prompt<'_>) -> Choice;
}

/// A transcript from the voice collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    /// Interim transcripts may still change and are ignored.
    #[serde(default = "default_final")]
    pub is_final: bool,
}

fn default_final() -> bool {
    true
}

impl Transcript {
    pub fn finalized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }

    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }
}
