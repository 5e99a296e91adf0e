use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Named primitives produced by the canvas shape tools.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeoShape {
    Rectangle,
    Ellipse,
    Oval,
    Triangle,
    Diamond,
    Pentagon,
    Hexagon,
    Octagon,
    Star,
    ArrowRight,
    ArrowLeft,
    ArrowUp,
    ArrowDown,
    CheckBox,
    XBox,
    Cloud,
    Heart,
    /// Anything the toolkit draws that has no dedicated mapping.
    Other(String),
}

impl GeoShape {
    pub fn as_str(&self) -> &str {
        match self {
            GeoShape::Rectangle => "rectangle",
            GeoShape::Ellipse => "ellipse",
            GeoShape::Oval => "oval",
            GeoShape::Triangle => "triangle",
            GeoShape::Diamond => "diamond",
            GeoShape::Pentagon => "pentagon",
            GeoShape::Hexagon => "hexagon",
            GeoShape::Octagon => "octagon",
            GeoShape::Star => "star",
            GeoShape::ArrowRight => "arrow-right",
            GeoShape::ArrowLeft => "arrow-left",
            GeoShape::ArrowUp => "arrow-up",
            GeoShape::ArrowDown => "arrow-down",
            GeoShape::CheckBox => "check-box",
            GeoShape::XBox => "x-box",
            GeoShape::Cloud => "cloud",
            GeoShape::Heart => "heart",
            GeoShape::Other(name) => name,
        }
    }
}

impl fmt::Display for GeoShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for GeoShape {
    fn from(name: &str) -> Self {
        match name {
            "rectangle" => GeoShape::Rectangle,
            "ellipse" => GeoShape::Ellipse,
            "oval" => GeoShape::Oval,
            "triangle" => GeoShape::Triangle,
            "diamond" => GeoShape::Diamond,
            "pentagon" => GeoShape::Pentagon,
            "hexagon" => GeoShape::Hexagon,
            "octagon" => GeoShape::Octagon,
            "star" => GeoShape::Star,
            "arrow-right" => GeoShape::ArrowRight,
            "arrow-left" => GeoShape::ArrowLeft,
            "arrow-up" => GeoShape::ArrowUp,
            "arrow-down" => GeoShape::ArrowDown,
            "check-box" => GeoShape::CheckBox,
            "x-box" => GeoShape::XBox,
            "cloud" => GeoShape::Cloud,
            "heart" => GeoShape::Heart,
            other => GeoShape::Other(other.to_string()),
        }
    }
}

impl FromStr for GeoShape {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(GeoShape::from(s))
    }
}

impl Serialize for GeoShape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GeoShape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(GeoShape::from(raw.as_str()))
    }
}

/// Settled geometry of one finished shape.
///
/// The classifier treats every signal as final; debouncing in-progress
/// shapes is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SketchSignal {
    #[serde(rename = "geo")]
    Geometric {
        shape: GeoShape,
        width: f64,
        height: f64,
    },
    #[serde(rename = "draw")]
    Freehand {
        width: f64,
        height: f64,
        #[serde(default)]
        closed: bool,
        #[serde(default)]
        point_count: usize,
    },
}

impl SketchSignal {
    pub fn geo(shape: GeoShape, width: f64, height: f64) -> Self {
        SketchSignal::Geometric {
            shape,
            width,
            height,
        }
    }

    pub fn freehand(width: f64, height: f64, closed: bool) -> Self {
        SketchSignal::Freehand {
            width,
            height,
            closed,
            point_count: 0,
        }
    }

    pub fn size(&self) -> (f64, f64) {
        match self {
            SketchSignal::Geometric { width, height, .. }
            | SketchSignal::Freehand { width, height, .. } => (*width, *height),
        }
    }
}
