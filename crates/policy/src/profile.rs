use intent_sketch::SketchThresholds;
use intent_text::MatchTuning;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;
use std::time::Duration;

use crate::error::ProfileError;
use crate::layout::PlacementLayout;
use crate::settle::DEFAULT_SETTLE_WINDOW;

const BUILTIN_DEFAULT: &str = include_str!("../../../profiles/default.json");
const BUILTIN_STRICT: &str = include_str!("../../../profiles/strict.json");

pub const BUILTIN_PROFILES: &[&str] = &["default", "strict"];

type Result<T> = std::result::Result<T, ProfileError>;

/// Everything tunable about a session: matcher bands, sketch cut-offs,
/// placement grid and settle window.
#[derive(Clone, Debug, PartialEq)]
pub struct IntentProfile {
    name: String,
    description: Option<String>,
    text: MatchTuning,
    sketch: SketchThresholds,
    placement: PlacementLayout,
    settle_window: Duration,
}

#[derive(Debug, Default, Deserialize)]
struct RawProfile {
    #[serde(default)]
    schema_version: Option<u64>,
    name: Option<String>,
    description: Option<String>,
    #[serde(default)]
    text: MatchTuning,
    #[serde(default)]
    sketch: SketchThresholds,
    #[serde(default)]
    placement: PlacementLayout,
    settle_window_ms: Option<u64>,
}

impl IntentProfile {
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "default" => Self::from_bytes("default", BUILTIN_DEFAULT.as_bytes(), None).ok(),
            "strict" => Self::from_bytes("strict", BUILTIN_STRICT.as_bytes(), Some("default")).ok(),
            _ => None,
        }
    }

    /// The bundled default profile, or plain defaults if it fails to load.
    pub fn default_profile() -> Self {
        Self::builtin("default").unwrap_or_else(|| {
            log::warn!("Bundled default profile failed to load, using compiled defaults");
            Self {
                name: "default".to_string(),
                description: None,
                text: MatchTuning::default(),
                sketch: SketchThresholds::default(),
                placement: PlacementLayout::default(),
                settle_window: DEFAULT_SETTLE_WINDOW,
            }
        })
    }

    /// Load an overlay file on top of the bundled default. The profile is
    /// named after the file stem unless the file sets a name.
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("custom");
        Self::from_bytes(name, &bytes, Some("default"))
    }

    pub fn from_bytes(profile_name: &str, bytes: &[u8], base: Option<&str>) -> Result<Self> {
        let overlay = parse_value(profile_name, bytes)?;
        let merged = match base {
            Some(base_name) => {
                let mut merged = builtin_value(base_name)?;
                // The overlay's key decides the name unless it sets one itself.
                if let Value::Object(map) = &mut merged {
                    map.remove("name");
                }
                merge_values(&mut merged, overlay);
                merged
            }
            None => overlay,
        };

        let raw: RawProfile =
            serde_json::from_value(merged).map_err(|source| ProfileError::Parse {
                name: profile_name.to_string(),
                source,
            })?;
        Self::from_raw(raw, profile_name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn text(&self) -> &MatchTuning {
        &self.text
    }

    pub fn sketch(&self) -> &SketchThresholds {
        &self.sketch
    }

    pub fn placement(&self) -> &PlacementLayout {
        &self.placement
    }

    pub fn settle_window(&self) -> Duration {
        self.settle_window
    }

    fn from_raw(raw: RawProfile, fallback_name: &str) -> Result<Self> {
        if let Some(version) = raw.schema_version {
            if version != 1 {
                return Err(ProfileError::UnsupportedSchema(version));
            }
        }

        let name = raw
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| fallback_name.to_string());

        raw.text.validate().map_err(|source| ProfileError::Text {
            name: name.clone(),
            source,
        })?;
        raw.sketch.validate().map_err(|source| ProfileError::Sketch {
            name: name.clone(),
            source,
        })?;
        raw.placement
            .validate()
            .map_err(|reason| ProfileError::Placement {
                name: name.clone(),
                reason,
            })?;

        let settle_window = match raw.settle_window_ms {
            Some(0) => return Err(ProfileError::SettleWindow(name)),
            Some(ms) => Duration::from_millis(ms),
            None => DEFAULT_SETTLE_WINDOW,
        };

        Ok(Self {
            name,
            description: raw.description,
            text: raw.text,
            sketch: raw.sketch,
            placement: raw.placement,
            settle_window,
        })
    }
}

impl Default for IntentProfile {
    fn default() -> Self {
        Self::default_profile()
    }
}

fn builtin_value(name: &str) -> Result<Value> {
    match name {
        "default" => parse_value(name, BUILTIN_DEFAULT.as_bytes()),
        "strict" => parse_value(name, BUILTIN_STRICT.as_bytes()),
        other => Err(ProfileError::UnknownBase(other.to_string())),
    }
}

fn parse_value(name: &str, bytes: &[u8]) -> Result<Value> {
    let value: Value = serde_json::from_slice(bytes).map_err(|source| ProfileError::Parse {
        name: name.to_string(),
        source,
    })?;
    validate_profile_value(&value)?;
    Ok(value)
}

/// Objects merge key by key; anything else in the overlay replaces the base.
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

fn validate_profile_value(value: &Value) -> Result<()> {
    const TOP: &[&str] = &[
        "schema_version",
        "name",
        "description",
        "text",
        "sketch",
        "placement",
        "settle_window_ms",
    ];
    const TEXT: &[&str] = &[
        "weights",
        "accept",
        "tight",
        "runner_up",
        "loose",
        "max_candidates",
        "filler_penalty",
        "token_penalty",
        "stop_words",
    ];
    const WEIGHTS: &[&str] = &["name", "aliases", "keywords"];
    const SKETCH: &[&str] = &["wide", "tall", "squarish", "small"];
    const PLACEMENT: &[&str] = &[
        "box_width",
        "box_height",
        "columns",
        "column_spacing",
        "row_spacing",
    ];

    fn unknown_keys(unknown: &mut Vec<String>, obj: &Map<String, Value>, base: &str, allowed: &[&str]) {
        for key in obj.keys() {
            if !allowed.contains(&key.as_str()) {
                if base.is_empty() {
                    unknown.push(key.clone());
                } else {
                    unknown.push(format!("{base}.{key}"));
                }
            }
        }
    }

    let Value::Object(root) = value else {
        return Err(ProfileError::NotAnObject);
    };

    let mut unknown = Vec::new();
    unknown_keys(&mut unknown, root, "", TOP);

    if let Some(Value::Object(text)) = root.get("text") {
        unknown_keys(&mut unknown, text, "text", TEXT);
        if let Some(Value::Object(weights)) = text.get("weights") {
            unknown_keys(&mut unknown, weights, "text.weights", WEIGHTS);
        }
    }
    if let Some(Value::Object(sketch)) = root.get("sketch") {
        unknown_keys(&mut unknown, sketch, "sketch", SKETCH);
    }
    if let Some(Value::Object(placement)) = root.get("placement") {
        unknown_keys(&mut unknown, placement, "placement", PLACEMENT);
    }

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(ProfileError::UnknownFields(unknown))
    }
}
