use serde::{Deserialize, Serialize};

use crate::error::{Result, ThresholdError};
use crate::signal::SketchSignal;

/// Aspect and size cut-offs for the derived sketch features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SketchThresholds {
    /// width / height above this is wide.
    pub wide: f64,
    /// width / height below this is tall.
    pub tall: f64,
    /// Open interval of ratios considered roughly square.
    pub squarish: (f64, f64),
    /// Both sides under this are small.
    pub small: f64,
}

impl Default for SketchThresholds {
    fn default() -> Self {
        Self {
            wide: 2.0,
            tall: 0.5,
            squarish: (0.7, 1.4),
            small: 80.0,
        }
    }
}

impl SketchThresholds {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("wide", self.wide),
            ("tall", self.tall),
            ("squarish.low", self.squarish.0),
            ("squarish.high", self.squarish.1),
            ("small", self.small),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ThresholdError::NotPositive { name, value });
            }
        }

        let (low, high) = self.squarish;
        if low >= high {
            return Err(ThresholdError::EmptySquarishBand { low, high });
        }

        if self.tall >= self.wide {
            return Err(ThresholdError::TallNotBelowWide {
                tall: self.tall,
                wide: self.wide,
            });
        }

        Ok(())
    }
}

/// Features derived once per signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SketchFeatures {
    pub aspect_ratio: f64,
    pub wide: bool,
    pub tall: bool,
    pub squarish: bool,
    pub small: bool,
}

impl SketchFeatures {
    /// Degenerate boxes follow float semantics: a zero height with positive
    /// width is infinitely wide, and 0/0 is NaN so no aspect flag is set.
    pub fn of(signal: &SketchSignal, thresholds: &SketchThresholds) -> Self {
        let (width, height) = signal.size();
        let aspect_ratio = width / height;
        let (low, high) = thresholds.squarish;
        Self {
            aspect_ratio,
            wide: aspect_ratio > thresholds.wide,
            tall: aspect_ratio < thresholds.tall,
            squarish: aspect_ratio > low && aspect_ratio < high,
            small: width < thresholds.small && height < thresholds.small,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::GeoShape;
    use pretty_assertions::assert_eq;

    fn features(width: f64, height: f64) -> SketchFeatures {
        SketchFeatures::of(
            &SketchSignal::geo(GeoShape::Rectangle, width, height),
            &SketchThresholds::default(),
        )
    }

    #[test]
    fn small_square() {
        let f = features(60.0, 55.0);
        assert!(f.small && f.squarish);
        assert!(!f.wide && !f.tall);
    }

    #[test]
    fn aspect_boundaries_are_exclusive() {
        assert!(!features(200.0, 100.0).wide);
        assert!(!features(50.0, 100.0).tall);
        assert!(!features(70.0, 100.0).squarish);
        assert!(!features(80.0, 10.0).small);
    }

    #[test]
    fn zero_height_is_infinitely_wide() {
        let f = features(120.0, 0.0);
        assert_eq!(f.aspect_ratio, f64::INFINITY);
        assert!(f.wide);
        assert!(!f.squarish);
    }

    #[test]
    fn empty_box_has_no_aspect() {
        let f = features(0.0, 0.0);
        assert!(f.aspect_ratio.is_nan());
        assert!(!f.wide && !f.tall && !f.squarish);
        assert!(f.small);
    }

    #[test]
    fn defaults_are_valid() {
        SketchThresholds::default().validate().unwrap();
    }

    #[test]
    fn rejects_inverted_square_band() {
        let thresholds = SketchThresholds {
            squarish: (1.4, 0.7),
            ..SketchThresholds::default()
        };
        assert_eq!(
            thresholds.validate(),
            Err(ThresholdError::EmptySquarishBand {
                low: 1.4,
                high: 0.7
            })
        );
    }

    #[test]
    fn rejects_nan_small() {
        let thresholds = SketchThresholds {
            small: f64::NAN,
            ..SketchThresholds::default()
        };
        assert!(matches!(
            thresholds.validate(),
            Err(ThresholdError::NotPositive { name: "small", .. })
        ));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let thresholds: SketchThresholds = serde_json::from_str(r#"{"small": 64}"#).unwrap();
        assert_eq!(thresholds.small, 64.0);
        assert_eq!(thresholds.squarish, (0.7, 1.4));
    }
}
