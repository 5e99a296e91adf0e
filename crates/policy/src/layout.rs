use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Point};

/// Staggered grid for components placed from voice, so consecutive
/// placements around the same viewport center do not stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlacementLayout {
    pub box_width: f64,
    pub box_height: f64,
    pub columns: usize,
    pub column_spacing: f64,
    pub row_spacing: f64,
}

impl Default for PlacementLayout {
    fn default() -> Self {
        Self {
            box_width: 300.0,
            box_height: 200.0,
            columns: 4,
            column_spacing: 340.0,
            row_spacing: 240.0,
        }
    }
}

impl PlacementLayout {
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("box_width", self.box_width),
            ("box_height", self.box_height),
            ("column_spacing", self.column_spacing),
            ("row_spacing", self.row_spacing),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(format!("{name} must be positive, got {value}"));
            }
        }
        if self.columns == 0 {
            return Err("columns must be at least 1".to_string());
        }
        Ok(())
    }

    /// Box for the `index`-th fresh placement around `center`.
    ///
    /// Columns are centered on the viewport; rows start half a row above it.
    pub fn slot(&self, index: usize, center: Point) -> Bounds {
        let columns = self.columns.max(1);
        let col = (index % columns) as f64;
        let row = (index / columns) as f64;
        let mid_column = (columns as f64 - 1.0) / 2.0;

        let offset_x = (col - mid_column) * self.column_spacing;
        let offset_y = (row - 0.5) * self.row_spacing;
        Bounds::centered(
            Point::new(center.x + offset_x, center.y + offset_y),
            self.box_width,
            self.box_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_row_spreads_across_four_columns() {
        let layout = PlacementLayout::default();
        let center = Point::new(0.0, 0.0);
        let xs: Vec<f64> = (0..4).map(|i| layout.slot(i, center).x).collect();
        assert_eq!(xs, vec![-660.0, -320.0, 20.0, 360.0]);
        assert_eq!(layout.slot(0, center).y, -220.0);
    }

    #[test]
    fn fifth_placement_wraps_to_next_row() {
        let layout = PlacementLayout::default();
        let slot = layout.slot(4, Point::new(500.0, 400.0));
        assert_eq!(slot, Bounds::new(500.0 - 150.0 - 510.0, 400.0 - 100.0 + 120.0, 300.0, 200.0));
    }

    #[test]
    fn rejects_zero_columns() {
        let layout = PlacementLayout {
            columns: 0,
            ..PlacementLayout::default()
        };
        assert!(layout.validate().is_err());
    }
}
