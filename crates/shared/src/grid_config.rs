use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size};

/// One of the two pan axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn of(self, size: Size) -> f64 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }
}

/// Fixed dimensions of the wrapping grid.
///
/// Rows and columns are 1-based everywhere they are exposed, tiles are square.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub tile_size: f64,
}

impl GridConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            tile_size: 240.0,
        }
    }

    pub fn with_tile_size(mut self, tile_size: f64) -> Self {
        self.tile_size = tile_size;
        self
    }

    pub fn tile_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Size of the container holding every tile.
    pub fn container_size(&self) -> Size {
        Size::new(
            self.tile_size * self.cols as f64,
            self.tile_size * self.rows as f64,
        )
    }

    /// `(left, top)` of a cell inside the container.
    pub fn cell_position(&self, row: usize, col: usize) -> Point {
        Point::new(
            self.tile_size * col.saturating_sub(1) as f64,
            self.tile_size * row.saturating_sub(1) as f64,
        )
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.rows == 0 || self.cols == 0 {
            return Err("Grid must have at least one row and one column".to_string());
        }

        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err("Tile size must be a positive number of pixels".to_string());
        }

        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(10, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_config_creation() {
        let config = GridConfig::default();
        assert_eq!(config.rows, 10);
        assert_eq!(config.cols, 10);
        assert_eq!(config.tile_size, 240.0);
        assert_eq!(config.tile_count(), 100);
    }

    #[test]
    fn test_container_size() {
        let config = GridConfig::new(4, 6).with_tile_size(100.0);
        assert_eq!(config.container_size(), Size::new(600.0, 400.0));
    }

    #[test]
    fn test_cell_position() {
        let config = GridConfig::new(3, 3).with_tile_size(50.0);

        assert_eq!(config.cell_position(1, 1), Point::new(0.0, 0.0));
        assert_eq!(config.cell_position(1, 3), Point::new(100.0, 0.0));
        assert_eq!(config.cell_position(3, 2), Point::new(50.0, 100.0));
    }

    #[test]
    fn test_validation() {
        assert!(GridConfig::default().validate().is_ok());

        let empty = GridConfig::new(0, 10);
        assert!(empty.validate().is_err());

        let flat = GridConfig::new(10, 10).with_tile_size(0.0);
        assert!(flat.validate().is_err());

        let nan = GridConfig::new(10, 10).with_tile_size(f64::NAN);
        assert!(nan.validate().is_err());
    }
}
