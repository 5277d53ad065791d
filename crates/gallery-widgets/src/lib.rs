pub mod tile_geometry;
pub mod wrap_grid;

pub use wrap_grid::{WrapGrid, wrap_grid};
