pub mod caption;
pub mod geometry;
pub mod grid_config;
pub mod loading_state;

pub use geometry::{Point, Rect, Size, Vector};
pub use grid_config::{Axis, GridConfig};
pub use loading_state::{LoadingEvent, LoadingState};
