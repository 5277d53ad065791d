//! Wrap-around panning for a fixed grid of image tiles.
//!
//! A [`Panner`] lays out an R×C grid inside a container node, centers the
//! container in the viewport and translates it on every wheel tick. Rows and
//! columns that leave the viewport are re-homed at the opposite edge, so the
//! grid looks infinite while the node count stays fixed.
//!
//! Everything goes through the [`Surface`] trait. [`Scene`] is the retained
//! in-memory implementation the desktop widget draws from.

pub mod layout;
pub mod panner;
pub mod scene;
pub mod style;
pub mod surface;
pub mod transform;
pub mod tween;
pub mod wrap;

pub use layout::{Anchor, GridLayout, Tile, build_grid};
pub use panner::{DeltaMode, EventStatus, ListenerHandle, PanError, Panner, WheelEvent};
pub use scene::{DisplayItem, Scene};
pub use style::{Length, Prop};
pub use surface::{ElementKind, NodeId, Surface};
pub use transform::{Matrix, TransformError};
pub use tween::TweenVars;
pub use wrap::{HorizontalDirection, Relocation, VerticalDirection, WrapMetrics, WrapOutcome};
