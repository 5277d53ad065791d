//! Deciding which rows and columns have left the viewport and re-homing them.
//!
//! A group is re-homed by giving every tile in it an absolute `top`/`left`
//! that puts it right next to the opposite edge of the visible window. That
//! override composes with the container translation, so the container itself
//! never needs to jump.

use shared::{Axis, GridConfig, Size};

use crate::{
    layout::Anchor,
    surface::Surface,
    tween::{self, TweenVars},
};

/// Per-tick geometry of the grid against the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapMetrics {
    pub tile_size: f64,
    pub container: Size,
    pub viewport: Size,
}

impl WrapMetrics {
    pub fn new(grid: &GridConfig, viewport: Size) -> Self {
        Self {
            tile_size: grid.tile_size,
            container: grid.container_size(),
            viewport,
        }
    }

    /// Distance from the container edge to the viewport edge when centered.
    pub fn trigger_point(&self, axis: Axis) -> f64 {
        (axis.of(self.container) - axis.of(self.viewport)) / 2.0
    }

    /// Whole container lengths scrolled, given the container's rect offset.
    pub fn wrap_multiple(&self, axis: Axis, container_offset: f64) -> f64 {
        ((container_offset + self.trigger_point(axis)) / axis.of(self.container)).floor()
    }
}

/// Vertical branch selector.
///
/// `Up` means the offset grew, which moves content down the screen. Only the
/// branch pairing matters: `Down` re-homes rows at the bottom, `Up` at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalDirection {
    Up,
    Down,
}

/// Horizontal branch selector: `Left` re-homes columns on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
}

pub fn vertical_direction(last_y: f64, current_y: f64) -> VerticalDirection {
    if current_y > last_y {
        VerticalDirection::Up
    } else {
        VerticalDirection::Down
    }
}

pub fn horizontal_direction(last_x: f64, current_x: f64) -> HorizontalDirection {
    if current_x > last_x {
        HorizontalDirection::Right
    } else {
        HorizontalDirection::Left
    }
}

/// One group moved during a tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Relocation {
    pub label: String,
    /// New `top` (rows) or `left` (columns) of every tile in the group.
    pub offset: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WrapOutcome {
    pub vertical: VerticalDirection,
    pub horizontal: HorizontalDirection,
    pub rows: Vec<Relocation>,
    pub cols: Vec<Relocation>,
}

impl WrapOutcome {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }
}

/// Rows whose top edge went above the viewport move below the last row.
pub fn move_to_bottom<S: Surface + ?Sized>(
    surface: &mut S,
    row_anchors: &[Anchor],
    metrics: &WrapMetrics,
    multiple: f64,
) -> Vec<Relocation> {
    relocate_leading(surface, Axis::Vertical, row_anchors, metrics, multiple)
}

/// Rows whose bottom edge went below the viewport move above the first row.
pub fn move_to_top<S: Surface + ?Sized>(
    surface: &mut S,
    row_anchors: &[Anchor],
    metrics: &WrapMetrics,
    multiple: f64,
) -> Vec<Relocation> {
    relocate_trailing(surface, Axis::Vertical, row_anchors, metrics, multiple)
}

/// Columns whose left edge went past the viewport move after the last column.
pub fn move_to_right<S: Surface + ?Sized>(
    surface: &mut S,
    col_anchors: &[Anchor],
    metrics: &WrapMetrics,
    multiple: f64,
) -> Vec<Relocation> {
    relocate_leading(surface, Axis::Horizontal, col_anchors, metrics, multiple)
}

/// Columns whose right edge went past the viewport move before the first column.
pub fn move_to_left<S: Surface + ?Sized>(
    surface: &mut S,
    col_anchors: &[Anchor],
    metrics: &WrapMetrics,
    multiple: f64,
) -> Vec<Relocation> {
    relocate_trailing(surface, Axis::Horizontal, col_anchors, metrics, multiple)
}

fn relocate_leading<S: Surface + ?Sized>(
    surface: &mut S,
    axis: Axis,
    anchors: &[Anchor],
    metrics: &WrapMetrics,
    multiple: f64,
) -> Vec<Relocation> {
    let trigger = metrics.trigger_point(axis);
    let span = axis.of(metrics.container);
    let mut moved = Vec::new();

    for (i, anchor) in anchors.iter().enumerate() {
        let rect = surface.bounding_rect(anchor.node);
        let edge = match axis {
            Axis::Horizontal => rect.x,
            Axis::Vertical => rect.y,
        };

        if edge < -trigger {
            let offset = span * -multiple + metrics.tile_size * i as f64;
            moved.push(apply_group(surface, axis, anchor, offset));
        }
    }

    moved
}

fn relocate_trailing<S: Surface + ?Sized>(
    surface: &mut S,
    axis: Axis,
    anchors: &[Anchor],
    metrics: &WrapMetrics,
    multiple: f64,
) -> Vec<Relocation> {
    let trigger = metrics.trigger_point(axis);
    let span = axis.of(metrics.container);
    let visible = axis.of(metrics.viewport);
    let mut moved = Vec::new();

    for (i, anchor) in anchors.iter().rev().enumerate() {
        let rect = surface.bounding_rect(anchor.node);
        let edge = match axis {
            Axis::Horizontal => rect.x,
            Axis::Vertical => rect.y,
        };

        if edge + metrics.tile_size > trigger + visible {
            let offset = span * -multiple - metrics.tile_size * (i + 1) as f64;
            moved.push(apply_group(surface, axis, anchor, offset));
        }
    }

    moved
}

fn apply_group<S: Surface + ?Sized>(
    surface: &mut S,
    axis: Axis,
    anchor: &Anchor,
    offset: f64,
) -> Relocation {
    let vars = match axis {
        Axis::Horizontal => TweenVars::new().left(offset),
        Axis::Vertical => TweenVars::new().top(offset),
    };

    for node in surface.query_class(&anchor.label) {
        tween::set(surface, node, &vars);
    }

    tracing::trace!(group = %anchor.label, offset, "Relocated group");

    Relocation {
        label: anchor.label.clone(),
        offset,
    }
}
