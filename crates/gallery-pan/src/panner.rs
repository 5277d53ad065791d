//! Pan state and the wheel handler that drives it.

use gallery_manifest::Manifest;
use shared::{Axis, GridConfig, Vector};
use thiserror::Error;

use crate::{
    layout::{self, Anchor, Tile},
    style::{Length, Prop},
    surface::{ElementKind, NodeId, Surface},
    transform::TransformError,
    tween::{self, TweenVars},
    wrap::{self, HorizontalDirection, VerticalDirection, WrapMetrics, WrapOutcome},
};

/// Damping applied to raw wheel deltas.
pub const SCROLL_SPEED: f64 = 0.25;

/// Pixels per line for line-based wheel deltas.
pub const LINE_HEIGHT: f64 = 16.0;

pub const CONTAINER_CLASS: &str = "main";

#[derive(Debug, Error)]
pub enum PanError {
    #[error("Failed to read the container offset: {0}")]
    Transform(#[from] TransformError),
    #[error("The container has not been created yet")]
    MissingContainer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeltaMode {
    #[default]
    Pixel,
    Line,
}

/// A wheel or two-finger trackpad gesture tick, DOM sign convention:
/// positive `delta_y` scrolls down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelEvent {
    pub delta_x: f64,
    pub delta_y: f64,
    pub mode: DeltaMode,
}

impl WheelEvent {
    pub fn pixels(delta_x: f64, delta_y: f64) -> Self {
        Self {
            delta_x,
            delta_y,
            mode: DeltaMode::Pixel,
        }
    }

    pub fn lines(delta_x: f64, delta_y: f64) -> Self {
        Self {
            delta_x,
            delta_y,
            mode: DeltaMode::Line,
        }
    }

    pub fn pixel_delta(&self) -> Vector {
        let delta = Vector::new(self.delta_x, self.delta_y);
        match self.mode {
            DeltaMode::Pixel => delta,
            DeltaMode::Line => delta.scale(LINE_HEIGHT),
        }
    }
}

/// Whether the event was consumed; `Captured` also means "prevent default".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Captured,
    Ignored,
}

/// Returned by [`Panner::listen`], hand it back to [`Panner::unlisten`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerHandle(u64);

/// Owns the container, the anchors and the last observed offset.
#[derive(Debug, Clone)]
pub struct Panner {
    grid: GridConfig,
    scroll_speed: f64,
    container: Option<NodeId>,
    tiles: Vec<Tile>,
    row_anchors: Vec<Anchor>,
    col_anchors: Vec<Anchor>,
    last_scroll: Vector,
    listener: Option<ListenerHandle>,
    next_listener: u64,
}

impl Panner {
    pub fn new(grid: GridConfig) -> Self {
        Self {
            grid,
            scroll_speed: SCROLL_SPEED,
            container: None,
            tiles: Vec::new(),
            row_anchors: Vec::new(),
            col_anchors: Vec::new(),
            last_scroll: Vector::ZERO,
            listener: None,
            next_listener: 0,
        }
    }

    pub fn with_scroll_speed(mut self, scroll_speed: f64) -> Self {
        self.scroll_speed = scroll_speed;
        self
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn scroll_speed(&self) -> f64 {
        self.scroll_speed
    }

    pub fn container(&self) -> Option<NodeId> {
        self.container
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn row_anchors(&self) -> &[Anchor] {
        &self.row_anchors
    }

    pub fn col_anchors(&self) -> &[Anchor] {
        &self.col_anchors
    }

    pub fn last_scroll(&self) -> Vector {
        self.last_scroll
    }

    /// Sizes the container to the grid and centers it in the viewport.
    ///
    /// The container is created on first use.
    pub fn center_container<S: Surface + ?Sized>(&mut self, surface: &mut S) -> NodeId {
        let container = *self.container.get_or_insert_with(|| {
            let node = surface.create_element(ElementKind::Div);
            surface.add_class(node, CONTAINER_CLASS);
            node
        });

        let size = self.grid.container_size();
        surface.set_style(container, Prop::Width, Length::Px(size.width));
        surface.set_style(container, Prop::Height, Length::Px(size.height));
        surface.set_style(container, Prop::Left, Length::Percent(50.0));
        surface.set_style(container, Prop::Top, Length::Percent(50.0));
        tween::set(
            surface,
            container,
            &TweenVars::new().x_percent(-50.0).y_percent(-50.0),
        );

        container
    }

    /// Lays out every tile and records the row and column anchors.
    pub fn build_grid<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        manifest: &Manifest,
    ) -> Result<&[Tile], PanError> {
        let container = self.container.ok_or(PanError::MissingContainer)?;
        let grid = layout::build_grid(surface, container, &self.grid, manifest);

        self.tiles = grid.tiles;
        self.row_anchors = grid.row_anchors;
        self.col_anchors = grid.col_anchors;

        Ok(&self.tiles)
    }

    /// Starts accepting wheel events. Any previous registration is replaced.
    pub fn listen(&mut self) -> ListenerHandle {
        let handle = ListenerHandle(self.next_listener);
        self.next_listener += 1;
        self.listener = Some(handle);
        handle
    }

    /// Stops accepting wheel events. Returns `false` for a stale handle.
    pub fn unlisten(&mut self, handle: ListenerHandle) -> bool {
        if self.listener == Some(handle) {
            self.listener = None;
            true
        } else {
            false
        }
    }

    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    /// Translates the container by the damped wheel delta, then wraps.
    pub fn on_wheel<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        event: &WheelEvent,
    ) -> Result<EventStatus, PanError> {
        if !self.is_listening() {
            return Ok(EventStatus::Ignored);
        }
        let container = self.container.ok_or(PanError::MissingContainer)?;

        let current = surface.current_offset(container)?;
        let next = current - event.pixel_delta().scale(self.scroll_speed);
        tween::set(
            surface,
            container,
            &TweenVars::new()
                .x(next.x)
                .y(next.y)
                .x_percent(0.0)
                .y_percent(0.0),
        );

        let current_x = tween::get_property(surface, container, Prop::X);
        let current_y = tween::get_property(surface, container, Prop::Y);
        self.evaluate_wrap(
            surface,
            self.last_scroll.y,
            current_y,
            self.last_scroll.x,
            current_x,
        )?;
        self.last_scroll = Vector::new(current_x, current_y);

        Ok(EventStatus::Captured)
    }

    /// Re-homes every row and column group that has left the viewport.
    ///
    /// Offsets are absolute, so running this twice on the same geometry
    /// yields the same placement.
    pub fn evaluate_wrap<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        last_y: f64,
        current_y: f64,
        last_x: f64,
        current_x: f64,
    ) -> Result<WrapOutcome, PanError> {
        let container = self.container.ok_or(PanError::MissingContainer)?;
        let metrics = WrapMetrics::new(&self.grid, surface.viewport());
        let rect = surface.bounding_rect(container);
        let multiple_y = metrics.wrap_multiple(Axis::Vertical, rect.y);
        let multiple_x = metrics.wrap_multiple(Axis::Horizontal, rect.x);

        let vertical = wrap::vertical_direction(last_y, current_y);
        let rows = match vertical {
            VerticalDirection::Down => {
                wrap::move_to_bottom(surface, &self.row_anchors, &metrics, multiple_y)
            }
            VerticalDirection::Up => {
                wrap::move_to_top(surface, &self.row_anchors, &metrics, multiple_y)
            }
        };

        let horizontal = wrap::horizontal_direction(last_x, current_x);
        let cols = match horizontal {
            HorizontalDirection::Left => {
                wrap::move_to_right(surface, &self.col_anchors, &metrics, multiple_x)
            }
            HorizontalDirection::Right => {
                wrap::move_to_left(surface, &self.col_anchors, &metrics, multiple_x)
            }
        };

        Ok(WrapOutcome {
            vertical,
            horizontal,
            rows,
            cols,
        })
    }
}
