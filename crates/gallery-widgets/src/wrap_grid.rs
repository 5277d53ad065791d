//! WrapGrid - draws a panned [`Scene`] and turns wheel gestures into pan messages
//!
//! The widget owns no pan state. It paints whatever the scene currently holds,
//! clipped to its bounds, and reports wheel ticks and size changes back to the
//! application, which feeds them to the `Panner`.

use std::path::{Path, PathBuf};

use cosmic::{
    Element, Renderer,
    iced::{
        Color, Length, Point, Rectangle, Size, alignment,
        advanced::{
            Clipboard, Layout, Shell, Widget,
            image::Renderer as ImageRenderer,
            layout::{Limits, Node},
            renderer::{self as iced_renderer, Quad, Renderer as QuadRenderer},
            text::{LineHeight, Renderer as TextRenderer, Shaping, Text, Wrapping},
            widget::Tree,
        },
        event::{Event, Status},
        mouse::{self, Cursor},
        window,
    },
    widget::image::Handle,
};
use gallery_manifest::resolve_image_path;
use gallery_pan::{DisplayItem, Scene, WheelEvent};

use crate::tile_geometry::{
    self as geometry, CAPTION_TEXT_RATIO, caption_band, caption_line_boxes, is_visible, to_screen,
};

pub struct WrapGrid<'a, M> {
    scene: &'a Scene,
    images_dir: PathBuf,
    on_pan: Option<Box<dyn Fn(WheelEvent) -> M + 'a>>,
    on_resize: Option<Box<dyn Fn(shared::Size) -> M + 'a>>,
}

impl<'a, M: Clone + 'static> WrapGrid<'a, M> {
    pub fn new(scene: &'a Scene, images_dir: impl AsRef<Path>) -> Self {
        Self {
            scene,
            images_dir: images_dir.as_ref().to_path_buf(),
            on_pan: None,
            on_resize: None,
        }
    }

    /// Callback for wheel and trackpad ticks over the grid.
    ///
    /// Without it the widget ignores wheel events.
    pub fn on_pan<F>(mut self, f: F) -> Self
    where
        F: Fn(WheelEvent) -> M + 'a,
    {
        self.on_pan = Some(Box::new(f));
        self
    }

    /// Callback when the widget size no longer matches the scene viewport
    pub fn on_resize<F>(mut self, f: F) -> Self
    where
        F: Fn(shared::Size) -> M + 'a,
    {
        self.on_resize = Some(Box::new(f));
        self
    }

    fn draw_scene(&self, renderer: &mut Renderer, bounds: Rectangle) {
        for item in self.scene.display_list() {
            match item {
                DisplayItem::Image { rect, src, .. } => {
                    let screen = to_screen(rect, bounds);
                    if !is_visible(screen, bounds) {
                        continue;
                    }

                    // Placeholder behind the image while it decodes or if it is missing
                    renderer.fill_quad(
                        Quad {
                            bounds: screen,
                            border: cosmic::iced::Border::default(),
                            shadow: Default::default(),
                        },
                        Color::from_rgba(0.5, 0.5, 0.5, 0.3),
                    );

                    let handle = Handle::from_path(resolve_image_path(&src, &self.images_dir));
                    renderer.draw_image(
                        handle.into(),
                        cosmic::iced::widget::image::FilterMethod::Linear,
                        screen,
                        cosmic::iced::Radians(0.0),
                        1.0,
                        [0.0; 4],
                    );
                }
                DisplayItem::Caption { rect, lines, .. } => {
                    let band = caption_band(to_screen(rect, bounds));
                    let Some(clip) = band.intersection(&bounds) else {
                        continue;
                    };

                    renderer.fill_quad(
                        Quad {
                            bounds: band,
                            border: cosmic::iced::Border::default(),
                            shadow: Default::default(),
                        },
                        Color::from_rgba(0.0, 0.0, 0.0, 0.45),
                    );

                    let font = renderer.default_font();
                    let boxes = caption_line_boxes(band, lines.len());
                    for (line, line_box) in lines.into_iter().zip(boxes) {
                        renderer.fill_text(
                            Text {
                                content: line,
                                bounds: line_box.size(),
                                size: (line_box.height * CAPTION_TEXT_RATIO).into(),
                                line_height: LineHeight::default(),
                                font,
                                horizontal_alignment: alignment::Horizontal::Left,
                                vertical_alignment: alignment::Vertical::Center,
                                shaping: Shaping::Advanced,
                                wrapping: Wrapping::None,
                            },
                            Point::new(line_box.x, line_box.center_y()),
                            Color::WHITE,
                            clip,
                        );
                    }
                }
            }
        }
    }
}

/// Constructor function
pub fn wrap_grid<'a, M: Clone + 'static>(
    scene: &'a Scene,
    images_dir: impl AsRef<Path>,
) -> WrapGrid<'a, M> {
    WrapGrid::new(scene, images_dir)
}

impl<'a, M: Clone + 'static> Widget<M, cosmic::Theme, Renderer> for WrapGrid<'a, M> {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(&self, _tree: &mut Tree, _renderer: &Renderer, limits: &Limits) -> Node {
        let limits = limits.width(Length::Fill).height(Length::Fill);
        Node::new(limits.resolve(Length::Fill, Length::Fill, Size::ZERO))
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &cosmic::Theme,
        _style: &iced_renderer::Style,
        layout: Layout<'_>,
        _cursor: Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        renderer.with_layer(bounds, |renderer| {
            self.draw_scene(renderer, bounds);
        });
    }

    fn on_event(
        &mut self,
        _tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, M>,
        _viewport: &Rectangle,
    ) -> Status {
        let bounds = layout.bounds();

        match event {
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let Some(ref on_pan) = self.on_pan else {
                    return Status::Ignored;
                };
                if let Some(position) = cursor.position()
                    && bounds.contains(position)
                {
                    shell.publish(on_pan(geometry::wheel_event(delta)));
                    return Status::Captured;
                }
            }

            // Layout has run by the time a frame is requested
            Event::Window(window::Event::RedrawRequested(_)) => {
                if let Some(size) = geometry::resized_viewport(self.scene, bounds)
                    && let Some(ref on_resize) = self.on_resize
                {
                    tracing::debug!(
                        width = size.width,
                        height = size.height,
                        "Grid viewport changed"
                    );
                    shell.publish(on_resize(size));
                }
            }

            _ => {}
        }

        Status::Ignored
    }
}

impl<'a, M: Clone + 'static> From<WrapGrid<'a, M>> for Element<'a, M> {
    fn from(grid: WrapGrid<'a, M>) -> Self {
        Element::new(grid)
    }
}
