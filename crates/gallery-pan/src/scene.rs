//! Retained in-memory [`Surface`] used by the desktop widget and the tests.
//!
//! Positioning follows a small subset of CSS absolute layout:
//! - a root element is placed relative to the viewport,
//! - a child is placed relative to its parent's border box,
//! - `left`/`top` percentages resolve against the containing block,
//! - a missing width fills the containing block, a missing height copies the
//!   element's own width when one is set (square tiles) and otherwise fills,
//! - `x`/`y` and `xPercent`/`yPercent` translate after placement.

use shared::{Point, Rect, Size, Vector};
use std::collections::HashMap;

use crate::{
    style::{Length, Prop, Style},
    surface::{ElementKind, NodeId, Surface},
    transform::Matrix,
};

#[derive(Debug, Clone)]
struct Node {
    kind: ElementKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    classes: Vec<String>,
    data: HashMap<String, String>,
    style: Style,
}

/// Something the renderer has to paint, in viewport coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayItem {
    Image {
        node: NodeId,
        rect: Rect,
        src: String,
    },
    Caption {
        node: NodeId,
        rect: Rect,
        lines: Vec<String>,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    viewport: Size,
    nodes: Vec<Node>,
    class_index: HashMap<String, Vec<NodeId>>,
}

impl Scene {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    pub fn kind(&self, node: NodeId) -> Option<&ElementKind> {
        self.nodes.get(node.0).map(|n| &n.kind)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.0)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .get(node.0)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    /// Images and captions in paint order.
    pub fn display_list(&self) -> Vec<DisplayItem> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(index, node)| {
                let id = NodeId(index);
                match &node.kind {
                    ElementKind::Img { src } => Some(DisplayItem::Image {
                        node: id,
                        rect: self.bounding_rect(id),
                        src: src.clone(),
                    }),
                    ElementKind::Aside => Some(DisplayItem::Caption {
                        node: id,
                        rect: self.bounding_rect(id),
                        lines: node
                            .children
                            .iter()
                            .filter_map(|child| match self.kind(*child) {
                                Some(ElementKind::Span { text }) => Some(text.clone()),
                                _ => None,
                            })
                            .collect(),
                    }),
                    _ => None,
                }
            })
            .collect()
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Position and size of the containing block of `id`.
    fn containing_block(&self, id: NodeId) -> Rect {
        match self.node(id).parent {
            Some(parent) => self.bounding_rect(parent),
            None => Rect::new(Point::ORIGIN, self.viewport),
        }
    }

    fn used_size(style: &Style, containing: Size) -> Size {
        let width = style
            .width
            .map(|w| w.resolve(containing.width))
            .unwrap_or(containing.width);
        let height = match (style.height, style.width) {
            (Some(h), _) => h.resolve(containing.height),
            (None, Some(_)) => width,
            (None, None) => containing.height,
        };
        Size::new(width, height)
    }

    fn translation(style: &Style, size: Size) -> Vector {
        Vector::new(
            style.x + style.x_percent / 100.0 * size.width,
            style.y + style.y_percent / 100.0 * size.height,
        )
    }
}

impl Surface for Scene {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn create_element(&mut self, kind: ElementKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
            classes: Vec::new(),
            data: HashMap::new(),
            style: Style::default(),
        });
        id
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old_parent) = self.nodes[child.0].parent.take() {
            self.nodes[old_parent.0].children.retain(|c| *c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if self.has_class(node, class) {
            return;
        }
        self.nodes[node.0].classes.push(class.to_string());
        self.class_index
            .entry(class.to_string())
            .or_default()
            .push(node);
    }

    fn set_data(&mut self, node: NodeId, key: &str, value: &str) {
        self.nodes[node.0]
            .data
            .insert(key.to_string(), value.to_string());
    }

    fn data(&self, node: NodeId, key: &str) -> Option<&str> {
        self.nodes.get(node.0)?.data.get(key).map(String::as_str)
    }

    fn set_style(&mut self, node: NodeId, prop: Prop, value: Length) {
        self.nodes[node.0].style.set(prop, value);
    }

    fn style(&self, node: NodeId, prop: Prop) -> Option<Length> {
        self.nodes.get(node.0)?.style.get(prop)
    }

    fn property(&self, node: NodeId, prop: Prop) -> f64 {
        let style = &self.node(node).style;
        match prop {
            Prop::X => style.x,
            Prop::Y => style.y,
            Prop::XPercent => style.x_percent,
            Prop::YPercent => style.y_percent,
            Prop::Left => style.left.resolve(self.containing_block(node).width),
            Prop::Top => style.top.resolve(self.containing_block(node).height),
            Prop::Width => Self::used_size(style, self.containing_block(node).size()).width,
            Prop::Height => Self::used_size(style, self.containing_block(node).size()).height,
        }
    }

    fn bounding_rect(&self, node: NodeId) -> Rect {
        let style = &self.node(node).style;
        let containing = self.containing_block(node);
        let size = Self::used_size(style, containing.size());
        let origin = Point::new(
            containing.x + style.left.resolve(containing.width),
            containing.y + style.top.resolve(containing.height),
        );

        Rect::new(origin, size).translate(Self::translation(style, size))
    }

    fn computed_transform(&self, node: NodeId) -> String {
        let style = &self.node(node).style;
        if !style.has_transform() {
            return "none".to_string();
        }

        let size = Self::used_size(style, self.containing_block(node).size());
        let offset = Self::translation(style, size);
        Matrix::translate(offset.x, offset.y).to_string()
    }

    fn query_class(&self, class: &str) -> Vec<NodeId> {
        self.class_index.get(class).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(scene: &mut Scene, size: f64) -> NodeId {
        let id = scene.create_element(ElementKind::Div);
        scene.set_style(id, Prop::Width, Length::Px(size));
        scene.set_style(id, Prop::Height, Length::Px(size));
        id
    }

    #[test]
    fn test_centered_container_geometry() {
        let mut scene = Scene::new(Size::new(800.0, 600.0));
        let main = container(&mut scene, 1000.0);
        scene.set_style(main, Prop::Left, Length::Percent(50.0));
        scene.set_style(main, Prop::Top, Length::Percent(50.0));
        scene.set_style(main, Prop::XPercent, Length::Percent(-50.0));
        scene.set_style(main, Prop::YPercent, Length::Percent(-50.0));

        let rect = scene.bounding_rect(main);
        assert_eq!(rect.x, -100.0);
        assert_eq!(rect.y, -200.0);
        assert_eq!(scene.computed_transform(main), "matrix(1, 0, 0, 1, -500, -500)");
        assert_eq!(scene.property(main, Prop::Left), 400.0);
    }

    #[test]
    fn test_children_are_relative_to_parent() {
        let mut scene = Scene::new(Size::new(800.0, 600.0));
        let main = container(&mut scene, 1000.0);
        scene.set_style(main, Prop::X, Length::Px(-30.0));

        let tile = scene.create_element(ElementKind::Div);
        scene.set_style(tile, Prop::Width, Length::Px(100.0));
        scene.set_style(tile, Prop::Left, Length::Px(200.0));
        scene.set_style(tile, Prop::Top, Length::Px(300.0));
        scene.append_child(main, tile);

        let img = scene.create_element(ElementKind::Img {
            src: "/images/a.jpg".to_string(),
        });
        scene.append_child(tile, img);

        let tile_rect = scene.bounding_rect(tile);
        assert_eq!(tile_rect, Rect::new(Point::new(170.0, 300.0), Size::new(100.0, 100.0)));
        assert_eq!(scene.bounding_rect(img), tile_rect);
        assert_eq!(scene.computed_transform(tile), "none");
    }

    #[test]
    fn test_class_queries_and_data() {
        let mut scene = Scene::default();
        let a = scene.create_element(ElementKind::Div);
        let b = scene.create_element(ElementKind::Div);
        scene.add_class(a, "row-1");
        scene.add_class(a, "row-1");
        scene.add_class(b, "row-1");
        scene.set_data(a, "row", "row-1");

        assert_eq!(scene.query_class("row-1"), vec![a, b]);
        assert!(scene.query_class("row-2").is_empty());
        assert_eq!(scene.data(a, "row"), Some("row-1"));
        assert_eq!(scene.data(b, "row"), None);
    }

    #[test]
    fn test_display_list_collects_captions() {
        let mut scene = Scene::new(Size::new(100.0, 100.0));
        let tile = scene.create_element(ElementKind::Div);
        let img = scene.create_element(ElementKind::Img {
            src: "/images/a.jpg".to_string(),
        });
        let aside = scene.create_element(ElementKind::Aside);
        let span = scene.create_element(ElementKind::Span {
            text: "Hello".to_string(),
        });
        scene.append_child(tile, img);
        scene.append_child(tile, aside);
        scene.append_child(aside, span);

        let items = scene.display_list();
        assert_eq!(items.len(), 2);
        assert!(matches!(&items[0], DisplayItem::Image { src, .. } if src == "/images/a.jpg"));
        assert!(matches!(&items[1], DisplayItem::Caption { lines, .. } if lines == &["Hello"]));
    }
}
