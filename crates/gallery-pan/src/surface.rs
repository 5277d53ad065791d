//! The host environment the panner draws into.

use shared::{Rect, Size, Vector};

use crate::{
    style::{Length, Prop},
    transform::{Matrix, TransformError},
};

/// Stable handle to an element created on a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    Div,
    Img { src: String },
    Aside,
    Span { text: String },
}

/// A DOM-like retained tree with inline styles and geometry queries.
///
/// Geometry is reported in viewport coordinates, the same way a bounding
/// client rect would be.
pub trait Surface {
    fn viewport(&self) -> Size;

    fn create_element(&mut self, kind: ElementKind) -> NodeId;

    fn append_child(&mut self, parent: NodeId, child: NodeId);

    fn add_class(&mut self, node: NodeId, class: &str);

    fn set_data(&mut self, node: NodeId, key: &str, value: &str);

    fn data(&self, node: NodeId, key: &str) -> Option<&str>;

    fn set_style(&mut self, node: NodeId, prop: Prop, value: Length);

    /// Inline value as it was set, if any.
    fn style(&self, node: NodeId, prop: Prop) -> Option<Length>;

    /// Computed numeric value with percentages resolved.
    fn property(&self, node: NodeId, prop: Prop) -> f64;

    fn bounding_rect(&self, node: NodeId) -> Rect;

    /// CSS-style computed transform, `none` or `matrix(...)`.
    fn computed_transform(&self, node: NodeId) -> String;

    /// Every element carrying `class`, in creation order.
    fn query_class(&self, class: &str) -> Vec<NodeId>;

    /// Current translation of `node`, read back from its computed transform.
    fn current_offset(&self, node: NodeId) -> Result<Vector, TransformError> {
        Ok(Matrix::parse(&self.computed_transform(node))?.translation())
    }
}
