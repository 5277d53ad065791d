//! Builds the fixed grid of tiles inside the container.

use gallery_manifest::Manifest;
use shared::{GridConfig, Point, caption::TileCaption};

use crate::{
    style::{Length, Prop},
    surface::{ElementKind, NodeId, Surface},
};

pub const ROW_DATA_KEY: &str = "row";
pub const COL_DATA_KEY: &str = "col";

pub fn row_label(row: usize) -> String {
    format!("row-{row}")
}

pub fn col_label(col: usize) -> String {
    format!("col-{col}")
}

/// Representative tile of a row or column group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub node: NodeId,
    /// Class shared by every tile of the group.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub node: NodeId,
    pub row: usize,
    pub col: usize,
    /// `(left, top)` inside the container at creation time.
    pub position: Point,
    pub source: String,
    pub captioned: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridLayout {
    pub tiles: Vec<Tile>,
    /// First-column tiles, in row order.
    pub row_anchors: Vec<Anchor>,
    /// First-row tiles, in column order.
    pub col_anchors: Vec<Anchor>,
}

/// Appends one tile per cell to `container`, in row-major order.
///
/// Cells missing from the manifest still get a tile; its image points at
/// `/images/undefined`.
pub fn build_grid<S: Surface + ?Sized>(
    surface: &mut S,
    container: NodeId,
    grid: &GridConfig,
    manifest: &Manifest,
) -> GridLayout {
    let mut layout = GridLayout {
        tiles: Vec::with_capacity(grid.tile_count()),
        row_anchors: Vec::with_capacity(grid.rows),
        col_anchors: Vec::with_capacity(grid.cols),
    };

    for row in 1..=grid.rows {
        for col in 1..=grid.cols {
            let tile = create_tile(surface, grid, manifest, row, col);

            if row == 1 {
                let label = col_label(col);
                surface.set_data(tile.node, COL_DATA_KEY, &label);
                layout.col_anchors.push(Anchor {
                    node: tile.node,
                    label,
                });
            }
            if col == 1 {
                let label = row_label(row);
                surface.set_data(tile.node, ROW_DATA_KEY, &label);
                layout.row_anchors.push(Anchor {
                    node: tile.node,
                    label,
                });
            }

            surface.append_child(container, tile.node);
            layout.tiles.push(tile);
        }
    }

    tracing::debug!(
        rows = grid.rows,
        cols = grid.cols,
        tiles = layout.tiles.len(),
        "Built grid layout"
    );

    layout
}

fn create_tile<S: Surface + ?Sized>(
    surface: &mut S,
    grid: &GridConfig,
    manifest: &Manifest,
    row: usize,
    col: usize,
) -> Tile {
    let position = grid.cell_position(row, col);
    let source = manifest.image_source(row, col);
    let captioned = !manifest.is_object_entry(row, col);

    let div = surface.create_element(ElementKind::Div);
    surface.add_class(div, &row_label(row));
    surface.add_class(div, &col_label(col));
    surface.set_style(div, Prop::Width, Length::Px(grid.tile_size));
    surface.set_style(div, Prop::Top, Length::Px(position.y));
    surface.set_style(div, Prop::Left, Length::Px(position.x));

    let img = surface.create_element(ElementKind::Img {
        src: source.clone(),
    });
    surface.append_child(div, img);

    if captioned {
        let caption = TileCaption::for_cell(row, col);
        let aside = surface.create_element(ElementKind::Aside);
        for text in [caption.title, caption.subtitle] {
            let span = surface.create_element(ElementKind::Span { text });
            surface.append_child(aside, span);
        }
        surface.append_child(div, aside);
    }

    Tile {
        node: div,
        row,
        col,
        position,
        source,
        captioned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;
    use shared::Size;

    fn build(rows: usize, cols: usize, json: &str) -> (Scene, GridLayout) {
        let mut scene = Scene::new(Size::new(800.0, 600.0));
        let container = scene.create_element(ElementKind::Div);
        let grid = GridConfig::new(rows, cols).with_tile_size(100.0);
        let manifest = Manifest::from_json_str(json).unwrap();
        let layout = build_grid(&mut scene, container, &grid, &manifest);
        (scene, layout)
    }

    #[test]
    fn test_row_major_positions() {
        let (_, layout) = build(2, 3, "{}");

        let cells: Vec<_> = layout.tiles.iter().map(|t| (t.row, t.col)).collect();
        assert_eq!(cells, vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3)]);
        assert_eq!(layout.tiles[4].position, Point::new(100.0, 100.0));
    }

    #[test]
    fn test_anchor_labels_and_data() {
        let (scene, layout) = build(3, 2, "{}");

        let rows: Vec<_> = layout.row_anchors.iter().map(|a| a.label.as_str()).collect();
        let cols: Vec<_> = layout.col_anchors.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(rows, ["row-1", "row-2", "row-3"]);
        assert_eq!(cols, ["col-1", "col-2"]);

        let corner = layout.tiles[0].node;
        assert_eq!(scene.data(corner, ROW_DATA_KEY), Some("row-1"));
        assert_eq!(scene.data(corner, COL_DATA_KEY), Some("col-1"));
        assert_eq!(scene.data(layout.tiles[3].node, COL_DATA_KEY), None);
    }

    #[test]
    fn test_caption_markup_depends_on_entry_shape() {
        let (scene, layout) = build(
            1,
            2,
            r#"{ "row1col1": "a.jpg", "row1col2": { "src": "b.jpg" } }"#,
        );

        let first = &layout.tiles[0];
        let second = &layout.tiles[1];

        let first_children = scene.children(first.node);
        assert_eq!(first_children.len(), 2);
        assert_eq!(scene.kind(first_children[1]), Some(&ElementKind::Aside));
        let spans: Vec<_> = scene
            .children(first_children[1])
            .iter()
            .filter_map(|span| match scene.kind(*span) {
                Some(ElementKind::Span { text }) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(spans, ["Brand Adventure 1-1", "Smile | Flame"]);

        let second_children = scene.children(second.node);
        assert_eq!(second_children.len(), 1);
        assert_eq!(
            scene.kind(second_children[0]),
            Some(&ElementKind::Img {
                src: "/images/b.jpg".to_string()
            })
        );
    }

    #[test]
    fn test_missing_entries_use_undefined_source() {
        let (_, layout) = build(1, 1, "{}");
        assert_eq!(layout.tiles[0].source, "/images/undefined");
        assert!(layout.tiles[0].captioned);
    }
}
