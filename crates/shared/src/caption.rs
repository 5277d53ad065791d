/// Second caption line, the same for every tile.
pub const SUBTITLE: &str = "Smile | Flame";

/// The two caption lines shown under a plain-filename tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileCaption {
    pub title: String,
    pub subtitle: String,
}

impl TileCaption {
    pub fn for_cell(row: usize, col: usize) -> Self {
        Self {
            title: format!("Brand Adventure {row}-{col}"),
            subtitle: SUBTITLE.to_string(),
        }
    }
}
