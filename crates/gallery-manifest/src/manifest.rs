//! Manifest model: which image goes into which grid cell.
//!
//! The manifest is a JSON object keyed by `"row{r}col{c}"`. A value is either a
//! bare filename or an object carrying at least a `src` filename:
//!
//! ```json
//! { "row1col1": "a.jpg", "row1col2": { "src": "b.jpg", "alt": "ignored" } }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use crate::loader::ManifestError;

/// Prefix every image source is resolved against.
pub const IMAGE_PREFIX: &str = "/images/";

/// Filename used for cells the manifest does not cover.
pub const MISSING_FILE_NAME: &str = "undefined";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub src: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageEntry {
    /// Plain filename; the tile gets a caption.
    File(String),
    /// Object entry; the tile renders the image only.
    Asset(ImageAsset),
    /// Anything else the JSON happens to hold.
    Other(Value),
}

impl ImageEntry {
    /// Object-shaped entries render without a caption.
    ///
    /// `null` and arrays count as objects here.
    pub fn is_object(&self) -> bool {
        match self {
            ImageEntry::File(_) => false,
            ImageEntry::Asset(_) => true,
            ImageEntry::Other(value) => {
                value.is_object() || value.is_array() || value.is_null()
            }
        }
    }

    /// Filename suffix appended to [`IMAGE_PREFIX`].
    pub fn file_name(&self) -> String {
        match self {
            ImageEntry::File(name) => name.clone(),
            ImageEntry::Asset(asset) => asset.src.clone(),
            ImageEntry::Other(Value::Object(map)) => map
                .get("src")
                .map(scalar_to_string)
                .unwrap_or_else(|| MISSING_FILE_NAME.to_string()),
            ImageEntry::Other(Value::Array(_) | Value::Null) => MISSING_FILE_NAME.to_string(),
            ImageEntry::Other(value) => scalar_to_string(value),
        }
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: HashMap<String, ImageEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, ManifestError> {
        let value: Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(ManifestError::NotAnObject);
        }

        Ok(serde_json::from_value(value)?)
    }

    pub fn cell_key(row: usize, col: usize) -> String {
        format!("row{row}col{col}")
    }

    pub fn insert(&mut self, row: usize, col: usize, entry: ImageEntry) -> Option<ImageEntry> {
        self.entries.insert(Self::cell_key(row, col), entry)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&ImageEntry> {
        self.entries.get(&Self::cell_key(row, col))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `true` when the cell renders image-only.
    pub fn is_object_entry(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(ImageEntry::is_object)
    }

    /// Full image source of a cell, always under [`IMAGE_PREFIX`].
    ///
    /// Missing cells are not an error; they resolve to `/images/undefined`.
    pub fn image_source(&self, row: usize, col: usize) -> String {
        let name = self
            .get(row, col)
            .map(ImageEntry::file_name)
            .unwrap_or_else(|| MISSING_FILE_NAME.to_string());
        format!("{IMAGE_PREFIX}{name}")
    }
}

/// Maps an `/images/...` source onto a directory on disk.
pub fn resolve_image_path(source: &str, images_dir: &Path) -> PathBuf {
    let relative = source.strip_prefix(IMAGE_PREFIX).unwrap_or(source);
    images_dir.join(relative.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_object_entries() {
        let manifest =
            Manifest::from_json_str(r#"{ "row1col1": "a.jpg", "row1col2": { "src": "b.jpg" } }"#)
                .unwrap();

        assert_eq!(manifest.len(), 2);
        assert!(!manifest.is_object_entry(1, 1));
        assert!(manifest.is_object_entry(1, 2));
        assert_eq!(manifest.image_source(1, 1), "/images/a.jpg");
        assert_eq!(manifest.image_source(1, 2), "/images/b.jpg");
    }

    #[test]
    fn test_extra_object_fields_are_ignored() {
        let manifest =
            Manifest::from_json_str(r#"{ "row2col3": { "src": "c.png", "alt": "C", "w": 3 } }"#)
                .unwrap();

        assert_eq!(
            manifest.get(2, 3),
            Some(&ImageEntry::Asset(ImageAsset {
                src: "c.png".to_string()
            }))
        );
    }

    #[test]
    fn test_missing_entry_is_undefined() {
        let manifest = Manifest::new();
        assert_eq!(manifest.image_source(4, 4), "/images/undefined");
        assert!(!manifest.is_object_entry(4, 4));
    }

    #[test]
    fn test_loose_values() {
        let manifest = Manifest::from_json_str(
            r#"{ "row1col1": 7, "row1col2": { "alt": "no src" }, "row1col3": null }"#,
        )
        .unwrap();

        assert_eq!(manifest.image_source(1, 1), "/images/7");
        assert!(!manifest.is_object_entry(1, 1));

        assert_eq!(manifest.image_source(1, 2), "/images/undefined");
        assert!(manifest.is_object_entry(1, 2));

        assert_eq!(manifest.image_source(1, 3), "/images/undefined");
        assert!(manifest.is_object_entry(1, 3));
    }

    #[test]
    fn test_top_level_must_be_object() {
        let err = Manifest::from_json_str(r#"["a.jpg"]"#).unwrap_err();
        assert!(matches!(err, ManifestError::NotAnObject));

        let err = Manifest::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
    }

    #[test]
    fn test_resolve_image_path() {
        let dir = Path::new("/srv/gallery");
        assert_eq!(
            resolve_image_path("/images/a.jpg", dir),
            PathBuf::from("/srv/gallery/a.jpg")
        );
        assert_eq!(
            resolve_image_path("nested/b.jpg", dir),
            PathBuf::from("/srv/gallery/nested/b.jpg")
        );
    }
}
