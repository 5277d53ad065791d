pub mod loader;
pub mod manifest;

pub use loader::{ManifestError, load_manifest};
pub use manifest::{IMAGE_PREFIX, ImageAsset, ImageEntry, Manifest, resolve_image_path};
