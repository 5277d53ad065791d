use cosmic::cosmic_config::{self, Config, ConfigGet, ConfigSet, CosmicConfigEntry};
use serde::{Deserialize, Serialize};
use shared::GridConfig;
use std::path::PathBuf;
use thiserror::Error;

pub const CONFIG_VERSION: u64 = 1;
const APP_ID: &str = "org.codeberg.bhh32.InfiniteGallery";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid grid: {0}")]
    Grid(String),
    #[error("Scroll speed must be a positive finite number, got {0}")]
    ScrollSpeed(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    pub rows: usize,
    pub cols: usize,
    /// Edge length of a square tile, in logical pixels
    pub tile_size: f64,
    /// Multiplier applied to raw wheel deltas
    pub scroll_speed: f64,
    /// JSON file mapping `row{r}col{c}` keys to image entries
    pub manifest_path: String,
    /// Directory that `/images/` sources resolve against
    pub images_dir: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        let grid = GridConfig::default();
        Self {
            rows: grid.rows,
            cols: grid.cols,
            tile_size: grid.tile_size,
            scroll_speed: 0.25,
            manifest_path: "data.json".to_string(),
            images_dir: "images".to_string(),
        }
    }
}

impl GalleryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid().validate().map_err(ConfigError::Grid)?;

        if !(self.scroll_speed.is_finite() && self.scroll_speed > 0.0) {
            return Err(ConfigError::ScrollSpeed(self.scroll_speed));
        }
        Ok(())
    }

    pub fn grid(&self) -> GridConfig {
        GridConfig::new(self.rows, self.cols).with_tile_size(self.tile_size)
    }

    pub fn manifest_path(&self) -> PathBuf {
        PathBuf::from(&self.manifest_path)
    }

    pub fn images_dir(&self) -> PathBuf {
        PathBuf::from(&self.images_dir)
    }

    /// Returns `self`, or the defaults if `self` does not validate.
    pub fn or_default_if_invalid(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                tracing::warn!("Invalid gallery config, using defaults: {e}");
                Self::default()
            }
        }
    }
}

impl CosmicConfigEntry for GalleryConfig {
    const VERSION: u64 = CONFIG_VERSION;

    fn write_entry(&self, config: &cosmic_config::Config) -> Result<(), cosmic_config::Error> {
        config.set("rows", self.rows)?;
        config.set("cols", self.cols)?;
        config.set("tile_size", self.tile_size)?;
        config.set("scroll_speed", self.scroll_speed)?;
        config.set("manifest_path", self.manifest_path.clone())?;
        config.set("images_dir", self.images_dir.clone())?;
        Ok(())
    }

    fn get_entry(
        config: &cosmic_config::Config,
    ) -> Result<Self, (Vec<cosmic_config::Error>, Self)> {
        let mut errors = Vec::new();
        let mut cfg = GalleryConfig::default();

        macro_rules! get_field {
            ($name:literal, $field:ident, $type:ty) => {
                match config.get::<$type>($name) {
                    Ok(val) => cfg.$field = val,
                    Err(e) => errors.push(e),
                }
            };
        }

        get_field!("rows", rows, usize);
        get_field!("cols", cols, usize);
        get_field!("tile_size", tile_size, f64);
        get_field!("scroll_speed", scroll_speed, f64);
        get_field!("manifest_path", manifest_path, String);
        get_field!("images_dir", images_dir, String);

        if errors.is_empty() {
            Ok(cfg)
        } else {
            Err((errors, cfg))
        }
    }

    fn update_keys<T: AsRef<str>>(
        &mut self,
        config: &cosmic_config::Config,
        changed_keys: &[T],
    ) -> (Vec<cosmic_config::Error>, Vec<&'static str>) {
        let mut errors = Vec::new();
        let mut updated = Vec::new();

        for key in changed_keys {
            match key.as_ref() {
                "scroll_speed" => match config.get::<f64>("scroll_speed") {
                    Ok(val) => {
                        self.scroll_speed = val;
                        updated.push("scroll_speed");
                    }
                    Err(e) => errors.push(e),
                },
                "images_dir" => match config.get::<String>("images_dir") {
                    Ok(val) => {
                        self.images_dir = val;
                        updated.push("images_dir");
                    }
                    Err(e) => errors.push(e),
                },
                _ => {}
            }
        }

        (errors, updated)
    }
}

pub fn config() -> Result<Config, cosmic_config::Error> {
    Config::new(APP_ID, CONFIG_VERSION)
}

/// Reads the persisted config, falling back to defaults field by field.
///
/// The handler is `None` when the config store is unavailable.
pub fn load() -> (GalleryConfig, Option<Config>) {
    match config() {
        Ok(handler) => {
            let config = match GalleryConfig::get_entry(&handler) {
                Ok(c) => c,
                Err((errors, c)) => {
                    for e in errors {
                        tracing::debug!("Config entry not read: {e}");
                    }
                    c
                }
            };
            (config.or_default_if_invalid(), Some(handler))
        }
        Err(e) => {
            tracing::warn!("Config store unavailable: {e}");
            (GalleryConfig::default(), None)
        }
    }
}
