//! Pan state of the gallery window: the scene, the panner driving it and
//! the manifest lifecycle.

use gallery_config::GalleryConfig;
use gallery_manifest::Manifest;
use gallery_pan::{EventStatus, ListenerHandle, Panner, Scene, WheelEvent};
use shared::{LoadingEvent, LoadingState, Size};

pub struct GallerySession {
    scene: Scene,
    panner: Panner,
    listener: Option<ListenerHandle>,
    loading: LoadingState,
}

impl GallerySession {
    /// Centers an empty container in `viewport` and starts listening for pans.
    pub fn new(config: &GalleryConfig, viewport: Size) -> Self {
        let mut scene = Scene::new(viewport);
        let mut panner = Panner::new(config.grid()).with_scroll_speed(config.scroll_speed);
        panner.center_container(&mut scene);
        let listener = Some(panner.listen());

        Self {
            scene,
            panner,
            listener,
            loading: LoadingState::default(),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn panner(&self) -> &Panner {
        &self.panner
    }

    pub fn loading(&self) -> &LoadingState {
        &self.loading
    }

    pub fn is_listening(&self) -> bool {
        self.panner.is_listening()
    }

    /// Builds the grid from a loaded manifest, or records why there is none.
    pub fn apply_manifest(&mut self, result: Result<&Manifest, &str>) {
        let event = match result {
            Ok(manifest) => match self.panner.build_grid(&mut self.scene, manifest) {
                Ok(tiles) => {
                    tracing::info!(
                        tiles = tiles.len(),
                        entries = manifest.len(),
                        "Gallery grid ready"
                    );
                    LoadingEvent::LoadComplete
                }
                Err(e) => {
                    tracing::warn!("Failed to build grid: {e}");
                    LoadingEvent::LoadError(e.to_string())
                }
            },
            Err(e) => {
                tracing::error!("Failed to load manifest: {e}");
                LoadingEvent::LoadError(e.to_string())
            }
        };

        self.loading = event.apply_to_state(std::mem::take(&mut self.loading));
    }

    pub fn pan(&mut self, event: &WheelEvent) -> EventStatus {
        match self.panner.on_wheel(&mut self.scene, event) {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!("Pan failed: {e}");
                EventStatus::Ignored
            }
        }
    }

    pub fn resize(&mut self, viewport: Size) {
        tracing::trace!(
            width = viewport.width,
            height = viewport.height,
            "Viewport resized"
        );
        self.scene.set_viewport(viewport);
    }

    /// Stops listening for pans. Returns `false` if already detached.
    pub fn detach(&mut self) -> bool {
        match self.listener.take() {
            Some(handle) => self.panner.unlisten(handle),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_manifest::load_manifest;
    use gallery_pan::Surface;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn small_config() -> GalleryConfig {
        GalleryConfig {
            rows: 3,
            cols: 4,
            tile_size: 100.0,
            ..GalleryConfig::default()
        }
    }

    fn container_center(session: &GallerySession) -> (f64, f64) {
        let container = session.panner().container().unwrap();
        let rect = session.scene().bounding_rect(container);
        (rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
    }

    #[test]
    fn test_new_session_is_centered_and_listening() {
        let session = GallerySession::new(&small_config(), Size::new(800.0, 600.0));

        assert!(session.is_listening());
        assert!(session.loading().is_loading());
        assert!(session.panner().tiles().is_empty());
        assert_eq!(container_center(&session), (400.0, 300.0));
    }

    #[test]
    fn test_manifest_builds_grid() {
        let mut session = GallerySession::new(&small_config(), Size::new(800.0, 600.0));
        let manifest = Manifest::from_json_str(r#"{ "row1col1": "a.jpg" }"#).unwrap();

        session.apply_manifest(Ok(&manifest));

        assert!(session.loading().is_ready());
        assert_eq!(session.panner().tiles().len(), 12);
        assert_eq!(session.panner().row_anchors().len(), 3);
        assert_eq!(session.panner().col_anchors().len(), 4);
    }

    #[test]
    fn test_failed_manifest_leaves_grid_empty() {
        let mut session = GallerySession::new(&small_config(), Size::new(800.0, 600.0));

        session.apply_manifest(Err("Failed to read manifest: not found"));

        assert_eq!(
            session.loading().error_message(),
            Some("Failed to read manifest: not found")
        );
        assert!(session.panner().tiles().is_empty());

        // Panning an empty grid still moves the container.
        assert_eq!(
            session.pan(&WheelEvent::pixels(0.0, 40.0)),
            EventStatus::Captured
        );
    }

    #[test]
    fn test_detach_stops_panning() {
        let mut session = GallerySession::new(&small_config(), Size::new(800.0, 600.0));

        assert!(session.detach());
        assert!(!session.detach());
        assert!(!session.is_listening());
        assert_eq!(
            session.pan(&WheelEvent::pixels(10.0, 10.0)),
            EventStatus::Ignored
        );
        assert_eq!(container_center(&session), (400.0, 300.0));
    }

    #[test]
    fn test_resize_keeps_container_centered() {
        let mut session = GallerySession::new(&small_config(), Size::new(800.0, 600.0));

        session.resize(Size::new(1280.0, 720.0));

        assert_eq!(session.scene().viewport(), Size::new(1280.0, 720.0));
        assert_eq!(container_center(&session), (640.0, 360.0));
    }

    #[tokio::test]
    async fn test_manifest_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "row2col3": {{ "src": "c.jpg" }} }}"#).unwrap();

        let manifest = load_manifest(file.path()).await.unwrap();
        let mut session = GallerySession::new(&small_config(), Size::new(800.0, 600.0));
        session.apply_manifest(Ok(&manifest));

        let tile = session
            .panner()
            .tiles()
            .iter()
            .find(|t| t.row == 2 && t.col == 3)
            .unwrap();
        assert_eq!(tile.source, "/images/c.jpg");
        assert!(!tile.captioned);
    }
}
