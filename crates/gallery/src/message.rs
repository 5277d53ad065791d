use gallery_manifest::Manifest;
use gallery_pan::WheelEvent;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum Message {
    ManifestLoaded(Result<Arc<Manifest>, Arc<String>>),
    Pan(WheelEvent),
    Resized(shared::Size),
}
