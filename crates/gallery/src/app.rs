//! Main app state

use crate::{fl, message::Message, session::GallerySession};
use cosmic::{
    Action, Application, ApplicationExt, Core, Element, Task,
    cosmic_config::{Config, CosmicConfigEntry},
    iced::{Length, alignment},
    widget::{container, text},
};
use gallery_config::GalleryConfig;
use gallery_manifest::load_manifest;
use gallery_widgets::wrap_grid;
use std::{path::PathBuf, sync::Arc};

/// Scene size until the widget reports its real bounds.
const INITIAL_VIEWPORT: shared::Size = shared::Size::new(1280.0, 720.0);

pub struct InfiniteGallery {
    core: Core,
    config: GalleryConfig,
    config_handler: Option<Config>,
    session: GallerySession,
    images_dir: PathBuf,
}

impl InfiniteGallery {
    pub const APP_ID: &'static str = "org.codeberg.bhh32.InfiniteGallery";

    fn load_manifest(path: PathBuf) -> Task<Action<Message>> {
        tracing::debug!("Loading manifest from {}", path.display());

        cosmic::task::future(async move {
            let result = load_manifest(&path)
                .await
                .map(Arc::new)
                .map_err(|e| Arc::new(e.to_string()));
            Message::ManifestLoaded(result)
        })
    }

    fn status_overlay(&self) -> Option<Element<'_, Message>> {
        let label = if self.session.loading().is_loading() {
            fl!("loading-manifest")
        } else if let Some(error) = self.session.loading().error_message() {
            fl!("manifest-error", error = error)
        } else {
            return None;
        };

        Some(
            container(text::body(label))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .into(),
        )
    }
}

impl Application for InfiniteGallery {
    type Executor = cosmic::executor::Default;
    type Flags = Option<PathBuf>;
    type Message = Message;

    const APP_ID: &'static str = Self::APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        let mut tasks = vec![];

        let (config, config_handler) = gallery_config::load();
        let manifest_path = flags.unwrap_or_else(|| config.manifest_path());
        let session = GallerySession::new(&config, INITIAL_VIEWPORT);

        let mut app = Self {
            core,
            images_dir: config.images_dir(),
            config,
            config_handler,
            session,
        };

        if let Some(id) = app.core.main_window_id() {
            tasks.push(app.set_window_title(fl!("app-title"), id));
        }
        tasks.push(Self::load_manifest(manifest_path));

        (app, Task::batch(tasks))
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let mut grid =
            wrap_grid(self.session.scene(), &self.images_dir).on_resize(Message::Resized);
        if self.session.is_listening() {
            grid = grid.on_pan(Message::Pan);
        }
        let grid: Element<'_, Message> = grid.into();

        match self.status_overlay() {
            Some(overlay) => cosmic::iced_widget::stack![grid, overlay].into(),
            None => grid,
        }
    }

    fn update(&mut self, message: Message) -> Task<Action<Self::Message>> {
        match message {
            Message::ManifestLoaded(result) => match result {
                Ok(manifest) => self.session.apply_manifest(Ok(&*manifest)),
                Err(error) => self.session.apply_manifest(Err(error.as_str())),
            },
            Message::Pan(event) => {
                self.session.pan(&event);
            }
            Message::Resized(size) => self.session.resize(size),
        }

        Task::none()
    }

    fn on_app_exit(&mut self) -> Option<Self::Message> {
        self.session.detach();

        if let Some(ref handler) = self.config_handler
            && let Err(e) = self.config.write_entry(handler)
        {
            tracing::warn!("Failed to save config: {e}");
        }

        None
    }
}
