// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the bound [`ImageViewerService`] to the Iced
//! runtime: it turns button presses and key events into service calls, feeds
//! the results to the viewer state machine, and persists the language choice.

mod message;
pub mod paths;
pub mod state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, ThemeMode};
use crate::host::{HostContext, RfdHost};
use crate::i18n::fluent::I18n;
use crate::service::ImageViewerService;
use iced::{window, Element, Subscription, Task, Theme};
use state::ViewerState;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    host: Arc<dyn HostContext>,
    service: Arc<ImageViewerService>,
    state: ViewerState,
    /// Localized startup warning (e.g. unreadable settings file).
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("status", &self.state.status())
            .field("images", &self.state.images().len())
            .finish()
    }
}

/// Builds the window settings from the `[window]` config section.
pub fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window.size();

    window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_override(flags.config_dir.clone());
    let (config, config_warning) = config::load();
    let settings = window_settings(&config);

    // iced requires a `Fn` boot closure; the flags are consumed on first call
    let boot_state = RefCell::new(Some((flags, config, config_warning)));
    let boot = move || {
        let (flags, config, warning) = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags, config, warning)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

/// Service bound to `host`, with the dialog title in the current language.
fn build_service(i18n: &I18n, host: Arc<dyn HostContext>) -> Arc<ImageViewerService> {
    let service =
        ImageViewerService::new().with_dialog_title(i18n.tr("dialog-select-directory-title"));
    service.on_startup(host);
    Arc::new(service)
}

impl App {
    /// Initializes application state and, when a directory was passed on the
    /// command line, starts listing it right away.
    fn new(flags: Flags, config: Config, config_warning: Option<String>) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let start_directory = flags.directory.as_ref().map(PathBuf::from);
        let host: Arc<dyn HostContext> =
            Arc::new(RfdHost::with_start_directory(start_directory.clone()));
        let service = build_service(&i18n, Arc::clone(&host));
        let notice = config_warning.map(|key| i18n.tr(&key));

        let mut app = App {
            i18n,
            config,
            host,
            service,
            state: ViewerState::new(),
            notice,
        };

        let task = match start_directory {
            Some(directory) => app.open_directory(directory),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let file_name = self.state.current_image().and_then(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .map(String::from)
        });

        match file_name {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        match self.config.general.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            state: &self.state,
            notice: self.notice.as_deref(),
        })
    }
}
