// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the gallery, the content sync state,
//! the session, and the UI components, and translates messages into side
//! effects like remote fetches and saves. Policy decisions (which screen
//! needs which section, when the slideshow auto-advances, what a failed
//! save tells the user) live close to the update loop so user-facing
//! behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::content::{HttpContentStore, SectionKey, SyncState};
use crate::diagnostics::DiagnosticsHandle;
use crate::gallery::GalleryState;
use crate::session::{IdentityClient, Session};
use crate::ui::admin;
use crate::ui::notifications;
use crate::ui::pages::ContactForm;
use iced::{window, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 540;

/// Root Iced application state.
pub struct App {
    screen: Screen,
    session: Session,
    gallery: GalleryState,
    sync: SyncState,
    /// Absent when no API endpoint is configured; pages then show their
    /// unavailable placeholder.
    store: Option<HttpContentStore>,
    admin: admin::State,
    contact_form: ContactForm,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsHandle,
    config: Config,
    /// When the slideshow last advanced (by hand or by timer).
    last_slide_advance: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("photos", &self.gallery.len())
            .field("signed_in", &self.session.is_signed_in())
            .finish()
    }
}

/// Builds the window settings. Close requests are intercepted so the
/// gallery can release its resources first.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::Home,
            session: Session::signed_out(),
            gallery: GalleryState::new(),
            sync: SyncState::new(),
            store: None,
            admin: admin::State::default(),
            contact_form: ContactForm::default(),
            notifications: notifications::Manager::new(),
            diagnostics: DiagnosticsHandle::new(),
            config: Config::default(),
            last_slide_advance: Instant::now(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the identity lookup
    /// and the first section fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut config = config::load_with_dir(flags.config_dir.as_deref()).unwrap_or_default();
        if let Some(api_url) = flags.api_url {
            config.api_url = Some(api_url);
        }
        if let Some(token) = flags.access_token {
            config.access_token = Some(token);
        }

        let mut app = App {
            config,
            ..Self::default()
        };
        app.notifications.set_diagnostics(app.diagnostics.clone());

        let mut tasks = Vec::new();

        match (&app.config.api_url, &app.config.api_key) {
            (Some(api_url), Some(api_key)) => {
                match HttpContentStore::new(api_url, api_key, app.config.access_token.clone()) {
                    Ok(store) => app.store = Some(store),
                    Err(error) => {
                        app.notifications.push(
                            notifications::Notification::error(format!(
                                "Could not reach the content service: {error}"
                            ))
                            .with_error_type(crate::diagnostics::ErrorType::ContentFetch),
                        );
                    }
                }

                if let Some(token) = &app.config.access_token {
                    match IdentityClient::new(api_url, api_key, token) {
                        Ok(client) => {
                            tasks.push(Task::perform(
                                async move { client.fetch().await },
                                Message::IdentityLoaded,
                            ));
                        }
                        Err(error) => {
                            app.notifications
                                .push(notifications::Notification::error(format!(
                                    "Sign-in failed: {error}"
                                )));
                        }
                    }
                }
            }
            _ => {
                app.notifications.push(notifications::Notification::info(
                    "No content service configured. Pages will show placeholders.",
                ));
            }
        }

        // The home screen shows the hero section.
        if let Some(task) = app.ensure_loaded(SectionKey::Hero) {
            tasks.push(task);
        }

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        String::from("Emerald Studio")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}
