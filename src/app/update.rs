// SPDX-License-Identifier: MPL-2.0
//! The application update loop: message handling and side effects.

use super::{App, Message, Screen};
use crate::content::{ContentStore, SaveOutcome, SectionContent, SectionKey};
use crate::diagnostics::{ErrorType, WarningType};
use crate::gallery::{UploadedPhoto, SUPPORTED_IMAGE_EXTENSIONS};
use crate::session::Session;
use crate::ui::admin;
use crate::ui::gallery_view;
use crate::ui::navbar;
use crate::ui::notifications::Notification;
use crate::ui::pages::ContactFormEvent;
use iced::{window, Task};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// The section a screen needs loaded, if any.
fn section_for_screen(screen: Screen) -> Option<SectionKey> {
    match screen {
        Screen::Home => Some(SectionKey::Hero),
        Screen::About => Some(SectionKey::About),
        Screen::Services => Some(SectionKey::Services),
        Screen::Contact => Some(SectionKey::Contact),
        Screen::Gallery | Screen::Admin => None,
    }
}

/// Reads the picked files off the UI thread. Unreadable files are
/// counted, not fatal.
async fn read_uploads(paths: Vec<PathBuf>) -> (Vec<UploadedPhoto>, usize) {
    let mut uploads = Vec::new();
    let mut unreadable = 0;
    for path in paths {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| "unnamed".to_string());
        match tokio::fs::read(&path).await {
            Ok(bytes) => uploads.push(UploadedPhoto { name, bytes }),
            Err(_) => unreadable += 1,
        }
    }
    (uploads, unreadable)
}

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(message) => {
                let navbar::Event::Navigate(screen) = navbar::update(message);
                self.navigate(screen)
            }
            Message::Gallery(message) => self.handle_gallery(message),
            Message::Admin(message) => self.handle_admin(message),
            Message::ContactForm(message) => {
                match self.contact_form.update(message) {
                    ContactFormEvent::None => {}
                    ContactFormEvent::Submitted => {
                        self.notifications.push(Notification::success(
                            "Thank you for your message! We'll get back to you soon.",
                        ));
                    }
                    ContactFormEvent::Invalid(reason) => {
                        self.notifications.push(
                            Notification::error(reason).with_error_type(ErrorType::Validation),
                        );
                    }
                }
                Task::none()
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick();
                self.auto_advance_slideshow(now);
                Task::none()
            }
            Message::FileDropped(path) => Task::perform(
                read_uploads(vec![path]),
                |(uploads, unreadable)| Message::PhotosRead { uploads, unreadable },
            ),
            Message::UploadDialogResult(paths) => match paths {
                Some(paths) if !paths.is_empty() => Task::perform(
                    read_uploads(paths),
                    |(uploads, unreadable)| Message::PhotosRead { uploads, unreadable },
                ),
                _ => Task::none(),
            },
            Message::PhotosRead { uploads, unreadable } => {
                self.handle_photos_read(uploads, unreadable);
                Task::none()
            }
            Message::IdentityLoaded(result) => {
                self.handle_identity_loaded(result);
                Task::none()
            }
            Message::ContentLoaded { key, result } => {
                self.handle_content_loaded(key, result);
                Task::none()
            }
            Message::ContentSaved { key, result } => self.handle_content_saved(key, result),
            Message::WindowCloseRequested(id) => {
                // Release every photo resource before the window goes away.
                self.gallery.clear();
                window::close(id)
            }
        }
    }

    fn navigate(&mut self, screen: Screen) -> Task<Message> {
        self.screen = screen;

        let needed = match screen {
            Screen::Admin => Some(self.admin.tab().section_key()),
            other => section_for_screen(other),
        };
        match needed.and_then(|key| self.ensure_loaded(key)) {
            Some(task) => task,
            None => Task::none(),
        }
    }

    fn handle_gallery(&mut self, message: gallery_view::Message) -> Task<Message> {
        match message {
            gallery_view::Message::OpenFileDialog => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .set_title("Upload Photos")
                        .add_filter("Images", &SUPPORTED_IMAGE_EXTENSIONS)
                        .pick_files()
                        .await
                        .map(|handles| {
                            handles
                                .into_iter()
                                .map(|h| h.path().to_path_buf())
                                .collect()
                        })
                },
                Message::UploadDialogResult,
            ),
            gallery_view::Message::ToggleSelect(id) => {
                self.gallery.toggle_select(id);
                Task::none()
            }
            gallery_view::Message::Remove(id) => {
                if self.gallery.remove(id) {
                    self.notifications.push(Notification::success("Photo removed"));
                }
                Task::none()
            }
            gallery_view::Message::StartSlideshow => {
                match self.gallery.start_slideshow() {
                    Ok(()) => self.last_slide_advance = Instant::now(),
                    Err(error) => {
                        self.notifications.push(
                            Notification::error(error.to_string())
                                .with_error_type(ErrorType::Validation),
                        );
                    }
                }
                Task::none()
            }
            gallery_view::Message::AdvanceSlide => {
                self.gallery.advance_slide();
                self.last_slide_advance = Instant::now();
                Task::none()
            }
            gallery_view::Message::StopSlideshow => {
                self.gallery.stop_slideshow();
                Task::none()
            }
        }
    }

    fn handle_photos_read(&mut self, uploads: Vec<UploadedPhoto>, unreadable: usize) {
        let report = self.gallery.ingest(uploads);

        if report.accepted > 0 {
            let message = if report.accepted == 1 {
                "1 photo uploaded successfully!".to_string()
            } else {
                format!("{} photos uploaded successfully!", report.accepted)
            };
            self.notifications.push(Notification::success(message));
        }

        let skipped = report.rejected + unreadable;
        if skipped > 0 {
            self.notifications.push(
                Notification::warning(format!(
                    "{skipped} file{} skipped (not a supported image)",
                    if skipped == 1 { "" } else { "s" }
                ))
                .with_warning_type(WarningType::RejectedUpload),
            );
        }
    }

    fn handle_admin(&mut self, message: admin::Message) -> Task<Message> {
        match self.admin.update(message) {
            admin::Event::None => Task::none(),
            admin::Event::TabChanged(key) => match self.ensure_loaded(key) {
                Some(task) => task,
                None => Task::none(),
            },
            admin::Event::Save(key, content) => self.begin_save(key, content),
        }
    }

    fn begin_save(&mut self, key: SectionKey, content: SectionContent) -> Task<Message> {
        let Some(store) = self.store.clone() else {
            self.notifications.push(
                Notification::error("No content service configured.")
                    .with_error_type(ErrorType::ContentSave),
            );
            return Task::none();
        };
        // A second submit while the first save is in flight is dropped.
        if !self.sync.begin_save(key) {
            return Task::none();
        }

        Task::perform(
            async move { store.replace(key, content).await },
            move |result| Message::ContentSaved { key, result },
        )
    }

    fn handle_identity_loaded(&mut self, result: Result<Option<crate::session::Identity>, String>) {
        match result {
            Ok(Some(identity)) => {
                let email = identity.email.clone();
                self.session = Session::signed_in(identity);
                self.notifications
                    .push(Notification::info(format!("Signed in as {email}")));
            }
            Ok(None) => {
                self.session = Session::signed_out();
                self.notifications.push(Notification::info(
                    "Your session has expired. Please sign in again.",
                ));
            }
            Err(error) => {
                self.session = Session::signed_out();
                self.notifications.push(
                    Notification::error(format!("Sign-in failed: {error}"))
                        .with_error_type(ErrorType::Other),
                );
            }
        }
    }

    fn handle_content_loaded(
        &mut self,
        key: SectionKey,
        result: Result<SectionContent, crate::content::ContentError>,
    ) {
        match result {
            Ok(content) => {
                // Fresh records re-seed the matching editor draft.
                self.admin.seed(&content);
                self.sync.finish_load(key, Ok(content));
            }
            Err(error) => {
                let error_type = if error.is_permission_denied() {
                    ErrorType::PermissionDenied
                } else {
                    ErrorType::ContentFetch
                };
                self.notifications.push(
                    Notification::error(format!("Failed to load {key} content: {error}"))
                        .with_error_type(error_type),
                );
                self.sync.finish_load(key, Err(error));
            }
        }
    }

    fn handle_content_saved(
        &mut self,
        key: SectionKey,
        result: Result<(), crate::content::ContentError>,
    ) -> Task<Message> {
        match self.sync.finish_save(key, result) {
            SaveOutcome::Saved => {
                self.notifications
                    .push(Notification::success("Content saved successfully!"));
                // The cached record was invalidated; re-fetch so every
                // consumer sees the new value.
                match self.ensure_loaded(key) {
                    Some(task) => task,
                    None => Task::none(),
                }
            }
            SaveOutcome::Failed(error) => {
                if error.is_permission_denied() {
                    self.notifications.push(
                        Notification::error(
                            "Failed to save content. Make sure you have admin permissions.",
                        )
                        .with_error_type(ErrorType::PermissionDenied),
                    );
                } else {
                    self.notifications.push(
                        Notification::error(format!("Failed to save content: {error}"))
                            .with_error_type(ErrorType::ContentSave),
                    );
                }
                Task::none()
            }
        }
    }

    /// Issues a fetch for `key` unless it is cached or already in flight.
    pub(super) fn ensure_loaded(&mut self, key: SectionKey) -> Option<Task<Message>> {
        let store = self.store.clone()?;
        if !self.sync.begin_load(key) {
            return None;
        }
        Some(Task::perform(
            async move { store.fetch(key).await },
            move |result| Message::ContentLoaded { key, result },
        ))
    }

    fn auto_advance_slideshow(&mut self, now: Instant) {
        if !self.gallery.slideshow().is_active() {
            return;
        }
        let Some(secs) = self.config.slideshow_secs.filter(|secs| *secs > 0) else {
            return;
        };
        if now.duration_since(self.last_slide_advance) >= Duration::from_secs(secs) {
            self.gallery.advance_slide();
            self.last_slide_advance = now;
        }
    }
}
