// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::content::{ContentError, SectionContent, SectionKey};
use crate::gallery::UploadedPhoto;
use crate::session::Identity;
use crate::ui::admin;
use crate::ui::gallery_view;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::pages::ContactFormMessage;
use iced::window;
use std::path::PathBuf;
use std::time::Instant;

/// Launch options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Override for the config directory (mainly for tests and dev).
    pub config_dir: Option<PathBuf>,
    /// Override for the content API base URL.
    pub api_url: Option<String>,
    /// Access token to sign in with, overriding the saved one.
    pub access_token: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Gallery(gallery_view::Message),
    Admin(admin::Message),
    ContactForm(ContactFormMessage),
    Notification(notifications::Message),
    /// Periodic tick for notification auto-dismiss and slideshow advance.
    Tick(Instant),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Window close: release gallery resources, then close.
    WindowCloseRequested(window::Id),
    /// Result from the upload file dialog.
    UploadDialogResult(Option<Vec<PathBuf>>),
    /// Selected files have been read from disk.
    PhotosRead {
        uploads: Vec<UploadedPhoto>,
        /// Files that could not be read.
        unreadable: usize,
    },
    /// Identity lookup finished at startup.
    IdentityLoaded(Result<Option<Identity>, String>),
    /// A section fetch finished.
    ContentLoaded {
        key: SectionKey,
        result: Result<SectionContent, ContentError>,
    },
    /// A section save finished.
    ContentSaved {
        key: SectionKey,
        result: Result<(), ContentError>,
    },
}
