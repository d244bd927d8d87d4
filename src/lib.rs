// SPDX-License-Identifier: MPL-2.0
//! `emerald_studio` is a desktop companion app for a photography business,
//! built with the Iced GUI framework.
//!
//! It renders the business's site sections (hero, about, services, contact),
//! provides a session-scoped photo gallery with slideshow playback, and
//! offers an admin surface that edits the site's content against a remote
//! key-value content store.

pub mod app;
pub mod config;
pub mod content;
pub mod diagnostics;
pub mod error;
pub mod gallery;
pub mod session;
pub mod ui;
