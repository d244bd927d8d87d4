// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window events (file drops, close requests) are always
//! listened for; the periodic tick only runs while something needs it
//! (visible notifications or an active slideshow).

use super::{App, Message};
use iced::{event, time, Subscription};
use std::time::Duration;

impl App {
    pub(super) fn subscription(&self) -> Subscription<Message> {
        let events = event::listen_with(|event, _status, window_id| match event {
            event::Event::Window(iced::window::Event::FileDropped(path)) => {
                Some(Message::FileDropped(path))
            }
            event::Event::Window(iced::window::Event::CloseRequested) => {
                Some(Message::WindowCloseRequested(window_id))
            }
            _ => None,
        });

        let needs_tick =
            self.notifications.has_notifications() || self.gallery.slideshow().is_active();
        let tick = if needs_tick {
            time::every(Duration::from_millis(100)).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([events, tick])
    }
}
