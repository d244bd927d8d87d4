// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Notifications are pushed by the update loop, displayed as stacked
//! toasts in the bottom-right corner, and auto-dismissed based on their
//! severity (errors stay until dismissed by hand).

pub mod manager;
pub mod notification;
pub mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
