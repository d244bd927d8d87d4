// SPDX-License-Identifier: MPL-2.0
//! User interface components and screens.

pub mod admin;
pub mod design_tokens;
pub mod gallery_view;
pub mod navbar;
pub mod notifications;
pub mod pages;
