// SPDX-License-Identifier: MPL-2.0
//! Session-scoped photo gallery: upload intake, selection, and slideshow
//! playback over an in-memory photo collection. Never touches the network.

mod photo;
mod state;

pub use photo::{
    is_supported_image, Photo, PhotoHandle, PhotoId, UploadedPhoto, SUPPORTED_IMAGE_EXTENSIONS,
};
pub use state::{GalleryError, GalleryState, IngestReport, Slideshow};
