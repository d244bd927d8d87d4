// SPDX-License-Identifier: MPL-2.0
//! Photo identity and the session-scoped image resource behind it.

use iced::widget::image::Handle;
use std::path::Path;

/// File extensions the gallery accepts on intake.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 5] = ["jpeg", "jpg", "png", "webp", "gif"];

/// Checks whether a path carries a supported image extension
/// (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Unique identifier for a photo, assigned at intake time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhotoId(u64);

impl PhotoId {
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for PhotoId {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw bytes handed over by the file intake boundary (file dialog or drop).
#[derive(Debug, Clone)]
pub struct UploadedPhoto {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Session-scoped handle to a photo's image resource.
///
/// Acquisition (intake) is paired with a guaranteed [`release`] on every
/// exit path: removal, gallery teardown, or drop. After release the handle
/// renders nothing and holds no bytes.
///
/// [`release`]: PhotoHandle::release
#[derive(Debug, Clone)]
pub struct PhotoHandle {
    handle: Option<Handle>,
}

impl PhotoHandle {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            handle: Some(Handle::from_bytes(bytes)),
        }
    }

    /// Returns the underlying image handle, or `None` once released.
    pub fn get(&self) -> Option<&Handle> {
        self.handle.as_ref()
    }

    /// Releases the underlying resource. Idempotent.
    pub fn release(&mut self) {
        self.handle = None;
    }

    pub fn is_released(&self) -> bool {
        self.handle.is_none()
    }
}

impl Drop for PhotoHandle {
    fn drop(&mut self) {
        self.release();
    }
}

/// A photo in the gallery's working set. Owned exclusively by the
/// [`GalleryState`](super::GalleryState) collection.
#[derive(Debug, Clone)]
pub struct Photo {
    id: PhotoId,
    name: String,
    handle: PhotoHandle,
}

impl Photo {
    pub fn new(upload: UploadedPhoto) -> Self {
        Self {
            id: PhotoId::new(),
            name: upload.name,
            handle: PhotoHandle::from_bytes(upload.bytes),
        }
    }

    pub fn id(&self) -> PhotoId {
        self.id
    }

    /// Original file name, display-only.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handle(&self) -> Option<&Handle> {
        self.handle.get()
    }

    pub(super) fn release(&mut self) {
        self.handle.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn upload(name: &str) -> UploadedPhoto {
        UploadedPhoto {
            name: name.to_string(),
            bytes: vec![0_u8; 8],
        }
    }

    #[test]
    fn photo_ids_are_unique() {
        let a = Photo::new(upload("a.jpg"));
        let b = Photo::new(upload("b.jpg"));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn is_supported_image_accepts_allow_list() {
        for ext in SUPPORTED_IMAGE_EXTENSIONS {
            let path = PathBuf::from(format!("photo.{ext}"));
            assert!(is_supported_image(&path), "should accept .{ext}");
        }
    }

    #[test]
    fn is_supported_image_is_case_insensitive() {
        assert!(is_supported_image(Path::new("photo.JPG")));
        assert!(is_supported_image(Path::new("photo.WebP")));
    }

    #[test]
    fn is_supported_image_rejects_other_types() {
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("clip.mp4")));
        assert!(!is_supported_image(Path::new("archive.tiff")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }

    #[test]
    fn release_drops_the_resource_and_is_idempotent() {
        let mut handle = PhotoHandle::from_bytes(vec![1, 2, 3]);
        assert!(!handle.is_released());
        assert!(handle.get().is_some());

        handle.release();
        assert!(handle.is_released());
        assert!(handle.get().is_none());

        handle.release();
        assert!(handle.is_released());
    }

    #[test]
    fn photo_exposes_name_and_handle() {
        let photo = Photo::new(upload("sunset.png"));
        assert_eq!(photo.name(), "sunset.png");
        assert!(photo.handle().is_some());
    }
}
