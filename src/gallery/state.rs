// SPDX-License-Identifier: MPL-2.0
//! Gallery state machine: photo collection, selection set, and slideshow
//! playback position.
//!
//! All operations run to completion on the UI event loop; none of them
//! block or touch the network. The slideshow sequence is always derived
//! from the collection (in collection order) filtered by the selection
//! set, so it never references a removed photo.

use super::photo::{is_supported_image, Photo, PhotoId, UploadedPhoto};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryError {
    /// Starting a slideshow requires a non-empty selection.
    EmptySelection,
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::EmptySelection => {
                write!(f, "Please select at least one photo for the slideshow")
            }
        }
    }
}

/// Result of an intake call: how many files were accepted into the
/// collection and how many were filtered out as non-images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IngestReport {
    pub accepted: usize,
    pub rejected: usize,
}

/// Slideshow playback state. When `active`, `index` is always within the
/// bounds of the current slideshow sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Slideshow {
    active: bool,
    index: usize,
}

impl Slideshow {
    pub fn is_active(self) -> bool {
        self.active
    }

    pub fn index(self) -> usize {
        self.index
    }
}

/// In-memory working set of photos plus the user-driven view state over
/// them.
#[derive(Debug, Default)]
pub struct GalleryState {
    photos: Vec<Photo>,
    selected: HashSet<PhotoId>,
    slideshow: Slideshow,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one photo per image-typed upload, each with a fresh id and
    /// a freshly allocated resource handle. Non-image files are filtered
    /// out and counted in the report.
    pub fn ingest(&mut self, uploads: Vec<UploadedPhoto>) -> IngestReport {
        let mut report = IngestReport::default();
        for upload in uploads {
            if is_supported_image(Path::new(&upload.name)) {
                self.photos.push(Photo::new(upload));
                report.accepted += 1;
            } else {
                report.rejected += 1;
            }
        }
        report
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn is_selected(&self, id: PhotoId) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Flips membership of `id` in the selection set. Unknown ids are a
    /// no-op, not a failure.
    pub fn toggle_select(&mut self, id: PhotoId) {
        if !self.photos.iter().any(|p| p.id() == id) {
            return;
        }
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Removes the photo with `id`, releasing its resource handle and
    /// dropping its id from the selection set in the same step. Returns
    /// `false` (no-op) when the id is not present.
    ///
    /// Removing the photo shown mid-slideshow recomputes the sequence and
    /// clamps the index into range; an emptied sequence stops playback.
    pub fn remove(&mut self, id: PhotoId) -> bool {
        let Some(pos) = self.photos.iter().position(|p| p.id() == id) else {
            return false;
        };

        let mut photo = self.photos.remove(pos);
        photo.release();
        self.selected.remove(&id);

        if self.slideshow.active {
            let len = self.slideshow_sequence().len();
            if len == 0 {
                self.slideshow = Slideshow::default();
            } else if self.slideshow.index >= len {
                self.slideshow.index = len - 1;
            }
        }

        true
    }

    /// Starts slideshow playback at the first selected photo. Rejected
    /// with state unchanged when nothing is selected.
    pub fn start_slideshow(&mut self) -> Result<(), GalleryError> {
        if self.selected.is_empty() {
            return Err(GalleryError::EmptySelection);
        }
        self.slideshow = Slideshow {
            active: true,
            index: 0,
        };
        Ok(())
    }

    /// Advances to the next slide, wrapping back to the first. Only
    /// meaningful while a slideshow is active.
    pub fn advance_slide(&mut self) {
        if !self.slideshow.active {
            return;
        }
        let len = self.slideshow_sequence().len();
        if len == 0 {
            return;
        }
        self.slideshow.index = (self.slideshow.index + 1) % len;
    }

    pub fn stop_slideshow(&mut self) {
        self.slideshow = Slideshow::default();
    }

    pub fn slideshow(&self) -> Slideshow {
        self.slideshow
    }

    /// The ordered subsequence of photos whose ids are selected, in
    /// collection order (not selection order).
    pub fn slideshow_sequence(&self) -> Vec<&Photo> {
        self.photos
            .iter()
            .filter(|p| self.selected.contains(&p.id()))
            .collect()
    }

    /// The photo currently shown, when a slideshow is active.
    pub fn current_slide(&self) -> Option<&Photo> {
        if !self.slideshow.active {
            return None;
        }
        self.slideshow_sequence()
            .into_iter()
            .nth(self.slideshow.index)
    }

    /// Releases every photo handle and resets all view state. Called on
    /// teardown so no resource outlives the gallery.
    pub fn clear(&mut self) {
        for photo in &mut self.photos {
            photo.release();
        }
        self.photos.clear();
        self.selected.clear();
        self.slideshow = Slideshow::default();
    }
}
