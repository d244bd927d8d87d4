// SPDX-License-Identifier: MPL-2.0
//! In-session diagnostics: a bounded buffer of warning and error events.
//!
//! Nothing here leaves the process; the buffer exists so a support
//! conversation can reconstruct what the session did without scraping
//! stdout. Writers hold a cheap cloneable [`DiagnosticsHandle`].

pub mod buffer;
pub mod events;

pub use buffer::CircularBuffer;
pub use events::{DiagnosticEvent, ErrorEvent, ErrorType, WarningEvent, WarningType};

use std::sync::{Arc, Mutex};

/// Default number of retained events.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Shared, thread-safe writer over the diagnostics buffer.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    buffer: Arc<Mutex<CircularBuffer<DiagnosticEvent>>>,
}

impl DiagnosticsHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(CircularBuffer::new(capacity))),
        }
    }

    pub fn log_warning(&self, warning_type: WarningType, message: impl Into<String>) {
        let event = DiagnosticEvent::Warning(WarningEvent::new(warning_type, message));
        self.push(event);
    }

    pub fn log_error(&self, error_type: ErrorType, message: impl Into<String>) {
        let event = DiagnosticEvent::Error(ErrorEvent::new(error_type, message));
        self.push(event);
    }

    fn push(&self, event: DiagnosticEvent) {
        let mut buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        buffer.push(event);
    }

    /// Snapshot of the retained events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        let buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        buffer.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        let buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DiagnosticsHandle {
    fn default() -> Self {
        Self::new()
    }
}
