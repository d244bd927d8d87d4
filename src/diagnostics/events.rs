// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types captured during a session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse category for warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// One or more files were refused at gallery intake.
    RejectedUpload,
    /// A section is showing a cached record after a failed refresh.
    StaleContent,
    Other,
}

/// Coarse category for errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Remote content read failed.
    ContentFetch,
    /// Remote content write failed.
    ContentSave,
    /// The remote store refused the caller's credentials.
    PermissionDenied,
    /// User input failed local validation.
    Validation,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningEvent {
    pub timestamp: DateTime<Utc>,
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            warning_type,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEvent {
    pub timestamp: DateTime<Utc>,
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            error_type,
            message: message.into(),
        }
    }
}

/// A single entry in the diagnostics buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticEvent {
    Warning(WarningEvent),
    Error(ErrorEvent),
}

impl DiagnosticEvent {
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            DiagnosticEvent::Warning(event) => event.timestamp,
            DiagnosticEvent::Error(event) => event.timestamp,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            DiagnosticEvent::Warning(event) => &event.message,
            DiagnosticEvent::Error(event) => &event.message,
        }
    }
}
