//! Audit-log collaborator.
//!
//! # Responsibilities
//! - Define the contract handlers record endpoint hits through
//! - Provide swappable backends: a no-op default and an in-memory
//!   implementation for tests and local runs
//!
//! The handlers call this best-effort: an audit failure is logged and
//! discarded, never surfaced to the caller.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;
use tokio::sync::Mutex;

/// Severity of an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Debug,
    Error,
    Warning,
}

impl LogKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LogKind::Debug => "debug",
            LogKind::Error => "error",
            LogKind::Warning => "warning",
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from the audit backend.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("audit backend error: {0}")]
    Backend(String),
}

/// Contract for recording audit entries.
#[async_trait]
pub trait AuditLog: Send + Sync {
    async fn save_log(
        &self,
        kind: LogKind,
        message: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<(), AuditError>;
}

/// Backend that accepts and discards every entry.
///
/// The production default until a persistent backend exists.
#[derive(Debug, Default)]
pub struct NoopAudit;

#[async_trait]
impl AuditLog for NoopAudit {
    async fn save_log(
        &self,
        _kind: LogKind,
        _message: &str,
        _timestamp: DateTime<Utc>,
    ) -> Result<(), AuditError> {
        Ok(())
    }
}

/// One captured audit entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub kind: LogKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// In-memory backend capturing entries for inspection.
#[derive(Debug, Default)]
pub struct MemoryAudit {
    entries: Mutex<Vec<AuditEntry>>,
}

impl MemoryAudit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything captured so far.
    pub async fn entries(&self) -> Vec<AuditEntry> {
        self.entries.lock().await.clone()
    }
}

#[async_trait]
impl AuditLog for MemoryAudit {
    async fn save_log(
        &self,
        kind: LogKind,
        message: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<(), AuditError> {
        self.entries.lock().await.push(AuditEntry {
            kind,
            message: message.to_string(),
            timestamp,
        });
        Ok(())
    }
}
