//! Outcome signal channel.
//!
//! Every mutating operation in the portal core emits exactly one
//! outcome event here. The embedding shell drains the buffer and
//! renders events however it likes (toasts, status bars, logs) — the
//! core only records them, in emission order.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════
// Event types
// ═══════════════════════════════════════════════════════════

/// How the shell should present an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// A single outcome signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeEvent {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub message: String,
}

// ═══════════════════════════════════════════════════════════
// Notifier
// ═══════════════════════════════════════════════════════════

/// In-memory outcome buffer shared by the identity store, record
/// store and conversation engine.
pub struct Notifier {
    buffer: Mutex<Vec<OutcomeEvent>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            buffer: Mutex::new(Vec::new()),
        }
    }

    /// Record an outcome event.
    pub fn emit(&self, severity: Severity, message: impl Into<String>) {
        let message = message.into();
        match severity {
            Severity::Error => tracing::warn!(%message, "outcome"),
            _ => tracing::debug!(%message, ?severity, "outcome"),
        }
        if let Ok(mut buf) = self.buffer.lock() {
            buf.push(OutcomeEvent {
                timestamp: Utc::now(),
                severity,
                message,
            });
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.emit(Severity::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.emit(Severity::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.emit(Severity::Info, message);
    }

    /// Snapshot of all buffered events, in emission order.
    pub fn events(&self) -> Vec<OutcomeEvent> {
        self.buffer
            .lock()
            .map(|buf| buf.clone())
            .unwrap_or_default()
    }

    /// Drain all buffered events (shell consumed them).
    pub fn drain(&self) -> Vec<OutcomeEvent> {
        self.buffer
            .lock()
            .map(|mut buf| buf.drain(..).collect())
            .unwrap_or_default()
    }

    /// Current buffer size.
    pub fn len(&self) -> usize {
        self.buffer.lock().map(|buf| buf.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
