//! Conversation engine.
//!
//! Owns the append-only message log and the two simulated processing
//! pipelines: chat (keyword reply synthesis) and image/text analysis
//! (canned extraction results). Each pipeline has one busy flag; a
//! call arriving while the same pipeline is in flight is rejected with
//! [`AssistantError::PipelineBusy`] — never queued. The two pipelines
//! are independent and may overlap each other.

pub mod classify;
pub mod templates;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::models::{ConversationMessage, MessageRole};
use crate::outcome::Notifier;

/// Simulated latency before a chat reply is synthesized.
const CHAT_DELAY: Duration = Duration::from_millis(1000);
/// Simulated latency of the image extraction pipeline.
const IMAGE_DELAY: Duration = Duration::from_millis(2000);
/// Simulated latency of the text analysis pipeline.
const TEXT_DELAY: Duration = Duration::from_millis(1500);

// ═══════════════════════════════════════════════════════════
// Error type
// ═══════════════════════════════════════════════════════════

/// Errors from conversation engine operations.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("{pipeline} pipeline already in flight")]
    PipelineBusy { pipeline: &'static str },
}

// ═══════════════════════════════════════════════════════════
// Busy flag guard
// ═══════════════════════════════════════════════════════════

/// Holds a pipeline's busy flag; clears it on drop so the flag is
/// released even when the caller drops the future mid-delay.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    /// Try to claim the flag. `None` when the pipeline is in flight.
    fn claim(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

// ═══════════════════════════════════════════════════════════
// AssistantEngine
// ═══════════════════════════════════════════════════════════

pub struct AssistantEngine {
    history: RwLock<Vec<ConversationMessage>>,
    chat_busy: AtomicBool,
    analysis_busy: AtomicBool,
    notifier: Arc<Notifier>,
}

impl AssistantEngine {
    /// Engine seeded with the single assistant greeting.
    pub fn new(notifier: Arc<Notifier>) -> Self {
        Self {
            history: RwLock::new(vec![ConversationMessage::now(
                MessageRole::Assistant,
                templates::SEED_GREETING,
            )]),
            chat_busy: AtomicBool::new(false),
            analysis_busy: AtomicBool::new(false),
            notifier,
        }
    }

    // ── Chat pipeline ───────────────────────────────────────

    /// Post a user message and synthesize the assistant reply.
    ///
    /// The user message is appended before the simulated delay; exactly
    /// one assistant message is appended after it. Rejected (one error
    /// outcome, no history change) when a chat call is already in
    /// flight.
    pub async fn post_user_message(&self, text: &str) -> Result<(), AssistantError> {
        let Some(_guard) = BusyGuard::claim(&self.chat_busy) else {
            self.notifier.error("Failed to send message");
            return Err(AssistantError::PipelineBusy { pipeline: "chat" });
        };

        self.append(ConversationMessage::now(MessageRole::User, text));

        tokio::time::sleep(CHAT_DELAY).await;

        let reply = classify::reply_for(text);
        self.append(ConversationMessage::now(MessageRole::Assistant, reply));
        self.notifier.success("Assistant replied");
        Ok(())
    }

    /// Truncate the history back to the seed greeting.
    pub fn reset_conversation(&self) {
        if let Ok(mut history) = self.history.write() {
            history.clear();
            history.push(ConversationMessage::now(
                MessageRole::Assistant,
                templates::SEED_GREETING,
            ));
        }
        self.notifier.info("Conversation cleared");
    }

    // ── Analysis pipeline ───────────────────────────────────

    /// Simulate extracting text from an uploaded prescription image.
    ///
    /// Returns the canned extraction regardless of input. Shares the
    /// analysis busy flag with [`analyze_text`](Self::analyze_text);
    /// overlapping analysis calls are rejected with one error outcome,
    /// and the caller should render an empty result.
    pub async fn analyze_image(&self, image: &[u8]) -> Result<String, AssistantError> {
        let Some(_guard) = BusyGuard::claim(&self.analysis_busy) else {
            self.notifier.error("Failed to process prescription image");
            return Err(AssistantError::PipelineBusy { pipeline: "analysis" });
        };

        tracing::debug!(bytes = image.len(), "Image analysis requested");
        tokio::time::sleep(IMAGE_DELAY).await;
        Ok(templates::PRESCRIPTION_EXTRACTION.to_string())
    }

    /// Simulate analyzing extracted prescription text.
    pub async fn analyze_text(&self, text: &str) -> Result<String, AssistantError> {
        let Some(_guard) = BusyGuard::claim(&self.analysis_busy) else {
            self.notifier.error("Failed to analyze medical text");
            return Err(AssistantError::PipelineBusy { pipeline: "analysis" });
        };

        tracing::debug!(chars = text.len(), "Text analysis requested");
        tokio::time::sleep(TEXT_DELAY).await;
        Ok(templates::TEXT_ANALYSIS.to_string())
    }

    // ── Accessors ───────────────────────────────────────────

    /// Snapshot of the message log, in append order.
    pub fn messages(&self) -> Vec<ConversationMessage> {
        self.history
            .read()
            .map(|history| history.clone())
            .unwrap_or_default()
    }

    pub fn is_chat_busy(&self) -> bool {
        self.chat_busy.load(Ordering::Acquire)
    }

    pub fn is_analysis_busy(&self) -> bool {
        self.analysis_busy.load(Ordering::Acquire)
    }

    fn append(&self, message: ConversationMessage) {
        if let Ok(mut history) = self.history.write() {
            history.push(message);
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
