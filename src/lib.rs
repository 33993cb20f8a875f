//! CareLink portal core.
//!
//! Domain state and access control for a role-gated clinical-records
//! portal: the identity store, the route access policy, the in-memory
//! record store, the scripted conversation engine, and the outcome
//! channel they all report through. The UI shell around this crate is
//! a thin collaborator — it establishes an actor, asks the policy
//! whether a view is permitted, then calls the stores and renders
//! their results.

pub mod access;
pub mod assistant;
pub mod config;
pub mod ids;
pub mod models;
pub mod outcome;
pub mod records;
pub mod session;
pub mod storage;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::assistant::AssistantEngine;
use crate::outcome::Notifier;
use crate::records::RecordStore;
use crate::session::SessionManager;
use crate::storage::SessionStore;

/// Initialize tracing for the embedding shell. Call once at startup.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} core starting v{}", config::APP_NAME, config::APP_VERSION);
}

// ═══════════════════════════════════════════════════════════
// PortalCore — the four capability surfaces, one shared notifier
// ═══════════════════════════════════════════════════════════

/// One running session's stores, wired to a shared outcome channel.
///
/// The shell constructs this once at boot, calls
/// `session().restore_session()` before rendering anything role-gated,
/// and passes the surfaces down to its views. Each instance owns its
/// collections outright; there is no cross-instance sharing.
pub struct PortalCore {
    notifier: Arc<Notifier>,
    session: SessionManager,
    records: RecordStore,
    assistant: AssistantEngine,
}

impl PortalCore {
    /// Core with seeded demo records, persisting the session to `slot`.
    pub fn new(slot: Arc<dyn SessionStore>) -> Self {
        let notifier = Arc::new(Notifier::new());
        Self {
            session: SessionManager::new(slot, Arc::clone(&notifier)),
            records: RecordStore::seeded(Arc::clone(&notifier)),
            assistant: AssistantEngine::new(Arc::clone(&notifier)),
            notifier,
        }
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn assistant(&self) -> &AssistantEngine {
        &self.assistant
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}
