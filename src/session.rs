//! Identity store.
//!
//! Owns the current authenticated actor and the login/register/logout
//! lifecycle. State machine: `Unauthenticated → Authenticating →
//! Authenticated`, back to `Unauthenticated` on logout. The
//! `Authenticating` state is transient and collapses into one of the
//! other two before each operation returns.
//!
//! Credentials are checked against a fixed seeded reference set (demo
//! deployment — there is no real credential backend). Registration is
//! unconditional and performs no email-uniqueness check; that gap is
//! inherited from the deployment this core serves, not an oversight.

use std::sync::{Arc, RwLock};

use crate::config;
use crate::ids;
use crate::models::{Actor, RegisterProfile, UserRole};
use crate::outcome::Notifier;
use crate::storage::SessionStore;

// ═══════════════════════════════════════════════════════════
// Auth state
// ═══════════════════════════════════════════════════════════

/// Authentication lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    /// Transient: a restore or login is in progress.
    Authenticating,
    Authenticated(Actor),
}

// ═══════════════════════════════════════════════════════════
// Seeded credentials
// ═══════════════════════════════════════════════════════════

/// One entry of the fixed credential reference set.
struct Credential {
    actor: Actor,
    secret: &'static str,
}

/// The demo roster: two clinicians, two patients, all sharing the
/// same demo secret.
fn seed_credentials() -> Vec<Credential> {
    vec![
        Credential {
            actor: Actor {
                id: "d1".into(),
                display_name: "Dr. Sarah Johnson".into(),
                email: "sarah@example.com".into(),
                role: UserRole::Clinician,
                avatar: Some("https://i.pravatar.cc/150?img=32".into()),
                specialization: Some("Cardiologist".into()),
                medical_id: None,
            },
            secret: "password123",
        },
        Credential {
            actor: Actor {
                id: "d2".into(),
                display_name: "Dr. Michael Chen".into(),
                email: "michael@example.com".into(),
                role: UserRole::Clinician,
                avatar: Some("https://i.pravatar.cc/150?img=11".into()),
                specialization: Some("Neurologist".into()),
                medical_id: None,
            },
            secret: "password123",
        },
        Credential {
            actor: Actor {
                id: "p1".into(),
                display_name: "James Wilson".into(),
                email: "james@example.com".into(),
                role: UserRole::Patient,
                avatar: Some("https://i.pravatar.cc/150?img=53".into()),
                specialization: None,
                medical_id: Some("PAT-10032".into()),
            },
            secret: "password123",
        },
        Credential {
            actor: Actor {
                id: "p2".into(),
                display_name: "Emily Davis".into(),
                email: "emily@example.com".into(),
                role: UserRole::Patient,
                avatar: Some("https://i.pravatar.cc/150?img=23".into()),
                specialization: None,
                medical_id: Some("PAT-10045".into()),
            },
            secret: "password123",
        },
    ]
}

/// A fresh pravatar URL for self-registered users.
fn random_avatar() -> String {
    use rand::Rng;
    format!(
        "https://i.pravatar.cc/150?img={}",
        rand::thread_rng().gen_range(0..70)
    )
}

// ═══════════════════════════════════════════════════════════
// SessionManager
// ═══════════════════════════════════════════════════════════

/// The identity store. At most one actor is current at a time.
pub struct SessionManager {
    state: RwLock<AuthState>,
    credentials: Vec<Credential>,
    slot: Arc<dyn SessionStore>,
    notifier: Arc<Notifier>,
}

impl SessionManager {
    pub fn new(slot: Arc<dyn SessionStore>, notifier: Arc<Notifier>) -> Self {
        Self {
            state: RwLock::new(AuthState::Unauthenticated),
            credentials: seed_credentials(),
            slot,
            notifier,
        }
    }

    // ── Restore ─────────────────────────────────────────────

    /// Load a previously persisted actor from the session slot.
    ///
    /// Must complete before any role-gated view is rendered; the shell
    /// blocks on `is_loading()` until it does. A corrupt or unreadable
    /// slot is treated as no session. Emits no outcome signal: nothing
    /// here was initiated by the user.
    pub fn restore_session(&self) -> bool {
        self.set_state(AuthState::Authenticating);

        let restored = match self.slot.load(config::SESSION_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Actor>(&raw) {
                Ok(actor) => {
                    tracing::info!(actor_id = %actor.id, "Session restored");
                    Some(actor)
                }
                Err(e) => {
                    tracing::warn!("Discarding unreadable session slot: {e}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Session slot load failed: {e}");
                None
            }
        };

        match restored {
            Some(actor) => {
                self.set_state(AuthState::Authenticated(actor));
                true
            }
            None => {
                self.set_state(AuthState::Unauthenticated);
                false
            }
        }
    }

    // ── Login / register / logout ───────────────────────────

    /// Authenticate against the seeded credential set.
    ///
    /// On a match the actor (secret stripped) becomes current and is
    /// persisted. On no match the prior state is left untouched and a
    /// constant-shape failure is reported — the caller cannot tell
    /// whether the email existed.
    pub fn login(&self, email: &str, secret: &str) -> bool {
        let prior = self.snapshot();
        self.set_state(AuthState::Authenticating);

        let found = self
            .credentials
            .iter()
            .find(|c| c.actor.email == email && c.secret == secret);

        match found {
            Some(credential) => {
                let actor = credential.actor.clone();
                self.persist(&actor);
                self.notifier
                    .success(format!("Welcome back, {}!", actor.display_name));
                tracing::info!(actor_id = %actor.id, role = actor.role.as_str(), "Login");
                self.set_state(AuthState::Authenticated(actor));
                true
            }
            None => {
                self.notifier.error("Invalid email or password");
                self.set_state(prior);
                false
            }
        }
    }

    /// Synthesize and activate a brand-new actor.
    ///
    /// Always succeeds: no uniqueness check against existing emails is
    /// performed. Patients without a supplied medical id get a derived
    /// `PAT-…` one.
    pub fn register(&self, profile: RegisterProfile, role: UserRole) -> bool {
        self.set_state(AuthState::Authenticating);

        let medical_id = match role {
            UserRole::Patient => Some(
                profile
                    .medical_id
                    .unwrap_or_else(|| format!("PAT-{}", ids::random_base36(5))),
            ),
            _ => profile.medical_id,
        };
        let actor = Actor {
            id: ids::actor_id(),
            display_name: profile.name,
            email: profile.email,
            role,
            avatar: Some(random_avatar()),
            specialization: profile.specialization,
            medical_id,
        };

        self.persist(&actor);
        self.notifier.success("Registration successful!");
        tracing::info!(actor_id = %actor.id, role = actor.role.as_str(), "Registered");
        self.set_state(AuthState::Authenticated(actor));
        true
    }

    /// Clear the current actor and the persisted slot. Idempotent.
    pub fn logout(&self) {
        if let Err(e) = self.slot.remove(config::SESSION_KEY) {
            tracing::warn!("Session slot remove failed: {e}");
        }
        self.set_state(AuthState::Unauthenticated);
        self.notifier.info("You have been logged out");
    }

    // ── Accessors ───────────────────────────────────────────

    /// The current actor, if authenticated.
    pub fn current(&self) -> Option<Actor> {
        match self.snapshot() {
            AuthState::Authenticated(actor) => Some(actor),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// True while a restore or login is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.snapshot(), AuthState::Authenticating)
    }

    pub fn role(&self) -> Option<UserRole> {
        self.current().map(|actor| actor.role)
    }

    // ── Internals ───────────────────────────────────────────

    fn snapshot(&self) -> AuthState {
        self.state
            .read()
            .map(|guard| guard.clone())
            .unwrap_or(AuthState::Unauthenticated)
    }

    fn set_state(&self, next: AuthState) {
        if let Ok(mut guard) = self.state.write() {
            *guard = next;
        }
    }

    /// Persist the actor to the slot. A write failure downgrades the
    /// session to memory-only rather than failing the operation.
    fn persist(&self, actor: &Actor) {
        match serde_json::to_string(actor) {
            Ok(raw) => {
                if let Err(e) = self.slot.save(config::SESSION_KEY, &raw) {
                    tracing::warn!("Session slot save failed: {e}");
                }
            }
            Err(e) => tracing::warn!("Session serialization failed: {e}"),
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Severity;
    use crate::storage::MemorySessionStore;

    fn manager() -> (SessionManager, Arc<Notifier>) {
        let notifier = Arc::new(Notifier::new());
        let manager = SessionManager::new(
            Arc::new(MemorySessionStore::new()),
            Arc::clone(&notifier),
        );
        (manager, notifier)
    }

    #[test]
    fn starts_unauthenticated() {
        let (manager, _) = manager();
        assert!(!manager.is_authenticated());
        assert!(manager.current().is_none());
        assert!(manager.role().is_none());
    }

    #[test]
    fn seeded_clinician_can_login() {
        let (manager, notifier) = manager();
        assert!(manager.login("sarah@example.com", "password123"));
        assert!(manager.is_authenticated());

        let actor = manager.current().unwrap();
        assert_eq!(actor.id, "d1");
        assert_eq!(actor.role, UserRole::Clinician);
        assert_eq!(actor.specialization.as_deref(), Some("Cardiologist"));

        let events = notifier.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].severity, Severity::Success);
        assert!(events[0].message.contains("Sarah Johnson"));
    }

    #[test]
    fn seeded_patient_can_login() {
        let (manager, _) = manager();
        assert!(manager.login("james@example.com", "password123"));
        let actor = manager.current().unwrap();
        assert_eq!(actor.role, UserRole::Patient);
        assert_eq!(actor.medical_id.as_deref(), Some("PAT-10032"));
    }

    #[test]
    fn wrong_secret_leaves_state_unchanged() {
        let (manager, notifier) = manager();
        assert!(!manager.login("sarah@example.com", "wrong"));
        assert!(!manager.is_authenticated());
        assert!(manager.current().is_none());

        let events = notifier.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].severity, Severity::Error);
        assert_eq!(events[0].message, "Invalid email or password");
    }

    #[test]
    fn unknown_email_reports_same_failure_as_wrong_secret() {
        let (manager, notifier) = manager();
        manager.login("nobody@example.com", "password123");
        manager.login("sarah@example.com", "wrong");

        let events = notifier.events();
        assert_eq!(events[0].message, events[1].message);
        assert_eq!(events[0].severity, events[1].severity);
    }

    #[test]
    fn failed_login_keeps_prior_actor() {
        let (manager, _) = manager();
        assert!(manager.login("sarah@example.com", "password123"));
        assert!(!manager.login("sarah@example.com", "wrong"));
        // Prior session survives the failed attempt.
        assert_eq!(manager.current().unwrap().id, "d1");
    }

    #[test]
    fn register_patient_derives_medical_id() {
        let (manager, notifier) = manager();
        let ok = manager.register(
            RegisterProfile {
                name: "New Patient".into(),
                email: "new@example.com".into(),
                secret: "irrelevant".into(),
                specialization: None,
                medical_id: None,
            },
            UserRole::Patient,
        );
        assert!(ok);

        let actor = manager.current().unwrap();
        assert!(actor.medical_id.unwrap().starts_with("PAT-"));
        assert_eq!(notifier.events()[0].message, "Registration successful!");
    }

    #[test]
    fn register_keeps_supplied_medical_id() {
        let (manager, _) = manager();
        manager.register(
            RegisterProfile {
                name: "Keeps Id".into(),
                email: "keeps@example.com".into(),
                secret: "x".into(),
                specialization: None,
                medical_id: Some("PAT-99999".into()),
            },
            UserRole::Patient,
        );
        assert_eq!(
            manager.current().unwrap().medical_id.as_deref(),
            Some("PAT-99999")
        );
    }

    #[test]
    fn register_issues_fresh_unique_ids() {
        let (manager, _) = manager();
        let mut seen = std::collections::HashSet::new();
        for i in 0..20 {
            manager.register(
                RegisterProfile {
                    name: format!("User {i}"),
                    email: format!("user{i}@example.com"),
                    secret: "x".into(),
                    specialization: None,
                    medical_id: None,
                },
                UserRole::Clinician,
            );
            assert!(seen.insert(manager.current().unwrap().id));
        }
    }

    #[test]
    fn logout_clears_session_and_is_idempotent() {
        let (manager, notifier) = manager();
        manager.login("sarah@example.com", "password123");
        manager.logout();
        assert!(!manager.is_authenticated());

        manager.logout();
        assert!(!manager.is_authenticated());

        let infos = notifier
            .events()
            .into_iter()
            .filter(|e| e.severity == Severity::Info)
            .count();
        assert_eq!(infos, 2);
    }

    #[test]
    fn session_survives_restart_via_slot() {
        let slot: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let notifier = Arc::new(Notifier::new());

        let first = SessionManager::new(Arc::clone(&slot), Arc::clone(&notifier));
        first.login("emily@example.com", "password123");
        drop(first);

        let second = SessionManager::new(Arc::clone(&slot), notifier);
        assert!(second.restore_session());
        assert_eq!(second.current().unwrap().id, "p2");
        assert!(!second.is_loading());
    }

    #[test]
    fn restore_with_empty_slot_stays_unauthenticated() {
        let (manager, _) = manager();
        assert!(!manager.restore_session());
        assert!(!manager.is_authenticated());
        assert!(!manager.is_loading());
    }

    #[test]
    fn restore_discards_corrupt_slot() {
        let slot = Arc::new(MemorySessionStore::new());
        slot.save(config::SESSION_KEY, "not json").unwrap();
        let manager = SessionManager::new(slot, Arc::new(Notifier::new()));
        assert!(!manager.restore_session());
        assert!(!manager.is_authenticated());
    }

    #[test]
    fn logout_removes_persisted_slot() {
        let slot: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let manager =
            SessionManager::new(Arc::clone(&slot), Arc::new(Notifier::new()));
        manager.login("sarah@example.com", "password123");
        manager.logout();
        assert!(slot.load(config::SESSION_KEY).unwrap().is_none());
    }
}
