use serde::{Deserialize, Serialize};

use super::enums::UserRole;

/// The authenticated user of the portal.
///
/// Exactly one actor is current per running session. The credential
/// used to establish it is never stored here — `session` strips it
/// before the actor leaves the credential table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub role: UserRole,
    /// Avatar image URL, purely presentational.
    pub avatar: Option<String>,
    /// Medical specialty — clinicians only.
    pub specialization: Option<String>,
    /// Medical-record identifier — patients only.
    pub medical_id: Option<String>,
}

/// Caller-supplied profile for self-registration.
///
/// The secret is accepted for interface parity with a real backend but
/// is discarded: registration is unconditional in this core.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterProfile {
    pub name: String,
    pub email: String,
    pub secret: String,
    pub specialization: Option<String>,
    pub medical_id: Option<String>,
}
