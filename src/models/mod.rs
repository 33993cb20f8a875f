//! Domain entities shared by the portal core.
//!
//! One file per entity, plus `enums` for the string-typed status and
//! role enums. All entities derive serde so the embedding shell can
//! hand them to its presentation layer untouched.

pub mod actor;
pub mod appointment;
pub mod document;
pub mod enums;
pub mod message;
pub mod prescription;

pub use actor::{Actor, RegisterProfile};
pub use appointment::{Appointment, AppointmentDraft};
pub use document::{DocumentDraft, MedicalDocument};
pub use enums::{AppointmentStatus, MessageRole, PrescriptionStatus, UserRole};
pub use message::ConversationMessage;
pub use prescription::{Medication, Prescription, PrescriptionDraft};

/// Errors from model parsing.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid {field} value: {value}")]
    InvalidEnum { field: String, value: String },
}
