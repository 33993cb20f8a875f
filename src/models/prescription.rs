use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::PrescriptionStatus;

/// A signed prescription issued by a clinician for a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: String,
    pub author_id: String,
    pub author_name: String,
    pub subject_id: String,
    pub subject_name: String,
    pub medications: Vec<Medication>,
    pub diagnosis: String,
    pub instructions: String,
    pub created_at: DateTime<Utc>,
    pub signature: String,
    pub status: PrescriptionStatus,
}

/// One medication line within a prescription. Not independently
/// identified — it only exists nested inside a `Prescription`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
}

/// Caller-supplied fields for a new prescription. The store assigns
/// `id` and `created_at`.
#[derive(Debug, Clone, Deserialize)]
pub struct PrescriptionDraft {
    pub author_id: String,
    pub author_name: String,
    pub subject_id: String,
    pub subject_name: String,
    pub medications: Vec<Medication>,
    pub diagnosis: String,
    pub instructions: String,
    pub signature: String,
    pub status: PrescriptionStatus,
}
