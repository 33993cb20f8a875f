use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::enums::AppointmentStatus;

/// A scheduled visit between a clinician and a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub clinician_id: String,
    pub clinician_name: String,
    pub subject_id: String,
    pub subject_name: String,
    pub date: NaiveDate,
    /// Local time-of-day at the clinic, no timezone attached.
    pub time: NaiveTime,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

/// Caller-supplied fields for a new appointment. The store assigns `id`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentDraft {
    pub clinician_id: String,
    pub clinician_name: String,
    pub subject_id: String,
    pub subject_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}
