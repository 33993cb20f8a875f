use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A medical document attached to a patient's record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalDocument {
    pub id: String,
    pub subject_id: String,
    pub title: String,
    /// Free-form category ("Imaging", "Laboratory", ...). Deliberately
    /// not an enum: the upload form accepts arbitrary categories.
    pub doc_type: String,
    /// Opaque handle to the uploaded file. The core never interprets it.
    pub file_ref: String,
    pub uploaded_at: DateTime<Utc>,
    pub notes: Option<String>,
}

/// Caller-supplied fields for a document upload. The store assigns
/// `id` and `uploaded_at`.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentDraft {
    pub subject_id: String,
    pub title: String,
    pub doc_type: String,
    pub file_ref: String,
    pub notes: Option<String>,
}
