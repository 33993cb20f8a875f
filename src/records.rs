//! Record store.
//!
//! In-memory owner of the three record collections: prescriptions,
//! appointments, medical documents. Collections are append-only and
//! seeded with demo fixtures at construction. Creates assign the id
//! and any server-side timestamp, commit without suspension, and emit
//! exactly one outcome signal; queries are pure insertion-ordered
//! filters.
//!
//! The store accepts author/subject ids as supplied: there is no
//! referential check against the identity store's roster. A record
//! referencing a nonexistent actor is stored as-is.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::ids;
use crate::models::{
    Appointment, AppointmentDraft, AppointmentStatus, DocumentDraft, MedicalDocument, Medication,
    Prescription, PrescriptionDraft, PrescriptionStatus,
};
use crate::outcome::Notifier;

// ═══════════════════════════════════════════════════════════
// RecordStore
// ═══════════════════════════════════════════════════════════

pub struct RecordStore {
    prescriptions: RwLock<Vec<Prescription>>,
    appointments: RwLock<Vec<Appointment>>,
    documents: RwLock<Vec<MedicalDocument>>,
    notifier: Arc<Notifier>,
}

impl RecordStore {
    /// An empty store (no fixtures). Mostly useful in tests.
    pub fn new(notifier: Arc<Notifier>) -> Self {
        Self {
            prescriptions: RwLock::new(Vec::new()),
            appointments: RwLock::new(Vec::new()),
            documents: RwLock::new(Vec::new()),
            notifier,
        }
    }

    /// A store seeded with the demo fixtures the portal ships with.
    pub fn seeded(notifier: Arc<Notifier>) -> Self {
        let store = Self::new(notifier);
        if let (Ok(mut p), Ok(mut a), Ok(mut d)) = (
            store.prescriptions.write(),
            store.appointments.write(),
            store.documents.write(),
        ) {
            *p = fixtures::prescriptions();
            *a = fixtures::appointments();
            *d = fixtures::documents();
        }
        store
    }

    // ── Creates ─────────────────────────────────────────────

    /// Append a new prescription. Assigns `id` and `created_at`.
    pub fn create_prescription(&self, draft: PrescriptionDraft) -> bool {
        let record = Prescription {
            id: ids::record_id('p'),
            author_id: draft.author_id,
            author_name: draft.author_name,
            subject_id: draft.subject_id,
            subject_name: draft.subject_name,
            medications: draft.medications,
            diagnosis: draft.diagnosis,
            instructions: draft.instructions,
            created_at: Utc::now(),
            signature: draft.signature,
            status: draft.status,
        };
        tracing::debug!(id = %record.id, subject = %record.subject_id, "Prescription created");
        if let Ok(mut list) = self.prescriptions.write() {
            list.push(record);
        }
        self.notifier.success("Prescription created successfully");
        true
    }

    /// Append a new appointment. Assigns `id`.
    pub fn create_appointment(&self, draft: AppointmentDraft) -> bool {
        let record = Appointment {
            id: ids::record_id('a'),
            clinician_id: draft.clinician_id,
            clinician_name: draft.clinician_name,
            subject_id: draft.subject_id,
            subject_name: draft.subject_name,
            date: draft.date,
            time: draft.time,
            status: draft.status,
            notes: draft.notes,
        };
        tracing::debug!(id = %record.id, subject = %record.subject_id, "Appointment scheduled");
        if let Ok(mut list) = self.appointments.write() {
            list.push(record);
        }
        self.notifier.success("Appointment scheduled successfully");
        true
    }

    /// Append a new document. Assigns `id` and `uploaded_at`.
    pub fn upload_document(&self, draft: DocumentDraft) -> bool {
        let record = MedicalDocument {
            id: ids::record_id('d'),
            subject_id: draft.subject_id,
            title: draft.title,
            doc_type: draft.doc_type,
            file_ref: draft.file_ref,
            uploaded_at: Utc::now(),
            notes: draft.notes,
        };
        tracing::debug!(id = %record.id, subject = %record.subject_id, "Document uploaded");
        if let Ok(mut list) = self.documents.write() {
            list.push(record);
        }
        self.notifier.success("Document uploaded successfully");
        true
    }

    // ── Scoped queries ──────────────────────────────────────

    pub fn prescriptions_by_subject(&self, subject_id: &str) -> Vec<Prescription> {
        self.filter(&self.prescriptions, |p| p.subject_id == subject_id)
    }

    pub fn prescriptions_by_author(&self, author_id: &str) -> Vec<Prescription> {
        self.filter(&self.prescriptions, |p| p.author_id == author_id)
    }

    pub fn appointments_by_subject(&self, subject_id: &str) -> Vec<Appointment> {
        self.filter(&self.appointments, |a| a.subject_id == subject_id)
    }

    pub fn appointments_by_author(&self, clinician_id: &str) -> Vec<Appointment> {
        self.filter(&self.appointments, |a| a.clinician_id == clinician_id)
    }

    pub fn documents_by_subject(&self, subject_id: &str) -> Vec<MedicalDocument> {
        self.filter(&self.documents, |d| d.subject_id == subject_id)
    }

    fn filter<T: Clone>(
        &self,
        collection: &RwLock<Vec<T>>,
        keep: impl Fn(&T) -> bool,
    ) -> Vec<T> {
        collection
            .read()
            .map(|list| list.iter().filter(|item| keep(item)).cloned().collect())
            .unwrap_or_default()
    }
}

// ═══════════════════════════════════════════════════════════
// Fixtures
// ═══════════════════════════════════════════════════════════

mod fixtures {
    use super::*;

    fn ts(raw: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(raw)
            .expect("fixture timestamp")
            .with_timezone(&Utc)
    }

    pub fn prescriptions() -> Vec<Prescription> {
        vec![
            Prescription {
                id: "p1".into(),
                author_id: "d1".into(),
                author_name: "Dr. Sarah Johnson".into(),
                subject_id: "p1".into(),
                subject_name: "James Wilson".into(),
                medications: vec![Medication {
                    name: "Amoxicillin".into(),
                    dosage: "500mg".into(),
                    frequency: "3 times daily".into(),
                    duration: "7 days".into(),
                }],
                diagnosis: "Acute Sinusitis".into(),
                instructions: "Take with food. Complete the full course.".into(),
                created_at: ts("2025-05-10T09:30:00Z"),
                signature: "Dr. S. Johnson".into(),
                status: PrescriptionStatus::Active,
            },
            Prescription {
                id: "p2".into(),
                author_id: "d2".into(),
                author_name: "Dr. Michael Chen".into(),
                subject_id: "p2".into(),
                subject_name: "Emily Davis".into(),
                medications: vec![
                    Medication {
                        name: "Lisinopril".into(),
                        dosage: "10mg".into(),
                        frequency: "Once daily".into(),
                        duration: "30 days".into(),
                    },
                    Medication {
                        name: "Aspirin".into(),
                        dosage: "81mg".into(),
                        frequency: "Once daily".into(),
                        duration: "30 days".into(),
                    },
                ],
                diagnosis: "Hypertension".into(),
                instructions: "Take in the morning. Avoid grapefruit juice.".into(),
                created_at: ts("2025-05-08T14:15:00Z"),
                signature: "Dr. M. Chen".into(),
                status: PrescriptionStatus::Active,
            },
        ]
    }

    pub fn appointments() -> Vec<Appointment> {
        vec![
            Appointment {
                id: "a1".into(),
                clinician_id: "d1".into(),
                clinician_name: "Dr. Sarah Johnson".into(),
                subject_id: "p1".into(),
                subject_name: "James Wilson".into(),
                date: NaiveDate::from_ymd_opt(2025, 5, 20).expect("fixture date"),
                time: NaiveTime::from_hms_opt(9, 0, 0).expect("fixture time"),
                status: AppointmentStatus::Scheduled,
                notes: Some("Follow-up appointment".into()),
            },
            Appointment {
                id: "a2".into(),
                clinician_id: "d2".into(),
                clinician_name: "Dr. Michael Chen".into(),
                subject_id: "p2".into(),
                subject_name: "Emily Davis".into(),
                date: NaiveDate::from_ymd_opt(2025, 5, 18).expect("fixture date"),
                time: NaiveTime::from_hms_opt(14, 30, 0).expect("fixture time"),
                status: AppointmentStatus::Scheduled,
                notes: Some("Blood pressure check".into()),
            },
        ]
    }

    pub fn documents() -> Vec<MedicalDocument> {
        vec![
            MedicalDocument {
                id: "d1".into(),
                subject_id: "p1".into(),
                title: "Chest X-Ray Results".into(),
                doc_type: "Imaging".into(),
                file_ref: "/placeholder.svg".into(),
                uploaded_at: ts("2025-05-01T10:20:00Z"),
                notes: Some("No significant findings".into()),
            },
            MedicalDocument {
                id: "d2".into(),
                subject_id: "p2".into(),
                title: "Blood Test Results".into(),
                doc_type: "Laboratory".into(),
                file_ref: "/placeholder.svg".into(),
                uploaded_at: ts("2025-05-03T15:45:00Z"),
                notes: Some("Cholesterol levels slightly elevated".into()),
            },
        ]
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
