//! End-to-end portal session: restore, login, role gating, record
//! creation and scoped reads, assistant chat and analysis.

use std::sync::Arc;

use carelink_core::access::{self, AccessDenied};
use carelink_core::models::{
    AppointmentDraft, AppointmentStatus, DocumentDraft, Medication, PrescriptionDraft,
    PrescriptionStatus, UserRole,
};
use carelink_core::outcome::Severity;
use carelink_core::storage::{MemorySessionStore, SessionStore};
use carelink_core::PortalCore;

use chrono::{NaiveDate, NaiveTime};

fn core() -> PortalCore {
    PortalCore::new(Arc::new(MemorySessionStore::new()))
}

#[test]
fn clinician_writes_records_their_patient_can_read() {
    let core = core();

    // Boot: nothing persisted, restore resolves to unauthenticated.
    assert!(!core.session().restore_session());
    assert_eq!(
        access::check(core.session().current().as_ref(), Some(UserRole::Clinician)),
        Err(AccessDenied::NotAuthenticated)
    );

    // Clinician logs in and passes the clinician gate.
    assert!(core.session().login("sarah@example.com", "password123"));
    let clinician = core.session().current().unwrap();
    assert!(access::check(Some(&clinician), Some(UserRole::Clinician)).is_ok());
    assert_eq!(
        access::check(Some(&clinician), Some(UserRole::Patient)),
        Err(AccessDenied::WrongRole)
    );

    // She prescribes for James and schedules his follow-up.
    assert!(core.records().create_prescription(PrescriptionDraft {
        author_id: clinician.id.clone(),
        author_name: clinician.display_name.clone(),
        subject_id: "p1".into(),
        subject_name: "James Wilson".into(),
        medications: vec![Medication {
            name: "Atorvastatin".into(),
            dosage: "20mg".into(),
            frequency: "Once daily".into(),
            duration: "90 days".into(),
        }],
        diagnosis: "Hyperlipidemia".into(),
        instructions: "Take in the evening.".into(),
        signature: "Dr. S. Johnson".into(),
        status: PrescriptionStatus::Pending,
    }));
    assert!(core.records().create_appointment(AppointmentDraft {
        clinician_id: "d1".into(),
        clinician_name: clinician.display_name.clone(),
        subject_id: "p1".into(),
        subject_name: "James Wilson".into(),
        date: NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(),
        time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        status: AppointmentStatus::Scheduled,
        notes: None,
    }));

    // Read-your-writes, scoped both ways.
    assert_eq!(core.records().prescriptions_by_author("d1").len(), 2);
    let appointments = core.records().appointments_by_subject("p1");
    assert_eq!(appointments.len(), 2);
    assert!(appointments[1].id.starts_with('a'));
    assert_ne!(appointments[1].id, appointments[0].id);

    core.session().logout();

    // The patient logs in on the same instance and sees only his pool.
    assert!(core.session().login("james@example.com", "password123"));
    let patient = core.session().current().unwrap();
    assert_eq!(patient.role, UserRole::Patient);

    let mine = core.records().prescriptions_by_subject(&patient.id);
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|p| p.subject_id == patient.id));
    assert!(core
        .records()
        .prescriptions_by_subject("p2")
        .iter()
        .all(|p| p.subject_id == "p2"));
}

#[test]
fn every_mutation_emits_exactly_one_outcome() {
    let core = core();
    core.session().login("sarah@example.com", "wrong");
    core.session().login("sarah@example.com", "password123");
    core.records().upload_document(DocumentDraft {
        subject_id: "p1".into(),
        title: "Referral letter".into(),
        doc_type: "Correspondence".into(),
        file_ref: "file://referral.pdf".into(),
        notes: None,
    });
    core.session().logout();

    let events = core.notifier().drain();
    assert_eq!(events.len(), 4);
    assert_eq!(events[0].severity, Severity::Error);
    assert_eq!(events[1].severity, Severity::Success);
    assert_eq!(events[2].message, "Document uploaded successfully");
    assert_eq!(events[3].severity, Severity::Info);
}

#[test]
fn session_slot_survives_a_restart() {
    let slot: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());

    let first = PortalCore::new(Arc::clone(&slot));
    assert!(first.session().login("emily@example.com", "password123"));
    drop(first);

    let second = PortalCore::new(slot);
    assert!(second.session().restore_session());
    let actor = second.session().current().unwrap();
    assert_eq!(actor.id, "p2");
    assert_eq!(actor.role, UserRole::Patient);
}

#[tokio::test(start_paused = true)]
async fn assistant_flow_matches_scripted_behavior() {
    let core = core();

    core.assistant()
        .post_user_message("Hello, how are you?")
        .await
        .unwrap();
    let messages = core.assistant().messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(
        messages[2].content,
        "Hello! How can I assist you with your healthcare needs today?"
    );

    // The analysis pipeline runs independently of chat history.
    let extracted = core.assistant().analyze_image(b"scan bytes").await.unwrap();
    assert!(extracted.contains("Amoxicillin 500mg"));
    let summary = core.assistant().analyze_text(&extracted).await.unwrap();
    assert!(summary.starts_with("Analysis Summary:"));
    assert_eq!(core.assistant().messages().len(), 3);

    core.assistant().reset_conversation();
    assert_eq!(core.assistant().messages().len(), 1);
}
