//! Canned assistant text.
//!
//! The assistant is scripted: the greeting, the extraction and
//! analysis results, and the fallback prompts are fixed strings. The
//! simulated pipelines exist to exercise the upload → processing →
//! result interaction, not to perform real extraction.

/// The single seed message every conversation starts (and resets) to.
pub const SEED_GREETING: &str =
    "Hello! I'm your healthcare assistant. How can I help you today?";

/// Returned by the image pipeline for any input.
pub const PRESCRIPTION_EXTRACTION: &str = "Prescription Details:
Patient: John Doe
Medication: Amoxicillin 500mg
Instructions: Take one capsule three times daily with meals
Duration: 10 days
Refills: 0
Dr. Smith, MD
License: #12345";

/// Returned by the text pipeline for any input.
pub const TEXT_ANALYSIS: &str = "Analysis Summary: This prescription contains an antibiotic (Amoxicillin) at a standard dosage for treating bacterial infections. The medication should be taken with food to reduce stomach upset. The full course should be completed even if symptoms improve to prevent antibiotic resistance.";
