//! Keyword-driven reply selection.
//!
//! Two substring tables are scanned against the lower-cased input:
//! greeting/meta pairs first, medical topics second. Within a table
//! the declared slice order is the match order and the first matching
//! key wins — this fixes the iteration order so inputs containing
//! several keywords ("Hello, how are you?") classify the same way on
//! every run. Inputs matching neither table draw a generic follow-up
//! prompt uniformly at random.

use rand::seq::SliceRandom;

/// Greeting and meta conversation pairs. Scanned before the medical
/// table; earlier entries shadow later ones.
const GREETING_REPLIES: &[(&str, &str)] = &[
    (
        "hello",
        "Hello! How can I assist you with your healthcare needs today?",
    ),
    (
        "how are you",
        "I'm functioning well, thank you! How can I help you with your medical questions?",
    ),
    (
        "what can you do",
        "I can help with medical information, explain prescriptions, provide health advice, schedule appointments, and answer questions about medications or conditions. How can I assist you today?",
    ),
];

/// Medical-topic pairs. Scanned only when no greeting key matched.
const MEDICAL_REPLIES: &[(&str, &str)] = &[
    (
        "headache",
        "Headaches can be caused by various factors including stress, dehydration, lack of sleep, or underlying medical conditions. For persistent or severe headaches, please consult your doctor.",
    ),
    (
        "blood pressure",
        "Normal blood pressure is typically around 120/80 mmHg. High blood pressure (hypertension) is generally considered to be 130/80 mmHg or higher. Regular monitoring is important for managing cardiovascular health.",
    ),
    (
        "diabetes",
        "Diabetes is a chronic condition that affects how your body turns food into energy. The main types are Type 1, Type 2, and gestational diabetes. Management typically involves monitoring blood sugar levels, medication, healthy eating, and regular physical activity.",
    ),
];

/// Generic follow-up prompts for unmatched input.
const FALLBACK_PROMPTS: &[&str] = &[
    "I understand. Could you tell me more about your symptoms?",
    "That's important information. Have you discussed this with your doctor?",
    "I'd be happy to help with that. Let me know if you need more specific information.",
    "Thank you for sharing that. Is there anything else you'd like to know?",
    "I'm here to help with your healthcare questions. Could you provide more details?",
];

/// The table-driven reply for `text`, if any key is a substring of its
/// lower-cased form. Deterministic for a fixed input.
pub fn table_reply(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    GREETING_REPLIES
        .iter()
        .chain(MEDICAL_REPLIES.iter())
        .find(|(key, _)| lower.contains(*key))
        .map(|(_, reply)| *reply)
}

/// The assistant's reply: table match, else a random fallback prompt.
pub fn reply_for(text: &str) -> &'static str {
    table_reply(text).unwrap_or_else(|| {
        FALLBACK_PROMPTS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(FALLBACK_PROMPTS[0])
    })
}

/// True when `reply` is one of the generic fallback prompts.
#[cfg(test)]
pub fn is_fallback(reply: &str) -> bool {
    FALLBACK_PROMPTS.iter().any(|prompt| *prompt == reply)
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
