//! Severity tiers and the keyword classifier.

use serde::{Deserialize, Serialize};

/// Symptom phrases that indicate a life-threatening emergency.
const CRITICAL_KEYWORDS: &[&str] = &[
    "chest pain",
    "heart attack",
    "stroke",
    "difficulty breathing",
    "severe bleeding",
    "unconscious",
    "choking",
    "severe burn",
    "poisoning",
    "severe allergic reaction",
    "cannot breathe",
    "heavy bleeding",
    "sudden paralysis",
    "seizure",
];

/// Symptom phrases that warrant prompt, but not emergency, care.
const WARNING_KEYWORDS: &[&str] = &[
    "high fever",
    "persistent vomiting",
    "severe pain",
    "head injury",
];

/// Severity tier for a symptom description.
///
/// The tier label (`HIGH`/`MEDIUM`/`LOW`) is what downstream stores
/// persist; keep `as_str` stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Emergency: seek immediate medical attention.
    #[serde(rename = "HIGH")]
    High,
    /// Concerning: see a doctor soon.
    #[serde(rename = "MEDIUM")]
    Medium,
    /// Non-emergency.
    #[serde(rename = "LOW")]
    Low,
}

impl Severity {
    /// The stable tier label stored with each history entry.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }

    /// Human-readable advisory for this tier.
    pub fn advisory(&self) -> &'static str {
        match self {
            Severity::High => {
                "These symptoms may indicate a medical emergency. \
                 Call emergency services or go to the nearest hospital immediately."
            }
            Severity::Medium => {
                "These symptoms should be checked by a doctor soon. \
                 Consider visiting a clinic within the next 24 hours."
            }
            Severity::Low => {
                "These symptoms do not appear to be an emergency. \
                 Monitor them and consult a doctor if they persist or worsen."
            }
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify raw symptom text into a severity tier.
///
/// Matching is case-insensitive substring search: any critical phrase
/// wins over any warning phrase; no match at all is `Low`.
pub fn assess(symptoms: &str) -> Severity {
    let symptoms = symptoms.to_lowercase();

    if CRITICAL_KEYWORDS.iter().any(|kw| symptoms.contains(kw)) {
        return Severity::High;
    }
    if WARNING_KEYWORDS.iter().any(|kw| symptoms.contains(kw)) {
        return Severity::Medium;
    }
    Severity::Low
}
