//! Emergency contact directory, keyed by country keywords in the
//! user-entered location string.

use serde::Serialize;

/// An emergency service and its dial number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmergencyContact {
    /// Service name.
    pub service: &'static str,
    /// Dial number, as a display string.
    pub number: &'static str,
}

const INDIA: &[EmergencyContact] = &[
    EmergencyContact { service: "Police", number: "100" },
    EmergencyContact { service: "Ambulance", number: "102" },
    EmergencyContact { service: "Emergency", number: "112" },
];

const US: &[EmergencyContact] = &[
    EmergencyContact { service: "Emergency", number: "911" },
    EmergencyContact { service: "Poison Control", number: "1-800-222-1222" },
];

const UK: &[EmergencyContact] = &[
    EmergencyContact { service: "Emergency", number: "999" },
    EmergencyContact { service: "NHS Non-emergency", number: "111" },
];

const DEFAULT: &[EmergencyContact] = &[
    EmergencyContact { service: "International Emergency", number: "112" },
    EmergencyContact { service: "Local Police", number: "Check locally" },
];

/// Look up emergency numbers for a free-text location.
///
/// Matches country keywords case-insensitively anywhere in the string and
/// falls back to the international directory.
pub fn contacts_for(location: &str) -> &'static [EmergencyContact] {
    let location = location.to_lowercase();

    if location.contains("india") {
        INDIA
    } else if location.contains("us") {
        US
    } else if location.contains("uk") {
        UK
    } else {
        DEFAULT
    }
}
