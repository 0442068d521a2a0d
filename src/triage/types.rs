//! Patient data model and admission errors.

use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// strftime layout for human-readable check-in times.
const CHECK_IN_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A waiting or treated patient. Immutable once admitted.
///
/// Severity is derived from the severity table exactly once, at
/// admission, and stored here; it never changes afterwards even if
/// the table does.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Patient {
    full_name: String,
    injury: String,
    severity: u8,
    arrival: DateTime<Utc>,
}

impl Patient {
    /// Constructed only by [`TriageQueue::admit`], which resolves the
    /// severity against the injected table first.
    ///
    /// [`TriageQueue::admit`]: crate::triage::TriageQueue::admit
    pub(crate) fn new(
        full_name: String,
        injury: String,
        severity: u8,
        arrival: DateTime<Utc>,
    ) -> Self {
        Self {
            full_name,
            injury,
            severity,
            arrival,
        }
    }

    /// The patient's full name.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// The injury name the patient was admitted with.
    pub fn injury(&self) -> &str {
        &self.injury
    }

    /// Severity rank assigned at admission. Lower = more urgent.
    pub fn severity(&self) -> u8 {
        self.severity
    }

    /// Check-in time.
    pub fn arrival(&self) -> DateTime<Utc> {
        self.arrival
    }

    /// Check-in time rendered as `YYYY-MM-DD HH:MM:SS` for display.
    pub fn arrival_display(&self) -> String {
        self.arrival.format(CHECK_IN_FORMAT).to_string()
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Patient: {}, Injury: {}, Severity: {}, Check-in: {}",
            self.full_name,
            self.injury,
            self.severity,
            self.arrival_display()
        )
    }
}

/// Why an admission was rejected.
///
/// A rejected admission leaves the queue untouched: no partial
/// patient is ever inserted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdmitError {
    /// The requested injury name has no entry in the severity table.
    #[error("unknown injury type: {0:?}")]
    UnknownInjury(String),
}
