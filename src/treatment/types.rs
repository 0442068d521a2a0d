//! Treatment record data model.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::triage::Patient;

/// One completed treatment: the patient plus the time treatment began.
///
/// Created exactly once, when a patient is dequeued for treatment.
/// The treatment time is expected to be at or after the arrival time;
/// when clock skew breaks that, the record is flagged as an anomaly
/// rather than rejected (see [`is_clock_anomaly`]).
///
/// [`is_clock_anomaly`]: TreatmentRecord::is_clock_anomaly
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreatmentRecord {
    patient: Patient,
    treated_at: DateTime<Utc>,
}

impl TreatmentRecord {
    pub(crate) fn new(patient: Patient, treated_at: DateTime<Utc>) -> Self {
        Self {
            patient,
            treated_at,
        }
    }

    /// The treated patient.
    pub fn patient(&self) -> &Patient {
        &self.patient
    }

    /// When treatment began.
    pub fn treated_at(&self) -> DateTime<Utc> {
        self.treated_at
    }

    /// Signed arrival→treatment gap in minutes. Negative on skew.
    fn raw_wait_minutes(&self) -> f64 {
        let elapsed = self.treated_at - self.patient.arrival();
        elapsed.num_milliseconds() as f64 / 60_000.0
    }

    /// Elapsed time between arrival and treatment, in minutes.
    ///
    /// Never negative: a record whose treatment time precedes its
    /// arrival time reports 0.0 here and true from
    /// [`is_clock_anomaly`](Self::is_clock_anomaly).
    pub fn wait_time_minutes(&self) -> f64 {
        self.raw_wait_minutes().max(0.0)
    }

    /// True if the treatment time precedes the arrival time.
    ///
    /// Clock skew must not crash triage operations, so this is a
    /// reportable flag, not an error.
    pub fn is_clock_anomaly(&self) -> bool {
        self.treated_at < self.patient.arrival()
    }
}

impl fmt::Display for TreatmentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Patient: {}, Injury: {}, Severity: {}, Waiting Time: {:.2} minutes",
            self.patient.full_name(),
            self.patient.injury(),
            self.patient.severity(),
            self.wait_time_minutes()
        )
    }
}
