//! Append-only log of completed treatments.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::triage::Patient;

use super::types::TreatmentRecord;

/// Ordered, append-only record of every completed treatment.
///
/// Owns each [`TreatmentRecord`] for the process lifetime: records are
/// never removed or reordered, so iteration order is treatment order.
///
/// # Examples
///
/// ```
/// use er_triage::triage::{SeverityTable, TriageQueue};
/// use er_triage::treatment::TreatmentLog;
/// use chrono::{Duration, Utc};
///
/// let mut queue = TriageQueue::new(SeverityTable::default());
/// let arrival = Utc::now() - Duration::seconds(120);
/// queue.admit("Paarth Soni", "Broken Bone", arrival).unwrap();
///
/// let mut log = TreatmentLog::new();
/// let patient = queue.extract_next().unwrap();
/// let record = log.record_treatment(patient, Utc::now());
///
/// assert!(record.wait_time_minutes() >= 2.0);
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct TreatmentLog {
    records: Vec<TreatmentRecord>,
}

impl TreatmentLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a treatment record with an explicit treatment time.
    ///
    /// Takes ownership of the patient; returns the stored record for
    /// the caller's display. A treatment time before the patient's
    /// arrival is appended anyway — flagged and warned about, never
    /// rejected, since clock skew must not stop triage.
    pub fn record_treatment(
        &mut self,
        patient: Patient,
        treated_at: DateTime<Utc>,
    ) -> &TreatmentRecord {
        let record = TreatmentRecord::new(patient, treated_at);
        if record.is_clock_anomaly() {
            warn!(
                name = record.patient().full_name(),
                %treated_at,
                arrival = %record.patient().arrival(),
                "treatment time precedes arrival; recording with zero wait"
            );
        } else {
            debug!(
                name = record.patient().full_name(),
                wait_minutes = record.wait_time_minutes(),
                "recorded treatment"
            );
        }
        self.records.push(record);
        self.records.last().expect("record just pushed")
    }

    /// Appends a treatment record stamped with the current time.
    pub fn record_treatment_now(&mut self, patient: Patient) -> &TreatmentRecord {
        self.record_treatment(patient, Utc::now())
    }

    /// Iterates all records in treatment order. Restartable.
    pub fn all_records(&self) -> impl Iterator<Item = &TreatmentRecord> {
        self.records.iter()
    }

    /// Iterates only the records flagged as clock anomalies.
    pub fn anomalies(&self) -> impl Iterator<Item = &TreatmentRecord> {
        self.records.iter().filter(|r| r.is_clock_anomaly())
    }

    /// Number of completed treatments.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been treated yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Mean wait across all records, in minutes. `None` when empty.
    pub fn average_wait_minutes(&self) -> Option<f64> {
        if self.records.is_empty() {
            return None;
        }
        let total: f64 = self.records.iter().map(|r| r.wait_time_minutes()).sum();
        Some(total / self.records.len() as f64)
    }

    /// Longest wait across all records, in minutes. `None` when empty.
    pub fn longest_wait_minutes(&self) -> Option<f64> {
        self.records
            .iter()
            .map(|r| r.wait_time_minutes())
            .fold(None, |acc, w| Some(acc.map_or(w, |m: f64| m.max(w))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn patient(name: &str, arrival: DateTime<Utc>) -> Patient {
        Patient::new(name.into(), "Appendicitis".into(), 3, arrival)
    }

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_records_kept_in_treatment_order() {
        let mut log = TreatmentLog::new();
        let t0 = base_time();

        for i in 0..5 {
            log.record_treatment(
                patient(&format!("P{i}"), t0),
                t0 + Duration::seconds(60 * (i + 1)),
            );
        }

        assert_eq!(log.len(), 5);
        let names: Vec<&str> = log.all_records().map(|r| r.patient().full_name()).collect();
        assert_eq!(names, vec!["P0", "P1", "P2", "P3", "P4"]);

        // Restartable: a second pass sees the same sequence.
        let again: Vec<&str> = log.all_records().map(|r| r.patient().full_name()).collect();
        assert_eq!(names, again);
    }

    #[test]
    fn test_record_returns_stored_record() {
        let mut log = TreatmentLog::new();
        let t0 = base_time();
        let record = log.record_treatment(patient("Solo", t0), t0 + Duration::seconds(120));

        assert_eq!(record.patient().full_name(), "Solo");
        assert!((record.wait_time_minutes() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_log_statistics() {
        let log = TreatmentLog::new();
        assert!(log.is_empty());
        assert_eq!(log.average_wait_minutes(), None);
        assert_eq!(log.longest_wait_minutes(), None);
        assert_eq!(log.all_records().count(), 0);
    }

    #[test]
    fn test_average_and_longest_wait() {
        let mut log = TreatmentLog::new();
        let t0 = base_time();

        // Waits of 1, 2, and 6 minutes.
        log.record_treatment(patient("A", t0), t0 + Duration::minutes(1));
        log.record_treatment(patient("B", t0), t0 + Duration::minutes(2));
        log.record_treatment(patient("C", t0), t0 + Duration::minutes(6));

        let avg = log.average_wait_minutes().unwrap();
        assert!((avg - 3.0).abs() < 1e-9, "expected mean 3.0, got {avg}");

        let longest = log.longest_wait_minutes().unwrap();
        assert!(
            (longest - 6.0).abs() < 1e-9,
            "expected longest 6.0, got {longest}"
        );
    }

    #[test]
    fn test_anomalous_record_kept_and_flagged() {
        let mut log = TreatmentLog::new();
        let t0 = base_time();

        log.record_treatment(patient("Fine", t0), t0 + Duration::minutes(4));
        log.record_treatment(patient("Skewed", t0), t0 - Duration::seconds(30));

        assert_eq!(log.len(), 2, "anomalous records are still appended");
        let flagged: Vec<&str> = log.anomalies().map(|r| r.patient().full_name()).collect();
        assert_eq!(flagged, vec!["Skewed"]);

        // Clamped wait keeps the statistics non-negative.
        let avg = log.average_wait_minutes().unwrap();
        assert!((avg - 2.0).abs() < 1e-9, "expected mean 2.0, got {avg}");
    }
}
