//! Priority-ordered triage queue.
//!
//! # Ordering
//!
//! Patients are keyed by `(severity, arrival, admission sequence)`,
//! compared lexicographically, all ascending: the lowest severity
//! number wins, equal severities go to the earliest arrival, and a
//! full tie falls back to admission order. The sequence number makes
//! every key unique, so the comparison is a total order and extraction
//! is deterministic within a run.
//!
//! Backed by `std::collections::BinaryHeap`: logarithmic insert and
//! extract, and extraction always yields the minimum key among the
//! currently waiting patients.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::table::SeverityTable;
use super::types::{AdmitError, Patient};

/// Heap entry. `BinaryHeap` pops its maximum, so the ordering is
/// reversed to pop the smallest priority key first.
#[derive(Debug, Clone)]
struct Waiting {
    patient: Patient,
    seq: u64,
}

impl Waiting {
    fn key(&self) -> (u8, DateTime<Utc>, u64) {
        (self.patient.severity(), self.patient.arrival(), self.seq)
    }
}

impl PartialEq for Waiting {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Waiting {}

impl PartialOrd for Waiting {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Waiting {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

/// Priority-ordered waiting list of patients.
///
/// Owns every not-yet-treated [`Patient`]; extraction moves the
/// patient out by value, typically into the treatment log.
///
/// # Examples
///
/// ```
/// use er_triage::triage::{SeverityTable, TriageQueue};
/// use chrono::Utc;
///
/// let mut queue = TriageQueue::new(SeverityTable::default());
/// let now = Utc::now();
///
/// queue.admit("Ronin Lee", "Mild Concussion", now).unwrap();
/// queue.admit("Kian Zarkani", "Heart Attack", now).unwrap();
///
/// let next = queue.extract_next().unwrap();
/// assert_eq!(next.full_name(), "Kian Zarkani");
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Debug)]
pub struct TriageQueue {
    table: SeverityTable,
    waiting: BinaryHeap<Waiting>,
    next_seq: u64,
}

impl TriageQueue {
    /// Creates an empty queue around the given severity table.
    pub fn new(table: SeverityTable) -> Self {
        Self {
            table,
            waiting: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// The injected severity table.
    pub fn table(&self) -> &SeverityTable {
        &self.table
    }

    /// Admits a patient with an explicit arrival time.
    ///
    /// Resolves the severity from the table, freezes it onto the new
    /// [`Patient`], inserts the patient, and returns a copy for the
    /// caller's display. Fails with [`AdmitError::UnknownInjury`] —
    /// without inserting anything — when the injury name is not in the
    /// table. Duplicate admissions (same name, injury, and time) are
    /// permitted.
    pub fn admit(
        &mut self,
        full_name: impl Into<String>,
        injury: &str,
        arrival: DateTime<Utc>,
    ) -> Result<Patient, AdmitError> {
        let severity = self
            .table
            .severity_of(injury)
            .ok_or_else(|| AdmitError::UnknownInjury(injury.to_owned()))?;
        let patient = Patient::new(full_name.into(), injury.to_owned(), severity, arrival);

        let seq = self.next_seq;
        self.next_seq += 1;
        self.waiting.push(Waiting {
            patient: patient.clone(),
            seq,
        });

        debug!(
            name = patient.full_name(),
            injury, severity, "admitted patient"
        );
        Ok(patient)
    }

    /// Admits a patient arriving right now.
    pub fn admit_now(
        &mut self,
        full_name: impl Into<String>,
        injury: &str,
    ) -> Result<Patient, AdmitError> {
        self.admit(full_name, injury, Utc::now())
    }

    /// Removes and returns the highest-priority waiting patient.
    ///
    /// `None` when nobody is waiting — a status signal, not an error.
    pub fn extract_next(&mut self) -> Option<Patient> {
        let next = self.waiting.pop()?;
        debug!(
            name = next.patient.full_name(),
            severity = next.patient.severity(),
            "extracted next patient for treatment"
        );
        Some(next.patient)
    }

    /// Non-destructive, fully ordered view of all waiting patients.
    ///
    /// Each call builds a fresh snapshot; iterating never mutates the
    /// queue. Intended for status display.
    pub fn peek_ordered(&self) -> impl Iterator<Item = &Patient> {
        let mut snapshot: Vec<&Waiting> = self.waiting.iter().collect();
        snapshot.sort_by_key(|w| w.key());
        snapshot.into_iter().map(|w| &w.patient)
    }

    /// Number of waiting patients.
    pub fn len(&self) -> usize {
        self.waiting.len()
    }

    /// Returns true if nobody is waiting.
    pub fn is_empty(&self) -> bool {
        self.waiting.is_empty()
    }
}
