//! Emergency-room triage core.
//!
//! Models the severity-ordered admission/treatment cycle of an ER:
//!
//! - **Triage queue**: patients are admitted with a named injury,
//!   assigned a severity from a static injury→severity table, and
//!   extracted in priority order — lowest severity number first,
//!   ties broken by earliest arrival.
//! - **Treatment log**: an append-only record of every treated patient
//!   and the time of treatment, from which per-patient wait times and
//!   aggregate wait statistics are derived.
//!
//! # Architecture
//!
//! The crate is the pure core only: every operation is a synchronous
//! call taking timestamps as parameters, so presentation layers decide
//! pacing and I/O. The injury→severity table is an immutable
//! configuration object injected into the queue constructor; swapping
//! in an alternate table never touches queue logic. Severity is frozen
//! onto the patient at admission time and never re-derived.
//!
//! # Example
//!
//! ```
//! use er_triage::triage::{SeverityTable, TriageQueue};
//! use er_triage::treatment::TreatmentLog;
//! use chrono::Utc;
//!
//! let mut queue = TriageQueue::new(SeverityTable::default());
//! let mut log = TreatmentLog::new();
//!
//! queue.admit("Kian Zarkani", "Heart Attack", Utc::now()).unwrap();
//! queue.admit("Paarth Soni", "Broken Bone", Utc::now()).unwrap();
//!
//! while let Some(patient) = queue.extract_next() {
//!     log.record_treatment(patient, Utc::now());
//! }
//!
//! assert_eq!(log.len(), 2);
//! assert_eq!(log.all_records().next().unwrap().patient().injury(), "Heart Attack");
//! ```

pub mod treatment;
pub mod triage;
