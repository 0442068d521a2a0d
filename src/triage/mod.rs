//! Triage queue: severity-ordered admission and extraction.
//!
//! Admission looks a patient's injury up in an immutable
//! [`SeverityTable`], freezes the resulting severity onto the
//! [`Patient`], and inserts it into a heap keyed by
//! `(severity, arrival, admission sequence)` — all ascending, so the
//! lowest severity number is treated first and equal severities are
//! served in arrival order. Extraction always yields the
//! highest-priority waiting patient in logarithmic time.

mod queue;
mod table;
mod types;

pub use queue::TriageQueue;
pub use table::{SeverityTable, SEVERITY_MAX, SEVERITY_MIN};
pub use types::{AdmitError, Patient};
