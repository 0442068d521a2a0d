//! Treatment log: append-only record of completed treatments.
//!
//! Each extraction from the triage queue ends with a
//! [`TreatmentRecord`] appended here. Records are never removed or
//! reordered; per-patient wait times and aggregate statistics are
//! derived from them on demand.

mod log;
mod types;

pub use log::TreatmentLog;
pub use types::TreatmentRecord;
