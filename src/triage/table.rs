//! Injury→severity table: the static triage configuration.

use std::collections::BTreeMap;

/// Most urgent severity rank.
pub const SEVERITY_MIN: u8 = 1;

/// Least urgent severity rank.
pub const SEVERITY_MAX: u8 = 5;

/// Immutable mapping from injury name to severity rank.
///
/// Lower severity = more urgent. The table is read-only for the life
/// of the queue it is injected into; patients admitted before a
/// different table is swapped in keep the severity they were assigned.
///
/// # Examples
///
/// ```
/// use er_triage::triage::SeverityTable;
///
/// let table = SeverityTable::empty()
///     .with_injury("Cardiac Arrest", 1)
///     .with_injury("Paper Cut", 5);
///
/// assert!(table.validate().is_ok());
/// assert_eq!(table.severity_of("Cardiac Arrest"), Some(1));
/// assert_eq!(table.severity_of("Gout"), None);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeverityTable {
    entries: BTreeMap<String, u8>,
}

impl SeverityTable {
    /// Creates a table with no entries.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Adds (or overwrites) one injury entry.
    pub fn with_injury(mut self, injury: impl Into<String>, severity: u8) -> Self {
        self.entries.insert(injury.into(), severity);
        self
    }

    /// Looks up the severity for an injury name. Exact match only.
    pub fn severity_of(&self, injury: &str) -> Option<u8> {
        self.entries.get(injury).copied()
    }

    /// Returns true if the injury name is known to this table.
    pub fn contains(&self, injury: &str) -> bool {
        self.entries.contains_key(injury)
    }

    /// Returns the number of injury entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in alphabetical injury-name order.
    ///
    /// Deterministic order so presentation layers can render a stable
    /// numbered menu.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u8)> {
        self.entries.iter().map(|(name, &sev)| (name.as_str(), sev))
    }

    /// Validates the table.
    pub fn validate(&self) -> Result<(), String> {
        if self.entries.is_empty() {
            return Err("severity table must have at least one entry".into());
        }
        for (injury, &severity) in &self.entries {
            if !(SEVERITY_MIN..=SEVERITY_MAX).contains(&severity) {
                return Err(format!(
                    "severity for {injury:?} must be in {SEVERITY_MIN}..={SEVERITY_MAX}, got {severity}"
                ));
            }
        }
        Ok(())
    }
}

/// The standard ER table: 30 injuries across severities 1–5.
impl Default for SeverityTable {
    fn default() -> Self {
        Self::empty()
            .with_injury("Gunshot Wound", 1)
            .with_injury("Heart Attack", 1)
            .with_injury("Stroke", 1)
            .with_injury("Severe Allergic Reaction", 1)
            .with_injury("Traumatic Brain Injury", 1)
            .with_injury("Severe Burn", 1)
            .with_injury("Sepsis", 1)
            .with_injury("Major Bleeding", 2)
            .with_injury("Pneumothorax (Collapsed Lung)", 2)
            .with_injury("Compound Fracture", 2)
            .with_injury("Severe Asthma Attack", 2)
            .with_injury("Severe Dehydration", 2)
            .with_injury("Appendicitis", 3)
            .with_injury("Kidney Stone", 3)
            .with_injury("Severe Migraine", 3)
            .with_injury("Broken Bone", 3)
            .with_injury("Laceration Requiring Stitches", 3)
            .with_injury("High Fever (Adult)", 4)
            .with_injury("Mild Concussion", 4)
            .with_injury("Sprained Ankle", 4)
            .with_injury("Dislocated Shoulder", 4)
            .with_injury("Nosebleed (Severe)", 4)
            .with_injury("Ear Infection", 5)
            .with_injury("Minor Cut", 5)
            .with_injury("Skin Rash", 5)
            .with_injury("Mild Food Poisoning", 5)
            .with_injury("Mild Allergic Reaction", 5)
            .with_injury("Cold or Flu", 5)
            .with_injury("Minor Burn", 5)
            .with_injury("Muscle Strain", 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_contents() {
        let table = SeverityTable::default();
        assert_eq!(table.len(), 30);
        assert_eq!(table.severity_of("Heart Attack"), Some(1));
        assert_eq!(table.severity_of("Broken Bone"), Some(3));
        assert_eq!(table.severity_of("Muscle Strain"), Some(5));
    }

    #[test]
    fn test_default_table_validates() {
        assert!(SeverityTable::default().validate().is_ok());
    }

    #[test]
    fn test_unknown_injury_lookup() {
        let table = SeverityTable::default();
        assert_eq!(table.severity_of("Not A Real Injury"), None);
        assert!(!table.contains("Not A Real Injury"));
    }

    #[test]
    fn test_with_injury_overwrites() {
        let table = SeverityTable::empty()
            .with_injury("Fracture", 3)
            .with_injury("Fracture", 2);
        assert_eq!(table.len(), 1);
        assert_eq!(table.severity_of("Fracture"), Some(2));
    }

    #[test]
    fn test_validate_empty_table() {
        assert!(SeverityTable::empty().validate().is_err());
    }

    #[test]
    fn test_validate_severity_out_of_range() {
        let zero = SeverityTable::empty().with_injury("Hangnail", 0);
        assert!(zero.validate().is_err());

        let six = SeverityTable::empty().with_injury("Hangnail", 6);
        assert!(six.validate().is_err());
    }

    #[test]
    fn test_entries_alphabetical() {
        let table = SeverityTable::empty()
            .with_injury("Stroke", 1)
            .with_injury("Appendicitis", 3)
            .with_injury("Minor Cut", 5);

        let names: Vec<&str> = table.entries().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Appendicitis", "Minor Cut", "Stroke"]);
    }
}
