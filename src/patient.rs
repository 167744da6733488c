use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::fmt;

/// Timestamp shape used in persisted notes.
const NOTE_STAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// A patient record: a prescription map keyed by medicine name and an
/// append-only list of timestamped free-text notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patient {
    pub name: String,
    prescriptions: BTreeMap<String, String>,
    notes: Vec<String>,
}

impl Patient {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prescriptions: BTreeMap::new(),
            notes: Vec::new(),
        }
    }

    pub(crate) fn from_parts(
        name: impl Into<String>,
        prescriptions: BTreeMap<String, String>,
        notes: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            prescriptions,
            notes,
        }
    }

    /// Add or update a prescription. Medicine names are unique keys, so a
    /// repeat prescription replaces the dosage.
    pub fn prescribe(&mut self, medicine: impl Into<String>, dosage: impl Into<String>) {
        self.prescriptions.insert(medicine.into(), dosage.into());
    }

    pub fn prescriptions(&self) -> &BTreeMap<String, String> {
        &self.prescriptions
    }

    /// Append a timestamped note. The clock is the caller's; the record
    /// only formats and stores.
    pub fn add_note(&mut self, stamp: NaiveDateTime, text: &str) {
        self.notes
            .push(format!("{} - {}", stamp.format(NOTE_STAMP_FORMAT), text));
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Patient store in registration order. Patients carry no derived
/// identifier, and duplicate names are tolerated; lookups return the
/// earliest registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientRecords {
    patients: Vec<Patient>,
}

impl PatientRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, patient: Patient) {
        self.patients.push(patient);
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Patient> {
        self.patients
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Patient> {
        self.patients
            .iter_mut()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// One name per line, in registration order.
    pub fn summary(&self) -> String {
        self.patients
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
