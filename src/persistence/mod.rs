use crate::calendar::CalendarError;
use crate::staff::RegistryError;
use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PersistenceError {
    Io(io::Error),
    Csv(csv::Error),
    Serialization(SerdeJsonError),
    /// A data line that does not split into the expected field count, or a
    /// field that does not parse. Aborts the whole load.
    MalformedRecord {
        line: usize,
        message: String,
    },
    /// A persisted calendar record the calendar itself rejects, e.g. a
    /// file encoding a double-booking.
    Calendar(CalendarError),
    /// A persisted roster record the registry rejects.
    Registry(RegistryError),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Io(err) => write!(f, "io error: {err}"),
            PersistenceError::Csv(err) => write!(f, "csv error: {err}"),
            PersistenceError::Serialization(err) => write!(f, "serialization error: {err}"),
            PersistenceError::MalformedRecord { line, message } => {
                write!(f, "malformed record on line {line}: {message}")
            }
            PersistenceError::Calendar(err) => write!(f, "calendar rejected record: {err}"),
            PersistenceError::Registry(err) => write!(f, "registry rejected record: {err}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<io::Error> for PersistenceError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for PersistenceError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<SerdeJsonError> for PersistenceError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<CalendarError> for PersistenceError {
    fn from(value: CalendarError) -> Self {
        Self::Calendar(value)
    }
}

impl From<RegistryError> for PersistenceError {
    fn from(value: RegistryError) -> Self {
        Self::Registry(value)
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

pub mod file;

pub use file::{
    load_calendar_from_csv, load_patients_from_csv, load_roster_from_csv, save_calendar_to_csv,
    save_patients_to_csv, save_roster_to_csv,
};
