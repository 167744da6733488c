use super::{PersistenceError, PersistenceResult};
use crate::calendar::{AppointmentCalendar, TimeSlot, Weekday};
use crate::patient::{Patient, PatientRecords};
use crate::staff::{Compensation, Employee, Role, StaffRegistry};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};

const APPOINTMENT_FIELDS: usize = 4;
const ROSTER_FIELDS: usize = 6;
const PATIENT_FIELDS: usize = 3;

/// Separator between persisted patient notes.
const NOTE_SEPARATOR: &str = "<==>";

/// Write the full payload to a sibling temp file, then rename it into
/// place. A failed save leaves the previous destination intact.
fn write_atomic(path: &Path, bytes: &[u8]) -> PersistenceResult<()> {
    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);
    fs::write(&tmp, bytes)?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }
    Ok(())
}

fn writer_bytes(writer: csv::Writer<Vec<u8>>) -> PersistenceResult<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|err| PersistenceError::Io(err.into_error()))
}

#[derive(Serialize)]
struct AppointmentRecord<'a> {
    day: &'a str,
    time: &'a str,
    doctor: &'a str,
    patient: &'a str,
}

/// Persist the calendar: header, then one line per booking in grid order
/// (weekday, then time, then insertion order).
pub fn save_calendar_to_csv<P: AsRef<Path>>(
    calendar: &AppointmentCalendar,
    path: P,
) -> PersistenceResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(["day", "time", "doctor", "patient"])?;
    for day in Weekday::ALL {
        for time in TimeSlot::ALL {
            for booking in calendar.slot(day, time) {
                writer.serialize(AppointmentRecord {
                    day: day.as_str(),
                    time: time.as_str(),
                    doctor: &booking.doctor,
                    patient: &booking.patient,
                })?;
            }
        }
    }
    writer.flush()?;
    write_atomic(path.as_ref(), &writer_bytes(writer)?)
}

/// Rebuild a calendar by replaying `book` over each persisted record. A
/// record with the wrong field count, or one the calendar rejects (a
/// persisted double-booking), aborts the load; nothing partial is returned.
pub fn load_calendar_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<AppointmentCalendar> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
    let mut calendar = AppointmentCalendar::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let line = idx + 1;
        expect_fields(&record, APPOINTMENT_FIELDS, line)?;
        calendar.book(
            &record[0],
            &record[1],
            record[2].trim(),
            record[3].trim(),
        )?;
    }
    Ok(calendar)
}

#[derive(Serialize)]
struct RosterRecord {
    eid: u64,
    position: &'static str,
    name: String,
    salary: u32,
    hourly: &'static str,
    hours_accrued: String,
}

impl From<&Employee> for RosterRecord {
    fn from(employee: &Employee) -> Self {
        Self {
            eid: employee.eid(),
            position: employee.role.as_str(),
            name: employee.name.clone(),
            salary: employee.salary,
            hourly: format_bool(employee.compensation.is_hourly()),
            hours_accrued: format_hours(employee.compensation.hours_accrued()),
        }
    }
}

/// Persist the roster in registration order.
pub fn save_roster_to_csv<P: AsRef<Path>>(
    registry: &StaffRegistry,
    path: P,
) -> PersistenceResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(["eid", "position", "name", "salary", "hourly", "hours_accrued"])?;
    for employee in registry.employees() {
        writer.serialize(RosterRecord::from(employee))?;
    }
    writer.flush()?;
    write_atomic(path.as_ref(), &writer_bytes(writer)?)
}

/// Rebuild the roster by replaying `register` over each persisted record.
/// Identifiers are re-derived from name and salary; the stored eid column
/// is not trusted. Collisions abort the load.
pub fn load_roster_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<StaffRegistry> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
    let mut registry = StaffRegistry::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let line = idx + 1;
        expect_fields(&record, ROSTER_FIELDS, line)?;
        let role = Role::parse(&record[1]).ok_or_else(|| PersistenceError::MalformedRecord {
            line,
            message: format!("unknown position '{}'", record[1].trim()),
        })?;
        let name = record[2].trim();
        let salary = parse_salary(&record[3], line)?;
        let hourly = parse_bool(&record[4], line)?;
        let hours = parse_hours(&record[5], line)?;
        let compensation = if hourly {
            Compensation::Hourly {
                hours_accrued: hours.unwrap_or(0),
            }
        } else {
            Compensation::Salaried
        };
        registry.register(Employee::new(role, name, salary, compensation))?;
    }
    Ok(registry)
}

#[derive(Serialize)]
struct PatientRecord {
    name: String,
    prescriptions: String,
    notes: String,
}

impl PatientRecord {
    fn from_patient(patient: &Patient) -> PersistenceResult<Self> {
        Ok(Self {
            name: patient.name.clone(),
            prescriptions: serde_json::to_string(patient.prescriptions())?,
            notes: patient.notes().join(NOTE_SEPARATOR),
        })
    }
}

/// Persist patient records in registration order. The prescription map is
/// embedded as a JSON column; the csv writer quotes it.
pub fn save_patients_to_csv<P: AsRef<Path>>(
    records: &PatientRecords,
    path: P,
) -> PersistenceResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(["name", "prescriptions", "notes"])?;
    for patient in records.patients() {
        writer.serialize(PatientRecord::from_patient(patient)?)?;
    }
    writer.flush()?;
    write_atomic(path.as_ref(), &writer_bytes(writer)?)
}

pub fn load_patients_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<PatientRecords> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
    let mut records = PatientRecords::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let line = idx + 1;
        expect_fields(&record, PATIENT_FIELDS, line)?;
        let prescriptions = parse_prescriptions(&record[1], line)?;
        let notes = split_notes(&record[2]);
        records.add(Patient::from_parts(record[0].trim(), prescriptions, notes));
    }
    Ok(records)
}

fn expect_fields(record: &csv::StringRecord, expected: usize, line: usize) -> PersistenceResult<()> {
    if record.len() != expected {
        return Err(PersistenceError::MalformedRecord {
            line,
            message: format!("expected {expected} fields, found {}", record.len()),
        });
    }
    Ok(())
}

fn format_bool(value: bool) -> &'static str {
    // Spellings kept compatible with the pre-existing data files.
    if value { "True" } else { "False" }
}

fn format_hours(value: Option<u32>) -> String {
    match value {
        Some(hours) => hours.to_string(),
        None => "None".to_string(),
    }
}

fn parse_bool(input: &str, line: usize) -> PersistenceResult<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(PersistenceError::MalformedRecord {
            line,
            message: format!("invalid boolean '{other}'"),
        }),
    }
}

fn parse_salary(input: &str, line: usize) -> PersistenceResult<u32> {
    input.trim().parse::<u32>().map_err(|err| {
        PersistenceError::MalformedRecord {
            line,
            message: format!("invalid salary '{}': {err}", input.trim()),
        }
    })
}

fn parse_hours(input: &str, line: usize) -> PersistenceResult<Option<u32>> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    trimmed.parse::<u32>().map(Some).map_err(|err| {
        PersistenceError::MalformedRecord {
            line,
            message: format!("invalid hours_accrued '{trimmed}': {err}"),
        }
    })
}

fn parse_prescriptions(input: &str, line: usize) -> PersistenceResult<BTreeMap<String, String>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(BTreeMap::new());
    }
    serde_json::from_str(trimmed).map_err(|err| PersistenceError::MalformedRecord {
        line,
        message: format!("invalid prescriptions json: {err}"),
    })
}

fn split_notes(input: &str) -> Vec<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed
        .split(NOTE_SEPARATOR)
        .map(|note| note.to_string())
        .collect()
}
