pub mod calendar;
pub mod patient;
pub mod persistence;
pub mod staff;

pub use calendar::{AppointmentCalendar, Booking, CalendarError, TimeSlot, Weekday};
pub use patient::{Patient, PatientRecords};
pub use persistence::{
    PersistenceError, load_calendar_from_csv, load_patients_from_csv, load_roster_from_csv,
    save_calendar_to_csv, save_patients_to_csv, save_roster_to_csv,
};
pub use staff::{Compensation, Employee, RegistryError, Role, StaffRegistry};
