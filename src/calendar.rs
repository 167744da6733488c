use std::fmt;

/// The five bookable weekdays. Weekends are not part of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Canonical lowercase label, as persisted to disk.
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
        }
    }

    /// Capitalized label for rendered reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    /// Case-insensitive parse against the canonical set.
    pub fn parse(input: &str) -> Option<Weekday> {
        let needle = input.trim().to_ascii_lowercase();
        Weekday::ALL.into_iter().find(|day| day.as_str() == needle)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five hourly labels spanning midday to late afternoon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSlot {
    Noon,
    One,
    Two,
    Three,
    Four,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 5] = [
        TimeSlot::Noon,
        TimeSlot::One,
        TimeSlot::Two,
        TimeSlot::Three,
        TimeSlot::Four,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Noon => "12pm",
            TimeSlot::One => "1pm",
            TimeSlot::Two => "2pm",
            TimeSlot::Three => "3pm",
            TimeSlot::Four => "4pm",
        }
    }

    /// Accepts either the suffixed label ("3pm") or a bare hour ("3").
    pub fn parse(input: &str) -> Option<TimeSlot> {
        let trimmed = input.trim().to_ascii_lowercase();
        let labeled = if trimmed.ends_with("pm") {
            trimmed
        } else {
            format!("{trimmed}pm")
        };
        TimeSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == labeled)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One appointment: a doctor/patient pair occupying a slot. Names are
/// opaque here; resolving them against the registries is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub doctor: String,
    pub patient: String,
}

impl Booking {
    pub fn new(doctor: impl Into<String>, patient: impl Into<String>) -> Self {
        Self {
            doctor: doctor.into(),
            patient: patient.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Weekday or time label outside the canonical sets.
    InvalidSlot { input: String },
    /// The doctor already holds a booking in this slot.
    SlotConflict {
        doctor: String,
        day: Weekday,
        time: TimeSlot,
    },
    /// Nothing to remove at this slot (or nothing matching the filter).
    NotFound { day: Weekday, time: TimeSlot },
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::InvalidSlot { input } => {
                write!(
                    f,
                    "'{input}' is not a bookable slot; days run monday-friday and times 12pm-4pm"
                )
            }
            CalendarError::SlotConflict { doctor, day, time } => {
                write!(f, "{doctor} is already booked at {time} on {day}")
            }
            CalendarError::NotFound { day, time } => {
                write!(f, "no matching appointment at {time} on {day}")
            }
        }
    }
}

impl std::error::Error for CalendarError {}

/// The weekly grid: all 25 slots exist from construction, an empty slot is
/// an empty list rather than an absent key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentCalendar {
    grid: [[Vec<Booking>; TimeSlot::ALL.len()]; Weekday::ALL.len()],
}

impl AppointmentCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map free-form day/time input onto the grid, or reject it.
    pub fn normalize(day: &str, time: &str) -> Result<(Weekday, TimeSlot), CalendarError> {
        let day = Weekday::parse(day).ok_or_else(|| CalendarError::InvalidSlot {
            input: day.trim().to_string(),
        })?;
        let time = TimeSlot::parse(time).ok_or_else(|| CalendarError::InvalidSlot {
            input: time.trim().to_string(),
        })?;
        Ok((day, time))
    }

    /// Book an appointment. Rejects non-canonical slots and double-booked
    /// doctors without touching the grid.
    pub fn book(
        &mut self,
        day: &str,
        time: &str,
        doctor: impl Into<String>,
        patient: impl Into<String>,
    ) -> Result<(), CalendarError> {
        let (day, time) = Self::normalize(day, time)?;
        let doctor = doctor.into();
        let slot = &mut self.grid[day.index()][time.index()];
        if slot
            .iter()
            .any(|booking| booking.doctor.eq_ignore_ascii_case(&doctor))
        {
            return Err(CalendarError::SlotConflict { doctor, day, time });
        }
        slot.push(Booking {
            doctor,
            patient: patient.into(),
        });
        Ok(())
    }

    /// Remove one appointment from a slot and return it. Without a filter
    /// the oldest booking goes first; with one, the first booking whose
    /// doctor name contains the given substring (case-insensitive).
    pub fn remove(
        &mut self,
        day: &str,
        time: &str,
        doctor: Option<&str>,
    ) -> Result<Booking, CalendarError> {
        let (day, time) = Self::normalize(day, time)?;
        let slot = &mut self.grid[day.index()][time.index()];
        let position = match doctor {
            None => {
                if slot.is_empty() {
                    return Err(CalendarError::NotFound { day, time });
                }
                0
            }
            Some(name) => {
                let needle = name.trim().to_ascii_lowercase();
                slot.iter()
                    .position(|booking| booking.doctor.to_ascii_lowercase().contains(&needle))
                    .ok_or(CalendarError::NotFound { day, time })?
            }
        };
        Ok(slot.remove(position))
    }

    /// Read-only view of a slot addressed by free-form labels.
    pub fn bookings(&self, day: &str, time: &str) -> Result<&[Booking], CalendarError> {
        let (day, time) = Self::normalize(day, time)?;
        Ok(self.slot(day, time))
    }

    /// Typed slot accessor; infallible since the enums cover the grid.
    pub fn slot(&self, day: Weekday, time: TimeSlot) -> &[Booking] {
        &self.grid[day.index()][time.index()]
    }

    pub fn booking_count(&self) -> usize {
        self.grid
            .iter()
            .flat_map(|row| row.iter())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.booking_count() == 0
    }

    /// Human-readable report grouped by weekday, then time, then booking.
    /// Slots (and days) with nothing booked are left out.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for day in Weekday::ALL {
            let occupied: Vec<TimeSlot> = TimeSlot::ALL
                .into_iter()
                .filter(|time| !self.slot(day, *time).is_empty())
                .collect();
            if occupied.is_empty() {
                continue;
            }
            out.push_str(day.display_name());
            out.push('\n');
            for time in occupied {
                out.push_str(&format!("  {time}\n"));
                for booking in self.slot(day, time) {
                    out.push_str(&format!("    {} - {}\n", booking.doctor, booking.patient));
                }
            }
        }
        if out.is_empty() {
            out.push_str("No appointments booked.\n");
        }
        out
    }
}
