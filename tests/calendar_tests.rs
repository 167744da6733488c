use clinic_scheduler::{AppointmentCalendar, CalendarError, TimeSlot, Weekday};

#[test]
fn booking_a_free_slot_succeeds_and_grows_the_slot_by_one() {
    let mut cal = AppointmentCalendar::new();
    for day in Weekday::ALL {
        for time in TimeSlot::ALL {
            cal.book(day.as_str(), time.as_str(), "jim kelly", "julie kerns")
                .unwrap();
            assert_eq!(cal.slot(day, time).len(), 1);
        }
    }
    assert_eq!(cal.booking_count(), 25);
}

#[test]
fn double_booking_a_doctor_is_a_conflict_and_leaves_the_slot_unchanged() {
    let mut cal = AppointmentCalendar::new();
    cal.book("tuesday", "3", "jim kelly", "julie kerns").unwrap();

    let err = cal
        .book("tuesday", "3pm", "Jim Kelly", "jim fellows")
        .unwrap_err();
    assert!(
        matches!(err, CalendarError::SlotConflict { .. }),
        "expected SlotConflict, got {err:?}"
    );
    assert_eq!(cal.bookings("tuesday", "3").unwrap().len(), 1);
}

#[test]
fn distinct_doctors_share_a_slot_in_call_order() {
    let mut cal = AppointmentCalendar::new();
    cal.book("friday", "1pm", "jim kelly", "jim fellows").unwrap();
    cal.book("friday", "1", "dana moore", "julie kerns").unwrap();

    let bookings = cal.bookings("friday", "1pm").unwrap();
    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].doctor, "jim kelly");
    assert_eq!(bookings[1].doctor, "dana moore");
}

#[test]
fn invalid_day_or_time_is_rejected_before_any_mutation() {
    let mut cal = AppointmentCalendar::new();

    let err = cal.book("sunday", "3", "jim kelly", "julie kerns").unwrap_err();
    assert!(matches!(err, CalendarError::InvalidSlot { .. }));

    let err = cal.book("tuesday", "5", "jim kelly", "julie kerns").unwrap_err();
    assert!(matches!(err, CalendarError::InvalidSlot { .. }));

    assert!(cal.is_empty());
}

#[test]
fn invalid_slot_and_conflict_are_distinguishable() {
    let mut cal = AppointmentCalendar::new();
    cal.book("monday", "12pm", "jim kelly", "julie kerns").unwrap();

    let conflict = cal.book("monday", "12", "jim kelly", "ann b").unwrap_err();
    let invalid = cal.book("saturday", "12", "jim kelly", "ann b").unwrap_err();
    assert!(matches!(conflict, CalendarError::SlotConflict { .. }));
    assert!(matches!(invalid, CalendarError::InvalidSlot { .. }));
}

#[test]
fn remove_from_an_empty_slot_reports_not_found() {
    let mut cal = AppointmentCalendar::new();
    let err = cal.remove("wednesday", "2", None).unwrap_err();
    assert!(matches!(err, CalendarError::NotFound { .. }));
}

#[test]
fn remove_without_a_filter_takes_the_oldest_booking_first() {
    let mut cal = AppointmentCalendar::new();
    cal.book("thursday", "4", "jim kelly", "first patient").unwrap();
    cal.book("thursday", "4", "dana moore", "second patient").unwrap();

    let removed = cal.remove("thursday", "4pm", None).unwrap();
    assert_eq!(removed.doctor, "jim kelly");
    assert_eq!(removed.patient, "first patient");

    let remaining = cal.bookings("thursday", "4").unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].doctor, "dana moore");
}

#[test]
fn remove_with_a_filter_matches_doctor_substring_case_insensitively() {
    let mut cal = AppointmentCalendar::new();
    cal.book("tuesday", "3", "Jim Kelly", "julie kerns").unwrap();
    cal.book("tuesday", "3", "Dana Moore", "jim fellows").unwrap();

    let removed = cal.remove("tuesday", "3", Some("moore")).unwrap();
    assert_eq!(removed.doctor, "Dana Moore");

    let remaining = cal.bookings("tuesday", "3").unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].doctor, "Jim Kelly");
}

#[test]
fn remove_with_a_non_matching_filter_reports_not_found_and_keeps_the_slot() {
    let mut cal = AppointmentCalendar::new();
    cal.book("tuesday", "3", "jim kelly", "julie kerns").unwrap();

    let err = cal.remove("tuesday", "3", Some("nguyen")).unwrap_err();
    assert!(matches!(err, CalendarError::NotFound { .. }));
    assert_eq!(cal.booking_count(), 1);
}

#[test]
fn scheduling_scenario_from_booking_through_selective_removal() {
    let mut cal = AppointmentCalendar::new();

    cal.book("tuesday", "3", "provider a", "patient x").unwrap();
    let rendered = cal.render();
    assert!(rendered.contains("Tuesday"));
    assert!(rendered.contains("3pm"));
    assert!(rendered.contains("provider a - patient x"));

    let err = cal.book("tuesday", "3pm", "provider a", "patient y").unwrap_err();
    assert!(matches!(err, CalendarError::SlotConflict { .. }));

    cal.book("tuesday", "3", "provider b", "patient y").unwrap();
    assert_eq!(cal.bookings("tuesday", "3pm").unwrap().len(), 2);

    let removed = cal.remove("tuesday", "3", Some("provider b")).unwrap();
    assert_eq!(removed.doctor, "provider b");
    let remaining = cal.bookings("tuesday", "3").unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].doctor, "provider a");
}

#[test]
fn render_omits_days_and_slots_with_no_bookings() {
    let mut cal = AppointmentCalendar::new();
    cal.book("wednesday", "2", "jim kelly", "julie kerns").unwrap();

    let rendered = cal.render();
    assert!(rendered.contains("Wednesday"));
    assert!(rendered.contains("2pm"));
    assert!(!rendered.contains("Monday"));
    assert!(!rendered.contains("12pm"));
}

#[test]
fn render_of_an_empty_calendar_says_so() {
    let cal = AppointmentCalendar::new();
    assert_eq!(cal.render(), "No appointments booked.\n");
}

#[test]
fn query_is_read_only() {
    let mut cal = AppointmentCalendar::new();
    cal.book("monday", "1", "jim kelly", "julie kerns").unwrap();

    assert_eq!(cal.bookings("monday", "1pm").unwrap().len(), 1);
    assert_eq!(cal.bookings("monday", "1pm").unwrap().len(), 1);
    assert!(cal.bookings("monday", "4").unwrap().is_empty());
    assert_eq!(cal.booking_count(), 1);
}
