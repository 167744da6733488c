use assert_cmd::Command;
use predicates::str::contains as str_contains;
use tempfile::NamedTempFile;

#[allow(deprecated)]
fn run_cli(script: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("cli").expect("cli binary");
    cmd.write_stdin(script.to_string()).assert()
}

#[test]
fn cli_books_and_shows_an_appointment() {
    run_cli("book tuesday 3 jim kelly/julie kerns\nshow\nquit\n")
        .success()
        .stdout(str_contains(
            "Appointment confirmed at 3pm on Tuesday for julie kerns with jim kelly",
        ))
        .stdout(str_contains("jim kelly - julie kerns"));
}

#[test]
fn cli_reports_an_invalid_day_distinctly() {
    run_cli("book sunday 3 jim kelly/julie kerns\nquit\n")
        .success()
        .stdout(str_contains("'sunday' is not a bookable slot"));
}

#[test]
fn cli_reports_a_double_booking_distinctly() {
    run_cli(
        "book tuesday 3 jim kelly/julie kerns\nbook tuesday 3pm jim kelly/jim fellows\nquit\n",
    )
    .success()
    .stdout(str_contains("jim kelly is already booked at 3pm on tuesday"));
}

#[test]
fn cli_removes_a_named_doctors_booking_only() {
    run_cli(
        "book tuesday 3 jim kelly/julie kerns\nbook tuesday 3 dana moore/jim fellows\nremove tuesday 3 dana\nshow\nquit\n",
    )
    .success()
    .stdout(str_contains("Removed dana moore - jim fellows"))
    .stdout(str_contains("jim kelly - julie kerns"));
}

#[test]
fn cli_save_and_load_round_trips_the_calendar() {
    let tmp = NamedTempFile::new().expect("create temp file");
    let path = tmp.path().to_string_lossy().to_string();
    let script = format!(
        "book tuesday 3 jim kelly/julie kerns\nsave cal {path}\nremove tuesday 3\nload cal {path}\nshow\nquit\n"
    );
    let assert = run_cli(&script).success();
    let output = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(
        output.contains("Appointments loaded from"),
        "expected output to mention load completion"
    );
    let after_reload = output
        .split("Appointments loaded from")
        .last()
        .unwrap_or_default();
    assert!(
        after_reload.contains("jim kelly - julie kerns"),
        "persisted booking should survive the reload:\n{after_reload}"
    );
}

#[test]
fn cli_tracks_timecards_for_hourly_staff_only() {
    run_cli(
        "hire receptionist 35000 dana lee\ntimecard 5 dana lee\nhire doctor 134000 jim kelly\ntimecard 1 jim kelly\nquit\n",
    )
    .success()
    .stdout(str_contains("dana lee now has 5 hours accrued."))
    .stdout(str_contains("jim kelly is salaried and does not accrue hours"));
}

#[test]
fn cli_rejects_hiring_the_same_identity_twice() {
    run_cli("hire doctor 134000 jim kelly\nhire doctor 134000 jim kelly\nquit\n")
        .success()
        .stdout(str_contains("already exists"));
}

#[test]
fn cli_manages_patient_records() {
    run_cli(
        "patient julie kerns\nprescribe julie kerns/ibuprofen/200mg\nnote julie kerns/checkup\npatients\nquit\n",
    )
    .success()
    .stdout(str_contains("Registered patient julie kerns."))
    .stdout(str_contains("Prescribed ibuprofen 200mg for julie kerns."))
    .stdout(str_contains("Note added for julie kerns."))
    .stdout(str_contains("julie kerns"));
}
