use chrono::Local;
use clinic_scheduler::{
    AppointmentCalendar, Employee, Patient, PatientRecords, Role, StaffRegistry,
    load_calendar_from_csv, load_patients_from_csv, load_roster_from_csv, save_calendar_to_csv,
    save_patients_to_csv, save_roster_to_csv,
};
use std::io::{self, Write};

fn print_help() {
    println!(
        "Commands:\n  help                                  Show this help\n  show                                  Show the weekly calendar\n  appt <day> <time>                     Show one slot\n  book <day> <time> <doctor>/<patient>  Book an appointment\n  remove <day> <time> [doctor]          Remove an appointment (oldest first without a doctor)\n  staff                                 List the employee roster\n  hire <doctor|receptionist> <salary> <name...>\n                                        Register an employee\n  timecard <hours> <name...>            Add hours to an hourly employee\n  patients                              List patient records\n  patient <name...>                     Register a patient\n  prescribe <patient>/<medicine>/<dosage>\n                                        Add or update a prescription\n  note <patient>/<text...>              Append a timestamped note\n  save <cal|staff|patients> <path>      Persist a store to disk\n  load <cal|staff|patients> <path>      Load a store from disk\n  quit|exit                             Exit\n\nMulti-word names are fine; where a verb takes several of them they are\nseparated by '/'."
    );
}

fn main() {
    let mut calendar = AppointmentCalendar::new();
    let mut staff = StaffRegistry::new();
    let mut patients = PatientRecords::new();

    println!("Clinic Scheduler (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "show" => print!("{}", calendar.render()),
            "appt" => {
                let day = parts.next();
                let time = parts.next();
                match (day, time) {
                    (Some(day), Some(time)) => match calendar.bookings(day, time) {
                        Ok(bookings) if bookings.is_empty() => {
                            println!("No appointment at this time.")
                        }
                        Ok(bookings) => {
                            for booking in bookings {
                                println!("{} -- {}", booking.doctor, booking.patient);
                            }
                        }
                        Err(e) => println!("Error: {e}"),
                    },
                    _ => println!("Usage: appt <day> <time>"),
                }
            }
            "book" => {
                let day = parts.next();
                let time = parts.next();
                let names = parts.collect::<Vec<_>>().join(" ");
                match (day, time, names.split_once('/')) {
                    (Some(day), Some(time), Some((doctor, patient))) => {
                        let doctor = doctor.trim();
                        let patient = patient.trim();
                        match AppointmentCalendar::normalize(day, time) {
                            Err(e) => println!("Error: {e}"),
                            Ok((day, time)) => {
                                match calendar.book(day.as_str(), time.as_str(), doctor, patient) {
                                    Ok(()) => println!(
                                        "Appointment confirmed at {time} on {} for {patient} with {doctor}",
                                        day.display_name()
                                    ),
                                    Err(e) => println!("Error: {e}"),
                                }
                            }
                        }
                    }
                    _ => println!("Usage: book <day> <time> <doctor>/<patient>"),
                }
            }
            "remove" => {
                let day = parts.next();
                let time = parts.next();
                let doctor = parts.collect::<Vec<_>>().join(" ");
                match (day, time) {
                    (Some(day), Some(time)) => {
                        let filter = if doctor.is_empty() {
                            None
                        } else {
                            Some(doctor.as_str())
                        };
                        match calendar.remove(day, time, filter) {
                            Ok(removed) => {
                                println!(
                                    "Removed {} - {} from the calendar.",
                                    removed.doctor, removed.patient
                                );
                                print!("{}", calendar.render());
                            }
                            Err(e) => println!("Error: {e}"),
                        }
                    }
                    _ => println!("Usage: remove <day> <time> [doctor]"),
                }
            }
            "staff" => {
                if staff.is_empty() {
                    println!("No employees registered.");
                } else {
                    println!("{}", staff.summary());
                }
            }
            "hire" => {
                let role = parts.next().and_then(Role::parse);
                let salary = parts.next().map(str::parse::<u32>);
                let name = parts.collect::<Vec<_>>().join(" ");
                match (role, salary) {
                    (Some(role), Some(Ok(salary))) if !name.is_empty() => {
                        let employee = match role {
                            Role::Doctor => Employee::doctor(name.clone(), salary),
                            Role::Receptionist => Employee::receptionist(name.clone(), salary),
                        };
                        let eid = employee.eid();
                        match staff.register(employee) {
                            Ok(()) => println!("Hired {role} {name} (eid {eid})."),
                            Err(e) => println!("Error: {e}"),
                        }
                    }
                    _ => println!("Usage: hire <doctor|receptionist> <salary> <name...>"),
                }
            }
            "timecard" => {
                let hours = parts.next().map(str::parse::<u32>);
                let name = parts.collect::<Vec<_>>().join(" ");
                match hours {
                    Some(Ok(hours)) if !name.is_empty() => {
                        match staff.accrue_hours(&name, hours) {
                            Ok(total) => println!("{name} now has {total} hours accrued."),
                            Err(e) => println!("Error: {e}"),
                        }
                    }
                    _ => println!("Usage: timecard <hours> <name...>"),
                }
            }
            "patients" => {
                if patients.is_empty() {
                    println!("No patient records.");
                } else {
                    println!("{}", patients.summary());
                }
            }
            "patient" => {
                let name = parts.collect::<Vec<_>>().join(" ");
                if name.is_empty() {
                    println!("Usage: patient <name...>");
                } else {
                    patients.add(Patient::new(name.clone()));
                    println!("Registered patient {name}.");
                }
            }
            "prescribe" => {
                let args = parts.collect::<Vec<_>>().join(" ");
                let fields: Vec<&str> = args.split('/').map(str::trim).collect();
                match fields.as_slice() {
                    [name, medicine, dosage] if !name.is_empty() => {
                        match patients.find_by_name_mut(name) {
                            Some(patient) => {
                                patient.prescribe(*medicine, *dosage);
                                println!("Prescribed {medicine} {dosage} for {}.", patient.name);
                            }
                            None => println!("No patient named '{name}'."),
                        }
                    }
                    _ => println!("Usage: prescribe <patient>/<medicine>/<dosage>"),
                }
            }
            "note" => {
                let args = parts.collect::<Vec<_>>().join(" ");
                match args.split_once('/') {
                    Some((name, text)) => {
                        let name = name.trim();
                        match patients.find_by_name_mut(name) {
                            Some(patient) => {
                                patient.add_note(Local::now().naive_local(), text.trim());
                                println!("Note added for {}.", patient.name);
                            }
                            None => println!("No patient named '{name}'."),
                        }
                    }
                    None => println!("Usage: note <patient>/<text...>"),
                }
            }
            "save" => {
                let kind = parts.next();
                let path = parts.next();
                match (kind, path) {
                    (Some("cal"), Some(path)) => match save_calendar_to_csv(&calendar, path) {
                        Ok(()) => println!("Appointments written to {path}"),
                        Err(e) => println!("Error: {e}"),
                    },
                    (Some("staff"), Some(path)) => match save_roster_to_csv(&staff, path) {
                        Ok(()) => println!("Roster written to {path}"),
                        Err(e) => println!("Error: {e}"),
                    },
                    (Some("patients"), Some(path)) => match save_patients_to_csv(&patients, path) {
                        Ok(()) => println!("Patient records written to {path}"),
                        Err(e) => println!("Error: {e}"),
                    },
                    _ => println!("Usage: save <cal|staff|patients> <path>"),
                }
            }
            "load" => {
                let kind = parts.next();
                let path = parts.next();
                match (kind, path) {
                    (Some("cal"), Some(path)) => match load_calendar_from_csv(path) {
                        Ok(loaded) => {
                            calendar = loaded;
                            println!("Appointments loaded from {path}");
                        }
                        Err(e) => println!("Error: {e}"),
                    },
                    (Some("staff"), Some(path)) => match load_roster_from_csv(path) {
                        Ok(loaded) => {
                            staff = loaded;
                            println!("Roster loaded from {path}");
                        }
                        Err(e) => println!("Error: {e}"),
                    },
                    (Some("patients"), Some(path)) => match load_patients_from_csv(path) {
                        Ok(loaded) => {
                            patients = loaded;
                            println!("Patient records loaded from {path}");
                        }
                        Err(e) => println!("Error: {e}"),
                    },
                    _ => println!("Usage: load <cal|staff|patients> <path>"),
                }
            }
            other => {
                println!("Unknown command '{other}'. Type 'help' for the command list.");
            }
        }
    }
}
