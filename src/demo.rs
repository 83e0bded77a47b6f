//! Scripted demonstration scenario
//!
//! Walks the registry through a fixed sequence of registrations,
//! admissions, bookings, tests, and emergencies, printing each outcome.
//! Rendering lives here; the registry itself never prints.

use crate::records::{Department, RoomType};
use crate::registry::Hospital;

fn report(result: Result<(), crate::error::HospitalError>, success: &str) {
    match result {
        Ok(()) => println!("{}", success),
        Err(err) => println!("{}", err),
    }
}

pub fn run(hospital: &mut Hospital) {
    println!("--- Registering patients ---");
    let p1 = hospital.register_patient("John Doe", 35, "555-1234");
    let p2 = hospital.register_patient("Jane Smith", 28, "555-5678");
    let p3 = hospital.register_patient("Mike Johnson", 45, "555-9012");
    println!("Registered patients {}, {}, {}", p1, p2, p3);

    println!("--- Registering doctors ---");
    let d1 = hospital.register_doctor("Dr. Smith", Department::Cardiology);
    let d2 = hospital.register_doctor("Dr. Brown", Department::Neurology);
    let d3 = hospital.register_doctor("Dr. Lee", Department::Pediatrics);
    println!("Registered doctors {}, {}, {}", d1, d2, d3);

    println!("--- Admissions ---");
    report(
        hospital.admit_patient(p1, RoomType::PrivateRoom),
        "Patient 1 admitted successfully!",
    );
    report(
        hospital.admit_patient(p2, RoomType::Icu),
        "Patient 2 admitted successfully!",
    );
    // Admitting an already admitted patient is reported, not fatal.
    report(
        hospital.admit_patient(p1, RoomType::SemiPrivate),
        "Patient 1 admitted successfully!",
    );

    println!("--- Appointments ---");
    report(hospital.book_appointment(d1, p1), "Appointment booked successfully!");
    report(hospital.book_appointment(d1, p2), "Appointment booked successfully!");
    report(hospital.book_appointment(d2, p3), "Appointment booked successfully!");
    report(hospital.book_appointment(999, p1), "Appointment booked successfully!");
    report(hospital.book_appointment(d1, 999), "Appointment booked successfully!");

    println!("--- Medical tests ---");
    if hospital.request_test(p1, "Blood Test").is_ok() {
        println!("Requested Blood Test for patient {}", p1);
    }
    if hospital.request_test(p1, "X-Ray").is_ok() {
        println!("Requested X-Ray for patient {}", p1);
    }
    match hospital.perform_test(p1) {
        Ok(Some(test_name)) => println!("Performed test: {}", test_name),
        Ok(None) => println!("No tests pending"),
        Err(err) => println!("{}", err),
    }

    println!("--- Emergencies ---");
    hospital.add_emergency(p3);
    println!("Patient ID {} added to emergency queue", p3);
    hospital.add_emergency(p1);
    println!("Patient ID {} added to emergency queue", p1);
    for _ in 0..3 {
        match hospital.handle_next_emergency() {
            Some(patient_id) => println!("Handling emergency for patient ID {}", patient_id),
            None => println!("No emergency cases pending"),
        }
    }

    println!("--- Discharge ---");
    report(hospital.discharge_patient(p2), "Patient 2 discharged");

    println!("--- Summaries ---");
    for id in [p1, p2, 999] {
        match hospital.patient_summary(id) {
            Ok(summary) => {
                println!("Patient ID: {}", summary.id);
                println!("Patient Name: {}", summary.name);
                println!(
                    "Admission Status: {}",
                    if summary.admitted { "Admitted" } else { "Not Admitted" }
                );
                for entry in &summary.history {
                    println!("  {}", entry);
                }
            }
            Err(err) => println!("{}", err),
        }
    }
    for id in [d1, d2, 999] {
        match hospital.doctor_summary(id) {
            Ok(summary) => {
                println!("Doctor ID: {}", summary.id);
                println!("Doctor Name: {}", summary.name);
                println!("Department: {}", summary.department);
            }
            Err(err) => println!("{}", err),
        }
    }
}
