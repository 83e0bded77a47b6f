//! Hospital registry
//!
//! The root component of the system. Owns the patient and doctor
//! collections, assigns stable identifiers, and routes cross-record
//! operations (booking, admission, emergency triage) between records.
//!
//! The registry is synchronous and single-threaded; callers exposing it to
//! concurrent access wrap it in one lock (see `api::rest`) so that
//! multi-record operations like `book_appointment` stay atomic.

use crate::error::HospitalError;
use crate::records::{Department, Doctor, Patient, RoomType};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

/// Snapshot of one patient for callers to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientSummary {
    pub id: u32,
    pub name: String,
    pub admitted: bool,
    /// Occupied room label; absent when not admitted.
    pub room: Option<String>,
    pub pending_tests: usize,
    /// Event history, most recent first.
    pub history: Vec<String>,
    pub registered_at: i64,
}

/// Snapshot of one doctor for callers to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorSummary {
    pub id: u32,
    pub name: String,
    pub department: String,
    pub waiting_appointments: usize,
    pub registered_at: i64,
}

/// In-memory registry of patients, doctors, and the emergency queue.
///
/// Identifiers count up from 1, patients and doctors independently, and
/// are never reused. Records live for the registry's lifetime; there is no
/// deletion beyond normal queue dequeues.
#[derive(Debug)]
pub struct Hospital {
    patients: HashMap<u32, Patient>,
    doctors: HashMap<u32, Doctor>,
    emergency_queue: VecDeque<u32>,
    next_patient_id: u32,
    next_doctor_id: u32,
}

impl Default for Hospital {
    fn default() -> Self {
        Hospital::new()
    }
}

impl Hospital {
    pub fn new() -> Self {
        Hospital {
            patients: HashMap::new(),
            doctors: HashMap::new(),
            emergency_queue: VecDeque::new(),
            next_patient_id: 1,
            next_doctor_id: 1,
        }
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    pub fn doctor_count(&self) -> usize {
        self.doctors.len()
    }

    /// Register a new patient and return the assigned id. Always succeeds.
    pub fn register_patient(
        &mut self,
        name: impl Into<String>,
        age: u32,
        contact: impl Into<String>,
    ) -> u32 {
        let id = self.next_patient_id;
        self.next_patient_id += 1;
        self.patients.insert(id, Patient::new(id, name, age, contact));
        id
    }

    /// Register a new doctor and return the assigned id. Doctor ids are
    /// counted independently of patient ids.
    pub fn register_doctor(&mut self, name: impl Into<String>, department: Department) -> u32 {
        let id = self.next_doctor_id;
        self.next_doctor_id += 1;
        self.doctors.insert(id, Doctor::new(id, name, department));
        id
    }

    /// Admit a patient into a room.
    pub fn admit_patient(&mut self, patient_id: u32, room: RoomType) -> Result<(), HospitalError> {
        let patient = self
            .patients
            .get_mut(&patient_id)
            .ok_or(HospitalError::PatientNotFound(patient_id))?;
        patient
            .admit(room)
            .map_err(|e| HospitalError::from_admission(e, patient_id))
    }

    /// Discharge an admitted patient.
    pub fn discharge_patient(&mut self, patient_id: u32) -> Result<(), HospitalError> {
        let patient = self
            .patients
            .get_mut(&patient_id)
            .ok_or(HospitalError::PatientNotFound(patient_id))?;
        patient
            .discharge()
            .map_err(|e| HospitalError::from_admission(e, patient_id))
    }

    /// Book an appointment: enqueue the patient on the doctor's queue and
    /// log the booking in the patient's history.
    ///
    /// The doctor is validated before the patient, and nothing is mutated
    /// until both lookups succeed; callers may rely on both the error
    /// ordering and the absence of partial updates.
    pub fn book_appointment(
        &mut self,
        doctor_id: u32,
        patient_id: u32,
    ) -> Result<(), HospitalError> {
        let doctor_name = self
            .doctors
            .get(&doctor_id)
            .ok_or(HospitalError::DoctorNotFound(doctor_id))?
            .name()
            .to_string();
        if !self.patients.contains_key(&patient_id) {
            return Err(HospitalError::PatientNotFound(patient_id));
        }

        // Both records exist; perform both mutations.
        self.doctors
            .get_mut(&doctor_id)
            .ok_or(HospitalError::DoctorNotFound(doctor_id))?
            .add_appointment(patient_id);
        self.patients
            .get_mut(&patient_id)
            .ok_or(HospitalError::PatientNotFound(patient_id))?
            .add_history(format!("Booked appointment with Dr. {}", doctor_name));
        Ok(())
    }

    /// Dequeue the next patient from a doctor's appointment queue. Returns
    /// Ok(None) when the queue is empty.
    pub fn see_next_patient(&mut self, doctor_id: u32) -> Result<Option<u32>, HospitalError> {
        let doctor = self
            .doctors
            .get_mut(&doctor_id)
            .ok_or(HospitalError::DoctorNotFound(doctor_id))?;
        Ok(doctor.see_next_patient())
    }

    /// Queue a test on a patient's record.
    pub fn request_test(
        &mut self,
        patient_id: u32,
        test_name: impl Into<String>,
    ) -> Result<(), HospitalError> {
        let patient = self
            .patients
            .get_mut(&patient_id)
            .ok_or(HospitalError::PatientNotFound(patient_id))?;
        patient.request_test(test_name);
        Ok(())
    }

    /// Perform a patient's oldest pending test. Returns Ok(None) when no
    /// tests are pending.
    pub fn perform_test(&mut self, patient_id: u32) -> Result<Option<String>, HospitalError> {
        let patient = self
            .patients
            .get_mut(&patient_id)
            .ok_or(HospitalError::PatientNotFound(patient_id))?;
        Ok(patient.perform_test())
    }

    /// Append a free-form note to a patient's history.
    pub fn add_medical_record(
        &mut self,
        patient_id: u32,
        entry: impl Into<String>,
    ) -> Result<(), HospitalError> {
        let patient = self
            .patients
            .get_mut(&patient_id)
            .ok_or(HospitalError::PatientNotFound(patient_id))?;
        patient.add_history(entry);
        Ok(())
    }

    /// Add a patient id to the global emergency queue. The id is NOT
    /// checked against the patient collection; unknown ids queue like any
    /// other. Intentional asymmetry with `admit_patient`/`book_appointment`.
    pub fn add_emergency(&mut self, patient_id: u32) {
        self.emergency_queue.push_back(patient_id);
    }

    /// Dequeue the oldest emergency case. Returns None when nothing is
    /// pending; that is the sentinel, not an error.
    pub fn handle_next_emergency(&mut self) -> Option<u32> {
        self.emergency_queue.pop_front()
    }

    pub fn pending_emergencies(&self) -> usize {
        self.emergency_queue.len()
    }

    /// Summary of one patient, history most-recent-first.
    pub fn patient_summary(&self, patient_id: u32) -> Result<PatientSummary, HospitalError> {
        let patient = self
            .patients
            .get(&patient_id)
            .ok_or(HospitalError::PatientNotFound(patient_id))?;
        Ok(PatientSummary {
            id: patient.id(),
            name: patient.name().to_string(),
            admitted: patient.is_admitted(),
            room: patient.current_room().map(|r| r.label().to_string()),
            pending_tests: patient.pending_test_count(),
            history: patient.history_latest_first(),
            registered_at: patient.registered_at(),
        })
    }

    /// Summary of one doctor with the department's display label.
    pub fn doctor_summary(&self, doctor_id: u32) -> Result<DoctorSummary, HospitalError> {
        let doctor = self
            .doctors
            .get(&doctor_id)
            .ok_or(HospitalError::DoctorNotFound(doctor_id))?;
        Ok(DoctorSummary {
            id: doctor.id(),
            name: doctor.name().to_string(),
            department: doctor.department().label().to_string(),
            waiting_appointments: doctor.waiting_count(),
            registered_at: doctor.registered_at(),
        })
    }
}
