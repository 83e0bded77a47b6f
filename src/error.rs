use crate::records::AdmissionError;
use std::fmt;

/// Registry-level error taxonomy. Every variant is non-fatal and locally
/// recoverable; operations surface these as results, never panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HospitalError {
    PatientNotFound(u32),
    DoctorNotFound(u32),
    AlreadyAdmitted(u32),
    NotAdmitted(u32),
}

impl HospitalError {
    /// Map a record-level admission failure onto the registry taxonomy.
    pub fn from_admission(error: AdmissionError, patient_id: u32) -> Self {
        match error {
            AdmissionError::AlreadyAdmitted => HospitalError::AlreadyAdmitted(patient_id),
            AdmissionError::NotAdmitted => HospitalError::NotAdmitted(patient_id),
        }
    }
}

impl fmt::Display for HospitalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HospitalError::PatientNotFound(id) => write!(f, "Patient with ID {} not found", id),
            HospitalError::DoctorNotFound(id) => write!(f, "Doctor with ID {} not found", id),
            HospitalError::AlreadyAdmitted(id) => {
                write!(f, "Patient with ID {} is already admitted", id)
            }
            HospitalError::NotAdmitted(id) => {
                write!(f, "Patient with ID {} is not admitted", id)
            }
        }
    }
}

impl std::error::Error for HospitalError {}
