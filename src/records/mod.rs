//! Patient and doctor records
//!
//! This module contains the leaf record types the registry manages:
//! - Patient: identity, admission state, test queue, event history
//! - Doctor: identity, department, pending-appointment queue
//!
//! Records never perform registry lookups themselves; cross-record
//! operations live in the registry.

mod doctor;
mod patient;

pub use doctor::Doctor;
pub use patient::{AdmissionError, Patient};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hospital departments a doctor can belong to. Fixed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Cardiology,
    Neurology,
    Orthopedics,
    Pediatrics,
    Emergency,
    General,
}

impl Department {
    /// Human-readable display label.
    pub fn label(&self) -> &'static str {
        match self {
            Department::Cardiology => "Cardiology",
            Department::Neurology => "Neurology",
            Department::Orthopedics => "Orthopedics",
            Department::Pediatrics => "Pediatrics",
            Department::Emergency => "Emergency",
            Department::General => "General",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Room categories a patient can be admitted to. Fixed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    GeneralWard,
    Icu,
    PrivateRoom,
    SemiPrivate,
}

impl RoomType {
    pub fn label(&self) -> &'static str {
        match self {
            RoomType::GeneralWard => "General Ward",
            RoomType::Icu => "ICU",
            RoomType::PrivateRoom => "Private Room",
            RoomType::SemiPrivate => "Semi-Private",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
