//! Wardbook: an in-memory hospital operations registry
//!
//! Wardbook tracks patients, doctors, room admissions, appointment
//! scheduling, emergency triage order, and per-patient event history.
//! Appointment, test, and emergency queues are strict FIFO; each
//! patient's history is append-only and rendered most-recent-first.
//!
//! The core is the synchronous [`registry::Hospital`]; the `api` module
//! exposes it over HTTP behind a single registry-wide lock.

pub mod api;
pub mod config;
pub mod demo;
pub mod error;
pub mod records;
pub mod registry;

pub use error::HospitalError;
pub use records::{Department, Doctor, Patient, RoomType};
pub use registry::{DoctorSummary, Hospital, PatientSummary};
