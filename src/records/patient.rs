use super::RoomType;
use std::collections::VecDeque;
use std::fmt;

/// Admission-state precondition failures. Non-fatal; the caller reports
/// them and the record is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionError {
    AlreadyAdmitted,
    NotAdmitted,
}

impl fmt::Display for AdmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdmissionError::AlreadyAdmitted => write!(f, "patient is already admitted"),
            AdmissionError::NotAdmitted => write!(f, "patient is not admitted"),
        }
    }
}

/// One patient's identity, admission state, and event history.
///
/// The history is append-only: every state-changing event pushes an entry,
/// and entries are never removed or edited. `history_latest_first` renders
/// it most-recent-first; callers wanting chronological order reverse it.
#[derive(Debug, Clone)]
pub struct Patient {
    id: u32,
    name: String,
    age: u32,
    contact: String,
    admitted: bool,
    // Retains its last value after discharge; only reported while admitted.
    room_type: Option<RoomType>,
    pending_tests: VecDeque<String>,
    history: Vec<String>,
    registered_at: i64,
}

impl Patient {
    pub fn new(id: u32, name: impl Into<String>, age: u32, contact: impl Into<String>) -> Self {
        Patient {
            id,
            name: name.into(),
            age,
            contact: contact.into(),
            admitted: false,
            room_type: None,
            pending_tests: VecDeque::new(),
            history: Vec::new(),
            registered_at: chrono::Utc::now().timestamp(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn is_admitted(&self) -> bool {
        self.admitted
    }

    /// The room the patient currently occupies, or None when not admitted.
    pub fn current_room(&self) -> Option<RoomType> {
        if self.admitted {
            self.room_type
        } else {
            None
        }
    }

    pub fn registered_at(&self) -> i64 {
        self.registered_at
    }

    pub fn pending_test_count(&self) -> usize {
        self.pending_tests.len()
    }

    /// Admit the patient into a room. Fails if already admitted, leaving
    /// both the admission state and the stored room untouched.
    pub fn admit(&mut self, room: RoomType) -> Result<(), AdmissionError> {
        if self.admitted {
            return Err(AdmissionError::AlreadyAdmitted);
        }
        self.admitted = true;
        self.room_type = Some(room);
        self.history.push(format!("Admitted to {}", room.label()));
        Ok(())
    }

    /// Discharge the patient. Fails if not admitted.
    pub fn discharge(&mut self) -> Result<(), AdmissionError> {
        if !self.admitted {
            return Err(AdmissionError::NotAdmitted);
        }
        self.admitted = false;
        self.history.push("Discharged".to_string());
        Ok(())
    }

    /// Append a free-form entry to the history. Always succeeds.
    pub fn add_history(&mut self, entry: impl Into<String>) {
        self.history.push(entry.into());
    }

    /// Queue a test for later performance and log the request.
    pub fn request_test(&mut self, test_name: impl Into<String>) {
        let test_name = test_name.into();
        self.history.push(format!("Requested test: {}", test_name));
        self.pending_tests.push_back(test_name);
    }

    /// Perform the oldest pending test, FIFO. Returns None when nothing is
    /// pending; that is the "no tests" sentinel, not an error.
    pub fn perform_test(&mut self) -> Option<String> {
        let test_name = self.pending_tests.pop_front()?;
        self.history.push(format!("Performed test: {}", test_name));
        Some(test_name)
    }

    /// History entries in reverse insertion order, most recent event first.
    pub fn history_latest_first(&self) -> Vec<String> {
        self.history.iter().rev().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_patient_starts_unadmitted() {
        let patient = Patient::new(1, "John Doe", 35, "555-1234");
        assert_eq!(patient.id(), 1);
        assert_eq!(patient.name(), "John Doe");
        assert_eq!(patient.age(), 35);
        assert_eq!(patient.contact(), "555-1234");
        assert!(!patient.is_admitted());
        assert_eq!(patient.current_room(), None);
        assert!(patient.history_latest_first().is_empty());
    }

    #[test]
    fn test_admit_then_double_admit() {
        let mut patient = Patient::new(1, "John Doe", 35, "555-1234");

        assert_eq!(patient.admit(RoomType::PrivateRoom), Ok(()));
        assert!(patient.is_admitted());
        assert_eq!(patient.current_room(), Some(RoomType::PrivateRoom));

        // Second admit is rejected and changes nothing, including the room.
        assert_eq!(
            patient.admit(RoomType::SemiPrivate),
            Err(AdmissionError::AlreadyAdmitted)
        );
        assert!(patient.is_admitted());
        assert_eq!(patient.current_room(), Some(RoomType::PrivateRoom));
        assert_eq!(patient.history_latest_first().len(), 1);
    }

    #[test]
    fn test_discharge_requires_admission() {
        let mut patient = Patient::new(2, "Jane Smith", 28, "555-5678");
        assert_eq!(patient.discharge(), Err(AdmissionError::NotAdmitted));
        assert!(!patient.is_admitted());
        assert!(patient.history_latest_first().is_empty());

        patient.admit(RoomType::Icu).unwrap();
        assert_eq!(patient.discharge(), Ok(()));
        assert!(!patient.is_admitted());
        assert_eq!(patient.current_room(), None);
        assert_eq!(
            patient.history_latest_first(),
            vec!["Discharged".to_string(), "Admitted to ICU".to_string()]
        );
    }

    #[test]
    fn test_perform_test_empty_is_sentinel() {
        let mut patient = Patient::new(3, "Mike Johnson", 45, "555-9012");
        assert_eq!(patient.perform_test(), None);
        // The sentinel leaves no trace in the history.
        assert!(patient.history_latest_first().is_empty());
    }

    #[test]
    fn test_tests_perform_in_request_order() {
        let mut patient = Patient::new(3, "Mike Johnson", 45, "555-9012");
        patient.request_test("Blood Test");
        patient.request_test("X-Ray");
        patient.request_test("MRI");

        assert_eq!(patient.perform_test(), Some("Blood Test".to_string()));
        assert_eq!(patient.perform_test(), Some("X-Ray".to_string()));
        assert_eq!(patient.perform_test(), Some("MRI".to_string()));
        assert_eq!(patient.perform_test(), None);
    }

    #[test]
    fn test_history_renders_latest_first() {
        let mut patient = Patient::new(4, "Ann Lee", 52, "555-3456");
        patient.add_history("E1");
        patient.add_history("E2");
        patient.add_history("E3");
        assert_eq!(
            patient.history_latest_first(),
            vec!["E3".to_string(), "E2".to_string(), "E1".to_string()]
        );
    }

    #[test]
    fn test_request_and_perform_log_history() {
        let mut patient = Patient::new(5, "Bo Chen", 61, "555-7890");
        patient.request_test("ECG");
        patient.perform_test();
        assert_eq!(
            patient.history_latest_first(),
            vec![
                "Performed test: ECG".to_string(),
                "Requested test: ECG".to_string(),
            ]
        );
    }
}
