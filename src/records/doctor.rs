use super::Department;
use std::collections::VecDeque;

/// One doctor's identity and pending-appointment queue.
///
/// The queue holds patient ids in strict insertion order. Ids are not
/// checked against the patient registry here; validation happens in the
/// registry before an appointment is booked.
#[derive(Debug, Clone)]
pub struct Doctor {
    id: u32,
    name: String,
    department: Department,
    appointment_queue: VecDeque<u32>,
    registered_at: i64,
}

impl Doctor {
    pub fn new(id: u32, name: impl Into<String>, department: Department) -> Self {
        Doctor {
            id,
            name: name.into(),
            department,
            appointment_queue: VecDeque::new(),
            registered_at: chrono::Utc::now().timestamp(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department(&self) -> Department {
        self.department
    }

    pub fn registered_at(&self) -> i64 {
        self.registered_at
    }

    pub fn waiting_count(&self) -> usize {
        self.appointment_queue.len()
    }

    /// Enqueue a patient id for a visit. Always succeeds.
    pub fn add_appointment(&mut self, patient_id: u32) {
        self.appointment_queue.push_back(patient_id);
    }

    /// Dequeue the patient who has waited longest. Returns None when the
    /// queue is empty; that is the "no appointments" sentinel.
    pub fn see_next_patient(&mut self) -> Option<u32> {
        self.appointment_queue.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_doctor() {
        let doctor = Doctor::new(1, "Dr. Smith", Department::Cardiology);
        assert_eq!(doctor.id(), 1);
        assert_eq!(doctor.name(), "Dr. Smith");
        assert_eq!(doctor.department(), Department::Cardiology);
        assert_eq!(doctor.waiting_count(), 0);
    }

    #[test]
    fn test_appointments_dequeue_in_arrival_order() {
        let mut doctor = Doctor::new(1, "Dr. Smith", Department::Cardiology);
        doctor.add_appointment(7);
        doctor.add_appointment(3);
        doctor.add_appointment(7); // duplicates are allowed

        assert_eq!(doctor.see_next_patient(), Some(7));
        assert_eq!(doctor.see_next_patient(), Some(3));
        assert_eq!(doctor.see_next_patient(), Some(7));
        assert_eq!(doctor.see_next_patient(), None);
    }

    #[test]
    fn test_empty_queue_is_sentinel() {
        let mut doctor = Doctor::new(2, "Dr. Brown", Department::Neurology);
        assert_eq!(doctor.see_next_patient(), None);
    }
}
