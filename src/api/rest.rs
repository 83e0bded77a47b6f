use crate::error::HospitalError;
use crate::records::{Department, RoomType};
use crate::registry::Hospital;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use warp::Filter;

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl ApiResponse {
    fn success(message: impl Into<String>, data: Option<serde_json::Value>) -> Self {
        ApiResponse {
            status: "success".to_string(),
            message: message.into(),
            data,
        }
    }

    fn error(error: &HospitalError) -> Self {
        ApiResponse {
            status: "error".to_string(),
            message: error.to_string(),
            data: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterPatientRequest {
    pub name: String,
    pub age: u32,
    pub contact: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterDoctorRequest {
    pub name: String,
    pub department: Department,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdmitRequest {
    pub room_type: RoomType,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub doctor_id: u32,
    pub patient_id: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EmergencyRequest {
    pub patient_id: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TestRequest {
    pub name: String,
}

/// REST surface over a shared registry. One lock around the whole
/// Hospital; mutating routes take it for writing.
pub struct RestApi {
    hospital: Arc<RwLock<Hospital>>,
}

impl RestApi {
    pub fn new(hospital: Arc<RwLock<Hospital>>) -> Self {
        RestApi { hospital }
    }

    pub fn routes(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        self.register_patient()
            .or(self.register_doctor())
            .or(self.get_patient())
            .or(self.get_doctor())
            .or(self.admit_patient())
            .or(self.discharge_patient())
            .or(self.request_test())
            .or(self.perform_test())
            .or(self.book_appointment())
            .or(self.see_next_patient())
            .or(self.add_emergency())
            .or(self.handle_next_emergency())
    }

    fn register_patient(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let hospital = Arc::clone(&self.hospital);

        warp::path!("patients")
            .and(warp::post())
            .and(warp::body::json())
            .map(move |req: RegisterPatientRequest| {
                let mut hospital = hospital.write().unwrap();
                let id = hospital.register_patient(req.name, req.age, req.contact);
                warp::reply::json(&ApiResponse::success(
                    "Patient registered",
                    Some(serde_json::json!({ "id": id })),
                ))
            })
    }

    fn register_doctor(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let hospital = Arc::clone(&self.hospital);

        warp::path!("doctors")
            .and(warp::post())
            .and(warp::body::json())
            .map(move |req: RegisterDoctorRequest| {
                let mut hospital = hospital.write().unwrap();
                let id = hospital.register_doctor(req.name, req.department);
                warp::reply::json(&ApiResponse::success(
                    "Doctor registered",
                    Some(serde_json::json!({ "id": id })),
                ))
            })
    }

    fn get_patient(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let hospital = Arc::clone(&self.hospital);

        warp::path!("patients" / u32)
            .and(warp::get())
            .map(move |id: u32| {
                let hospital = hospital.read().unwrap();
                match hospital.patient_summary(id) {
                    Ok(summary) => warp::reply::json(&ApiResponse::success(
                        "Patient found",
                        serde_json::to_value(summary).ok(),
                    )),
                    Err(err) => warp::reply::json(&ApiResponse::error(&err)),
                }
            })
    }

    fn get_doctor(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let hospital = Arc::clone(&self.hospital);

        warp::path!("doctors" / u32)
            .and(warp::get())
            .map(move |id: u32| {
                let hospital = hospital.read().unwrap();
                match hospital.doctor_summary(id) {
                    Ok(summary) => warp::reply::json(&ApiResponse::success(
                        "Doctor found",
                        serde_json::to_value(summary).ok(),
                    )),
                    Err(err) => warp::reply::json(&ApiResponse::error(&err)),
                }
            })
    }

    fn admit_patient(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let hospital = Arc::clone(&self.hospital);

        warp::path!("patients" / u32 / "admit")
            .and(warp::post())
            .and(warp::body::json())
            .map(move |id: u32, req: AdmitRequest| {
                let mut hospital = hospital.write().unwrap();
                match hospital.admit_patient(id, req.room_type) {
                    Ok(()) => warp::reply::json(&ApiResponse::success(
                        format!("Patient {} admitted to {}", id, req.room_type.label()),
                        None,
                    )),
                    Err(err) => warp::reply::json(&ApiResponse::error(&err)),
                }
            })
    }

    fn discharge_patient(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let hospital = Arc::clone(&self.hospital);

        warp::path!("patients" / u32 / "discharge")
            .and(warp::post())
            .map(move |id: u32| {
                let mut hospital = hospital.write().unwrap();
                match hospital.discharge_patient(id) {
                    Ok(()) => warp::reply::json(&ApiResponse::success(
                        format!("Patient {} discharged", id),
                        None,
                    )),
                    Err(err) => warp::reply::json(&ApiResponse::error(&err)),
                }
            })
    }

    fn request_test(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let hospital = Arc::clone(&self.hospital);

        warp::path!("patients" / u32 / "tests")
            .and(warp::post())
            .and(warp::body::json())
            .map(move |id: u32, req: TestRequest| {
                let mut hospital = hospital.write().unwrap();
                match hospital.request_test(id, &req.name) {
                    Ok(()) => warp::reply::json(&ApiResponse::success(
                        format!("Test '{}' requested", req.name),
                        None,
                    )),
                    Err(err) => warp::reply::json(&ApiResponse::error(&err)),
                }
            })
    }

    fn perform_test(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let hospital = Arc::clone(&self.hospital);

        warp::path!("patients" / u32 / "tests" / "next")
            .and(warp::post())
            .map(move |id: u32| {
                let mut hospital = hospital.write().unwrap();
                match hospital.perform_test(id) {
                    Ok(Some(test_name)) => warp::reply::json(&ApiResponse::success(
                        format!("Performed test: {}", test_name),
                        Some(serde_json::json!({ "test": test_name })),
                    )),
                    // Empty queue is a sentinel, not an error.
                    Ok(None) => warp::reply::json(&ApiResponse::success(
                        "No tests pending",
                        None,
                    )),
                    Err(err) => warp::reply::json(&ApiResponse::error(&err)),
                }
            })
    }

    fn book_appointment(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let hospital = Arc::clone(&self.hospital);

        warp::path!("appointments")
            .and(warp::post())
            .and(warp::body::json())
            .map(move |req: AppointmentRequest| {
                let mut hospital = hospital.write().unwrap();
                match hospital.book_appointment(req.doctor_id, req.patient_id) {
                    Ok(()) => warp::reply::json(&ApiResponse::success(
                        "Appointment booked",
                        None,
                    )),
                    Err(err) => warp::reply::json(&ApiResponse::error(&err)),
                }
            })
    }

    fn see_next_patient(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let hospital = Arc::clone(&self.hospital);

        warp::path!("doctors" / u32 / "appointments" / "next")
            .and(warp::post())
            .map(move |id: u32| {
                let mut hospital = hospital.write().unwrap();
                match hospital.see_next_patient(id) {
                    Ok(Some(patient_id)) => warp::reply::json(&ApiResponse::success(
                        format!("Seeing patient {}", patient_id),
                        Some(serde_json::json!({ "patient_id": patient_id })),
                    )),
                    Ok(None) => warp::reply::json(&ApiResponse::success(
                        "No appointments pending",
                        None,
                    )),
                    Err(err) => warp::reply::json(&ApiResponse::error(&err)),
                }
            })
    }

    fn add_emergency(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let hospital = Arc::clone(&self.hospital);

        warp::path!("emergencies")
            .and(warp::post())
            .and(warp::body::json())
            .map(move |req: EmergencyRequest| {
                let mut hospital = hospital.write().unwrap();
                // Deliberately no existence check; see Hospital::add_emergency.
                hospital.add_emergency(req.patient_id);
                warp::reply::json(&ApiResponse::success(
                    format!("Patient {} added to emergency queue", req.patient_id),
                    None,
                ))
            })
    }

    fn handle_next_emergency(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let hospital = Arc::clone(&self.hospital);

        warp::path!("emergencies" / "next")
            .and(warp::post())
            .map(move || {
                let mut hospital = hospital.write().unwrap();
                match hospital.handle_next_emergency() {
                    Some(patient_id) => warp::reply::json(&ApiResponse::success(
                        format!("Handling emergency for patient {}", patient_id),
                        Some(serde_json::json!({ "patient_id": patient_id })),
                    )),
                    None => warp::reply::json(&ApiResponse::success(
                        "No emergency cases pending",
                        None,
                    )),
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn shared_hospital() -> Arc<RwLock<Hospital>> {
        Arc::new(RwLock::new(Hospital::new()))
    }

    #[tokio::test]
    async fn test_register_and_fetch_patient() {
        let hospital = shared_hospital();
        let api = RestApi::new(Arc::clone(&hospital));
        let routes = api.routes();

        let resp = warp::test::request()
            .method("POST")
            .path("/patients")
            .json(&RegisterPatientRequest {
                name: "John Doe".to_string(),
                age: 35,
                contact: "555-1234".to_string(),
            })
            .reply(&routes)
            .await;
        assert_eq!(resp.status(), 200);
        let body: ApiResponse = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body.status, "success");
        assert_eq!(body.data.unwrap()["id"], 1);

        let resp = warp::test::request()
            .method("GET")
            .path("/patients/1")
            .reply(&routes)
            .await;
        let body: ApiResponse = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body.status, "success");
        assert_eq!(body.data.unwrap()["name"], "John Doe");
    }

    #[tokio::test]
    async fn test_missing_patient_is_error_envelope() {
        let api = RestApi::new(shared_hospital());
        let routes = api.routes();

        let resp = warp::test::request()
            .method("GET")
            .path("/patients/999")
            .reply(&routes)
            .await;
        let body: ApiResponse = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body.status, "error");
        assert_eq!(body.message, "Patient with ID 999 not found");
    }

    #[tokio::test]
    async fn test_empty_emergency_queue_is_success_sentinel() {
        let api = RestApi::new(shared_hospital());
        let routes = api.routes();

        let resp = warp::test::request()
            .method("POST")
            .path("/emergencies/next")
            .reply(&routes)
            .await;
        let body: ApiResponse = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body.status, "success");
        assert_eq!(body.message, "No emergency cases pending");
        assert!(body.data.is_none());
    }

    #[tokio::test]
    async fn test_admit_route_round_trip() {
        let hospital = shared_hospital();
        let api = RestApi::new(Arc::clone(&hospital));
        let routes = api.routes();

        let id = hospital
            .write()
            .unwrap()
            .register_patient("Jane Smith", 28, "555-5678");

        let resp = warp::test::request()
            .method("POST")
            .path(&format!("/patients/{}/admit", id))
            .json(&AdmitRequest { room_type: RoomType::Icu })
            .reply(&routes)
            .await;
        let body: ApiResponse = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body.status, "success");

        // Second admit surfaces the domain error through the envelope.
        let resp = warp::test::request()
            .method("POST")
            .path(&format!("/patients/{}/admit", id))
            .json(&AdmitRequest { room_type: RoomType::SemiPrivate })
            .reply(&routes)
            .await;
        let body: ApiResponse = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body.status, "error");
        assert_eq!(body.message, format!("Patient with ID {} is already admitted", id));
    }
}
