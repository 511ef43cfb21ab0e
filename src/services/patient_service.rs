use crate::errors::RequestError;
use crate::models::{NewPatient, Patient};
use crate::services::api_client::ApiClient;

pub async fn fetch_patients(api: &ApiClient) -> Result<Vec<Patient>, RequestError> {
    let patients: Vec<Patient> = api.get("/patients").await?;
    log::info!("📋 [PATIENTS] {} patients received", patients.len());
    Ok(patients)
}

pub async fn fetch_patient(api: &ApiClient, id: &str) -> Result<Patient, RequestError> {
    api.get(&format!("/patients/{}", id)).await
}

pub async fn create_patient(api: &ApiClient, patient: &NewPatient) -> Result<Patient, RequestError> {
    let created: Patient = api.post("/patients", patient).await?;
    log::info!("✅ [PATIENTS] Patient created: {}", created.id);
    Ok(created)
}

pub async fn delete_patient(api: &ApiClient, id: &str) -> Result<(), RequestError> {
    api.delete(&format!("/patients/{}", id)).await?;
    log::info!("🗑️ [PATIENTS] Patient deleted: {}", id);
    Ok(())
}
