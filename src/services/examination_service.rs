use crate::errors::RequestError;
use crate::models::{Examination, ExaminationPayload};
use crate::services::api_client::ApiClient;

/// Examinations of one patient. The trailing slash is part of the API route.
pub async fn fetch_examinations(api: &ApiClient, patient_id: &str) -> Result<Vec<Examination>, RequestError> {
    let exams: Vec<Examination> = api.get(&format!("/examinations/patient/{}/", patient_id)).await?;
    log::info!("🦷 [EXAMS] {} examinations for patient {}", exams.len(), patient_id);
    Ok(exams)
}

/// Create an examination attached to `patient_id`
pub async fn create_examination(
    api: &ApiClient,
    patient_id: &str,
    payload: &ExaminationPayload,
) -> Result<Examination, RequestError> {
    let body = ExaminationPayload {
        patient: Some(patient_id.to_string()),
        ..payload.clone()
    };
    api.post("/examinations/", &body).await
}

/// Partial update; `patient` is never resent
pub async fn update_examination(
    api: &ApiClient,
    exam_id: &str,
    payload: &ExaminationPayload,
) -> Result<Examination, RequestError> {
    let body = ExaminationPayload {
        patient: None,
        ..payload.clone()
    };
    api.patch(&format!("/examinations/{}", exam_id), &body).await
}

pub async fn delete_examination(api: &ApiClient, exam_id: &str) -> Result<(), RequestError> {
    api.delete(&format!("/examinations/{}", exam_id)).await?;
    log::info!("🗑️ [EXAMS] Examination deleted: {}", exam_id);
    Ok(())
}
