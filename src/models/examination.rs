use serde::{Deserialize, Serialize};

/// One dental examination of a patient.
///
/// `remaining` is computed by the server from the fee and the paid amount;
/// the client only displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Examination {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "patient", alias = "patientId", default, deserialize_with = "super::document_ref")]
    pub patient_id: String,
    #[serde(default, deserialize_with = "super::lenient_amount")]
    pub examination_fee: Option<f64>,
    #[serde(default, deserialize_with = "super::lenient_amount")]
    pub paid: Option<f64>,
    #[serde(default, deserialize_with = "super::lenient_amount")]
    pub remaining: Option<f64>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub next_visit: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Body of `POST /examinations/` and `PATCH /examinations/:id`.
///
/// `patient` is only set on create; updates are partial.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExaminationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examination_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid: Option<f64>,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_visit: Option<String>,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_server_document() {
        let json = r#"{
            "_id": "e1",
            "patient": "p1",
            "examinationFee": 100,
            "paid": 50,
            "remaining": 50,
            "action": "filling",
            "date": "2024-03-01T00:00:00.000Z",
            "nextVisit": null,
            "notes": ""
        }"#;
        let exam: Examination = serde_json::from_str(json).unwrap();
        assert_eq!(exam.patient_id, "p1");
        assert_eq!(exam.examination_fee, Some(100.0));
        assert_eq!(exam.remaining, Some(50.0));
        assert_eq!(exam.next_visit, None);
    }

    #[test]
    fn accepts_populated_patient_and_string_amounts() {
        let json = r#"{"_id":"e2","patient":{"_id":"p9","name":"Sara"},"examinationFee":"250","paid":"100"}"#;
        let exam: Examination = serde_json::from_str(json).unwrap();
        assert_eq!(exam.patient_id, "p9");
        assert_eq!(exam.examination_fee, Some(250.0));
        assert_eq!(exam.paid, Some(100.0));
        assert_eq!(exam.remaining, None);
    }

    #[test]
    fn payload_uses_camel_case_and_skips_empty_fields() {
        let payload = ExaminationPayload {
            examination_fee: Some(100.0),
            paid: Some(50.0),
            action: "cleaning".to_string(),
            date: Some("2024-03-01".to_string()),
            next_visit: None,
            notes: String::new(),
            patient: Some("p1".to_string()),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["examinationFee"], 100.0);
        assert_eq!(value["patient"], "p1");
        assert!(value.get("nextVisit").is_none());
        assert_eq!(value["notes"], "");
    }
}
