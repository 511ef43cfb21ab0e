use serde::{Deserialize, Serialize};

/// Patient record as stored by the clinic API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "super::string_or_number")]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of `POST /patients`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPatient {
    pub name: String,
    pub phone: String,
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mongo_document() {
        let json = r#"{"_id":"65f1","name":"Sara","phone":"01012345678","address":"Cairo","__v":0}"#;
        let patient: Patient = serde_json::from_str(json).unwrap();
        assert_eq!(patient.id, "65f1");
        assert_eq!(patient.phone, "01012345678");
        assert_eq!(patient.notes, None);
    }

    #[test]
    fn numeric_phone_becomes_string() {
        let json = r#"{"_id":"1","name":"Ali","phone":1012345678,"address":"Giza"}"#;
        let patient: Patient = serde_json::from_str(json).unwrap();
        assert_eq!(patient.phone, "1012345678");
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{"id":"2","name":"Ahmed"}"#;
        let patient: Patient = serde_json::from_str(json).unwrap();
        assert_eq!(patient.id, "2");
        assert!(patient.phone.is_empty());
        assert!(patient.address.is_empty());
    }
}
