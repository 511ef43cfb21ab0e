pub mod auth;
pub mod patient;
pub mod examination;

pub use auth::{LoginRequest, LoginResponse};
pub use patient::{NewPatient, Patient};
pub use examination::{Examination, ExaminationPayload};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Phone numbers come back as strings or as plain JSON numbers depending on the record.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    })
}

/// Amounts may be serialized as numbers or numeric strings.
pub(crate) fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// A reference to another document: either its id or the populated document.
pub(crate) fn document_ref<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Object(map)) => map
            .get("_id")
            .or_else(|| map.get("id"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        _ => String::new(),
    })
}
