use std::collections::BTreeMap;
use regex::Regex;

pub const MSG_REQUIRED: &str = "هذا الحقل مطلوب";
pub const MSG_INVALID_PHONE: &str = "رقم التليفون غير صالح";
pub const MSG_INVALID_NUMBER: &str = "أدخل رقما صحيحا";

lazy_static::lazy_static! {
    static ref PHONE_PATTERN: Regex = Regex::new(r"^[0-9]{10,15}$").unwrap();
}

/// Field name → message, shown inline next to each field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors(BTreeMap<&'static str, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: &str) {
        self.0.entry(field).or_insert_with(|| message.to_string());
    }

    /// Record the outcome of a validator, keeping the first error per field
    pub fn check(&mut self, field: &'static str, outcome: Result<(), &'static str>) {
        if let Err(message) = outcome {
            self.insert(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

pub fn required(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        Err(MSG_REQUIRED)
    } else {
        Ok(())
    }
}

/// Digits only, matched as typed: surrounding whitespace is an error
pub fn phone(value: &str) -> Result<(), &'static str> {
    if PHONE_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(MSG_INVALID_PHONE)
    }
}

/// Empty input is "not provided"; anything else must be a finite number
pub fn optional_amount(value: &str) -> Result<Option<f64>, &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(MSG_INVALID_NUMBER),
    }
}
