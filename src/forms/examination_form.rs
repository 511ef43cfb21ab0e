use crate::forms::validation::{optional_amount, FormErrors};
use crate::models::{Examination, ExaminationPayload};
use crate::utils::format::{format_amount, to_input_date};

/// Raw input values of the examination form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExaminationForm {
    pub examination_fee: String,
    pub paid: String,
    pub action: String,
    pub date: String,
    pub next_visit: String,
    pub notes: String,
}

impl ExaminationForm {
    /// Pre-fill from an existing examination (edit mode)
    pub fn from_examination(exam: &Examination) -> Self {
        let amount = |v: Option<f64>| v.map(|n| format_amount(Some(n))).unwrap_or_default();
        Self {
            examination_fee: amount(exam.examination_fee),
            paid: amount(exam.paid),
            action: exam.action.clone().unwrap_or_default(),
            date: exam.date.as_deref().map(to_input_date).unwrap_or_default(),
            next_visit: exam.next_visit.as_deref().map(to_input_date).unwrap_or_default(),
            notes: exam.notes.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<ExaminationPayload, FormErrors> {
        let mut errors = FormErrors::new();
        let fee = optional_amount(&self.examination_fee).unwrap_or_else(|msg| {
            errors.insert("examinationFee", msg);
            None
        });
        let paid = optional_amount(&self.paid).unwrap_or_else(|msg| {
            errors.insert("paid", msg);
            None
        });
        if !errors.is_empty() {
            return Err(errors);
        }

        let non_empty = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        Ok(ExaminationPayload {
            examination_fee: fee,
            paid,
            action: self.action.trim().to_string(),
            date: non_empty(&self.date),
            next_visit: non_empty(&self.next_visit),
            notes: self.notes.trim().to_string(),
            patient: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validation::MSG_INVALID_NUMBER;

    #[test]
    fn prefill_converts_dates_and_amounts() {
        let exam = Examination {
            id: "e1".to_string(),
            patient_id: "p1".to_string(),
            examination_fee: Some(300.0),
            paid: Some(120.5),
            remaining: Some(179.5),
            action: Some("root canal".to_string()),
            date: Some("2024-03-01T00:00:00.000Z".to_string()),
            next_visit: None,
            notes: None,
        };
        let form = ExaminationForm::from_examination(&exam);
        assert_eq!(form.examination_fee, "300");
        assert_eq!(form.paid, "120.50");
        assert_eq!(form.date, "2024-03-01");
        assert_eq!(form.next_visit, "");
        assert_eq!(form.action, "root canal");
    }

    #[test]
    fn validate_builds_payload_without_remaining() {
        let form = ExaminationForm {
            examination_fee: "100".to_string(),
            paid: "50".to_string(),
            action: " cleaning ".to_string(),
            date: "2024-03-01".to_string(),
            next_visit: "".to_string(),
            notes: "".to_string(),
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.examination_fee, Some(100.0));
        assert_eq!(payload.paid, Some(50.0));
        assert_eq!(payload.action, "cleaning");
        assert_eq!(payload.next_visit, None);
    }

    #[test]
    fn non_numeric_amounts_are_field_errors() {
        let form = ExaminationForm {
            examination_fee: "a lot".to_string(),
            paid: "x".to_string(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("examinationFee"), Some(MSG_INVALID_NUMBER));
        assert_eq!(errors.get("paid"), Some(MSG_INVALID_NUMBER));
    }
}
