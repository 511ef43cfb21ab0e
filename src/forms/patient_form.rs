use crate::forms::validation::{phone, required, FormErrors};
use crate::models::NewPatient;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientForm {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl PatientForm {
    pub fn validate(&self) -> Result<NewPatient, FormErrors> {
        let mut errors = FormErrors::new();
        errors.check("name", required(&self.name));
        errors.check("phone", required(&self.phone));
        errors.check("phone", phone(&self.phone));
        errors.check("address", required(&self.address));

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(NewPatient {
            name: self.name.trim().to_string(),
            phone: self.phone.clone(),
            address: self.address.trim().to_string(),
        })
    }
}
