// ============================================================================
// FORMS - Plain field structs + validators run on submit
// ============================================================================

pub mod validation;
pub mod login_form;
pub mod patient_form;
pub mod examination_form;

pub use validation::FormErrors;
pub use login_form::LoginForm;
pub use patient_form::PatientForm;
pub use examination_form::ExaminationForm;
