// ============================================================================
// VIEWMODELS - Screen logic, no DOM
// ============================================================================
// Each screen owns its viewmodel from mount to teardown. Views read state
// through getters and forward user input; async work is driven by the app
// with `spawn_local`.
// ============================================================================

pub mod collection;
pub mod login;
pub mod patient_list;
pub mod add_patient;
pub mod patient_detail;

pub use collection::{Collection, Lifecycle, ViewPhase};
pub use login::{LoginOutcome, LoginViewModel};
pub use patient_list::PatientListViewModel;
pub use add_patient::{AddPatientViewModel, SubmitOutcome};
pub use patient_detail::{EditorMode, ExamField, PatientDetailViewModel};
