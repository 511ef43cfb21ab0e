// ============================================================================
// VIEWS - Render functions, no logic
// ============================================================================

pub mod app;
pub mod widgets;
pub mod layout;
pub mod home;
pub mod login;
pub mod patient_list;
pub mod add_patient;
pub mod patient_detail;
pub mod toasts;

pub use app::render_app;
pub use layout::render_layout;
pub use home::{render_home, render_not_found};
pub use login::render_login;
pub use patient_list::render_patient_list;
pub use add_patient::render_add_patient;
pub use patient_detail::render_patient_detail;
pub use toasts::render_toasts;
