// ============================================================================
// STATE MODULE - Rc<RefCell> stores with change notifications
// ============================================================================

pub mod reactivity;
pub mod session_state;
pub mod router;
pub mod notifications;
pub mod app_state;

pub use reactivity::{ReactiveState, SubscriptionId};
pub use session_state::SessionStore;
pub use router::{guard, GuardDecision, Route, Router};
pub use notifications::{NotificationState, Toast, ToastKind};
pub use app_state::{AppState, Screen};
