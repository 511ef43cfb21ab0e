// ============================================================================
// LOGIN VIEWMODEL
// ============================================================================
// Validates the form, exchanges the credentials for a token and hands the
// token to the session. Navigation is left to the caller.
// ============================================================================

use crate::forms::{FormErrors, LoginForm};
use crate::services::{auth_service, ApiClient};
use crate::state::notifications::NotificationState;
use crate::state::reactivity::ReactiveState;
use crate::state::session_state::SessionStore;
use crate::viewmodels::collection::Lifecycle;

pub const MSG_LOGIN_OK: &str = "تم تسجيل الدخول بنجاح";
pub const MSG_LOGIN_FAILED: &str = "تأكد من البيانات المدخلة";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Field errors, nothing was sent
    Invalid,
    /// The server refused or could not be reached
    Rejected,
    LoggedIn,
    /// The screen was left while the request was in flight
    Discarded,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginState {
    pub form: LoginForm,
    pub errors: FormErrors,
    pub submitting: bool,
}

#[derive(Clone)]
pub struct LoginViewModel {
    api: ApiClient,
    session: SessionStore,
    notifications: NotificationState,
    state: ReactiveState<LoginState>,
    lifecycle: Lifecycle,
}

impl LoginViewModel {
    pub fn new(api: ApiClient, session: SessionStore, notifications: NotificationState) -> Self {
        Self {
            api,
            session,
            notifications,
            state: ReactiveState::default(),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn state(&self) -> LoginState {
        self.state.get()
    }

    /// Keystrokes are stored without a re-render; the input keeps its own value
    pub fn set_username(&self, value: &str) {
        self.state.update_silent(|s| s.form.username = value.to_string());
    }

    pub fn set_password(&self, value: &str) {
        self.state.update_silent(|s| s.form.password = value.to_string());
    }

    pub fn on_change<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.state.subscribe(move |_| callback());
    }

    pub fn teardown(&self) {
        self.lifecycle.teardown();
    }

    pub async fn submit(&self) -> LoginOutcome {
        let (username, password) = match self.state.with(|s| s.form.validate()) {
            Ok(credentials) => credentials,
            Err(errors) => {
                log::warn!("⚠️ [LOGIN] {} invalid field(s)", errors.len());
                self.state.update(|s| s.errors = errors);
                return LoginOutcome::Invalid;
            }
        };

        self.state.update(|s| {
            s.errors = FormErrors::new();
            s.submitting = true;
        });

        let result = auth_service::perform_login(&self.api, &username, &password).await;
        if !self.lifecycle.accepts("login response") {
            return LoginOutcome::Discarded;
        }

        match result {
            Ok(token) => {
                self.session.login(&token);
                self.notifications.success(MSG_LOGIN_OK);
                self.state.set(LoginState::default());
                LoginOutcome::LoggedIn
            }
            Err(e) => {
                log::error!("❌ [LOGIN] Login failed: {}", e);
                self.notifications.error(MSG_LOGIN_FAILED);
                self.state.update(|s| s.submitting = false);
                LoginOutcome::Rejected
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::http::Method;
    use crate::services::testing::client_with;
    use crate::state::notifications::ToastKind;

    fn view_model(token: Option<&str>) -> (LoginViewModel, crate::services::testing::FakeServer, SessionStore, NotificationState) {
        let (api, server, session) = client_with(token);
        let notifications = NotificationState::new();
        let vm = LoginViewModel::new(api, session.clone(), notifications.clone());
        (vm, server, session, notifications)
    }

    #[tokio::test(flavor = "current_thread")]
    async fn empty_form_sends_nothing() {
        let (vm, server, session, _) = view_model(None);

        assert_eq!(vm.submit().await, LoginOutcome::Invalid);
        assert!(server.requests().is_empty());
        assert!(!session.is_authenticated());
        assert!(vm.state().errors.get("username").is_some());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn valid_credentials_log_in_and_reset_form() {
        let (vm, server, session, notifications) = view_model(None);
        server.respond(Method::Post, "/doctors/login", 200, r#"{"token":"abc","doctor":{"name":"Mona"}}"#);

        vm.set_username("mona");
        vm.set_password("secret");
        assert_eq!(vm.submit().await, LoginOutcome::LoggedIn);

        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("abc"));
        assert_eq!(vm.state(), LoginState::default());
        assert_eq!(notifications.toasts()[0].message, MSG_LOGIN_OK);
        assert!(server.last_request().unwrap().header("authorization").is_none());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn rejected_credentials_keep_the_form() {
        let (vm, server, session, notifications) = view_model(None);
        server.respond(Method::Post, "/doctors/login", 401, r#"{"message":"invalid"}"#);

        vm.set_username("mona");
        vm.set_password("wrong");
        assert_eq!(vm.submit().await, LoginOutcome::Rejected);

        assert!(!session.is_authenticated());
        assert_eq!(vm.state().form.username, "mona");
        assert!(!vm.state().submitting);
        let toast = &notifications.toasts()[0];
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, MSG_LOGIN_FAILED);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn response_after_teardown_does_not_log_in() {
        let (vm, server, session, _) = view_model(None);
        let screen = vm.clone();
        server.handle(Method::Post, "/doctors/login", move |_| {
            screen.teardown();
            crate::services::testing::json(200, serde_json::json!({"token": "late"}))
        });

        vm.set_username("mona");
        vm.set_password("secret");
        assert_eq!(vm.submit().await, LoginOutcome::Discarded);
        assert!(!session.is_authenticated());
    }
}
