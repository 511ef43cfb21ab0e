// ============================================================================
// ADD PATIENT VIEWMODEL
// ============================================================================
// Patient form on top of the current patient list. A successful create
// resets the form and refetches the list; a failure keeps the inputs.
// ============================================================================

use crate::forms::{FormErrors, PatientForm};
use crate::services::{patient_service, ApiClient};
use crate::state::notifications::NotificationState;
use crate::state::reactivity::ReactiveState;
use crate::viewmodels::collection::Lifecycle;
use crate::viewmodels::patient_list::PatientListViewModel;

pub const MSG_PATIENT_ADDED: &str = "تم اضافة مريض جديد";
pub const MSG_PATIENT_ADD_FAILED: &str = "أتأكد من البيانات";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid,
    Failed,
    Saved,
    Discarded,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientFormState {
    pub form: PatientForm,
    pub errors: FormErrors,
    pub submitting: bool,
}

#[derive(Clone)]
pub struct AddPatientViewModel {
    api: ApiClient,
    notifications: NotificationState,
    list: PatientListViewModel,
    state: ReactiveState<PatientFormState>,
    lifecycle: Lifecycle,
}

impl AddPatientViewModel {
    pub fn new(api: ApiClient, notifications: NotificationState) -> Self {
        Self {
            list: PatientListViewModel::new(api.clone(), notifications.clone()),
            api,
            notifications,
            state: ReactiveState::default(),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn list(&self) -> &PatientListViewModel {
        &self.list
    }

    pub fn state(&self) -> PatientFormState {
        self.state.get()
    }

    pub fn set_name(&self, value: &str) {
        self.state.update_silent(|s| s.form.name = value.to_string());
    }

    pub fn set_phone(&self, value: &str) {
        self.state.update_silent(|s| s.form.phone = value.to_string());
    }

    pub fn set_address(&self, value: &str) {
        self.state.update_silent(|s| s.form.address = value.to_string());
    }

    pub fn on_change<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        let callback = std::rc::Rc::new(callback);
        let on_list = callback.clone();
        self.list.on_change(move || on_list());
        self.state.subscribe(move |_| callback());
    }

    pub async fn mount(&self) {
        self.list.load().await;
    }

    pub fn teardown(&self) {
        self.lifecycle.teardown();
        self.list.teardown();
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let patient = match self.state.with(|s| s.form.validate()) {
            Ok(patient) => patient,
            Err(errors) => {
                log::warn!("⚠️ [ADD-PATIENT] {} invalid field(s)", errors.len());
                self.state.update(|s| s.errors = errors);
                return SubmitOutcome::Invalid;
            }
        };

        self.state.update(|s| {
            s.errors = FormErrors::new();
            s.submitting = true;
        });

        let result = patient_service::create_patient(&self.api, &patient).await;
        if !self.lifecycle.accepts("patient create") {
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(_) => {
                self.notifications.success(MSG_PATIENT_ADDED);
                self.state.set(PatientFormState::default());
                self.list.load().await;
                SubmitOutcome::Saved
            }
            Err(e) => {
                log::error!("❌ [ADD-PATIENT] Create failed: {}", e);
                self.notifications.error(MSG_PATIENT_ADD_FAILED);
                self.state.update(|s| s.submitting = false);
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use crate::services::http::Method;
    use crate::services::testing::{self, client_with, FakeServer};
    use crate::forms::validation::MSG_INVALID_PHONE;
    use serde_json::{json, Value};

    /// Server that keeps created patients and lists them back
    fn patient_store(server: &FakeServer) -> Rc<RefCell<Vec<Value>>> {
        let stored = Rc::new(RefCell::new(vec![json!({"_id": "p0", "name": "Sara", "phone": "01112345678", "address": "Giza"})]));

        let list = stored.clone();
        server.handle(Method::Get, "/patients", move |_| testing::json(200, Value::Array(list.borrow().clone())));

        let create = stored.clone();
        server.handle(Method::Post, "/patients", move |request| {
            let mut body: Value = serde_json::from_str(request.body.as_deref().unwrap_or("{}")).unwrap();
            body["_id"] = json!(format!("p{}", create.borrow().len()));
            create.borrow_mut().push(body.clone());
            testing::json(201, body)
        });
        stored
    }

    fn view_model() -> (AddPatientViewModel, FakeServer, NotificationState) {
        let (api, server, _session) = client_with(Some("tok"));
        let notifications = NotificationState::new();
        (AddPatientViewModel::new(api, notifications.clone()), server, notifications)
    }

    fn fill(vm: &AddPatientViewModel, name: &str, phone: &str, address: &str) {
        vm.set_name(name);
        vm.set_phone(phone);
        vm.set_address(address);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn created_patient_appears_in_refetched_list() {
        let (vm, server, notifications) = view_model();
        patient_store(&server);

        vm.mount().await;
        assert_eq!(vm.list().patients().len(), 1);

        fill(&vm, "Ali", "01012345678", "Cairo");
        assert_eq!(vm.submit().await, SubmitOutcome::Saved);

        assert!(vm.list().patients().iter().any(|p| p.name == "Ali"));
        assert_eq!(server.count(Method::Get, "/patients"), 2);
        assert_eq!(vm.state(), PatientFormState::default());
        assert_eq!(notifications.toasts()[0].message, MSG_PATIENT_ADDED);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn invalid_phone_blocks_submission() {
        let (vm, server, _) = view_model();
        patient_store(&server);

        fill(&vm, "Ali", "12345", "Cairo");
        assert_eq!(vm.submit().await, SubmitOutcome::Invalid);

        assert_eq!(vm.state().errors.get("phone"), Some(MSG_INVALID_PHONE));
        assert_eq!(server.count(Method::Post, "/patients"), 0);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn server_failure_keeps_inputs_for_retry() {
        let (vm, server, notifications) = view_model();
        server.respond(Method::Post, "/patients", 400, r#"{"message":"duplicate phone"}"#);

        fill(&vm, "Ali", "01012345678", "Cairo");
        assert_eq!(vm.submit().await, SubmitOutcome::Failed);

        let state = vm.state();
        assert_eq!(state.form.name, "Ali");
        assert_eq!(state.form.phone, "01012345678");
        assert!(!state.submitting);
        assert_eq!(notifications.toasts()[0].message, MSG_PATIENT_ADD_FAILED);
        assert_eq!(server.count(Method::Get, "/patients"), 0);
    }
}
