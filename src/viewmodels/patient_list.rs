// ============================================================================
// PATIENT LIST VIEWMODEL
// ============================================================================
// GET /patients on mount, client-side search by name, DELETE with a local
// splice. Also embedded by the add-patient screen.
// ============================================================================

use crate::models::Patient;
use crate::services::{patient_service, ApiClient};
use crate::state::notifications::NotificationState;
use crate::state::reactivity::ReactiveState;
use crate::viewmodels::collection::{Collection, Lifecycle, ViewPhase};

pub const MSG_LOAD_FAILED: &str = "تعذر تحميل البيانات";
pub const MSG_PATIENT_DELETED: &str = "تم حذف المريض";
pub const MSG_DELETE_FAILED: &str = "تعذر حذف المريض";

/// Case-insensitive substring match on the name; an empty query keeps everything
pub fn filter_patients<'a>(patients: &'a [Patient], query: &str) -> Vec<&'a Patient> {
    let needle = query.trim().to_lowercase();
    patients
        .iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .collect()
}

#[derive(Clone)]
pub struct PatientListViewModel {
    api: ApiClient,
    notifications: NotificationState,
    patients: Collection<Patient>,
    query: ReactiveState<String>,
    lifecycle: Lifecycle,
}

impl PatientListViewModel {
    pub fn new(api: ApiClient, notifications: NotificationState) -> Self {
        Self {
            api,
            notifications,
            patients: Collection::new(),
            query: ReactiveState::new(String::new()),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn phase(&self) -> ViewPhase {
        self.patients.phase()
    }

    pub fn patients(&self) -> Vec<Patient> {
        self.patients.items()
    }

    pub fn query(&self) -> String {
        self.query.get()
    }

    /// Store the search text. Silent: the view redraws only the cards.
    pub fn set_query(&self, query: &str) {
        self.query.update_silent(|q| *q = query.to_string());
    }

    /// Patients matching the current search text
    pub fn visible(&self) -> Vec<Patient> {
        let items = self.patients.items();
        filter_patients(&items, &self.query()).into_iter().cloned().collect()
    }

    pub fn on_change<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.patients.subscribe(move |_| callback());
    }

    pub fn teardown(&self) {
        self.lifecycle.teardown();
    }

    /// Fetch (or refetch) the whole collection
    pub async fn load(&self) {
        self.patients.begin_load();
        let result = patient_service::fetch_patients(&self.api).await;
        if !self.lifecycle.accepts("patient list") {
            return;
        }
        if let Err(e) = self.patients.finish_load(result) {
            log::error!("❌ [PATIENTS] Fetch failed: {}", e);
            self.notifications.error(MSG_LOAD_FAILED);
        }
    }

    pub async fn delete(&self, id: &str) -> bool {
        log::info!("🗑️ [PATIENTS] Deleting patient {}", id);
        let result = patient_service::delete_patient(&self.api, id).await;
        if !self.lifecycle.accepts("patient delete") {
            return false;
        }
        match result {
            Ok(()) => {
                self.patients.remove(id);
                self.notifications.success(MSG_PATIENT_DELETED);
                true
            }
            Err(e) => {
                log::error!("❌ [PATIENTS] Delete of {} failed: {}", id, e);
                self.notifications.error(MSG_DELETE_FAILED);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::http::Method;
    use crate::services::testing::{self, client_with, FakeServer};
    use serde_json::json;

    fn named(names: &[&str]) -> Vec<Patient> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Patient {
                id: i.to_string(),
                name: name.to_string(),
                phone: "01012345678".to_string(),
                address: "Cairo".to_string(),
                notes: None,
            })
            .collect()
    }

    fn names(patients: &[&Patient]) -> Vec<String> {
        patients.iter().map(|p| p.name.clone()).collect()
    }

    fn view_model() -> (PatientListViewModel, FakeServer, NotificationState) {
        let (api, server, _session) = client_with(Some("tok"));
        let notifications = NotificationState::new();
        (PatientListViewModel::new(api, notifications.clone()), server, notifications)
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let patients = named(&["Ali", "Sara", "Ahmed"]);
        assert_eq!(names(&filter_patients(&patients, "a")), vec!["Ali", "Sara", "Ahmed"]);
        assert_eq!(names(&filter_patients(&patients, "sar")), vec!["Sara"]);
        assert!(filter_patients(&patients, "zz").is_empty());
        assert_eq!(filter_patients(&patients, "").len(), 3);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn mount_loads_and_search_filters_locally() {
        let (vm, server, _) = view_model();
        server.handle(Method::Get, "/patients", |_| {
            testing::json(200, json!([
                {"_id": "1", "name": "Ali", "phone": "01012345678", "address": "Cairo"},
                {"_id": "2", "name": "Sara", "phone": "01112345678", "address": "Giza"}
            ]))
        });

        vm.load().await;
        assert_eq!(vm.phase(), ViewPhase::Loaded);

        vm.set_query("SAR");
        let visible = vm.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");
        assert_eq!(server.count(Method::Get, "/patients"), 1);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn delete_removes_without_refetch() {
        let (vm, server, notifications) = view_model();
        server.handle(Method::Get, "/patients", |_| {
            testing::json(200, json!([{"_id": "1", "name": "Ali"}, {"_id": "2", "name": "Sara"}]))
        });
        server.respond(Method::Delete, "/patients/1", 200, r#"{"message":"deleted"}"#);

        vm.load().await;
        assert!(vm.delete("1").await);

        assert!(vm.patients().iter().all(|p| p.id != "1"));
        assert_eq!(vm.patients().len(), 1);
        assert_eq!(server.count(Method::Get, "/patients"), 1);
        assert_eq!(notifications.toasts()[0].message, MSG_PATIENT_DELETED);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn failed_delete_leaves_list_unchanged() {
        let (vm, server, notifications) = view_model();
        server.handle(Method::Get, "/patients", |_| testing::json(200, json!([{"_id": "1", "name": "Ali"}])));
        server.respond(Method::Delete, "/patients/1", 500, "boom");

        vm.load().await;
        assert!(!vm.delete("1").await);
        assert_eq!(vm.patients().len(), 1);
        assert_eq!(notifications.toasts()[0].message, MSG_DELETE_FAILED);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn failed_first_fetch_is_empty_and_notified() {
        let (vm, server, notifications) = view_model();
        server.fail_network(Method::Get, "/patients");

        vm.load().await;
        assert_eq!(vm.phase(), ViewPhase::Error);
        assert!(vm.patients().is_empty());
        assert_eq!(notifications.toasts().len(), 1);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn late_response_after_teardown_is_dropped() {
        let (vm, server, notifications) = view_model();
        let screen = vm.clone();
        server.handle(Method::Get, "/patients", move |_| {
            screen.teardown();
            testing::json(200, json!([{"_id": "1", "name": "Ali"}]))
        });

        vm.load().await;
        assert!(vm.patients().is_empty());
        assert_eq!(vm.phase(), ViewPhase::Loading);
        assert!(notifications.toasts().is_empty());
    }
}
