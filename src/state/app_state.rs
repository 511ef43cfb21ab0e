// ============================================================================
// APP STATE - Process-wide context handed to every view
// ============================================================================
// Built once in `App::new`. Owns the session, the API client, the router,
// the toast queue and the screen currently mounted. Switching screens tears
// the previous viewmodel down so its in-flight responses are dropped.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::services::ApiClient;
use crate::state::notifications::NotificationState;
use crate::state::router::{Route, Router};
use crate::state::session_state::SessionStore;
use crate::viewmodels::{AddPatientViewModel, LoginViewModel, PatientDetailViewModel, PatientListViewModel};

/// Mounted screen and its viewmodel
#[derive(Clone)]
pub enum Screen {
    Home,
    Login(LoginViewModel),
    Patients(PatientListViewModel),
    AddPatient(AddPatientViewModel),
    PatientDetail(PatientDetailViewModel),
    NotFound(String),
}

impl Screen {
    fn build(route: &Route, state: &AppState) -> Self {
        let api = state.api.clone();
        let notifications = state.notifications.clone();
        match route {
            Route::Home => Screen::Home,
            Route::Login => Screen::Login(LoginViewModel::new(api, state.session.clone(), notifications)),
            Route::Patients => Screen::Patients(PatientListViewModel::new(api, notifications)),
            Route::AddPatient => Screen::AddPatient(AddPatientViewModel::new(api, notifications)),
            Route::Patient(id) => Screen::PatientDetail(PatientDetailViewModel::new(api, notifications, id)),
            Route::NotFound(path) => Screen::NotFound(path.clone()),
        }
    }

    /// Route this screen was built for
    pub fn route(&self) -> Route {
        match self {
            Screen::Home => Route::Home,
            Screen::Login(_) => Route::Login,
            Screen::Patients(_) => Route::Patients,
            Screen::AddPatient(_) => Route::AddPatient,
            Screen::PatientDetail(vm) => Route::Patient(vm.patient_id().to_string()),
            Screen::NotFound(path) => Route::NotFound(path.clone()),
        }
    }

    /// Fetch-on-mount
    pub async fn mount(&self) {
        match self {
            Screen::Patients(vm) => vm.load().await,
            Screen::AddPatient(vm) => vm.mount().await,
            Screen::PatientDetail(vm) => vm.mount().await,
            Screen::Home | Screen::Login(_) | Screen::NotFound(_) => {}
        }
    }

    /// Register a re-render callback on the viewmodel's state
    pub fn on_change<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        match self {
            Screen::Login(vm) => vm.on_change(callback),
            Screen::Patients(vm) => vm.on_change(callback),
            Screen::AddPatient(vm) => vm.on_change(callback),
            Screen::PatientDetail(vm) => vm.on_change(callback),
            Screen::Home | Screen::NotFound(_) => {}
        }
    }

    pub fn teardown(&self) {
        match self {
            Screen::Login(vm) => vm.teardown(),
            Screen::Patients(vm) => vm.teardown(),
            Screen::AddPatient(vm) => vm.teardown(),
            Screen::PatientDetail(vm) => vm.teardown(),
            Screen::Home | Screen::NotFound(_) => {}
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub session: SessionStore,
    pub api: ApiClient,
    pub router: Router,
    pub notifications: NotificationState,
    screen: Rc<RefCell<Option<Screen>>>,
}

impl AppState {
    pub fn new(session: SessionStore, api: ApiClient, initial: Route) -> Self {
        let router = Router::new(&session, initial);
        Self {
            session,
            api,
            router,
            notifications: NotificationState::new(),
            screen: Rc::new(RefCell::new(None)),
        }
    }

    pub fn screen(&self) -> Option<Screen> {
        self.screen.borrow().clone()
    }

    /// Mount the screen for `route` unless it is already mounted.
    /// Returns the new screen; the caller wires re-renders and runs `mount`.
    pub fn activate(&self, route: &Route) -> Option<Screen> {
        if let Some(current) = self.screen.borrow().as_ref() {
            if &current.route() == route {
                return None;
            }
        }

        let next = Screen::build(route, self);
        let previous = self.screen.borrow_mut().replace(next.clone());
        if let Some(previous) = previous {
            log::debug!("🧹 [APP] Tearing down {}", previous.route().path());
            previous.teardown();
        }
        log::info!("📺 [APP] Screen {}", route.path());
        Some(next)
    }

    /// Navigate through the guard; returns the route that will be shown
    pub fn navigate(&self, route: Route) -> Route {
        self.router.navigate(route, self.session.is_authenticated())
    }

    /// After a successful login: go home unless the guard already restored
    /// the page the user was sent away from
    pub fn after_login(&self) {
        if self.router.current() == Route::Login {
            self.navigate(Route::Home);
        }
    }

    pub fn logout(&self) {
        self.session.logout();
        self.navigate(Route::Login);
    }
}
