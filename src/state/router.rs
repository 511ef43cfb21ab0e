// ============================================================================
// ROUTER - Route table + authentication guard
// ============================================================================
// `requested` is where the user asked to go; `current` is what gets rendered
// after the guard ran. The guard is re-run on every navigation and on every
// session change.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::state::reactivity::{ReactiveState, SubscriptionId};
use crate::state::session_state::SessionStore;
use crate::utils::constants::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Patients,
    AddPatient,
    Patient(String),
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = if path.len() > 1 { path.trim_end_matches('/') } else { path };

        match trimmed {
            "" | PATH_HOME => Route::Home,
            PATH_LOGIN => Route::Login,
            PATH_PATIENTS => Route::Patients,
            PATH_ADD_PATIENT => Route::AddPatient,
            other => match other.strip_prefix(PATH_PATIENT_PREFIX) {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::Patient(id.to_string()),
                _ => Route::NotFound(other.to_string()),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => PATH_HOME.to_string(),
            Route::Login => PATH_LOGIN.to_string(),
            Route::Patients => PATH_PATIENTS.to_string(),
            Route::AddPatient => PATH_ADD_PATIENT.to_string(),
            Route::Patient(id) => format!("{}{}", PATH_PATIENT_PREFIX, id),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Everything except the login screen sits behind the guard
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render(Route),
    Redirect(Route),
}

impl GuardDecision {
    pub fn route(&self) -> &Route {
        match self {
            GuardDecision::Render(route) | GuardDecision::Redirect(route) => route,
        }
    }
}

/// Pure guard: protected routes need a session, otherwise go to `/login`
pub fn guard(route: &Route, authenticated: bool) -> GuardDecision {
    if route.is_protected() && !authenticated {
        GuardDecision::Redirect(Route::Login)
    } else {
        GuardDecision::Render(route.clone())
    }
}

#[derive(Clone)]
pub struct Router {
    requested: Rc<RefCell<Route>>,
    current: ReactiveState<Route>,
}

impl Router {
    /// Build the router for the initial URL and hook it to the session
    pub fn new(session: &SessionStore, initial: Route) -> Self {
        let decision = guard(&initial, session.is_authenticated());
        if let GuardDecision::Redirect(to) = &decision {
            log::info!("🔒 [ROUTER] {} requires a session, redirecting to {}", initial.path(), to.path());
        }
        let requested = Rc::new(RefCell::new(initial));
        let current = ReactiveState::new(decision.route().clone());

        {
            let requested = requested.clone();
            let current = current.clone();
            session.subscribe(move |authenticated| {
                let target = requested.borrow().clone();
                let decision = guard(&target, authenticated);
                if current.with(|c| c != decision.route()) {
                    log::info!("🔄 [ROUTER] Session changed, now showing {}", decision.route().path());
                    current.set(decision.route().clone());
                }
            });
        }

        Self { requested, current }
    }

    /// Ask for a route; returns what will actually be rendered
    pub fn navigate(&self, route: Route, authenticated: bool) -> Route {
        let decision = guard(&route, authenticated);
        match &decision {
            GuardDecision::Render(to) => log::info!("🧭 [ROUTER] -> {}", to.path()),
            GuardDecision::Redirect(to) => {
                log::info!("🔒 [ROUTER] {} requires a session, redirecting to {}", route.path(), to.path())
            }
        }
        *self.requested.borrow_mut() = route;
        let target = decision.route().clone();
        self.current.set(target.clone());
        target
    }

    pub fn current(&self) -> Route {
        self.current.get()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Route) + 'static,
    {
        self.current.subscribe(callback)
    }
}
