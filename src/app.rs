// ============================================================================
// APP - Wiring between state, router, history and the render loop
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{append_child, current_path, get_element_by_id, on_popstate, set_inner_html, window};
use crate::services::{ApiClient, GlooTransport};
use crate::state::app_state::AppState;
use crate::state::router::Route;
use crate::state::session_state::SessionStore;
use crate::utils::constants::{APP_ROOT_ID, STORAGE_KEY_TOKEN};
use crate::utils::storage::default_token_store;
use crate::views::render_app;

thread_local! {
    static RENDER_PENDING: Cell<bool> = Cell::new(false);
}

/// Coalesce every change of the current tick into one render
fn schedule_render() {
    if RENDER_PENDING.with(|pending| pending.replace(true)) {
        return;
    }
    Timeout::new(0, || {
        RENDER_PENDING.with(|pending| pending.set(false));
        crate::rerender_app();
    })
    .forget();
}

/// Keep the address bar in sync with the rendered route
fn sync_history(route: &Route) {
    let path = route.path();
    if current_path() == path {
        return;
    }
    let pushed = window()
        .ok_or_else(|| JsValue::from_str("No window"))
        .and_then(|w| w.history())
        .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(&path)));
    if let Err(e) = pushed {
        log::warn!("⚠️ [APP] history.pushState({}) failed: {:?}", path, e);
    }
}

/// Mount the screen for `route`, if it is not mounted yet
fn show(state: &AppState, route: &Route) {
    if let Some(screen) = state.activate(route) {
        screen.on_change(schedule_render);
        spawn_local(async move {
            screen.mount().await;
        });
    }
    schedule_render();
}

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(APP_ROOT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let session = SessionStore::new(default_token_store(STORAGE_KEY_TOKEN));
        let api = ApiClient::new(CONFIG.backend_url(), Rc::new(GlooTransport::new()), session.clone());
        let initial = Route::parse(&current_path());
        log::info!("🧭 [APP] Initial path {} ({} backend {})", initial.path(), CONFIG.environment, CONFIG.backend_url());

        let state = AppState::new(session, api, initial);

        // Toasts: re-render on change, dismiss after the configured delay
        {
            let notifications = state.notifications.clone();
            state.notifications.set_on_push(move |id| {
                let notifications = notifications.clone();
                Timeout::new(CONFIG.toast_duration_ms, move || notifications.dismiss(id)).forget();
            });
            state.notifications.subscribe(|_| schedule_render());
        }

        // Every route change (navigation, guard redirect, login/logout)
        {
            let app_state = state.clone();
            state.router.subscribe(move |route| {
                sync_history(route);
                show(&app_state, route);
            });
        }

        // Back/forward
        {
            let app_state = state.clone();
            on_popstate(move |_| {
                let route = Route::parse(&current_path());
                log::info!("⬅️ [APP] popstate -> {}", route.path());
                app_state.navigate(route);
            })?;
        }

        let first = state.router.current();
        sync_history(&first);
        show(&state, &first);

        Ok(Self { state, root })
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
