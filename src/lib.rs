// ============================================================================
// RISE DENTAL ADMIN - PURE RUST MVVM FRONT-END
// ============================================================================
// - Views: functions that build DOM (no logic)
// - ViewModels: screen state + fetch/mutate/refetch
// - Services: HTTP only
// - State: Rc<RefCell> stores with subscriptions
// - Models: wire types shared with the clinic API
// ============================================================================

pub mod config;
pub mod errors;
pub mod models;
pub mod utils;
pub mod forms;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod dom;
pub mod views;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!("🚀 Rise Dental admin - Rust + MVVM ({})", CONFIG.environment);

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });
    Ok(())
}

/// Full re-render of the mounted app
pub fn rerender_app() {
    APP.with(|app_cell| {
        // Only reachable while a render is running; that render already reads the latest state
        let Ok(mut slot) = app_cell.try_borrow_mut() else {
            log::warn!("⚠️ [RERENDER] App is busy, skipping");
            return;
        };
        match slot.as_mut() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] Render failed: {:?}", e);
                } else {
                    log::debug!("✅ [RERENDER] {} rendered", app.state().router.current().path());
                }
            }
            None => log::warn!("⚠️ [RERENDER] App is not initialized yet"),
        }
    });
}
