// ============================================================================
// APP VIEW - Screen dispatch
// ============================================================================
// Login renders on its own; every other screen sits inside the layout. The
// router has already applied the guard, so whatever screen is mounted here
// is allowed to show.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::state::app_state::{AppState, Screen};
use crate::views::{
    render_add_patient, render_home, render_layout, render_login, render_not_found, render_patient_detail,
    render_patient_list, render_toasts,
};

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let page = match state.screen() {
        Some(Screen::Login(vm)) => render_login(state, &vm)?,
        Some(Screen::Home) | None => render_layout(state, render_home(state)?)?,
        Some(Screen::Patients(vm)) => render_layout(state, render_patient_list(state, &vm)?)?,
        Some(Screen::AddPatient(vm)) => render_layout(state, render_add_patient(state, &vm)?)?,
        Some(Screen::PatientDetail(vm)) => render_layout(state, render_patient_detail(&vm)?)?,
        Some(Screen::NotFound(path)) => render_layout(state, render_not_found(state, &path)?)?,
    };

    Ok(ElementBuilder::new("div")?
        .class("app")
        .child(page)?
        .child(render_toasts(&state.notifications)?)?
        .build())
}
