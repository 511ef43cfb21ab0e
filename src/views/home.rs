use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::state::app_state::AppState;
use crate::state::router::Route;
use crate::views::widgets::link;

pub fn render_home(state: &AppState) -> Result<Element, JsValue> {
    let actions = ElementBuilder::new("div")?
        .class("home-actions")
        .child(link(state, Route::AddPatient, "إضافة مريض جديد", "btn btn-primary")?)?
        .child(link(state, Route::Patients, "قائمة المرضى", "btn btn-secondary")?)?
        .build();

    Ok(ElementBuilder::new("section")?
        .class("home")
        .child(ElementBuilder::new("h1")?.class("home-title").text("أهلا بيك يا دكترة").build())?
        .child(actions)?
        .build())
}

/// Unknown path inside the guarded area
pub fn render_not_found(state: &AppState, path: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("section")?
        .class("not-found")
        .child(ElementBuilder::new("h1")?.text("الصفحة غير موجودة").build())?
        .child(ElementBuilder::new("p")?.class("not-found-path").text(path).build())?
        .child(link(state, Route::Home, "الرئيسية", "btn btn-primary")?)?
        .build())
}
