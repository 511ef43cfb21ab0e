// ============================================================================
// LAYOUT - Sidebar + content area for every guarded screen
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_click, ElementBuilder};
use crate::state::app_state::AppState;
use crate::state::router::Route;
use crate::views::widgets::link;

pub fn render_layout(state: &AppState, content: Element) -> Result<Element, JsValue> {
    let current = state.router.current();

    let nav = ElementBuilder::new("nav")?.class("sidebar-nav").build();
    for (route, title) in [(Route::AddPatient, "اضافة مريض"), (Route::Patients, "المرضي")] {
        let class = if route == current { "nav-link active" } else { "nav-link" };
        crate::dom::append_child(&nav, &link(state, route, title, class)?)?;
    }

    let logout = ElementBuilder::new("button")?
        .class("btn btn-logout")
        .attr("type", "button")?
        .text("تسجيل الخروج")
        .build();
    {
        let state = state.clone();
        on_click(&logout, move |_| {
            log::info!("👋 [LAYOUT] Logout clicked");
            state.logout();
        })?;
    }

    let sidebar = ElementBuilder::new("aside")?
        .class("sidebar")
        .child(link(state, Route::Home, "Rise Dental", "sidebar-logo")?)?
        .child(nav)?
        .child(logout)?
        .build();

    let main = ElementBuilder::new("main")?
        .class("content")
        .child(content)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("layout rtl")
        .child(main)?
        .child(sidebar)?
        .build())
}
