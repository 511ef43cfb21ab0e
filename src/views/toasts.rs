use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{on_click, ElementBuilder};
use crate::state::notifications::{NotificationState, ToastKind};

/// Toast stack; a click dismisses a toast before its timer does
pub fn render_toasts(notifications: &NotificationState) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("toasts")
        .id("toasts")?
        .build();

    for toast in notifications.toasts() {
        let class = match toast.kind {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        };
        let el = ElementBuilder::new("div")?
            .class(class)
            .attr("role", "status")?
            .text(&toast.message)
            .build();

        let notifications = notifications.clone();
        let id = toast.id;
        on_click(&el, move |_| notifications.dismiss(id))?;
        crate::dom::append_child(&container, &el)?;
    }
    Ok(container)
}
