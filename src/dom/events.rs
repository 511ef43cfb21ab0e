// ============================================================================
// EVENT HANDLING
// ============================================================================
// Listeners are `forget()`-ed. The Rust closure is never freed, so every
// full render leaks the handlers of the elements it replaces. Window
// listeners are registered once, at startup.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, MouseEvent, PopStateEvent};

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// `input` listener; the handler receives the element's new value
pub fn on_input<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: Event| {
        handler(crate::dom::event_target_value(&e));
    }) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// `submit` listener with the default page reload suppressed
pub fn on_submit<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
        handler();
    }) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Back/forward buttons. Call once.
pub fn on_popstate<F>(handler: F) -> Result<(), JsValue>
where
    F: FnMut(PopStateEvent) + 'static,
{
    let window = crate::dom::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(PopStateEvent)>);
    window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
