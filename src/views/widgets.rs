// ============================================================================
// WIDGETS - Small pieces shared by several screens
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{on_click, on_input, ElementBuilder};
use crate::models::Patient;
use crate::state::app_state::AppState;
use crate::state::router::Route;
use crate::viewmodels::PatientListViewModel;

/// `<a>` that navigates through the router instead of reloading the page
pub fn link(state: &AppState, route: Route, label: &str, class: &str) -> Result<Element, JsValue> {
    let anchor = ElementBuilder::new("a")?
        .class(class)
        .attr("href", &route.path())?
        .text(label)
        .build();

    let state = state.clone();
    on_click(&anchor, move |e| {
        e.prevent_default();
        state.navigate(route.clone());
    })?;
    Ok(anchor)
}

pub struct Field<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub placeholder: &'a str,
    pub input_type: &'a str,
    pub value: &'a str,
    pub error: Option<&'a str>,
}

/// Label + input + inline error. `input_type == "textarea"` renders a textarea.
pub fn field<F>(spec: Field<'_>, on_change: F) -> Result<Element, JsValue>
where
    F: Fn(String) + 'static,
{
    let input = if spec.input_type == "textarea" {
        ElementBuilder::new("textarea")?
            .class("input text-end")
            .id(spec.id)?
            .attr("placeholder", spec.placeholder)?
            .text(spec.value)
            .build()
    } else {
        ElementBuilder::new("input")?
            .class("input text-end")
            .id(spec.id)?
            .attr("type", spec.input_type)?
            .attr("placeholder", spec.placeholder)?
            .attr("value", spec.value)?
            .build()
    };
    on_input(&input, move |value| on_change(value))?;

    let label = ElementBuilder::new("label")?
        .class("label")
        .attr("for", spec.id)?
        .text(spec.label)
        .build();

    let group = ElementBuilder::new("div")?
        .class("form-group")
        .child(label)?
        .child(input)?
        .build();

    if let Some(message) = spec.error {
        let error = ElementBuilder::new("p")?
            .class("field-error text-end")
            .text(message)
            .build();
        crate::dom::append_child(&group, &error)?;
    }
    Ok(group)
}

pub fn submit_button(label: &str, busy: bool) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .flag("disabled", busy)?
        .text(label)
        .build())
}

/// Contact card linking to the patient page; `list` adds a delete button
pub fn patient_card(
    state: &AppState,
    patient: &Patient,
    list: Option<&PatientListViewModel>,
) -> Result<Element, JsValue> {
    let line = |class: &str, icon: &str, text: &str| -> Result<Element, JsValue> {
        Ok(ElementBuilder::new("div")?
            .class(&format!("contact-line {}", class))
            .child(ElementBuilder::new("span")?.class("contact-text").text(text).build())?
            .child(ElementBuilder::new("span")?.class("contact-icon").text(icon).build())?
            .build())
    };

    let card = ElementBuilder::new("div")?
        .class("card patient-card")
        .attr("data-id", &patient.id)?
        .child(ElementBuilder::new("h2")?.class("card-title").text("معلومات الاتصال").build())?
        .child(line("contact-name", "👤", &patient.name)?)?
        .child(line("contact-address", "📍", &patient.address)?)?
        .child(line("contact-phone", "📞", &patient.phone)?)?
        .build();

    if let Some(list) = list {
        let delete = ElementBuilder::new("button")?
            .class("btn btn-danger")
            .attr("type", "button")?
            .text("حذف")
            .build();
        let list = list.clone();
        let id = patient.id.clone();
        on_click(&delete, move |e| {
            // The card itself is a link
            e.prevent_default();
            e.stop_propagation();
            let list = list.clone();
            let id = id.clone();
            spawn_local(async move {
                list.delete(&id).await;
            });
        })?;
        crate::dom::append_child(&card, &delete)?;
    }

    let anchor = link(state, Route::Patient(patient.id.clone()), "", "patient-link")?;
    crate::dom::append_child(&anchor, &card)?;
    Ok(anchor)
}

/// Cards for a list of patients, or an empty-state line
pub fn patient_cards(
    state: &AppState,
    patients: &[Patient],
    list: Option<&PatientListViewModel>,
) -> Result<Vec<Element>, JsValue> {
    if patients.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("empty-state text-end")
            .text("لا يوجد مرضى")
            .build();
        return Ok(vec![empty]);
    }
    patients
        .iter()
        .map(|p| patient_card(state, p, list))
        .collect()
}
