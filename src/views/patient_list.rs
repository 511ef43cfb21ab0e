// ============================================================================
// PATIENT LIST VIEW
// ============================================================================
// The search box only redraws `#patient-cards`, so the input keeps focus.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{get_element_by_id, on_input, replace_children, ElementBuilder};
use crate::state::app_state::AppState;
use crate::viewmodels::{PatientListViewModel, ViewPhase};
use crate::views::widgets::patient_cards;

const CARDS_ID: &str = "patient-cards";

pub fn render_patient_list(state: &AppState, vm: &PatientListViewModel) -> Result<Element, JsValue> {
    let search = ElementBuilder::new("input")?
        .class("input search text-end")
        .attr("type", "search")?
        .attr("placeholder", "اكتب اسم المريض")?
        .attr("value", &vm.query())?
        .build();
    {
        let vm = vm.clone();
        let state = state.clone();
        on_input(&search, move |query| {
            vm.set_query(&query);
            if let Some(cards) = get_element_by_id(CARDS_ID) {
                let redraw = patient_cards(&state, &vm.visible(), Some(&vm))
                    .and_then(|children| replace_children(&cards, children));
                if let Err(e) = redraw {
                    log::error!("❌ [PATIENTS] Could not redraw cards: {:?}", e);
                }
            }
        })?;
    }

    let cards = ElementBuilder::new("div")?
        .class("patient-grid")
        .id(CARDS_ID)?
        .build();
    if vm.phase() == ViewPhase::Loading && vm.patients().is_empty() {
        crate::dom::append_child(&cards, &loading()?)?;
    } else {
        replace_children(&cards, patient_cards(state, &vm.visible(), Some(vm))?)?;
    }

    Ok(ElementBuilder::new("section")?
        .class("patients-page")
        .child(ElementBuilder::new("h2")?.class("section-title").text("ابحث عن مريض").build())?
        .child(search)?
        .child(ElementBuilder::new("h2")?.class("section-title").text("المرضى").build())?
        .child(cards)?
        .build())
}

pub(crate) fn loading() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("p")?
        .class("loading text-end")
        .text("جاري التحميل...")
        .build())
}
