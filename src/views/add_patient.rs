// ============================================================================
// ADD PATIENT VIEW - Form + current patient list
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{on_submit, ElementBuilder};
use crate::state::app_state::AppState;
use crate::viewmodels::{AddPatientViewModel, ViewPhase};
use crate::views::patient_list::loading;
use crate::views::widgets::{field, patient_cards, submit_button, Field};

pub fn render_add_patient(state: &AppState, vm: &AddPatientViewModel) -> Result<Element, JsValue> {
    let current = vm.state();
    let form_state = &current.form;

    let name = {
        let vm = vm.clone();
        field(
            Field {
                id: "name",
                label: "الاسم",
                placeholder: "أدخل الاسم",
                input_type: "text",
                value: &form_state.name,
                error: current.errors.get("name"),
            },
            move |v| vm.set_name(&v),
        )?
    };
    let phone = {
        let vm = vm.clone();
        field(
            Field {
                id: "phone",
                label: "رقم التليفون",
                placeholder: "أدخل رقم التليفون",
                input_type: "tel",
                value: &form_state.phone,
                error: current.errors.get("phone"),
            },
            move |v| vm.set_phone(&v),
        )?
    };
    let address = {
        let vm = vm.clone();
        field(
            Field {
                id: "address",
                label: "العنوان",
                placeholder: "أدخل العنوان",
                input_type: "text",
                value: &form_state.address,
                error: current.errors.get("address"),
            },
            move |v| vm.set_address(&v),
        )?
    };

    let form = ElementBuilder::new("form")?
        .class("patient-form")
        .child(name)?
        .child(phone)?
        .child(address)?
        .child(submit_button("إضافة مريض", current.submitting)?)?
        .build();
    {
        let vm = vm.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            spawn_local(async move {
                vm.submit().await;
            });
        })?;
    }

    let card = ElementBuilder::new("div")?
        .class("card")
        .child(ElementBuilder::new("h2")?.class("card-title").text("إضافة مريض جديد").build())?
        .child(form)?
        .build();

    let list = vm.list();
    let patients = if list.phase() == ViewPhase::Loading && list.patients().is_empty() {
        vec![loading()?]
    } else {
        // No delete buttons here; deleting happens on the patient list
        patient_cards(state, &list.patients(), None)?
    };

    Ok(ElementBuilder::new("section")?
        .class("add-patient-page")
        .child(card)?
        .child(ElementBuilder::new("h2")?.class("section-title").text("المرضي").build())?
        .children(patients)?
        .build())
}
