// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{on_submit, ElementBuilder};
use crate::state::app_state::AppState;
use crate::viewmodels::{LoginOutcome, LoginViewModel};
use crate::views::widgets::{field, submit_button, Field};

pub fn render_login(state: &AppState, vm: &LoginViewModel) -> Result<Element, JsValue> {
    let current = vm.state();

    let username = {
        let vm = vm.clone();
        field(
            Field {
                id: "username",
                label: "اسم المستخدم",
                placeholder: "أدخل اسم المستخدم",
                input_type: "text",
                value: &current.form.username,
                error: current.errors.get("username"),
            },
            move |v| vm.set_username(&v),
        )?
    };
    let password = {
        let vm = vm.clone();
        field(
            Field {
                id: "password",
                label: "كلمة المرور",
                placeholder: "أدخل كلمة المرور",
                input_type: "password",
                value: &current.form.password,
                error: current.errors.get("password"),
            },
            move |v| vm.set_password(&v),
        )?
    };

    let form = ElementBuilder::new("form")?
        .class("login-form")
        .child(username)?
        .child(password)?
        .child(submit_button("تسجيل الدخول", current.submitting)?)?
        .build();
    {
        let vm = vm.clone();
        let state = state.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            let state = state.clone();
            spawn_local(async move {
                if vm.submit().await == LoginOutcome::LoggedIn {
                    state.after_login();
                }
            });
        })?;
    }

    let card = ElementBuilder::new("div")?
        .class("card login-card")
        .child(ElementBuilder::new("h1")?.class("card-title").text("Rise Dental").build())?
        .child(form)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("login-screen rtl")
        .child(card)?
        .build())
}
