// ============================================================================
// PATIENT DETAIL VIEW - Contact card + examinations
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::dom::{on_click, on_submit, ElementBuilder};
use crate::models::{Examination, Patient};
use crate::utils::format::{format_amount, format_date, format_optional_date, or_nothing, INVALID_DATE};
use crate::viewmodels::{EditorMode, ExamField, PatientDetailViewModel, ViewPhase};
use crate::viewmodels::patient_detail::ExamEditor;
use crate::views::patient_list::loading;
use crate::views::widgets::{field, submit_button, Field};

pub fn render_patient_detail(vm: &PatientDetailViewModel) -> Result<Element, JsValue> {
    let editor = vm.editor();

    let toggle = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "button")?
        .text(if editor.open { "إغلاق النموذج" } else { "إضافة فحص جديد" })
        .build();
    {
        let vm = vm.clone();
        on_click(&toggle, move |_| vm.toggle_form())?;
    }

    let page = ElementBuilder::new("section")?
        .class("patient-page")
        .child(render_contact(vm.patient().as_ref())?)?
        .child(ElementBuilder::new("div")?.class("toolbar").child(toggle)?.build())?
        .build();

    if editor.open {
        crate::dom::append_child(&page, &render_form(vm, &editor)?)?;
    }

    let exams = ElementBuilder::new("div")?.class("exam-list").build();
    let items = vm.examinations();
    if vm.phase() == ViewPhase::Loading && items.is_empty() {
        crate::dom::append_child(&exams, &loading()?)?;
    } else if items.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("empty-state text-end")
            .text("لا توجد فحوصات")
            .build();
        crate::dom::append_child(&exams, &empty)?;
    }
    for exam in &items {
        crate::dom::append_child(&exams, &render_exam(vm, exam)?)?;
    }

    crate::dom::append_child(&page, &ElementBuilder::new("h2")?.class("section-title").text("الفحوصات").build())?;
    crate::dom::append_child(&page, &exams)?;
    Ok(page)
}

fn render_contact(patient: Option<&Patient>) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class("card contact-card")
        .child(ElementBuilder::new("h2")?.class("card-title").text("معلومات الاتصال").build())?
        .build();

    let Some(patient) = patient else {
        crate::dom::append_child(&card, &loading()?)?;
        return Ok(card);
    };
    for (class, text) in [
        ("contact-name", patient.name.as_str()),
        ("contact-address", patient.address.as_str()),
        ("contact-phone", patient.phone.as_str()),
    ] {
        let line = ElementBuilder::new("div")?.class(class).text(text).build();
        crate::dom::append_child(&card, &line)?;
    }
    if let Some(notes) = patient.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        let line = ElementBuilder::new("div")?.class("contact-notes").text(notes).build();
        crate::dom::append_child(&card, &line)?;
    }
    Ok(card)
}

fn render_form(vm: &PatientDetailViewModel, editor: &ExamEditor) -> Result<Element, JsValue> {
    let form_values = &editor.form;
    let specs: [(ExamField, &str, &str, &str, &str, &str); 6] = [
        (ExamField::ExaminationFee, "examinationFee", "سعر الكشف", "number", form_values.examination_fee.as_str(), "0"),
        (ExamField::Paid, "paid", "المدفوع", "number", form_values.paid.as_str(), "0"),
        (ExamField::Action, "action", "الإجراء", "text", form_values.action.as_str(), "مثال: حشو عصب"),
        (ExamField::Date, "date", "التاريخ", "date", form_values.date.as_str(), ""),
        (ExamField::NextVisit, "nextVisit", "الزيارة القادمة", "date", form_values.next_visit.as_str(), ""),
        (ExamField::Notes, "notes", "ملاحظات", "textarea", form_values.notes.as_str(), "ملاحظات"),
    ];

    let form = ElementBuilder::new("form")?.class("exam-form").build();
    for (exam_field, id, label, input_type, value, placeholder) in specs {
        let vm = vm.clone();
        let group = field(
            Field {
                id,
                label,
                placeholder,
                input_type,
                value,
                error: editor.errors.get(id),
            },
            move |v| vm.set_field(exam_field, &v),
        )?;
        crate::dom::append_child(&form, &group)?;
    }

    let label = match editor.mode {
        EditorMode::Create => "إضافة الفحص",
        EditorMode::Edit(_) => "تحديث الفحص",
    };
    crate::dom::append_child(&form, &submit_button(label, editor.submitting)?)?;
    {
        let vm = vm.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            spawn_local(async move {
                vm.submit().await;
            });
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .class("card exam-form-card")
        .child(form)?
        .build())
}

fn render_exam(vm: &PatientDetailViewModel, exam: &Examination) -> Result<Element, JsValue> {
    let date = exam
        .date
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| INVALID_DATE.to_string());

    let rows = [
        ("سعر الكشف", format_amount(exam.examination_fee)),
        ("المدفوع", format_amount(exam.paid)),
        ("الباقي", format_amount(exam.remaining)),
        ("الإجراء", or_nothing(exam.action.as_deref())),
        ("التاريخ", date),
        ("الزيارة القادمة", format_optional_date(exam.next_visit.as_deref())),
        ("ملاحظات", or_nothing(exam.notes.as_deref())),
    ];

    let card = ElementBuilder::new("div")?
        .class("card exam-card")
        .attr("data-id", &exam.id)?
        .build();
    for (label, value) in rows {
        let row = ElementBuilder::new("div")?
            .class("exam-row")
            .child(ElementBuilder::new("span")?.class("exam-label").text(label).build())?
            .child(ElementBuilder::new("span")?.class("exam-value").text(&value).build())?
            .build();
        crate::dom::append_child(&card, &row)?;
    }

    let edit = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .attr("type", "button")?
        .text("تعديل")
        .build();
    {
        let vm = vm.clone();
        let id = exam.id.clone();
        on_click(&edit, move |_| {
            vm.start_edit(&id);
        })?;
    }

    let delete = ElementBuilder::new("button")?
        .class("btn btn-danger")
        .attr("type", "button")?
        .text("حذف")
        .build();
    {
        let vm = vm.clone();
        let id = exam.id.clone();
        on_click(&delete, move |_| {
            let vm = vm.clone();
            let id = id.clone();
            spawn_local(async move {
                vm.delete(&id).await;
            });
        })?;
    }

    let actions = ElementBuilder::new("div")?
        .class("exam-actions")
        .child(edit)?
        .child(delete)?
        .build();
    crate::dom::append_child(&card, &actions)?;
    Ok(card)
}
