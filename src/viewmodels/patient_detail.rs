// ============================================================================
// PATIENT DETAIL VIEWMODEL
// ============================================================================
// Patient header + examinations of that patient. The examination form is
// opened either empty (create) or pre-filled from one item (edit); submit
// POSTs or PATCHes accordingly, then refetches the examinations.
// ============================================================================

use crate::forms::{ExaminationForm, FormErrors};
use crate::models::{Examination, Patient};
use crate::services::{examination_service, patient_service, ApiClient};
use crate::state::notifications::NotificationState;
use crate::state::reactivity::ReactiveState;
use crate::viewmodels::add_patient::SubmitOutcome;
use crate::viewmodels::collection::{Collection, Lifecycle, ViewPhase};
use crate::viewmodels::patient_list::MSG_LOAD_FAILED;

pub const MSG_EXAM_SAVED: &str = "تمت إضافة الفحص بنجاح!";
pub const MSG_EXAM_SAVE_FAILED: &str = "تعذر حفظ الفحص";
pub const MSG_EXAM_DELETED: &str = "خلاص اتمسح يا دكترة";
pub const MSG_EXAM_DELETE_FAILED: &str = "تعذر حذف الفحص";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Create,
    Edit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamField {
    ExaminationFee,
    Paid,
    Action,
    Date,
    NextVisit,
    Notes,
}

/// State of one form session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExamEditor {
    pub open: bool,
    pub mode: EditorMode,
    pub form: ExaminationForm,
    pub errors: FormErrors,
    pub submitting: bool,
}

#[derive(Clone)]
pub struct PatientDetailViewModel {
    api: ApiClient,
    notifications: NotificationState,
    patient_id: String,
    patient: ReactiveState<Option<Patient>>,
    examinations: Collection<Examination>,
    editor: ReactiveState<ExamEditor>,
    lifecycle: Lifecycle,
}

impl PatientDetailViewModel {
    pub fn new(api: ApiClient, notifications: NotificationState, patient_id: &str) -> Self {
        Self {
            api,
            notifications,
            patient_id: patient_id.to_string(),
            patient: ReactiveState::new(None),
            examinations: Collection::new(),
            editor: ReactiveState::default(),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn patient(&self) -> Option<Patient> {
        self.patient.get()
    }

    pub fn examinations(&self) -> Vec<Examination> {
        self.examinations.items()
    }

    pub fn phase(&self) -> ViewPhase {
        self.examinations.phase()
    }

    pub fn editor(&self) -> ExamEditor {
        self.editor.get()
    }

    pub fn on_change<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        let callback = std::rc::Rc::new(callback);
        let on_patient = callback.clone();
        let on_exams = callback.clone();
        self.patient.subscribe(move |_| on_patient());
        self.examinations.subscribe(move |_| on_exams());
        self.editor.subscribe(move |_| callback());
    }

    pub fn teardown(&self) {
        self.lifecycle.teardown();
    }

    pub fn set_field(&self, field: ExamField, value: &str) {
        self.editor.update_silent(|e| {
            let slot = match field {
                ExamField::ExaminationFee => &mut e.form.examination_fee,
                ExamField::Paid => &mut e.form.paid,
                ExamField::Action => &mut e.form.action,
                ExamField::Date => &mut e.form.date,
                ExamField::NextVisit => &mut e.form.next_visit,
                ExamField::Notes => &mut e.form.notes,
            };
            *slot = value.to_string();
        });
    }

    /// "Add examination" / "close form" button
    pub fn toggle_form(&self) {
        if self.editor.with(|e| e.open) {
            self.close_form();
        } else {
            self.editor.set(ExamEditor {
                open: true,
                ..ExamEditor::default()
            });
        }
    }

    /// Pre-fill from one examination and switch submit to PATCH
    pub fn start_edit(&self, exam_id: &str) -> bool {
        let exam = self
            .examinations
            .items()
            .into_iter()
            .find(|e| e.id == exam_id);
        match exam {
            Some(exam) => {
                log::info!("✏️ [EXAMS] Editing examination {}", exam.id);
                self.editor.set(ExamEditor {
                    open: true,
                    mode: EditorMode::Edit(exam.id.clone()),
                    form: ExaminationForm::from_examination(&exam),
                    ..ExamEditor::default()
                });
                true
            }
            None => {
                log::warn!("⚠️ [EXAMS] Examination {} is not in the current list", exam_id);
                false
            }
        }
    }

    /// Leave the form session; nothing already saved is reverted
    pub fn close_form(&self) {
        self.editor.set(ExamEditor::default());
    }

    pub async fn mount(&self) {
        self.load_patient().await;
        self.load_examinations().await;
    }

    pub async fn load_patient(&self) {
        let result = patient_service::fetch_patient(&self.api, &self.patient_id).await;
        if !self.lifecycle.accepts("patient") {
            return;
        }
        match result {
            Ok(patient) => self.patient.set(Some(patient)),
            Err(e) => log::error!("❌ [PATIENT] Fetch of {} failed: {}", self.patient_id, e),
        }
    }

    pub async fn load_examinations(&self) {
        self.examinations.begin_load();
        let result = examination_service::fetch_examinations(&self.api, &self.patient_id).await;
        if !self.lifecycle.accepts("examinations") {
            return;
        }
        if let Err(e) = self.examinations.finish_load(result) {
            log::error!("❌ [EXAMS] Fetch failed: {}", e);
            self.notifications.error(MSG_LOAD_FAILED);
        }
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let (mode, validated) = self.editor.with(|e| (e.mode.clone(), e.form.validate()));
        let payload = match validated {
            Ok(payload) => payload,
            Err(errors) => {
                log::warn!("⚠️ [EXAMS] {} invalid field(s)", errors.len());
                self.editor.update(|e| e.errors = errors);
                return SubmitOutcome::Invalid;
            }
        };

        self.editor.update(|e| {
            e.errors = FormErrors::new();
            e.submitting = true;
        });

        let result = match &mode {
            EditorMode::Create => examination_service::create_examination(&self.api, &self.patient_id, &payload).await,
            EditorMode::Edit(exam_id) => examination_service::update_examination(&self.api, exam_id, &payload).await,
        };
        if !self.lifecycle.accepts("examination save") {
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(saved) => {
                log::info!("✅ [EXAMS] Examination saved: {}", saved.id);
                self.notifications.success(MSG_EXAM_SAVED);
                self.editor.set(ExamEditor::default());
                self.load_examinations().await;
                SubmitOutcome::Saved
            }
            Err(e) => {
                log::error!("❌ [EXAMS] Save failed ({:?}): {}", mode, e);
                self.notifications.error(MSG_EXAM_SAVE_FAILED);
                self.editor.update(|editor| editor.submitting = false);
                SubmitOutcome::Failed
            }
        }
    }

    pub async fn delete(&self, exam_id: &str) -> bool {
        let result = examination_service::delete_examination(&self.api, exam_id).await;
        if !self.lifecycle.accepts("examination delete") {
            return false;
        }
        match result {
            Ok(()) => {
                self.examinations.remove(exam_id);
                // The edited examination no longer exists
                if self.editor.with(|e| e.mode == EditorMode::Edit(exam_id.to_string())) {
                    self.close_form();
                }
                self.notifications.success(MSG_EXAM_DELETED);
                true
            }
            Err(e) => {
                log::error!("❌ [EXAMS] Delete of {} failed: {}", exam_id, e);
                self.notifications.error(MSG_EXAM_DELETE_FAILED);
                false
            }
        }
    }
}
