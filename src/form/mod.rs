//! Modal editors: a draft, its field errors, and the submit lifecycle.
//!
//! The controller never touches a store. A successful submit yields a
//! [`Submission`] whose future resolves to a [`Completed`] value after the
//! configured latency; the owner applies it to the store and closes the form.

pub mod course;
pub mod payment;
pub mod rules;
pub mod student;

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use crate::error::SubmitError;
use crate::store::RecordId;

pub use course::{CourseDraft, CourseField, NoteField, VideoField};
pub use payment::{PaymentDraft, PaymentField};
pub use student::{StudentDraft, StudentField};

/// One message per invalid field, keyed by the snake_case field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An editable, not yet validated copy of a record.
pub trait Draft {
    type Output;

    /// Checks every rule and coerces text fields into their typed form.
    fn validate(&self) -> Result<Self::Output, FieldErrors>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

static NEXT_SERIAL: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone)]
pub struct FormController<D: Draft> {
    serial: u64,
    mode: FormMode,
    draft: D,
    errors: FieldErrors,
    submitting: bool,
}

impl<D: Draft> FormController<D> {
    pub fn create(draft: D) -> Self {
        Self::open(FormMode::Create, draft)
    }

    pub fn edit(id: RecordId, draft: D) -> Self {
        Self::open(FormMode::Edit(id), draft)
    }

    fn open(mode: FormMode, draft: D) -> Self {
        Self {
            serial: NEXT_SERIAL.fetch_add(1, Ordering::Relaxed),
            mode,
            draft,
            errors: FieldErrors::new(),
            submitting: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Edits the draft and clears the stale error of the touched field.
    pub fn change(&mut self, field: &'static str, edit: impl FnOnce(&mut D)) {
        edit(&mut self.draft);
        self.errors.clear(field);
    }

    /// Edits the draft without touching errors (sub-record lists).
    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    pub fn begin_submit(&mut self, latency: Duration) -> Result<Submission<D::Output>, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        match self.draft.validate() {
            Ok(payload) => {
                self.errors = FieldErrors::new();
                self.submitting = true;
                Ok(Submission {
                    completed: Completed { serial: self.serial, mode: self.mode, payload },
                    latency,
                })
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(SubmitError::Invalid(errors))
            }
        }
    }

    /// True when `completed` belongs to this form instance and it is still
    /// waiting for it.
    pub fn accepts<T>(&self, completed: &Completed<T>) -> bool {
        self.submitting && completed.serial == self.serial
    }
}

/// A validated payload on its way to the owner.
#[derive(Debug)]
pub struct Submission<T> {
    completed: Completed<T>,
    latency: Duration,
}

impl<T> Submission<T> {
    /// Stands in for the network round trip of a real backend.
    pub async fn resolve(self) -> Completed<T> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.completed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Completed<T> {
    pub serial: u64,
    pub mode: FormMode,
    pub payload: T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Level, StudentStatus};

    fn filled_student() -> StudentDraft {
        StudentDraft {
            name: "Nora Quinn".to_string(),
            email: "nora.quinn@email.com".to_string(),
            phone: "+1 (555) 999-0000".to_string(),
            course: Some("IELTS Preparation".to_string()),
            level: Level::Advanced,
            status: StudentStatus::Active,
        }
    }

    #[test]
    fn invalid_submit_records_errors_and_stays_idle() {
        let mut form = FormController::create(StudentDraft::default());
        let result = form.begin_submit(Duration::ZERO);

        assert!(matches!(result, Err(SubmitError::Invalid(_))));
        assert_eq!(
            result.unwrap_err().to_string(),
            "4 field(s) failed validation: course, email, name, phone"
        );
        assert!(!form.is_submitting());
        assert_eq!(form.error("name"), Some("Name is required"));
    }

    #[test]
    fn changing_a_field_clears_its_error_only() {
        let mut form = FormController::create(StudentDraft::default());
        let _ = form.begin_submit(Duration::ZERO);
        form.change(StudentField::Name.key(), |d| d.name = "Ada".to_string());

        assert_eq!(form.error("name"), None);
        assert!(form.error("email").is_some());
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut form = FormController::create(filled_student());
        let first = form.begin_submit(Duration::ZERO);
        assert!(first.is_ok());
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(Duration::ZERO).unwrap_err(), SubmitError::InFlight);
    }

    #[tokio::test]
    async fn submission_resolves_to_the_validated_payload() {
        let mut form = FormController::edit(7, filled_student());
        let submission = form.begin_submit(Duration::from_millis(5)).unwrap();
        let completed = submission.resolve().await;
        assert_eq!(completed.payload.name, "Nora Quinn");
        assert_eq!(completed.mode, FormMode::Edit(7));
        assert!(form.accepts(&completed));
    }

    #[tokio::test]
    async fn completion_from_another_form_is_not_accepted() {
        let mut first = FormController::create(filled_student());
        let completed = first.begin_submit(Duration::ZERO).unwrap().resolve().await;

        let mut second = FormController::create(filled_student());
        let _ = second.begin_submit(Duration::ZERO).unwrap();
        assert!(!second.accepts(&completed));
        assert!(first.accepts(&completed));
    }
}
