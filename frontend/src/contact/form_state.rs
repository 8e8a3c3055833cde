use std::rc::Rc;

use serde::Serialize;
use thiserror::Error;
use yew::functional::Reducible;

use crate::config;
use crate::utils::validation::{check_email, check_message, check_name, check_phone, ValidationError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Phone, Field::Email, Field::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }
}

/// Per-field validation failures. A field is present only while it fails.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    name: Option<ValidationError>,
    phone: Option<ValidationError>,
    email: Option<ValidationError>,
    message: Option<ValidationError>,
}

impl FieldErrors {
    pub fn check(fields: &ContactFields) -> Self {
        Self {
            name: check_name(&fields.name),
            phone: check_phone(&fields.phone),
            email: check_email(&fields.email),
            message: check_message(&fields.message),
        }
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        match field {
            Field::Name => self.name,
            Field::Phone => self.phone,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    pub fn clear(&mut self, field: Field) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = None;
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl Submission {
    /// How long the form waits in this state before moving on by itself.
    pub fn timer_ms(&self) -> Option<u32> {
        match self {
            Submission::Submitting => Some(config::SUBMIT_DELAY_MS),
            Submission::Succeeded => Some(config::FEEDBACK_RESET_MS),
            Submission::Idle | Submission::Failed => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to encode contact request: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Body that would be posted to the gym's inbox.
#[derive(Serialize)]
pub struct ContactRequest<'a> {
    #[serde(flatten)]
    pub fields: &'a ContactFields,
    pub source: &'static str,
}

pub fn encode_request(fields: &ContactFields) -> Result<String, SubmitError> {
    let request = ContactRequest { fields, source: "landing-contact-form" };
    Ok(serde_json::to_string(&request)?)
}

/// Contact form state plus the submission lifecycle:
/// Idle -> Submitting -> Succeeded -> Idle, or Submitting -> Failed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub errors: FieldErrors,
    pub submission: Submission,
}

impl ContactForm {
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.slot_mut(field) = value.into();
        self.errors.clear(field);
    }

    pub fn validate(&mut self) -> bool {
        self.errors = FieldErrors::check(&self.fields);
        self.errors.is_empty()
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == Submission::Submitting
    }

    /// Validates and enters `Submitting`. Returns false when a submission is
    /// already in flight or a field fails; neither case touches `submission`.
    /// A refilled form may be sent again while the success banner is up.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting() {
            log::warn!("Contact form already submitting, ignoring submit");
            return false;
        }
        if !self.validate() {
            log::info!("Contact form has invalid fields, submission blocked");
            return false;
        }
        self.submission = Submission::Submitting;
        true
    }

    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) {
        if !self.is_submitting() {
            return;
        }
        match outcome {
            Ok(()) => {
                log::info!("Contact form delivered");
                self.fields = ContactFields::default();
                self.submission = Submission::Succeeded;
            }
            Err(e) => {
                log::error!("Contact form delivery failed: {}", e);
                self.submission = Submission::Failed;
            }
        }
    }

    /// Hides the success banner. Failure stays until the next submit.
    pub fn reset_feedback(&mut self) {
        if self.submission == Submission::Succeeded {
            self.submission = Submission::Idle;
        }
    }
}

pub enum FormAction {
    Update(Field, String),
    Submit,
    Finish(Result<(), SubmitError>),
    ResetFeedback,
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Update(field, value) => next.update_field(field, value),
            FormAction::Submit => {
                next.begin_submit();
            }
            FormAction::Finish(outcome) => next.finish_submit(outcome),
            FormAction::ResetFeedback => next.reset_feedback(),
        }
        if next == *self {
            self
        } else {
            next.into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.update_field(Field::Name, "דנה כהן");
        form.update_field(Field::Phone, "0501234567");
        form.update_field(Field::Email, "dana@example.com");
        form.update_field(Field::Message, "מתי יש שיעור פילאטיס?");
        form
    }

    #[test]
    fn empty_form_reports_every_field() {
        let mut form = ContactForm::default();
        assert!(!form.validate());
        assert_eq!(form.errors.get(Field::Name), Some(ValidationError::MissingName));
        assert_eq!(form.errors.get(Field::Phone), Some(ValidationError::MissingPhone));
        assert_eq!(form.errors.get(Field::Email), Some(ValidationError::MissingEmail));
        assert_eq!(form.errors.get(Field::Message), Some(ValidationError::MissingMessage));
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut form = ContactForm::default();
        form.validate();
        form.update_field(Field::Phone, "12");
        assert_eq!(form.errors.get(Field::Phone), None);
        assert_eq!(form.errors.get(Field::Name), Some(ValidationError::MissingName));
        assert_eq!(form.fields.phone, "12");
    }

    #[test]
    fn validate_recomputes_wholesale() {
        let mut form = filled();
        form.update_field(Field::Email, "a@b");
        assert!(!form.validate());
        assert_eq!(form.errors.get(Field::Email), Some(ValidationError::InvalidEmail));
        form.update_field(Field::Email, "a@b.com");
        assert!(form.validate());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn invalid_submit_leaves_submission_alone() {
        let mut form = ContactForm::default();
        assert!(!form.begin_submit());
        assert_eq!(form.submission, Submission::Idle);
        assert!(!form.errors.is_empty());
    }

    #[test]
    fn successful_lifecycle() {
        let mut form = filled();
        assert!(form.begin_submit());
        assert_eq!(form.submission, Submission::Submitting);
        assert_eq!(form.fields.name, "דנה כהן");

        form.finish_submit(Ok(()));
        assert_eq!(form.submission, Submission::Succeeded);
        assert_eq!(form.fields, ContactFields::default());

        form.reset_feedback();
        assert_eq!(form.submission, Submission::Idle);
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut form = filled();
        assert!(form.begin_submit());
        let before = form.clone();
        assert!(!form.begin_submit());
        assert_eq!(form, before);
    }

    #[test]
    fn failure_is_reachable_only_through_submitting() {
        let mut form = filled();
        form.finish_submit(Ok(()));
        assert_eq!(form.submission, Submission::Idle);

        assert!(form.begin_submit());
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        form.finish_submit(Err(SubmitError::Encode(err)));
        assert_eq!(form.submission, Submission::Failed);
        // fields survive a failed delivery so the visitor can resend
        assert_eq!(form.fields.phone, "0501234567");

        form.reset_feedback();
        assert_eq!(form.submission, Submission::Failed);

        assert!(form.begin_submit());
        assert_eq!(form.submission, Submission::Submitting);
    }

    #[test]
    fn refilled_form_can_be_sent_while_success_banner_shows() {
        let mut form = filled();
        assert!(form.begin_submit());
        form.finish_submit(Ok(()));
        assert_eq!(form.submission, Submission::Succeeded);

        // cleared fields block the resend
        assert!(!form.begin_submit());
        assert_eq!(form.submission, Submission::Succeeded);

        form.fields = filled().fields;
        assert!(form.begin_submit());
        assert_eq!(form.submission, Submission::Submitting);
    }

    #[test]
    fn only_in_flight_and_success_states_run_a_timer() {
        assert_eq!(Submission::Idle.timer_ms(), None);
        assert_eq!(Submission::Submitting.timer_ms(), Some(1_500));
        assert_eq!(Submission::Succeeded.timer_ms(), Some(5_000));
        assert_eq!(Submission::Failed.timer_ms(), None);
    }

    #[test]
    fn reducer_drives_the_same_lifecycle() {
        let form = Rc::new(filled());
        let form = form.reduce(FormAction::Submit);
        assert!(form.is_submitting());
        let form = form.reduce(FormAction::Submit);
        assert!(form.is_submitting());
        let form = form.reduce(FormAction::Finish(Ok(())));
        assert_eq!(form.submission, Submission::Succeeded);
        let form = form.reduce(FormAction::ResetFeedback);
        assert_eq!(form.submission, Submission::Idle);
        let form = form.reduce(FormAction::Update(Field::Name, "יוסי".into()));
        assert_eq!(form.fields.name, "יוסי");
    }

    #[test]
    fn request_body_carries_all_fields() {
        let body = encode_request(&filled().fields).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["phone"], "0501234567");
        assert_eq!(value["email"], "dana@example.com");
        assert_eq!(value["source"], "landing-contact-form");
    }

    proptest! {
        #[test]
        fn blank_field_always_blocks(which in 0usize..4, blank in "[ \t]*") {
            let field = Field::ALL[which];
            let mut form = filled();
            form.update_field(field, blank);
            prop_assert!(!form.validate());
            prop_assert!(form.errors.get(field).is_some());
            for other in Field::ALL.iter().filter(|f| **f != field) {
                prop_assert!(form.errors.get(*other).is_none());
            }
        }
    }
}
