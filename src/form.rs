//! Contact form model: field rules, validation and the submission flow.

use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use yew::Reducible;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub const INVALID_FORM_MESSAGE: &str = "Please correct the errors above.";
pub const SENDING_LABEL: &str = "Sending Message...";
pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUCCESS_MESSAGE: &str =
    "Thank you for your message! We'll get back to you within 24 hours with a comprehensive consultation.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required.")]
    Required,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select,
    TextArea,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> Self {
        Self { name, label, kind, required }
    }

    pub fn validate(&self, raw: &str) -> Result<(), FieldError> {
        let value = raw.trim();
        if value.is_empty() {
            return if self.required { Err(FieldError::Required) } else { Ok(()) };
        }
        if self.kind == FieldKind::Email && !EMAIL_RE.is_match(value) {
            return Err(FieldError::InvalidEmail);
        }
        Ok(())
    }
}

pub const CONTACT_FIELDS: [FieldSpec; 6] = [
    FieldSpec::new("name", "Full Name", FieldKind::Text, true),
    FieldSpec::new("email", "Email Address", FieldKind::Email, true),
    FieldSpec::new("company", "Company", FieldKind::Text, false),
    FieldSpec::new("phone", "Phone Number", FieldKind::Tel, false),
    FieldSpec::new("service", "Service of Interest", FieldKind::Select, true),
    FieldSpec::new("message", "Message", FieldKind::TextArea, true),
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    pub value: String,
    pub error: Option<FieldError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn class(&self) -> &'static str {
        match self {
            MessageKind::Success => "form-message--success",
            MessageKind::Error => "form-message--error",
        }
    }
}

/// Banner shown at the top of the form. `id` distinguishes successive
/// banners so a stale dismissal timer cannot remove a newer one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub id: u32,
    pub kind: MessageKind,
    pub text: String,
    pub leaving: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Sending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    specs: &'static [FieldSpec],
    pub fields: Vec<FieldState>,
    pub phase: SubmitPhase,
    pub message: Option<FormMessage>,
    next_message_id: u32,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(&CONTACT_FIELDS)
    }
}

impl ContactForm {
    pub fn new(specs: &'static [FieldSpec]) -> Self {
        Self {
            specs,
            fields: vec![FieldState::default(); specs.len()],
            phase: SubmitPhase::Idle,
            message: None,
            next_message_id: 0,
        }
    }

    pub fn specs(&self) -> &'static [FieldSpec] {
        self.specs
    }

    /// Typing clears the field's error until the next blur.
    pub fn input(&mut self, index: usize, value: String) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value;
            field.error = None;
        }
    }

    pub fn validate_field(&mut self, index: usize) -> bool {
        let (Some(spec), Some(field)) = (self.specs.get(index), self.fields.get_mut(index)) else {
            return true;
        };
        field.error = spec.validate(&field.value).err();
        field.error.is_none()
    }

    /// Validates every field (all errors are shown, not just the first).
    pub fn validate_all(&mut self) -> bool {
        (0..self.fields.len()).fold(true, |valid, index| self.validate_field(index) && valid)
    }

    /// Starts a submission. Returns false, with the error banner up, when
    /// any field is invalid or a submission is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase == SubmitPhase::Sending {
            return false;
        }
        if !self.validate_all() {
            self.show_message(MessageKind::Error, INVALID_FORM_MESSAGE);
            return false;
        }
        self.phase = SubmitPhase::Sending;
        true
    }

    /// Finishes the simulated send; returns the success banner's id.
    pub fn complete_submit(&mut self) -> u32 {
        for field in &mut self.fields {
            *field = FieldState::default();
        }
        self.phase = SubmitPhase::Idle;
        self.show_message(MessageKind::Success, SUCCESS_MESSAGE)
    }

    pub fn show_message(&mut self, kind: MessageKind, text: &str) -> u32 {
        self.next_message_id += 1;
        self.message = Some(FormMessage {
            id: self.next_message_id,
            kind,
            text: text.to_string(),
            leaving: false,
        });
        self.next_message_id
    }

    pub fn start_dismiss(&mut self, id: u32) {
        if let Some(message) = self.message.as_mut().filter(|m| m.id == id) {
            message.leaving = true;
        }
    }

    pub fn dismiss(&mut self, id: u32) {
        if self.message.as_ref().map_or(false, |m| m.id == id) {
            self.message = None;
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            SubmitPhase::Idle => SUBMIT_LABEL,
            SubmitPhase::Sending => SENDING_LABEL,
        }
    }
}

pub enum FormAction {
    Input(usize, String),
    Blur(usize),
    Submit,
    Complete,
    StartDismiss(u32),
    Dismiss(u32),
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = (*self).clone();
        match action {
            FormAction::Input(index, value) => form.input(index, value),
            FormAction::Blur(index) => {
                form.validate_field(index);
            }
            FormAction::Submit => {
                form.begin_submit();
            }
            FormAction::Complete => {
                form.complete_submit();
            }
            FormAction::StartDismiss(id) => form.start_dismiss(id),
            FormAction::Dismiss(id) => form.dismiss(id),
        }
        Rc::new(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMAIL: usize = 1;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.input(0, "Ada Lovelace".into());
        form.input(EMAIL, "ada@example.com".into());
        form.input(4, "cloud".into());
        form.input(5, "We need a migration plan.".into());
        form
    }

    #[test]
    fn empty_required_field_is_an_error() {
        let spec = FieldSpec::new("name", "Name", FieldKind::Text, true);
        assert_eq!(spec.validate(""), Err(FieldError::Required));
        assert_eq!(spec.validate("   "), Err(FieldError::Required));
        assert_eq!(FieldError::Required.to_string(), "This field is required.");
    }

    #[test]
    fn optional_field_may_be_empty() {
        let spec = FieldSpec::new("company", "Company", FieldKind::Text, false);
        assert_eq!(spec.validate(""), Ok(()));
    }

    #[test]
    fn email_format_is_checked() {
        let spec = FieldSpec::new("email", "Email", FieldKind::Email, true);
        assert_eq!(spec.validate("not-an-email"), Err(FieldError::InvalidEmail));
        assert_eq!(spec.validate("a@b"), Err(FieldError::InvalidEmail));
        assert_eq!(spec.validate("a b@c.io"), Err(FieldError::InvalidEmail));
        assert_eq!(spec.validate("  ops@halo.io  "), Ok(()));
        assert_eq!(
            FieldError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn valid_email_clears_prior_error() {
        let mut form = ContactForm::default();
        form.fields[EMAIL].value = "not-an-email".into();
        assert!(!form.validate_field(EMAIL));
        assert_eq!(form.fields[EMAIL].error, Some(FieldError::InvalidEmail));

        form.fields[EMAIL].value = "ops@halo.io".into();
        assert!(form.validate_field(EMAIL));
        assert_eq!(form.fields[EMAIL].error, None);
    }

    #[test]
    fn input_clears_error() {
        let mut form = ContactForm::default();
        form.validate_field(0);
        assert!(form.fields[0].error.is_some());
        form.input(0, "A".into());
        assert_eq!(form.fields[0].error, None);
    }

    #[test]
    fn invalid_form_blocks_submission() {
        let mut form = ContactForm::default();
        form.input(0, "Ada".into());
        assert!(!form.begin_submit());
        assert_eq!(form.phase, SubmitPhase::Idle);
        let message = form.message.clone().unwrap();
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(message.text, INVALID_FORM_MESSAGE);
        // every failing field is flagged, not just the first
        assert_eq!(form.fields[EMAIL].error, Some(FieldError::Required));
        assert_eq!(form.fields[5].error, Some(FieldError::Required));
    }

    #[test]
    fn submission_flow_resets_form() {
        let mut form = filled();
        assert!(form.begin_submit());
        assert_eq!(form.submit_label(), SENDING_LABEL);
        assert!(!form.begin_submit(), "double submit is ignored");

        let id = form.complete_submit();
        assert_eq!(form.phase, SubmitPhase::Idle);
        assert_eq!(form.submit_label(), SUBMIT_LABEL);
        assert!(form.fields.iter().all(|f| f.value.is_empty()));
        assert_eq!(form.message.as_ref().unwrap().id, id);
        assert_eq!(form.message.as_ref().unwrap().kind, MessageKind::Success);
    }

    #[test]
    fn reducer_drives_submission() {
        let form = Rc::new(filled());
        let form = form.reduce(FormAction::Submit);
        assert_eq!(form.phase, SubmitPhase::Sending);
        let form = form.reduce(FormAction::Complete);
        assert_eq!(form.phase, SubmitPhase::Idle);
        assert_eq!(form.message.as_ref().map(|m| m.kind), Some(MessageKind::Success));
    }

    #[test]
    fn reducer_validates_on_blur() {
        let form = Rc::new(ContactForm::default())
            .reduce(FormAction::Input(EMAIL, "not-an-email".into()))
            .reduce(FormAction::Blur(EMAIL));
        assert_eq!(form.fields[EMAIL].error, Some(FieldError::InvalidEmail));
    }

    #[test]
    fn stale_dismissal_leaves_newer_banner() {
        let mut form = filled();
        form.begin_submit();
        let first = form.complete_submit();
        let second = form.show_message(MessageKind::Error, INVALID_FORM_MESSAGE);

        form.start_dismiss(first);
        form.dismiss(first);
        let message = form.message.as_ref().unwrap();
        assert_eq!(message.id, second);
        assert!(!message.leaving);

        form.start_dismiss(second);
        assert!(form.message.as_ref().unwrap().leaving);
        form.dismiss(second);
        assert!(form.message.is_none());
    }
}
