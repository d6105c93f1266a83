use std::rc::Rc;

use serde::Serialize;
use yew::prelude::*;

use crate::config;
use crate::forms::common::{
    is_valid_email, is_valid_phone, FormPhase, SubmitAttempt, ValidationErrors,
};

/// Template parameters for the contact-message template.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ContactParams {
    pub to_name: String,
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub message: String,
    pub reply_to: String,
}

/// State of the "Send us a Message" form. Driven through `use_reducer`
/// so every transition is a pure function of the current state; the
/// timer callbacks in the hosting component only dispatch actions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub errors: ValidationErrors,
    pub phase: FormPhase,
    pub dispatch_error: Option<String>,
}

pub enum ContactAction {
    SetName(String),
    SetEmail(String),
    SetPhone(String),
    SetMessage(String),
    /// Validation rejected the submit; surface the errors.
    Rejected(ValidationErrors),
    BeginSubmit,
    DispatchSucceeded,
    DispatchFailed(String),
    /// Fired 1s after a successful dispatch.
    ClearFields,
    /// Fired 3s after a successful dispatch.
    ResetPhase,
    DismissError,
}

impl ContactForm {
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.insert("name", "Name is required");
        }

        if self.email.trim().is_empty() {
            errors.insert("email", "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.insert("email", "Email is invalid");
        }

        if self.phone.trim().is_empty() {
            errors.insert("phone", "Phone number is required");
        } else if !is_valid_phone(&self.phone) {
            errors.insert("phone", "Phone number is invalid");
        }

        if self.message.trim().is_empty() {
            errors.insert("message", "Message is required");
        }

        errors
    }

    pub fn params(&self) -> ContactParams {
        ContactParams {
            to_name: config::PRACTITIONER_NAME.to_string(),
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
            reply_to: self.email.clone(),
        }
    }

    pub fn submit_attempt(&self) -> SubmitAttempt<ContactParams> {
        if self.phase == FormPhase::Submitting {
            return SubmitAttempt::InFlight;
        }
        let errors = self.validate();
        if errors.is_empty() {
            SubmitAttempt::Ready(self.params())
        } else {
            SubmitAttempt::Invalid(errors)
        }
    }
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: ContactAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::SetName(value) => {
                next.name = value;
                next.errors.remove("name");
            }
            ContactAction::SetEmail(value) => {
                next.email = value;
                next.errors.remove("email");
            }
            ContactAction::SetPhone(value) => {
                next.phone = value;
                next.errors.remove("phone");
            }
            ContactAction::SetMessage(value) => {
                next.message = value;
                next.errors.remove("message");
            }
            ContactAction::Rejected(errors) => {
                next.errors = errors;
            }
            ContactAction::BeginSubmit => {
                if next.phase == FormPhase::Submitting {
                    return self;
                }
                next.phase = FormPhase::Submitting;
                next.dispatch_error = None;
            }
            ContactAction::DispatchSucceeded => {
                next.phase = FormPhase::Submitted;
            }
            ContactAction::DispatchFailed(reason) => {
                next.phase = FormPhase::Editing;
                next.dispatch_error = Some(reason);
            }
            ContactAction::ClearFields => {
                next.name.clear();
                next.email.clear();
                next.phone.clear();
                next.message.clear();
                next.errors.clear();
            }
            ContactAction::ResetPhase => {
                next.phase = FormPhase::Editing;
            }
            ContactAction::DismissError => {
                next.dispatch_error = None;
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Sayli Kulkarni".to_string(),
            email: "sayli@example.com".to_string(),
            phone: "+14155551234".to_string(),
            message: "I would like a consultation.".to_string(),
            ..Default::default()
        }
    }

    fn apply(form: ContactForm, action: ContactAction) -> ContactForm {
        (*Rc::new(form).reduce(action)).clone()
    }

    #[test]
    fn validate_passes_for_well_formed_input() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn validate_flags_exactly_the_missing_fields() {
        let mut form = filled();
        form.name = "   ".to_string();
        form.message = String::new();

        let errors = form.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some(&"Name is required"));
        assert_eq!(errors.get("message"), Some(&"Message is required"));
        assert!(!errors.contains_key("email"));
        assert!(!errors.contains_key("phone"));
    }

    #[test]
    fn validate_distinguishes_missing_from_invalid() {
        let mut form = filled();
        form.email = "invalid".to_string();
        form.phone = "abc".to_string();

        let errors = form.validate();
        assert_eq!(errors.get("email"), Some(&"Email is invalid"));
        assert_eq!(errors.get("phone"), Some(&"Phone number is invalid"));

        form.email = String::new();
        assert_eq!(form.validate().get("email"), Some(&"Email is required"));
    }

    #[test]
    fn editing_a_field_clears_only_its_own_error() {
        let form = ContactForm::default();
        let errors = form.validate();
        let form = apply(form, ContactAction::Rejected(errors));
        assert_eq!(form.errors.len(), 4);

        let form = apply(form, ContactAction::SetEmail("a@b.com".to_string()));
        assert!(!form.errors.contains_key("email"));
        assert_eq!(form.errors.len(), 3);
    }

    #[test]
    fn invalid_form_never_reaches_dispatch() {
        let form = ContactForm::default();
        match form.submit_attempt() {
            SubmitAttempt::Invalid(errors) => assert_eq!(errors.len(), 4),
            other => panic!("expected Invalid, got {other:?}"),
        }
        assert_eq!(form.phase, FormPhase::Editing);
    }

    #[test]
    fn submit_while_in_flight_is_a_no_op() {
        let mut form = filled();
        form.phase = FormPhase::Submitting;
        assert_eq!(form.submit_attempt(), SubmitAttempt::InFlight);

        // A second BeginSubmit must not disturb the in-flight state.
        let again = apply(form.clone(), ContactAction::BeginSubmit);
        assert_eq!(again, form);
    }

    #[test]
    fn successful_dispatch_walks_the_full_phase_ladder() {
        let form = filled();
        let params = match form.submit_attempt() {
            SubmitAttempt::Ready(params) => params,
            other => panic!("expected Ready, got {other:?}"),
        };
        assert_eq!(params.from_email, "sayli@example.com");
        assert_eq!(params.reply_to, "sayli@example.com");
        assert_eq!(params.to_name, config::PRACTITIONER_NAME);

        let form = apply(form, ContactAction::BeginSubmit);
        assert_eq!(form.phase, FormPhase::Submitting);

        let form = apply(form, ContactAction::DispatchSucceeded);
        assert_eq!(form.phase, FormPhase::Submitted);
        // Fields survive until the delayed clear so the success view can
        // still show them.
        assert_eq!(form.name, "Sayli Kulkarni");

        let form = apply(form, ContactAction::ClearFields);
        assert!(form.name.is_empty());
        assert!(form.errors.is_empty());
        assert_eq!(form.phase, FormPhase::Submitted);

        let form = apply(form, ContactAction::ResetPhase);
        assert_eq!(form.phase, FormPhase::Editing);
    }

    #[test]
    fn failed_dispatch_keeps_fields_for_retry() {
        let form = apply(filled(), ContactAction::BeginSubmit);
        let form = apply(
            form,
            ContactAction::DispatchFailed("The service is unavailable".to_string()),
        );

        assert_eq!(form.phase, FormPhase::Editing);
        assert_eq!(
            form.dispatch_error.as_deref(),
            Some("The service is unavailable")
        );
        assert_eq!(form.name, "Sayli Kulkarni");
        assert_eq!(form.message, "I would like a consultation.");
    }

    #[test]
    fn params_serialize_with_the_template_keys() {
        let value = serde_json::to_value(filled().params()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 6);
        for key in ["to_name", "from_name", "from_email", "phone", "message", "reply_to"] {
            assert!(object.contains_key(key), "missing key {key}");
        }
    }
}
