use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::use_toast;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub const SUCCESS_MESSAGE: &str = "Thanks! We'll be in touch shortly.";

/// Inline validation messages.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("required field")]
    Required,
    #[error("invalid email")]
    InvalidEmail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn required(self) -> bool {
        !matches!(self, Field::Message)
    }

    pub fn is_email(self) -> bool {
        matches!(self, Field::Email)
    }

    /// Blank required fields fail first; emails are then checked against the
    /// pattern untrimmed.
    pub fn validate(self, value: &str) -> Result<(), FieldError> {
        if value.trim().is_empty() {
            return if self.required() {
                Err(FieldError::Required)
            } else {
                Ok(())
            };
        }
        if self.is_email() && !EMAIL_PATTERN.is_match(value) {
            return Err(FieldError::InvalidEmail);
        }
        Ok(())
    }
}

pub type FieldErrors = BTreeMap<Field, FieldError>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let errors: FieldErrors = Field::ALL
            .iter()
            .filter_map(|field| field.validate(self.value(*field)).err().map(|e| (*field, e)))
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// What the form shows after a submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub success: Option<&'static str>,
}

/// Validates without sending anything anywhere. A valid form comes back empty
/// with the success message; an invalid one keeps its values.
pub fn submit(form: &ContactForm) -> SubmitOutcome {
    match form.validate() {
        Ok(()) => SubmitOutcome {
            form: ContactForm::default(),
            errors: FieldErrors::new(),
            success: Some(SUCCESS_MESSAGE),
        },
        Err(errors) => SubmitOutcome {
            form: form.clone(),
            errors,
            success: None,
        },
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let outcome = use_state(SubmitOutcome::default);
    let toast = use_toast();

    let on_field = |field: Field| {
        let outcome = outcome.clone();
        Callback::from(move |e: InputEvent| {
            let value = e
                .target_dyn_into::<HtmlInputElement>()
                .map(|input| input.value())
                .or_else(|| e.target_dyn_into::<HtmlTextAreaElement>().map(|area| area.value()))
                .unwrap_or_default();
            let mut next = (*outcome).clone();
            next.form.set(field, value);
            outcome.set(next);
        })
    };

    let onsubmit = {
        let outcome = outcome.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let next = submit(&outcome.form);
            if next.success.is_some() {
                toast.show("Message sent");
            }
            outcome.set(next);
        })
    };

    let error_for = |field: Field| {
        outcome
            .errors
            .get(&field)
            .map(|e| e.to_string())
            .unwrap_or_default()
    };

    html! {
        <form class="contact-form" novalidate={true} {onsubmit}>
            <label class="field">
                <span>{"Name"}</span>
                <input
                    type="text"
                    name="name"
                    value={outcome.form.name.clone()}
                    oninput={on_field(Field::Name)}
                />
                <span class="error">{error_for(Field::Name)}</span>
            </label>
            <label class="field">
                <span>{"Email"}</span>
                <input
                    type="email"
                    name="email"
                    value={outcome.form.email.clone()}
                    oninput={on_field(Field::Email)}
                />
                <span class="error">{error_for(Field::Email)}</span>
            </label>
            <label class="field">
                <span>{"Message"}</span>
                <textarea
                    name="message"
                    rows="4"
                    value={outcome.form.message.clone()}
                    oninput={on_field(Field::Message)}
                />
                <span class="error">{error_for(Field::Message)}</span>
            </label>
            <button class="btn btn-primary" type="submit" data-magnetic="">{"Send"}</button>
            <p class="form-success" role="status">{outcome.success.unwrap_or_default()}</p>
        </form>
    }
}
