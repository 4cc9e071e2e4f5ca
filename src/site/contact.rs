//! Contact form state.  Submitting never transmits anything.

use thiserror::Error;

use crate::notify::{Notifier, CONTACT_SUCCESS};

/// Form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("required field '{}' is empty", .0.label())]
    MissingField(ContactField),
}

/// Values typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Replaces the value of one field.
    pub fn update(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Checks that every required field has content.
    pub fn validate(&self) -> Result<(), ContactError> {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            if self.value(field).trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        Ok(())
    }

    /// Validates, shows the static confirmation and clears the form.
    pub fn submit(&mut self, notifier: &mut dyn Notifier) -> Result<(), ContactError> {
        self.validate()?;
        notifier.success(CONTACT_SUCCESS);
        *self = Self::default();
        Ok(())
    }
}
