//! Consultation form: typed input struct with derive-declared rules.
//!
//! Validation failures never become server errors; they are collected into a
//! field→message map and rendered inline next to the form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::Category;

/// Raw form fields as posted by the browser. Every field defaults to empty
/// so a hand-crafted POST with missing keys still reaches validation instead
/// of failing to deserialize.
#[derive(Debug, Default, Clone, Deserialize, Serialize, Validate)]
pub struct ConsultationForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,

    // The email rule treats an empty string as valid, so the two rules
    // produce exactly one message each: missing vs. malformed.
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Email address is required."),
        email(message = "Enter a valid email address.")
    )]
    pub email: String,

    /// Free text on purpose; the original form never constrained it.
    #[serde(default)]
    pub age: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Message is required."))]
    pub message: String,
}

/// One message per failed field, keyed by field name.
pub type FieldErrors = BTreeMap<String, String>;

/// A fully validated field bundle, ready for the store.
#[derive(Debug, Clone)]
pub struct ConsultationSubmission {
    pub name: String,
    pub email: String,
    pub age: String,
    pub category: Category,
    pub message: String,
}

impl ConsultationForm {
    /// Run all rules. On success returns the validated bundle; on failure
    /// returns per-field error text for redisplay. Nothing is stored either
    /// way.
    pub fn into_submission(self) -> Result<ConsultationSubmission, FieldErrors> {
        match self.validate() {
            Ok(()) => Ok(ConsultationSubmission {
                name: self.name,
                email: self.email,
                age: self.age,
                category: Category::parse_or_default(&self.category),
                message: self.message,
            }),
            Err(errors) => Err(errors
                .field_errors()
                .into_iter()
                .map(|(field, errs)| (field.to_string(), first_message(errs)))
                .collect()),
        }
    }
}

/// Pick the message to display for a field. The required-ness rule wins over
/// the shape rule when both fail.
fn first_message(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .find(|e| e.code == "length")
        .or_else(|| errors.first())
        .and_then(|e| e.message.as_ref())
        .map(|m| m.to_string())
        .unwrap_or_else(|| "Invalid value.".to_owned())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    fn filled() -> ConsultationForm {
        ConsultationForm {
            name: "Aiko".into(),
            email: "aiko@example.com".into(),
            age: "29".into(),
            category: "breastfeeding".into(),
            message: "feeding question".into(),
        }
    }

    #[test]
    fn valid_form_becomes_a_submission() {
        let submission = filled().into_submission().expect("should validate");
        assert_eq!(submission.name, "Aiko");
        assert_eq!(submission.category, Category::Breastfeeding);
    }

    #[test]
    fn missing_name_is_rejected() {
        let mut form = filled();
        form.name.clear();
        let errors = form.into_submission().unwrap_err();
        assert_eq!(errors.get("name").map(String::as_str), Some("Name is required."));
        assert!(!errors.contains_key("email"));
    }

    #[test]
    fn missing_email_gets_the_required_message() {
        let mut form = filled();
        form.email.clear();
        let errors = form.into_submission().unwrap_err();
        assert_eq!(
            errors.get("email").map(String::as_str),
            Some("Email address is required.")
        );
    }

    #[test]
    fn malformed_email_gets_the_shape_message() {
        let mut form = filled();
        form.email = "not-an-email".into();
        let errors = form.into_submission().unwrap_err();
        assert_eq!(
            errors.get("email").map(String::as_str),
            Some("Enter a valid email address.")
        );
    }

    #[test]
    fn all_required_fields_missing_reports_each_one() {
        let errors = ConsultationForm::default().into_submission().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("message"));
    }

    #[test]
    fn age_and_category_are_never_required() {
        let mut form = filled();
        form.age.clear();
        form.category.clear();
        let submission = form.into_submission().expect("should validate");
        assert_eq!(submission.category, Category::Pregnancy);
        assert!(submission.age.is_empty());
    }
}
