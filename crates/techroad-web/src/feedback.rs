//! Feedback form model and validation.
//!
//! Submissions are validated, logged, and acknowledged. Nothing is stored.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    #[default]
    Suggestion,
    Bug,
    Question,
    Compliment,
}

impl FeedbackType {
    pub const ALL: [FeedbackType; 4] = [
        FeedbackType::Suggestion,
        FeedbackType::Bug,
        FeedbackType::Question,
        FeedbackType::Compliment,
    ];

    pub fn id(self) -> &'static str {
        match self {
            FeedbackType::Suggestion => "suggestion",
            FeedbackType::Bug        => "bug",
            FeedbackType::Question   => "question",
            FeedbackType::Compliment => "compliment",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeedbackType::Suggestion => "Suggestion",
            FeedbackType::Bug        => "Bug Report",
            FeedbackType::Question   => "Question",
            FeedbackType::Compliment => "Compliment",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FeedbackType::Suggestion => "Share your ideas for improvement",
            FeedbackType::Bug        => "Help us fix issues you encounter",
            FeedbackType::Question   => "Ask us anything about our platform",
            FeedbackType::Compliment => "Let us know what you love",
        }
    }

    /// Unknown values fall back to `Suggestion`, the form's default.
    pub fn from_id(id: &str) -> Self {
        Self::ALL.into_iter().find(|t| t.id() == id).unwrap_or_default()
    }
}

/// Form fields in display (and focus) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
    Rating,
}

impl Field {
    pub fn id(self) -> &'static str {
        match self {
            Field::Name    => "name",
            Field::Email   => "email",
            Field::Message => "message",
            Field::Rating  => "rating",
        }
    }
}

pub const MAX_RATING: u8 = 5;

/// Raw form body as posted by the browser.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FeedbackForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub feedback_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidFeedback {
    pub name: String,
    pub email: String,
    pub message: String,
    pub rating: Option<u8>,
    pub feedback_type: FeedbackType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(Vec<(Field, &'static str)>);

impl FieldErrors {
    fn push(&mut self, field: Field, message: &'static str) {
        self.0.push((field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn get(&self, field: Field) -> Option<&'static str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, m)| *m)
    }

    /// Field that should receive focus after a rejected submit.
    pub fn first_field(&self) -> Option<Field> {
        self.0.first().map(|(f, _)| *f)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().copied()
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

impl FeedbackForm {
    pub fn feedback_type(&self) -> FeedbackType {
        FeedbackType::from_id(&self.feedback_type)
    }

    /// Selected star rating; 0 means unset, as does anything out of range.
    pub fn rating(&self) -> u8 {
        match self.rating.trim().parse::<u8>() {
            Ok(r) if r <= MAX_RATING => r,
            _ => 0,
        }
    }

    pub fn validate(&self) -> Result<ValidFeedback, FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.push(Field::Name, "Name is required");
        }

        if self.email.trim().is_empty() {
            errors.push(Field::Email, "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.push(Field::Email, "Please enter a valid email address");
        }

        if self.message.trim().is_empty() {
            errors.push(Field::Message, "Message is required");
        }

        let feedback_type = self.feedback_type();
        let rating = self.rating();
        if feedback_type != FeedbackType::Compliment && rating == 0 {
            errors.push(Field::Rating, "Please select a rating");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidFeedback {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
            rating: (rating > 0).then_some(rating),
            feedback_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FeedbackForm {
        FeedbackForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Great roadmaps".to_string(),
            rating: "4".to_string(),
            feedback_type: "suggestion".to_string(),
        }
    }

    #[test]
    fn test_valid_submission() {
        let valid = valid_form().validate().unwrap();
        assert_eq!(valid.rating, Some(4));
        assert_eq!(valid.feedback_type, FeedbackType::Suggestion);
    }

    #[test]
    fn test_empty_form_reports_every_field_in_order() {
        let errors = FeedbackForm::default().validate().unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::Name, Field::Email, Field::Message, Field::Rating]);
        assert_eq!(errors.first_field(), Some(Field::Name));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let form = FeedbackForm { name: "   ".to_string(), ..valid_form() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@c.d"));

        let form = FeedbackForm { email: "not-an-email".to_string(), ..valid_form() };
        assert_eq!(
            form.validate().unwrap_err().get(Field::Email),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_rating_optional_for_compliments_only() {
        let compliment = FeedbackForm {
            rating: String::new(),
            feedback_type: "compliment".to_string(),
            ..valid_form()
        };
        assert_eq!(compliment.validate().unwrap().rating, None);

        let bug = FeedbackForm { feedback_type: "bug".to_string(), ..compliment };
        assert_eq!(bug.validate().unwrap_err().get(Field::Rating), Some("Please select a rating"));
    }

    #[test]
    fn test_out_of_range_rating_is_unset() {
        let form = FeedbackForm { rating: "9".to_string(), ..valid_form() };
        assert_eq!(form.rating(), 0);
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_unknown_type_defaults_to_suggestion() {
        assert_eq!(FeedbackType::from_id("rant"), FeedbackType::Suggestion);
    }
}
