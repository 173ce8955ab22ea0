//! Validation rules and the order they run in.

use std::sync::LazyLock;

use pagedom::Element;
use regex::Regex;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Something, an `@`, something, a dot, something. No whitespace anywhere.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// What kind of input a field is, from its `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Password,
    Other,
}

impl FieldKind {
    pub fn from_type(input_type: &str) -> Self {
        match input_type.to_ascii_lowercase().as_str() {
            "" | "text" => FieldKind::Text,
            "email" => FieldKind::Email,
            "password" => FieldKind::Password,
            _ => FieldKind::Other,
        }
    }
}

/// A snapshot of one input, taken when it is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: String,
    pub value: String,
    pub required: bool,
    pub kind: FieldKind,
}

impl Field {
    pub fn new(id: impl Into<String>, kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            required: false,
            kind,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn from_element(element: &Element) -> Self {
        Self {
            id: element.id.clone(),
            value: element.value.clone(),
            required: element.is_required(),
            kind: FieldKind::from_type(&element.input_type()),
        }
    }
}

/// A single failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Email,
    MinLength(usize),
}

impl Rule {
    pub fn message(&self) -> String {
        match self {
            Rule::Required => REQUIRED_MESSAGE.to_string(),
            Rule::Email => EMAIL_MESSAGE.to_string(),
            Rule::MinLength(min) => format!("Password must be at least {min} characters"),
        }
    }
}

/// When validation runs. Blur checks any field; submit checks required ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Submit,
    Blur,
}

/// The fixed rule order: required, then email shape, then password length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    pub min_password_length: usize,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            min_password_length: 6,
        }
    }
}

impl RuleSet {
    pub fn new(min_password_length: usize) -> Self {
        Self {
            min_password_length,
        }
    }

    /// The first rule the field fails, or None if it passes.
    ///
    /// On blur an empty optional field passes; on submit every field seen is
    /// treated as required.
    pub fn first_failure(&self, field: &Field, trigger: Trigger) -> Option<Rule> {
        let value = field.value.trim();

        if value.is_empty() {
            return match trigger {
                Trigger::Submit => Some(Rule::Required),
                Trigger::Blur if field.required => Some(Rule::Required),
                Trigger::Blur => None,
            };
        }

        match field.kind {
            FieldKind::Email if !is_valid_email(value) => Some(Rule::Email),
            // Browser string length: UTF-16 code units.
            FieldKind::Password if value.encode_utf16().count() < self.min_password_length => {
                Some(Rule::MinLength(self.min_password_length))
            }
            _ => None,
        }
    }
}
