//! Validates fields against the page and renders the outcome.

use std::sync::LazyLock;

use pagedom::{Page, Selector};

use super::render::{clear_field_error, show_field_error};
use super::result::{FieldError, ValidationResult};
use super::rules::{Field, Rule, RuleSet, Trigger};
use super::state::{GROUP_SELECTOR, SUCCESS_CLASS, Validity};

static REQUIRED_INPUTS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("input[required]").expect("static selector"));

/// Checks fields with a [`RuleSet`] and reflects the result on their
/// `.form-group`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldValidator {
    rules: RuleSet,
}

impl FieldValidator {
    pub fn new(min_password_length: usize) -> Self {
        Self {
            rules: RuleSet::new(min_password_length),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Run the rules against a field without touching the page.
    pub fn check(&self, field: &Field, trigger: Trigger) -> Option<Rule> {
        self.rules.first_failure(field, trigger)
    }

    /// Validate every required input of a form.
    ///
    /// Each field's group is reset before its rules run, so repeated calls
    /// on unchanged values leave the page in the same state. A missing form
    /// validates as `Valid`.
    pub fn validate_all(&self, page: &mut Page, form_id: &str) -> ValidationResult {
        let mut errors = Vec::new();

        for input_id in page.query_all_within(form_id, &REQUIRED_INPUTS) {
            let Some(field) = page.element(&input_id).map(Field::from_element) else {
                continue;
            };
            let group_id = page.closest(&input_id, &GROUP_SELECTOR);
            if let Some(group_id) = &group_id {
                clear_field_error(page, group_id);
            }

            if let Some(rule) = self.check(&field, Trigger::Submit) {
                let message = rule.message();
                if let Some(group_id) = &group_id {
                    show_field_error(page, group_id, &message);
                }
                errors.push(FieldError {
                    field_id: input_id,
                    group_id,
                    message,
                });
            }
        }

        log::debug!("validate_all({form_id}): {} invalid field(s)", errors.len());
        ValidationResult::from_errors(errors)
    }

    /// Validate a single field as focus leaves it.
    ///
    /// Unlike submit validation this looks at optional fields too, and a
    /// passing field's group gains `success`. Returns None if the input is
    /// not on the page.
    pub fn validate_on_blur(&self, page: &mut Page, input_id: &str) -> Option<Validity> {
        let field = Field::from_element(page.element(input_id)?);
        let group_id = page.closest(input_id, &GROUP_SELECTOR);
        if let Some(group_id) = &group_id {
            clear_field_error(page, group_id);
        }

        let validity = match self.check(&field, Trigger::Blur) {
            Some(rule) => {
                if let Some(group_id) = &group_id {
                    show_field_error(page, group_id, &rule.message());
                }
                Validity::Error
            }
            None => {
                if let Some(group) = group_id.as_deref().and_then(|id| page.element_mut(id)) {
                    group.add_class(SUCCESS_CLASS);
                }
                Validity::Success
            }
        };

        log::debug!("validate_on_blur({input_id}): {validity:?}");
        Some(validity)
    }
}
