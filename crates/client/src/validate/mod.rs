//! Declarative validation for the profile form.
//!
//! The form's fields and their checks are data ([`Field`], [`Rule`]); this
//! module interprets that schema against the raw [`FormValues`] and collects
//! the outcome in a [`ValidationReport`]. Reports are keyed by field in form
//! layout order, so [`ValidationReport::first_invalid`] is also the field
//! that should receive focus.

mod rules;
mod schema;

use std::collections::BTreeMap;

use corpdir_core::PhonePolicy;

use crate::form::{FormValues, Section};

pub use rules::{Rule, coerce_count};
pub use schema::Field;

// ==================== Report ====================

/// The messages produced by one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<Field, &'static str>,
}

impl ValidationReport {
    /// An empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with an error.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message for one field, if it failed.
    #[must_use]
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// The first failed field in form layout order.
    #[must_use]
    pub fn first_invalid(&self) -> Option<Field> {
        self.errors.keys().next().copied()
    }

    /// True when any field of `section` failed.
    #[must_use]
    pub fn has_section_errors(&self, section: Section) -> bool {
        self.errors.keys().any(|field| field.section() == section)
    }

    /// Failed fields in form layout order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    /// Failed fields with their messages, in form layout order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(field, msg)| (*field, *msg))
    }

    /// Folds `other` into this report. On shared fields the incoming
    /// message wins, matching a re-run of the same checks.
    pub fn merge(&mut self, other: Self) {
        self.errors.extend(other.errors);
    }

    /// Drops the error recorded for one field.
    pub fn clear_field(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    /// Drops every error belonging to `section` before a fresh pass over
    /// that section is merged in.
    pub fn clear_section(&mut self, section: Section) {
        self.errors.retain(|field, _| field.section() != section);
    }

    pub(crate) fn insert(&mut self, field: Field, message: &'static str) {
        self.errors.insert(field, message);
    }
}

// ==================== Interpreter ====================

/// Checks a single field against its schema rules.
///
/// Mailing address detail fields are skipped while the form says the mailing
/// address equals the registered one; their stale contents must not block
/// submission.
#[must_use]
pub fn validate_field(field: Field, values: &FormValues, policy: PhonePolicy) -> Option<&'static str> {
    if field.is_mailing_detail() && !values.mailing_differs() {
        return None;
    }
    let raw = values.text(field);
    field
        .rules()
        .iter()
        .find_map(|rule| rule.check(raw, policy))
}

/// Checks every field of one wizard section.
#[must_use]
pub fn validate_section(section: Section, values: &FormValues, policy: PhonePolicy) -> ValidationReport {
    let mut report = ValidationReport::new();
    for field in Field::ALL {
        if field.section() != section {
            continue;
        }
        if let Some(message) = validate_field(field, values, policy) {
            report.insert(field, message);
        }
    }
    report
}

/// Checks the whole form, all sections at once.
#[must_use]
pub fn validate_record(values: &FormValues, policy: PhonePolicy) -> ValidationReport {
    let mut report = ValidationReport::new();
    for field in Field::ALL {
        if let Some(message) = validate_field(field, values, policy) {
            report.insert(field, message);
        }
    }
    report
}
