//! The sectioned form controller.

use corpdir_core::{CompanyId, CompanyRecord, PhonePolicy};
use tracing::warn;

use crate::validate::{Field, ValidationReport, validate_field, validate_record, validate_section};

use super::{DraftStore, FormValues, Section};

/// Whether the form is creating a new record or editing an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(CompanyId),
}

/// Outcome of asking the wizard to move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The active section passed its checks and the wizard moved on.
    Moved(Section),
    /// The active section has errors; `first_invalid` should receive focus.
    Blocked { first_invalid: Field },
    /// The last section passed; the form is ready to submit.
    AtEnd,
}

/// State of one open profile form: raw values, the active section, the
/// visible validation errors and the field holding focus.
///
/// Moving forward validates the section being left; moving backward and
/// jumping between tabs never does. In create mode every edit is mirrored to
/// the [`DraftStore`], and a saved draft is restored when the form opens.
pub struct CompanyForm {
    values: FormValues,
    active: Section,
    errors: ValidationReport,
    focus: Option<Field>,
    mode: FormMode,
    draft: Option<DraftStore>,
    phone_policy: PhonePolicy,
    touched: bool,
}

impl CompanyForm {
    /// Opens a blank create form, restoring the saved draft if one loads.
    #[must_use]
    pub fn new_create(draft: DraftStore) -> Self {
        let values = draft.load().unwrap_or_default();
        Self {
            values,
            active: Section::first(),
            errors: ValidationReport::new(),
            focus: None,
            mode: FormMode::Create,
            draft: Some(draft),
            phone_policy: PhonePolicy::default(),
            touched: false,
        }
    }

    /// Opens an edit form seeded from an existing record. Edits are not
    /// drafted; abandoning the form loses nothing but the edits themselves.
    #[must_use]
    pub fn new_edit(record: &CompanyRecord) -> Self {
        Self {
            values: FormValues::from_record(record),
            active: Section::first(),
            errors: ValidationReport::new(),
            focus: None,
            mode: FormMode::Edit(record.id.clone()),
            draft: None,
            phone_policy: PhonePolicy::default(),
            touched: false,
        }
    }

    /// Replaces the phone validation policy.
    #[must_use]
    pub fn with_phone_policy(mut self, policy: PhonePolicy) -> Self {
        self.phone_policy = policy;
        self
    }

    // ==================== Editing ====================

    /// Records a keystroke-level change to one field.
    ///
    /// A field currently showing an error is re-checked immediately so the
    /// message disappears as soon as the input becomes valid; fields without
    /// a visible error wait for the next section validation.
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        self.values.set_text(field, value);
        self.touched = true;
        self.refresh_if_errored(field);
        // Count edits move the derived total with them.
        if matches!(field, Field::FullTimeEmployees | Field::PartTimeEmployees) {
            self.refresh_if_errored(Field::TotalEmployees);
        }
        self.save_draft();
    }

    /// Flips the mailing address toggle.
    ///
    /// Turning it off retires any mailing detail errors on the spot since
    /// those fields are no longer part of the record being built.
    pub fn set_mailing_differs(&mut self, differs: bool) {
        self.values.set_mailing_differs(differs);
        self.touched = true;
        if !differs {
            for field in Field::ALL {
                if field.is_mailing_detail() {
                    self.errors.clear_field(field);
                }
            }
        }
        self.save_draft();
    }

    // ==================== Navigation ====================

    /// Validates the active section and moves forward if it passes.
    pub fn next(&mut self) -> Advance {
        let report = validate_section(self.active, &self.values, self.phone_policy);
        self.errors.clear_section(self.active);
        if let Some(first_invalid) = report.first_invalid() {
            self.errors.merge(report);
            self.focus = Some(first_invalid);
            return Advance::Blocked { first_invalid };
        }
        self.focus = None;
        match self.active.next() {
            Some(section) => {
                self.active = section;
                Advance::Moved(section)
            }
            None => Advance::AtEnd,
        }
    }

    /// Moves back one section without validating anything.
    pub fn previous(&mut self) -> Option<Section> {
        let section = self.active.previous()?;
        self.active = section;
        self.focus = None;
        Some(section)
    }

    /// Switches straight to `section`. Tab clicks are never gated on the
    /// section being left.
    pub fn jump_to(&mut self, section: Section) {
        self.active = section;
        self.focus = None;
    }

    // ==================== Validation ====================

    /// Validates every section at once, as the submit action does, and
    /// focuses the first failure.
    pub fn validate_all(&mut self) -> &ValidationReport {
        self.errors = validate_record(&self.values, self.phone_policy);
        self.focus = self.errors.first_invalid();
        &self.errors
    }

    /// True when `section` currently shows at least one error.
    #[must_use]
    pub fn section_has_errors(&self, section: Section) -> bool {
        self.errors.has_section_errors(section)
    }

    /// The message currently shown under one field, if any.
    #[must_use]
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.error(field)
    }

    /// Every error currently on display.
    #[must_use]
    pub const fn errors(&self) -> &ValidationReport {
        &self.errors
    }

    // ==================== Inspection ====================

    #[must_use]
    pub const fn active_section(&self) -> Section {
        self.active
    }

    #[must_use]
    pub const fn focused_field(&self) -> Option<Field> {
        self.focus
    }

    #[must_use]
    pub const fn values(&self) -> &FormValues {
        &self.values
    }

    #[must_use]
    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// True once the user has changed anything since the form opened.
    #[must_use]
    pub const fn is_touched(&self) -> bool {
        self.touched
    }

    /// Drops the saved draft, for an explicit "discard" action. A form
    /// without a draft store ignores this.
    pub fn discard_draft(&self) {
        if let Some(draft) = &self.draft
            && let Err(error) = draft.discard()
        {
            warn!(%error, "failed to discard draft");
        }
    }

    fn refresh_if_errored(&mut self, field: Field) {
        if self.errors.error(field).is_none() {
            return;
        }
        match validate_field(field, &self.values, self.phone_policy) {
            Some(message) => self.errors.insert(field, message),
            None => self.errors.clear_field(field),
        }
    }

    fn save_draft(&self) {
        if self.mode != FormMode::Create {
            return;
        }
        if let Some(draft) = &self.draft
            && let Err(error) = draft.save(&self.values)
        {
            warn!(%error, "failed to save draft, edits continue in memory");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use crate::storage::{KeyValueStore, MemoryStore, keys};

    use super::*;

    fn create_form() -> (CompanyForm, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        let draft = DraftStore::new(Arc::clone(&store) as Arc<dyn KeyValueStore>);
        (CompanyForm::new_create(draft), store)
    }

    fn fill_company(form: &mut CompanyForm) {
        form.set_text(Field::LegalName, "Acme Inc.");
        form.set_text(Field::CompanyEmail, "info@acme.com");
        form.set_text(Field::CompanyPhone, "+1 555 0100");
        form.set_text(Field::Industry, "Aerospace");
        form.set_text(Field::StateOfIncorporation, "Delaware");
    }

    fn fill_address(form: &mut CompanyForm) {
        form.set_text(Field::RegisteredStreet, "1 Rocket Rd");
        form.set_text(Field::RegisteredCity, "Hawthorne");
        form.set_text(Field::RegisteredState, "CA");
        form.set_text(Field::RegisteredCountry, "USA");
        form.set_text(Field::RegisteredZip, "90250");
    }

    fn fill_contact(form: &mut CompanyForm) {
        form.set_text(Field::ContactFirstName, "Ada");
        form.set_text(Field::ContactLastName, "Lovelace");
        form.set_text(Field::ContactEmail, "ada@acme.com");
        form.set_text(Field::ContactPhone, "+1 555 0101");
    }

    #[test]
    fn test_opens_on_first_section_untouched() {
        let (form, _) = create_form();
        assert_eq!(form.active_section(), Section::Company);
        assert!(!form.is_touched());
        assert_eq!(form.focused_field(), None);
    }

    #[test]
    fn test_next_blocks_on_invalid_section_and_focuses_first() {
        let (mut form, _) = create_form();
        let advance = form.next();
        assert_eq!(
            advance,
            Advance::Blocked {
                first_invalid: Field::LegalName
            }
        );
        assert_eq!(form.active_section(), Section::Company);
        assert_eq!(form.focused_field(), Some(Field::LegalName));
        assert!(form.section_has_errors(Section::Company));
        // Sections not yet visited show no errors.
        assert!(!form.section_has_errors(Section::Address));
    }

    #[test]
    fn test_next_moves_through_valid_sections() {
        let (mut form, _) = create_form();
        fill_company(&mut form);
        assert_eq!(form.next(), Advance::Moved(Section::Employees));
        // Blank counts coerce to zero, so employees passes untouched.
        assert_eq!(form.next(), Advance::Moved(Section::Address));
        fill_address(&mut form);
        assert_eq!(form.next(), Advance::Moved(Section::Contact));
        fill_contact(&mut form);
        assert_eq!(form.next(), Advance::AtEnd);
        assert_eq!(form.active_section(), Section::Contact);
    }

    #[test]
    fn test_previous_and_jump_never_validate() {
        let (mut form, _) = create_form();
        assert_eq!(form.previous(), None);
        form.jump_to(Section::Contact);
        assert_eq!(form.active_section(), Section::Contact);
        assert!(!form.section_has_errors(Section::Company));
        assert_eq!(form.previous(), Some(Section::Address));
        assert_eq!(form.previous(), Some(Section::Employees));
        assert_eq!(form.previous(), Some(Section::Company));
        assert_eq!(form.previous(), None);
    }

    #[test]
    fn test_fixing_a_field_clears_its_error_immediately() {
        let (mut form, _) = create_form();
        form.next();
        assert_eq!(form.error(Field::LegalName), Some("Legal name is required"));

        form.set_text(Field::LegalName, "Acme Inc.");
        assert_eq!(form.error(Field::LegalName), None);
        // Untouched invalid fields keep their messages until the next pass.
        assert_eq!(form.error(Field::CompanyEmail), Some("Invalid email address"));
    }

    #[test]
    fn test_fields_without_visible_errors_wait_for_next_pass() {
        let (mut form, _) = create_form();
        form.set_text(Field::CompanyEmail, "garbage");
        assert_eq!(form.error(Field::CompanyEmail), None);
        form.next();
        assert_eq!(form.error(Field::CompanyEmail), Some("Invalid email address"));
    }

    #[test]
    fn test_create_mode_saves_draft_on_every_edit() {
        let (mut form, store) = create_form();
        form.set_text(Field::LegalName, "Acme Inc.");
        let raw = store.get(keys::DRAFT).unwrap().unwrap();
        assert!(raw.contains("Acme Inc."));

        form.set_text(Field::Industry, "Aerospace");
        let raw = store.get(keys::DRAFT).unwrap().unwrap();
        assert!(raw.contains("Aerospace"));
    }

    #[test]
    fn test_create_mode_restores_saved_draft() {
        let store = Arc::new(MemoryStore::default());
        let draft = DraftStore::new(Arc::clone(&store) as Arc<dyn KeyValueStore>);
        let mut first = CompanyForm::new_create(draft.clone());
        first.set_text(Field::LegalName, "Resumed LLC");
        first.set_text(Field::FullTimeEmployees, "5");
        drop(first);

        let second = CompanyForm::new_create(draft);
        assert_eq!(second.values().text(Field::LegalName), "Resumed LLC");
        assert_eq!(second.values().text(Field::TotalEmployees), "5");
        assert!(!second.is_touched());
    }

    #[test]
    fn test_corrupt_draft_opens_blank() {
        let store = Arc::new(MemoryStore::default());
        store.set(keys::DRAFT, "][").unwrap();
        let draft = DraftStore::new(Arc::clone(&store) as Arc<dyn KeyValueStore>);
        let form = CompanyForm::new_create(draft);
        assert_eq!(form.values().text(Field::LegalName), "");
    }

    #[test]
    fn test_edit_mode_never_writes_the_draft_slot() {
        let record = sample_record();
        let mut form = CompanyForm::new_edit(&record);
        assert_eq!(form.mode(), &FormMode::Edit(CompanyId::new("c-1")));
        assert_eq!(form.values().text(Field::LegalName), "Acme Inc.");
        form.set_text(Field::LegalName, "Acme International Inc.");
        // No draft store is attached, so there is nothing to assert against
        // storage; the mode check above is the contract.
        assert!(form.is_touched());
    }

    #[test]
    fn test_mailing_toggle_off_retires_mailing_errors() {
        let (mut form, _) = create_form();
        fill_company(&mut form);
        form.next();
        form.next();
        fill_address(&mut form);
        form.set_mailing_differs(true);
        assert!(matches!(form.next(), Advance::Blocked { .. }));
        assert_eq!(form.error(Field::MailingStreet), Some("Street is required"));

        form.set_mailing_differs(false);
        assert_eq!(form.error(Field::MailingStreet), None);
        assert_eq!(form.next(), Advance::Moved(Section::Contact));
    }

    #[test]
    fn test_validate_all_covers_every_section() {
        let (mut form, _) = create_form();
        let report = form.validate_all();
        assert!(report.has_section_errors(Section::Company));
        assert!(report.has_section_errors(Section::Address));
        assert!(report.has_section_errors(Section::Contact));
        assert_eq!(form.focused_field(), Some(Field::LegalName));
    }

    #[test]
    fn test_revalidating_a_section_drops_stale_errors() {
        let (mut form, _) = create_form();
        form.next();
        assert!(form.section_has_errors(Section::Company));
        fill_company(&mut form);
        assert_eq!(form.next(), Advance::Moved(Section::Employees));
        assert!(!form.section_has_errors(Section::Company));
    }

    fn sample_record() -> corpdir_core::CompanyRecord {
        use corpdir_core::{Address, ContactPerson};
        corpdir_core::CompanyRecord {
            id: CompanyId::new("c-1"),
            legal_name: "Acme Inc.".to_owned(),
            email: "info@acme.com".to_owned(),
            phone: "+1 555 0100".to_owned(),
            fax: None,
            website: None,
            industry: "Aerospace".to_owned(),
            state_of_incorporation: "Delaware".to_owned(),
            number_of_full_time_employees: 10,
            number_of_part_time_employees: 2,
            total_number_of_employees: 12,
            facebook_company_page: None,
            linked_in_company_page: None,
            logo_s3_key: None,
            other_information: None,
            is_mailing_address_different_from_registered_address: false,
            registered_address: Address {
                street: "1 Rocket Rd".to_owned(),
                city: "Hawthorne".to_owned(),
                state: "CA".to_owned(),
                country: "USA".to_owned(),
                zip_code: "90250".to_owned(),
            },
            mailing_address: None,
            primary_contact_person: ContactPerson {
                first_name: "Ada".to_owned(),
                last_name: "Lovelace".to_owned(),
                email: "ada@acme.com".to_owned(),
                phone: "+1 555 0101".to_owned(),
            },
        }
    }
}
