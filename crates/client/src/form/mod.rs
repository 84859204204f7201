//! Wizard state for the company profile form.
//!
//! [`CompanyForm`] owns the raw field values, the active [`Section`], the
//! current [`ValidationReport`](crate::validate::ValidationReport), and the
//! draft persistence hook. Everything here is synchronous; network submission
//! lives in [`sync`](crate::sync).

mod draft;
mod section;
mod values;
mod wizard;

pub use draft::DraftStore;
pub use section::Section;
pub use values::{AddressValues, ContactValues, FormValues};
pub use wizard::{Advance, CompanyForm, FormMode};
