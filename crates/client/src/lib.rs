//! Corpdir Client - the company profile engine.
//!
//! Everything needed to take a company profile from first keystroke to a
//! submitted record:
//!
//! - [`form`] - the four-section wizard (`company -> employees -> address ->
//!   contact`), its raw field values, and the durable draft
//! - [`validate`] - the typed field schema and the interpreter that checks a
//!   section or the whole record
//! - [`upload`] - the signed-URL logo upload state machine
//! - [`sync`] - create/update submission plus local list reconciliation
//! - [`api`] - the GraphQL registry client behind the [`api::CompanyApi`]
//!   trait so tests can substitute a fake backend
//! - [`storage`] - the injectable key-value port with memory and file
//!   implementations
//! - [`session`] - the stored logged-in flag
//! - [`config`] - environment-based configuration
//!
//! The engine never renders anything; callers own presentation and routing.
//! All wizard state is inspectable synchronously, so flows are testable
//! without a UI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cache;
pub mod config;
pub mod form;
pub mod session;
pub mod storage;
pub mod sync;
pub mod upload;
pub mod validate;

pub use api::{ApiError, CompanyApi, RegistryClient, SignedUrl};
pub use cache::CompanyListCache;
pub use config::{ClientConfig, ConfigError};
pub use form::{Advance, CompanyForm, DraftStore, FormMode, FormValues, Section};
pub use session::{SessionStore, UserSession};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use sync::{Navigation, RecordSync, SubmitError, SubmitOutcome};
pub use upload::{LogoFile, LogoUploader, UploadError, UploadPhase};
pub use validate::{Field, Rule, ValidationReport};
