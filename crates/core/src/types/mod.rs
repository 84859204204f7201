//! Core types for corpdir.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod address;
pub mod company;
pub mod contact;
pub mod email;
pub mod id;
pub mod phone;
pub mod web_url;

pub use address::Address;
pub use company::{CompanyInput, CompanyRecord};
pub use contact::ContactPerson;
pub use email::{Email, EmailError};
pub use id::*;
pub use phone::{PhoneError, PhoneNumber, PhonePolicy};
pub use web_url::{WebUrl, WebUrlError};
