//! Corpdir Core - Shared types library.
//!
//! This crate provides common types used across all corpdir components:
//! - `client` - The profile form engine and backend API client
//! - `cli` - Command-line tools for managing company profiles
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, phone numbers
//!   and URLs, plus the company record shapes shared with the backend

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
