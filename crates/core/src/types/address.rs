//! Postal address type.

use serde::{Deserialize, Serialize};

/// A postal address as the backend stores it.
///
/// All fields are plain strings; validation happens at the form boundary.
/// Field names serialize in the backend's camelCase wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}
