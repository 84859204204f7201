//! Primary contact person type.

use serde::{Deserialize, Serialize};

/// The person listed as a company's primary contact.
///
/// Plain strings mirroring the wire format; validation happens at the form
/// boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPerson {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl ContactPerson {
    /// First and last name joined for display.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_owned()
    }
}
