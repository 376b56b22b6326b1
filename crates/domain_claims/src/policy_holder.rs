//! Policyholder identity

use serde::{Deserialize, Serialize};

/// The insured individual named on a claim
///
/// All attributes are opaque strings; dates are not parsed. Fields are
/// private so a holder cannot change once it has been created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyHolder {
    first_name: String,
    last_name: String,
    email: String,
    national_id: String,
    birth_date: String,
    policy_id: String,
    vin: String,
    licence_plate_number: String,
}

impl PolicyHolder {
    /// Number of attributes, and of arguments needed to build a holder
    pub const FIELD_COUNT: usize = 8;

    /// Creates a holder from its eight attributes, in this order
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        national_id: impl Into<String>,
        birth_date: impl Into<String>,
        policy_id: impl Into<String>,
        vin: impl Into<String>,
        licence_plate_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            national_id: national_id.into(),
            birth_date: birth_date.into(),
            policy_id: policy_id.into(),
            vin: vin.into(),
            licence_plate_number: licence_plate_number.into(),
        }
    }

    /// Builds a holder from exactly eight ordered fields
    pub fn from_fields(fields: [String; 8]) -> Self {
        let [first_name, last_name, email, national_id, birth_date, policy_id, vin, plate] = fields;
        Self::new(first_name, last_name, email, national_id, birth_date, policy_id, vin, plate)
    }

    /// Returns true if `other` is the same person: every attribute equal,
    /// byte for byte
    pub fn matches(&self, other: &PolicyHolder) -> bool {
        self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.email == other.email
            && self.national_id == other.national_id
            && self.birth_date == other.birth_date
            && self.policy_id == other.policy_id
            && self.vin == other.vin
            && self.licence_plate_number == other.licence_plate_number
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// National identifier (SSN)
    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    pub fn policy_id(&self) -> &str {
        &self.policy_id
    }

    /// Vehicle identification number
    pub fn vin(&self) -> &str {
        &self.vin
    }

    pub fn licence_plate_number(&self) -> &str {
        &self.licence_plate_number
    }
}
