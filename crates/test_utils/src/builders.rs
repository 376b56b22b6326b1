//! Test Data Builders
//!
//! Builder patterns for claims and policyholders. Tests set only the fields
//! they care about; everything else defaults to the canonical fixture.

use domain_claims::{Claim, PolicyHolder, Stage};

use crate::fixtures::{HolderFixtures, INCIDENT_DATE};

/// Builder for [`PolicyHolder`] test data
#[derive(Debug, Clone)]
pub struct PolicyHolderBuilder {
    fields: [String; 8],
}

impl Default for PolicyHolderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyHolderBuilder {
    /// Starts from the canonical holder
    pub fn new() -> Self {
        Self {
            fields: HolderFixtures::jane_doe_fields(),
        }
    }

    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.fields[0] = value.into();
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.fields[1] = value.into();
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.fields[2] = value.into();
        self
    }

    pub fn national_id(mut self, value: impl Into<String>) -> Self {
        self.fields[3] = value.into();
        self
    }

    pub fn birth_date(mut self, value: impl Into<String>) -> Self {
        self.fields[4] = value.into();
        self
    }

    pub fn policy_id(mut self, value: impl Into<String>) -> Self {
        self.fields[5] = value.into();
        self
    }

    pub fn vin(mut self, value: impl Into<String>) -> Self {
        self.fields[6] = value.into();
        self
    }

    pub fn licence_plate_number(mut self, value: impl Into<String>) -> Self {
        self.fields[7] = value.into();
        self
    }

    /// The fields in argument order
    pub fn to_args(&self) -> Vec<String> {
        self.fields.to_vec()
    }

    pub fn build(self) -> PolicyHolder {
        PolicyHolder::from_fields(self.fields)
    }
}

/// Builder for [`Claim`] test data
#[derive(Debug, Clone)]
pub struct ClaimBuilder {
    id: String,
    incident_date: String,
    holder: PolicyHolder,
    status: Stage,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    pub fn new() -> Self {
        Self {
            id: String::new(),
            incident_date: INCIDENT_DATE.to_string(),
            holder: HolderFixtures::jane_doe(),
            status: Stage::InitClaim,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn incident_date(mut self, date: impl Into<String>) -> Self {
        self.incident_date = date.into();
        self
    }

    pub fn holder(mut self, holder: PolicyHolder) -> Self {
        self.holder = holder;
        self
    }

    pub fn status(mut self, status: Stage) -> Self {
        self.status = status;
        self
    }

    pub fn build(self) -> Claim {
        let mut claim = Claim::new(self.id, self.incident_date, self.holder);
        claim.status = self.status;
        claim
    }

    /// The nine `submitClaim` arguments describing this claim
    pub fn to_submit_args(&self) -> Vec<String> {
        let holder = &self.holder;
        vec![
            self.incident_date.clone(),
            holder.first_name().to_string(),
            holder.last_name().to_string(),
            holder.email().to_string(),
            holder.national_id().to_string(),
            holder.birth_date().to_string(),
            holder.policy_id().to_string(),
            holder.vin().to_string(),
            holder.licence_plate_number().to_string(),
        ]
    }
}
