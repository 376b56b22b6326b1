//! Logical keys in the ledger namespace

/// Key holding the serialized claim record
pub const CLAIM_KEY: &str = "claim";

/// Key under which the current stage is exposed.
///
/// Nothing writes this key; readers receive a projection of the claim
/// record's status.
pub const CURRENT_STATE_KEY: &str = "current_state";
