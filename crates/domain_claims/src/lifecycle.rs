//! Claim lifecycle engine
//!
//! Orchestrates claim submission, stage queries, verification and stage
//! advancement against a [`RecordStore`]. The engine keeps no state of its
//! own between calls; everything lives in the store.
//!
//! # Consistency
//!
//! The claim record's `status` is the only stored copy of the stage. The
//! current-stage key is answered by projecting that field at read time, so
//! the two can never disagree.
//!
//! Stage advancement is a read-modify-write of the claim record. The store
//! guarantees atomicity per call only, so two callers advancing the same
//! claim concurrently can lose an update. Ordering of concurrent
//! transactions is the hosting ledger's job.

use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use core_kernel::{RecordStore, CLAIM_KEY, CURRENT_STATE_KEY};

use crate::arguments::{expect_arity, ClaimSubmission};
use crate::claim::{Claim, Stage};
use crate::error::ClaimError;
use crate::inspection::{Inspection, IDENTITY_VERIFIED};
use crate::policy_holder::PolicyHolder;

/// Stage machine for the single claim held in the ledger namespace
#[derive(Clone)]
pub struct ClaimLifecycle {
    store: Arc<dyn RecordStore>,
}

impl std::fmt::Debug for ClaimLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaimLifecycle").finish_non_exhaustive()
    }
}

impl ClaimLifecycle {
    /// Creates an engine over the given store
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Initialization hook; takes exactly one policy version tag
    #[instrument(skip_all)]
    pub async fn init<S: AsRef<str>>(&self, args: &[S]) -> Result<(), ClaimError> {
        expect_arity("init", args, 1)?;
        info!(policy_version = args[0].as_ref(), "Claims ledger initialised");
        Ok(())
    }

    /// Records a new claim at `INIT_CLAIM`
    ///
    /// The claim id is left empty; assigning it is the host's concern.
    ///
    /// # Errors
    ///
    /// `ClaimError::Persistence` if the write is not acknowledged.
    #[instrument(skip_all)]
    pub async fn submit_claim(&self, submission: ClaimSubmission) -> Result<(), ClaimError> {
        let mut claim = Claim::new("", submission.incident_date, submission.holder);
        claim.status = Stage::InitClaim;

        self.store_claim(&claim).await?;

        info!(stage = %claim.status, "Claim submitted");
        Ok(())
    }

    /// Returns the bytes stored under `key`, unmodified
    ///
    /// The current-stage key is served from the claim record's status.
    ///
    /// # Errors
    ///
    /// `ClaimError::RecordNotFound` if nothing is stored under `key`,
    /// `ClaimError::StoreUnavailable` if the store failed.
    #[instrument(skip(self))]
    pub async fn fetch_claim(&self, key: &str) -> Result<Vec<u8>, ClaimError> {
        if key == CURRENT_STATE_KEY {
            let bytes = self
                .store
                .get(CLAIM_KEY)
                .await
                .map_err(|e| ClaimError::from_fetch(CURRENT_STATE_KEY, e))?;
            let claim = Claim::from_bytes(CLAIM_KEY, &bytes)?;
            return claim.status.to_bytes();
        }

        let bytes = self
            .store
            .get(key)
            .await
            .map_err(|e| ClaimError::from_fetch(key, e))?;
        debug!(bytes = bytes.len(), "Record fetched");
        Ok(bytes)
    }

    /// Stage of the stored claim, read from the claim record itself
    #[instrument(skip(self))]
    pub async fn current_stage(&self) -> Result<Stage, ClaimError> {
        let claim = self.load_claim().await?;
        Ok(claim.status)
    }

    /// Compares `candidate` with the stored claim's holder
    ///
    /// Succeeds only if all eight attributes are equal. Does not change the
    /// claim's stage.
    ///
    /// # Errors
    ///
    /// `ClaimError::IdentityMismatch` if any attribute differs.
    #[instrument(skip_all)]
    pub async fn verify_identity(&self, candidate: &PolicyHolder) -> Result<String, ClaimError> {
        let claim = self.load_claim().await?;
        Inspection::Identity(candidate.clone())
            .check(&claim)
            .inspect_err(|_| warn!("Identity verification failed"))?;

        info!("Identity verified");
        Ok(IDENTITY_VERIFIED.to_string())
    }

    /// Moves the claim to `target`
    ///
    /// Idempotent: if the claim is already at `target` nothing is written.
    ///
    /// # Errors
    ///
    /// `ClaimError::IllegalTransition` unless `target` is the current stage or
    /// the one right after it.
    #[instrument(skip(self))]
    pub async fn advance_stage(&self, target: Stage) -> Result<Stage, ClaimError> {
        let mut claim = self.load_claim().await?;
        self.apply_transition(&mut claim, target).await
    }

    /// Like [`advance_stage`](Self::advance_stage) for a raw stage number
    ///
    /// Numbers outside the stage range are reported as an illegal transition
    /// from the current stage.
    #[instrument(skip(self))]
    pub async fn advance_stage_to_value(&self, value: i64) -> Result<Stage, ClaimError> {
        let mut claim = self.load_claim().await?;
        let target = Stage::try_from(value)
            .map_err(|_| ClaimError::illegal_transition(claim.status, value))?;
        self.apply_transition(&mut claim, target).await
    }

    /// Moves the claim one stage forward
    #[instrument(skip(self))]
    pub async fn advance(&self) -> Result<Stage, ClaimError> {
        let mut claim = self.load_claim().await?;
        let from = claim.status;
        let target = claim.advance()?;
        self.store_claim(&claim).await?;
        info!(%from, to = %target, "Claim stage advanced");
        Ok(target)
    }

    /// Checks the evidence and, if it holds, moves the claim into the
    /// inspection's target stage
    ///
    /// Stage order is checked before the evidence. Repeating a passed
    /// inspection re-checks the evidence and writes nothing.
    #[instrument(skip_all, fields(inspection = inspection.name()))]
    pub async fn pass_inspection(&self, inspection: &Inspection) -> Result<Stage, ClaimError> {
        let mut claim = self.load_claim().await?;
        let target = inspection.target_stage();

        if claim.status != target && claim.status.next() != Some(target) {
            return Err(ClaimError::illegal_transition(claim.status, target));
        }
        inspection
            .check(&claim)
            .inspect_err(|e| warn!(error = %e, "Inspection rejected"))?;

        self.apply_transition(&mut claim, target).await
    }

    async fn apply_transition(&self, claim: &mut Claim, target: Stage) -> Result<Stage, ClaimError> {
        let from = claim.status;
        if claim.advance_to(target)? {
            self.store_claim(claim).await?;
            info!(%from, to = %target, "Claim stage advanced");
        } else {
            debug!(stage = %target, "Claim already at requested stage");
        }
        Ok(target)
    }

    async fn load_claim(&self) -> Result<Claim, ClaimError> {
        let bytes = self
            .store
            .get(CLAIM_KEY)
            .await
            .map_err(|e| ClaimError::persistence(CLAIM_KEY, e))?;
        Ok(Claim::from_bytes(CLAIM_KEY, &bytes)?)
    }

    async fn store_claim(&self, claim: &Claim) -> Result<(), ClaimError> {
        let bytes = claim.to_bytes()?;
        self.store
            .put(CLAIM_KEY, bytes)
            .await
            .map_err(|e| ClaimError::persistence(CLAIM_KEY, e))
    }
}
