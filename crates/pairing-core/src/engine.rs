//! Request-level pairing entry point.
//!
//! [`PairingEngine`] composes filter, scoring and selection and owns the
//! per-request error policy:
//!
//! 1. Empty pool → [`PairingError::NoProviders`], nothing else is attempted.
//! 2. Invalid policy → [`PairingError::InvalidPolicy`], before filtering.
//! 3. Nothing survives filtering → [`PairingError::NoEligibleProviders`].
//! 4. Fewer than `list_size` eligible providers is a successful short list.
//!
//! The engine holds only immutable configuration; share it behind an `Arc`
//! across any number of concurrent requests.

use pairing_types::{ConsumerPolicy, PairingScore, Provider};

use crate::config::PairingConfig;
use crate::scoring::{self, ScoredProvider};
use crate::{filter, selection, PairingError, Result};

/// Stateless provider pairing engine.
#[derive(Clone, Debug, Default)]
pub struct PairingEngine {
    config: PairingConfig,
}

impl PairingEngine {
    /// Create an engine after validating `config`.
    ///
    /// # Errors
    ///
    /// - [`PairingError::InvalidConfig`] if the list size or weights are invalid
    pub fn new(config: PairingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &PairingConfig {
        &self.config
    }

    /// Return the providers that satisfy `policy`, in input order.
    ///
    /// An empty result is not an error at this level.
    pub fn filter_providers(
        &self,
        providers: &[Provider],
        policy: &ConsumerPolicy,
    ) -> Result<Vec<Provider>> {
        validate(policy)?;
        Ok(filter::filter_pool(providers, policy, self.config.location_mode)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Score every eligible provider. The result is unordered.
    pub fn rank_providers(
        &self,
        providers: &[Provider],
        policy: &ConsumerPolicy,
    ) -> Result<Vec<PairingScore>> {
        let scored = self.score(providers, policy)?;
        Ok(scored.into_iter().map(|s| s.score).collect())
    }

    /// Return up to `list_size` providers, best first.
    pub fn get_pairing_list(
        &self,
        providers: &[Provider],
        policy: &ConsumerPolicy,
    ) -> Result<Vec<Provider>> {
        let selected = self.select(providers, policy)?;
        Ok(selected.into_iter().map(|s| s.provider.clone()).collect())
    }

    /// Like [`get_pairing_list`](Self::get_pairing_list), but returns the
    /// score breakdown of each selected provider.
    pub fn get_pairing_list_with_scores(
        &self,
        providers: &[Provider],
        policy: &ConsumerPolicy,
    ) -> Result<Vec<PairingScore>> {
        let selected = self.select(providers, policy)?;
        Ok(selected.into_iter().map(|s| s.score).collect())
    }

    fn select<'a>(
        &self,
        providers: &'a [Provider],
        policy: &ConsumerPolicy,
    ) -> Result<Vec<ScoredProvider<'a>>> {
        let scored = self.score(providers, policy)?;
        let eligible = scored.len();
        let selected = selection::select_top_k(scored, self.config.list_size);

        tracing::debug!(
            pool = providers.len(),
            eligible,
            selected = selected.len(),
            "pairing list computed"
        );
        Ok(selected)
    }

    fn score<'a>(
        &self,
        providers: &'a [Provider],
        policy: &ConsumerPolicy,
    ) -> Result<Vec<ScoredProvider<'a>>> {
        if providers.is_empty() {
            return Err(PairingError::NoProviders);
        }
        validate(policy)?;

        let candidates = filter::filter_pool(providers, policy, self.config.location_mode);
        if candidates.is_empty() {
            tracing::debug!(pool = providers.len(), "no provider satisfied the policy");
            return Err(PairingError::NoEligibleProviders {
                pool_size: providers.len(),
            });
        }

        Ok(scoring::score_pool(&candidates, policy, &self.config))
    }
}

fn validate(policy: &ConsumerPolicy) -> Result<()> {
    filter::validate_policy(policy).inspect_err(|e| {
        tracing::warn!(error = %e, "rejected consumer policy");
    })
}
