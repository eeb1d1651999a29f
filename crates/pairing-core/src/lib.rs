//! # pairing-core
//!
//! Provider pairing pipeline: picks the best providers for a consumer request.
//!
//! ```text
//! providers + policy ──► filter ──► score ──► select top-K ──► pairing list
//! ```
//!
//! ## Modules
//!
//! - [`filter`] — eligibility predicates (location, features, stake).
//! - [`scoring`] — per-request aggregates and weighted composite scores.
//! - [`selection`] — deterministic bounded top-K selection.
//! - [`config`] — engine configuration (list size, weights, location mode).
//! - [`engine`] — [`PairingEngine`], the request-level entry point.
//!
//! Every call is self-contained: aggregates such as the pool's maximum stake
//! are computed inside the call and dropped with it, so a single engine can be
//! shared across threads without locking.

pub mod config;
pub mod engine;
pub mod filter;
pub mod scoring;
pub mod selection;

pub use config::{LocationMode, PairingConfig, ScoreWeights};
pub use engine::PairingEngine;

use pairing_types::{ConsumerPolicy, PairingScore, Provider};

/// Number of providers returned in a pairing list.
pub const DEFAULT_LIST_SIZE: usize = 5;

/// Error types for pairing operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PairingError {
    /// The input provider pool was empty.
    #[error("no providers supplied")]
    NoProviders,

    /// Filtering removed every candidate.
    #[error("no eligible providers among {pool_size} candidates")]
    NoEligibleProviders {
        /// Size of the pool before filtering.
        pool_size: usize,
    },

    /// The consumer policy is structurally invalid.
    #[error("invalid policy: {0}")]
    InvalidPolicy(String),

    /// The engine configuration is invalid.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience result type for pairing operations.
pub type Result<T> = std::result::Result<T, PairingError>;

/// Filter `providers` by `policy` using the default configuration.
pub fn filter_providers(providers: &[Provider], policy: &ConsumerPolicy) -> Result<Vec<Provider>> {
    PairingEngine::default().filter_providers(providers, policy)
}

/// Score every eligible provider using the default configuration (unordered).
pub fn rank_providers(
    providers: &[Provider],
    policy: &ConsumerPolicy,
) -> Result<Vec<PairingScore>> {
    PairingEngine::default().rank_providers(providers, policy)
}

/// Compute the top-5 pairing list using the default configuration.
pub fn get_pairing_list(providers: &[Provider], policy: &ConsumerPolicy) -> Result<Vec<Provider>> {
    PairingEngine::default().get_pairing_list(providers, policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PairingError::NoEligibleProviders { pool_size: 3 };
        assert!(err.to_string().contains("3 candidates"));
        assert_eq!(PairingError::NoProviders.to_string(), "no providers supplied");
    }

    #[test]
    fn test_free_functions_use_default_list_size() {
        let providers: Vec<Provider> = (0..8)
            .map(|i| Provider::new(format!("lava@{i}"), 100 + i))
            .collect();
        let list = get_pairing_list(&providers, &ConsumerPolicy::new()).expect("pairing");
        assert_eq!(list.len(), DEFAULT_LIST_SIZE);
        assert_eq!(list[0].address, "lava@7");
    }
}
