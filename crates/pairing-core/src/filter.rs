//! Eligibility filtering.
//!
//! A provider is eligible for a request when it satisfies all of:
//!
//! - **Location** — the policy requires no location, or the provider's
//!   location equals it exactly (case-sensitive).
//! - **Features** — the provider advertises every required capability.
//! - **Stake** — the provider's stake is at least the policy minimum.
//!
//! Ineligible providers are dropped without a reason being reported upward.

use pairing_types::{ConsumerPolicy, Provider};

use crate::config::LocationMode;
use crate::{PairingError, Result};

/// Reject structurally invalid policies before any filtering takes place.
///
/// # Errors
///
/// - [`PairingError::InvalidPolicy`] if the minimum stake is negative or a
///   required feature tag is empty.
pub fn validate_policy(policy: &ConsumerPolicy) -> Result<()> {
    if policy.min_stake < 0 {
        return Err(PairingError::InvalidPolicy(format!(
            "min_stake must be non-negative, got {}",
            policy.min_stake
        )));
    }
    if policy.required_features.iter().any(|f| f.is_empty()) {
        return Err(PairingError::InvalidPolicy(
            "required feature tags must be non-empty".to_string(),
        ));
    }
    Ok(())
}

/// Location predicate: no requirement, or an exact match.
pub fn location_matches(provider: &Provider, policy: &ConsumerPolicy) -> bool {
    !policy.requires_location() || provider.location == policy.required_location
}

/// Feature predicate: provider capabilities are a superset of the requirement.
pub fn has_required_features(provider: &Provider, policy: &ConsumerPolicy) -> bool {
    policy
        .required_features
        .iter()
        .all(|feature| provider.has_feature(feature))
}

/// Stake predicate: provider stake is at or above the minimum (inclusive).
pub fn meets_min_stake(provider: &Provider, policy: &ConsumerPolicy) -> bool {
    i128::from(provider.stake) >= i128::from(policy.min_stake)
}

/// Evaluate every predicate that applies under `mode`.
///
/// In [`LocationMode::Preferred`] the location predicate is skipped; the
/// scoring stage accounts for it instead.
pub fn is_eligible(provider: &Provider, policy: &ConsumerPolicy, mode: LocationMode) -> bool {
    let location_ok = match mode {
        LocationMode::Strict => location_matches(provider, policy),
        LocationMode::Preferred => true,
    };
    location_ok && has_required_features(provider, policy) && meets_min_stake(provider, policy)
}

/// Single pass over the pool returning references to eligible providers in
/// input order.
pub fn filter_pool<'a>(
    providers: &'a [Provider],
    policy: &ConsumerPolicy,
    mode: LocationMode,
) -> Vec<&'a Provider> {
    providers
        .iter()
        .filter(|p| {
            let eligible = is_eligible(p, policy, mode);
            if !eligible {
                tracing::trace!(address = %p.address, "provider filtered out");
            }
            eligible
        })
        .collect()
}
