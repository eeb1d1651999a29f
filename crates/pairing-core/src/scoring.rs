//! Candidate scoring.
//!
//! Each eligible candidate receives a composite score, the weighted sum of
//! three normalized components:
//!
//! ```text
//! composite = stake_score    * w_stake      (default 0.5)
//!           + feature_score  * w_features   (default 0.3)
//!           + location_score * w_location   (default 0.2)
//! ```
//!
//! - `stake_score` = stake / max stake in the filtered pool (0.0 if the max is 0)
//! - `feature_score` = share of the provider's capabilities beyond the
//!   required set (0.0 if it advertises none)
//! - `location_score` = 1.0 on match or no requirement, 0.5 on mismatch
//!   (mismatches only reach scoring under [`LocationMode::Preferred`])
//!
//! Scoring runs in two phases. The aggregate phase computes
//! [`PoolAggregates`] over the whole filtered pool; only then does the
//! per-candidate phase start, optionally spread over the rayon thread pool.
//! A candidate's score therefore never depends on pool order.

use pairing_types::{ConsumerPolicy, PairingScore, Provider};

use rayon::prelude::*;

use crate::config::{LocationMode, PairingConfig, ScoreWeights};

/// Location score for a candidate whose location does not match.
pub const LOCATION_MISMATCH_SCORE: f64 = 0.5;

/// Pool-wide normalizers, computed once per request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolAggregates {
    /// Largest stake among the filtered candidates.
    pub max_stake: u64,
}

impl PoolAggregates {
    /// Single scan over the filtered pool.
    pub fn from_pool(candidates: &[&Provider]) -> Self {
        let max_stake = candidates.iter().map(|p| p.stake).max().unwrap_or(0);
        Self { max_stake }
    }
}

/// A score paired with the provider it was computed for.
#[derive(Clone, Debug)]
pub struct ScoredProvider<'a> {
    pub provider: &'a Provider,
    pub score: PairingScore,
}

/// Stake normalized against the pool maximum.
pub fn stake_score(stake: u64, aggregates: &PoolAggregates) -> f64 {
    if aggregates.max_stake == 0 {
        return 0.0;
    }
    clamp_unit(stake as f64 / aggregates.max_stake as f64)
}

/// Fraction of the provider's capabilities that go beyond the requirement.
pub fn feature_score(provider: &Provider, policy: &ConsumerPolicy) -> f64 {
    let total = provider.features.len();
    if total == 0 {
        return 0.0;
    }
    let extra = provider
        .features
        .iter()
        .filter(|f| !policy.required_features.contains(*f))
        .count();
    clamp_unit(extra as f64 / total as f64)
}

/// Location component under the given mode.
pub fn location_score(provider: &Provider, policy: &ConsumerPolicy, mode: LocationMode) -> f64 {
    if !policy.requires_location() || provider.location == policy.required_location {
        return 1.0;
    }
    match mode {
        // Strict mode never lets a mismatch through the filter.
        LocationMode::Strict => 1.0,
        LocationMode::Preferred => LOCATION_MISMATCH_SCORE,
    }
}

/// Weighted composite, clamped to absorb floating-point drift.
pub fn composite_score(weights: &ScoreWeights, stake: f64, features: f64, location: f64) -> f64 {
    clamp_unit(weights.stake * stake + weights.features * features + weights.location * location)
}

/// Score a single candidate against precomputed aggregates.
pub fn score_candidate(
    provider: &Provider,
    policy: &ConsumerPolicy,
    aggregates: &PoolAggregates,
    config: &PairingConfig,
) -> PairingScore {
    let stake = stake_score(provider.stake, aggregates);
    let features = feature_score(provider, policy);
    let location = location_score(provider, policy, config.location_mode);
    let composite = composite_score(&config.weights, stake, features, location);
    PairingScore::new(provider.address.clone(), composite, stake, features, location)
}

/// Score every candidate in the filtered pool.
///
/// Returns one entry per candidate, in candidate order. Large pools (see
/// [`PairingConfig::scores_in_parallel`]) are scored with rayon once the
/// aggregates are known; indexed `collect` keeps the input order.
pub fn score_pool<'a>(
    candidates: &[&'a Provider],
    policy: &ConsumerPolicy,
    config: &PairingConfig,
) -> Vec<ScoredProvider<'a>> {
    let aggregates = PoolAggregates::from_pool(candidates);
    let score = |&provider: &&'a Provider| ScoredProvider {
        provider,
        score: score_candidate(provider, policy, &aggregates, config),
    };

    if config.scores_in_parallel(candidates.len()) {
        tracing::debug!(candidates = candidates.len(), "scoring pool in parallel");
        candidates.par_iter().map(score).collect()
    } else {
        candidates.iter().map(score).collect()
    }
}

fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
