//! Consumer eligibility policy.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Eligibility and preference parameters supplied by the consumer.
///
/// `min_stake` is signed so that a malformed (negative) threshold coming from
/// an upstream source survives deserialization and is rejected by validation
/// instead of being clamped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerPolicy {
    /// Required location code. Empty means no constraint.
    #[serde(default)]
    pub required_location: String,
    /// Capabilities every candidate must advertise. Empty means no constraint.
    #[serde(default)]
    pub required_features: BTreeSet<String>,
    /// Minimum stake, inclusive.
    #[serde(default)]
    pub min_stake: i64,
}

impl ConsumerPolicy {
    /// A policy with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require an exact location match.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.required_location = location.into();
        self
    }

    /// Require the given capabilities.
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Set the minimum stake threshold.
    pub fn with_min_stake(mut self, min_stake: i64) -> Self {
        self.min_stake = min_stake;
        self
    }

    /// Whether a location constraint is present.
    pub fn requires_location(&self) -> bool {
        !self.required_location.is_empty()
    }
}
