//! Provider descriptors.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{Address, Stake};

/// A service provider as published by the provider-pool source.
///
/// Providers are read-only input to a pairing request. Capability tags are
/// kept in a sorted set, so duplicates collapse and iteration order is stable.
/// Providers are totally ordered field by field, address first.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Provider {
    /// Provider identity.
    pub address: Address,
    /// Stake in the smallest network unit.
    pub stake: Stake,
    /// ISO-3166 alpha-2 location code, or empty when unknown.
    #[serde(default)]
    pub location: String,
    /// Capability tags (e.g. `"eth"`, `"archive"`).
    #[serde(default)]
    pub features: BTreeSet<String>,
}

impl Provider {
    /// Create a provider with no location and no capabilities.
    pub fn new(address: impl Into<Address>, stake: Stake) -> Self {
        Self {
            address: address.into(),
            stake,
            location: String::new(),
            features: BTreeSet::new(),
        }
    }

    /// Set the location code.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Replace the capability set.
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the provider advertises the given capability.
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_features_collapse() {
        let p = Provider::new("lava@a", 10).with_features(["eth", "eth", "archive"]);
        assert_eq!(p.features.len(), 2);
        assert!(p.has_feature("eth"));
        assert!(p.has_feature("archive"));
        assert!(!p.has_feature("trace"));
    }

    #[test]
    fn test_deserialize_defaults() {
        let p: Provider =
            serde_json::from_str(r#"{"address":"lava@b","stake":500}"#).expect("parse");
        assert_eq!(p.address, "lava@b");
        assert_eq!(p.stake, 500);
        assert!(p.location.is_empty());
        assert!(p.features.is_empty());
    }

    #[test]
    fn test_negative_stake_rejected() {
        let res: Result<Provider, _> = serde_json::from_str(r#"{"address":"x","stake":-1}"#);
        assert!(res.is_err());
    }
}
