//! Engine configuration.
//!
//! ```toml
//! list_size = 5
//! location_mode = "strict"
//! parallel_threshold = 4096
//!
//! [weights]
//! stake = 0.5
//! features = 0.3
//! location = 0.2
//! ```

use serde::{Deserialize, Serialize};

use crate::{PairingError, Result, DEFAULT_LIST_SIZE};

/// Default weight for the stake component.
pub const DEFAULT_STAKE_WEIGHT: f64 = 0.5;

/// Default weight for the feature breadth component.
pub const DEFAULT_FEATURE_WEIGHT: f64 = 0.3;

/// Default weight for the location component.
pub const DEFAULT_LOCATION_WEIGHT: f64 = 0.2;

/// Pool size at which per-candidate scoring runs on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Allowed drift when checking that weights sum to 1.0.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// How the policy's required location is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationMode {
    /// Location is a hard filter; surviving candidates score 1.0.
    #[default]
    Strict,
    /// Location is not filtered; a mismatch scores 0.5 instead of 1.0.
    Preferred,
}

/// Composite score weights. Must be non-negative and sum to 1.0.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    #[serde(default = "default_stake_weight")]
    pub stake: f64,
    #[serde(default = "default_feature_weight")]
    pub features: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
}

/// Pairing engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairingConfig {
    /// Maximum number of providers in a pairing list.
    #[serde(default = "default_list_size")]
    pub list_size: usize,
    /// Location handling strategy.
    #[serde(default)]
    pub location_mode: LocationMode,
    /// Filtered pool size at which scoring runs on the rayon pool. 0 disables.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
    /// Component weights.
    #[serde(default)]
    pub weights: ScoreWeights,
}

fn default_stake_weight() -> f64 {
    DEFAULT_STAKE_WEIGHT
}

fn default_feature_weight() -> f64 {
    DEFAULT_FEATURE_WEIGHT
}

fn default_location_weight() -> f64 {
    DEFAULT_LOCATION_WEIGHT
}

fn default_list_size() -> usize {
    DEFAULT_LIST_SIZE
}

fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            stake: DEFAULT_STAKE_WEIGHT,
            features: DEFAULT_FEATURE_WEIGHT,
            location: DEFAULT_LOCATION_WEIGHT,
        }
    }
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            list_size: DEFAULT_LIST_SIZE,
            location_mode: LocationMode::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            weights: ScoreWeights::default(),
        }
    }
}

impl ScoreWeights {
    /// Check that every weight is finite, non-negative, and that they sum to 1.0.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("stake", self.stake),
            ("features", self.features),
            ("location", self.location),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PairingError::InvalidConfig(format!(
                    "weight '{name}' must be a non-negative number, got {value}"
                )));
            }
        }

        let total = self.stake + self.features + self.location;
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(PairingError::InvalidConfig(format!(
                "weights must sum to 1.0, got {total}"
            )));
        }
        Ok(())
    }
}

impl PairingConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.list_size == 0 {
            return Err(PairingError::InvalidConfig(
                "list_size must be at least 1".to_string(),
            ));
        }
        self.weights.validate()
    }

    /// Whether a filtered pool of `len` candidates should be scored in parallel.
    pub fn scores_in_parallel(&self, len: usize) -> bool {
        self.parallel_threshold > 0 && len >= self.parallel_threshold
    }
}
