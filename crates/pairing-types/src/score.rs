//! Per-candidate score breakdown.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Address, COMPONENT_FEATURES, COMPONENT_LOCATION, COMPONENT_STAKE};

/// Score assigned to one surviving candidate.
///
/// `composite` and every entry of `components` lie in `[0.0, 1.0]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairingScore {
    /// Address of the scored provider.
    pub address: Address,
    /// Weighted composite used for ranking.
    pub composite: f64,
    /// Normalized value per component name.
    pub components: BTreeMap<String, f64>,
}

impl PairingScore {
    /// Build a score from its three normalized components.
    pub fn new(
        address: impl Into<Address>,
        composite: f64,
        stake: f64,
        features: f64,
        location: f64,
    ) -> Self {
        let components = BTreeMap::from([
            (COMPONENT_STAKE.to_string(), stake),
            (COMPONENT_FEATURES.to_string(), features),
            (COMPONENT_LOCATION.to_string(), location),
        ]);
        Self {
            address: address.into(),
            composite,
            components,
        }
    }

    /// Look up a component value by name.
    pub fn component(&self, name: &str) -> Option<f64> {
        self.components.get(name).copied()
    }

    /// Whether the composite and all components lie in `[0.0, 1.0]`.
    pub fn is_normalized(&self) -> bool {
        let unit = 0.0..=1.0;
        unit.contains(&self.composite) && self.components.values().all(|v| unit.contains(v))
    }
}
