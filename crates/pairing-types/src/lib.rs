//! # pairing-types
//!
//! Shared domain types for provider pairing.
//!
//! - [`provider`] — provider descriptors supplied by the provider-pool source.
//! - [`policy`] — consumer eligibility policy supplied per request.
//! - [`score`] — per-candidate score breakdown produced by the scoring stage.

pub mod policy;
pub mod provider;
pub mod score;

pub use policy::ConsumerPolicy;
pub use provider::Provider;
pub use score::PairingScore;

/// Provider address (bech32 or similar; treated as an opaque identity string).
pub type Address = String;

/// Stake amount in the smallest network unit.
pub type Stake = u64;

/// Component name for the normalized stake score.
pub const COMPONENT_STAKE: &str = "stake";

/// Component name for the feature breadth score.
pub const COMPONENT_FEATURES: &str = "features";

/// Component name for the location score.
pub const COMPONENT_LOCATION: &str = "location";
