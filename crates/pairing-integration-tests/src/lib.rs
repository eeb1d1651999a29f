//! Integration test crate for provider pairing.
//!
//! The library part only holds fixtures shared by the tests under `tests/`,
//! which exercise the pairing pipeline end to end across workspace crates.
//!
//! Run all integration tests:
//! ```sh
//! cargo test -p pairing-integration-tests
//! ```

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use pairing_types::Provider;

/// Location codes used by generated pools.
pub const LOCATIONS: [&str; 4] = ["US", "DE", "JP", "BR"];

/// Capability tags used by generated pools.
pub const FEATURES: [&str; 5] = ["eth", "archive", "trace", "debug", "ws"];

/// Build a provider from plain fixture values.
pub fn make_provider(address: &str, stake: u64, location: &str, features: &[&str]) -> Provider {
    Provider::new(address, stake)
        .with_location(location)
        .with_features(features.iter().copied())
}

/// Generate a reproducible pool of `size` providers with distinct addresses.
///
/// Stakes are drawn from a small range so that score ties are common.
pub fn generate_pool(size: usize, seed: u64) -> Vec<Provider> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|i| {
            let location = LOCATIONS[rng.gen_range(0..LOCATIONS.len())];
            let features: Vec<&str> = FEATURES
                .iter()
                .copied()
                .filter(|_| rng.gen_bool(0.5))
                .collect();
            let stake = rng.gen_range(0..20u64) * 50;
            make_provider(&format!("lava@provider{i:05}"), stake, location, &features)
        })
        .collect()
}

/// Return a shuffled copy of `pool`.
pub fn shuffled(pool: &[Provider], seed: u64) -> Vec<Provider> {
    let mut copy = pool.to_vec();
    copy.shuffle(&mut StdRng::seed_from_u64(seed));
    copy
}
