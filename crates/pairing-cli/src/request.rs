//! JSON request/response documents.

use std::io::Read;
use std::path::Path;

use pairing_core::PairingEngine;
use pairing_types::{ConsumerPolicy, PairingScore, Provider};
use serde::{Deserialize, Serialize};

/// A pairing request: the candidate pool and the consumer's policy.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PairingRequest {
    pub providers: Vec<Provider>,
    #[serde(default)]
    pub policy: ConsumerPolicy,
}

/// What the CLI computes for a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Top-K providers.
    List,
    /// Top-K score breakdowns, best first.
    Explain,
    /// Every eligible provider's score, unordered.
    Rank,
}

/// Rendered result of a request.
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PairingResponse {
    /// [`Mode::List`]: top-K providers.
    List { providers: Vec<Provider> },
    /// [`Mode::Explain`] and [`Mode::Rank`]: score breakdowns.
    Scores { scores: Vec<PairingScore> },
}

impl PairingRequest {
    /// Read a request from a file, or from stdin when `path` is `-`.
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let content = if path == Path::new("-") {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            std::fs::read_to_string(path)?
        };
        Ok(serde_json::from_str(&content)?)
    }
}

/// Run a request through the engine.
pub fn execute(
    engine: &PairingEngine,
    request: &PairingRequest,
    mode: Mode,
) -> pairing_core::Result<PairingResponse> {
    let (providers, policy) = (&request.providers, &request.policy);
    let response = match mode {
        Mode::List => PairingResponse::List {
            providers: engine.get_pairing_list(providers, policy)?,
        },
        Mode::Explain => PairingResponse::Scores {
            scores: engine.get_pairing_list_with_scores(providers, policy)?,
        },
        Mode::Rank => PairingResponse::Scores {
            scores: engine.rank_providers(providers, policy)?,
        },
    };
    Ok(response)
}
