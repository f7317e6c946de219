//! Delegation configuration from TOML (`[delegation]` section)

use serde::{Deserialize, Serialize};

/// Default candidate restriction
///
/// ```toml
/// [delegation]
/// candidates = ["aiExpert", "phdMathematics", "physicsExpert"]
/// ```
///
/// The first entry is the fallback when the oracle's pick is unusable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDelegationConfig {
    pub candidates: Option<Vec<String>>,
}
