//! TOML weight configuration loading.
//!
//! Weight overrides ship as a `[weights]` table of `RULE_ID = weight`
//! pairs:
//!
//! ```toml
//! [weights]
//! CRIME_TYPE_MATCH = 30.0
//! WEAPON_MATCH = 22.5
//! ```
//!
//! Every entry passes the same bounds check as a direct
//! [`WeightTable::set_weight`] call. The document is accepted or rejected
//! whole; no partial overrides apply.

use std::collections::BTreeMap;

use dragnet_engine_models::{RuleKind, WeightError, WeightTable};
use serde::Deserialize;
use thiserror::Error;

/// Errors produced while loading a weight configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid TOML or has the wrong shape.
    #[error("invalid weight config: {0}")]
    Parse(#[from] toml::de::Error),

    /// An entry names a rule the engine does not know.
    #[error("unknown rule id: {0}")]
    UnknownRule(String),

    /// An entry carries an out-of-range weight.
    #[error(transparent)]
    Weight(#[from] WeightError),
}

/// Deserialized shape of a weight configuration document.
#[derive(Debug, Default, Deserialize)]
pub struct WeightsConfig {
    /// Rule-id to weight overrides. Keys are the canonical identifiers,
    /// e.g. `CRIME_TYPE_MATCH` (exact match, no case folding).
    #[serde(default)]
    pub weights: BTreeMap<String, f64>,
}

/// Parses a TOML weight configuration into a full [`WeightTable`].
///
/// The result starts from the default table; each entry overrides one
/// rule's weight.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for malformed TOML,
/// [`ConfigError::UnknownRule`] for an entry naming no known rule, and
/// [`ConfigError::Weight`] for an out-of-range value.
pub fn load_weights_toml(toml_str: &str) -> Result<WeightTable, ConfigError> {
    let config: WeightsConfig = toml::de::from_str(toml_str)?;
    let mut table = WeightTable::default();
    for (name, value) in &config.weights {
        let rule: RuleKind = name
            .parse()
            .map_err(|_| ConfigError::UnknownRule(name.clone()))?;
        table.set_weight(rule, *value)?;
        log::debug!("weight override: {rule} = {value}");
    }
    Ok(table)
}
