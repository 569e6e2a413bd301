//! Featurization options.
//!
//! [`FeaturizeConfig`] is built in code with its builder or read from JSON; any
//! field left out keeps its default.
//!
//! ```ignore
//! let config = FeaturizeConfig::builder()
//!     .angle_unit(AngleUnit::Radians)
//!     .build();
//! let config = FeaturizeConfig::from_json(r#"{"chain_strategy": "alphabetic"}"#)?;
//! ```
use bon::Builder;
use kinofeat_core::{ChainStrategy, HYDROGEN_MARKER};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Expected upper bound on ligand heavy atoms; sizes the pair buffer.
pub const LIGAND_ATOM_CAPACITY: usize = 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    pub fn convert(self, radians: f64) -> f64 {
        match self {
            AngleUnit::Degrees => radians.to_degrees(),
            AngleUnit::Radians => radians,
        }
    }
}

#[derive(Builder, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturizeConfig {
    #[builder(default)]
    pub chain_strategy: ChainStrategy,
    #[builder(default)]
    pub angle_unit: AngleUnit,
    /// Ligand atoms whose name contains this character are skipped.
    #[builder(default = HYDROGEN_MARKER)]
    pub hydrogen_marker: char,
    #[builder(default = LIGAND_ATOM_CAPACITY)]
    pub ligand_atom_capacity: usize,
}

impl Default for FeaturizeConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl FeaturizeConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
