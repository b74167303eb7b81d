//! Configuration system for the vector floating-point unit.
//!
//! This module defines the configuration structure used to parameterize the unit.
//! It provides:
//! 1. **Defaults:** Baseline geometry constants (VLEN, ELEN).
//! 2. **Structures:** `VectorConfig`, deserializable from JSON with every field optional.
//! 3. **Enums:** How agnostic elements are filled.
//! 4. **Validation:** Geometry checks returning [`ConfigError`].
//!
//! Configuration is supplied via JSON (`VectorConfig::from_json`) or use
//! `VectorConfig::default()`.

use serde::{Deserialize, Serialize};

use crate::common::constants::{VLEN_MAX, VLEN_MIN};
use crate::common::error::ConfigError;

/// Default configuration constants for the vector unit.
mod defaults {
    /// Vector register width in bits.
    pub const VLEN: usize = 128;

    /// Widest supported element in bits.
    ///
    /// 64 enables f64; 32 limits the unit to f16, bf16, and f32.
    pub const ELEN: usize = 64;
}

/// Value written to elements whose policy is agnostic.
///
/// Agnostic elements may legally hold either their old value or all ones.
/// Undisturbed elements are never affected by this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum AgnosticFill {
    /// Leave agnostic elements unchanged.
    #[default]
    Undisturbed,
    /// Overwrite agnostic masked-off elements with all ones.
    #[serde(alias = "ALL_ONES", alias = "all_ones")]
    AllOnes,
}

/// Vector unit configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorConfig {
    /// Vector register width in bits (power of two, 64..=65536).
    #[serde(default = "VectorConfig::default_vlen")]
    pub vlen: usize,

    /// Widest element in bits (32 or 64).
    #[serde(default = "VectorConfig::default_elen")]
    pub elen: usize,

    /// Fill applied to mask-agnostic inactive elements.
    #[serde(default)]
    pub agnostic_fill: AgnosticFill,

    /// Emit per-instruction events at `debug` level instead of `trace`.
    #[serde(default)]
    pub trace: bool,
}

impl VectorConfig {
    /// Returns the default VLEN.
    fn default_vlen() -> usize {
        defaults::VLEN
    }

    /// Returns the default ELEN.
    fn default_elen() -> usize {
        defaults::ELEN
    }

    /// Parses a configuration from JSON and validates it.
    ///
    /// # Arguments
    ///
    /// * `json` - A JSON object; missing fields take their defaults.
    ///
    /// # Returns
    ///
    /// The validated configuration, or a [`ConfigError`] on malformed input or
    /// illegal geometry.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the unit geometry.
    ///
    /// # Returns
    ///
    /// `Ok(())` when VLEN is a power of two in range and ELEN is 32 or 64 and
    /// no wider than VLEN.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.vlen.is_power_of_two() || !(VLEN_MIN..=VLEN_MAX).contains(&self.vlen) {
            return Err(ConfigError::InvalidVlen(self.vlen));
        }
        if !matches!(self.elen, 32 | 64) || self.elen > self.vlen {
            return Err(ConfigError::InvalidElen {
                elen: self.elen,
                vlen: self.vlen,
            });
        }
        Ok(())
    }

    /// VLEN in bytes.
    pub fn vlenb(&self) -> usize {
        self.vlen / 8
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            vlen: defaults::VLEN,
            elen: defaults::ELEN,
            agnostic_fill: AgnosticFill::Undisturbed,
            trace: false,
        }
    }
}
