//! Session configuration
//!
//! Defaults follow the classic 10x20 field. Every value can be overridden from the
//! environment:
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `BLOCKFALL_WIDTH` | Field width in cells |
//! | `BLOCKFALL_HEIGHT` | Field height in cells |
//! | `BLOCKFALL_SEED` | Shape generator seed (random when unset) |

use std::env;
use std::str::FromStr;

use crate::error::{CoreError, Result};
use crate::field::{MIN_FIELD_HEIGHT, MIN_FIELD_WIDTH};
use crate::types::{FIELD_HEIGHT, FIELD_WIDTH};

pub const ENV_WIDTH: &str = "BLOCKFALL_WIDTH";
pub const ENV_HEIGHT: &str = "BLOCKFALL_HEIGHT";
pub const ENV_SEED: &str = "BLOCKFALL_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub width: u16,
    pub height: u16,
    /// Fixed seed for reproducible games; `None` picks one at session start
    pub seed: Option<u32>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Default configuration with a fixed seed
    pub fn seeded(seed: u32) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Create from environment variables, falling back to defaults for unset ones
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Create from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            width: parse_var(&lookup, ENV_WIDTH)?.unwrap_or(defaults.width),
            height: parse_var(&lookup, ENV_HEIGHT)?.unwrap_or(defaults.height),
            seed: parse_var(&lookup, ENV_SEED)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject fields too small to hold every pose
    pub fn validate(&self) -> Result<()> {
        if self.width < MIN_FIELD_WIDTH || self.height < MIN_FIELD_HEIGHT {
            return Err(CoreError::InvalidDimensions {
                width: self.width,
                height: self.height,
                min_width: MIN_FIELD_WIDTH,
                min_height: MIN_FIELD_HEIGHT,
            });
        }
        Ok(())
    }

    /// Configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&'static str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| CoreError::InvalidEnv {
            var,
            value: raw.clone(),
        })
}
