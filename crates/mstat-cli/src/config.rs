//! Optional TOML configuration.
//!
//! Every key has a built-in default; a config file only needs the keys it
//! changes. Explicit command-line flags win over the file.
//!
//! ```toml
//! [columns]
//! total = "total(B)"
//! duration = "duration in microseconds"
//! group = "thread index"
//! visited = "visited nodes"
//!
//! [profiles]
//! old_label = "specialized profile"
//! new_label = "generic profile"
//!
//! [histogram]
//! bins = 30
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub columns: Columns,
    pub profiles: Profiles,
    pub histogram: Histogram,
}

/// Input column names.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Columns {
    pub total: String,
    pub duration: String,
    pub group: String,
    pub visited: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            total: "total(B)".to_owned(),
            duration: "duration in microseconds".to_owned(),
            group: "thread index".to_owned(),
            visited: "visited nodes".to_owned(),
        }
    }
}

/// Labels for the two inputs of `compare-profiles`.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Profiles {
    pub old_label: String,
    pub new_label: String,
}

impl Default for Profiles {
    fn default() -> Self {
        Self {
            old_label: "specialized profile".to_owned(),
            new_label: "generic profile".to_owned(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Histogram {
    pub bins: usize,
}

impl Default for Histogram {
    fn default() -> Self {
        Self { bins: 30 }
    }
}

impl Config {
    /// Load from `path`, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let cfg: Self = toml::from_str(&src)
            .with_context(|| format!("parse config {}", path.display()))?;
        debug!(config = %path.display(), ?cfg, "loaded config");
        Ok(cfg)
    }
}
