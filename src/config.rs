//! Tunables for parsing and evaluation.
//!
//! A `Config` is usually built with `Config::default()`. The binary can also
//! read one from a TOML file:
//!
//! ```toml
//! max_depth = 64
//! trailing_input = "ignore"
//! overflow = "saturating"
//! ```

use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use tracing::info;

pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// How many parentheses may be open at once. Guards the recursive
    /// descent against stack exhaustion on hostile input.
    pub max_depth: usize,

    /// What to do with words left over after a complete expression.
    pub trailing_input: TrailingInput,

    /// How `+` and `-` behave when the result leaves the `i64` range.
    pub overflow: OverflowPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_depth: DEFAULT_MAX_DEPTH,
            trailing_input: TrailingInput::default(),
            overflow: OverflowPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(source: &str) -> anyhow::Result<Config> {
        toml::from_str(source).context("parsing config toml")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Config> {
        let path = path.as_ref();
        info!("reading config from {}", path.display());
        let source = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Config::from_toml_str(&source)
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrailingInput {
    /// `1 2` fails with `UnexpectedInput` at `2`.
    #[default]
    Reject,
    /// `1 2` evaluates to `1`.
    Ignore,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    #[default]
    Checked,
    Saturating,
    Wrapping,
}
