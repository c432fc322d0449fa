//! Pipeline configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How Take/Skip treat a negative count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowPolicy {
    /// Negative counts act as zero.
    #[default]
    Clamp,
    /// Negative counts fault the pipeline with `NegativeParam`.
    Strict,
}

impl std::str::FromStr for WindowPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(WindowPolicy::Clamp),
            "strict" => Ok(WindowPolicy::Strict),
            other => Err(Error::Config(format!("unknown window policy '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Negative-count handling for Take/Skip. Counts beyond the sequence
    /// length always clamp.
    pub window_policy: WindowPolicy,

    /// Emit a trace event per evaluated operator (needs the `tracing`
    /// feature of `linq-operators`).
    pub trace_operators: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            window_policy: WindowPolicy::Clamp,
            trace_operators: true,
        }
    }
}

impl PipelineConfig {
    /// Strict variant of the defaults.
    pub fn strict() -> Self {
        Self {
            window_policy: WindowPolicy::Strict,
            ..Self::default()
        }
    }

    /// Build a config from environment variables, falling back to defaults.
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("LINQ_WINDOW_POLICY") {
            if let Ok(v) = s.parse::<WindowPolicy>() {
                cfg.window_policy = v;
            }
        }

        if let Ok(s) = std::env::var("LINQ_TRACE_OPERATORS") {
            if let Some(v) = parse_flag(&s) {
                cfg.trace_operators = v;
            }
        }

        cfg
    }

    /// Parse a JSON config document; missing fields take their defaults.
    pub fn from_json(doc: &str) -> Result<Self> {
        Ok(serde_json::from_str(doc)?)
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
