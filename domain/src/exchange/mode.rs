//! Exchange mode selection.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How questions reach the proxy
///
/// | mode | message content | metadata | network |
/// |---|---|---|---|
/// | `Stateless` | instructions + article + question | none | yes |
/// | `Session` | bare question | article + session id | yes |
/// | `Dummy` | — | — | no |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeMode {
    #[default]
    Stateless,
    Session,
    Dummy,
}

/// Payload layout produced by the request builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    /// Full article embedded in a single user message every turn.
    Stateless,
    /// Bare question, article carried in the metadata block.
    Session,
}

impl ExchangeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExchangeMode::Stateless => "stateless",
            ExchangeMode::Session => "session",
            ExchangeMode::Dummy => "dummy",
        }
    }

    /// Payload layout for this mode, or `None` when nothing is sent.
    pub fn payload_shape(&self) -> Option<PayloadShape> {
        match self {
            ExchangeMode::Stateless => Some(PayloadShape::Stateless),
            ExchangeMode::Session => Some(PayloadShape::Session),
            ExchangeMode::Dummy => None,
        }
    }

    pub fn is_dummy(&self) -> bool {
        matches!(self, ExchangeMode::Dummy)
    }
}

impl std::fmt::Display for ExchangeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExchangeMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stateless" | "full" => Ok(ExchangeMode::Stateless),
            "session" => Ok(ExchangeMode::Session),
            "dummy" | "offline" => Ok(ExchangeMode::Dummy),
            other => Err(DomainError::UnknownExchangeMode(other.to_string())),
        }
    }
}
