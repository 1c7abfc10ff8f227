//! Structured error types shared across netgrow crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`NetError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (labels, sizes, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the growth engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum NetError {
    /// Non-positive sizes, unknown nodes or out-of-range plan parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(ErrorInfo),
    /// Random attachment could not find enough non-self candidates.
    #[error("insufficient candidates: {0}")]
    InsufficientCandidates(ErrorInfo),
    /// Statistics requested on a network without nodes.
    #[error("empty network statistics: {0}")]
    EmptyNetworkStatistics(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl NetError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            NetError::InvalidConfiguration(info)
            | NetError::InsufficientCandidates(info)
            | NetError::EmptyNetworkStatistics(info)
            | NetError::Serde(info) => info,
        }
    }

    /// Shorthand for an [`NetError::InvalidConfiguration`] error.
    pub fn invalid(code: impl Into<String>, message: impl Into<String>) -> Self {
        NetError::InvalidConfiguration(ErrorInfo::new(code, message))
    }

    /// Returns whether the failed call may be retried unchanged.
    ///
    /// Only candidate shortages depend on the random draw; every other family
    /// fails identically on a second attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, NetError::InsufficientCandidates(_))
    }

    /// Adds a context entry to the payload regardless of the error family.
    pub fn with_context(self, key: impl Into<String>, value: impl ToString) -> Self {
        match self {
            NetError::InvalidConfiguration(info) => {
                NetError::InvalidConfiguration(info.with_context(key, value))
            }
            NetError::InsufficientCandidates(info) => {
                NetError::InsufficientCandidates(info.with_context(key, value))
            }
            NetError::EmptyNetworkStatistics(info) => {
                NetError::EmptyNetworkStatistics(info.with_context(key, value))
            }
            NetError::Serde(info) => NetError::Serde(info.with_context(key, value)),
        }
    }
}
