//! Error types for signal extraction.
//!
//! Signal queries never fail: missing tags, docstrings, overrides or
//! siblings resolve to "no value". The errors here cover the edges of the
//! crate where input enters it (decoding a declaration graph, loading
//! configuration) and the malformed-input reports produced by
//! [`Registry::validate`](crate::model::Registry::validate).

use std::path::PathBuf;
use thiserror::Error;

use crate::model::{DeclarationId, ScopeId};

/// Main error type for docsignal operations
#[derive(Debug, Error)]
pub enum SignalError {
    /// A declaration refers to another declaration that does not exist
    #[error("Dangling reference from {from}: {field} points at missing declaration #{target}")]
    DanglingDeclaration {
        from: String,
        field: &'static str,
        target: DeclarationId,
    },

    /// A declaration names a parent scope that does not exist
    #[error("Dangling reference from {from}: parent scope #{target} does not exist")]
    DanglingScope { from: String, target: ScopeId },

    /// A tag is missing a field its kind requires
    #[error("Malformed @{tag} tag on {fullname}: {message}")]
    MalformedTag {
        fullname: String,
        tag: String,
        message: String,
    },

    /// Two members of one scope share a name
    #[error("Scope {scope} has more than one member named {name}")]
    DuplicateMember { scope: String, name: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        path: Option<PathBuf>,
    },

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SignalError {
    /// Create a malformed tag error
    pub fn malformed_tag(
        fullname: impl Into<String>,
        tag: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedTag {
            fullname: fullname.into(),
            tag: tag.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error with optional path context
    pub fn configuration(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Configuration {
            message: message.into(),
            path,
        }
    }

    /// Whether this error describes malformed parser output rather than an
    /// environment failure. Malformed input is never fatal to an analysis pass.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::DanglingDeclaration { .. }
                | Self::DanglingScope { .. }
                | Self::MalformedTag { .. }
                | Self::DuplicateMember { .. }
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, SignalError>;
