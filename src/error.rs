use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use thiserror::Error;

/// The two halves of an `<apiVersion>:<kind>` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum EntryField {
    #[strum(serialize = "apiVersion")]
    ApiVersion,
    #[strum(serialize = "kind")]
    Kind,
}

/// Syntax errors for a Kubernetes `group/version` string.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GroupVersionError {
    #[error("unexpected GroupVersion string: {api_version}")]
    TooManySegments { api_version: String },

    #[error("invalid API group \"{group}\": {reason}")]
    InvalidGroup { group: String, reason: String },

    #[error("invalid API version \"{version}\": {reason}")]
    InvalidVersion { version: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CustomResourceError {
    #[error("invalid custom resource entry \"{entry}\", expected <apiVersion>:<kind>")]
    MalformedEntry { entry: String },

    #[error("invalid custom resource entry \"{entry}\", {field} must be non-empty")]
    EmptyField { entry: String, field: EntryField },

    #[error("invalid apiVersion \"{api_version}\" for custom resource entry \"{entry}\": {source}")]
    InvalidApiVersion {
        api_version: String,
        entry: String,
        #[source]
        source: GroupVersionError,
    },
}

impl CustomResourceError {
    /// The trimmed entry text that caused the parse to fail.
    pub fn entry(&self) -> &str {
        match self {
            Self::MalformedEntry { entry }
            | Self::EmptyField { entry, .. }
            | Self::InvalidApiVersion { entry, .. } => entry,
        }
    }
}
