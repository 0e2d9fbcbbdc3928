//! Kubernetes API `group/version` strings.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::GroupVersionError;

const DNS1123_SUBDOMAIN_MAX_LEN: usize = 253;
const DNS1123_LABEL_MAX_LEN: usize = 63;

static DNS1123_SUBDOMAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
        .expect("static subdomain pattern is valid")
});

static DNS1123_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").expect("static label pattern is valid")
});

/// A parsed API group and version, e.g. `batch/v1` or the core group's `v1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub struct GroupVersion {
    /// Empty for the core API group.
    group: String,
    version: String,
}

impl GroupVersion {
    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// True for apiVersions without a group segment, like `v1`.
    pub fn is_core(&self) -> bool {
        self.group.is_empty()
    }
}

impl Display for GroupVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.group.is_empty() {
            write!(f, "{}", self.version)
        } else {
            write!(f, "{}/{}", self.group, self.version)
        }
    }
}

impl FromStr for GroupVersion {
    type Err = GroupVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_group_version(s)
    }
}

/// Parse `<version>` or `<group>/<version>`.
///
/// The group must be a DNS-1123 subdomain and the version a DNS-1123 label,
/// which is what the API server accepts for custom resource definitions.
pub fn parse_group_version(api_version: &str) -> Result<GroupVersion, GroupVersionError> {
    let (group, version) = match api_version.split('/').collect::<Vec<_>>().as_slice() {
        [version] => ("", *version),
        [group, version] => {
            validate_group(group)?;
            (*group, *version)
        }
        _ => {
            return Err(GroupVersionError::TooManySegments {
                api_version: api_version.to_string(),
            });
        }
    };
    validate_version(version)?;

    Ok(GroupVersion {
        group: group.to_string(),
        version: version.to_string(),
    })
}

fn validate_group(group: &str) -> Result<(), GroupVersionError> {
    let reason = if group.is_empty() {
        "must be non-empty".to_string()
    } else if group.len() > DNS1123_SUBDOMAIN_MAX_LEN {
        format!("must be no more than {DNS1123_SUBDOMAIN_MAX_LEN} characters")
    } else if !DNS1123_SUBDOMAIN.is_match(group) {
        "must consist of lower case alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character".to_string()
    } else {
        return Ok(());
    };
    Err(GroupVersionError::InvalidGroup {
        group: group.to_string(),
        reason,
    })
}

fn validate_version(version: &str) -> Result<(), GroupVersionError> {
    let reason = if version.is_empty() {
        "must be non-empty".to_string()
    } else if version.len() > DNS1123_LABEL_MAX_LEN {
        format!("must be no more than {DNS1123_LABEL_MAX_LEN} characters")
    } else if !DNS1123_LABEL.is_match(version) {
        "must consist of lower case alphanumeric characters or '-', and must start and end with an alphanumeric character".to_string()
    } else {
        return Ok(());
    };
    Err(GroupVersionError::InvalidVersion {
        version: version.to_string(),
        reason,
    })
}
