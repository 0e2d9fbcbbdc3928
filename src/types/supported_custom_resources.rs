//! The allow-list of custom resource types accepted as autoscaling targets.

use std::collections::{HashMap, HashSet};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CustomResourceError;
use crate::parser::parse_supported_custom_resources;

use super::resource_identifier::ResourceIdentifier;

/// An immutable set of resource types, built once from configuration and then
/// only queried. Safe to share across threads without locking.
///
/// Kinds are grouped under their apiVersion, so a lookup borrows both query
/// strings and two distinct pairs can never share a key.
///
/// Renders (and serializes) as the canonical flag value: entries sorted and
/// joined by `,`, e.g. `batch/v1:Job,k8s.sentio.xyz/v1:DriverJob`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportedCustomResources(HashMap<String, HashSet<String>>);

impl SupportedCustomResources {
    /// Check whether the `apiVersion`/`kind` pair is in the set.
    ///
    /// Arguments are compared verbatim. An empty set answers `false` without
    /// touching the arguments.
    pub fn contains(&self, api_version: &str, kind: &str) -> bool {
        if self.0.is_empty() {
            return false;
        }
        self.0
            .get(api_version)
            .is_some_and(|kinds| kinds.contains(kind))
    }

    pub fn contains_identifier(&self, id: &ResourceIdentifier) -> bool {
        self.contains(id.api_version(), id.kind())
    }

    /// Number of distinct resource types.
    pub fn len(&self) -> usize {
        self.0.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every member, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = ResourceIdentifier> + '_ {
        self.0.iter().flat_map(|(api_version, kinds)| {
            kinds
                .iter()
                .map(move |kind| ResourceIdentifier::new(api_version.as_str(), kind.as_str()))
        })
    }
}

/// Identifiers can only be obtained through validation, so any collected set
/// renders back into a flag value the parser accepts.
impl FromIterator<ResourceIdentifier> for SupportedCustomResources {
    fn from_iter<I: IntoIterator<Item = ResourceIdentifier>>(iter: I) -> Self {
        let mut resources: HashMap<String, HashSet<String>> = HashMap::new();
        for id in iter {
            let (api_version, kind) = id.into_parts();
            resources.entry(api_version).or_default().insert(kind);
        }
        SupportedCustomResources(resources)
    }
}

impl Display for SupportedCustomResources {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.iter().sorted().join(","))
    }
}

impl FromStr for SupportedCustomResources {
    type Err = CustomResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_supported_custom_resources(s)
    }
}

impl Serialize for SupportedCustomResources {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SupportedCustomResources {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
