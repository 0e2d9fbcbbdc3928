//! The `(apiVersion, kind)` pair naming a resource type.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{CustomResourceError, GroupVersionError};
use crate::parser::parse_entry;

use super::group_version::{GroupVersion, parse_group_version};

/// A resource type, e.g. `batch/v1` + `Job`.
///
/// Every value has passed the same checks as a flag entry, including when
/// deserialized, so it always renders back into a parseable entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", try_from = "RawResourceIdentifier")]
pub struct ResourceIdentifier {
    api_version: String,
    kind: String,
}

/// Unchecked wire form, validated through `TryFrom`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResourceIdentifier {
    api_version: String,
    kind: String,
}

impl TryFrom<RawResourceIdentifier> for ResourceIdentifier {
    type Error = CustomResourceError;

    fn try_from(raw: RawResourceIdentifier) -> Result<Self, Self::Error> {
        Self::try_new(&raw.api_version, &raw.kind)
    }
}

impl ResourceIdentifier {
    /// Construct from already-validated parts.
    pub(crate) fn new(api_version: impl Into<String>, kind: impl Into<String>) -> Self {
        ResourceIdentifier {
            api_version: api_version.into(),
            kind: kind.into(),
        }
    }

    /// Validate and construct from separate fields, trimming each like the parser does.
    pub fn try_new(api_version: &str, kind: &str) -> Result<Self, CustomResourceError> {
        parse_entry(&format!("{api_version}:{kind}"))
    }

    /// Take ownership of `(api_version, kind)`.
    pub(crate) fn into_parts(self) -> (String, String) {
        (self.api_version, self.kind)
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Split the apiVersion into its group and version.
    pub fn group_version(&self) -> Result<GroupVersion, GroupVersionError> {
        parse_group_version(&self.api_version)
    }
}

impl Display for ResourceIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}:{}", self.api_version, self.kind)
    }
}

impl FromStr for ResourceIdentifier {
    type Err = CustomResourceError;

    /// Accepts a single `<apiVersion>:<kind>` entry, e.g. `batch/v1:Job`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_entry(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[test]
    fn test_resource_identifier_display() {
        let id = ResourceIdentifier::new("k8s.sentio.xyz/v1", "DriverJob");
        assert_eq!(id.to_string(), "k8s.sentio.xyz/v1:DriverJob");
    }

    #[test]
    fn test_resource_identifier_from_str_trims() {
        let id: ResourceIdentifier = "  batch/v1 :  Job ".parse().unwrap();
        assert_eq!(id.api_version(), "batch/v1");
        assert_eq!(id.kind(), "Job");
    }

    #[test]
    fn test_resource_identifier_from_str_rejects_malformed() {
        let err = ResourceIdentifier::from_str("batch/v1").unwrap_err();
        assert!(matches!(err, CustomResourceError::MalformedEntry { .. }));
    }

    #[test]
    fn test_resource_identifier_group_version() {
        let id = ResourceIdentifier::new("autoscaling.k8s.io/v1", "VerticalPodAutoscaler");
        let gv = id.group_version().unwrap();
        assert_eq!(gv.group(), "autoscaling.k8s.io");
        assert_eq!(gv.version(), "v1");

        let core = ResourceIdentifier::new("v1", "Pod");
        assert!(core.group_version().unwrap().is_core());
    }

    #[test]
    fn test_fields_do_not_collide_across_boundary() {
        let a = ResourceIdentifier::new("a/v1", "b|c");
        let b = ResourceIdentifier::new("a/v1|b", "c");
        assert_ne!(a, b);
    }

    #[test]
    fn test_try_new_validates_and_trims() {
        let id = ResourceIdentifier::try_new(" batch/v1", "Job ").unwrap();
        assert_eq!(id, ResourceIdentifier::new("batch/v1", "Job"));
        assert_eq!(id.to_string().parse::<ResourceIdentifier>().unwrap(), id);
    }

    #[parameterized(
        bad_api_version = { "bad version!!", "Job" },
        colon_in_kind = { "batch/v1", "Job:Extra" },
        comma_in_kind = { "batch/v1", "A,b" },
        empty_kind = { "batch/v1", " " },
    )]
    fn test_try_new_rejects(api_version: &str, kind: &str) {
        assert!(ResourceIdentifier::try_new(api_version, kind).is_err());
    }

    #[parameterized(
        bad_api_version = { r#"{"apiVersion":"bad version!!","kind":"Job"}"# },
        separators_in_kind = { r#"{"apiVersion":"a/v1","kind":"A,b:c"}"# },
        empty_kind = { r#"{"apiVersion":"a/v1","kind":""}"# },
    )]
    fn test_deserialize_rejects_invalid_identifier(json: &str) {
        assert!(serde_json::from_str::<ResourceIdentifier>(json).is_err());
    }

    #[test]
    fn test_deserialize_reports_parser_error() {
        let err = serde_json::from_str::<ResourceIdentifier>(r#"{"apiVersion":"a/v1","kind":""}"#)
            .unwrap_err();
        assert!(
            err.to_string().contains("kind must be non-empty"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_resource_identifier_serialization() {
        let id = ResourceIdentifier::new("batch/v1", "Job");
        let serialized = serde_json::to_value(&id).unwrap();
        insta::assert_json_snapshot!(serialized, @r#"
        {
          "apiVersion": "batch/v1",
          "kind": "Job"
        }
        "#);
        let deserialized: ResourceIdentifier = serde_json::from_value(serialized).unwrap();
        assert_eq!(id, deserialized);
    }
}
