use tracing::debug;

use crate::error::{CustomResourceError, EntryField};
use crate::types::{ResourceIdentifier, SupportedCustomResources, parse_group_version};

/// Parse a comma-separated flag value into a `SupportedCustomResources` set.
///
/// Each entry must use the format `<apiVersion>:<kind>`. Whitespace around
/// entries and fields is ignored, blank entries are skipped, and duplicates
/// collapse. The first invalid entry fails the whole parse.
///
/// Example:
/// ```rust
/// use vpa_target_config::parse_supported_custom_resources;
/// let set = parse_supported_custom_resources("k8s.sentio.xyz/v1:DriverJob, batch/v1:Job").unwrap();
/// assert!(set.contains("batch/v1", "Job"));
/// assert!(!set.contains("apps/v1", "Job"));
/// ```
pub fn parse_supported_custom_resources(
    flag_value: &str,
) -> Result<SupportedCustomResources, CustomResourceError> {
    let parsed = flag_value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_entry)
        .collect::<Result<SupportedCustomResources, _>>();

    match parsed {
        Ok(resources) => {
            debug!(
                event = "SupportedCustomResources",
                phase = "Parsed",
                count = resources.len(),
                resources = resources.to_string()
            );
            Ok(resources)
        }
        Err(err) => {
            debug!(
                event = "SupportedCustomResources",
                phase = "Rejected",
                entry = err.entry(),
                error = err.to_string()
            );
            Err(err)
        }
    }
}

/// Parse a single `<apiVersion>:<kind>` entry.
///
/// A `,` is rejected here as well, so every accepted entry can be written
/// back into a flag value unchanged.
pub(crate) fn parse_entry(entry: &str) -> Result<ResourceIdentifier, CustomResourceError> {
    let entry = entry.trim();
    let parts: Vec<&str> = entry.split(':').collect();
    let ([api_version, kind], false) = (parts.as_slice(), entry.contains(',')) else {
        return Err(CustomResourceError::MalformedEntry {
            entry: entry.to_string(),
        });
    };

    let api_version = api_version.trim();
    let kind = kind.trim();
    for (value, field) in [(api_version, EntryField::ApiVersion), (kind, EntryField::Kind)] {
        if value.is_empty() {
            return Err(CustomResourceError::EmptyField {
                entry: entry.to_string(),
                field,
            });
        }
    }

    parse_group_version(api_version).map_err(|source| CustomResourceError::InvalidApiVersion {
        api_version: api_version.to_string(),
        entry: entry.to_string(),
        source,
    })?;

    Ok(ResourceIdentifier::new(api_version, kind))
}
