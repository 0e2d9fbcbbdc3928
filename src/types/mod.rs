//! Data model for the custom resource allow-list.
//!
//! Canonical string forms:
//! - GroupVersion: `v1` (core group) or `batch/v1`
//! - ResourceIdentifier: `batch/v1:Job`
//! - SupportedCustomResources: `batch/v1:Job,k8s.sentio.xyz/v1:DriverJob`

mod group_version;
mod resource_identifier;
mod supported_custom_resources;

pub use group_version::{GroupVersion, parse_group_version};
pub use resource_identifier::ResourceIdentifier;
pub use supported_custom_resources::SupportedCustomResources;
