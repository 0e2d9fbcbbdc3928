// src/lib.rs
pub use error::{CustomResourceError, EntryField, GroupVersionError};
pub use parser::parse_supported_custom_resources;
pub use types::{GroupVersion, ResourceIdentifier, SupportedCustomResources, parse_group_version};

mod error;
mod parser;
mod types;
