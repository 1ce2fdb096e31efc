use serde::{Deserialize, Serialize};

/// Metadata describing the project to generate.
///
/// All fields are plain text and default to the empty string when absent.
/// `dependencies` is a pre-formatted block of Maven `<dependency>` snippets
/// that is spliced into the build descriptor verbatim — this service does
/// not parse, validate, or escape it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRequest {
    /// Dot-separated package identifier (e.g. `com.acme.demo`). Becomes the
    /// package declaration of the entry point and its directory path.
    pub package_name: String,
    /// Build group identifier (e.g. `com.acme`). Becomes the `<groupId>`.
    pub domain_name: String,
    /// Free-text project description, embedded in the README.
    pub description: String,
    /// Pre-formatted dependency declarations, opaque to this service.
    pub dependencies: String,
}
