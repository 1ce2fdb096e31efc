//! Runtime configuration loaded from environment variables.

use std::path::PathBuf;

/// Generator configuration shared with every request handler.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Base directory under which per-request staging roots are created
    /// (from PROJGEN_STAGING_DIR, default: the OS temp directory).
    pub staging_base: PathBuf,
}

impl GeneratorConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let staging_base = std::env::var("PROJGEN_STAGING_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| std::env::temp_dir());

        Self { staging_base }
    }

    /// Create a config with an explicit staging base (for testing).
    pub fn with_staging_base(path: impl Into<PathBuf>) -> Self {
        Self {
            staging_base: path.into(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
