//! Per-request staging directory lifecycle.
//!
//! A [`StagingRoot`] exclusively owns every file generated for one request.
//! It is created with a caller-supplied unique token (the handler passes a
//! UUID), filled best-effort from rendered content, walked to enumerate
//! archive entries, and deleted recursively when dropped — on success,
//! error, or client disconnect alike.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GeneratorError;
use crate::models::ProjectRequest;
use crate::render::{self, GeneratedFile};

/// Prefix for staging directory names under the configured base.
const STAGING_PREFIX: &str = "generated-project";

/// A uniquely named staging directory owning one request's generated tree.
///
/// Dropping the value deletes the tree. The unique `token` comes from the
/// caller so this type never reads the clock or any process-global state.
#[derive(Debug)]
pub struct StagingRoot {
    path: PathBuf,
}

impl StagingRoot {
    /// Create `base/generated-project-<token>`, creating `base` itself if
    /// needed. Creating an already-existing directory is not an error.
    pub fn create(base: &Path, token: &str) -> Result<Self, GeneratorError> {
        let path = base.join(format!("{STAGING_PREFIX}-{token}"));
        fs::create_dir_all(&path).map_err(|source| GeneratorError::StagingCreate {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the full generated tree for `request` under this root.
    ///
    /// Creates the project's directory skeleton (main/test source trees
    /// namespaced by the package, resources, wrapper directory), then writes
    /// each rendered file. Failures are per-file: each is logged and
    /// collected, and the remaining files are still written, so a malformed
    /// request degrades to an incomplete tree rather than an aborted request.
    pub fn create_project_structure(&self, request: &ProjectRequest) -> Vec<GeneratorError> {
        let mut failures = Vec::new();
        let package_dir = render::package_path(&request.package_name);

        for dir in [
            format!("src/main/{package_dir}"),
            "src/main/resources".to_string(),
            format!("src/test/{package_dir}"),
            ".mvn/wrapper".to_string(),
        ] {
            let path = self.path.join(dir);
            if let Err(source) = fs::create_dir_all(&path) {
                tracing::warn!("failed to create directory {}: {}", path.display(), source);
                failures.push(GeneratorError::StagingWrite { path, source });
            }
        }

        for file in render::project_files(request) {
            if let Err(err) = self.write_file(&file) {
                tracing::warn!("skipping file: {}", err);
                failures.push(err);
            }
        }

        failures
    }

    fn write_file(&self, file: &GeneratedFile) -> Result<(), GeneratorError> {
        let path = self.path.join(&file.path);
        let write = |path: &Path| -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &file.content)
        };
        write(&path).map_err(|source| GeneratorError::StagingWrite { path, source })
    }

    /// Enumerate every regular file under this root as
    /// `(forward-slash relative path, absolute path)`, sorted by relative
    /// path so archive entry order is stable across filesystems.
    pub fn regular_files(&self) -> Result<Vec<(String, PathBuf)>, GeneratorError> {
        let mut files = Vec::new();
        collect_regular_files(&self.path, String::new(), &mut files).map_err(|source| {
            GeneratorError::StagingWalk {
                path: self.path.clone(),
                source,
            }
        })?;
        files.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(files)
    }
}

impl Drop for StagingRoot {
    fn drop(&mut self) {
        remove_tree(&self.path);
    }
}

fn collect_regular_files(
    dir: &Path,
    prefix: String,
    files: &mut Vec<(String, PathBuf)>,
) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let relative = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}/{name}")
        };

        if file_type.is_dir() {
            collect_regular_files(&entry.path(), relative, files)?;
        } else if file_type.is_file() {
            files.push((relative, entry.path()));
        }
    }
    Ok(())
}

/// Post-order recursive delete: children first, then the directory itself.
/// Each entry that cannot be removed is logged and skipped; deletion never
/// panics and never masks an earlier request error.
fn remove_tree(path: &Path) {
    match fs::read_dir(path) {
        Ok(entries) => {
            for entry in entries.flatten() {
                let child = entry.path();
                if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                    remove_tree(&child);
                } else if let Err(err) = fs::remove_file(&child) {
                    tracing::warn!("failed to remove {}: {}", child.display(), err);
                }
            }
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return,
        Err(err) => {
            tracing::warn!("failed to read {}: {}", path.display(), err);
        }
    }

    if let Err(err) = fs::remove_dir(path) {
        tracing::warn!("failed to remove {}: {}", path.display(), err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_request() -> ProjectRequest {
        ProjectRequest {
            package_name: "com.acme.demo".into(),
            domain_name: "com.acme".into(),
            description: "Demo service".into(),
            dependencies: String::new(),
        }
    }

    #[test]
    fn create_is_idempotent_for_the_same_token() {
        let base = tempfile::tempdir().unwrap();
        let first = StagingRoot::create(base.path(), "token").unwrap();
        let second = StagingRoot::create(base.path(), "token").unwrap();
        assert_eq!(first.path(), second.path());
    }

    #[test]
    fn distinct_tokens_get_distinct_roots() {
        let base = tempfile::tempdir().unwrap();
        let a = StagingRoot::create(base.path(), "a").unwrap();
        let b = StagingRoot::create(base.path(), "b").unwrap();
        assert_ne!(a.path(), b.path());
    }

    #[test]
    fn structure_writes_all_files_and_directories() {
        let base = tempfile::tempdir().unwrap();
        let staging = StagingRoot::create(base.path(), "t").unwrap();

        let failures = staging.create_project_structure(&demo_request());
        assert!(failures.is_empty());

        assert!(staging.path().join("pom.xml").is_file());
        assert!(staging
            .path()
            .join("src/main/com/acme/demo/Application")
            .is_file());
        assert!(staging.path().join("src/test/com/acme/demo").is_dir());
        assert!(staging
            .path()
            .join(".mvn/wrapper/maven-wrapper.properties")
            .is_file());
    }

    #[test]
    fn regular_files_are_relative_and_sorted() {
        let base = tempfile::tempdir().unwrap();
        let staging = StagingRoot::create(base.path(), "t").unwrap();
        staging.create_project_structure(&demo_request());

        let files = staging.regular_files().unwrap();
        let names: Vec<_> = files.iter().map(|(name, _)| name.clone()).collect();

        assert_eq!(names.len(), 9);
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.contains(&"src/main/com/acme/demo/Application".to_string()));
        // empty directories (test source tree) are not regular files
        assert!(!names.iter().any(|n| n.starts_with("src/test")));
    }

    #[test]
    fn drop_removes_the_whole_tree() {
        let base = tempfile::tempdir().unwrap();
        let path = {
            let staging = StagingRoot::create(base.path(), "t").unwrap();
            staging.create_project_structure(&demo_request());
            staging.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn drop_tolerates_an_already_removed_root() {
        let base = tempfile::tempdir().unwrap();
        let staging = StagingRoot::create(base.path(), "t").unwrap();
        fs::remove_dir_all(staging.path()).unwrap();
        drop(staging); // must not panic
    }
}
