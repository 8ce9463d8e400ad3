//! Asset path conventions.

use std::path::{Path, PathBuf};

/// Examples file name used when no suffix is requested.
pub const DEFAULT_EXAMPLES_FILE: &str = "examples.md";

/// Maps a component file to the expected location of one of its assets.
///
/// Implementations are pure: they compute paths and never touch the
/// filesystem. Existence is checked by callers.
pub trait AssetLocator: Send + Sync {
    /// Expected path of the asset `suffix` for `component`, or of its
    /// examples document when `suffix` is `None`.
    fn resolve(&self, component: &Path, suffix: Option<&str>) -> PathBuf;
}

impl<F> AssetLocator for F
where
    F: Fn(&Path, Option<&str>) -> PathBuf + Send + Sync,
{
    fn resolve(&self, component: &Path, suffix: Option<&str>) -> PathBuf {
        self(component, suffix)
    }
}

/// Default convention: assets sit next to the component, in its directory.
#[derive(Debug, Clone)]
pub struct SiblingLocator {
    examples_file: String,
}

impl SiblingLocator {
    /// Create a locator using `examples_file` as the examples document name.
    pub fn new(examples_file: impl Into<String>) -> Self {
        Self {
            examples_file: examples_file.into(),
        }
    }
}

impl Default for SiblingLocator {
    fn default() -> Self {
        Self::new(DEFAULT_EXAMPLES_FILE)
    }
}

impl AssetLocator for SiblingLocator {
    fn resolve(&self, component: &Path, suffix: Option<&str>) -> PathBuf {
        let dir = component.parent().unwrap_or(Path::new(""));
        dir.join(suffix.unwrap_or(&self.examples_file))
    }
}
