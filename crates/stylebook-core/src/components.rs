//! Component set resolution.
//!
//! Expands a section's component specification into an ordered list of
//! absolute file paths.

use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use globset::{GlobBuilder, GlobMatcher};
use walkdir::WalkDir;

use crate::config::StyleguideConfig;
use crate::entry::{build_entry, ComponentEntry};
use crate::error::CompileError;
use crate::paths::absolutize;

/// Where a section's components come from.
#[derive(Clone)]
pub enum ComponentSpec {
    /// Shell-style glob relative to the base directory
    Pattern(String),
    /// Custom enumeration; paths may be absolute or relative to the base directory
    Producer(Arc<dyn Fn() -> Vec<PathBuf> + Send + Sync>),
}

impl ComponentSpec {
    /// Glob pattern spec.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::Pattern(pattern.into())
    }

    /// Producer function spec.
    pub fn producer<F>(producer: F) -> Self
    where
        F: Fn() -> Vec<PathBuf> + Send + Sync + 'static,
    {
        Self::Producer(Arc::new(producer))
    }
}

impl fmt::Debug for ComponentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(pattern) => f.debug_tuple("Pattern").field(pattern).finish(),
            Self::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

impl From<&str> for ComponentSpec {
    fn from(pattern: &str) -> Self {
        Self::pattern(pattern)
    }
}

/// Resolve a component spec into absolute file paths.
///
/// Order follows the expansion: producer output as returned, glob matches in
/// directory traversal order. Duplicates are passed through.
pub fn resolve_components(
    spec: Option<&ComponentSpec>,
    config: &StyleguideConfig,
) -> Result<Vec<PathBuf>, CompileError> {
    let Some(spec) = spec else {
        return Ok(Vec::new());
    };

    let base_dir = config.base_dir();

    let files = match spec {
        ComponentSpec::Producer(producer) => (**producer)(),
        ComponentSpec::Pattern(pattern) => expand_pattern(pattern, &base_dir)?,
    };

    let mut files: Vec<PathBuf> = files
        .iter()
        .map(|file| absolutize(&base_dir, file))
        .collect();

    tracing::debug!("Loading components: {:#?}", files);

    if config.skip_components_without_example {
        files.retain(|file| config.example_filename(file, None).exists());
    }

    Ok(files)
}

/// Resolve a component spec and build an entry for every file.
///
/// An absent spec yields `None`, which renderers distinguish from an empty
/// list.
pub fn build_component_list(
    spec: Option<&ComponentSpec>,
    config: &StyleguideConfig,
) -> Result<Option<Vec<ComponentEntry>>, CompileError> {
    if spec.is_none() {
        return Ok(None);
    }

    let files = resolve_components(spec, config)?;
    Ok(Some(
        files.iter().map(|file| build_entry(file, config)).collect(),
    ))
}

/// Check that the base directory exists and is a directory.
pub fn check_base_dir(base_dir: &Path) -> Result<(), CompileError> {
    let metadata = fs::metadata(base_dir).map_err(|source| CompileError::BaseDirectory {
        path: base_dir.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(CompileError::NotADirectory(base_dir.to_path_buf()));
    }
    Ok(())
}

/// Expand a glob pattern against the base directory.
fn expand_pattern(pattern: &str, base_dir: &Path) -> Result<Vec<PathBuf>, CompileError> {
    if pattern.trim().is_empty() {
        return Ok(Vec::new());
    }

    check_base_dir(base_dir)?;

    let (prefix, glob) = split_glob_prefix(pattern);
    let root = absolutize(base_dir, Path::new(prefix));

    let Some(glob) = glob else {
        // No wildcards: the pattern names a single file
        return Ok(if root.is_file() { vec![root] } else { Vec::new() });
    };

    let matcher = compile_glob(pattern, glob)?;
    let hidden = HiddenSegments::new(pattern, glob)?;

    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let walker = WalkDir::new(&root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || hidden.allows(entry.file_name()));

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| CompileError::Walk {
            root: root.clone(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Ok(relative) = path.strip_prefix(&root) else {
            continue;
        };
        if matcher.is_match(relative) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

fn compile_glob(pattern: &str, glob: &str) -> Result<GlobMatcher, CompileError> {
    GlobBuilder::new(glob)
        .literal_separator(true)
        .build()
        .map(|g| g.compile_matcher())
        .map_err(|source| CompileError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Dot-prefixed pattern segments.
///
/// Wildcards never match a leading `.`: a hidden file or directory is only
/// walked into when some pattern segment itself starts with a dot and
/// matches the name.
struct HiddenSegments {
    segments: Vec<GlobMatcher>,
}

impl HiddenSegments {
    fn new(pattern: &str, glob: &str) -> Result<Self, CompileError> {
        let segments = glob
            .split('/')
            .filter(|segment| segment.starts_with('.'))
            .map(|segment| compile_glob(pattern, segment))
            .collect::<Result<_, _>>()?;
        Ok(Self { segments })
    }

    fn allows(&self, name: &OsStr) -> bool {
        !name.to_string_lossy().starts_with('.') || self.segments.iter().any(|m| m.is_match(name))
    }
}

/// Split a glob pattern into (directory_prefix, glob_suffix).
///
/// The prefix is the run of whole path segments before the first wildcard,
/// so the walker can start from a narrowed root. A pattern without
/// wildcards has no suffix.
fn split_glob_prefix(pattern: &str) -> (&str, Option<&str>) {
    let Some(wildcard_pos) = pattern.find(['*', '?', '[', '{']) else {
        return (pattern, None);
    };

    match pattern[..wildcard_pos].rfind('/') {
        Some(slash) => (&pattern[..slash], Some(&pattern[slash + 1..])),
        None => ("", Some(pattern)),
    }
}
