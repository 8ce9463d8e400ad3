//! Style guide configuration.
//!
//! `StyleguideConfig` is the immutable context handed by reference to every
//! builder. It can be assembled in code (which allows producer functions and
//! custom locators) or loaded from a `styleguide.toml` file.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::components::ComponentSpec;
use crate::locator::{AssetLocator, SiblingLocator, DEFAULT_EXAMPLES_FILE};
use crate::paths::{absolutize, normalize};
use crate::section::SectionDef;

/// Computes the path line shown under a component's heading from its
/// path relative to the base directory.
pub type PathLineFn = Arc<dyn Fn(&Path) -> String + Send + Sync>;

/// Configuration for one compile pass.
#[derive(Clone)]
pub struct StyleguideConfig {
    /// Directory that relative paths and patterns are resolved against
    pub base_dir: PathBuf,

    /// Asset naming convention
    pub locator: Arc<dyn AssetLocator>,

    /// Display path line for a component
    pub path_line: PathLineFn,

    /// Top-level components
    pub components: Option<ComponentSpec>,

    /// Top-level sections
    pub sections: Option<Vec<SectionDef>>,

    /// Drop components that have no examples document
    pub skip_components_without_example: bool,

    /// Template used when a component has no examples of its own
    pub default_example: Option<PathBuf>,

    /// Base path for design images
    pub image_path: String,

    /// Style guide title
    pub title: String,

    /// Expand example source code by default
    pub show_code: bool,

    /// Syntax highlighting theme
    pub highlight_theme: String,
}

impl Default for StyleguideConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            locator: Arc::new(SiblingLocator::default()),
            path_line: Arc::new(|relative: &Path| relative.display().to_string()),
            components: None,
            sections: None,
            skip_components_without_example: false,
            default_example: None,
            image_path: String::new(),
            title: default_title(),
            show_code: false,
            highlight_theme: default_highlight_theme(),
        }
    }
}

impl fmt::Debug for StyleguideConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleguideConfig")
            .field("base_dir", &self.base_dir)
            .field("components", &self.components)
            .field("sections", &self.sections)
            .field(
                "skip_components_without_example",
                &self.skip_components_without_example,
            )
            .field("default_example", &self.default_example)
            .field("image_path", &self.image_path)
            .field("title", &self.title)
            .field("show_code", &self.show_code)
            .field("highlight_theme", &self.highlight_theme)
            .finish_non_exhaustive()
    }
}

impl StyleguideConfig {
    /// Absolute, normalized base directory.
    pub fn base_dir(&self) -> PathBuf {
        let absolute = std::path::absolute(&self.base_dir).unwrap_or_else(|_| self.base_dir.clone());
        normalize(&absolute)
    }

    /// Resolve a configured path against the base directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        absolutize(&self.base_dir(), path)
    }

    /// Expected path of a component asset; `None` asks for the examples file.
    pub fn example_filename(&self, component: &Path, suffix: Option<&str>) -> PathBuf {
        self.locator.resolve(component, suffix)
    }

    /// Display path line for a component path relative to the base directory.
    pub fn path_line(&self, relative: &Path) -> String {
        (self.path_line)(relative)
    }

    /// Load a configuration file. Relative paths in it are resolved against
    /// the file's directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config_dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let config = Self::from_toml_str(&content, config_dir)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str, config_dir: &Path) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.into_config(config_dir))
    }
}

/// Errors that can occur when loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config")]
    Parse(#[from] toml::de::Error),
}

/// Configuration file structure (styleguide.toml).
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default = "default_title")]
    title: String,
    base_dir: Option<PathBuf>,
    components: Option<String>,
    sections: Option<Vec<SectionFile>>,
    #[serde(default)]
    skip_components_without_example: bool,
    default_example: Option<PathBuf>,
    #[serde(default)]
    image_path: String,
    #[serde(default)]
    show_code: bool,
    #[serde(default = "default_highlight_theme")]
    highlight_theme: String,
    #[serde(default = "default_examples_file")]
    examples_file: String,
}

#[derive(Debug, Deserialize)]
struct SectionFile {
    name: String,
    content: Option<PathBuf>,
    components: Option<String>,
    sections: Option<Vec<SectionFile>>,
}

fn default_title() -> String {
    "Style guide".to_string()
}
fn default_highlight_theme() -> String {
    "base16-light".to_string()
}
fn default_examples_file() -> String {
    DEFAULT_EXAMPLES_FILE.to_string()
}

impl ConfigFile {
    fn into_config(self, config_dir: &Path) -> StyleguideConfig {
        let base_dir = match self.base_dir {
            Some(dir) => absolutize(config_dir, &dir),
            None => config_dir.to_path_buf(),
        };
        let default_example = self.default_example.map(|p| absolutize(&base_dir, &p));

        StyleguideConfig {
            locator: Arc::new(SiblingLocator::new(self.examples_file)),
            components: self.components.map(ComponentSpec::Pattern),
            sections: self
                .sections
                .map(|sections| sections.into_iter().map(SectionFile::into_def).collect()),
            skip_components_without_example: self.skip_components_without_example,
            default_example,
            image_path: self.image_path,
            title: self.title,
            show_code: self.show_code,
            highlight_theme: self.highlight_theme,
            base_dir,
            ..StyleguideConfig::default()
        }
    }
}

impl SectionFile {
    fn into_def(self) -> SectionDef {
        SectionDef {
            name: self.name,
            content: self.content,
            components: self.components.map(ComponentSpec::Pattern),
            sections: self
                .sections
                .map(|sections| sections.into_iter().map(SectionFile::into_def).collect()),
        }
    }
}
