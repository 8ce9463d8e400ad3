//! Deferred reference resolution.
//!
//! Walks a serialized tree and replaces every resource handle with the value
//! produced by the loader registered for its kind. Handles resolve
//! independently; a failing resource fails the resolution and is reported
//! with its request string.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::{json, Map, Value};

use stylebook_mdx::{parse_examples, ExampleParams};
use stylebook_props::{ExtractError, PropsDoc, PropsExtractor};

use crate::reference::{HandleError, ResourceKind, ResourceRef};

/// Produces the realized value for a handle.
pub trait ResourceLoader: Send + Sync {
    fn load(&self, handle: &ResourceRef) -> Result<Value, LoadError>;
}

/// Errors raised by individual loaders.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to extract props from {}", path.display())]
    Extract {
        path: PathBuf,
        #[source]
        source: ExtractError,
    },

    #[error("Failed to encode loaded value")]
    Encode(#[from] serde_json::Error),
}

/// Errors that can occur while resolving a tree.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("No loader registered for '{0}' resources")]
    NoLoader(ResourceKind),

    #[error("Malformed resource handle")]
    Handle(#[from] HandleError),

    #[error("Failed to load {request}")]
    Load {
        request: String,
        #[source]
        source: LoadError,
    },
}

/// Loaders keyed by resource kind.
#[derive(Default)]
pub struct LoaderRegistry {
    loaders: HashMap<ResourceKind, Box<dyn ResourceLoader>>,
}

impl LoaderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in examples, module and props loaders.
    pub fn with_defaults(extractor: Arc<dyn PropsExtractor>) -> Self {
        let mut registry = Self::new();
        registry.register(ResourceKind::Examples, ExamplesLoader);
        registry.register(ResourceKind::Module, ModuleLoader);
        registry.register(ResourceKind::Props, PropsLoader::new(extractor));
        registry
    }

    /// Register or replace the loader for a kind.
    pub fn register(&mut self, kind: ResourceKind, loader: impl ResourceLoader + 'static) {
        self.loaders.insert(kind, Box::new(loader));
    }

    /// Check if a loader is registered for a kind.
    pub fn contains(&self, kind: ResourceKind) -> bool {
        self.loaders.contains_key(&kind)
    }

    /// Load a single handle.
    pub fn load(&self, handle: &ResourceRef) -> Result<Value, ResolveError> {
        let loader = self
            .loaders
            .get(&handle.kind)
            .ok_or(ResolveError::NoLoader(handle.kind))?;

        loader.load(handle).map_err(|source| ResolveError::Load {
            request: handle.to_string(),
            source,
        })
    }

    /// Replace every handle in a serialized tree with its loaded value.
    pub fn resolve_artifact(&self, artifact: &Value) -> Result<Value, ResolveError> {
        if let Some(handle) = ResourceRef::from_handle(artifact) {
            let handle = handle?;
            tracing::debug!("Resolving {}", handle);
            return self.load(&handle);
        }

        match artifact {
            Value::Array(items) => items
                .iter()
                .map(|item| self.resolve_artifact(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            Value::Object(fields) => {
                let mut out = Map::with_capacity(fields.len());
                for (key, value) in fields {
                    out.insert(key.clone(), self.resolve_artifact(value)?);
                }
                Ok(Value::Object(out))
            }
            scalar => Ok(scalar.clone()),
        }
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses examples and design documents into example blocks.
#[derive(Debug, Default)]
pub struct ExamplesLoader;

impl ResourceLoader for ExamplesLoader {
    fn load(&self, handle: &ResourceRef) -> Result<Value, LoadError> {
        let source = read(&handle.path)?;
        let params = ExampleParams {
            image_path: handle.param("imagePath").map(str::to_string),
            component_name: handle.param("componentName").map(str::to_string),
        };
        Ok(serde_json::to_value(parse_examples(&source, &params))?)
    }
}

/// Loads a component module's source text.
#[derive(Debug, Default)]
pub struct ModuleLoader;

impl ResourceLoader for ModuleLoader {
    fn load(&self, handle: &ResourceRef) -> Result<Value, LoadError> {
        let source = read(&handle.path)?;
        Ok(json!({
            "path": handle.path.to_string_lossy(),
            "source": source,
        }))
    }
}

/// Runs a props extractor over a component's source.
///
/// Files whose extension the extractor does not claim get an empty props
/// document, so mixed-language component sets still resolve.
pub struct PropsLoader {
    extractor: Arc<dyn PropsExtractor>,
}

impl PropsLoader {
    pub fn new(extractor: Arc<dyn PropsExtractor>) -> Self {
        Self { extractor }
    }

    /// Check if the extractor handles this file.
    pub fn handles(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extractor.extensions().iter().any(|known| *known == ext))
    }
}

impl ResourceLoader for PropsLoader {
    fn load(&self, handle: &ResourceRef) -> Result<Value, LoadError> {
        if !self.handles(&handle.path) {
            tracing::debug!(
                "Skipping props for {}: not handled by the {} extractor",
                handle.path.display(),
                self.extractor.name()
            );
            return Ok(serde_json::to_value(PropsDoc::default())?);
        }

        let source = read(&handle.path)?;
        let doc = self
            .extractor
            .extract(&source)
            .map_err(|source| LoadError::Extract {
                path: handle.path.clone(),
                source,
            })?;
        Ok(serde_json::to_value(doc)?)
    }
}
