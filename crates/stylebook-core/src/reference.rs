//! Deferred resource references.
//!
//! The compiler never reads examples, sources or props itself. It emits a
//! handle naming the resource kind, the file, and parsing parameters, and a
//! loader resolves the handle later.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::{json, Map, Value};

/// Key under which a serialized handle is stored.
pub const HANDLE_KEY: &str = "$resource";

/// Kind of resource a handle points at. Loaders are registered per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Examples or design markdown, parsed into example blocks
    Examples,
    /// The component source module itself
    Module,
    /// Property metadata extracted from the component source
    Props,
}

impl ResourceKind {
    /// Wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Examples => "examples",
            Self::Module => "module",
            Self::Props => "props",
        }
    }

    /// Parse a wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "examples" => Some(Self::Examples),
            "module" => Some(Self::Module),
            "props" => Some(Self::Props),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An opaque pointer to a resource resolved at final-build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    pub kind: ResourceKind,
    pub path: PathBuf,
    /// Query parameters in insertion order
    pub params: Vec<(String, String)>,
}

impl ResourceRef {
    /// Create a handle without parameters.
    pub fn new(kind: ResourceKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Add a query parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Look up a query parameter.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the handle points at `path`.
    pub fn points_at(&self, path: &Path) -> bool {
        self.path == path
    }

    /// Serialize into a tagged handle object.
    pub fn to_handle(&self) -> Value {
        let params: Map<String, Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();

        json!({
            HANDLE_KEY: {
                "kind": self.kind.as_str(),
                "path": self.path.to_string_lossy(),
                "params": params,
            }
        })
    }

    /// Recognize a serialized handle.
    ///
    /// Returns `None` for values that are not handles, and an error for
    /// objects carrying the handle key with a malformed body.
    pub fn from_handle(value: &Value) -> Option<Result<Self, HandleError>> {
        let object = value.as_object()?;
        if object.len() != 1 {
            return None;
        }
        let body = object.get(HANDLE_KEY)?;
        Some(parse_handle_body(body))
    }
}

/// Ways a serialized handle body can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandleError {
    #[error("handle is missing a kind")]
    MissingKind,

    #[error("unknown resource kind '{0}'")]
    UnknownKind(String),

    #[error("handle is missing a path")]
    MissingPath,

    #[error("parameter '{0}' is not a string")]
    InvalidParam(String),
}

fn parse_handle_body(body: &Value) -> Result<ResourceRef, HandleError> {
    let kind_name = body
        .get("kind")
        .and_then(Value::as_str)
        .ok_or(HandleError::MissingKind)?;
    let kind = ResourceKind::from_name(kind_name)
        .ok_or_else(|| HandleError::UnknownKind(kind_name.to_string()))?;
    let path = body
        .get("path")
        .and_then(Value::as_str)
        .ok_or(HandleError::MissingPath)?;

    let mut handle = ResourceRef::new(kind, path);
    if let Some(params) = body.get("params").and_then(Value::as_object) {
        for (key, value) in params {
            let value = value
                .as_str()
                .ok_or_else(|| HandleError::InvalidParam(key.clone()))?;
            handle = handle.with_param(key.clone(), value);
        }
    }
    Ok(handle)
}

/// Loader request form: `kind?key=value&key=value!path`.
impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.as_str())?;
        for (i, (key, value)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, key, value)?;
        }
        write!(f, "!{}", self.path.display())
    }
}
