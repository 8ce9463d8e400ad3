//! Trait definitions for property extractors.

use crate::model::PropsDoc;

/// Errors that can occur during extraction.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("No props declaration found")]
    NoProps,

    #[error("Invalid props declaration: {0}")]
    InvalidDeclaration(String),
}

/// Trait for static-analysis backends that read component properties.
pub trait PropsExtractor: Send + Sync {
    /// Extractor identifier (e.g., "interface")
    fn name(&self) -> &'static str;

    /// File extensions this extractor understands
    fn extensions(&self) -> &[&'static str];

    /// Extract the property map from component source code.
    fn extract(&self, source: &str) -> Result<PropsDoc, ExtractError>;
}
