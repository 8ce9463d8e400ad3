//! Section tree construction.

use std::path::PathBuf;

use crate::components::{build_component_list, ComponentSpec};
use crate::config::StyleguideConfig;
use crate::entry::ComponentEntry;
use crate::error::CompileError;
use crate::reference::{ResourceKind, ResourceRef};

/// A section as written in the configuration.
#[derive(Debug, Clone, Default)]
pub struct SectionDef {
    pub name: String,

    /// Markdown document shown above the section's components
    pub content: Option<PathBuf>,

    pub components: Option<ComponentSpec>,

    /// Nested sections
    pub sections: Option<Vec<SectionDef>>,
}

impl SectionDef {
    /// Create an empty section.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_content(mut self, content: impl Into<PathBuf>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_components(mut self, components: impl Into<ComponentSpec>) -> Self {
        self.components = Some(components.into());
        self
    }

    pub fn with_sections(mut self, sections: Vec<SectionDef>) -> Self {
        self.sections = Some(sections);
        self
    }
}

/// A resolved section.
///
/// A node with no content, components or children is legal and renders
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionNode {
    pub name: String,
    pub content: Option<ResourceRef>,
    pub components: Option<Vec<ComponentEntry>>,
    pub sections: Option<Vec<SectionNode>>,
}

impl SectionNode {
    /// Number of component entries in this section and all nested ones.
    pub fn component_count(&self) -> usize {
        let own = self.components.as_ref().map_or(0, Vec::len);
        let nested: usize = self
            .sections
            .iter()
            .flatten()
            .map(SectionNode::component_count)
            .sum();
        own + nested
    }
}

/// Build a section and, recursively, its children.
///
/// Each section resolves its own component spec; a parent never picks up
/// the components of its children.
pub fn build_section(def: &SectionDef, config: &StyleguideConfig) -> Result<SectionNode, CompileError> {
    let content = def
        .content
        .as_ref()
        .map(|content| ResourceRef::new(ResourceKind::Examples, config.resolve_path(content)));

    Ok(SectionNode {
        name: def.name.clone(),
        content,
        components: build_component_list(def.components.as_ref(), config)?,
        sections: build_sections(def.sections.as_deref(), config)?,
    })
}

/// Build one level of sections, preserving order.
pub fn build_sections(
    defs: Option<&[SectionDef]>,
    config: &StyleguideConfig,
) -> Result<Option<Vec<SectionNode>>, CompileError> {
    defs.map(|defs| defs.iter().map(|def| build_section(def, config)).collect())
        .transpose()
}
