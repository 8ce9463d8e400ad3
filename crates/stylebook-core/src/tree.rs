//! Whole-tree compilation.

use std::time::Instant;

use serde::Serialize;

use crate::components::{build_component_list, check_base_dir};
use crate::config::StyleguideConfig;
use crate::entry::ComponentEntry;
use crate::error::CompileError;
use crate::section::{build_sections, SectionNode};

/// Presentation settings passed through to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedConfig {
    pub title: String,
    pub highlight_theme: String,
    pub show_code: bool,
}

impl From<&StyleguideConfig> for SimplifiedConfig {
    fn from(config: &StyleguideConfig) -> Self {
        Self {
            title: config.title.clone(),
            highlight_theme: config.highlight_theme.clone(),
            show_code: config.show_code,
        }
    }
}

/// The compiled documentation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentationTree {
    pub config: SimplifiedConfig,
    pub components: Option<Vec<ComponentEntry>>,
    pub sections: Option<Vec<SectionNode>>,
}

impl DocumentationTree {
    /// Number of component entries across the whole tree.
    pub fn component_count(&self) -> usize {
        let top = self.components.as_ref().map_or(0, Vec::len);
        let nested: usize = self
            .sections
            .iter()
            .flatten()
            .map(SectionNode::component_count)
            .sum();
        top + nested
    }
}

/// Compile the documentation tree for a configuration.
///
/// Top-level components are resolved before top-level sections, siblings
/// left to right. Any configuration error aborts the whole pass.
pub fn compile(config: &StyleguideConfig) -> Result<DocumentationTree, CompileError> {
    let start = Instant::now();

    check_base_dir(&config.base_dir())?;

    let components = build_component_list(config.components.as_ref(), config)?;
    let sections = build_sections(config.sections.as_deref(), config)?;

    let tree = DocumentationTree {
        config: SimplifiedConfig::from(config),
        components,
        sections,
    };

    tracing::info!(
        "Compiled {} components in {}ms",
        tree.component_count(),
        start.elapsed().as_millis()
    );

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentSpec;
    use crate::entry::PropsSlot;
    use crate::section::SectionDef;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn compiles_button_and_card() {
        let temp = tempdir().unwrap();
        let base = temp.path().join("src/components");
        touch(&base.join("Button/Button.js"));
        touch(&base.join("Card/index.js"));

        let config = StyleguideConfig {
            base_dir: base.clone(),
            components: Some(ComponentSpec::pattern("**/*.js")),
            ..Default::default()
        };

        let tree = compile(&config).unwrap();

        let components = tree.components.as_ref().unwrap();
        assert_eq!(components.len(), 2);

        let button = components
            .iter()
            .find(|e| e.filepath == base.join("Button/Button.js"))
            .unwrap();
        assert_eq!(button.name_fallback, "Button");

        let card = components
            .iter()
            .find(|e| e.filepath == base.join("Card/index.js"))
            .unwrap();
        assert_eq!(card.name_fallback, "Card");

        for entry in components {
            assert_eq!(entry.examples, None);
            assert_eq!(entry.design, None);
            assert!(entry.module.is_some());
            assert!(matches!(entry.props, PropsSlot::Extract(_)));
        }
        assert_eq!(tree.sections, None);
    }

    #[test]
    fn absent_assets_use_default_example() {
        let temp = tempdir().unwrap();
        touch(&temp.path().join("Button/Button.js"));
        let default = temp.path().join("Default.md");
        touch(&default);

        let config = StyleguideConfig {
            base_dir: temp.path().to_path_buf(),
            components: Some("*/*.js".into()),
            default_example: Some(default.clone()),
            ..Default::default()
        };

        let tree = compile(&config).unwrap();
        let entry = &tree.components.unwrap()[0];

        let examples = entry.examples.as_ref().unwrap();
        let design = entry.design.as_ref().unwrap();
        assert!(examples.points_at(&default));
        assert!(design.points_at(&default));
        assert_eq!(design.param("componentName"), Some("Button"));
    }

    #[test]
    fn compiles_sections_after_components() {
        let temp = tempdir().unwrap();
        touch(&temp.path().join("forms/Form.js"));
        touch(&temp.path().join("forms/inputs/TextInput.js"));

        let config = StyleguideConfig {
            base_dir: temp.path().to_path_buf(),
            title: "Acme".to_string(),
            show_code: true,
            sections: Some(vec![SectionDef::new("Forms")
                .with_components("forms/*.js")
                .with_sections(vec![
                    SectionDef::new("Inputs").with_components("forms/inputs/*.js")
                ])]),
            ..Default::default()
        };

        let tree = compile(&config).unwrap();

        assert_eq!(
            tree.config,
            SimplifiedConfig {
                title: "Acme".to_string(),
                highlight_theme: "base16-light".to_string(),
                show_code: true,
            }
        );
        assert_eq!(tree.components, None);
        let forms = &tree.sections.as_ref().unwrap()[0];
        let form_paths: Vec<PathBuf> = forms
            .components
            .iter()
            .flatten()
            .map(|e| e.filepath.clone())
            .collect();
        assert_eq!(form_paths, vec![temp.path().join("forms/Form.js")]);
        let inputs = &forms.sections.as_ref().unwrap()[0];
        assert_eq!(inputs.components.as_ref().unwrap()[0].name_fallback, "TextInput");
        assert_eq!(tree.component_count(), 2);
    }

    #[test]
    fn inaccessible_base_dir_aborts() {
        let config = StyleguideConfig {
            base_dir: PathBuf::from("/nonexistent/stylebook"),
            ..Default::default()
        };

        assert!(matches!(
            compile(&config),
            Err(CompileError::BaseDirectory { .. })
        ));
    }

    #[test]
    fn recompiling_yields_equal_trees() {
        let temp = tempdir().unwrap();
        touch(&temp.path().join("Button/Button.js"));
        let config = StyleguideConfig {
            base_dir: temp.path().to_path_buf(),
            components: Some("**/*.js".into()),
            ..Default::default()
        };

        assert_eq!(compile(&config).unwrap(), compile(&config).unwrap());
    }
}
