//! Component entry construction.

use std::path::{Path, PathBuf};

use crate::config::StyleguideConfig;
use crate::naming::{
    file_stem, is_design_document, is_directory_rooted, name_fallback, parent_name,
    DESIGN_FILE_NAME,
};
use crate::paths::relative_to;
use crate::reference::{ResourceKind, ResourceRef};

/// Conventional location of a component's reference design image.
pub const SLICE_SUFFIX: &str = "assets/slice.png";

/// Where a component's property metadata comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropsSlot {
    /// Extract from the component source at resolution time
    Extract(ResourceRef),
    /// No props; serialized as an empty object because renderers always
    /// destructure it
    Empty,
}

/// One documented component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentEntry {
    /// Absolute source path; identity of the entry
    pub filepath: PathBuf,

    /// Display name derived from the path
    pub name_fallback: String,

    /// Path relative to the base directory
    pub relative_path: PathBuf,

    /// Human-readable path line
    pub path_line: String,

    /// Base path for design images
    pub image_path: String,

    /// Whether a reference design image exists
    pub has_slice: bool,

    /// Usage examples
    pub examples: Option<ResourceRef>,

    /// Design notes
    pub design: Option<ResourceRef>,

    /// The component module
    pub module: Option<ResourceRef>,

    pub props: PropsSlot,
}

impl ComponentEntry {
    /// Whether this entry documents design notes rather than a component.
    pub fn is_design_document(&self) -> bool {
        is_design_document(&self.filepath)
    }
}

/// Build the documentation record for one component file.
pub fn build_entry(filepath: &Path, config: &StyleguideConfig) -> ComponentEntry {
    let name = name_fallback(filepath);
    let relative_path = relative_to(filepath, &config.base_dir());
    let default_example = config.default_example.as_deref();

    let design_file = config.example_filename(filepath, Some(DESIGN_FILE_NAME));
    let design = resolve_examples(&design_file, &name, default_example, &config.image_path);

    let (examples, module, props) = if is_design_document(filepath) {
        (None, None, PropsSlot::Empty)
    } else {
        let examples_file = config.example_filename(filepath, None);
        (
            resolve_examples(&examples_file, &name, default_example, &config.image_path),
            Some(ResourceRef::new(ResourceKind::Module, filepath)),
            PropsSlot::Extract(ResourceRef::new(ResourceKind::Props, filepath)),
        )
    };

    ComponentEntry {
        filepath: filepath.to_path_buf(),
        path_line: config.path_line(&relative_path),
        image_path: config.image_path.clone(),
        has_slice: has_slice(filepath, config),
        name_fallback: name,
        relative_path,
        examples,
        design,
        module,
        props,
    }
}

/// Whether a component has a reference design image.
///
/// Directory-rooted components (`index`, design notes) only need the image
/// to exist. A named file additionally has to live in a directory of the
/// same name, so unrelated siblings of a shared folder do not claim it.
pub fn has_slice(filepath: &Path, config: &StyleguideConfig) -> bool {
    let slice = config.example_filename(filepath, Some(SLICE_SUFFIX));

    if is_directory_rooted(filepath) {
        slice.exists()
    } else {
        parent_name(filepath) == Some(file_stem(filepath)) && slice.exists()
    }
}

/// Reference a component's examples document, or the shared default
/// template when the component has none.
///
/// Returns `None` when neither exists; that is not an error.
pub fn resolve_examples(
    asset_path: &Path,
    name_fallback: &str,
    default_example: Option<&Path>,
    image_path: &str,
) -> Option<ResourceRef> {
    if asset_path.exists() {
        return Some(
            ResourceRef::new(ResourceKind::Examples, asset_path).with_param("imagePath", image_path),
        );
    }

    default_example.map(|default| {
        ResourceRef::new(ResourceKind::Examples, default)
            .with_param("imagePath", image_path)
            .with_param("componentName", name_fallback)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn config_for(base: &Path) -> StyleguideConfig {
        StyleguideConfig {
            base_dir: base.to_path_buf(),
            image_path: "/images/".to_string(),
            ..Default::default()
        }
    }

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn index_slice_only_needs_the_image() {
        let temp = tempdir().unwrap();
        let component = temp.path().join("Button/index.js");
        touch(&component);
        let config = config_for(temp.path());

        assert!(!has_slice(&component, &config));

        touch(&temp.path().join("Button/assets/slice.png"));
        assert!(has_slice(&component, &config));
    }

    #[test]
    fn named_file_slice_needs_matching_directory() {
        let temp = tempdir().unwrap();
        let config = config_for(temp.path());

        // Directory matches, image missing
        let button = temp.path().join("Button/Button.js");
        touch(&button);
        assert!(!has_slice(&button, &config));

        // Directory matches, image present
        touch(&temp.path().join("Button/assets/slice.png"));
        assert!(has_slice(&button, &config));

        // Image present, directory does not match
        let icon = temp.path().join("Button/Icon.js");
        touch(&icon);
        assert!(!has_slice(&icon, &config));
    }

    #[test]
    fn examples_prefer_component_document() {
        let temp = tempdir().unwrap();
        let examples = temp.path().join("Button/examples.md");
        touch(&examples);
        let default = temp.path().join("Default.md");

        let reference = resolve_examples(&examples, "Button", Some(&default), "/img/").unwrap();

        assert!(reference.points_at(&examples));
        assert_eq!(reference.params, vec![("imagePath".to_string(), "/img/".to_string())]);
    }

    #[test]
    fn examples_fall_back_to_default_template() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("Card/examples.md");
        let default = temp.path().join("Default.md");

        let reference = resolve_examples(&missing, "Card", Some(&default), "/img/").unwrap();

        assert_eq!(
            reference.to_string(),
            format!("examples?imagePath=/img/&componentName=Card!{}", default.display())
        );
        assert_eq!(resolve_examples(&missing, "Card", None, "/img/"), None);
    }

    #[test]
    fn builds_component_entry() {
        let temp = tempdir().unwrap();
        let component = temp.path().join("Button/Button.js");
        touch(&component);
        touch(&temp.path().join("Button/examples.md"));
        let config = config_for(temp.path());

        let entry = build_entry(&component, &config);

        assert_eq!(entry.name_fallback, "Button");
        assert_eq!(entry.relative_path, PathBuf::from("Button/Button.js"));
        assert_eq!(entry.path_line, "Button/Button.js");
        assert_eq!(entry.image_path, "/images/");
        assert!(!entry.has_slice);
        assert!(entry
            .examples
            .as_ref()
            .unwrap()
            .points_at(&temp.path().join("Button/examples.md")));
        assert_eq!(entry.design, None);
        assert_eq!(entry.module, Some(ResourceRef::new(ResourceKind::Module, &component)));
        assert_eq!(
            entry.props,
            PropsSlot::Extract(ResourceRef::new(ResourceKind::Props, &component))
        );
    }

    #[test]
    fn references_design_notes() {
        let temp = tempdir().unwrap();
        let component = temp.path().join("Card/index.js");
        touch(&component);
        let design = temp.path().join("Card/DESIGN_README.md");
        touch(&design);

        let entry = build_entry(&component, &config_for(temp.path()));

        assert_eq!(entry.name_fallback, "Card");
        assert!(entry.design.as_ref().unwrap().points_at(&design));
        assert_eq!(entry.examples, None);
    }

    #[test]
    fn design_document_entry_has_empty_props() {
        let temp = tempdir().unwrap();
        let design = temp.path().join("Colors/DESIGN_README.md");
        touch(&design);
        touch(&temp.path().join("Colors/examples.md"));

        let entry = build_entry(&design, &config_for(temp.path()));

        assert!(entry.is_design_document());
        assert_eq!(entry.name_fallback, "Colors");
        assert_eq!(entry.examples, None);
        assert_eq!(entry.module, None);
        assert_eq!(entry.props, PropsSlot::Empty);
        assert!(entry.design.as_ref().unwrap().points_at(&design));
    }

    #[test]
    fn custom_path_line() {
        let temp = tempdir().unwrap();
        let component = temp.path().join("Card/Card.js");
        touch(&component);
        let config = StyleguideConfig {
            path_line: std::sync::Arc::new(|relative: &Path| {
                format!("import Card from 'acme/{}';", relative.display())
            }),
            ..config_for(temp.path())
        };

        let entry = build_entry(&component, &config);

        assert_eq!(entry.path_line, "import Card from 'acme/Card/Card.js';");
    }
}
