//! Display-name fallback for component files.

use std::path::Path;

/// Stem of the per-component design notes document.
pub const DESIGN_CONTENT_NAME: &str = "DESIGN_README";

/// File name marking a component entry as design notes only.
pub const DESIGN_FILE_NAME: &str = "DESIGN_README.md";

/// Name used when nothing else can be derived from a path.
const ANONYMOUS: &str = "Component";

/// File name without its extension.
pub fn file_stem(path: &Path) -> &str {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("")
}

/// Name of the directory containing `path`.
pub fn parent_name(path: &Path) -> Option<&str> {
    path.parent()
        .and_then(|p| p.file_name())
        .and_then(|s| s.to_str())
}

/// Whether the component is named after its directory rather than its file.
pub fn is_directory_rooted(path: &Path) -> bool {
    matches!(file_stem(path), "index" | DESIGN_CONTENT_NAME)
}

/// Whether the file is a design notes document rather than a component.
pub fn is_design_document(path: &Path) -> bool {
    path.file_name().and_then(|s| s.to_str()) == Some(DESIGN_FILE_NAME)
}

/// Derive a display name when the component does not declare one.
///
/// `index` files and design notes take their directory's name; anything
/// else uses its own stem. Never returns an empty string.
pub fn name_fallback(path: &Path) -> String {
    let stem = file_stem(path);

    let name = if is_directory_rooted(path) {
        parent_name(path).filter(|n| !n.is_empty()).unwrap_or(stem)
    } else {
        stem
    };

    if !name.is_empty() {
        return name.to_string();
    }

    path.file_name()
        .and_then(|s| s.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or(ANONYMOUS)
        .to_string()
}
