//! Lexical path helpers.

use std::path::{Component, Path, PathBuf};

/// Fold `.` and `..` components without touching the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Resolve `path` against `base` and normalize the result.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Express `path` relative to `base`, stepping up with `..` where needed.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path = normalize(path);
    let base = normalize(base);

    let mut path_parts = path.components().peekable();
    let mut base_parts = base.components().peekable();
    while let (Some(a), Some(b)) = (path_parts.peek(), base_parts.peek()) {
        if a != b {
            break;
        }
        path_parts.next();
        base_parts.next();
    }

    let mut out = PathBuf::new();
    for _ in base_parts {
        out.push("..");
    }
    for part in path_parts {
        out.push(part.as_os_str());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_dots() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
    }

    #[test]
    fn keeps_leading_parent_segments() {
        assert_eq!(normalize(Path::new("../../x")), PathBuf::from("../../x"));
        assert_eq!(normalize(Path::new("./../a/../../x")), PathBuf::from("../../x"));
        assert_eq!(normalize(Path::new("/../x")), PathBuf::from("/x"));
    }

    #[test]
    fn absolutizes_relative_paths() {
        assert_eq!(
            absolutize(Path::new("/root/src"), Path::new("../lib/a.js")),
            PathBuf::from("/root/lib/a.js")
        );
        assert_eq!(
            absolutize(Path::new("/root/src"), Path::new("/abs/a.js")),
            PathBuf::from("/abs/a.js")
        );
    }

    #[test]
    fn computes_relative_paths() {
        assert_eq!(
            relative_to(Path::new("/root/src/Button/Button.js"), Path::new("/root/src")),
            PathBuf::from("Button/Button.js")
        );
        assert_eq!(
            relative_to(Path::new("/root/lib/a.js"), Path::new("/root/src")),
            PathBuf::from("../lib/a.js")
        );
    }
}
