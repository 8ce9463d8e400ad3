//! Code fence classification.

/// Programming language of a code fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    Tsx,
    Jsx,
    TypeScript,
    JavaScript,
    Html,
    Css,
    Json,
    Bash,
    /// Fence without an info string, or an indented block
    #[default]
    Unspecified,
    Other,
}

impl Language {
    /// Parse language from code fence info string.
    pub fn from_info(info: &str) -> Self {
        let Some(lang) = info.split_whitespace().next() else {
            return Self::Unspecified;
        };
        match lang.to_lowercase().as_str() {
            "tsx" => Self::Tsx,
            "jsx" => Self::Jsx,
            "ts" | "typescript" => Self::TypeScript,
            "js" | "javascript" => Self::JavaScript,
            "html" => Self::Html,
            "css" => Self::Css,
            "json" => Self::Json,
            "bash" | "sh" | "shell" => Self::Bash,
            _ => Self::Other,
        }
    }

    /// Check if code in this language can run in the example playground.
    pub fn is_playground(&self) -> bool {
        matches!(
            self,
            Self::Tsx | Self::Jsx | Self::TypeScript | Self::JavaScript | Self::Unspecified
        )
    }
}

/// How a code fence is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockMode {
    /// Evaluated and rendered next to its source (default)
    #[default]
    Playground,
    /// Highlighted source only
    Static,
}

impl BlockMode {
    /// Parse mode from code fence info string.
    ///
    /// Only the words after the language are considered, so a fence
    /// tagged `static` is never evaluated.
    pub fn from_info(info: &str) -> Self {
        if info
            .split_whitespace()
            .skip(1)
            .any(|word| word.eq_ignore_ascii_case("static"))
        {
            Self::Static
        } else {
            Self::Playground
        }
    }
}

/// Decide whether a fence with the given info string becomes a playground block.
pub fn is_playground_fence(info: &str) -> bool {
    Language::from_info(info).is_playground() && BlockMode::from_info(info) == BlockMode::Playground
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language() {
        assert_eq!(Language::from_info("jsx static"), Language::Jsx);
        assert_eq!(Language::from_info("tsx"), Language::Tsx);
        assert_eq!(Language::from_info("typescript"), Language::TypeScript);
        assert_eq!(Language::from_info("js"), Language::JavaScript);
        assert_eq!(Language::from_info(""), Language::Unspecified);
        assert_eq!(Language::from_info("rust"), Language::Other);
    }

    #[test]
    fn parses_mode() {
        assert_eq!(BlockMode::from_info("jsx static"), BlockMode::Static);
        assert_eq!(BlockMode::from_info("jsx"), BlockMode::Playground);
        assert_eq!(BlockMode::from_info(""), BlockMode::Playground);
    }

    #[test]
    fn classifies_fences() {
        assert!(is_playground_fence("jsx"));
        assert!(is_playground_fence(""));
        assert!(!is_playground_fence("jsx static"));
        assert!(!is_playground_fence("css"));
        assert!(!is_playground_fence("bash"));
    }
}
