//! Props extraction from TypeScript `interface ...Props` declarations.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::{
    DefaultValue, EnumValue, EnumValues, PropDescriptor, PropsDoc, TypeDescriptor, UnionMembers,
};
use crate::traits::{ExtractError, PropsExtractor};

/// Extractor reading a component's `...Props` interface with regex patterns.
///
/// Members may span several lines; a member ends at a top-level `;`, `,` or
/// line break. Inline object types become shapes. Mapped types and generics
/// beyond `Array<T>` are reported by name only.
#[derive(Debug, Default)]
pub struct InterfaceExtractor;

impl InterfaceExtractor {
    /// Create a new interface extractor.
    pub fn new() -> Self {
        Self
    }
}

impl PropsExtractor for InterfaceExtractor {
    fn name(&self) -> &'static str {
        "interface"
    }

    fn extensions(&self) -> &[&'static str] {
        &["tsx", "ts"]
    }

    fn extract(&self, source: &str) -> Result<PropsDoc, ExtractError> {
        let body = PROPS_INTERFACE_RE
            .captures(source)
            .and_then(|c| c.get(1))
            .ok_or(ExtractError::NoProps)?
            .as_str();

        let mut props = parse_members(body)?;

        for (name, value) in extract_defaults(source) {
            if let Some((_, prop)) = props.iter_mut().find(|(n, _)| *n == name) {
                prop.default_value = Some(DefaultValue {
                    computed: !is_literal(&value),
                    value,
                });
            }
        }

        Ok(PropsDoc {
            description: extract_component_description(source).unwrap_or_default(),
            props,
        })
    }
}

// Regex patterns for extraction
static PROPS_INTERFACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Body runs until a closing brace at the start of a line
    Regex::new(r"(?ms)interface\s+\w*Props\b[^{]*\{(.*?)^\}").expect("Invalid props interface regex")
});

static MEMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?:readonly\s+)?([A-Za-z_$][\w$]*)(\?)?\s*:\s*(.+?)\s*[;,]?\s*$")
        .expect("Invalid member regex")
});

static COMPONENT_DOC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/\*\*((?:[^*]|\*+[^*/])*)\*+/\s*export\s+(?:default\s+)?(?:function|const|class)\s")
        .expect("Invalid component doc regex")
});

static DESTRUCTURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\s*\{\s*([^}]+)\s*\}\s*(?::\s*\w+)?\s*\)").expect("Invalid destructure regex")
});

fn parse_members(body: &str) -> Result<Vec<(String, PropDescriptor)>, ExtractError> {
    let mut props = Vec::new();
    let mut pending_doc: Vec<String> = Vec::new();

    for piece in member_pieces(body) {
        let declaration = match piece {
            Piece::Comment(text) => {
                pending_doc.push(text);
                continue;
            }
            Piece::Declaration(declaration) => declaration,
        };

        let cap = MEMBER_RE
            .captures(&declaration)
            .ok_or_else(|| ExtractError::InvalidDeclaration(declaration.clone()))?;

        let name = cap[1].to_string();
        let optional = cap.get(2).is_some();

        props.push((
            name,
            PropDescriptor {
                type_: Some(parse_type(&cap[3])),
                required: !optional,
                description: pending_doc.join("\n"),
                ..Default::default()
            },
        ));
        pending_doc.clear();
    }

    Ok(props)
}

enum Piece {
    Comment(String),
    Declaration(String),
}

/// Group interface body lines into comments and complete member
/// declarations. Lines are joined while brackets are open.
fn member_pieces(body: &str) -> Vec<Piece> {
    // A line opening with `|` or `&` continues the type on the line above
    let mut lines: Vec<String> = Vec::new();
    for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match lines.last_mut() {
            Some(prev) if line.starts_with(['|', '&']) && comment_text(prev).is_none() => {
                prev.push('\n');
                prev.push_str(line);
            }
            _ => lines.push(line.to_string()),
        }
    }

    let mut pieces = Vec::new();
    let mut buffer = String::new();

    for line in &lines {
        if buffer.is_empty() {
            if let Some(text) = comment_text(line) {
                if !text.is_empty() {
                    pieces.push(Piece::Comment(text));
                }
                continue;
            }
        } else {
            buffer.push('\n');
        }
        buffer.push_str(line);

        if bracket_depth(&buffer) > 0 {
            continue;
        }

        for part in split_top_level(&buffer, &[';', ',']) {
            let part = part.trim();
            // Trailing comments after a member are dropped
            if !part.is_empty() && comment_text(part).is_none() {
                pieces.push(Piece::Declaration(part.to_string()));
            }
        }
        buffer.clear();
    }

    let rest = buffer.trim();
    if !rest.is_empty() {
        pieces.push(Piece::Declaration(rest.to_string()));
    }

    pieces
}

/// Strip comment markers from a comment line.
fn comment_text(line: &str) -> Option<String> {
    if !(line.starts_with("//") || line.starts_with("/*") || line.starts_with('*')) {
        return None;
    }
    let text = line
        .trim_start_matches(['/', '*'])
        .trim_end_matches("*/")
        .trim();
    Some(text.to_string())
}

/// Parse a TypeScript type annotation into a descriptor.
pub fn parse_type(raw: &str) -> TypeDescriptor {
    let raw = raw.trim();

    if has_top_level_arrow(raw) || raw == "Function" {
        return TypeDescriptor::Primitive("func".to_string());
    }

    let parts: Vec<&str> = split_top_level(raw, &['|'])
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if parts.len() > 1 {
        if parts.iter().all(|p| is_literal(p)) {
            return TypeDescriptor::Enum(EnumValues::Literals(
                parts
                    .iter()
                    .map(|p| EnumValue {
                        value: (*p).to_string(),
                        computed: false,
                    })
                    .collect(),
            ));
        }
        return TypeDescriptor::Union(UnionMembers::Types(
            parts.iter().map(|p| parse_type(p)).collect(),
        ));
    }

    let single = parts.first().copied().unwrap_or(raw);

    if let Some(inner) = enclosed(single, '(', ')') {
        return parse_type(inner);
    }
    if let Some(inner) = single.strip_suffix("[]") {
        return TypeDescriptor::ArrayOf(Box::new(parse_type(inner)));
    }
    if let Some(inner) = single
        .strip_prefix("Array<")
        .and_then(|rest| rest.strip_suffix('>'))
    {
        return TypeDescriptor::ArrayOf(Box::new(parse_type(inner)));
    }
    if let Some(inner) = enclosed(single, '{', '}') {
        return match parse_members(inner) {
            Ok(members) => TypeDescriptor::Shape(members),
            Err(_) => TypeDescriptor::Primitive("object".to_string()),
        };
    }

    let name = match single {
        "boolean" => "bool",
        "ReactNode" | "React.ReactNode" | "ReactElement" | "React.ReactElement" | "JSX.Element" => {
            "node"
        }
        other => other,
    };
    TypeDescriptor::Primitive(name.to_string())
}

/// Walk `s` tracking bracket depth. The `>` of an arrow does not close a
/// bracket. The callback sees each char with the depth before it.
fn walk_depth(s: &str, mut visit: impl FnMut(usize, char, i32)) -> i32 {
    let mut depth = 0i32;
    let mut prev = None;

    for (i, c) in s.char_indices() {
        visit(i, c, depth);
        match c {
            '(' | '[' | '{' | '<' => depth += 1,
            '>' if prev == Some('=') => {}
            ')' | ']' | '}' | '>' => depth -= 1,
            _ => {}
        }
        prev = Some(c);
    }
    depth
}

fn bracket_depth(s: &str) -> i32 {
    walk_depth(s, |_, _, _| {})
}

/// Split on any of `seps` where it is not nested in brackets.
fn split_top_level<'a>(s: &'a str, seps: &[char]) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut start = 0;

    walk_depth(s, |i, c, depth| {
        if depth == 0 && seps.contains(&c) {
            parts.push(&s[start..i]);
            start = i + c.len_utf8();
        }
    });
    parts.push(&s[start..]);
    parts
}

fn has_top_level_arrow(s: &str) -> bool {
    let mut found = false;
    let mut prev = None;
    walk_depth(s, |_, c, depth| {
        if depth == 0 && c == '>' && prev == Some('=') {
            found = true;
        }
        prev = Some(c);
    });
    found
}

/// Contents of `s` when one bracket pair wraps all of it.
fn enclosed(s: &str, open: char, close: char) -> Option<&str> {
    let inner = s.strip_prefix(open)?.strip_suffix(close)?;
    let mut closes_early = false;
    walk_depth(s, |i, _, depth| {
        if i > 0 && i < s.len() - close.len_utf8() && depth == 0 {
            closes_early = true;
        }
    });
    (!closes_early).then_some(inner)
}

fn is_literal(value: &str) -> bool {
    let value = value.trim();
    let quoted = ['\'', '"', '`']
        .iter()
        .any(|q| value.len() >= 2 && value.starts_with(*q) && value.ends_with(*q));
    quoted || value == "true" || value == "false" || value.parse::<f64>().is_ok()
}

/// Extract `name = value` defaults from a destructured props parameter.
fn extract_defaults(source: &str) -> Vec<(String, String)> {
    let Some(cap) = DESTRUCTURE_RE.captures(source) else {
        return Vec::new();
    };

    cap[1]
        .split(',')
        .filter_map(|part| {
            let (name, value) = part.split_once('=')?;
            let name = name.trim();
            let value = value.trim();
            if name.is_empty() || value.is_empty() || name.starts_with("...") {
                None
            } else {
                Some((name.to_string(), value.to_string()))
            }
        })
        .collect()
}

/// Extract the doc comment directly above the exported component.
fn extract_component_description(source: &str) -> Option<String> {
    let raw = COMPONENT_DOC_RE.captures(source)?.get(1)?.as_str();
    let text = raw
        .lines()
        .map(|l| l.trim().trim_start_matches('*').trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    Some(text)
}
