//! Examples document parser.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use serde::Serialize;

use crate::codeblock::is_playground_fence;

/// Placeholder replaced with the component's display name.
pub const COMPONENT_PLACEHOLDER: &str = "__COMPONENT__";

/// Placeholder replaced with the configured image base path.
pub const IMAGE_PATH_PLACEHOLDER: &str = "__IMAGE_PATH__";

/// Presentation parameters carried by an examples reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExampleParams {
    /// Base path prepended to design images
    pub image_path: Option<String>,

    /// Component name substituted into a shared default template
    pub component_name: Option<String>,
}

/// One block of an examples document, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExampleBlock {
    /// Source evaluated in the component's playground
    Code {
        content: String,
        #[serde(rename = "evalInContext")]
        eval_in_context: bool,
    },

    /// Literal markdown, including non-playground fences
    Markdown { content: String },
}

impl ExampleBlock {
    fn markdown(content: &str) -> Option<Self> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self::Markdown {
                content: trimmed.to_string(),
            })
        }
    }
}

/// Parse an examples document into playground and markdown blocks.
///
/// Placeholders are substituted before parsing so that substituted text
/// takes part in block detection like any other text.
pub fn parse_examples(source: &str, params: &ExampleParams) -> Vec<ExampleBlock> {
    let source = substitute(source, params);

    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let mut blocks = Vec::new();
    let mut markdown_start = 0;
    let mut current_code: Option<String> = None;

    for (event, range) in Parser::new_ext(&source, options).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let info = match &kind {
                    CodeBlockKind::Fenced(info) => info.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                if !is_playground_fence(&info) {
                    continue;
                }

                if let Some(block) = ExampleBlock::markdown(&source[markdown_start..range.start]) {
                    blocks.push(block);
                }
                markdown_start = range.end;
                current_code = Some(String::new());
            }

            Event::Text(text) => {
                if let Some(code) = current_code.as_mut() {
                    code.push_str(&text);
                }
            }

            Event::End(TagEnd::CodeBlock) => {
                if let Some(code) = current_code.take() {
                    blocks.push(ExampleBlock::Code {
                        content: code.trim_end().to_string(),
                        eval_in_context: true,
                    });
                }
            }

            _ => {}
        }
    }

    if let Some(block) = ExampleBlock::markdown(&source[markdown_start..]) {
        blocks.push(block);
    }

    blocks
}

fn substitute(source: &str, params: &ExampleParams) -> String {
    let mut out = source.to_string();
    if let Some(name) = &params.component_name {
        out = out.replace(COMPONENT_PLACEHOLDER, name);
    }
    if let Some(image_path) = &params.image_path {
        out = out.replace(IMAGE_PATH_PLACEHOLDER, image_path);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn code(content: &str) -> ExampleBlock {
        ExampleBlock::Code {
            content: content.to_string(),
            eval_in_context: true,
        }
    }

    fn markdown(content: &str) -> ExampleBlock {
        ExampleBlock::Markdown {
            content: content.to_string(),
        }
    }

    #[test]
    fn splits_document_in_order() {
        let source = r#"Primary button:

```jsx
<Button primary>Go</Button>
```

Disabled state.

```
<Button disabled>Stop</Button>
```
"#;

        let blocks = parse_examples(source, &ExampleParams::default());

        assert_eq!(
            blocks,
            vec![
                markdown("Primary button:"),
                code("<Button primary>Go</Button>"),
                markdown("Disabled state."),
                code("<Button disabled>Stop</Button>"),
            ]
        );
    }

    #[test]
    fn keeps_static_and_foreign_fences_as_markdown() {
        let source = r#"Install:

```bash
npm install buttons
```

```jsx static
import Button from './Button';
```
"#;

        let blocks = parse_examples(source, &ExampleParams::default());

        assert_eq!(blocks.len(), 1);
        let ExampleBlock::Markdown { content } = &blocks[0] else {
            panic!("expected markdown block");
        };
        assert!(content.contains("```bash"));
        assert!(content.contains("```jsx static"));
    }

    #[test]
    fn substitutes_component_name_and_image_path() {
        let source = "![slice](__IMAGE_PATH__slice.png)\n\n```jsx\n<__COMPONENT__ />\n```\n";
        let params = ExampleParams {
            image_path: Some("/img/".to_string()),
            component_name: Some("Card".to_string()),
        };

        let blocks = parse_examples(source, &params);

        assert_eq!(
            blocks,
            vec![markdown("![slice](/img/slice.png)"), code("<Card />")]
        );
    }

    #[test]
    fn leaves_placeholders_without_params() {
        let blocks = parse_examples("Uses __COMPONENT__.", &ExampleParams::default());

        assert_eq!(blocks, vec![markdown("Uses __COMPONENT__.")]);
    }

    #[test]
    fn empty_document_has_no_blocks() {
        assert!(parse_examples("  \n\n", &ExampleParams::default()).is_empty());
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(code("<A />")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "type": "code", "content": "<A />", "evalInContext": true })
        );
    }
}
