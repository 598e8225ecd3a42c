use pulldown_cmark::{Options, Parser, html};
use serde_json::Value;

/// Converts markup source into HTML for the preview pane.
pub trait MarkupRenderer {
    fn render(&self, source: &str) -> String;
}

/// Markdown renderer backed by pulldown-cmark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkdownRenderer {
    options: Options,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::from_options(&Value::Null)
    }
}

impl MarkdownRenderer {
    /// Build a renderer from opaque JSON options.
    ///
    /// `extensions: ["github"]` turns on tables, strikethrough and task
    /// lists. Individual boolean keys then override: `tables`,
    /// `strikethrough`, `tasklists`, `footnotes`, `smart_punctuation`,
    /// `heading_attributes`. Unknown keys are ignored.
    pub fn from_options(value: &Value) -> Self {
        let mut options = Options::empty();

        let github = value
            .get("extensions")
            .and_then(Value::as_array)
            .is_some_and(|exts| exts.iter().any(|e| e.as_str() == Some("github")));
        if github {
            options.insert(Options::ENABLE_TABLES);
            options.insert(Options::ENABLE_STRIKETHROUGH);
            options.insert(Options::ENABLE_TASKLISTS);
        }

        let flags = [
            ("tables", Options::ENABLE_TABLES),
            ("strikethrough", Options::ENABLE_STRIKETHROUGH),
            ("tasklists", Options::ENABLE_TASKLISTS),
            ("footnotes", Options::ENABLE_FOOTNOTES),
            ("smart_punctuation", Options::ENABLE_SMART_PUNCTUATION),
            ("heading_attributes", Options::ENABLE_HEADING_ATTRIBUTES),
        ];
        for (key, flag) in flags {
            if let Some(enabled) = value.get(key).and_then(Value::as_bool) {
                options.set(flag, enabled);
            }
        }

        Self { options }
    }

    pub fn options(&self) -> Options {
        self.options
    }
}

impl MarkupRenderer for MarkdownRenderer {
    fn render(&self, source: &str) -> String {
        let parser = Parser::new_ext(source, self.options);
        let mut html_output = String::with_capacity(source.len() * 3 / 2);
        html::push_html(&mut html_output, parser);
        html_output
    }
}
