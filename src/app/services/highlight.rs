use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::html::{IncludeBackground, styled_line_to_highlighted_html};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::app::infrastructure::error::{AppError, Result};

const BLOCK_OPEN: &str = "<pre><code";
const BLOCK_CLOSE: &str = "</code></pre>";

/// Syntax highlighting pass over the code blocks of rendered HTML.
pub struct CodeHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
}

impl CodeHighlighter {
    pub fn new(theme_name: &str) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme_name.to_string(),
        }
    }

    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    /// Highlight every `<pre><code>` block in `html`.
    ///
    /// A block that cannot be highlighted (unknown language, unknown theme,
    /// parser failure) is left exactly as rendered; the remaining blocks
    /// are still processed.
    pub fn highlight_html(&self, html: &str) -> String {
        let mut result = String::with_capacity(html.len());
        let mut rest = html;

        while let Some(block_start) = rest.find(BLOCK_OPEN) {
            result.push_str(&rest[..block_start]);
            let block = &rest[block_start..];

            let Some(close) = block.find(BLOCK_CLOSE) else {
                // Unterminated block: nothing more to highlight.
                result.push_str(block);
                return result;
            };
            let block_end = close + BLOCK_CLOSE.len();
            let original = &block[..block_end];

            match self.highlight_block(original) {
                Ok(highlighted) => result.push_str(&highlighted),
                Err(e) => {
                    tracing::debug!("Skipping code block highlight: {}", e);
                    result.push_str(original);
                }
            }

            rest = &block[block_end..];
        }

        result.push_str(rest);
        result
    }

    /// Highlight one complete `<pre><code ...>...</code></pre>` block.
    fn highlight_block(&self, block: &str) -> Result<String> {
        let after_pre = &block["<pre>".len()..];
        let tag_end = after_pre
            .find('>')
            .ok_or_else(|| AppError::Highlight("malformed code tag".to_string()))?
            + 1;
        let tag = &after_pre[..tag_end];
        let body_start = "<pre>".len() + tag_end;
        let body_end = block.len() - BLOCK_CLOSE.len();
        if body_start > body_end {
            return Err(AppError::Highlight("malformed code block".to_string()));
        }

        let class = extract_attr(tag, "class");
        let lang = class.as_deref().and_then(language_from_class);
        let code = unescape_html(&block[body_start..body_end]);

        let syntax = lang
            .and_then(|l| self.syntax_set.find_syntax_by_token(l))
            .or_else(|| self.syntax_set.find_syntax_by_first_line(&code))
            .ok_or_else(|| {
                AppError::Highlight(format!("no syntax for '{}'", lang.unwrap_or("<none>")))
            })?;
        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .ok_or_else(|| AppError::Highlight(format!("unknown theme '{}'", self.theme_name)))?;

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut spans = String::with_capacity(code.len() * 2);
        for line in LinesWithEndings::from(&code) {
            let regions = highlighter
                .highlight_line(line, &self.syntax_set)
                .map_err(|e| AppError::Highlight(e.to_string()))?;
            let line_html = styled_line_to_highlighted_html(&regions, IncludeBackground::No)
                .map_err(|e| AppError::Highlight(e.to_string()))?;
            spans.push_str(&line_html);
        }

        let class_attr = match class {
            Some(c) => format!("{} hljs", c),
            None => "hljs".to_string(),
        };
        Ok(format!("<pre><code class=\"{}\">{}{}", class_attr, spans, BLOCK_CLOSE))
    }
}

/// Pull the language token out of a `language-xxx` class list.
fn language_from_class(class: &str) -> Option<&str> {
    class
        .split_whitespace()
        .find_map(|c| c.strip_prefix("language-"))
        .filter(|l| !l.is_empty())
}

/// Extract an attribute value from an HTML tag string.
fn extract_attr(tag: &str, attr_name: &str) -> Option<String> {
    let lower = tag.to_lowercase();
    let pattern = format!("{}=\"", attr_name);
    let pos = lower.find(&pattern)?;
    let value_start = pos + pattern.len();
    let value_end = tag[value_start..].find('"')? + value_start;
    Some(tag[value_start..value_end].to_string())
}

/// Reverse the entity escaping applied to code block bodies.
fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlights_known_language() {
        let highlighter = CodeHighlighter::new("base16-ocean.dark");
        let html = "<p>x</p>\n<pre><code class=\"language-rust\">fn main() {}\n</code></pre>\n";
        let out = highlighter.highlight_html(html);
        assert!(out.starts_with("<p>x</p>\n"));
        assert!(out.contains("<pre><code class=\"language-rust hljs\">"));
        assert!(out.contains("<span style="));
        assert!(out.ends_with("</code></pre>\n"));
    }

    #[test]
    fn test_unknown_language_left_untouched() {
        let highlighter = CodeHighlighter::new("base16-ocean.dark");
        let html = "<pre><code class=\"language-nosuchlang\">a &lt; b\n</code></pre>";
        assert_eq!(highlighter.highlight_html(html), html);
    }

    #[test]
    fn test_failure_does_not_stop_later_blocks() {
        let highlighter = CodeHighlighter::new("base16-ocean.dark");
        let bad = "<pre><code class=\"language-nosuchlang\">???\n</code></pre>\n";
        let good = "<pre><code class=\"language-rust\">let x = 1;\n</code></pre>\n";
        let out = highlighter.highlight_html(&format!("{}{}", bad, good));
        assert!(out.starts_with(bad));
        assert!(out.contains("language-rust hljs"));
    }

    #[test]
    fn test_unknown_theme_leaves_blocks() {
        let highlighter = CodeHighlighter::new("no-such-theme");
        let html = "<pre><code class=\"language-rust\">fn main() {}\n</code></pre>";
        assert_eq!(highlighter.highlight_html(html), html);
    }

    #[test]
    fn test_unterminated_block_kept() {
        let highlighter = CodeHighlighter::new("base16-ocean.dark");
        let html = "<pre><code class=\"language-rust\">fn main() {}";
        assert_eq!(highlighter.highlight_html(html), html);
    }

    #[test]
    fn test_no_blocks() {
        let highlighter = CodeHighlighter::new("base16-ocean.dark");
        let html = "<h1>Title</h1><p>text</p>";
        assert_eq!(highlighter.highlight_html(html), html);
    }

    #[test]
    fn test_language_from_class() {
        assert_eq!(language_from_class("language-python"), Some("python"));
        assert_eq!(language_from_class("foo language-js"), Some("js"));
        assert_eq!(language_from_class("language-"), None);
        assert_eq!(language_from_class("plain"), None);
    }

    #[test]
    fn test_unescape_html() {
        assert_eq!(unescape_html("a &lt; b &amp;&amp; c &gt; d"), "a < b && c > d");
        assert_eq!(unescape_html("&amp;lt;"), "&lt;");
    }
}
