use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

use crate::app::infrastructure::error::{AppError, Result};

/// Layout the widget is asked to use. The effective layout may still
/// collapse from `Split` to `Tab` when the container is too narrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Split,
    Tab,
}

impl LayoutMode {
    /// Value written to the root's `data-mode` attribute.
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Split => "split",
            Self::Tab => "tab",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(default)]
    pub mode: LayoutMode,

    #[serde(default = "default_maxsplitsize")]
    pub maxsplitsize: u32,

    #[serde(default = "default_toolbar")]
    pub toolbar: Vec<String>,

    /// Passed through untouched to the markup renderer.
    #[serde(default = "default_markdown_options", alias = "showdown")]
    pub markdown: Value,

    /// Passed through untouched to the editor adapter.
    #[serde(default = "default_editor_options", alias = "codemirror")]
    pub editor: Value,

    #[serde(default = "default_highlight")]
    pub highlight: bool,

    #[serde(default = "default_highlight_theme")]
    pub highlight_theme: String,

    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,

    #[serde(default = "default_scroll_debounce_ms")]
    pub scroll_debounce_ms: u64,
}

fn default_maxsplitsize() -> u32 {
    1000
}

fn default_toolbar() -> Vec<String> {
    [
        "bold",
        "italic",
        "strike",
        "link",
        "picture",
        "blockquote",
        "listUl",
        "listOl",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_markdown_options() -> Value {
    json!({ "extensions": ["github"] })
}

fn default_editor_options() -> Value {
    json!({
        "mode": "gfm",
        "tabMode": "indent",
        "tabindex": "2",
        "lineWrapping": true,
        "dragDrop": false
    })
}

fn default_highlight() -> bool {
    true
}

fn default_highlight_theme() -> String {
    "base16-ocean.dark".to_string()
}

fn default_resize_debounce_ms() -> u64 {
    200
}

fn default_scroll_debounce_ms() -> u64 {
    10
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            mode: LayoutMode::default(),
            maxsplitsize: default_maxsplitsize(),
            toolbar: default_toolbar(),
            markdown: default_markdown_options(),
            editor: default_editor_options(),
            highlight: default_highlight(),
            highlight_theme: default_highlight_theme(),
            resize_debounce_ms: default_resize_debounce_ms(),
            scroll_debounce_ms: default_scroll_debounce_ms(),
        }
    }
}

impl WidgetConfig {
    /// Parse the options string carried by a marker attribute.
    ///
    /// An empty (or whitespace-only) string means "all defaults". Otherwise
    /// the options are an object literal in JSON5 syntax (unquoted keys,
    /// single-quoted strings, trailing commas), starting at the first `{`;
    /// anything before it is ignored.
    pub fn from_options(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        let Some(start) = trimmed.find('{') else {
            return Err(AppError::Config(format!(
                "options must be an object literal, got {}",
                trimmed
            )));
        };
        let value: Value = json5::from_str(&trimmed[start..])?;
        if !value.is_object() {
            return Err(AppError::Config(format!(
                "options must be an object literal, got {}",
                trimmed
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Load widget defaults from a JSON file. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_options(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Save as pretty JSON, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
