use std::collections::BTreeMap;

pub const ROOT_CLASS: &str = "uk-markdownarea";
pub const TOOLBAR_CLASS: &str = "uk-markdownarea-toolbar";
pub const PREVIEW_TAB_CLASS: &str = "uk-markdownarea-previewtab";
pub const CODE_TAB_CLASS: &str = "uk-markdownarea-codetab";
pub const CONTAINER_CLASS: &str = "uk-markdownarea-container";
pub const CODE_CLASS: &str = "uk-markdownarea-code";
pub const PREVIEW_CLASS: &str = "uk-markdownarea-preview";

pub const MODE_ATTR: &str = "data-mode";
pub const ACTIVE_TAB_ATTR: &str = "data-active-tab";

/// One rendered toolbar control, tagged with its command name.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarControl {
    pub command: String,
    pub label: &'static str,
}

/// The composite structure a widget puts in place of its source element.
///
/// Presentation reads layout state only through the root attributes; the
/// controllers never touch styles directly. The one inline style is the
/// pinned preview viewport height.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetDom {
    root_attrs: BTreeMap<String, String>,
    pub toolbar: Vec<ToolbarControl>,
    pub preview_html: String,
    pub preview_viewport_height: Option<f64>,
    pub preview_scroll_top: f64,
}

impl WidgetDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.root_attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.root_attrs.insert(name.to_string(), value.to_string());
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.root_attrs.remove(name);
    }

    /// Serialize the widget, with `source` placed in the code pane's textarea.
    pub fn to_html(&self, source: &str) -> String {
        let mut out = String::with_capacity(self.preview_html.len() + source.len() + 1024);

        out.push_str(&format!("<div class=\"{}\"", ROOT_CLASS));
        for (name, value) in &self.root_attrs {
            out.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
        }
        out.push_str(">\n");

        out.push_str("<div class=\"uk-markdownarea-tabs uk-clearfix\">\n");
        out.push_str(&format!("<div class=\"{}\">", TOOLBAR_CLASS));
        let controls: Vec<String> = self
            .toolbar
            .iter()
            .map(|c| format!("<a data-cmd=\"{}\">{}</a>", escape_html(&c.command), c.label))
            .collect();
        out.push_str(&controls.join("\n"));
        out.push_str("</div>\n");
        out.push_str(&format!(
            "<div class=\"{}\"><i class=\"uk-icon-eye-open\"></i>\
             <span class=\"uk-hidden-small\"> Preview</span></div>\n",
            PREVIEW_TAB_CLASS
        ));
        out.push_str(&format!(
            "<div class=\"{}\"><i class=\"uk-icon-code\"></i>\
             <span class=\"uk-hidden-small\"> Markdown</span></div>\n",
            CODE_TAB_CLASS
        ));
        out.push_str("</div>\n");

        out.push_str(&format!("<div class=\"{}\">\n", CONTAINER_CLASS));
        out.push_str(&format!(
            "<div><div class=\"{}\"><textarea>{}</textarea></div></div>\n",
            CODE_CLASS,
            escape_html(source)
        ));
        let style = match self.preview_viewport_height {
            Some(h) => format!(" style=\"height: {}px\"", h),
            None => String::new(),
        };
        out.push_str(&format!(
            "<div{}><div class=\"{}\">{}</div></div>\n",
            style, PREVIEW_CLASS, self.preview_html
        ));
        out.push_str("</div>\n");

        out.push_str("</div>\n");
        out
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
