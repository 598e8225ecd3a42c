use crate::app::domain::config::WidgetConfig;
use crate::app::domain::element::SourceElement;
use crate::app::infrastructure::editor::EditorAdapter;
use crate::app::infrastructure::template::WidgetDom;
use crate::app::services::highlight::CodeHighlighter;
use crate::app::services::markdown::{MarkdownRenderer, MarkupRenderer};

/// Editor value -> HTML -> preview pane, mirrored back into the source element.
pub struct RenderPipeline {
    renderer: Box<dyn MarkupRenderer>,
    highlighter: Option<CodeHighlighter>,
}

impl RenderPipeline {
    pub fn new(config: &WidgetConfig) -> Self {
        let highlighter = config
            .highlight
            .then(|| CodeHighlighter::new(&config.highlight_theme));
        Self {
            renderer: Box::new(MarkdownRenderer::from_options(&config.markdown)),
            highlighter,
        }
    }

    /// Swap in a different markup renderer.
    pub fn with_renderer(mut self, renderer: Box<dyn MarkupRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn highlighting(&self) -> bool {
        self.highlighter.is_some()
    }

    /// Render the editor's current value into the preview and copy it into
    /// the source element. Every step is derived from the editor value
    /// alone, so running twice in a row gives the same result.
    pub fn run<E: EditorAdapter>(
        &self,
        editor: &E,
        source: &mut SourceElement,
        dom: &mut WidgetDom,
    ) {
        let value = editor.value();
        let mut html = self.renderer.render(value);
        if let Some(highlighter) = &self.highlighter {
            html = highlighter.highlight_html(&html);
        }
        dom.preview_html = html;
        if source.value != value {
            source.value = value.to_string();
        }
    }
}
