use std::time::Instant;

use crate::app::controllers::layout::{ActiveTab, LayoutController};
use crate::app::controllers::preview::RenderPipeline;
use crate::app::controllers::scroll::ScrollSynchronizer;
use crate::app::controllers::toolbar::ToolbarDispatcher;
use crate::app::domain::config::{LayoutMode, WidgetConfig};
use crate::app::domain::element::SourceElement;
use crate::app::domain::events::{TabControl, WidgetEvent};
use crate::app::domain::geometry::ScrollMetrics;
use crate::app::infrastructure::editor::{EditorAdapter, TextBufferEditor};
use crate::app::infrastructure::template::WidgetDom;
use crate::app::services::debounce::Debouncer;

/// One markdown editing widget bound to one source element.
///
/// Every host event maps to a method taking the event payload. Scroll and
/// resize are debounced: `on_scroll`/`on_resize` only record the latest
/// payload, and `tick` runs the handler once the quiet period has passed.
pub struct MarkdownArea<E: EditorAdapter = TextBufferEditor> {
    config: WidgetConfig,
    source: SourceElement,
    editor: E,
    dom: WidgetDom,
    layout: LayoutController,
    scroll: ScrollSynchronizer,
    toolbar: ToolbarDispatcher,
    pipeline: RenderPipeline,
    pending_resize: Debouncer<u32>,
    pending_scroll: Debouncer<ScrollMetrics>,
}

impl<E: EditorAdapter> MarkdownArea<E> {
    /// Build the widget around `source`, render once, fit to
    /// `container_width` and pin the preview to `editor_outer_height`.
    pub fn new(
        source: SourceElement,
        config: WidgetConfig,
        container_width: u32,
        editor_outer_height: f64,
    ) -> Self {
        let editor = E::open(&source.value, &config.editor);
        let toolbar = ToolbarDispatcher::new(&config.toolbar);
        let mut dom = WidgetDom::new();
        dom.toolbar = toolbar.controls();

        let mut widget = Self {
            layout: LayoutController::new(config.mode, config.maxsplitsize),
            scroll: ScrollSynchronizer::new(),
            pipeline: RenderPipeline::new(&config),
            pending_resize: Debouncer::from_millis(config.resize_debounce_ms),
            pending_scroll: Debouncer::from_millis(config.scroll_debounce_ms),
            toolbar,
            config,
            source,
            editor,
            dom,
        };
        widget.on_change();
        widget.fit(container_width);
        widget.pin_preview_height(editor_outer_height);
        widget
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn source(&self) -> &SourceElement {
        &self.source
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    /// Direct editor access. Call `on_change` after mutating the value.
    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    pub fn dom(&self) -> &WidgetDom {
        &self.dom
    }

    pub fn mode(&self) -> LayoutMode {
        self.layout.mode()
    }

    pub fn active_tab(&self) -> Option<ActiveTab> {
        self.layout.active_tab()
    }

    pub fn toolbar(&self) -> &ToolbarDispatcher {
        &self.toolbar
    }

    /// Replace the editor content, as typing would.
    pub fn set_value(&mut self, value: &str) {
        self.editor.set_value(value);
        self.on_change();
    }

    /// Editor content changed: re-render and mirror into the source element.
    pub fn on_change(&mut self) {
        self.pipeline.run(&self.editor, &mut self.source, &mut self.dom);
    }

    /// Recompute the layout mode for `width` immediately.
    pub fn fit(&mut self, width: u32) -> LayoutMode {
        self.layout.fit(width, &mut self.dom)
    }

    /// Align the preview with the editor immediately.
    pub fn sync_scroll(&mut self, metrics: &ScrollMetrics) -> Option<f64> {
        self.scroll.sync(self.layout.mode(), metrics, &mut self.dom)
    }

    /// Pin the preview viewport to the editor pane's outer height.
    pub fn pin_preview_height(&mut self, editor_outer_height: f64) {
        self.scroll.pin_preview_height(editor_outer_height, &mut self.dom);
    }

    pub fn on_resize(&mut self, width: u32, now: Instant) {
        self.pending_resize.trigger(now, width);
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics, now: Instant) {
        self.pending_scroll.trigger(now, metrics);
    }

    /// Either tab control was clicked. Only meaningful in tab mode.
    pub fn on_tab_click(&mut self, control: TabControl) -> bool {
        let toggled = self.layout.toggle_tab(&mut self.dom);
        if toggled {
            tracing::debug!(
                "Tab control {:?} switched to {:?}",
                control,
                self.layout.active_tab()
            );
        }
        toggled
    }

    /// A toolbar control was activated. Returns whether the editor changed.
    pub fn on_toolbar_click(&mut self, command: &str) -> bool {
        let changed = self.toolbar.dispatch(command, &mut self.editor);
        if changed {
            self.on_change();
        }
        changed
    }

    /// Run debounced handlers whose quiet period has elapsed.
    /// Returns true if any handler ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut fired = false;
        if let Some(width) = self.pending_resize.poll(now) {
            tracing::debug!("Debounced resize to width {}", width);
            self.fit(width);
            fired = true;
        }
        if let Some(metrics) = self.pending_scroll.poll(now) {
            self.sync_scroll(&metrics);
            fired = true;
        }
        fired
    }

    pub fn has_pending(&self) -> bool {
        self.pending_resize.is_pending() || self.pending_scroll.is_pending()
    }

    pub fn handle(&mut self, event: WidgetEvent, now: Instant) {
        match event {
            WidgetEvent::Change => self.on_change(),
            WidgetEvent::Scroll(metrics) => self.on_scroll(metrics, now),
            WidgetEvent::Resize { width } => self.on_resize(width, now),
            WidgetEvent::TabClick(control) => {
                self.on_tab_click(control);
            }
            WidgetEvent::ToolbarClick(command) => {
                self.on_toolbar_click(&command);
            }
        }
    }

    /// Serialize the widget with the editor's current value in the code pane.
    pub fn to_html(&self) -> String {
        self.dom.to_html(self.editor.value())
    }
}
