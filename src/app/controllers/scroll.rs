use crate::app::domain::config::LayoutMode;
use crate::app::domain::geometry::ScrollMetrics;
use crate::app::infrastructure::template::WidgetDom;

/// Preview pixels scrolled per editor pixel.
///
/// An editor without overflow has nothing to map from, so the ratio is 0
/// rather than NaN or infinity.
pub fn scroll_ratio(metrics: &ScrollMetrics) -> f64 {
    let editor = metrics.editor_overflow();
    if editor <= 0.0 {
        return 0.0;
    }
    let ratio = metrics.preview_overflow() / editor;
    if ratio.is_finite() { ratio } else { 0.0 }
}

/// Preview scroll offset matching the editor's position.
pub fn preview_offset(metrics: &ScrollMetrics) -> f64 {
    let offset = metrics.editor_scroll_top.max(0.0) * scroll_ratio(metrics);
    if offset.is_finite() { offset } else { 0.0 }
}

/// Keeps the preview pane proportionally aligned with the editor pane.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollSynchronizer;

impl ScrollSynchronizer {
    pub fn new() -> Self {
        Self
    }

    /// Apply the editor's scroll position to the preview.
    ///
    /// Skipped in tab mode, where only one pane is visible. Returns the
    /// offset applied, if any. Only the latest metrics matter, so repeated
    /// calls with stale metrics are harmless.
    pub fn sync(
        &self,
        mode: LayoutMode,
        metrics: &ScrollMetrics,
        dom: &mut WidgetDom,
    ) -> Option<f64> {
        if mode == LayoutMode::Tab {
            return None;
        }
        let offset = preview_offset(metrics);
        dom.preview_scroll_top = offset;
        Some(offset)
    }

    /// Give the preview viewport the same height as the editor pane.
    pub fn pin_preview_height(&self, editor_outer_height: f64, dom: &mut WidgetDom) {
        dom.preview_viewport_height = Some(editor_outer_height.max(0.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(
        editor_content: f64,
        editor_view: f64,
        top: f64,
        preview_content: f64,
        preview_view: f64,
    ) -> ScrollMetrics {
        ScrollMetrics {
            editor_content_height: editor_content,
            editor_viewport_height: editor_view,
            editor_scroll_top: top,
            preview_content_height: preview_content,
            preview_viewport_height: preview_view,
        }
    }

    #[test]
    fn test_proportional_offset() {
        // editor scrolls 800px, preview 1600px: ratio 2
        let m = metrics(1200.0, 400.0, 100.0, 2000.0, 400.0);
        assert_eq!(scroll_ratio(&m), 2.0);
        assert_eq!(preview_offset(&m), 200.0);
    }

    #[test]
    fn test_zero_overflow_is_zero_not_nan() {
        let m = metrics(400.0, 400.0, 0.0, 2000.0, 400.0);
        assert_eq!(scroll_ratio(&m), 0.0);
        let mut dom = WidgetDom::new();
        dom.preview_scroll_top = 55.0;
        let applied = ScrollSynchronizer::new().sync(LayoutMode::Split, &m, &mut dom);
        assert_eq!(applied, Some(0.0));
        assert_eq!(dom.preview_scroll_top, 0.0);
        assert!(!dom.preview_scroll_top.is_nan());
    }

    #[test]
    fn test_short_preview_does_not_scroll() {
        let m = metrics(1200.0, 400.0, 300.0, 200.0, 400.0);
        assert_eq!(preview_offset(&m), 0.0);
    }

    #[test]
    fn test_skipped_in_tab_mode() {
        let m = metrics(1200.0, 400.0, 100.0, 2000.0, 400.0);
        let mut dom = WidgetDom::new();
        dom.preview_scroll_top = 12.0;
        assert_eq!(ScrollSynchronizer::new().sync(LayoutMode::Tab, &m, &mut dom), None);
        assert_eq!(dom.preview_scroll_top, 12.0);
    }

    #[test]
    fn test_sync_is_idempotent() {
        let m = metrics(1000.0, 500.0, 250.0, 1500.0, 500.0);
        let mut dom = WidgetDom::new();
        let sync = ScrollSynchronizer::new();
        let first = sync.sync(LayoutMode::Split, &m, &mut dom);
        let second = sync.sync(LayoutMode::Split, &m, &mut dom);
        assert_eq!(first, second);
        assert_eq!(dom.preview_scroll_top, 500.0);
    }

    #[test]
    fn test_pin_preview_height() {
        let mut dom = WidgetDom::new();
        ScrollSynchronizer::new().pin_preview_height(480.0, &mut dom);
        assert_eq!(dom.preview_viewport_height, Some(480.0));
    }
}
