/// Pane dimensions sampled when the editor pane scrolls.
///
/// Heights are in pixels. "Content" is the full scrollable height, the
/// "viewport" is the visible part.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub editor_content_height: f64,
    pub editor_viewport_height: f64,
    pub editor_scroll_top: f64,
    pub preview_content_height: f64,
    pub preview_viewport_height: f64,
}

impl ScrollMetrics {
    /// Scrollable distance of the editor pane, never negative.
    pub fn editor_overflow(&self) -> f64 {
        (self.editor_content_height - self.editor_viewport_height).max(0.0)
    }

    /// Scrollable distance of the preview pane, never negative.
    pub fn preview_overflow(&self) -> f64 {
        (self.preview_content_height - self.preview_viewport_height).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow() {
        let m = ScrollMetrics {
            editor_content_height: 1200.0,
            editor_viewport_height: 400.0,
            editor_scroll_top: 0.0,
            preview_content_height: 300.0,
            preview_viewport_height: 400.0,
        };
        assert_eq!(m.editor_overflow(), 800.0);
        assert_eq!(m.preview_overflow(), 0.0);
    }
}
