use super::geometry::ScrollMetrics;

/// One of the two tab controls shown in tab mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabControl {
    Code,
    Preview,
}

/// Everything the host can deliver to a widget instance.
/// The host's event loop forwards each one to `MarkdownArea::handle`.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    /// Editor content changed.
    Change,

    /// Editor pane scrolled (debounced).
    Scroll(ScrollMetrics),

    /// Window resized; carries the widget's new container width (debounced).
    Resize { width: u32 },

    TabClick(TabControl),

    /// A toolbar control was activated; carries its `data-cmd` value.
    ToolbarClick(String),
}
