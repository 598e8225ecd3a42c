use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::app::domain::config::WidgetConfig;
use crate::app::domain::element::{ElementId, SourceElement};
use crate::app::infrastructure::editor::{EditorAdapter, TextBufferEditor};
use crate::app::widget::MarkdownArea;

/// Editor pane outer height assumed until the host reports one.
pub const DEFAULT_EDITOR_HEIGHT: f64 = 300.0;

/// Maps bound elements to their widget instances.
///
/// Binding is idempotent: an element already present keeps its instance.
pub struct WidgetRegistry<E: EditorAdapter = TextBufferEditor> {
    widgets: HashMap<ElementId, MarkdownArea<E>>,
    container_width: u32,
    editor_height: f64,
}

impl<E: EditorAdapter> WidgetRegistry<E> {
    /// `container_width` is the width new widgets are first fitted to.
    pub fn new(container_width: u32) -> Self {
        Self {
            widgets: HashMap::new(),
            container_width,
            editor_height: DEFAULT_EDITOR_HEIGHT,
        }
    }

    pub fn set_container_width(&mut self, width: u32) {
        self.container_width = width;
    }

    /// Editor pane height new widgets pin their preview viewport to.
    pub fn set_editor_height(&mut self, height: f64) {
        self.editor_height = height;
    }

    /// Bind `element`, or return the instance already bound to it.
    pub fn bind(
        &mut self,
        element: SourceElement,
        config: WidgetConfig,
    ) -> &mut MarkdownArea<E> {
        match self.widgets.entry(element.id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                tracing::info!("Binding markdown area to element {}", element.id.0);
                entry.insert(MarkdownArea::new(
                    element,
                    config,
                    self.container_width,
                    self.editor_height,
                ))
            }
        }
    }

    /// Bind every element carrying the marker attribute, using the
    /// attribute's value as options. Malformed options fall back to the
    /// defaults. Returns how many widgets were newly created.
    pub fn discover<I>(&mut self, elements: I) -> usize
    where
        I: IntoIterator<Item = SourceElement>,
    {
        let mut bound = 0;
        for element in elements {
            let Some(raw) = element.marker.as_deref() else {
                continue;
            };
            if self.widgets.contains_key(&element.id) {
                continue;
            }
            let config = match WidgetConfig::from_options(raw) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(
                        "Invalid options on element {}: {}. Using defaults.",
                        element.id.0,
                        e
                    );
                    WidgetConfig::default()
                }
            };
            self.bind(element, config);
            bound += 1;
        }
        tracing::info!("Discovered {} markdown area(s)", bound);
        bound
    }

    pub fn get(&self, id: ElementId) -> Option<&MarkdownArea<E>> {
        self.widgets.get(&id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut MarkdownArea<E>> {
        self.widgets.get_mut(&id)
    }

    pub fn is_bound(&self, id: ElementId) -> bool {
        self.widgets.contains_key(&id)
    }

    /// Drop the instance for an element removed from the page.
    pub fn unbind(&mut self, id: ElementId) -> Option<MarkdownArea<E>> {
        self.widgets.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Deliver a window resize to every widget.
    pub fn broadcast_resize(&mut self, width: u32, now: std::time::Instant) {
        self.container_width = width;
        for widget in self.widgets.values_mut() {
            widget.on_resize(width, now);
        }
    }

    /// Run matured debounced handlers on every widget.
    pub fn tick(&mut self, now: std::time::Instant) -> bool {
        let mut fired = false;
        for widget in self.widgets.values_mut() {
            fired |= widget.tick(now);
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::controllers::layout::ActiveTab;
    use crate::app::domain::config::LayoutMode;
    use crate::app::domain::events::{TabControl, WidgetEvent};
    use crate::app::domain::geometry::ScrollMetrics;
    use std::time::{Duration, Instant};

    #[test]
    fn test_bind_twice_yields_one_instance() {
        let mut registry: WidgetRegistry = WidgetRegistry::new(1200);
        let element = SourceElement::new(ElementId(7), "first");

        registry.bind(element.clone(), WidgetConfig::default());
        let tab_config = WidgetConfig {
            mode: LayoutMode::Tab,
            ..Default::default()
        };
        let again = registry.bind(SourceElement::new(ElementId(7), "second"), tab_config);
        assert_eq!(again.mode(), LayoutMode::Split);
        assert_eq!(again.source().value, "first");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_discover_binds_marked_elements_only() {
        let mut registry: WidgetRegistry = WidgetRegistry::new(1200);
        let elements = vec![
            SourceElement::new(ElementId(1), "# a").with_marker(""),
            SourceElement::new(ElementId(2), "plain"),
            SourceElement::new(ElementId(3), "b").with_marker(r#"{"mode": "tab", "toolbar": []}"#),
        ];
        assert_eq!(registry.discover(elements.clone()), 2);
        assert!(registry.is_bound(ElementId(1)));
        assert!(!registry.is_bound(ElementId(2)));

        let tabbed = registry.get(ElementId(3)).unwrap();
        assert_eq!(tabbed.mode(), LayoutMode::Tab);
        assert!(tabbed.dom().toolbar.is_empty());

        // Second pass binds nothing new.
        assert_eq!(registry.discover(elements), 0);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_discover_malformed_options_use_defaults() {
        let mut registry: WidgetRegistry = WidgetRegistry::new(1200);
        let n = registry.discover(vec![
            SourceElement::new(ElementId(1), "").with_marker("{mode: tab"),
        ]);
        assert_eq!(n, 1);
        let widget = registry.get(ElementId(1)).unwrap();
        assert_eq!(widget.config(), &WidgetConfig::default());
    }

    #[test]
    fn test_discover_relaxed_marker_options() {
        let mut registry: WidgetRegistry = WidgetRegistry::new(1200);
        registry.discover(vec![
            SourceElement::new(ElementId(1), "").with_marker("{mode:'tab', toolbar:['bold']}"),
        ]);
        let widget = registry.get(ElementId(1)).unwrap();
        assert_eq!(widget.mode(), LayoutMode::Tab);
        assert_eq!(widget.dom().toolbar.len(), 1);
        assert_eq!(widget.dom().toolbar[0].command, "bold");
    }

    #[test]
    fn test_unknown_toolbar_command_in_markup() {
        let mut registry: WidgetRegistry = WidgetRegistry::new(1200);
        registry.discover(vec![
            SourceElement::new(ElementId(1), "")
                .with_marker(r#"{"toolbar": ["underline", "bold"]}"#),
        ]);
        let widget = registry.get(ElementId(1)).unwrap();
        assert_eq!(widget.dom().toolbar.len(), 1);
        assert!(!widget.to_html().contains("data-cmd=\"underline\""));
    }

    #[test]
    fn test_bind_pins_preview_to_editor_height() {
        let mut registry: WidgetRegistry = WidgetRegistry::new(1200);
        registry.set_editor_height(480.0);
        let widget = registry.bind(SourceElement::new(ElementId(1), ""), WidgetConfig::default());
        assert_eq!(widget.dom().preview_viewport_height, Some(480.0));
    }

    #[test]
    fn test_unbind() {
        let mut registry: WidgetRegistry = WidgetRegistry::new(1200);
        registry.bind(SourceElement::new(ElementId(1), ""), WidgetConfig::default());
        assert!(registry.unbind(ElementId(1)).is_some());
        assert!(registry.is_empty());
        assert!(registry.unbind(ElementId(1)).is_none());
    }

    #[test]
    fn test_full_widget_flow() {
        let start = Instant::now();
        let mut registry: WidgetRegistry = WidgetRegistry::new(1400);
        registry.discover(vec![SourceElement::new(ElementId(1), "intro").with_marker("")]);

        let widget = registry.get_mut(ElementId(1)).unwrap();
        widget.set_value("Some text");
        assert_eq!(widget.source().value, "Some text");

        widget.editor_mut().select_text("text");
        widget.handle(WidgetEvent::ToolbarClick("bold".to_string()), start);
        assert_eq!(widget.source().value, "Some **text**");
        assert!(widget.dom().preview_html.contains("<strong>text</strong>"));

        widget.handle(
            WidgetEvent::Scroll(ScrollMetrics {
                editor_content_height: 800.0,
                editor_viewport_height: 400.0,
                editor_scroll_top: 40.0,
                preview_content_height: 1200.0,
                preview_viewport_height: 400.0,
            }),
            start,
        );

        registry.broadcast_resize(700, start);
        assert!(registry.tick(start + Duration::from_millis(300)));

        let widget = registry.get_mut(ElementId(1)).unwrap();
        assert_eq!(widget.mode(), LayoutMode::Tab);
        // Scroll fired after the resize switched to tabs, so it was skipped.
        assert_eq!(widget.dom().preview_scroll_top, 0.0);

        widget.handle(WidgetEvent::TabClick(TabControl::Preview), start);
        assert_eq!(widget.active_tab(), Some(ActiveTab::Preview));
        assert_eq!(widget.editor().value(), "Some **text**");
    }
}
