use crate::app::domain::config::LayoutMode;
use crate::app::infrastructure::template::{ACTIVE_TAB_ATTR, MODE_ATTR, WidgetDom};

/// Pane shown while the widget is in tab mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    Code,
    Preview,
}

impl ActiveTab {
    pub fn as_attr(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Preview => "preview",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Code => Self::Preview,
            Self::Preview => Self::Code,
        }
    }
}

/// Effective layout for a container of `width` pixels.
///
/// A configured split collapses into tabs below `threshold`; a configured
/// tab layout never changes. No hysteresis: widths straddling the
/// threshold flip the mode on every call.
pub fn compute_mode(width: u32, configured: LayoutMode, threshold: u32) -> LayoutMode {
    match configured {
        LayoutMode::Split if width < threshold => LayoutMode::Tab,
        other => other,
    }
}

/// Owns the widget's display mode and active tab.
///
/// State reaches presentation only through the root's `data-mode` and
/// `data-active-tab` attributes. The active tab is reported only while in
/// tab mode; the last choice is remembered across a detour through split.
#[derive(Debug, Clone)]
pub struct LayoutController {
    configured: LayoutMode,
    threshold: u32,
    mode: LayoutMode,
    tab: Option<ActiveTab>,
}

impl LayoutController {
    pub fn new(configured: LayoutMode, threshold: u32) -> Self {
        Self {
            configured,
            threshold,
            mode: configured,
            tab: None,
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Active tab; `None` whenever the widget is in split mode.
    pub fn active_tab(&self) -> Option<ActiveTab> {
        match self.mode {
            LayoutMode::Tab => self.tab,
            LayoutMode::Split => None,
        }
    }

    /// Recompute the mode for the current container width and publish it.
    pub fn fit(&mut self, width: u32, dom: &mut WidgetDom) -> LayoutMode {
        let mode = compute_mode(width, self.configured, self.threshold);
        if mode != self.mode {
            tracing::debug!(
                "Layout mode {} -> {} at width {}",
                self.mode.as_attr(),
                mode.as_attr(),
                width
            );
        }
        self.mode = mode;

        match mode {
            LayoutMode::Tab => {
                let tab = *self.tab.get_or_insert(ActiveTab::Code);
                dom.set_attr(ACTIVE_TAB_ATTR, tab.as_attr());
            }
            LayoutMode::Split => dom.remove_attr(ACTIVE_TAB_ATTR),
        }
        dom.set_attr(MODE_ATTR, mode.as_attr());
        mode
    }

    /// Flip the active tab. Does nothing outside tab mode; returns whether
    /// anything changed.
    pub fn toggle_tab(&mut self, dom: &mut WidgetDom) -> bool {
        if self.mode != LayoutMode::Tab {
            return false;
        }
        let next = self.tab.unwrap_or(ActiveTab::Code).toggled();
        self.tab = Some(next);
        dom.set_attr(ACTIVE_TAB_ATTR, next.as_attr());
        true
    }
}
