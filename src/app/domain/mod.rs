//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Widget configuration and layout modes
//! - Source elements the widget binds to
//! - Event and geometry types delivered by the host

pub mod config;
pub mod element;
pub mod events;
pub mod geometry;

pub use config::{LayoutMode, WidgetConfig};
pub use element::{ElementId, MARKER_ATTRIBUTE, SourceElement};
pub use events::{TabControl, WidgetEvent};
pub use geometry::ScrollMetrics;
