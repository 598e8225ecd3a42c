//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (config, source elements, events)
//! - `controllers/` - Behavior (layout, scroll sync, toolbar, render pipeline)
//! - `services/` - Building blocks (markdown, highlighting, text ops, debounce)
//! - `infrastructure/` - Host seams (editor adapter, DOM template, error)
//! - `widget.rs` - One widget instance coordinating the controllers
//! - `registry.rs` - Element-to-widget registry and discovery

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod registry;
pub mod services;
pub mod widget;

// Re-exports for convenient external access
pub use controllers::layout::{ActiveTab, compute_mode};
pub use domain::{
    ElementId, LayoutMode, MARKER_ATTRIBUTE, ScrollMetrics, SourceElement, TabControl,
    WidgetConfig, WidgetEvent,
};
pub use infrastructure::editor::{EditorAdapter, TextBufferEditor};
pub use infrastructure::error::{AppError, Result};
pub use registry::WidgetRegistry;
pub use services::markdown::{MarkdownRenderer, MarkupRenderer};
pub use widget::MarkdownArea;
