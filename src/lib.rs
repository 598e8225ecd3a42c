//! A markdown editing widget with a live-rendered preview pane.
//!
//! A [`MarkdownArea`] binds to a source element, renders its content into
//! a preview, switches between split and tab layouts by container width,
//! keeps the preview scrolled in step with the editor, and applies toolbar
//! formatting commands to the editor selection. A [`WidgetRegistry`] holds
//! one instance per bound element.

pub mod app;

pub use app::*;
