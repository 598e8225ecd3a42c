//! Controllers layer - the widget's behavior.
//!
//! This module contains the controllers a widget instance coordinates:
//! - Layout mode and tab switching
//! - Scroll synchronization between panes
//! - Toolbar commands
//! - The render pipeline feeding the preview

pub mod layout;
pub mod preview;
pub mod scroll;
pub mod toolbar;
