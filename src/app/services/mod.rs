//! Services layer - stateless operations and utilities.
//!
//! This module contains the building blocks the controllers use:
//! - Markdown rendering
//! - Code block highlighting
//! - Text operations
//! - Event debouncing

pub mod debounce;
pub mod highlight;
pub mod markdown;
pub mod text_ops;
