//! Infrastructure layer - seams to the outside world.
//!
//! This module contains code that stands in for the host page:
//! - The editor adapter and its in-memory implementation
//! - The widget DOM structure and its HTML template
//! - Error types

pub mod editor;
pub mod error;
pub mod template;
