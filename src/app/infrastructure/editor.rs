use serde_json::Value;

use crate::app::services::text_ops::{floor_char_boundary, replace_range};

/// The text-editing surface a widget drives.
///
/// Positions are byte offsets into the current value.
pub trait EditorAdapter {
    /// Create an editor holding `initial`, configured with the opaque
    /// editor options from the widget configuration.
    fn open(initial: &str, options: &Value) -> Self
    where
        Self: Sized;

    fn value(&self) -> &str;

    fn set_value(&mut self, value: &str);

    /// Currently selected text; empty when the selection is collapsed.
    fn selection(&self) -> &str;

    /// Replace the selection with `text` and collapse the cursor after it.
    fn replace_selection(&mut self, text: &str);

    fn options(&self) -> &Value;
}

/// In-memory editor: a string plus an anchor/head selection.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBufferEditor {
    text: String,
    anchor: usize,
    head: usize,
    options: Value,
}

impl TextBufferEditor {
    /// Select the byte range `anchor..head` (either order). Positions are
    /// clamped and snapped to char boundaries.
    pub fn set_selection(&mut self, anchor: usize, head: usize) {
        self.anchor = floor_char_boundary(&self.text, anchor);
        self.head = floor_char_boundary(&self.text, head);
    }

    pub fn set_cursor(&mut self, pos: usize) {
        self.set_selection(pos, pos);
    }

    /// Select the first occurrence of `needle`. Returns false if absent.
    pub fn select_text(&mut self, needle: &str) -> bool {
        match self.text.find(needle) {
            Some(start) => {
                self.set_selection(start, start + needle.len());
                true
            }
            None => false,
        }
    }

    /// Cursor position (the selection head).
    pub fn cursor(&self) -> usize {
        self.head
    }

    fn ordered_selection(&self) -> (usize, usize) {
        if self.anchor <= self.head {
            (self.anchor, self.head)
        } else {
            (self.head, self.anchor)
        }
    }
}

impl EditorAdapter for TextBufferEditor {
    fn open(initial: &str, options: &Value) -> Self {
        let text = initial.to_string();
        let end = text.len();
        Self {
            text,
            anchor: end,
            head: end,
            options: options.clone(),
        }
    }

    fn value(&self) -> &str {
        &self.text
    }

    fn set_value(&mut self, value: &str) {
        self.text = value.to_string();
        let end = self.text.len();
        self.anchor = end;
        self.head = end;
    }

    fn selection(&self) -> &str {
        let (start, end) = self.ordered_selection();
        &self.text[start..end]
    }

    fn replace_selection(&mut self, text: &str) {
        let (start, end) = self.ordered_selection();
        let cursor = replace_range(&mut self.text, start, end, text);
        self.anchor = cursor;
        self.head = cursor;
    }

    fn options(&self) -> &Value {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn editor(text: &str) -> TextBufferEditor {
        TextBufferEditor::open(text, &Value::Null)
    }

    #[test]
    fn test_open_places_cursor_at_end() {
        let ed = editor("hello");
        assert_eq!(ed.value(), "hello");
        assert_eq!(ed.cursor(), 5);
        assert_eq!(ed.selection(), "");
    }

    #[test]
    fn test_options_passthrough() {
        let opts = json!({ "lineWrapping": true, "tabindex": "2" });
        let ed = TextBufferEditor::open("", &opts);
        assert_eq!(ed.options(), &opts);
    }

    #[test]
    fn test_selection() {
        let mut ed = editor("say hi there");
        assert!(ed.select_text("hi"));
        assert_eq!(ed.selection(), "hi");
        assert!(!ed.select_text("bye"));
    }

    #[test]
    fn test_reversed_selection() {
        let mut ed = editor("abcdef");
        ed.set_selection(4, 1);
        assert_eq!(ed.selection(), "bcd");
    }

    #[test]
    fn test_replace_selection_moves_cursor_after_insert() {
        let mut ed = editor("say hi there");
        ed.select_text("hi");
        ed.replace_selection("**hi**");
        assert_eq!(ed.value(), "say **hi** there");
        assert_eq!(ed.cursor(), 10);
        assert_eq!(ed.selection(), "");
    }

    #[test]
    fn test_replace_collapsed_selection_inserts() {
        let mut ed = editor("ab");
        ed.set_cursor(1);
        ed.replace_selection("****");
        assert_eq!(ed.value(), "a****b");
        assert_eq!(ed.cursor(), 5);
    }

    #[test]
    fn test_selection_snaps_to_char_boundary() {
        let mut ed = editor("a世b");
        ed.set_selection(0, 2);
        assert_eq!(ed.selection(), "a");
    }

    #[test]
    fn test_set_value_resets_cursor() {
        let mut ed = editor("old");
        ed.set_cursor(0);
        ed.set_value("new text");
        assert_eq!(ed.value(), "new text");
        assert_eq!(ed.cursor(), 8);
    }
}
