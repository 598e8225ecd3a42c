/// Placeholder substituted with the selected text in command templates.
pub const PLACEHOLDER: &str = "$1";

/// Substitute `selection` into the first placeholder of `template`.
///
/// Only the first occurrence is replaced; a template without a placeholder
/// is returned unchanged.
pub fn apply_template(template: &str, selection: &str) -> String {
    template.replacen(PLACEHOLDER, selection, 1)
}

/// Move a byte position back to the nearest char boundary, clamped to the
/// text length.
pub fn floor_char_boundary(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    while !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// Replace the byte range `start..end` of `text` with `replacement`.
///
/// The range is normalized (swapped if reversed, snapped to char
/// boundaries). Returns the byte position just after the inserted text.
pub fn replace_range(text: &mut String, start: usize, end: usize, replacement: &str) -> usize {
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    let start = floor_char_boundary(text, start);
    let end = floor_char_boundary(text, end);
    text.replace_range(start..end, replacement);
    start + replacement.len()
}
