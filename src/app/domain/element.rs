/// Attribute that marks a source element for automatic binding.
pub const MARKER_ATTRIBUTE: &str = "data-uk-markdownarea";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// A host form element (textarea) the widget binds to.
///
/// `value` is what a surrounding form submits, so the render pipeline
/// mirrors the editor content back into it after every change.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceElement {
    pub id: ElementId,
    pub value: String,
    /// Raw options string of the marker attribute, if the element carries it.
    pub marker: Option<String>,
}

impl SourceElement {
    pub fn new(id: ElementId, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
            marker: None,
        }
    }

    /// Build from a raw attribute list, picking up the marker attribute
    /// if present.
    pub fn from_attributes(
        id: ElementId,
        value: impl Into<String>,
        attrs: &[(&str, &str)],
    ) -> Self {
        let marker = attrs
            .iter()
            .find(|(name, _)| *name == MARKER_ATTRIBUTE)
            .map(|(_, options)| options.to_string());
        Self {
            id,
            value: value.into(),
            marker,
        }
    }

    pub fn with_marker(mut self, options: impl Into<String>) -> Self {
        self.marker = Some(options.into());
        self
    }

    pub fn has_marker(&self) -> bool {
        self.marker.is_some()
    }
}
