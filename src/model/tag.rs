/// Marker that introduces a tag in note text (`#project`).
pub const TAG_MARKER: char = '#';

/// The tag without its leading marker. Tags stored without one are returned as-is.
pub fn strip_marker(tag: &str) -> &str {
    tag.strip_prefix(TAG_MARKER).unwrap_or(tag)
}

/// The tag in its canonical, marker-prefixed form.
pub fn with_marker(tag: &str) -> String {
    if tag.starts_with(TAG_MARKER) {
        tag.to_string()
    } else {
        format!("{}{}", TAG_MARKER, tag)
    }
}
