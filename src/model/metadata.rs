/// One inline tag occurrence found in a note body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineTag {
    /// Tag text including the leading `#`
    pub tag: String,
    /// 0-based line number within the file
    pub line: usize,
}

/// Everything the metadata index knows about one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataSnapshot {
    /// Inline tag occurrences in document order (duplicates included)
    pub tags: Vec<InlineTag>,
    /// Parsed YAML front-matter, if the note has a well-formed block
    pub frontmatter: Option<serde_yaml::Value>,
}

impl MetadataSnapshot {
    /// The raw `tags` front-matter field, if any
    pub fn frontmatter_tags(&self) -> Option<&serde_yaml::Value> {
        self.frontmatter.as_ref()?.get("tags")
    }
}
