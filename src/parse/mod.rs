pub mod frontmatter;
pub mod inline_tags;

pub use frontmatter::{parse_frontmatter, split_frontmatter};
pub use inline_tags::find_inline_tags;

use crate::model::MetadataSnapshot;

/// Build the metadata snapshot for one markdown note.
///
/// Never fails: a note without front-matter or tags yields an empty snapshot.
pub fn parse_metadata(text: &str) -> MetadataSnapshot {
    let (frontmatter, body_start) = parse_frontmatter(text);
    let tags = find_inline_tags(text.lines().skip(body_start), body_start);
    MetadataSnapshot { tags, frontmatter }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metadata_combines_sources() {
        let text = "---\ntags: [a, c]\n---\n# Note\n\nBody with #a and #b.\n";
        let meta = parse_metadata(text);
        let inline: Vec<_> = meta.tags.iter().map(|t| (t.tag.as_str(), t.line)).collect();
        assert_eq!(inline, vec![("#a", 5), ("#b", 5)]);
        let fm_tags = meta.frontmatter_tags().unwrap().as_sequence().unwrap();
        assert_eq!(fm_tags.len(), 2);
    }

    #[test]
    fn test_frontmatter_lines_are_not_scanned() {
        let text = "---\ntitle: \"#notatag\"\n---\n#body\n";
        let meta = parse_metadata(text);
        assert_eq!(meta.tags.len(), 1);
        assert_eq!(meta.tags[0].tag, "#body");
        assert_eq!(meta.tags[0].line, 3);
    }

    #[test]
    fn test_empty_note() {
        assert_eq!(parse_metadata(""), MetadataSnapshot::default());
    }
}
