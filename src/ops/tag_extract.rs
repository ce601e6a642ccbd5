use std::collections::HashSet;

use serde_yaml::Value;

use crate::model::{MetadataSnapshot, with_marker};

/// Derive a document's tag list: the union of inline tags and front-matter
/// tags, de-duplicated and sorted ascending.
///
/// Front-matter tags are stored without the `#` marker, so they are
/// normalised to the inline form before merging. A missing snapshot yields an
/// empty list.
pub fn extract_tags(snapshot: Option<&MetadataSnapshot>) -> Vec<String> {
    let Some(snapshot) = snapshot else {
        return Vec::new();
    };

    let mut set: HashSet<String> = snapshot.tags.iter().map(|t| t.tag.clone()).collect();
    if let Some(field) = snapshot.frontmatter_tags() {
        for tag in frontmatter_tags(field) {
            set.insert(with_marker(&tag));
        }
    }

    let mut tags: Vec<String> = set.into_iter().collect();
    tags.sort();
    tags
}

/// Read the tag strings out of a front-matter `tags` value.
///
/// Accepts a sequence of strings or a single string separated by commas
/// and/or whitespace. Anything else contributes nothing.
pub fn frontmatter_tags(field: &Value) -> Vec<String> {
    match field {
        Value::Sequence(items) => items
            .iter()
            .filter_map(|item| item.as_str())
            .map(str::trim)
            .filter(|t| !t.is_empty() && *t != "#")
            .map(str::to_string)
            .collect(),
        Value::String(s) => s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty() && *t != "#")
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InlineTag;
    use crate::parse::parse_metadata;
    use insta::assert_debug_snapshot;

    fn inline(tags: &[&str]) -> Vec<InlineTag> {
        tags.iter()
            .enumerate()
            .map(|(line, t)| InlineTag {
                tag: t.to_string(),
                line,
            })
            .collect()
    }

    fn yaml(s: &str) -> Option<Value> {
        Some(serde_yaml::from_str(s).unwrap())
    }

    #[test]
    fn test_no_snapshot_is_empty() {
        assert!(extract_tags(None).is_empty());
    }

    #[test]
    fn test_merges_inline_and_frontmatter() {
        let snapshot = MetadataSnapshot {
            tags: inline(&["#b", "#a"]),
            frontmatter: yaml("tags: [a, c]"),
        };
        assert_debug_snapshot!(extract_tags(Some(&snapshot)), @r###"
        [
            "#a",
            "#b",
            "#c",
        ]
        "###);
    }

    #[test]
    fn test_duplicates_collapse() {
        let snapshot = MetadataSnapshot {
            tags: inline(&["#x", "#x", "#y", "#x"]),
            frontmatter: None,
        };
        assert_eq!(extract_tags(Some(&snapshot)), vec!["#x", "#y"]);
    }

    #[test]
    fn test_frontmatter_with_marker_not_doubled() {
        let snapshot = MetadataSnapshot {
            tags: Vec::new(),
            frontmatter: yaml("tags: ['#keep', plain]"),
        };
        assert_eq!(extract_tags(Some(&snapshot)), vec!["#keep", "#plain"]);
    }

    #[test]
    fn test_frontmatter_string_forms() {
        assert_eq!(frontmatter_tags(&Value::String("a, b  c".into())), vec!["a", "b", "c"]);
        assert_eq!(frontmatter_tags(&Value::String("".into())), Vec::<String>::new());
    }

    #[test]
    fn test_malformed_frontmatter_contributes_nothing() {
        for fm in ["tags: 42", "tags: {a: 1}", "tags:", "title: no tags here"] {
            let snapshot = MetadataSnapshot {
                tags: inline(&["#only"]),
                frontmatter: yaml(fm),
            };
            assert_eq!(extract_tags(Some(&snapshot)), vec!["#only"], "front-matter: {}", fm);
        }
    }

    #[test]
    fn test_non_string_sequence_items_skipped() {
        let snapshot = MetadataSnapshot {
            tags: Vec::new(),
            frontmatter: yaml("tags: [ok, 7, [nested], '  ', also]"),
        };
        assert_eq!(extract_tags(Some(&snapshot)), vec!["#also", "#ok"]);
    }

    #[test]
    fn test_result_is_strictly_ascending_and_idempotent() {
        let text = "---\ntags: [zeta, alpha, mid]\n---\n#mid #beta #alpha #Zed\n";
        let snapshot = parse_metadata(text);
        let first = extract_tags(Some(&snapshot));
        assert!(first.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(first, extract_tags(Some(&snapshot)));
        // Uppercase sorts before lowercase in byte order
        assert_eq!(first, vec!["#Zed", "#alpha", "#beta", "#mid", "#zeta"]);
    }
}
