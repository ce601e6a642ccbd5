/// Split a note into its YAML front-matter block and the body.
///
/// Returns the raw YAML (without the `---` fences) and the 0-based line index
/// where the body starts. The block must open on the very first line (a
/// leading byte-order mark is skipped); an unterminated block is treated as
/// body text.
pub fn split_frontmatter(text: &str) -> (Option<&str>, usize) {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return (None, 0);
    };
    if first.trim_end() != "---" {
        return (None, 0);
    }

    let start = first.len();
    let mut offset = start;
    for (i, line) in lines.enumerate() {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            // i counts lines after the opening fence
            return (Some(&text[start..offset]), i + 2);
        }
        offset += line.len();
    }
    (None, 0)
}

/// Parse a note's front-matter into a YAML mapping.
///
/// Malformed YAML, or YAML whose top level is not a mapping, yields `None`:
/// a broken block contributes no metadata instead of failing the note.
pub fn parse_frontmatter(text: &str) -> (Option<serde_yaml::Value>, usize) {
    let (yaml, body_start) = split_frontmatter(text);
    let Some(yaml) = yaml else {
        return (None, body_start);
    };

    match serde_yaml::from_str::<serde_yaml::Value>(yaml) {
        Ok(value) if value.is_mapping() => (Some(value), body_start),
        Ok(_) => (None, body_start),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring malformed front-matter");
            (None, body_start)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let text = "---\ntags: [a]\n---\n# Title\n";
        let (yaml, body) = split_frontmatter(text);
        assert_eq!(yaml, Some("tags: [a]\n"));
        assert_eq!(body, 3);
    }

    #[test]
    fn test_split_dots_terminator() {
        let text = "---\ntitle: x\n...\nbody";
        let (yaml, body) = split_frontmatter(text);
        assert_eq!(yaml, Some("title: x\n"));
        assert_eq!(body, 3);
    }

    #[test]
    fn test_split_empty_block() {
        let (yaml, body) = split_frontmatter("---\n---\nbody\n");
        assert_eq!(yaml, Some(""));
        assert_eq!(body, 2);
    }

    #[test]
    fn test_no_frontmatter() {
        assert_eq!(split_frontmatter("# Title\n---\n"), (None, 0));
        assert_eq!(split_frontmatter(""), (None, 0));
    }

    #[test]
    fn test_unterminated_block_is_body() {
        assert_eq!(split_frontmatter("---\ntags: [a]\n# Title\n"), (None, 0));
    }

    #[test]
    fn test_byte_order_mark_before_fence() {
        let text = "\u{feff}---\ntags: [x]\n---\nbody\n";
        let (yaml, body) = split_frontmatter(text);
        assert_eq!(yaml, Some("tags: [x]\n"));
        assert_eq!(body, 3);
        assert!(parse_frontmatter(text).0.is_some());
    }

    #[test]
    fn test_crlf_fences() {
        let text = "---\r\ntags: a\r\n---\r\nbody";
        let (yaml, body) = split_frontmatter(text);
        assert_eq!(yaml, Some("tags: a\r\n"));
        assert_eq!(body, 3);
    }

    #[test]
    fn test_parse_mapping() {
        let (fm, body) = parse_frontmatter("---\ntags:\n  - alpha\n  - beta\n---\n");
        let fm = fm.unwrap();
        let tags = fm.get("tags").unwrap().as_sequence().unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(body, 5);
    }

    #[test]
    fn test_parse_malformed_is_none() {
        let (fm, body) = parse_frontmatter("---\ntags: [a, b\n---\nbody\n");
        assert!(fm.is_none());
        // The block is still skipped so its lines are not scanned as body
        assert_eq!(body, 3);
    }

    #[test]
    fn test_parse_scalar_top_level_is_none() {
        let (fm, _) = parse_frontmatter("---\njust a string\n---\n");
        assert!(fm.is_none());
    }
}
