use std::sync::OnceLock;

use regex::Regex;

use crate::model::InlineTag;

static TAG_RE: OnceLock<Regex> = OnceLock::new();
static CODE_SPAN_RE: OnceLock<Regex> = OnceLock::new();

/// A `#` that starts a line or follows whitespace/punctuation, then tag characters.
fn tag_re() -> &'static Regex {
    TAG_RE.get_or_init(|| {
        Regex::new(r#"(?:^|[\s(\[{,;!?"'])(#[\p{L}\p{N}_/\-]+)"#).expect("valid tag regex")
    })
}

fn code_span_re() -> &'static Regex {
    CODE_SPAN_RE.get_or_init(|| Regex::new(r"`[^`]*`").expect("valid code span regex"))
}

/// Find inline tags in a note body.
///
/// `lines` are the body lines and `first_line` is the file line number of the
/// first of them, so that reported positions are file-relative. Tags inside
/// fenced code blocks and inline code spans are skipped, as are purely numeric
/// tags like `#2024`.
pub fn find_inline_tags<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    first_line: usize,
) -> Vec<InlineTag> {
    let mut tags = Vec::new();
    let mut fence: Option<&'static str> = None;

    for (i, line) in lines.into_iter().enumerate() {
        let trimmed = line.trim_start();
        if let Some(open) = fence {
            if trimmed.starts_with(open) {
                fence = None;
            }
            continue;
        }
        if trimmed.starts_with("```") {
            fence = Some("```");
            continue;
        }
        if trimmed.starts_with("~~~") {
            fence = Some("~~~");
            continue;
        }

        let without_code = code_span_re().replace_all(line, " ");
        for caps in tag_re().captures_iter(&without_code) {
            let tag = caps[1].trim_end_matches('/');
            if is_valid_tag(tag) {
                tags.push(InlineTag {
                    tag: tag.to_string(),
                    line: first_line + i,
                });
            }
        }
    }

    tags
}

/// At least one character after the marker must be something other than a digit.
fn is_valid_tag(tag: &str) -> bool {
    let body = &tag[1..];
    !body.is_empty() && body.chars().any(|c| !c.is_ascii_digit())
}
