pub mod file_filter;
pub mod search;
pub mod tag_extract;

pub use file_filter::{files_with_tag, has_tag};
pub use search::search_uri;
pub use tag_extract::{extract_tags, frontmatter_tags};
