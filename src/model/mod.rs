pub mod config;
pub mod document;
pub mod leaf;
pub mod metadata;
pub mod tag;

pub use config::*;
pub use document::*;
pub use leaf::*;
pub use metadata::*;
pub use tag::{TAG_MARKER, strip_marker, with_marker};
