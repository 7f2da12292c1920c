//! Article records consumed by the formatter
//!
//! The records are owned by the content store; the formatter only reads them.
//!
//! This module is organized into:
//! - `types`: Article, taxonomy and dateline data structures
//! - `content_type`: mapping of article types onto Jimi content types

mod content_type;
mod types;

pub use self::content_type::ContentType;
pub use self::types::{ArticleRecord, CvItem, Dateline, Located};
