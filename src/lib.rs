#![doc = include_str!("../README.md")]

/// News article records read by the formatter
pub mod article;
mod config;
/// Dateline to placeline composition
pub mod dateline;
mod error;
/// Jimi formatter and document model
pub mod formatter;
/// HTML fragment to plain text
pub mod markup;
mod sequence;
mod subscriber;
/// Naive and fixed-offset timestamp rendering
pub mod timestamp;
/// Writethru ordinal numbering
pub mod writethru;

pub use article::{ArticleRecord, ContentType, CvItem, Dateline, Located};
pub use config::{ChannelConfig, DEFAULT_PSC_CODES, DEFAULT_SERVICES, JIMI_FORMAT};
pub use error::{FormatterError, Result};
pub use formatter::{ContentItem, Envelope, Formatter, JimiDocument, JimiFormatter};
pub use sequence::{InMemorySequenceIssuer, SequenceError, SequenceIssuer};
pub use subscriber::{SequenceSettings, SubscriberRecord};
