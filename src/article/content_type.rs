//! Article type to Jimi content type mapping

use std::fmt;
use std::str::FromStr;

use crate::{FormatterError, Result};

/// Jimi content type
///
/// Only text items have a rule; every other article type is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// Text story
    Text,
}

impl ContentType {
    /// Map an article `type` onto its Jimi content type
    ///
    /// # Examples
    ///
    /// ```
    /// use jimi_formatter::article::ContentType;
    ///
    /// assert_eq!(ContentType::from_item_type("text").unwrap(), ContentType::Text);
    /// assert!(ContentType::from_item_type("picture").is_err());
    /// ```
    pub fn from_item_type(item_type: &str) -> Result<Self> {
        match item_type {
            "text" => Ok(ContentType::Text),
            other => Err(FormatterError::UnsupportedContentType(other.to_string())),
        }
    }

    /// Wire token for this content type
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "Text",
        }
    }
}

impl FromStr for ContentType {
    type Err = FormatterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_item_type(s)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
