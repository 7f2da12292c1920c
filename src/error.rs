//! Formatter error types

use thiserror::Error;

use crate::sequence::SequenceError;

/// Errors raised while turning an article record into a Jimi document
///
/// Formatting either succeeds completely or fails with one of these before
/// any document is returned.
#[derive(Error, Debug)]
pub enum FormatterError {
    /// A field the mapping cannot do without is absent or empty
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// The article type has no Jimi content type
    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    /// The sequence issuer could not provide a publish id
    #[error("Sequence issuer failure: {0}")]
    SequenceIssuer(#[from] SequenceError),

    /// IO error from the XML writer sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML writer error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Serialized document was not valid UTF-8
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type alias using FormatterError
pub type Result<T> = std::result::Result<T, FormatterError>;
