//! Article type definitions
//!
//! This module contains the data structures the formatter reads from an
//! article record. Unknown fields of the stored record are ignored.

use chrono::{DateTime, Utc};

/// News article record
///
/// All timestamps are timezone-aware and normalized to UTC.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use jimi_formatter::article::{ArticleRecord, CvItem};
///
/// let article = ArticleRecord {
///     id: "urn:newsml:localhost:2020-04-01:123".to_string(),
///     item_type: "text".to_string(),
///     headline: "Headline".to_string(),
///     keywords: vec!["Foo bar".to_string(), "baz".to_string()],
///     subject: vec![CvItem::new("Health", "h")],
///     firstcreated: Some(Utc.with_ymd_and_hms(2020, 4, 1, 11, 13, 12).unwrap()),
///     ..Default::default()
/// };
///
/// assert!(!article.is_rewrite());
/// assert_eq!(article.last_updated(), article.firstcreated);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArticleRecord {
    /// Opaque article identifier (required)
    #[cfg_attr(feature = "serde", serde(rename = "_id", alias = "id"))]
    pub id: String,

    /// Item type, e.g. "text"
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub item_type: String,

    /// Headline
    pub headline: String,
    /// Slugline
    pub slugline: String,
    /// Credit line
    pub creditline: String,
    /// Source agency
    pub source: String,
    /// Editorial note
    pub ednote: String,
    /// Word count of the body
    pub word_count: u64,
    /// Abstract (markup)
    #[cfg_attr(feature = "serde", serde(rename = "abstract"))]
    pub abstract_html: String,
    /// Body (markup)
    pub body_html: String,

    /// Free-form keywords, in editorial order
    pub keywords: Vec<String>,
    /// ANPA categories; only the first one is significant
    pub anpa_category: Vec<CvItem>,
    /// Subject codes, in editorial order
    pub subject: Vec<CvItem>,

    /// Urgency ranking
    pub urgency: Option<u8>,

    /// Rewrite counter; absent or zero when the article is not a rewrite
    pub rewrite_sequence: Option<u32>,

    /// Embargo time
    pub embargoed: Option<DateTime<Utc>>,

    /// Dateline
    pub dateline: Option<Dateline>,

    /// Creation time (required)
    pub firstcreated: Option<DateTime<Utc>>,
    /// Time of the latest version
    pub versioncreated: Option<DateTime<Utc>>,
    /// Time the article was first published
    pub firstpublished: Option<DateTime<Utc>>,
}

impl ArticleRecord {
    /// Rewrite number, zero when the article is not a rewrite
    pub fn rewrite_number(&self) -> u32 {
        self.rewrite_sequence.unwrap_or(0)
    }

    /// Whether this article is a republished revision
    pub fn is_rewrite(&self) -> bool {
        self.rewrite_number() > 0
    }

    /// Last update time: `versioncreated`, else `firstcreated`
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.versioncreated.or(self.firstcreated)
    }

    /// Name of the first ANPA category, if any
    pub fn category_name(&self) -> Option<&str> {
        self.anpa_category.first().map(|c| c.name.as_str())
    }
}

/// Controlled vocabulary entry (category, subject)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CvItem {
    /// Display name
    pub name: String,
    /// Code
    pub qcode: String,
}

impl CvItem {
    /// Create a vocabulary entry
    pub fn new(name: impl Into<String>, qcode: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qcode: qcode.into(),
        }
    }
}

/// Article dateline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Dateline {
    /// Dateline source
    pub source: String,
    /// Rendered dateline text
    pub text: String,
    /// Place the story was filed from
    pub located: Option<Located>,
}

/// Place a story was filed from
///
/// Only `city`, `state` and `country` reach the wire; the codes are kept for
/// completeness of the stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Located {
    /// City name
    pub city: String,
    /// City code
    pub city_code: String,
    /// State or province name
    pub state: String,
    /// State code
    pub state_code: String,
    /// Country name
    pub country: String,
    /// Country code
    pub country_code: String,
    /// IANA time zone of the place
    pub tz: String,
}

impl Located {
    /// Create a location from city, state and country names
    pub fn new(
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            country: country.into(),
            ..Default::default()
        }
    }
}
