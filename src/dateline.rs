//! Dateline composition
//!
//! Turns an article's dateline location into the `City`, `Province`,
//! `Country` and `Placeline` fields.

use crate::article::Dateline;

/// Dateline fields of a content item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeline {
    /// `City`
    pub city: String,
    /// `Province`
    pub province: String,
    /// `Country`
    pub country: String,
    /// `Placeline`
    pub placeline: String,
}

impl Placeline {
    /// Build the dateline fields; all empty without a located dateline
    pub fn from_dateline(dateline: Option<&Dateline>) -> Self {
        let Some(located) = dateline.and_then(|d| d.located.as_ref()) else {
            return Self::default();
        };
        Self {
            city: located.city.clone(),
            province: located.state.clone(),
            country: located.country.clone(),
            placeline: join_placeline(&[
                located.city.as_str(),
                located.state.as_str(),
                located.country.as_str(),
            ]),
        }
    }
}

/// Join the non-empty parts with `;`
///
/// # Examples
///
/// ```
/// use jimi_formatter::dateline::join_placeline;
///
/// assert_eq!(join_placeline(&["Los Angeles", "California", "USA"]), "Los Angeles;California;USA");
/// assert_eq!(join_placeline(&["Los Angeles", "", ""]), "Los Angeles");
/// assert_eq!(join_placeline(&["", "", "USA"]), "USA");
/// ```
pub fn join_placeline(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(";")
}
