//! Writethru numbering
//!
//! A writethru is a republished revision of an article. Jimi carries the
//! revision both as a plain number and as an English ordinal.

/// Marker written to `WriteThruType` for rewrites
pub const WRITETHRU_TYPE: &str = "Writethru";

/// English ordinal suffix for `n`
///
/// 11, 12 and 13 (modulo 100) take "th"; otherwise the last digit decides.
pub fn ordinal_suffix(n: u64) -> &'static str {
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Number followed by its English ordinal suffix
///
/// # Examples
///
/// ```
/// use jimi_formatter::writethru::ordinal;
///
/// assert_eq!(ordinal(1), "1st");
/// assert_eq!(ordinal(12), "12th");
/// assert_eq!(ordinal(101), "101st");
/// ```
pub fn ordinal(n: u64) -> String {
    format!("{}{}", n, ordinal_suffix(n))
}

/// Writethru fields of a content item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Writethru {
    /// `WritethruValue`
    pub value: String,
    /// `WritethruNum`, only for rewrites
    pub num: Option<String>,
    /// `WriteThruType`, only for rewrites
    pub kind: Option<&'static str>,
}

impl Writethru {
    /// Writethru fields for a rewrite counter (zero means not a rewrite)
    pub fn from_sequence(sequence: u32) -> Self {
        let n = u64::from(sequence);
        if n == 0 {
            return Self {
                value: "0".to_string(),
                num: None,
                kind: None,
            };
        }
        Self {
            value: n.to_string(),
            num: Some(ordinal(n)),
            kind: Some(WRITETHRU_TYPE),
        }
    }
}
