//! Subscriber records
//!
//! A subscriber is a destination the publishing pipeline delivers to. The
//! formatter never inspects it beyond handing it to the sequence issuer.

use std::collections::HashMap;

/// Publish id range of a subscriber
///
/// Issued numbers start at `min` and wrap back to `min` after `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceSettings {
    /// First number issued
    #[cfg_attr(feature = "serde", serde(default = "default_min"))]
    pub min: u64,
    /// Last number issued before wrapping
    #[cfg_attr(feature = "serde", serde(default = "default_max"))]
    pub max: u64,
}

#[cfg(feature = "serde")]
fn default_min() -> u64 {
    1
}

#[cfg(feature = "serde")]
fn default_max() -> u64 {
    u64::MAX
}

impl Default for SequenceSettings {
    fn default() -> Self {
        Self {
            min: 1,
            max: u64::MAX,
        }
    }
}

impl SequenceSettings {
    /// Create a sequence range
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }
}

/// Publishing destination
///
/// # Example
///
/// ```
/// use jimi_formatter::{SequenceSettings, SubscriberRecord};
///
/// let subscriber = SubscriberRecord::new("sub-1", "Print desk")
///     .with_sequence_settings(SequenceSettings::new(1, 9999));
/// assert_eq!(subscriber.sequence_settings().max, 9999);
/// ```
#[must_use]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SubscriberRecord {
    /// Subscriber identifier; sequence numbers are issued per id
    #[cfg_attr(feature = "serde", serde(rename = "_id", alias = "id"))]
    pub id: String,
    /// Display name
    pub name: String,
    /// Whether the subscriber currently receives items
    pub is_active: bool,
    /// Publish id range
    pub sequence_num_settings: Option<SequenceSettings>,
    /// Destination configuration passed to `can_format`
    pub config: HashMap<String, String>,
}

impl SubscriberRecord {
    /// Create an active subscriber
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_active: true,
            sequence_num_settings: None,
            config: HashMap::new(),
        }
    }

    /// Set the publish id range
    pub fn with_sequence_settings(mut self, settings: SequenceSettings) -> Self {
        self.sequence_num_settings = Some(settings);
        self
    }

    /// Publish id range, defaulting to `1..=u64::MAX`
    pub fn sequence_settings(&self) -> SequenceSettings {
        self.sequence_num_settings.unwrap_or_default()
    }
}
