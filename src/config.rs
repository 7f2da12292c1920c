//! Channel configuration
//!
//! The Jimi envelope carries a handful of routing flags and codes that belong
//! to the distribution channel rather than to any article. They live here so
//! a channel variant can override them without touching the field mapping.

use chrono::{FixedOffset, Offset, Utc};
use tracing::warn;

/// Channel name served by the Jimi formatter
pub const JIMI_FORMAT: &str = "jimi";

/// Static PSC routing code of the Jimi channel
pub const DEFAULT_PSC_CODES: &str = "ap---";

/// Service the Jimi channel publishes to
pub const DEFAULT_SERVICES: &str = "Print";

/// Offset of the distribution system's home zone in seconds (UTC-04:00, no DST)
pub const DEFAULT_HOME_OFFSET_SECS: i32 = -4 * 3600;

/// Per-channel protocol constants
///
/// # Example
///
/// ```
/// use jimi_formatter::ChannelConfig;
///
/// // The Jimi channel as deployed
/// let config = ChannelConfig::default();
/// assert_eq!(config.psc_codes, "ap---");
///
/// // A regional variant
/// let regional = ChannelConfig::default()
///     .with_psc_codes("ap-reg")
///     .with_regional(true);
/// assert!(regional.is_regional);
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelConfig {
    /// Format name answered by `can_format`
    #[cfg_attr(feature = "serde", serde(default = "default_format_name"))]
    pub format_name: String,

    /// `PscCodes` envelope value
    #[cfg_attr(feature = "serde", serde(default = "default_psc_codes"))]
    pub psc_codes: String,

    /// `Services` envelope value
    #[cfg_attr(feature = "serde", serde(default = "default_services"))]
    pub services: String,

    /// `Reschedule` envelope flag
    #[cfg_attr(feature = "serde", serde(default))]
    pub reschedule: bool,

    /// `IsRegional` envelope flag
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_regional: bool,

    /// `CanAutoRoute` envelope flag
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    pub can_auto_route: bool,

    /// `UseLocalsOut` envelope flag
    #[cfg_attr(feature = "serde", serde(default))]
    pub use_locals_out: bool,

    /// `Cachable` content item flag
    #[cfg_attr(feature = "serde", serde(default))]
    pub cachable: bool,

    /// Fixed offset `UpdatedDateTime` is rendered in, in seconds east of UTC
    ///
    /// The home zone is pinned: no daylight-saving adjustment is applied.
    #[cfg_attr(feature = "serde", serde(default = "default_home_offset_secs"))]
    pub home_offset_secs: i32,
}

#[cfg(feature = "serde")]
fn default_format_name() -> String {
    JIMI_FORMAT.to_string()
}

#[cfg(feature = "serde")]
fn default_psc_codes() -> String {
    DEFAULT_PSC_CODES.to_string()
}

#[cfg(feature = "serde")]
fn default_services() -> String {
    DEFAULT_SERVICES.to_string()
}

#[cfg(feature = "serde")]
fn default_true() -> bool {
    true
}

#[cfg(feature = "serde")]
fn default_home_offset_secs() -> i32 {
    DEFAULT_HOME_OFFSET_SECS
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            format_name: JIMI_FORMAT.to_string(),
            psc_codes: DEFAULT_PSC_CODES.to_string(),
            services: DEFAULT_SERVICES.to_string(),
            reschedule: false,
            is_regional: false,
            can_auto_route: true,
            use_locals_out: false,
            cachable: false,
            home_offset_secs: DEFAULT_HOME_OFFSET_SECS,
        }
    }
}

impl ChannelConfig {
    /// Override the format name this channel answers to
    pub fn with_format_name(mut self, name: impl Into<String>) -> Self {
        self.format_name = name.into();
        self
    }

    /// Override the PSC routing code
    pub fn with_psc_codes(mut self, codes: impl Into<String>) -> Self {
        self.psc_codes = codes.into();
        self
    }

    /// Override the service name
    pub fn with_services(mut self, services: impl Into<String>) -> Self {
        self.services = services.into();
        self
    }

    /// Mark the channel as regional
    pub fn with_regional(mut self, regional: bool) -> Self {
        self.is_regional = regional;
        self
    }

    /// Override the home zone offset, in seconds east of UTC
    pub fn with_home_offset_secs(mut self, secs: i32) -> Self {
        self.home_offset_secs = secs;
        self
    }

    /// Home zone as a chrono offset
    ///
    /// Offsets outside +/-24h are not representable; they are logged and
    /// fall back to the Jimi default.
    pub fn home_offset(&self) -> FixedOffset {
        if let Some(offset) = FixedOffset::east_opt(self.home_offset_secs) {
            return offset;
        }
        warn!(
            "Home offset of {} seconds is out of range for channel {}, using {} seconds",
            self.home_offset_secs, self.format_name, DEFAULT_HOME_OFFSET_SECS
        );
        FixedOffset::east_opt(DEFAULT_HOME_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
    }

    /// Whether `home_offset_secs` is a representable offset
    pub fn has_valid_home_offset(&self) -> bool {
        FixedOffset::east_opt(self.home_offset_secs).is_some()
    }
}
