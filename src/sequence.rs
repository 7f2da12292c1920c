//! Sequence issuing
//!
//! Every Jimi document carries a `PublishID` obtained from a sequence issuer.
//! The issuer owns uniqueness and monotonicity per subscriber; the formatter
//! asks it once per document and propagates any failure.
//!
//! # Example
//!
//! ```
//! use jimi_formatter::{InMemorySequenceIssuer, SequenceIssuer, SequenceSettings, SubscriberRecord};
//!
//! let issuer = InMemorySequenceIssuer::new();
//! let sub = SubscriberRecord::new("s1", "Print")
//!     .with_sequence_settings(SequenceSettings::new(1, 2));
//!
//! assert_eq!(issuer.next_sequence_number(&sub).unwrap(), 1);
//! assert_eq!(issuer.next_sequence_number(&sub).unwrap(), 2);
//! assert_eq!(issuer.next_sequence_number(&sub).unwrap(), 1); // wrapped
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::trace;

use crate::SubscriberRecord;

/// Sequence issuer errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Backing service could not be reached or timed out
    #[error("Sequence service unavailable: {0}")]
    Unavailable(String),

    /// Subscriber's range is empty
    #[error("Invalid sequence settings: min {min} > max {max}")]
    InvalidSettings {
        /// Configured minimum
        min: u64,
        /// Configured maximum
        max: u64,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Source of per-subscriber publish ids
pub trait SequenceIssuer: Send + Sync {
    /// Issue the next sequence number for `subscriber`
    fn next_sequence_number(&self, subscriber: &SubscriberRecord) -> Result<u64, SequenceError>;
}

impl<T: SequenceIssuer + ?Sized> SequenceIssuer for &T {
    fn next_sequence_number(&self, subscriber: &SubscriberRecord) -> Result<u64, SequenceError> {
        (**self).next_sequence_number(subscriber)
    }
}

impl<T: SequenceIssuer + ?Sized> SequenceIssuer for Box<T> {
    fn next_sequence_number(&self, subscriber: &SubscriberRecord) -> Result<u64, SequenceError> {
        (**self).next_sequence_number(subscriber)
    }
}

impl<T: SequenceIssuer + ?Sized> SequenceIssuer for Arc<T> {
    fn next_sequence_number(&self, subscriber: &SubscriberRecord) -> Result<u64, SequenceError> {
        (**self).next_sequence_number(subscriber)
    }
}

/// In-process sequence issuer
///
/// Keeps the last issued number per subscriber id behind a mutex, so
/// concurrent callers for the same subscriber never receive the same number.
/// Counters are lost when the issuer is dropped.
#[derive(Debug, Default)]
pub struct InMemorySequenceIssuer {
    last_issued: Mutex<HashMap<String, u64>>,
}

impl InMemorySequenceIssuer {
    /// Create an issuer with no history
    pub fn new() -> Self {
        Self::default()
    }

    /// Last number issued to a subscriber id
    pub fn last_issued(&self, subscriber_id: &str) -> Option<u64> {
        self.last_issued
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(subscriber_id)
            .copied()
    }

    /// Forget all counters
    pub fn reset(&self) {
        self.last_issued
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl SequenceIssuer for InMemorySequenceIssuer {
    fn next_sequence_number(&self, subscriber: &SubscriberRecord) -> Result<u64, SequenceError> {
        let settings = subscriber.sequence_settings();
        if settings.min > settings.max {
            return Err(SequenceError::InvalidSettings {
                min: settings.min,
                max: settings.max,
            });
        }

        let mut counters = self.last_issued.lock().unwrap_or_else(|e| e.into_inner());
        let next = match counters.get(&subscriber.id) {
            Some(&last) if last >= settings.min && last < settings.max => last + 1,
            _ => settings.min,
        };
        counters.insert(subscriber.id.clone(), next);

        trace!("Issued sequence number {} to subscriber {}", next, subscriber.id);
        Ok(next)
    }
}
