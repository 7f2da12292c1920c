//! Jimi formatter
//!
//! Maps an article record onto the Jimi XML dialect:
//!
//! - `document`: the typed `Publish`/`ContentItem` model and its serializer
//! - `JimiFormatter`: field mapping plus the single sequence issuer call
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use jimi_formatter::{ArticleRecord, Formatter, InMemorySequenceIssuer, JimiFormatter, SubscriberRecord};
//!
//! let formatter = JimiFormatter::new(InMemorySequenceIssuer::new());
//! let subscriber = SubscriberRecord::new("sub-1", "Print desk");
//! let article = ArticleRecord {
//!     id: "123".to_string(),
//!     item_type: "text".to_string(),
//!     headline: "Headline".to_string(),
//!     firstcreated: Some(Utc.with_ymd_and_hms(2020, 4, 1, 11, 13, 12).unwrap()),
//!     ..Default::default()
//! };
//!
//! let (sequence, xml) = formatter.format(&article, &subscriber).unwrap();
//! assert_eq!(sequence, 1);
//! assert!(xml.contains("<NewsCompID>123</NewsCompID>"));
//! assert!(xml.contains("<PublishID>1</PublishID>"));
//! ```

mod document;

pub use self::document::{
    CONTENT_ITEM_ELEMENT, ContentItem, Envelope, JimiDocument, ROOT_ELEMENT, XML_DECLARATION,
};

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, trace, warn};

use crate::article::{ArticleRecord, ContentType, CvItem};
use crate::dateline::Placeline;
use crate::markup::strip_markup;
use crate::timestamp::{format_embargo, format_naive, format_with_offset};
use crate::writethru::Writethru;
use crate::{ChannelConfig, FormatterError, Result, SequenceIssuer, SubscriberRecord};

/// Output formatter selected by the publishing pipeline
pub trait Formatter {
    /// Whether this formatter serves `format_name` for a subscriber destination
    fn can_format(&self, format_name: &str, subscriber_config: &HashMap<String, String>) -> bool;

    /// Format an article for a subscriber, returning `(sequence number, document)`
    fn format(
        &self,
        article: &ArticleRecord,
        subscriber: &SubscriberRecord,
    ) -> Result<(u64, String)>;
}

/// Formatter for the Jimi publishing channel
#[derive(Debug)]
pub struct JimiFormatter<I> {
    issuer: I,
    config: ChannelConfig,
}

impl<I: SequenceIssuer> JimiFormatter<I> {
    /// Create a formatter for the Jimi channel
    pub fn new(issuer: I) -> Self {
        Self::with_config(issuer, ChannelConfig::default())
    }

    /// Create a formatter for a channel variant
    pub fn with_config(issuer: I, config: ChannelConfig) -> Self {
        Self { issuer, config }
    }

    /// Channel configuration in use
    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }

    /// Sequence issuer in use
    pub fn issuer(&self) -> &I {
        &self.issuer
    }

    /// Format with an explicit clock
    ///
    /// `now` is only used as the `PublishDateTime` when the article has never
    /// been published. The article is fully mapped before the sequence issuer
    /// is asked for a number, so a rejected article consumes none.
    pub fn format_at(
        &self,
        article: &ArticleRecord,
        subscriber: &SubscriberRecord,
        now: DateTime<Utc>,
    ) -> Result<(u64, String)> {
        let item = self.content_item(article)?;

        let sequence = self
            .issuer
            .next_sequence_number(subscriber)
            .map_err(|e| {
                warn!(
                    "Sequence issuer failed for subscriber {}: {}",
                    subscriber.id, e
                );
                FormatterError::from(e)
            })?;

        let document = JimiDocument {
            envelope: self.envelope(article, sequence, now),
            item,
        };
        let xml = document.to_xml()?;

        debug!(
            "Formatted article {} for subscriber {} as publish id {} ({} bytes)",
            article.id,
            subscriber.id,
            sequence,
            xml.len()
        );
        Ok((sequence, xml))
    }

    /// Build the typed document for an already issued sequence number
    ///
    /// Does not contact the sequence issuer.
    pub fn build_document(
        &self,
        article: &ArticleRecord,
        sequence: u64,
        now: DateTime<Utc>,
    ) -> Result<JimiDocument> {
        Ok(JimiDocument {
            item: self.content_item(article)?,
            envelope: self.envelope(article, sequence, now),
        })
    }

    fn envelope(&self, article: &ArticleRecord, sequence: u64, now: DateTime<Utc>) -> Envelope {
        let published = article.firstpublished.unwrap_or(now);
        Envelope {
            reschedule: self.config.reschedule.to_string(),
            is_regional: self.config.is_regional.to_string(),
            can_auto_route: self.config.can_auto_route.to_string(),
            publish_id: sequence.to_string(),
            services: self.config.services.clone(),
            username: String::new(),
            use_locals_out: self.config.use_locals_out.to_string(),
            psc_codes: self.config.psc_codes.clone(),
            publish_date_time: format_naive(&published),
        }
    }

    fn content_item(&self, article: &ArticleRecord) -> Result<ContentItem> {
        if article.id.is_empty() {
            return Err(FormatterError::MissingRequiredField("id"));
        }
        let firstcreated = article
            .firstcreated
            .ok_or(FormatterError::MissingRequiredField("firstcreated"))?;
        let content_type = ContentType::from_item_type(&article.item_type)?;

        let updated = article.versioncreated.unwrap_or(firstcreated);
        let word_count = article.word_count.to_string();
        let place = Placeline::from_dateline(article.dateline.as_ref());
        let writethru = Writethru::from_sequence(article.rewrite_number());

        Ok(ContentItem {
            name: String::new(),
            cachable: self.config.cachable.to_string(),
            news_comp_id: article.id.clone(),
            content_type: content_type.as_str().to_string(),
            headline: article.headline.clone(),
            slug_proper: article.slugline.clone(),
            credit: article.creditline.clone(),
            source: article.source.clone(),
            editor_note: article.ednote.clone(),
            length: word_count.clone(),
            word_count: word_count.clone(),
            break_word_count: word_count,
            directory_text: strip_markup(&article.abstract_html),
            content_text: article.body_html.clone(),
            city: place.city,
            province: place.province,
            country: place.country,
            placeline: place.placeline,
            writethru_value: writethru.value,
            writethru_num: writethru.num,
            writethru_type: writethru.kind.map(str::to_string),
            keyword: article.keywords.join(","),
            category: article.category_name().unwrap_or_default().to_string(),
            index_code: join_names(&article.subject),
            ranking_value: article.urgency.map(|u| u.to_string()).unwrap_or_default(),
            embargo_time: format_embargo(article.embargoed.as_ref()),
            created_date_time: format_naive(&firstcreated),
            updated_date_time: format_with_offset(&updated, self.config.home_offset()),
        })
    }
}

impl<I: SequenceIssuer> Formatter for JimiFormatter<I> {
    fn can_format(&self, format_name: &str, _subscriber_config: &HashMap<String, String>) -> bool {
        let supported = format_name == self.config.format_name;
        trace!("can_format({}) = {}", format_name, supported);
        supported
    }

    fn format(
        &self,
        article: &ArticleRecord,
        subscriber: &SubscriberRecord,
    ) -> Result<(u64, String)> {
        self.format_at(article, subscriber, Utc::now())
    }
}

fn join_names(items: &[CvItem]) -> String {
    items
        .iter()
        .map(|item| item.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
