//! Jimi document model and XML serialization
//!
//! A Jimi document is a `Publish` envelope holding exactly one
//! `ContentItem`. Every field is a text-only element; empty values are
//! written as empty elements and fields set to `None` are left out.

use std::borrow::Cow;
use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::Result;

/// XML declaration every Jimi document starts with
pub const XML_DECLARATION: &str = "<?xml version='1.0' encoding='utf-8'?>";

/// Root element name
pub const ROOT_ELEMENT: &str = "Publish";

/// Content item element name
pub const CONTENT_ITEM_ELEMENT: &str = "ContentItem";

/// Channel-level part of a Jimi document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Envelope {
    pub reschedule: String,
    pub is_regional: String,
    pub can_auto_route: String,
    pub publish_id: String,
    pub services: String,
    pub username: String,
    pub use_locals_out: String,
    pub psc_codes: String,
    pub publish_date_time: String,
}

impl Envelope {
    /// Envelope fields in wire order
    pub fn fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("Reschedule", Some(self.reschedule.as_str())),
            ("IsRegional", Some(self.is_regional.as_str())),
            ("CanAutoRoute", Some(self.can_auto_route.as_str())),
            ("PublishID", Some(self.publish_id.as_str())),
            ("Services", Some(self.services.as_str())),
            ("Username", Some(self.username.as_str())),
            ("UseLocalsOut", Some(self.use_locals_out.as_str())),
            ("PscCodes", Some(self.psc_codes.as_str())),
            ("PublishDateTime", Some(self.publish_date_time.as_str())),
        ]
    }
}

/// Article-level part of a Jimi document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentItem {
    pub name: String,
    pub cachable: String,
    pub news_comp_id: String,
    pub content_type: String,
    pub headline: String,
    pub slug_proper: String,
    pub credit: String,
    pub source: String,
    pub editor_note: String,
    pub length: String,
    pub word_count: String,
    pub break_word_count: String,
    pub directory_text: String,
    pub content_text: String,
    pub city: String,
    pub province: String,
    pub country: String,
    pub placeline: String,
    pub writethru_value: String,
    /// Only present for rewrites
    pub writethru_num: Option<String>,
    /// Only present for rewrites
    pub writethru_type: Option<String>,
    pub keyword: String,
    pub category: String,
    pub index_code: String,
    pub ranking_value: String,
    pub embargo_time: String,
    pub created_date_time: String,
    pub updated_date_time: String,
}

impl ContentItem {
    /// Content item fields in wire order
    pub fn fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("Name", Some(self.name.as_str())),
            ("Cachable", Some(self.cachable.as_str())),
            ("NewsCompID", Some(self.news_comp_id.as_str())),
            ("ContentType", Some(self.content_type.as_str())),
            ("Headline", Some(self.headline.as_str())),
            ("SlugProper", Some(self.slug_proper.as_str())),
            ("Credit", Some(self.credit.as_str())),
            ("Source", Some(self.source.as_str())),
            ("EditorNote", Some(self.editor_note.as_str())),
            ("Length", Some(self.length.as_str())),
            ("WordCount", Some(self.word_count.as_str())),
            ("BreakWordCount", Some(self.break_word_count.as_str())),
            ("DirectoryText", Some(self.directory_text.as_str())),
            ("ContentText", Some(self.content_text.as_str())),
            ("City", Some(self.city.as_str())),
            ("Province", Some(self.province.as_str())),
            ("Country", Some(self.country.as_str())),
            ("Placeline", Some(self.placeline.as_str())),
            ("WritethruValue", Some(self.writethru_value.as_str())),
            ("WritethruNum", self.writethru_num.as_deref()),
            ("WriteThruType", self.writethru_type.as_deref()),
            ("Keyword", Some(self.keyword.as_str())),
            ("Category", Some(self.category.as_str())),
            ("IndexCode", Some(self.index_code.as_str())),
            ("RankingValue", Some(self.ranking_value.as_str())),
            ("EmbargoTime", Some(self.embargo_time.as_str())),
            ("CreatedDateTime", Some(self.created_date_time.as_str())),
            ("UpdatedDateTime", Some(self.updated_date_time.as_str())),
        ]
    }
}

/// Complete Jimi document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JimiDocument {
    /// `Publish` level fields
    pub envelope: Envelope,
    /// The single `ContentItem`
    pub item: ContentItem,
}

impl JimiDocument {
    /// Serialize to a UTF-8 XML string, declaration included
    pub fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        writer.write_event(Event::Start(BytesStart::new(ROOT_ELEMENT)))?;
        for (name, value) in self.envelope.fields() {
            write_field(&mut writer, name, value)?;
        }

        writer.write_event(Event::Start(BytesStart::new(CONTENT_ITEM_ELEMENT)))?;
        for (name, value) in self.item.fields() {
            write_field(&mut writer, name, value)?;
        }
        writer.write_event(Event::End(BytesEnd::new(CONTENT_ITEM_ELEMENT)))?;

        writer.write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;

        let body = String::from_utf8(writer.into_inner().into_inner())?;

        let mut result = String::with_capacity(XML_DECLARATION.len() + 1 + body.len());
        result.push_str(XML_DECLARATION);
        result.push('\n');
        result.push_str(&body);
        Ok(result)
    }
}

fn write_field<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: Option<&str>,
) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };
    if value.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(name)))?;
        return Ok(());
    }

    let text = xml_chars(value);
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    // Only markup-significant characters are escaped; quotes stay literal in text
    writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(&*text))))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Drop characters XML 1.0 cannot carry
fn xml_chars(value: &str) -> Cow<'_, str> {
    fn allowed(c: char) -> bool {
        matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && c != '\u{fffe}' && c != '\u{ffff}')
    }

    if value.chars().all(allowed) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(value.chars().filter(|c| allowed(*c)).collect())
    }
}
