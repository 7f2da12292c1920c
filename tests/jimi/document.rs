//! Full document tests
//!
//! Each test formats an article and checks the parsed output.

use super::support::{
    STUB_SEQUENCE, StubIssuer, format, format_parsed, init_tracing, parse, sample_article, ts,
};
use jimi_formatter::{
    ArticleRecord, FormatterError, InMemorySequenceIssuer, JimiFormatter, SequenceError,
    SequenceIssuer, SequenceSettings, SubscriberRecord,
};
use jimi_formatter::Formatter;
use std::collections::HashMap;

#[test]
fn test_can_format() {
    let formatter = JimiFormatter::new(StubIssuer(1));
    assert!(formatter.can_format("jimi", &HashMap::new()));
    assert!(!formatter.can_format("nitf", &HashMap::new()));
}

#[test]
fn test_declaration_and_root() {
    let (seq, xml) = format(&sample_article());
    assert_eq!(seq, STUB_SEQUENCE);
    assert!(xml.starts_with("<?xml version='1.0' encoding='utf-8'?>"));

    let doc = parse(&xml);
    assert_eq!(doc.root, "Publish");
    assert_eq!(doc.content_items, 1);
}

#[test]
fn test_envelope() {
    let doc = format_parsed(&sample_article());
    assert_eq!(doc.envelope("Reschedule"), Some("false"));
    assert_eq!(doc.envelope("IsRegional"), Some("false"));
    assert_eq!(doc.envelope("CanAutoRoute"), Some("true"));
    assert_eq!(doc.envelope("PublishID"), Some("100"));
    assert_eq!(doc.envelope("Services"), Some("Print"));
    assert_eq!(doc.envelope("Username"), Some(""));
    assert_eq!(doc.envelope("UseLocalsOut"), Some("false"));
    assert_eq!(doc.envelope("PscCodes"), Some("ap---"));
    assert_eq!(doc.envelope("PublishDateTime"), Some("2020-04-01T11:33:12"));
}

#[test]
fn test_content_item() {
    let doc = format_parsed(&sample_article());
    assert_eq!(doc.item("Name"), Some(""));
    assert_eq!(doc.item("Cachable"), Some("false"));
    assert_eq!(doc.item("NewsCompID"), Some("123"));
    assert_eq!(doc.item("ContentType"), Some("Text"));
    assert_eq!(doc.item("Headline"), Some("Headline"));
    assert_eq!(doc.item("Credit"), Some("Credit"));
    assert_eq!(doc.item("SlugProper"), Some("slug"));
    assert_eq!(doc.item("Source"), Some("Source"));
    assert_eq!(doc.item("EditorNote"), Some("Ednote"));
    assert_eq!(doc.item("WordCount"), Some("123"));
    assert_eq!(doc.item("BreakWordCount"), Some("123"));
    assert_eq!(doc.item("Length"), Some("123"));
    assert_eq!(doc.item("DirectoryText"), Some("Abstract"));
    assert_eq!(doc.item("ContentText"), Some("<p>Body HTML</p>"));
    assert_eq!(doc.item("Placeline"), Some(""));
    assert_eq!(doc.item("WritethruValue"), Some("0"));
    assert_eq!(doc.item("WritethruNum"), None);
    assert_eq!(doc.item("WriteThruType"), None);
    assert_eq!(doc.item("Keyword"), Some("Foo bar,baz"));
    assert_eq!(doc.item("Category"), Some("National"));
    assert_eq!(doc.item("IndexCode"), Some("Health,National"));
    assert_eq!(doc.item("RankingValue"), Some("3"));
}

#[test]
fn test_timestamps() {
    let doc = format_parsed(&sample_article());
    assert_eq!(doc.item("EmbargoTime"), Some("0001-01-01T00:00:00"));
    assert_eq!(doc.item("CreatedDateTime"), Some("2020-04-01T11:13:12"));
    assert_eq!(doc.item("UpdatedDateTime"), Some("2020-04-01T07:23:12-04:00"));
}

#[test]
fn test_embargo() {
    let article = ArticleRecord {
        embargoed: sample_article().firstcreated,
        ..sample_article()
    };
    let doc = format_parsed(&article);
    assert_eq!(doc.item("EmbargoTime"), Some("2020-04-01T11:13:12"));
}

#[test]
fn test_unpublished_article_uses_format_time() {
    init_tracing();
    let article = ArticleRecord {
        firstpublished: None,
        ..sample_article()
    };
    let formatter = JimiFormatter::new(StubIssuer(5));
    let (_, xml) = formatter
        .format_at(&article, &SubscriberRecord::default(), ts(18, 45, 0))
        .unwrap();
    assert_eq!(
        parse(&xml).envelope("PublishDateTime"),
        Some("2020-04-01T18:45:00")
    );
}

#[test]
fn test_markup_in_text_fields_survives_round_trip() {
    let article = ArticleRecord {
        headline: "Q&A: <Rust> \"fast\" & 'safe'".to_string(),
        body_html: "<p>One &amp; two</p>\n<p>caf\u{e9}</p>".to_string(),
        abstract_html: "<p>Tom &amp; Jerry</p>".to_string(),
        ..sample_article()
    };
    let doc = format_parsed(&article);
    assert_eq!(doc.item("Headline"), Some("Q&A: <Rust> \"fast\" & 'safe'"));
    assert_eq!(
        doc.item("ContentText"),
        Some("<p>One &amp; two</p>\n<p>caf\u{e9}</p>")
    );
    assert_eq!(doc.item("DirectoryText"), Some("Tom & Jerry"));
}

#[test]
fn test_control_characters_do_not_break_document() {
    let article = ArticleRecord {
        headline: "Bad\u{1}byte".to_string(),
        ..sample_article()
    };
    let doc = format_parsed(&article);
    assert_eq!(doc.item("Headline"), Some("Badbyte"));
}

#[test]
fn test_news_comp_id_matches_article_id() {
    for id in ["123", "urn:newsml:localhost:2020-04-01T11:13:12:abc", "a&b<c>"] {
        let article = ArticleRecord {
            id: id.to_string(),
            ..sample_article()
        };
        assert_eq!(format_parsed(&article).item("NewsCompID"), Some(id));
    }
}

#[test]
fn test_word_count_fields_agree() {
    let article = ArticleRecord {
        word_count: 0,
        ..sample_article()
    };
    let doc = format_parsed(&article);
    assert_eq!(doc.item("Length"), Some("0"));
    assert_eq!(doc.item("WordCount"), Some("0"));
    assert_eq!(doc.item("BreakWordCount"), Some("0"));
}

#[test]
fn test_unsupported_content_type() {
    let article = ArticleRecord {
        item_type: "picture".to_string(),
        ..sample_article()
    };
    let formatter = JimiFormatter::new(StubIssuer(1));
    let err = formatter
        .format(&article, &SubscriberRecord::default())
        .unwrap_err();
    assert!(matches!(err, FormatterError::UnsupportedContentType(t) if t == "picture"));
}

#[test]
fn test_missing_required_fields() {
    let formatter = JimiFormatter::new(StubIssuer(1));
    let sub = SubscriberRecord::default();

    let no_id = ArticleRecord {
        id: String::new(),
        ..sample_article()
    };
    assert!(matches!(
        formatter.format(&no_id, &sub),
        Err(FormatterError::MissingRequiredField("id"))
    ));

    let no_created = ArticleRecord {
        firstcreated: None,
        ..sample_article()
    };
    let err = formatter.format(&no_created, &sub).unwrap_err();
    assert_eq!(err.to_string(), "Missing required field: firstcreated");
}

#[test]
fn test_issuer_failure_is_propagated() {
    struct Down;

    impl SequenceIssuer for Down {
        fn next_sequence_number(&self, _: &SubscriberRecord) -> Result<u64, SequenceError> {
            Err(SequenceError::Unavailable("connection refused".to_string()))
        }
    }

    let formatter = JimiFormatter::new(Down);
    let err = formatter
        .format(&sample_article(), &SubscriberRecord::default())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Sequence issuer failure: Sequence service unavailable: connection refused"
    );
}

#[test]
fn test_publish_ids_follow_subscriber_sequence() {
    let issuer = InMemorySequenceIssuer::new();
    let formatter = JimiFormatter::new(&issuer);
    let desk = SubscriberRecord::new("desk", "Desk")
        .with_sequence_settings(SequenceSettings::new(9998, 9999));
    let web = SubscriberRecord::new("web", "Web");

    let ids: Vec<u64> = (0..3)
        .map(|_| formatter.format(&sample_article(), &desk).unwrap().0)
        .collect();
    assert_eq!(ids, vec![9998, 9999, 9998]);

    let (web_id, xml) = formatter.format(&sample_article(), &web).unwrap();
    assert_eq!(web_id, 1);
    assert_eq!(parse(&xml).envelope("PublishID"), Some("1"));
    assert_eq!(issuer.last_issued("desk"), Some(9998));
}

#[test]
fn test_directory_text_with_loose_entities() {
    let article = ArticleRecord {
        abstract_html: "<p>AT&T &amp; Verizon&hellip;</p><p>1 < 2</p>".to_string(),
        ..sample_article()
    };
    let doc = format_parsed(&article);
    assert_eq!(
        doc.item("DirectoryText"),
        Some("AT&T & Verizon&hellip;1 < 2")
    );
}
