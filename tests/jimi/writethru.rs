//! Writethru numbering in formatted documents

use super::support::{format_parsed, sample_article};
use jimi_formatter::ArticleRecord;

#[test]
fn test_writethru() {
    let expected = [
        (1, "1st"),
        (2, "2nd"),
        (3, "3rd"),
        (4, "4th"),
        (5, "5th"),
        (10, "10th"),
        (11, "11th"),
        (12, "12th"),
        (13, "13th"),
        (100, "100th"),
        (101, "101st"),
        (111, "111th"),
    ];

    for (value, num) in expected {
        let article = ArticleRecord {
            rewrite_sequence: Some(value),
            ..sample_article()
        };
        let doc = format_parsed(&article);
        assert_eq!(doc.item("WritethruNum"), Some(num), "rewrite {}", value);
        assert_eq!(doc.item("WritethruValue"), Some(value.to_string().as_str()));
        assert_eq!(doc.item("WriteThruType"), Some("Writethru"));
    }
}

#[test]
fn test_zero_rewrite_is_not_a_writethru() {
    let article = ArticleRecord {
        rewrite_sequence: Some(0),
        ..sample_article()
    };
    let doc = format_parsed(&article);
    assert_eq!(doc.item("WritethruValue"), Some("0"));
    assert_eq!(doc.item("WritethruNum"), None);
    assert_eq!(doc.item("WriteThruType"), None);
}
