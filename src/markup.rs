//! Markup to plain text
//!
//! Editorial fields such as the abstract are stored as HTML fragments that
//! are not guaranteed to be well-formed XML (`<br>`, `&nbsp;`), so they are
//! scanned leniently instead of being parsed.

use std::borrow::Cow;

use quick_xml::escape::{resolve_predefined_entity, unescape_with};

/// Elements whose content is never text
const SKIPPED_ELEMENTS: [&str; 2] = ["script", "style"];

/// Strip tags from an HTML fragment and decode character references
///
/// Text content is concatenated in document order. Comments and the contents
/// of `script`/`style` are dropped. An entity that cannot be decoded is kept
/// as written.
///
/// # Examples
///
/// ```
/// use jimi_formatter::markup::strip_markup;
///
/// assert_eq!(strip_markup("<p>Abstract</p>"), "Abstract");
/// assert_eq!(strip_markup("<p>Fish &amp; <b>chips</b></p>"), "Fish & chips");
/// ```
pub fn strip_markup(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        push_text(&mut out, &rest[..start]);
        rest = &rest[start..];

        if !starts_markup(&rest[1..]) {
            // A `<` not followed by a name, `/`, `!` or `?` is plain text
            out.push('<');
            rest = &rest[1..];
            continue;
        }

        if let Some(comment) = rest.strip_prefix("<!--") {
            rest = match comment.find("-->") {
                Some(end) => &comment[end + 3..],
                None => "",
            };
            continue;
        }

        let Some(end) = rest.find('>') else {
            // Unterminated tag: nothing after it is text
            rest = "";
            break;
        };
        let tag = &rest[1..end];
        rest = &rest[end + 1..];

        if let Some(name) = opening_tag_name(tag) {
            if SKIPPED_ELEMENTS.contains(&name.as_str()) && !tag.ends_with('/') {
                rest = skip_element_body(rest, &name);
            }
        }
    }
    push_text(&mut out, rest);

    out
}

fn push_text(out: &mut String, raw: &str) {
    if raw.is_empty() {
        return;
    }
    out.push_str(&decode_entities(raw));
}

/// Longest reference considered, `&` and `;` excluded
const MAX_REFERENCE_LEN: usize = 32;

fn starts_markup(after_lt: &str) -> bool {
    after_lt
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'))
}

/// Decode each `&...;` reference on its own
///
/// A reference that does not resolve, and a `&` that does not start one, are
/// copied through unchanged without affecting the references around them.
fn decode_entities(raw: &str) -> Cow<'_, str> {
    if !raw.contains('&') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let reference = rest[1..]
            .find(|c: char| c == ';' || c == '&' || c == '<' || c.is_whitespace())
            .filter(|&end| end > 0 && end <= MAX_REFERENCE_LEN && rest[1 + end..].starts_with(';'))
            .map(|end| &rest[..end + 2]);

        match reference {
            Some(reference) => {
                out.push_str(&decode_reference(reference));
                rest = &rest[reference.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Decode a single `&name;` or `&#...;` reference, or return it as written
fn decode_reference(reference: &str) -> Cow<'_, str> {
    unescape_with(reference, |entity| {
        resolve_predefined_entity(entity).or(match entity {
            "nbsp" => Some("\u{a0}"),
            _ => None,
        })
    })
    .unwrap_or(Cow::Borrowed(reference))
}

/// Lowercased element name of an opening tag, `None` for closing tags,
/// declarations and processing instructions
fn opening_tag_name(tag: &str) -> Option<String> {
    if tag.starts_with('/') || tag.starts_with('!') || tag.starts_with('?') {
        return None;
    }
    let name: String = tag
        .chars()
        .take_while(|c| !c.is_whitespace() && *c != '/')
        .collect();
    if name.is_empty() {
        None
    } else {
        Some(name.to_ascii_lowercase())
    }
}

/// Skip past the closing tag of `name`
fn skip_element_body<'a>(rest: &'a str, name: &str) -> &'a str {
    let closing = format!("</{}", name);
    let lower = rest.to_ascii_lowercase();
    match lower.find(&closing) {
        Some(pos) => match rest[pos..].find('>') {
            Some(end) => &rest[pos + end + 1..],
            None => "",
        },
        None => "",
    }
}
