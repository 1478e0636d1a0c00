//! HTML-specific external collaborators (C7): the attribute content-kind
//! classifier and the entity-decode wrapper around the `entities` crate.

use crate::context::AttrKind;

const URL_ATTRS: &[&str] = &[
    "src",
    "href",
    "action",
    "formaction",
    "cite",
    "data",
    "profile",
    "manifest",
    "poster",
    "background",
    "longdesc",
    "usemap",
    "icon",
    "codebase",
    "archive",
    "classid",
    "dynsrc",
    "lowsrc",
];

/// Classifies an attribute name by the kind of content it holds.
pub fn attr_type(name: &str) -> AttrKind {
    let lower = name.to_ascii_lowercase();
    if lower == "style" {
        AttrKind::Style
    } else if lower.starts_with("on") {
        AttrKind::Script
    } else if URL_ATTRS.contains(&lower.as_str()) {
        AttrKind::Url
    } else {
        AttrKind::Plain
    }
}

/// Decodes HTML character references in `s`, permissively, the way a
/// browser's attribute-value tokenizer would.
pub fn unescape_html(s: &str) -> String {
    let decoded = entities::decode(&entities::HtmlContext::Attribute, s.as_bytes());
    String::from_utf8_lossy(&decoded).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_style_and_event_handlers() {
        assert_eq!(attr_type("style"), AttrKind::Style);
        assert_eq!(attr_type("onclick"), AttrKind::Script);
        assert_eq!(attr_type("ONLOAD"), AttrKind::Script);
    }

    #[test]
    fn classifies_url_attrs() {
        assert_eq!(attr_type("href"), AttrKind::Url);
        assert_eq!(attr_type("src"), AttrKind::Url);
        assert_eq!(attr_type("formaction"), AttrKind::Url);
    }

    #[test]
    fn classifies_plain_attrs() {
        assert_eq!(attr_type("id"), AttrKind::Plain);
        assert_eq!(attr_type("class"), AttrKind::Plain);
    }

    #[test]
    fn decodes_named_and_numeric_references() {
        assert_eq!(unescape_html("a &amp; b"), "a & b");
        assert_eq!(unescape_html("&#65;&#x42;"), "AB");
    }
}
