//! Attribute decoder (C4): entered whenever the driver is inside an
//! attribute value. Locates the value's end, entity-decodes it, recursively
//! scans the decoded payload in the embedded language, and re-encodes each
//! scanned replacement for the delimiter it came from.

use crate::context::Delim;
use crate::context::Context;
use crate::errors::LexError;
use crate::escaping::{escape_html_dq_only, escape_html_sq_only};
use crate::html::unescape_html;
use crate::scanner::scan;

/// Bytes that HTML5 treats as parse errors inside an unquoted attribute
/// value: `NUL " ' < = \``.
fn has_bad_unquoted_char(value: &str) -> Option<char> {
    value.chars().find(|c| matches!(c, '\0' | '"' | '\'' | '<' | '=' | '`'))
}

/// Index of the first byte not part of the current attribute value: the
/// first whitespace or `>` for unquoted values, the first literal delimiter
/// character for quoted ones, or `raw.len()` if the value runs off the end
/// of this chunk.
fn end_of_attr_value(raw: &str, delim: Delim) -> usize {
    match delim {
        Delim::None => 0,
        Delim::SpaceOrTagEnd => raw.find(|c: char| c.is_whitespace() || c == '>').unwrap_or(raw.len()),
        Delim::DoubleQuote => raw.find('"').unwrap_or(raw.len()),
        Delim::SingleQuote => raw.find('\'').unwrap_or(raw.len()),
    }
}

/// Consumes the attribute value at the head of `raw`, decoding entities,
/// recursively scanning the decoded payload, and re-escaping each piece for
/// `ctx`'s delimiter. Returns `(bytes of raw consumed, context after the
/// value, normalized replacement)`, mirroring `scan`'s return shape so the
/// driver can treat both the same way.
pub fn decode_attribute_value(raw: &str, ctx: Context) -> Result<(usize, Context, String), LexError> {
    let delim = ctx.delim();
    debug_assert_ne!(delim, Delim::None, "decode_attribute_value called outside an attribute");

    let attr_value_end = end_of_attr_value(raw, delim);

    if delim == Delim::SpaceOrTagEnd {
        if let Some(ch) = has_bad_unquoted_char(&raw[..attr_value_end]) {
            return Err(LexError::InvalidUnquotedAttrChar {
                ch,
                value: raw[..attr_value_end].to_string(),
            });
        }
    }

    let attr_end = if attr_value_end < raw.len() {
        Some(attr_value_end + delim.closing_text().len())
    } else {
        None
    };

    let decoded = unescape_html(&raw[..attr_value_end]);
    let mut payload: &str = &decoded;
    let escaper = if delim == Delim::SingleQuote { escape_html_sq_only } else { escape_html_dq_only };

    let mut ctx = ctx;
    let mut out = String::new();
    while !payload.is_empty() {
        let (n, next_ctx, replacement) = scan(payload, ctx)?;
        out.push_str(&escaper(&replacement));
        payload = &payload[n..];
        ctx = next_ctx;
    }

    if let Some(attr_end) = attr_end {
        ctx = ctx.back_to_tag();
        out.push(if delim == Delim::SingleQuote { '\'' } else { '"' });
        Ok((attr_end, ctx, out))
    } else {
        Ok((raw.len(), ctx, out))
    }
}
