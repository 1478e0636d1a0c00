//! Driver loop (C5): the crate's single public entry point. Repeatedly
//! invokes the scanner (C3) or, inside an attribute value, the attribute
//! decoder (C4), until the chunk is consumed or an error context is
//! reached.

use crate::attrs::decode_attribute_value;
use crate::context::{Context, Delim};
use crate::errors::LexError;
use crate::scanner::scan;

/// Pinpoints where an `ERROR` context was first reached: the context and
/// unconsumed suffix as of just before the failing token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorTrace {
    pub context_before: Context,
    pub raw_suffix: String,
}

/// Consumes `raw` starting at `ctx`, returning the context after the chunk
/// and the normalized rewriting of it.
///
/// On reaching `ERROR` — whether `ctx` already was one or a later token
/// drove it there — `normalized` is `None` and `trace` pinpoints the
/// failure; partial output up to that point is discarded, matching the
/// reference scanner this is ported from. A `LexError` (ambiguous slash,
/// disallowed unquoted-attribute character) aborts the whole chunk the same
/// way, via `?`, rather than producing a partial result.
pub fn process_raw_text(
    raw: &str,
    ctx: Context,
) -> Result<(Context, Option<String>, Option<ErrorTrace>), LexError> {
    let mut ctx = ctx;
    let mut raw = raw;
    let mut normalized = String::with_capacity(raw.len());

    while !raw.is_empty() {
        let prior_ctx = ctx;
        let prior_raw = raw;

        if ctx.delim() == Delim::None {
            let (n, next_ctx, replacement) = scan(raw, ctx)?;
            raw = &raw[n..];
            normalized.push_str(&replacement);
            ctx = next_ctx;
            if ctx.delim() == Delim::SpaceOrTagEnd {
                normalized.push('"');
            }
        } else {
            if log::log_enabled!(log::Level::Debug) {
                log::debug!("driver: decoding attribute value, delim {:?}", ctx.delim());
            }
            let (n, next_ctx, replacement) = decode_attribute_value(raw, ctx)?;
            raw = &raw[n..];
            normalized.push_str(&replacement);
            ctx = next_ctx;
        }

        if ctx.is_error() {
            return Ok((
                ctx,
                None,
                Some(ErrorTrace { context_before: prior_ctx, raw_suffix: prior_raw.to_string() }),
            ));
        }
    }

    Ok((ctx, Some(normalized), None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{AttrKind, Element, JsCtx, State, UrlPart};

    #[test]
    fn passes_plain_text_through() {
        let (ctx, normalized, err) = process_raw_text("<b>Hello", Context::TEXT).unwrap();
        assert_eq!(ctx, Context::TEXT);
        assert_eq!(normalized.as_deref(), Some("<b>Hello"));
        assert!(err.is_none());
    }

    #[test]
    fn elides_html_comments() {
        let (ctx, normalized, err) = process_raw_text("<!-- comment -->", Context::TEXT).unwrap();
        assert_eq!(ctx, Context::TEXT);
        assert_eq!(normalized.as_deref(), Some(""));
        assert!(err.is_none());
    }

    #[test]
    fn collapses_newline_containing_js_block_comment() {
        let js_ctx = Context::new(State::Js, Element::Script, AttrKind::None, Delim::None, UrlPart::None, JsCtx::Regex);
        let (ctx, normalized, err) = process_raw_text("/*\n*/", js_ctx).unwrap();
        assert_eq!(ctx.state(), State::Js);
        assert_eq!(normalized.as_deref(), Some("\n"));
        assert!(err.is_none());
    }

    #[test]
    fn inserts_synthetic_quotes_around_unquoted_attr_value() {
        let (ctx, normalized, err) = process_raw_text("<a href=foo?x=1>", Context::TEXT).unwrap();
        assert_eq!(ctx, Context::TEXT);
        assert_eq!(normalized.as_deref(), Some("<a href=\"foo?x=1\">"));
        assert!(err.is_none());
    }

    #[test]
    fn rewrites_double_quoted_onclick_value() {
        let (ctx, normalized, err) =
            process_raw_text(r#"<a onclick="alert(&quot;hi&quot;)">"#, Context::TEXT).unwrap();
        assert_eq!(ctx, Context::TEXT);
        assert_eq!(normalized.as_deref(), Some(r#"<a onclick="alert(&quot;hi&quot;)">"#));
        assert!(err.is_none());
    }

    #[test]
    fn error_context_is_absorbing_and_discards_output() {
        let (ctx, normalized, err) = process_raw_text("whatever comes next", Context::ERROR).unwrap();
        assert_eq!(ctx, Context::ERROR);
        assert!(normalized.is_none());
        assert!(err.is_some());
    }
}
