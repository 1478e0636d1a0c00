//! Transition rules (C2): a closed family of rule kinds, each paired with
//! a compiled pattern, that together make up a per-state transition table.
//!
//! Rather than a class hierarchy with virtual dispatch, rule behavior is a
//! tagged sum (`RuleKind`) matched centrally in `compute_next_context` and
//! `is_applicable_to`. The `Normalize` decorator from the reference
//! implementation is flattened onto `Rule` as a field instead of wrapping
//! another rule by value, since `Rule` itself is not recursive.

use fancy_regex::Captures;

use crate::context::{AttrKind, Context, Delim, Element, JsCtx, State};
use crate::errors::LexError;
use crate::{html, js};

#[derive(Clone, Copy, Debug)]
pub enum RuleKind {
    /// Transition unconditionally to a fixed destination context.
    ToFixed(Context),
    /// Transition into the body of an open tag for a specific element.
    ToTag(Context),
    /// Transition from the end of a tag to the content appropriate to its body.
    TagDone,
    /// Transition back to `TAG | element`.
    BackToTag,
    /// Classify the attribute name in capture group 1 and enter `ATTR_NAME`.
    ToAttrName,
    /// Enter an attribute value with the given delimiter.
    ToAttrValue(Delim),
    /// Clear url-part and state, then set state.
    ToState(State),
    /// Clear state (preserving element/attr/delim), then set state.
    ToJsString(State),
    /// Disambiguate `/` as regex-literal-start or division, based on js-ctx.
    Slash,
    /// Delegate to the JS regex/division oracle for a punctuation/word token.
    JsPunc,
    /// Track progress through a hierarchical URL. The plain and
    /// CSS-escaped variants share this context update; they differ only in
    /// which characters their pattern recognizes as `?`/`#`.
    UrlPart,
    /// Enter a CSS `url(...)` construct; capture group 1 holds the delimiter.
    CssUri,
    /// A token that can precede a JS division operator.
    DivPreceder,
    /// Consumes matched text without changing context.
    SelfTransition,
    /// `</script` or `</style`; applicable only outside an attribute.
    EndTag,
    /// `</name`; applicable only when `name` matches the enclosing RCDATA element.
    RcdataEndTag,
}

#[derive(Clone, Copy, Debug)]
pub enum Normalize {
    /// Emit the matched text unchanged.
    None,
    /// Replace the matched text with `repl`, either appended after the
    /// pre-match prefix or (if `whole`) replacing the whole accumulated text.
    Replace { repl: &'static str, whole: bool },
    /// Emit `\n` if the matched span contains a JS line terminator, else
    /// emit nothing. Used for multi-line JS block comments.
    JsBlockComment,
}

pub struct Rule {
    pub pattern: fancy_regex::Regex,
    pub kind: RuleKind,
    pub normalize: Normalize,
}

/// JS line terminators, per ECMA-262 `LineTerminator`.
const JS_LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

impl Rule {
    pub fn is_applicable_to(&self, prior: Context, caps: &Captures<'_>) -> bool {
        match self.kind {
            RuleKind::EndTag => prior.attr_kind() == AttrKind::None,
            RuleKind::RcdataEndTag => caps
                .get(1)
                .map(|m| m.as_str().to_ascii_lowercase())
                .as_deref()
                == prior.element().rcdata_name(),
            _ => true,
        }
    }

    /// `matched` is the full `text[..match.end()]` span — the matched
    /// pattern plus any unmatched prefix before it, mirroring the
    /// reference implementation's `match.string[:match.end()]` — since a
    /// few rules (`UrlPart`) key their decision on whether *any*
    /// non-whitespace precedes the match, not just on the match itself.
    pub fn compute_next_context(
        &self,
        prior: Context,
        caps: &Captures<'_>,
        matched: &str,
    ) -> Result<Context, LexError> {
        match self.kind {
            RuleKind::ToFixed(dest) => Ok(dest),
            RuleKind::ToTag(ctx) => Ok(ctx),
            RuleKind::TagDone => Ok(body_state_of(prior.element())),
            RuleKind::BackToTag => Ok(prior.back_to_tag()),
            // Unlike `BackToTag`, an end tag always drops the enclosing
            // element entirely (`STATE_TAG | ELEMENT_NONE`), even though the
            // tag just closed was a SCRIPT/STYLE/RCDATA element: the body
            // we're leaving doesn't carry over into the closing tag itself.
            RuleKind::EndTag | RuleKind::RcdataEndTag => Ok(Context::new(
                State::Tag,
                Element::None,
                AttrKind::None,
                Delim::None,
                crate::context::UrlPart::None,
                JsCtx::Regex,
            )),
            RuleKind::ToAttrName => {
                let name = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
                let kind = match html::attr_type(name) {
                    classified @ (AttrKind::Script | AttrKind::Style | AttrKind::Url) => classified,
                    AttrKind::Plain | AttrKind::None => prior.attr_kind(),
                };
                Ok(Context::new(
                    State::AttrName,
                    prior.element(),
                    kind,
                    Delim::None,
                    crate::context::UrlPart::None,
                    JsCtx::Regex,
                ))
            }
            RuleKind::ToAttrValue(delim) => Ok(Context::after_attr_delimiter(
                prior.element(),
                prior.attr_kind(),
                delim,
            )),
            RuleKind::ToState(state) => Ok(prior.to_state(state)),
            RuleKind::ToJsString(state) => Ok(prior.to_js_string(state)),
            RuleKind::Slash => match prior.js_ctx() {
                JsCtx::DivOp => Ok(prior.to_state(State::Js).with_js_ctx(JsCtx::Regex)),
                JsCtx::Regex => Ok(prior.to_state(State::JsRegexp)),
                JsCtx::Unknown => Err(LexError::AmbiguousSlash {
                    context: prior,
                    suffix: caps.get(0).map(|m| m.as_str().to_string()).unwrap_or_default(),
                }),
            },
            RuleKind::JsPunc => {
                let token = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
                Ok(js::next_js_ctx(token, prior))
            }
            RuleKind::UrlPart => {
                let mut url_part = prior.url_part();
                if url_part == crate::context::UrlPart::None && !matched.trim().is_empty() {
                    url_part = crate::context::UrlPart::PreQuery;
                }
                if url_part != crate::context::UrlPart::QueryOrFrag && caps.get(1).is_some() {
                    url_part = crate::context::UrlPart::QueryOrFrag;
                }
                Ok(prior.with_url_part(url_part))
            }
            RuleKind::CssUri => {
                let delim = caps.get(1).map(|m| m.as_str());
                let state = match delim {
                    Some("\"") => State::CssDqUrl,
                    Some("'") => State::CssSqUrl,
                    _ => State::CssUrl,
                };
                Ok(prior.to_state(state))
            }
            RuleKind::DivPreceder => Ok(prior.to_state(State::Js).with_js_ctx(JsCtx::DivOp)),
            RuleKind::SelfTransition => Ok(prior),
        }
    }

    /// The normalized text to emit for this match; `prefix` is the input
    /// text preceding the match (used by non-`whole` replacements).
    pub fn raw_text<'t>(&self, matched: &'t str, prefix: &'t str) -> String {
        match self.normalize {
            Normalize::None => matched.to_string(),
            Normalize::Replace { repl, whole } => {
                if whole {
                    repl.to_string()
                } else {
                    format!("{prefix}{repl}")
                }
            }
            Normalize::JsBlockComment => {
                if matched.chars().any(|c| JS_LINE_TERMINATORS.contains(&c)) {
                    "\n".to_string()
                } else {
                    String::new()
                }
            }
        }
    }
}

fn body_state_of(element: Element) -> Context {
    match element {
        Element::None => Context::new(
            State::Text,
            Element::None,
            AttrKind::None,
            Delim::None,
            crate::context::UrlPart::None,
            JsCtx::Regex,
        ),
        Element::Script => Context::new(
            State::Js,
            Element::Script,
            AttrKind::None,
            Delim::None,
            crate::context::UrlPart::None,
            JsCtx::Regex,
        ),
        Element::Style => Context::new(
            State::Css,
            Element::Style,
            AttrKind::None,
            Delim::None,
            crate::context::UrlPart::None,
            JsCtx::Regex,
        ),
        Element::Listing | Element::Textarea | Element::Title | Element::Xmp => Context::new(
            State::Rcdata,
            element,
            AttrKind::None,
            Delim::None,
            crate::context::UrlPart::None,
            JsCtx::Regex,
        ),
        Element::Close => Context::new(
            State::Text,
            Element::None,
            AttrKind::None,
            Delim::None,
            crate::context::UrlPart::None,
            JsCtx::Regex,
        ),
    }
}
