//! Human-readable rendering of a packed `Context`, used by its `Debug` impl
//! and by error messages. Mirrors the `"STATE_js ELEMENT_script ATTR_url"`
//! style state dump the Python reference prints in its own debug helper.

use crate::context::{AttrKind, Context, Delim, Element, JsCtx, State, UrlPart};

fn state_name(s: State) -> &'static str {
    match s {
        State::Text => "STATE_TEXT",
        State::Rcdata => "STATE_RCDATA",
        State::HtmlBeforeTagName => "STATE_HTML_BEFORE_TAG_NAME",
        State::TagName => "STATE_TAG_NAME",
        State::Tag => "STATE_TAG",
        State::AttrName => "STATE_ATTR_NAME",
        State::AfterName => "STATE_AFTER_NAME",
        State::BeforeValue => "STATE_BEFORE_VALUE",
        State::Attr => "STATE_ATTR",
        State::HtmlCmt => "STATE_HTMLCMT",
        State::Css => "STATE_CSS",
        State::CssBlockCmt => "STATE_CSSBLOCK_CMT",
        State::CssLineCmt => "STATE_CSSLINE_CMT",
        State::CssDqStr => "STATE_CSSDQ_STR",
        State::CssSqStr => "STATE_CSSSQ_STR",
        State::CssUrl => "STATE_CSS_URL",
        State::CssDqUrl => "STATE_CSSDQ_URL",
        State::CssSqUrl => "STATE_CSSSQ_URL",
        State::Js => "STATE_JS",
        State::JsBlockCmt => "STATE_JSBLOCK_CMT",
        State::JsLineCmt => "STATE_JSLINE_CMT",
        State::JsDqStr => "STATE_JSDQ_STR",
        State::JsSqStr => "STATE_JSSQ_STR",
        State::JsRegexp => "STATE_JSREGEXP",
        State::Url => "STATE_URL",
        State::Error => "STATE_ERROR",
    }
}

fn element_name(e: Element) -> Option<&'static str> {
    match e {
        Element::None => None,
        Element::Script => Some("ELEMENT_SCRIPT"),
        Element::Style => Some("ELEMENT_STYLE"),
        Element::Listing => Some("ELEMENT_LISTING"),
        Element::Textarea => Some("ELEMENT_TEXTAREA"),
        Element::Title => Some("ELEMENT_TITLE"),
        Element::Xmp => Some("ELEMENT_XMP"),
        Element::Close => Some("ELEMENT_CLOSE"),
    }
}

fn attr_name(a: AttrKind) -> Option<&'static str> {
    match a {
        AttrKind::None => None,
        AttrKind::Script => Some("ATTR_SCRIPT"),
        AttrKind::Style => Some("ATTR_STYLE"),
        AttrKind::Url => Some("ATTR_URL"),
        AttrKind::Plain => Some("ATTR_PLAIN"),
    }
}

fn delim_name(d: Delim) -> Option<&'static str> {
    match d {
        Delim::None => None,
        Delim::DoubleQuote => Some("DELIM_DOUBLE_QUOTE"),
        Delim::SingleQuote => Some("DELIM_SINGLE_QUOTE"),
        Delim::SpaceOrTagEnd => Some("DELIM_SPACE_OR_TAG_END"),
    }
}

fn url_part_name(u: UrlPart) -> Option<&'static str> {
    match u {
        UrlPart::None => None,
        UrlPart::PreQuery => Some("URL_PART_PRE_QUERY"),
        UrlPart::QueryOrFrag => Some("URL_PART_QUERY_OR_FRAG"),
        UrlPart::Unknown => Some("URL_PART_UNKNOWN"),
    }
}

fn js_ctx_name(j: JsCtx) -> &'static str {
    match j {
        JsCtx::Regex => "JS_CTX_REGEX",
        JsCtx::DivOp => "JS_CTX_DIV_OP",
        JsCtx::Unknown => "JS_CTX_UNKNOWN",
    }
}

/// Renders `ctx` as a space-separated list of the set fields, e.g.
/// `"STATE_ATTR ELEMENT_SCRIPT ATTR_SCRIPT DELIM_DOUBLE_QUOTE"`.
pub fn context_to_string(ctx: Context) -> String {
    let mut parts = vec![state_name(ctx.state())];
    parts.extend(element_name(ctx.element()));
    parts.extend(attr_name(ctx.attr_kind()));
    parts.extend(delim_name(ctx.delim()));
    parts.extend(url_part_name(ctx.url_part()));
    if ctx.state() == State::Js || ctx.state() == State::JsRegexp {
        parts.push(js_ctx_name(ctx.js_ctx()));
    }
    parts.join(" ")
}
