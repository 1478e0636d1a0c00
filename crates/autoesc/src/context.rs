//! The packed context value (C1): state, element, attribute-kind,
//! delimiter, url-part, and js-ctx bitfields, plus the pure
//! accessors/mutators every other module builds on.

const STATE_SHIFT: u32 = 0;
const STATE_MASK: u32 = 0x1F;
const ELEMENT_SHIFT: u32 = 5;
const ELEMENT_MASK: u32 = 0x7;
const ATTR_SHIFT: u32 = 8;
const ATTR_MASK: u32 = 0x7;
const DELIM_SHIFT: u32 = 11;
const DELIM_MASK: u32 = 0x3;
const URL_PART_SHIFT: u32 = 13;
const URL_PART_MASK: u32 = 0x3;
const JS_CTX_SHIFT: u32 = 15;
const JS_CTX_MASK: u32 = 0x3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum State {
    Text = 0,
    Rcdata,
    HtmlBeforeTagName,
    TagName,
    Tag,
    AttrName,
    AfterName,
    BeforeValue,
    Attr,
    HtmlCmt,
    Css,
    CssBlockCmt,
    CssLineCmt,
    CssDqStr,
    CssSqStr,
    CssUrl,
    CssDqUrl,
    CssSqUrl,
    Js,
    JsBlockCmt,
    JsLineCmt,
    JsDqStr,
    JsSqStr,
    JsRegexp,
    Url,
    Error,
}

impl State {
    fn from_u32(v: u32) -> Self {
        use State::*;
        match v {
            0 => Text,
            1 => Rcdata,
            2 => HtmlBeforeTagName,
            3 => TagName,
            4 => Tag,
            5 => AttrName,
            6 => AfterName,
            7 => BeforeValue,
            8 => Attr,
            9 => HtmlCmt,
            10 => Css,
            11 => CssBlockCmt,
            12 => CssLineCmt,
            13 => CssDqStr,
            14 => CssSqStr,
            15 => CssUrl,
            16 => CssDqUrl,
            17 => CssSqUrl,
            18 => Js,
            19 => JsBlockCmt,
            20 => JsLineCmt,
            21 => JsDqStr,
            22 => JsSqStr,
            23 => JsRegexp,
            24 => Url,
            25 => Error,
            _ => unreachable!("invalid state bits {v}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Element {
    None = 0,
    Script,
    Style,
    Listing,
    Textarea,
    Title,
    Xmp,
    Close,
}

impl Element {
    fn from_u32(v: u32) -> Self {
        use Element::*;
        match v {
            0 => None,
            1 => Script,
            2 => Style,
            3 => Listing,
            4 => Textarea,
            5 => Title,
            6 => Xmp,
            7 => Close,
            _ => unreachable!("invalid element bits {v}"),
        }
    }

    /// Name used by RCDATA end-tag matching (`</title`, `</textarea`, ...).
    pub fn rcdata_name(self) -> Option<&'static str> {
        match self {
            Element::Textarea => Some("textarea"),
            Element::Title => Some("title"),
            Element::Listing => Some("listing"),
            Element::Xmp => Some("xmp"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum AttrKind {
    None = 0,
    Script,
    Style,
    Url,
    Plain,
}

impl AttrKind {
    fn from_u32(v: u32) -> Self {
        use AttrKind::*;
        match v {
            0 => None,
            1 => Script,
            2 => Style,
            3 => Url,
            4 => Plain,
            _ => unreachable!("invalid attr-kind bits {v}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Delim {
    None = 0,
    DoubleQuote,
    SingleQuote,
    SpaceOrTagEnd,
}

impl Delim {
    fn from_u32(v: u32) -> Self {
        use Delim::*;
        match v {
            0 => None,
            1 => DoubleQuote,
            2 => SingleQuote,
            3 => SpaceOrTagEnd,
            _ => unreachable!("invalid delim bits {v}"),
        }
    }

    /// The literal text that closes a value started with this delimiter.
    pub fn closing_text(self) -> &'static str {
        match self {
            Delim::None => "",
            Delim::DoubleQuote => "\"",
            Delim::SingleQuote => "'",
            Delim::SpaceOrTagEnd => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum UrlPart {
    None = 0,
    PreQuery,
    QueryOrFrag,
    Unknown,
}

impl UrlPart {
    fn from_u32(v: u32) -> Self {
        use UrlPart::*;
        match v {
            0 => None,
            1 => PreQuery,
            2 => QueryOrFrag,
            3 => Unknown,
            _ => unreachable!("invalid url-part bits {v}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum JsCtx {
    Regex = 0,
    DivOp,
    Unknown,
}

impl JsCtx {
    fn from_u32(v: u32) -> Self {
        use JsCtx::*;
        match v {
            0 => Regex,
            1 => DivOp,
            2 => Unknown,
            _ => unreachable!("invalid js-ctx bits {v}"),
        }
    }
}

/// A packed, `Copy` context value: state + element + attribute-kind +
/// delimiter + url-part + js-ctx, all in one `u32`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Context(u32);

impl Context {
    pub const ERROR: Context = Context::new(State::Error, Element::None, AttrKind::None, Delim::None, UrlPart::None, JsCtx::Regex);
    pub const TEXT: Context = Context::new(State::Text, Element::None, AttrKind::None, Delim::None, UrlPart::None, JsCtx::Regex);

    pub const fn new(
        state: State,
        element: Element,
        attr: AttrKind,
        delim: Delim,
        url_part: UrlPart,
        js_ctx: JsCtx,
    ) -> Self {
        Context(
            ((state as u32) << STATE_SHIFT)
                | ((element as u32) << ELEMENT_SHIFT)
                | ((attr as u32) << ATTR_SHIFT)
                | ((delim as u32) << DELIM_SHIFT)
                | ((url_part as u32) << URL_PART_SHIFT)
                | ((js_ctx as u32) << JS_CTX_SHIFT),
        )
    }

    pub fn state(self) -> State {
        State::from_u32((self.0 >> STATE_SHIFT) & STATE_MASK)
    }

    pub fn element(self) -> Element {
        Element::from_u32((self.0 >> ELEMENT_SHIFT) & ELEMENT_MASK)
    }

    pub fn attr_kind(self) -> AttrKind {
        AttrKind::from_u32((self.0 >> ATTR_SHIFT) & ATTR_MASK)
    }

    pub fn delim(self) -> Delim {
        Delim::from_u32((self.0 >> DELIM_SHIFT) & DELIM_MASK)
    }

    pub fn url_part(self) -> UrlPart {
        UrlPart::from_u32((self.0 >> URL_PART_SHIFT) & URL_PART_MASK)
    }

    pub fn js_ctx(self) -> JsCtx {
        JsCtx::from_u32((self.0 >> JS_CTX_SHIFT) & JS_CTX_MASK)
    }

    pub fn is_error(self) -> bool {
        self.state() == State::Error
    }

    pub fn with_state(self, state: State) -> Self {
        Context((self.0 & !(STATE_MASK << STATE_SHIFT)) | ((state as u32) << STATE_SHIFT))
    }

    pub fn with_element(self, element: Element) -> Self {
        Context((self.0 & !(ELEMENT_MASK << ELEMENT_SHIFT)) | ((element as u32) << ELEMENT_SHIFT))
    }

    pub fn with_attr_kind(self, attr: AttrKind) -> Self {
        Context((self.0 & !(ATTR_MASK << ATTR_SHIFT)) | ((attr as u32) << ATTR_SHIFT))
    }

    pub fn with_delim(self, delim: Delim) -> Self {
        Context((self.0 & !(DELIM_MASK << DELIM_SHIFT)) | ((delim as u32) << DELIM_SHIFT))
    }

    pub fn with_url_part(self, url_part: UrlPart) -> Self {
        Context((self.0 & !(URL_PART_MASK << URL_PART_SHIFT)) | ((url_part as u32) << URL_PART_SHIFT))
    }

    pub fn with_js_ctx(self, js_ctx: JsCtx) -> Self {
        Context((self.0 & !(JS_CTX_MASK << JS_CTX_SHIFT)) | ((js_ctx as u32) << JS_CTX_SHIFT))
    }

    /// Clears state and url-part, keeping element/attr/delim/js-ctx, then
    /// sets `state`. Mirrors `_TransitionToState.compute_next_context`.
    pub fn to_state(self, state: State) -> Self {
        self.with_state(state).with_url_part(UrlPart::None)
    }

    /// Clears everything but element/attr/delim, then sets `state`. Mirrors
    /// `_TransitionToJsString.compute_next_context`.
    pub fn to_js_string(self, state: State) -> Self {
        Context::new(state, self.element(), self.attr_kind(), self.delim(), UrlPart::None, JsCtx::Regex)
    }

    /// Resets to `TAG | element`, dropping attr/delim/url-part/js-ctx.
    /// Mirrors `_TransitionBackToTag.compute_next_context`.
    pub fn back_to_tag(self) -> Self {
        Context::new(State::Tag, self.element(), AttrKind::None, Delim::None, UrlPart::None, JsCtx::Regex)
    }

    /// State appropriate for entering an attribute value of `attr` kind
    /// with the given delimiter, keeping element/attr/delim.
    pub fn after_attr_delimiter(element: Element, attr: AttrKind, delim: Delim) -> Self {
        let state = match attr {
            AttrKind::Script => State::Js,
            AttrKind::Style => State::Css,
            AttrKind::Url => State::Url,
            AttrKind::Plain | AttrKind::None => State::Attr,
        };
        Context::new(state, element, attr, delim, UrlPart::None, JsCtx::Regex)
    }

    /// Applies the small set of zero-width "epsilon" nudges the driver and
    /// `context_union` use to collapse transient attribute-parsing states
    /// at branch joins: `ATTR_NAME` falls through to `AFTER_NAME`, and
    /// `AFTER_NAME`/`BEFORE_VALUE` fall back to the enclosing tag body.
    /// Any other state is returned unchanged.
    pub fn force_epsilon_transition(self) -> Self {
        match self.state() {
            State::AttrName => self.to_state(State::AfterName),
            State::AfterName | State::BeforeValue => self.back_to_tag(),
            _ => self,
        }
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::debug::context_to_string(*self))
    }
}
