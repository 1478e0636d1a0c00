//! A context-tracking lexer for mixed HTML/CSS/JavaScript template text.
//!
//! Given a chunk of static template text and the context the parser was in
//! before it, [`process_raw_text`] returns the context after the chunk and
//! a normalized rewriting of it (stray `<` escaped to `&lt;`, comments elided,
//! unquoted attribute values quoted, embedded JS/CSS string and comment
//! boundaries tracked through HTML entity decoding). [`context_union`]
//! merges two contexts at a template's control-flow joins (e.g. the two
//! branches of a conditional), and [`force_epsilon_transition`] exposes the
//! same "nudge past a transient state" step it uses internally.
//!
//! The module layout mirrors the components it's built from: a packed
//! [`Context`] value, a table of per-state transition [`rules`], the
//! earliest-match-wins [`scanner`], the attribute-value [`attrs`] decoder,
//! the [`driver`] loop tying them together, and narrow external
//! collaborators ([`html`], [`js`], [`escaping`], [`debug`]).

mod attrs;
pub mod context;
mod debug;
mod driver;
mod errors;
mod escaping;
mod html;
mod js;
mod memo;
mod rules;
mod scanner;
mod table;
mod union;

pub use context::{AttrKind, Context, Delim, Element, JsCtx, State, UrlPart};
pub use driver::{process_raw_text, ErrorTrace};
pub use errors::LexError;
pub use html::{attr_type, unescape_html};
pub use memo::{Memoizer, DEFAULT_MEMO_CAPACITY};
pub use union::context_union;

/// Applies the small set of zero-width "epsilon" nudges used to collapse
/// transient attribute-parsing states at branch joins. Exposed for the
/// surrounding template engine's own branch-merge logic; [`context_union`]
/// already calls this internally.
pub fn force_epsilon_transition(ctx: Context) -> Context {
    ctx.force_epsilon_transition()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_of_a_context_with_itself_is_itself() {
        assert_eq!(context_union(Context::TEXT, Context::TEXT), Context::TEXT);
    }

    #[test]
    fn process_raw_text_is_deterministic() {
        let first = process_raw_text("<a href=foo?x=1>", Context::TEXT).unwrap();
        let second = process_raw_text("<a href=foo?x=1>", Context::TEXT).unwrap();
        assert_eq!(first, second);
    }
}
