//! The JS regex/division disambiguation oracle (C7, §4.8): classifies the
//! token(s) most recently consumed from `STATE_JS` to decide whether the
//! next `/` starts a regex literal or is a division operator.
//!
//! Grounded on the token-context classifier in
//! `2d57e804_gc-victor-sxo__src-rs-jsx_transformer-jsx_scanner.rs.rs`: walk
//! the token left to right, updating a before/after-operand flag as each
//! sub-run (identifier, number, or punctuation character) is consumed, and
//! keep whatever the last sub-run decided.

use crate::context::{Context, JsCtx};

const REGEX_PRECEDING_KEYWORDS: &[&str] = &[
    "return",
    "throw",
    "new",
    "delete",
    "void",
    "typeof",
    "instanceof",
    "in",
    "of",
    "case",
    "do",
    "else",
    "yield",
    "await",
];

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_part(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

/// Updates `prior`'s js-ctx bits after consuming `token`, a run of
/// punctuation/word characters matched by the `JsPunc` rule.
pub fn next_js_ctx(token: &str, prior: Context) -> Context {
    let mut js_ctx = prior.js_ctx();
    let chars: Vec<char> = token.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if is_ident_start(c) {
            let start = i;
            i += 1;
            while i < chars.len() && is_ident_part(chars[i]) {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            js_ctx = if REGEX_PRECEDING_KEYWORDS.contains(&word.to_ascii_lowercase().as_str()) {
                JsCtx::Regex
            } else {
                JsCtx::DivOp
            };
        } else if c.is_ascii_digit() {
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            js_ctx = JsCtx::DivOp;
        } else {
            i += 1;
            js_ctx = match c {
                ')' | ']' | '}' => JsCtx::DivOp,
                // A statement separator doesn't itself precede an operand or
                // an operator; it carries forward whatever the token before
                // it decided, rather than forcing REGEX.
                ';' => js_ctx,
                _ => JsCtx::Regex,
            };
        }
    }
    prior.with_js_ctx(js_ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{AttrKind, Delim, Element, State, UrlPart};

    fn js_context() -> Context {
        Context::new(State::Js, Element::None, AttrKind::None, Delim::None, UrlPart::None, JsCtx::Regex)
    }

    #[test]
    fn identifier_ends_expression() {
        let ctx = next_js_ctx("x", js_context());
        assert_eq!(ctx.js_ctx(), JsCtx::DivOp);
    }

    #[test]
    fn return_precedes_regex() {
        let ctx = next_js_ctx("return", js_context());
        assert_eq!(ctx.js_ctx(), JsCtx::Regex);
    }

    #[test]
    fn closing_bracket_precedes_division() {
        let ctx = next_js_ctx(")", js_context());
        assert_eq!(ctx.js_ctx(), JsCtx::DivOp);
        let ctx = next_js_ctx("]", js_context());
        assert_eq!(ctx.js_ctx(), JsCtx::DivOp);
        let ctx = next_js_ctx("}", js_context());
        assert_eq!(ctx.js_ctx(), JsCtx::DivOp);
    }

    #[test]
    fn numeric_literal_precedes_division() {
        let ctx = next_js_ctx("123", js_context());
        assert_eq!(ctx.js_ctx(), JsCtx::DivOp);
    }

    #[test]
    fn operator_precedes_regex() {
        let ctx = next_js_ctx("+", js_context());
        assert_eq!(ctx.js_ctx(), JsCtx::Regex);
    }

    #[test]
    fn trailing_semicolon_does_not_override_the_preceding_operand() {
        // "1;" glued into one token: the trailing `;` must not flip the
        // numeric literal's DivOp verdict back to Regex.
        let ctx = next_js_ctx("2;", js_context());
        assert_eq!(ctx.js_ctx(), JsCtx::DivOp);
    }

    #[test]
    fn glued_run_keeps_last_sub_token() {
        // ")" then "+" then "x": closing paren then plus then identifier.
        let ctx = next_js_ctx(")+x", js_context());
        assert_eq!(ctx.js_ctx(), JsCtx::DivOp);
    }
}
