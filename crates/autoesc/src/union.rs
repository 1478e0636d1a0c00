//! Context union (C6): merges two contexts at control-flow joins (e.g. the
//! branches of a template conditional) into one context consistent with
//! both, or `Context::ERROR` if none exists.

use crate::context::{Context, JsCtx, UrlPart};

/// `a` and `b` with one named field forced equal; used to test "differ only
/// in that field" without hand-rolling a field-by-field comparison twice.
fn differs_only_in_js_ctx(a: Context, b: Context) -> bool {
    a != b && a.with_js_ctx(JsCtx::Regex) == b.with_js_ctx(JsCtx::Regex)
}

fn differs_only_in_url_part(a: Context, b: Context) -> bool {
    a != b && a.with_url_part(UrlPart::None) == b.with_url_part(UrlPart::None)
}

/// Merges `a` and `b`. Symmetric: `context_union(a, b) == context_union(b,
/// a)`. Returns `Context::ERROR` when no consistent widening exists.
pub fn context_union(a: Context, b: Context) -> Context {
    if a == b {
        return a;
    }
    if a.is_error() || b.is_error() {
        return Context::ERROR;
    }
    if differs_only_in_js_ctx(a, b) {
        return a.with_js_ctx(JsCtx::Unknown);
    }
    if differs_only_in_url_part(a, b) {
        return a.with_url_part(UrlPart::Unknown);
    }
    let a_nudged = a.force_epsilon_transition();
    let b_nudged = b.force_epsilon_transition();
    if a_nudged != a || b_nudged != b {
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("context_union: epsilon-nudging {:?}/{:?} and retrying", a, b);
        }
        return context_union(a_nudged, b_nudged);
    }
    log::debug!("context_union: no consistent widening, returning ERROR");
    Context::ERROR
}
