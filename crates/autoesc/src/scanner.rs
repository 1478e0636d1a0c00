//! The token scanner (C3): earliest-match-wins rule selection for one
//! state's transition list.

use crate::context::Context;
use crate::errors::LexError;
use crate::table::TABLE;

/// Consumes a portion of `text` and computes the next context.
///
/// `text` must be non-empty. Returns `(consumed length, next context,
/// normalized replacement for text[..consumed])`.
pub fn scan(text: &str, context: Context) -> Result<(usize, Context, String), LexError> {
    if context.is_error() {
        return Ok((text.len(), context, text.to_string()));
    }

    let rules = &TABLE[context.state() as usize];

    let mut earliest_start = text.len() + 1;
    let mut chosen: Option<(usize, &crate::rules::Rule, fancy_regex::Captures<'_>)> = None;

    for rule in rules {
        let Some(caps) = rule
            .pattern
            .captures(text)
            .unwrap_or_else(|e| panic!("regex engine failure matching {:?}: {e}", rule.pattern))
        else {
            continue;
        };
        let m = caps.get(0).expect("capture group 0 always present on a match");
        if m.start() < earliest_start && rule.is_applicable_to(context, &caps) {
            earliest_start = m.start();
            chosen = Some((m.end(), rule, caps));
        }
    }

    let (consumed, next_context, normalized) = match chosen {
        Some((end, rule, caps)) => {
            let matched = &text[..end];
            let prefix = &text[..caps.get(0).unwrap().start()];
            let next = rule.compute_next_context(context, &caps, matched)?;
            log::trace!(
                "scan: state {:?} matched {:?} (len {}) -> {:?}",
                context.state(),
                rule.kind,
                end,
                next.state()
            );
            (end, next, rule.raw_text(matched, prefix))
        }
        None => {
            log::trace!("scan: state {:?} had no applicable rule over {:?}", context.state(), text);
            (text.len(), Context::ERROR, text.to_string())
        }
    };

    if consumed == 0 && next_context.state() == context.state() {
        return Err(LexError::NoProgress { state: context.state() });
    }

    Ok((consumed, next_context, normalized))
}
