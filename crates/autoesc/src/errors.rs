//! The out-of-band error channel. The in-band `ERROR` context remains a
//! plain `Context` value (see `Context::ERROR`) rather than a `Result::Err`
//! variant, since it must flow through `Context`'s `Copy` value and compose
//! with `context_union`; this type covers the conditions that deserve a
//! more informative message than "the context is now ERROR".

use thiserror::Error;

use crate::context::{Context, State};

#[derive(Debug, Clone, Error)]
pub enum LexError {
    #[error("ambiguous `/` could start a division or a RegExp. Please parenthesize near `{suffix}`")]
    AmbiguousSlash { context: Context, suffix: String },

    #[error("{ch:?} in unquoted attr: {value:?}")]
    InvalidUnquotedAttrChar { ch: char, value: String },

    #[error("no progress scanning state {state:?}; the transition table has a gap")]
    NoProgress { state: State },
}
