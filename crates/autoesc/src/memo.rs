//! Memoization layer (C5 implementation note / §5): `process_raw_text` is a
//! pure function of `(raw, ctx)`, so repeated calls on identical template
//! fragments are wrapped in a bounded LRU cache instead of re-scanned. The
//! reference implementation uses an unbounded cache; bounding it here keeps
//! a long-lived process's memory flat.

use parking_lot::Mutex;
use schnellru::{ByLength, LruMap};

use crate::context::Context;
use crate::driver::{process_raw_text, ErrorTrace};
use crate::errors::LexError;

/// Default entry count for `Memoizer::new`, sized for a template set that
/// fits comfortably in memory with room for incremental recompilation.
pub const DEFAULT_MEMO_CAPACITY: u32 = 4096;

type CacheKey = (String, Context);
type CacheValue = Result<(Context, Option<String>, Option<ErrorTrace>), LexError>;

/// A bounded, least-recently-used cache in front of `process_raw_text`.
/// Safe to share across threads: all access goes through an internal lock.
pub struct Memoizer {
    cache: Mutex<LruMap<CacheKey, CacheValue>>,
}

impl Memoizer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MEMO_CAPACITY)
    }

    pub fn with_capacity(entries: u32) -> Self {
        Memoizer { cache: Mutex::new(LruMap::new(ByLength::new(entries))) }
    }

    /// Memoized `process_raw_text`: looks up `(raw, ctx)` and only calls
    /// through to the driver loop on a miss.
    pub fn process_raw_text(
        &self,
        raw: &str,
        ctx: Context,
    ) -> Result<(Context, Option<String>, Option<ErrorTrace>), LexError> {
        let key = (raw.to_string(), ctx);

        {
            let mut cache = self.cache.lock();
            if let Some(hit) = cache.get(&key) {
                return hit.clone();
            }
        }

        let result = process_raw_text(raw, ctx);
        self.cache.lock().insert(key, result.clone());
        result
    }
}

impl Default for Memoizer {
    fn default() -> Self {
        Self::new()
    }
}
