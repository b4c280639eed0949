// SPDX-License-Identifier: GPL-3.0-or-later

//! An in-memory LRU store of values keyed by the identity of the response
//! handler that produced them.

use crate::{config::config, fingerprint, Callable, MyError, Token};
use core::fmt;
use lru::LruCache;
use std::{
    num::NonZeroUsize,
    sync::{Mutex, MutexGuard, PoisonError},
};
use tracing::{debug, warn};

/// A bounded cache mapping a handler's [Token] to a value.
///
/// Handlers whose identity cannot be resolved are never cached; see
/// [HandlerCache::get_or_insert_with].
pub struct HandlerCache<V> {
    entries: Mutex<LruCache<Token, V>>,
}

impl<V> Default for HandlerCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for HandlerCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.lock();
        f.debug_struct("HandlerCache")
            .field("len", &entries.len())
            .field("cap", &entries.cap())
            .finish()
    }
}

impl<V> HandlerCache<V> {
    /// Create a cache holding at most `HANDLER_CACHE_LEN` entries.
    pub fn new() -> Self {
        Self::with_capacity(config().handler_cache_len)
    }

    /// Create a cache holding at most `capacity` entries.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        HandlerCache {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    // a panic while holding the lock can't leave the LRU half-updated in a
    // way that matters to us so ignore poisoning.
    fn lock(&self) -> MutexGuard<'_, LruCache<Token, V>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Cache `value` for the given handler. Return the value it replaced if
    /// any.
    ///
    /// Raise [MyError::UnresolvableIdentity] if the handler can't be
    /// fingerprinted.
    pub fn insert<'a, C: Into<Callable<'a>>>(
        &self,
        handler: C,
        value: V,
    ) -> Result<Option<V>, MyError> {
        let key = fingerprint(handler)?;
        Ok(self.lock().put(key, value))
    }

    /// Remove and return the value cached for the given handler.
    pub fn remove<'a, C: Into<Callable<'a>>>(&self, handler: C) -> Result<Option<V>, MyError> {
        let key = fingerprint(handler)?;
        Ok(self.lock().pop(&key))
    }

    /// Return TRUE if a value is cached for the given handler.
    pub fn contains<'a, C: Into<Callable<'a>>>(&self, handler: C) -> Result<bool, MyError> {
        let key = fingerprint(handler)?;
        Ok(self.lock().contains(&key))
    }

    /// Return the number of cached values.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Return TRUE if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Return the maximum number of values this cache holds.
    pub fn capacity(&self) -> NonZeroUsize {
        self.lock().cap()
    }

    /// Discard every cached value.
    pub fn clear(&self) {
        self.lock().clear()
    }
}

impl<V: Clone> HandlerCache<V> {
    /// Return a copy of the value cached for the given handler, marking it as
    /// the most recently used.
    pub fn get<'a, C: Into<Callable<'a>>>(&self, handler: C) -> Result<Option<V>, MyError> {
        let key = fingerprint(handler)?;
        Ok(self.lock().get(&key).cloned())
    }

    /// Return the value cached for the given handler, computing and caching
    /// it w/ `f` on a miss.
    ///
    /// When the handler's identity can't be resolved the value is computed
    /// and returned but not cached.
    pub fn get_or_insert_with<'a, C, F>(&self, handler: C, f: F) -> V
    where
        C: Into<Callable<'a>>,
        F: FnOnce() -> V,
    {
        let handler = handler.into();
        let key = match fingerprint(handler) {
            Ok(x) => x,
            Err(x) => {
                warn!("Not caching value for {}: {}", handler, x);
                return f();
            }
        };

        if let Some(x) = self.lock().get(&key) {
            debug!("Cache hit for {} ({})", handler, key);
            return x.clone();
        }

        // compute outside the lock; `f` may be slow or use this cache...
        debug!("Cache miss for {} ({})", handler, key);
        let value = f();
        self.lock().put(key, value.clone());
        value
    }
}
