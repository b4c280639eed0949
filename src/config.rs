// SPDX-License-Identifier: GPL-3.0-or-later

use dotenvy::var;
use std::{num::NonZeroUsize, sync::OnceLock};
use tracing::warn;

// if this value changes make sure the crate-level documentation matches...
const DEFAULT_HANDLER_CACHE_LEN: NonZeroUsize = NonZeroUsize::new(64).unwrap();

static CONFIG: OnceLock<Config> = OnceLock::new();
/// This process' configuration Singleton.
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

/// A structure that provides the current configuration settings.
#[derive(Debug)]
pub struct Config {
    /// Maximum number of entries a [HandlerCache][crate::HandlerCache] built
    /// w/ `HandlerCache::new()` keeps before evicting the least recently used.
    pub handler_cache_len: NonZeroUsize,
}

impl Default for Config {
    fn default() -> Self {
        let handler_cache_len = match var("HANDLER_CACHE_LEN") {
            Ok(x) => parse_cache_len(&x).unwrap_or_else(|| {
                warn!(
                    "Invalid HANDLER_CACHE_LEN '{}'. Using {}",
                    x, DEFAULT_HANDLER_CACHE_LEN
                );
                DEFAULT_HANDLER_CACHE_LEN
            }),
            Err(_) => DEFAULT_HANDLER_CACHE_LEN,
        };

        Self { handler_cache_len }
    }
}

// zero or anything that isn't an unsigned integer is rejected.
fn parse_cache_len(s: &str) -> Option<NonZeroUsize> {
    s.trim().parse::<NonZeroUsize>().ok()
}
