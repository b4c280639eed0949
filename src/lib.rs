// SPDX-License-Identifier: GPL-3.0-or-later

#![warn(missing_docs)]

//!
//! Short, stable fingerprints identifying the response handlers given to an
//! HTTP client so that they can be deduplicated or used as cache keys.
//!
//! A handler may be referenced in a number of ways: a free function, a
//! method bound to an instance, an associated function spelled either as a
//! `(Type, method)` pair or as a `"Type::method"` string, an object
//! implementing [ResponseHandler], an anonymous such object, or a plain
//! closure. [fingerprint] classifies the reference, builds a [Descriptor]
//! from the parts that make up its identity and reduces it to an 8 hex
//! digit [Token].
//!
//! ```
//! use handler_hash::{fingerprint, MyError};
//!
//! # fn main() -> Result<(), MyError> {
//! let t1 = fingerprint(("Handler", "on_body"))?;
//! let t2 = fingerprint("Handler::on_body")?;
//! assert_eq!(t1, t2);
//! assert_eq!(t1.to_string().len(), 8);
//! # Ok(())
//! # }
//! ```
//!
//! Tokens are meant for in-process bookkeeping: the ones of closures and
//! anonymous handlers are derived from compiler type information and may
//! differ from one build or run to the next.
//!
//! [HandlerCache] builds on tokens to offer a bounded LRU store
//! of values keyed by handler identity.
//!
//! # Configuration
//!
//! Settings are read from the environment, or a `.env` file, once:
//!
//! * `HANDLER_CACHE_LEN`: capacity of a [HandlerCache] created w/
//!   [HandlerCache::new]. Defaults to 64.
//!
//! # Third-party crates
//!
//! 1. Hashing and encoding:
//!     * [fxhash][1]: for the fast, non-cryptographic 32-bit digest as well
//!       as the labels of anonymous types.
//!     * [hex][2]: for rendering and parsing tokens.
//!
//! 2. Caching:
//!     * [lru][3]: for the LRU store behind [HandlerCache].
//!
//! 3. Errors, logging and configuration:
//!     * [thiserror][4], [tracing][5] and [dotenvy][6].
//!
//! [1]: https://crates.io/crates/fxhash
//! [2]: https://crates.io/crates/hex
//! [3]: https://crates.io/crates/lru
//! [4]: https://crates.io/crates/thiserror
//! [5]: https://crates.io/crates/tracing
//! [6]: https://crates.io/crates/dotenvy
//!

mod cache;
mod callable;
mod config;
mod error;

pub use cache::*;
pub use callable::*;
pub use config::*;
pub use error::MyError;

/// Generate a message (in the style of `format!` macro), log it at level
/// _error_ and raise an [unresolvable identity error][crate::MyError#variant.UnresolvableIdentity].
#[macro_export]
macro_rules! unresolvable_error {
    ( $( $arg: tt )* ) => {
        {
            let msg = std::fmt::format(core::format_args!($($arg)*));
            tracing::error!("{}", msg);
            return Err($crate::MyError::UnresolvableIdentity(msg.into()));
        }
    }
}

/// Log `$err` at level _error_ before returning it.
#[macro_export]
macro_rules! emit_error {
    ( $err: expr ) => {{
        let err = $err;
        tracing::error!("{}", err);
        return Err(err);
    }};
}
