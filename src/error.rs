// SPDX-License-Identifier: GPL-3.0-or-later

use std::borrow::Cow;
use thiserror::Error;

/// Enumeration of different error types raised by this crate.
#[derive(Debug, Error)]
pub enum MyError {
    /// No stable descriptor could be derived for a callable. Either its shape
    /// was not recognized or introspecting its type did not yield a name.
    #[error("Unresolvable callable identity: {0}")]
    UnresolvableIdentity(#[doc(hidden)] Cow<'static, str>),

    /// Hexadecimal decoding error when parsing a [Token][crate::Token].
    #[error("Token decode error: {0}")]
    Token(
        #[doc(hidden)]
        #[from]
        hex::FromHexError,
    ),

    /// Unexpected runtime error.
    #[error("{0}")]
    Runtime(#[doc(hidden)] Cow<'static, str>),
}
