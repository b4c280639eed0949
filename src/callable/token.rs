// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{emit_error, MyError};
use core::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Number of characters in the textual form of a [Token].
pub const TOKEN_LEN: usize = 8;

/// Short fingerprint of a callable. Its textual form is always exactly
/// [TOKEN_LEN] lowercase hexadecimal digits, zero-padded.
///
/// Tokens identify callables for in-process bookkeeping only; e.g. as cache
/// keys. They are not meant to resist deliberate collisions.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Token(u32);

impl Token {
    /// Return the 32-bit digest value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Token {
    fn from(value: u32) -> Self {
        Token(value)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0.to_be_bytes()))
    }
}

impl FromStr for Token {
    type Err = MyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != TOKEN_LEN {
            emit_error!(MyError::Runtime(
                format!("Token '{}' is not {} characters long", s, TOKEN_LEN).into()
            ))
        }
        if s.bytes().any(|b| b.is_ascii_uppercase()) {
            emit_error!(MyError::Runtime(
                format!("Token '{}' is not in lowercase", s).into()
            ))
        }
        let mut bytes = [0_u8; TOKEN_LEN / 2];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Token(u32::from_be_bytes(bytes)))
    }
}

impl Serialize for Token {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Token::from_str(&s).map_err(serde::de::Error::custom)
    }
}
