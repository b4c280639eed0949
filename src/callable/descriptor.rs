// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{callable::path::SEPARATOR, Invocable, MyError, Token};
use core::fmt;
use std::ops::Deref;

/// A human readable string encoding everything that makes up the identity
/// of a callable. Reducing it w/ [Descriptor::digest] yields its [Token].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Descriptor(String);

impl Descriptor {
    /// Return the 32-bit [Token] of this descriptor.
    pub fn digest(&self) -> Token {
        Token::from(fxhash::hash32(self.0.as_str()))
    }

    /// Return the descriptor as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Descriptor {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Types that can tell what they are in a way that is stable for the lifetime
/// of the process.
pub trait Describe {
    /// Build and return a [Descriptor] for this value.
    ///
    /// Raise [MyError::UnresolvableIdentity] if that's not possible.
    fn describe(&self) -> Result<Descriptor, MyError>;
}

impl Describe for Invocable<'_> {
    /// Functions and methods share one namespace of paths: the string
    /// `Type::method`, the pair `(Type, method)` and a fn item whose path is
    /// `Type::method` all end up w/ the same descriptor. The receiver's type
    /// is always part of a method's descriptor.
    fn describe(&self) -> Result<Descriptor, MyError> {
        let s = match self {
            Invocable::Function { path } => format!("fn {}", path),
            Invocable::BoundMethod { receiver, method } => {
                format!("fn {}{}{}", receiver, SEPARATOR, method)
            }
            Invocable::StaticMethod { owner, method } => {
                format!("fn {}{}{}", owner, SEPARATOR, method)
            }
            Invocable::NamedObject { type_name } => format!("object {}", type_name),
            Invocable::AnonymousObject { label } => format!("object {}", label),
            Invocable::Closure { label } => format!("closure {}", label),
        };
        Ok(Descriptor(s))
    }
}
