// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{
    callable::path::{check_name, check_type_path, normalize, split_last},
    unresolvable_error, Callable, MyError, Receiver, TypeIdentity,
};
use std::borrow::Cow;
use tracing::debug;

/// A classified callable reference. Each variant keeps only the fields that
/// make up its identity.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Invocable<'a> {
    /// A free function known by its (possibly qualified) path.
    Function {
        /// Path of the function; e.g. `trim` or `my_crate::on_body`.
        path: Cow<'a, str>,
    },
    /// A method bound to an instance.
    BoundMethod {
        /// Name of the receiver's type.
        receiver: Cow<'a, str>,
        /// Method name.
        method: Cow<'a, str>,
    },
    /// An associated function referenced through its type.
    StaticMethod {
        /// Path of the declaring type.
        owner: Cow<'a, str>,
        /// Function name.
        method: Cow<'a, str>,
    },
    /// A [ResponseHandler][crate::ResponseHandler] of a named type.
    NamedObject {
        /// Path of the handler's type.
        type_name: Cow<'a, str>,
    },
    /// A [ResponseHandler][crate::ResponseHandler] of an unnamed type.
    AnonymousObject {
        /// Label synthesized for the unnamed type.
        label: String,
    },
    /// A closure.
    Closure {
        /// Label synthesized for the closure's type.
        label: String,
    },
}

impl<'a> Invocable<'a> {
    /// Return the name of this variant as used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Invocable::Function { .. } => "function",
            Invocable::BoundMethod { .. } => "bound method",
            Invocable::StaticMethod { .. } => "static method",
            Invocable::NamedObject { .. } => "object",
            Invocable::AnonymousObject { .. } => "anonymous object",
            Invocable::Closure { .. } => "closure",
        }
    }

    fn static_method(owner: &'a str, method: &'a str) -> Result<Self, MyError> {
        Ok(Invocable::StaticMethod {
            owner: Cow::Borrowed(check_type_path(owner)?),
            method: check_name(method)?,
        })
    }

    fn bound_method(receiver: TypeIdentity, method: &'a str) -> Result<Self, MyError> {
        if receiver.is_erased() {
            unresolvable_error!(
                "Receiver of '{}' is a trait object ({})",
                method.trim(),
                receiver
            )
        }
        // the same receiver reached through `&`, `Box`, `Arc`... is one and
        // the same receiver.
        let receiver = if receiver.is_unnamed() {
            Cow::Owned(receiver.anonymous_label())
        } else {
            Cow::Borrowed(receiver.target_name())
        };
        Ok(Invocable::BoundMethod {
            receiver,
            method: check_name(method)?,
        })
    }

    fn code(id: TypeIdentity) -> Result<Self, MyError> {
        if id.is_erased() {
            unresolvable_error!("Function is a trait object ({})", id)
        }
        if id.is_fn_pointer() {
            unresolvable_error!("Function pointer ({}) has no name", id)
        }
        if id.is_unnamed() {
            Ok(Invocable::Closure {
                label: id.anonymous_label(),
            })
        } else {
            Ok(Invocable::Function {
                path: Cow::Borrowed(id.target_name()),
            })
        }
    }

    fn object(id: Option<TypeIdentity>) -> Result<Self, MyError> {
        match id {
            None => unresolvable_error!("Handler does not expose its type"),
            Some(x) if x.is_erased() => {
                unresolvable_error!("Handler hides its target behind a trait object ({})", x)
            }
            Some(x) if x.is_unnamed() => Ok(Invocable::AnonymousObject {
                label: x.anonymous_label(),
            }),
            Some(x) => Ok(Invocable::NamedObject {
                type_name: Cow::Borrowed(x.target_name()),
            }),
        }
    }
}

impl<'a> TryFrom<Callable<'a>> for Invocable<'a> {
    type Error = MyError;

    /// Classify a raw [Callable].
    ///
    /// The precedence when a shape could be read more than one way is: an
    /// explicit pair, then a scope-resolution string, then a bare name, and
    /// finally an object.
    fn try_from(value: Callable<'a>) -> Result<Self, Self::Error> {
        let result = match value {
            Callable::Pair(Receiver::Type(owner), method) => Self::static_method(owner, method),
            Callable::Pair(Receiver::Instance(id), method) => Self::bound_method(id, method),
            Callable::Name(name) => {
                let name = normalize(name);
                if name.is_empty() {
                    unresolvable_error!("Empty callable name")
                }
                match split_last(name) {
                    Some((owner, method)) => Self::static_method(owner, method),
                    None => Ok(Invocable::Function {
                        path: check_name(name)?,
                    }),
                }
            }
            Callable::Code(id) => Self::code(id),
            Callable::Object(id) => Self::object(id),
        }?;
        debug!("Classified {} as {}", value, result.kind());
        Ok(result)
    }
}
