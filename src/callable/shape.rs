// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{ResponseHandler, TypeIdentity};
use core::fmt;
use std::any::type_name;

/// What a method is called on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Receiver<'a> {
    /// A type given by name; i.e. an associated (static) function.
    Type(&'a str),
    /// An instance of a type; i.e. a bound method.
    Instance(TypeIdentity),
}

/// The raw shape of a callable reference as handed in by a caller, before
/// any classification took place.
///
/// Strings and `(type, method)` pairs convert into this type w/ `From`,
/// typed values go through the constructor functions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Callable<'a> {
    /// A `(receiver, method)` pair.
    Pair(Receiver<'a>, &'a str),
    /// A function name, or a `Type::method` scope-resolution string.
    Name(&'a str),
    /// A fn item, a closure or a fn pointer, known by its type.
    Code(TypeIdentity),
    /// An object implementing [ResponseHandler]. `None` when the handler
    /// refused to tell its type.
    Object(Option<TypeIdentity>),
}

impl<'a> Callable<'a> {
    /// A function or closure called w/ a request and a response.
    pub fn from_fn<F, Rq, Rs, O>(_: &F) -> Self
    where
        F: Fn(&Rq, &Rs) -> O + 'static,
    {
        Callable::Code(TypeIdentity::of::<F>())
    }

    /// The method `name` bound to `receiver`. Only the type of `receiver`
    /// matters, not the instance.
    ///
    /// References, raw pointers, `Box`, `Rc` and `Arc` around the receiver
    /// are looked through; `&h`, `&&h` and `&Arc::new(h)` denote the same
    /// receiver. A receiver behind a trait object can't be identified. The
    /// type `T`, wrappers included, must be `'static`.
    pub fn method<T: ?Sized + 'static>(receiver: &T, name: &'a str) -> Self {
        Callable::Pair(Receiver::Instance(TypeIdentity::of_val(receiver)), name)
    }

    /// The associated function `name` of type `T`.
    pub fn associated<T: ?Sized + 'static>(name: &'a str) -> Self {
        Callable::Pair(Receiver::Type(type_name::<T>()), name)
    }

    /// An object implementing the [ResponseHandler] capability.
    pub fn handler<H: ResponseHandler + ?Sized>(handler: &H) -> Self {
        Callable::Object(handler.type_identity())
    }
}

impl<'a> From<&'a str> for Callable<'a> {
    fn from(value: &'a str) -> Self {
        Callable::Name(value)
    }
}

impl<'a> From<&'a String> for Callable<'a> {
    fn from(value: &'a String) -> Self {
        Callable::Name(value.as_str())
    }
}

impl<'a> From<(&'a str, &'a str)> for Callable<'a> {
    fn from((owner, name): (&'a str, &'a str)) -> Self {
        Callable::Pair(Receiver::Type(owner), name)
    }
}

impl fmt::Display for Callable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callable::Pair(Receiver::Type(x), m) => write!(f, "({}, {})", x, m),
            Callable::Pair(Receiver::Instance(x), m) => write!(f, "(<{}>, {})", x, m),
            Callable::Name(x) => write!(f, "\"{}\"", x),
            Callable::Code(x) => write!(f, "fn <{}>", x),
            Callable::Object(Some(x)) => write!(f, "object <{}>", x),
            Callable::Object(None) => write!(f, "object <?>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler_fn;

    struct Handler;

    impl Handler {
        fn on_body(&self) {}
    }

    fn on_body(_: &u8, _: &u16) -> bool {
        true
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Callable::from("trim"), Callable::Name("trim"));
        let s = String::from("Handler::on_body");
        assert_eq!(Callable::from(&s), Callable::Name("Handler::on_body"));
        assert_eq!(
            Callable::from(("Handler", "on_body")),
            Callable::Pair(Receiver::Type("Handler"), "on_body")
        );
    }

    #[test]
    fn test_typed_constructors() {
        let h = Handler;
        h.on_body();
        assert_eq!(
            Callable::method(&h, "on_body"),
            Callable::Pair(Receiver::Instance(TypeIdentity::of::<Handler>()), "on_body")
        );
        assert_eq!(
            Callable::associated::<Handler>("on_body"),
            Callable::Pair(Receiver::Type(type_name::<Handler>()), "on_body")
        );
        assert_eq!(
            Callable::from_fn(&on_body),
            Callable::Code(TypeIdentity::of_val(&on_body))
        );

        let c = handler_fn(|x: &u8, y: &u16| u16::from(*x) + y);
        match Callable::handler(&c) {
            Callable::Object(Some(x)) => assert!(x.is_unnamed()),
            x => panic!("Unexpected {:?}", x),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Callable::from("trim").to_string(), "\"trim\"");
        assert_eq!(
            Callable::from(("Handler", "on_body")).to_string(),
            "(Handler, on_body)"
        );
        assert_eq!(Callable::Object(None).to_string(), "object <?>");
    }
}
