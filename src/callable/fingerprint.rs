// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{Callable, Describe, Invocable, MyError, Token};
use tracing::debug;

/// Compute and return the [Token] identifying the given callable.
///
/// The result only depends on the identity of the callable: calling this
/// twice w/ the same callable yields the same token, and the two spellings
/// of a static method, `("Type", "method")` and `"Type::method"`, yield the
/// same token too.
///
/// Tokens of closures and of anonymous handlers are derived from labels the
/// compiler's type information gives us; they are stable while the process
/// runs but should never be persisted.
///
/// Raise [MyError::UnresolvableIdentity] if the callable cannot be
/// classified or described.
pub fn fingerprint<'a, C: Into<Callable<'a>>>(callable: C) -> Result<Token, MyError> {
    let invocable = Invocable::try_from(callable.into())?;
    let descriptor = invocable.describe()?;
    let token = descriptor.digest();
    debug!("{} -> {}", descriptor, token);
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{handler_fn, ResponseHandler};
    use std::any::type_name;
    use tracing_test::traced_test;

    struct Request(String);
    struct Response(String);

    struct Handler;

    impl Handler {
        fn callable_method(&self, _: &Request, response: &Response) -> String {
            response.0.clone()
        }

        fn callable_static_method(_: &Request, response: &Response) -> String {
            response.0.clone()
        }
    }

    impl ResponseHandler for Handler {
        type Request = Request;
        type Response = Response;
        type Output = String;

        fn handle(&self, request: &Request, response: &Response) -> String {
            format!("{}: {}", request.0, response.0)
        }
    }

    fn callable_function(_: &Request, response: &Response) -> String {
        response.0.clone()
    }

    fn is_well_formed(t: &Token) -> bool {
        let s = t.to_string();
        s.len() == 8 && s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
    }

    #[traced_test]
    #[test]
    fn test_fingerprint() -> Result<(), MyError> {
        let t1 = fingerprint("trim")?;
        assert!(is_well_formed(&t1));
        assert_eq!(t1, fingerprint("trim")?);
        assert!(logs_contain("fn trim ->"));

        let owner = type_name::<Handler>();
        let t2 = fingerprint((owner, "callable_static_method"))?;
        let joined = format!("{}::callable_static_method", owner);
        assert_eq!(t2, fingerprint(&joined)?);
        assert_eq!(
            t2,
            fingerprint(Callable::associated::<Handler>("callable_static_method"))?
        );
        assert_eq!(
            t2,
            fingerprint(Callable::from_fn(&Handler::callable_static_method))?
        );

        Ok(())
    }

    #[test]
    fn test_methods_objects_and_functions_are_told_apart() -> Result<(), MyError> {
        let h = Handler;
        let _ = h.callable_method(&Request("/".into()), &Response("ok".into()));

        let method = fingerprint(Callable::method(&h, "callable_method"))?;
        let object = fingerprint(Callable::handler(&h))?;
        let function = fingerprint(Callable::from_fn(&callable_function))?;
        assert_ne!(method, object);
        assert_ne!(method, function);
        assert_ne!(object, function);

        // only the receiver's type matters, not the instance
        assert_eq!(method, fingerprint(Callable::method(&Handler, "callable_method"))?);

        Ok(())
    }

    #[test]
    fn test_anonymous_handlers() -> Result<(), MyError> {
        let a = handler_fn(|_: &Request, rs: &Response| rs.0.len());
        let b = handler_fn(|_: &Request, rs: &Response| rs.0.len());
        let ta = fingerprint(Callable::handler(&a))?;
        let tb = fingerprint(Callable::handler(&b))?;
        assert!(is_well_formed(&ta));
        assert_eq!(ta, fingerprint(Callable::handler(&a))?);
        assert_eq!(tb, fingerprint(Callable::handler(&b))?);
        Ok(())
    }

    #[test]
    fn test_unresolvable() {
        let p: fn(&Request, &Response) -> String = callable_function;
        assert!(matches!(
            fingerprint(Callable::from_fn(&p)),
            Err(MyError::UnresolvableIdentity(_))
        ));
        assert!(fingerprint("").is_err());
        assert!(fingerprint(("Handler", "not a name")).is_err());
    }
}
