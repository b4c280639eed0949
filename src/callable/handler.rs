// SPDX-License-Identifier: GPL-3.0-or-later

use crate::TypeIdentity;
use core::fmt;
use std::marker::PhantomData;

/// The single-call capability an HTTP client expects from an object it hands
/// a response to.
///
/// Request and response types are left to the implementation; this crate
/// only ever looks at the identity of a handler, never calls it.
pub trait ResponseHandler: 'static {
    /// The request that produced the response.
    type Request;
    /// The response being handled.
    type Response;
    /// Whatever the handler extracts from the response.
    type Output;

    /// Handle `response` received for `request`.
    fn handle(&self, request: &Self::Request, response: &Self::Response) -> Self::Output;

    /// Return the identity of the concrete type implementing this trait.
    ///
    /// Being dispatched dynamically, this reports the actual type even when
    /// called through a `dyn ResponseHandler`. Proxies forwarding to a target
    /// they cannot name should return `None`.
    fn type_identity(&self) -> Option<TypeIdentity> {
        Some(TypeIdentity::of::<Self>())
    }
}

/// A [ResponseHandler] backed by a closure. Its type is named after the
/// closure's which makes it an _anonymous_ handler as far as fingerprints go.
pub struct FnHandler<F, Rq, Rs> {
    f: F,
    _marker: PhantomData<fn(&Rq, &Rs)>,
}

/// Wrap a closure taking a request and a response into a [ResponseHandler].
pub fn handler_fn<F, Rq, Rs, O>(f: F) -> FnHandler<F, Rq, Rs>
where
    F: Fn(&Rq, &Rs) -> O + 'static,
{
    FnHandler {
        f,
        _marker: PhantomData,
    }
}

impl<F, Rq, Rs, O> ResponseHandler for FnHandler<F, Rq, Rs>
where
    F: Fn(&Rq, &Rs) -> O + 'static,
    Rq: 'static,
    Rs: 'static,
{
    type Request = Rq;
    type Response = Rs;
    type Output = O;

    fn handle(&self, request: &Rq, response: &Rs) -> O {
        (self.f)(request, response)
    }
}

impl<F, Rq, Rs> fmt::Debug for FnHandler<F, Rq, Rs> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHandler").finish_non_exhaustive()
    }
}
