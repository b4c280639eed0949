// SPDX-License-Identifier: GPL-3.0-or-later

#![allow(dead_code)]

use handler_hash::{fingerprint, Callable, ResponseHandler, Token};

/// Stand-in for the request an HTTP client sends.
pub(crate) struct Request {
    pub uri: String,
}

/// Stand-in for the response an HTTP client receives.
pub(crate) struct Response {
    pub status: u16,
    pub body: String,
}

impl Request {
    pub(crate) fn get(uri: &str) -> Self {
        Request { uri: uri.to_owned() }
    }
}

impl Response {
    pub(crate) fn ok(body: &str) -> Self {
        Response {
            status: 200,
            body: body.to_owned(),
        }
    }
}

/// A named handler returning the body of a response.
pub(crate) struct Handler;

impl ResponseHandler for Handler {
    type Request = Request;
    type Response = Response;
    type Output = String;

    fn handle(&self, _: &Request, response: &Response) -> String {
        response.body.clone()
    }
}

/// A free function returning the body of a response.
pub(crate) fn callable_function(_: &Request, response: &Response) -> String {
    response.body.clone()
}

/// Return TRUE if `token` renders as exactly 8 lowercase hex digits.
pub(crate) fn is_well_formed(token: &Token) -> bool {
    let s = token.to_string();
    s.len() == 8 && s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}

/// Fingerprint `callable` twice, assert both tokens are equal and well
/// formed, then return it.
pub(crate) fn calc_hash<'a, C: Into<Callable<'a>>>(callable: C) -> Token {
    let callable = callable.into();
    let t1 = fingerprint(callable).expect("Failed computing 1st fingerprint");
    let t2 = fingerprint(callable).expect("Failed computing 2nd fingerprint");
    assert_eq!(t1, t2, "Fingerprint of {} is not deterministic", callable);
    assert!(is_well_formed(&t1), "Malformed token '{}'", t1);
    t1
}
