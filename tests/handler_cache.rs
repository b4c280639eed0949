// SPDX-License-Identifier: GPL-3.0-or-later

mod utils;

use handler_hash::{handler_fn, Callable, HandlerCache, MyError, ResponseHandler};
use std::{
    num::NonZeroUsize,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    thread,
};
use test_context::{test_context, TestContext};
use tracing_test::traced_test;
use utils::{callable_function, Handler, Request, Response};

/// A small cache plus a counter of how many times a value was computed.
struct CacheContext {
    cache: HandlerCache<String>,
    computed: AtomicUsize,
}

impl CacheContext {
    fn compute(&self, value: &str) -> String {
        self.computed.fetch_add(1, Ordering::SeqCst);
        value.to_owned()
    }
}

impl TestContext for CacheContext {
    fn setup() -> CacheContext {
        CacheContext {
            cache: HandlerCache::with_capacity(NonZeroUsize::new(8).unwrap()),
            computed: AtomicUsize::new(0),
        }
    }

    fn teardown(self) {
        self.cache.clear();
        assert!(self.cache.is_empty());
    }
}

#[test_context(CacheContext)]
#[traced_test]
#[test]
fn test_each_handler_gets_its_own_entry(ctx: &mut CacheContext) {
    let anonymous = handler_fn(|_: &Request, rs: &Response| rs.status);

    let handlers = [
        Callable::handler(&Handler),
        Callable::handler(&anonymous),
        Callable::from_fn(&callable_function),
        Callable::from("trim"),
    ];
    for (i, h) in handlers.iter().enumerate() {
        let v = ctx.cache.get_or_insert_with(*h, || ctx.compute(&i.to_string()));
        assert_eq!(v, i.to_string());
    }
    assert_eq!(ctx.cache.len(), handlers.len());

    // 2nd time around everything is served from the cache...
    for (i, h) in handlers.iter().enumerate() {
        let v = ctx.cache.get_or_insert_with(*h, || ctx.compute("stale"));
        assert_eq!(v, i.to_string());
    }
    assert_eq!(ctx.computed.load(Ordering::SeqCst), handlers.len());
    assert_eq!(anonymous.handle(&Request::get("/"), &Response::ok("")), 200);
}

#[test_context(CacheContext)]
#[test]
fn test_static_method_spellings_hit_the_same_entry(ctx: &mut CacheContext) -> Result<(), MyError> {
    ctx.cache.insert(("Handler", "on_body"), "cached".to_owned())?;
    assert_eq!(ctx.cache.get("Handler::on_body")?, Some("cached".to_owned()));
    assert!(ctx.cache.contains(("Handler", "on_body"))?);
    Ok(())
}

#[test_context(CacheContext)]
#[traced_test]
#[test]
fn test_unresolvable_handler_is_computed_every_time(ctx: &mut CacheContext) {
    for _ in 0..3 {
        let v = ctx
            .cache
            .get_or_insert_with(Callable::Object(None), || ctx.compute("fresh"));
        assert_eq!(v, "fresh");
    }
    assert_eq!(ctx.computed.load(Ordering::SeqCst), 3);
    assert!(ctx.cache.is_empty());
    assert!(logs_contain("Not caching value"));
}

#[test]
fn test_shared_between_threads() {
    let cache = Arc::new(HandlerCache::with_capacity(NonZeroUsize::new(4).unwrap()));
    let computed = Arc::new(AtomicUsize::new(0));

    let workers: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let computed = Arc::clone(&computed);
            thread::spawn(move || {
                cache.get_or_insert_with(Callable::handler(&Handler), || {
                    computed.fetch_add(1, Ordering::SeqCst);
                    42_u32
                })
            })
        })
        .collect();
    for w in workers {
        assert_eq!(w.join().unwrap(), 42);
    }

    // concurrent misses may compute more than once but cache a single entry
    assert!(computed.load(Ordering::SeqCst) >= 1);
    assert_eq!(cache.len(), 1);
}
