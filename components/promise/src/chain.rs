//! Chaining primitives (`then` / `rescue` / `finally`) and the "pipe"
//! that forwards a handler's result into its downstream promise.

use std::cell::RefCell;
use std::rc::Rc;

use core_types::Rejection;

use crate::outcome::{Outcome, Settlement};
use crate::promise::Promise;
use crate::state::Slot;

/// Forwards a handler's `Result<Outcome<U>, Rejection>` into `downstream`.
///
/// A bare value resolves downstream directly; an adopted promise installs
/// a forwarding continuation on it (shallow — one level of adoption); an
/// `Err` rejects downstream with that carrier. `downstream` is always
/// freshly created and pending at this point, so the only contract
/// violation that can surface here is `UnhandledRejection`; this treats
/// that as a loud failure at the point of misuse — there is no caller
/// left on the stack to hand a `Result` back to.
fn settle_from_outcome<U>(downstream: &Promise<U>, outcome: Result<Outcome<U>, Rejection>)
where
    U: Clone + 'static,
{
    match outcome {
        Ok(Outcome::Value(value)) => {
            if let Err(e) = downstream.resolve(value) {
                panic!("{e}");
            }
        }
        Ok(Outcome::Adopt(adopted)) => {
            let target = downstream.clone();
            attach(
                &adopted,
                target,
                |v| Ok(Outcome::Value(v)),
                |e| Err(e),
            );
        }
        Err(e) => {
            if let Err(e) = downstream.reject(e) {
                panic!("{e}");
            }
        }
    }
}

/// Installs a continuation on `upstream` that, on settlement, invokes
/// the matching handler and pipes its result into `downstream`.
pub(crate) fn attach<T, U, F, G>(upstream: &Promise<T>, downstream: Promise<U>, on_resolve: F, on_reject: G)
where
    T: Clone + 'static,
    U: Clone + 'static,
    F: FnOnce(T) -> Result<Outcome<U>, Rejection> + 'static,
    G: FnOnce(Rejection) -> Result<Outcome<U>, Rejection> + 'static,
{
    let observed = upstream.clone();
    let fire = Box::new(move || {
        let settlement = {
            let inner = observed.inner.borrow();
            match &inner.slot {
                Slot::Value(v) => Settlement::Resolved(v.clone()),
                Slot::Error(e) => Settlement::Rejected(e.clone()),
                Slot::Empty => unreachable!("continuation fired on a promise that is still pending"),
            }
        };
        let outcome = match settlement {
            Settlement::Resolved(v) => on_resolve(v),
            Settlement::Rejected(e) => on_reject(e),
        };
        settle_from_outcome(&downstream, outcome);
    });
    upstream.set_continuation(fire);
}

impl<T: Clone + 'static> Promise<T> {
    /// Attaches `on_resolve`/`on_reject` and returns a new downstream
    /// promise whose settlement is derived from whichever handler fires.
    ///
    /// `U` is inferred from the handlers' return types. When both
    /// branches produce the same type, that's all there is to it; when
    /// they don't, pick a common `U` yourself and have both handlers
    /// target it explicitly — `Option<X>` when one branch has nothing to
    /// contribute, [`core_types::Either`] when the two branches are
    /// genuinely distinct types not an approximation.
    pub fn then<U, F, G>(&self, on_resolve: F, on_reject: G) -> Promise<U>
    where
        U: Clone + 'static,
        F: FnOnce(T) -> Result<Outcome<U>, Rejection> + 'static,
        G: FnOnce(Rejection) -> Result<Outcome<U>, Rejection> + 'static,
    {
        let downstream = Promise::pending();
        attach(self, downstream.clone(), on_resolve, on_reject);
        downstream
    }

    /// `then` with only a resolve handler: a rejection passes straight
    /// through to the downstream promise unchanged.
    pub fn then_ok<U, F>(&self, on_resolve: F) -> Promise<U>
    where
        U: Clone + 'static,
        F: FnOnce(T) -> Result<Outcome<U>, Rejection> + 'static,
    {
        self.then(on_resolve, |e| Err(e))
    }

    /// `then` with only a reject handler: a resolved value passes
    /// straight through to the downstream promise unchanged.
    pub fn rescue<F>(&self, on_reject: F) -> Promise<T>
    where
        F: FnOnce(Rejection) -> Result<Outcome<T>, Rejection> + 'static,
    {
        self.then(|v| Ok(Outcome::Value(v)), on_reject)
    }

    /// Runs `on_settle` on whichever of resolve/reject fires, with the
    /// settled value or rejection carrier passed as a [`Settlement`].
    ///
    /// Unlike the host platform's `Promise.finally`, which always passes
    /// the original settlement through regardless of what the handler
    /// returns, this crate's `finally` pipes the handler's own return
    /// value downstream like any other chaining call.
    pub fn finally<U, F>(&self, on_settle: F) -> Promise<U>
    where
        U: Clone + 'static,
        F: FnOnce(Settlement<T>) -> Result<Outcome<U>, Rejection> + 'static,
    {
        let shared = Rc::new(RefCell::new(Some(on_settle)));
        let on_resolve = {
            let shared = Rc::clone(&shared);
            move |v: T| {
                let handler = shared.borrow_mut().take().expect("finally handler fires exactly once");
                handler(Settlement::Resolved(v))
            }
        };
        let on_reject = move |e: Rejection| {
            let handler = shared.borrow_mut().take().expect("finally handler fires exactly once");
            handler(Settlement::Rejected(e))
        };
        self.then(on_resolve, on_reject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Either;

    #[test]
    fn then_on_resolved_promise_fires_immediately() {
        let p: Promise<i32> = Promise::settled_resolved(41);
        let q = p.then_ok(|v| Ok(Outcome::Value(v + 1)));
        assert_eq!(q.value(), Some(42));
    }

    #[test]
    fn then_on_pending_promise_fires_on_resolve() {
        let p: Promise<i32> = Promise::pending();
        let q = p.then_ok(|v| Ok(Outcome::Value(v * 2)));
        assert!(q.is_pending());
        p.resolve(5).unwrap();
        assert_eq!(q.value(), Some(10));
    }

    #[test]
    fn rescue_recovers_a_rejection() {
        let p: Promise<i32> = Promise::settled_rejected("bad".into());
        let q = p.rescue(|e| Ok(Outcome::Value(if e.to_string() == "bad" { 99 } else { 0 })));
        assert_eq!(q.value(), Some(99));
    }

    #[test]
    fn handler_exception_rejects_downstream() {
        let p: Promise<i32> = Promise::settled_resolved(1);
        let q: Promise<i32> = p.then_ok(|_| Err("oops".into()));
        assert!(q.is_rejected());
        assert_eq!(q.error().unwrap().to_string(), "oops");
    }

    #[test]
    fn adopting_a_resolved_promise_forwards_its_value() {
        let p: Promise<i32> = Promise::settled_resolved(1);
        let q = p.then_ok(|v| Ok(Outcome::Adopt(Promise::settled_resolved(v + 10))));
        assert_eq!(q.value(), Some(11));
    }

    #[test]
    fn adopting_a_pending_promise_defers_until_it_settles() {
        let inner: Promise<i32> = Promise::pending();
        let p: Promise<i32> = Promise::settled_resolved(1);
        let q = p.then_ok({
            let inner = inner.clone();
            move |_| Ok(Outcome::Adopt(inner))
        });
        assert!(q.is_pending());
        inner.resolve(99).unwrap();
        assert_eq!(q.value(), Some(99));
    }

    #[test]
    fn adoption_is_shallow() {
        let nested: Promise<i32> = Promise::settled_resolved(5);
        let p: Promise<Promise<i32>> = Promise::settled_resolved(nested.clone());
        // The resolve handler itself returns a plain value that happens to
        // be a promise; it is not adopted, only a handler returning
        // Outcome::Adopt triggers adoption.
        let q = p.then_ok(|v| Ok(Outcome::Value(v)));
        assert!(q.value().unwrap().is_resolved());
    }

    #[test]
    fn distinct_branch_types_combine_via_either() {
        let resolved: Promise<i32> = Promise::settled_resolved(1);
        let r: Promise<Either<i32, String>> =
            resolved.then(|v| Ok(Outcome::Value(Either::Left(v))), |e| Ok(Outcome::Value(Either::Right(e.to_string()))));
        assert_eq!(r.value(), Some(Either::Left(1)));

        let rejected: Promise<i32> = Promise::settled_rejected("bad".into());
        let s: Promise<Either<i32, String>> =
            rejected.then(|v| Ok(Outcome::Value(Either::Left(v))), |e| Ok(Outcome::Value(Either::Right(e.to_string()))));
        assert_eq!(s.value(), Some(Either::Right("bad".to_string())));
    }

    #[test]
    fn one_void_branch_combines_via_option() {
        let resolved: Promise<i32> = Promise::settled_resolved(7);
        let r: Promise<Option<i32>> = resolved.then(
            |v| Ok(Outcome::Value(Some(v))),
            |_| Ok(Outcome::Value(None)),
        );
        assert_eq!(r.value(), Some(Some(7)));
    }

    #[test]
    fn reattaching_overwrites_the_previous_continuation() {
        let p: Promise<i32> = Promise::pending();
        let first = p.then_ok(|v| Ok(Outcome::Value(v + 1)));
        let second = p.then_ok(|v| Ok(Outcome::Value(v + 2)));
        p.resolve(10).unwrap();
        assert!(first.is_pending());
        assert_eq!(second.value(), Some(12));
    }

    #[test]
    fn finally_runs_on_both_branches() {
        let resolved: Promise<i32> = Promise::settled_resolved(1);
        let r = resolved.finally(|settlement| match settlement {
            Settlement::Resolved(v) => Ok(Outcome::Value(v)),
            Settlement::Rejected(_) => Ok(Outcome::Value(-1)),
        });
        assert_eq!(r.value(), Some(1));

        let rejected: Promise<i32> = Promise::settled_rejected("bad".into());
        let s = rejected.finally(|settlement| match settlement {
            Settlement::Resolved(v) => Ok(Outcome::Value(v)),
            Settlement::Rejected(_) => Ok(Outcome::Value(-1)),
        });
        assert_eq!(s.value(), Some(-1));
    }
}
