//! The factory surface: thin sugar over the core for producing promises.
//!
//! These are "external collaborators" rather than core state-machine
//! behaviour (see the crate-level docs), but a promise core is useless
//! without a way to produce one, so this module ships them alongside it.

use core_types::{Rejection, Unit};

use crate::promise::Promise;

/// Allocates a pending promise and invokes `launcher` with its handle
/// synchronously, so `launcher` may settle it immediately or stash the
/// handle away for later.
///
/// # Examples
///
/// ```
/// use promise::factory::make_promise;
///
/// let stashed = std::rc::Rc::new(std::cell::RefCell::new(None));
/// let p = make_promise::<i32, _>({
///     let stashed = stashed.clone();
///     move |handle| *stashed.borrow_mut() = Some(handle)
/// });
/// assert!(p.is_pending());
/// stashed.borrow().as_ref().unwrap().resolve(5).unwrap();
/// assert_eq!(p.value(), Some(5));
/// ```
pub fn make_promise<T, F>(launcher: F) -> Promise<T>
where
    T: Clone + 'static,
    F: FnOnce(Promise<T>),
{
    let handle = Promise::pending();
    launcher(handle.clone());
    handle
}

/// Returns a promise already `Resolved` with `value`.
pub fn make_resolved<T: Clone + 'static>(value: T) -> Promise<T> {
    Promise::settled_resolved(value)
}

/// Returns a `Promise<Unit>` already `Resolved`, for promises that carry no value.
pub fn make_resolved_unit() -> Promise<Unit> {
    make_resolved(Unit)
}

/// Returns a promise already `Rejected` with `err`.
///
/// Unlike [`Promise::reject`](crate::Promise::reject), this does not
/// trigger the "no handler installed" check — it is the sanctioned way
/// to produce a rejected promise with no continuation attached yet.
pub fn make_rejected<T, E>(err: E) -> Promise<T>
where
    T: Clone + 'static,
    E: Into<Rejection>,
{
    Promise::settled_rejected(err.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Outcome;

    #[test]
    fn make_resolved_settles_immediately() {
        let p = make_resolved(42);
        assert!(p.is_resolved());
        assert_eq!(p.value(), Some(42));
    }

    #[test]
    fn make_rejected_does_not_require_a_handler() {
        let p: Promise<i32> = make_rejected("bad");
        assert!(p.is_rejected());
    }

    #[test]
    fn make_rejected_then_rescue_fires_the_handler() {
        let p: Promise<i32> = make_rejected("bad");
        let q = p.rescue(|e| Ok(Outcome::Value(if e.to_string() == "bad" { 1 } else { 0 })));
        assert_eq!(q.value(), Some(1));
    }

    #[test]
    fn make_promise_can_settle_immediately() {
        let p = make_promise::<i32, _>(|handle| {
            handle.resolve(10).unwrap();
        });
        assert_eq!(p.value(), Some(10));
    }
}
