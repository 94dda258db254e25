//! The promise object: state, value/error storage, and the shared handle.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use core_types::Rejection;

use crate::error::ContractError;
use crate::state::{PromiseState, Slot};

pub(crate) type Continuation = Box<dyn FnOnce()>;

pub(crate) struct Inner<T> {
    pub(crate) state: PromiseState,
    pub(crate) slot: Slot<T>,
    pub(crate) continuation: Option<Continuation>,
}

/// A deferred value: not yet available, eventually settled by being
/// resolved with a value of type `T` or rejected with a [`Rejection`].
///
/// `Promise<T>` is a cheap, reference-counted handle — cloning it shares
/// the same underlying state rather than copying it, which is how one
/// promise can be handed to a producer and a consumer at once and have
/// both observe the same settlement. It is not thread-safe: settlement
/// and handler invocation happen synchronously on whichever thread calls
/// [`resolve`](Promise::resolve), [`reject`](Promise::reject), or one of
/// the chaining methods, and the handle is `!Send` (see [`Rejection`]).
///
/// # Examples
///
/// ```
/// use promise::factory::make_promise;
///
/// let p = make_promise::<i32, _>(|handle| {
///     handle.resolve(42).unwrap();
/// });
/// assert!(p.is_resolved());
/// assert_eq!(p.value(), Some(42));
/// ```
pub struct Promise<T> {
    pub(crate) inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Promise<T> {
    fn clone(&self) -> Self {
        Promise {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Promise<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        let mut s = f.debug_struct("Promise");
        s.field("state", &inner.state);
        match &inner.slot {
            Slot::Empty => s.field("slot", &"Empty"),
            Slot::Value(v) => s.field("slot", v),
            Slot::Error(e) => s.field("slot", e),
        };
        s.finish()
    }
}

impl<T: Clone + 'static> Promise<T> {
    pub(crate) fn pending() -> Self {
        Promise {
            inner: Rc::new(RefCell::new(Inner {
                state: PromiseState::Pending,
                slot: Slot::Empty,
                continuation: None,
            })),
        }
    }

    pub(crate) fn settled_resolved(value: T) -> Self {
        Promise {
            inner: Rc::new(RefCell::new(Inner {
                state: PromiseState::Resolved,
                slot: Slot::Value(value),
                continuation: None,
            })),
        }
    }

    pub(crate) fn settled_rejected(err: Rejection) -> Self {
        Promise {
            inner: Rc::new(RefCell::new(Inner {
                state: PromiseState::Rejected,
                slot: Slot::Error(err),
                continuation: None,
            })),
        }
    }

    /// The promise's current state.
    pub fn state(&self) -> PromiseState {
        self.inner.borrow().state
    }

    /// Reports whether the promise is still pending.
    pub fn is_pending(&self) -> bool {
        self.state() == PromiseState::Pending
    }

    /// Reports whether the promise resolved.
    pub fn is_resolved(&self) -> bool {
        self.state() == PromiseState::Resolved
    }

    /// Reports whether the promise rejected.
    pub fn is_rejected(&self) -> bool {
        self.state() == PromiseState::Rejected
    }

    /// Reports whether the promise has settled (resolved or rejected).
    pub fn is_settled(&self) -> bool {
        !self.is_pending()
    }

    /// The resolved value, if any. Cloned out of the slot, which keeps
    /// it readable for as long as the promise handle is alive.
    pub fn value(&self) -> Option<T> {
        match &self.inner.borrow().slot {
            Slot::Value(v) => Some(v.clone()),
            _ => None,
        }
    }

    /// The rejection carrier, if any.
    pub fn error(&self) -> Option<Rejection> {
        match &self.inner.borrow().slot {
            Slot::Error(e) => Some(e.clone()),
            _ => None,
        }
    }

    /// Resolves the promise with `value`.
    ///
    /// Fails with [`ContractError::AlreadySettled`] if the promise is not
    /// pending. If a continuation is installed it fires synchronously,
    /// after the state transition, before this call returns.
    pub fn resolve(&self, value: T) -> Result<(), ContractError> {
        let continuation = {
            let mut inner = self.inner.borrow_mut();
            if inner.state != PromiseState::Pending {
                return Err(ContractError::AlreadySettled);
            }
            inner.state = PromiseState::Resolved;
            inner.slot = Slot::Value(value);
            inner.continuation.take()
        };
        if let Some(fire) = continuation {
            fire();
        }
        Ok(())
    }

    /// Rejects the promise with `err`, converting it to a [`Rejection`]
    /// first if it isn't one already.
    ///
    /// Fails with [`ContractError::AlreadySettled`] if the promise is not
    /// pending. If no continuation is installed, the state still
    /// transitions to `Rejected`, but the call itself fails with
    /// [`ContractError::UnhandledRejection`] — a loud failure at the
    /// point of misuse, per the promise's error-handling contract.
    pub fn reject<E>(&self, err: E) -> Result<(), ContractError>
    where
        E: Into<Rejection>,
    {
        let err = err.into();
        let continuation = {
            let mut inner = self.inner.borrow_mut();
            if inner.state != PromiseState::Pending {
                return Err(ContractError::AlreadySettled);
            }
            inner.state = PromiseState::Rejected;
            let continuation = inner.continuation.take();
            inner.slot = Slot::Error(err.clone());
            continuation
        };
        match continuation {
            Some(fire) => {
                fire();
                Ok(())
            }
            None => Err(ContractError::UnhandledRejection(err)),
        }
    }

    /// Installs `fire` as this promise's continuation, overwriting and
    /// discarding any previously installed one — a second chaining call
    /// wins. Invokes it immediately if already settled.
    pub(crate) fn set_continuation(&self, fire: Continuation) {
        let mut inner = self.inner.borrow_mut();
        if inner.state == PromiseState::Pending {
            inner.continuation = Some(fire);
        } else {
            drop(inner);
            fire();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_promise_is_pending_with_no_value() {
        let p: Promise<i32> = Promise::pending();
        assert!(p.is_pending());
        assert_eq!(p.value(), None);
        assert!(p.error().is_none());
    }

    #[test]
    fn resolve_transitions_to_resolved() {
        let p: Promise<i32> = Promise::pending();
        p.resolve(42).unwrap();
        assert!(p.is_resolved());
        assert_eq!(p.value(), Some(42));
    }

    #[test]
    fn resolve_twice_fails_with_already_settled() {
        let p: Promise<i32> = Promise::pending();
        p.resolve(1).unwrap();
        let err = p.resolve(2).unwrap_err();
        assert!(matches!(err, ContractError::AlreadySettled));
        assert_eq!(p.value(), Some(1));
    }

    #[test]
    fn reject_without_continuation_is_unhandled_but_still_settles() {
        let p: Promise<i32> = Promise::pending();
        let err = p.reject("bad").unwrap_err();
        assert!(matches!(err, ContractError::UnhandledRejection(_)));
        assert!(p.is_rejected());
        assert_eq!(p.error().unwrap().to_string(), "bad");
    }

    #[test]
    fn reject_after_resolve_fails_with_already_settled() {
        let p: Promise<i32> = Promise::pending();
        p.resolve(1).unwrap();
        let err = p.reject("bad").unwrap_err();
        assert!(matches!(err, ContractError::AlreadySettled));
    }

    #[test]
    fn clone_shares_the_same_handle() {
        let p: Promise<i32> = Promise::pending();
        let q = p.clone();
        p.resolve(7).unwrap();
        assert_eq!(q.value(), Some(7));
    }
}
