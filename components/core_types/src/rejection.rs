//! The opaque, erased error carrier stored by a rejected promise.

use std::fmt;
use std::rc::Rc;

/// An opaque error carrier produced by a rejected promise.
///
/// `Rejection` wraps any value supplied to `reject` so it can be handed
/// around type-erased and later recovered by the concrete type a reject
/// handler expects, the same way re-raising and catching an exception
/// recovers the concrete error in the source this was translated from. If
/// a value is already a `Rejection` it is passed through unchanged rather
/// than wrapped a second time (`From<Rejection> for Rejection` is the
/// identity conversion the standard library already provides).
///
/// Held behind an `Rc` rather than cloned by value: a `Rejection` is not
/// `Clone`-able as a concrete error (most error types aren't), so sharing
/// the one carrier an upstream promise produced is the only way to read
/// it from both a `.error()` query and a reject handler without consuming
/// it. This also makes `Rejection`, and therefore every `Promise<T>` that
/// can hold one, `!Send` — exactly the single-threaded contract this
/// crate's promises are specified to have.
#[derive(Clone)]
pub struct Rejection(Rc<anyhow::Error>);

impl Rejection {
    /// Wraps a concrete error as a `Rejection`.
    pub fn new<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Rejection(Rc::new(anyhow::Error::new(err)))
    }

    /// Wraps an ad hoc message (no `std::error::Error` impl required) as a `Rejection`.
    pub fn msg<M>(message: M) -> Self
    where
        M: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Rejection(Rc::new(anyhow::Error::msg(message)))
    }

    /// Attempts to recover the concrete error type `E` by reference.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.0.downcast_ref::<E>()
    }

    /// Reports whether the carried error is of concrete type `E`.
    pub fn is<E>(&self) -> bool
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.0.is::<E>()
    }
}

impl<E> From<E> for Rejection
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Rejection::new(err)
    }
}

impl From<String> for Rejection {
    fn from(message: String) -> Self {
        Rejection(Rc::new(anyhow::Error::msg(message)))
    }
}

impl From<&str> for Rejection {
    fn from(message: &str) -> Self {
        Rejection(Rc::new(anyhow::Error::msg(message.to_string())))
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}
