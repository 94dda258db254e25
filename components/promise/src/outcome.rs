//! What a handler hands back to the chaining machinery.

use crate::Promise;

/// What a resolve/reject/finally handler settles its downstream promise
/// with: either a plain value, or another promise to adopt.
///
/// Returning `Err(rejection)` from a handler (rather than `Ok(outcome)`)
/// is this crate's rendition of "the handler threw" — it rejects the
/// downstream promise with that carrier, exactly as an uncaught
/// exception inside a `.then` callback would.
pub enum Outcome<U> {
    /// Settle downstream with this value directly.
    Value(U),
    /// Adopt `p`'s eventual settlement as downstream's own, one level
    /// deep: if `p` itself resolves with a promise, that inner promise
    /// is not unwrapped further.
    Adopt(Promise<U>),
}

/// The settlement a `finally` handler is shown: whichever branch fired.
pub enum Settlement<T> {
    /// The upstream promise resolved with this value.
    Resolved(T),
    /// The upstream promise rejected with this carrier.
    Rejected(core_types::Rejection),
}
