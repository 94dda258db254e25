//! Contract errors: misuses of the promise API itself.

use core_types::Rejection;

/// A misuse of the promise API, as distinct from a [`Rejection`] (a
/// domain error the promise carries on the caller's behalf).
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// `resolve` or `reject` was called on a promise that had already settled.
    #[error("promise already settled")]
    AlreadySettled,

    /// `reject` was called on a promise with no continuation installed
    /// and that was not constructed already-rejected via `make_rejected`.
    #[error("promise rejected with no handler attached: {0}")]
    UnhandledRejection(Rejection),
}
