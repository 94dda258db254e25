//! Deferred-value objects ("promises") for composable, synchronous
//! asynchronous code.
//!
//! A [`Promise<T>`] represents a value that is not yet available and
//! that will eventually be *settled*, either resolved with a value of
//! type `T` or rejected with an opaque [`core_types::Rejection`].
//! Consumers attach handlers via [`Promise::then`], [`Promise::rescue`]
//! and [`Promise::finally`]; handlers fire synchronously at settlement
//! (or immediately, if the promise is already settled when attached) and
//! may themselves return plain values, nothing, or further promises,
//! producing a new, typed promise — a composable chain.
//!
//! This crate deliberately has no scheduler, no event loop, and no
//! internal locking: settlement and handler invocation happen
//! synchronously on the thread of the settler, and `Promise<T>` is not
//! safe to share across threads (see [`core_types::Rejection`] for why).
//! Concurrency integration, if any, is the caller's responsibility.
//!
//! # Overview
//!
//! - [`Promise`] - the state machine, value/error storage and chaining
//! - [`outcome::Outcome`] - what a handler hands back to the chain
//! - [`outcome::Settlement`] - what a `finally` handler is shown
//! - [`error::ContractError`] - misuses of the promise API itself
//! - [`factory`] - `make_promise` / `make_resolved` / `make_rejected`
//!
//! # Examples
//!
//! ```
//! use promise::factory::{make_resolved, make_rejected};
//! use promise::outcome::Outcome;
//!
//! let chained = make_resolved(41).then_ok(|v| Ok(Outcome::Value(v + 1)));
//! assert_eq!(chained.value(), Some(42));
//!
//! let recovered = make_rejected::<i32, _>("bad")
//!     .rescue(|e| Ok(Outcome::Value(if e.to_string() == "bad" { 99 } else { 0 })));
//! assert_eq!(recovered.value(), Some(99));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod chain;
mod promise;
mod state;

pub mod error;
pub mod factory;
pub mod outcome;

pub use crate::promise::Promise;
pub use error::ContractError;
pub use state::PromiseState;
