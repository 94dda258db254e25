//! Foundational vocabulary types shared by the promise core.
//!
//! This crate provides the small set of types `promise` needs but that
//! don't belong to the state machine itself:
//!
//! - [`Unit`] - the value type of a promise that carries no information
//! - [`Either`] - a discriminated union for chains whose two branches
//!   settle with distinct types
//! - [`Rejection`] - the opaque, erased error carrier a rejected promise
//!   stores
//!
//! # Examples
//!
//! ```
//! use core_types::{Either, Rejection, Unit};
//!
//! let unit = Unit;
//! assert_eq!(unit.to_string(), "()");
//!
//! let branch: Either<i32, String> = Either::Left(42);
//! assert_eq!(branch.left(), Some(42));
//!
//! let rejection = Rejection::msg("disk on fire");
//! assert_eq!(rejection.to_string(), "disk on fire");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod either;
mod rejection;
mod unit;

pub use either::Either;
pub use rejection::Rejection;
pub use unit::Unit;
