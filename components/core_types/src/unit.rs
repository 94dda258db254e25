//! The zero-information value type.

use std::fmt;

/// The value type of a promise that carries no information — the target
/// for `Promise<Unit>::resolve(Unit)`, the Rust rendition of a promise
/// whose `resolve()` takes no argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unit;

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "()")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_is_copy_and_equal_to_itself() {
        let a = Unit;
        let b = a;
        assert_eq!(a, b);
    }
}
