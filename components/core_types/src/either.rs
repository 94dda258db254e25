//! A discriminated union of two settlement shapes.

/// Either a left or a right value.
///
/// Used as the downstream value type of a chained promise whose resolve
/// and reject handlers return two genuinely distinct types — the
/// "distinct types on both branches" row of the type-computation table
/// a chain's resolve/reject handlers are combined by (see `Promise::then`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Either<L, R> {
    /// The value produced by the resolve branch.
    Left(L),
    /// The value produced by the reject branch.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns the left value, if this is `Left`.
    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Returns the right value, if this is `Right`.
    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Reports whether this is the left branch.
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Reports whether this is the right branch.
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }
}
