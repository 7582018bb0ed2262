//! 2×2 integer matrices, the input and output of the lifts in [`crate::sl2`].

use std::fmt::Display;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer as _;

/// The matrix
/// ```text
/// [a b]
/// [c d]
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Mat2 {
    pub a: BigInt,
    pub b: BigInt,
    pub c: BigInt,
    pub d: BigInt,
}

impl Mat2 {
    pub fn new(a: BigInt, b: BigInt, c: BigInt, d: BigInt) -> Self {
        Self { a, b, c, d }
    }

    pub fn identity() -> Self {
        Self::from([1, 0, 0, 1])
    }

    /// The determinant `ad - bc`.
    pub fn det(&self) -> BigInt {
        &self.a * &self.d - &self.b * &self.c
    }

    /// The entries in the order `a, b, c, d`.
    pub fn entries(&self) -> [&BigInt; 4] {
        [&self.a, &self.b, &self.c, &self.d]
    }

    /// Are all entries congruent mod `n`?
    pub fn is_congruent(&self, other: &Self, n: &BigUint) -> bool {
        let n = BigInt::from(n.clone());
        self.entries()
            .into_iter()
            .zip(other.entries())
            .all(|(l, r)| (l - r).is_multiple_of(&n))
    }
}

impl<T: Into<BigInt>> From<[T; 4]> for Mat2 {
    fn from([a, b, c, d]: [T; 4]) -> Self {
        Self::new(a.into(), b.into(), c.into(), d.into())
    }
}

impl Display for Mat2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[[{}, {}], [{}, {}]]", self.a, self.b, self.c, self.d)
    }
}
