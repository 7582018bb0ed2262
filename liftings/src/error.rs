//! Error types for the lifting algorithms.

use num_bigint::{BigInt, BigUint};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiftError {
    /// The matrix does not satisfy the determinant congruence the lift needs.
    #[error("Determinant is {det} mod {modulus}, should be 1")]
    Determinant { det: BigInt, modulus: BigUint },

    #[error("modulus must not be zero")]
    ZeroModulus,

    #[error("moduli {m} and {n} are not coprime")]
    NotCoprime { m: BigUint, n: BigUint },

    #[error("no integer is {a} mod {m} and {b} mod {n}")]
    NoCrtSolution { a: BigInt, b: BigInt, m: BigInt, n: BigInt },

    #[error("{value} is not invertible mod {modulus}")]
    NotInvertible { value: BigInt, modulus: BigInt },

    #[error("{value} is not divisible by {divisor}")]
    NotDivisible { value: BigInt, divisor: BigUint },

    /// `(c : d)` is not a point of the projective line over `Z/NZ`, i.e.
    /// `gcd(c, d, N) != 1`, so there is no matrix in `SL_2(Z)` with this bottom
    /// row mod `N`.
    #[error("({c} : {d}) is not a point of P^1(Z/{modulus}Z)")]
    NotInP1 { c: BigInt, d: BigInt, modulus: BigInt },

    #[error("expected a square matrix but got a {rows}x{cols} matrix")]
    NotSquare { rows: usize, cols: usize },

    #[error("matrix is not unimodular")]
    NotUnimodular,
}

pub type Result<T> = std::result::Result<T, LiftError>;
