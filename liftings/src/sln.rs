//! Lifting matrices from `SL_n(Z/NZ)` to `SL_n(Z)`.
//!
//! The lift is recursive in the dimension (Shimura, Lemma 1.38). Bring `A`
//! into Smith normal form `D = UAV` with `det U = det V = 1`. Since
//! `det D = det A = 1 mod N`, the diagonal `a_0, ..., a_{n-1}` satisfies
//! `a_0 b = 1 mod N` with `b = a_1 ... a_{n-1}`. With
//! ```text
//!     [b   1]          [1 -a_1]
//! W = [b-1 1]      X = [0   1 ]
//!     [     I]         [      I]
//! ```
//! (identity outside the upper left 2×2 block) we get
//! ```text
//!           [  1                   ]
//! W D X  =  [1-a_0  a_0 a_1        ]   (mod N)
//!           [              a_2     ]
//!           [                  ... ]
//! ```
//! The lower right block is the diagonal matrix `C'` of size `n - 1` which
//! again has determinant 1 mod `N`, so it can be lifted recursively. The
//! lift of `A` is then `U^-1 W^-1 C'' X^-1 V^-1`, where `C''` is the above
//! matrix with `C'` replaced by its lift.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer as _;
use num_traits::{One as _, Zero as _};
use tracing::{debug, instrument, trace};

use crate::error::{LiftError, Result};
use crate::matrix::OwnedMatrix;
use crate::normal_form::{SmithForm, smith_form};
use crate::rings::{BigIntModN, Ring, Z};

/// Finds a matrix with determinant 1 that is congruent to `a` mod `n`.
///
/// `a` has to be square with determinant 1 mod `n`.
#[instrument(skip_all, fields(dim = a.num_rows(), n = %n))]
pub fn lift_for_sl(a: &OwnedMatrix<Z>, n: &BigUint) -> Result<OwnedMatrix<Z>> {
    if !a.is_square() {
        return Err(LiftError::NotSquare { rows: a.num_rows(), cols: a.num_cols() });
    }

    if n.is_zero() {
        return Err(LiftError::ZeroModulus);
    }

    let ni = BigInt::from(n.clone());
    let det = a.determinant(&Z);
    if !(&det - BigInt::one()).is_multiple_of(&ni) {
        return Err(LiftError::Determinant { det: det.mod_floor(&ni), modulus: n.clone() });
    }

    let l = lift_rec(a, n)?;
    debug_assert!(l.determinant(&Z).is_one() && l.is_congruent(a, n));
    Ok(l)
}

/// Lifts a matrix over `Z/NZ`. This is [`lift_for_sl`] with the residues as
/// the integer matrix and the modulus of the ring as `N`.
pub fn lift_from_residues(
    a: &OwnedMatrix<BigIntModN>,
    ring: &BigIntModN,
) -> Result<OwnedMatrix<Z>> {
    let a: OwnedMatrix<Z> = a.transform(|e| Z.element_from_biguint(e));
    lift_for_sl(&a, ring.modulus())
}

fn lift_rec(a: &OwnedMatrix<Z>, n: &BigUint) -> Result<OwnedMatrix<Z>> {
    let dim = a.num_rows();
    if dim <= 1 {
        return Ok(OwnedMatrix::identity(dim));
    }

    let s = smith_form(a);
    debug!(dim, invariant_factors = ?s.invariant_factors(), "smith form");
    let SmithForm { mut u, mut v, .. } = s;

    // Make both transformations have determinant 1.
    if u.determinant(&Z) == Z.negative_one() {
        u.negate_row(0, &Z);
    }
    if v.determinant(&Z) == Z.negative_one() {
        v.negate_col(0, &Z);
    }
    let d = u.mul(a, &Z).mul(&v, &Z);
    let diag: Vec<BigInt> = d.diagonal_entries().cloned().collect();
    trace!(diagonal = ?diag, "normalized diagonal");

    let b: BigInt = diag[1..].iter().product();

    let mut w = OwnedMatrix::<Z>::identity(dim);
    w[(0, 0)] = b.clone();
    w[(1, 0)] = &b - BigInt::one();
    w[(0, 1)] = BigInt::one();

    let mut x = OwnedMatrix::<Z>::identity(dim);
    x[(0, 1)] = -&diag[1];

    if cfg!(debug_assertions) {
        let mut expected = d.clone();
        expected[(0, 0)] = BigInt::one();
        expected[(1, 0)] = BigInt::one() - &diag[0];
        expected[(1, 1)] *= &diag[0];
        let wdx = w.mul(&d, &Z).mul(&x, &Z);
        debug_assert!(wdx.is_congruent(&expected, n), "WDX = {wdx:?}, expected {expected:?}");
    }

    let mut c = OwnedMatrix::<Z>::diagonal(diag[1..].iter().cloned());
    c[(0, 0)] *= &diag[0];
    trace!(?c, "lifting lower block");
    let c = lift_rec(&c, n)?;

    let mut c2 = OwnedMatrix::block_diagonal(&OwnedMatrix::identity(1), &c);
    c2[(1, 0)] = BigInt::one() - &diag[0];

    let inv = |m: &OwnedMatrix<Z>| m.unimodular_inverse().ok_or(LiftError::NotUnimodular);
    let factors = [inv(&u)?, inv(&w)?, c2, inv(&x)?, inv(&v)?];
    OwnedMatrix::product(&factors, &Z).ok_or(LiftError::NotUnimodular)
}

#[cfg(test)]
mod test {
    use rand::{Rng as _, SeedableRng as _, rngs::StdRng};
    use rand::distr::{Distribution as _, Uniform};

    use super::*;
    use crate::arith::inverse_mod;

    fn check(a: &OwnedMatrix<Z>, n: u32) -> OwnedMatrix<Z> {
        let n = BigUint::from(n);
        let l = lift_for_sl(a, &n).unwrap();
        assert_eq!(l.determinant(&Z), BigInt::one(), "lift of {a:?} mod {n} is {l:?}");
        assert!(l.is_congruent(a, &n), "lift of {a:?} mod {n} is {l:?}");
        l
    }

    #[test]
    fn known() {
        let a = OwnedMatrix::<Z>::from_array([[6, 0, 0, 9], [1, 6, 9, 4], [4, 4, 8, 0], [4, 0, 0, 8]]);
        assert_eq!(a.determinant(&Z), BigInt::from(144));
        check(&a, 11);

        let b = OwnedMatrix::<Z>::from_array([[1, 6, 10, 4], [4, 14, 15, 4], [13, 0, 1, 15], [15, 15, 17, 10]]);
        assert_eq!(b.determinant(&Z), BigInt::from(4447));
        check(&b, 19);
    }

    #[test]
    fn small() {
        // 1×1 matrices are 1 mod N, so the lift is just 1.
        let l = check(&OwnedMatrix::from_array([[12]]), 11);
        assert_eq!(l, OwnedMatrix::identity(1));

        check(&OwnedMatrix::from_array([[2, 3], [1, 2]]), 5);
        check(&OwnedMatrix::from_array([[0, -1], [1, 0]]), 3);
        check(&OwnedMatrix::from_array([[4, 0], [0, 4]]), 5);
        check(&OwnedMatrix::from_array([[0, 0], [0, 0]]), 1);
    }

    #[test]
    fn unimodular_input() {
        let a = OwnedMatrix::<Z>::from_array([[1, 2, 3], [0, 1, 4], [5, 6, 0]]);
        assert_eq!(a.determinant(&Z), BigInt::one());
        for n in [2, 7, 100] {
            check(&a, n);
        }
    }

    #[test]
    fn residues() {
        let r = BigIntModN::new(BigUint::from(19u32));
        let a = OwnedMatrix::<Z>::from_array([[1, 6, 10, 4], [4, 14, 15, 4], [13, 0, 1, 15], [15, 15, 17, 10]]);
        let l = lift_from_residues(&a.reduce_mod(&r), &r).unwrap();
        assert_eq!(l.determinant(&Z), BigInt::one());
        assert_eq!(l.reduce_mod(&r), a.reduce_mod(&r));
    }

    #[test]
    fn errors() {
        let n = BigUint::from(5u32);
        let a = OwnedMatrix::<Z>::from_array([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(lift_for_sl(&a, &n), Err(LiftError::NotSquare { rows: 2, cols: 3 }));

        let a = OwnedMatrix::<Z>::from_array([[2, 0], [0, 1]]);
        let err = lift_for_sl(&a, &n).unwrap_err();
        assert_eq!(err.to_string(), "Determinant is 2 mod 5, should be 1");
        assert_eq!(lift_for_sl(&a, &BigUint::zero()), Err(LiftError::ZeroModulus));

        let a = OwnedMatrix::<Z>::from_array([[-1]]);
        assert_eq!(lift_for_sl(&a, &n),
            Err(LiftError::Determinant { det: BigInt::from(4), modulus: n }));
    }

    #[test]
    fn random() {
        let rng = &mut StdRng::seed_from_u64(0);
        let dim = Uniform::new(1usize, 6).unwrap();
        let entry = Uniform::new(-20i64, 21).unwrap();
        for _ in 0..300 {
            let n = [2u32, 5, 11, 12, 19, 30][rng.random_range(0..6)];
            let ni = BigInt::from(n);
            let d = dim.sample(rng);
            let mut a = OwnedMatrix::<Z>::from_iter(d, d,
                std::iter::repeat_with(|| BigInt::from(entry.sample(rng))));

            // Scale the first row so the determinant is 1 mod n.
            let Ok(s) = inverse_mod(&a.determinant(&Z), &ni) else {
                continue;
            };
            for e in a.row_mut(0) {
                *e *= &s;
            }

            check(&a, n);
        }
    }

    #[test]
    fn large_modulus() {
        let rng = &mut StdRng::seed_from_u64(1);
        let entry = Uniform::new(-1000i64, 1001).unwrap();
        let moduli = [BigUint::from(1_000_003u32), BigUint::from(1u64 << 32),
            BigUint::from(2_999_999_811u64), BigUint::from(2u32)];
        for _ in 0..120 {
            let n = &moduli[rng.random_range(0..moduli.len())];
            let ni = BigInt::from(n.clone());
            let d = rng.random_range(2usize..7);
            let mut a = OwnedMatrix::<Z>::from_iter(d, d,
                std::iter::repeat_with(|| BigInt::from(entry.sample(rng))));

            let Ok(s) = inverse_mod(&a.determinant(&Z), &ni) else {
                continue;
            };
            for e in a.row_mut(0) {
                *e *= &s;
            }

            let l = lift_for_sl(&a, n).unwrap();
            assert_eq!(l.determinant(&Z), BigInt::one(), "lift of {a:?} mod {n} is {l:?}");
            assert!(l.is_congruent(&a, n), "lift of {a:?} mod {n} is {l:?}");
        }

        // Determinant one less than the modulus.
        let n = BigUint::from(1u64 << 32);
        let a = OwnedMatrix::<Z>::from_array([[1, 0], [0, -1]]);
        assert_eq!(lift_for_sl(&a, &n), Err(LiftError::Determinant {
            det: BigInt::from((1u64 << 32) - 1),
            modulus: n,
        }));
    }
}
