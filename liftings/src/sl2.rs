//! Lifts of 2×2 matrices that are only known mod `m` (and mod `n`) to
//! matrices with determinant exactly 1.
//!
//! The base routine is [`lift_to_gamma1`]. It combines two congruence
//! conditions: the matrix has to be congruent to the given one mod `m` and
//! of the form
//! ```text
//! [1 *]
//! [0 1]
//! ```
//! mod `n`, i.e. lie in `Γ₁(n)`. The other functions in this module are
//! specializations of it.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer as _;
use num_traits::{One as _, Zero as _};
use tracing::{instrument, trace};

use crate::arith::{crt, inverse_mod, lift_to_sl2z};
use crate::error::{LiftError, Result};
use crate::mat2::Mat2;

/// Finds a matrix with determinant 1 that is congruent to `g` mod `m` and
/// to `(1, *, 0, 1)` mod `n`.
///
/// `m` and `n` have to be coprime and `det(g)` has to be 1 mod `m`.
/// For `m = 1` the identity is returned without looking at `g` or `n`.
#[instrument(level = "trace", skip_all, fields(g = %g, m = %m, n = %n))]
pub fn lift_to_gamma1(g: &Mat2, m: &BigUint, n: &BigUint) -> Result<Mat2> {
    if m.is_one() {
        return Ok(Mat2::identity());
    }

    if m.is_zero() || n.is_zero() {
        return Err(LiftError::ZeroModulus);
    }

    if !m.gcd(n).is_one() {
        return Err(LiftError::NotCoprime { m: m.clone(), n: n.clone() });
    }

    let mi = BigInt::from(m.clone());
    let ni = BigInt::from(n.clone());

    let det = g.det().mod_floor(&mi);
    if !det.is_one() {
        return Err(LiftError::Determinant { det, modulus: m.clone() });
    }

    // The bottom row we want mod m*n.
    let c = crt(&g.c, &BigInt::zero(), &mi, &ni)?;
    let d = crt(&g.d, &BigInt::one(), &mi, &ni)?;
    trace!(%c, %d, "bottom row mod m*n");

    let Mat2 { a, b, c, d } = lift_to_sl2z(&c, &d, &(&mi * &ni))?;

    // Any matrix with this bottom row and determinant 1 agrees with g mod m
    // up to adding a multiple of the bottom row to the top row.
    let r = (&a * &g.b - &b * &g.a).mod_floor(&mi);
    trace!(%r, "top row correction");

    Ok(Mat2::new(a + &r * &c, b + &r * &d, c, d))
}

/// Finds a matrix in `SL_2(Z)` that is congruent to `g` mod `n`.
pub fn lift_matrix_to_sl2z(g: &Mat2, n: &BigUint) -> Result<Mat2> {
    lift_to_gamma1(g, n, &BigUint::one())
}

/// Lifts the generator `[[0, -1], [1, 0]]` mod `m` to a matrix that is also
/// in `Γ₁(n)`.
pub fn lift_gen_to_gamma1(m: &BigUint, n: &BigUint) -> Result<Mat2> {
    lift_to_gamma1(&Mat2::from([0, -1, 1, 0]), m, n)
}

/// Finds a matrix with determinant `p` which is congruent to
/// `[[0, -1], [p, 0]]` mod `p^u` and to `[[p, *], [0, 1]]` mod `n`.
///
/// This is the generator lifted with [`lift_gen_to_gamma1`] with its first
/// column multiplied by `p`.
pub fn lift_uniformiser_odd(p: &BigUint, u: u32, n: &BigUint) -> Result<Mat2> {
    let g = lift_gen_to_gamma1(&p.pow(u), n)?;
    let p = BigInt::from(p.clone());
    Ok(Mat2::new(&p * g.a, g.b, &p * g.c, g.d))
}

/// Lifts `g` like [`lift_to_gamma1`] with `m = p^u` and then corrects the
/// result so its lower left entry also agrees with `g.c` mod `p^(u+1)`.
///
/// `p` has to divide `g.c` and `g.a` has to be invertible mod `p`.
#[instrument(level = "trace", skip_all, fields(g = %g, p = %p, u = u, n = %n))]
pub fn lift_ramified(g: &Mat2, p: &BigUint, u: u32, n: &BigUint) -> Result<Mat2> {
    if p.is_zero() {
        return Err(LiftError::ZeroModulus);
    }

    let pi = BigInt::from(p.clone());
    if !g.c.is_multiple_of(&pi) {
        return Err(LiftError::NotDivisible { value: g.c.clone(), divisor: p.clone() });
    }

    let pu = p.pow(u);
    let Mat2 { a, b, c, d } = lift_to_gamma1(g, &pu, n)?;
    let pu = BigInt::from(pu);

    // c = g.c mod p^u, so c = g.c + q p^u and we have to get rid of q mod p.
    // Subtracting r p^u times the top row from the bottom row does that if
    // r a = q mod p. Choosing r = 0 mod n keeps the bottom row mod n.
    let (q, rem) = (&c - &g.c).div_rem(&pu);
    debug_assert!(rem.is_zero(), "lift is not congruent mod p^u");
    let r = crt(&(q * inverse_mod(&a, &pi)?), &BigInt::zero(), &pi, &BigInt::from(n.clone()))?;
    trace!(%r, "ramified correction");

    let s = &pu * &r;
    let c = c - &s * &a;
    let d = d - &s * &b;
    Ok(Mat2::new(a, b, c, d))
}

#[cfg(test)]
mod test {
    use rand::{Rng as _, SeedableRng as _, rngs::StdRng};

    use super::*;

    fn uint(i: u32) -> BigUint {
        BigUint::from(i)
    }

    /// Checks the congruences of [`lift_to_gamma1`].
    fn check_gamma1(g: &Mat2, m: u32, n: u32, l: &Mat2) {
        assert_eq!(l.det(), BigInt::one(), "lift of {g} mod ({m}, {n}) is {l}");
        assert!(l.is_congruent(g, &uint(m)), "lift of {g} mod ({m}, {n}) is {l}");
        let b = l.b.clone();
        assert!(l.is_congruent(&Mat2::new(BigInt::one(), b, BigInt::zero(), BigInt::one()), &uint(n)),
            "lift of {g} mod ({m}, {n}) is {l}");
    }

    /// Returns a random matrix with determinant 1 mod `m`.
    fn random_mat(m: u32, rng: &mut StdRng) -> Mat2 {
        let mi = BigInt::from(m);
        loop {
            let [a, b, c] = [(); 3].map(|_| BigInt::from(rng.random_range(0..m)));
            let Ok(inv) = inverse_mod(&a, &mi) else {
                continue;
            };
            let d = ((BigInt::one() + &b * &c) * inv).mod_floor(&mi);
            return Mat2::new(a, b, c, d);
        }
    }

    #[test]
    fn known_lifts() {
        let g = Mat2::from([10, 11, 3, 11]);
        assert_eq!(lift_to_gamma1(&g, &uint(19), &uint(5)).unwrap(), Mat2::from([371, 68, 60, 11]));
        assert_eq!(lift_matrix_to_sl2z(&g, &uint(19)).unwrap(), Mat2::from([29, 106, 3, 11]));
        assert_eq!(lift_gen_to_gamma1(&uint(9), &uint(8)).unwrap(), Mat2::from([441, 62, 64, 9]));
        assert_eq!(lift_uniformiser_odd(&uint(3), 2, &uint(11)).unwrap(),
            Mat2::from([432, 377, 165, 144]));
        assert_eq!(lift_ramified(&Mat2::from([2, 2, 3, 2]), &uint(3), 1, &uint(1)).unwrap(),
            Mat2::from([5, 8, 3, 5]));
        assert_eq!(lift_ramified(&Mat2::from([8, 2, 12, 2]), &uint(3), 2, &uint(23)).unwrap(),
            Mat2::from([323, 110, -133584, -45493]));
    }

    #[test]
    fn trivial_moduli() {
        // Already in SL_2(Z).
        let g = Mat2::from([1, 1, 0, 1]);
        assert_eq!(lift_to_gamma1(&g, &uint(5), &uint(1)).unwrap(), g);

        // Everything is congruent mod 1.
        let g = Mat2::from([2, 3, 11, 22]);
        assert_eq!(lift_to_gamma1(&g, &uint(1), &uint(5)).unwrap(), Mat2::identity());
        assert_eq!(lift_to_gamma1(&g, &uint(1), &uint(0)).unwrap(), Mat2::identity());
        assert_eq!(lift_gen_to_gamma1(&uint(1), &uint(12)).unwrap(), Mat2::identity());
    }

    #[test]
    fn errors() {
        let err = lift_matrix_to_sl2z(&Mat2::from([2, 0, 0, 1]), &uint(5)).unwrap_err();
        assert_eq!(err, LiftError::Determinant { det: BigInt::from(2), modulus: uint(5) });
        assert_eq!(err.to_string(), "Determinant is 2 mod 5, should be 1");

        let err = lift_matrix_to_sl2z(&Mat2::from([-1, 0, 0, 1]), &uint(7)).unwrap_err();
        assert_eq!(err.to_string(), "Determinant is 6 mod 7, should be 1");

        assert_eq!(lift_gen_to_gamma1(&uint(6), &uint(4)),
            Err(LiftError::NotCoprime { m: uint(6), n: uint(4) }));
        assert_eq!(lift_gen_to_gamma1(&uint(0), &uint(4)), Err(LiftError::ZeroModulus));
        assert_eq!(lift_gen_to_gamma1(&uint(3), &uint(0)), Err(LiftError::ZeroModulus));

        assert!(matches!(
            lift_ramified(&Mat2::from([2, 2, 1, 2]), &uint(3), 1, &uint(1)),
            Err(LiftError::NotDivisible { .. })
        ));
        assert!(matches!(
            lift_ramified(&Mat2::from([2, 2, 3, 2]), &uint(3), 1, &uint(6)),
            Err(LiftError::NotCoprime { .. })
        ));
    }

    #[test]
    fn random_gamma1() {
        let rng = &mut StdRng::seed_from_u64(0);
        for _ in 0..1000 {
            let m = rng.random_range(2..200);
            let n = rng.random_range(1..200);
            if !uint(m).gcd(&uint(n)).is_one() {
                continue;
            }

            let g = random_mat(m, rng);
            let l = lift_to_gamma1(&g, &uint(m), &uint(n)).unwrap();
            check_gamma1(&g, m, n, &l);

            let l = lift_matrix_to_sl2z(&g, &uint(m)).unwrap();
            check_gamma1(&g, m, 1, &l);
        }
    }

    #[test]
    fn random_uniformiser() {
        let rng = &mut StdRng::seed_from_u64(0);
        for _ in 0..500 {
            let p = [3u32, 5, 7, 11, 13][rng.random_range(0..5)];
            let u = rng.random_range(1..4);
            let n = rng.random_range(1..60);
            if n % p == 0 {
                continue;
            }

            let l = lift_uniformiser_odd(&uint(p), u, &uint(n)).unwrap();
            let pi = BigInt::from(p);
            assert_eq!(l.det(), pi, "uniformiser for ({p}, {u}, {n}) is {l}");
            assert!(l.is_congruent(&Mat2::from([0, -1, p as i64, 0]), &uint(p).pow(u)),
                "uniformiser for ({p}, {u}, {n}) is {l}");
            let b = l.b.clone();
            assert!(l.is_congruent(&Mat2::new(pi, b, BigInt::zero(), BigInt::one()), &uint(n)),
                "uniformiser for ({p}, {u}, {n}) is {l}");
        }
    }

    #[test]
    fn random_ramified() {
        let rng = &mut StdRng::seed_from_u64(0);
        for _ in 0..500 {
            let p = [3u32, 5, 7, 11, 13][rng.random_range(0..5)];
            let u = rng.random_range(1..4);
            let n = rng.random_range(1..60);
            if n % p == 0 {
                continue;
            }

            let pu = p.pow(u);
            let mut g = random_mat(pu, rng);
            if g.a.is_multiple_of(&BigInt::from(p)) {
                continue;
            }

            // Make p divide c and fix the determinant again.
            let pui = BigInt::from(pu);
            g.c = &g.c * BigInt::from(p);
            g.d = ((BigInt::one() + &g.b * &g.c) * inverse_mod(&g.a, &pui).unwrap()).mod_floor(&pui);

            let l = lift_ramified(&g, &uint(p), u, &uint(n)).unwrap();
            check_gamma1(&g, pu, n, &l);
            assert!((&l.c - &g.c).is_multiple_of(&(pui * p)),
                "ramified lift of {g} for ({p}, {u}, {n}) is {l}");
        }
    }
}
