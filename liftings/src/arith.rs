//! Integer arithmetic the lifts are built from: extended gcd, Chinese
//! remaindering, modular inverses and lifting a bottom row to `SL_2(Z)`.
//!
//! Moduli are passed as positive [`BigInt`]s here. The public lifting
//! functions take [`num_bigint::BigUint`]s and convert.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use tracing::trace;

use crate::error::{LiftError, Result};
use crate::mat2::Mat2;

/// Computes `(g, s, t)` with `g = gcd(a, b) = s * a + t * b` and `g >= 0`.
pub fn xgcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let e = a.extended_gcd(b);
    (e.gcd, e.x, e.y)
}

/// Returns the `x` in `[0, lcm(m, n))` with `x = a mod m` and `x = b mod n`.
///
/// The moduli don't have to be coprime, but then `a` and `b` have to agree
/// mod `gcd(m, n)`.
pub fn crt(a: &BigInt, b: &BigInt, m: &BigInt, n: &BigInt) -> Result<BigInt> {
    if m.is_zero() || n.is_zero() {
        return Err(LiftError::ZeroModulus);
    }

    let (g, alpha, _) = xgcd(m, n);
    let (q, r) = (b - a).div_rem(&g);
    if !r.is_zero() {
        return Err(LiftError::NoCrtSolution {
            a: a.clone(),
            b: b.clone(),
            m: m.clone(),
            n: n.clone(),
        });
    }

    // alpha * m = g mod n, so adding q * alpha * m changes a by b - a mod n
    // and by nothing mod m.
    let lcm = m.lcm(n);
    Ok((a + q * alpha * m).mod_floor(&lcm))
}

/// Returns the inverse of `a` mod `m` in `[0, m)`.
pub fn inverse_mod(a: &BigInt, m: &BigInt) -> Result<BigInt> {
    if m.is_zero() {
        return Err(LiftError::ZeroModulus);
    }

    let (g, s, _) = xgcd(&a.mod_floor(m), m);
    if !g.is_one() {
        return Err(LiftError::NotInvertible { value: a.clone(), modulus: m.clone() });
    }

    Ok(s.mod_floor(m))
}

/// Finds a matrix in `SL_2(Z)` whose bottom row is `(c, d)` mod `n`.
///
/// If `gcd(c, d) = 1` the bottom row is exactly `(c, d)` and the top row
/// comes from the Bezout coefficients. Otherwise zero entries are replaced
/// by `n` and `d` is shifted by a multiple of `n` that makes it coprime to
/// `c`: with `m` the part of `c` coprime to both `d` and `n`, every prime
/// dividing `c` divides exactly one of `d` and `n * m`, so `d + n * m` is
/// coprime to `c`.
pub fn lift_to_sl2z(c: &BigInt, d: &BigInt, n: &BigInt) -> Result<Mat2> {
    let not_in_p1 = || LiftError::NotInP1 {
        c: c.clone(),
        d: d.clone(),
        modulus: n.clone(),
    };

    if c.is_zero() && d.is_zero() {
        return Err(not_in_p1());
    }

    let (g, z1, z2) = xgcd(c, d);
    if g.is_one() {
        return Ok(Mat2::new(z2, -z1, c.clone(), d.clone()));
    }

    // Have to try harder.
    let c2 = if c.is_zero() { n.clone() } else { c.clone() };
    let d2 = if d.is_zero() { n.clone() } else { d.clone() };

    let m = prime_to_part(prime_to_part(c2.clone(), &d2), n);
    let d2 = d2 + n * m;
    trace!(%c2, %d2, "shifted bottom row");

    let (g, z1, z2) = xgcd(&c2, &d2);
    if !g.is_one() {
        return Err(not_in_p1());
    }

    Ok(Mat2::new(z2, -z1, c2, d2))
}

/// Divides out of `m` every prime that also divides `x`.
fn prime_to_part(mut m: BigInt, x: &BigInt) -> BigInt {
    loop {
        let g = m.gcd(x);
        if g.is_one() || g.is_zero() {
            return m;
        }
        m /= g;
    }
}
