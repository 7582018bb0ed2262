//! A trait for the kind of number
//! ([ring](https://en.wikipedia.org/wiki/Ring_(mathematics))) a matrix has
//! entries in.
//!
//! The lifting algorithms mostly work over the integers ([`Z`]), but they
//! also need to reduce matrices mod `N` ([`BigIntModN`]) and to invert
//! unimodular matrices, which we do over the rationals ([`Q`]) and then
//! convert back.
//!
//! The [`Ring`] stores information about the ring we are working in and all
//! operations on elements are implemented in this trait. For [`Z`] and [`Q`]
//! it is empty and for [`BigIntModN`] it contains the modulus. An instance of
//! the ring needs to be passed to any function that does arithmetic. The
//! other option would be to store the modulus with every element which would
//! waste memory and we'd have to check that the moduli are equal for every
//! operation.

mod integers;
mod mod_n;
mod rationals;
mod traits;

pub use integers::*;
pub use mod_n::*;
pub use rationals::*;
pub use traits::*;

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{One, Zero};

impl_ring_element!(BigUint);
impl_ring_element!(BigInt);
impl_ring_element!(BigRational);

/// When the `m` is guaranteed to be in `[0, 2n)` where `n` is the modulus,
/// reduce mod n. Checking if `m >= n` and subtracting `n` avoids a division.
pub(crate) fn reduce_simple(m: &mut BigUint, n: &BigUint) {
    if &*m >= n {
        *m -= n;
    }
}

/// Negates an element without allocating. There should really be a `NegAssign`
/// trait for this in `num_traits`.
pub(crate) fn neg_assign<T: std::ops::Neg<Output = T> + Default>(e: &mut T) {
    *e = -std::mem::take(e);
}

/// Negates the element mod m without allocating.
/// See [`neg_assign`].
pub(crate) fn neg_assign_mod(e: &mut BigUint, m: &BigUint) {
    if Zero::is_zero(e) {
        return;
    }
    *e = m - std::mem::take(e);
}
