use super::*;

/// The rationals, with elements stored as [`BigRational`].
///
/// Only used to invert integer matrices.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Q;

impl Ring for Q {
    type Element = BigRational;

    fn negative_one(&self) -> Self::Element {
        (-<BigInt as One>::one()).into()
    }

    fn neg_assign(&self, e: &mut Self::Element) {
        neg_assign(e)
    }

    fn add_assign(&self, l: &mut Self::Element, r: &Self::Element) {
        *l += r;
    }

    fn sub_assign(&self, l: &mut Self::Element, r: &Self::Element) {
        *l -= r;
    }

    fn mul_assign(&self, l: &mut Self::Element, r: &Self::Element) {
        *l *= r;
    }

    fn is_unit(&self, e: &Self::Element) -> bool {
        !Zero::is_zero(e.numer())
    }

    fn inverse(&self, e: &Self::Element) -> Option<Self::Element> {
        self.is_unit(e).then(|| e.recip())
    }

    fn random<R: rand::Rng>(&self, _: &mut R) -> Self::Element {
        panic!("Can't sample rational number uniformly at random.");
    }

    fn element_from_biguint(&self, n: &BigUint) -> Self::Element {
        BigInt::from(n.clone()).into()
    }

    fn element_from_bigint(&self, n: &BigInt) -> Self::Element {
        n.clone().into()
    }
}

impl Field for Q {
    fn div_assign(&self, l: &mut Self::Element, r: &Self::Element) {
        *l /= r;
    }
}
