use num_traits::Signed;

use super::*;

/// The integers, with elements stored as [`BigInt`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Z;

impl Ring for Z {
    type Element = BigInt;

    fn negative_one(&self) -> Self::Element {
        -<BigInt as One>::one()
    }

    fn neg_assign(&self, e: &mut Self::Element) {
        neg_assign(e);
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
        RingElement::is_one(e.magnitude())
    }

    fn inverse(&self, e: &Self::Element) -> Option<Self::Element> {
        // The units are exactly ±1 and are their own inverses.
        self.is_unit(e).then(|| e.clone())
    }

    fn random<R: rand::Rng>(&self, _: &mut R) -> Self::Element {
        panic!("Can't sample integer uniformly at random.");
    }

    fn element_from_biguint(&self, n: &BigUint) -> Self::Element {
        n.clone().into()
    }

    fn element_from_bigint(&self, n: &BigInt) -> Self::Element {
        n.clone()
    }
}

impl IntDivRing for Z {
    fn euclidean_div(l: &Self::Element, r: &Self::Element) -> Self::Element {
        num_traits::Euclid::div_euclid(l, r)
    }

    fn euclidean_rem(l: &Self::Element, r: &Self::Element) -> Self::Element {
        num_traits::Euclid::rem_euclid(l, r)
    }
}

impl OrderedRing for Z {
    fn cmp(&self, l: &Self::Element, r: &Self::Element) -> std::cmp::Ordering {
        l.cmp(r)
    }

    fn is_positive(&self, e: &Self::Element) -> bool {
        e.is_positive()
    }

    fn is_negative(&self, e: &Self::Element) -> bool {
        e.is_negative()
    }

    fn cmp_abs(&self, l: &Self::Element, r: &Self::Element) -> std::cmp::Ordering {
        l.magnitude().cmp(r.magnitude())
    }
}

#[test]
fn euclidean_div_test() {
    let cases = [(7, 2, 3, 1), (-7, 2, -4, 1), (7, -2, -3, 1), (-7, -2, 4, 1), (6, 3, 2, 0)];
    for (l, r, q, m) in cases {
        let (l, r) = (BigInt::from(l), BigInt::from(r));
        assert_eq!(Z::euclidean_div(&l, &r), BigInt::from(q), "{l} div {r}");
        assert_eq!(Z::euclidean_rem(&l, &r), BigInt::from(m), "{l} rem {r}");
    }
}

#[test]
fn units_test() {
    assert_eq!(Z.inverse(&BigInt::from(-1)), Some(BigInt::from(-1)));
    assert_eq!(Z.inverse(&BigInt::from(1)), Some(BigInt::from(1)));
    assert_eq!(Z.inverse(&BigInt::from(2)), None);
    assert!(!Z.is_unit(&BigInt::from(0)));
}
