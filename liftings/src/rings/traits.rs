use num_bigint::{BigInt, BigUint, Sign};

/// An element of a ring.
/// This exists mostly for convenience, so we can call `e.is_zero` on ring
/// elements without having the ring at hand.
pub trait RingElement: 'static + Clone + PartialEq + std::fmt::Debug + std::fmt::Display {
    /// Returns the "zero" element of the ring.
    fn zero() -> Self;

    /// Is the given element "zero"?
    fn is_zero(&self) -> bool;

    /// Returns the "one" element of the ring.
    /// Mod 1 this is not a valid representative, which is why
    /// [`super::BigIntModN`] refuses the modulus 1.
    fn one() -> Self;

    /// Is the given element "one"?
    fn is_one(&self) -> bool;
}

macro_rules! impl_ring_element {
    ($t:ident) => {
        impl RingElement for $t {
            fn zero() -> Self {
                Zero::zero()
            }

            fn is_zero(&self) -> bool {
                Zero::is_zero(self)
            }

            fn one() -> Self {
                One::one()
            }

            fn is_one(&self) -> bool {
                One::is_one(self)
            }
        }
    };
}

pub(crate) use impl_ring_element;

/// A ring.
///
/// An instance of the ring is passed to every operation, because some rings
/// (e.g. [`super::BigIntModN`]) need runtime information like the modulus to
/// do arithmetic. For [`super::Z`] and [`super::Q`] the instance is empty.
pub trait Ring: 'static + Clone + PartialEq + Eq + std::fmt::Debug {
    /// The type of the elements of the ring.
    type Element: RingElement;

    /// Returns the "zero" element of the ring.
    fn zero() -> Self::Element {
        Self::Element::zero()
    }

    /// Returns the "one" element of the ring.
    fn one() -> Self::Element {
        Self::Element::one()
    }

    /// Returns the additive inverse of 1.
    fn negative_one(&self) -> Self::Element {
        self.neg(Self::one())
    }

    /// Negates the element in place.
    fn neg_assign(&self, e: &mut Self::Element);

    /// Negates the element, i.e. computes `0 - e`.
    fn neg(&self, mut e: Self::Element) -> Self::Element {
        self.neg_assign(&mut e);
        e
    }

    /// Add an element to another element.
    fn add_assign(&self, l: &mut Self::Element, r: &Self::Element);

    /// Add two elements.
    fn add(&self, mut l: Self::Element, r: &Self::Element) -> Self::Element {
        self.add_assign(&mut l, r);
        l
    }

    /// Subtract one element from another.
    fn sub_assign(&self, l: &mut Self::Element, r: &Self::Element);

    /// Subtract one element from another.
    fn sub(&self, mut l: Self::Element, r: &Self::Element) -> Self::Element {
        self.sub_assign(&mut l, r);
        l
    }

    /// Multiply two elements.
    fn mul_assign(&self, l: &mut Self::Element, r: &Self::Element);

    /// Multiply two elements.
    fn mul(&self, mut l: Self::Element, r: &Self::Element) -> Self::Element {
        self.mul_assign(&mut l, r);
        l
    }

    /// Multiply two elements and add the result to another element.
    fn mul_add_assign(
        &self,
        acc: &mut Self::Element,
        a: &Self::Element,
        b: &Self::Element,
    ) {
        self.add_assign(acc, &self.mul(a.clone(), b))
    }

    /// [`Ring::mul_add_assign`] but with [`Ring::sub`].
    fn mul_sub_assign(
        &self,
        acc: &mut Self::Element,
        a: &Self::Element,
        b: &Self::Element,
    ) {
        self.sub_assign(acc, &self.mul(a.clone(), b));
    }

    /// Check if an element is a unit.
    fn is_unit(&self, e: &Self::Element) -> bool;

    /// Compute the multiplicative inverse of an element if it is a unit.
    fn inverse(&self, e: &Self::Element) -> Option<Self::Element>;

    /// Returns a random element, uniformly if that makes sense for the ring.
    /// Rings whose elements can't be sampled uniformly at random (Z, Q)
    /// panic.
    fn random<R: rand::Rng>(&self, rng: &mut R) -> Self::Element;

    /// Converts the [`BigUint`] `n` into an element.
    /// The element is the result of adding `1` `n`-times to itself.
    fn element_from_biguint(&self, n: &BigUint) -> Self::Element;

    /// Converts the [`BigInt`] `n` into an element.
    ///
    /// - If `n` is non-negative, this is the result of adding `1` `n`-times to
    ///   itself.
    ///
    /// - If `n` is negative, this is the result of adding `-1` `-n`-times to
    ///   itself.
    fn element_from_bigint(&self, n: &BigInt) -> Self::Element {
        match n.sign() {
            Sign::NoSign => Self::zero(),
            Sign::Plus => self.element_from_biguint(n.magnitude()),
            Sign::Minus => self.neg(self.element_from_biguint(n.magnitude())),
        }
    }
}

/// A field.
pub trait Field: Ring {
    /// Divide an element by another element.
    fn div_assign(&self, l: &mut Self::Element, r: &Self::Element);

    /// Divide an element by another element.
    fn div(&self, mut l: Self::Element, r: &Self::Element) -> Self::Element {
        self.div_assign(&mut l, r);
        l
    }
}

/// A ring where you can compare two elements.
///
/// [`crate::normal_form`] picks pivots of smallest absolute value, so it needs
/// [`OrderedRing::cmp_abs`].
pub trait OrderedRing: Ring {
    /// Compare two elements.
    fn cmp(&self, l: &Self::Element, r: &Self::Element) -> std::cmp::Ordering;

    /// Is the given element greater than 0?
    fn is_positive(&self, e: &Self::Element) -> bool {
        self.cmp(e, &Self::zero()).is_gt()
    }

    /// Is the given element less than 0?
    fn is_negative(&self, e: &Self::Element) -> bool {
        self.cmp(e, &Self::zero()).is_lt()
    }

    /// Compute the absolute value of the element, which is defined here as
    /// `is_negative(e) ? neg(e) : e`.
    fn abs_assign(&self, e: &mut Self::Element) {
        if self.is_negative(e) {
            self.neg_assign(e);
        }
    }

    /// Compute the absolute value of the element.
    /// See [`OrderedRing::abs_assign`].
    fn abs(&self, mut e: Self::Element) -> Self::Element {
        self.abs_assign(&mut e);
        e
    }

    /// Compare the absolute value of two elements.
    fn cmp_abs(
        &self,
        l: &Self::Element,
        r: &Self::Element,
    ) -> std::cmp::Ordering {
        self.cmp(&self.abs(l.clone()), &self.abs(r.clone()))
    }
}

/// A ring where you can do integer division.
///
/// This is needed by [`crate::normal_form`] and by the fraction-free
/// determinant in [`crate::matrix`].
pub trait IntDivRing: OrderedRing {
    /// Divide two elements such that the remainder is non-negative.
    /// If `r` divides `l` this is exact division.
    fn euclidean_div(l: &Self::Element, r: &Self::Element) -> Self::Element;

    /// Compute the remainder of the euclidean division.
    fn euclidean_rem(l: &Self::Element, r: &Self::Element) -> Self::Element;
}
