use num_integer::Integer;

use super::*;

/// The ring of integers mod n. Each element is stored as a [`BigUint`] in
/// `[0, n)`.
///
/// This is what a matrix "over `Z/NZ`" is reduced into when we compare it to
/// a lift.
#[derive(Clone, PartialEq, Eq)]
pub struct BigIntModN {
    n: BigUint,
}

impl BigIntModN {
    /// Create a new ring.
    pub fn new(n: BigUint) -> Self {
        assert!(n > One::one(), "modulus must be greater than 1");
        Self { n }
    }

    /// Returns the modulus.
    pub fn modulus(&self) -> &BigUint {
        &self.n
    }
}

impl Ring for BigIntModN {
    type Element = BigUint;

    fn negative_one(&self) -> Self::Element {
        self.n.clone() - 1u8
    }

    fn neg_assign(&self, e: &mut Self::Element) {
        neg_assign_mod(e, &self.n);
    }

    fn add_assign(&self, l: &mut Self::Element, r: &Self::Element) {
        *l += r;
        reduce_simple(l, &self.n);
    }

    fn sub_assign(&self, l: &mut Self::Element, r: &Self::Element) {
        if r > l {
            *l += &self.n;
        }
        *l -= r
    }

    fn mul_assign(&self, l: &mut Self::Element, r: &Self::Element) {
        *l *= r;
        *l %= &self.n;
    }

    fn is_unit(&self, e: &Self::Element) -> bool {
        RingElement::is_one(&e.gcd(&self.n))
    }

    fn inverse(&self, e: &Self::Element) -> Option<Self::Element> {
        e.modinv(&self.n)
    }

    fn random<R: rand::Rng>(&self, rng: &mut R) -> Self::Element {
        // Rejection sampling on the bit length of the modulus.
        let bits = self.n.bits();
        let digits = bits.div_ceil(32) as usize;
        let top_mask = match bits % 32 {
            0 => u32::MAX,
            b => (1u32 << b) - 1,
        };
        loop {
            let mut d: Vec<u32> = (0..digits).map(|_| rng.random()).collect();
            if let Some(top) = d.last_mut() {
                *top &= top_mask;
            }
            let e = BigUint::from_slice(&d);
            if e < self.n {
                return e;
            }
        }
    }

    fn element_from_biguint(&self, n: &BigUint) -> Self::Element {
        n % &self.n
    }
}

impl std::fmt::Debug for BigIntModN {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BigIntModN({})", self.n)
    }
}
