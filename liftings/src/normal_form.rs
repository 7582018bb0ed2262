//! Diagonal and Smith normal forms of integer matrices.

use num_bigint::BigInt;
use num_integer::Integer as _;
use num_traits::Signed as _;
use tracing::trace;

use crate::arith::xgcd;
use crate::matrix::OwnedMatrix;
use crate::rings::{IntDivRing, RingElement, Z};

/// Computes a diagonal matrix D in-place and returns matrices (S, T), such
/// that D=SAT.
///
/// S and T are products of elementary row/column operations (swaps and
/// adding multiples of one row/column to another), so they are unimodular,
/// but their determinants can be -1.
///
/// The diagonal is not normalized in any way, see [`smith_form`] for that.
pub fn integer_diagonalize<R: IntDivRing>(
    a: &mut OwnedMatrix<R>,
    ring: &R,
) -> (OwnedMatrix<R>, OwnedMatrix<R>) {
    // The matrices S and T are initialized to the identity.
    // S/T keeps track of the row/column operations.
    let mut s = OwnedMatrix::identity(a.num_rows());
    let mut t = OwnedMatrix::identity(a.num_cols());

    for i in 0..a.min_dim() {
        //
        // Eliminate row i and column i.
        //
        loop {
            // Is there a non-zero element in the column?
            let col_zero = a.col(i)
                .skip(i + 1)
                .all(|e| e.is_zero());

            if !col_zero {
                //
                // Eliminate the column.
                //

                // Find a pivot in the column.
                let pivot = a.col(i)
                    .enumerate()
                    .skip(i)
                    .filter(|e| !e.1.is_zero())
                    .min_by(|l, r| ring.cmp_abs(l.1, r.1))
                    .map(|e| e.0)
                    .unwrap(); // We know there is a non-zero element.

                // Move the pivot to the diagonal.
                a.swap_rows(i, pivot);
                s.swap_rows(i, pivot);

                // Try to eliminate every other entry in the column.
                for k in i + 1..a.num_rows() {
                    if a[(k, i)].is_zero() {
                        continue;
                    }

                    let m = ring.neg(R::euclidean_div(&a[(k, i)], &a[(i, i)]));
                    a.row_multiply_add(k, i, &m, ring);
                    s.row_multiply_add(k, i, &m, ring);
                }

                // Keep eliminating the column.
                continue;
            }

            // If we get here, the column is zero below the diagonal.

            // If the row is zero, then continue with the next row/column.
            if a.row(i).iter().skip(i + 1).all(|e| e.is_zero()) {
                break;
            }

            //
            // Eliminate the row.
            //

            // Find a pivot in the row.
            let pivot = a.row(i)
                .iter()
                .enumerate()
                .skip(i)
                .filter(|e| !e.1.is_zero())
                .min_by(|l, r| ring.cmp_abs(l.1, r.1))
                .map(|e| e.0)
                .unwrap(); // We know there is a non-zero element.

            // Move the pivot to the diagonal.
            a.swap_columns(i, pivot);
            t.swap_columns(i, pivot);

            // Try to eliminate every other entry in the row.
            for k in i + 1..a.num_cols() {
                if a[(i, k)].is_zero() {
                    continue;
                }

                let m = ring.neg(R::euclidean_div(&a[(i, k)], &a[(i, i)]));
                a.col_multiply_add(k, i, &m, ring);
                t.col_multiply_add(k, i, &m, ring);
            }
        }
    }

    (s, t)
}

/// The Smith normal form `d = u * a * v` of an integer matrix `a`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmithForm {
    /// The diagonal matrix. The diagonal entries are non-negative and each
    /// one divides the next. Zeros come last.
    pub d: OwnedMatrix<Z>,

    /// The left transformation. Unimodular.
    pub u: OwnedMatrix<Z>,

    /// The right transformation. Unimodular.
    pub v: OwnedMatrix<Z>,
}

impl SmithForm {
    /// The invariant factors, i.e. the diagonal of `d`.
    pub fn invariant_factors(&self) -> Vec<BigInt> {
        self.d.diagonal_entries().cloned().collect()
    }
}

/// Computes the Smith normal form of an integer matrix.
///
/// First the matrix is diagonalized with [`integer_diagonalize`] and then the
/// divisibility chain is established pairwise: for diagonal entries `x` and
/// `y` with `g = gcd(x, y) = sx + ty`,
/// ```text
/// [ s    t  ] [x 0] [1  -ty/g] = [g    0  ]
/// [-y/g x/g ] [0 y] [1   sx/g]   [0  xy/g ]
/// ```
/// where both outer matrices have determinant 1.
pub fn smith_form(a: &OwnedMatrix<Z>) -> SmithForm {
    let mut d = a.clone();
    let (mut u, mut v) = integer_diagonalize(&mut d, &Z);
    let k = d.min_dim();

    for i in 0..k {
        for j in i + 1..k {
            let (x, y) = (d[(i, i)].clone(), d[(j, j)].clone());
            let divides = if x.is_zero() { y.is_zero() } else { y.is_multiple_of(&x) };
            if divides {
                continue;
            }

            let (g, s, t) = xgcd(&x, &y);
            let (xg, yg) = (&x / &g, &y / &g);
            trace!(%x, %y, %g, "fixing divisibility");

            u.combine_rows(i, j, &[[s.clone(), t.clone()], [-&yg, xg.clone()]], &Z);
            v.combine_cols(i, j, &[[BigInt::from(1), -&t * &yg], [BigInt::from(1), &s * &xg]], &Z);
            d[(j, j)] = &x * &yg;
            d[(i, i)] = g;
        }
    }

    for i in 0..k {
        if d[(i, i)].is_negative() {
            d.negate_row(i, &Z);
            u.negate_row(i, &Z);
        }
    }

    SmithForm { d, u, v }
}
