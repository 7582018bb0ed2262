//! Dense matrices over a [`Ring`].
//!
//! All matrices own their entries, which are stored in row-major order.
//! Every operation that does arithmetic takes the ring as an argument.

use std::fmt::Debug;
use std::ops::{Index, IndexMut};

use itertools::iproduct;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer as _;
use num_rational::BigRational;

use crate::rings::{BigIntModN, Field, IntDivRing, Q, Ring, RingElement, Z};

/// A matrix with `rows * cols` entries stored in row-major order.
pub struct OwnedMatrix<R: Ring> {
    entries: Vec<R::Element>,
    rows: usize,
    cols: usize,
}

impl<R: Ring> OwnedMatrix<R> {
    /// The number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// The smaller of the number of rows and columns.
    pub fn min_dim(&self) -> usize {
        self.rows.min(self.cols)
    }

    /// Does the matrix have as many rows as columns?
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the row `r`.
    pub fn row(&self, r: usize) -> &[R::Element] {
        &self.entries[r * self.cols..(r + 1) * self.cols]
    }

    /// Returns the row `r` mutably.
    pub fn row_mut(&mut self, r: usize) -> &mut [R::Element] {
        &mut self.entries[r * self.cols..(r + 1) * self.cols]
    }

    /// Returns an iterator over the entries of column `c`.
    pub fn col(&self, c: usize) -> impl Iterator<Item = &R::Element> {
        assert!(c < self.cols);
        self.entries.iter().skip(c).step_by(self.cols.max(1))
    }

    /// Returns an iterator over the rows.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[R::Element]> {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// The diagonal entries.
    pub fn diagonal_entries(&self) -> impl Iterator<Item = &R::Element> {
        (0..self.min_dim()).map(move |i| &self[(i, i)])
    }

    /// Apply a function to each entry, possibly changing the ring.
    pub fn transform<U: Ring, F: FnMut(&R::Element) -> U::Element>(
        &self,
        f: F,
    ) -> OwnedMatrix<U> {
        OwnedMatrix::from_iter(self.rows, self.cols, self.entries.iter().map(f))
    }

    /// Creates a matrix from an iterator in row-major order.
    pub fn from_iter<I: Iterator<Item = R::Element>>(
        r: usize,
        c: usize,
        iter: I,
    ) -> Self {
        let entries: Vec<_> = iter.take(r * c).collect();
        assert_eq!(entries.len(), r * c,
            "The iterator needs to return at least r * c items.");
        Self { entries, rows: r, cols: c }
    }

    /// Creates a matrix from an array of rows.
    pub fn from_array<U: Into<R::Element>, const RS: usize, const CS: usize>(
        a: [[U; CS]; RS],
    ) -> Self {
        Self::from_iter(RS, CS, a.into_iter().flatten().map(Into::into))
    }

    /// Creates a matrix from slice of rows.
    pub fn from_rows<U, V>(rows: &[U]) -> Self
    where
        U: AsRef<[V]>,
        V: Into<R::Element> + Clone,
    {
        if rows.is_empty() {
            return Self::zero(0, 0);
        }

        let r = rows.len();
        let c = rows[0].as_ref().len();
        assert!(rows.iter().all(|r| r.as_ref().len() == c),
            "All rows need to have the same length.");

        Self::from_iter(
            r,
            c,
            rows.iter()
                .flat_map(|r| r.as_ref().iter().map(|e| e.clone().into())),
        )
    }

    /// Returns an r×c zero matrix.
    pub fn zero(r: usize, c: usize) -> Self {
        Self::from_iter(r, c, std::iter::repeat_with(R::zero))
    }

    /// Returns an n×n identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::diagonal(std::iter::repeat_n(R::one(), n))
    }

    /// Returns a square matrix with the given diagonal.
    pub fn diagonal<I: IntoIterator<Item = R::Element>>(diag: I) -> Self {
        let diag: Vec<_> = diag.into_iter().collect();
        let mut m = Self::zero(diag.len(), diag.len());
        for (i, e) in diag.into_iter().enumerate() {
            m[(i, i)] = e;
        }
        m
    }

    /// Returns the block diagonal matrix with `a` in the upper left and `b` in
    /// the lower right corner.
    pub fn block_diagonal(a: &Self, b: &Self) -> Self {
        let mut m = Self::zero(a.rows + b.rows, a.cols + b.cols);
        for (i, j) in iproduct!(0..a.rows, 0..a.cols) {
            m[(i, j)] = a[(i, j)].clone();
        }
        for (i, j) in iproduct!(0..b.rows, 0..b.cols) {
            m[(a.rows + i, a.cols + j)] = b[(i, j)].clone();
        }
        m
    }

    /// Swap two rows.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for k in 0..self.cols {
            self.entries.swap(i * self.cols + k, j * self.cols + k);
        }
    }

    /// Swap two columns.
    pub fn swap_columns(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for k in 0..self.rows {
            self.entries.swap(k * self.cols + i, k * self.cols + j);
        }
    }

    /// Negates all elements of a row.
    pub fn negate_row(&mut self, row: usize, r: &R) {
        for e in self.row_mut(row) {
            r.neg_assign(e);
        }
    }

    /// Negates all elements of a column.
    pub fn negate_col(&mut self, col: usize, r: &R) {
        for k in 0..self.rows {
            r.neg_assign(&mut self[(k, col)]);
        }
    }

    /// Add a scaled row to another row. N += M * c.
    /// `m` and `n` can not be equal.
    pub fn row_multiply_add(
        &mut self,
        n: usize,
        m: usize,
        c: &R::Element,
        r: &R,
    ) {
        assert_ne!(m, n);
        assert!(n < self.rows && m < self.rows);
        for i in 0..self.cols {
            let (ne, me) = pair_mut(&mut self.entries, n * self.cols + i, m * self.cols + i);
            r.mul_add_assign(ne, me, c);
        }
    }

    /// Add a scaled column to another column. N += M * c.
    /// `m` and `n` can not be equal.
    pub fn col_multiply_add(
        &mut self,
        n: usize,
        m: usize,
        c: &R::Element,
        r: &R,
    ) {
        assert_ne!(m, n);
        assert!(n < self.cols && m < self.cols);
        for i in 0..self.rows {
            let (ne, me) = pair_mut(&mut self.entries, i * self.cols + n, i * self.cols + m);
            r.mul_add_assign(ne, me, c);
        }
    }

    /// Replaces rows `i` and `j` by a linear combination of them, i.e.
    /// multiplies from the left by the identity with `t` embedded at rows and
    /// columns `i` and `j`:
    /// `row_i = t[0][0] * row_i + t[0][1] * row_j` and
    /// `row_j = t[1][0] * row_i + t[1][1] * row_j`.
    pub fn combine_rows(
        &mut self,
        i: usize,
        j: usize,
        t: &[[R::Element; 2]; 2],
        r: &R,
    ) {
        assert_ne!(i, j);
        for k in 0..self.cols {
            let (x, y) = (self[(i, k)].clone(), self[(j, k)].clone());
            self[(i, k)] = r.mul(x.clone(), &t[0][0]);
            r.mul_add_assign(&mut self[(i, k)], &y, &t[0][1]);
            self[(j, k)] = r.mul(x, &t[1][0]);
            r.mul_add_assign(&mut self[(j, k)], &y, &t[1][1]);
        }
    }

    /// Replaces columns `i` and `j` by a linear combination of them, i.e.
    /// multiplies from the right by the identity with `t` embedded at rows and
    /// columns `i` and `j`:
    /// `col_i = t[0][0] * col_i + t[1][0] * col_j` and
    /// `col_j = t[0][1] * col_i + t[1][1] * col_j`.
    pub fn combine_cols(
        &mut self,
        i: usize,
        j: usize,
        t: &[[R::Element; 2]; 2],
        r: &R,
    ) {
        assert_ne!(i, j);
        for k in 0..self.rows {
            let (x, y) = (self[(k, i)].clone(), self[(k, j)].clone());
            self[(k, i)] = r.mul(x.clone(), &t[0][0]);
            r.mul_add_assign(&mut self[(k, i)], &y, &t[1][0]);
            self[(k, j)] = r.mul(x, &t[0][1]);
            r.mul_add_assign(&mut self[(k, j)], &y, &t[1][1]);
        }
    }

    /// Multiply two matrices.
    pub fn mul(&self, rhs: &Self, ring: &R) -> Self {
        assert_eq!(self.cols, rhs.rows, "Dimensions don't match.");
        let iter = iproduct!(0..self.rows, 0..rhs.cols).map(|(r, c)| {
            let mut acc = R::zero();
            for (a, b) in self.row(r).iter().zip(rhs.col(c)) {
                ring.mul_add_assign(&mut acc, a, b);
            }
            acc
        });
        Self::from_iter(self.rows, rhs.cols, iter)
    }

    /// Multiply a chain of matrices from left to right.
    pub fn product<'a, I>(factors: I, ring: &R) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut iter = factors.into_iter();
        let first = iter.next()?.clone();
        Some(iter.fold(first, |acc, m| acc.mul(m, ring)))
    }

    /// Computes the determinant with the fraction-free Bareiss algorithm.
    ///
    /// All divisions are exact, but only if the ring is a domain, so this
    /// should only be used for [`Z`] (and other domains).
    pub fn determinant(&self, ring: &R) -> R::Element
    where
        R: IntDivRing,
    {
        assert!(self.is_square(), "Determinant of a non-square matrix.");
        let n = self.rows;
        if n == 0 {
            return R::one();
        }

        let mut m = self.clone();
        let mut negate = false;
        let mut prev = R::one();
        for k in 0..n - 1 {
            if m[(k, k)].is_zero() {
                let Some(p) = (k + 1..n).find(|&i| !m[(i, k)].is_zero()) else {
                    return R::zero();
                };
                m.swap_rows(k, p);
                negate = !negate;
            }

            for (i, j) in iproduct!(k + 1..n, k + 1..n) {
                let mut e = ring.mul(m[(i, j)].clone(), &m[(k, k)]);
                ring.mul_sub_assign(&mut e, &m[(i, k)], &m[(k, j)]);
                m[(i, j)] = R::euclidean_div(&e, &prev);
            }

            prev = m[(k, k)].clone();
        }

        let det = m[(n - 1, n - 1)].clone();
        if negate { ring.neg(det) } else { det }
    }

    /// Computes the inverse with Gauss-Jordan elimination.
    /// Returns `None` if the matrix is singular.
    pub fn inverse(&self, ring: &R) -> Option<Self>
    where
        R: Field,
    {
        assert!(self.is_square(), "Inverse of a non-square matrix.");
        let n = self.rows;
        let mut a = self.clone();
        let mut inv = Self::identity(n);

        for c in 0..n {
            let p = (c..n).find(|&r| !a[(r, c)].is_zero())?;
            a.swap_rows(c, p);
            inv.swap_rows(c, p);

            // Scale the pivot row so the pivot is one.
            let s = ring.inverse(&a[(c, c)])?;
            for k in 0..n {
                ring.mul_assign(&mut a[(c, k)], &s);
                ring.mul_assign(&mut inv[(c, k)], &s);
            }

            for r in (0..n).filter(|&r| r != c) {
                if a[(r, c)].is_zero() {
                    continue;
                }
                let f = ring.neg(a[(r, c)].clone());
                a.row_multiply_add(r, c, &f, ring);
                inv.row_multiply_add(r, c, &f, ring);
            }
        }

        Some(inv)
    }
}

impl OwnedMatrix<Z> {
    /// Converts the matrix to a rational matrix.
    pub fn to_rational(&self) -> OwnedMatrix<Q> {
        self.transform(|e| BigRational::from(e.clone()))
    }

    /// Computes the inverse of a matrix with determinant ±1, which again has
    /// integer entries. Returns `None` if the matrix is not unimodular.
    pub fn unimodular_inverse(&self) -> Option<OwnedMatrix<Z>> {
        let inv = self.to_rational().inverse(&Q)?;
        let entries: Option<Vec<_>> = inv.entries
            .into_iter()
            .map(|e| e.is_integer().then(|| e.to_integer()))
            .collect();
        Some(OwnedMatrix::from_iter(self.rows, self.cols, entries?.into_iter()))
    }

    /// Reduces every entry into `Z/nZ`.
    pub fn reduce_mod(&self, ring: &BigIntModN) -> OwnedMatrix<BigIntModN> {
        self.transform(|e| ring.element_from_bigint(e))
    }

    /// Is `self - other` divisible by `n` entrywise?
    pub fn is_congruent(&self, other: &Self, n: &BigUint) -> bool {
        let n = BigInt::from(n.clone());
        self.rows == other.rows && self.cols == other.cols
            && self.entries.iter()
                .zip(&other.entries)
                .all(|(a, b)| (a - b).is_multiple_of(&n))
    }
}

/// Returns a mutable reference to `s[i]` and a shared reference to `s[j]`.
fn pair_mut<T>(s: &mut [T], i: usize, j: usize) -> (&mut T, &T) {
    assert_ne!(i, j);
    if i < j {
        let (l, r) = s.split_at_mut(j);
        (&mut l[i], &r[0])
    } else {
        let (l, r) = s.split_at_mut(i);
        (&mut r[0], &l[j])
    }
}

impl<R: Ring> Index<(usize, usize)> for OwnedMatrix<R> {
    type Output = R::Element;

    fn index(&self, (r, c): (usize, usize)) -> &Self::Output {
        assert!(r < self.rows && c < self.cols, "Index ({r}, {c}) out of bounds.");
        &self.entries[r * self.cols + c]
    }
}

impl<R: Ring> IndexMut<(usize, usize)> for OwnedMatrix<R> {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut Self::Output {
        assert!(r < self.rows && c < self.cols, "Index ({r}, {c}) out of bounds.");
        &mut self.entries[r * self.cols + c]
    }
}

impl<R: Ring> Clone for OwnedMatrix<R> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<R: Ring> PartialEq for OwnedMatrix<R> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.entries == other.entries
    }
}

impl<R: Ring> Eq for OwnedMatrix<R> {}

impl<R: Ring> Debug for OwnedMatrix<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

impl<R: Ring> std::fmt::Display for OwnedMatrix<R> {
    /// Prints the rows on separate lines, e.g.
    /// ```text
    /// [371 68]
    /// [ 60 11]
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let strings: Vec<String> = self.entries.iter().map(|e| e.to_string()).collect();
        let widths: Vec<usize> = (0..self.cols)
            .map(|c| strings.iter().skip(c).step_by(self.cols).map(String::len).max().unwrap_or(0))
            .collect();

        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (c, w) in widths.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>w$}", strings[r * self.cols + c], w = *w)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn int(i: i64) -> BigInt {
        BigInt::from(i)
    }

    fn int_matrix<const RS: usize, const CS: usize>(a: [[i64; CS]; RS]) -> OwnedMatrix<Z> {
        OwnedMatrix::from_array(a)
    }

    #[test]
    fn index() {
        let m = int_matrix([[2, 3], [4, 5]]);
        assert_eq!(m.num_rows(), 2);
        assert_eq!(m.num_cols(), 2);
        assert_eq!(m[(0, 0)], int(2));
        assert_eq!(m[(0, 1)], int(3));
        assert_eq!(m[(1, 0)], int(4));
        assert_eq!(m[(1, 1)], int(5));
        assert_eq!(m.row(1), [int(4), int(5)].as_slice());
        assert_eq!(m.col(1).cloned().collect::<Vec<_>>(), vec![int(3), int(5)]);
    }

    #[test]
    fn mul() {
        let a = int_matrix([[1, 2], [3, 4]]);
        let b = int_matrix([[0, 1], [1, 0]]);
        assert_eq!(a.mul(&b, &Z), int_matrix([[2, 1], [4, 3]]));
        assert_eq!(b.mul(&a, &Z), int_matrix([[3, 4], [1, 2]]));

        let c = int_matrix([[1, 2, 3]]);
        let d = int_matrix([[1], [1], [1]]);
        assert_eq!(c.mul(&d, &Z), int_matrix([[6]]));
        assert_eq!(d.mul(&c, &Z), int_matrix([[1, 2, 3], [1, 2, 3], [1, 2, 3]]));
    }

    #[test]
    fn determinant() {
        assert_eq!(int_matrix([[6, 0, 0, 9], [1, 6, 9, 4], [4, 4, 8, 0], [4, 0, 0, 8]])
            .determinant(&Z), int(144));
        assert_eq!(int_matrix([[1, 6, 10, 4], [4, 14, 15, 4], [13, 0, 1, 15], [15, 15, 17, 10]])
            .determinant(&Z), int(4447));

        // Needs a row swap.
        assert_eq!(int_matrix([[0, 1], [1, 0]]).determinant(&Z), int(-1));
        assert_eq!(int_matrix([[0, 2, 1], [3, 0, 0], [0, 0, 5]]).determinant(&Z), int(-30));

        // Singular.
        assert_eq!(int_matrix([[1, 2], [2, 4]]).determinant(&Z), int(0));
        assert_eq!(int_matrix([[0, 1], [0, 1]]).determinant(&Z), int(0));

        assert_eq!(OwnedMatrix::<Z>::identity(0).determinant(&Z), int(1));
        assert_eq!(int_matrix([[-7]]).determinant(&Z), int(-7));
    }

    #[test]
    fn inverse() {
        let a = int_matrix([[2, 1], [7, 4]]);
        let inv = a.unimodular_inverse().unwrap();
        assert_eq!(inv, int_matrix([[4, -1], [-7, 2]]));
        assert_eq!(a.mul(&inv, &Z), OwnedMatrix::identity(2));

        // Determinant 2, so the inverse is not integral.
        assert!(int_matrix([[2, 0], [0, 1]]).unimodular_inverse().is_none());
        assert!(int_matrix([[1, 2], [2, 4]]).unimodular_inverse().is_none());

        let q = int_matrix([[2, 0], [0, 1]]).to_rational().inverse(&Q).unwrap();
        assert_eq!(q[(0, 0)], BigRational::new(1.into(), 2.into()));
    }

    #[test]
    fn block_diagonal() {
        let a = int_matrix([[1]]);
        let b = int_matrix([[2, 3], [4, 5]]);
        assert_eq!(OwnedMatrix::block_diagonal(&a, &b),
            int_matrix([[1, 0, 0], [0, 2, 3], [0, 4, 5]]));
        assert_eq!(OwnedMatrix::diagonal([1, 2, 3].map(BigInt::from)),
            int_matrix([[1, 0, 0], [0, 2, 0], [0, 0, 3]]));
    }

    #[test]
    fn row_col_operations() {
        let mut m = int_matrix([[1, 2], [3, 4]]);
        m.row_multiply_add(1, 0, &(-3).into(), &Z);
        assert_eq!(m, int_matrix([[1, 2], [0, -2]]));
        m.col_multiply_add(1, 0, &(-2).into(), &Z);
        assert_eq!(m, int_matrix([[1, 0], [0, -2]]));
        m.negate_row(1, &Z);
        assert_eq!(m, int_matrix([[1, 0], [0, 2]]));
        m.swap_rows(0, 1);
        m.swap_columns(0, 1);
        assert_eq!(m, int_matrix([[2, 0], [0, 1]]));
        m.negate_col(0, &Z);
        assert_eq!(m, int_matrix([[-2, 0], [0, 1]]));

        let t = [[1, 1], [0, 1]].map(|r| r.map(BigInt::from));
        let mut l = int_matrix([[1, 2], [3, 4]]);
        l.combine_rows(0, 1, &t, &Z);
        assert_eq!(l, int_matrix([[1, 1], [0, 1]]).mul(&int_matrix([[1, 2], [3, 4]]), &Z));
        let mut r = int_matrix([[1, 2], [3, 4]]);
        r.combine_cols(0, 1, &t, &Z);
        assert_eq!(r, int_matrix([[1, 2], [3, 4]]).mul(&int_matrix([[1, 1], [0, 1]]), &Z));
    }

    #[test]
    fn reduce() {
        let ring = BigIntModN::new(11u32.into());
        let a = int_matrix([[-1, 12], [22, 5]]);
        let b = int_matrix([[10, 1], [0, -6]]);
        assert_eq!(a.reduce_mod(&ring), b.reduce_mod(&ring));
        assert!(a.is_congruent(&b, &11u32.into()));
        assert!(!a.is_congruent(&b, &7u32.into()));
    }

    #[test]
    fn display() {
        let m = int_matrix([[371, 68], [60, 11]]);
        assert_eq!(m.to_string(), "[371 68]\n[ 60 11]");
    }
}
