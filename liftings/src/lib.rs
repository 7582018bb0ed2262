//! Lifting matrices that are only known modulo some integer to integer
//! matrices with determinant exactly 1.
//!
//! - [`sl2`]: 2×2 lifts that combine a congruence mod `m` with being in
//!   `Γ₁(n)`, plus the specializations used for local components of modular
//!   forms (generator, uniformiser and ramified lifts).
//! - [`sln`]: lifts from `SL_n(Z/NZ)` to `SL_n(Z)` via the Smith normal form.
//!
//! The linear algebra underneath ([`matrix`], [`normal_form`]) works over any
//! [`rings::Ring`] passed in explicitly.

pub mod arith;
pub mod error;
pub mod mat2;
pub mod matrix;
pub mod normal_form;
pub mod rings;
pub mod sl2;
pub mod sln;

pub use error::{LiftError, Result};
pub use mat2::Mat2;
