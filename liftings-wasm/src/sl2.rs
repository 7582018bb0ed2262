use liftings::Mat2;
use liftings::sl2;
use wasm_bindgen::prelude::*;

use crate::{parse_mat2, parse_modulus, print_mat2};

/// Lifts the matrix with entries `a, b, c, d` mod `m` to a matrix in
/// `SL_2(Z)` that is also in `Γ₁(n)`.
#[wasm_bindgen(js_name = "liftToGamma1")]
pub fn lift_to_gamma1(entries: Vec<String>, m: String, n: String) -> Result<Vec<String>, String> {
    let g = parse_mat2(&entries)?;
    lift(sl2::lift_to_gamma1(&g, &parse_modulus(&m)?, &parse_modulus(&n)?))
}

/// Lifts the matrix with entries `a, b, c, d` mod `n` to `SL_2(Z)`.
#[wasm_bindgen(js_name = "liftMatrixToSL2Z")]
pub fn lift_matrix_to_sl2z(entries: Vec<String>, n: String) -> Result<Vec<String>, String> {
    let g = parse_mat2(&entries)?;
    lift(sl2::lift_matrix_to_sl2z(&g, &parse_modulus(&n)?))
}

#[wasm_bindgen(js_name = "liftGenToGamma1")]
pub fn lift_gen_to_gamma1(m: String, n: String) -> Result<Vec<String>, String> {
    lift(sl2::lift_gen_to_gamma1(&parse_modulus(&m)?, &parse_modulus(&n)?))
}

/// Returns a matrix with determinant `p` which is `[[0, -1], [p, 0]]` mod
/// `p^u` and upper triangular mod `n`.
#[wasm_bindgen(js_name = "liftUniformiserOdd")]
pub fn lift_uniformiser_odd(p: String, u: u32, n: String) -> Result<Vec<String>, String> {
    lift(sl2::lift_uniformiser_odd(&parse_modulus(&p)?, u, &parse_modulus(&n)?))
}

#[wasm_bindgen(js_name = "liftRamified")]
pub fn lift_ramified(
    entries: Vec<String>,
    p: String,
    u: u32,
    n: String,
) -> Result<Vec<String>, String> {
    let g = parse_mat2(&entries)?;
    lift(sl2::lift_ramified(&g, &parse_modulus(&p)?, u, &parse_modulus(&n)?))
}

fn lift(l: liftings::Result<Mat2>) -> Result<Vec<String>, String> {
    l.map(|l| print_mat2(&l)).map_err(|e| e.to_string())
}
