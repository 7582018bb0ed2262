mod sl2;
mod sln;

use liftings::Mat2;
use num_bigint::{BigInt, BigUint};
use wasm_bindgen::prelude::*;

/// Sets the panic hook to display useful error messages.
#[wasm_bindgen(js_name = "setPanicHook")]
pub fn set_panic_hook() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}

/// Parses a decimal integer, allowing surrounding whitespace.
fn parse_int(s: &str) -> Result<BigInt, String> {
    s.trim().parse().map_err(|_| format!("Invalid integer: '{s}'"))
}

/// Parses a decimal modulus. It has to be non-negative.
fn parse_modulus(s: &str) -> Result<BigUint, String> {
    s.trim().parse().map_err(|_| format!("Invalid modulus: '{s}'"))
}

/// Parses the entries `a, b, c, d` of a 2×2 matrix.
fn parse_mat2(entries: &[String]) -> Result<Mat2, String> {
    let [a, b, c, d] = entries else {
        return Err(format!("Expected 4 matrix entries but got {}", entries.len()));
    };

    Ok(Mat2::new(parse_int(a)?, parse_int(b)?, parse_int(c)?, parse_int(d)?))
}

/// The entries `a, b, c, d` as decimal strings.
fn print_mat2(m: &Mat2) -> Vec<String> {
    m.entries().into_iter().map(|e| e.to_string()).collect()
}
