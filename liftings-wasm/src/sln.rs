use liftings::matrix::OwnedMatrix;
use liftings::rings::Z;
use liftings::sln;
use wasm_bindgen::prelude::*;

use crate::{parse_int, parse_modulus};

/// The result of [`lift_for_sl`].
#[wasm_bindgen(getter_with_clone)]
pub struct SLLift {
    /// The lifted matrix, in the same format as the input.
    pub matrix: String,

    /// The determinant of the input matrix.
    #[wasm_bindgen(js_name = "inputDeterminant")]
    pub input_determinant: String,
}

/// Lifts a matrix from `SL_n(Z/NZ)` to `SL_n(Z)`.
///
/// Rows are separated by newlines or `;` and entries within a row by
/// whitespace.
#[wasm_bindgen(js_name = "liftForSL")]
pub fn lift_for_sl(
    #[wasm_bindgen(js_name = "matrixString")] matrix_string: String,
    n: String,
) -> Result<SLLift, String> {
    let a = parse_matrix(&matrix_string)?;
    let n = parse_modulus(&n)?;
    let l = sln::lift_for_sl(&a, &n).map_err(|e| e.to_string())?;
    Ok(SLLift {
        matrix: print_matrix(&l),
        input_determinant: a.determinant(&Z).to_string(),
    })
}

fn parse_matrix(s: &str) -> Result<OwnedMatrix<Z>, String> {
    let mut rows = Vec::new();

    // Each line contains a row.
    for line in s.split(['\n', ';']) {
        // Each element is a space-separated string.
        let row = line.split_ascii_whitespace()
            .map(parse_int)
            .collect::<Result<Vec<_>, _>>()?;

        // Skip empty lines, e.g. a trailing newline.
        if row.is_empty() {
            continue;
        }

        // Check that each row has the same number of entries as the first.
        if let Some(first) = rows.first().map(Vec::len)
            && row.len() != first
        {
            return Err(format!(
                "Row {} has a different number of entries ({}) \
                 than the first row ({first})",
                rows.len() + 1,
                row.len(),
            ));
        }

        rows.push(row);
    }

    if rows.is_empty() {
        return Err("The matrix must have at least one row".into());
    }

    Ok(OwnedMatrix::from_rows(&rows))
}

fn print_matrix(m: &OwnedMatrix<Z>) -> String {
    m.rows()
        .map(|r| r.iter().map(|e| e.to_string()).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}
