use itertools::Itertools;
use liftings::Mat2;
use liftings::sl2;
use num_bigint::{BigInt, BigUint};

// Lift a 2×2 matrix mod m to a matrix in SL_2(Z) that is also in Γ₁(n).
fn main() {
    let mut args = std::env::args();
    let Some((_, a, b, c, d, m)) = args.next_tuple() else {
        println!("Arguments: <a> <b> <c> <d> <m> [n]");
        return;
    };

    let [Ok(a), Ok(b), Ok(c), Ok(d)] = [a, b, c, d].map(|e| e.parse::<BigInt>()) else {
        println!("Invalid matrix entries.");
        return;
    };

    let Ok(m) = m.parse::<BigUint>() else {
        println!("Invalid modulus: {m}.");
        return;
    };

    let n = match args.next().map(|n| n.parse::<BigUint>()) {
        None => BigUint::from(1u32),
        Some(Ok(n)) => n,
        Some(Err(e)) => return println!("Invalid modulus: {e}."),
    };

    let g = Mat2::new(a, b, c, d);
    match sl2::lift_to_gamma1(&g, &m, &n) {
        Ok(l) => println!("{l}"),
        Err(e) => println!("{e}"),
    }
}
