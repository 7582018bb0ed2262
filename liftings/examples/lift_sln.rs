use liftings::matrix::OwnedMatrix;
use liftings::rings::Z;
use liftings::sln;

// Lift a matrix from SL_4(Z/11Z) to SL_4(Z).
fn main() {
    let a = OwnedMatrix::<Z>::from_array([
        [6, 0, 0, 9],
        [1, 6, 9, 4],
        [4, 4, 8, 0],
        [4, 0, 0, 8],
    ]);
    let n = 11u32.into();

    println!("det(A) = {}", a.determinant(&Z));
    match sln::lift_for_sl(&a, &n) {
        Ok(l) => {
            println!("L =\n{l}");
            println!("det(L) = {}", l.determinant(&Z));
        },
        Err(e) => println!("{e}"),
    }
}
