use pyo3::prelude::*;

/// Greatest common divisor by Euclid's algorithm.
///
/// Negative inputs keep Rust's `%` semantics (the remainder takes the sign of
/// the dividend), so the sign of the result is not normalized:
/// `gcd(-12, 18) == 6` while `gcd(12, -18) == -6`.
#[pyfunction]
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let temp = b;
        // i64::MIN % -1 overflows, the remainder is 0 either way
        b = a.wrapping_rem(b);
        a = temp;
    }
    a
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
