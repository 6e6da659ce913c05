use num_traits::{One, Zero};
use pyo3::prelude::*;
use pyo3::types::PyType;
use std::fmt;
use std::fmt::Display;
use std::ops;
use std::str::FromStr;

use crate::error::FractionError;
use crate::utils::gcd;

/// `num / den`, kept exactly as computed. Arithmetic never reduces to
/// lowest terms, call `reduced` for that.
#[derive(Debug, Clone, Copy)]
#[pyclass(frozen)]
pub struct Fraction {
    num: i64,
    den: i64,
}

#[pymethods]
impl Fraction {
    #[new]
    pub fn new(num: i64, den: i64) -> Result<Self, FractionError> {
        if den.is_zero() {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(Self { num, den })
    }

    #[classmethod]
    #[pyo3(name = "from_str")]
    pub fn py_from_str(_cls: &Bound<PyType>, s: &str) -> Result<Self, FractionError> {
        s.parse()
    }

    #[getter]
    pub fn num(&self) -> i64 {
        self.num
    }

    #[getter]
    pub fn den(&self) -> i64 {
        self.den
    }

    /// Lowest terms with a positive denominator. Fails only when the result
    /// leaves `i64`, as `i64::MIN / -1` does.
    pub fn reduced(&self) -> Result<Fraction, FractionError> {
        // den != 0 so the gcd is never zero
        let g = gcd(self.num, self.den) as i128;
        let (mut num, mut den) = (self.num as i128 / g, self.den as i128 / g);

        if den < 0 {
            num = -num;
            den = -den;
        }
        Ok(Fraction {
            num: i64::try_from(num).map_err(|_| FractionError::Overflow)?,
            den: i64::try_from(den).map_err(|_| FractionError::Overflow)?,
        })
    }

    pub fn __add__(&self, rhs: &Fraction) -> Fraction {
        *self + *rhs
    }

    pub fn __sub__(&self, rhs: &Fraction) -> Fraction {
        *self - *rhs
    }

    pub fn __mul__(&self, rhs: &Fraction) -> Fraction {
        *self * *rhs
    }

    pub fn __truediv__(&self, rhs: &Fraction) -> Result<Fraction, FractionError> {
        *self / *rhs
    }

    pub fn __eq__(&self, rhs: &Fraction) -> bool {
        self == rhs
    }

    pub fn __str__(&self) -> String {
        self.to_string()
    }

    pub fn __repr__(&self) -> String {
        format!("Fraction({}, {})", self.num, self.den)
    }
}

impl ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        Fraction {
            num: self.num * rhs.den + rhs.num * self.den,
            den: self.den * rhs.den,
        }
    }
}

impl ops::Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        Fraction {
            num: self.num * rhs.den - rhs.num * self.den,
            den: self.den * rhs.den,
        }
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction {
            num: self.num * rhs.num,
            den: self.den * rhs.den,
        }
    }
}

impl ops::Div for Fraction {
    type Output = Result<Fraction, FractionError>;

    fn div(self, rhs: Fraction) -> Result<Fraction, FractionError> {
        if rhs.num.is_zero() {
            return Err(FractionError::DivisionByZero);
        }

        Ok(Fraction {
            num: self.num * rhs.den,
            den: self.den * rhs.num,
        })
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction { num: 1, den: 1 }
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction { num: 0, den: 1 }
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    /// Accepts `"n/d"` or a bare `"n"`.
    fn from_str(s: &str) -> Result<Self, FractionError> {
        let invalid = || FractionError::Parse(s.to_owned());
        let mut parts = s.split('/');

        let num = parts
            .next()
            .ok_or_else(invalid)?
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid())?;
        let den = match parts.next() {
            Some(den) => den.trim().parse::<i64>().map_err(|_| invalid())?,
            None => 1,
        };
        if parts.next().is_some() {
            return Err(invalid());
        }

        Fraction::new(num, den)
    }
}

// Value equality, widened so the cross products cannot overflow
impl PartialEq<Fraction> for Fraction {
    fn eq(&self, rhs: &Fraction) -> bool {
        self.num as i128 * rhs.den as i128 == rhs.num as i128 * self.den as i128
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, rhs: &i64) -> bool {
        self.num as i128 == self.den as i128 * *rhs as i128
    }
}

impl Eq for Fraction {}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(num: i64, den: i64) -> Fraction {
        Fraction::new(num, den).unwrap()
    }

    #[test]
    fn test_fraction_arithmetic_unreduced() {
        let a = frac(3, 4);
        let b = frac(1, 2);

        let sum = a + b;
        assert_eq!((sum.num(), sum.den()), (10, 8));
        assert_eq!(sum.to_string(), "10/8");

        assert_eq!((a - b).to_string(), "2/8");
        assert_eq!((a * b).to_string(), "3/8");
        assert_eq!((a / b).unwrap().to_string(), "6/4");
    }

    #[test]
    fn test_fraction_equality() {
        assert_eq!(frac(10, 8), frac(5, 4));
        assert_eq!(frac(1, -2), frac(-1, 2));
        assert_ne!(frac(1, 2), frac(1, 3));
        assert_eq!(frac(6, 3), 2);
        assert_ne!(frac(7, 3), 2);
        assert_eq!(frac(i64::MAX, 2), frac(i64::MAX, 2));
    }

    #[test]
    fn test_fraction_reduced() {
        assert_eq!(frac(10, 8).reduced().unwrap().to_string(), "5/4");
        assert_eq!(frac(3, -6).reduced().unwrap().to_string(), "-1/2");
        assert_eq!(frac(-4, -8).reduced().unwrap().to_string(), "1/2");
        assert_eq!(frac(0, 5).reduced().unwrap().to_string(), "0/1");
        assert_eq!(frac(7, 1).reduced().unwrap().to_string(), "7/1");
    }

    #[test]
    fn test_fraction_reduced_extremes() {
        assert_eq!(frac(i64::MIN, -1).reduced(), Err(FractionError::Overflow));
        assert_eq!(frac(1, i64::MIN).reduced(), Err(FractionError::Overflow));
        assert_eq!(
            frac(i64::MIN, 2).reduced().unwrap().to_string(),
            format!("{}/1", i64::MIN / 2)
        );
        assert_eq!(frac(i64::MIN, i64::MIN).reduced().unwrap().to_string(), "1/1");
        assert_eq!(frac(i64::MAX, -1).reduced().unwrap().to_string(), format!("{}/1", -i64::MAX));
    }

    #[test]
    fn test_fraction_errors() {
        assert_eq!(Fraction::new(1, 0), Err(FractionError::ZeroDenominator));
        assert_eq!(frac(1, 2) / frac(0, 3), Err(FractionError::DivisionByZero));
    }

    #[test]
    fn test_fraction_from_str() {
        assert_eq!("3/4".parse::<Fraction>().unwrap().to_string(), "3/4");
        assert_eq!(" -12 / 8 ".parse::<Fraction>().unwrap().to_string(), "-12/8");
        assert_eq!("5".parse::<Fraction>().unwrap().to_string(), "5/1");

        assert_eq!(
            "1/0".parse::<Fraction>(),
            Err(FractionError::ZeroDenominator)
        );
        assert_eq!(
            "1/2/3".parse::<Fraction>(),
            Err(FractionError::Parse("1/2/3".into()))
        );
        assert_eq!(
            "a/2".parse::<Fraction>(),
            Err(FractionError::Parse("a/2".into()))
        );
    }

    #[test]
    fn test_fraction_zero_one() {
        assert!(Fraction::zero().is_zero());
        assert!(frac(0, 7).is_zero());
        assert_eq!(Fraction::one(), frac(4, 4));
        assert_eq!(frac(3, 4) + Fraction::zero(), frac(3, 4));
        assert_eq!(frac(3, 4) * Fraction::one(), frac(3, 4));
    }

    #[test]
    fn test_fraction_python_methods() {
        let a = frac(3, 4);
        let b = frac(1, 2);

        assert_eq!(a.__add__(&b).__str__(), "10/8");
        assert_eq!(a.__sub__(&b).__str__(), "2/8");
        assert_eq!(a.__mul__(&b).__str__(), "3/8");
        assert_eq!(a.__truediv__(&b).unwrap().__str__(), "6/4");
        assert!(a.__add__(&b).__eq__(&frac(5, 4)));
        assert_eq!(a.__repr__(), "Fraction(3, 4)");
    }
}
