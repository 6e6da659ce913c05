use crate::error::MatrixError;

pub trait Matrix<T>
where
    Self: Sized,
{
    /// Matrix type produced by `inverse`, may widen the element type.
    type Inverse;

    fn from_list(lines: Vec<Vec<T>>) -> Result<Self, MatrixError>;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn identity(n: usize) -> Self;
    fn inverse(&self) -> Result<Self::Inverse, MatrixError>;
    fn transpose(&self) -> Self;
    fn at(&self, row: usize, col: usize) -> T;
}
