use crate::error::MultiplyError;
use crate::matrix::{check_same_square, Matrix};

impl Matrix {
    /// Classical triple-loop multiplication, `C[i][j] = sum_k A[i][k] * B[k][j]`.
    /// O(n^3) time, O(n^2) output space. Inputs are left untouched.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MultiplyError> {
        check_same_square(self, other)?;
        let n = self.rows;
        let mut c = Matrix::with_dimensions(n, n);
        for i in 0..n {
            for j in 0..n {
                let mut acc = 0i32;
                for k in 0..n {
                    acc = acc.wrapping_add(self[i][k].wrapping_mul(other[k][j]));
                }
                c[i][j] = acc;
            }
        }
        Ok(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_square_operands() {
        let a = Matrix::with_dimensions(2, 3);
        let b = Matrix::with_dimensions(3, 2);
        assert_eq!(
            a.multiply(&b),
            Err(MultiplyError::ShapeMismatch {
                left: (2, 3),
                right: (3, 2),
            })
        );
    }

    #[test]
    fn rejects_unequal_square_operands() {
        let a = Matrix::with_dimensions(2, 2);
        let b = Matrix::with_dimensions(4, 4);
        assert!(matches!(
            a.multiply(&b),
            Err(MultiplyError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn accepts_non_power_of_two_sizes() {
        let a = Matrix::identity(3);
        let b = Matrix::new(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
        assert_eq!(a.multiply(&b).unwrap(), b);
    }

    #[test]
    fn empty_times_empty_is_empty() {
        let a = Matrix::with_dimensions(0, 0);
        let c = a.multiply(&a).unwrap();
        assert_eq!(c.rows, 0);
        assert_eq!(c.cols, 0);
    }
}
