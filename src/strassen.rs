use crate::error::MultiplyError;
use crate::matrix::{check_same_square, Matrix};

impl Matrix {
    /// Strassen's divide-and-conquer multiplication, O(n^log2(7)).
    ///
    /// The dimension must be 0, 1, or a power of two; odd sizes are rejected
    /// rather than padded. The result is elementwise identical to
    /// [`Matrix::multiply`] since the arithmetic stays in exact integers.
    pub fn strassen_multiply(&self, other: &Matrix) -> Result<Matrix, MultiplyError> {
        check_same_square(self, other)?;
        let n = self.rows;
        if n > 1 && !n.is_power_of_two() {
            return Err(MultiplyError::NotPowerOfTwo { n });
        }
        Ok(strassen(self, other))
    }
}

// Preconditions hold for every recursive call: a and b are square, equal-sized
// and of power-of-two dimension, so n/2 halves cleanly until n == 1.
fn strassen(a: &Matrix, b: &Matrix) -> Matrix {
    let n = a.rows;
    if n == 0 {
        return Matrix::with_dimensions(0, 0);
    }
    if n == 1 {
        let mut c = Matrix::with_dimensions(1, 1);
        c[0][0] = a[0][0].wrapping_mul(b[0][0]);
        return c;
    }
    let h = n / 2;

    let a11 = a.block(h, 0, 0);
    let a12 = a.block(h, 0, h);
    let a21 = a.block(h, h, 0);
    let a22 = a.block(h, h, h);
    let b11 = b.block(h, 0, 0);
    let b12 = b.block(h, 0, h);
    let b21 = b.block(h, h, 0);
    let b22 = b.block(h, h, h);

    let p = strassen(&(&a11 + &a22), &(&b11 + &b22));
    let q = strassen(&(&a21 + &a22), &b11);
    let r = strassen(&a11, &(&b12 - &b22));
    let s = strassen(&a22, &(&b21 - &b11));
    let t = strassen(&(&a11 + &a12), &b22);
    let u = strassen(&(&a21 - &a11), &(&b11 + &b12));
    let v = strassen(&(&a12 - &a22), &(&b21 + &b22));

    let c11 = &(&(&p + &s) - &t) + &v;
    let c12 = &r + &t;
    let c21 = &q + &s;
    let c22 = &(&(&p + &r) - &q) + &u;

    let mut c = Matrix::with_dimensions(n, n);
    c.write_block(&c11, 0, 0);
    c.write_block(&c12, 0, h);
    c.write_block(&c21, h, 0);
    c.write_block(&c22, h, h);
    c
}
