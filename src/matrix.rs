use std::fmt;
use std::ops::{Add, Index, IndexMut, Sub};

use rand::Rng;

use crate::error::MultiplyError;

/// Row-major matrix of 32-bit signed integers. Arithmetic wraps on overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<i32>,
}

impl Matrix {
    pub fn new<T: IntoMatrix>(data: T) -> Self {
        data.into_matrix()
    }

    pub fn with_dimensions(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Matrix filled with values drawn uniformly from `[lo, hi)`.
    pub fn random(rows: usize, cols: usize, lo: i32, hi: i32) -> Self {
        let mut rng = rand::thread_rng();
        let data = (0..rows * cols).map(|_| rng.gen_range(lo..hi)).collect();
        Matrix { rows, cols, data }
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Matrix::with_dimensions(n, n);
        for i in 0..n {
            m[i][i] = 1;
        }
        m
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Copies the `size`x`size` block starting at `(row_off, col_off)` into a
    /// fresh matrix. The copy shares no storage with `self`.
    pub fn block(&self, size: usize, row_off: usize, col_off: usize) -> Matrix {
        assert!(row_off + size <= self.rows);
        assert!(col_off + size <= self.cols);
        let mut child = Matrix::with_dimensions(size, size);
        for i in 0..size {
            for j in 0..size {
                child[i][j] = self[row_off + i][col_off + j];
            }
        }
        child
    }

    /// Overwrites the block at `(row_off, col_off)` with `child`'s contents.
    /// The only operation in the crate that mutates an existing matrix.
    pub fn write_block(&mut self, child: &Matrix, row_off: usize, col_off: usize) {
        assert!(row_off + child.rows <= self.rows);
        assert!(col_off + child.cols <= self.cols);
        for i in 0..child.rows {
            for j in 0..child.cols {
                self[row_off + i][col_off + j] = child[i][j];
            }
        }
    }

    fn elementwise_op_new<F>(&self, other: &Matrix, op: F) -> Matrix
    where
        F: Fn(i32, i32) -> i32,
    {
        assert_eq!(self.rows, other.rows);
        assert_eq!(self.cols, other.cols);
        let mut data: Vec<i32> = vec![0; self.data.len()];

        for ((res, a), b) in data.iter_mut().zip(&self.data).zip(&other.data) {
            *res = op(*a, *b);
        }

        Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        }
    }
}

// Shape precondition shared by both multipliers, checked once at the public
// entry points.
pub(crate) fn check_same_square(a: &Matrix, b: &Matrix) -> Result<(), MultiplyError> {
    if !a.is_square() || !b.is_square() || a.rows != b.rows {
        return Err(MultiplyError::ShapeMismatch {
            left: (a.rows, a.cols),
            right: (b.rows, b.cols),
        });
    }
    Ok(())
}

pub trait IntoMatrix {
    fn into_matrix(self) -> Matrix;
}

impl IntoMatrix for Vec<Vec<i32>> {
    fn into_matrix(self) -> Matrix {
        let rows = self.len();
        let cols = if rows > 0 { self[0].len() } else { 0 };
        let data = self.into_iter().flatten().collect::<Vec<_>>();
        Matrix { rows, cols, data }
    }
}

impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, other: &Matrix) -> Matrix {
        self.elementwise_op_new(other, |a, b| a.wrapping_add(b))
    }
}

impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, other: &Matrix) -> Matrix {
        self.elementwise_op_new(other, |a, b| a.wrapping_sub(b))
    }
}

impl Index<usize> for Matrix {
    type Output = [i32];
    fn index(&self, row: usize) -> &Self::Output {
        let start = row * self.cols;
        let end = start + self.cols;
        &self.data[start..end]
    }
}

impl IndexMut<usize> for Matrix {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        let start = row * self.cols;
        let end = start + self.cols;
        &mut self.data[start..end]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self[i][j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
