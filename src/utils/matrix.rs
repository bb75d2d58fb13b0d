use num::Num;
use serde::{Deserialize, Serialize};

/// Row-major dense matrix
/// Cell type is generic over `N: Num + Copy` (u64 for raw counts, f64 for
/// derived weights). The DTM of a batch corpus is mostly filled, so a dense
/// layout wins over a sparse one here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseMatrix<N>
where
    N: Num + Copy,
{
    rows: usize,
    cols: usize,
    data: Vec<N>,
}

impl<N> DenseMatrix<N>
where
    N: Num + Copy,
{
    /// Zero-filled matrix of the given shape
    pub fn zeros(rows: usize, cols: usize) -> Self {
        DenseMatrix {
            rows,
            cols,
            data: vec![N::zero(); rows * cols],
        }
    }

    /// Build from a row-major data vector
    /// Panics if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<N>) -> Self {
        assert_eq!(
            data.len(),
            rows * cols,
            "data length {} does not match shape {}x{}",
            data.len(),
            rows,
            cols
        );
        DenseMatrix { rows, cols, data }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> N {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: N) {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col] = value;
    }

    /// One row as a slice
    #[inline]
    pub fn row(&self, row: usize) -> &[N] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Sum over one row
    #[inline]
    pub fn row_sum(&self, row: usize) -> N {
        self.row(row).iter().fold(N::zero(), |acc, &v| acc + v)
    }

    /// Iterate the cells of one column top to bottom
    pub fn col_iter(&self, col: usize) -> impl Iterator<Item = N> + '_ {
        (0..self.rows).map(move |row| self.get(row, col))
    }

    /// Sum over one column
    #[inline]
    pub fn col_sum(&self, col: usize) -> N {
        self.col_iter(col).fold(N::zero(), |acc, v| acc + v)
    }

    /// Elementwise conversion into a matrix of another cell type
    pub fn map<M, F>(&self, f: F) -> DenseMatrix<M>
    where
        M: Num + Copy,
        F: Fn(N) -> M,
    {
        DenseMatrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_has_requested_shape() {
        let m: DenseMatrix<u64> = DenseMatrix::zeros(2, 3);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.row(1), &[0, 0, 0]);
    }

    #[test]
    fn set_get_row_major() {
        let mut m: DenseMatrix<u64> = DenseMatrix::zeros(2, 2);
        m.set(0, 1, 7);
        m.set(1, 0, 3);
        assert_eq!(m.get(0, 1), 7);
        assert_eq!(m.row(0), &[0, 7]);
        assert_eq!(m.row(1), &[3, 0]);
    }

    #[test]
    fn row_and_col_sums() {
        let m = DenseMatrix::from_vec(2, 3, vec![1u64, 2, 3, 4, 5, 6]);
        assert_eq!(m.row_sum(0), 6);
        assert_eq!(m.row_sum(1), 15);
        assert_eq!(m.col_sum(0), 5);
        assert_eq!(m.col_sum(2), 9);
    }

    #[test]
    fn map_converts_cell_type() {
        let m = DenseMatrix::from_vec(1, 2, vec![2u64, 4]);
        let f = m.map(|v| v as f64 / 2.0);
        assert_eq!(f.row(0), &[1.0, 2.0]);
    }

    #[test]
    #[should_panic]
    fn from_vec_rejects_shape_mismatch() {
        let _ = DenseMatrix::from_vec(2, 2, vec![1u64, 2, 3]);
    }
}
