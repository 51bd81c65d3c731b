//! Row-major matrix views and score containers.
//!
//! Inputs are borrowed as [`MatrixView`]s over a dense buffer of `nrows * ncols`
//! elements. Cross scores come back as a dense [`ScoreMatrix`]; self scores as
//! a packed [`TriangularScores`] vector.

use crate::error::{PhocError, Result};
use crate::triangular::{packed_index, packed_len, PairIter};

/// A dense, row-major, read-only matrix of probability vectors.
///
/// Row `i` occupies `data[i * ncols..(i + 1) * ncols]`. The view never owns
/// or mutates its data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixView<'a, T> {
    data: &'a [T],
    nrows: usize,
    ncols: usize,
}

impl<'a, T> MatrixView<'a, T> {
    /// Wraps `data` as an `nrows x ncols` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`PhocError::InvalidShape`] if `data.len() != nrows * ncols`.
    pub fn new(data: &'a [T], nrows: usize, ncols: usize) -> Result<Self> {
        let expected = nrows.checked_mul(ncols).ok_or_else(|| {
            PhocError::InvalidShape(format!("{nrows} x {ncols} matrix overflows usize"))
        })?;
        if data.len() != expected {
            return Err(PhocError::InvalidShape(format!(
                "tried to view a slice of length {} as a {nrows} x {ncols} matrix",
                data.len()
            )));
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Wraps a host array described by its `shape` and element `strides`.
    ///
    /// The array must be rank 2 and laid out densely in row-major order,
    /// i.e. `strides == [ncols, 1]`. Strides of dimensions with extent 0 or 1
    /// are never used to address memory and are not checked.
    ///
    /// # Errors
    ///
    /// Returns [`PhocError::InvalidShape`] if the rank is not 2, the storage is
    /// not contiguous, or the buffer length disagrees with the shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use probphoc_core::MatrixView;
    ///
    /// let data = [0.1f32, 0.2, 0.3, 0.4, 0.5, 0.6];
    /// let view = MatrixView::from_strided(&data, &[2, 3], &[3, 1]).unwrap();
    /// assert_eq!(view.row(1), &[0.4, 0.5, 0.6]);
    ///
    /// // column-major storage is rejected
    /// assert!(MatrixView::from_strided(&data, &[2, 3], &[1, 2]).is_err());
    /// ```
    pub fn from_strided(data: &'a [T], shape: &[usize], strides: &[usize]) -> Result<Self> {
        if shape.len() != 2 || strides.len() != 2 {
            return Err(PhocError::InvalidShape(format!(
                "input must be a matrix, got rank {}",
                shape.len()
            )));
        }
        let (nrows, ncols) = (shape[0], shape[1]);
        let col_ok = ncols <= 1 || strides[1] == 1;
        let row_ok = nrows <= 1 || strides[0] == ncols;
        if !(col_ok && row_ok) {
            return Err(PhocError::InvalidShape(format!(
                "input matrix must be contiguous, got strides {strides:?} for shape {shape:?}"
            )));
        }
        Self::new(data, nrows, ncols)
    }

    /// Number of rows (vectors).
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns (dimension `d`).
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Returns `(nrows, ncols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// The underlying dense buffer.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Returns row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.nrows()`.
    #[inline]
    pub fn row(&self, i: usize) -> &'a [T] {
        assert!(
            i < self.nrows,
            "tried to access row {i} of a matrix with {} rows",
            self.nrows
        );
        let start = i * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// Iterates rows in order. Yields `nrows` rows even when `ncols == 0`.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &'a [T]> + '_ {
        (0..self.nrows).map(move |i| self.row(i))
    }
}

/// Dense `na x nb` cross scores, entry `(i, j)` at offset `i * nb + j`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

impl<T> ScoreMatrix<T> {
    /// Wraps a dense buffer of `nrows * ncols` scores.
    ///
    /// # Errors
    ///
    /// Returns [`PhocError::AllocationInvariantViolation`] if the length does
    /// not match; only buffer-handling code can get this wrong.
    pub fn from_vec(data: Vec<T>, nrows: usize, ncols: usize) -> Result<Self> {
        if Some(data.len()) != nrows.checked_mul(ncols) {
            return Err(PhocError::AllocationInvariantViolation(format!(
                "score buffer of length {} cannot hold {nrows} x {ncols} scores",
                data.len()
            )));
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Returns `(na, nb)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Returns the score of `(i, j)`, or `None` if out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i < self.nrows && j < self.ncols {
            self.data.get(i * self.ncols + j)
        } else {
            None
        }
    }

    /// Scores of row `i` against every column vector.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.nrows()`.
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.nrows, "row {i} out of range for {} rows", self.nrows);
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

/// Packed self scores for every unordered pair `i < j` of `n` vectors.
///
/// See [`crate::triangular`] for the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangularScores<T> {
    data: Vec<T>,
    n: usize,
}

impl<T> TriangularScores<T> {
    /// Wraps a packed buffer of `n(n-1)/2` scores.
    ///
    /// # Errors
    ///
    /// Returns [`PhocError::AllocationInvariantViolation`] if the length does
    /// not match.
    pub fn from_vec(data: Vec<T>, n: usize) -> Result<Self> {
        if data.len() != packed_len(n) {
            return Err(PhocError::AllocationInvariantViolation(format!(
                "packed buffer of length {} cannot hold the {} pairs of {n} vectors",
                data.len(),
                packed_len(n)
            )));
        }
        Ok(Self { data, n })
    }

    /// Number of scored vectors.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Score of the unordered pair `{i, j}`.
    ///
    /// Symmetric in its arguments. Returns `None` for `i == j` (self pairs are
    /// not stored) or indices out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        if lo == hi || hi >= self.n {
            return None;
        }
        self.data.get(packed_index(lo, hi, self.n))
    }

    /// Iterates `(i, j, score)` in packed order.
    pub fn iter_pairs(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        PairIter::new(0, self.data.len(), self.n)
            .zip(&self.data)
            .map(|((i, j), s)| (i, j, s))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_new() {
        let data = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
        let view = MatrixView::new(&data, 3, 2).unwrap();
        assert_eq!(view.shape(), (3, 2));
        assert_eq!(view.row(2), &[5.0, 6.0]);
        assert_eq!(view.rows().count(), 3);
    }

    #[test]
    fn test_view_length_mismatch() {
        let data = [1.0f64; 5];
        let err = MatrixView::new(&data, 2, 3).unwrap_err();
        assert!(matches!(err, PhocError::InvalidShape(_)));
    }

    #[test]
    fn test_view_zero_columns() {
        let data: [f32; 0] = [];
        let view = MatrixView::new(&data, 4, 0).unwrap();
        assert_eq!(view.rows().count(), 4);
        assert!(view.row(3).is_empty());
    }

    #[test]
    #[should_panic(expected = "tried to access row 2")]
    fn test_view_row_out_of_range() {
        let data = [0.0f64; 4];
        let view = MatrixView::new(&data, 2, 2).unwrap();
        let _ = view.row(2);
    }

    #[test]
    fn test_from_strided_rank() {
        let data = [0.0f64; 8];
        let err = MatrixView::from_strided(&data, &[2, 2, 2], &[4, 2, 1]).unwrap_err();
        assert!(matches!(err, PhocError::InvalidShape(_)));
        assert!(MatrixView::from_strided(&data, &[8], &[1]).is_err());
    }

    #[test]
    fn test_from_strided_gapped_rows() {
        // rows padded to 4 elements
        let data = [0.0f64; 8];
        let err = MatrixView::from_strided(&data, &[2, 3], &[4, 1]).unwrap_err();
        assert!(matches!(err, PhocError::InvalidShape(_)));
    }

    #[test]
    fn test_from_strided_degenerate_strides() {
        let data = [0.5f64, 0.25, 0.125];
        // a single row may carry any row stride
        let view = MatrixView::from_strided(&data, &[1, 3], &[99, 1]).unwrap();
        assert_eq!(view.row(0), &data);
    }

    #[test]
    fn test_score_matrix() {
        let m = ScoreMatrix::from_vec(vec![1, 2, 3, 4, 5, 6], 2, 3).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.get(1, 0), Some(&4));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
        assert_eq!(m.row(0), &[1, 2, 3]);

        let err = ScoreMatrix::from_vec(vec![1, 2, 3], 2, 2).unwrap_err();
        assert!(matches!(err, PhocError::AllocationInvariantViolation(_)));
    }

    #[test]
    fn test_triangular_scores() {
        // pairs of 4: (0,1) (0,2) (0,3) (1,2) (1,3) (2,3)
        let t = TriangularScores::from_vec(vec![1, 2, 3, 12, 13, 23], 4).unwrap();
        assert_eq!(t.len(), 6);
        assert_eq!(t.get(1, 3), Some(&13));
        assert_eq!(t.get(3, 1), Some(&13));
        assert_eq!(t.get(2, 2), None);
        assert_eq!(t.get(0, 4), None);

        let pairs: Vec<_> = t.iter_pairs().map(|(i, j, &s)| (i, j, s)).collect();
        assert_eq!(pairs[0], (0, 1, 1));
        assert_eq!(pairs[5], (2, 3, 23));

        assert!(TriangularScores::from_vec(vec![0; 5], 4).is_err());
        assert!(TriangularScores::<f32>::from_vec(Vec::new(), 1).unwrap().is_empty());
    }
}
