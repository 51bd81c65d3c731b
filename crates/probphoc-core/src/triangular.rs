//! Packed upper-triangular indexing.
//!
//! Unordered pairs `i < j` of `n` items are stored row-major with the
//! diagonal and the lower triangle skipped:
//!
//! ```text
//! n = 4:   (0,1) (0,2) (0,3) (1,2) (1,3) (2,3)
//! k:         0     1     2     3     4     5
//! ```

/// Number of unordered pairs of `n` items, `n(n-1)/2`.
#[inline]
pub fn packed_len(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Offset of the first pair `(i, i+1)` of row `i`.
#[inline]
pub fn row_start(i: usize, n: usize) -> usize {
    // i*(2n-i-1) is always even
    i * (2 * n - i - 1) / 2
}

/// Offset of pair `(i, j)`, requires `i < j < n`.
#[inline]
pub fn packed_index(i: usize, j: usize, n: usize) -> usize {
    debug_assert!(i < j && j < n, "pair ({i}, {j}) is not in the upper triangle of {n}");
    row_start(i, n) + (j - i - 1)
}

/// Inverse of [`packed_index`]: the pair stored at offset `k`.
///
/// Requires `k < packed_len(n)`. A floating point estimate of the row is
/// corrected with exact integer arithmetic, so the result is exact for any `n`.
pub fn pair_at(k: usize, n: usize) -> (usize, usize) {
    debug_assert!(k < packed_len(n), "offset {k} out of range for n = {n}");

    // row i is the largest with row_start(i) <= k
    let m = (2 * n - 1) as f64;
    let disc = (m * m - 8.0 * k as f64).max(0.0);
    let mut i = ((m - disc.sqrt()) / 2.0).floor().max(0.0) as usize;
    i = i.min(n.saturating_sub(2));
    while i > 0 && row_start(i, n) > k {
        i -= 1;
    }
    while i + 1 < n && row_start(i + 1, n) <= k {
        i += 1;
    }
    let j = k - row_start(i, n) + i + 1;
    (i, j)
}

/// Advances `(i, j)` to the next pair in packed order.
#[inline]
fn next_pair(i: &mut usize, j: &mut usize, n: usize) {
    *j += 1;
    if *j == n {
        *i += 1;
        *j = *i + 1;
    }
}

/// Iterator over pairs `(i, j)` starting at packed offset `start`.
#[derive(Debug, Clone)]
pub struct PairIter {
    i: usize,
    j: usize,
    n: usize,
    remaining: usize,
}

impl PairIter {
    /// Yields `count` pairs beginning at offset `start`.
    pub fn new(start: usize, count: usize, n: usize) -> Self {
        let remaining = count.min(packed_len(n).saturating_sub(start));
        let (i, j) = if remaining > 0 { pair_at(start, n) } else { (0, 1) };
        Self { i, j, n, remaining }
    }
}

impl Iterator for PairIter {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let pair = (self.i, self.j);
        self.remaining -= 1;
        if self.remaining > 0 {
            next_pair(&mut self.i, &mut self.j, self.n);
        }
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for PairIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_len() {
        assert_eq!(packed_len(0), 0);
        assert_eq!(packed_len(1), 0);
        assert_eq!(packed_len(2), 1);
        assert_eq!(packed_len(5), 10);
        assert_eq!(packed_len(1000), 499_500);
    }

    #[test]
    fn test_packed_index_endpoints() {
        assert_eq!(packed_index(0, 1, 5), 0);
        assert_eq!(packed_index(3, 4, 5), 9);
        assert_eq!(packed_index(1, 2, 5), 4);
    }

    #[test]
    fn test_packed_index_is_dense_and_ordered() {
        for n in 0..12 {
            let mut k = 0;
            for i in 0..n {
                for j in (i + 1)..n {
                    assert_eq!(packed_index(i, j, n), k);
                    k += 1;
                }
            }
            assert_eq!(k, packed_len(n));
        }
    }

    #[test]
    fn test_pair_at_inverts_packed_index() {
        for n in 2..40 {
            for k in 0..packed_len(n) {
                let (i, j) = pair_at(k, n);
                assert!(i < j && j < n, "n={n} k={k} -> ({i}, {j})");
                assert_eq!(packed_index(i, j, n), k);
            }
        }
    }

    #[test]
    fn test_pair_at_large_n() {
        let n = 100_003;
        let last = packed_len(n) - 1;
        assert_eq!(pair_at(last, n), (n - 2, n - 1));
        assert_eq!(pair_at(0, n), (0, 1));
        let k = packed_index(54_321, 99_999, n);
        assert_eq!(pair_at(k, n), (54_321, 99_999));
    }

    #[test]
    fn test_pair_iter() {
        let pairs: Vec<_> = PairIter::new(2, 3, 4).collect();
        assert_eq!(pairs, vec![(0, 3), (1, 2), (1, 3)]);

        // clipped at the end of the triangle
        let pairs: Vec<_> = PairIter::new(4, 10, 4).collect();
        assert_eq!(pairs, vec![(1, 3), (2, 3)]);

        assert_eq!(PairIter::new(0, 5, 1).count(), 0);
        assert_eq!(PairIter::new(0, 5, 0).count(), 0);
    }
}
