//! Small matrices with hand-computed agreement scores.

/// Agreement of two linear probabilities on one dimension.
fn agree(p: f64, q: f64) -> f64 {
    p * q + (1.0 - p) * (1.0 - q)
}

/// 2 x 2 left operand of the cross fixture.
pub fn cross_left() -> Vec<f64> {
    vec![0.7, 0.4, 0.9, 0.6]
}

/// 3 x 2 right operand of the cross fixture.
pub fn cross_right() -> Vec<f64> {
    vec![0.5, 0.9, 0.8, 0.9, 0.1, 0.2]
}

/// Expected 2 x 3 linear cross scores for [`cross_left`] x [`cross_right`].
pub fn cross_expected() -> Vec<f64> {
    let left = cross_left();
    let right = cross_right();
    let mut out = Vec::with_capacity(6);
    for a in left.chunks(2) {
        for b in right.chunks(2) {
            out.push(agree(a[0], b[0]) * agree(a[1], b[1]));
        }
    }
    out
}

/// 3 x 2 input of the self fixture.
pub fn self_input() -> Vec<f64> {
    vec![0.7, 0.4, 0.9, 0.4, 0.5, 0.2]
}

/// Expected packed linear self scores for [`self_input`]: pairs (0,1) (0,2) (1,2).
pub fn self_expected() -> Vec<f64> {
    vec![
        (0.7 * 0.9 + 0.3 * 0.1) * (0.4 * 0.4 + 0.6 * 0.6),
        (0.7 * 0.5 + 0.3 * 0.5) * (0.4 * 0.2 + 0.6 * 0.8),
        (0.9 * 0.5 + 0.1 * 0.5) * (0.4 * 0.2 + 0.6 * 0.8),
    ]
}

/// Element-wise natural log.
pub fn to_log(values: &[f64]) -> Vec<f64> {
    values.iter().map(|v| v.ln()).collect()
}

/// Element-wise narrowing to `f32`.
pub fn to_f32(values: &[f64]) -> Vec<f32> {
    values.iter().map(|&v| v as f32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_expected_first_entry() {
        let e = cross_expected();
        let first = (0.7 * 0.5 + 0.3 * 0.5) * (0.4 * 0.9 + 0.6 * 0.1);
        assert!((e[0] - first).abs() < 1e-15);
        assert_eq!(e.len(), 6);
    }

    #[test]
    fn test_to_log() {
        assert_eq!(to_log(&[1.0]), vec![0.0]);
        assert_eq!(to_log(&[0.0]), vec![f64::NEG_INFINITY]);
    }
}
