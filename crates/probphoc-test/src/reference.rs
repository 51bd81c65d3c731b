//! Brute-force agreement reference.

/// Probability that independent realizations of `a` and `b` are identical.
///
/// Enumerates all `2^d` binary vectors `x` and sums `P_a(x) * P_b(x)`, so
/// it is exponential in `d` and only meant for `d <= 16`.
///
/// # Panics
///
/// Panics if the lengths differ or `d > 16`.
pub fn brute_force_agreement(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "vectors must have the same dimension");
    let d = a.len();
    assert!(d <= 16, "brute force over 2^{d} realizations is too slow");

    (0..1u32 << d)
        .map(|mask| {
            let (mut pa, mut pb) = (1.0, 1.0);
            for i in 0..d {
                if mask & (1 << i) != 0 {
                    pa *= a[i];
                    pb *= b[i];
                } else {
                    pa *= 1.0 - a[i];
                    pb *= 1.0 - b[i];
                }
            }
            pa * pb
        })
        .sum()
}
