//! Numerically stable log-domain primitives.
//!
//! Probabilities close to 0 or 1 lose all precision when complements are
//! taken as `1 - p` in linear space. Every log-domain scorer routes its
//! complements and additions through the helpers below instead.

use crate::element::Probability;

/// Returns `log(exp(a) + exp(b))` without overflow or underflow.
///
/// The larger argument is factored out, so the exponential is only ever taken
/// of a non-positive number. `-inf` is the additive identity: if either
/// argument is `-inf` the other is returned unchanged, and two `-inf`
/// arguments yield `-inf`.
///
/// # Examples
///
/// ```
/// use probphoc_core::arith::logsumexp;
///
/// let x = logsumexp(0.5f64.ln(), 0.25f64.ln());
/// assert!((x - 0.75f64.ln()).abs() < 1e-12);
/// assert_eq!(logsumexp(-3.0f64, f64::NEG_INFINITY), -3.0);
/// ```
#[inline]
pub fn logsumexp<T: Probability>(a: T, b: T) -> T {
    let (hi, lo) = if b > a { (b, a) } else { (a, b) };
    if lo == T::neg_infinity() {
        return hi;
    }
    hi + (lo - hi).exp().ln_1p()
}

/// Given `x = log(p)`, returns `log(1 - p)`.
///
/// Computed as `log(-expm1(x))`. When `-expm1(x)` is not strictly positive
/// (`p` is numerically 1, or the input lies above 0) the result is `-inf`.
///
/// # Examples
///
/// ```
/// use probphoc_core::arith::log_complement;
///
/// assert!((log_complement(0.9f64.ln()) - 0.1f64.ln()).abs() < 1e-12);
/// assert_eq!(log_complement(0.0f64), f64::NEG_INFINITY);
/// assert_eq!(log_complement(f64::NEG_INFINITY), 0.0);
/// ```
#[inline]
pub fn log_complement<T: Probability>(x: T) -> T {
    let q = -x.exp_m1();
    if q > T::zero() {
        q.ln()
    } else {
        T::neg_infinity()
    }
}

/// Log-probability that two independent Bernoulli draws agree.
///
/// `a` and `b` are log presence probabilities. Agreement is either both
/// present (`a + b`) or both absent (`log(1-p_a) + log(1-p_b)`), summed in
/// log space.
#[inline]
pub fn log_agreement<T: Probability>(a: T, b: T) -> T {
    let log_ph1 = a + b;
    let a0 = log_complement(a);
    let b0 = log_complement(b);
    let log_ph0 = if a0.is_finite() && b0.is_finite() {
        a0 + b0
    } else {
        T::neg_infinity()
    };
    logsumexp(log_ph0, log_ph1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_logsumexp_matches_naive() {
        for &(p, q) in &[(0.1, 0.2), (0.5, 0.5), (1e-3, 0.9), (0.7, 0.0001)] {
            let expected = f64::ln(p + q);
            let got = logsumexp(f64::ln(p), f64::ln(q));
            assert!((got - expected).abs() < EPS, "p={p} q={q}: {got} vs {expected}");
        }
    }

    #[test]
    fn test_logsumexp_is_symmetric() {
        assert_eq!(logsumexp(-1.0f64, -7.5), logsumexp(-7.5f64, -1.0));
    }

    #[test]
    fn test_logsumexp_no_overflow() {
        let got = logsumexp(1000.0f64, 1000.0);
        assert!((got - (1000.0 + 2f64.ln())).abs() < EPS);

        let got = logsumexp(-1000.0f64, -1000.0);
        assert!((got - (-1000.0 + 2f64.ln())).abs() < EPS);
    }

    #[test]
    fn test_logsumexp_neg_infinity() {
        assert_eq!(logsumexp(-0.25f64, f64::NEG_INFINITY), -0.25);
        assert_eq!(logsumexp(f64::NEG_INFINITY, -0.25f64), -0.25);
        assert_eq!(
            logsumexp(f64::NEG_INFINITY, f64::NEG_INFINITY),
            f64::NEG_INFINITY
        );
        assert_eq!(
            logsumexp(f32::NEG_INFINITY, f32::NEG_INFINITY),
            f32::NEG_INFINITY
        );
    }

    #[test]
    fn test_log_complement() {
        for &p in &[1e-9, 0.1, 0.5, 0.9, 0.999] {
            let got = log_complement(f64::ln(p));
            assert!((got - (1.0 - p).ln()).abs() < 1e-9, "p={p}");
        }
    }

    #[test]
    fn test_log_complement_near_zero_probability() {
        // 1 - 1e-300 is exactly 1 in f64, log(1) == 0
        let got = log_complement(f64::ln(1e-300));
        assert_eq!(got, 0.0);
    }

    #[test]
    fn test_log_complement_certain_presence() {
        assert_eq!(log_complement(0.0f64), f64::NEG_INFINITY);
        assert_eq!(log_complement(0.0f32), f32::NEG_INFINITY);
        // positive log-probabilities are outside [0, 1]
        assert_eq!(log_complement(0.5f64), f64::NEG_INFINITY);
    }

    #[test]
    fn test_log_agreement() {
        let got = log_agreement(0.9f64.ln(), 0.9f64.ln());
        assert!((got - 0.82f64.ln()).abs() < EPS);

        // both certain: agreement is certain
        assert_eq!(log_agreement(0.0f64, 0.0), 0.0);

        // one certain present, one certain absent: never agree
        assert_eq!(log_agreement(0.0f64, f64::NEG_INFINITY), f64::NEG_INFINITY);
    }
}
