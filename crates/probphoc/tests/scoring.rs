//! End-to-end scoring through the name-keyed entry points.

use probphoc::prelude::*;
use probphoc::registry;
use probphoc_test::fixtures::{
    cross_expected, cross_left, cross_right, self_expected, self_input,
};
use probphoc_test::{brute_force_agreement, random_log_probabilities, to_f32, to_log};

fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len());
    for (k, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() <= tol, "index {k}: {a} vs {e}");
    }
}

// ============================================================================
// Shape laws
// ============================================================================

#[test]
fn test_cross_shape() {
    let a = random_log_probabilities(4, 7, 1);
    let b = random_log_probabilities(9, 7, 2);
    let scores = cphoc(
        "sum_prod_log",
        MatrixView::new(&a, 4, 7).unwrap(),
        MatrixView::new(&b, 9, 7).unwrap(),
    )
    .unwrap();
    assert_eq!(scores.shape(), (4, 9));
    assert_eq!(scores.as_slice().len(), 36);
}

#[test]
fn test_self_size_law() {
    let x = random_log_probabilities(5, 3, 3);
    let scores = pphoc("sum_prod_log", MatrixView::new(&x, 5, 3).unwrap()).unwrap();
    assert_eq!(scores.len(), 10);
    assert_eq!(scores.n(), 5);
}

#[test]
fn test_self_matches_cross_upper_triangle() {
    let data = random_log_probabilities(6, 4, 11);
    let x = MatrixView::new(&data, 6, 4).unwrap();
    for name in registry::names() {
        let full = cphoc(name, x, x).unwrap();
        let packed = pphoc(name, x).unwrap();
        for (i, j, score) in packed.iter_pairs() {
            assert_eq!(Some(score), full.get(i, j), "{name} at ({i}, {j})");
        }
    }
}

#[test]
fn test_empty_inputs() {
    let empty: [f64; 0] = [];
    let b = random_log_probabilities(3, 2, 5);
    let scores = cphoc(
        "sum_prod_log",
        MatrixView::new(&empty, 0, 2).unwrap(),
        MatrixView::new(&b, 3, 2).unwrap(),
    )
    .unwrap();
    assert_eq!(scores.shape(), (0, 3));

    let one = [0.0f64; 2];
    let scores = pphoc("sum_prod_log", MatrixView::new(&one, 1, 2).unwrap()).unwrap();
    assert!(scores.is_empty());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unknown_variant() {
    let data = [0.0f64; 4];
    let x = MatrixView::new(&data, 2, 2).unwrap();
    assert_eq!(
        pphoc("sum_prod", x).unwrap_err(),
        PhocError::UnknownVariant("sum_prod".to_string())
    );
    assert!(matches!(
        cphoc("", x, x).unwrap_err(),
        PhocError::UnknownVariant(_)
    ));
}

#[test]
fn test_column_mismatch() {
    let a = [0.0f64; 4];
    let b = [0.0f64; 6];
    let err = cphoc(
        "sum_prod_log",
        MatrixView::new(&a, 2, 2).unwrap(),
        MatrixView::new(&b, 2, 3).unwrap(),
    )
    .unwrap_err();
    assert!(matches!(err, PhocError::InvalidShape(_)));
}

// ============================================================================
// Values
// ============================================================================

#[test]
fn test_single_dimension_scenario() {
    let a = [0.9f64.ln()];
    let b = [0.9f64.ln()];
    let scores = cphoc(
        "sum_prod_log",
        MatrixView::new(&a, 1, 1).unwrap(),
        MatrixView::new(&b, 1, 1).unwrap(),
    )
    .unwrap();
    let score = *scores.get(0, 0).unwrap();
    assert!((score - 0.82f64.ln()).abs() < 1e-12);
    assert!((score - -0.1985).abs() < 1e-4);
}

#[test]
fn test_certain_agreement_is_exactly_zero() {
    let a = [0.0f64, 0.0];
    let b = [0.0f64, 0.0];
    let av = MatrixView::new(&a, 1, 2).unwrap();
    let bv = MatrixView::new(&b, 1, 2).unwrap();
    for name in ["sum_prod_log", "sum_min_log"] {
        assert_eq!(cphoc(name, av, bv).unwrap().get(0, 0), Some(&0.0), "{name}");
    }
}

#[test]
fn test_cross_fixture_log_and_real() {
    let left = cross_left();
    let right = cross_right();
    let expected = cross_expected();

    let real = cphoc(
        "sum_prod_real",
        MatrixView::new(&left, 2, 2).unwrap(),
        MatrixView::new(&right, 3, 2).unwrap(),
    )
    .unwrap();
    assert_close(real.as_slice(), &expected, 1e-12);

    let log_left = to_log(&left);
    let log_right = to_log(&right);
    let log = cphoc(
        "sum_prod_log",
        MatrixView::new(&log_left, 2, 2).unwrap(),
        MatrixView::new(&log_right, 3, 2).unwrap(),
    )
    .unwrap();
    assert_close(log.as_slice(), &to_log(&expected), 1e-12);
}

#[test]
fn test_self_fixture_f32() {
    let input = to_f32(&to_log(&self_input()));
    let scores = pphoc("sum_prod_log", MatrixView::new(&input, 3, 2).unwrap()).unwrap();
    let widened: Vec<f64> = scores.as_slice().iter().map(|&v| v as f64).collect();
    assert_close(&widened, &to_log(&self_expected()), 1e-5);
}

#[test]
fn test_matches_brute_force() {
    let data = random_log_probabilities(4, 8, 21);
    let scores = pphoc("sum_prod_log", MatrixView::new(&data, 4, 8).unwrap()).unwrap();
    for (i, j, &score) in scores.iter_pairs() {
        let a: Vec<f64> = data[i * 8..(i + 1) * 8].iter().map(|l| l.exp()).collect();
        let b: Vec<f64> = data[j * 8..(j + 1) * 8].iter().map(|l| l.exp()).collect();
        let expected = brute_force_agreement(&a, &b).ln();
        assert!((score - expected).abs() < 1e-10, "({i}, {j})");
    }
}

#[test]
fn test_min_reduction_dominates_sum() {
    let data = random_log_probabilities(5, 6, 8);
    let x = MatrixView::new(&data, 5, 6).unwrap();
    let sum = pphoc("sum_prod_log", x).unwrap();
    let min = pphoc("sum_min_log", x).unwrap();
    for (s, m) in sum.as_slice().iter().zip(min.as_slice()) {
        assert!(s <= m);
    }
}

#[test]
fn test_inputs_unchanged() {
    let data = random_log_probabilities(4, 3, 9);
    let before = data.clone();
    for name in registry::names() {
        pphoc(name, MatrixView::new(&data, 4, 3).unwrap()).unwrap();
    }
    assert_eq!(data, before);
}
