//! Pair scorers (semirings) for probabilistic PHOC agreement
//!
//! Four combination rules ship, all pure functions of two rows:
//!
//! | Key | Domain | Reduction |
//! |---|---|---|
//! | `sum_prod_real` | linear | product of per-dimension agreement |
//! | `sum_prod_log` | log | sum of per-dimension log agreement |
//! | `sum_min_log` | log | minimum per-dimension log agreement |
//! | `upper_bound_log` | log | single-pass bound on the joint log agreement |

mod sum_min_log;
mod sum_prod_log;
mod sum_prod_real;
mod traits;
mod upper_bound_log;


use std::fmt;
use std::str::FromStr;

pub use sum_min_log::SumMinLog;
pub use sum_prod_log::SumProdLog;
pub use sum_prod_real::SumProdReal;
pub use traits::{PairScorer, ScorerVisitor};
pub use upper_bound_log::UpperBoundLog;

use crate::element::Probability;
use crate::error::PhocError;

/// Closed set of shipped pair scorers.
///
/// Selecting a `Semiring` happens once per batch call; [`dispatch`](Self::dispatch)
/// then hands the concrete scorer type to the batch loop so no per-pair
/// branching on the variant remains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Semiring {
    /// Linear probabilities, product of per-dimension agreement.
    SumProdReal,

    /// Log probabilities, exact log of the joint agreement.
    #[default]
    SumProdLog,

    /// Log probabilities, worst single dimension.
    SumMinLog,

    /// Log probabilities, single-pass bound.
    UpperBoundLog,
}

impl Semiring {
    /// Every shipped variant, in registry order.
    pub const ALL: [Semiring; 4] = [
        Semiring::SumProdReal,
        Semiring::SumProdLog,
        Semiring::SumMinLog,
        Semiring::UpperBoundLog,
    ];

    /// Returns the registry key.
    pub fn name(self) -> &'static str {
        match self {
            Semiring::SumProdReal => "sum_prod_real",
            Semiring::SumProdLog => "sum_prod_log",
            Semiring::SumMinLog => "sum_min_log",
            Semiring::UpperBoundLog => "upper_bound_log",
        }
    }

    /// Returns true if inputs and outputs are log probabilities.
    pub fn is_log_domain(self) -> bool {
        !matches!(self, Semiring::SumProdReal)
    }

    /// Score of two empty vectors: `1` in linear space, `0` in log space.
    pub fn identity<T: Probability>(self) -> T {
        if self.is_log_domain() {
            T::zero()
        } else {
            T::one()
        }
    }

    /// Calls `visitor` with the concrete scorer for this variant.
    pub fn dispatch<T, V>(self, visitor: V) -> V::Output
    where
        T: Probability,
        V: ScorerVisitor<T>,
    {
        match self {
            Semiring::SumProdReal => visitor.visit(SumProdReal),
            Semiring::SumProdLog => visitor.visit(SumProdLog),
            Semiring::SumMinLog => visitor.visit(SumMinLog),
            Semiring::UpperBoundLog => visitor.visit(UpperBoundLog),
        }
    }

    /// Scores a single pair of rows.
    ///
    /// # Errors
    ///
    /// Returns [`PhocError::InvalidShape`] if the rows differ in length.
    ///
    /// # Examples
    ///
    /// ```
    /// use probphoc_core::Semiring;
    ///
    /// let a = [0.9f64.ln()];
    /// let score = Semiring::SumProdLog.score_pair(&a, &a).unwrap();
    /// assert!((score - 0.82f64.ln()).abs() < 1e-12);
    /// ```
    pub fn score_pair<T: Probability>(self, a: &[T], b: &[T]) -> crate::Result<T> {
        if a.len() != b.len() {
            return Err(PhocError::InvalidShape(format!(
                "rows must have the same length, got {} and {}",
                a.len(),
                b.len()
            )));
        }
        Ok(self.dispatch::<T, _>(SinglePair { a, b }))
    }
}

struct SinglePair<'a, T> {
    a: &'a [T],
    b: &'a [T],
}

impl<T: Probability> ScorerVisitor<T> for SinglePair<'_, T> {
    type Output = T;

    fn visit<S: PairScorer<T>>(self, scorer: S) -> T {
        scorer.score(self.a, self.b)
    }
}

impl fmt::Display for Semiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Semiring {
    type Err = PhocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::registry::lookup(s).ok_or_else(|| PhocError::UnknownVariant(s.to_string()))
    }
}
