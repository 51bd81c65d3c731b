//! Name-to-scorer registry.
//!
//! The table is built on first use and never mutated afterwards, so lookups
//! from any number of threads need no coordination.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::semiring::Semiring;

static REGISTRY: OnceLock<HashMap<&'static str, Semiring>> = OnceLock::new();

fn table() -> &'static HashMap<&'static str, Semiring> {
    REGISTRY.get_or_init(|| Semiring::ALL.iter().map(|&s| (s.name(), s)).collect())
}

/// Looks up a scorer by its registry key.
///
/// Returns `None` for unrecognized names; callers turn that into
/// [`PhocError::UnknownVariant`](crate::PhocError::UnknownVariant).
///
/// # Examples
///
/// ```
/// use probphoc_core::{registry, Semiring};
///
/// assert_eq!(registry::lookup("sum_prod_log"), Some(Semiring::SumProdLog));
/// assert_eq!(registry::lookup("max_prod"), None);
/// ```
pub fn lookup(name: &str) -> Option<Semiring> {
    table().get(name).copied()
}

/// Returns all registry keys in a stable order.
pub fn names() -> impl Iterator<Item = &'static str> {
    Semiring::ALL.iter().map(|s| s.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_all_variants() {
        for variant in Semiring::ALL {
            assert_eq!(lookup(variant.name()), Some(variant));
        }
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(lookup(""), None);
        assert_eq!(lookup("SUM_PROD_LOG"), None);
        assert_eq!(lookup("sum_prod"), None);
    }

    #[test]
    fn test_names() {
        let names: Vec<_> = names().collect();
        assert_eq!(
            names,
            ["sum_prod_real", "sum_prod_log", "sum_min_log", "upper_bound_log"]
        );
    }

    #[test]
    fn test_concurrent_lookup() {
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..100 {
                        assert_eq!(lookup("sum_min_log"), Some(Semiring::SumMinLog));
                    }
                });
            }
        });
    }
}
