use rand::Rng;

use crate::catalog::{Catalog, SpinResult};

/// Walks the catalog accumulating weights and returns the first index whose
/// running sum exceeds `r`. Due to floating-point summation the cumulative
/// sum over all sectors may fall slightly short of 1; a draw above it lands
/// on the last sector rather than out of bounds.
pub fn select_index(catalog: &Catalog, r: f64) -> usize {
    let mut cumulative = 0.0;
    for (i, outcome) in catalog.outcomes().iter().enumerate() {
        cumulative += outcome.weight;
        if r < cumulative {
            return i;
        }
    }
    catalog.len() - 1
}

/// Draws one uniform value in [0, 1) from the supplied rng and selects the
/// winning sector. The rng is injected so spins are reproducible in tests.
pub fn select_outcome<R: Rng>(catalog: &Catalog, rng: &mut R) -> SpinResult {
    let r = rng.gen::<f64>();
    let index = select_index(catalog, r);
    SpinResult {
        // Index comes from select_index, always in bounds.
        outcome: catalog.outcomes()[index].clone(),
        index,
    }
}
