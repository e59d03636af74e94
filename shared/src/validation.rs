use validator::ValidationError;

use crate::catalog::Outcome;

/// How far the weight sum may drift from 1.0 before the catalog is
/// rejected. Loose enough that float-dust catalogs pass, which keeps the
/// sampler's cumulative-shortfall fallback reachable.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-4;

pub fn validate_outcomes(outcomes: &[Outcome]) -> Result<(), ValidationError> {
    if outcomes.is_empty() {
        let mut err = ValidationError::new("empty_catalog");
        err.message = Some("a wheel needs at least one sector".into());
        return Err(err);
    }

    for outcome in outcomes {
        if !(0.0..=1.0).contains(&outcome.weight) {
            let mut err = ValidationError::new("weight_out_of_range");
            err.message = Some(
                format!("sector '{}' has weight {}, expected [0, 1]", outcome.id, outcome.weight)
                    .into(),
            );
            return Err(err);
        }
    }

    let sum: f64 = outcomes.iter().map(|o| o.weight).sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        let mut err = ValidationError::new("weights_do_not_sum_to_one");
        err.message = Some(format!("sector weights sum to {sum}, expected 1.0").into());
        return Err(err);
    }

    if outcomes.iter().filter(|o| o.is_failure).count() > 1 {
        let mut err = ValidationError::new("multiple_failure_outcomes");
        err.message = Some("at most one sector may be marked as the failure sector".into());
        return Err(err);
    }

    Ok(())
}
