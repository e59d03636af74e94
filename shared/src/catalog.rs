use serde::{Serialize, Deserialize};
use std::f64::consts::TAU;
use validator::ValidationError;

use crate::validation::validate_outcomes;

/// One sector of the wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Outcome {
    pub id: String,
    pub short_name: String,
    /// Probability of landing on this sector, in [0, 1]. All weights in a
    /// catalog must sum to 1.
    pub weight: f64,
    /// Marks the "no prize" sector. At most one per catalog.
    pub is_failure: bool,
}

impl Outcome {
    pub fn new(id: &str, short_name: &str, weight: f64) -> Self {
        Self {
            id: id.to_string(),
            short_name: short_name.to_string(),
            weight,
            is_failure: false,
        }
    }

    pub fn failure(id: &str, short_name: &str, weight: f64) -> Self {
        Self {
            id: id.to_string(),
            short_name: short_name.to_string(),
            weight,
            is_failure: true,
        }
    }
}

/// Ordered, immutable set of sectors. Index 0 sits at angle 0 and sectors
/// proceed clockwise. Validated once at construction; never mutated while
/// a spin is in flight.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Catalog {
    outcomes: Vec<Outcome>,
}

impl Catalog {
    pub fn new(outcomes: Vec<Outcome>) -> Result<Self, ValidationError> {
        validate_outcomes(&outcomes)?;
        Ok(Self { outcomes })
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Angular width of one sector, in radians.
    pub fn arc_size(&self) -> f64 {
        TAU / self.outcomes.len() as f64
    }

    pub fn get(&self, index: usize) -> Option<&Outcome> {
        self.outcomes.get(index)
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }
}

/// Result of a single spin. Produced fresh per spin, never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinResult {
    pub outcome: Outcome,
    pub index: usize,
}
