use validator::ValidationError;

use crate::catalog::{Catalog, Outcome};

/// One entry of the shipped prize table: the outcome fields the engine
/// needs plus the presentation fields the frontend draws with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prize {
    pub id: &'static str,
    pub short_name: &'static str,
    pub full_name: &'static str,
    pub image: Option<&'static str>,
    pub color: &'static str,
    pub text_color: &'static str,
    pub weight: f64,
    pub is_failure: bool,
}

/// Shipped catalog. Order determines angular position on the wheel;
/// weights sum to exactly 1.0.
pub const PRIZES: &[Prize] = &[
    Prize {
        id: "iphone17",
        short_name: "iPhone 17",
        full_name: "iPhone 17 Pro Max - 256GB",
        image: Some("assets/prizes/iphone17.png"),
        color: "#FFD700",
        text_color: "#000",
        weight: 0.1,
        is_failure: false,
    },
    Prize {
        id: "macbook",
        short_name: "Macbook",
        full_name: "Macbook Pro M3 - 14-inch",
        image: Some("assets/prizes/macbook.png"),
        color: "#FF6600",
        text_color: "#fff",
        weight: 0.05,
        is_failure: false,
    },
    Prize {
        id: "tv",
        short_name: "Smart TV",
        full_name: "Sony Bravia 55\" Smart LED TV",
        image: Some("assets/prizes/tv.png"),
        color: "#003087",
        text_color: "#fff",
        weight: 0.05,
        is_failure: false,
    },
    Prize {
        id: "washer",
        short_name: "Washer",
        full_name: "Samsung Front Load Washing Machine",
        image: Some("assets/prizes/washingmachine.png"),
        color: "#003087",
        text_color: "#fff",
        weight: 0.05,
        is_failure: false,
    },
    Prize {
        id: "iwatch",
        short_name: "iWatch",
        full_name: "Apple Watch Series 9 GPS",
        image: Some("assets/prizes/applewatch.png"),
        color: "#DC143C",
        text_color: "#fff",
        weight: 0.15,
        is_failure: false,
    },
    Prize {
        id: "tryagain",
        short_name: "Try Again",
        full_name: "Better luck next time!",
        image: None,
        color: "#555",
        text_color: "#fff",
        weight: 0.6,
        is_failure: true,
    },
];

pub fn prize_by_id(id: &str) -> Option<&'static Prize> {
    PRIZES.iter().find(|p| p.id == id)
}

/// Everything except the failure sector. Used by the social-proof feed.
pub fn winnable_prizes() -> impl Iterator<Item = &'static Prize> {
    PRIZES.iter().filter(|p| !p.is_failure)
}

impl Prize {
    pub fn to_outcome(&self) -> Outcome {
        Outcome {
            id: self.id.to_string(),
            short_name: self.short_name.to_string(),
            weight: self.weight,
            is_failure: self.is_failure,
        }
    }
}

/// Builds the shipped catalog. Callers decide what to do on failure; there
/// is no silent fallback inside the engine.
pub fn default_catalog() -> Result<Catalog, ValidationError> {
    Catalog::new(PRIZES.iter().map(Prize::to_outcome).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_catalog_is_valid() {
        let catalog = default_catalog().unwrap();
        assert_eq!(catalog.len(), 6);
        let weights: Vec<f64> = catalog.outcomes().iter().map(|o| o.weight).collect();
        assert_eq!(weights, vec![0.1, 0.05, 0.05, 0.05, 0.15, 0.6]);
    }

    #[test]
    fn exactly_one_failure_sector() {
        assert_eq!(PRIZES.iter().filter(|p| p.is_failure).count(), 1);
        assert_eq!(winnable_prizes().count(), 5);
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(prize_by_id("macbook").unwrap().short_name, "Macbook");
        assert!(prize_by_id("unknown").is_none());
    }
}
