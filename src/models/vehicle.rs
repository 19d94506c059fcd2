use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleKind {
    Bike,
    Car,
    Bus,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 3] = [VehicleKind::Bike, VehicleKind::Car, VehicleKind::Bus];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleKind::Bike => "Bike",
            VehicleKind::Car => "Car",
            VehicleKind::Bus => "Bus",
        }
    }

    /// Congestion units a single vehicle of this kind adds to a segment
    #[must_use]
    pub fn default_weight(self) -> u32 {
        match self {
            VehicleKind::Bike => 1,
            VehicleKind::Car => 2,
            VehicleKind::Bus => 4,
        }
    }
}

/// Immutable lookup from vehicle kind name to congestion weight.
///
/// Kinds missing from the table weigh nothing, so adding or removing them
/// leaves congestion untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleWeights {
    table: IndexMap<String, u32>,
}

impl VehicleWeights {
    #[must_use]
    pub fn new(table: IndexMap<String, u32>) -> Self {
        Self { table }
    }

    #[must_use]
    pub fn weight(&self, kind: &str) -> u32 {
        self.table.get(kind).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn recognizes(&self, kind: &str) -> bool {
        self.table.contains_key(kind)
    }
}

impl Default for VehicleWeights {
    fn default() -> Self {
        Self::new(
            VehicleKind::ALL
                .into_iter()
                .map(|kind| (kind.as_str().to_string(), kind.default_weight()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = VehicleWeights::default();
        assert_eq!(weights.weight("Bike"), 1);
        assert_eq!(weights.weight("Car"), 2);
        assert_eq!(weights.weight("Bus"), 4);
    }

    #[test]
    fn test_unknown_kind_weighs_nothing() {
        let weights = VehicleWeights::default();
        assert_eq!(weights.weight("Tram"), 0);
        assert_eq!(weights.weight("car"), 0);
        assert!(!weights.recognizes("Tram"));
        assert!(weights.recognizes("Bus"));
    }

    #[test]
    fn test_custom_table() {
        let weights = VehicleWeights::new(IndexMap::from([("Truck".to_string(), 6)]));
        assert_eq!(weights.weight("Truck"), 6);
        assert_eq!(weights.weight("Car"), 0);
        assert!(!weights.recognizes("Bus"));
    }

    #[test]
    fn test_default_table_matches_kinds() {
        let weights = VehicleWeights::default();
        for kind in VehicleKind::ALL {
            assert_eq!(weights.weight(kind.as_str()), kind.default_weight());
        }
    }
}
