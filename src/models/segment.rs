use serde::{Deserialize, Serialize};
use super::vehicle::VehicleWeights;

/// A named road segment and the congestion currently on it.
///
/// Adjacency is not stored here: neighbors are edges of the owning
/// `RoadNetwork` graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,
    pub congestion: u32,
}

impl Segment {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            congestion: 0,
        }
    }

    /// Add one vehicle of `kind`, returning the new congestion
    pub fn add_vehicle(&mut self, kind: &str, weights: &VehicleWeights) -> u32 {
        self.congestion = self.congestion.saturating_add(weights.weight(kind));
        self.congestion
    }

    /// Remove one vehicle of `kind`, clamping at zero. Returns the new congestion
    pub fn remove_vehicle(&mut self, kind: &str, weights: &VehicleWeights) -> u32 {
        self.congestion = self.congestion.saturating_sub(weights.weight(kind));
        self.congestion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_segment() {
        let segment = Segment::new("Test Road");
        assert_eq!(segment.name, "Test Road");
        assert_eq!(segment.congestion, 0);
    }

    #[test]
    fn test_add_vehicle_accumulates() {
        let weights = VehicleWeights::default();
        let mut segment = Segment::new("Test Road");

        assert_eq!(segment.add_vehicle("Bike", &weights), 1);
        assert_eq!(segment.add_vehicle("Car", &weights), 3);
        assert_eq!(segment.add_vehicle("Bus", &weights), 7);

        assert_eq!(segment.remove_vehicle("Car", &weights), 5);
    }

    #[test]
    fn test_congestion_never_negative() {
        let weights = VehicleWeights::default();
        let mut segment = Segment::new("Test Road");

        segment.remove_vehicle("Car", &weights);
        assert_eq!(segment.congestion, 0);

        segment.add_vehicle("Bike", &weights);
        segment.remove_vehicle("Bus", &weights);
        assert_eq!(segment.congestion, 0);
    }

    #[test]
    fn test_unknown_vehicle_is_noop() {
        let weights = VehicleWeights::default();
        let mut segment = Segment::new("Test Road");

        segment.add_vehicle("InvalidType", &weights);
        assert_eq!(segment.congestion, 0);

        segment.add_vehicle("Car", &weights);
        segment.remove_vehicle("InvalidType", &weights);
        assert_eq!(segment.congestion, 2);
    }
}
