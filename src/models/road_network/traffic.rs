use super::RoadNetwork;

/// Extension trait for vehicle bookkeeping on `RoadNetwork`
pub trait Traffic {
    /// Add a vehicle to a segment. Returns the new congestion,
    /// or `None` (and changes nothing) if the segment is unregistered
    fn add_vehicle_to_segment(&mut self, name: &str, kind: &str) -> Option<u32>;

    /// Remove a vehicle from a segment, clamping congestion at zero.
    /// Returns the new congestion, or `None` if the segment is unregistered
    fn remove_vehicle_from_segment(&mut self, name: &str, kind: &str) -> Option<u32>;
}

impl Traffic for RoadNetwork {
    fn add_vehicle_to_segment(&mut self, name: &str, kind: &str) -> Option<u32> {
        let index = self.segment_name_to_index.get(name).copied()?;
        let segment = self.graph.node_weight_mut(index)?;
        let congestion = segment.add_vehicle(kind, &self.weights);
        log::debug!("Added {kind} to {name}, congestion now {congestion}");
        Some(congestion)
    }

    fn remove_vehicle_from_segment(&mut self, name: &str, kind: &str) -> Option<u32> {
        let index = self.segment_name_to_index.get(name).copied()?;
        let segment = self.graph.node_weight_mut(index)?;
        let congestion = segment.remove_vehicle(kind, &self.weights);
        log::debug!("Removed {kind} from {name}, congestion now {congestion}");
        Some(congestion)
    }
}
