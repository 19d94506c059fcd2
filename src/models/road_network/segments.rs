use petgraph::graph::NodeIndex;
use super::RoadNetwork;
use crate::models::segment::Segment;

/// Extension trait for segment registration and lookup on `RoadNetwork`
pub trait Segments {
    /// Register a segment if it doesn't exist, return its `NodeIndex`.
    /// Re-registering keeps the existing congestion and connections.
    fn register_segment(&mut self, name: &str) -> NodeIndex;

    /// Get `NodeIndex` by segment name
    fn get_segment_index(&self, name: &str) -> Option<NodeIndex>;

    /// Get segment by name
    fn get_segment(&self, name: &str) -> Option<&Segment>;

    /// Get segment name by `NodeIndex`
    fn get_segment_name(&self, index: NodeIndex) -> Option<&str>;

    /// Current congestion of a segment, zero for unknown indices
    fn segment_congestion(&self, index: NodeIndex) -> u32;

    /// Neighbors of a segment in the order they were connected
    fn neighbors_ordered(&self, index: NodeIndex) -> Vec<NodeIndex>;

    /// Neighbor names of a segment in the order they were connected
    fn neighbor_names(&self, name: &str) -> Vec<String>;
}

impl Segments for RoadNetwork {
    fn register_segment(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.segment_name_to_index.get(name) {
            index
        } else {
            let index = self.graph.add_node(Segment::new(name));
            self.segment_name_to_index.insert(name.to_string(), index);
            index
        }
    }

    fn get_segment_index(&self, name: &str) -> Option<NodeIndex> {
        self.segment_name_to_index.get(name).copied()
    }

    fn get_segment(&self, name: &str) -> Option<&Segment> {
        self.get_segment_index(name)
            .and_then(|index| self.graph.node_weight(index))
    }

    fn get_segment_name(&self, index: NodeIndex) -> Option<&str> {
        self.graph.node_weight(index).map(|segment| segment.name.as_str())
    }

    fn segment_congestion(&self, index: NodeIndex) -> u32 {
        self.graph.node_weight(index).map_or(0, |segment| segment.congestion)
    }

    fn neighbors_ordered(&self, index: NodeIndex) -> Vec<NodeIndex> {
        // petgraph yields the most recently added edge first
        let mut neighbors: Vec<NodeIndex> = self.graph.neighbors(index).collect();
        neighbors.reverse();
        neighbors
    }

    fn neighbor_names(&self, name: &str) -> Vec<String> {
        let Some(index) = self.get_segment_index(name) else {
            return Vec::new();
        };

        self.neighbors_ordered(index)
            .into_iter()
            .filter_map(|neighbor| self.get_segment_name(neighbor).map(ToString::to_string))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Connections, Traffic};

    #[test]
    fn test_new_network_is_empty() {
        let network = RoadNetwork::new();
        assert!(network.is_empty());
        assert!(network.segment_name_to_index.is_empty());
    }

    #[test]
    fn test_register_segment() {
        let mut network = RoadNetwork::new();
        let index = network.register_segment("Test Road");

        assert_eq!(network.segment_count(), 1);
        assert_eq!(network.get_segment_index("Test Road"), Some(index));
        assert_eq!(network.get_segment_name(index), Some("Test Road"));
        assert_eq!(network.get_segment("Test Road").expect("segment should exist").congestion, 0);
    }

    #[test]
    fn test_register_segment_is_idempotent() {
        let mut network = RoadNetwork::new();
        let first = network.register_segment("Road A");
        network.register_segment("Road B");
        network.connect_segments("Road A", "Road B");
        network.add_vehicle_to_segment("Road A", "Bus");

        let second = network.register_segment("Road A");

        assert_eq!(first, second);
        assert_eq!(network.segment_count(), 2);
        assert_eq!(network.get_segment("Road A").expect("segment should exist").congestion, 4);
        assert_eq!(network.neighbor_names("Road A"), vec!["Road B"]);
    }

    #[test]
    fn test_neighbors_keep_connection_order() {
        let mut network = RoadNetwork::new();
        for name in ["Hub", "North", "East", "South"] {
            network.register_segment(name);
        }
        network.connect_segments("Hub", "North");
        network.connect_segments("East", "Hub");
        network.connect_segments("Hub", "South");

        assert_eq!(network.neighbor_names("Hub"), vec!["North", "East", "South"]);
    }

    #[test]
    fn test_lookups_for_unknown_names() {
        let network = RoadNetwork::new();
        assert_eq!(network.get_segment_index("Nowhere"), None);
        assert!(network.get_segment("Nowhere").is_none());
        assert!(network.neighbor_names("Nowhere").is_empty());
        assert_eq!(network.segment_congestion(NodeIndex::new(7)), 0);
    }

    #[test]
    fn test_reregistering_keeps_registration_order() {
        let mut network = RoadNetwork::new();
        network.register_segment("C");
        network.register_segment("A");
        network.register_segment("B");
        network.register_segment("A");

        let names: Vec<&str> = network.segment_name_to_index.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }
}
