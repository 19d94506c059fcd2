use petgraph::graph::NodeIndex;
use super::RoadNetwork;

/// Extension trait for connecting segments on `RoadNetwork`
pub trait Connections {
    /// Add the half-edge `from -> to` unless it already exists.
    /// Returns true if a new half-edge was added
    fn add_connection(&mut self, from: NodeIndex, to: NodeIndex) -> bool;

    /// Connect two segments in both directions.
    /// Does nothing and returns false if either name is unregistered
    fn connect_segments(&mut self, name_a: &str, name_b: &str) -> bool;

    /// Whether `name_b` is in the neighbor list of `name_a`
    fn are_connected(&self, name_a: &str, name_b: &str) -> bool;
}

impl Connections for RoadNetwork {
    fn add_connection(&mut self, from: NodeIndex, to: NodeIndex) -> bool {
        if self.graph.find_edge(from, to).is_some() {
            return false;
        }
        self.graph.add_edge(from, to, ());
        true
    }

    fn connect_segments(&mut self, name_a: &str, name_b: &str) -> bool {
        let (Some(a), Some(b)) = (
            self.segment_name_to_index.get(name_a).copied(),
            self.segment_name_to_index.get(name_b).copied(),
        ) else {
            log::debug!("Ignoring connection {name_a} <-> {name_b}: unregistered segment");
            return false;
        };

        self.add_connection(a, b);
        self.add_connection(b, a);
        true
    }

    fn are_connected(&self, name_a: &str, name_b: &str) -> bool {
        let (Some(a), Some(b)) = (
            self.segment_name_to_index.get(name_a),
            self.segment_name_to_index.get(name_b),
        ) else {
            return false;
        };
        self.graph.find_edge(*a, *b).is_some()
    }
}
