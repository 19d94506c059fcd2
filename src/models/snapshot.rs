use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use super::road_network::{Connections, RoadNetwork, Segments};
use super::vehicle::VehicleWeights;

/// Read-only view of one segment: its congestion and neighbor names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentView {
    #[serde(default)]
    pub congestion: u32,
    #[serde(default)]
    pub connections: Vec<String>,
}

/// Segment views keyed by name, in registration order.
/// Serializes as `{name: {congestion, connections: [name...]}}`
pub type NetworkSnapshot = IndexMap<String, SegmentView>;

impl RoadNetwork {
    /// Snapshot of every segment's congestion and neighbor names
    #[must_use]
    pub fn export(&self) -> NetworkSnapshot {
        self.segment_name_to_index
            .iter()
            .map(|(name, &index)| {
                let view = SegmentView {
                    congestion: self.segment_congestion(index),
                    connections: self
                        .neighbors_ordered(index)
                        .into_iter()
                        .filter_map(|neighbor| self.get_segment_name(neighbor).map(ToString::to_string))
                        .collect(),
                };
                (name.clone(), view)
            })
            .collect()
    }

    /// Rebuild connectivity from a snapshot. Congestion values are ignored and
    /// connections naming segments outside the snapshot are skipped
    #[must_use]
    pub fn from_snapshot(snapshot: &NetworkSnapshot) -> Self {
        Self::from_snapshot_with_weights(snapshot, VehicleWeights::default())
    }

    #[must_use]
    pub fn from_snapshot_with_weights(snapshot: &NetworkSnapshot, weights: VehicleWeights) -> Self {
        let mut network = Self::with_weights(weights);

        for name in snapshot.keys() {
            network.register_segment(name);
        }
        for (name, view) in snapshot {
            for connection in &view.connections {
                network.connect_segments(name, connection);
            }
        }

        network
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Traffic;

    #[test]
    fn test_export_shape() {
        let mut network = RoadNetwork::new();
        network.register_segment("A");
        network.register_segment("B");
        network.connect_segments("A", "B");
        network.add_vehicle_to_segment("A", "Car");

        let json = serde_json::to_value(network.export()).expect("snapshot should serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "A": { "congestion": 2, "connections": ["B"] },
                "B": { "congestion": 0, "connections": ["A"] },
            })
        );
    }

    #[test]
    fn test_export_keeps_registration_order() {
        let mut network = RoadNetwork::new();
        for name in ["Zeta", "Alpha", "Mid"] {
            network.register_segment(name);
        }

        let snapshot = network.export();
        assert_eq!(snapshot.keys().map(String::as_str).collect::<Vec<_>>(), vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_snapshot_round_trip_preserves_connectivity() {
        let mut network = RoadNetwork::new();
        for name in ["A", "B", "C", "D"] {
            network.register_segment(name);
        }
        network.connect_segments("A", "B");
        network.connect_segments("B", "C");
        network.connect_segments("C", "A");
        network.connect_segments("D", "D");
        network.add_vehicle_to_segment("B", "Bus");

        let snapshot = network.export();
        let rebuilt = RoadNetwork::from_snapshot(&snapshot);
        let rebuilt_snapshot = rebuilt.export();

        for (name, view) in &snapshot {
            let rebuilt_view = rebuilt_snapshot.get(name).expect("segment should exist");
            let mut expected = view.connections.clone();
            let mut actual = rebuilt_view.connections.clone();
            expected.sort();
            actual.sort();
            assert_eq!(actual, expected);
            assert_eq!(rebuilt_view.congestion, 0);
        }
        assert_eq!(rebuilt.graph.edge_count(), network.graph.edge_count());
    }

    #[test]
    fn test_from_snapshot_skips_unknown_connections() {
        let snapshot: NetworkSnapshot = serde_json::from_str(
            r#"{ "A": { "connections": ["B", "Ghost"] }, "B": { "connections": [] } }"#,
        )
        .expect("snapshot should parse");

        let network = RoadNetwork::from_snapshot(&snapshot);
        assert_eq!(network.neighbor_names("A"), vec!["B"]);
        assert_eq!(network.neighbor_names("B"), vec!["A"]);
        assert!(network.get_segment("Ghost").is_none());
    }
}
