use indexmap::IndexMap;
use petgraph::graph::{DiGraph, NodeIndex};
use super::segment::Segment;
use super::vehicle::VehicleWeights;

mod connections;
mod routes;
mod segments;
mod traffic;

pub use connections::Connections;
pub use routes::{RouteError, Routes, ScoredRoute, CONGESTION_WEIGHT, LENGTH_WEIGHT};
pub use segments::Segments;
pub use traffic::Traffic;

/// Road graph that owns every `Segment`.
///
/// Each road connection is stored as a pair of directed half-edges, one per
/// direction (a single edge for a self-connection), so the outgoing edges of
/// a node are exactly its neighbor list.
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    pub graph: DiGraph<Segment, ()>,
    pub segment_name_to_index: IndexMap<String, NodeIndex>,
    pub weights: VehicleWeights,
}

impl RoadNetwork {
    #[must_use]
    pub fn new() -> Self {
        Self::with_weights(VehicleWeights::default())
    }

    #[must_use]
    pub fn with_weights(weights: VehicleWeights) -> Self {
        Self {
            graph: DiGraph::new(),
            segment_name_to_index: IndexMap::new(),
            weights,
        }
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}

impl Default for RoadNetwork {
    fn default() -> Self {
        Self::new()
    }
}
