mod road_network;
mod segment;
mod snapshot;
mod vehicle;

pub use road_network::{
    Connections, RoadNetwork, RouteError, Routes, ScoredRoute, Segments, Traffic, CONGESTION_WEIGHT,
    LENGTH_WEIGHT,
};
pub use segment::Segment;
pub use snapshot::{NetworkSnapshot, SegmentView};
pub use vehicle::{VehicleKind, VehicleWeights};
