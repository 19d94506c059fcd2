#![allow(clippy::implicit_hasher)]

pub mod models;
pub mod seed;

pub use models::{
    Connections, NetworkSnapshot, RoadNetwork, Routes, ScoredRoute, Segment, SegmentView, Segments, Traffic,
    VehicleKind, VehicleWeights,
};
