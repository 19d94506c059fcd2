use petgraph::algo::astar;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use serde::Serialize;
use std::collections::HashSet;
use std::time::{Duration, Instant};
use thiserror::Error;
use super::RoadNetwork;
use super::segments::Segments;

/// Weight of total path congestion in a route score
pub const CONGESTION_WEIGHT: f64 = 0.7;

/// Weight of path length (in segments) in a route score
pub const LENGTH_WEIGHT: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route search exceeded its time budget of {0:?}")]
    DeadlineExceeded(Duration),
}

/// The selected route together with the values it was ranked by
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRoute {
    pub segments: Vec<String>,
    pub congestion: u64,
    pub score: f64,
}

/// Extension trait for route selection on `RoadNetwork`
pub trait Routes {
    /// Best route between two segments by congestion-weighted score.
    /// `None` if either name is unregistered or no path connects them
    fn find_route(&self, start: &str, end: &str) -> Option<Vec<String>>;

    /// Same selection as `find_route`, keeping the route's congestion and score
    fn find_scored_route(&self, start: &str, end: &str) -> Option<ScoredRoute>;

    /// Same selection as `find_scored_route`, giving up once `budget` has elapsed
    fn find_route_within(&self, start: &str, end: &str, budget: Duration) -> Result<Option<ScoredRoute>, RouteError>;

    /// Every simple path from `start` to `end`, in depth-first discovery order
    fn enumerate_paths(&self, start: NodeIndex, end: NodeIndex) -> Vec<Vec<NodeIndex>>;

    /// Cheapest path where entering a segment costs `1 + congestion`
    fn weighted_shortest_path(&self, start: NodeIndex, end: NodeIndex) -> Option<Vec<NodeIndex>>;

    /// Sum of congestion over every segment of the path, endpoints included
    fn path_congestion(&self, path: &[NodeIndex]) -> u64;

    /// `0.7 * path congestion + 0.3 * path length`
    fn score_path(&self, path: &[NodeIndex]) -> f64;
}

#[derive(Debug, Clone, Copy)]
struct Deadline {
    at: Instant,
    budget: Duration,
}

impl Deadline {
    /// `None` when the budget reaches past what `Instant` can represent,
    /// which leaves the search unbounded
    fn after(budget: Duration) -> Option<Self> {
        Instant::now()
            .checked_add(budget)
            .map(|at| Self { at, budget })
    }

    fn check(self) -> Result<(), RouteError> {
        if Instant::now() >= self.at {
            Err(RouteError::DeadlineExceeded(self.budget))
        } else {
            Ok(())
        }
    }
}

/// One level of the depth-first walk: a segment on the current path and
/// the position of the next neighbor to try
struct Frame {
    node: NodeIndex,
    neighbors: Vec<NodeIndex>,
    next: usize,
}

impl Routes for RoadNetwork {
    fn find_route(&self, start: &str, end: &str) -> Option<Vec<String>> {
        self.find_scored_route(start, end).map(|route| route.segments)
    }

    fn find_scored_route(&self, start: &str, end: &str) -> Option<ScoredRoute> {
        // Without a deadline the search cannot fail
        self.select_route(start, end, None).ok().flatten()
    }

    fn find_route_within(&self, start: &str, end: &str, budget: Duration) -> Result<Option<ScoredRoute>, RouteError> {
        self.select_route(start, end, Deadline::after(budget))
    }

    fn enumerate_paths(&self, start: NodeIndex, end: NodeIndex) -> Vec<Vec<NodeIndex>> {
        self.collect_simple_paths(start, end, None).unwrap_or_default()
    }

    fn weighted_shortest_path(&self, start: NodeIndex, end: NodeIndex) -> Option<Vec<NodeIndex>> {
        if self.graph.node_weight(start).is_none() || self.graph.node_weight(end).is_none() {
            return None;
        }

        astar(
            &self.graph,
            start,
            |node| node == end,
            |edge| 1 + u64::from(self.segment_congestion(edge.target())),
            |_| 0_u64,
        )
        .map(|(_, path)| path)
    }

    fn path_congestion(&self, path: &[NodeIndex]) -> u64 {
        path.iter()
            .map(|&node| u64::from(self.segment_congestion(node)))
            .sum()
    }

    #[allow(clippy::cast_precision_loss)]
    fn score_path(&self, path: &[NodeIndex]) -> f64 {
        CONGESTION_WEIGHT * self.path_congestion(path) as f64 + LENGTH_WEIGHT * path.len() as f64
    }
}

impl RoadNetwork {
    fn select_route(&self, start: &str, end: &str, deadline: Option<Deadline>) -> Result<Option<ScoredRoute>, RouteError> {
        let (Some(start_idx), Some(end_idx)) = (self.get_segment_index(start), self.get_segment_index(end)) else {
            return Ok(None);
        };

        // Depth-first candidates come first so they win ties
        let mut candidates = self.collect_simple_paths(start_idx, end_idx, deadline)?;
        let enumerated = candidates.len();
        if let Some(shortest) = self.weighted_shortest_path(start_idx, end_idx) {
            candidates.push(shortest);
        }

        let mut best: Option<(f64, Vec<NodeIndex>)> = None;
        for candidate in candidates {
            let score = self.score_path(&candidate);
            log::trace!("Candidate {:?} scored {score:.2}", self.path_names(&candidate));
            match &best {
                Some((best_score, _)) if score >= *best_score => {}
                _ => best = Some((score, candidate)),
            }
        }

        let Some((score, path)) = best else {
            log::debug!("No route from {start} to {end}");
            return Ok(None);
        };

        log::debug!("Route {start} -> {end}: {enumerated} simple paths, best score {score:.2}");
        Ok(Some(ScoredRoute {
            congestion: self.path_congestion(&path),
            segments: self.path_names(&path),
            score,
        }))
    }

    fn collect_simple_paths(&self, start: NodeIndex, end: NodeIndex, deadline: Option<Deadline>) -> Result<Vec<Vec<NodeIndex>>, RouteError> {
        if self.graph.node_weight(start).is_none() || self.graph.node_weight(end).is_none() {
            return Ok(Vec::new());
        }
        if start == end {
            return Ok(vec![vec![start]]);
        }

        let mut paths = Vec::new();
        let mut path = vec![start];
        let mut on_path = HashSet::from([start]);
        let mut stack = vec![Frame {
            node: start,
            neighbors: self.neighbors_ordered(start),
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let next = frame.neighbors.get(frame.next).copied();
            frame.next += 1;

            let Some(neighbor) = next else {
                if let Some(done) = stack.pop() {
                    on_path.remove(&done.node);
                    path.pop();
                }
                continue;
            };

            if on_path.contains(&neighbor) {
                continue;
            }
            if let Some(deadline) = deadline {
                deadline.check()?;
            }

            if neighbor == end {
                let mut found = path.clone();
                found.push(end);
                paths.push(found);
                continue;
            }

            on_path.insert(neighbor);
            path.push(neighbor);
            stack.push(Frame {
                node: neighbor,
                neighbors: self.neighbors_ordered(neighbor),
                next: 0,
            });
        }

        Ok(paths)
    }

    fn path_names(&self, path: &[NodeIndex]) -> Vec<String> {
        path.iter()
            .filter_map(|&node| self.get_segment_name(node).map(ToString::to_string))
            .collect()
    }
}
