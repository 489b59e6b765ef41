//! Hiking trails on a topographic map.
//!
//! A trail starts at height 0, ends at height 9 and climbs exactly one unit
//! per orthogonal step. Cells that are not digits cannot be entered.

use std::collections::HashMap;

use itertools::Itertools;
use ndarray::Array2;
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::Bfs;
use tracing::debug;

use crate::error::ParseError;
use crate::grid::parse_grid;
use crate::location::Location;
use crate::shape::neighbors_of;

const TRAILHEAD: u8 = 0;
const SUMMIT: u8 = 9;

/// Heights plus the graph of legal uphill steps between them.
pub struct TopographicMap {
    heights: Array2<Option<u8>>,
    steps: DiGraphMap<Location, ()>,
}

impl TopographicMap {
    fn from_heights(heights: Array2<Option<u8>>) -> Self {
        let mut steps = DiGraphMap::with_capacity(heights.len(), heights.len() * 2);

        for (index, height) in heights.indexed_iter() {
            let Some(height) = *height else { continue };
            let location = Location::from(index);
            steps.add_node(location);

            for (_, neighbor) in neighbors_of(location) {
                if heights.get(neighbor.as_index()).copied().flatten() == Some(height + 1) {
                    steps.add_edge(location, neighbor, ());
                }
            }
        }

        Self { heights, steps }
    }

    /// `None` for impassable or out-of-bounds locations.
    pub fn height(&self, location: Location) -> Option<u8> {
        self.heights.get(location.as_index()).copied().flatten()
    }

    /// Every location at height 0, in row-major order.
    pub fn trailheads(&self) -> Vec<Location> {
        self.heights.indexed_iter()
            .filter(|(_, height)| **height == Some(TRAILHEAD))
            .map(|(index, _)| Location::from(index))
            .collect_vec()
    }

    /// Number of distinct summits reachable from `trailhead`.
    pub fn score(&self, trailhead: Location) -> usize {
        let mut bfs = Bfs::new(&self.steps, trailhead);
        let mut summits = 0;
        while let Some(location) = bfs.next(&self.steps) {
            if self.height(location) == Some(SUMMIT) {
                summits += 1;
            }
        }
        summits
    }

    /// Number of distinct trails from `trailhead` to any summit.
    pub fn rating(&self, trailhead: Location) -> u64 {
        self.trails_from(trailhead, &mut HashMap::new())
    }

    fn trails_from(&self, location: Location, memo: &mut HashMap<Location, u64>) -> u64 {
        if self.height(location) == Some(SUMMIT) {
            return 1;
        }
        if let Some(count) = memo.get(&location) {
            return *count;
        }

        let count = self.steps.neighbors(location)
            .map(|next| self.trails_from(next, memo))
            .sum();
        memo.insert(location, count);
        count
    }
}

/// Digits are heights; anything else is impassable.
pub fn parse(input: &str) -> Result<TopographicMap, ParseError> {
    let heights = parse_grid(input, |c| c.to_digit(10).map(|d| d as u8))?;
    let map = TopographicMap::from_heights(heights);
    debug!(cells = map.steps.node_count(), steps = map.steps.edge_count(), "built trail graph");
    Ok(map)
}

/// Sum of every trailhead's score.
pub fn total_score(map: &TopographicMap) -> usize {
    map.trailheads().into_iter().map(|head| map.score(head)).sum()
}

/// Sum of every trailhead's rating.
pub fn total_rating(map: &TopographicMap) -> u64 {
    map.trailheads().into_iter().map(|head| map.rating(head)).sum()
}
