//! Fencing garden plots.
//!
//! A region is a maximal set of orthogonally connected plots growing the same
//! plant. Regions are found by flood-filling the graph that links every pair of
//! adjacent same-plant plots.

use std::collections::HashSet;

use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Bfs;
use strum::VariantArray;
use tracing::debug;

use crate::error::ParseError;
use crate::grid::parse_grid;
use crate::location::Location;
use crate::shape::{neighbors_of, SquareStep};

/// The plant growing on every plot.
pub struct Garden {
    plots: Array2<char>,
}

/// Measurements of one region.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Region {
    /// Plant grown throughout the region.
    pub plant: char,
    /// Plots in the region.
    pub plots: HashSet<Location>,
    /// Fence segments around (and inside) the region.
    pub perimeter: usize,
    /// Straight fence runs; equal to the number of corners.
    pub sides: usize,
}

impl Region {
    /// Number of plots.
    pub fn area(&self) -> usize {
        self.plots.len()
    }
}

impl Garden {
    fn plant_at(&self, location: Location) -> Option<char> {
        self.plots.get(location.as_index()).copied()
    }

    /// Every region, each measured once.
    pub fn regions(&self) -> Vec<Region> {
        let mut adjacency = UnGraphMap::with_capacity(self.plots.len(), self.plots.len() * 2);
        for (index, plant) in self.plots.indexed_iter() {
            let location = Location::from(index);
            adjacency.add_node(location);
            for step in SquareStep::forward_edge_directions() {
                let neighbor = step.attempt_from(location);
                if self.plant_at(neighbor) == Some(*plant) {
                    adjacency.add_edge(location, neighbor, ());
                }
            }
        }

        let mut visited = HashSet::with_capacity(self.plots.len());
        let mut regions = Vec::new();
        for (index, plant) in self.plots.indexed_iter() {
            let start = Location::from(index);
            if visited.contains(&start) {
                continue;
            }

            let mut plots = HashSet::new();
            let mut bfs = Bfs::new(&adjacency, start);
            while let Some(location) = bfs.next(&adjacency) {
                plots.insert(location);
            }
            visited.extend(plots.iter().copied());
            regions.push(self.measure(*plant, plots));
        }

        debug!(regions = regions.len(), "flood-filled garden");
        regions
    }

    fn measure(&self, plant: char, plots: HashSet<Location>) -> Region {
        let inside = |location: Location| self.plant_at(location) == Some(plant);
        let mut perimeter = 0;
        let mut sides = 0;

        for location in plots.iter().copied() {
            perimeter += neighbors_of(location).filter(|(_, neighbor)| !inside(*neighbor)).count();

            for step in SquareStep::VARIANTS {
                let turned = step.turn_clockwise();
                let ahead = step.attempt_from(location);
                let beside = turned.attempt_from(location);
                let diagonal = turned.attempt_from(ahead);

                // convex: both edges of the corner face out
                if !inside(ahead) && !inside(beside) {
                    sides += 1;
                }
                // concave: both edges face in but the diagonal is foreign
                if inside(ahead) && inside(beside) && !inside(diagonal) {
                    sides += 1;
                }
            }
        }

        Region { plant, plots, perimeter, sides }
    }
}

/// Any character is a plant; the grid must be rectangular.
pub fn parse(input: &str) -> Result<Garden, ParseError> {
    let plots = parse_grid(input, |c| c)?;
    debug!(rows = plots.nrows(), cols = plots.ncols(), "parsed garden");
    Ok(Garden { plots })
}

/// Σ area × perimeter.
pub fn fence_price(garden: &Garden) -> usize {
    garden.regions().iter().map(|region| region.area() * region.perimeter).sum()
}

/// Σ area × sides.
pub fn bulk_price(garden: &Garden) -> usize {
    garden.regions().iter().map(|region| region.area() * region.sides).sum()
}
