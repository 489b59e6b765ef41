use strum::VariantArray;

use crate::location::Location;

/// One orthogonal step on a square grid.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum SquareStep {
    /// Towards row 0.
    UP,
    /// Away from row 0.
    DOWN,
    /// Towards column 0.
    LEFT,
    /// Away from column 0.
    RIGHT,
}

impl SquareStep {
    /// The location one step away. May land outside the grid.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::UP => location.offset_by((0, -1)),
            Self::DOWN => location.offset_by((0, 1)),
            Self::LEFT => location.offset_by((-1, 0)),
            Self::RIGHT => location.offset_by((1, 0)),
        }
    }

    /// Directions which result in an index increase in a 2d array representation.
    /// Walking only these from every cell visits each adjacent pair once.
    pub fn forward_edge_directions() -> &'static [Self] {
        &[Self::RIGHT, Self::DOWN]
    }

    /// The direction a quarter turn clockwise from this one.
    pub fn turn_clockwise(&self) -> Self {
        match self {
            Self::UP => Self::RIGHT,
            Self::RIGHT => Self::DOWN,
            Self::DOWN => Self::LEFT,
            Self::LEFT => Self::UP,
        }
    }
}

/// All four orthogonal neighbours of `location`, paired with the step that reaches them.
pub fn neighbors_of(location: Location) -> impl Iterator<Item = (SquareStep, Location)> {
    SquareStep::VARIANTS.iter().map(move |dir| (*dir, dir.attempt_from(location)))
}
