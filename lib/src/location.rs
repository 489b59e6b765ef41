use ndarray::Ix;

/// One grid coordinate, a column or a row counted from 0.
pub(crate) type Coord = usize;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(x, y)` on a grid. The top left corner is `Location(0, 0)`.
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// Row-major index into an [`ndarray::Array2`].
    pub fn as_index(&self) -> (Ix, Ix) {
        (self.1, self.0)
    }

    /// Steps off the top or left edge wrap around to huge coordinates, which
    /// every bounds-checked lookup then rejects.
    pub fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}
