#![warn(missing_docs)]

//! # `puzzles`
//!
//! Parsers and solvers for a handful of small, unrelated puzzles. Each module
//! stands alone: it turns the raw puzzle text into a plain data structure with
//! `parse`, then answers the two questions the puzzle asks with pure functions
//! over that structure.
//!
//! | module          | input                         | technique                          |
//! |-----------------|-------------------------------|------------------------------------|
//! | [`lists`]       | two columns of ids            | sorting, frequency counting        |
//! | [`calibration`] | `test: operands` equations    | exhaustive recursive search        |
//! | [`disk`]        | dense disk map                | greedy simulation over two heaps   |
//! | [`trails`]      | height grid                   | BFS and memoized path counting     |
//! | [`stones`]      | a row of numbers              | memoized recursion                 |
//! | [`garden`]      | plant grid                    | flood fill, corner counting        |
//! | [`claw`]        | button/prize blocks           | BFS, Cramer's rule                 |
//!
//! The two grid puzzles share the coordinate helpers in [`Location`] and [`shape`].
//! Every parser reports bad input through [`ParseError`]; answers too large for a `u64`
//! come back as [`Overflow`].

pub use error::{Overflow, ParseError};
pub use location::Location;

pub mod calibration;
pub mod claw;
pub mod disk;
pub(crate) mod error;
pub mod garden;
pub(crate) mod grid;
pub mod lists;
pub(crate) mod location;
pub mod shape;
pub mod stones;
pub mod trails;
