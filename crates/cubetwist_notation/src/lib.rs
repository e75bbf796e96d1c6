//! Move notation for the Rubik's Cube family of puzzles.
//!
//! Supports face turns (`R U F L D B`), wide turns (`Rw` or `r`), layer
//! prefixes (`2R`, `2-3R`, `3Rw`), middle slices (`M E S`), whole-cube
//! rotations (`x y z`), multipliers (`R2`, `R'`, `R2'`), groups (`(R U)2`),
//! commutators (`[R, U]`), conjugates (`[R: U]`), and pauses (`.`).
//!
//! ```
//! use cubetwist_notation::*;
//!
//! let nodes = parse_notation("[R, U]2").unwrap();
//! assert_eq!(nodes.to_string(), "[R, U]2");
//! assert_eq!(nodes.to_twists(3).unwrap().len(), 8);
//! ```

mod common;
mod error;
mod family;
mod layer;
mod nodes;
mod parse;
mod resolve;

pub use common::*;
pub use error::{InvertError, ParseNotationError, ResolveError};
pub use family::{CubeRotation, Family, Slice};
pub use layer::LayerPrefix;
pub use nodes::*;
pub use parse::ParseError;
pub use resolve::{MAX_EXPANDED_TWISTS, twist_to_notation, twists_to_notation};

/// Parses a string of move notation into a list of [`Node`]s.
///
/// Moves are separated by whitespace. Leading and trailing whitespace is
/// ignored.
pub fn parse_notation(s: &str) -> Result<NodeList, Vec<ParseError<'_>>> {
    use chumsky::Parser;

    parse::node_list().parse(s).into_result()
}

#[cfg(test)]
mod tests;
