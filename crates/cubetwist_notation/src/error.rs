use cubetwist_core::TwistError;
use thiserror::Error;

use crate::{Family, MAX_EXPANDED_TWISTS};

/// Error produced when inverting a node list.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum InvertError {
    /// Integer overflow
    ///
    /// This occurs when negating the minimum integer value.
    #[error("integer overflow")]
    IntegerOverflow,
}

/// Error produced when turning notation into twists or twists into notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Layer prefix names a layer the cube does not have
    #[error("layer {layer} is out of range for a cube with {layer_count} layers")]
    LayerOutOfRange {
        /// Layer number, counted from the face starting at 1.
        layer: u8,
        /// Layers along each axis.
        layer_count: u8,
    },
    /// Slice move on a cube without a single middle layer
    #[error("{family} needs a middle layer but a cube with {layer_count} layers has none")]
    NoMiddleLayer {
        /// Slice move family.
        family: Family,
        /// Layers along each axis.
        layer_count: u8,
    },
    /// Repeated groups expand to too many twists
    #[error("notation expands to more than {MAX_EXPANDED_TWISTS} twists")]
    TooManyTwists,
    /// Twist is not valid for the cube
    #[error(transparent)]
    InvalidTwist(#[from] TwistError),
    /// Group cannot be inverted
    #[error(transparent)]
    Invert(#[from] InvertError),
}

/// Error produced when parsing notation with [`str::parse()`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid notation: {}", .0.join("; "))]
pub struct ParseNotationError(pub Vec<String>);
