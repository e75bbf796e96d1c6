use thiserror::Error;

use crate::{LayerMaskUint, PartType};

/// Error produced by a malformed request to the twist engine.
///
/// These indicate a bug in the caller. The cube is never modified when one of
/// these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TwistError {
    /// Axis is not 0, 1, or 2.
    #[error("axis {0} out of range (expected 0, 1, or 2)")]
    AxisOutOfRange(u8),
    /// Layer mask has bits set beyond the layer count.
    #[error("layer mask {mask:#b} out of range for a cube with {layer_count} layers")]
    LayerMaskOutOfRange {
        /// Requested layer mask.
        mask: LayerMaskUint,
        /// Number of layers on each axis.
        layer_count: u8,
    },
    /// Angle is not in the range `-2..=2`.
    #[error("angle {0} out of range (expected -2..=2)")]
    AngleOutOfRange(i8),
    /// Part ID does not exist on this cube.
    #[error("part {part} out of range for a cube with {part_count} parts")]
    PartOutOfRange {
        /// Requested part.
        part: usize,
        /// Number of parts on the cube, including the center part.
        part_count: usize,
    },
    /// Orientation index does not exist for this part.
    #[error("orientation {orientation} out of range for {part_type} part")]
    OrientationOutOfRange {
        /// Requested orientation.
        orientation: u8,
        /// Type of the part.
        part_type: PartType,
    },
    /// Swipe direction is not in the range `0..4`.
    #[error("swipe direction {0} out of range (expected 0..4)")]
    DirectionOutOfRange(u8),
    /// The center part cannot be swiped or clicked.
    #[error("the center part has no associated twist")]
    CenterPart,
    /// Two cubes or states have different layer counts.
    #[error("layer count mismatch: expected {expected}, got {got}")]
    LayerCountMismatch {
        /// Layer count of the cube being modified.
        expected: u8,
        /// Layer count of the other cube or state.
        got: u8,
    },
    /// The variant has no elementary twist for a layer.
    #[error("no twist primitive for axis {axis}, layer {layer}")]
    MissingPrimitive {
        /// Twist axis.
        axis: u8,
        /// Layer index.
        layer: u8,
    },
}

/// Error produced when externally supplied data does not describe a legal
/// cube state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The variant has no sticker layout.
    #[error("cubes with {0} layers do not support sticker conversion")]
    StickersUnsupported(u8),
    /// Grid does not have 6 faces of `N*N` stickers each.
    #[error("sticker grid must have 6 faces with {stickers_per_face} stickers each")]
    WrongShape {
        /// Expected number of stickers on each face.
        stickers_per_face: usize,
    },
    /// Sticker value is not a face index.
    #[error("sticker {index} on face {face} has value {value} (expected 0..6)")]
    FaceletOutOfRange {
        /// Face index.
        face: usize,
        /// Sticker index on the face.
        index: usize,
        /// Sticker value.
        value: u8,
    },
    /// Two locations claim the same side part.
    #[error("side part {0} appears more than once")]
    DuplicateSide(usize),
    /// Two locations claim the same edge part.
    #[error("edge part {0} appears more than once")]
    DuplicateEdge(usize),
    /// Two locations claim the same corner part.
    #[error("corner part {0} appears more than once")]
    DuplicateCorner(usize),
    /// Stickers at an edge location match no edge part.
    #[error("stickers at edge location {0} match no edge part")]
    UnmatchedEdge(usize),
    /// Stickers at a corner location match no corner part.
    #[error("stickers at corner location {0} match no corner part")]
    UnmatchedCorner(usize),
    /// Location array is not a permutation.
    #[error("{0} locations are not a permutation")]
    NotAPermutation(PartType),
    /// Orientation value is out of range for its part type.
    #[error("{0} orientation out of range")]
    OrientationOutOfRange(PartType),
    /// Sum of corner orientations is not a multiple of 3.
    #[error("corner orientations do not sum to a multiple of 3")]
    CornerOrientation,
    /// Sum of edge orientations is not a multiple of 2.
    #[error("edge orientations do not sum to a multiple of 2")]
    EdgeOrientation,
    /// Permutation parities of corners, edges, and sides disagree.
    #[error("corner, edge, and side permutation parities disagree")]
    Parity,
}

/// Reason why a facelet grid is not a solvable 3x3x3 configuration.
///
/// See [`crate::validate()`] for the order in which these are checked.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FaceletError {
    /// A facelet has a marking that matches no center marking.
    #[error("facelet marking does not match any center marking")]
    InvalidMarker,
    /// Some marking does not appear exactly once per facelet on a face.
    #[error("there must be 9 facelets for each marking")]
    InvalidFaceletCount,
    /// Two centers have the same marking.
    #[error("duplicate center marking")]
    DuplicateCenterMarking,
    /// Facelets at a corner location match no corner.
    #[error("invalid corner markings")]
    InvalidCornerMarkings,
    /// Corner twists do not sum to a multiple of 3.
    #[error("invalid corner orientation parity")]
    InvalidCornerParity,
    /// Facelets at an edge location match no edge.
    #[error("invalid edge markings")]
    InvalidEdgeMarkings,
    /// Edge flips do not sum to a multiple of 2.
    #[error("invalid edge orientation parity")]
    InvalidEdgeParity,
    /// Corner and edge permutations have different parity.
    #[error("invalid total permutation parity")]
    InvalidTotalParity,
}

/// Either family of error produced by the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// Caller passed a malformed argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] TwistError),
    /// Caller passed data that does not describe a legal state.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),
}
