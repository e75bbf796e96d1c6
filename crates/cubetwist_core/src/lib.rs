//! Permutation and twist engine for the Rubik's Cube family of puzzles.
//!
//! A [`Cube`] tracks the location and orientation of every corner, edge, and
//! side part of a puzzle. Twists are specified as an axis, a layer mask, and a
//! signed quarter-turn count, and are realized by repeating a fixed set of
//! elementary four-cycle primitives that each puzzle variant tabulates once.
//!
//! On top of the twist engine this crate provides swipe-to-twist mapping for
//! interactive front ends, conversion to and from a sticker grid, and a
//! validator that explains why a sticker grid is not a legal configuration.

#[macro_use]
extern crate lazy_static;

#[cfg(test)]
use criterion as _; // Suppress unused crate warning (it's used in a benchmark)

mod cube;
mod error;
mod event;
mod gesture;
mod kind;
mod order;
mod part;
pub mod scramble;
mod state;
mod stickers;
mod swipe;
mod twist;
mod validate;
pub mod variant;

pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use crate::LayerMaskUint;
    pub use crate::cube::Cube;
    pub use crate::error::{ConfigurationError, CubeError, FaceletError, TwistError};
    pub use crate::event::{CubeEvent, Observer, ObserverId, TwistEvent};
    pub use crate::gesture::GestureModifiers;
    pub use crate::kind::{CubeKind, UnknownCubeKind};
    pub use crate::part::{Face, PartArrays, PartType};
    pub use crate::state::CubeState;
    pub use crate::stickers::StickerGrid;
    pub use crate::twist::Twist;
    pub use crate::validate::{ValidationCode, validate, validation_code};
    pub use crate::variant::VariantDescriptor;
}

/// Unsigned integer type used for layer masks.
///
/// Bit 0 is the layer nearest the origin of the axis (left, down, back) and
/// bit `N-1` is the layer farthest from it (right, up, front).
pub type LayerMaskUint = u32;

/// Number of faces on a cube.
pub const FACE_COUNT: usize = 6;

/// Number of twist axes on a cube.
pub const AXIS_COUNT: u8 = 3;

/// Number of swipe directions recognized on a face.
pub const SWIPE_DIRECTION_COUNT: u8 = 4;

/// Version string such as `cubetwist_core v1.2.3`.
pub const ENGINE_VERSION_STRING: &str =
    concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

#[cfg(test)]
mod tests;
