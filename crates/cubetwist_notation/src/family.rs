//! Letters naming what a move turns.

use std::fmt;

use cubetwist_core::Face;

/// What a move turns, before any layer prefix is applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Family {
    /// Face turn such as `R`. With a layer prefix, the layers are counted
    /// from this face.
    Face(Face),
    /// Wide turn such as `Rw` or `r` of the two layers nearest a face, or as
    /// many as the layer prefix says.
    Wide {
        /// Face the layers are counted from.
        face: Face,
        /// Whether the move is written as a lowercase letter instead of with a
        /// `w` suffix.
        lowercase: bool,
    },
    /// Middle slice.
    Slice(Slice),
    /// Whole-cube rotation.
    Rotation(CubeRotation),
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Face(face) => write!(f, "{face}"),
            Family::Wide {
                face,
                lowercase: false,
            } => write!(f, "{face}w"),
            Family::Wide {
                face,
                lowercase: true,
            } => write!(f, "{}", face.to_string().to_lowercase()),
            Family::Slice(slice) => write!(f, "{slice}"),
            Family::Rotation(rotation) => write!(f, "{rotation}"),
        }
    }
}

impl Family {
    /// Returns the face whose clockwise direction this family follows.
    pub fn reference_face(self) -> Face {
        match self {
            Family::Face(face) | Family::Wide { face, .. } => face,
            Family::Slice(slice) => slice.reference_face(),
            Family::Rotation(rotation) => rotation.reference_face(),
        }
    }
}

/// Middle slice move.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Slice {
    /// Slice between `R` and `L`, turning like `L`.
    M,
    /// Slice between `U` and `D`, turning like `D`.
    E,
    /// Slice between `F` and `B`, turning like `F`.
    S,
}

impl Slice {
    /// Returns the face whose clockwise direction this slice follows.
    pub fn reference_face(self) -> Face {
        match self {
            Slice::M => Face::L,
            Slice::E => Face::D,
            Slice::S => Face::F,
        }
    }
}

/// Whole-cube rotation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum CubeRotation {
    /// Rotation like `R`.
    #[strum(serialize = "x")]
    X,
    /// Rotation like `U`.
    #[strum(serialize = "y")]
    Y,
    /// Rotation like `F`.
    #[strum(serialize = "z")]
    Z,
}

impl CubeRotation {
    /// Returns the face whose clockwise direction this rotation follows.
    pub fn reference_face(self) -> Face {
        match self {
            CubeRotation::X => Face::R,
            CubeRotation::Y => Face::U,
            CubeRotation::Z => Face::F,
        }
    }

    /// Returns the rotation about `axis`.
    pub fn from_axis(axis: u8) -> Option<Self> {
        match axis {
            0 => Some(CubeRotation::X),
            1 => Some(CubeRotation::Y),
            2 => Some(CubeRotation::Z),
            _ => None,
        }
    }
}
