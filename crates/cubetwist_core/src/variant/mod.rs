//! Per-variant constant data: part counts, elementary twists, swipe tables,
//! and sticker layouts.
//!
//! Every variant is described by a single [`VariantDescriptor`] static. The
//! engine, mapper, projector, and validator are written once against this
//! data.

use std::fmt;

use crate::{Face, LayerMaskUint, PartType};

mod pocket;
mod professor;
mod revenge;
mod rubik;
pub(crate) mod tables;

pub use pocket::POCKET;
pub use professor::PROFESSOR;
pub use revenge::REVENGE;
pub use rubik::RUBIK;

/// Entry in a swipe table: `(axis, raw layer mask, raw angle)`.
pub type SwipeEntry = (u8, LayerMaskUint, i8);

/// Effect of an elementary twist on one class of parts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrimitiveOp {
    /// Four-cycle of corner locations.
    Corners {
        /// Locations in cycle order.
        slots: [u8; 4],
        /// Orientation delta added at each destination.
        deltas: [u8; 4],
    },
    /// Four-cycle of edge locations.
    Edges {
        /// Locations in cycle order.
        slots: [u8; 4],
        /// Orientation delta added at each destination.
        deltas: [u8; 4],
    },
    /// Four-cycle of side locations.
    Sides {
        /// Locations in cycle order.
        slots: [u8; 4],
        /// Orientation delta added at each destination.
        deltas: [u8; 4],
    },
    /// Orientation change of a side that stays in place.
    Spin {
        /// Side location.
        slot: u8,
        /// Orientation delta.
        delta: u8,
    },
}

const fn corners(slots: [u8; 4], deltas: [u8; 4]) -> PrimitiveOp {
    PrimitiveOp::Corners { slots, deltas }
}
const fn edges(slots: [u8; 4], deltas: [u8; 4]) -> PrimitiveOp {
    PrimitiveOp::Edges { slots, deltas }
}
const fn sides(slots: [u8; 4], deltas: [u8; 4]) -> PrimitiveOp {
    PrimitiveOp::Sides { slots, deltas }
}
const fn spin(slot: u8, delta: u8) -> PrimitiveOp {
    PrimitiveOp::Spin { slot, delta }
}

/// Elementary quarter turn of a single layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TwistPrimitive {
    /// Conventional name, such as `R` or `MU`.
    pub name: &'static str,
    /// Twist axis.
    pub axis: u8,
    /// Layer index along the axis.
    pub layer: u8,
    /// Angle realized by a single application: `1` for layers on the
    /// positive half of the axis and the middle layer, `-1` otherwise.
    pub natural_angle: i8,
    /// Four-cycles and spins, applied in order.
    pub ops: &'static [PrimitiveOp],
}

impl TwistPrimitive {
    /// Returns how many times this primitive must be applied to realize a
    /// twist by `angle` around its axis.
    pub fn repetitions(&self, angle: i8) -> usize {
        if angle.abs() == 2 {
            2
        } else if angle == self.natural_angle {
            1
        } else {
            3
        }
    }
}

/// Where each part's stickers appear in a sticker grid.
///
/// Every entry is a flat list of `(face, cell)` pairs, one per sticker of the
/// part in its reference orientation.
#[derive(Debug)]
pub struct StickerLayout {
    /// Number of stickers on each face.
    pub stickers_per_face: usize,
    /// `(face, cell)` of the three stickers of each corner.
    pub corners: &'static [[u8; 6]],
    /// `(face, cell)` of the two stickers of each edge.
    pub edges: &'static [[u8; 4]],
    /// `(face, cell)` of the sticker of each side.
    pub sides: &'static [[u8; 2]],
}

/// Immutable description of a puzzle variant.
pub struct VariantDescriptor {
    /// Layers along each axis.
    pub layer_count: u8,
    /// Number of corner parts.
    pub corner_count: usize,
    /// Number of edge parts.
    pub edge_count: usize,
    /// Number of side parts.
    pub side_count: usize,
    /// Elementary twists, one per axis and layer.
    pub primitives: &'static [TwistPrimitive],
    /// Edge swipe table indexed by `[location % 12][orientation][direction]`.
    pub edge_swipe: &'static [[[SwipeEntry; 4]; 2]],
    /// Side swipe table indexed by `[location % 6][direction]`.
    pub side_swipe: &'static [[SwipeEntry; 4]],
    /// Converts a raw swipe table layer mask to a layer mask on this variant,
    /// given the part class and the location within that class.
    pub remap_swipe_mask: fn(PartType, usize, LayerMaskUint) -> LayerMaskUint,
    /// Returns the layer mask of the layer containing a part, as seen from
    /// one of its faces, given the part class and the location within that
    /// class.
    pub click_layer_mask: fn(PartType, usize, Face) -> LayerMaskUint,
    /// Sticker layout, if this variant supports sticker conversion.
    pub stickers: Option<&'static StickerLayout>,
}

impl fmt::Debug for VariantDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantDescriptor")
            .field("layer_count", &self.layer_count)
            .field("corner_count", &self.corner_count)
            .field("edge_count", &self.edge_count)
            .field("side_count", &self.side_count)
            .finish_non_exhaustive()
    }
}

impl PartialEq for VariantDescriptor {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}
impl Eq for VariantDescriptor {}

impl VariantDescriptor {
    /// Returns the descriptor for a cube with `layer_count` layers.
    pub fn for_layer_count(layer_count: u8) -> Option<&'static Self> {
        match layer_count {
            2 => Some(&POCKET),
            3 => Some(&RUBIK),
            4 => Some(&REVENGE),
            5 => Some(&PROFESSOR),
            _ => None,
        }
    }

    /// Returns the total number of parts, including the center part.
    pub const fn part_count(&self) -> usize {
        self.corner_count + self.edge_count + self.side_count + 1
    }

    /// Returns the layer mask with every layer set.
    pub const fn all_layers(&self) -> LayerMaskUint {
        (1 << self.layer_count) - 1
    }

    /// Returns the elementary twist for a layer.
    pub fn primitive(&self, axis: u8, layer: u8) -> Option<&'static TwistPrimitive> {
        self.primitives
            .iter()
            .find(|p| p.axis == axis && p.layer == layer)
    }

    /// Returns the class of `part` and its index within that class.
    pub fn split_part(&self, part: usize) -> Option<(PartType, usize)> {
        let edges_start = self.corner_count;
        let sides_start = edges_start + self.edge_count;
        let center = sides_start + self.side_count;
        if part < edges_start {
            Some((PartType::Corner, part))
        } else if part < sides_start {
            Some((PartType::Edge, part - edges_start))
        } else if part < center {
            Some((PartType::Side, part - sides_start))
        } else if part == center {
            Some((PartType::Center, 0))
        } else {
            None
        }
    }

    /// Returns the global ID of the part with index `index` within its class.
    pub const fn join_part(&self, part_type: PartType, index: usize) -> usize {
        match part_type {
            PartType::Corner => index,
            PartType::Edge => self.corner_count + index,
            PartType::Side => self.corner_count + self.edge_count + index,
            PartType::Center => self.corner_count + self.edge_count + self.side_count,
        }
    }
}

/// The `4` in the corner swipe table means "the outer layer on the positive
/// side", which is the last layer.
const fn remap_corner_mask(layer_count: u8, mask: LayerMaskUint) -> LayerMaskUint {
    if mask == 4 { 1 << (layer_count - 1) } else { mask }
}
