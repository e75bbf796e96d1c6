use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{AXIS_COUNT, LayerMaskUint, TwistError};

/// Twist of one or more layers along a single axis.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Twist {
    /// Axis: 0 for x (L to R), 1 for y (D to U), 2 for z (B to F).
    pub axis: u8,
    /// Set of layers to twist. Bit 0 is the layer at the negative end of the
    /// axis.
    pub layer_mask: LayerMaskUint,
    /// Signed number of quarter turns, clockwise as seen from the positive
    /// end of the axis. Ranges from -2 to 2.
    pub angle: i8,
}

impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = ['x', 'y', 'z'].get(usize::from(self.axis)).unwrap_or(&'?');
        write!(f, "{axis}:{:b}:{}", self.layer_mask, self.angle)
    }
}

impl Twist {
    /// Constructs a twist.
    pub const fn new(axis: u8, layer_mask: LayerMaskUint, angle: i8) -> Self {
        Self {
            axis,
            layer_mask,
            angle,
        }
    }

    /// Returns the twist that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            angle: -self.angle,
            ..self
        }
    }

    /// Returns whether the twist moves nothing.
    pub const fn is_identity(self) -> bool {
        self.angle == 0 || self.layer_mask == 0
    }

    /// Checks the twist against a cube with `layer_count` layers.
    pub fn validate(self, layer_count: u8) -> Result<(), TwistError> {
        if self.axis >= AXIS_COUNT {
            return Err(TwistError::AxisOutOfRange(self.axis));
        }
        if self.layer_mask >> layer_count != 0 {
            return Err(TwistError::LayerMaskOutOfRange {
                mask: self.layer_mask,
                layer_count,
            });
        }
        if !(-2..=2).contains(&self.angle) {
            return Err(TwistError::AngleOutOfRange(self.angle));
        }
        Ok(())
    }

    /// Returns the indices of the layers in the mask, nearest to the
    /// negative end of the axis first.
    pub fn layers(self) -> impl Iterator<Item = u8> {
        (0..LayerMaskUint::BITS as u8).filter(move |&i| self.layer_mask & (1 << i) != 0)
    }
}
