//! Mapping from a swipe across one sticker of a part to a twist.

use crate::variant::tables::CORNER_SWIPE;
use crate::*;

impl CubeState {
    /// Returns the twist triggered by swiping across the sticker at
    /// `orientation` of `part` in `direction`.
    ///
    /// Directions are numbered `0..4` counterclockwise around the face. The
    /// swipe tables are written for parts in their reference orientation, so
    /// the lookup first rebases `orientation` (or, for sides, `direction`) by
    /// the part's current orientation.
    pub fn swipe_twist(
        &self,
        part: usize,
        orientation: u8,
        direction: u8,
    ) -> Result<Twist, TwistError> {
        if direction >= SWIPE_DIRECTION_COUNT {
            return Err(TwistError::DirectionOutOfRange(direction));
        }
        let (part_type, loc) = self.locate(part, orientation)?;
        let dir = usize::from(direction);

        let (axis, raw_mask, angle) = match part_type {
            PartType::Corner => {
                let cur = self.corners().orientations()[loc];
                let sori = (3 - cur + orientation) % 3;
                let (axis, mask, angle) = CORNER_SWIPE[loc][usize::from(sori)][dir];
                // A corner's three stickers are not interchangeable under its
                // own twist, so some rebased lookups face the other way.
                let flip = match cur {
                    1 => sori != 0,
                    2 => sori != 1,
                    _ => false,
                };
                (axis, mask, if flip { -angle } else { angle })
            }
            PartType::Edge => {
                let cur = self.edges().orientations()[loc];
                let sori = (2 - cur + orientation) % 2;
                self.variant().edge_swipe[loc % 12][usize::from(sori)][dir]
            }
            PartType::Side => {
                let cur = self.sides().orientations()[loc];
                let sdir = (4 - cur + direction) % 4;
                self.variant().side_swipe[loc % 6][usize::from(sdir)]
            }
            PartType::Center => return Err(TwistError::CenterPart),
        };

        let layer_mask = (self.variant().remap_swipe_mask)(part_type, loc, raw_mask);
        Ok(Twist {
            axis,
            layer_mask,
            angle,
        })
    }

    /// Returns the axis of [`CubeState::swipe_twist()`].
    pub fn swipe_axis(&self, part: usize, orientation: u8, direction: u8) -> Result<u8, TwistError> {
        Ok(self.swipe_twist(part, orientation, direction)?.axis)
    }

    /// Returns the layer mask of [`CubeState::swipe_twist()`].
    pub fn swipe_layer_mask(
        &self,
        part: usize,
        orientation: u8,
        direction: u8,
    ) -> Result<LayerMaskUint, TwistError> {
        Ok(self.swipe_twist(part, orientation, direction)?.layer_mask)
    }

    /// Returns the angle of [`CubeState::swipe_twist()`].
    pub fn swipe_angle(&self, part: usize, orientation: u8, direction: u8) -> Result<i8, TwistError> {
        Ok(self.swipe_twist(part, orientation, direction)?.angle)
    }
}
