//! Modifier keys applied on top of the swipe and click mappings.

use serde::{Deserialize, Serialize};

use crate::*;

/// Modifiers held while swiping or clicking.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[serde(default)]
pub struct GestureModifiers {
    /// Twist the other way.
    pub inverse: bool,
    /// Twist an adjacent layer too.
    pub double_layer: bool,
    /// Twist by 180 degrees.
    pub double_angle: bool,
}

impl GestureModifiers {
    fn finish(self, mut twist: Twist) -> Twist {
        if self.double_angle {
            twist.angle *= 2;
        }
        if self.inverse {
            twist.angle = -twist.angle;
        }
        twist
    }

    /// Applies the modifiers to a twist produced by a swipe.
    pub fn apply_to_swipe(self, mut twist: Twist, layer_count: u8) -> Twist {
        if self.double_layer {
            twist.layer_mask = widen_swipe_mask(twist.layer_mask, layer_count);
        }
        self.finish(twist)
    }

    /// Applies the modifiers to a twist produced by a click.
    pub fn apply_to_click(self, mut twist: Twist, layer_count: u8) -> Twist {
        if self.double_layer {
            twist.layer_mask = widen_click_mask(twist.layer_mask, layer_count);
        }
        self.finish(twist)
    }
}

fn all_layers(layer_count: u8) -> LayerMaskUint {
    (1 << layer_count) - 1
}

/// Returns every layer except the two outer ones.
fn inner_layers(layer_count: u8) -> LayerMaskUint {
    ((1 << layer_count.saturating_sub(2)) - 1) << 1
}

/// Widens a swiped layer mask to include a neighboring layer.
///
/// The middle layer of an odd cube widens to all inner layers. Other layers
/// grow toward the middle, deciding which side they are on by comparing the
/// mask with the layer count. Up to five layers that agrees with comparing
/// against the middle bit.
fn widen_swipe_mask(mask: LayerMaskUint, layer_count: u8) -> LayerMaskUint {
    let widened = if layer_count % 2 == 1 && mask == 1 << (layer_count / 2) {
        inner_layers(layer_count)
    } else if mask < LayerMaskUint::from(layer_count) {
        mask | (mask << 1)
    } else {
        mask | (mask >> 1)
    };
    widened & all_layers(layer_count)
}

/// Widens a clicked layer mask. An outer layer gains its neighbor; anything
/// else becomes all inner layers.
fn widen_click_mask(mask: LayerMaskUint, layer_count: u8) -> LayerMaskUint {
    if mask == 1 || mask == 1 << (layer_count - 1) {
        (mask | (mask << 1) | (mask >> 1)) & all_layers(layer_count)
    } else {
        inner_layers(layer_count)
    }
}

impl CubeState {
    /// Returns the twist for a swipe with modifiers applied.
    pub fn resolve_swipe(
        &self,
        part: usize,
        orientation: u8,
        direction: u8,
        modifiers: GestureModifiers,
    ) -> Result<Twist, TwistError> {
        let twist = self.swipe_twist(part, orientation, direction)?;
        Ok(modifiers.apply_to_swipe(twist, self.layer_count()))
    }

    /// Returns the twist for a click on the sticker at `orientation` of
    /// `part`, with modifiers applied.
    pub fn resolve_click(
        &self,
        part: usize,
        orientation: u8,
        modifiers: GestureModifiers,
    ) -> Result<Twist, TwistError> {
        let (part_type, _) = self.locate(part, orientation)?;
        if part_type == PartType::Center {
            return Err(TwistError::CenterPart);
        }
        let missing = TwistError::PartOutOfRange {
            part,
            part_count: self.part_count(),
        };
        let twist = Twist {
            axis: self.part_axis(part, orientation).ok_or(missing.clone())?,
            layer_mask: self.part_layer_mask(part, orientation).ok_or(missing.clone())?,
            angle: self.part_angle(part, orientation).ok_or(missing)?,
        };
        Ok(modifiers.apply_to_click(twist, self.layer_count()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::variant::{PROFESSOR, RUBIK};

    #[test]
    fn test_widen_swipe_mask() {
        // 3 layers
        assert_eq!(widen_swipe_mask(0b001, 3), 0b011);
        assert_eq!(widen_swipe_mask(0b010, 3), 0b010);
        assert_eq!(widen_swipe_mask(0b100, 3), 0b110);
        // 4 layers
        assert_eq!(widen_swipe_mask(0b0001, 4), 0b0011);
        assert_eq!(widen_swipe_mask(0b0010, 4), 0b0110);
        assert_eq!(widen_swipe_mask(0b0100, 4), 0b0110);
        assert_eq!(widen_swipe_mask(0b1000, 4), 0b1100);
        // 5 layers
        assert_eq!(widen_swipe_mask(0b00100, 5), 0b01110);
        assert_eq!(widen_swipe_mask(0b00010, 5), 0b00110);
        assert_eq!(widen_swipe_mask(0b01000, 5), 0b01100);
        assert_eq!(widen_swipe_mask(0b10000, 5), 0b11000);
    }

    #[test]
    fn test_widen_click_mask() {
        assert_eq!(widen_click_mask(0b001, 3), 0b011);
        assert_eq!(widen_click_mask(0b100, 3), 0b110);
        assert_eq!(widen_click_mask(0b010, 3), 0b010);
        assert_eq!(widen_click_mask(0b00100, 5), 0b01110);
        assert_eq!(widen_click_mask(0b01, 2), 0b11);
    }

    #[test]
    fn test_resolve_click() {
        let s = CubeState::new(&RUBIK);
        let mods = GestureModifiers {
            inverse: true,
            double_layer: true,
            double_angle: false,
        };
        // R sticker of urf: R' wide.
        assert_eq!(s.resolve_click(0, 1, mods), Ok(Twist::new(0, 0b110, -1)));
        assert_eq!(
            s.resolve_click(26, 0, GestureModifiers::default()),
            Err(TwistError::CenterPart),
        );
    }

    #[test]
    fn test_resolve_swipe_double_angle() {
        let s = CubeState::new(&PROFESSOR);
        let plain = s.swipe_twist(0, 0, 1).unwrap();
        let mods = GestureModifiers {
            double_angle: true,
            ..Default::default()
        };
        let doubled = s.resolve_swipe(0, 0, 1, mods).unwrap();
        assert_eq!(doubled.angle, plain.angle * 2);
        assert_eq!(doubled.layer_mask, plain.layer_mask);
    }

    proptest! {
        #[test]
        fn proptest_modified_twists_are_valid(
            part in 0..26_usize,
            orientation in 0..3_u8,
            direction in 0..4_u8,
            mods: GestureModifiers,
        ) {
            let s = CubeState::new(&RUBIK);
            let orientation = orientation % s.part_type(part).unwrap().face_count();
            let twist = s.resolve_swipe(part, orientation, direction, mods).unwrap();
            prop_assert_eq!(twist.validate(3), Ok(()));
            prop_assert_ne!(twist.layer_mask, 0);
            let twist = s.resolve_click(part, orientation, mods).unwrap();
            prop_assert_eq!(twist.validate(3), Ok(()));
        }
    }
}
