//! Order of a cube state as a permutation.

use crate::{CubeState, PartArrays};

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

fn lcm(a: u64, b: u64) -> u64 {
    a / gcd(a, b) * b
}

/// Returns the number of times the permutation of `arrays` must be repeated
/// before every part returns home in its home orientation.
fn arrays_order(arrays: &PartArrays, ignore_orientation: bool) -> u64 {
    let m = u64::from(arrays.modulus());
    arrays
        .cycles()
        .iter()
        .map(|cycle| {
            let len = cycle.len() as u64;
            if ignore_orientation {
                return len;
            }
            let twist: u64 = cycle
                .iter()
                .map(|&loc| u64::from(arrays.orientations()[loc]))
                .sum::<u64>()
                % m;
            len * (m / gcd(twist, m))
        })
        .fold(1, lcm)
}

impl CubeState {
    /// Returns the number of times the permutation that takes the solved
    /// state to this state must be repeated to return to the solved state.
    pub fn order(&self) -> u64 {
        [self.corners(), self.edges(), self.sides()]
            .into_iter()
            .map(|arrays| arrays_order(arrays, false))
            .fold(1, lcm)
    }

    /// Returns the order of the permutation as far as the stickers can tell.
    ///
    /// Side orientation is invisible, and so is any side cycle that stays on
    /// one face (sides on the same face of a 4- or 5-layer cube look alike).
    pub fn visible_order(&self) -> u64 {
        let sides = self.sides();
        let side_order = sides
            .cycles()
            .iter()
            .filter(|cycle| !cycle.iter().all(|&loc| loc % 6 == cycle[0] % 6))
            .map(|cycle| cycle.len() as u64)
            .fold(1, lcm);
        [
            arrays_order(self.corners(), false),
            arrays_order(self.edges(), false),
            side_order,
        ]
        .into_iter()
        .fold(1, lcm)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Twist;
    use crate::variant::{REVENGE, RUBIK};

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(1, 7), 7);
    }

    #[test]
    fn test_single_face_twist_order() {
        let mut s = CubeState::new(&RUBIK);
        assert_eq!(s.order(), 1);
        s.apply_twist(Twist::new(0, 0b100, 1)).unwrap();
        assert_eq!(s.order(), 4);
        assert_eq!(s.visible_order(), 4);
    }

    #[test]
    fn test_half_turn_visible_order() {
        let mut s = CubeState::new(&RUBIK);
        s.apply_twist(Twist::new(1, 0b100, 2)).unwrap();
        assert_eq!(s.visible_order(), 2);
        // The U side is spun by 180 degrees, which only the full order sees.
        assert_eq!(s.order(), 2);
    }

    #[test]
    fn test_sexy_move_order() {
        // R U R' U' has order 6.
        let mut s = CubeState::new(&RUBIK);
        for twist in [
            Twist::new(0, 0b100, 1),
            Twist::new(1, 0b100, 1),
            Twist::new(0, 0b100, -1),
            Twist::new(1, 0b100, -1),
        ] {
            s.apply_twist(twist).unwrap();
        }
        assert_eq!(s.order(), 6);
    }

    #[test]
    fn test_revenge_face_sides_invisible() {
        let mut s = CubeState::new(&REVENGE);
        s.apply_twist(Twist::new(0, 0b1000, 1)).unwrap();
        assert_eq!(s.visible_order(), 4);
    }
}
