//! Location and orientation arrays for one class of parts.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::ConfigurationError;

/// Class of a part.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PartType {
    /// Piece at the intersection of three faces.
    Corner,
    /// Piece at the intersection of two faces.
    Edge,
    /// Piece showing a single face, sometimes called a "center".
    Side,
    /// Fixed core of the puzzle.
    Center,
}

impl PartType {
    /// Returns the number of distinct orientations a part of this class can
    /// have in the part arrays.
    pub const fn orientation_modulus(self) -> u8 {
        match self {
            PartType::Corner => 3,
            PartType::Edge => 2,
            PartType::Side => 4,
            PartType::Center => 1,
        }
    }

    /// Returns the number of faces a part of this class shows. The
    /// `orientation` argument of part queries ranges over these.
    pub const fn face_count(self) -> u8 {
        match self {
            PartType::Corner => 3,
            PartType::Edge => 2,
            PartType::Side => 1,
            PartType::Center => 6,
        }
    }
}

/// Face of a cube, in sticker grid order.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::FromRepr,
)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[repr(u8)]
pub enum Face {
    /// Right
    R = 0,
    /// Up
    U = 1,
    /// Front
    F = 2,
    /// Left
    L = 3,
    /// Down
    D = 4,
    /// Back
    B = 5,
}

impl Face {
    /// All faces in sticker grid order.
    pub const ALL: [Face; 6] = [Face::R, Face::U, Face::F, Face::L, Face::D, Face::B];

    /// Returns the face with the given index, or `None` if it is out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }
    /// Returns the index of the face in the sticker grid.
    pub const fn index(self) -> usize {
        self as usize
    }
    /// Returns the twist axis perpendicular to the face.
    pub const fn axis(self) -> u8 {
        self as u8 % 3
    }
    /// Returns whether the face is on the positive end of its axis (right,
    /// up, front).
    pub const fn is_positive(self) -> bool {
        (self as u8) < 3
    }
    /// Returns the face on the opposite side of the cube.
    pub const fn opposite(self) -> Self {
        match self {
            Face::R => Face::L,
            Face::U => Face::D,
            Face::F => Face::B,
            Face::L => Face::R,
            Face::D => Face::U,
            Face::B => Face::F,
        }
    }
}

/// Parallel location and orientation arrays for one class of parts.
///
/// Both arrays are indexed by location: `parts[loc]` is the part currently at
/// `loc` and `orientations[loc]` is that part's orientation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartArrays {
    parts: Vec<usize>,
    orientations: Vec<u8>,
    modulus: u8,
}

impl PartArrays {
    /// Returns arrays with every part at its home location in orientation 0.
    pub fn identity(count: usize, modulus: u8) -> Self {
        Self {
            parts: (0..count).collect(),
            orientations: vec![0; count],
            modulus,
        }
    }

    /// Constructs arrays from raw data, checking that `parts` is a
    /// permutation and that every orientation is less than `part_type`'s
    /// modulus.
    pub fn new(
        part_type: PartType,
        parts: Vec<usize>,
        orientations: Vec<u8>,
    ) -> Result<Self, ConfigurationError> {
        let modulus = part_type.orientation_modulus();
        if parts.len() != orientations.len() {
            return Err(ConfigurationError::NotAPermutation(part_type));
        }
        let mut seen = vec![false; parts.len()];
        for &p in &parts {
            match seen.get_mut(p) {
                Some(s @ false) => *s = true,
                _ => return Err(ConfigurationError::NotAPermutation(part_type)),
            }
        }
        if orientations.iter().any(|&o| o >= modulus) {
            return Err(ConfigurationError::OrientationOutOfRange(part_type));
        }
        Ok(Self {
            parts,
            orientations,
            modulus,
        })
    }

    /// Returns the number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }
    /// Returns whether there are no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
    /// Returns the orientation modulus.
    pub fn modulus(&self) -> u8 {
        self.modulus
    }
    /// Returns the part at each location.
    pub fn parts(&self) -> &[usize] {
        &self.parts
    }
    /// Returns the orientation at each location.
    pub fn orientations(&self) -> &[u8] {
        &self.orientations
    }

    /// Returns the part at `location`.
    pub fn part_at(&self, location: usize) -> Option<usize> {
        self.parts.get(location).copied()
    }
    /// Returns the orientation of whatever part is at `location`.
    pub fn orientation_at(&self, location: usize) -> Option<u8> {
        self.orientations.get(location).copied()
    }
    /// Returns the current location of `part`.
    pub fn location_of(&self, part: usize) -> Option<usize> {
        // Most parts are at home most of the time.
        if self.parts.get(part) == Some(&part) {
            return Some(part);
        }
        self.parts.iter().rposition(|&p| p == part)
    }
    /// Returns the current orientation of `part`.
    pub fn orientation_of(&self, part: usize) -> Option<u8> {
        self.orientation_at(self.location_of(part)?)
    }

    /// Rotates the occupants of four slots and adds an orientation delta to
    /// each destination slot.
    ///
    /// The part at `slots[3]` moves to `slots[0]`, `slots[0]` to `slots[1]`,
    /// `slots[1]` to `slots[2]`, and `slots[2]` to `slots[3]`. Each
    /// destination `slots[i]` then gets `deltas[i]` added to its orientation.
    pub fn four_cycle(&mut self, slots: [u8; 4], deltas: [u8; 4]) {
        let [s0, s1, s2, s3] = slots.map(usize::from);
        let [d0, d1, d2, d3] = deltas;
        let m = self.modulus;
        let (p, o) = (&mut self.parts, &mut self.orientations);

        let (p3, o3) = (p[s3], o[s3]);
        p[s3] = p[s2];
        o[s3] = (o[s2] + d3) % m;
        p[s2] = p[s1];
        o[s2] = (o[s1] + d2) % m;
        p[s1] = p[s0];
        o[s1] = (o[s0] + d1) % m;
        p[s0] = p3;
        o[s0] = (o3 + d0) % m;
    }

    /// Adds an orientation delta to one slot without moving its occupant.
    pub fn spin(&mut self, slot: u8, delta: u8) {
        let o = &mut self.orientations[usize::from(slot)];
        *o = (*o + delta) % self.modulus;
    }

    /// Returns whether every part is at its home location in orientation 0.
    pub fn is_identity(&self) -> bool {
        self.parts.iter().enumerate().all(|(i, &p)| i == p) && self.orientations.iter().all(|&o| o == 0)
    }

    /// Returns the sum of all orientations, not reduced.
    pub fn orientation_sum(&self) -> u32 {
        self.orientations.iter().map(|&o| u32::from(o)).sum()
    }

    /// Returns `true` if the location permutation is odd.
    pub fn parity(&self) -> bool {
        self.cycles()
            .iter()
            .filter(|cycle| cycle.len() % 2 == 0)
            .count()
            % 2
            == 1
    }

    /// Returns the cycles of the location permutation, including fixed
    /// points, each as a list of locations in the order the permutation
    /// visits them.
    pub fn cycles(&self) -> Vec<SmallVec<[usize; 8]>> {
        let mut visited = vec![false; self.len()];
        let mut ret = vec![];
        for start in 0..self.len() {
            if visited[start] {
                continue;
            }
            let mut cycle = SmallVec::new();
            let mut i = start;
            while !visited[i] {
                visited[i] = true;
                cycle.push(i);
                i = self.parts[i];
            }
            ret.push(cycle);
        }
        ret
    }

    /// Returns the arrays obtained by applying `tx`, itself expressed as the
    /// arrays it produces from the identity, to `self`.
    ///
    /// Both arrays must have the same length and modulus.
    pub fn compose(&self, tx: &PartArrays) -> PartArrays {
        let m = self.modulus;
        let (parts, orientations) = tx
            .parts
            .iter()
            .zip(&tx.orientations)
            .map(|(&src, &delta)| (self.parts[src], (self.orientations[src] + delta) % m))
            .unzip();
        PartArrays {
            parts,
            orientations,
            modulus: m,
        }
    }

    /// Returns the locations whose occupant or orientation differs between
    /// `self` and `other`.
    pub fn changed_locations<'a>(&'a self, other: &'a PartArrays) -> impl 'a + Iterator<Item = usize> {
        (0..self.len()).filter(move |&i| {
            self.parts[i] != other.parts[i] || self.orientations[i] != other.orientations[i]
        })
    }

    /// Resets every orientation to 0.
    pub fn clear_orientations(&mut self) {
        self.orientations.iter_mut().for_each(|o| *o = 0);
    }

    /// Returns a compact string such as `0:0 3:1 2:0 1:2`.
    pub fn to_compact_string(&self) -> String {
        self.parts
            .iter()
            .zip(&self.orientations)
            .map(|(p, o)| format!("{p}:{o}"))
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_four_cycle_moves_parts_forward() {
        let mut a = PartArrays::identity(6, 3);
        a.four_cycle([0, 1, 2, 3], [0, 1, 2, 0]);
        assert_eq!(a.parts(), &[3, 0, 1, 2, 4, 5]);
        assert_eq!(a.orientations(), &[0, 1, 2, 0, 0, 0]);
        assert!(a.parity());
        assert_eq!(a.location_of(3), Some(0));
        assert_eq!(a.orientation_of(1), Some(2));
    }

    #[test]
    fn test_four_cycle_order_4() {
        let mut a = PartArrays::identity(8, 3);
        for _ in 0..4 {
            a.four_cycle([7, 5, 4, 6], [1, 2, 1, 2]);
        }
        assert!(a.is_identity());
    }

    #[test]
    fn test_spin() {
        let mut a = PartArrays::identity(6, 4);
        a.spin(2, 3);
        a.spin(2, 3);
        assert_eq!(a.orientation_at(2), Some(2));
        assert_eq!(a.parts(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_compose_matches_sequential_application() {
        let mut x = PartArrays::identity(8, 3);
        x.four_cycle([0, 1, 2, 3], [1, 2, 1, 2]);
        let mut y = PartArrays::identity(8, 3);
        y.four_cycle([2, 3, 4, 5], [0, 1, 0, 2]);

        let mut sequential = x.clone();
        sequential.four_cycle([2, 3, 4, 5], [0, 1, 0, 2]);
        assert_eq!(x.compose(&y), sequential);
    }

    #[test]
    fn test_new_rejects_non_permutation() {
        assert_eq!(
            PartArrays::new(PartType::Edge, vec![0, 0, 1], vec![0, 0, 0]),
            Err(ConfigurationError::NotAPermutation(PartType::Edge)),
        );
        assert_eq!(
            PartArrays::new(PartType::Edge, vec![0, 2, 1], vec![0, 2, 0]),
            Err(ConfigurationError::OrientationOutOfRange(PartType::Edge)),
        );
        assert!(PartArrays::new(PartType::Edge, vec![0, 2, 1], vec![0, 1, 1]).is_ok());
    }

    #[test]
    fn test_face_opposite_and_axis() {
        for face in Face::ALL {
            assert_eq!(face.opposite().opposite(), face);
            assert_eq!(face.opposite().axis(), face.axis());
            assert_ne!(face.opposite().is_positive(), face.is_positive());
            assert_eq!(Face::from_index(face.index()), Some(face));
        }
        assert_eq!(Face::from_index(6), None);
    }
}
