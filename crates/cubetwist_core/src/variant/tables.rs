//! Geometry tables shared by every variant.
//!
//! Faces are numbered in sticker grid order: R=0, U=1, F=2, L=3, D=4, B=5.
//! Corner and edge locations are numbered the same way on every cube; edges
//! of 4- and 5-layer cubes repeat the 12 base locations once per ring.

use super::SwipeEntry;

/// Face seen through each of the three stickers of a corner at each location,
/// in reference orientation.
pub(crate) const CORNER_TO_FACE: [[u8; 3]; 8] = [
    [1, 0, 2], // urf
    [4, 2, 0], // dfr
    [1, 5, 0], // ubr
    [4, 0, 5], // drb
    [1, 3, 5], // ulb
    [4, 5, 3], // dbl
    [1, 2, 3], // ufl
    [4, 3, 2], // dlf
];

/// Face seen through each of the two stickers of an edge at each base
/// location, in reference orientation.
pub(crate) const EDGE_TO_FACE: [[u8; 2]; 12] = [
    [1, 0], // ur
    [0, 2], // rf
    [4, 0], // dr
    [5, 1], // bu
    [0, 5], // rb
    [5, 4], // bd
    [1, 3], // ul
    [3, 5], // lb
    [4, 3], // dl
    [2, 1], // fu
    [3, 2], // lf
    [2, 4], // fd
];

/// Axis of the slice containing each base edge location.
pub(crate) const EDGE_TO_AXIS: [u8; 12] = [2, 1, 2, 0, 1, 0, 2, 1, 2, 0, 1, 0];

/// Clockwise angle as seen from each sticker of an edge at each base
/// location.
pub(crate) const EDGE_TO_ANGLE: [[i8; 2]; 12] = [
    [1, -1],
    [1, -1],
    [-1, 1],
    [-1, 1],
    [-1, 1],
    [1, -1],
    [-1, 1],
    [1, -1],
    [1, -1],
    [1, -1],
    [-1, 1],
    [-1, 1],
];

/// Face occupied by each face of the center part, for each of the 24 cube
/// orientations.
pub(crate) const CENTER_TO_SIDE: [[u8; 6]; 24] = [
    [0, 1, 2, 3, 4, 5],
    [0, 5, 1, 3, 2, 4],
    [0, 4, 5, 3, 1, 2],
    [0, 2, 4, 3, 5, 1],
    [2, 1, 3, 5, 4, 0],
    [3, 1, 5, 0, 4, 2],
    [5, 1, 0, 2, 4, 3],
    [4, 0, 2, 1, 3, 5],
    [3, 4, 2, 0, 1, 5],
    [1, 3, 2, 4, 0, 5],
    [2, 0, 1, 5, 3, 4],
    [3, 2, 1, 0, 5, 4],
    [5, 3, 1, 2, 0, 4],
    [2, 4, 0, 5, 1, 3],
    [5, 4, 3, 2, 1, 0],
    [2, 3, 4, 5, 0, 1],
    [3, 5, 4, 0, 2, 1],
    [5, 0, 4, 2, 3, 1],
    [4, 5, 0, 1, 2, 3],
    [1, 5, 3, 4, 2, 0],
    [4, 3, 5, 1, 0, 2],
    [1, 0, 5, 4, 3, 2],
    [4, 2, 3, 1, 5, 0],
    [1, 2, 0, 4, 5, 3],
];

/// Cube orientation for each `(side at front location, side at right
/// location)` pair, keyed as `front * 6 + right`.
pub(crate) fn cube_orientation_from_sides(front: usize, right: usize) -> Option<u8> {
    Some(match front * 6 + right {
        12 => 0,
        24 => 1,
        30 => 2,
        6 => 3,
        5 => 4,
        33 => 5,
        20 => 6,
        13 => 7,
        15 => 8,
        16 => 9,
        1 => 10,
        9 => 11,
        22 => 12,
        2 => 13,
        23 => 14,
        4 => 15,
        27 => 16,
        19 => 17,
        26 => 18,
        29 => 19,
        34 => 20,
        31 => 21,
        11 => 22,
        8 => 23,
        _ => return None,
    })
}

/// Corner swipe table indexed by `[location][orientation][direction]`. A
/// layer mask of `4` stands for the outer positive layer.
pub(crate) const CORNER_SWIPE: [[[SwipeEntry; 4]; 3]; 8] = [
    // 0
    [
        [(2, 4, 1), (0, 4, -1), (2, 4, -1), (0, 4, 1)],
        [(1, 4, 1), (2, 4, -1), (1, 4, -1), (2, 4, 1)],
        [(0, 4, -1), (1, 4, 1), (0, 4, 1), (1, 4, -1)],
    ],
    // 1
    [
        [(0, 4, 1), (2, 4, -1), (0, 4, -1), (2, 4, 1)],
        [(1, 1, -1), (0, 4, -1), (1, 1, 1), (0, 4, 1)],
        [(2, 4, -1), (1, 1, -1), (2, 4, 1), (1, 1, 1)],
    ],
    // 2
    [
        [(0, 4, 1), (2, 1, 1), (0, 4, -1), (2, 1, -1)],
        [(1, 4, 1), (0, 4, -1), (1, 4, -1), (0, 4, 1)],
        [(2, 1, 1), (1, 4, 1), (2, 1, -1), (1, 4, -1)],
    ],
    // 3
    [
        [(2, 1, -1), (0, 4, -1), (2, 1, 1), (0, 4, 1)],
        [(1, 1, -1), (2, 1, 1), (1, 1, 1), (2, 1, -1)],
        [(0, 4, -1), (1, 1, -1), (0, 4, 1), (1, 1, 1)],
    ],
    // 4
    [
        [(2, 1, -1), (0, 1, 1), (2, 1, 1), (0, 1, -1)],
        [(1, 4, 1), (2, 1, 1), (1, 4, -1), (2, 1, -1)],
        [(0, 1, 1), (1, 4, 1), (0, 1, -1), (1, 4, -1)],
    ],
    // 5
    [
        [(0, 1, -1), (2, 1, 1), (0, 1, 1), (2, 1, -1)],
        [(1, 1, -1), (0, 1, 1), (1, 1, 1), (0, 1, -1)],
        [(2, 1, 1), (1, 1, -1), (2, 1, -1), (1, 1, 1)],
    ],
    // 6
    [
        [(0, 1, -1), (2, 4, -1), (0, 1, 1), (2, 4, 1)],
        [(1, 4, 1), (0, 1, 1), (1, 4, -1), (0, 1, -1)],
        [(2, 4, -1), (1, 4, 1), (2, 4, 1), (1, 4, -1)],
    ],
    // 7
    [
        [(2, 4, 1), (0, 1, 1), (2, 4, -1), (0, 1, -1)],
        [(1, 1, -1), (2, 4, -1), (1, 1, 1), (2, 4, 1)],
        [(0, 1, 1), (1, 1, -1), (0, 1, -1), (1, 1, 1)],
    ],
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_center_to_side_rows_are_permutations() {
        for row in CENTER_TO_SIDE {
            let faces: HashSet<u8> = row.into_iter().collect();
            assert_eq!(faces.len(), 6);
        }
    }

    #[test]
    fn test_center_to_side_matches_cube_orientation() {
        for (orientation, row) in CENTER_TO_SIDE.iter().enumerate() {
            let side_at = |location: u8| row.iter().position(|&loc| loc == location).unwrap();
            assert_eq!(
                cube_orientation_from_sides(side_at(2), side_at(0)),
                Some(orientation as u8),
                "row {orientation}",
            );
        }
    }

    #[test]
    fn test_cube_orientation_keys_are_distinct() {
        let keys: HashSet<Option<u8>> = (0..6)
            .flat_map(|f| (0..6).map(move |r| cube_orientation_from_sides(f, r)))
            .collect();
        assert_eq!(keys.len(), 25); // 24 orientations and `None`
    }

    #[test]
    fn test_edge_faces_are_adjacent() {
        for (faces, axis) in EDGE_TO_FACE.iter().zip(EDGE_TO_AXIS) {
            assert_ne!(faces[0] % 3, faces[1] % 3);
            assert_ne!(faces[0] % 3, axis);
            assert_ne!(faces[1] % 3, axis);
        }
    }
}
