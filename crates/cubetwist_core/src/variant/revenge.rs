//! 4x4x4 "Revenge" cube.
//!
//! Edges come in two rings of 12 and sides in four rings of 6. Swipe tables
//! are written for ring 0 and shifted to the right layer per ring.

use super::*;

/// Descriptor for the 4x4x4 cube.
pub static REVENGE: VariantDescriptor = VariantDescriptor {
    layer_count: 4,
    corner_count: 8,
    edge_count: 24,
    side_count: 24,
    primitives: PRIMITIVES,
    edge_swipe: &EDGE_SWIPE,
    side_swipe: &SIDE_SWIPE,
    remap_swipe_mask,
    click_layer_mask,
    stickers: None,
};

fn remap_swipe_mask(part_type: PartType, loc: usize, mask: LayerMaskUint) -> LayerMaskUint {
    match part_type {
        PartType::Corner => remap_corner_mask(4, mask),
        PartType::Edge => match (loc / 12, mask) {
            (1, 2) => 4,
            _ => mask,
        },
        PartType::Side => {
            let first_half = loc % 6 < 3;
            match loc / 6 {
                0 if first_half => 2,
                0 => 4,
                2 if first_half => 4,
                2 => 2,
                3 if mask == 2 => 4,
                3 => 2,
                _ => mask,
            }
        }
        PartType::Center => mask,
    }
}

fn click_layer_mask(part_type: PartType, loc: usize, face: Face) -> LayerMaskUint {
    match part_type {
        PartType::Corner | PartType::Side if face.is_positive() => 8,
        PartType::Corner | PartType::Side => 1,
        PartType::Edge => 2 << (loc / 12),
        PartType::Center => 0,
    }
}

pub(super) const PRIMITIVES: &[TwistPrimitive] = &[
    TwistPrimitive {
        name: "L",
        axis: 0,
        layer: 0,
        natural_angle: -1,
        ops: &[
            corners([7, 5, 4, 6], [1, 2, 1, 2]),
            edges([22, 20, 7, 6], [1, 1, 1, 1]),
            edges([10, 8, 19, 18], [1, 1, 1, 1]),
            sides([9, 15, 21, 3], [3, 3, 3, 3]),
        ],
    },
    TwistPrimitive {
        name: "D",
        axis: 1,
        layer: 0,
        natural_angle: -1,
        ops: &[
            corners([1, 3, 5, 7], [0, 0, 0, 0]),
            edges([5, 20, 23, 2], [1, 1, 1, 1]),
            edges([17, 8, 11, 14], [1, 1, 1, 1]),
            sides([10, 16, 22, 4], [3, 3, 3, 3]),
        ],
    },
    TwistPrimitive {
        name: "B",
        axis: 2,
        layer: 0,
        natural_angle: -1,
        ops: &[
            corners([4, 5, 3, 2], [2, 1, 2, 1]),
            edges([7, 17, 16, 3], [1, 1, 1, 1]),
            edges([19, 5, 4, 15], [1, 1, 1, 1]),
            sides([11, 17, 23, 5], [3, 3, 3, 3]),
        ],
    },
    TwistPrimitive {
        name: "ML",
        axis: 0,
        layer: 1,
        natural_angle: -1,
        ops: &[
            edges([3, 9, 11, 5], [1, 1, 1, 1]),
            sides([16, 11, 19, 2], [2, 1, 2, 3]),
            sides([22, 17, 1, 8], [2, 1, 2, 3]),
        ],
    },
    TwistPrimitive {
        name: "MD",
        axis: 1,
        layer: 1,
        natural_angle: -1,
        ops: &[
            edges([4, 7, 10, 1], [1, 1, 1, 1]),
            sides([17, 9, 20, 0], [2, 1, 2, 3]),
            sides([23, 15, 2, 6], [2, 1, 2, 3]),
        ],
    },
    TwistPrimitive {
        name: "MB",
        axis: 2,
        layer: 1,
        natural_angle: -1,
        ops: &[
            edges([6, 8, 2, 0], [1, 1, 1, 1]),
            sides([7, 21, 16, 0], [3, 2, 1, 2]),
            sides([1, 15, 10, 18], [3, 2, 1, 2]),
        ],
    },
    TwistPrimitive {
        name: "MR",
        axis: 0,
        layer: 2,
        natural_angle: 1,
        ops: &[
            edges([17, 23, 21, 15], [1, 1, 1, 1]),
            sides([23, 4, 14, 7], [2, 3, 2, 1]),
            sides([5, 10, 20, 13], [2, 3, 2, 1]),
        ],
    },
    TwistPrimitive {
        name: "MU",
        axis: 1,
        layer: 2,
        natural_angle: 1,
        ops: &[
            edges([16, 13, 22, 19], [1, 1, 1, 1]),
            sides([11, 18, 14, 3], [3, 2, 1, 2]),
            sides([5, 12, 8, 21], [3, 2, 1, 2]),
        ],
    },
    TwistPrimitive {
        name: "MF",
        axis: 2,
        layer: 2,
        natural_angle: 1,
        ops: &[
            edges([14, 20, 18, 12], [1, 1, 1, 1]),
            sides([22, 3, 13, 6], [2, 3, 2, 1]),
            sides([4, 9, 19, 12], [2, 3, 2, 1]),
        ],
    },
    TwistPrimitive {
        name: "R",
        axis: 0,
        layer: 3,
        natural_angle: 1,
        ops: &[
            corners([2, 3, 1, 0], [2, 1, 2, 1]),
            edges([16, 2, 1, 12], [1, 1, 1, 1]),
            edges([4, 14, 13, 0], [1, 1, 1, 1]),
            sides([6, 12, 18, 0], [3, 3, 3, 3]),
        ],
    },
    TwistPrimitive {
        name: "U",
        axis: 1,
        layer: 3,
        natural_angle: 1,
        ops: &[
            corners([6, 4, 2, 0], [0, 0, 0, 0]),
            edges([21, 18, 3, 0], [1, 1, 1, 1]),
            edges([9, 6, 15, 12], [1, 1, 1, 1]),
            sides([7, 13, 19, 1], [3, 3, 3, 3]),
        ],
    },
    TwistPrimitive {
        name: "F",
        axis: 2,
        layer: 3,
        natural_angle: 1,
        ops: &[
            corners([0, 1, 7, 6], [2, 1, 2, 1]),
            edges([1, 11, 22, 21], [1, 1, 1, 1]),
            edges([13, 23, 10, 9], [1, 1, 1, 1]),
            sides([8, 14, 20, 2], [3, 3, 3, 3]),
        ],
    },
];

pub(super) const EDGE_SWIPE: [[[SwipeEntry; 4]; 2]; 12] = [
    // 0
    [
        [(2, 2, 1), (0, 8, -1), (2, 2, -1), (0, 8, 1)],
        [(2, 2, -1), (1, 8, -1), (2, 2, 1), (1, 8, 1)],
    ],
    // 1
    [
        [(1, 2, 1), (2, 8, -1), (1, 2, -1), (2, 8, 1)],
        [(1, 2, -1), (0, 8, -1), (1, 2, 1), (0, 8, 1)],
    ],
    // 2
    [
        [(2, 2, -1), (0, 8, -1), (2, 2, 1), (0, 8, 1)],
        [(2, 2, 1), (1, 1, 1), (2, 2, -1), (1, 1, -1)],
    ],
    // 3
    [
        [(0, 2, -1), (1, 8, -1), (0, 2, 1), (1, 8, 1)],
        [(0, 2, 1), (2, 1, 1), (0, 2, -1), (2, 1, -1)],
    ],
    // 4
    [
        [(1, 2, -1), (2, 1, 1), (1, 2, 1), (2, 1, -1)],
        [(1, 2, 1), (0, 8, -1), (1, 2, -1), (0, 8, 1)],
    ],
    // 5
    [
        [(0, 2, 1), (1, 1, 1), (0, 2, -1), (1, 1, -1)],
        [(0, 2, -1), (2, 1, 1), (0, 2, 1), (2, 1, -1)],
    ],
    // 6
    [
        [(2, 2, -1), (0, 1, 1), (2, 2, 1), (0, 1, -1)],
        [(2, 2, 1), (1, 8, -1), (2, 2, -1), (1, 8, 1)],
    ],
    // 7
    [
        [(1, 2, 1), (2, 1, 1), (1, 2, -1), (2, 1, -1)],
        [(1, 2, -1), (0, 1, 1), (1, 2, 1), (0, 1, -1)],
    ],
    // 8
    [
        [(2, 2, 1), (0, 1, 1), (2, 2, -1), (0, 1, -1)],
        [(2, 2, -1), (1, 1, 1), (2, 2, 1), (1, 1, -1)],
    ],
    // 9
    [
        [(0, 2, 1), (1, 8, -1), (0, 2, -1), (1, 8, 1)],
        [(0, 2, -1), (2, 8, -1), (0, 2, 1), (2, 8, 1)],
    ],
    // 10
    [
        [(1, 2, -1), (2, 8, -1), (1, 2, 1), (2, 8, 1)],
        [(1, 2, 1), (0, 1, 1), (1, 2, -1), (0, 1, -1)],
    ],
    // 11
    [
        [(0, 2, -1), (1, 1, 1), (0, 2, 1), (1, 1, -1)],
        [(0, 2, 1), (2, 8, -1), (0, 2, -1), (2, 8, 1)],
    ],
];

pub(super) const SIDE_SWIPE: [[SwipeEntry; 4]; 6] = [
    [(1, 2, -1), (2, 4, 1), (1, 2, 1), (2, 4, -1)],
    [(2, 2, -1), (0, 4, 1), (2, 2, 1), (0, 4, -1)],
    [(0, 2, -1), (1, 4, 1), (0, 2, 1), (1, 4, -1)],
    [(2, 4, 1), (1, 2, -1), (2, 4, -1), (1, 2, 1)],
    [(0, 4, 1), (2, 2, -1), (0, 4, -1), (2, 2, 1)],
    [(1, 4, 1), (0, 2, -1), (1, 4, -1), (0, 2, 1)],
];
