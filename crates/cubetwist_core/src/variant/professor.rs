//! 5x5x5 "Professor" cube.
//!
//! Edge ring 0 is the middle edge; rings 1 and 2 are the two outer edges.
//! Sides come in nine rings of 6: ring 0 is the face center.

use super::*;

/// Descriptor for the 5x5x5 cube.
pub static PROFESSOR: VariantDescriptor = VariantDescriptor {
    layer_count: 5,
    corner_count: 8,
    edge_count: 36,
    side_count: 54,
    primitives: PRIMITIVES,
    edge_swipe: &EDGE_SWIPE,
    side_swipe: &SIDE_SWIPE,
    remap_swipe_mask,
    click_layer_mask,
    stickers: None,
};

fn remap_swipe_mask(part_type: PartType, loc: usize, mask: LayerMaskUint) -> LayerMaskUint {
    match part_type {
        PartType::Corner => remap_corner_mask(5, mask),
        PartType::Edge => {
            let mask = match mask {
                2 => 4,
                8 => 16,
                m => m,
            };
            match (loc / 12, mask) {
                (1, 4) => 2,
                (2, 4) => 8,
                _ => mask,
            }
        }
        PartType::Side => {
            let f = loc % 6 < 3;
            let pick = |a, b| if f { a } else { b };
            match loc / 6 {
                0 => 4,
                1 => pick(2, 8),
                3 => pick(8, 2),
                4 if mask == 8 => 2,
                4 => 8,
                5 if mask == 2 => pick(4, 8),
                5 => pick(2, 4),
                6 if mask == 8 => pick(4, 8),
                6 => pick(2, 4),
                7 if mask == 2 => pick(4, 2),
                7 => pick(8, 4),
                8 if mask == 2 => pick(8, 4),
                8 => pick(4, 2),
                _ => mask,
            }
        }
        PartType::Center => mask,
    }
}

fn click_layer_mask(part_type: PartType, loc: usize, face: Face) -> LayerMaskUint {
    match part_type {
        PartType::Corner | PartType::Side if face.is_positive() => 16,
        PartType::Corner | PartType::Side => 1,
        PartType::Edge => match loc / 12 {
            0 => 4,
            1 => 2,
            _ => 8,
        },
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
            edges([10, 8, 7, 6], [1, 1, 1, 1]),
            edges([34, 32, 19, 18], [1, 1, 1, 1]),
            edges([22, 20, 31, 30], [1, 1, 1, 1]),
            spin(3, 3),
            sides([15, 21, 27, 9], [3, 3, 3, 3]),
            sides([39, 45, 51, 33], [3, 3, 3, 3]),
        ],
    },
    TwistPrimitive {
        name: "D",
        axis: 1,
        layer: 0,
        natural_angle: -1,
        ops: &[
            corners([1, 3, 5, 7], [0, 0, 0, 0]),
            edges([5, 8, 11, 2], [1, 1, 1, 1]),
            edges([29, 20, 23, 26], [1, 1, 1, 1]),
            edges([17, 32, 35, 14], [1, 1, 1, 1]),
            spin(4, 3),
            sides([16, 22, 28, 10], [3, 3, 3, 3]),
            sides([40, 46, 52, 34], [3, 3, 3, 3]),
        ],
    },
    TwistPrimitive {
        name: "B",
        axis: 2,
        layer: 0,
        natural_angle: -1,
        ops: &[
            corners([4, 5, 3, 2], [2, 1, 2, 1]),
            edges([7, 5, 4, 3], [1, 1, 1, 1]),
            edges([31, 17, 16, 27], [1, 1, 1, 1]),
            edges([19, 29, 28, 15], [1, 1, 1, 1]),
            spin(5, 3),
            sides([17, 23, 29, 11], [3, 3, 3, 3]),
            sides([41, 47, 53, 35], [3, 3, 3, 3]),
        ],
    },
    TwistPrimitive {
        name: "NL",
        axis: 0,
        layer: 1,
        natural_angle: -1,
        ops: &[
            edges([15, 21, 23, 17], [1, 1, 1, 1]),
            sides([22, 17, 25, 8], [2, 1, 2, 3]),
            sides([52, 47, 31, 38], [2, 1, 2, 3]),
            sides([28, 23, 7, 14], [2, 1, 2, 3]),
        ],
    },
    TwistPrimitive {
        name: "ND",
        axis: 1,
        layer: 1,
        natural_angle: -1,
        ops: &[
            edges([16, 19, 22, 13], [1, 1, 1, 1]),
            sides([53, 45, 32, 36], [2, 1, 2, 3]),
            sides([29, 21, 8, 12], [2, 1, 2, 3]),
            sides([23, 15, 26, 6], [2, 1, 2, 3]),
        ],
    },
    TwistPrimitive {
        name: "NB",
        axis: 2,
        layer: 1,
        natural_angle: -1,
        ops: &[
            edges([20, 14, 12, 18], [1, 1, 1, 1]),
            sides([13, 27, 22, 6], [3, 2, 1, 2]),
            sides([37, 51, 46, 30], [3, 2, 1, 2]),
            sides([7, 21, 16, 24], [3, 2, 1, 2]),
        ],
    },
    TwistPrimitive {
        name: "MR",
        axis: 0,
        layer: 2,
        natural_angle: 1,
        ops: &[
            edges([5, 11, 9, 3], [1, 1, 1, 1]),
            sides([1, 5, 4, 2], [1, 2, 3, 2]),
            sides([37, 53, 34, 44], [1, 2, 3, 2]),
            sides([49, 41, 46, 32], [1, 2, 3, 2]),
        ],
    },
    TwistPrimitive {
        name: "MU",
        axis: 1,
        layer: 2,
        natural_angle: 1,
        ops: &[
            edges([10, 7, 4, 1], [1, 1, 1, 1]),
            sides([5, 0, 2, 3], [3, 2, 1, 2]),
            sides([35, 42, 38, 51], [3, 2, 1, 2]),
            sides([47, 30, 50, 39], [3, 2, 1, 2]),
        ],
    },
    TwistPrimitive {
        name: "MF",
        axis: 2,
        layer: 2,
        natural_angle: 1,
        ops: &[
            edges([2, 8, 6, 0], [1, 1, 1, 1]),
            sides([4, 3, 1, 0], [2, 3, 2, 1]),
            sides([40, 45, 31, 48], [2, 3, 2, 1]),
            sides([52, 33, 43, 36], [2, 3, 2, 1]),
        ],
    },
    TwistPrimitive {
        name: "NR",
        axis: 0,
        layer: 3,
        natural_angle: 1,
        ops: &[
            edges([29, 35, 33, 27], [1, 1, 1, 1]),
            sides([29, 10, 20, 13], [2, 3, 2, 1]),
            sides([35, 40, 50, 43], [2, 3, 2, 1]),
            sides([11, 16, 26, 19], [2, 3, 2, 1]),
        ],
    },
    TwistPrimitive {
        name: "NU",
        axis: 1,
        layer: 3,
        natural_angle: 1,
        ops: &[
            edges([34, 31, 28, 25], [1, 1, 1, 1]),
            sides([41, 48, 44, 33], [3, 2, 1, 2]),
            sides([11, 18, 14, 27], [3, 2, 1, 2]),
            sides([17, 24, 20, 9], [3, 2, 1, 2]),
        ],
    },
    TwistPrimitive {
        name: "NF",
        axis: 2,
        layer: 3,
        natural_angle: 1,
        ops: &[
            edges([26, 32, 30, 24], [1, 1, 1, 1]),
            sides([34, 39, 49, 42], [2, 3, 2, 1]),
            sides([10, 15, 25, 18], [2, 3, 2, 1]),
            sides([28, 9, 19, 12], [2, 3, 2, 1]),
        ],
    },
    TwistPrimitive {
        name: "R",
        axis: 0,
        layer: 4,
        natural_angle: 1,
        ops: &[
            corners([2, 3, 1, 0], [2, 1, 2, 1]),
            edges([4, 2, 1, 0], [1, 1, 1, 1]),
            edges([16, 26, 25, 12], [1, 1, 1, 1]),
            edges([28, 14, 13, 24], [1, 1, 1, 1]),
            spin(0, 3),
            sides([12, 18, 24, 6], [3, 3, 3, 3]),
            sides([36, 42, 48, 30], [3, 3, 3, 3]),
        ],
    },
    TwistPrimitive {
        name: "U",
        axis: 1,
        layer: 4,
        natural_angle: 1,
        ops: &[
            corners([6, 4, 2, 0], [0, 0, 0, 0]),
            edges([9, 6, 3, 0], [1, 1, 1, 1]),
            edges([33, 30, 15, 12], [1, 1, 1, 1]),
            edges([21, 18, 27, 24], [1, 1, 1, 1]),
            spin(1, 3),
            sides([13, 19, 25, 7], [3, 3, 3, 3]),
            sides([37, 43, 49, 31], [3, 3, 3, 3]),
        ],
    },
    TwistPrimitive {
        name: "F",
        axis: 2,
        layer: 4,
        natural_angle: 1,
        ops: &[
            corners([0, 1, 7, 6], [2, 1, 2, 1]),
            edges([1, 11, 10, 9], [1, 1, 1, 1]),
            edges([25, 35, 22, 21], [1, 1, 1, 1]),
            edges([13, 23, 34, 33], [1, 1, 1, 1]),
            spin(2, 3),
            sides([14, 20, 26, 8], [3, 3, 3, 3]),
            sides([38, 44, 50, 32], [3, 3, 3, 3]),
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
    [(1, 2, -1), (2, 8, 1), (1, 2, 1), (2, 8, -1)],
    [(2, 2, -1), (0, 8, 1), (2, 2, 1), (0, 8, -1)],
    [(0, 2, -1), (1, 8, 1), (0, 2, 1), (1, 8, -1)],
    [(2, 8, 1), (1, 2, -1), (2, 8, -1), (1, 2, 1)],
    [(0, 8, 1), (2, 2, -1), (0, 8, -1), (2, 2, 1)],
    [(1, 8, 1), (0, 2, -1), (1, 8, -1), (0, 2, 1)],
];
