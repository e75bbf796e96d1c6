//! 3x3x3 cube. The barrel, diamond, and cuboctahedron share this descriptor;
//! they differ only in shape.

use super::*;

/// Descriptor for the 3x3x3 cube.
pub static RUBIK: VariantDescriptor = VariantDescriptor {
    layer_count: 3,
    corner_count: 8,
    edge_count: 12,
    side_count: 6,
    primitives: PRIMITIVES,
    edge_swipe: &EDGE_SWIPE,
    side_swipe: &SIDE_SWIPE,
    remap_swipe_mask,
    click_layer_mask,
    stickers: Some(&STICKERS),
};

fn remap_swipe_mask(part_type: PartType, _loc: usize, mask: LayerMaskUint) -> LayerMaskUint {
    match part_type {
        PartType::Corner => remap_corner_mask(3, mask),
        _ => mask,
    }
}

fn click_layer_mask(part_type: PartType, _loc: usize, face: Face) -> LayerMaskUint {
    match part_type {
        PartType::Corner | PartType::Side if face.is_positive() => 4,
        PartType::Corner | PartType::Side => 1,
        PartType::Edge => 2,
        PartType::Center => 0,
    }
}

static STICKERS: StickerLayout = StickerLayout {
    stickers_per_face: 9,
    corners: &[
        [1, 8, 0, 0, 2, 2],
        [4, 2, 2, 8, 0, 6],
        [1, 2, 5, 0, 0, 2],
        [4, 8, 0, 8, 5, 6],
        [1, 0, 3, 0, 5, 2],
        [4, 6, 5, 8, 3, 6],
        [1, 6, 2, 0, 3, 2],
        [4, 0, 3, 8, 2, 6],
    ],
    edges: &[
        [1, 5, 0, 1],
        [0, 3, 2, 5],
        [4, 5, 0, 7],
        [5, 1, 1, 1],
        [0, 5, 5, 3],
        [5, 7, 4, 7],
        [1, 3, 3, 1],
        [3, 3, 5, 5],
        [4, 3, 3, 7],
        [2, 1, 1, 7],
        [3, 5, 2, 3],
        [2, 7, 4, 1],
    ],
    sides: &[[0, 4], [1, 4], [2, 4], [3, 4], [4, 4], [5, 4]],
};

pub(super) const PRIMITIVES: &[TwistPrimitive] = &[
    TwistPrimitive {
        name: "L",
        axis: 0,
        layer: 0,
        natural_angle: -1,
        ops: &[
            corners([7, 5, 4, 6], [1, 2, 1, 2]),
            edges([10, 8, 7, 6], [1, 1, 1, 1]),
            spin(3, 3),
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
            spin(4, 3),
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
            spin(5, 3),
        ],
    },
    TwistPrimitive {
        name: "MR",
        axis: 0,
        layer: 1,
        natural_angle: 1,
        ops: &[
            edges([5, 11, 9, 3], [1, 1, 1, 1]),
            sides([1, 5, 4, 2], [1, 2, 3, 2]),
        ],
    },
    TwistPrimitive {
        name: "MU",
        axis: 1,
        layer: 1,
        natural_angle: 1,
        ops: &[
            edges([10, 7, 4, 1], [1, 1, 1, 1]),
            sides([5, 0, 2, 3], [3, 2, 1, 2]),
        ],
    },
    TwistPrimitive {
        name: "MF",
        axis: 2,
        layer: 1,
        natural_angle: 1,
        ops: &[
            edges([2, 8, 6, 0], [1, 1, 1, 1]),
            sides([4, 3, 1, 0], [2, 3, 2, 1]),
        ],
    },
    TwistPrimitive {
        name: "R",
        axis: 0,
        layer: 2,
        natural_angle: 1,
        ops: &[
            corners([2, 3, 1, 0], [2, 1, 2, 1]),
            edges([4, 2, 1, 0], [1, 1, 1, 1]),
            spin(0, 3),
        ],
    },
    TwistPrimitive {
        name: "U",
        axis: 1,
        layer: 2,
        natural_angle: 1,
        ops: &[
            corners([6, 4, 2, 0], [0, 0, 0, 0]),
            edges([9, 6, 3, 0], [1, 1, 1, 1]),
            spin(1, 3),
        ],
    },
    TwistPrimitive {
        name: "F",
        axis: 2,
        layer: 2,
        natural_angle: 1,
        ops: &[
            corners([0, 1, 7, 6], [2, 1, 2, 1]),
            edges([1, 11, 10, 9], [1, 1, 1, 1]),
            spin(2, 3),
        ],
    },
];

pub(super) const EDGE_SWIPE: [[[SwipeEntry; 4]; 2]; 12] = [
    // 0
    [
        [(2, 2, 1), (0, 4, -1), (2, 2, -1), (0, 4, 1)],
        [(2, 2, -1), (1, 4, -1), (2, 2, 1), (1, 4, 1)],
    ],
    // 1
    [
        [(1, 2, 1), (2, 4, -1), (1, 2, -1), (2, 4, 1)],
        [(1, 2, -1), (0, 4, -1), (1, 2, 1), (0, 4, 1)],
    ],
    // 2
    [
        [(2, 2, -1), (0, 4, -1), (2, 2, 1), (0, 4, 1)],
        [(2, 2, 1), (1, 1, 1), (2, 2, -1), (1, 1, -1)],
    ],
    // 3
    [
        [(0, 2, -1), (1, 4, -1), (0, 2, 1), (1, 4, 1)],
        [(0, 2, 1), (2, 1, 1), (0, 2, -1), (2, 1, -1)],
    ],
    // 4
    [
        [(1, 2, -1), (2, 1, 1), (1, 2, 1), (2, 1, -1)],
        [(1, 2, 1), (0, 4, -1), (1, 2, -1), (0, 4, 1)],
    ],
    // 5
    [
        [(0, 2, 1), (1, 1, 1), (0, 2, -1), (1, 1, -1)],
        [(0, 2, -1), (2, 1, 1), (0, 2, 1), (2, 1, -1)],
    ],
    // 6
    [
        [(2, 2, -1), (0, 1, 1), (2, 2, 1), (0, 1, -1)],
        [(2, 2, 1), (1, 4, -1), (2, 2, -1), (1, 4, 1)],
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
        [(0, 2, 1), (1, 4, -1), (0, 2, -1), (1, 4, 1)],
        [(0, 2, -1), (2, 4, -1), (0, 2, 1), (2, 4, 1)],
    ],
    // 10
    [
        [(1, 2, -1), (2, 4, -1), (1, 2, 1), (2, 4, 1)],
        [(1, 2, 1), (0, 1, 1), (1, 2, -1), (0, 1, -1)],
    ],
    // 11
    [
        [(0, 2, -1), (1, 1, 1), (0, 2, 1), (1, 1, -1)],
        [(0, 2, 1), (2, 4, -1), (0, 2, -1), (2, 4, 1)],
    ],
];

pub(super) const SIDE_SWIPE: [[SwipeEntry; 4]; 6] = [
    [(1, 2, -1), (2, 2, 1), (1, 2, 1), (2, 2, -1)],
    [(2, 2, -1), (0, 2, 1), (2, 2, 1), (0, 2, -1)],
    [(0, 2, -1), (1, 2, 1), (0, 2, 1), (1, 2, -1)],
    [(2, 2, 1), (1, 2, -1), (2, 2, -1), (1, 2, 1)],
    [(0, 2, 1), (2, 2, -1), (0, 2, -1), (2, 2, 1)],
    [(1, 2, 1), (0, 2, -1), (1, 2, -1), (0, 2, 1)],
];
