//! 2x2x2 "Pocket Cube": eight corners and nothing else.

use super::*;

/// Descriptor for the 2x2x2 cube.
pub static POCKET: VariantDescriptor = VariantDescriptor {
    layer_count: 2,
    corner_count: 8,
    edge_count: 0,
    side_count: 0,
    primitives: PRIMITIVES,
    edge_swipe: &[],
    side_swipe: &[],
    remap_swipe_mask,
    click_layer_mask,
    stickers: Some(&STICKERS),
};

fn remap_swipe_mask(part_type: PartType, _loc: usize, mask: LayerMaskUint) -> LayerMaskUint {
    match part_type {
        PartType::Corner => remap_corner_mask(2, mask),
        _ => mask,
    }
}

fn click_layer_mask(part_type: PartType, _loc: usize, face: Face) -> LayerMaskUint {
    match part_type {
        PartType::Corner if face.is_positive() => 2,
        PartType::Corner => 1,
        _ => 0,
    }
}

static STICKERS: StickerLayout = StickerLayout {
    stickers_per_face: 4,
    corners: &[
        [1, 3, 0, 0, 2, 1],
        [4, 1, 2, 3, 0, 2],
        [1, 1, 5, 0, 0, 1],
        [4, 3, 0, 3, 5, 2],
        [1, 0, 3, 0, 5, 1],
        [4, 2, 5, 3, 3, 2],
        [1, 2, 2, 0, 3, 1],
        [4, 0, 3, 3, 2, 2],
    ],
    edges: &[],
    sides: &[],
};

pub(super) const PRIMITIVES: &[TwistPrimitive] = &[
    TwistPrimitive {
        name: "L",
        axis: 0,
        layer: 0,
        natural_angle: -1,
        ops: &[
            corners([7, 5, 4, 6], [1, 2, 1, 2]),
        ],
    },
    TwistPrimitive {
        name: "D",
        axis: 1,
        layer: 0,
        natural_angle: -1,
        ops: &[
            corners([1, 3, 5, 7], [0, 0, 0, 0]),
        ],
    },
    TwistPrimitive {
        name: "B",
        axis: 2,
        layer: 0,
        natural_angle: -1,
        ops: &[
            corners([4, 5, 3, 2], [2, 1, 2, 1]),
        ],
    },
    TwistPrimitive {
        name: "R",
        axis: 0,
        layer: 1,
        natural_angle: 1,
        ops: &[
            corners([2, 3, 1, 0], [2, 1, 2, 1]),
        ],
    },
    TwistPrimitive {
        name: "U",
        axis: 1,
        layer: 1,
        natural_angle: 1,
        ops: &[
            corners([6, 4, 2, 0], [0, 0, 0, 0]),
        ],
    },
    TwistPrimitive {
        name: "F",
        axis: 2,
        layer: 1,
        natural_angle: 1,
        ops: &[
            corners([0, 1, 7, 6], [2, 1, 2, 1]),
        ],
    },
];
