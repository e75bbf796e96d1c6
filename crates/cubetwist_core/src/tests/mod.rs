use proptest::prelude::*;

use crate::*;


/// Strategy for any valid twist of a cube with `layer_count` layers,
/// including no-op angles and empty layer masks.
fn twist(layer_count: u8) -> impl Strategy<Value = Twist> {
    let all_layers: LayerMaskUint = (1 << layer_count) - 1;
    (0..AXIS_COUNT, 0..=all_layers, -2..=2_i8)
        .prop_map(|(axis, layer_mask, angle)| Twist::new(axis, layer_mask, angle))
}

/// Strategy for a quarter or half turn of one outer face.
fn face_twist(layer_count: u8) -> impl Strategy<Value = Twist> {
    let outer: LayerMaskUint = 1 << (layer_count - 1);
    (0..AXIS_COUNT, prop::bool::ANY, prop::sample::select(vec![-1_i8, 1, 2]))
        .prop_map(move |(axis, positive, angle)| {
            Twist::new(axis, if positive { outer } else { 1 }, angle)
        })
}

fn twists(layer_count: u8) -> impl Strategy<Value = Vec<Twist>> {
    prop::collection::vec(twist(layer_count), 0..30)
}

/// Strategy for a cube kind together with a twist sequence for it.
fn kind_and_twists() -> impl Strategy<Value = (CubeKind, Vec<Twist>)> {
    any::<CubeKind>().prop_flat_map(|kind| (Just(kind), twists(kind.layer_count())))
}

/// Returns the state reached by applying `twists` to a solved cube.
fn scrambled(kind: CubeKind, twists: &[Twist]) -> CubeState {
    let mut state = CubeState::new(kind.variant());
    for &t in twists {
        state.apply_twist(t).unwrap();
    }
    state
}

/// Returns the state with every side in orientation 0, which is all a sticker
/// grid can express.
fn without_side_orientation(state: &CubeState) -> CubeState {
    let mut sides = state.sides().clone();
    sides.clear_orientations();
    CubeState::from_parts(
        state.variant(),
        state.corners().clone(),
        state.edges().clone(),
        sides,
    )
    .unwrap()
}
