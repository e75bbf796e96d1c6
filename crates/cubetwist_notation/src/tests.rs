use cubetwist_core::{CubeState, Face, LayerMaskUint, Twist, VariantDescriptor};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::*;

fn face(face: Face) -> Move {
    Move::from(Family::Face(face))
}

fn twists(s: &str, layer_count: u8) -> Result<Vec<Twist>, ResolveError> {
    parse_notation(s).unwrap().to_twists(layer_count)
}

fn single(s: &str, layer_count: u8) -> Twist {
    let ret = twists(s, layer_count).unwrap();
    assert_eq!(ret.len(), 1, "{s} should be one twist");
    ret[0]
}

#[test]
fn test_parse_moves() {
    let expected = NodeList(vec![
        face(Face::R).into(),
        RepeatableNode::Move(face(Face::U)).with_multiplier(-1),
        RepeatableNode::Move(Move {
            layers: Some(LayerPrefix::Range(2, 3)),
            family: Family::Face(Face::L),
        })
        .with_multiplier(2),
        RepeatableNode::Move(Move {
            layers: Some(LayerPrefix::Single(3)),
            family: Family::Wide {
                face: Face::F,
                lowercase: false,
            },
        })
        .with_multiplier(-2),
        Move::from(Family::Wide {
            face: Face::D,
            lowercase: true,
        })
        .into(),
        Node::Pause,
        Move::from(Family::Slice(Slice::M)).into(),
        RepeatableNode::Move(Move::from(Family::Rotation(CubeRotation::Y))).with_multiplier(-1),
    ]);
    assert_eq!(expected, parse_notation("R U' 2-3L2 3Fw2' d . M y'").unwrap());
    assert_eq!(expected, parse_notation("  R   U'\n2-3L2 3Fw2' d . M y'  ").unwrap());
    assert_eq!(expected.to_string(), "R U' 2-3L2 3Fw2' d . M y'");
}

#[test]
fn test_parse_groups() {
    let expected = NodeList(vec![
        RepeatableNode::Group(NodeList(vec![face(Face::R).into(), face(Face::U).into()]))
            .with_multiplier(2),
        RepeatableNode::BinaryGroup {
            kind: BinaryGroupKind::Commutator,
            contents: [
                NodeList(vec![face(Face::R).into()]),
                NodeList(vec![
                    RepeatableNode::BinaryGroup {
                        kind: BinaryGroupKind::Conjugate,
                        contents: [
                            NodeList(vec![face(Face::F).into()]),
                            NodeList(vec![face(Face::D).into()]),
                        ],
                    }
                    .into(),
                ]),
            ],
        }
        .with_multiplier(-1),
    ]);
    assert_eq!(expected, parse_notation("(R U)2 [R, [F: D]]'").unwrap());
    assert_eq!(expected, parse_notation("( R U )2 [ R , [F:D] ]'").unwrap());
    assert_eq!(expected.to_string(), "(R U)2 [R, [F: D]]'");
}

#[test]
fn test_notation_errors() {
    parse_notation("2M").expect_err("slice with layer prefix");
    parse_notation("2x").expect_err("rotation with layer prefix");
    parse_notation("0R").expect_err("layer zero");
    parse_notation("3-2R").expect_err("empty layer range");
    parse_notation("2-3Rw").expect_err("wide move with layer range");
    parse_notation("Q").expect_err("unknown family");
    parse_notation("RU").expect_err("no space between moves");
    parse_notation("R 2").expect_err("lone multiplier");
    parse_notation("(R U").expect_err("unclosed group");
    parse_notation("[R U]").expect_err("missing separator");
    parse_notation("[R, U, F]").expect_err("extra separator");

    let err = "R Q".parse::<NodeList>().unwrap_err();
    assert!(!err.0.is_empty());
}

#[test]
fn test_resolve_face_moves() {
    assert_eq!(single("R", 3), Twist::new(0, 0b100, 1));
    assert_eq!(single("U", 3), Twist::new(1, 0b100, 1));
    assert_eq!(single("F", 3), Twist::new(2, 0b100, 1));
    assert_eq!(single("L", 3), Twist::new(0, 0b001, -1));
    assert_eq!(single("D", 3), Twist::new(1, 0b001, -1));
    assert_eq!(single("B", 3), Twist::new(2, 0b001, -1));

    assert_eq!(single("R'", 3), Twist::new(0, 0b100, -1));
    assert_eq!(single("L'", 3), Twist::new(0, 0b001, 1));
    assert_eq!(single("R2", 3), Twist::new(0, 0b100, 2));
    assert_eq!(single("L2", 3), Twist::new(0, 0b001, 2));
    assert_eq!(single("R3", 3), Twist::new(0, 0b100, -1));
    assert_eq!(single("R5'", 3), Twist::new(0, 0b100, -1));
    assert_eq!(twists("R4 L0 U8'", 3).unwrap(), vec![]);
}

#[test]
fn test_resolve_layers() {
    assert_eq!(single("M", 3), Twist::new(0, 0b010, -1));
    assert_eq!(single("E'", 3), Twist::new(1, 0b010, 1));
    assert_eq!(single("S", 5), Twist::new(2, 0b00100, 1));
    assert_eq!(single("2R", 4), Twist::new(0, 0b0100, 1));
    assert_eq!(single("2-3R", 4), Twist::new(0, 0b0110, 1));
    assert_eq!(single("Rw", 4), Twist::new(0, 0b1100, 1));
    assert_eq!(single("r", 4), Twist::new(0, 0b1100, 1));
    assert_eq!(single("3Lw'", 5), Twist::new(0, 0b00111, 1));
    assert_eq!(single("x", 3), Twist::new(0, 0b111, 1));
    assert_eq!(single("y2", 4), Twist::new(1, 0b1111, 2));

    assert_eq!(
        twists("M", 4),
        Err(ResolveError::NoMiddleLayer {
            family: Family::Slice(Slice::M),
            layer_count: 4,
        }),
    );
    assert_eq!(
        twists("4R", 3),
        Err(ResolveError::LayerOutOfRange {
            layer: 4,
            layer_count: 3,
        }),
    );
    assert_eq!(
        twists("3Rw", 2),
        Err(ResolveError::LayerOutOfRange {
            layer: 3,
            layer_count: 2,
        }),
    );
}

#[test]
fn test_resolve_groups() {
    let r = Twist::new(0, 0b100, 1);
    let u = Twist::new(1, 0b100, 1);

    assert_eq!(
        twists("[R, U]", 3).unwrap(),
        vec![r, u, r.inverse(), u.inverse()],
    );
    assert_eq!(twists("[R: U]", 3).unwrap(), vec![r, u, r.inverse()]);
    assert_eq!(twists("(R U)2", 3).unwrap(), vec![r, u, r, u]);
    assert_eq!(
        twists("(R U)'", 3).unwrap(),
        vec![u.inverse(), r.inverse()],
    );
    assert_eq!(twists("(R U)0 .", 3).unwrap(), vec![]);
    assert_eq!(twists("[R, U]2", 3).unwrap().len(), 8);
    assert_eq!(
        twists("((R U)1000)1000", 3),
        Err(ResolveError::TooManyTwists),
    );
    assert_eq!(
        twists("(R U)2000000000", 3),
        Err(ResolveError::TooManyTwists),
    );
}

#[test]
fn test_empty_groups_repeat_instantly() {
    let start = std::time::Instant::now();
    assert_eq!(twists("(R4)2000000000", 3).unwrap(), vec![]);
    assert_eq!(twists("(.)2000000000' ()2000000000", 3).unwrap(), vec![]);
    assert_eq!(twists("[R4, .]2000000000 ((R0)2000000000)2000000000", 3).unwrap(), vec![]);
    assert!(start.elapsed() < std::time::Duration::from_secs(1));
}

#[test]
fn test_twist_to_notation() {
    let notation = |axis, mask, angle, layer_count| {
        twist_to_notation(Twist::new(axis, mask, angle), layer_count)
            .unwrap()
            .to_string()
    };

    assert_eq!(notation(0, 0b100, 1, 3), "R");
    assert_eq!(notation(0, 0b001, 1, 3), "L'");
    assert_eq!(notation(0, 0b001, -2, 3), "L2");
    assert_eq!(notation(0, 0b010, -1, 3), "M");
    assert_eq!(notation(1, 0b010, 1, 3), "E'");
    assert_eq!(notation(0, 0b111, 1, 3), "x");
    assert_eq!(notation(2, 0b11, -1, 2), "z'");
    assert_eq!(notation(0, 0b101, 1, 3), "L' R");
    assert_eq!(notation(0, 0b0100, 1, 4), "2R");
    assert_eq!(notation(0, 0b0010, 1, 4), "2L'");
    assert_eq!(notation(0, 0b0110, 2, 4), "2-3R2");
    assert_eq!(notation(1, 0b1100, 1, 4), "Uw");
    assert_eq!(notation(1, 0b00111, 1, 5), "3Dw'");
    assert_eq!(notation(2, 0b01000, 1, 5), "2F");
    assert_eq!(notation(0, 0b100, 0, 3), "");

    assert_eq!(
        twist_to_notation(Twist::new(3, 0b1, 1), 3),
        Err(ResolveError::InvalidTwist(
            cubetwist_core::TwistError::AxisOutOfRange(3)
        )),
    );

    let seq = [Twist::new(0, 0b100, 1), Twist::new(1, 0b100, -1)];
    assert_eq!(twists_to_notation(&seq, 3).unwrap().to_string(), "R U'");
}

fn arbitrary_move() -> impl Strategy<Value = Move> {
    let face = prop::sample::select(Face::ALL.to_vec());
    let prefix = prop_oneof![
        (1..=9_u8).prop_map(LayerPrefix::Single),
        (1..=9_u8, 0..=4_u8).prop_map(|(lo, extra)| LayerPrefix::Range(lo, lo + extra)),
    ];
    let family = prop_oneof![
        face.clone().prop_map(Family::Face),
        (face, any::<bool>()).prop_map(|(face, lowercase)| Family::Wide { face, lowercase }),
        any::<Slice>().prop_map(Family::Slice),
        any::<CubeRotation>().prop_map(Family::Rotation),
    ];
    (prop::option::of(prefix), family)
        .prop_map(|(layers, family)| Move { layers, family })
        .prop_filter("prefix must suit the family", |m| m.check().is_ok())
}

fn arbitrary_node_list() -> impl Strategy<Value = NodeList> {
    let multiplier = (-10..=10_i32).prop_map(Multiplier);
    let leaf = prop_oneof![
        4 => (arbitrary_move(), multiplier.clone())
            .prop_map(|(m, mult)| RepeatableNode::Move(m).with_multiplier(mult)),
        1 => Just(Node::Pause),
    ];
    let node = leaf.prop_recursive(
        3,  // 3 levels deep
        24, // max size of 24 nodes
        4,  // 4 items per collection
        move |inner| {
            let node_list = prop::collection::vec(inner, 0..4).prop_map(NodeList);
            let branch = prop_oneof![
                node_list.clone().prop_map(RepeatableNode::Group),
                (any::<BinaryGroupKind>(), [node_list.clone(), node_list])
                    .prop_map(|(kind, contents)| RepeatableNode::BinaryGroup { kind, contents }),
            ];
            (branch, multiplier.clone()).prop_map(|(node, mult)| node.with_multiplier(mult))
        },
    );
    prop::collection::vec(node, 0..6).prop_map(NodeList)
}

fn arbitrary_twist() -> impl Strategy<Value = (Twist, u8)> {
    (2..=5_u8).prop_flat_map(|layer_count| {
        let all_layers: LayerMaskUint = (1 << layer_count) - 1;
        (0..3_u8, 0..=all_layers, -2..=2_i8)
            .prop_map(move |(axis, mask, angle)| (Twist::new(axis, mask, angle), layer_count))
    })
}

fn state_after(layer_count: u8, twists: &[Twist]) -> CubeState {
    let variant = VariantDescriptor::for_layer_count(layer_count).unwrap();
    let mut state = CubeState::new(variant);
    for &twist in twists {
        state.apply_twist(twist).unwrap();
    }
    state
}

proptest! {
    #[test]
    fn proptest_notation_roundtrip(node_list in arbitrary_node_list()) {
        assert_eq!(parse_notation(&node_list.to_string()), Ok(node_list));
    }

    #[test]
    fn proptest_twist_notation_roundtrip((twist, layer_count) in arbitrary_twist()) {
        let notation = twist_to_notation(twist, layer_count).unwrap();
        let reparsed = parse_notation(&notation.to_string()).unwrap();
        let resolved = reparsed.to_twists(layer_count).unwrap();
        assert_eq!(
            state_after(layer_count, &resolved),
            state_after(layer_count, &[twist]),
        );
    }

    #[test]
    fn proptest_inverse_undoes_notation(node_list in arbitrary_node_list()) {
        let Ok(forward) = node_list.to_twists(3) else {
            return Ok(());
        };
        let backward = node_list.inv().unwrap().to_twists(3).unwrap();
        let mut all = forward;
        all.extend(backward);
        prop_assert!(state_after(3, &all).is_solved());
    }
}
