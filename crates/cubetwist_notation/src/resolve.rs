//! Conversion between notation and twists.

use std::ops::RangeInclusive;

use cubetwist_core::{Face, LayerMaskUint, Twist, TwistError};
use itertools::Itertools;

use crate::*;

/// Maximum number of twists a node list may expand to.
pub const MAX_EXPANDED_TWISTS: usize = 100_000;

impl NodeList {
    /// Expands groups and multipliers and returns the twists for a cube with
    /// `layer_count` layers. Moves that cancel out, such as `R4`, and pauses
    /// produce no twist.
    pub fn to_twists(&self, layer_count: u8) -> Result<Vec<Twist>, ResolveError> {
        let mut out = vec![];
        expand_list(self, layer_count, &mut out)?;
        Ok(out)
    }
}

fn expand_list(
    nodes: &NodeList,
    layer_count: u8,
    out: &mut Vec<Twist>,
) -> Result<(), ResolveError> {
    nodes.iter().try_for_each(|node| expand_node(node, layer_count, out))
}

fn expand_node(node: &Node, layer_count: u8, out: &mut Vec<Twist>) -> Result<(), ResolveError> {
    let Node::RepeatedNode { inner, multiplier } = node else {
        return Ok(());
    };

    if let RepeatableNode::Move(m) = inner {
        if let Some(twist) = m.to_twist(layer_count, *multiplier)? {
            push(out, twist)?;
        }
        return Ok(());
    }

    let mut once = vec![];
    match inner {
        RepeatableNode::Move(_) => (),
        RepeatableNode::Group(contents) => expand_list(contents, layer_count, &mut once)?,
        RepeatableNode::BinaryGroup {
            kind,
            contents: [a, b],
        } => {
            expand_list(a, layer_count, &mut once)?;
            expand_list(b, layer_count, &mut once)?;
            expand_list(&a.inv()?, layer_count, &mut once)?;
            if *kind == BinaryGroupKind::Commutator {
                expand_list(&b.inv()?, layer_count, &mut once)?;
            }
        }
    }
    if multiplier.0 < 0 {
        once = once.into_iter().rev().map(|t| t.inverse()).collect();
    }
    if once.is_empty() {
        return Ok(());
    }
    let repeats = multiplier.0.unsigned_abs() as usize;
    if once.len().saturating_mul(repeats).saturating_add(out.len()) > MAX_EXPANDED_TWISTS {
        return Err(ResolveError::TooManyTwists);
    }
    for _ in 0..repeats {
        out.extend_from_slice(&once);
    }
    Ok(())
}

fn push(out: &mut Vec<Twist>, twist: Twist) -> Result<(), ResolveError> {
    if out.len() >= MAX_EXPANDED_TWISTS {
        return Err(ResolveError::TooManyTwists);
    }
    out.push(twist);
    Ok(())
}

impl Move {
    /// Returns the twist for this move repeated `multiplier` times on a cube
    /// with `layer_count` layers, or `None` if the repetitions cancel out.
    pub fn to_twist(
        &self,
        layer_count: u8,
        multiplier: Multiplier,
    ) -> Result<Option<Twist>, ResolveError> {
        let face = self.family.reference_face();
        let layer_mask = self.layer_mask(layer_count)?;
        let sign = if face.is_positive() { 1 } else { -1 };
        let angle = multiplier.quarter_turns(sign);
        if angle == 0 {
            return Ok(None);
        }
        let twist = Twist::new(face.axis(), layer_mask, angle);
        twist.validate(layer_count)?;
        Ok(Some(twist))
    }

    /// Returns the layer mask for this move on a cube with `layer_count`
    /// layers.
    pub fn layer_mask(&self, layer_count: u8) -> Result<LayerMaskUint, ResolveError> {
        let face = self.family.reference_face();
        let layers = match self.family {
            Family::Face(_) => self.layers.map_or(1..=1, LayerPrefix::layers),
            Family::Wide { .. } => match self.layers {
                Some(LayerPrefix::Single(depth)) => 1..=depth,
                _ => 1..=2,
            },
            Family::Slice(_) => {
                if layer_count % 2 == 0 {
                    return Err(ResolveError::NoMiddleLayer {
                        family: self.family,
                        layer_count,
                    });
                }
                let middle = layer_count / 2 + 1;
                middle..=middle
            }
            Family::Rotation(_) => 1..=layer_count,
        };
        if let Some(&layer) = [layers.start(), layers.end()]
            .into_iter()
            .find(|&&layer| layer == 0 || layer > layer_count)
        {
            return Err(ResolveError::LayerOutOfRange { layer, layer_count });
        }
        Ok(layers
            .map(|layer| 1 << layer_index(face, layer, layer_count))
            .fold(0, |a, b| a | b))
    }
}

/// Returns the index of a layer along the axis of `face`, where index 0 is
/// on the negative end of the axis.
fn layer_index(face: Face, layer: u8, layer_count: u8) -> u8 {
    if face.is_positive() {
        layer_count - layer
    } else {
        layer - 1
    }
}

/// Returns notation for a twist on a cube with `layer_count` layers.
///
/// Twists of the whole cube become rotations. Otherwise each maximal run of
/// adjacent layers in the layer mask becomes one move, named from the face
/// nearest to it.
pub fn twist_to_notation(twist: Twist, layer_count: u8) -> Result<NodeList, ResolveError> {
    twist.validate(layer_count)?;
    if twist.angle == 0 || twist.layer_mask == 0 {
        return Ok(NodeList::new());
    }
    // Validated above, so the axis names one of R, U, or F.
    let positive_face = Face::from_index(usize::from(twist.axis))
        .ok_or(TwistError::AxisOutOfRange(twist.axis))?;

    let all_layers: LayerMaskUint = (1 << layer_count) - 1;
    if twist.layer_mask == all_layers {
        let rotation = CubeRotation::from_axis(twist.axis)
            .ok_or(TwistError::AxisOutOfRange(twist.axis))?;
        let m = Move::from(Family::Rotation(rotation));
        return Ok(NodeList(vec![moved(m, positive_face, twist.angle)]));
    }

    let ret = layer_runs(twist)
        .map(|indices| {
            let m = move_for_run(positive_face, indices, layer_count);
            let face = m.family.reference_face();
            moved(m, face, twist.angle)
        })
        .collect();
    Ok(ret)
}

/// Returns notation for a sequence of twists.
pub fn twists_to_notation(twists: &[Twist], layer_count: u8) -> Result<NodeList, ResolveError> {
    let mut ret = NodeList::new();
    for &twist in twists {
        ret.extend(twist_to_notation(twist, layer_count)?.0);
    }
    Ok(ret)
}

/// Returns a node for `m` turning by `angle` relative to the positive end of
/// the axis, written relative to `face`.
fn moved(m: Move, face: Face, angle: i8) -> Node {
    let relative = if face.is_positive() { angle } else { -angle };
    let multiplier = match relative {
        -2 | 2 => 2,
        r => i32::from(r),
    };
    RepeatableNode::Move(m).with_multiplier(multiplier)
}

/// Returns each maximal run of adjacent layers in the twist, as inclusive
/// ranges of layer indices.
fn layer_runs(twist: Twist) -> impl Iterator<Item = RangeInclusive<u8>> {
    twist.layers().map(|i| i..=i).coalesce(|a, b| {
        if *a.end() + 1 == *b.start() {
            Ok(*a.start()..=*b.end())
        } else {
            Err((a, b))
        }
    })
}

fn move_for_run(positive_face: Face, indices: RangeInclusive<u8>, layer_count: u8) -> Move {
    let (lo, hi) = (*indices.start(), *indices.end());
    let top = layer_count - 1;
    let depth = hi - lo + 1;

    let outer = if hi == top {
        Some(positive_face)
    } else if lo == 0 {
        Some(positive_face.opposite())
    } else {
        None
    };
    if let Some(face) = outer {
        return match depth {
            1 => Move::from(Family::Face(face)),
            2 => Move::from(Family::Wide {
                face,
                lowercase: false,
            }),
            _ => Move {
                layers: Some(LayerPrefix::Single(depth)),
                family: Family::Wide {
                    face,
                    lowercase: false,
                },
            },
        };
    }

    if depth == 1 && layer_count % 2 == 1 && lo == layer_count / 2 {
        let slice = [Slice::M, Slice::E, Slice::S]
            .into_iter()
            .find(|s| s.reference_face().axis() == positive_face.axis());
        if let Some(slice) = slice {
            return Move::from(Family::Slice(slice));
        }
    }

    // Inner layers, counted from the nearer face.
    let (face, layers) = if top - hi <= lo {
        (positive_face, LayerPrefix::from_range(top - hi + 1, top - lo + 1))
    } else {
        (positive_face.opposite(), LayerPrefix::from_range(lo + 1, hi + 1))
    };
    Move {
        layers: Some(layers),
        family: Family::Face(face),
    }
}
