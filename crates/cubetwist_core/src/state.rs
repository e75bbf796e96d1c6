use smallvec::SmallVec;

use crate::variant::tables::{
    CENTER_TO_SIDE, CORNER_TO_FACE, EDGE_TO_ANGLE, EDGE_TO_AXIS, EDGE_TO_FACE,
    cube_orientation_from_sides,
};
use crate::variant::{PrimitiveOp, TwistPrimitive};
use crate::*;

/// Location and orientation of every part of a cube.
///
/// Parts and locations share one global numbering: corners first, then edges,
/// then sides, then the single center part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeState {
    variant: &'static VariantDescriptor,
    corners: PartArrays,
    edges: PartArrays,
    sides: PartArrays,
}

impl CubeState {
    /// Returns the solved state of a variant.
    pub fn new(variant: &'static VariantDescriptor) -> Self {
        Self {
            variant,
            corners: PartArrays::identity(variant.corner_count, 3),
            edges: PartArrays::identity(variant.edge_count, 2),
            sides: PartArrays::identity(variant.side_count, 4),
        }
    }

    /// Constructs a state from part arrays, checking that it could be
    /// reached by twisting.
    pub fn from_parts(
        variant: &'static VariantDescriptor,
        corners: PartArrays,
        edges: PartArrays,
        sides: PartArrays,
    ) -> Result<Self, ConfigurationError> {
        let expected = [
            (PartType::Corner, &corners, variant.corner_count),
            (PartType::Edge, &edges, variant.edge_count),
            (PartType::Side, &sides, variant.side_count),
        ];
        for (part_type, arrays, count) in expected {
            if arrays.len() != count || arrays.modulus() != part_type.orientation_modulus() {
                return Err(ConfigurationError::NotAPermutation(part_type));
            }
        }
        let ret = Self {
            variant,
            corners,
            edges,
            sides,
        };
        ret.check_invariants()?;
        Ok(ret)
    }

    /// Returns the variant descriptor.
    pub fn variant(&self) -> &'static VariantDescriptor {
        self.variant
    }
    /// Returns the number of layers along each axis.
    pub fn layer_count(&self) -> u8 {
        self.variant.layer_count
    }
    /// Returns the total number of parts, including the center part.
    pub fn part_count(&self) -> usize {
        self.variant.part_count()
    }

    /// Returns the corner arrays.
    pub fn corners(&self) -> &PartArrays {
        &self.corners
    }
    /// Returns the edge arrays.
    pub fn edges(&self) -> &PartArrays {
        &self.edges
    }
    /// Returns the side arrays.
    pub fn sides(&self) -> &PartArrays {
        &self.sides
    }
    fn arrays(&self, part_type: PartType) -> Option<&PartArrays> {
        match part_type {
            PartType::Corner => Some(&self.corners),
            PartType::Edge => Some(&self.edges),
            PartType::Side => Some(&self.sides),
            PartType::Center => None,
        }
    }

    /// Returns every part to its home location and orientation.
    pub fn reset(&mut self) {
        *self = Self::new(self.variant);
    }

    /// Returns whether every part is at its home location and orientation.
    pub fn is_solved(&self) -> bool {
        self.corners.is_identity() && self.edges.is_identity() && self.sides.is_identity()
    }

    /// Returns the parts that are not at their home location and orientation,
    /// in ascending order.
    pub fn unsolved_parts(&self) -> Vec<usize> {
        let mut ret: Vec<usize> = self
            .changed_locations(&Self::new(self.variant))
            .into_iter()
            .filter_map(|loc| self.part_at(loc))
            .collect();
        ret.sort_unstable();
        ret
    }

    /// Returns the class of `part`.
    pub fn part_type(&self, part: usize) -> Option<PartType> {
        Some(self.variant.split_part(part)?.0)
    }

    /// Returns the part at the global location `location`.
    pub fn part_at(&self, location: usize) -> Option<usize> {
        let (part_type, i) = self.variant.split_part(location)?;
        let part = match self.arrays(part_type) {
            Some(arrays) => arrays.part_at(i)?,
            None => 0,
        };
        Some(self.variant.join_part(part_type, part))
    }

    /// Returns the global location of `part`.
    pub fn part_location(&self, part: usize) -> Option<usize> {
        let (part_type, i) = self.variant.split_part(part)?;
        let loc = match self.arrays(part_type) {
            Some(arrays) => arrays.location_of(i)?,
            None => 0,
        };
        Some(self.variant.join_part(part_type, loc))
    }

    /// Returns the orientation of `part`. The orientation of the center part
    /// is the whole-cube orientation, or 0 if the cube has no sides.
    pub fn part_orientation(&self, part: usize) -> Option<u8> {
        let (part_type, i) = self.variant.split_part(part)?;
        match self.arrays(part_type) {
            Some(arrays) => arrays.orientation_of(i),
            None => Some(self.cube_orientation().unwrap_or(0)),
        }
    }

    /// Returns the corner at a corner location.
    pub fn corner_at(&self, location: usize) -> Option<usize> {
        self.corners.part_at(location)
    }
    /// Returns the edge at an edge location.
    pub fn edge_at(&self, location: usize) -> Option<usize> {
        self.edges.part_at(location)
    }
    /// Returns the side at a side location.
    pub fn side_at(&self, location: usize) -> Option<usize> {
        self.sides.part_at(location)
    }
    /// Returns the location of a corner.
    pub fn corner_location(&self, corner: usize) -> Option<usize> {
        self.corners.location_of(corner)
    }
    /// Returns the location of an edge.
    pub fn edge_location(&self, edge: usize) -> Option<usize> {
        self.edges.location_of(edge)
    }
    /// Returns the location of a side.
    pub fn side_location(&self, side: usize) -> Option<usize> {
        self.sides.location_of(side)
    }

    /// Returns the whole-cube orientation in `0..24`, derived from which
    /// sides occupy the front and right locations. Returns `None` for
    /// variants without sides.
    pub fn cube_orientation(&self) -> Option<u8> {
        let front = self.sides.part_at(Face::F.index())?;
        let right = self.sides.part_at(Face::R.index())?;
        cube_orientation_from_sides(front, right)
    }

    /// Returns the class of a part, its index within that class, and its
    /// location within that class, after checking that `orientation` names
    /// one of its faces.
    pub(crate) fn locate(
        &self,
        part: usize,
        orientation: u8,
    ) -> Result<(PartType, usize), TwistError> {
        let (part_type, i) =
            self.variant
                .split_part(part)
                .ok_or(TwistError::PartOutOfRange {
                    part,
                    part_count: self.part_count(),
                })?;
        // Sides show one face but callers pass the face orientation through
        // unchanged, so it is ignored rather than checked.
        if part_type != PartType::Side && orientation >= part_type.face_count() {
            return Err(TwistError::OrientationOutOfRange {
                orientation,
                part_type,
            });
        }
        let loc = match self.arrays(part_type) {
            Some(arrays) => arrays.location_of(i).ok_or(TwistError::PartOutOfRange {
                part,
                part_count: self.part_count(),
            })?,
            None => 0,
        };
        Ok((part_type, loc))
    }

    /// Returns the face on which the sticker at `orientation` of `part`
    /// currently appears.
    pub fn part_face(&self, part: usize, orientation: u8) -> Option<Face> {
        let (part_type, loc) = self.locate(part, orientation).ok()?;
        let face = match part_type {
            PartType::Corner => {
                let cur = self.corners.orientation_at(loc)?;
                CORNER_TO_FACE[loc][usize::from((3 + orientation - cur) % 3)]
            }
            PartType::Edge => {
                let cur = self.edges.orientation_at(loc)?;
                EDGE_TO_FACE[loc % 12][usize::from((cur + orientation) % 2)]
            }
            PartType::Side => (loc % 6) as u8,
            PartType::Center => {
                let cube_orientation = self.cube_orientation().unwrap_or(0);
                CENTER_TO_SIDE[usize::from(cube_orientation)][usize::from(orientation)]
            }
        };
        Face::from_index(usize::from(face))
    }

    /// Returns the axis of the twist that moves `part` when it is clicked at
    /// `orientation`. The center part has no axis.
    pub fn part_axis(&self, part: usize, orientation: u8) -> Option<u8> {
        let (part_type, loc) = self.locate(part, orientation).ok()?;
        match part_type {
            PartType::Corner | PartType::Side => Some(self.part_face(part, orientation)?.axis()),
            PartType::Edge => Some(EDGE_TO_AXIS[loc % 12]),
            PartType::Center => None,
        }
    }

    /// Returns the clockwise angle (`1` or `-1`) of the twist that moves
    /// `part` when it is clicked at `orientation`. The center part has no
    /// angle.
    pub fn part_angle(&self, part: usize, orientation: u8) -> Option<i8> {
        let (part_type, loc) = self.locate(part, orientation).ok()?;
        match part_type {
            PartType::Edge => {
                let cur = self.edges.orientation_at(loc)?;
                Some(EDGE_TO_ANGLE[loc % 12][usize::from((cur + orientation) % 2)])
            }
            PartType::Corner | PartType::Side => {
                Some(if self.part_face(part, orientation)?.is_positive() {
                    1
                } else {
                    -1
                })
            }
            PartType::Center => None,
        }
    }

    /// Returns the layer mask of the twist that moves `part` when it is
    /// clicked at `orientation`. The center part has layer mask 0.
    pub fn part_layer_mask(&self, part: usize, orientation: u8) -> Option<LayerMaskUint> {
        let (part_type, loc) = self.locate(part, orientation).ok()?;
        if part_type == PartType::Center {
            return Some(0);
        }
        let face = self.part_face(part, orientation)?;
        Some((self.variant.click_layer_mask)(part_type, loc, face))
    }

    /// Applies a twist, returning the global locations whose occupant or
    /// orientation changed.
    ///
    /// The twist is fully validated before anything is modified. A twist with
    /// angle 0 modifies nothing.
    pub fn apply_twist(&mut self, twist: Twist) -> Result<Vec<usize>, TwistError> {
        twist.validate(self.layer_count())?;
        let primitives = twist
            .layers()
            .map(|layer| {
                self.variant
                    .primitive(twist.axis, layer)
                    .ok_or(TwistError::MissingPrimitive {
                        axis: twist.axis,
                        layer,
                    })
            })
            .collect::<Result<SmallVec<[&TwistPrimitive; 8]>, _>>()?;
        if twist.angle == 0 {
            return Ok(vec![]);
        }

        let before = self.clone();
        for primitive in primitives {
            for _ in 0..primitive.repetitions(twist.angle) {
                self.apply_primitive(primitive);
            }
        }
        Ok(self.changed_locations(&before))
    }

    fn apply_primitive(&mut self, primitive: &TwistPrimitive) {
        log::trace!("applying primitive {}", primitive.name);
        for op in primitive.ops {
            match *op {
                PrimitiveOp::Corners { slots, deltas } => self.corners.four_cycle(slots, deltas),
                PrimitiveOp::Edges { slots, deltas } => self.edges.four_cycle(slots, deltas),
                PrimitiveOp::Sides { slots, deltas } => self.sides.four_cycle(slots, deltas),
                PrimitiveOp::Spin { slot, delta } => self.sides.spin(slot, delta),
            }
        }
    }

    /// Applies `tx`, interpreted as the permutation that takes the solved
    /// state to `tx`, on top of this state. Returns the global locations that
    /// changed.
    pub fn transform_by(&mut self, tx: &CubeState) -> Result<Vec<usize>, TwistError> {
        self.check_same_variant(tx)?;
        let before = self.clone();
        self.corners = self.corners.compose(&tx.corners);
        self.edges = self.edges.compose(&tx.edges);
        self.sides = self.sides.compose(&tx.sides);
        Ok(self.changed_locations(&before))
    }

    /// Replaces this state with `other`, returning the global locations that
    /// changed.
    pub fn set_to(&mut self, other: &CubeState) -> Result<Vec<usize>, TwistError> {
        self.check_same_variant(other)?;
        let changed = self.changed_locations(other);
        self.clone_from(other);
        Ok(changed)
    }

    fn check_same_variant(&self, other: &CubeState) -> Result<(), TwistError> {
        if self.variant == other.variant {
            Ok(())
        } else {
            Err(TwistError::LayerCountMismatch {
                expected: self.layer_count(),
                got: other.layer_count(),
            })
        }
    }

    /// Returns the global locations whose occupant or orientation differs
    /// from `other`. Both states must belong to the same variant.
    pub fn changed_locations(&self, other: &CubeState) -> Vec<usize> {
        let v = self.variant;
        let corners = self.corners.changed_locations(&other.corners);
        let edges = self.edges.changed_locations(&other.edges);
        let sides = self.sides.changed_locations(&other.sides);
        corners
            .chain(edges.map(|i| v.join_part(PartType::Edge, i)))
            .chain(sides.map(|i| v.join_part(PartType::Side, i)))
            .collect()
    }

    /// Returns `true` if the permutation of each class is odd, in the order
    /// corners, edges, sides.
    pub fn parities(&self) -> [bool; 3] {
        [
            self.corners.parity(),
            self.edges.parity(),
            self.sides.parity(),
        ]
    }

    /// Checks the orientation and parity constraints every reachable state
    /// satisfies.
    ///
    /// On 3-layer cubes, corner and edge parity differ exactly when the side
    /// permutation is odd. Larger cubes move several edge rings at once and
    /// have no such relation.
    pub fn check_invariants(&self) -> Result<(), ConfigurationError> {
        if self.corners.orientation_sum() % 3 != 0 {
            return Err(ConfigurationError::CornerOrientation);
        }
        if self.edges.orientation_sum() % 2 != 0 {
            return Err(ConfigurationError::EdgeOrientation);
        }
        if self.layer_count() == 3 {
            let [c, e, s] = self.parities();
            if c ^ e != s {
                return Err(ConfigurationError::Parity);
            }
        }
        Ok(())
    }
}
