//! Conversion between cube states and sticker grids.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::variant::StickerLayout;
use crate::*;

/// Six faces of stickers in the order R, U, F, L, D, B. Stickers on each face
/// are listed in row-major order as seen when looking at that face.
///
/// Each sticker holds a marking. In grids produced by this crate the marking
/// is the index of the face that the sticker is on when the cube is solved.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct StickerGrid(pub Vec<Vec<u8>>);

impl StickerGrid {
    /// Returns the grid of a solved cube.
    pub fn solved(stickers_per_face: usize) -> Self {
        Self((0..FACE_COUNT as u8).map(|f| vec![f; stickers_per_face]).collect())
    }

    /// Returns the stickers on each face.
    pub fn faces(&self) -> &[Vec<u8>] {
        &self.0
    }

    /// Returns the sticker at `cell` on `face`.
    pub fn get(&self, face: Face, cell: usize) -> Option<u8> {
        self.0.get(face.index())?.get(cell).copied()
    }

    /// Returns the cells at which two grids differ, as `(face, cell)` pairs.
    pub fn diff(&self, other: &StickerGrid) -> Vec<(usize, usize)> {
        let mut ret = vec![];
        for (f, (a, b)) in self.0.iter().zip(&other.0).enumerate() {
            ret.extend(
                a.iter()
                    .zip(b)
                    .positions(|(x, y)| x != y)
                    .map(|cell| (f, cell)),
            );
        }
        ret
    }

    /// Returns the grid as lines like `R:RRRRUUUU`, writing each sticker as
    /// the letter of the face whose center shows the same marking.
    ///
    /// The result does not depend on how the whole cube is held. Grids
    /// without centers (even layer counts) use the marking as a face index
    /// directly. Unrecognized markings are written as `?`.
    pub fn to_normalized_string(&self) -> String {
        let center_cell = self
            .0
            .first()
            .map(|face| face.len())
            .and_then(|len| {
                let n = len.isqrt();
                (n * n == len && n % 2 == 1).then_some(len / 2)
            });
        let letter = |marking: u8| -> char {
            let face = match center_cell {
                Some(c) => self.0.iter().position(|face| face.get(c) == Some(&marking)),
                None => Some(usize::from(marking)),
            };
            face.and_then(Face::from_index)
                .map_or('?', |f| f.to_string().chars().next().unwrap_or('?'))
        };
        Face::ALL
            .iter()
            .zip(&self.0)
            .map(|(face, stickers)| format!("{face}:{}", stickers.iter().map(|&m| letter(m)).join("")))
            .join("\n")
    }
}

impl fmt::Display for StickerGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (face, stickers) in Face::ALL.iter().zip(&self.0) {
            writeln!(f, "{face}: {}", stickers.iter().join(" "))?;
        }
        Ok(())
    }
}

fn cell(pair: &[u8]) -> (usize, usize) {
    (usize::from(pair[0]), usize::from(pair[1]))
}

fn corner_faces(layout: &StickerLayout, corner: usize) -> [u8; 3] {
    let c = layout.corners[corner];
    [c[0], c[2], c[4]]
}

fn edge_faces(layout: &StickerLayout, edge: usize) -> [u8; 2] {
    let e = layout.edges[edge];
    [e[0], e[2]]
}

/// Finds the corner and orientation that shows `observed` at a corner
/// location.
pub(crate) fn match_corner(layout: &StickerLayout, observed: [u8; 3]) -> Option<(usize, u8)> {
    (0..layout.corners.len())
        .cartesian_product(0..3)
        .find(|&(corner, o)| {
            let faces = corner_faces(layout, corner);
            (0..3).all(|k| observed[k] == faces[(k + o) % 3])
        })
        .map(|(corner, o)| (corner, o as u8))
}

/// Finds the edge and orientation that shows `observed` at an edge location.
pub(crate) fn match_edge(layout: &StickerLayout, observed: [u8; 2]) -> Option<(usize, u8)> {
    (0..layout.edges.len()).find_map(|edge| {
        let [a, b] = edge_faces(layout, edge);
        if observed == [a, b] {
            Some((edge, 0))
        } else if observed == [b, a] {
            Some((edge, 1))
        } else {
            None
        }
    })
}

/// Reads the stickers of each corner location of `grid`.
pub(crate) fn observed_corners(layout: &StickerLayout, grid: &[Vec<u8>]) -> Vec<[u8; 3]> {
    layout
        .corners
        .iter()
        .map(|c| {
            [0, 1, 2].map(|k| {
                let (f, i) = cell(&c[2 * k..]);
                grid[f][i]
            })
        })
        .collect()
}

/// Reads the stickers of each edge location of `grid`.
pub(crate) fn observed_edges(layout: &StickerLayout, grid: &[Vec<u8>]) -> Vec<[u8; 2]> {
    layout
        .edges
        .iter()
        .map(|e| {
            [0, 1].map(|k| {
                let (f, i) = cell(&e[2 * k..]);
                grid[f][i]
            })
        })
        .collect()
}

/// Assigns a part to each location from per-location matches, rejecting any
/// part claimed twice.
fn assign<T>(
    observed: &[T],
    count: usize,
    find: impl Fn(&T) -> Option<(usize, u8)>,
    unmatched: impl Fn(usize) -> ConfigurationError,
    duplicate: impl Fn(usize) -> ConfigurationError,
) -> Result<(Vec<usize>, Vec<u8>), ConfigurationError> {
    let mut seen = vec![false; count];
    let mut parts = Vec::with_capacity(observed.len());
    let mut orientations = Vec::with_capacity(observed.len());
    for (loc, obs) in observed.iter().enumerate() {
        let (part, o) = find(obs).ok_or_else(|| unmatched(loc))?;
        if std::mem::replace(&mut seen[part], true) {
            return Err(duplicate(part));
        }
        parts.push(part);
        orientations.push(o);
    }
    Ok((parts, orientations))
}

fn layout_of(variant: &VariantDescriptor) -> Result<&'static StickerLayout, ConfigurationError> {
    variant
        .stickers
        .ok_or(ConfigurationError::StickersUnsupported(variant.layer_count))
}

impl CubeState {
    /// Returns the stickers of this state.
    pub fn to_stickers(&self) -> Result<StickerGrid, ConfigurationError> {
        let layout = layout_of(self.variant())?;
        let mut grid = StickerGrid::solved(layout.stickers_per_face).0;

        for (loc, &side) in self.sides().parts().iter().enumerate() {
            let (f, i) = cell(&layout.sides[loc]);
            grid[f][i] = layout.sides[side][0];
        }
        let edges = self.edges();
        for (loc, (&edge, &o)) in edges.parts().iter().zip(edges.orientations()).enumerate() {
            let faces = edge_faces(layout, edge);
            for k in 0..2 {
                let (f, i) = cell(&layout.edges[loc][2 * k..]);
                grid[f][i] = faces[(k + usize::from(o)) % 2];
            }
        }
        let corners = self.corners();
        for (loc, (&corner, &o)) in corners.parts().iter().zip(corners.orientations()).enumerate() {
            let faces = corner_faces(layout, corner);
            for k in 0..3 {
                let (f, i) = cell(&layout.corners[loc][2 * k..]);
                grid[f][i] = faces[(k + usize::from(o)) % 3];
            }
        }
        Ok(StickerGrid(grid))
    }

    /// Reconstructs a state from its stickers.
    ///
    /// Every sticker must hold a face index. Side orientation cannot be seen,
    /// so every side is given orientation 0.
    pub fn from_stickers(
        variant: &'static VariantDescriptor,
        grid: &StickerGrid,
    ) -> Result<Self, ConfigurationError> {
        let layout = layout_of(variant)?;
        let stickers_per_face = layout.stickers_per_face;
        if grid.0.len() != FACE_COUNT || grid.0.iter().any(|face| face.len() != stickers_per_face) {
            return Err(ConfigurationError::WrongShape { stickers_per_face });
        }
        for (face, stickers) in grid.0.iter().enumerate() {
            if let Some((index, &value)) = stickers.iter().find_position(|&&v| usize::from(v) >= FACE_COUNT) {
                return Err(ConfigurationError::FaceletOutOfRange { face, index, value });
            }
        }

        let side_markings: Vec<u8> = layout
            .sides
            .iter()
            .map(|s| {
                let (f, i) = cell(s);
                grid.0[f][i]
            })
            .collect();
        let (side_parts, _) = assign(
            &side_markings,
            variant.side_count,
            |&m| Some((layout.sides.iter().position(|s| s[0] == m)?, 0)),
            |_| ConfigurationError::NotAPermutation(PartType::Side),
            ConfigurationError::DuplicateSide,
        )?;
        let (edge_parts, edge_orientations) = assign(
            &observed_edges(layout, &grid.0),
            variant.edge_count,
            |&obs| match_edge(layout, obs),
            ConfigurationError::UnmatchedEdge,
            ConfigurationError::DuplicateEdge,
        )?;
        let (corner_parts, corner_orientations) = assign(
            &observed_corners(layout, &grid.0),
            variant.corner_count,
            |&obs| match_corner(layout, obs),
            ConfigurationError::UnmatchedCorner,
            ConfigurationError::DuplicateCorner,
        )?;

        let side_orientations = vec![0; side_parts.len()];
        let ret = CubeState::from_parts(
            variant,
            PartArrays::new(PartType::Corner, corner_parts, corner_orientations)?,
            PartArrays::new(PartType::Edge, edge_parts, edge_orientations)?,
            PartArrays::new(PartType::Side, side_parts, side_orientations)?,
        )?;
        log::debug!("imported stickers for {}-layer cube", variant.layer_count);
        Ok(ret)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::variant::{POCKET, REVENGE, RUBIK};

    #[test]
    fn test_solved_stickers() {
        for variant in [&POCKET, &RUBIK] {
            let s = CubeState::new(variant);
            let grid = s.to_stickers().unwrap();
            let n = usize::from(variant.layer_count);
            assert_eq!(grid, StickerGrid::solved(n * n));
            assert_eq!(CubeState::from_stickers(variant, &grid), Ok(s));
        }
    }

    #[test]
    fn test_pocket_r() {
        let mut s = CubeState::new(&POCKET);
        s.apply_twist(Twist::new(0, 0b10, 1)).unwrap();
        let grid = s.to_stickers().unwrap();
        assert_eq!(
            grid.0,
            vec![
                vec![0, 0, 0, 0],
                vec![1, 2, 1, 2],
                vec![2, 4, 2, 4],
                vec![3, 3, 3, 3],
                vec![4, 5, 4, 5],
                vec![1, 5, 1, 5],
            ],
        );
    }

    #[test]
    fn test_unsupported_variant() {
        assert_eq!(
            CubeState::new(&REVENGE).to_stickers(),
            Err(ConfigurationError::StickersUnsupported(4)),
        );
    }

    #[test]
    fn test_rejects_bad_grids() {
        let mut grid = StickerGrid::solved(9);
        grid.0[2].pop();
        assert_eq!(
            CubeState::from_stickers(&RUBIK, &grid),
            Err(ConfigurationError::WrongShape {
                stickers_per_face: 9,
            }),
        );

        let mut grid = StickerGrid::solved(9);
        grid.0[3][7] = 6;
        assert_eq!(
            CubeState::from_stickers(&RUBIK, &grid),
            Err(ConfigurationError::FaceletOutOfRange {
                face: 3,
                index: 7,
                value: 6,
            }),
        );

        // Two U centers.
        let mut grid = StickerGrid::solved(9);
        grid.0[0][4] = 1;
        assert_eq!(
            CubeState::from_stickers(&RUBIK, &grid),
            Err(ConfigurationError::DuplicateSide(1)),
        );

        // Flip one edge in place.
        let mut grid = StickerGrid::solved(9);
        grid.0[1][5] = 0;
        grid.0[0][1] = 1;
        assert_eq!(
            CubeState::from_stickers(&RUBIK, &grid),
            Err(ConfigurationError::EdgeOrientation),
        );

        // Sticker pair that belongs to no edge.
        let mut grid = StickerGrid::solved(9);
        grid.0[1][5] = 3;
        assert_eq!(
            CubeState::from_stickers(&RUBIK, &grid),
            Err(ConfigurationError::UnmatchedEdge(0)),
        );
    }

    #[test]
    fn test_normalized_string_ignores_rotation() {
        let mut s = CubeState::new(&RUBIK);
        s.apply_twist(Twist::new(1, 0b111, 1)).unwrap();
        let grid = s.to_stickers().unwrap();
        assert_ne!(grid, StickerGrid::solved(9));
        assert_eq!(
            grid.to_normalized_string(),
            StickerGrid::solved(9).to_normalized_string(),
        );
        assert_eq!(
            StickerGrid::solved(4).to_normalized_string(),
            "R:RRRR\nU:UUUU\nF:FFFF\nL:LLLL\nD:DDDD\nB:BBBB",
        );
    }
}
