//! Solvability check for 3x3x3 sticker grids with arbitrary markings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::stickers::{match_corner, match_edge, observed_corners, observed_edges};
use crate::variant::RUBIK;
use crate::*;

const STICKERS_PER_FACE: usize = 9;
const CENTER_CELL: usize = 4;

/// Result of validating a sticker grid.
///
/// The numbering is stable.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[repr(u8)]
pub enum ValidationCode {
    /// The grid describes a solvable cube.
    Valid = 0,
    /// See [`FaceletError::InvalidMarker`].
    InvalidMarker = 1,
    /// See [`FaceletError::InvalidFaceletCount`].
    InvalidFaceletCount = 2,
    /// See [`FaceletError::DuplicateCenterMarking`].
    DuplicateCenterMarking = 3,
    /// See [`FaceletError::InvalidCornerMarkings`].
    InvalidCornerMarkings = 4,
    /// See [`FaceletError::InvalidCornerParity`].
    InvalidCornerParity = 5,
    /// See [`FaceletError::InvalidEdgeMarkings`].
    InvalidEdgeMarkings = 6,
    /// See [`FaceletError::InvalidEdgeParity`].
    InvalidEdgeParity = 7,
    /// See [`FaceletError::InvalidTotalParity`].
    InvalidTotalParity = 8,
}

impl From<FaceletError> for ValidationCode {
    fn from(value: FaceletError) -> Self {
        match value {
            FaceletError::InvalidMarker => Self::InvalidMarker,
            FaceletError::InvalidFaceletCount => Self::InvalidFaceletCount,
            FaceletError::DuplicateCenterMarking => Self::DuplicateCenterMarking,
            FaceletError::InvalidCornerMarkings => Self::InvalidCornerMarkings,
            FaceletError::InvalidCornerParity => Self::InvalidCornerParity,
            FaceletError::InvalidEdgeMarkings => Self::InvalidEdgeMarkings,
            FaceletError::InvalidEdgeParity => Self::InvalidEdgeParity,
            FaceletError::InvalidTotalParity => Self::InvalidTotalParity,
        }
    }
}

/// Checks whether a grid of markings describes a solvable 3x3x3 cube and
/// reconstructs its corners and edges.
///
/// Markings may be any values. They are interpreted through the six centers,
/// so the reconstructed state always has its sides at home.
///
/// Checks run in this order, and the first failure is returned:
///
/// 1. Grid shape (6 faces of 9)
/// 2. Center markings are distinct
/// 3. Every marking matches a center, and each marking appears 9 times
/// 4. Corner stickers match a corner, no corner twice
/// 5. Corner twist
/// 6. Edge stickers match an edge, no edge twice
/// 7. Edge flip
/// 8. Corner and edge permutations have the same parity
pub fn validate(grid: &StickerGrid) -> Result<CubeState, FaceletError> {
    let faces = grid.faces();
    if faces.len() != FACE_COUNT || faces.iter().any(|f| f.len() != STICKERS_PER_FACE) {
        return Err(FaceletError::InvalidFaceletCount);
    }

    let mut face_of_marking = HashMap::new();
    for (face, stickers) in faces.iter().enumerate() {
        if face_of_marking.insert(stickers[CENTER_CELL], face as u8).is_some() {
            return Err(FaceletError::DuplicateCenterMarking);
        }
    }

    let mut counts = [0_usize; FACE_COUNT];
    let mut normalized = Vec::with_capacity(FACE_COUNT);
    for stickers in faces {
        let face = stickers
            .iter()
            .map(|m| face_of_marking.get(m).copied())
            .collect::<Option<Vec<u8>>>()
            .ok_or(FaceletError::InvalidMarker)?;
        for &f in &face {
            counts[usize::from(f)] += 1;
        }
        normalized.push(face);
    }
    if counts.iter().any(|&c| c != STICKERS_PER_FACE) {
        return Err(FaceletError::InvalidFaceletCount);
    }

    let Some(layout) = RUBIK.stickers else {
        return Err(FaceletError::InvalidFaceletCount);
    };

    let (corner_parts, corner_orientations) = assign(
        observed_corners(layout, &normalized)
            .into_iter()
            .map(|obs| match_corner(layout, obs)),
        RUBIK.corner_count,
        FaceletError::InvalidCornerMarkings,
    )?;
    if corner_orientations.iter().map(|&o| u32::from(o)).sum::<u32>() % 3 != 0 {
        return Err(FaceletError::InvalidCornerParity);
    }

    let (edge_parts, edge_orientations) = assign(
        observed_edges(layout, &normalized)
            .into_iter()
            .map(|obs| match_edge(layout, obs)),
        RUBIK.edge_count,
        FaceletError::InvalidEdgeMarkings,
    )?;
    if edge_orientations.iter().map(|&o| u32::from(o)).sum::<u32>() % 2 != 0 {
        return Err(FaceletError::InvalidEdgeParity);
    }

    let corners = PartArrays::new(PartType::Corner, corner_parts, corner_orientations)
        .map_err(|_| FaceletError::InvalidCornerMarkings)?;
    let edges = PartArrays::new(PartType::Edge, edge_parts, edge_orientations)
        .map_err(|_| FaceletError::InvalidEdgeMarkings)?;
    if corners.parity() != edges.parity() {
        return Err(FaceletError::InvalidTotalParity);
    }

    let sides = PartArrays::identity(RUBIK.side_count, 4);
    CubeState::from_parts(&RUBIK, corners, edges, sides)
        .map_err(|_| FaceletError::InvalidTotalParity)
}

/// Returns the [`ValidationCode`] for a grid of markings.
pub fn validation_code(grid: &StickerGrid) -> ValidationCode {
    match validate(grid) {
        Ok(_) => ValidationCode::Valid,
        Err(e) => {
            log::warn!("sticker grid rejected: {e}");
            e.into()
        }
    }
}

fn assign(
    matches: impl Iterator<Item = Option<(usize, u8)>>,
    count: usize,
    error: FaceletError,
) -> Result<(Vec<usize>, Vec<u8>), FaceletError> {
    let mut seen = vec![false; count];
    let mut parts = vec![];
    let mut orientations = vec![];
    for m in matches {
        let (part, o) = m.ok_or(error)?;
        if std::mem::replace(&mut seen[part], true) {
            return Err(error);
        }
        parts.push(part);
        orientations.push(o);
    }
    Ok((parts, orientations))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Solved grid with letters instead of face indices.
    fn lettered() -> StickerGrid {
        StickerGrid(b"RUFLDB".iter().map(|&c| vec![c; 9]).collect())
    }

    fn swap(grid: &mut StickerGrid, a: (usize, usize), b: (usize, usize)) {
        let tmp = grid.0[a.0][a.1];
        grid.0[a.0][a.1] = grid.0[b.0][b.1];
        grid.0[b.0][b.1] = tmp;
    }

    #[test]
    fn test_solved_is_valid() {
        assert_eq!(validate(&StickerGrid::solved(9)), Ok(CubeState::new(&RUBIK)));
        assert_eq!(validation_code(&lettered()), ValidationCode::Valid);
    }

    #[test]
    fn test_duplicate_center() {
        let mut g = lettered();
        g.0[1][4] = g.0[0][4];
        assert_eq!(validation_code(&g), ValidationCode::DuplicateCenterMarking);
    }

    #[test]
    fn test_marker_and_count() {
        let mut g = StickerGrid::solved(9);
        g.0[0][0] = 7;
        assert_eq!(validate(&g), Err(FaceletError::InvalidMarker));
        g.0[0][0] = 1;
        assert_eq!(validate(&g), Err(FaceletError::InvalidFaceletCount));
        assert_eq!(
            validate(&StickerGrid::solved(4)),
            Err(FaceletError::InvalidFaceletCount),
        );
    }

    #[test]
    fn test_corner_errors() {
        // Two stickers of corner urf exchanged.
        let mut g = lettered();
        swap(&mut g, (1, 8), (0, 0));
        assert_eq!(validate(&g), Err(FaceletError::InvalidCornerMarkings));

        // Corner urf twisted in place.
        let mut g = lettered();
        swap(&mut g, (1, 8), (0, 0));
        swap(&mut g, (1, 8), (2, 2));
        assert_eq!(validate(&g), Err(FaceletError::InvalidCornerParity));
    }

    #[test]
    fn test_edge_errors() {
        // Edge ur flipped in place.
        let mut g = lettered();
        swap(&mut g, (1, 5), (0, 1));
        assert_eq!(validate(&g), Err(FaceletError::InvalidEdgeParity));

        // Edges ur and rf exchanged.
        let mut g = lettered();
        swap(&mut g, (1, 5), (0, 3));
        swap(&mut g, (0, 1), (2, 5));
        assert_eq!(validate(&g), Err(FaceletError::InvalidTotalParity));
    }

    #[test]
    fn test_codes_are_stable() {
        use strum::IntoEnumIterator;

        let codes: Vec<u8> = ValidationCode::iter().map(|c| c as u8).collect();
        assert_eq!(codes, (0..9).collect::<Vec<u8>>());
        assert_eq!(
            ValidationCode::from(FaceletError::InvalidTotalParity).to_string(),
            "InvalidTotalParity",
        );
    }
}
