use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::VariantDescriptor;
use crate::variant::{POCKET, PROFESSOR, REVENGE, RUBIK};

lazy_static! {
    /// Every name of every kind, lowercased.
    static ref KINDS_BY_NAME: HashMap<String, CubeKind> = CubeKind::iter()
        .flat_map(|kind| {
            std::iter::once(kind.name())
                .chain(kind.alternative_names().iter().copied())
                .map(move |name| (name.to_lowercase(), kind))
        })
        .collect();
}

/// Puzzle in the Rubik's Cube family.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, strum::EnumIter,
)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[serde(try_from = "String", into = "String")]
pub enum CubeKind {
    /// 2x2x2 cube.
    Pocket,
    /// 3x3x3 cube.
    Rubik,
    /// 4x4x4 cube.
    Revenge,
    /// 5x5x5 cube.
    Professor,
    /// 3x3x3 cube in the shape of a barrel.
    Barrel,
    /// 3x3x3 cube in the shape of a diamond.
    Diamond,
    /// 3x3x3 cube in the shape of a cuboctahedron.
    Cuboctahedron,
}

impl CubeKind {
    /// Returns the human-friendly name.
    pub fn name(self) -> &'static str {
        match self {
            CubeKind::Pocket => "2x2 Pocket Cube",
            CubeKind::Rubik => "3x3 Rubik's Cube",
            CubeKind::Revenge => "4x4 Revenge Cube",
            CubeKind::Professor => "5x5 Professor Cube",
            CubeKind::Barrel => "3x3 Rubik's Barrel",
            CubeKind::Diamond => "3x3 Rubik's Diamond",
            CubeKind::Cuboctahedron => "3x3 Rubik's Cuboctahedron",
        }
    }

    /// Returns other names accepted by [`CubeKind::from_name()`]. The first
    /// is the ID.
    pub fn alternative_names(self) -> &'static [&'static str] {
        match self {
            CubeKind::Pocket => &["PocketCube", "Pocket", "2x2 Cube"],
            CubeKind::Rubik => &["RubiksCube", "Rubik", "3x3 Cube", "Cube"],
            CubeKind::Revenge => &["RevengeCube", "Revenge", "4x4 Cube"],
            CubeKind::Professor => &["ProfessorCube", "Professor", "5x5 Cube"],
            CubeKind::Barrel => &["RubiksBarrel", "Barrel", "3x3 Barrel"],
            CubeKind::Diamond => &["RubiksDiamond", "Diamond", "3x3 Diamond"],
            CubeKind::Cuboctahedron => &[
                "RubiksCuboctahedron",
                "Cuboctahedron",
                "Octahedron",
                "3x3 Octahedron",
            ],
        }
    }

    /// Returns a short identifier without spaces, such as `RubiksCube`.
    pub fn id(self) -> &'static str {
        self.alternative_names()[0]
    }

    /// Returns the variant descriptor.
    pub fn variant(self) -> &'static VariantDescriptor {
        match self {
            CubeKind::Pocket => &POCKET,
            CubeKind::Rubik | CubeKind::Barrel | CubeKind::Diamond | CubeKind::Cuboctahedron => {
                &RUBIK
            }
            CubeKind::Revenge => &REVENGE,
            CubeKind::Professor => &PROFESSOR,
        }
    }

    /// Returns the number of layers along each axis.
    pub fn layer_count(self) -> u8 {
        self.variant().layer_count
    }

    /// Looks up a kind by its name, ID, or any alternative name, ignoring
    /// case.
    pub fn from_name(name: &str) -> Result<Self, UnknownCubeKind> {
        KINDS_BY_NAME
            .get(&name.trim().to_lowercase())
            .copied()
            .ok_or_else(|| UnknownCubeKind(name.to_owned()))
    }
}

impl fmt::Display for CubeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CubeKind {
    type Err = UnknownCubeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<String> for CubeKind {
    type Error = UnknownCubeKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value)
    }
}

impl From<CubeKind> for String {
    fn from(value: CubeKind) -> Self {
        value.id().to_owned()
    }
}

/// Error returned when looking up a cube kind by an unknown name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown cube kind {0:?}")]
pub struct UnknownCubeKind(pub String);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(CubeKind::from_name("rubik"), Ok(CubeKind::Rubik));
        assert_eq!(CubeKind::from_name("4x4 CUBE"), Ok(CubeKind::Revenge));
        assert_eq!(CubeKind::from_name(" Octahedron "), Ok(CubeKind::Cuboctahedron));
        assert_eq!(
            "6x6 Cube".parse::<CubeKind>(),
            Err(UnknownCubeKind("6x6 Cube".to_owned())),
        );
    }

    #[test]
    fn test_names_are_unique() {
        let total: usize = CubeKind::iter().map(|k| 1 + k.alternative_names().len()).sum();
        assert_eq!(KINDS_BY_NAME.len(), total);
    }

    #[test]
    fn test_serde_uses_id() {
        let json = serde_json::to_string(&CubeKind::Professor).unwrap();
        assert_eq!(json, "\"ProfessorCube\"");
        assert_eq!(serde_json::from_str::<CubeKind>("\"barrel\"").unwrap(), CubeKind::Barrel);
    }

    proptest! {
        #[test]
        fn proptest_name_round_trip(kind: CubeKind) {
            prop_assert_eq!(CubeKind::from_name(kind.name()), Ok(kind));
            prop_assert_eq!(CubeKind::from_name(kind.id()), Ok(kind));
            prop_assert_eq!(kind.variant().layer_count, kind.layer_count());
        }
    }
}
