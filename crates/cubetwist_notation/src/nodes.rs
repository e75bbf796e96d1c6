use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::common::write_separated_list;
use crate::*;

/// List of notation elements.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct NodeList(pub Vec<Node>);

impl fmt::Display for NodeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_separated_list(f, &self.0, " ")
    }
}

impl FromStr for NodeList {
    type Err = ParseNotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_notation(s)
            .map_err(|errors| ParseNotationError(errors.iter().map(|e| e.to_string()).collect()))
    }
}

impl Deref for NodeList {
    type Target = Vec<Node>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for NodeList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<Node> for NodeList {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl NodeList {
    /// Constructs a new empty node list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns a list with all nodes inverted, in reverse order.
    pub fn inv(&self) -> Result<Self, InvertError> {
        self.0.iter().rev().map(|n| n.inv()).collect()
    }
}

/// Notation element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// Notation element that can be repeated.
    RepeatedNode {
        /// The notation element that is repeated.
        inner: RepeatableNode,
        /// Multiplier, which defaults to `1`.
        multiplier: Multiplier,
    },
    /// Pause, written using `.`.
    Pause,
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::RepeatedNode { inner, multiplier } => write!(f, "{inner}{multiplier}"),
            Node::Pause => write!(f, "."),
        }
    }
}

impl From<RepeatableNode> for Node {
    fn from(value: RepeatableNode) -> Self {
        value.with_multiplier(1)
    }
}

impl From<Move> for Node {
    fn from(value: Move) -> Self {
        RepeatableNode::Move(value).into()
    }
}

impl Node {
    /// Returns the inverse node.
    pub fn inv(&self) -> Result<Self, InvertError> {
        match self {
            Node::RepeatedNode { inner, multiplier } => {
                Ok(inner.clone().with_multiplier(multiplier.inv()?))
            }
            Node::Pause => Ok(Node::Pause),
        }
    }
}

/// Notation element that can be repeated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RepeatableNode {
    /// Move, such as `R` or `2-3Lw`.
    Move(Move),
    /// List of nodes surrounded by `()`.
    Group(NodeList),
    /// Commutator or conjugate, surrounded by `[]`.
    BinaryGroup {
        /// Kind of group.
        kind: BinaryGroupKind,
        /// Nodes on either side of the separator.
        contents: [NodeList; 2],
    },
}

impl fmt::Display for RepeatableNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepeatableNode::Move(m) => write!(f, "{m}"),
            RepeatableNode::Group(contents) => write!(f, "({contents})"),
            RepeatableNode::BinaryGroup {
                kind,
                contents: [a, b],
            } => write!(f, "[{a}{} {b}]", kind.separator()),
        }
    }
}

impl From<Move> for RepeatableNode {
    fn from(value: Move) -> Self {
        Self::Move(value)
    }
}

impl RepeatableNode {
    /// Returns a node with a multiplier.
    pub fn with_multiplier(self, multiplier: impl Into<Multiplier>) -> Node {
        Node::RepeatedNode {
            inner: self,
            multiplier: multiplier.into(),
        }
    }
}

/// Single move, such as `R` or `2-3Lw`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Layer prefix, if any.
    pub layers: Option<LayerPrefix>,
    /// What the move turns.
    pub family: Family,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(layers) = self.layers {
            write!(f, "{layers}")?;
        }
        write!(f, "{}", self.family)
    }
}

impl From<Family> for Move {
    fn from(family: Family) -> Self {
        Self {
            layers: None,
            family,
        }
    }
}

impl Move {
    /// Returns an error message if the layer prefix cannot be used with the
    /// family.
    pub(crate) fn check(&self) -> Result<(), &'static str> {
        let Some(layers) = self.layers else {
            return Ok(());
        };
        layers.check()?;
        match (self.family, layers) {
            (Family::Face(_), _) => Ok(()),
            (Family::Wide { .. }, LayerPrefix::Single(_)) => Ok(()),
            (Family::Wide { .. }, LayerPrefix::Range(..)) => {
                Err("wide moves take a layer count, not a range")
            }
            (Family::Slice(_), _) => Err("slice moves take no layer prefix"),
            (Family::Rotation(_), _) => Err("rotations take no layer prefix"),
        }
    }
}
