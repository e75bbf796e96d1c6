use std::fmt;

use crate::InvertError;

/// Kind of bracketed pair of move sequences.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum BinaryGroupKind {
    /// Commutator `[A, B]` that expands to `A B A' B'`.
    Commutator,
    /// Conjugate `[A: B]` that expands to `A B A'`.
    Conjugate,
}

impl BinaryGroupKind {
    /// Returns the separator symbol for the group. This is `,` for commutators
    /// and `:` for conjugates.
    pub fn separator(self) -> char {
        match self {
            BinaryGroupKind::Commutator => ',',
            BinaryGroupKind::Conjugate => ':',
        }
    }
}

/// Multiplier suffix using `'` for negative numbers.
///
/// The default multiplier is `Multiplier(1)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Multiplier(pub i32);

impl Default for Multiplier {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        if abs != 1 {
            write!(f, "{abs}")?;
        }
        if self.0 < 0 {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl From<i32> for Multiplier {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl Multiplier {
    /// Returns the inverse multiplier.
    pub fn inv(self) -> Result<Multiplier, InvertError> {
        match self.0.checked_neg() {
            Some(m) => Ok(Self(m)),
            None => Err(InvertError::IntegerOverflow),
        }
    }

    /// Returns the signed quarter-turn angle, from -1 to 2, of repeating a
    /// quarter turn in direction `sign` this many times. Returns 0 if the
    /// repetitions cancel out.
    pub fn quarter_turns(self, sign: i8) -> i8 {
        match (i64::from(self.0) * i64::from(sign)).rem_euclid(4) {
            1 => 1,
            2 => 2,
            3 => -1,
            _ => 0,
        }
    }
}

pub(crate) fn write_separated_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    elements: &[T],
    separator: &str,
) -> fmt::Result {
    let mut is_first = true;
    for elem in elements {
        if is_first {
            is_first = false;
        } else {
            write!(f, "{separator}")?;
        }
        write!(f, "{elem}")?;
    }
    Ok(())
}
