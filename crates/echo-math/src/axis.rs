// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

/// Named Cartesian axis used for component selection and swizzles.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// First component.
    X,
    /// Second component.
    Y,
    /// Third component.
    Z,
}

impl Axis {
    /// All axes in storage order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Storage slot of the axis (`X = 0`, `Y = 1`, `Z = 2`).
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Parses a single axis letter (`x`, `y`, `z`, case-insensitive).
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'x' | 'X' => Some(Self::X),
            'y' | 'Y' => Some(Self::Y),
            'z' | 'Z' => Some(Self::Z),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.write_str(name)
    }
}
