use std::{fmt::Display, str::FromStr};

use thiserror::Error;

/// The six faces of the cube.
///
/// The declaration order `U F R D B L` doubles as the position index used by
/// the rotation tables and by [`FaceFrame`](crate::FaceFrame). Opposite faces
/// are always three positions apart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Face {
    U,
    F,
    R,
    D,
    B,
    L,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Not a face letter: {0:?}, expected one of U, F, R, D, B, L")]
pub struct ParseFaceError(pub String);

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [U, F, R, D, B, L];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    pub const fn index(self) -> usize {
        self as usize
    }

    /// # Panics
    ///
    /// Panics if `index` is not a position index, i.e. not below six.
    pub const fn from_index(index: usize) -> Face {
        Face::ALL[index]
    }

    pub const fn opposite(self) -> Face {
        Face::from_index((self.index() + 3) % 6)
    }

    /// The axis a whole-cube rotation in the direction of this face turns around.
    pub const fn axis(self) -> Axis {
        match self {
            Face::R | Face::L => Axis::X,
            Face::U | Face::D => Axis::Y,
            Face::F | Face::B => Axis::Z,
        }
    }

    /// Quarter turns of the whole cube, around [`Face::axis`], that match one
    /// clockwise turn of this face. `L`, `D` and `B` turn against their axis,
    /// so their single turn is three forward quarter turns.
    pub const fn base_quarter_turns(self) -> u8 {
        match self {
            Face::R | Face::U | Face::F => 1,
            Face::L | Face::D | Face::B => 3,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::F => 'F',
            Face::R => 'R',
            Face::D => 'D',
            Face::B => 'B',
            Face::L => 'L',
        }
    }
}

impl TryFrom<char> for Face {
    type Error = ParseFaceError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'U' => Ok(Face::U),
            'F' => Ok(Face::F),
            'R' => Ok(Face::R),
            'D' => Ok(Face::D),
            'B' => Ok(Face::B),
            'L' => Ok(Face::L),
            _ => Err(ParseFaceError(c.to_string())),
        }
    }
}

impl FromStr for Face {
    type Err = ParseFaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) => Face::try_from(c),
            _ => Err(ParseFaceError(s.to_owned())),
        }
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// An axis of whole-cube rotation: `x` through R/L, `y` through U/D, `z`
/// through F/B.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Self; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// Represents the direction which to turn a face. `Prime` represents
/// a counter-clockwise rotation of a face, and `Double` represents
/// a 180 degree rotation of a face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum TurnDirection {
    #[default]
    Normal,
    Double,
    Prime,
}

impl TurnDirection {
    /// A prime turn is encoded as three forward quarter turns.
    pub const fn quarter_turns(self) -> u8 {
        match self {
            TurnDirection::Normal => 1,
            TurnDirection::Double => 2,
            TurnDirection::Prime => 3,
        }
    }
}

impl Display for TurnDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnDirection::Normal => write!(f, ""),
            TurnDirection::Double => write!(f, "2"),
            TurnDirection::Prime => write!(f, "'"),
        }
    }
}
