//! Move notation: the tokens a scramble is made of, the single-layer moves a
//! reduction emits, and the scanner that turns raw text into tokens.
//!
//! A token is one face letter, an optional wide marker `w`, and an optional
//! `2` or `'`. Anything else in the text is skipped.

use std::{
    fmt::Display,
    iter::Peekable,
    ops::{Deref, DerefMut},
    str::Chars,
};

use itertools::Itertools;

use crate::{Face, TurnDirection};

/// One scanned move, possibly wide.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MoveToken {
    pub face: Face,
    pub wide: bool,
    pub direction: TurnDirection,
}

impl MoveToken {
    pub fn new(face: Face, wide: bool, direction: TurnDirection) -> Self {
        Self {
            face,
            wide,
            direction,
        }
    }
}

impl Display for MoveToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.face,
            if self.wide { "w" } else { "" },
            self.direction
        )
    }
}

/// A single-layer move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Move {
    pub face: Face,
    pub direction: TurnDirection,
}

impl Move {
    pub fn new(face: Face, direction: TurnDirection) -> Self {
        Self { face, direction }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.face, self.direction)
    }
}

/// A sequence of single-layer moves, displayed space separated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSequence(pub Vec<Move>);

impl Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

impl Deref for MoveSequence {
    type Target = Vec<Move>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveSequence {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveSequence(iter.into_iter().collect())
    }
}

/// Lazily scans move tokens out of a string, left to right.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    chars: Peekable<Chars<'a>>,
}

pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        chars: text.chars().peekable(),
    }
}

impl Iterator for Tokens<'_> {
    type Item = MoveToken;

    fn next(&mut self) -> Option<Self::Item> {
        // Skip until a face letter starts a token
        let face = loop {
            if let Ok(face) = Face::try_from(self.chars.next()?) {
                break face;
            }
        };

        let wide = self.chars.next_if_eq(&'w').is_some();

        let direction = match self.chars.next_if(|&c| c == '2' || c == '\'') {
            Some('2') => TurnDirection::Double,
            Some(_) => TurnDirection::Prime,
            None => TurnDirection::Normal,
        };

        Some(MoveToken::new(face, wide, direction))
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::{Face, TurnDirection};

    use super::{Move, MoveSequence, MoveToken, tokenize};

    fn scan(text: &str) -> Vec<String> {
        tokenize(text).map(|token| token.to_string()).collect_vec()
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize("   \t\n ").count(), 0);
    }

    #[test]
    fn scans_every_form() {
        assert_eq!(
            tokenize("R Uw2 F' Bw'").collect_vec(),
            vec![
                MoveToken::new(Face::R, false, TurnDirection::Normal),
                MoveToken::new(Face::U, true, TurnDirection::Double),
                MoveToken::new(Face::F, false, TurnDirection::Prime),
                MoveToken::new(Face::B, true, TurnDirection::Prime),
            ]
        );
    }

    #[test]
    fn separators_are_optional() {
        assert_eq!(scan("RUw2F'"), ["R", "Uw2", "F'"]);
        assert_eq!(scan("R,U;L\tD\nF  B"), ["R", "U", "L", "D", "F", "B"]);
    }

    #[test]
    fn noise_is_skipped() {
        // Rotations, slices, lowercase wide moves and stray suffixes are not part of the grammar
        assert_eq!(scan("x R y2 M' r u' 3Rw E"), ["R", "Rw"]);
        assert_eq!(scan("2 ' w R"), ["R"]);
    }

    #[test]
    fn suffixes_are_greedy_and_single() {
        // At most one modifier follows a face, and the wide marker must come first
        assert_eq!(scan("R2'"), ["R2"]);
        assert_eq!(scan("R'2"), ["R'"]);
        assert_eq!(scan("R2w"), ["R2"]);
        assert_eq!(scan("Rww"), ["Rw"]);
        assert_eq!(scan("R22"), ["R2"]);
    }

    #[test]
    fn sequence_display() {
        let sequence: MoveSequence = [
            Move::new(Face::L, TurnDirection::Normal),
            Move::new(Face::B, TurnDirection::Double),
            Move::new(Face::D, TurnDirection::Prime),
        ]
        .into_iter()
        .collect();

        assert_eq!(sequence.to_string(), "L B2 D'");
        assert_eq!(MoveSequence::default().to_string(), "");
    }
}
