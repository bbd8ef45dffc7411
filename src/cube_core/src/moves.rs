//! Scramble notation.
//!
//! A token is `[layers] face [w] [' | 2]`, for example `R`, `U'`, `F2`, `Rw`,
//! `3Fw2`. A layer count must be at least 2 and is only valid together with
//! `w`.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use itertools::Itertools;
use thiserror::Error;

use crate::face::Face;

/// Turning direction, viewed from outside the turned face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    #[must_use]
    pub fn inverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty move")]
    Empty,
    #[error("Move {token:?} has no face letter")]
    MissingFace { token: String },
    #[error("Move {token:?} has unknown face {found:?}, expected one of U D F B L R")]
    UnknownFace { token: String, found: char },
    #[error("Move {token:?} has a layer count but no `w`")]
    BarePrefix { token: String },
    #[error("Move {token:?} has an invalid layer count, expected an integer of at least 2")]
    InvalidPrefix { token: String },
    #[error("Move {token:?} is both a prime and a double turn")]
    ConflictingModifiers { token: String },
    #[error("Move {token:?} has unexpected character {found:?}")]
    UnexpectedCharacter { token: String, found: char },
    #[error("Move {token:?} turns {layers} layers but the cube is only {size} layers deep")]
    TooManyLayers {
        token: String,
        layers: usize,
        size: usize,
    },
}

/// One parsed move token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    face: Face,
    direction: Direction,
    repeat: u8,
    layer_depth: usize,
}

impl Move {
    /// # Panics
    ///
    /// If `repeat` is not 1 or 2.
    pub fn new(face: Face, direction: Direction, repeat: u8, layer_depth: usize) -> Move {
        assert!(
            matches!(repeat, 1 | 2),
            "a move repeats once or twice, not {repeat} times"
        );

        Move {
            face,
            direction,
            repeat,
            layer_depth,
        }
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of quarter turns, 1 or 2.
    pub fn repeat(&self) -> u8 {
        self.repeat
    }

    /// Index of the innermost turned layer. 0 turns only the outer layer.
    pub fn layer_depth(&self) -> usize {
        self.layer_depth
    }

    /// How many layers turn together, saturating at `usize::MAX`.
    pub fn layers(&self) -> usize {
        self.layer_depth.saturating_add(1)
    }

    /// The move that undoes this one. A double turn undoes itself.
    #[must_use]
    pub fn inverse(&self) -> Move {
        if self.repeat == 2 {
            return *self;
        }

        Move {
            direction: self.direction.inverse(),
            ..*self
        }
    }

    pub(crate) fn check_size(&self, size: usize) -> Result<(), ParseError> {
        if self.layers() > size {
            return Err(ParseError::TooManyLayers {
                token: self.to_string(),
                layers: self.layers(),
                size,
            });
        }

        Ok(())
    }
}

/// Parses a single move token.
///
/// # Errors
///
/// If the token does not follow the notation described in the module docs.
pub fn parse_move(token: &str) -> Result<Move, ParseError> {
    token.parse()
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if token.is_empty() {
            return Err(ParseError::Empty);
        }

        let digits = token
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(token.len());
        let (prefix, rest) = token.split_at(digits);

        let mut chars = rest.chars();
        let Some(letter) = chars.next() else {
            return Err(ParseError::MissingFace {
                token: token.to_owned(),
            });
        };
        let face = Face::from_letter(letter).ok_or_else(|| ParseError::UnknownFace {
            token: token.to_owned(),
            found: letter,
        })?;

        let mut rest = chars.as_str();
        let wide = match rest.strip_prefix('w') {
            Some(after) => {
                rest = after;
                true
            }
            None => false,
        };

        let (direction, repeat) = match rest {
            "" => (Direction::Clockwise, 1),
            "'" => (Direction::CounterClockwise, 1),
            "2" => (Direction::Clockwise, 2),
            "2'" | "'2" => {
                return Err(ParseError::ConflictingModifiers {
                    token: token.to_owned(),
                });
            }
            _ => {
                // First non-modifier character, else the repeated modifier
                let found = rest
                    .chars()
                    .find(|c| !matches!(c, '\'' | '2'))
                    .or_else(|| rest.chars().nth(1))
                    .unwrap_or('\'');
                return Err(ParseError::UnexpectedCharacter {
                    token: token.to_owned(),
                    found,
                });
            }
        };

        let layer_depth = match (prefix, wide) {
            ("", false) => 0,
            ("", true) => 1,
            (_, false) => {
                return Err(ParseError::BarePrefix {
                    token: token.to_owned(),
                });
            }
            (prefix, true) => match prefix.parse::<usize>() {
                Ok(layers) if layers >= 2 => layers - 1,
                _ => {
                    return Err(ParseError::InvalidPrefix {
                        token: token.to_owned(),
                    });
                }
            },
        };

        Ok(Move::new(face, direction, repeat, layer_depth))
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.layer_depth {
            0 => write!(f, "{}", self.face)?,
            1 => write!(f, "{}w", self.face)?,
            _ => write!(f, "{}{}w", self.layers(), self.face)?,
        }

        match (self.repeat, self.direction) {
            (2, _) => f.write_str("2"),
            (_, Direction::CounterClockwise) => f.write_str("'"),
            (_, Direction::Clockwise) => Ok(()),
        }
    }
}

/// A whole scramble, parsed up front so that a bad token is found before
/// anything is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Algorithm {
    moves: Vec<Move>,
}

impl Algorithm {
    pub fn new(moves: Vec<Move>) -> Algorithm {
        Algorithm { moves }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The sequence that returns a cube to where it was before this one.
    #[must_use]
    pub fn inverse(&self) -> Algorithm {
        Algorithm {
            moves: self.moves.iter().rev().map(Move::inverse).collect(),
        }
    }

    /// # Errors
    ///
    /// If any move turns more layers than a cube of `size` has.
    pub fn check_size(&self, size: usize) -> Result<(), ParseError> {
        self.moves.iter().try_for_each(|mv| mv.check_size(size))
    }
}

impl FromStr for Algorithm {
    type Err = ParseError;

    fn from_str(scramble: &str) -> Result<Self, Self::Err> {
        let moves = scramble
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Move>, _>>()?;

        Ok(Algorithm { moves })
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.moves.iter().join(" "))
    }
}

impl<'a> IntoIterator for &'a Algorithm {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
