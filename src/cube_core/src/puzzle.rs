use std::{
    fmt::{self, Display},
    str::FromStr,
};

use thiserror::Error;

use crate::cube::CubeState;

/// The cube events a scramble can be requested for, 2x2 through 7x7.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PuzzleKind {
    Cube2,
    Cube3,
    Cube4,
    Cube5,
    Cube6,
    Cube7,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown puzzle {0:?}, expected one of 2x2 to 7x7 or 222 to 777")]
pub struct PuzzleKindError(pub String);

impl PuzzleKind {
    pub const ALL: [Self; 6] = [
        PuzzleKind::Cube2,
        PuzzleKind::Cube3,
        PuzzleKind::Cube4,
        PuzzleKind::Cube5,
        PuzzleKind::Cube6,
        PuzzleKind::Cube7,
    ];

    pub fn size(self) -> usize {
        match self {
            PuzzleKind::Cube2 => 2,
            PuzzleKind::Cube3 => 3,
            PuzzleKind::Cube4 => 4,
            PuzzleKind::Cube5 => 5,
            PuzzleKind::Cube6 => 6,
            PuzzleKind::Cube7 => 7,
        }
    }

    /// The WCA event id, e.g. `444`.
    pub fn event_id(self) -> String {
        self.size().to_string().repeat(3)
    }

    /// A solved cube of this kind.
    pub fn cube(self) -> CubeState {
        CubeState::new(self.size())
    }
}

impl FromStr for PuzzleKind {
    type Err = PuzzleKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();

        PuzzleKind::ALL
            .into_iter()
            .find(|kind| name == kind.to_string() || name == kind.event_id())
            .ok_or_else(|| PuzzleKindError(s.to_owned()))
    }
}

impl Display for PuzzleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.size())
    }
}
