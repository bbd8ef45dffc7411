//! Facelet model of an N×N×N cube and an interpreter for WCA scramble
//! notation.
//!
//! ```
//! use cube_core::{CubeState, Face, MoveEngine};
//!
//! let mut cube = CubeState::new(4);
//! MoveEngine::apply(&mut cube, "Rw U2 3Fw' R").unwrap();
//! assert!(!cube.is_solved());
//! assert_eq!(cube.face_grid(Face::U).len(), 4);
//! ```

pub mod color;
pub mod cube;
pub mod engine;
pub mod face;
pub mod geometry;
pub mod moves;
pub mod puzzle;

pub use color::Color;
pub use cube::{CubeError, CubeState};
pub use engine::MoveEngine;
pub use face::Face;
pub use moves::{Algorithm, Direction, Move, ParseError, parse_move};
pub use puzzle::{PuzzleKind, PuzzleKindError};
