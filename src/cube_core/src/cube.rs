use std::fmt::{self, Display};

use itertools::Itertools;
use thiserror::Error;

use crate::{color::Color, face::Face, moves::Direction};

/// The six N×N facelet grids of one cube.
///
/// Grids are stored row-major, each face viewed from outside the cube in the
/// orientation of the printed net: U with B along its top edge, D with F along
/// its top edge, and F, R, B, L with U along their top edge.
///
/// The shape never changes after construction. Only the engine permutes
/// facelets, so the number of facelets of each color is fixed for the lifetime
/// of the cube.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CubeState {
    size: usize,
    faces: [Box<[Color]>; 6],
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CubeError {
    #[error("Face {face} has {actual} rows, expected {expected}")]
    WrongRowCount {
        face: Face,
        expected: usize,
        actual: usize,
    },
    #[error("Row {row} of face {face} has {actual} facelets, expected {expected}")]
    WrongRowLength {
        face: Face,
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Unknown color letter {letter:?} on face {face}")]
    UnknownColor { face: Face, letter: char },
}

impl CubeState {
    /// A solved cube with `size` facelets along each edge.
    ///
    /// # Panics
    ///
    /// If `size` is zero.
    pub fn new(size: usize) -> CubeState {
        assert!(size > 0, "a cube needs at least one facelet per edge");

        let solved = |face: Face| vec![face.color(); size * size].into_boxed_slice();

        CubeState {
            size,
            faces: Face::ALL.map(solved),
        }
    }

    /// Builds a cube from six grids of color letters, given in `Face::ALL`
    /// order. The size is taken from the U grid.
    ///
    /// # Errors
    ///
    /// If any grid is not square with the size of the U grid, or uses a letter
    /// outside `W Y G B R O`.
    pub fn from_faces(faces: [&[&str]; 6]) -> Result<CubeState, CubeError> {
        let size = faces[0].len();
        if size == 0 {
            return Err(CubeError::WrongRowCount {
                face: Face::U,
                expected: 1,
                actual: 0,
            });
        }

        let mut cube = CubeState::new(size);

        for (face, rows) in Face::ALL.into_iter().zip(faces) {
            if rows.len() != size {
                return Err(CubeError::WrongRowCount {
                    face,
                    expected: size,
                    actual: rows.len(),
                });
            }

            for (row, letters) in rows.iter().enumerate() {
                let unknown = |letter| CubeError::UnknownColor { face, letter };
                let colors = letters
                    .chars()
                    .map(|letter| Color::from_letter(letter).ok_or_else(|| unknown(letter)))
                    .collect::<Result<Vec<_>, _>>()?;

                if colors.len() != size {
                    return Err(CubeError::WrongRowLength {
                        face,
                        row,
                        expected: size,
                        actual: colors.len(),
                    });
                }

                for (col, color) in colors.into_iter().enumerate() {
                    cube.set_facelet(face, row, col, color);
                }
            }
        }

        Ok(cube)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "facelet ({row}, {col}) is out of range for a {size}x{size} face",
            size = self.size,
        );

        row * self.size + col
    }

    /// # Panics
    ///
    /// If `row` or `col` is not below the cube size.
    pub fn facelet(&self, face: Face, row: usize, col: usize) -> Color {
        self.faces[face as usize][self.offset(row, col)]
    }

    /// # Panics
    ///
    /// If `row` or `col` is not below the cube size.
    pub fn set_facelet(&mut self, face: Face, row: usize, col: usize, color: Color) {
        let offset = self.offset(row, col);
        self.faces[face as usize][offset] = color;
    }

    /// Borrows the live rows of a face, top to bottom.
    pub fn rows(&self, face: Face) -> impl Iterator<Item = &[Color]> {
        self.faces[face as usize].chunks_exact(self.size)
    }

    /// Copies a face into an owned grid, taken at call time.
    pub fn face_grid(&self, face: Face) -> Vec<Vec<Color>> {
        self.rows(face).map(<[Color]>::to_vec).collect()
    }

    /// Whether every face shows a single color.
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|grid| grid.iter().all_equal())
    }

    /// How many facelets of each color the cube has, indexed by `Color as usize`.
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for color in self.faces.iter().flat_map(|grid| grid.iter()) {
            counts[*color as usize] += 1;
        }
        counts
    }

    /// Rotates one face grid by a quarter turn. Clockwise is transpose then
    /// reverse each row, counter-clockwise is transpose then reverse the row
    /// order.
    pub(crate) fn rotate_grid(&mut self, face: Face, direction: Direction) {
        let n = self.size;
        let old = &self.faces[face as usize];

        let rotated = (0..n)
            .cartesian_product(0..n)
            .map(|(row, col)| match direction {
                Direction::Clockwise => old[(n - 1 - col) * n + row],
                Direction::CounterClockwise => old[col * n + (n - 1 - row)],
            })
            .collect();

        self.faces[face as usize] = rotated;
    }
}

/// Prints the unfolded net with one letter per facelet:
///
/// ```text
///       U
///     L F R B
///       D
/// ```
impl Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pad = " ".repeat(self.size * 2);
        let letters = |row: &[Color]| row.iter().map(|color| color.letter()).join(" ");

        for row in self.rows(Face::U) {
            writeln!(f, "{pad}{}", letters(row))?;
        }

        let belt = [Face::L, Face::F, Face::R, Face::B];
        let belt = belt.map(|face| self.rows(face).collect_vec());
        for row in 0..self.size {
            let line = belt.iter().map(|rows| letters(rows[row])).join(" ");
            writeln!(f, "{line}")?;
        }

        for row in self.rows(Face::D) {
            writeln!(f, "{pad}{}", letters(row))?;
        }

        Ok(())
    }
}
