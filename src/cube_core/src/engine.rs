use log::{debug, trace};

use crate::{
    color::Color,
    cube::CubeState,
    face::Face,
    geometry,
    moves::{Algorithm, Direction, Move, ParseError},
};

/// Applies scrambles to cubes. Holds no state of its own.
pub struct MoveEngine;

impl MoveEngine {
    /// Parses `scramble` and applies it left to right.
    ///
    /// Every token is parsed and checked against the cube size before the
    /// first turn, so on error the cube is left untouched.
    ///
    /// # Errors
    ///
    /// If any token is malformed, or turns more layers than the cube has.
    pub fn apply(cube: &mut CubeState, scramble: &str) -> Result<(), ParseError> {
        let algorithm = scramble.parse::<Algorithm>().inspect_err(|e| {
            debug!(target: "engine", "Rejected scramble: {e}");
        })?;

        MoveEngine::apply_algorithm(cube, &algorithm)
    }

    /// # Errors
    ///
    /// If any move turns more layers than the cube has. Nothing is applied in
    /// that case.
    pub fn apply_algorithm(cube: &mut CubeState, algorithm: &Algorithm) -> Result<(), ParseError> {
        algorithm.check_size(cube.size())?;

        debug!(
            target: "engine",
            "Applying {} moves: size={}",
            algorithm.len(),
            cube.size()
        );

        for mv in algorithm {
            turn_move(cube, mv);
        }

        Ok(())
    }

    /// # Errors
    ///
    /// If the move turns more layers than the cube has.
    pub fn apply_move(cube: &mut CubeState, mv: &Move) -> Result<(), ParseError> {
        mv.check_size(cube.size())?;
        turn_move(cube, mv);
        Ok(())
    }
}

fn turn_move(cube: &mut CubeState, mv: &Move) {
    trace!(target: "engine", "Turning {mv}");

    for _ in 0..mv.repeat() {
        quarter_turn(cube, mv.face(), mv.direction(), mv.layer_depth());
    }
}

/// One 90° turn of layers `0..=layer_depth` below `face`.
fn quarter_turn(cube: &mut CubeState, face: Face, direction: Direction, layer_depth: usize) {
    let last_layer = cube.size() - 1;
    debug_assert!(layer_depth <= last_layer);

    for layer in 0..=layer_depth {
        if layer == 0 {
            cube.rotate_grid(face, direction);
        }
        // The innermost layer of a full-width turn is the opposite face, which
        // spins the other way as seen from its own side
        if layer == last_layer {
            cube.rotate_grid(face.opposite(), direction.inverse());
        }

        cycle_strips(cube, face, layer, direction);
    }
}

/// Moves the four strips of one layer around `face` by one neighbor.
fn cycle_strips(cube: &mut CubeState, face: Face, layer: usize, direction: Direction) {
    let size = cube.size();
    let neighbors = geometry::neighbors(face);

    // Snapshot everything before writing so no strip is read after it was
    // overwritten
    let strips: [Vec<Color>; 4] = neighbors.map(|(neighbor, edge)| {
        (0..size)
            .map(|index| {
                let (row, col) = edge.strip_position(layer, index, size);
                cube.facelet(neighbor, row, col)
            })
            .collect()
    });

    for (i, (neighbor, edge)) in neighbors.into_iter().enumerate() {
        let source = match direction {
            Direction::Clockwise => &strips[(i + 3) % 4],
            Direction::CounterClockwise => &strips[(i + 1) % 4],
        };

        for (index, &color) in source.iter().enumerate() {
            let (row, col) = edge.strip_position(layer, index, size);
            cube.set_facelet(neighbor, row, col, color);
        }
    }
}
