use cube_core::{Algorithm, Color, CubeState, Face, MoveEngine};
use proptest::prelude::*;

const SUFFIXES: [&str; 3] = ["", "'", "2"];

/// The token turning `depth + 1` layers of `face`.
fn token(face: Face, depth: usize) -> String {
    match depth {
        0 => face.to_string(),
        1 => format!("{face}w"),
        depth => format!("{}{face}w", depth + 1),
    }
}

/// A cube far enough from solved that misplaced strips show up.
fn scrambled(size: usize) -> CubeState {
    let mut cube = CubeState::new(size);
    let scramble = if size == 2 {
        "F R U R' F U' F U' F R U'"
    } else {
        "Rw U2 F' L D2 Uw R' B Dw2 F' Lw U B2 L'"
    };
    MoveEngine::apply(&mut cube, scramble).unwrap();
    cube
}

fn applied(cube: &CubeState, scramble: &str) -> CubeState {
    let mut cube = cube.clone();
    MoveEngine::apply(&mut cube, scramble).unwrap();
    cube
}

fn clockwise(grid: Vec<Vec<Color>>) -> Vec<Vec<Color>> {
    let n = grid.len();
    (0..n)
        .map(|row| (0..n).map(|col| grid[n - 1 - col][row]).collect())
        .collect()
}

fn anticlockwise(grid: Vec<Vec<Color>>) -> Vec<Vec<Color>> {
    clockwise(clockwise(clockwise(grid)))
}

fn half_turn(grid: Vec<Vec<Color>>) -> Vec<Vec<Color>> {
    clockwise(clockwise(grid))
}

#[test_log::test]
fn every_move_has_an_inverse() {
    for size in 2..=7 {
        let start = scrambled(size);

        for face in Face::ALL {
            for depth in 0..size {
                let t = token(face, depth);

                for (first, second) in [("", "'"), ("'", ""), ("2", "2")] {
                    let undo = format!("{t}{first} {t}{second}");
                    assert_eq!(applied(&start, &undo), start, "{undo} on {size}x{size}");
                }
            }
        }
    }
}

#[test_log::test]
fn four_quarter_turns_are_the_identity() {
    for size in 2..=7 {
        let start = scrambled(size);

        for face in Face::ALL {
            for depth in 0..size {
                let t = token(face, depth);
                let four = [t.as_str(); 4].join(" ");

                assert_eq!(applied(&start, &four), start, "{four} on {size}x{size}");
                assert_ne!(applied(&start, &t), start, "{t} on {size}x{size}");
            }
        }
    }
}

#[test_log::test]
fn moves_do_not_commute() {
    for size in 3..=7 {
        let solved = CubeState::new(size);
        assert_ne!(applied(&solved, "R U"), applied(&solved, "U R"));
    }
}

#[test_log::test]
fn full_width_r_turn_rotates_the_whole_cube() {
    for size in 2..=7 {
        let start = scrambled(size);
        let grid = |face| start.face_grid(face);
        let turned = applied(&start, &token(Face::R, size - 1));

        assert_eq!(turned.face_grid(Face::U), grid(Face::F));
        assert_eq!(turned.face_grid(Face::F), grid(Face::D));
        assert_eq!(turned.face_grid(Face::D), half_turn(grid(Face::B)));
        assert_eq!(turned.face_grid(Face::B), half_turn(grid(Face::U)));
        assert_eq!(turned.face_grid(Face::R), clockwise(grid(Face::R)));
        assert_eq!(turned.face_grid(Face::L), anticlockwise(grid(Face::L)));
    }
}

#[test_log::test]
fn full_width_u_turn_rotates_the_whole_cube() {
    for size in 2..=7 {
        let start = scrambled(size);
        let grid = |face| start.face_grid(face);
        let turned = applied(&start, &token(Face::U, size - 1));

        assert_eq!(turned.face_grid(Face::F), grid(Face::R));
        assert_eq!(turned.face_grid(Face::L), grid(Face::F));
        assert_eq!(turned.face_grid(Face::B), grid(Face::L));
        assert_eq!(turned.face_grid(Face::R), grid(Face::B));
        assert_eq!(turned.face_grid(Face::U), clockwise(grid(Face::U)));
        assert_eq!(turned.face_grid(Face::D), anticlockwise(grid(Face::D)));
    }
}

#[test_log::test]
fn full_width_f_turn_rotates_the_whole_cube() {
    for size in 2..=7 {
        let start = scrambled(size);
        let grid = |face| start.face_grid(face);
        let turned = applied(&start, &token(Face::F, size - 1));

        assert_eq!(turned.face_grid(Face::U), clockwise(grid(Face::L)));
        assert_eq!(turned.face_grid(Face::R), clockwise(grid(Face::U)));
        assert_eq!(turned.face_grid(Face::D), clockwise(grid(Face::R)));
        assert_eq!(turned.face_grid(Face::L), clockwise(grid(Face::D)));
        assert_eq!(turned.face_grid(Face::F), clockwise(grid(Face::F)));
        assert_eq!(turned.face_grid(Face::B), anticlockwise(grid(Face::B)));
    }
}

#[test_log::test]
fn opposite_full_width_turns_agree() {
    // Turning all layers from one side is the inverse of turning them all
    // from the other
    for size in 2..=7 {
        let start = scrambled(size);
        for face in Face::ALL {
            let near = token(face, size - 1);
            let far = token(face.opposite(), size - 1);
            assert_eq!(applied(&start, &near), applied(&start, &format!("{far}'")));
        }
    }
}

#[test_log::test]
fn inverse_algorithm_undoes_a_scramble() {
    let scramble: Algorithm = "3Rw U2 3Fw2 Bw' D 3Lw' R2 Uw F' 3Dw2 L".parse().unwrap();
    let mut cube = CubeState::new(7);

    MoveEngine::apply_algorithm(&mut cube, &scramble).unwrap();
    assert!(!cube.is_solved());

    let undo = scramble.inverse();
    MoveEngine::apply_algorithm(&mut cube, &undo).unwrap();
    assert_eq!(cube, CubeState::new(7));
}

fn scramble_strategy() -> impl Strategy<Value = (usize, String)> {
    (2_usize..=7).prop_flat_map(|size| {
        let turn = (0_usize..6, 0..size, 0_usize..3).prop_map(|(face, depth, suffix)| {
            format!("{}{}", token(Face::ALL[face], depth), SUFFIXES[suffix])
        });
        let scramble = prop::collection::vec(turn, 0..40).prop_map(|t| t.join(" "));
        (Just(size), scramble)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn scrambles_only_permute_facelets((size, scramble) in scramble_strategy()) {
        let mut cube = CubeState::new(size);
        MoveEngine::apply(&mut cube, &scramble).unwrap();

        prop_assert_eq!(cube.color_counts(), [size * size; 6]);
        for face in Face::ALL {
            prop_assert_eq!(cube.rows(face).count(), size);
            prop_assert!(cube.rows(face).all(|row| row.len() == size));
        }
    }

    #[test]
    fn scramble_then_inverse_is_solved((size, scramble) in scramble_strategy()) {
        let algorithm: Algorithm = scramble.parse().unwrap();
        let mut cube = CubeState::new(size);

        MoveEngine::apply_algorithm(&mut cube, &algorithm).unwrap();
        let undo = algorithm.inverse();
        MoveEngine::apply_algorithm(&mut cube, &undo).unwrap();

        prop_assert!(cube.is_solved());
        prop_assert_eq!(cube, CubeState::new(size));
    }
}
