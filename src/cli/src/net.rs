use cube_core::{CubeState, Face};
use owo_colors::OwoColorize;

use crate::config::Palette;

/// Net rows, top to bottom: `None` is a gap, `Some(face)` one row of a face.
fn layout(size: usize) -> impl Iterator<Item = [(Option<Face>, usize); 4]> {
    let top = (0..size).map(|row| {
        [
            (None, row),
            (Some(Face::U), row),
            (None, row),
            (None, row),
        ]
    });
    let belt = (0..size).map(|row| {
        [
            (Some(Face::L), row),
            (Some(Face::F), row),
            (Some(Face::R), row),
            (Some(Face::B), row),
        ]
    });
    let bottom = (0..size).map(|row| {
        [
            (None, row),
            (Some(Face::D), row),
            (None, row),
            (None, row),
        ]
    });

    top.chain(belt).chain(bottom)
}

/// Prints the unfolded net with each facelet painted in its palette color.
pub fn paint(cube: &CubeState, palette: &Palette) -> String {
    let size = cube.size();
    let blank = "  ".repeat(size);
    let mut out = String::new();

    for line in layout(size) {
        let mut text = String::new();

        for (face, row) in line {
            match face {
                Some(face) => {
                    for col in 0..size {
                        let [r, g, b] = palette[cube.facelet(face, row, col)];
                        text.push_str(&"  ".on_truecolor(r, g, b).to_string());
                    }
                }
                None => text.push_str(&blank),
            }
            text.push(' ');
        }

        out.push_str(text.trim_end());
        out.push('\n');
    }

    out
}
