//! Shared test utilities for dxfwrite integration tests.
//!
//! Builders for sessions and transforms, plus helpers for splitting emitted
//! text back into code/value pairs.

#![allow(dead_code)]

use dxfwrite::{DrawingSession, StrokeStyle};
use nalgebra::{Affine2, Matrix3};

/// Uniform-or-not scaling transform with optional translation
pub fn transform(sx: f64, sy: f64, tx: f64, ty: f64) -> Affine2<f64> {
    Affine2::from_matrix_unchecked(Matrix3::new(sx, 0.0, tx, 0.0, sy, ty, 0.0, 0.0, 1.0))
}

/// A session with the standard records plus a few dashed line types,
/// built the way a drawing-surface adapter would
pub fn sample_session() -> DrawingSession {
    let mut session = DrawingSession::with_standard_records(100.0).unwrap();
    let strokes = [
        StrokeStyle::dashed(1.0, vec![2.0, 1.0]),
        StrokeStyle::dashed(1.0, vec![6.0, 2.0, 1.0, 2.0]),
        StrokeStyle::dashed(1.0, vec![2.0, 1.0]),
    ];
    for stroke in &strokes {
        session
            .line_type_for_stroke(stroke, &transform(1.5, 1.5, 0.0, 0.0))
            .unwrap();
    }
    session.add_layer("Walls").unwrap();
    session
}

/// Split emitted text into (code, value) pairs
///
/// Panics if the text does not alternate code and value lines.
pub fn pairs(text: &str) -> Vec<(i32, String)> {
    assert!(text.ends_with('\n'), "output must be newline-terminated");
    let lines: Vec<&str> = text[..text.len() - 1].split('\n').collect();
    assert_eq!(lines.len() % 2, 0, "odd number of lines");
    lines
        .chunks(2)
        .map(|pair| {
            let code = pair[0].trim().parse().expect("group code is an integer");
            (code, pair[1].to_string())
        })
        .collect()
}

/// Values of every pair with `code`
pub fn values(pairs: &[(i32, String)], code: i32) -> Vec<String> {
    pairs
        .iter()
        .filter(|(c, _)| *c == code)
        .map(|(_, v)| v.clone())
        .collect()
}

/// Split emitted text into one pair list per record (each starts at group 0)
pub fn records(text: &str) -> Vec<Vec<(i32, String)>> {
    let mut out: Vec<Vec<(i32, String)>> = Vec::new();
    for pair in pairs(text) {
        if pair.0 == 0 {
            out.push(Vec::new());
        }
        out.last_mut().expect("output starts with a group 0 marker").push(pair);
    }
    out
}
