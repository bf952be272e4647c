//! Write the table records of a small sample drawing to stdout.
//!
//! Usage:
//!   cargo run --bin dxfwrite-tables
//!   cargo run --bin dxfwrite-tables -- --autocad   (right-aligned codes, ANSI_1252)
//!
//! Set RUST_LOG=debug to see line type reuse decisions.

use std::io;

use anyhow::Context;
use dxfwrite::{
    Color, DrawingSession, LineWeight, SessionConfiguration, StrokeStyle, TableEntry,
    WriterOptions,
};
use nalgebra::{Affine2, Matrix3};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let autocad = std::env::args().skip(1).any(|arg| arg == "--autocad");
    let config = SessionConfiguration {
        writer: if autocad {
            WriterOptions::autocad()
        } else {
            WriterOptions::default()
        },
        ..Default::default()
    };

    let mut session = DrawingSession::with_configuration(config);
    session
        .add_viewport("*Active", 297.0)
        .context("adding viewport")?;
    session.add_layer("0")?;
    let walls = session.add_layer("Walls")?;
    if let Some(layer) = session.layers.get_mut("Walls") {
        layer.color = Color::RED;
        layer.line_weight = LineWeight::from_millimeters(0.5);
    }
    session.add_text_style("Standard", "txt")?;

    // Two strokes drawn at different zoom levels that end up identical
    // in drawing units, plus one solid stroke
    let page = Affine2::from_matrix_unchecked(Matrix3::new(
        2.0, 0.0, 0.0, 0.0, -2.0, 297.0, 0.0, 0.0, 1.0,
    ));
    let strokes = [
        (StrokeStyle::dashed(0.5, vec![5.0, 2.5]), Affine2::identity()),
        (StrokeStyle::dashed(0.5, vec![2.5, 1.25]), page),
        (StrokeStyle::solid(0.5), page),
    ];
    for (stroke, transform) in &strokes {
        let line_type = session
            .line_type_for_stroke(stroke, transform)
            .context("resolving line type")?;
        info!(line_type = line_type.name(), "stroke resolved");
    }

    info!(
        walls = %walls,
        handles = session.handle_count(),
        handseed = %session.handle_seed(),
        "session built"
    );

    session
        .write_tables(io::stdout().lock())
        .context("writing table records")?;
    Ok(())
}
