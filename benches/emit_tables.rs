//! Table emission benchmarks
//!
//! Run benchmarks: `cargo bench --bench emit_tables`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dxfwrite::{DrawingSession, StrokeStyle, WriterOptions};
use nalgebra::Affine2;

/// Session with `count` distinct dashed line types and as many layers
fn build_session(count: usize) -> DrawingSession {
    let mut session = DrawingSession::with_standard_records(100.0).unwrap();
    let identity = Affine2::identity();
    for i in 0..count {
        let dash = 1.0 + i as f32 * 0.25;
        let stroke = StrokeStyle::dashed(1.0, vec![dash, 1.0, 0.5, 1.0]);
        session.line_type_for_stroke(&stroke, &identity).unwrap();
        session.add_layer(format!("Layer {}", i)).unwrap();
    }
    session
}

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit_tables");
    for count in [10usize, 100, 1000] {
        let session = build_session(count);
        group.throughput(Throughput::Elements(count as u64 * 2));
        group.bench_with_input(BenchmarkId::new("compact", count), &session, |b, s| {
            b.iter(|| black_box(s.emit_tables().unwrap()))
        });
    }
    group.finish();
}

fn bench_autocad_layout(c: &mut Criterion) {
    let session = build_session(100);
    let mut writer_session = DrawingSession::with_configuration(dxfwrite::SessionConfiguration {
        writer: WriterOptions::autocad(),
        ..Default::default()
    });
    for lt in session.line_types.iter() {
        writer_session
            .intern_line_type(lt.pattern().cloned())
            .unwrap();
    }

    c.bench_function("write_tables_autocad", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(64 * 1024);
            writer_session.write_tables(&mut out).unwrap();
            black_box(out)
        })
    });
}

fn bench_interning(c: &mut Criterion) {
    let identity = Affine2::identity();
    let strokes: Vec<StrokeStyle> = (0..50)
        .map(|i| StrokeStyle::dashed(1.0, vec![1.0 + (i % 10) as f32, 1.0]))
        .collect();

    c.bench_function("line_type_for_stroke", |b| {
        b.iter(|| {
            let mut session = DrawingSession::new();
            for stroke in &strokes {
                session.line_type_for_stroke(stroke, &identity).unwrap();
            }
            black_box(session.line_types.len())
        })
    });
}

criterion_group!(benches, bench_emit, bench_autocad_layout, bench_interning);
criterion_main!(benches);
