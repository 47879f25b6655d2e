use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use topster_core::recording::{RecordedImage, RecordingSurface};
use topster_core::{generate, scaled_dimensions, setup, Chart, ChartItem, ChartSize, CELL_SIZE};

fn build_chart(side: u32) -> Chart<RecordedImage> {
    let mut chart = Chart::new("Bench", ChartSize::new(side, side));
    chart.show_titles = true;
    for i in 0..side * side {
        let cover = RecordedImage::new(format!("c{i}"), 100 + i % 400, 120 + (i * 7) % 380);
        chart.add_item(ChartItem::new(format!("Album {i}"), cover).with_creator("Artist"));
    }
    chart
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("topster");
    group.bench_function("scaled_dimensions", |b| {
        b.iter(|| {
            for w in (1..1000u32).step_by(37) {
                black_box(scaled_dimensions(black_box(w), black_box(1000 - w), CELL_SIZE));
            }
        });
    });
    for &side in &[5u32, 10, 40] {
        let chart = build_chart(side);
        group.bench_function(format!("setup_{side}x{side}"), |b| {
            let mut surface = RecordingSurface::default();
            b.iter(|| -> Result<()> {
                black_box(setup(&mut surface, &chart)?);
                Ok(())
            });
        });
        group.bench_function(format!("generate_{side}x{side}"), |b| {
            let mut surface = RecordingSurface::default();
            b.iter(|| -> Result<()> {
                let painted = generate(&mut surface, &chart)?;
                black_box(painted.commands().len());
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
