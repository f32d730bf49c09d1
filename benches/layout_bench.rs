use criterion::{Criterion, criterion_group, criterion_main};
use oi_overlay::core::{Bounding, PriceAxis};
use oi_overlay::layout::{LayoutConfig, compute_overlay_primitives};
use oi_overlay::synthetic::StrikeLadderGenerator;
use std::hint::black_box;

fn bench_layout_visible_ladder(c: &mut Criterion) {
    let records = StrikeLadderGenerator::new(17, 24_000.0, 50.0)
        .expect("valid ladder")
        .generate(41);
    let axis = PriceAxis::new(24_000.0, 26_000.0, 0.0, 1_080.0).expect("valid axis");
    let bounds = Bounding::from_edges(0.0, 0.0, 1_920.0, 1_080.0);
    let config = LayoutConfig::default();

    c.bench_function("oi_layout_41_visible_strikes", |b| {
        b.iter(|| {
            let _ = compute_overlay_primitives(
                black_box(&records),
                black_box(bounds),
                black_box(&axis),
                black_box(&config),
            );
        })
    });
}

fn bench_layout_mostly_hidden_ladder(c: &mut Criterion) {
    let records = StrikeLadderGenerator::new(99, 10_000.0, 10.0)
        .expect("valid ladder")
        .generate(2_000);
    let axis = PriceAxis::new(19_000.0, 19_500.0, 0.0, 1_080.0).expect("valid axis");
    let bounds = Bounding::from_edges(0.0, 0.0, 1_920.0, 1_080.0);
    let config = LayoutConfig::default();

    c.bench_function("oi_layout_2k_strikes_narrow_window", |b| {
        b.iter(|| {
            let _ = compute_overlay_primitives(
                black_box(&records),
                black_box(bounds),
                black_box(&axis),
                black_box(&config),
            );
        })
    });
}

criterion_group!(
    benches,
    bench_layout_visible_ladder,
    bench_layout_mostly_hidden_ladder
);
criterion_main!(benches);
