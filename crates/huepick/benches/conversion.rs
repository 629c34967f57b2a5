use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use huepick::{
    generate_color_harmonies, hsv_to_rgb, parse_color_string, rgb_to_hsv, ColorMode, ColorState,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");

    group.bench_function("parse", |b| {
        b.iter(|| {
            for s in ["#abcdef", "#f0f8", "rgba(12, 34, 56, 0.5)", "hsl(200, 50%, 50%)"] {
                let _ = parse_color_string(black_box(s));
            }
        })
    });

    group.bench_function("hsv-rgb-round-trip", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter_batched(
            || [rng.random_range(0.0..360.0), rng.random(), rng.random()],
            |hsv| rgb_to_hsv(&hsv_to_rgb(&hsv)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("state-setters", |b| {
        b.iter_batched(
            ColorState::new,
            |mut state| {
                state.set_rgb_g(black_box(128.0));
                state.set_hsl_l(black_box(0.25));
                state.toggle_mode();
                state.export_color()
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("harmonies", |b| {
        b.iter(|| generate_color_harmonies(black_box("#3366cc"), ColorMode::Hsl))
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
