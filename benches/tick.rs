//! Benchmarks for settle spring ticks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use settle::*;

fn bench_scalar_tick(c: &mut Criterion) {
    c.bench_function("scalar_spring_1000_ticks", |b| {
        b.iter(|| {
            let mut spring: Spring32 = Spring::new(0.1, 0.7, 0.0).unwrap();
            spring.set_destination(black_box(10.0)).unwrap();
            for _ in 0..1000 {
                spring.tick();
            }
            spring.current_value()
        });
    });
}

fn bench_vec4_tick_into(c: &mut Criterion) {
    c.bench_function("vec4_spring_1000_ticks_into_buffer", |b| {
        let mut out = [0.0f32; 4];
        b.iter(|| {
            let mut spring: Spring32 = Spring::new(0.2, 0.4, [0.0, 0.0, 0.0, 0.0]).unwrap();
            spring.set_destination(black_box([1.0, 2.0, 3.0, 4.0])).unwrap();
            for _ in 0..1000 {
                spring.tick_into(&mut out, TickOverrides::none()).unwrap();
            }
            out
        });
    });
}

fn bench_retarget_every_frame(c: &mut Criterion) {
    c.bench_function("vec2_follow_moving_target_600_frames", |b| {
        b.iter(|| {
            let mut spring: Spring64 = Spring::new(0.1, 0.7, [0.0, 0.0]).unwrap();
            for frame in 0..600 {
                let t = frame as f64 * 0.01;
                spring.set_destination([t, -t]).unwrap();
                spring.tick();
            }
            spring.current_value()
        });
    });
}

criterion_group!(benches, bench_scalar_tick, bench_vec4_tick_into, bench_retarget_every_frame);
criterion_main!(benches);
