// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use iced::Point;
use iced_feedback::ui::widgets::confetti::{BurstSettings, ConfettiBurst};
use std::hint::black_box;

fn confetti_step_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("confetti_step");

    for particle_count in [200, 1000] {
        group.bench_function(format!("step_{particle_count}_particles"), |b| {
            // Particles die off over time, so each measurement starts from
            // a freshly ignited burst.
            b.iter_batched(
                || {
                    let mut burst = ConfettiBurst::new(BurstSettings {
                        particle_count,
                        gravity: 0.3,
                        initial_velocity: 20.0,
                    });
                    burst.ignite(Point::new(400.0, 300.0));
                    burst
                },
                |mut burst| {
                    burst.step();
                    black_box(burst);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, confetti_step_benchmark);
criterion_main!(benches);
