// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_slide::animator::SnapAnimator;
use understory_slide::config::{SlideConfig, SnapRules};
use understory_slide::controller::{SingleMenuController, TwoSidedMenuController};
use understory_slide::geometry::PanelGeometry;
use understory_slide::host::{PanelChild, SlideHost};
use understory_slide::snap::decide;
use understory_slide::types::{Intent, MarginTarget, OpenEdge, PointerEvent, Side};
use understory_slide::velocity::{VelocitySampler, VelocityTracker};

/// Host that only remembers the last published offset.
struct NullHost {
    children: Vec<PanelChild>,
    last: i32,
}

impl NullHost {
    fn new(widths: &[i32]) -> Self {
        Self {
            children: widths.iter().map(|&width| PanelChild { width }).collect(),
            last: 0,
        }
    }
}

impl SlideHost for NullHost {
    fn children(&self) -> &[PanelChild] {
        &self.children
    }

    fn measured_width(&self) -> i32 {
        1080
    }

    fn scaled_touch_slop(&self) -> i32 {
        24
    }

    fn set_offset(&mut self, _target: MarginTarget, value: i32) {
        self.last = value;
    }
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// A jittery rightward drag of `moves` events, 8 ms apart.
fn drag_stream(moves: usize, seed: u64) -> Vec<PointerEvent> {
    let mut rng = Rng(seed);
    let mut out = Vec::with_capacity(moves + 2);
    out.push(PointerEvent::down(20.0, 900.0, 0));
    let mut x = 20.0;
    for i in 1..=moves {
        x += 4.0 + rng.next_f64() * 6.0;
        let y = 900.0 + rng.next_f64() * 8.0 - 4.0;
        out.push(PointerEvent::moved(x, y, i as u64 * 8));
    }
    out.push(PointerEvent::up(x, 900.0, (moves as u64 + 1) * 8));
    out
}

fn bench_drag_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_stream");
    for &moves in &[16_usize, 128, 1024] {
        let events = drag_stream(moves, 0x5eed);
        group.throughput(Throughput::Elements(events.len() as u64));

        group.bench_function(format!("single_menu/{moves}"), |b| {
            b.iter_batched(
                || {
                    let mut host = NullHost::new(&[1000, 1080]);
                    let mut menu = SingleMenuController::new(SlideConfig::single_menu());
                    menu.measure(&mut host).unwrap();
                    (menu, host)
                },
                |(mut menu, mut host)| {
                    for &event in &events {
                        black_box(menu.on_pointer_event(&mut host, event));
                    }
                    black_box(host.last)
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("two_sided/{moves}"), |b| {
            b.iter_batched(
                || {
                    let mut host = NullHost::new(&[600, 480, 1080]);
                    let mut menus = TwoSidedMenuController::new(SlideConfig::two_sided());
                    menus.measure(&mut host).unwrap();
                    (menus, host)
                },
                |(mut menus, mut host)| {
                    for &event in &events {
                        black_box(menus.on_pointer_event(&mut host, event));
                    }
                    black_box(host.last)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_release(c: &mut Criterion) {
    let mut group = c.benchmark_group("release");
    let events = drag_stream(20, 0xfeed);

    group.bench_function("velocity/20_samples", |b| {
        let mut sampler = VelocitySampler::with_window(1000);
        b.iter(|| {
            sampler.reset();
            for e in &events {
                sampler.add_sample(e.position.x, e.position.y, e.time_ms);
            }
            black_box(sampler.horizontal_speed())
        });
    });

    let geometry = PanelGeometry::new(-1000, 0, 1000, 1080, Side::Left, OpenEdge::Max).unwrap();
    let rules = SnapRules::default();
    group.bench_function("decide", |b| {
        let mut rng = Rng(7);
        b.iter(|| {
            let dx = (rng.next_f64() * 2000.0 - 1000.0) as i32;
            let velocity = rng.next_f64() * 600.0;
            black_box(decide(&geometry, &rules, Intent::Opening, dx, velocity))
        });
    });
    group.finish();
}

fn bench_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("settle");
    for &travel in &[300_i32, 1000, 4000] {
        group.bench_function(format!("animator/{travel}px"), |b| {
            b.iter(|| {
                let mut anim = SnapAnimator::new();
                anim.start(-travel, 30, (-travel, 0), 20, 0);
                let mut last = 0;
                // Poll once at a far-future time: every frame is due.
                while let Some(frame) = anim.poll(u64::MAX) {
                    last = frame.offset;
                }
                black_box(last)
            });
        });
    }
    group.finish();
}

fn bench_tracker_trait(c: &mut Criterion) {
    // Fit cost as the ring buffer fills.
    let mut group = c.benchmark_group("tracker");
    let events = drag_stream(64, 0xabc);
    group.bench_function("least_squares/fill_64", |b| {
        b.iter_batched(
            VelocitySampler::default,
            |mut sampler: VelocitySampler| {
                sampler.reset();
                for e in &events {
                    sampler.add_sample(e.position.x, e.position.y, e.time_ms);
                }
                black_box(sampler.tracker().x_velocity(1000))
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_drag_stream,
    bench_release,
    bench_settle,
    bench_tracker_trait
);
criterion_main!(benches);
