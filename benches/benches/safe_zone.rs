// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_safe_zone::controller::Sample;
use understory_safe_zone::frames::ManualFrames;
use understory_safe_zone::host::{FrameScheduler, Layout, Presentation};
use understory_safe_zone::{
    ControllerId, FrameHandle, Marker, SafeMenus, SafeZoneController, Triangle, point_in_triangle,
};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
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

fn gen_points(count: usize, area: Rect, seed: u64) -> Vec<Point> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            Point::new(
                area.x0 + rng.next_f64() * area.width(),
                area.y0 + rng.next_f64() * area.height(),
            )
        })
        .collect()
}

/// A menu with `n` stacked items, each with a submenu to the right.
struct Column {
    n: u32,
    frames: ManualFrames,
}

impl Column {
    const ROW: f64 = 24.0;
}

impl Layout for Column {
    type Element = u32;

    // Even ids are triggers, odd ids their submenus.
    fn bounds(&self, el: u32) -> Option<Rect> {
        let row = el / 2;
        if row >= self.n {
            return None;
        }
        let y = f64::from(row) * Self::ROW;
        Some(if el % 2 == 0 {
            Rect::new(0.0, y, 160.0, y + Self::ROW)
        } else {
            Rect::new(180.0, y, 360.0, y + 8.0 * Self::ROW)
        })
    }
}

impl Presentation<u32> for Column {
    fn set_marker(&mut self, _el: u32, _marker: Marker, _on: bool) {}
    fn set_offset_top(&mut self, _el: u32, _offset: f64) {}
}

impl FrameScheduler for Column {
    fn schedule(&mut self, target: ControllerId) -> FrameHandle {
        self.frames.schedule(target)
    }
    fn cancel(&mut self, handle: FrameHandle) {
        self.frames.cancel(handle);
    }
}

fn bench_point_in_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_in_triangle");
    let tri = Triangle::spanning(
        Point::new(100.0, 50.0),
        Rect::new(150.0, 0.0, 300.0, 50.0),
        12.0,
    );
    let pts = gen_points(10_000, Rect::new(80.0, -40.0, 180.0, 90.0), 0xA11CE);
    group.throughput(Throughput::Elements(pts.len() as u64));
    group.bench_function("10k_points", |b| {
        b.iter(|| {
            let mut inside = 0_usize;
            for &p in &pts {
                inside += usize::from(point_in_triangle(
                    black_box(p),
                    tri.apex,
                    tri.near,
                    tri.far,
                ));
            }
            black_box(inside)
        });
    });
    group.finish();
}

fn bench_controller_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller_advance");
    let trigger = Rect::new(0.0, 0.0, 100.0, 100.0);
    let submenu = Rect::new(150.0, 0.0, 300.0, 50.0);
    let pts = gen_points(1_000, Rect::new(-20.0, -20.0, 320.0, 120.0), 0xBEEF);
    group.throughput(Throughput::Elements(pts.len() as u64));
    group.bench_function("1k_samples", |b| {
        b.iter_batched(
            || {
                let mut ctl = SafeZoneController::new(1_u32, 2_u32, None);
                ctl.activate();
                ctl
            },
            |mut ctl| {
                for &p in &pts {
                    let s = Sample::new(p, trigger, submenu, None);
                    black_box(ctl.advance(&s, 12.0));
                }
                ctl
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_sibling_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("safe_menus_sweep");
    for &n in &[4_u32, 16, 64] {
        group.bench_function(format!("{n}_items"), |b| {
            b.iter_batched(
                || {
                    let page = Column {
                        n,
                        frames: ManualFrames::new(),
                    };
                    let mut menus = SafeMenus::default();
                    for row in 0..n {
                        let _ = menus.setup(&page, row * 2, row * 2 + 1);
                    }
                    (menus, page)
                },
                |(mut menus, mut page)| {
                    // Slide down the left column, one frame per row.
                    for row in 0..n {
                        let y = f64::from(row) * Column::ROW + Column::ROW / 2.0;
                        menus.pointer_move(&mut page, 40.0, y);
                        for (id, h) in page.frames.take_due() {
                            menus.on_frame(&mut page, id, h);
                        }
                    }
                    black_box(menus.any_frozen())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_point_in_triangle,
    bench_controller_tick,
    bench_sibling_sweep
);
criterion_main!(benches);
