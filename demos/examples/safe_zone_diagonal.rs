// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagonal travel from a menu item into its submenu.
//!
//! The pointer leaves the item heading up and right toward the submenu. It
//! spends a few frames outside both boxes; the frozen triangle keeps the
//! submenu open until it arrives. A second trip veers off below the triangle
//! and the submenu closes.
//!
//! Run:
//! - `cargo run -p understory_demos --example safe_zone_diagonal`
//! - `RUST_LOG=understory_safe_zone=trace cargo run -p understory_demos --example safe_zone_diagonal`

use kurbo::{Point, Rect};
use understory_demos::{DemoPage, init_tracing};
use understory_safe_zone::{SafeMenus, ZoneState};

fn walk(menus: &mut SafeMenus<&'static str>, page: &mut DemoPage, from: Point, to: Point, steps: u32) {
    for i in 0..=steps {
        let t = f64::from(i) / f64::from(steps);
        let p = from.lerp(to, t);
        menus.pointer_move(page, p.x, p.y);
        page.run_frame(menus);
        let share = menus.registry().ids().next().and_then(|id| menus.state(id));
        println!("  ({:6.1}, {:6.1})  {:?}", p.x, p.y, share.unwrap_or_default());
    }
}

fn main() {
    init_tracing();

    let mut page = DemoPage::new()
        .with("menu", Rect::new(0.0, 0.0, 100.0, 300.0))
        .with("share", Rect::new(0.0, 0.0, 100.0, 100.0))
        .with("share-label", Rect::new(10.0, 35.0, 80.0, 65.0))
        .with_label("share", "share-label")
        .with("share-menu", Rect::new(150.0, 0.0, 300.0, 50.0))
        .with_container("share-menu", "menu");

    let mut menus = SafeMenus::default();
    let share = menus
        .setup(&page, "share", "share-menu")
        .expect("demo page has both elements");

    println!("== Diagonal into the submenu ==");
    walk(&mut menus, &mut page, Point::new(40.0, 60.0), Point::new(200.0, 20.0), 8);
    assert_eq!(menus.state(share), Some(ZoneState::OnSub));
    if let Some(tri) = menus.renderer().triangle() {
        println!("  safe zone: {:?}", tri.points());
    }

    println!("== Back out and away below the triangle ==");
    walk(&mut menus, &mut page, Point::new(200.0, 20.0), Point::new(60.0, 60.0), 4);
    walk(&mut menus, &mut page, Point::new(60.0, 60.0), Point::new(160.0, 140.0), 4);
    assert!(!menus.is_open(share));
}
