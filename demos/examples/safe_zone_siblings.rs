// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two stacked items whose submenus compete for the pointer.
//!
//! Heading for the "move" submenu, the pointer crosses the "share" item. The
//! move triangle protects the pointer there, so share does not open. Going
//! straight down instead opens share and closes move.
//!
//! Run:
//! - `cargo run -p understory_demos --example safe_zone_siblings`

use kurbo::Rect;
use understory_demos::{DemoPage, init_tracing};
use understory_safe_zone::SafeMenus;

fn main() {
    init_tracing();

    let mut page = DemoPage::new()
        .with("menu", Rect::new(0.0, 0.0, 100.0, 200.0))
        .with("move", Rect::new(0.0, 0.0, 100.0, 30.0))
        .with("move-label", Rect::new(10.0, 5.0, 60.0, 25.0))
        .with_label("move", "move-label")
        .with("move-menu", Rect::new(150.0, 0.0, 300.0, 120.0))
        .with_container("move-menu", "menu")
        .with("share", Rect::new(0.0, 30.0, 100.0, 60.0))
        .with("share-menu", Rect::new(150.0, 30.0, 300.0, 90.0))
        .with_container("share-menu", "menu");

    let mut menus = SafeMenus::default();
    let mv = menus.setup(&page, "move", "move-menu").expect("move pair");
    let share = menus.setup(&page, "share", "share-menu").expect("share pair");

    let report = |menus: &SafeMenus<&'static str>, what: &str| {
        println!(
            "{what:<40} move={:?} share={:?}",
            menus.state(mv).unwrap_or_default(),
            menus.state(share).unwrap_or_default()
        );
    };

    println!("== Diagonal across a sibling ==");
    for (x, y) in [(50.0, 15.0), (95.0, 45.0), (200.0, 60.0)] {
        menus.pointer_move(&mut page, x, y);
        page.run_frame(&mut menus);
        report(&menus, &format!("pointer at ({x}, {y})"));
    }
    assert!(menus.is_open(mv) && !menus.is_open(share));

    println!("== Straight down onto the sibling ==");
    menus.close_all(&mut page);
    for (x, y) in [(40.0, 15.0), (40.0, 45.0)] {
        menus.pointer_move(&mut page, x, y);
        page.run_frame(&mut menus);
        report(&menus, &format!("pointer at ({x}, {y})"));
    }
    assert!(!menus.is_open(mv) && menus.is_open(share));

    println!("== Hide the overlay ==");
    menus.set_triangle_visible(false);
    page.run_frame(&mut menus);
    assert!(menus.renderer().to_path().elements().is_empty());
    report(&menus, "overlay hidden");
}
