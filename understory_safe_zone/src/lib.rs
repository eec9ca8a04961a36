// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_safe_zone --heading-base-level=0

//! Understory Safe Zone: hover submenus that survive diagonal pointer travel.
//!
//! ## Overview
//!
//! Moving the pointer from a menu item toward its submenu usually crosses a
//! neighboring item on the way. A plain hover menu would switch to that
//! neighbor. This crate keeps the submenu open while the pointer stays inside
//! a triangle spanned from the item's label to the submenu's near edge.
//!
//! Each trigger/submenu pair gets a [`SafeZoneController`] with four states:
//! `Closed`, `OnItem`, `Frozen` and `OnSub`.
//! See [`controller`] for the transition rules.
//!
//! ## Host integration
//!
//! The crate does not own any elements, windows or timers. It talks to the
//! host through the ports in [`host`]:
//!
//! - [`Layout`](host::Layout): current bounds of elements, measured fresh each frame.
//! - [`Presentation`](host::Presentation): open/visible markers and the submenu's offset.
//! - [`FrameScheduler`](host::FrameScheduler): one callback per display refresh.
//!
//! [`frames::ManualFrames`] is a scheduler you step by hand, used by the tests
//! and demos.
//!
//! ## Protection
//!
//! A controller protects a point when it is open and the point lies inside
//! its submenu or its triangle. While some controller protects the pointer,
//! no other trigger can activate. This stops a fast pass over a sibling item
//! from stealing the menu mid-diagonal.
//!
//! ## Boundaries
//!
//! Rectangle and triangle tests are inclusive: a point on an edge is inside.
//!
//! ## Example
//!
//! ```
//! use kurbo::Rect;
//! use understory_safe_zone::frames::ManualFrames;
//! use understory_safe_zone::host::{FrameScheduler, Layout, Presentation};
//! use understory_safe_zone::{ControllerId, FrameHandle, Marker, SafeMenus, ZoneState};
//!
//! struct Page {
//!     frames: ManualFrames,
//! }
//!
//! impl Layout for Page {
//!     type Element = &'static str;
//!     fn bounds(&self, el: &'static str) -> Option<Rect> {
//!         match el {
//!             "share" => Some(Rect::new(0.0, 0.0, 100.0, 100.0)),
//!             "share-menu" => Some(Rect::new(150.0, 0.0, 300.0, 50.0)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! impl Presentation<&'static str> for Page {
//!     fn set_marker(&mut self, _el: &'static str, _marker: Marker, _on: bool) {}
//!     fn set_offset_top(&mut self, _el: &'static str, _offset: f64) {}
//! }
//!
//! impl FrameScheduler for Page {
//!     fn schedule(&mut self, target: ControllerId) -> FrameHandle {
//!         self.frames.schedule(target)
//!     }
//!     fn cancel(&mut self, handle: FrameHandle) {
//!         self.frames.cancel(handle);
//!     }
//! }
//!
//! fn step(menus: &mut SafeMenus<&'static str>, page: &mut Page) {
//!     for (id, handle) in page.frames.take_due() {
//!         menus.on_frame(page, id, handle);
//!     }
//! }
//!
//! let mut page = Page { frames: ManualFrames::new() };
//! let mut menus = SafeMenus::default();
//! let share = menus.setup(&page, "share", "share-menu").unwrap();
//!
//! menus.pointer_move(&mut page, 50.0, 50.0);
//! step(&mut menus, &mut page);
//! assert_eq!(menus.state(share), Some(ZoneState::OnItem));
//!
//! // Off the item, heading for the submenu: the triangle holds it open.
//! menus.pointer_move(&mut page, 120.0, 50.0);
//! step(&mut menus, &mut page);
//! assert!(menus.is_frozen(share));
//!
//! menus.pointer_move(&mut page, 200.0, 20.0);
//! step(&mut menus, &mut page);
//! assert_eq!(menus.state(share), Some(ZoneState::OnSub));
//!
//! menus.pointer_move(&mut page, 400.0, 400.0);
//! step(&mut menus, &mut page);
//! assert!(!menus.is_open(share));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod controller;
pub mod error;
pub mod frames;
pub mod geometry;
pub mod host;
pub mod hover;
pub mod menus;
pub mod pointer;
pub mod registry;
pub mod render;
pub mod types;

pub use controller::{SafeZoneController, ZoneState};
pub use error::SetupError;
pub use geometry::{Triangle, point_in_triangle, rect_contains};
pub use menus::SafeMenus;
pub use pointer::PointerTracker;
pub use registry::Registry;
pub use render::TriangleRenderer;
pub use types::{ControllerId, FrameHandle, Marker, SafeZoneConfig};
