// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted page for scenario tests: fixed rects, recorded markers, manual frames.

#![allow(dead_code, reason = "Each test binary uses a different subset.")]

use std::collections::{HashMap, HashSet};

use kurbo::Rect;
use understory_safe_zone::frames::ManualFrames;
use understory_safe_zone::host::{FrameScheduler, Layout, Presentation};
use understory_safe_zone::{ControllerId, FrameHandle, Marker, SafeMenus};

pub type El = u32;

#[derive(Debug, Default)]
pub struct Page {
    pub rects: HashMap<El, Rect>,
    pub labels: HashMap<El, El>,
    pub containers: HashMap<El, El>,
    pub markers: HashSet<(El, Marker)>,
    pub offsets: HashMap<El, f64>,
    pub frames: ManualFrames,
    pub cancels: usize,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rect(mut self, el: El, x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        self.rects.insert(el, Rect::new(x0, y0, x1, y1));
        self
    }

    pub fn label(mut self, trigger: El, label: El) -> Self {
        self.labels.insert(trigger, label);
        self
    }

    pub fn container(mut self, submenu: El, container: El) -> Self {
        self.containers.insert(submenu, container);
        self
    }

    pub fn has(&self, el: El, marker: Marker) -> bool {
        self.markers.contains(&(el, marker))
    }

    pub fn visible_submenus(&self) -> Vec<El> {
        let mut v: Vec<El> = self
            .markers
            .iter()
            .filter(|(_, m)| *m == Marker::VISIBLE)
            .map(|(el, _)| *el)
            .collect();
        v.sort_unstable();
        v
    }
}

impl Layout for Page {
    type Element = El;

    fn bounds(&self, element: El) -> Option<Rect> {
        self.rects.get(&element).copied()
    }

    fn label_of(&self, trigger: El) -> Option<El> {
        self.labels.get(&trigger).copied()
    }

    fn container_of(&self, submenu: El) -> Option<El> {
        self.containers.get(&submenu).copied()
    }
}

impl Presentation<El> for Page {
    fn set_marker(&mut self, element: El, marker: Marker, on: bool) {
        if on {
            self.markers.insert((element, marker));
        } else {
            self.markers.remove(&(element, marker));
        }
    }

    fn set_offset_top(&mut self, submenu: El, offset: f64) {
        self.offsets.insert(submenu, offset);
    }
}

impl FrameScheduler for Page {
    fn schedule(&mut self, target: ControllerId) -> FrameHandle {
        self.frames.schedule(target)
    }

    fn cancel(&mut self, handle: FrameHandle) {
        self.cancels += 1;
        self.frames.cancel(handle);
    }
}

/// Run one display frame: every pending poll ticks once.
pub fn step(menus: &mut SafeMenus<El>, page: &mut Page) {
    for (id, handle) in page.frames.take_due() {
        menus.on_frame(page, id, handle);
    }
}

/// Move the pointer with trigger hit-testing, then run one frame.
pub fn move_and_step(menus: &mut SafeMenus<El>, page: &mut Page, x: f64, y: f64) {
    menus.pointer_move(page, x, y);
    step(menus, page);
}
