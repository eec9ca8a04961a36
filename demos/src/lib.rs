// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the demos: a static page of named boxes that logs
//! presentation changes, driven by [`ManualFrames`].

use std::collections::BTreeMap;

use kurbo::Rect;
use tracing_subscriber::EnvFilter;
use understory_safe_zone::frames::ManualFrames;
use understory_safe_zone::host::{FrameScheduler, Layout, Presentation};
use understory_safe_zone::{ControllerId, FrameHandle, Marker, SafeMenus};

/// Install a `fmt` subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("understory_safe_zone=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// A page of named boxes.
#[derive(Debug, Default)]
pub struct DemoPage {
    boxes: BTreeMap<&'static str, Rect>,
    labels: BTreeMap<&'static str, &'static str>,
    containers: BTreeMap<&'static str, &'static str>,
    frames: ManualFrames,
}

impl DemoPage {
    /// An empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a box.
    pub fn with(mut self, name: &'static str, rect: Rect) -> Self {
        self.boxes.insert(name, rect);
        self
    }

    /// Give `trigger` a distinct label box.
    pub fn with_label(mut self, trigger: &'static str, label: &'static str) -> Self {
        self.labels.insert(trigger, label);
        self
    }

    /// Place `submenu` inside `container`.
    pub fn with_container(mut self, submenu: &'static str, container: &'static str) -> Self {
        self.containers.insert(submenu, container);
        self
    }

    /// Run every poll due this frame.
    pub fn run_frame(&mut self, menus: &mut SafeMenus<&'static str>) {
        for (id, handle) in self.frames.take_due() {
            menus.on_frame(self, id, handle);
        }
    }
}

impl Layout for DemoPage {
    type Element = &'static str;

    fn bounds(&self, element: &'static str) -> Option<Rect> {
        self.boxes.get(element).copied()
    }

    fn label_of(&self, trigger: &'static str) -> Option<&'static str> {
        self.labels.get(trigger).copied()
    }

    fn container_of(&self, submenu: &'static str) -> Option<&'static str> {
        self.containers.get(submenu).copied()
    }
}

impl Presentation<&'static str> for DemoPage {
    fn set_marker(&mut self, element: &'static str, marker: Marker, on: bool) {
        tracing::info!(element, ?marker, on, "marker");
    }

    fn set_offset_top(&mut self, submenu: &'static str, offset: f64) {
        tracing::info!(submenu, offset, "offset");
    }
}

impl FrameScheduler for DemoPage {
    fn schedule(&mut self, target: ControllerId) -> FrameHandle {
        self.frames.schedule(target)
    }

    fn cancel(&mut self, handle: FrameHandle) {
        self.frames.cancel(handle);
    }
}
