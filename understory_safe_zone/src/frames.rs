// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-stepping [`FrameScheduler`] for tests, demos and headless hosts.
//!
//! ## Usage
//!
//! Embed [`ManualFrames`] in your host and forward [`FrameScheduler`] to it.
//! Each "frame", drain the queue with [`ManualFrames::take_due`] and hand every
//! entry to [`SafeMenus::on_frame`](crate::SafeMenus::on_frame). Requests made
//! while running a frame land in the next one, matching how a display-refresh
//! callback behaves.
//!
//! ```
//! use understory_safe_zone::frames::ManualFrames;
//! use understory_safe_zone::host::FrameScheduler;
//! use understory_safe_zone::{Registry, SafeZoneController};
//!
//! let mut registry = Registry::new();
//! let id = registry.register(SafeZoneController::new(1_u32, 2_u32, None));
//!
//! let mut frames = ManualFrames::new();
//! let h = frames.schedule(id);
//! assert!(frames.is_pending(id));
//! frames.cancel(h);
//! assert!(frames.take_due().is_empty());
//! ```

use alloc::vec::Vec;

use crate::host::FrameScheduler;
use crate::types::{ControllerId, FrameHandle};

/// Queue of pending frame requests, fired only when the owner asks.
#[derive(Clone, Debug, Default)]
pub struct ManualFrames {
    next: u64,
    pending: Vec<(ControllerId, FrameHandle)>,
}

impl ManualFrames {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return all pending requests, oldest first.
    pub fn take_due(&mut self) -> Vec<(ControllerId, FrameHandle)> {
        core::mem::take(&mut self.pending)
    }

    /// Number of pending requests.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Whether `target` has a pending request.
    pub fn is_pending(&self, target: ControllerId) -> bool {
        self.pending.iter().any(|&(id, _)| id == target)
    }
}

impl FrameScheduler for ManualFrames {
    fn schedule(&mut self, target: ControllerId) -> FrameHandle {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.pending.push((target, handle));
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        self.pending.retain(|&(_, h)| h != handle);
    }
}
