// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer tracker: the latest pointer position in viewport coordinates.

use kurbo::Point;

/// Latest known pointer position.
///
/// Written by the host's pointer-move handler and read by every controller
/// poll. Starts far outside any plausible viewport so nothing reads as
/// hovered before the first move arrives.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerTracker {
    position: Point,
}

impl PointerTracker {
    /// Position reported before any pointer move.
    pub const OFFSCREEN: Point = Point::new(-9999.0, -9999.0);

    /// Create a tracker at [`Self::OFFSCREEN`].
    pub const fn new() -> Self {
        Self {
            position: Self::OFFSCREEN,
        }
    }

    /// Record a pointer move.
    #[inline]
    pub fn update(&mut self, x: f64, y: f64) {
        self.position = Point::new(x, y);
    }

    /// Current pointer position.
    #[inline]
    pub const fn position(&self) -> Point {
        self.position
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}
