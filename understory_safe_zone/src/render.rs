// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained overlay for the protective triangle.
//!
//! The renderer keeps at most one triangle: whatever the last open controller
//! pushed. Hosts read it back each frame with [`TriangleRenderer::triangle`]
//! or [`TriangleRenderer::to_path`] and paint it however they like.

use kurbo::BezPath;

use crate::geometry::Triangle;

/// Debug overlay showing the current safe zone.
#[derive(Clone, Debug)]
pub struct TriangleRenderer {
    visible: bool,
    current: Option<Triangle>,
}

impl TriangleRenderer {
    /// Create an empty renderer.
    pub const fn new(visible: bool) -> Self {
        Self {
            visible,
            current: None,
        }
    }

    /// Draw `triangle`, replacing the previous one. No-op while hidden.
    pub fn show(&mut self, triangle: Triangle) {
        if self.visible {
            self.current = Some(triangle);
        }
    }

    /// Draw nothing.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Toggle drawing. Hiding clears immediately; showing waits for the next
    /// [`show`](Self::show).
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.clear();
        }
    }

    /// Whether triangles are drawn.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The triangle currently drawn.
    pub fn triangle(&self) -> Option<Triangle> {
        self.current
    }

    /// The drawn triangle as a closed path; empty when nothing is drawn.
    pub fn to_path(&self) -> BezPath {
        self.current.map(|t| t.to_path()).unwrap_or_default()
    }
}

impl Default for TriangleRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
