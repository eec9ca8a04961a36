// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry predicates for the safe zone: inclusive rectangle containment and
//! the protective [`Triangle`].
//!
//! Both predicates treat boundaries as inside. A pointer resting exactly on an
//! edge of the trigger, the submenu, or the triangle keeps the menu open.

use kurbo::{BezPath, Point, Rect};

/// Returns true if `p` lies inside `rect` or on any of its four edges.
///
/// Unlike [`Rect::contains`], which is half-open on the right and bottom, this
/// is inclusive on all sides. Assumes `x0 <= x1` and `y0 <= y1`.
#[inline]
pub fn rect_contains(rect: Rect, p: Point) -> bool {
    p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1
}

/// Signed area of `p` relative to the directed edge `b → a`.
#[inline]
fn edge_sign(p: Point, a: Point, b: Point) -> f64 {
    (p - b).cross(a - b)
}

/// Returns true if `p` lies inside the triangle `a`, `b`, `c` or on its boundary.
///
/// The three edge cross products are compared by sign. The point is inside
/// unless the signs mix strictly positive and strictly negative values; zero
/// is neutral. This makes the test independent of winding order and counts
/// points on an edge (or on a degenerate triangle's segment) as inside.
pub fn point_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let d1 = edge_sign(p, a, b);
    let d2 = edge_sign(p, b, c);
    let d3 = edge_sign(p, c, a);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// The protective region between a trigger's label and a submenu's near edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    /// Trailing edge of the trigger label at the trigger's vertical midpoint.
    pub apex: Point,
    /// Submenu's near edge, above its top.
    pub near: Point,
    /// Submenu's near edge, below its bottom.
    pub far: Point,
}

impl Triangle {
    /// Create a triangle from its three corners.
    pub const fn new(apex: Point, near: Point, far: Point) -> Self {
        Self { apex, near, far }
    }

    /// Span from `apex` to the left edge of `submenu`, overshooting its top and
    /// bottom by `margin` so a fast diagonal move does not slip past the corner.
    pub fn spanning(apex: Point, submenu: Rect, margin: f64) -> Self {
        Self {
            apex,
            near: Point::new(submenu.x0, submenu.y0 - margin),
            far: Point::new(submenu.x0, submenu.y1 + margin),
        }
    }

    /// Whether `p` is inside the triangle or on its boundary.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        point_in_triangle(p, self.apex, self.near, self.far)
    }

    /// The corners in `apex, near, far` order.
    pub const fn points(&self) -> [Point; 3] {
        [self.apex, self.near, self.far]
    }

    /// Axis-aligned bounds of the triangle.
    pub fn bounding_box(&self) -> Rect {
        Rect::from_points(self.apex, self.near).union_pt(self.far)
    }

    /// The triangle as a closed path, ready for an overlay renderer.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.apex);
        path.line_to(self.near);
        path.line_to(self.far);
        path.close_path();
        path
    }
}
