// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Safe-zone controller: the per-(trigger, submenu) state machine.
//!
//! ## States
//!
//! - [`ZoneState::Closed`]: submenu hidden; no triangle; no frame pending.
//! - [`ZoneState::OnItem`]: pointer on the trigger. Every tick rebuilds the
//!   triangle from the label's trailing edge to the submenu's near edge.
//! - [`ZoneState::Frozen`]: pointer left the trigger toward the submenu. The
//!   last triangle is held fixed and the submenu stays open while the pointer
//!   remains inside it.
//! - [`ZoneState::OnSub`]: pointer inside the submenu.
//!
//! ## Tick order
//!
//! Each tick draws first, then tests the submenu before the trigger when
//! leaving `OnItem` or `Frozen`, and the trigger before the submenu when in
//! `OnSub`. Overlapping rects therefore resolve toward the submenu except when
//! the pointer comes back to the trigger from inside it.
//!
//! [`SafeZoneController::advance`] is pure with respect to the host: it reads a
//! [`Sample`] and returns a [`Step`]. Side effects (drawing, rescheduling,
//! closing) are applied by [`SafeMenus`](crate::SafeMenus).

use core::fmt::Debug;

use kurbo::{Point, Rect};

use crate::geometry::{Triangle, rect_contains};
use crate::types::FrameHandle;

/// Discrete state of a [`SafeZoneController`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ZoneState {
    /// Submenu hidden.
    #[default]
    Closed,
    /// Pointer on the trigger.
    OnItem,
    /// Pointer between trigger and submenu, inside the held triangle.
    Frozen,
    /// Pointer inside the submenu.
    OnSub,
}

/// Inputs for one poll tick, measured fresh by the caller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sample {
    /// Current pointer position.
    pub pointer: Point,
    /// Trigger bounds.
    pub trigger: Rect,
    /// Submenu bounds.
    pub submenu: Rect,
    /// Triangle apex: label trailing edge at the trigger's vertical midpoint.
    pub apex: Point,
}

impl Sample {
    /// Derive the apex from the trigger rect and an optional label rect.
    pub fn new(pointer: Point, trigger: Rect, submenu: Rect, label: Option<Rect>) -> Self {
        let label = label.unwrap_or(trigger);
        Self {
            pointer,
            trigger,
            submenu,
            apex: Point::new(label.x1, (trigger.y0 + trigger.y1) / 2.0),
        }
    }
}

/// What the caller should do after a tick.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Flow {
    /// Keep polling: schedule another frame.
    Continue,
    /// Close the submenu and stop polling.
    Close,
}

/// Result of [`SafeZoneController::advance`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step {
    /// Triangle to draw this frame, if any.
    pub draw: Option<Triangle>,
    /// Whether polling continues.
    pub flow: Flow,
}

/// State machine for one trigger and its submenu.
///
/// Element keys are borrowed by value: the host owns the elements and the
/// controller only names them.
#[derive(Clone, Debug)]
pub struct SafeZoneController<E> {
    trigger: E,
    submenu: E,
    container: Option<E>,
    state: ZoneState,
    triangle: Option<Triangle>,
    pending: Option<FrameHandle>,
}

impl<E: Copy + Eq + Debug> SafeZoneController<E> {
    /// Create a closed controller.
    ///
    /// `container` is the menu panel holding the submenu, if the host has one.
    pub fn new(trigger: E, submenu: E, container: Option<E>) -> Self {
        Self {
            trigger,
            submenu,
            container,
            state: ZoneState::Closed,
            triangle: None,
            pending: None,
        }
    }

    /// Trigger element.
    pub fn trigger(&self) -> E {
        self.trigger
    }

    /// Submenu element.
    pub fn submenu(&self) -> E {
        self.submenu
    }

    /// Container of the submenu, if known.
    pub fn container(&self) -> Option<E> {
        self.container
    }

    /// Current state.
    pub fn state(&self) -> ZoneState {
        self.state
    }

    /// True in any state other than [`ZoneState::Closed`].
    pub fn is_open(&self) -> bool {
        self.state != ZoneState::Closed
    }

    /// True while holding a frozen triangle.
    pub fn is_frozen(&self) -> bool {
        self.state == ZoneState::Frozen
    }

    /// The protective triangle, present once the controller has been polled on
    /// its trigger since the last close.
    pub fn triangle(&self) -> Option<Triangle> {
        self.triangle
    }

    /// Handle of the frame this controller is waiting for.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Whether `p` is shielded by this controller: it is open and `p` lies in
    /// `submenu` (its current bounds) or in its triangle.
    pub fn is_protecting_point(&self, submenu: Rect, p: Point) -> bool {
        if !self.is_open() {
            return false;
        }
        rect_contains(submenu, p) || self.triangle.is_some_and(|t| t.contains(p))
    }

    /// Advance one tick.
    ///
    /// Does nothing in [`ZoneState::Closed`] and asks to stop polling.
    pub fn advance(&mut self, sample: &Sample, margin: f64) -> Step {
        let p = sample.pointer;
        let in_sub = rect_contains(sample.submenu, p);
        let in_trigger = rect_contains(sample.trigger, p);

        let (next, draw) = match self.state {
            ZoneState::Closed => {
                return Step {
                    draw: None,
                    flow: Flow::Close,
                };
            }
            ZoneState::OnItem => {
                let tri = Triangle::spanning(sample.apex, sample.submenu, margin);
                self.triangle = Some(tri);
                let next = if in_sub {
                    ZoneState::OnSub
                } else if !in_trigger {
                    ZoneState::Frozen
                } else {
                    ZoneState::OnItem
                };
                (next, Some(tri))
            }
            ZoneState::Frozen => {
                let next = if in_sub {
                    ZoneState::OnSub
                } else if in_trigger {
                    ZoneState::OnItem
                } else if self.triangle.is_some_and(|t| t.contains(p)) {
                    ZoneState::Frozen
                } else {
                    ZoneState::Closed
                };
                (next, self.triangle)
            }
            ZoneState::OnSub => {
                let next = if in_trigger {
                    ZoneState::OnItem
                } else if !in_sub {
                    ZoneState::Closed
                } else {
                    ZoneState::OnSub
                };
                (next, self.triangle)
            }
        };

        if next == ZoneState::Closed {
            // The caller runs the full close; leave state for it to observe.
            return Step {
                draw: None,
                flow: Flow::Close,
            };
        }
        if next != self.state {
            tracing::debug!(
                trigger = ?self.trigger,
                from = ?self.state,
                to = ?next,
                x = p.x,
                y = p.y,
                "safe zone transition"
            );
            self.state = next;
        }
        Step {
            draw,
            flow: Flow::Continue,
        }
    }

    /// Enter [`ZoneState::OnItem`] without any host side effects.
    ///
    /// [`SafeMenus::trigger_enter`](crate::SafeMenus::trigger_enter) is the full
    /// activation (gating, sibling close, markers, scheduling). Use this only
    /// when driving [`advance`](Self::advance) directly.
    pub fn activate(&mut self) {
        self.state = ZoneState::OnItem;
    }

    pub(crate) fn set_pending(&mut self, handle: Option<FrameHandle>) {
        self.pending = handle;
    }

    /// Accept `handle` if it is the one this controller is waiting for.
    pub(crate) fn take_pending_if(&mut self, handle: FrameHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Return to [`ZoneState::Closed`], dropping the triangle. Returns the
    /// pending frame, which the caller must cancel.
    pub(crate) fn reset(&mut self) -> Option<FrameHandle> {
        if self.state != ZoneState::Closed {
            tracing::debug!(trigger = ?self.trigger, from = ?self.state, "safe zone closed");
        }
        self.state = ZoneState::Closed;
        self.triangle = None;
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIGGER: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    const SUBMENU: Rect = Rect::new(150.0, 0.0, 300.0, 50.0);
    const MARGIN: f64 = 12.0;

    fn sample(x: f64, y: f64) -> Sample {
        Sample::new(Point::new(x, y), TRIGGER, SUBMENU, None)
    }

    fn on_item() -> SafeZoneController<u32> {
        let mut c = SafeZoneController::new(1, 2, None);
        c.activate();
        c
    }

    #[test]
    fn apex_uses_label_trailing_edge_at_trigger_midpoint() {
        let label = Rect::new(8.0, 40.0, 64.0, 60.0);
        let s = Sample::new(Point::ZERO, TRIGGER, SUBMENU, Some(label));
        assert_eq!(s.apex, Point::new(64.0, 50.0));
        assert_eq!(sample(0.0, 0.0).apex, Point::new(100.0, 50.0));
    }

    #[test]
    fn on_item_rebuilds_triangle_every_tick() {
        let mut c = on_item();
        let step = c.advance(&sample(50.0, 50.0), MARGIN);
        assert_eq!(step.flow, Flow::Continue);
        assert_eq!(c.state(), ZoneState::OnItem);
        let tri = c.triangle().unwrap();
        assert_eq!(tri.apex, Point::new(100.0, 50.0));
        assert_eq!(tri.near, Point::new(150.0, -12.0));
        assert_eq!(tri.far, Point::new(150.0, 62.0));
        assert_eq!(step.draw, Some(tri));

        // Submenu moved (e.g. scrolled); next tick follows it.
        let moved = Sample::new(
            Point::new(50.0, 50.0),
            TRIGGER,
            Rect::new(160.0, 10.0, 300.0, 60.0),
            None,
        );
        let _ = c.advance(&moved, MARGIN);
        assert_eq!(c.triangle().unwrap().near, Point::new(160.0, -2.0));
    }

    #[test]
    fn leaving_trigger_freezes() {
        let mut c = on_item();
        let _ = c.advance(&sample(50.0, 50.0), MARGIN);
        let step = c.advance(&sample(120.0, 50.0), MARGIN);
        assert_eq!(step.flow, Flow::Continue);
        assert!(c.is_frozen());
        assert!(c.is_open());
    }

    #[test]
    fn on_item_prefers_submenu_over_trigger() {
        let mut c = on_item();
        let _ = c.advance(&sample(200.0, 20.0), MARGIN);
        assert_eq!(c.state(), ZoneState::OnSub);
    }

    #[test]
    fn frozen_holds_snapshot_inside_triangle() {
        let mut c = on_item();
        let _ = c.advance(&sample(50.0, 50.0), MARGIN);
        let _ = c.advance(&sample(110.0, 50.0), MARGIN);
        let frozen = c.triangle();
        // Submenu geometry changes do not move a frozen triangle.
        let s = Sample::new(
            Point::new(130.0, 40.0),
            TRIGGER,
            Rect::new(400.0, 0.0, 500.0, 50.0),
            None,
        );
        let step = c.advance(&s, MARGIN);
        assert_eq!(c.state(), ZoneState::Frozen);
        assert_eq!(c.triangle(), frozen);
        assert_eq!(step.draw, frozen);
    }

    #[test]
    fn frozen_exits() {
        let frozen = || {
            let mut c = on_item();
            let _ = c.advance(&sample(50.0, 50.0), MARGIN);
            let _ = c.advance(&sample(110.0, 50.0), MARGIN);
            assert!(c.is_frozen());
            c
        };

        let mut c = frozen();
        let _ = c.advance(&sample(200.0, 20.0), MARGIN);
        assert_eq!(c.state(), ZoneState::OnSub);

        let mut c = frozen();
        let _ = c.advance(&sample(90.0, 50.0), MARGIN);
        assert_eq!(c.state(), ZoneState::OnItem);

        let mut c = frozen();
        let step = c.advance(&sample(120.0, 90.0), MARGIN);
        assert_eq!(step.flow, Flow::Close);
        assert_eq!(step.draw, None);
    }

    #[test]
    fn on_sub_exits() {
        let on_sub = || {
            let mut c = on_item();
            let _ = c.advance(&sample(200.0, 20.0), MARGIN);
            c
        };

        let mut c = on_sub();
        let step = c.advance(&sample(250.0, 40.0), MARGIN);
        assert_eq!(c.state(), ZoneState::OnSub);
        assert_eq!(step.draw, c.triangle());

        let mut c = on_sub();
        let _ = c.advance(&sample(10.0, 10.0), MARGIN);
        assert_eq!(c.state(), ZoneState::OnItem);

        // Inside the triangle is not enough once on the submenu.
        let mut c = on_sub();
        let step = c.advance(&sample(120.0, 50.0), MARGIN);
        assert_eq!(step.flow, Flow::Close);
    }

    #[test]
    fn closed_controller_stops_polling() {
        let mut c: SafeZoneController<u32> = SafeZoneController::new(1, 2, None);
        let step = c.advance(&sample(50.0, 50.0), MARGIN);
        assert_eq!(step.flow, Flow::Close);
        assert_eq!(c.triangle(), None);
    }

    #[test]
    fn protection_covers_submenu_and_triangle_only_while_open() {
        let mut c = on_item();
        assert!(c.is_protecting_point(SUBMENU, Point::new(200.0, 20.0)));
        assert!(!c.is_protecting_point(SUBMENU, Point::new(120.0, 50.0)), "no triangle yet");
        let _ = c.advance(&sample(50.0, 50.0), MARGIN);
        assert!(c.is_protecting_point(SUBMENU, Point::new(120.0, 50.0)));

        let _ = c.reset();
        assert!(!c.is_protecting_point(SUBMENU, Point::new(200.0, 20.0)));
    }

    #[test]
    fn reset_is_idempotent_and_hands_back_pending() {
        let mut c = on_item();
        c.set_pending(Some(FrameHandle(7)));
        let _ = c.advance(&sample(50.0, 50.0), MARGIN);
        assert_eq!(c.reset(), Some(FrameHandle(7)));
        assert_eq!(c.reset(), None);
        assert_eq!(c.state(), ZoneState::Closed);
        assert_eq!(c.triangle(), None);
    }

    #[test]
    fn stale_frames_are_rejected() {
        let mut c = on_item();
        c.set_pending(Some(FrameHandle(2)));
        assert!(!c.take_pending_if(FrameHandle(1)));
        assert!(c.take_pending_if(FrameHandle(2)));
        assert!(!c.take_pending_if(FrameHandle(2)));
    }
}
