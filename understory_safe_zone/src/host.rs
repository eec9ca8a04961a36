// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ports the core calls into: layout measurement, presentation toggles, and
//! frame scheduling.
//!
//! ## Overview
//!
//! The safe-zone logic never touches a widget tree or a window directly.
//! A host implements these traits over its own element keys (DOM nodes, box
//! tree ids, widget handles) and passes itself to [`SafeMenus`](crate::SafeMenus).
//!
//! - [`Layout`] answers "where is this element right now". It is called every
//!   frame and must not cache across frames, since scrolling or resizing can
//!   move elements between polls.
//! - [`Presentation`] receives marker toggles and the submenu's vertical offset.
//! - [`FrameScheduler`] requests a callback at the next display refresh. When it
//!   fires, the host calls [`SafeMenus::on_frame`](crate::SafeMenus::on_frame)
//!   with the controller id and handle it was given.
//!
//! [`MenuHost`] is implemented for any type that provides all three.

use core::fmt::Debug;

use kurbo::Rect;

use crate::types::{ControllerId, FrameHandle, Marker};

/// Current layout of host elements.
pub trait Layout {
    /// Host key for a UI element.
    type Element: Copy + Eq + Debug;

    /// Current bounds of `element` in viewport coordinates, or `None` if it is
    /// not part of the page.
    fn bounds(&self, element: Self::Element) -> Option<Rect>;

    /// Visible label inside `trigger`, if it has a distinct one.
    ///
    /// The triangle's apex sits on the label's trailing edge. Without a label,
    /// the trigger's own bounds are used.
    fn label_of(&self, trigger: Self::Element) -> Option<Self::Element> {
        let _ = trigger;
        None
    }

    /// Menu panel containing `submenu`; used as the offset reference and for
    /// [`Marker::SAFE_ZONE_ACTIVE`].
    fn container_of(&self, submenu: Self::Element) -> Option<Self::Element> {
        let _ = submenu;
        None
    }
}

/// Presentation side effects on host elements.
pub trait Presentation<E> {
    /// Add (`on = true`) or remove a marker on `element`.
    fn set_marker(&mut self, element: E, marker: Marker, on: bool);

    /// Position `submenu` vertically, relative to its container's top.
    fn set_offset_top(&mut self, submenu: E, offset: f64);
}

/// Host frame-callback primitive.
pub trait FrameScheduler {
    /// Request a callback for `target` at the next frame.
    fn schedule(&mut self, target: ControllerId) -> FrameHandle;

    /// Withdraw a pending request. Unknown or already-fired handles are ignored.
    fn cancel(&mut self, handle: FrameHandle);
}

/// Everything [`SafeMenus`](crate::SafeMenus) needs from its host.
pub trait MenuHost: Layout + Presentation<<Self as Layout>::Element> + FrameScheduler {}

impl<T> MenuHost for T where T: Layout + Presentation<<T as Layout>::Element> + FrameScheduler {}
