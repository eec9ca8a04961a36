// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger hover: derive enter/leave transitions from raw pointer positions.
//!
//! Hosts with native enter events (DOM `mouseenter`, toolkit hover callbacks)
//! can call [`SafeMenus::trigger_enter`](crate::SafeMenus::trigger_enter)
//! directly. Hosts that only deliver coordinates route moves through
//! [`SafeMenus::pointer_move`](crate::SafeMenus::pointer_move), which hit-tests
//! the triggers and feeds the result to a [`HoverState`].
//!
//! ## Minimal example
//!
//! ```
//! use understory_safe_zone::hover::{HoverEvent, HoverState};
//! let mut h: HoverState<u32> = HoverState::new();
//! assert_eq!(h.update(Some(1)), vec![HoverEvent::Enter(1)]);
//! assert!(h.update(Some(1)).is_empty());
//! assert_eq!(h.update(Some(2)), vec![HoverEvent::Leave(1), HoverEvent::Enter(2)]);
//! assert_eq!(h.update(None), vec![HoverEvent::Leave(2)]);
//! ```

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;

use crate::geometry::rect_contains;
use crate::host::Layout;
use crate::registry::Registry;
use crate::types::ControllerId;

/// Tracks the currently hovered target and reports changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState<K: Copy + Eq> {
    current: Option<K>,
}

/// A hover transition event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// Pointer enters the given target.
    Enter(K),
    /// Pointer leaves the given target.
    Leave(K),
}

impl<K: Copy + Eq> HoverState<K> {
    /// Create an empty hover state.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// The hovered target, if any.
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// Move hover to `target`. Emits the leave for the old target before the
    /// enter for the new one; nothing when unchanged.
    pub fn update(&mut self, target: Option<K>) -> Vec<HoverEvent<K>> {
        if self.current == target {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(2);
        if let Some(old) = self.current {
            out.push(HoverEvent::Leave(old));
        }
        if let Some(new) = target {
            out.push(HoverEvent::Enter(new));
        }
        self.current = target;
        out
    }
}

/// The controller whose trigger contains `p`.
///
/// Overlapping triggers resolve to the last registered one. Triggers without
/// layout are skipped.
pub fn trigger_under<E, L>(registry: &Registry<E>, layout: &L, p: Point) -> Option<ControllerId>
where
    E: Copy + Eq + Debug,
    L: Layout<Element = E> + ?Sized,
{
    registry
        .iter()
        .filter(|(_, c)| layout.bounds(c.trigger()).is_some_and(|r| rect_contains(r, p)))
        .map(|(id, _)| id)
        .last()
}
