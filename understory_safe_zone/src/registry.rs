// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller registry: every safe-zone controller on the page, in
//! registration order.
//!
//! Controllers are never removed. Closing one only returns it to
//! [`ZoneState::Closed`](crate::controller::ZoneState::Closed), so ids stay
//! valid for the registry's lifetime.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;

use crate::controller::SafeZoneController;
use crate::host::Layout;
use crate::types::ControllerId;

/// Insertion-ordered collection of [`SafeZoneController`]s.
#[derive(Clone, Debug)]
pub struct Registry<E> {
    controllers: Vec<SafeZoneController<E>>,
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self {
            controllers: Vec::new(),
        }
    }
}

impl<E: Copy + Eq + Debug> Registry<E> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a controller and return its id.
    pub fn register(&mut self, controller: SafeZoneController<E>) -> ControllerId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ControllerId uses 32-bit indices by design."
        )]
        let id = ControllerId::new(self.controllers.len() as u32);
        self.controllers.push(controller);
        id
    }

    /// Number of registered controllers.
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    /// True if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Controller for `id`.
    pub fn get(&self, id: ControllerId) -> Option<&SafeZoneController<E>> {
        self.controllers.get(id.idx())
    }

    /// Mutable controller for `id`.
    pub fn get_mut(&mut self, id: ControllerId) -> Option<&mut SafeZoneController<E>> {
        self.controllers.get_mut(id.idx())
    }

    /// Iterate controllers with their ids, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (ControllerId, &SafeZoneController<E>)> + '_ {
        self.controllers.iter().enumerate().map(|(i, c)| {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Registration caps ids at u32."
            )]
            let id = ControllerId::new(i as u32);
            (id, c)
        })
    }

    /// Ids of all controllers, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = ControllerId> + '_ {
        self.iter().map(|(id, _)| id)
    }

    /// Whether some controller other than `excluding` protects `p`.
    ///
    /// Submenu bounds are measured through `layout` at call time. A controller
    /// whose submenu has vanished from layout only protects via its triangle.
    pub fn is_protected_by_other<L>(&self, excluding: ControllerId, layout: &L, p: Point) -> bool
    where
        L: Layout<Element = E> + ?Sized,
    {
        self.iter().any(|(id, c)| {
            if id == excluding || !c.is_open() {
                return false;
            }
            match layout.bounds(c.submenu()) {
                Some(submenu) => c.is_protecting_point(submenu, p),
                None => c.triangle().is_some_and(|t| t.contains(p)),
            }
        })
    }

    /// Whether any controller is in [`ZoneState::Frozen`](crate::controller::ZoneState::Frozen).
    pub fn any_frozen(&self) -> bool {
        self.controllers.iter().any(SafeZoneController::is_frozen)
    }
}
