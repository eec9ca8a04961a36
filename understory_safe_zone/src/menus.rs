// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composing layer: owns the pointer tracker, registry and renderer, and
//! applies the side effects the state machine asks for.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;

use crate::controller::{Flow, Sample, SafeZoneController, ZoneState};
use crate::error::SetupError;
use crate::hover::{HoverEvent, HoverState, trigger_under};
use crate::host::{Layout, MenuHost};
use crate::pointer::PointerTracker;
use crate::registry::Registry;
use crate::render::TriangleRenderer;
use crate::types::{ControllerId, FrameHandle, Marker, SafeZoneConfig};

/// Safe-zone submenus for one page.
///
/// ## Usage
///
/// 1) Call [`SafeMenus::setup`] once per trigger/submenu pair.
/// 2) Forward pointer moves with [`SafeMenus::pointer_move`] (or
///    [`SafeMenus::set_pointer`] plus [`SafeMenus::trigger_enter`] if the host
///    has its own enter events).
/// 3) When a frame requested through [`FrameScheduler`](crate::host::FrameScheduler)
///    fires, call [`SafeMenus::on_frame`] with the id and handle.
/// 4) Paint [`SafeMenus::renderer`] if you want the safe zone visible.
#[derive(Clone, Debug)]
pub struct SafeMenus<E> {
    config: SafeZoneConfig,
    pointer: PointerTracker,
    registry: Registry<E>,
    renderer: TriangleRenderer,
    hover: HoverState<ControllerId>,
    zone_marked: Vec<E>,
}

impl<E: Copy + Eq + Debug> Default for SafeMenus<E> {
    fn default() -> Self {
        Self::new(SafeZoneConfig::default())
    }
}

impl<E: Copy + Eq + Debug> SafeMenus<E> {
    /// Create an empty page with the given configuration.
    pub fn new(config: SafeZoneConfig) -> Self {
        Self {
            config,
            pointer: PointerTracker::new(),
            registry: Registry::new(),
            renderer: TriangleRenderer::new(config.triangle_visible),
            hover: HoverState::new(),
            zone_marked: Vec::new(),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &SafeZoneConfig {
        &self.config
    }

    /// Last recorded pointer position.
    pub fn pointer(&self) -> Point {
        self.pointer.position()
    }

    /// All controllers.
    pub fn registry(&self) -> &Registry<E> {
        &self.registry
    }

    /// The safe-zone overlay.
    pub fn renderer(&self) -> &TriangleRenderer {
        &self.renderer
    }

    /// Controller for `id`.
    pub fn controller(&self, id: ControllerId) -> Option<&SafeZoneController<E>> {
        self.registry.get(id)
    }

    /// Register a trigger/submenu pair.
    ///
    /// Both elements must have layout now. The submenu's container, if the
    /// host reports one, is recorded for offsets and the zone marker.
    pub fn setup<L>(
        &mut self,
        layout: &L,
        trigger: E,
        submenu: E,
    ) -> Result<ControllerId, SetupError<E>>
    where
        L: Layout<Element = E> + ?Sized,
    {
        if layout.bounds(trigger).is_none() {
            tracing::warn!(?trigger, "safe zone setup: trigger missing");
            return Err(SetupError::MissingTrigger(trigger));
        }
        if layout.bounds(submenu).is_none() {
            tracing::warn!(?submenu, "safe zone setup: submenu missing");
            return Err(SetupError::MissingSubmenu(submenu));
        }
        let container = layout.container_of(submenu);
        let id = self
            .registry
            .register(SafeZoneController::new(trigger, submenu, container));
        tracing::debug!(?id, ?trigger, ?submenu, ?container, "safe zone registered");
        Ok(id)
    }

    /// Record a pointer move without hit-testing triggers.
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer.update(x, y);
    }

    /// Record a pointer move and activate a trigger the pointer just entered.
    pub fn pointer_move<H>(&mut self, host: &mut H, x: f64, y: f64)
    where
        H: MenuHost<Element = E> + ?Sized,
    {
        self.pointer.update(x, y);
        let hit = trigger_under(&self.registry, &*host, self.pointer.position());
        for event in self.hover.update(hit) {
            if let HoverEvent::Enter(id) = event {
                let _ = self.trigger_enter(host, id);
            }
        }
    }

    /// Pointer entered the trigger of `id`. Returns true if its submenu opened.
    ///
    /// Refused when the controller is already on its trigger, or when another
    /// controller protects the pointer (it is inside that controller's submenu
    /// or triangle). Otherwise every other controller is closed first.
    pub fn trigger_enter<H>(&mut self, host: &mut H, id: ControllerId) -> bool
    where
        H: MenuHost<Element = E> + ?Sized,
    {
        let Some(c) = self.registry.get(id) else {
            return false;
        };
        if c.state() == ZoneState::OnItem {
            return false;
        }
        let p = self.pointer.position();
        if self.registry.is_protected_by_other(id, &*host, p) {
            tracing::debug!(?id, x = p.x, y = p.y, "activation refused: pointer protected by another menu");
            return false;
        }

        let others: Vec<ControllerId> = self.registry.ids().filter(|&o| o != id).collect();
        for other in others {
            self.close_inner(host, other);
        }
        if self.registry.get(id).is_some_and(SafeZoneController::is_open) {
            self.close_inner(host, id);
        }

        self.open(host, id);
        if let Some(c) = self.registry.get_mut(id) {
            c.activate();
            if let Some(stale) = c.pending_frame() {
                host.cancel(stale);
            }
            c.set_pending(Some(host.schedule(id)));
        }
        tracing::debug!(?id, "submenu opened");
        self.sync_zone_marker(host);
        true
    }

    /// Run one poll tick for `id`.
    ///
    /// Frames whose handle is not the controller's pending one (canceled or
    /// superseded) are ignored.
    pub fn on_frame<H>(&mut self, host: &mut H, id: ControllerId, handle: FrameHandle)
    where
        H: MenuHost<Element = E> + ?Sized,
    {
        let Some(c) = self.registry.get_mut(id) else {
            return;
        };
        if !c.take_pending_if(handle) {
            tracing::trace!(?id, ?handle, "stale frame ignored");
            return;
        }

        let (trigger, submenu) = (c.trigger(), c.submenu());
        let (Some(trigger_rect), Some(submenu_rect)) = (host.bounds(trigger), host.bounds(submenu))
        else {
            tracing::warn!(?trigger, ?submenu, "menu element left the layout; closing");
            self.close(host, id);
            return;
        };
        let label = host.label_of(trigger).and_then(|l| host.bounds(l));
        let sample = Sample::new(self.pointer.position(), trigger_rect, submenu_rect, label);

        let step = c.advance(&sample, self.config.margin);
        match step.flow {
            Flow::Continue => {
                if let Some(tri) = step.draw {
                    self.renderer.show(tri);
                }
                c.set_pending(Some(host.schedule(id)));
            }
            Flow::Close => self.close_inner(host, id),
        }
        self.sync_zone_marker(host);
    }

    /// Close the submenu of `id`. Safe to call on a closed controller.
    pub fn close<H>(&mut self, host: &mut H, id: ControllerId)
    where
        H: MenuHost<Element = E> + ?Sized,
    {
        self.close_inner(host, id);
        self.sync_zone_marker(host);
    }

    /// Close every submenu.
    pub fn close_all<H>(&mut self, host: &mut H)
    where
        H: MenuHost<Element = E> + ?Sized,
    {
        let ids: Vec<ControllerId> = self.registry.ids().collect();
        for id in ids {
            self.close_inner(host, id);
        }
        self.sync_zone_marker(host);
    }

    /// State of `id`, or `None` for an unknown id.
    pub fn state(&self, id: ControllerId) -> Option<ZoneState> {
        self.registry.get(id).map(SafeZoneController::state)
    }

    /// Whether the submenu of `id` is open.
    pub fn is_open(&self, id: ControllerId) -> bool {
        self.registry.get(id).is_some_and(SafeZoneController::is_open)
    }

    /// Whether `id` is holding its frozen triangle.
    pub fn is_frozen(&self, id: ControllerId) -> bool {
        self.registry.get(id).is_some_and(SafeZoneController::is_frozen)
    }

    /// Whether `id` protects the point `(x, y)`.
    pub fn is_protecting_point<L>(&self, layout: &L, id: ControllerId, x: f64, y: f64) -> bool
    where
        L: Layout<Element = E> + ?Sized,
    {
        let Some(c) = self.registry.get(id) else {
            return false;
        };
        let p = Point::new(x, y);
        match layout.bounds(c.submenu()) {
            Some(submenu) => c.is_protecting_point(submenu, p),
            None => c.is_open() && c.triangle().is_some_and(|t| t.contains(p)),
        }
    }

    /// Whether any controller is frozen.
    pub fn any_frozen(&self) -> bool {
        self.registry.any_frozen()
    }

    /// Show or hide the safe-zone overlay. Hiding clears it immediately.
    pub fn set_triangle_visible(&mut self, visible: bool) {
        self.config.triangle_visible = visible;
        self.renderer.set_visible(visible);
    }

    fn open<H>(&mut self, host: &mut H, id: ControllerId)
    where
        H: MenuHost<Element = E> + ?Sized,
    {
        let Some(c) = self.registry.get(id) else {
            return;
        };
        let (trigger, submenu) = (c.trigger(), c.submenu());
        host.set_marker(trigger, Marker::OPEN, true);
        if let Some(container) = c.container()
            && let (Some(t), Some(m)) = (host.bounds(trigger), host.bounds(container))
        {
            host.set_offset_top(submenu, t.y0 - m.y0);
        }
        host.set_marker(submenu, Marker::VISIBLE, true);
    }

    fn close_inner<H>(&mut self, host: &mut H, id: ControllerId)
    where
        H: MenuHost<Element = E> + ?Sized,
    {
        let Some(c) = self.registry.get_mut(id) else {
            return;
        };
        let was_open = c.is_open();
        if let Some(pending) = c.reset() {
            host.cancel(pending);
        }
        host.set_marker(c.trigger(), Marker::OPEN, false);
        host.set_marker(c.submenu(), Marker::VISIBLE, false);
        // The overlay belongs to whichever controller is open.
        if was_open {
            self.renderer.clear();
        }
    }

    /// Keep [`Marker::SAFE_ZONE_ACTIVE`] on every container while any
    /// controller is frozen, including containers of pairs registered since.
    fn sync_zone_marker<H>(&mut self, host: &mut H)
    where
        H: MenuHost<Element = E> + ?Sized,
    {
        if self.registry.any_frozen() {
            for (_, c) in self.registry.iter() {
                if let Some(container) = c.container()
                    && !self.zone_marked.contains(&container)
                {
                    self.zone_marked.push(container);
                    host.set_marker(container, Marker::SAFE_ZONE_ACTIVE, true);
                }
            }
        } else {
            for container in self.zone_marked.drain(..) {
                host.set_marker(container, Marker::SAFE_ZONE_ACTIVE, false);
            }
        }
    }
}
