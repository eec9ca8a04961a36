// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: controller and frame handles, presentation markers, configuration.

/// Identifier of a safe-zone controller within a [`Registry`](crate::Registry).
///
/// Controllers are never removed, so an id stays valid for the lifetime of the
/// registry that issued it. Ids from a different registry are not detected;
/// lookups with an out-of-range id return `None`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ControllerId(pub(crate) u32);

impl ControllerId {
    pub(crate) const fn new(idx: u32) -> Self {
        Self(idx)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Registration order of this controller, starting at zero.
    pub const fn index(self) -> u32 {
        self.0
    }
}

/// Handle for a pending frame callback, issued by a
/// [`FrameScheduler`](crate::host::FrameScheduler).
///
/// Hosts pick the numbering; the only requirement is that a handle is not
/// reused while an earlier request with the same value is still pending.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct FrameHandle(pub u64);

bitflags::bitflags! {
    /// Presentation markers the core asks the host to toggle on elements.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Marker: u8 {
        /// The trigger's submenu is open.
        const OPEN             = 0b0000_0001;
        /// The submenu is revealed.
        const VISIBLE          = 0b0000_0010;
        /// Some controller is holding its frozen triangle (cosmetic, set on containers).
        const SAFE_ZONE_ACTIVE = 0b0000_0100;
    }
}

/// Tuning for [`SafeMenus`](crate::SafeMenus).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SafeZoneConfig {
    /// How far the triangle's corners overshoot the submenu's top and bottom.
    pub margin: f64,
    /// Whether the protective triangle is drawn at all.
    pub triangle_visible: bool,
}

impl SafeZoneConfig {
    /// Default corner overshoot, in viewport units.
    pub const DEFAULT_MARGIN: f64 = 12.0;
}

impl Default for SafeZoneConfig {
    fn default() -> Self {
        Self {
            margin: Self::DEFAULT_MARGIN,
            triangle_visible: true,
        }
    }
}
