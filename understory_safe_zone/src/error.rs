// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Setup errors.

use core::fmt::Debug;

/// A trigger/submenu pair could not be wired up.
///
/// Returned by [`SafeMenus::setup`](crate::SafeMenus::setup) when an element has
/// no layout. Nothing is registered for a failed pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError<E: Debug> {
    /// The trigger element is not present in the layout.
    #[error("trigger element {0:?} is not present in the layout")]
    MissingTrigger(E),
    /// The submenu element is not present in the layout.
    #[error("submenu element {0:?} is not present in the layout")]
    MissingSubmenu(E),
}
