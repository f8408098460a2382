// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observed element identity.

use core::fmt;

/// A handle to an element in a [`RevealController`](super::RevealController).
///
/// The index is the element's position in the sequence passed to
/// [`initialize`](super::RevealController::initialize). The reveal set never
/// changes after initialization, so handles never go stale.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub(crate) u32);

impl ElementId {
    /// Returns the slot index (initialization order).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Creates a handle from a raw slot index.
    ///
    /// Intended for decoding recorded traces; a handle that does not belong to
    /// a controller is simply ignored by it.
    #[inline]
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        Self(index)
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId({})", self.0)
    }
}
