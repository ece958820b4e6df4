// SPDX-License-Identifier: Apache-2.0
//! Opaque handles identifying live root component instances.

use serde::{Deserialize, Serialize};

/// Opaque, non-negative handle for a live root component instance.
///
/// Allocated by the rendering engine when a component is added and carried
/// across the boundary as a small integer. The handle is only meaningful to
/// the renderer; this layer never inspects or reuses it, and once the
/// component is removed the renderer may hand the same value out again.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentHandle(pub u32);

impl ComponentHandle {
    /// Raw integer value as it appears on the wire.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ComponentHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
