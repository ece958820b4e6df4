// SPDX-License-Identifier: Apache-2.0
//! Error taxonomy for the boundary operations.

use crate::render_port::RenderError;
use thiserror::Error;

/// Failure of a boundary operation on the root component manager.
///
/// Nothing here is recovered locally; every variant propagates to the
/// immediate caller, and retry policy belongs to the external host.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InteropError {
    /// The identifier is not in the sealed whitelist. This is the security
    /// boundary: only explicitly registered types may be instantiated from
    /// outside, so the lookup miss never reaches the renderer.
    #[error("no registered root component with identifier '{identifier}'")]
    UnknownComponentIdentifier {
        /// The identifier the caller supplied.
        identifier: String,
    },

    /// The caller-claimed parameter count is outside `0..=100`. Raised
    /// before any payload traversal.
    #[error("parameter count {count} must be between 0 and 100")]
    ParameterCountOutOfRange {
        /// The claimed count, as received on the wire.
        count: i32,
    },

    /// The manager has been disposed; the hosting context is torn down and
    /// calls fail rather than silently no-op.
    #[error("root component manager has been disposed")]
    ManagerDisposed,

    /// The rendering engine reported a failure for a dispatched render.
    #[error(transparent)]
    Renderer(#[from] RenderError),
}
