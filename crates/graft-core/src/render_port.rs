// SPDX-License-Identifier: Apache-2.0
//! Port trait for the rendering-engine collaborators.

use crate::handle::ComponentHandle;
use crate::params::ParameterView;
use graft_registry::ComponentType;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Completion returned by the renderer for an in-flight render pass.
///
/// The caller awaits it; this layer has no way to cancel a render once
/// dispatched, and never retries a failed one.
pub type RenderCompletion = Pin<Box<dyn Future<Output = Result<(), RenderError>> + Send>>;

/// Renderer-side failure surfaced through a [`RenderCompletion`].
///
/// Opaque to this layer: the message is whatever the rendering engine chose
/// to report. Propagated to the external caller unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("renderer error: {0}")]
pub struct RenderError(pub String);

/// Rendering-engine port.
///
/// The three collaborator operations the manager delegates to. Implementors
/// are the serialization point for mutations to the component tree; the
/// manager performs no additional locking around these calls.
pub trait RendererPort: Send {
    /// Insert a new root component instance of `component_type` at the
    /// location described by `mount_target`, returning its handle.
    fn add_root_component(
        &mut self,
        component_type: &ComponentType,
        mount_target: &str,
    ) -> ComponentHandle;

    /// Apply `parameters` to the component identified by `handle` and
    /// render. The returned completion resolves when the render pass has
    /// been applied.
    fn render_root_component(
        &mut self,
        handle: ComponentHandle,
        parameters: ParameterView,
    ) -> RenderCompletion;

    /// Tear down the component identified by `handle`. The renderer owns
    /// the authoritative handle table and may reuse the handle afterwards.
    fn remove_root_component(&mut self, handle: ComponentHandle);
}
