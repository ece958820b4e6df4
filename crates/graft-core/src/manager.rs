// SPDX-License-Identifier: Apache-2.0
//! The root component manager.

use crate::error::InteropError;
use crate::handle::ComponentHandle;
use crate::params::{decode_parameters, MAX_PARAMETERS};
use crate::render_port::RendererPort;
use graft_registry::AllowedComponents;
use serde_json::{Map, Value};
use tracing::debug;

/// Drives root component add/render/remove against the rendering engine on
/// behalf of an external scripting host.
///
/// Owns a snapshot of the sealed whitelist (taken by value at construction,
/// so no later configuration mutation can reach it) and the renderer port.
/// Stateless with respect to handles, since the renderer owns the
/// authoritative handle table; stateful only for the identifier lookup and
/// its own disposed latch.
#[derive(Debug)]
pub struct RootComponentManager<R> {
    allowed: AllowedComponents,
    renderer: R,
    disposed: bool,
}

impl<R> RootComponentManager<R> {
    /// Build a manager from a sealed whitelist and the renderer port.
    pub fn new(allowed: AllowedComponents, renderer: R) -> Self {
        Self {
            allowed,
            renderer,
            disposed: false,
        }
    }

    /// The whitelist snapshot this manager enforces.
    pub fn allowed(&self) -> &AllowedComponents {
        &self.allowed
    }

    /// Read access to the renderer port.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// One-way latch: after this, every boundary operation fails with
    /// [`InteropError::ManagerDisposed`]. Idempotent.
    pub fn dispose(&mut self) {
        if !self.disposed {
            self.disposed = true;
            debug!("root component manager disposed");
        }
    }

    fn ensure_live(&self) -> Result<(), InteropError> {
        if self.disposed {
            return Err(InteropError::ManagerDisposed);
        }
        Ok(())
    }
}

impl<R: RendererPort> RootComponentManager<R> {
    /// Instantiate the component registered under `component_identifier` at
    /// `mount_target`, returning the renderer's handle unchanged.
    ///
    /// Fails with [`InteropError::UnknownComponentIdentifier`] without
    /// touching the renderer when the identifier is not whitelisted.
    pub fn add_root_component(
        &mut self,
        component_identifier: &str,
        mount_target: &str,
    ) -> Result<ComponentHandle, InteropError> {
        self.ensure_live()?;
        let Some(component_type) = self.allowed.get(component_identifier) else {
            return Err(InteropError::UnknownComponentIdentifier {
                identifier: component_identifier.to_owned(),
            });
        };
        let handle = self.renderer.add_root_component(component_type, mount_target);
        debug!(
            identifier = component_identifier,
            handle = handle.value(),
            "added root component"
        );
        Ok(handle)
    }

    /// Decode `parameters` and render the component identified by `handle`.
    ///
    /// `parameter_count` is the caller's claimed entry count and must lie in
    /// `0..=100`; the bound is checked before the payload is traversed so
    /// the worst-case decode cost stays fixed no matter what the caller
    /// claims. Entries whose wire kind is not integer/string/boolean are
    /// skipped, not errors.
    pub async fn render_root_component(
        &mut self,
        handle: ComponentHandle,
        parameter_count: i32,
        parameters: &Map<String, Value>,
    ) -> Result<(), InteropError> {
        self.ensure_live()?;
        if !(0..=MAX_PARAMETERS).contains(&parameter_count) {
            return Err(InteropError::ParameterCountOutOfRange {
                count: parameter_count,
            });
        }
        let capacity = usize::try_from(parameter_count).unwrap_or_default();
        let view = decode_parameters(parameters, capacity);
        debug!(
            handle = handle.value(),
            decoded = view.len(),
            claimed = parameter_count,
            "rendering root component"
        );
        self.renderer.render_root_component(handle, view).await?;
        Ok(())
    }

    /// Tear down the component identified by `handle`.
    ///
    /// A stateless forward: the renderer owns per-handle liveness, so there
    /// is no local bookkeeping to undo.
    pub fn remove_root_component(&mut self, handle: ComponentHandle) -> Result<(), InteropError> {
        self.ensure_live()?;
        self.renderer.remove_root_component(handle);
        debug!(handle = handle.value(), "removed root component");
        Ok(())
    }
}
