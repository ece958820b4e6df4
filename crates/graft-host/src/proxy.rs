// SPDX-License-Identifier: Apache-2.0
//! Per-instance external proxy for a mounted root component.

use crate::{HostError, HostSession};
use graft_core::ComponentHandle;
use serde_json::{Map, Value};
use std::sync::Arc;

/// External-facing `rootComponents` surface for one host session.
///
/// The `add` entry point external callers see; cheap to clone and hand out.
#[derive(Clone)]
pub struct RootComponents {
    session: Arc<HostSession>,
}

impl RootComponents {
    /// Build the surface for `session`.
    pub fn new(session: Arc<HostSession>) -> Self {
        Self { session }
    }

    /// Instantiate the component registered under `component_identifier` at
    /// the location described by `mount_target`, wrapping the returned
    /// handle in a [`RootComponentProxy`].
    ///
    /// Fails with [`HostError::ManagerNotEnabled`] when no manager has been
    /// published for the session.
    pub async fn add(
        &self,
        mount_target: &str,
        component_identifier: &str,
    ) -> Result<RootComponentProxy, HostError> {
        let manager = self.session.required_manager()?;
        let handle = manager
            .lock()
            .await
            .add_root_component(component_identifier, mount_target)?;
        Ok(RootComponentProxy::new(Arc::clone(&self.session), handle))
    }
}

/// External-facing handle object for one mounted root component.
///
/// Wraps the handle returned by `add` and forwards `set_parameters` /
/// `dispose` to whichever manager the session currently publishes. The
/// manager tracks no per-handle liveness, so this local handle guard is the
/// only defense against use-after-dispose and double-free: the proxy clears
/// its handle on successful dispose and refuses further parameter calls
/// locally, without reaching the manager.
pub struct RootComponentProxy {
    session: Arc<HostSession>,
    handle: Option<ComponentHandle>,
}

impl std::fmt::Debug for RootComponentProxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RootComponentProxy")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

impl RootComponentProxy {
    pub(crate) fn new(session: Arc<HostSession>, handle: ComponentHandle) -> Self {
        Self {
            session,
            handle: Some(handle),
        }
    }

    /// The wrapped handle, until `dispose` clears it.
    pub fn handle(&self) -> Option<ComponentHandle> {
        self.handle
    }

    /// Apply a flat key/value parameter object to this component and
    /// render.
    ///
    /// The claimed parameter count sent across the boundary is the payload's
    /// own entry count; payloads beyond the manager's cap are rejected there
    /// before any decode work. Fails with [`HostError::DisposedProxy`] after
    /// [`dispose`](Self::dispose), issuing no manager call.
    pub async fn set_parameters(
        &mut self,
        parameters: &Map<String, Value>,
    ) -> Result<(), HostError> {
        let handle = self.handle.ok_or(HostError::DisposedProxy)?;
        let manager = self.session.required_manager()?;
        let parameter_count = i32::try_from(parameters.len()).unwrap_or(i32::MAX);
        manager
            .lock()
            .await
            .render_root_component(handle, parameter_count, parameters)
            .await?;
        Ok(())
    }

    /// Tear down this component.
    ///
    /// Forwards the removal, then clears the local handle so a repeated
    /// `dispose` is a local no-op (no second collaborator call). The handle
    /// is kept when removal fails, leaving the retry decision to the
    /// external host.
    pub async fn dispose(&mut self) -> Result<(), HostError> {
        if let Some(handle) = self.handle {
            let manager = self.session.required_manager()?;
            manager.lock().await.remove_root_component(handle)?;
            self.handle = None;
        }
        Ok(())
    }
}
