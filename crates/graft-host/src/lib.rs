// SPDX-License-Identifier: Apache-2.0
//! Host-session glue and the external proxy surface for graft root
//! components.
//!
//! A [`HostSession`] stands in for the external runtime context (the
//! scripting host's session). It owns at most one published
//! [`RootComponentInterop`], passed in explicitly instead of living in a
//! process-wide "current manager" global. Publication hands back a
//! [`ManagerRegistration`] token; revoking the token is the only way to
//! unpublish, and the token is not cloneable, so revocation happens at most
//! once.
//!
//! External callers go through [`RootComponents::add`], which wraps the
//! returned handle in a [`RootComponentProxy`].

use graft_core::{RendererPort, RootComponentInterop, RootComponentManager};
use std::sync::{Arc, Mutex as StdMutex};
use thiserror::Error;
use tokio::sync::Mutex;

mod proxy;

pub use proxy::{RootComponentProxy, RootComponents};

/// Shared reference to a published boundary manager, type-erased the way
/// the external host holds it.
pub type SharedManager = Arc<Mutex<dyn RootComponentInterop>>;

/// Error type for the host-facing surface.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    /// A manager is already published for this session. Only one manager
    /// may be active per host session; hitting this is a configuration
    /// error, fatal to the caller, never swallowed.
    #[error("dynamic root components have already been enabled for this host session")]
    AlreadyInitialized,

    /// No manager has been published yet (or it has been revoked).
    #[error("dynamic root components have not been enabled in this host session")]
    ManagerNotEnabled,

    /// The proxy was used after its `dispose` call. Caught locally; the
    /// manager is never reached.
    #[error("root component proxy used after dispose")]
    DisposedProxy,

    /// A boundary operation on the manager failed.
    #[error(transparent)]
    Interop(#[from] graft_core::InteropError),
}

/// Opaque token proving a manager publication.
///
/// Returned by [`HostSession::set_manager`] and consumed by
/// [`HostSession::revoke_manager`]. The hosting context owns it for the
/// manager's lifetime. Not cloneable.
#[derive(Debug)]
#[must_use = "dropping the registration token makes the publication irrevocable"]
pub struct ManagerRegistration(());

/// The external runtime context for one scripting-host session.
///
/// Holds the single published manager slot. Proxies resolve the manager
/// through the session on every call, so revocation takes effect
/// immediately for all outstanding proxies.
#[derive(Default)]
pub struct HostSession {
    manager: StdMutex<Option<SharedManager>>,
}

impl HostSession {
    /// Create a session with no manager published.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish `manager` as *the* manager for this session.
    ///
    /// Fails with [`HostError::AlreadyInitialized`] when a manager is
    /// already published.
    pub fn set_manager(&self, manager: SharedManager) -> Result<ManagerRegistration, HostError> {
        let mut slot = self.lock_slot();
        if slot.is_some() {
            return Err(HostError::AlreadyInitialized);
        }
        *slot = Some(manager);
        Ok(ManagerRegistration(()))
    }

    /// Unpublish the manager, consuming the registration token.
    ///
    /// Outstanding proxies start failing with
    /// [`HostError::ManagerNotEnabled`] on their next call.
    pub fn revoke_manager(&self, registration: ManagerRegistration) {
        let ManagerRegistration(()) = registration;
        *self.lock_slot() = None;
    }

    /// Whether a manager is currently published.
    pub fn is_enabled(&self) -> bool {
        self.lock_slot().is_some()
    }

    pub(crate) fn required_manager(&self) -> Result<SharedManager, HostError> {
        self.lock_slot()
            .as_ref()
            .map(Arc::clone)
            .ok_or(HostError::ManagerNotEnabled)
    }

    fn lock_slot(&self) -> std::sync::MutexGuard<'_, Option<SharedManager>> {
        // The slot holds no invariant that a panicking holder could break.
        match self.manager.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Initialize dynamic root components for `session`.
///
/// Publishes `manager` only when its whitelist is non-empty; with nothing
/// registered there is nothing the external host could instantiate, so no
/// publication happens and `Ok(None)` is returned. A second publication
/// into the same session surfaces [`HostError::AlreadyInitialized`].
pub async fn enable_root_components<R>(
    session: &HostSession,
    manager: Arc<Mutex<RootComponentManager<R>>>,
) -> Result<Option<ManagerRegistration>, HostError>
where
    R: RendererPort + 'static,
{
    if manager.lock().await.allowed().is_empty() {
        return Ok(None);
    }
    let shared: SharedManager = manager;
    let registration = session.set_manager(shared)?;
    Ok(Some(registration))
}
