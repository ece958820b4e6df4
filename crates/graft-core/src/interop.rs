// SPDX-License-Identifier: Apache-2.0
//! Dyn-compatible boundary surface for a published manager.
//!
//! The host session stores the published manager as an opaque trait object,
//! the same way the original boundary holds an opaque object reference. The
//! method set and the wire method names below are a fixed contract with the
//! external host and must not change shape.

use crate::error::InteropError;
use crate::handle::ComponentHandle;
use crate::manager::RootComponentManager;
use crate::render_port::RendererPort;
use serde_json::{Map, Value};
use std::future::Future;
use std::pin::Pin;

/// Wire method name for adding a root component.
pub const METHOD_ADD_ROOT_COMPONENT: &str = "AddRootComponent";
/// Wire method name for rendering a root component with parameters.
pub const METHOD_RENDER_ROOT_COMPONENT: &str = "RenderRootComponentAsync";
/// Wire method name for removing a root component.
pub const METHOD_REMOVE_ROOT_COMPONENT: &str = "RemoveRootComponent";

/// Boxed completion for the async boundary render.
pub type InteropFuture<'a> = Pin<Box<dyn Future<Output = Result<(), InteropError>> + Send + 'a>>;

/// The three boundary operations plus teardown, dyn-compatible so the host
/// session can own the manager without knowing its renderer type.
pub trait RootComponentInterop: Send {
    /// Boundary form of [`RootComponentManager::add_root_component`].
    fn add_root_component(
        &mut self,
        component_identifier: &str,
        mount_target: &str,
    ) -> Result<ComponentHandle, InteropError>;

    /// Boundary form of [`RootComponentManager::render_root_component`].
    fn render_root_component<'a>(
        &'a mut self,
        handle: ComponentHandle,
        parameter_count: i32,
        parameters: &'a Map<String, Value>,
    ) -> InteropFuture<'a>;

    /// Boundary form of [`RootComponentManager::remove_root_component`].
    fn remove_root_component(&mut self, handle: ComponentHandle) -> Result<(), InteropError>;

    /// Boundary form of [`RootComponentManager::dispose`].
    fn dispose(&mut self);
}

impl<R: RendererPort> RootComponentInterop for RootComponentManager<R> {
    fn add_root_component(
        &mut self,
        component_identifier: &str,
        mount_target: &str,
    ) -> Result<ComponentHandle, InteropError> {
        RootComponentManager::add_root_component(self, component_identifier, mount_target)
    }

    fn render_root_component<'a>(
        &'a mut self,
        handle: ComponentHandle,
        parameter_count: i32,
        parameters: &'a Map<String, Value>,
    ) -> InteropFuture<'a> {
        Box::pin(RootComponentManager::render_root_component(
            self,
            handle,
            parameter_count,
            parameters,
        ))
    }

    fn remove_root_component(&mut self, handle: ComponentHandle) -> Result<(), InteropError> {
        RootComponentManager::remove_root_component(self, handle)
    }

    fn dispose(&mut self) {
        RootComponentManager::dispose(self);
    }
}
