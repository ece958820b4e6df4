// SPDX-License-Identifier: Apache-2.0
//! graft-core: the root component manager.
//!
//! Bridges an external scripting host and a rendering engine it does not
//! otherwise control: resolves opaque string identifiers against the sealed
//! component whitelist, decodes externally-supplied parameter payloads into
//! the typed [`ParameterView`] the renderer consumes, and forwards
//! add/render/remove by handle to the [`RendererPort`] collaborators.
//!
//! The manager holds no per-handle bookkeeping; the rendering engine owns
//! the authoritative handle table. What this crate guards is the whitelist
//! (unknown identifiers never reach the renderer) and the decode cost bound
//! (at most [`MAX_PARAMETERS`] entries per render call).

pub use graft_registry::{
    AllowedComponents, ComponentType, RegistryError, RootComponent, RootComponentConfiguration,
};

mod error;
mod handle;
mod interop;
mod manager;
mod params;
mod render_port;

pub use error::InteropError;
pub use handle::ComponentHandle;
pub use interop::{
    InteropFuture, RootComponentInterop, METHOD_ADD_ROOT_COMPONENT,
    METHOD_REMOVE_ROOT_COMPONENT, METHOD_RENDER_ROOT_COMPONENT,
};
pub use manager::RootComponentManager;
pub use params::{
    decode_parameters, Parameter, ParameterValue, ParameterView, ParameterViewBuilder,
    MAX_PARAMETERS,
};
pub use render_port::{RenderCompletion, RenderError, RendererPort};
