// SPDX-License-Identifier: Apache-2.0
//! Whitelist registry for root components instantiable from an external host.
//!
//! Application authors register component types under developer-chosen string
//! identifiers while configuring the host, then seal the configuration into
//! an immutable [`AllowedComponents`] snapshot consumed by the manager. Only
//! identifiers present in the snapshot may be instantiated from outside; the
//! lookup is the security boundary, so the registry stays deliberately small
//! and has no hot-path behavior beyond storage.

use std::any::TypeId;
use std::collections::HashMap;
use thiserror::Error;

/// Marker trait for component types that may be mounted as root components
/// by the external host.
///
/// Implementing this trait is an explicit opt-in; the registry refuses to
/// talk about any type that has not implemented it, which keeps the
/// whitelist auditable at the type level as well as the identifier level.
pub trait RootComponent: 'static {}

/// Opaque descriptor for a registered component type.
///
/// Carries the process-local [`TypeId`] (the actual identity used by the
/// renderer to construct instances) plus the type's name for diagnostics.
/// Tooling must not assume the name is stable across compiler versions; the
/// `TypeId` is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentType {
    name: &'static str,
    type_id: TypeId,
}

impl ComponentType {
    /// Build the descriptor for a root component type.
    pub fn of<C: RootComponent>() -> Self {
        Self {
            name: std::any::type_name::<C>(),
            type_id: TypeId::of::<C>(),
        }
    }

    /// Diagnostic name of the underlying type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Process-local identity of the underlying type.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns true when this descriptor refers to `C`.
    pub fn is<C: RootComponent>(&self) -> bool {
        self.type_id == TypeId::of::<C>()
    }
}

/// Error type for registry configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// An identifier was registered twice. Registration rejects duplicates
    /// outright rather than silently letting the last registration win.
    #[error("duplicate root component identifier '{0}'")]
    DuplicateIdentifier(String),
}

/// Mutable configuration builder mapping identifiers to component types.
///
/// Built during application configuration and then [sealed](Self::seal) into
/// an [`AllowedComponents`] snapshot. Identifiers are case-sensitive
/// (ordinal) and unique within a configuration.
#[derive(Debug, Default)]
pub struct RootComponentConfiguration {
    by_identifier: HashMap<String, ComponentType>,
}

impl RootComponentConfiguration {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `C` as allowed for instantiation from the external host under
    /// `identifier`.
    ///
    /// Returns [`RegistryError::DuplicateIdentifier`] if the identifier is
    /// already taken, regardless of whether it maps to the same type.
    pub fn register<C: RootComponent>(&mut self, identifier: &str) -> Result<(), RegistryError> {
        if self.by_identifier.contains_key(identifier) {
            return Err(RegistryError::DuplicateIdentifier(identifier.to_owned()));
        }
        self.by_identifier
            .insert(identifier.to_owned(), ComponentType::of::<C>());
        Ok(())
    }

    /// Number of registered identifiers.
    pub fn len(&self) -> usize {
        self.by_identifier.len()
    }

    /// Returns true when nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.by_identifier.is_empty()
    }

    /// Consume the configuration and produce the immutable snapshot.
    ///
    /// Sealing takes `self` by value, so there is no configuration object
    /// left to mutate once a manager holds the snapshot.
    pub fn seal(self) -> AllowedComponents {
        AllowedComponents {
            by_identifier: self.by_identifier,
        }
    }
}

/// Immutable snapshot of the allowed identifier → component type mapping.
///
/// Cloneable so a manager can own its own copy; offers read access only.
#[derive(Debug, Clone, Default)]
pub struct AllowedComponents {
    by_identifier: HashMap<String, ComponentType>,
}

impl AllowedComponents {
    /// Look up a component type by identifier (ordinal comparison).
    pub fn get(&self, identifier: &str) -> Option<&ComponentType> {
        self.by_identifier.get(identifier)
    }

    /// Number of allowed identifiers.
    pub fn len(&self) -> usize {
        self.by_identifier.len()
    }

    /// Returns true when no identifiers are allowed.
    pub fn is_empty(&self) -> bool {
        self.by_identifier.is_empty()
    }

    /// Iterate over `(identifier, component type)` pairs in no particular
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComponentType)> {
        self.by_identifier.iter().map(|(k, v)| (k.as_str(), v))
    }
}
