// SPDX-License-Identifier: Apache-2.0
//! Typed parameter model and the lenient wire decode.
//!
//! The external host supplies parameters as a flat JSON object. Decoding
//! classifies each entry by its *wire* kind only; the target component's
//! declared parameter types are never consulted, so a component expecting a
//! string can still receive an integer if that is what came over the wire.
//! Entries whose kind is none of {integer, string, boolean} are silently
//! skipped; that leniency is part of the protocol, not an error path.

use serde_json::{Map, Value};

/// Hard cap on parameter entries per render call.
///
/// Enforced against the caller-claimed count *before* any payload traversal
/// so a misbehaving caller cannot inflate decode work.
pub const MAX_PARAMETERS: i32 = 100;

/// A decoded parameter value.
///
/// The sum type is deliberately capability-limited: exactly the wire kinds
/// the protocol accepts, nothing nested or structured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    /// Integer-valued JSON number.
    Integer(i64),
    /// JSON string.
    String(String),
    /// JSON `true` / `false`.
    Boolean(bool),
}

/// One decoded `(name, value)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name as supplied by the caller.
    pub name: String,
    /// Decoded value.
    pub value: ParameterValue,
}

/// Ordered collection of decoded parameters, ready to apply to a component
/// instance. Order follows the decode; the protocol attaches no meaning to
/// it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterView {
    entries: Vec<Parameter>,
}

impl ParameterView {
    /// Empty view (a render with no parameters).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of decoded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no entries were decoded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the decoded entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.entries.iter()
    }

    /// First value decoded under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.entries
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }
}

impl<'a> IntoIterator for &'a ParameterView {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Incremental builder for a [`ParameterView`].
#[derive(Debug, Default)]
pub struct ParameterViewBuilder {
    entries: Vec<Parameter>,
}

impl ParameterViewBuilder {
    /// Builder pre-sized for `capacity` entries. Callers feeding it from the
    /// wire bound `capacity` by [`MAX_PARAMETERS`] first.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append one decoded entry.
    pub fn push(&mut self, name: impl Into<String>, value: ParameterValue) {
        self.entries.push(Parameter {
            name: name.into(),
            value,
        });
    }

    /// Finish and produce the view.
    pub fn build(self) -> ParameterView {
        ParameterView {
            entries: self.entries,
        }
    }
}

/// Decode a wire parameter payload into a [`ParameterView`].
///
/// Wire kinds map as: integer-representable number → [`ParameterValue::Integer`],
/// string → [`ParameterValue::String`], boolean → [`ParameterValue::Boolean`].
/// Everything else (null, arrays, nested objects, numbers that do not fit an
/// `i64`) is skipped without error. `declared_count` is the caller-claimed
/// entry count, used only to pre-size the output; the real entry count may
/// legitimately be lower once non-decodable kinds are dropped.
pub fn decode_parameters(parameters: &Map<String, Value>, declared_count: usize) -> ParameterView {
    let mut builder = ParameterViewBuilder::with_capacity(declared_count);
    for (name, value) in parameters {
        match value {
            Value::Number(number) => {
                if let Some(integer) = number.as_i64() {
                    builder.push(name.clone(), ParameterValue::Integer(integer));
                }
            }
            Value::String(text) => builder.push(name.clone(), ParameterValue::String(text.clone())),
            Value::Bool(flag) => builder.push(name.clone(), ParameterValue::Boolean(*flag)),
            Value::Null | Value::Array(_) | Value::Object(_) => {}
        }
    }
    builder.build()
}
