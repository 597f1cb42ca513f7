//! Variable resolution.
//!
//! The scanner never consults the process environment on its own. Every
//! `$name` reference goes through a caller-supplied [`Resolver`], which maps
//! the name to plain text, to a structured value, or to nothing.

use std::collections::HashMap;
use std::fmt;

/// Value supplied by a [`Resolver`] for one variable reference.
#[derive(Debug, Clone, PartialEq)]
pub enum VarValue {
    /// Plain text, spliced into the surrounding word.
    Text(String),
    /// A structured value, emitted as a standalone embedded token.
    Structured(serde_json::Value),
}

impl From<&str> for VarValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for VarValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<serde_json::Value> for VarValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Structured(value)
    }
}

/// Source of variable values during substitution.
///
/// References are resolved one at a time, in scan order, left to right.
/// A reference that resolves to `None` substitutes the empty string and is
/// never an error.
pub enum Resolver<'a> {
    /// Every reference resolves to nothing.
    Empty,
    /// Lookup in a name-to-value table.
    Static(&'a HashMap<String, VarValue>),
    /// Lookup through a callback. The callback is invoked exactly once per
    /// reference, so it may carry state.
    Callback(&'a mut dyn FnMut(&str) -> Option<VarValue>),
}

impl Resolver<'_> {
    /// Resolve one variable reference.
    pub fn resolve(&mut self, name: &str) -> Option<VarValue> {
        match self {
            Self::Empty => None,
            Self::Static(vars) => vars.get(name).cloned(),
            Self::Callback(lookup) => lookup(name),
        }
    }
}

impl Default for Resolver<'_> {
    fn default() -> Self {
        Self::Empty
    }
}

impl fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Static(vars) => f.debug_tuple("Static").field(vars).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}
