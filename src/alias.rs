//! The alias registry.
//!
//! An alias redirects dispatch from a user-chosen word to a built-in
//! command. Targets are stored as [`CommandId`] rather than as strings, so
//! a binding can only ever point at a registered command — never at
//! another alias, never at a typo.

use crate::command::CommandId;
use std::collections::BTreeMap;

/// User-defined name-to-command bindings.
#[derive(Debug, Default)]
pub struct AliasRegistry {
    bindings: BTreeMap<String, CommandId>,
}

impl AliasRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `target`, replacing any previous binding of `name`.
    pub fn bind(&mut self, name: &str, target: CommandId) {
        self.bindings.insert(name.to_string(), target);
    }

    /// Remove a binding. Returns false when no such alias exists.
    pub fn unbind(&mut self, name: &str) -> bool {
        self.bindings.remove(name).is_some()
    }

    /// The command `name` is bound to, if any.
    pub fn resolve(&self, name: &str) -> Option<CommandId> {
        self.bindings.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// All bindings in deterministic (name) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, CommandId)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
