//! Serializable picture of the wrappers around a raw connector.

use serde::{Deserialize, Serialize};

/// One wrapper: its type name and the settings needed to rebuild it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiddlewareLayer {
    /// Wrapper type, e.g. `PacedConnector`.
    pub name: String,
    /// Settings in the wrapper's own JSON shape.
    pub config: serde_json::Value,
}

impl MiddlewareLayer {
    /// Layer named `name` configured with `config`.
    #[must_use]
    pub fn new(name: impl Into<String>, config: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}

/// Wrappers listed from the outside in; the last entry describes the raw connector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MiddlewareStack {
    /// Outermost first.
    pub layers: Vec<MiddlewareLayer>,
}

impl MiddlewareStack {
    /// Empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Append `layer` below every layer already listed.
    pub fn push(&mut self, layer: MiddlewareLayer) {
        self.layers.push(layer);
    }

    /// Layer names, outermost first.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.name.as_str()).collect()
    }

    /// First layer called `name`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&MiddlewareLayer> {
        self.layers.iter().find(|l| l.name == name)
    }
}
