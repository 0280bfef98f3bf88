use std::collections::HashMap;

/// Variable bindings of a single interpreter run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Environment {
    bindings: HashMap<String, String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, returning the value it replaced.
    pub fn define(&mut self, name: String, value: String) -> Option<String> {
        self.bindings.insert(name, value)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.bindings.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
