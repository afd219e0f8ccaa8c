use ahash::AHashMap;
use serde_json::Value;

/// Read-only environment data available to conditions via their `type` key.
///
/// The host editor exposes a bag of admin/runtime flags (user roles, screen
/// context, plugin settings). Conditions may compare against these instead of
/// a block attribute. Passing the bag in explicitly keeps the evaluator a
/// pure function of its arguments.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    values: AHashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an environment value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, Value)> for Environment {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
