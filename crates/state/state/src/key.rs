use serde::{Deserialize, Serialize};

/// Key used to address entries in the store.
///
/// The namespace keeps unrelated record families apart when several services
/// share one backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateKey {
    pub namespace: String,
    pub id: String,
}

impl StateKey {
    /// Create a new state key.
    #[must_use]
    pub fn new(namespace: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            id: id.into(),
        }
    }

    /// Return a canonical string representation: `namespace:id`
    #[must_use]
    pub fn canonical(&self) -> String {
        format!("{}:{}", self.namespace, self.id)
    }
}

impl std::fmt::Display for StateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_format() {
        let key = StateKey::new("daily-message", "2025-04-10");
        assert_eq!(key.canonical(), "daily-message:2025-04-10");
        assert_eq!(key.to_string(), "daily-message:2025-04-10");
    }

    #[test]
    fn keys_with_same_parts_are_equal() {
        let a = StateKey::new("ns", "id");
        let b = StateKey::new(String::from("ns"), String::from("id"));
        assert_eq!(a, b);
    }
}
