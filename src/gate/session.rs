use std::collections::HashSet;

/// Session-scoped persistence for the authenticated flag. One boolean under
/// the configured key is the only thing the gate ever stores.
pub trait SessionStore: Send {
    fn get(&self, key: &str) -> bool;
    fn set(&mut self, key: &str);
    fn clear(&mut self, key: &str);
}

/// Process-lifetime store; the closest analogue of a browser tab session for
/// an embedded gate.
#[derive(Debug, Default)]
pub struct MemorySession {
    flags: HashSet<String>,
}

impl MemorySession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> bool {
        self.flags.contains(key)
    }

    fn set(&mut self, key: &str) {
        self.flags.insert(key.to_string());
    }

    fn clear(&mut self, key: &str) {
        self.flags.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_round_trip() {
        let mut session = MemorySession::new();

        assert!(!session.get("sentinel_authenticated"));
        session.set("sentinel_authenticated");
        assert!(session.get("sentinel_authenticated"));
        assert!(!session.get("other_key"));

        session.clear("sentinel_authenticated");
        assert!(!session.get("sentinel_authenticated"));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut session = MemorySession::new();
        session.clear("sentinel_authenticated");
        session.clear("sentinel_authenticated");
        assert!(!session.get("sentinel_authenticated"));
    }
}
