use super::KvStore;
use crate::errors::Result;
use std::collections::BTreeMap;

/// In-process backend; contents are lost when dropped
#[derive(Debug, Default, Clone)]
pub struct MemoryKv {
    entries: BTreeMap<String, String>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut kv = MemoryKv::new();
        assert_eq!(kv.get("clubs").unwrap(), None);

        kv.set("clubs", "[]").unwrap();
        assert_eq!(kv.get("clubs").unwrap().as_deref(), Some("[]"));

        kv.set("clubs", "[1]").unwrap();
        assert_eq!(kv.get("clubs").unwrap().as_deref(), Some("[1]"));
        assert_eq!(kv.len(), 1);

        kv.remove("clubs").unwrap();
        kv.remove("clubs").unwrap();
        assert!(kv.is_empty());
    }
}
