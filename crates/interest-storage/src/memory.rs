use std::collections::HashMap;
use std::sync::RwLock;

use interest_core::errors::{InterestError, InterestResult};
use interest_core::traits::IKeyValueStorage;

/// Process-local key-value store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    data: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.read().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> InterestError {
    InterestError::LockPoisoned {
        component: "memory kv store".to_string(),
    }
}

impl IKeyValueStorage for MemoryKeyValueStore {
    fn load(&self, key: &str) -> InterestResult<Option<Vec<u8>>> {
        let data = self.data.read().map_err(|_| poisoned())?;
        Ok(data.get(key).cloned())
    }

    fn save(&self, key: &str, value: &[u8]) -> InterestResult<()> {
        let mut data = self.data.write().map_err(|_| poisoned())?;
        data.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
