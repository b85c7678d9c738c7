//! Dismissible site notice backed by a single persisted flag.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::NoticeConfig;
use crate::error::Result;

const DISMISSED: &str = "true";

/// Key/value flag persistence. The browser build uses local storage.
pub trait FlagStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryFlags {
    values: RefCell<HashMap<String, String>>,
}

impl FlagStore for MemoryFlags {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct Notice<S: FlagStore> {
    config: NoticeConfig,
    store: S,
}

impl<S: FlagStore> Notice<S> {
    pub fn new(config: NoticeConfig, store: S) -> Self {
        Self { config, store }
    }

    /// Shown while enabled and no flag is stored. An unreadable store counts
    /// as not dismissed.
    pub fn should_show(&self) -> bool {
        if !self.config.enabled {
            return false;
        }
        match self.store.get(&self.config.storage_key) {
            Ok(flag) => flag.is_none(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read notice flag");
                true
            }
        }
    }

    /// Persist the dismissal. Storage failures are logged; the caller closes
    /// the notice either way.
    pub fn dismiss(&self) {
        if let Err(e) = self.store.set(&self.config.storage_key, DISMISSED) {
            tracing::warn!(error = %e, "Failed to persist notice dismissal");
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
