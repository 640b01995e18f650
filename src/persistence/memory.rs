//! In-memory slots for tests. Clones share the same map, so a store can be
//! reopened over the "same" storage to simulate a restart.

use super::slots::SlotStorage;
use anyhow::{bail, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
struct MemoryInner {
    values: HashMap<String, String>,
    fail_writes: bool,
}

/// In-memory slots, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemorySlots {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following write fail, as a full disk would
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    /// Seed a slot directly, bypassing the failure switch
    pub fn insert(&self, key: &str, value: &str) {
        self.inner
            .borrow_mut()
            .values
            .insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().values.get(key).cloned()
    }
}

impl SlotStorage for MemorySlots {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.get(key).map(String::into_bytes))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            bail!("storage quota exceeded");
        }
        inner.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.inner.borrow_mut().values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{THEME_SLOT, TODOS_SLOT};

    #[test]
    fn test_memory_slots_shared_between_clones() {
        let mut a = MemorySlots::new();
        let b = a.clone();

        a.write(TODOS_SLOT, "[]").unwrap();
        assert_eq!(b.read(TODOS_SLOT).unwrap().as_deref(), Some(&b"[]"[..]));
    }

    #[test]
    fn test_memory_slots_failing_writes() {
        let mut slots = MemorySlots::new();
        slots.insert(THEME_SLOT, "light");
        slots.set_fail_writes(true);

        assert!(slots.write(THEME_SLOT, "dark").is_err());
        assert_eq!(slots.get(THEME_SLOT).as_deref(), Some("light"));
    }
}
