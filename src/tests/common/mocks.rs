use std::cell::RefCell;
use std::rc::Rc;
use crate::error::StorageError;
use crate::utils::{ ColorScheme, MemoryStore, PreferenceStore, ThemeRoot };

/// Records every scheme pushed to the document root.
#[derive(Clone, Default)]
pub struct RecordingRoot {
    pub applied: Rc<RefCell<Vec<ColorScheme>>>,
}

impl RecordingRoot {
    pub fn last(&self) -> Option<ColorScheme> {
        self.applied.borrow().last().copied()
    }

    pub fn count(&self) -> usize {
        self.applied.borrow().len()
    }
}

impl ThemeRoot for RecordingRoot {
    fn apply(&mut self, scheme: ColorScheme) {
        self.applied.borrow_mut().push(scheme);
    }
}

/// Storage that fails every call, like a blocked `localStorage`.
#[derive(Clone, Default)]
pub struct UnavailableStore {
    pub writes: Rc<RefCell<u32>>,
}

impl PreferenceStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("blocked".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        *self.writes.borrow_mut() += 1;
        Err(StorageError::Unavailable("blocked".to_string()))
    }
}

/// Memory store that counts writes.
#[derive(Clone, Default)]
pub struct CountingStore {
    pub inner: MemoryStore,
    pub writes: Rc<RefCell<u32>>,
}

impl CountingStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        Self { inner: MemoryStore::with_entry(key, value), ..Self::default() }
    }
}

impl PreferenceStore for CountingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        *self.writes.borrow_mut() += 1;
        self.inner.set(key, value)
    }
}
