use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use crate::error::StorageError;

/// String key/value persistence for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory entries. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn entry(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entry(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::collections::BTreeMap;
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{ Path, PathBuf };
    use super::PreferenceStore;
    use crate::error::StorageError;

    pub const PREFERENCES_FILE: &str = "preferences.json";

    /// Preferences as one JSON object of strings on disk.
    #[derive(Clone, Debug)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn in_dir(dir: &Path) -> Self {
            Self::new(dir.join(PREFERENCES_FILE))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
            match fs::read_to_string(&self.path) {
                Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
                Ok(raw) => Ok(serde_json::from_str(&raw)?),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
                Err(e) => Err(StorageError::Read(format!("{}: {}", self.path.display(), e))),
            }
        }
    }

    impl PreferenceStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.load()?.remove(key))
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            let mut entries = match self.load() {
                Err(StorageError::Format(e)) => {
                    log::warn!("Replacing unreadable {}: {}", self.path.display(), e);
                    BTreeMap::new()
                }
                loaded => loaded?,
            };
            entries.insert(key.to_string(), value.to_string());

            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            let raw = serde_json::to_string_pretty(&entries)?;
            fs::write(&self.path, raw).map_err(|e|
                StorageError::Write(format!("{}: {}", self.path.display(), e))
            )
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;

#[cfg(target_arch = "wasm32")]
mod local {
    use super::PreferenceStore;
    use crate::error::StorageError;

    /// `window.localStorage`.
    pub struct LocalStore {
        storage: web_sys::Storage,
    }

    impl LocalStore {
        pub fn open() -> Result<Self, StorageError> {
            let window = web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
            let storage = window
                .local_storage()?
                .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
            Ok(Self { storage })
        }
    }

    impl PreferenceStore for LocalStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage.get_item(key).map_err(|e| StorageError::Read(format!("{:?}", e)))
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage.set_item(key, value).map_err(|e| StorageError::Write(format!("{:?}", e)))
        }
    }
}

/// Best store for the current platform, falling back to memory.
pub fn platform_store(config: &crate::configs::SiteConfig) -> Box<dyn PreferenceStore> {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = config;
        match LocalStore::open() {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("{}; theme preference will not survive a reload", e);
                Box::new(MemoryStore::new())
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let store = FileStore::in_dir(&config.data_dir);
        log::info!("Storing preferences in {}", store.path().display());
        Box::new(store)
    }
}
