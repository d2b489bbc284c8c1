pub mod storage;
pub mod theme;

pub use storage::StorageError;
pub use theme::ThemeError;
