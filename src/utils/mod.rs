pub mod controller;
pub mod document;
pub mod storage;
pub mod theme_state;
pub mod timer;

pub use controller::{ drive_transition, toggle_theme, StartTransition, ThemeCell, ThemeController };
pub use document::{ scroll_lock_holders, DocumentRoot, ScrollLock, ThemeRoot };
pub use storage::{ platform_store, MemoryStore, PreferenceStore };
pub use theme_state::{ ColorScheme, Settle, ThemeMachine, ThemePhase, ThemeState, ToggleRequest };
pub use timer::sleep;
