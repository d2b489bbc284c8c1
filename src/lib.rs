pub mod catalog;
pub mod components;
pub mod configs;
pub mod error;
mod routes;
pub mod utils;
pub mod views;
mod tests;

pub use crate::routes::*;
pub use crate::utils::{ ThemeController, ThemeState };
pub use crate::configs::SiteConfig;
pub use crate::error::{ StorageError, ThemeError };
