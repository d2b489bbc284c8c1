pub mod site;

pub use site::{ SiteConfig, TransitionTimings, DEFAULT_STORAGE_KEY };
