pub mod mocks;

use crate::configs::SiteConfig;

pub fn setup() {
    let _ = env_logger::builder().is_test(true).filter_level(log::LevelFilter::Debug).try_init();
}

/// Default config with the storage key every theme test reads.
pub fn test_config() -> SiteConfig {
    SiteConfig {
        data_dir: std::path::PathBuf::from("unused"),
        ..SiteConfig::default()
    }
}
