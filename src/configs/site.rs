use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_STORAGE_KEY: &str = "darkMode";
pub const DEFAULT_FADE_OUT_MS: u64 = 50;
pub const DEFAULT_FADE_IN_MS: u64 = 300;
pub const DEFAULT_COPY_FEEDBACK_MS: u64 = 2000;

const STORAGE_KEY_VAR: &str = "AABHA_STORAGE_KEY";
const FADE_OUT_VAR: &str = "AABHA_FADE_OUT_MS";
const FADE_IN_VAR: &str = "AABHA_FADE_IN_MS";
const COPY_FEEDBACK_VAR: &str = "AABHA_COPY_FEEDBACK_MS";
const DATA_DIR_VAR: &str = "AABHA_DATA_DIR";

/// Delays of the two deferred steps of a theme toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionTimings {
    /// Wait between the toggle request and the scheme flip.
    pub fade_out: Duration,
    /// Wait between the flip and the end of the transition window.
    pub fade_in: Duration,
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            fade_out: Duration::from_millis(DEFAULT_FADE_OUT_MS),
            fade_in: Duration::from_millis(DEFAULT_FADE_IN_MS),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub storage_key: String,
    pub timings: TransitionTimings,
    pub copy_feedback: Duration,
    /// Where native builds keep `preferences.json`.
    pub data_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            timings: TransitionTimings::default(),
            copy_feedback: Duration::from_millis(DEFAULT_COPY_FEEDBACK_MS),
            data_dir: default_data_dir(),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self where F: Fn(&str) -> Option<String> {
        let defaults = Self::default();

        let storage_key = match lookup(STORAGE_KEY_VAR) {
            Some(key) if !key.trim().is_empty() => key.trim().to_string(),
            Some(_) => {
                log::warn!("{} is empty, using {:?}", STORAGE_KEY_VAR, DEFAULT_STORAGE_KEY);
                defaults.storage_key
            }
            None => defaults.storage_key,
        };

        let timings = TransitionTimings {
            fade_out: millis_var(&lookup, FADE_OUT_VAR, defaults.timings.fade_out),
            fade_in: millis_var(&lookup, FADE_IN_VAR, defaults.timings.fade_in),
        };

        let config = Self {
            storage_key,
            timings,
            copy_feedback: millis_var(&lookup, COPY_FEEDBACK_VAR, defaults.copy_feedback),
            data_dir: lookup(DATA_DIR_VAR).map(PathBuf::from).unwrap_or(defaults.data_dir),
        };

        log::info!(
            "Site config: key={:?} fade_out={:?} fade_in={:?}",
            config.storage_key,
            config.timings.fade_out,
            config.timings.fade_in
        );
        config
    }
}

fn millis_var<F>(lookup: &F, name: &str, fallback: Duration) -> Duration
    where F: Fn(&str) -> Option<String>
{
    match lookup(name) {
        Some(raw) =>
            match raw.trim().parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(e) => {
                    log::warn!("{}={:?} is not a millisecond count ({}), using {:?}", name, raw, e, fallback);
                    fallback
                }
            }
        None => fallback,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_data_dir() -> PathBuf {
    std::env::temp_dir().join("aabha")
}

// No filesystem in the browser; preferences go to localStorage there.
#[cfg(target_arch = "wasm32")]
fn default_data_dir() -> PathBuf {
    PathBuf::new()
}
