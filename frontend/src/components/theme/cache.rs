/// Local storage key the theme record lives under.
pub const STORAGE_KEY: &str = "festival-active-theme";

/// Durable theme record storage.
///
/// Both operations absorb failures: a broken or unavailable store must never
/// take the session down, the defaults cover for it.
pub trait ThemeStore {
    fn load(&self) -> ThemeConfig;
    fn save(&self, config: &ThemeConfig);
}

/// [`ThemeStore`] backed by browser local storage.
pub struct LocalThemeCache;

impl ThemeStore for LocalThemeCache {
    fn load(&self) -> ThemeConfig {
        match LocalStorage::get::<ThemeConfig>(STORAGE_KEY) {
            Ok(config) => config,
            // absent or unparsable record, start from the plain look
            Err(_) => ThemeConfig::default(),
        }
    }

    fn save(&self, config: &ThemeConfig) {
        let config = ThemeConfig {
            timestamp: Some(js_sys::Date::new_0().to_iso_string().into()),
            ..config.clone()
        };

        if let Err(e) = LocalStorage::set(STORAGE_KEY, config) {
            console::log!(format!("theme cache write failed: {e:?}"));
        }
    }
}

use gloo_console as console;
use gloo_storage::{LocalStorage, Storage};
use interfacing::ThemeConfig;
