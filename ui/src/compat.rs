// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;

    use api::prefs::theme_preference;
    use api::prefs::theme_preference::PreferenceStore;
    use api::prefs::theme_preference::PrefsError;
    use api::prefs::theme_preference::ThemePreference;
    use api::prefs::theme_preference::DARK_CLASS;
    use api::prefs::theme_preference::PREFERS_DARK_QUERY;

    /// The browser's `localStorage`.
    struct LocalStorage(web_sys::Storage);

    impl PreferenceStore for LocalStorage {
        fn read(&self, key: &str) -> Option<String> {
            self.0.get_item(key).ok().flatten()
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
            self.0
                .set_item(key, value)
                .map_err(|e| PrefsError::WriteFailed {
                    key: key.to_string(),
                    reason: format!("{:?}", e),
                })
        }
    }

    fn local_storage() -> Option<LocalStorage> {
        web_sys::window()?
            .local_storage()
            .ok()
            .flatten()
            .map(LocalStorage)
    }

    fn prefers_dark() -> Option<bool> {
        let query = web_sys::window()?.match_media(PREFERS_DARK_QUERY).ok().flatten()?;
        Some(query.matches())
    }

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// Reads the persisted theme, falling back to `prefers-color-scheme`.
    pub async fn restore_theme() -> ThemePreference {
        match local_storage() {
            Some(store) => theme_preference::restore_theme(&store, prefers_dark()),
            None => ThemePreference::resolve(None, prefers_dark()),
        }
    }

    /// Sets the `dark` class on `<html>` to match `theme` and persists it.
    pub async fn apply_theme(theme: ThemePreference) -> Result<(), PrefsError> {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
        }

        let mut store = local_storage().ok_or(PrefsError::Unavailable)?;
        theme_preference::persist_theme(&mut store, theme)
    }
}

/// Desktop and mobile render inside a webview, so the document is reached
/// through `document::eval`. On the server the eval fails and the theme
/// resolves to the default.
#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;

    use api::prefs::theme_preference::PrefsError;
    use api::prefs::theme_preference::ThemePreference;
    use api::prefs::theme_preference::DARK_CLASS;
    use api::prefs::theme_preference::PREFERS_DARK_QUERY;
    use api::prefs::theme_preference::THEME_STORAGE_KEY;
    use dioxus::prelude::document;
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct StoredTheme {
        saved: Option<String>,
        prefers_dark: Option<bool>,
    }

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    pub async fn restore_theme() -> ThemePreference {
        let js = format!(
            r#"return {{
                saved: window.localStorage ? localStorage.getItem("{THEME_STORAGE_KEY}") : null,
                prefersDark: window.matchMedia ? window.matchMedia("{PREFERS_DARK_QUERY}").matches : null
            }};"#
        );

        match document::eval(&js).join::<StoredTheme>().await {
            Ok(stored) => ThemePreference::resolve(stored.saved.as_deref(), stored.prefers_dark),
            Err(e) => {
                dioxus_logger::tracing::debug!("stored theme unavailable: {:?}", e);
                ThemePreference::default()
            }
        }
    }

    pub async fn apply_theme(theme: ThemePreference) -> Result<(), PrefsError> {
        let js = format!(
            r#"document.documentElement.classList.toggle("{DARK_CLASS}", {dark});
            if (!window.localStorage) {{ return false; }}
            localStorage.setItem("{THEME_STORAGE_KEY}", "{value}");
            return true;"#,
            dark = theme.is_dark(),
            value = theme.as_str(),
        );

        match document::eval(&js).join::<bool>().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(PrefsError::Unavailable),
            Err(e) => Err(PrefsError::WriteFailed {
                key: THEME_STORAGE_KEY.to_string(),
                reason: format!("{:?}", e),
            }),
        }
    }
}
