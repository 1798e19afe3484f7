//! Light/dark theme state backed by the platform's preference storage.

use api::prefs::theme_preference::ThemePreference;
use dioxus::prelude::*;

use crate::compat;

/// Orders the stored theme arriving against the user toggling.
///
/// Nothing is written until either the stored value has been read or the
/// user has picked a theme, so the startup default never overwrites a saved
/// choice. A pick made before the stored value arrives is kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeSync {
    restored: bool,
    chosen: bool,
}

impl ThemeSync {
    /// Records that the stored value has been read. Returns the theme to
    /// adopt, or `None` when the user already picked one.
    pub fn restore(&mut self, stored: ThemePreference) -> Option<ThemePreference> {
        self.restored = true;
        (!self.chosen).then_some(stored)
    }

    /// Records an explicit pick by the user.
    pub fn choose(&mut self) {
        self.chosen = true;
    }

    /// Whether the current theme may be applied and persisted.
    pub fn may_persist(&self) -> bool {
        self.restored || self.chosen
    }
}

/// Handle to the app-wide theme, obtained with [`use_theme`].
#[derive(Clone, Copy, PartialEq)]
pub struct Theme {
    current: Signal<ThemePreference>,
    sync: Signal<ThemeSync>,
}

impl Theme {
    pub(crate) fn new(initial: ThemePreference) -> Self {
        Self {
            current: Signal::new(initial),
            sync: Signal::new(ThemeSync::default()),
        }
    }

    /// The active theme. Reading subscribes the caller to changes.
    pub fn current(&self) -> ThemePreference {
        (self.current)()
    }

    /// Flips between light and dark.
    pub fn toggle(&self) {
        let mut current = self.current;
        let mut sync = self.sync;
        let next = current.peek().toggled();
        dioxus_logger::tracing::debug!("theme toggled to {}", next);
        sync.write().choose();
        current.set(next);
    }
}

/// Creates the app-wide theme and provides it as context.
///
/// On mount the persisted preference is restored (falling back to the
/// ambient color scheme, then light). Every value the theme takes once
/// [`ThemeSync::may_persist`] allows it is applied to the document root and
/// persisted.
pub fn use_theme_provider() -> Theme {
    let theme = use_hook(|| Theme::new(ThemePreference::default()));

    use_future(move || async move {
        let stored = compat::restore_theme().await;
        let mut current = theme.current;
        let mut sync = theme.sync;
        let adopted = sync.write().restore(stored);
        match adopted {
            Some(initial) => {
                dioxus_logger::tracing::debug!("restored theme: {}", initial);
                current.set(initial);
            }
            None => dioxus_logger::tracing::debug!("kept theme picked before restore"),
        }
    });

    use_effect(move || {
        let current = theme.current();
        if !(theme.sync)().may_persist() {
            return;
        }
        spawn(async move {
            if let Err(e) = compat::apply_theme(current).await {
                dioxus_logger::tracing::warn!("could not persist theme: {}", e);
            }
        });
    });

    use_context_provider(|| theme)
}

/// The current theme, as provided by [`use_theme_provider`].
pub fn use_theme() -> Theme {
    use_context()
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::prefs::theme_preference::persist_theme;
    use api::prefs::theme_preference::MemoryStore;
    use api::prefs::theme_preference::PreferenceStore;
    use api::prefs::theme_preference::THEME_STORAGE_KEY;

    /// Persists `current` when the gate allows it, as the provider's effect
    /// does.
    fn sync_to(store: &mut MemoryStore, sync: &ThemeSync, current: ThemePreference) {
        if sync.may_persist() {
            persist_theme(store, current).unwrap();
        }
    }

    #[test]
    fn nothing_written_before_restore() {
        let mut store = MemoryStore::default();
        persist_theme(&mut store, ThemePreference::Dark).unwrap();

        // First render runs the effect with the light default.
        let mut sync = ThemeSync::default();
        assert!(!sync.may_persist());
        sync_to(&mut store, &sync, ThemePreference::default());
        assert_eq!(store.read(THEME_STORAGE_KEY).as_deref(), Some("dark"));

        let adopted = sync.restore(ThemePreference::Dark);
        assert_eq!(adopted, Some(ThemePreference::Dark));
        assert!(sync.may_persist());
        sync_to(&mut store, &sync, ThemePreference::Dark);
        assert_eq!(store.read(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn pick_before_restore_is_kept() {
        let mut store = MemoryStore::default();
        persist_theme(&mut store, ThemePreference::Light).unwrap();

        let mut sync = ThemeSync::default();
        sync.choose();
        assert!(sync.may_persist());
        sync_to(&mut store, &sync, ThemePreference::Dark);

        // The stale stored value arrives late and is ignored.
        assert_eq!(sync.restore(ThemePreference::Light), None);
        assert_eq!(store.read(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn picks_after_restore_persist() {
        let mut sync = ThemeSync::default();
        assert_eq!(sync.restore(ThemePreference::Light), Some(ThemePreference::Light));
        sync.choose();
        assert!(sync.may_persist());
    }
}
