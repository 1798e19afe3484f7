//=============================================================================
// File: src/screens/settings.rs
//=============================================================================
use api::prefs::user_prefs::UserPrefs;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::primitives::Card;
use crate::components::primitives::CardContent;
use crate::components::theme_toggle::ThemeToggle;
use crate::screens::ScreenHeader;

/// Label and value for each server-provided preference.
pub fn pref_rows(prefs: &UserPrefs) -> Vec<(&'static str, String)> {
    vec![
        ("Notification badge limit", prefs.notification_max().to_string()),
        ("Default marketplace rating", format!("{:.1}", prefs.default_rating())),
        (
            "Notification refresh",
            format!("every {} s", prefs.notification_refresh_secs()),
        ),
    ]
}

#[component]
pub fn SettingsScreen() -> Element {
    let app_state = use_context::<AppState>();
    let rows = pref_rows(&app_state.prefs);

    rsx! {
        ScreenHeader {
            title: "Settings",
            subtitle: "Appearance and account preferences",
        }

        div {
            class: "grid gap-4 max-w-2xl",
            Card {
                class: "enhanced-card",
                CardContent {
                    class: "p-6 flex items-center justify-between",
                    div {
                        h3 { class: "font-semibold", "Theme" }
                        p { class: "text-sm text-muted-foreground", "Switch between light and dark mode. Your choice is remembered on this device." }
                    }
                    ThemeToggle {}
                }
            }

            Card {
                class: "enhanced-card",
                CardContent {
                    class: "p-6",
                    h3 { class: "font-semibold mb-3", "Preferences" }
                    for (label, value) in rows {
                        div {
                            key: "{label}",
                            class: "flex items-center justify-between py-2 border-b border-border/40 last:border-0",
                            span { class: "text-sm text-muted-foreground", "{label}" }
                            span { class: "font-medium", "{value}" }
                        }
                    }
                }
            }
        }
    }
}
