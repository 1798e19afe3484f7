// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
pub mod components;
pub mod hooks;
pub mod layout;
mod screens;

use std::time::Duration;

use api::prefs::user_prefs::UserPrefs;
use api::user::User;
use api::user::Wallet;
use app_state::AppState;
use app_state_mut::AppStateMut;
use layout::mobile_header::MobileHeader;
use layout::sidebar::Sidebar;
use screens::dashboard::DashboardScreen;
use screens::help::HelpScreen;
use screens::loans::LoansScreen;
use screens::marketplace::MarketplaceScreen;
use screens::settings::SettingsScreen;
use screens::transactions::TransactionsScreen;
use screens::wallet::WalletScreen;

/// The screens reachable from the navigation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Loans,
    Marketplace,
    Transactions,
    Wallet,
    Settings,
    Help,
}

impl Screen {
    /// Display name used in the navigation.
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Loans => "My Loans",
            Screen::Marketplace => "Marketplace",
            Screen::Transactions => "Transactions",
            Screen::Wallet => "Wallet",
            Screen::Settings => "Settings",
            Screen::Help => "Help & Support",
        }
    }

    /// Remix icon name, without the `ri-` prefix and `-line` suffix.
    pub fn icon(&self) -> &'static str {
        match self {
            Screen::Dashboard => "dashboard",
            Screen::Loans => "exchange-dollar",
            Screen::Marketplace => "store-2",
            Screen::Transactions => "exchange-funds",
            Screen::Wallet => "wallet-3",
            Screen::Settings => "settings-4",
            Screen::Help => "question",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Screen::Dashboard => "/",
            Screen::Loans => "/loans",
            Screen::Marketplace => "/marketplace",
            Screen::Transactions => "/transactions",
            Screen::Wallet => "/wallet",
            Screen::Settings => "/settings",
            Screen::Help => "/help",
        }
    }
}

/// Screens listed in the sidebar, in order. Help lives in the footer.
pub const NAV_SCREENS: [Screen; 6] = [
    Screen::Dashboard,
    Screen::Loans,
    Screen::Marketplace,
    Screen::Transactions,
    Screen::Wallet,
    Screen::Settings,
];

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

const MAIN_CSS: Asset = asset!("/assets/main.css");
const REMIX_ICONS: &str = "https://cdn.jsdelivr.net/npm/remixicon@4.2.0/fonts/remixicon.css";
const TAILWIND_RUNTIME: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

/// Theme for the utility classes, compiled in the page by the Tailwind
/// runtime.
const TAILWIND_THEME: &str = include_str!("../tailwind.css");

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Title { "BitLend" }
        document::Stylesheet { href: REMIX_ICONS }
        document::Stylesheet { href: MAIN_CSS }
        document::Script { src: TAILWIND_RUNTIME }
        style { r#type: "text/tailwindcss", {TAILWIND_THEME} }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let initial_data_future = use_server_future(move || async move {
        // call the server apis concurrently
        let (prefs_result, user_result, wallet_result) =
            tokio::join!(api::get_user_prefs(), api::current_user(), api::user_wallet());

        let user_prefs = prefs_result?;
        let user = user_result?;
        let wallet = wallet_result?;

        dioxus_logger::tracing::info!("prefs: {:#?}", user_prefs);

        Ok::<_, api::ApiError>((user_prefs, user, wallet))
    })?;

    // Read from the single future to ensure it's polled during SSR.
    let body = match &*initial_data_future.read() {
        Some(Ok((prefs, user, wallet))) => {
            rsx! {
                LoadedApp {
                    app_state: AppState::new(*prefs),
                    user: user.clone(),
                    wallet: wallet.clone(),
                }
            }
        }
        Some(Err(e)) => rsx! {
            p {
                class: "p-8 text-destructive",
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                class: "p-8 text-muted-foreground",
                "Loading..."
            }
        },
    };
    body
}

/// This component holds the main app logic and only runs when data is ready.
#[component]
fn LoadedApp(app_state: AppState, user: Option<User>, wallet: Wallet) -> Element {
    let prefs: UserPrefs = app_state.prefs;

    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    // Create signals for mutable state at the top level of the component.
    let user_signal = use_signal(|| user);
    let wallet_signal = use_signal(|| wallet);
    let notification_signal = use_signal(|| 0u32);

    // Provide the mutable state by passing the already created signals.
    use_context_provider(|| AppStateMut {
        user: user_signal,
        wallet: wallet_signal,
        notification_count: notification_signal,
    });
    let mut app_state_mut = use_context::<AppStateMut>();

    let notifications_resource = use_resource(move || async move { api::notification_count().await });

    use_coroutine(move |_rx: UnboundedReceiver<()>| {
        let mut res = notifications_resource;
        async move {
            loop {
                compat::sleep(Duration::from_secs(prefs.notification_refresh_secs())).await;
                res.restart();
            }
        }
    });

    use_effect(move || match notifications_resource.read().as_ref() {
        Some(Ok(count)) => {
            if *app_state_mut.notification_count.peek() != *count {
                app_state_mut.notification_count.set(*count);
            }
        }
        Some(Err(e)) => dioxus_logger::tracing::warn!("notification refresh failed: {}", e),
        None => {}
    });

    hooks::use_theme::use_theme_provider();

    let active_screen = use_signal(Screen::default);

    // --- Provide the active_screen signal to the context ---
    use_context_provider(|| active_screen);

    let avatar_initials = app_state_mut
        .user
        .read()
        .as_ref()
        .and_then(|u| u.avatar_initials.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "flex min-h-screen bg-background text-foreground",
            Sidebar {}
            div {
                class: "flex-1 flex flex-col min-w-0",
                MobileHeader {
                    notification_count: (app_state_mut.notification_count)(),
                    notification_max: prefs.notification_max(),
                    avatar_initials,
                }
                main {
                    class: "flex-1 p-4 md:p-8 overflow-y-auto custom-scrollbar",
                    match active_screen() {
                        Screen::Dashboard => rsx! {
                            DashboardScreen {}
                        },
                        Screen::Loans => rsx! {
                            LoansScreen {}
                        },
                        Screen::Marketplace => rsx! {
                            MarketplaceScreen {}
                        },
                        Screen::Transactions => rsx! {
                            TransactionsScreen {}
                        },
                        Screen::Wallet => rsx! {
                            WalletScreen {}
                        },
                        Screen::Settings => rsx! {
                            SettingsScreen {}
                        },
                        Screen::Help => rsx! {
                            HelpScreen {}
                        },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_excludes_help() {
        assert!(!NAV_SCREENS.contains(&Screen::Help));
        assert_eq!(NAV_SCREENS[0], Screen::default());
    }

    #[test]
    fn tailwind_theme_maps_every_colour_token() {
        let main_css = include_str!("../assets/main.css");
        for token in [
            "background",
            "foreground",
            "card",
            "card-foreground",
            "primary",
            "primary-foreground",
            "accent",
            "accent-foreground",
            "muted",
            "muted-foreground",
            "success",
            "warning",
            "destructive",
            "destructive-foreground",
            "border",
            "input",
            "ring",
        ] {
            assert!(main_css.contains(&format!("--{token}:")), "main.css lacks --{token}");
            assert!(
                TAILWIND_THEME.contains(&format!("--color-{token}: hsl(var(--{token}));")),
                "tailwind theme lacks --color-{token}"
            );
        }
    }

    #[test]
    fn tailwind_dark_variant_follows_root_class() {
        assert!(TAILWIND_THEME.contains("@custom-variant dark (&:where(.dark, .dark *));"));
    }

    #[test]
    fn hrefs_are_unique() {
        let mut hrefs: Vec<_> = NAV_SCREENS.iter().map(Screen::href).collect();
        hrefs.push(Screen::Help.href());
        let count = hrefs.len();
        hrefs.sort();
        hrefs.dedup();
        assert_eq!(hrefs.len(), count);
    }
}
