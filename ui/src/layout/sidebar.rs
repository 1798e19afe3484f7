//=============================================================================
// File: src/layout/sidebar.rs
//=============================================================================
use api::btc_amount::shorten_wallet_address;
use api::btc_amount::BtcAmount;
use api::user::User;
use api::user::Wallet;
use dioxus::prelude::*;
use num_traits::Zero;

use crate::components::class_list::class_list;
use crate::components::primitives::BitcoinIcon;
use crate::components::primitives::Button;
use crate::components::primitives::ButtonSize;
use crate::hooks::use_auth::use_auth;
use crate::hooks::use_user_wallet::use_user_wallet;
use crate::Screen;
use crate::NAV_SCREENS;

pub const DEFAULT_INITIALS: &str = "BT";
pub const ANONYMOUS: &str = "Anonymous";

/// What the sidebar shows about the signed-in user.
#[derive(Clone, PartialEq, Debug)]
pub struct ProfileSummary {
    pub initials: String,
    pub username: String,
    /// Shortened for display; empty when no address is known.
    pub address: String,
    pub balance: BtcAmount,
}

/// Picks the profile fields, preferring live wallet data over what is on
/// file for the user.
pub fn profile_summary(user: Option<&User>, wallet: &Wallet) -> ProfileSummary {
    let initials = user
        .and_then(|u| u.avatar_initials.as_deref())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_INITIALS)
        .to_string();

    let username = user
        .map(|u| u.username.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(ANONYMOUS)
        .to_string();

    let address = if wallet.is_connected {
        wallet.address.as_deref()
    } else {
        user.and_then(|u| u.wallet_address.as_deref())
    };

    let balance = match (wallet.is_connected, wallet.balance) {
        (true, Some(balance)) => balance,
        _ => user.and_then(|u| u.btc_balance).unwrap_or_else(BtcAmount::zero),
    };

    ProfileSummary {
        initials,
        username,
        address: shorten_wallet_address(address.unwrap_or("")),
        balance,
    }
}

#[component]
fn SidebarItem(screen: Screen, is_active: bool, index: usize, on_select: EventHandler<Screen>) -> Element {
    let class = class_list([
        "nav-item flex items-center p-3 rounded-lg font-medium transition-all duration-200 relative overflow-hidden group motion-nudge",
        if is_active {
            "active-nav bg-primary/10 text-primary border border-primary/20 shadow-sm"
        } else {
            "text-foreground/70 hover:bg-muted/50 hover:text-foreground"
        },
    ]);
    let delay = index as f32 * 0.1;

    rsx! {
        li {
            class: "mb-2 motion-slide-in-left",
            style: "animation-delay: {delay}s;",
            a {
                href: "{screen.href()}",
                class: "{class}",
                "aria-current": if is_active { "page" } else { "false" },
                onclick: move |event| {
                    event.prevent_default();
                    on_select.call(screen);
                },
                div {
                    class: "nav-item-content flex items-center w-full",
                    i { class: "ri-{screen.icon()}-line mr-3 text-lg" }
                    "{screen.name()}"
                }
                if is_active {
                    div { class: "absolute right-2 w-2 h-2 bg-primary rounded-full motion-pop" }
                }
            }
        }
    }
}

/// Navigation column with the user's profile and balance.
///
/// Hidden below the `md` breakpoint unless `in_sheet` is set, in which case
/// it fills the mobile menu sheet instead.
#[component]
pub fn Sidebar(
    #[props(default = false)] in_sheet: bool,
    #[props(optional)] on_navigate: Option<EventHandler<Screen>>,
) -> Element {
    let auth = use_auth();
    let user_wallet = use_user_wallet();
    let mut active_screen = use_context::<Signal<Screen>>();

    let user = auth.user();
    let profile = profile_summary(user.as_ref(), &user_wallet.wallet());
    let balance = profile.balance.to_string_with_code();

    let mut navigate = move |screen: Screen| {
        active_screen.set(screen);
        if let Some(handler) = &on_navigate {
            handler.call(screen);
        }
    };

    let aside_class = if in_sheet {
        "flex flex-col w-full bg-card/95 p-5 h-full"
    } else {
        "hidden md:flex md:flex-col md:w-64 bg-card/80 backdrop-blur-sm border-r border-border/50 p-5 h-screen sticky top-0 custom-scrollbar overflow-y-auto shadow-lg motion-slide-in-left"
    };

    rsx! {
        aside {
            class: "{aside_class}",

            // Logo
            div {
                class: "flex items-center mb-8 motion-slide-down",
                div {
                    class: "motion-wobble",
                    BitcoinIcon { class: "text-primary mr-3", size: 30 }
                }
                span { class: "font-bold text-2xl text-gradient", "BitLend" }
            }

            // User Profile
            div {
                class: "mb-8 motion-rise",
                div {
                    class: "flex items-center mb-4",
                    div {
                        class: "bg-gradient-to-br from-primary to-accent text-white rounded-full h-12 w-12 flex items-center justify-center mr-3 shadow-lg motion-grow",
                        span { class: "font-semibold text-lg", "{profile.initials}" }
                    }
                    div {
                        p { class: "font-semibold text-foreground", "{profile.username}" }
                        p { class: "text-sm text-muted-foreground truncate", "{profile.address}" }
                    }
                }

                div {
                    class: "enhanced-card p-4 mb-4 motion-grow-sm",
                    div {
                        class: "flex justify-between items-center mb-3",
                        span { class: "text-sm text-muted-foreground font-medium", "Balance" }
                        span {
                            class: "text-primary font-semibold flex items-center motion-fade-in",
                            BitcoinIcon { class: "mr-1", size: 16 }
                            span { "{balance}" }
                        }
                    }
                    Button {
                        size: ButtonSize::Sm,
                        class: "w-full btn-gradient-primary button-hover",
                        on_click: move |_| navigate(Screen::Wallet),
                        i { class: "ri-add-line mr-2" }
                        " Deposit Funds"
                    }
                }
            }

            // Navigation
            nav {
                class: "flex-1 motion-fade-in",
                ul {
                    for (index, screen) in NAV_SCREENS.into_iter().enumerate() {
                        SidebarItem {
                            key: "{screen.href()}",
                            screen,
                            index,
                            is_active: active_screen() == screen,
                            on_select: move |screen| navigate(screen),
                        }
                    }
                }
            }

            // Footer
            div {
                class: "mt-auto pt-6 border-t border-border/50 space-y-2 motion-rise",
                a {
                    href: "{Screen::Help.href()}",
                    class: "nav-item flex items-center p-3 rounded-lg text-foreground/70 hover:bg-muted/50 hover:text-foreground font-medium transition-all duration-200 group motion-nudge",
                    onclick: move |event| {
                        event.prevent_default();
                        navigate(Screen::Help);
                    },
                    div {
                        class: "nav-item-content flex items-center",
                        i { class: "ri-question-line mr-3 text-lg group-hover:text-accent transition-colors duration-200" }
                        "Help & Support"
                    }
                }
                button {
                    r#type: "button",
                    class: "nav-item flex items-center p-3 w-full text-left rounded-lg text-destructive hover:bg-destructive/10 font-medium transition-all duration-200 group motion-nudge",
                    onclick: move |_| auth.handle_logout(),
                    div {
                        class: "nav-item-content flex items-center",
                        i { class: "ri-logout-box-line mr-3 text-lg group-hover:scale-110 transition-transform duration-200" }
                        "Log Out"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 1,
            username: "satoshi_fan".to_string(),
            avatar_initials: Some("SF".to_string()),
            wallet_address: Some("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh".to_string()),
            btc_balance: Some(BtcAmount::from_sats(42_000_000)),
        }
    }

    #[test]
    fn anonymous_defaults() {
        let profile = profile_summary(None, &Wallet::disconnected());
        assert_eq!(profile.initials, "BT");
        assert_eq!(profile.username, "Anonymous");
        assert_eq!(profile.address, "");
        assert_eq!(profile.balance, BtcAmount::zero());
    }

    #[test]
    fn user_on_file_when_wallet_disconnected() {
        let profile = profile_summary(Some(&user()), &Wallet::disconnected());
        assert_eq!(profile.initials, "SF");
        assert_eq!(profile.username, "satoshi_fan");
        assert_eq!(profile.address, "bc1qxy...0wlh");
        assert_eq!(profile.balance, BtcAmount::from_sats(42_000_000));
    }

    #[test]
    fn connected_wallet_takes_precedence() {
        let wallet = Wallet {
            is_connected: true,
            address: Some("bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq".to_string()),
            balance: Some(BtcAmount::from_btc(2)),
        };
        let profile = profile_summary(Some(&user()), &wallet);
        assert_eq!(profile.address, "bc1qar...5mdq");
        assert_eq!(profile.balance, BtcAmount::from_btc(2));
    }

    #[test]
    fn connected_wallet_without_balance_falls_back_to_user() {
        let wallet = Wallet {
            is_connected: true,
            address: None,
            balance: None,
        };
        let profile = profile_summary(Some(&user()), &wallet);
        // A connected wallet without an address shows none.
        assert_eq!(profile.address, "");
        assert_eq!(profile.balance, BtcAmount::from_sats(42_000_000));
    }
}
