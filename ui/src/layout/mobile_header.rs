use dioxus::prelude::*;

use crate::components::notification_badge::NotificationBadge;
use crate::components::notification_badge::DEFAULT_BADGE_MAX;
use crate::components::primitives::BitcoinIcon;
use crate::components::primitives::Button;
use crate::components::primitives::ButtonSize;
use crate::components::primitives::ButtonVariant;
use crate::components::primitives::Sheet;
use crate::components::theme_toggle::ThemeToggle;
use crate::layout::sidebar::Sidebar;
use crate::layout::sidebar::DEFAULT_INITIALS;

/// Top bar for narrow viewports. The menu button opens the [`Sidebar`] in a
/// sheet, which closes again once a destination is picked. Empty
/// `avatar_initials` show as "BT".
#[component]
pub fn MobileHeader(
    #[props(default)] notification_count: u32,
    #[props(default = DEFAULT_BADGE_MAX)] notification_max: u32,
    #[props(into, default)]
    avatar_initials: String,
) -> Element {
    let mut menu_open = use_signal(|| false);
    let initials = if avatar_initials.is_empty() {
        DEFAULT_INITIALS
    } else {
        avatar_initials.as_str()
    };

    rsx! {
        header {
            class: "md:hidden bg-card/80 backdrop-blur-md border-b border-border/50 p-4 flex items-center justify-between sticky top-0 z-10 shadow-sm motion-slide-down",

            div {
                class: "flex items-center",
                div {
                    class: "motion-tap",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        aria_label: "Open menu",
                        class: "mr-2 hover:bg-primary/10",
                        on_click: move |_| menu_open.set(true),
                        i { class: "ri-menu-line text-xl" }
                    }
                }
                Sheet {
                    is_open: menu_open,
                    class: "p-0 w-64 bg-card/95 backdrop-blur-md border-r border-border/50",
                    Sidebar {
                        in_sheet: true,
                        on_navigate: move |_| menu_open.set(false),
                    }
                }

                div {
                    class: "flex items-center motion-fade-in",
                    div {
                        class: "motion-wobble",
                        BitcoinIcon { class: "text-primary mr-2", size: 24 }
                    }
                    span { class: "font-bold text-lg text-gradient", "BitLend" }
                }
            }

            div {
                class: "flex items-center space-x-2",
                div {
                    class: "motion-tap",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        aria_label: "Notifications",
                        class: "relative hover:bg-primary/10",
                        i { class: "ri-notification-3-line text-xl" }
                        NotificationBadge {
                            count: notification_count,
                            max: notification_max,
                        }
                    }
                }

                ThemeToggle {}

                div {
                    class: "bg-gradient-to-br from-primary to-accent text-white rounded-full h-8 w-8 flex items-center justify-center shadow-md motion-grow",
                    span { class: "font-semibold text-sm", "{initials}" }
                }
            }
        }
    }
}
