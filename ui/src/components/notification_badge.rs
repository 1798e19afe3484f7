use dioxus::prelude::*;

use crate::components::class_list::class_list;

pub const DEFAULT_BADGE_MAX: u32 = 99;

/// The text shown for `count`, or `None` when nothing should render.
pub fn badge_label(count: u32, max: u32) -> Option<String> {
    match count {
        0 => None,
        c if c > max => Some(format!("{}+", max)),
        c => Some(c.to_string()),
    }
}

/// A small counter pinned to the top-right of its (relatively positioned)
/// parent.
#[component]
pub fn NotificationBadge(
    count: u32,
    #[props(default = DEFAULT_BADGE_MAX)] max: u32,
    #[props(into, default)] class: String,
) -> Element {
    let Some(label) = badge_label(count, max) else {
        return rsx! {};
    };

    let class = class_list([
        "notification-badge absolute -top-1 -right-1 bg-destructive text-destructive-foreground text-xs rounded-full h-5 w-5 flex items-center justify-center font-medium shadow-lg border-2 border-background motion-pop",
        class.as_str(),
    ]);

    rsx! {
        span {
            class: "{class}",
            // Re-keyed so the label pops again whenever it changes.
            span {
                key: "{label}",
                class: "motion-pop-soft",
                "{label}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn zero_renders_nothing() {
        assert_eq!(badge_label(0, DEFAULT_BADGE_MAX), None);
        assert_eq!(badge_label(0, 0), None);
    }

    #[test]
    fn counts_up_to_max_render_verbatim() {
        assert_eq!(badge_label(1, 99).as_deref(), Some("1"));
        assert_eq!(badge_label(42, 99).as_deref(), Some("42"));
        assert_eq!(badge_label(99, 99).as_deref(), Some("99"));
    }

    #[test]
    fn counts_above_max_are_capped() {
        assert_eq!(badge_label(100, 99).as_deref(), Some("99+"));
        assert_eq!(badge_label(u32::MAX, 9).as_deref(), Some("9+"));
    }

    #[test]
    fn markup_follows_label() {
        let empty = render(|| rsx! { NotificationBadge { count: 0 } });
        assert!(!empty.contains("notification-badge"));

        let capped = render(|| rsx! { NotificationBadge { count: 12, max: 9, class: "ml-1" } });
        assert!(capped.contains("notification-badge"));
        assert!(capped.contains("ml-1"));
        assert!(capped.contains("9+"));
    }
}
