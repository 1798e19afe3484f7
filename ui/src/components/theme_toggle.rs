use api::prefs::theme_preference::ThemePreference;
use dioxus::prelude::*;

use crate::components::primitives::Button;
use crate::components::primitives::ButtonSize;
use crate::components::primitives::ButtonVariant;
use crate::hooks::use_theme::use_theme;

/// Accessible label describing what activating the toggle will do.
pub fn toggle_label(current: ThemePreference) -> String {
    format!("Switch to {} theme", current.toggled())
}

/// Icon-only button flipping between light and dark.
#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();
    let current = theme.current();
    let label = toggle_label(current);

    // The outgoing icon rotates away and shrinks; the incoming one settles in.
    let (sun_class, moon_class) = if current.is_dark() {
        ("theme-icon theme-icon-hidden", "theme-icon")
    } else {
        ("theme-icon", "theme-icon theme-icon-hidden")
    };

    rsx! {
        div {
            class: "motion-tap",
            Button {
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Icon,
                aria_label: label,
                class: "rounded-full hover:bg-primary/10 transition-colors duration-200 relative overflow-hidden",
                on_click: move |_| theme.toggle(),
                span {
                    class: "{sun_class} absolute",
                    i { class: "ri-sun-line text-xl" }
                }
                span {
                    class: "{moon_class} absolute",
                    i { class: "ri-moon-line text-xl" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::use_theme::Theme;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// Byte offsets of the sun and moon icons and of the hidden marker.
    fn icon_positions(html: &str) -> (usize, usize, usize) {
        let sun = html.find("ri-sun-line").unwrap();
        let moon = html.find("ri-moon-line").unwrap();
        let hidden = html.find("theme-icon-hidden").unwrap();
        assert_eq!(html.matches("theme-icon-hidden").count(), 1);
        (sun, moon, hidden)
    }

    #[test]
    fn dark_theme_shows_moon() {
        let html = render(|| {
            use_context_provider(|| Theme::new(ThemePreference::Dark));
            rsx! { ThemeToggle {} }
        });
        assert!(html.contains("aria-label=\"Switch to light theme\""));
        // Sun comes first in the markup, so only its wrapper is hidden.
        let (sun, moon, hidden) = icon_positions(&html);
        assert!(hidden < sun);
        assert!(sun < moon);
    }

    #[test]
    fn light_theme_shows_sun() {
        let html = render(|| {
            use_context_provider(|| Theme::new(ThemePreference::Light));
            rsx! { ThemeToggle {} }
        });
        assert!(html.contains("aria-label=\"Switch to dark theme\""));
        let (sun, moon, hidden) = icon_positions(&html);
        assert!(sun < hidden);
        assert!(hidden < moon);
    }

    #[test]
    fn label_names_the_other_theme() {
        assert_eq!(toggle_label(ThemePreference::Light), "Switch to dark theme");
        assert_eq!(toggle_label(ThemePreference::Dark), "Switch to light theme");
    }
}
