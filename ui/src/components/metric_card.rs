use dioxus::prelude::*;

use crate::components::class_list::class_list;
use crate::components::primitives::BitcoinIcon;
use crate::components::primitives::Card;
use crate::components::primitives::CardContent;

/// Accent used for the icon bubble of a [`MetricCard`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MetricColor {
    Primary,
    Accent,
    Success,
    Warning,
    /// No tint.
    #[default]
    Neutral,
}

impl MetricColor {
    fn to_class(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary/10 text-primary border-primary/20",
            Self::Accent => "bg-accent/10 text-accent border-accent/20",
            Self::Success => "bg-success/10 text-success border-success/20",
            Self::Warning => "bg-warning/10 text-warning border-warning/20",
            Self::Neutral => "",
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// A headline figure with an icon and an optional trend line.
///
/// `icon` is a Remix icon name without the `ri-` prefix and `-line` suffix.
#[component]
pub fn MetricCard(
    #[props(into)] title: String,
    #[props(into)] value: String,
    #[props(into)] icon: String,
    #[props(default)] icon_color: MetricColor,
    #[props(into, optional)] change_value: Option<String>,
    #[props(into, optional)] change_text: Option<String>,
    #[props(default = true)] is_positive: bool,
    #[props(default = false)] is_bitcoin: bool,
) -> Element {
    let bubble_class = class_list([
        "rounded-full p-3 shadow-sm backdrop-blur-sm border border-border/30 motion-wobble",
        icon_color.to_class(),
    ]);
    let change_label = non_empty(&change_value).unwrap_or_default().to_string();
    let change_text = non_empty(&change_text).map(str::to_string);
    let show_change = !change_label.is_empty() || change_text.is_some();

    let (trend_class, arrow) = if is_positive {
        ("text-success bg-success/10 border border-success/20", "up")
    } else {
        ("text-destructive bg-destructive/10 border border-destructive/20", "down")
    };

    rsx! {
        div {
            class: "motion-lift",
            Card {
                class: "enhanced-card group overflow-hidden relative",
                div { class: "absolute inset-0 bg-gradient-to-br from-primary/5 via-transparent to-accent/5 opacity-0 group-hover:opacity-100 transition-opacity duration-300" }

                CardContent {
                    class: "p-6 relative z-10",
                    div {
                        class: "flex items-start justify-between",
                        div {
                            class: "space-y-2",
                            p { class: "text-muted-foreground text-sm font-medium", "{title}" }
                            p {
                                class: "metric-value text-3xl font-bold flex items-center group-hover:text-primary transition-colors duration-200 motion-pop-soft",
                                if is_bitcoin {
                                    BitcoinIcon { class: "text-primary mr-2 group-hover:scale-110 transition-transform duration-200", size: 24 }
                                }
                                span { "{value}" }
                            }
                        }
                        div {
                            class: "{bubble_class}",
                            i { class: "ri-{icon}-line text-xl" }
                        }
                    }

                    if show_change {
                        div {
                            class: "metric-change mt-4 flex items-center motion-rise",
                            span {
                                class: "text-sm font-medium flex items-center px-2 py-1 rounded-full {trend_class}",
                                i { class: "ri-arrow-{arrow}-line mr-1 text-xs" }
                                "{change_label}"
                            }
                            if let Some(text) = change_text {
                                span { class: "text-xs text-muted-foreground ml-3", "{text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
