//! A set of reusable, lifetime-free Dioxus primitives styled with utility
//! classes. Animation classes (`motion-*`) live in `assets/main.css`.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

use crate::components::class_list::class_list;

//=============================================================================
// Content Components
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct CardProps {
    children: Element,
    #[props(into, default)]
    class: String,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
}

/// A bordered surface grouping related content.
pub fn Card(props: CardProps) -> Element {
    let class = class_list([
        "rounded-xl border bg-card text-card-foreground shadow-sm",
        props.class.as_str(),
    ]);
    rsx! {
        div {
            class: "{class}",
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[component]
pub fn CardContent(#[props(into, default)] class: String, children: Element) -> Element {
    let class = class_list(["p-6 pt-0", class.as_str()]);
    rsx! { div { class: "{class}", {children} } }
}

#[component]
pub fn CardFooter(#[props(into, default)] class: String, children: Element) -> Element {
    let class = class_list(["flex items-center p-6 pt-0", class.as_str()]);
    rsx! { div { class: "{class}", {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Copy, Default, Debug)]
pub enum ButtonVariant {
    #[default]
    Default,
    Ghost,
    Outline,
}

impl ButtonVariant {
    fn to_class(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
            Self::Ghost => "hover:bg-accent hover:text-accent-foreground",
            Self::Outline => "border border-input bg-background hover:bg-accent hover:text-accent-foreground",
        }
    }
}

#[derive(PartialEq, Clone, Copy, Default, Debug)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Icon,
}

impl ButtonSize {
    fn to_class(self) -> &'static str {
        match self {
            Self::Default => "h-10 px-4 py-2",
            Self::Sm => "h-9 rounded-md px-3",
            Self::Icon => "h-10 w-10",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    variant: ButtonVariant,
    #[props(default)]
    size: ButtonSize,
    #[props(into, default)]
    class: String,
    #[props(into, optional)]
    aria_label: Option<String>,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class = class_list([
        "inline-flex items-center justify-center whitespace-nowrap rounded-md text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring",
        props.variant.to_class(),
        props.size.to_class(),
        props.class.as_str(),
    ]);
    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            "aria-label": props.aria_label,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

//=============================================================================
// Overlays
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    is_open: Signal<bool>,
    #[props(into)]
    title: String,
    children: Element,
}

/// A centered dialog with a title bar. Closes on backdrop click, the close
/// button, or Escape.
pub fn Modal(mut props: ModalProps) -> Element {
    rsx! {
        if (props.is_open)() {
            div {
                class: "fixed inset-0 z-50 flex items-center justify-center bg-black/60 motion-fade-in",
                role: "dialog",
                "aria-modal": "true",
                tabindex: "-1",
                autofocus: true,
                onclick: move |_| props.is_open.set(false),
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        props.is_open.set(false);
                    }
                },
                // The panel stops clicks from reaching the backdrop.
                div {
                    class: "enhanced-card w-full max-w-md p-6 motion-pop",
                    onclick: |evt| evt.stop_propagation(),
                    div {
                        class: "flex items-center justify-between mb-4",
                        h3 { class: "font-semibold text-lg", "{props.title}" }
                        button {
                            r#type: "button",
                            class: "text-muted-foreground hover:text-foreground",
                            "aria-label": "Close",
                            onclick: move |_| props.is_open.set(false),
                            i { class: "ri-close-line text-xl" }
                        }
                    }
                    {props.children}
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SheetProps {
    is_open: Signal<bool>,
    #[props(into, default)]
    class: String,
    children: Element,
}

/// A panel sliding in from the left edge of the viewport. Closes on
/// backdrop click or Escape.
pub fn Sheet(mut props: SheetProps) -> Element {
    let panel_class = class_list([
        "fixed inset-y-0 left-0 z-50 h-full w-3/4 border-r shadow-lg overflow-y-auto motion-slide-in-left",
        props.class.as_str(),
    ]);

    rsx! {
        if (props.is_open)() {
            div {
                class: "fixed inset-0 z-50 bg-black/60 motion-fade-in",
                tabindex: "-1",
                autofocus: true,
                onclick: move |_| props.is_open.set(false),
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        props.is_open.set(false);
                    }
                },
                div {
                    class: "{panel_class}",
                    role: "dialog",
                    onclick: |evt| evt.stop_propagation(),
                    {props.children}
                }
            }
        }
    }
}

//=============================================================================
// Glyphs
//=============================================================================

/// The bitcoin "₿" mark drawn as inline SVG so it inherits `currentColor`.
#[component]
pub fn BitcoinIcon(#[props(into, default)] class: String, #[props(default = 24)] size: u32) -> Element {
    rsx! {
        svg {
            class: "{class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "currentColor",
            "aria-hidden": "true",
            path {
                d: "M11.5 3v2H9v14h2.5v2h1.5v-2h1a4 4 0 0 0 1.8-7.57A3.5 3.5 0 0 0 14 5h-1V3h-1.5zm-0.5 4h3a1.5 1.5 0 0 1 0 3h-3V7zm0 5h3.5a2 2 0 0 1 0 4H11v-4z",
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
    fn open_sheet_slides_from_left() {
        let html = render(|| {
            let is_open = use_signal(|| true);
            rsx! {
                Sheet { is_open, class: "w-64", p { "menu" } }
            }
        });
        assert!(html.contains("left-0"));
        assert!(html.contains("motion-slide-in-left"));
        assert!(html.contains("w-64"));
        assert!(html.contains("menu"));
    }

    #[test]
    fn closed_sheet_renders_nothing() {
        let html = render(|| {
            let is_open = use_signal(|| false);
            rsx! {
                Sheet { is_open, p { "menu" } }
            }
        });
        assert!(!html.contains("menu"));
    }

    #[test]
    fn button_is_always_enabled() {
        let html = render(|| {
            rsx! {
                Button { aria_label: "Repay", "Repay" }
            }
        });
        assert!(html.contains("aria-label=\"Repay\""));
        assert!(!html.contains("disabled"));
    }
}
