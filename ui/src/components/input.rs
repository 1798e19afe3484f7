use dioxus::prelude::*;

use crate::components::class_list::class_list;

const INPUT_CLASS: &str = "flex h-10 w-full rounded-md border border-input bg-background px-3 py-2 text-base ring-offset-background file:border-0 file:bg-transparent file:text-sm file:font-medium file:text-foreground placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50 md:text-sm transition-all duration-200 hover:border-primary/50 focus:border-primary/50";

/// A text input that glows softly while focused.
///
/// Any `input` attribute (`type`, `placeholder`, `value`, `name`, ...) is
/// forwarded to the underlying element.
#[component]
pub fn Input(
    #[props(into, default)] class: String,
    #[props(optional)] oninput: Option<EventHandler<FormEvent>>,
    #[props(optional)] onchange: Option<EventHandler<FormEvent>>,
    #[props(extends = input)] attributes: Vec<Attribute>,
) -> Element {
    let mut is_focused = use_signal(|| false);
    let class = class_list([INPUT_CLASS, class.as_str()]);

    rsx! {
        div {
            class: "relative motion-focus-within",
            input {
                class: "{class}",
                onfocus: move |_| is_focused.set(true),
                onblur: move |_| is_focused.set(false),
                oninput: move |evt| {
                    if let Some(handler) = &oninput {
                        handler.call(evt);
                    }
                },
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                ..attributes,
            }
            if is_focused() {
                div { class: "input-glow absolute inset-0 rounded-md bg-primary/10 -z-10 blur-sm motion-pop-soft" }
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
    fn forwards_attributes_and_merges_class() {
        let html = render(|| {
            rsx! {
                Input {
                    r#type: "search",
                    placeholder: "Search listings",
                    class: "pl-10",
                }
            }
        });
        assert!(html.contains("type=\"search\""));
        assert!(html.contains("placeholder=\"Search listings\""));
        assert!(html.contains("pl-10"));
        assert!(html.contains("border-input"));
        // Unfocused on first render.
        assert!(!html.contains("input-glow"));
    }
}
