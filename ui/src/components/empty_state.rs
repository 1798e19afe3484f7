// File: src/components/empty_state.rs
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    #[props(into)]
    title: String,
    #[props(into, default)]
    description: Option<String>,
    /// Remix icon name, e.g. `"wallet-3"`.
    #[props(into, default)]
    icon: Option<String>,
    #[props(default)]
    primary_action: Option<Element>,
}

/// Placeholder for screens and lists that have nothing to show yet.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            class: "empty-state flex flex-col items-center justify-center text-center p-8 my-4 rounded-xl border-2 border-dashed border-border/60 bg-muted/20 text-muted-foreground motion-fade-in",

            if let Some(icon) = props.icon {
                div {
                    class: "flex items-center justify-center h-16 w-16 mb-4 rounded-full bg-primary/10 text-primary motion-grow",
                    i { class: "ri-{icon}-line text-3xl" }
                }
            }

            h4 {
                class: "text-lg font-semibold text-foreground mb-2",
                "{props.title}"
            }

            if let Some(desc) = props.description {
                p {
                    class: "max-w-md mx-auto mb-6",
                    "{desc}"
                }
            }

            if let Some(action) = props.primary_action {
                div {
                    {action}
                }
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
    fn renders_title_description_and_icon() {
        let html = render(|| {
            rsx! {
                EmptyState {
                    title: "No transactions yet",
                    description: "Completed transfers will appear here.",
                    icon: "exchange-funds",
                }
            }
        });
        assert!(html.contains("No transactions yet"));
        assert!(html.contains("Completed transfers will appear here."));
        assert!(html.contains("ri-exchange-funds-line"));
    }

    #[test]
    fn optional_parts_are_omitted() {
        let html = render(|| rsx! { EmptyState { title: "Nothing here" } });
        assert!(html.contains("Nothing here"));
        assert!(!html.contains("<p"));
        assert!(!html.contains("<i"));
    }
}
