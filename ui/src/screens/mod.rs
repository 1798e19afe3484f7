// This file makes the screen modules available to the rest of the application.

use dioxus::prelude::*;

use crate::components::primitives::Button;
use crate::components::primitives::ButtonVariant;
use crate::components::primitives::Card;
use crate::components::primitives::CardContent;

pub mod dashboard;
pub mod help;
pub mod loans;
pub mod marketplace;
pub mod settings;
pub mod transactions;
pub mod wallet;

/// Title row shared by every screen.
#[component]
fn ScreenHeader(#[props(into)] title: String, #[props(into, optional)] subtitle: Option<String>) -> Element {
    rsx! {
        div {
            class: "mb-6 motion-rise",
            h1 { class: "text-2xl md:text-3xl font-bold text-gradient", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "text-muted-foreground mt-1", "{subtitle}" }
            }
        }
    }
}

#[component]
fn Loading(#[props(into)] what: String) -> Element {
    rsx! {
        p {
            class: "text-muted-foreground motion-fade-in",
            i { class: "ri-loader-4-line animate-spin mr-2" }
            "Loading {what}..."
        }
    }
}

/// Error card with a retry button.
#[component]
fn LoadFailed(#[props(into)] message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        Card {
            class: "border-destructive/40",
            CardContent {
                class: "p-6",
                h3 { class: "font-semibold text-destructive mb-2", "Error" }
                p { class: "text-sm text-muted-foreground mb-4", "{message}" }
                Button {
                    variant: ButtonVariant::Outline,
                    on_click: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        }
    }
}
