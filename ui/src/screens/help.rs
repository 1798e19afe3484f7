use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::screens::ScreenHeader;

#[component]
pub fn HelpScreen() -> Element {
    rsx! {
        ScreenHeader { title: "Help & Support" }
        EmptyState {
            title: "Help center coming soon",
            description: "Guides on lending, borrowing and collateral are being written.",
            icon: "question",
        }
    }
}
