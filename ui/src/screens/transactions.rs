use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::screens::ScreenHeader;

#[component]
pub fn TransactionsScreen() -> Element {
    rsx! {
        ScreenHeader { title: "Transactions" }
        EmptyState {
            title: "No transactions yet",
            description: "Disbursements and repayments will be listed here once your loans start moving.",
            icon: "exchange-funds",
        }
    }
}
