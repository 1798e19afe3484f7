use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::hooks::use_user_wallet::use_user_wallet;
use crate::screens::ScreenHeader;

#[component]
pub fn WalletScreen() -> Element {
    let wallet = use_user_wallet().wallet();
    let description = if wallet.is_connected {
        "Deposits and withdrawals will be available here."
    } else {
        "Connect a wallet to deposit funds."
    };

    rsx! {
        ScreenHeader { title: "Wallet" }
        EmptyState {
            title: "Funding is not available yet",
            description,
            icon: "wallet-3",
        }
    }
}
