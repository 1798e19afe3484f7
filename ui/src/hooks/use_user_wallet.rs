use api::user::Wallet;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;

#[derive(Clone, Copy)]
pub struct UserWallet {
    wallet: Signal<Wallet>,
}

impl UserWallet {
    pub fn wallet(&self) -> Wallet {
        self.wallet.read().clone()
    }
}

pub fn use_user_wallet() -> UserWallet {
    UserWallet {
        wallet: use_context::<AppStateMut>().wallet,
    }
}
