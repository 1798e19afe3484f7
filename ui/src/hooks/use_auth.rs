use api::user::User;
use api::user::Wallet;
use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;

/// Handle to the session's user, obtained with [`use_auth`].
#[derive(Clone, Copy)]
pub struct Auth {
    user: Signal<Option<User>>,
    wallet: Signal<Wallet>,
}

impl Auth {
    /// The signed-in user. Reading subscribes the caller to changes.
    pub fn user(&self) -> Option<User> {
        self.user.read().clone()
    }

    /// Ends the session on the server, then clears the local user and wallet.
    pub fn handle_logout(&self) {
        let mut user = self.user;
        let mut wallet = self.wallet;
        spawn(async move {
            match api::logout().await {
                Ok(()) => {
                    user.set(None);
                    wallet.set(Wallet::disconnected());
                }
                Err(e) => dioxus_logger::tracing::warn!("logout failed: {}", e),
            }
        });
    }
}

pub fn use_auth() -> Auth {
    let state = use_context::<AppStateMut>();
    Auth {
        user: state.user,
        wallet: state.wallet,
    }
}
