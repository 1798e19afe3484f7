//! Defines the mutable, reactive state for the application's UI.

use api::user::User;
use api::user::Wallet;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s for any session data that can change while
/// the app runs and must trigger re-renders. It is separate from the
/// immutable `AppState`.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The signed-in user. `None` when signed out.
    pub user: Signal<Option<User>>,
    /// The wallet attached to the session.
    pub wallet: Signal<Wallet>,
    /// Unread notifications, refreshed periodically.
    pub notification_count: Signal<u32>,
}
