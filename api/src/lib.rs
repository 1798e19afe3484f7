//! This crate contains the shared marketplace types and all fullstack server
//! functions.

pub mod btc_amount;
#[cfg(not(target_arch = "wasm32"))]
mod demo_store;
pub mod loan;
pub mod prefs;
pub mod user;

use dioxus::prelude::*;
use loan::Loan;
use prefs::user_prefs::UserPrefs;
use user::User;
use user::Wallet;

pub type ApiError = anyhow::Error;

/// Retrieves the user's preferences.
///
/// In the future this may read from a settings file. For now it just
/// returns the default settings, which read from env vars.
#[post("/api/get_user_prefs")]
pub async fn get_user_prefs() -> Result<UserPrefs, ApiError> {
    Ok(UserPrefs::default())
}

/// The signed-in user, `None` after logout.
#[post("/api/current_user")]
pub async fn current_user() -> Result<Option<User>, ApiError> {
    let store = demo_store::shared().await.read().await;
    Ok(store.current_user().cloned())
}

#[post("/api/user_wallet")]
pub async fn user_wallet() -> Result<Wallet, ApiError> {
    let store = demo_store::shared().await.read().await;
    Ok(store.wallet())
}

#[post("/api/logout")]
pub async fn logout() -> Result<(), ApiError> {
    let mut store = demo_store::shared().await.write().await;
    store.logout();
    dioxus_logger::tracing::info!("session ended");
    Ok(())
}

#[post("/api/my_loans")]
pub async fn my_loans() -> Result<Vec<Loan>, ApiError> {
    let store = demo_store::shared().await.read().await;
    Ok(store.my_loans())
}

#[post("/api/marketplace_loans")]
pub async fn marketplace_loans() -> Result<Vec<Loan>, ApiError> {
    let store = demo_store::shared().await.read().await;
    Ok(store.marketplace())
}

#[post("/api/accept_loan")]
pub async fn accept_loan(loan_id: u64) -> Result<Loan, ApiError> {
    let mut store = demo_store::shared().await.write().await;
    let loan = store.accept(loan_id)?;
    dioxus_logger::tracing::info!("loan {} accepted", loan.id);
    Ok(loan)
}

#[post("/api/repay_loan")]
pub async fn repay_loan(loan_id: u64) -> Result<Loan, ApiError> {
    let mut store = demo_store::shared().await.write().await;
    let loan = store.repay(loan_id)?;
    dioxus_logger::tracing::info!("loan {} repaid", loan.id);
    Ok(loan)
}

#[post("/api/notification_count")]
pub async fn notification_count() -> Result<u32, ApiError> {
    let store = demo_store::shared().await.read().await;
    Ok(store.unread_notifications())
}
