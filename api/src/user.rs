//! The signed-in user and the wallet attached to the session.

use serde::Deserialize;
use serde::Serialize;

use crate::btc_amount::BtcAmount;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub avatar_initials: Option<String>,
    /// Address on file, used when no wallet is connected.
    #[serde(default)]
    pub wallet_address: Option<String>,
    /// Balance on file, used when no wallet is connected.
    #[serde(default)]
    pub btc_balance: Option<BtcAmount>,
}

/// State of the browser/extension wallet connection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub is_connected: bool,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub balance: Option<BtcAmount>,
}

impl Wallet {
    pub fn disconnected() -> Self {
        Self::default()
    }
}
