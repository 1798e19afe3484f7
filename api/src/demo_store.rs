//! In-memory stand-in for the marketplace backend.
//!
//! Holds one signed-in session, a connected wallet and a handful of loans so
//! the server functions have something to serve. Nothing is persisted.

use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;
use thiserror::Error;
use tokio::sync::OnceCell;
use tokio::sync::RwLock;

use crate::btc_amount::BtcAmount;
use crate::loan::Loan;
use crate::loan::LoanStatus;
use crate::loan::LoanType;
use crate::user::User;
use crate::user::Wallet;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DemoStoreError {
    #[error("not signed in")]
    NotSignedIn,
    #[error("loan {0} not found")]
    LoanNotFound(u64),
    #[error("loan {id} is {status} and cannot be accepted")]
    NotAvailable { id: u64, status: LoanStatus },
    #[error("cannot accept your own listing")]
    OwnListing,
    #[error("loan {0} has no outstanding balance for this user")]
    NotRepayable(u64),
}

#[derive(Debug, Clone)]
pub struct DemoStore {
    session: Option<u64>,
    users: Vec<User>,
    wallet: Wallet,
    loans: Vec<Loan>,
    unread_notifications: u32,
}

/// Returns the process-wide store, seeding it on first use.
pub async fn shared() -> &'static Arc<RwLock<DemoStore>> {
    static STORE: OnceCell<Arc<RwLock<DemoStore>>> = OnceCell::const_new();
    STORE
        .get_or_init(|| async {
            dioxus_logger::tracing::info!("seeding demo marketplace store");
            Arc::new(RwLock::new(DemoStore::seeded()))
        })
        .await
}

fn at(unix_secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(unix_secs, 0)
}

impl DemoStore {
    pub fn seeded() -> Self {
        let users = vec![
            User {
                id: 1,
                username: "satoshi_fan".to_string(),
                avatar_initials: Some("SF".to_string()),
                wallet_address: Some("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh".to_string()),
                btc_balance: Some(BtcAmount::from_sats(42_000_000)),
            },
            User {
                id: 2,
                username: "hodl_queen".to_string(),
                avatar_initials: Some("HQ".to_string()),
                wallet_address: Some("bc1q9h7garjnyd4ngmpsu0wuhpd3ddd7pxqhvjmvzp".to_string()),
                btc_balance: Some(BtcAmount::from_btc(3)),
            },
        ];

        let wallet = Wallet {
            is_connected: true,
            address: Some("bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq".to_string()),
            balance: Some(BtcAmount::from_sats(125_000_000)),
        };

        let loan = |id, user_id, counterparty_id, sats, interest, duration_months, has_collateral, status, loan_type, created| Loan {
            id,
            user_id,
            counterparty_id,
            amount: BtcAmount::from_sats(sats),
            interest,
            duration_months,
            has_collateral,
            status,
            loan_type,
            currency: Some("BTC".to_string()),
            created_at: at(created),
        };

        let loans = vec![
            loan(1, 1, Some(2), 50_000_000, 8.5, 6, true, LoanStatus::Active, LoanType::Request, 1_740_000_000),
            loan(2, 1, Some(2), 20_000_000, 6.0, 3, false, LoanStatus::Completed, LoanType::Offer, 1_735_000_000),
            loan(3, 1, None, 10_000_000, 7.25, 12, true, LoanStatus::Pending, LoanType::Offer, 1_742_000_000),
            loan(4, 2, None, 75_000_000, 9.0, 12, true, LoanStatus::Pending, LoanType::Request, 1_741_000_000),
            loan(5, 2, None, 5_000_000, 5.5, 1, false, LoanStatus::Pending, LoanType::Offer, 1_743_000_000),
            loan(6, 2, None, 150_000_000, 11.0, 24, true, LoanStatus::Pending, LoanType::Request, 1_744_000_000),
        ];

        Self {
            session: Some(1),
            users,
            wallet,
            loans,
            unread_notifications: 2,
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        let id = self.session?;
        self.users.iter().find(|u| u.id == id)
    }

    pub fn wallet(&self) -> Wallet {
        if self.session.is_some() {
            self.wallet.clone()
        } else {
            Wallet::disconnected()
        }
    }

    pub fn unread_notifications(&self) -> u32 {
        if self.session.is_some() {
            self.unread_notifications
        } else {
            0
        }
    }

    pub fn logout(&mut self) {
        self.session = None;
    }

    /// Loans the signed-in user is party to, newest first.
    pub fn my_loans(&self) -> Vec<Loan> {
        let Some(me) = self.session else {
            return Vec::new();
        };
        let mut loans: Vec<Loan> = self.loans.iter().filter(|l| l.involves(me)).cloned().collect();
        loans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        loans
    }

    /// Open listings created by other users, newest first.
    pub fn marketplace(&self) -> Vec<Loan> {
        let mut loans: Vec<Loan> = self
            .loans
            .iter()
            .filter(|l| l.status.is_pending() && Some(l.user_id) != self.session)
            .cloned()
            .collect();
        loans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        loans
    }

    /// Matches the signed-in user with an open listing.
    pub fn accept(&mut self, loan_id: u64) -> Result<Loan, DemoStoreError> {
        let me = self.session.ok_or(DemoStoreError::NotSignedIn)?;
        let loan = self.loan_mut(loan_id)?;

        if loan.user_id == me {
            return Err(DemoStoreError::OwnListing);
        }
        if !loan.status.is_pending() {
            return Err(DemoStoreError::NotAvailable {
                id: loan_id,
                status: loan.status,
            });
        }

        loan.counterparty_id = Some(me);
        loan.status = LoanStatus::Active;
        Ok(loan.clone())
    }

    /// Settles an active loan on which the signed-in user is the borrower.
    pub fn repay(&mut self, loan_id: u64) -> Result<Loan, DemoStoreError> {
        let me = self.session.ok_or(DemoStoreError::NotSignedIn)?;
        let loan = self.loan_mut(loan_id)?;

        if !loan.status.is_active() || !loan.is_borrowed_by(me) {
            return Err(DemoStoreError::NotRepayable(loan_id));
        }

        loan.status = LoanStatus::Completed;
        Ok(loan.clone())
    }

    fn loan_mut(&mut self, loan_id: u64) -> Result<&mut Loan, DemoStoreError> {
        self.loans
            .iter_mut()
            .find(|l| l.id == loan_id)
            .ok_or(DemoStoreError::LoanNotFound(loan_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marketplace_excludes_own_and_matched_listings() {
        let store = DemoStore::seeded();
        let ids: Vec<u64> = store.marketplace().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![6, 5, 4]);
    }

    #[test]
    fn my_loans_newest_first() {
        let store = DemoStore::seeded();
        let ids: Vec<u64> = store.my_loans().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn accept_moves_listing_to_my_loans() {
        let mut store = DemoStore::seeded();
        let accepted = store.accept(4).unwrap();
        assert_eq!(accepted.status, LoanStatus::Active);
        assert_eq!(accepted.counterparty_id, Some(1));
        assert!(store.my_loans().iter().any(|l| l.id == 4));
        assert!(store.marketplace().iter().all(|l| l.id != 4));

        assert_eq!(
            store.accept(4).unwrap_err(),
            DemoStoreError::NotAvailable {
                id: 4,
                status: LoanStatus::Active
            }
        );
    }

    #[test]
    fn cannot_accept_own_listing() {
        let mut store = DemoStore::seeded();
        assert_eq!(store.accept(3).unwrap_err(), DemoStoreError::OwnListing);
        assert_eq!(store.accept(99).unwrap_err(), DemoStoreError::LoanNotFound(99));
    }

    #[test]
    fn repay_only_active_borrowed_loans() {
        let mut store = DemoStore::seeded();
        assert_eq!(store.repay(1).unwrap().status, LoanStatus::Completed);
        assert_eq!(store.repay(1).unwrap_err(), DemoStoreError::NotRepayable(1));
        assert_eq!(store.repay(3).unwrap_err(), DemoStoreError::NotRepayable(3));
    }

    #[test]
    fn lender_cannot_repay_funded_request() {
        let mut store = DemoStore::seeded();
        let funded = store.accept(4).unwrap();
        assert!(funded.is_lent_by(1));
        assert_eq!(store.repay(4).unwrap_err(), DemoStoreError::NotRepayable(4));
    }

    #[test]
    fn borrower_repays_taken_offer() {
        let mut store = DemoStore::seeded();
        store.accept(5).unwrap();
        assert_eq!(store.repay(5).unwrap().status, LoanStatus::Completed);
    }

    #[test]
    fn logout_clears_session() {
        let mut store = DemoStore::seeded();
        assert_eq!(store.current_user().map(|u| u.id), Some(1));
        store.logout();
        assert!(store.current_user().is_none());
        assert!(!store.wallet().is_connected);
        assert_eq!(store.unread_notifications(), 0);
        assert!(store.my_loans().is_empty());
        assert_eq!(store.accept(4).unwrap_err(), DemoStoreError::NotSignedIn);
    }
}
