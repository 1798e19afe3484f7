//=============================================================================
// File: src/screens/dashboard.rs
//=============================================================================
use api::btc_amount::BtcAmount;
use api::loan::Loan;
use dioxus::prelude::*;
use num_traits::Zero;

use crate::components::empty_state::EmptyState;
use crate::components::loan_card::LoanCard;
use crate::components::metric_card::MetricCard;
use crate::components::metric_card::MetricColor;
use crate::hooks::use_auth::use_auth;
use crate::hooks::use_user_wallet::use_user_wallet;
use crate::layout::sidebar::profile_summary;
use crate::screens::LoadFailed;
use crate::screens::Loading;
use crate::screens::ScreenHeader;
use crate::Screen;

const RECENT_LOANS: usize = 3;

/// Outstanding positions across `user_id`'s active loans, split by which
/// side of each loan the user is on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTotals {
    pub borrowed: BtcAmount,
    pub lent: BtcAmount,
    pub active: usize,
}

pub fn loan_totals(loans: &[Loan], user_id: Option<u64>) -> LoanTotals {
    let active = || {
        loans
            .iter()
            .filter(move |l| l.status.is_active() && user_id.is_some_and(|id| l.involves(id)))
    };
    let side_total = |on_side: fn(&Loan, u64) -> bool| -> BtcAmount {
        match user_id {
            Some(id) => active().filter(|l| on_side(l, id)).map(|l| l.amount).sum(),
            None => BtcAmount::zero(),
        }
    };
    LoanTotals {
        borrowed: side_total(Loan::is_borrowed_by),
        lent: side_total(Loan::is_lent_by),
        active: active().count(),
    }
}

#[component]
pub fn DashboardScreen() -> Element {
    let auth = use_auth();
    let user_wallet = use_user_wallet();
    let mut active_screen = use_context::<Signal<Screen>>();
    let mut loans = use_resource(move || async move { api::my_loans().await });

    let user = auth.user();
    let balance = profile_summary(user.as_ref(), &user_wallet.wallet()).balance;
    let greeting = match &user {
        Some(u) => format!("Welcome back, {}", u.username),
        None => "Welcome to BitLend".to_string(),
    };

    rsx! {
        ScreenHeader {
            title: "Dashboard",
            subtitle: greeting,
        }

        match &*loans.read() {
            None => rsx! {
                Loading { what: "your loans" }
            },
            Some(Err(e)) => rsx! {
                LoadFailed {
                    message: format!("Failed to load loans: {e}"),
                    on_retry: move |_| loans.restart(),
                }
            },
            Some(Ok(list)) => {
                let totals = loan_totals(list, user.as_ref().map(|u| u.id));
                let recent: Vec<Loan> = list.iter().take(RECENT_LOANS).cloned().collect();
                rsx! {
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 xl:grid-cols-4 gap-4 mb-8",
                        MetricCard {
                            title: "Wallet Balance",
                            value: balance.to_string_with_code(),
                            icon: "wallet-3",
                            icon_color: MetricColor::Primary,
                            is_bitcoin: true,
                        }
                        MetricCard {
                            title: "Amount Borrowed",
                            value: totals.borrowed.to_string_with_code(),
                            icon: "hand-coin",
                            icon_color: MetricColor::Warning,
                            is_bitcoin: true,
                        }
                        MetricCard {
                            title: "Amount Lent",
                            value: totals.lent.to_string_with_code(),
                            icon: "money-dollar-circle",
                            icon_color: MetricColor::Success,
                            is_bitcoin: true,
                        }
                        MetricCard {
                            title: "Active Loans",
                            value: totals.active.to_string(),
                            icon: "exchange-dollar",
                            icon_color: MetricColor::Accent,
                        }
                    }

                    div {
                        class: "flex items-center justify-between mb-4",
                        h2 { class: "text-xl font-semibold", "Recent Loans" }
                        a {
                            href: "{Screen::Loans.href()}",
                            class: "text-sm text-primary hover:underline",
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(Screen::Loans);
                            },
                            "View all"
                        }
                    }

                    if recent.is_empty() {
                        EmptyState {
                            title: "No loans yet",
                            description: "Browse the marketplace to lend or borrow bitcoin.",
                            icon: "exchange-dollar",
                        }
                    } else {
                        div {
                            class: "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4",
                            for loan in recent {
                                LoanCard {
                                    key: "{loan.id}",
                                    loan: loan.clone(),
                                    on_view_details: move |_| active_screen.set(Screen::Loans),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::loan::LoanStatus;
    use api::loan::LoanType;

    fn loan(id: u64, loan_type: LoanType, status: LoanStatus, sats: i64) -> Loan {
        Loan {
            id,
            user_id: 1,
            counterparty_id: Some(2),
            amount: BtcAmount::from_sats(sats),
            interest: 5.0,
            duration_months: 6,
            has_collateral: true,
            status,
            loan_type,
            currency: None,
            created_at: None,
        }
    }

    #[test]
    fn totals_count_only_active_loans() {
        let loans = vec![
            loan(1, LoanType::Request, LoanStatus::Active, 50_000_000),
            loan(2, LoanType::Request, LoanStatus::Completed, 10_000_000),
            loan(3, LoanType::Offer, LoanStatus::Active, 25_000_000),
            loan(4, LoanType::Offer, LoanStatus::Pending, 5_000_000),
            loan(5, LoanType::Request, LoanStatus::Active, 20_000_000),
        ];
        let totals = loan_totals(&loans, Some(1));
        assert_eq!(totals.borrowed, BtcAmount::from_sats(70_000_000));
        assert_eq!(totals.lent, BtcAmount::from_sats(25_000_000));
        assert_eq!(totals.active, 3);
    }

    #[test]
    fn funded_request_counts_as_lent() {
        // Someone else's request that user 1 accepted.
        let mut funded = loan(4, LoanType::Request, LoanStatus::Active, 75_000_000);
        funded.user_id = 2;
        funded.counterparty_id = Some(1);

        let totals = loan_totals(&[funded.clone()], Some(1));
        assert!(totals.borrowed.is_zero());
        assert_eq!(totals.lent, BtcAmount::from_sats(75_000_000));
        assert_eq!(totals.active, 1);

        let theirs = loan_totals(&[funded], Some(2));
        assert_eq!(theirs.borrowed, BtcAmount::from_sats(75_000_000));
        assert!(theirs.lent.is_zero());
    }

    #[test]
    fn signed_out_totals_are_empty() {
        let loans = vec![loan(1, LoanType::Request, LoanStatus::Active, 50_000_000)];
        assert_eq!(
            loan_totals(&loans, None),
            LoanTotals {
                borrowed: BtcAmount::zero(),
                lent: BtcAmount::zero(),
                active: 0,
            }
        );
    }

    #[test]
    fn totals_of_nothing() {
        let totals = loan_totals(&[], Some(1));
        assert!(totals.borrowed.is_zero());
        assert!(totals.lent.is_zero());
        assert_eq!(totals.active, 0);
    }
}
