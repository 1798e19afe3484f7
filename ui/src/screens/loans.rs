//=============================================================================
// File: src/screens/loans.rs
//=============================================================================
use api::loan::Loan;
use api::loan::LoanStatus;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::components::class_list::class_list;
use crate::components::empty_state::EmptyState;
use crate::components::loan_card::position_label;
use crate::components::loan_card::LoanCard;
use crate::components::loan_style::loan_status_badge_class;
use crate::components::primitives::Button;
use crate::components::primitives::Modal;
use crate::hooks::use_auth::use_auth;
use crate::screens::LoadFailed;
use crate::screens::Loading;
use crate::screens::ScreenHeader;

/// Loans matching `status`, or all of them when no status is selected.
pub fn filter_by_status(loans: &[Loan], status: Option<LoanStatus>) -> Vec<Loan> {
    loans
        .iter()
        .filter(|l| status.is_none_or(|s| l.status == s))
        .cloned()
        .collect()
}

/// Only the borrower can settle a loan, and only while it is active.
pub fn can_repay(loan: &Loan, user_id: Option<u64>) -> bool {
    loan.status.is_active() && user_id.is_some_and(|id| loan.is_borrowed_by(id))
}

/// The viewer's side of the loan, falling back to the listing's own side
/// when the viewer is not a party to it.
pub fn role_label(loan: &Loan, user_id: Option<u64>) -> &'static str {
    match user_id {
        Some(id) if loan.is_borrowed_by(id) => "You are borrowing",
        Some(id) if loan.is_lent_by(id) => "You are lending",
        _ => position_label(loan),
    }
}

#[component]
fn DetailRow(#[props(into)] label: String, #[props(into)] value: String) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-between py-2 border-b border-border/40 last:border-0",
            span { class: "text-muted-foreground text-sm", "{label}" }
            span { class: "font-medium text-foreground", "{value}" }
        }
    }
}

#[component]
fn LoanDetails(loan: Loan, user_id: Option<u64>, on_repay: EventHandler<Loan>) -> Element {
    let status_class = loan_status_badge_class(loan.status);
    let repayable = can_repay(&loan, user_id);
    let position = role_label(&loan, user_id);
    let status = loan.status.label();
    let amount = loan.amount.to_string_with_code();
    let interest = loan.interest_label();
    let duration = format!("{} months", loan.duration_months);
    let collateral = loan.collateral_label();
    let currency = loan.currency_code().to_string();
    let created_on = loan.created_on();
    let counterparty = loan
        .counterparty_id
        .map(|id| format!("User #{id}"))
        .unwrap_or_else(|| "Awaiting match".to_string());

    rsx! {
        div {
            class: "space-y-1",
            div {
                class: "flex items-center justify-between mb-3",
                span { class: "text-sm text-muted-foreground", "{position}" }
                span {
                    class: "text-xs px-2 py-1 rounded-full font-medium {status_class}",
                    "{status}"
                }
            }
            DetailRow { label: "Amount", value: amount }
            DetailRow { label: "Interest", value: interest }
            DetailRow { label: "Duration", value: duration }
            DetailRow { label: "Collateral", value: collateral }
            DetailRow { label: "Currency", value: currency }
            DetailRow { label: "Counterparty", value: counterparty }
            if let Some(date) = created_on {
                DetailRow { label: "Created", value: date }
            }
        }
        if repayable {
            Button {
                class: "w-full mt-6 btn-gradient-primary button-hover",
                on_click: move |_| on_repay.call(loan.clone()),
                i { class: "ri-refund-2-line mr-2" }
                "Repay Loan"
            }
        }
    }
}

#[component]
pub fn LoansScreen() -> Element {
    let user_id = use_auth().user().map(|u| u.id);
    let mut loans = use_resource(move || async move { api::my_loans().await });
    let mut status_filter = use_signal(|| None::<LoanStatus>);
    let mut selected = use_signal(|| None::<Loan>);
    let mut details_open = use_signal(|| false);
    let mut action_error = use_signal(|| None::<String>);

    let repay = move |loan: Loan| {
        spawn(async move {
            match api::repay_loan(loan.id).await {
                Ok(repaid) => {
                    dioxus_logger::tracing::info!("repaid loan {}", repaid.id);
                    action_error.set(None);
                    details_open.set(false);
                    loans.restart();
                }
                Err(e) => {
                    dioxus_logger::tracing::warn!("repay of loan {} failed: {}", loan.id, e);
                    action_error.set(Some(format!("Could not repay loan: {e}")));
                }
            }
        });
    };

    let modal_title = selected
        .read()
        .as_ref()
        .map(|l| format!("Loan #{}", l.id))
        .unwrap_or_default();

    rsx! {
        ScreenHeader {
            title: "My Loans",
            subtitle: "Loans you have requested or offered",
        }

        div {
            class: "flex flex-wrap gap-2 mb-6",
            FilterChip {
                label: "All",
                active: status_filter().is_none(),
                on_select: move |_| status_filter.set(None),
            }
            for status in LoanStatus::iter() {
                FilterChip {
                    key: "{status}",
                    label: status.label(),
                    active: status_filter() == Some(status),
                    on_select: move |_| status_filter.set(Some(status)),
                }
            }
        }

        if let Some(message) = action_error() {
            p { class: "text-sm text-destructive mb-4", "{message}" }
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
                let visible = filter_by_status(list, status_filter());
                rsx! {
                    if visible.is_empty() {
                        EmptyState {
                            title: "No loans to show",
                            description: "Loans you create or accept will appear here.",
                            icon: "exchange-dollar",
                        }
                    } else {
                        div {
                            class: "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4",
                            for loan in visible {
                                if can_repay(&loan, user_id) {
                                    LoanCard {
                                        key: "{loan.id}",
                                        loan: loan.clone(),
                                        on_view_details: move |loan| {
                                            selected.set(Some(loan));
                                            details_open.set(true);
                                        },
                                        on_repay: move |loan| repay(loan),
                                    }
                                } else {
                                    LoanCard {
                                        key: "{loan.id}",
                                        loan: loan.clone(),
                                        on_view_details: move |loan| {
                                            selected.set(Some(loan));
                                            details_open.set(true);
                                        },
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        Modal {
            is_open: details_open,
            title: modal_title,
            if let Some(loan) = selected() {
                LoanDetails {
                    loan,
                    user_id,
                    on_repay: move |loan| repay(loan),
                }
            }
        }
    }
}

#[component]
fn FilterChip(#[props(into)] label: String, active: bool, on_select: EventHandler<()>) -> Element {
    let class = class_list([
        "px-3 py-1.5 rounded-full text-sm font-medium border transition-colors duration-200",
        if active {
            "bg-primary text-primary-foreground border-primary"
        } else {
            "bg-muted/30 text-foreground/70 border-border/40 hover:bg-muted/60"
        },
    ]);
    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            "aria-pressed": if active { "true" } else { "false" },
            onclick: move |_| on_select.call(()),
            "{label}"
        }
    }
}
