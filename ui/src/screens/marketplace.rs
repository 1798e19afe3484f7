//=============================================================================
// File: src/screens/marketplace.rs
//=============================================================================
use api::btc_amount::BtcAmount;
use api::loan::Loan;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::empty_state::EmptyState;
use crate::components::input::Input;
use crate::components::marketplace_loan_card::listing_label;
use crate::components::marketplace_loan_card::MarketplaceLoanCard;
use crate::screens::LoadFailed;
use crate::screens::Loading;
use crate::screens::ScreenHeader;

/// Matches `query` against a listing. A query that reads as a bitcoin amount
/// matches listings of that amount, plus amounts whose display starts with
/// the query so partial input like "1.5" finds 1.55 BTC but not 11.5 BTC.
/// Any other query is a case-insensitive match on currency and kind. A blank
/// query matches everything.
pub fn matches_search(loan: &Loan, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    if let Ok(amount) = BtcAmount::new_from_str(&query) {
        return loan.amount == amount || loan.amount.to_string().starts_with(&query);
    }
    [
        loan.currency_code().to_lowercase(),
        listing_label(loan).to_lowercase(),
    ]
    .iter()
    .any(|field| field.contains(&query))
}

#[component]
pub fn MarketplaceScreen() -> Element {
    let app_state = use_context::<AppState>();
    let rating = app_state.prefs.default_rating();

    let mut listings = use_resource(move || async move { api::marketplace_loans().await });
    let mut query = use_signal(String::new);
    let mut action_error = use_signal(|| None::<String>);

    let accept = move |loan: Loan| {
        spawn(async move {
            match api::accept_loan(loan.id).await {
                Ok(accepted) => {
                    dioxus_logger::tracing::info!("accepted listing {}", accepted.id);
                    action_error.set(None);
                    listings.restart();
                }
                Err(e) => {
                    dioxus_logger::tracing::warn!("accepting listing {} failed: {}", loan.id, e);
                    action_error.set(Some(format!("Could not accept listing: {e}")));
                }
            }
        });
    };

    rsx! {
        ScreenHeader {
            title: "Marketplace",
            subtitle: "Open loan requests and offers from other users",
        }

        div {
            class: "relative max-w-md mb-6",
            i { class: "ri-search-line absolute left-3 top-1/2 -translate-y-1/2 text-muted-foreground z-10" }
            Input {
                r#type: "search",
                placeholder: "Search by amount or currency",
                class: "pl-10",
                value: "{query}",
                oninput: move |evt: FormEvent| query.set(evt.value()),
            }
        }

        if let Some(message) = action_error() {
            p { class: "text-sm text-destructive mb-4", "{message}" }
        }

        match &*listings.read() {
            None => rsx! {
                Loading { what: "listings" }
            },
            Some(Err(e)) => rsx! {
                LoadFailed {
                    message: format!("Failed to load listings: {e}"),
                    on_retry: move |_| listings.restart(),
                }
            },
            Some(Ok(list)) => {
                let visible: Vec<Loan> = list
                    .iter()
                    .filter(|l| matches_search(l, &query.read()))
                    .cloned()
                    .collect();
                rsx! {
                    if visible.is_empty() {
                        EmptyState {
                            title: "No listings found",
                            description: "Try a different search, or check back later.",
                            icon: "store-2",
                        }
                    } else {
                        div {
                            class: "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4",
                            for loan in visible {
                                MarketplaceLoanCard {
                                    key: "{loan.id}",
                                    loan: loan.clone(),
                                    rating,
                                    on_accept: move |loan| accept(loan),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
