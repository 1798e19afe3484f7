//! A marketplace listing with a single call to action.

use api::loan::Loan;
use dioxus::prelude::*;

use crate::components::loan_style::loan_type_class;
use crate::components::primitives::BitcoinIcon;
use crate::components::primitives::Button;
use crate::components::primitives::Card;
use crate::components::primitives::CardContent;
use crate::components::primitives::CardFooter;

pub const DEFAULT_RATING: f32 = 4.5;

/// "Loan Request" or "Loan Offer".
pub fn listing_label(loan: &Loan) -> &'static str {
    if loan.is_request() {
        "Loan Request"
    } else {
        "Loan Offer"
    }
}

/// A request is answered by lending, an offer by borrowing.
pub fn accept_label(loan: &Loan) -> &'static str {
    if loan.is_request() {
        "Lend Now"
    } else {
        "Borrow Now"
    }
}

#[component]
pub fn MarketplaceLoanCard(
    loan: Loan,
    #[props(default = DEFAULT_RATING)] rating: f32,
    on_accept: EventHandler<Loan>,
) -> Element {
    let is_request = loan.is_request();
    let type_class = loan_type_class(loan.loan_type);
    let amount = loan.amount.to_string_with_code();
    let interest = loan.interest_label();
    let currency = loan.currency_code().to_string();
    let posted_on = loan.created_on();
    let listing = listing_label(&loan);
    let action = accept_label(&loan);
    let months = loan.duration_months;
    let collateral = loan.collateral_label();

    let (rate_class, button_class, action_icon) = if is_request {
        ("text-primary", "btn-gradient-primary", "ri-hand-coin-line")
    } else {
        ("text-accent", "btn-gradient-accent", "ri-money-dollar-circle-line")
    };

    rsx! {
        div {
            class: "h-full motion-lift-lg",
            Card {
                class: "enhanced-card group overflow-hidden relative h-full flex flex-col",
                div { class: "absolute inset-0 bg-gradient-to-br from-primary/10 via-transparent to-accent/10 opacity-0 group-hover:opacity-100 transition-all duration-500" }
                div { class: "absolute inset-0 rounded-xl bg-gradient-to-r from-primary/20 to-accent/20 opacity-0 group-hover:opacity-100 transition-opacity duration-300 blur-sm" }

                CardContent {
                    class: "p-6 relative z-10 flex-1",
                    div {
                        class: "flex justify-between items-start mb-4",
                        div {
                            class: "space-y-2",
                            span {
                                class: "text-xs py-1.5 px-3 rounded-full font-medium {type_class} shadow-sm inline-block backdrop-blur-sm motion-grow",
                                "{listing}"
                            }
                            h3 {
                                class: "font-semibold flex items-center text-lg group-hover:text-primary transition-colors duration-300 motion-fade-in",
                                BitcoinIcon { class: "text-primary mr-2 group-hover:scale-110 transition-transform duration-300", size: 20 }
                                span { "{amount}" }
                            }
                        }
                        div {
                            class: "text-right",
                            p { class: "text-muted-foreground text-sm mb-1", "Interest Rate" }
                            p {
                                class: "font-bold text-xl {rate_class} group-hover:scale-110 transition-transform duration-200",
                                "{interest}"
                            }
                        }
                    }

                    div {
                        class: "grid grid-cols-3 gap-4 text-sm mb-4",
                        div {
                            class: "text-center p-3 bg-muted/30 rounded-lg backdrop-blur-sm border border-border/30 hover:bg-muted/50 transition-all duration-200 motion-grow",
                            p { class: "font-medium text-foreground text-lg", "{months}" }
                            p { class: "text-xs text-muted-foreground mt-1", "months" }
                        }
                        div {
                            class: "text-center p-3 bg-muted/30 rounded-lg backdrop-blur-sm border border-border/30 hover:bg-muted/50 transition-all duration-200 motion-grow",
                            div {
                                class: "flex items-center justify-center mb-1",
                                i { class: "ri-star-fill text-warning mr-1 text-sm" }
                                span { class: "font-medium text-foreground", "{rating}" }
                            }
                            p { class: "text-xs text-muted-foreground", "rating" }
                        }
                        div {
                            class: "text-center p-3 bg-muted/30 rounded-lg backdrop-blur-sm border border-border/30 hover:bg-muted/50 transition-all duration-200 motion-grow",
                            p { class: "font-medium text-foreground text-lg", "{collateral}" }
                            p { class: "text-xs text-muted-foreground mt-1", "collateral" }
                        }
                    }

                    div {
                        class: "space-y-2 text-xs text-muted-foreground",
                        div {
                            class: "flex items-center justify-between",
                            span { "Currency:" }
                            span { class: "font-medium text-foreground", "{currency}" }
                        }
                        if let Some(date) = posted_on {
                            div {
                                class: "flex items-center justify-between",
                                span { "Posted:" }
                                span { class: "font-medium text-foreground", "{date}" }
                            }
                        }
                    }
                }

                CardFooter {
                    class: "p-6 pt-0 relative z-10",
                    Button {
                        class: "w-full font-medium shadow-md hover:shadow-lg button-hover transition-all duration-300 {button_class}",
                        on_click: move |_| on_accept.call(loan.clone()),
                        i { class: "{action_icon} mr-2" }
                        "{action}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::btc_amount::BtcAmount;
    use api::loan::LoanStatus;
    use api::loan::LoanType;
    use chrono::DateTime;

    fn listing(loan_type: LoanType) -> Loan {
        Loan {
            id: 4,
            user_id: 2,
            counterparty_id: None,
            amount: BtcAmount::from_btc(1),
            interest: 9.0,
            duration_months: 12,
            has_collateral: false,
            status: LoanStatus::Pending,
            loan_type,
            currency: None,
            created_at: DateTime::from_timestamp(1_741_000_000, 0),
        }
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn labels_follow_loan_type() {
        let request = listing(LoanType::Request);
        let offer = listing(LoanType::Offer);
        assert_eq!(listing_label(&request), "Loan Request");
        assert_eq!(accept_label(&request), "Lend Now");
        assert_eq!(listing_label(&offer), "Loan Offer");
        assert_eq!(accept_label(&offer), "Borrow Now");
    }

    #[test]
    fn request_card_markup() {
        let html = render(|| {
            rsx! {
                MarketplaceLoanCard {
                    loan: listing(LoanType::Request),
                    on_accept: |_| {},
                }
            }
        });
        assert!(html.contains("Loan Request"));
        assert!(html.contains("Lend Now"));
        assert!(html.contains("1.00000000 BTC"));
        assert!(html.contains("9%"));
        assert!(html.contains("4.5"));
        assert!(html.contains("BTC"));
        assert!(html.contains("Posted:"));
    }

    #[test]
    fn offer_card_uses_supplied_rating() {
        let html = render(|| {
            rsx! {
                MarketplaceLoanCard {
                    loan: listing(LoanType::Offer),
                    rating: 3.8,
                    on_accept: |_| {},
                }
            }
        });
        assert!(html.contains("Loan Offer"));
        assert!(html.contains("Borrow Now"));
        assert!(html.contains("3.8"));
        assert!(!html.contains("4.5"));
    }
}
