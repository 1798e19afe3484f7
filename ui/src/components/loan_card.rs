//! A card summarising one of the user's own loans.

use api::loan::Loan;
use dioxus::prelude::*;

use crate::components::loan_style::loan_status_badge_class;
use crate::components::loan_style::loan_type_class;
use crate::components::primitives::BitcoinIcon;
use crate::components::primitives::Button;
use crate::components::primitives::Card;
use crate::components::primitives::CardContent;
use crate::components::primitives::CardFooter;

/// "Borrowed" for requests, "Lent" for offers.
pub fn position_label(loan: &Loan) -> &'static str {
    if loan.is_request() {
        "Borrowed"
    } else {
        "Lent"
    }
}

/// The repay action is offered only for active loans the user borrowed,
/// and only when the caller can handle it.
pub fn shows_repay_button(loan: &Loan, has_repay_handler: bool) -> bool {
    has_repay_handler && loan.status.is_active() && loan.is_request()
}

#[derive(Props, PartialEq, Clone)]
pub struct LoanCardProps {
    loan: Loan,
    #[props(optional)]
    on_view_details: Option<EventHandler<Loan>>,
    #[props(optional)]
    on_repay: Option<EventHandler<Loan>>,
}

#[component]
pub fn LoanCard(props: LoanCardProps) -> Element {
    let loan = props.loan.clone();
    let show_repay = shows_repay_button(&loan, props.on_repay.is_some());
    let type_class = loan_type_class(loan.loan_type);
    let status_class = loan_status_badge_class(loan.status);
    let amount = loan.amount.to_string_with_code();
    let status = loan.status.label();
    let interest = loan.interest_label();
    let created_on = loan.created_on();
    let position = position_label(&loan);

    let details_loan = loan.clone();
    let repay_loan = loan.clone();

    rsx! {
        div {
            class: "h-full motion-lift",
            Card {
                class: "h-full cursor-pointer enhanced-card group overflow-hidden relative",
                on_click: move |_| {
                    if let Some(handler) = &props.on_view_details {
                        handler.call(details_loan.clone());
                    }
                },
                div { class: "absolute inset-0 bg-gradient-to-br from-primary/5 via-transparent to-accent/5 opacity-0 group-hover:opacity-100 transition-opacity duration-300" }

                CardContent {
                    class: "p-6 relative z-10",
                    div {
                        class: "flex justify-between items-start mb-4",
                        div {
                            class: "space-y-2",
                            span {
                                class: "text-xs py-1.5 px-3 rounded-full font-medium {type_class} shadow-sm inline-block motion-grow",
                                "{position}"
                            }
                            h3 {
                                class: "font-semibold flex items-center text-lg group-hover:text-primary transition-colors duration-200 motion-fade-in",
                                BitcoinIcon { class: "text-primary mr-2 group-hover:scale-110 transition-transform duration-200", size: 20 }
                                span { "{amount}" }
                            }
                        }
                        div {
                            class: "text-right",
                            p { class: "text-muted-foreground text-sm mb-1", "Status" }
                            p {
                                class: "loan-status text-xs py-1.5 px-3 rounded-full font-medium inline-block {status_class} shadow-sm motion-grow",
                                "{status}"
                            }
                        }
                    }

                    div {
                        class: "grid grid-cols-3 gap-3 text-sm mb-4",
                        StatTile { value: interest, caption: "Interest" }
                        StatTile { value: loan.duration_months.to_string(), caption: "Months" }
                        StatTile { value: loan.collateral_label(), caption: "Collateral" }
                    }

                    if let Some(date) = created_on {
                        p {
                            class: "text-xs text-muted-foreground flex items-center motion-fade-in",
                            i { class: "ri-time-line mr-2 text-primary" }
                            "Created on {date}"
                        }
                    }
                }

                if show_repay {
                    CardFooter {
                        class: "pt-0 pb-4 px-6 relative z-10",
                        div {
                            class: "w-full",
                            Button {
                                class: "repay-button w-full btn-gradient-primary button-hover shadow-md hover:shadow-lg",
                                on_click: move |evt: MouseEvent| {
                                    // Repaying must not also open the details view.
                                    evt.stop_propagation();
                                    if let Some(handler) = &props.on_repay {
                                        handler.call(repay_loan.clone());
                                    }
                                },
                                i { class: "ri-money-dollar-circle-line mr-2" }
                                "Make Repayment"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One of the three figures in the middle of a loan card.
#[component]
pub(crate) fn StatTile(#[props(into)] value: String, #[props(into)] caption: String) -> Element {
    rsx! {
        div {
            class: "text-center p-3 bg-muted/30 rounded-lg backdrop-blur-sm border border-border/30 hover:bg-muted/50 transition-all duration-200 motion-grow",
            p { class: "font-medium text-foreground text-lg", "{value}" }
            p { class: "text-xs text-muted-foreground mt-1", "{caption}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::btc_amount::BtcAmount;
    use api::loan::LoanStatus;
    use api::loan::LoanType;

    fn loan(status: LoanStatus, loan_type: LoanType) -> Loan {
        Loan {
            id: 1,
            user_id: 1,
            counterparty_id: Some(2),
            amount: BtcAmount::from_sats(50_000_000),
            interest: 8.5,
            duration_months: 6,
            has_collateral: true,
            status,
            loan_type,
            currency: None,
            created_at: None,
        }
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn labels_follow_loan_type() {
        assert_eq!(position_label(&loan(LoanStatus::Active, LoanType::Request)), "Borrowed");
        assert_eq!(position_label(&loan(LoanStatus::Active, LoanType::Offer)), "Lent");
    }

    #[test]
    fn repay_needs_handler_active_and_request() {
        let active_request = loan(LoanStatus::Active, LoanType::Request);
        assert!(shows_repay_button(&active_request, true));
        assert!(!shows_repay_button(&active_request, false));
        assert!(!shows_repay_button(&loan(LoanStatus::Active, LoanType::Offer), true));
        assert!(!shows_repay_button(&loan(LoanStatus::Pending, LoanType::Request), true));
        assert!(!shows_repay_button(&loan(LoanStatus::Completed, LoanType::Request), true));
    }

    #[test]
    fn renders_formatted_fields() {
        let html = render(|| {
            rsx! { LoanCard { loan: loan(LoanStatus::Active, LoanType::Request) } }
        });
        assert!(html.contains("Borrowed"));
        assert!(html.contains("0.50000000 BTC"));
        assert!(html.contains("Active"));
        assert!(html.contains("8.5%"));
        assert!(html.contains("Yes"));
        assert!(!html.contains("Created on"));
    }

    #[test]
    fn repay_button_rendered_only_with_handler() {
        let without = render(|| {
            rsx! { LoanCard { loan: loan(LoanStatus::Active, LoanType::Request) } }
        });
        assert!(!without.contains("Make Repayment"));

        let with = render(|| {
            rsx! {
                LoanCard {
                    loan: loan(LoanStatus::Active, LoanType::Request),
                    on_repay: |_| {},
                }
            }
        });
        assert!(with.contains("Make Repayment"));

        let offer = render(|| {
            rsx! {
                LoanCard {
                    loan: loan(LoanStatus::Active, LoanType::Offer),
                    on_repay: |_| {},
                }
            }
        });
        assert!(offer.contains("Lent"));
        assert!(!offer.contains("Make Repayment"));
    }
}
