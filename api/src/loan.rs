//! Loan records shared by the server functions and the UI cards.

use chrono::DateTime;
use chrono::Local;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::btc_amount::BtcAmount;

/// Which side of the agreement created the listing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIs,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LoanType {
    /// The creator wants to borrow.
    Request,
    /// The creator is offering to lend.
    Offer,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LoanStatus {
    #[default]
    Pending,
    Active,
    Completed,
    Defaulted,
    Cancelled,
}

impl LoanStatus {
    /// The status name with its first letter upper-cased (e.g., "Active").
    pub fn label(&self) -> String {
        let raw: &'static str = self.into();
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// A borrow/lend agreement as listed on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub id: u64,
    /// The user who created the listing.
    pub user_id: u64,
    /// The user who accepted the listing, once matched.
    #[serde(default)]
    pub counterparty_id: Option<u64>,
    pub amount: BtcAmount,
    /// Annual interest rate in percent.
    pub interest: f64,
    pub duration_months: u32,
    pub has_collateral: bool,
    pub status: LoanStatus,
    #[serde(rename = "type")]
    pub loan_type: LoanType,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Loan {
    pub fn is_request(&self) -> bool {
        self.loan_type.is_request()
    }

    /// Currency code for display, "BTC" when the record has none.
    pub fn currency_code(&self) -> &str {
        match self.currency.as_deref() {
            Some(code) if !code.is_empty() => code,
            _ => "BTC",
        }
    }

    /// Interest rate for display (e.g., "7.5%").
    pub fn interest_label(&self) -> String {
        format!("{}%", self.interest)
    }

    pub fn collateral_label(&self) -> &'static str {
        if self.has_collateral {
            "Yes"
        } else {
            "No"
        }
    }

    /// Creation date in the viewer's local time zone (e.g., "3/14/2025").
    pub fn created_on(&self) -> Option<String> {
        self.created_at
            .map(|ts| ts.with_timezone(&Local).format("%-m/%-d/%Y").to_string())
    }

    /// Whether `user_id` is either party to this loan.
    pub fn involves(&self, user_id: u64) -> bool {
        self.user_id == user_id || self.counterparty_id == Some(user_id)
    }

    /// The borrowing side: the creator of a request, or whoever took an
    /// offer. `None` while an offer is unmatched.
    pub fn borrower_id(&self) -> Option<u64> {
        match self.loan_type {
            LoanType::Request => Some(self.user_id),
            LoanType::Offer => self.counterparty_id,
        }
    }

    /// The lending side: the creator of an offer, or whoever took a request.
    pub fn lender_id(&self) -> Option<u64> {
        match self.loan_type {
            LoanType::Request => self.counterparty_id,
            LoanType::Offer => Some(self.user_id),
        }
    }

    pub fn is_borrowed_by(&self, user_id: u64) -> bool {
        self.borrower_id() == Some(user_id)
    }

    pub fn is_lent_by(&self, user_id: u64) -> bool {
        self.lender_id() == Some(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample() -> Loan {
        Loan {
            id: 7,
            user_id: 1,
            counterparty_id: None,
            amount: BtcAmount::from_sats(25_000_000),
            interest: 7.5,
            duration_months: 12,
            has_collateral: true,
            status: LoanStatus::Active,
            loan_type: LoanType::Request,
            currency: None,
            created_at: None,
        }
    }

    #[test]
    fn status_label_is_capitalized() {
        assert_eq!(LoanStatus::Active.label(), "Active");
        assert_eq!(LoanStatus::Defaulted.label(), "Defaulted");
    }

    #[test]
    fn enums_parse_case_insensitively() {
        assert_eq!(LoanType::from_str("REQUEST").unwrap(), LoanType::Request);
        assert_eq!(LoanStatus::from_str("Completed").unwrap(), LoanStatus::Completed);
        assert!(LoanType::from_str("swap").is_err());
    }

    #[test]
    fn display_helpers() {
        let mut loan = sample();
        assert_eq!(loan.interest_label(), "7.5%");
        assert_eq!(loan.collateral_label(), "Yes");
        assert_eq!(loan.currency_code(), "BTC");
        assert_eq!(loan.created_on(), None);

        loan.interest = 8.0;
        loan.currency = Some(String::new());
        assert_eq!(loan.interest_label(), "8%");
        assert_eq!(loan.currency_code(), "BTC");

        loan.currency = Some("USD".to_string());
        assert_eq!(loan.currency_code(), "USD");
    }

    #[test]
    fn json_uses_schema_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "request");
        assert_eq!(json["status"], "active");
        assert_eq!(json["durationMonths"], 12);
        assert_eq!(json["amount"], 25_000_000);

        let back: Loan = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn roles_follow_type_and_counterparty() {
        // A request someone else created and this user funded.
        let mut loan = sample();
        loan.user_id = 2;
        loan.counterparty_id = Some(1);
        assert!(loan.is_borrowed_by(2));
        assert!(loan.is_lent_by(1));
        assert!(!loan.is_borrowed_by(1));

        // An offer this user took.
        loan.loan_type = LoanType::Offer;
        assert!(loan.is_borrowed_by(1));
        assert!(loan.is_lent_by(2));

        // An unmatched offer has no borrower yet.
        loan.counterparty_id = None;
        assert_eq!(loan.borrower_id(), None);
        assert_eq!(loan.lender_id(), Some(2));
    }

    #[test]
    fn involves_either_party() {
        let mut loan = sample();
        assert!(loan.involves(1));
        assert!(!loan.involves(2));
        loan.counterparty_id = Some(2);
        assert!(loan.involves(2));
    }
}
