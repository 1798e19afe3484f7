//! Status and type to style mappings shared by the loan cards.

use api::loan::LoanStatus;
use api::loan::LoanType;

/// Chip colours for the loan type.
pub fn loan_type_class(loan_type: LoanType) -> &'static str {
    match loan_type {
        LoanType::Request => "bg-primary/15 text-primary border border-primary/30",
        LoanType::Offer => "bg-accent/15 text-accent border border-accent/30",
    }
}

/// Chip colours for the loan status.
pub fn loan_status_badge_class(status: LoanStatus) -> &'static str {
    match status {
        LoanStatus::Pending => "bg-warning/15 text-warning border border-warning/30",
        LoanStatus::Active => "bg-success/15 text-success border border-success/30",
        LoanStatus::Completed => "bg-primary/15 text-primary border border-primary/30",
        LoanStatus::Defaulted => "bg-destructive/15 text-destructive border border-destructive/30",
        LoanStatus::Cancelled => "bg-muted text-muted-foreground border border-border",
    }
}
