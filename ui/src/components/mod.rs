//! Shared building blocks for the screens and layout.
//! `primitives` holds the unstyled-by-default surfaces (cards, buttons,
//! sheets); the rest are BitLend-specific widgets built on top of them.
pub mod class_list;
pub mod empty_state;
pub mod input;
pub mod loan_card;
pub mod loan_style;
pub mod marketplace_loan_card;
pub mod metric_card;
pub mod notification_badge;
pub mod primitives;
pub mod theme_toggle;
