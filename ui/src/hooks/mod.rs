pub mod use_auth;
pub mod use_theme;
pub mod use_user_wallet;
