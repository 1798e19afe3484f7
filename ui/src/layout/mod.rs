//! Application chrome: the desktop sidebar and the mobile top bar.
pub mod mobile_header;
pub mod sidebar;
