//! Provides a safe, self-contained type for representing bitcoin amounts.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use num_traits::Zero;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Number of decimal places in one bitcoin.
pub const BTC_DECIMALS: u32 = 8;

/// Satoshis per bitcoin.
pub const SATS_PER_BTC: i64 = 100_000_000;

/// An error that can occur when parsing a string into a `BtcAmount`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseBtcAmountError {
    /// The string is not in a valid numeric format (e.g., "abc", "1.2.3").
    #[error("invalid bitcoin amount format")]
    InvalidFormat,
    /// The string has more than eight decimal places.
    #[error("too many decimal places for a bitcoin amount")]
    TooManyDecimals,
}

/// A bitcoin amount.
///
/// Stored as a signed count of satoshis so display never suffers from
/// floating-point drift. `Display` renders the bare number with a fixed
/// eight decimals (e.g. "0.50000000").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BtcAmount {
    sats: i64,
}

impl BtcAmount {
    /// Creates an amount directly from satoshis.
    pub const fn from_sats(sats: i64) -> Self {
        Self { sats }
    }

    /// Creates an amount from whole bitcoins.
    pub const fn from_btc(btc: i64) -> Self {
        Self {
            sats: btc * SATS_PER_BTC,
        }
    }

    /// Parses a decimal bitcoin amount such as "0.5", ".75" or "-12.00000001".
    /// Used by the marketplace search box.
    ///
    /// # Examples
    /// ```
    /// use api::btc_amount::{BtcAmount, ParseBtcAmountError};
    /// assert_eq!(BtcAmount::new_from_str("1.5"), Ok(BtcAmount::from_sats(150_000_000)));
    /// assert_eq!(
    ///     BtcAmount::new_from_str("0.000000001").unwrap_err(),
    ///     ParseBtcAmountError::TooManyDecimals
    /// );
    /// ```
    pub fn new_from_str(s: &str) -> Result<Self, ParseBtcAmountError> {
        let s = s.trim();
        let (sign, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, s),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
            return Err(ParseBtcAmountError::InvalidFormat);
        }
        if fraction.len() > BTC_DECIMALS as usize {
            return Err(ParseBtcAmountError::TooManyDecimals);
        }

        // Right-pad the fraction to whole satoshis, then read both halves as
        // one integer.
        let digits = format!("{whole}{fraction:0<width$}", width = BTC_DECIMALS as usize);
        let sats = digits
            .parse::<i64>()
            .map_err(|_| ParseBtcAmountError::InvalidFormat)?;
        Ok(Self { sats: sign * sats })
    }

    /// Formats the amount with the ticker suffix (e.g., "0.50000000 BTC").
    ///
    /// This is the application-wide bitcoin display rule.
    pub fn to_string_with_code(&self) -> String {
        format!("{} BTC", self)
    }
}

impl fmt::Display for BtcAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.sats.unsigned_abs();
        let divisor = SATS_PER_BTC as u64;
        write!(
            f,
            "{}{}.{:0width$}",
            if self.sats < 0 { "-" } else { "" },
            magnitude / divisor,
            magnitude % divisor,
            width = BTC_DECIMALS as usize
        )
    }
}

impl Add for BtcAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            sats: self.sats + rhs.sats,
        }
    }
}

impl Zero for BtcAmount {
    fn zero() -> Self {
        Self::from_sats(0)
    }

    fn is_zero(&self) -> bool {
        self.sats == 0
    }
}

impl Sum for BtcAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, amt| acc + amt)
    }
}

/// Shortens a wallet address to its first 6 and last 4 characters, joined by
/// "...". Addresses of 10 characters or fewer are returned unchanged, and an
/// empty address stays empty.
pub fn shorten_wallet_address(address: &str) -> String {
    let char_count = address.chars().count();
    if char_count <= 10 {
        return address.to_string();
    }

    let head: String = address.chars().take(6).collect();
    let tail: String = address.chars().skip(char_count - 4).collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_eight_fixed_decimals() {
        assert_eq!(BtcAmount::from_sats(50_000_000).to_string(), "0.50000000");
        assert_eq!(BtcAmount::from_btc(2).to_string(), "2.00000000");
        assert_eq!(BtcAmount::from_sats(1).to_string(), "0.00000001");
    }

    #[test]
    fn display_keeps_sign_for_sub_coin_negatives() {
        assert_eq!(BtcAmount::from_sats(-50_000_000).to_string(), "-0.50000000");
        assert_eq!(BtcAmount::from_sats(-150_000_000).to_string(), "-1.50000000");
    }

    #[test]
    fn code_suffix() {
        assert_eq!(BtcAmount::from_sats(25_000_000).to_string_with_code(), "0.25000000 BTC");
    }

    #[test]
    fn parse_accepts_partial_forms() {
        assert_eq!(BtcAmount::new_from_str(".5"), Ok(BtcAmount::from_sats(50_000_000)));
        assert_eq!(BtcAmount::new_from_str("3"), Ok(BtcAmount::from_sats(300_000_000)));
        assert_eq!(BtcAmount::new_from_str("-0.1"), Ok(BtcAmount::from_sats(-10_000_000)));
        assert_eq!(BtcAmount::new_from_str("2."), Ok(BtcAmount::from_sats(200_000_000)));
        assert_eq!(BtcAmount::new_from_str(" 0.00000001 "), Ok(BtcAmount::from_sats(1)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            BtcAmount::new_from_str("1.2.3").unwrap_err(),
            ParseBtcAmountError::InvalidFormat
        );
        assert_eq!(
            BtcAmount::new_from_str("abc").unwrap_err(),
            ParseBtcAmountError::InvalidFormat
        );
        assert_eq!(
            BtcAmount::new_from_str("").unwrap_err(),
            ParseBtcAmountError::InvalidFormat
        );
        assert_eq!(
            BtcAmount::new_from_str("-").unwrap_err(),
            ParseBtcAmountError::InvalidFormat
        );
        assert_eq!(
            BtcAmount::new_from_str("99999999999999").unwrap_err(),
            ParseBtcAmountError::InvalidFormat
        );
        assert_eq!(
            BtcAmount::new_from_str("1.123456789").unwrap_err(),
            ParseBtcAmountError::TooManyDecimals
        );
    }

    #[test]
    fn sum_of_amounts() {
        let total: BtcAmount = [1, 2, 3].into_iter().map(BtcAmount::from_btc).sum();
        assert_eq!(total, BtcAmount::from_btc(6));
        assert!(std::iter::empty::<BtcAmount>().sum::<BtcAmount>().is_zero());
    }

    #[test]
    fn shorten_wallet_address_variants() {
        assert_eq!(shorten_wallet_address(""), "");
        assert_eq!(shorten_wallet_address("bc1qshort"), "bc1qshort");
        assert_eq!(
            shorten_wallet_address("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh"),
            "bc1qxy...0wlh"
        );
    }
}
