//! Token coercion for console commands.
//!
//! Every rule that turns a raw token into a typed executor argument lives here
//! as a named policy, so handlers only decide what to print and which outcome
//! to report.

use nodectl_primitives::{AccountAddress, AddressVersions, Hash256, Network};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Parses an unsigned base-10 integer: one optional `+`, then ASCII digits.
///
/// A minus sign, whitespace and other prefixes are rejected, as is any value
/// that does not fit in `T`.
pub fn parse_decimal<T: FromStr>(token: &str) -> Option<T> {
    let digits = token.strip_prefix('+').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Parses a signed 32-bit integer from the start of `token`.
///
/// Leading whitespace is skipped, one optional sign is accepted and at least
/// one digit must follow. Anything after the digits is ignored. Values outside
/// the `i32` range yield `None`.
pub fn parse_leading_i32(token: &str) -> Option<i32> {
    let s = token.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits].parse().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}

/// Log verbosity accepted by `set_log`, bounded to `0..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogLevel(u16);

/// Why a log level token was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevelError {
    #[error("not a decimal number")]
    Format,
    #[error("level {0} exceeds maximum {max}", max = LogLevel::MAX)]
    Range(u16),
}

impl LogLevel {
    pub const MAX: u16 = 4;

    #[must_use]
    pub const fn new(level: u16) -> Option<Self> {
        if level > Self::MAX {
            None
        } else {
            Some(Self(level))
        }
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Parses a level token. Out-of-range values are errors, never clamped.
    pub fn parse(token: &str) -> Result<Self, LogLevelError> {
        let level: u16 = parse_decimal(token).ok_or(LogLevelError::Format)?;
        Self::new(level).ok_or(LogLevelError::Range(level))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mining thread count. Lenient: anything unusable becomes the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadCount(u64);

impl ThreadCount {
    pub const DEFAULT: u64 = 1;

    /// Missing, unparsable and zero tokens all yield `DEFAULT`.
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        match token.and_then(parse_decimal::<u64>) {
            Some(count) if count > 0 => Self(count),
            _ => Self(Self::DEFAULT),
        }
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Bandwidth limit entered in kB/s, forwarded in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandwidthLimit {
    kbps: i32,
}

impl BandwidthLimit {
    /// Reserved input meaning "use the default limit".
    pub const SENTINEL: i32 = -1;
    pub const DEFAULT_KBPS: i32 = 128;
    pub const BYTES_PER_KB: i64 = 1024;

    /// Parses a limit token, remapping the sentinel to the default.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        parse_leading_i32(token).map(Self::from_kbps)
    }

    #[must_use]
    pub const fn from_kbps(kbps: i32) -> Self {
        if kbps == Self::SENTINEL {
            Self {
                kbps: Self::DEFAULT_KBPS,
            }
        } else {
            Self { kbps }
        }
    }

    #[inline]
    #[must_use]
    pub const fn kbps(self) -> i32 {
        self.kbps
    }

    #[inline]
    #[must_use]
    pub const fn bytes(self) -> i64 {
        self.kbps as i64 * Self::BYTES_PER_KB
    }
}

/// Block selector for `print_block`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockId {
    ByHeight(u64),
    ByHash(Hash256),
}

type BlockIdParser = fn(&str) -> Option<BlockId>;

/// Interpretations tried in order; the first success wins.
const BLOCK_ID_PARSERS: [BlockIdParser; 2] = [BlockId::by_height, BlockId::by_hash];

impl BlockId {
    fn by_height(token: &str) -> Option<Self> {
        parse_decimal(token).map(Self::ByHeight)
    }

    fn by_hash(token: &str) -> Option<Self> {
        Hash256::parse(token).ok().map(Self::ByHash)
    }

    /// Resolves a token as a height, falling back to a digest.
    #[must_use]
    pub fn resolve(token: &str) -> Option<Self> {
        BLOCK_ID_PARSERS.iter().find_map(|parser| parser(token))
    }
}

/// Networks tried in order when decoding an address token.
const ADDRESS_NETWORKS: [Network; 2] = [Network::Main, Network::Test];

/// Decodes an address under the main network, falling back to the test network.
///
/// The returned address carries the network that accepted it.
#[must_use]
pub fn resolve_address(token: &str, versions: &AddressVersions) -> Option<AccountAddress> {
    ADDRESS_NETWORKS
        .iter()
        .find_map(|&network| AccountAddress::decode(token, network, versions).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_decimal_rejects_minus_and_spaces() {
        assert_eq!(parse_decimal::<u64>("42"), Some(42));
        assert_eq!(parse_decimal::<u64>("007"), Some(7));
        assert_eq!(parse_decimal::<u64>("-1"), None);
        assert_eq!(parse_decimal::<u64>("- 1"), None);
        assert_eq!(parse_decimal::<u64>(" 1"), None);
        assert_eq!(parse_decimal::<u64>(""), None);
        assert_eq!(parse_decimal::<u16>("65536"), None);
        assert_eq!(parse_decimal::<u64>("18446744073709551615"), Some(u64::MAX));
        assert_eq!(parse_decimal::<u64>("18446744073709551616"), None);
    }

    #[test]
    fn parse_decimal_accepts_single_plus() {
        assert_eq!(parse_decimal::<u64>("+42"), Some(42));
        assert_eq!(parse_decimal::<u16>("+0"), Some(0));
        assert_eq!(parse_decimal::<u64>("+"), None);
        assert_eq!(parse_decimal::<u64>("++1"), None);
        assert_eq!(parse_decimal::<u64>("+-1"), None);
        assert_eq!(parse_decimal::<u64>("+ 1"), None);
        assert_eq!(LogLevel::parse("+3").map(LogLevel::value), Ok(3));
        assert_eq!(ThreadCount::from_token(Some("+2")).get(), 2);
        assert_eq!(BlockId::resolve("+5"), Some(BlockId::ByHeight(5)));
    }

    #[test]
    fn parse_leading_i32_follows_prefix_rules() {
        assert_eq!(parse_leading_i32("10"), Some(10));
        assert_eq!(parse_leading_i32("-1"), Some(-1));
        assert_eq!(parse_leading_i32("+7"), Some(7));
        assert_eq!(parse_leading_i32("  12"), Some(12));
        assert_eq!(parse_leading_i32("10abc"), Some(10));
        assert_eq!(parse_leading_i32("-2147483648"), Some(i32::MIN));
        assert_eq!(parse_leading_i32("2147483648"), None);
        assert_eq!(parse_leading_i32("foo"), None);
        assert_eq!(parse_leading_i32("-"), None);
        assert_eq!(parse_leading_i32("+-1"), None);
        assert_eq!(parse_leading_i32(""), None);
    }

    #[test]
    fn log_level_bounds() {
        assert_eq!(LogLevel::parse("0").map(LogLevel::value), Ok(0));
        assert_eq!(LogLevel::parse("4").map(LogLevel::value), Ok(4));
        assert_eq!(LogLevel::parse("5"), Err(LogLevelError::Range(5)));
        assert_eq!(LogLevel::parse("x"), Err(LogLevelError::Format));
        assert_eq!(LogLevel::parse("-1"), Err(LogLevelError::Format));
        assert_eq!(LogLevel::parse("70000"), Err(LogLevelError::Format));
    }

    #[test]
    fn thread_count_defaults_leniently() {
        assert_eq!(ThreadCount::from_token(None).get(), 1);
        assert_eq!(ThreadCount::from_token(Some("0")).get(), 1);
        assert_eq!(ThreadCount::from_token(Some("-3")).get(), 1);
        assert_eq!(ThreadCount::from_token(Some("many")).get(), 1);
        assert_eq!(ThreadCount::from_token(Some("3")).get(), 3);
    }

    #[test]
    fn bandwidth_sentinel_maps_to_default() {
        assert_eq!(BandwidthLimit::parse("-1").map(BandwidthLimit::bytes), Some(128 * 1024));
        assert_eq!(BandwidthLimit::parse("10").map(BandwidthLimit::bytes), Some(10 * 1024));
        assert_eq!(BandwidthLimit::parse("-2").map(BandwidthLimit::bytes), Some(-2 * 1024));
        assert_eq!(BandwidthLimit::parse("0").map(BandwidthLimit::bytes), Some(0));
        assert_eq!(BandwidthLimit::parse("foo"), None);
    }

    #[test]
    fn bandwidth_bytes_do_not_overflow() {
        let limit = BandwidthLimit::from_kbps(i32::MAX);
        assert_eq!(limit.bytes(), i64::from(i32::MAX) * 1024);
    }

    #[test]
    fn block_id_prefers_height() {
        assert_eq!(BlockId::resolve("12345"), Some(BlockId::ByHeight(12345)));

        // 64 decimal digits overflow u64 but are valid hex.
        let digits = "1".repeat(64);
        assert_eq!(
            BlockId::resolve(&digits),
            Some(BlockId::ByHash(Hash256::parse(&digits).unwrap()))
        );

        let hex = "ab".repeat(32);
        assert!(matches!(BlockId::resolve(&hex), Some(BlockId::ByHash(_))));
        assert_eq!(BlockId::resolve("not-a-number-or-hash"), None);
    }

    #[test]
    fn address_falls_back_to_test_network() {
        let versions = AddressVersions::default();
        let main = AccountAddress::new(Network::Main, [1; 20]).encode(&versions);
        let test = AccountAddress::new(Network::Test, [2; 20]).encode(&versions);

        assert_eq!(
            resolve_address(&main, &versions).map(|a| a.network()),
            Some(Network::Main)
        );
        assert_eq!(
            resolve_address(&test, &versions).map(|a| a.network()),
            Some(Network::Test)
        );
        assert_eq!(resolve_address("bogus", &versions), None);
    }

    proptest! {
        #[test]
        fn prop_limit_is_kbps_times_1024(kbps in any::<i32>()) {
            let expected = if kbps == -1 { 128 * 1024 } else { i64::from(kbps) * 1024 };
            let limit = BandwidthLimit::parse(&kbps.to_string());
            prop_assert_eq!(limit.map(BandwidthLimit::bytes), Some(expected));
        }

        #[test]
        fn prop_thread_count_is_always_positive(token in ".*") {
            prop_assert!(ThreadCount::from_token(Some(&token)).get() >= 1);
        }

        #[test]
        fn prop_numeric_tokens_resolve_as_height(height in any::<u64>()) {
            prop_assert_eq!(BlockId::resolve(&height.to_string()), Some(BlockId::ByHeight(height)));
        }
    }
}
