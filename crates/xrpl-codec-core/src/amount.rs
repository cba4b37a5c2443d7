//! Amounts: native drops and issued decimal values.
//!
//! ## Wire format
//!
//! Every amount starts with a big-endian 64-bit header. Bit 63 is set for
//! issued amounts, bit 62 is set when the amount is not negative.
//!
//! - Native: the low 62 bits are the number of drops.
//! - Issued: bits 54..62 carry `exponent + 97`, the low 54 bits carry the
//!   normalized mantissa, and the header is followed by a 20-byte currency
//!   and a 20-byte issuer. Zero is the bare `0x8000000000000000`.
//!
//! ## Decimal values
//!
//! [`AmountValue`] keeps a mantissa normalized to `[10^15, 10^16)`, an
//! exponent in `[-96, 80]`, a sign and the number of significant digits.

use std::fmt;
use std::str::FromStr;

use crate::address::AccountId;
use crate::binary::{BinaryParser, BytesSink};
use crate::currency::Currency;
use crate::error::{CodecError, Result};

pub const MIN_EXPONENT: i32 = -96;
pub const MAX_EXPONENT: i32 = 80;
pub const MAX_PRECISION: usize = 16;

const MIN_MANTISSA: u64 = 1_000_000_000_000_000;
const MAX_MANTISSA: u64 = 9_999_999_999_999_999;

/// Drops must fit in the 62 value bits of a native header.
pub const MAX_DROPS: u64 = (1 << 62) - 1;

const ISSUED_BIT: u64 = 1 << 63;
const POSITIVE_BIT: u64 = 1 << 62;
const MANTISSA_MASK: u64 = (1 << 54) - 1;
const EXPONENT_BIAS: i32 = 97;

/// Historic offer amount that cannot be represented with 16 digits. It is
/// accepted verbatim so ledgers containing it still round-trip.
const ILLEGAL_OFFER: &str = "1000000000000000100";
const ILLEGAL_OFFER_MANTISSA: u64 = 1_000_000_000_000_000_100;

/// A signed decimal with at most 16 significant digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AmountValue {
    mantissa: u64,
    exponent: i32,
    negative: bool,
    precision: usize,
}

impl AmountValue {
    pub const ZERO: Self = Self {
        mantissa: 0,
        exponent: 0,
        negative: false,
        precision: 1,
    };

    /// The un-normalized illegal-offer sentinel.
    pub const ILLEGAL_OFFER: Self = Self {
        mantissa: ILLEGAL_OFFER_MANTISSA,
        exponent: 0,
        negative: false,
        precision: 17,
    };

    /// Build and normalize a value.
    pub fn new(mantissa: u64, exponent: i32, negative: bool) -> Result<Self> {
        if mantissa == 0 {
            return Ok(Self::ZERO);
        }
        let (mantissa, exponent) = normalize(mantissa, exponent as i64)?;
        Ok(Self {
            mantissa,
            exponent,
            negative,
            precision: significant_digits(mantissa),
        })
    }

    /// Parse `[+-]digits[.digits][(e|E)[+-]digits]`.
    pub fn parse(input: &str) -> Result<Self> {
        let parts = DecimalParts::split(input)?;

        let mut digits = String::with_capacity(parts.integer.len() + parts.fraction.len());
        digits.push_str(parts.integer);
        digits.push_str(parts.fraction);
        let mut exponent = parts.exponent - parts.fraction.len() as i64;

        let leading = digits.trim_start_matches('0');
        let trimmed = leading.trim_end_matches('0');
        if trimmed.is_empty() {
            return Ok(Self::ZERO);
        }
        exponent += (leading.len() - trimmed.len()) as i64;

        let precision = trimmed.len();
        if precision > MAX_PRECISION {
            if input == ILLEGAL_OFFER {
                return Ok(Self::ILLEGAL_OFFER);
            }
            return Err(CodecError::PrecisionError(format!(
                "{} has {} significant digits",
                input, precision
            )));
        }

        // At most 16 digits, always fits.
        let mantissa: u64 = trimmed
            .parse()
            .map_err(|_| CodecError::InvalidAmountValue(input.to_string()))?;
        let (mantissa, exponent) = normalize(mantissa, exponent)?;
        Ok(Self {
            mantissa,
            exponent,
            negative: parts.negative,
            precision,
        })
    }

    pub fn mantissa(&self) -> u64 {
        self.mantissa
    }

    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa == 0
    }

    pub fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    pub fn is_illegal_offer(&self) -> bool {
        *self == Self::ILLEGAL_OFFER
    }

    /// The value as a whole number of drops.
    pub fn to_drops(&self) -> Result<u64> {
        if self.is_zero() {
            return Ok(0);
        }
        let not_integral =
            || CodecError::PrecisionError(format!("{} is not a whole number of drops", self));
        let drops = if self.exponent >= 0 {
            10u64
                .checked_pow(self.exponent as u32)
                .and_then(|scale| self.mantissa.checked_mul(scale))
                .ok_or_else(|| CodecError::PrecisionError(format!("{} drops overflow", self)))?
        } else {
            let scale = 10u64
                .checked_pow(self.exponent.unsigned_abs())
                .ok_or_else(not_integral)?;
            if self.mantissa % scale != 0 {
                return Err(not_integral());
            }
            self.mantissa / scale
        };
        if drops > MAX_DROPS {
            return Err(CodecError::PrecisionError(format!(
                "{} drops exceeds the native maximum",
                drops
            )));
        }
        Ok(drops)
    }
}

/// Scale `mantissa` into `[10^15, 10^16)` and check the exponent range.
fn normalize(mut mantissa: u64, mut exponent: i64) -> Result<(u64, i32)> {
    while mantissa < MIN_MANTISSA {
        mantissa *= 10;
        exponent -= 1;
    }
    while mantissa > MAX_MANTISSA {
        mantissa /= 10;
        exponent += 1;
    }
    if exponent < MIN_EXPONENT as i64 || exponent > MAX_EXPONENT as i64 {
        return Err(CodecError::PrecisionError(format!(
            "exponent {} out of range",
            exponent
        )));
    }
    Ok((mantissa, exponent as i32))
}

fn significant_digits(mantissa: u64) -> usize {
    mantissa.to_string().trim_end_matches('0').len().max(1)
}

/// The lexical pieces of a decimal string.
struct DecimalParts<'a> {
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
    exponent: i64,
}

impl<'a> DecimalParts<'a> {
    fn split(input: &'a str) -> Result<Self> {
        let invalid = || CodecError::InvalidAmountValue(input.to_string());
        let (negative, rest) = match input.as_bytes().first() {
            Some(b'-') => (true, &input[1..]),
            Some(b'+') => (false, &input[1..]),
            _ => (false, input),
        };

        let (number, exponent) = match rest.find(['e', 'E']) {
            Some(i) => (&rest[..i], Some(&rest[i + 1..])),
            None => (rest, None),
        };
        let (integer, fraction) = match number.find('.') {
            Some(i) => {
                let fraction = &number[i + 1..];
                if fraction.is_empty() {
                    return Err(invalid());
                }
                (&number[..i], fraction)
            }
            None => (number, ""),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        // Both digit groups are optional; an input with neither is zero.
        if !all_digits(integer) || !all_digits(fraction) {
            return Err(invalid());
        }

        let exponent = match exponent {
            Some(e) => {
                let digits = e.strip_prefix(['+', '-']).unwrap_or(e);
                if digits.is_empty() || !all_digits(digits) {
                    return Err(invalid());
                }
                e.parse::<i32>().map_err(|_| invalid())? as i64
            }
            None => 0,
        };

        Ok(Self {
            negative,
            integer,
            fraction,
            exponent,
        })
    }
}

impl fmt::Display for AmountValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_illegal_offer() {
            return f.write_str(ILLEGAL_OFFER);
        }
        if self.is_zero() {
            return f.write_str("0");
        }

        let mut e = 16 - self.precision as i32 + self.exponent;
        let digits = self.mantissa.to_string();
        let mut out = digits[..self.precision.min(digits.len())].to_string();
        while e > 0 {
            out.push('0');
            e -= 1;
        }
        let mut decimal_pos = 0usize;
        while e <= 0 {
            decimal_pos += 1;
            e += 1;
        }
        while decimal_pos > out.len() {
            out.insert(0, '0');
        }
        if decimal_pos != 0 {
            let idx = out.len() + 1 - decimal_pos;
            if idx != out.len() {
                out.insert(idx, '.');
            }
        }
        if self.negative {
            out.insert(0, '-');
        }
        f.write_str(&out)
    }
}

impl fmt::Debug for AmountValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AmountValue({}{}e{})",
            if self.negative { "-" } else { "" },
            self.mantissa,
            self.exponent
        )
    }
}

impl FromStr for AmountValue {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A native or issued amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Amount {
    Native {
        drops: u64,
        negative: bool,
    },
    Issued {
        value: AmountValue,
        currency: Currency,
        issuer: AccountId,
    },
}

impl Amount {
    /// A non-negative native amount.
    pub fn from_drops(drops: u64) -> Result<Self> {
        if drops > MAX_DROPS {
            return Err(CodecError::PrecisionError(format!(
                "{} drops exceeds the native maximum",
                drops
            )));
        }
        Ok(Amount::Native {
            drops,
            negative: false,
        })
    }

    /// An issued amount. Currency must not be the native code.
    pub fn issued(value: AmountValue, currency: Currency, issuer: AccountId) -> Result<Self> {
        if currency.is_native() {
            return Err(CodecError::MalformedInput(
                "issued amount with native currency".to_string(),
            ));
        }
        if value.is_illegal_offer() {
            return Err(CodecError::PrecisionError(format!(
                "{} cannot be an issued value",
                value
            )));
        }
        Ok(Amount::Issued {
            value,
            currency,
            issuer,
        })
    }

    /// Parse a native amount from a decimal string of drops.
    pub fn parse_native(s: &str) -> Result<Self> {
        let value = AmountValue::parse(s)?;
        let drops = value.to_drops()?;
        Ok(Amount::Native {
            drops,
            negative: value.is_negative(),
        })
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Amount::Native { .. })
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Amount::Native { drops, negative } => *negative && *drops != 0,
            Amount::Issued { value, .. } => value.is_negative(),
        }
    }

    pub fn currency(&self) -> Currency {
        match self {
            Amount::Native { .. } => Currency::XRP,
            Amount::Issued { currency, .. } => *currency,
        }
    }

    /// The 8-byte header alone.
    pub fn header(&self) -> u64 {
        match self {
            Amount::Native { drops, negative } => {
                let sign = if *negative { 0 } else { POSITIVE_BIT };
                sign | (*drops & MAX_DROPS)
            }
            Amount::Issued { value, .. } => {
                if value.is_zero() {
                    return ISSUED_BIT;
                }
                let sign = if value.is_negative() { 0 } else { POSITIVE_BIT };
                let biased = (value.exponent() + EXPONENT_BIAS) as u64;
                ISSUED_BIT | sign | (biased << 54) | (value.mantissa() & MANTISSA_MASK)
            }
        }
    }

    pub fn from_parser(parser: &mut BinaryParser<'_>) -> Result<Self> {
        let header = u64::from_be_bytes(parser.read_array::<8>()?);
        let negative = header & POSITIVE_BIT == 0;
        if header & ISSUED_BIT == 0 {
            return Ok(Amount::Native {
                drops: header & MAX_DROPS,
                negative,
            });
        }

        let value = if header == ISSUED_BIT {
            AmountValue::ZERO
        } else {
            let biased = ((header >> 54) & 0xFF) as i32;
            let mantissa = header & MANTISSA_MASK;
            AmountValue::new(mantissa, biased - EXPONENT_BIAS, negative)?
        };
        let currency = Currency::from_parser(parser)?;
        let issuer = AccountId::from_parser(parser)?;
        Ok(Amount::Issued {
            value,
            currency,
            issuer,
        })
    }

    pub fn to_bytes_sink<S: BytesSink + ?Sized>(&self, sink: &mut S) {
        sink.put(&self.header().to_be_bytes());
        if let Amount::Issued {
            currency, issuer, ..
        } = self
        {
            currency.to_bytes_sink(sink);
            issuer.to_bytes_sink(sink);
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Amount::Native { .. } => serde_json::Value::String(self.to_string()),
            Amount::Issued {
                value,
                currency,
                issuer,
            } => serde_json::json!({
                "value": value.to_string(),
                "currency": currency.to_json(),
                "issuer": issuer.to_json(),
            }),
        }
    }

    /// Accepts a drops string, a JSON integer of drops, or
    /// `{value, currency, issuer}`.
    pub fn from_json(json: &serde_json::Value) -> Result<Self> {
        use serde_json::Value;

        match json {
            Value::String(s) => Self::parse_native(s),
            Value::Number(n) => {
                if let Some(drops) = n.as_u64() {
                    Self::from_drops(drops)
                } else if let Some(drops) = n.as_i64() {
                    let mut amount = Self::from_drops(drops.unsigned_abs())?;
                    if let Amount::Native { negative, .. } = &mut amount {
                        *negative = drops < 0;
                    }
                    Ok(amount)
                } else {
                    Err(CodecError::InvalidAmountValue(n.to_string()))
                }
            }
            Value::Object(map) => {
                let value = match map.get("value") {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Number(n)) => n.to_string(),
                    _ => return Err(CodecError::InvalidAmountValue(json.to_string())),
                };
                let currency = match map.get("currency") {
                    Some(c) => Currency::from_json(c)?,
                    None => return Err(CodecError::InvalidAmountValue(json.to_string())),
                };
                if currency.is_native() {
                    return Self::parse_native(&value);
                }
                let issuer = match map.get("issuer") {
                    Some(i) => AccountId::from_json(i)?,
                    None => AccountId::NEUTRAL,
                };
                Self::issued(AmountValue::parse(&value)?, currency, issuer)
            }
            _ => Err(CodecError::InvalidAmountValue(json.to_string())),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Native { drops, .. } => {
                if self.is_negative() {
                    write!(f, "-{}", drops)
                } else {
                    write!(f, "{}", drops)
                }
            }
            Amount::Issued {
                value,
                currency,
                issuer,
            } => write!(f, "{}/{}/{}", value, currency, issuer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn value(s: &str) -> AmountValue {
        AmountValue::parse(s).unwrap()
    }

    fn encode_hex(amount: &Amount) -> String {
        let mut out = Vec::new();
        amount.to_bytes_sink(&mut out);
        hex::encode_upper(&out[..8])
    }

    fn usd(v: &str) -> Amount {
        Amount::from_json(&json!({
            "value": v,
            "currency": "USD",
            "issuer": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
        }))
        .unwrap()
    }

    #[test]
    fn test_parse_vectors() {
        let cases: &[(&str, u64, i32, bool, usize)] = &[
            ("0000", 0, 0, false, 1),
            ("-000.1", 1_000_000_000_000_000, -16, true, 1),
            (".1", 1_000_000_000_000_000, -16, false, 1),
            ("9999999999999999", 9_999_999_999_999_999, 0, false, 16),
            ("99999999", 9_999_999_900_000_000, -8, false, 8),
            ("99.123", 9_912_300_000_000_000, -14, false, 5),
            ("0.00123", 1_230_000_000_000_000, -18, false, 3),
            ("120000", 1_200_000_000_000_000, -10, false, 2),
        ];
        for (input, mantissa, exponent, negative, precision) in cases {
            let v = value(input);
            assert_eq!(v.mantissa(), *mantissa, "{}", input);
            assert_eq!(v.exponent(), *exponent, "{}", input);
            assert_eq!(v.is_negative(), *negative, "{}", input);
            assert_eq!(v.precision(), *precision, "{}", input);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(value("0000").to_string(), "0");
        assert_eq!(value("-000.1").to_string(), "-0.1");
        assert_eq!(value("99.123").to_string(), "99.123");
        assert_eq!(value("120000").to_string(), "120000");
        assert_eq!(value("0.00123").to_string(), "0.00123");
        assert_eq!(value("1e3").to_string(), "1000");
        assert_eq!(value("1.5e-2").to_string(), "0.015");
    }

    #[test]
    fn test_invalid_strings() {
        for bad in ["abc", "1.", ".", "1e", "1.2.3", "--1", "1e+", " 1"] {
            assert!(
                matches!(AmountValue::parse(bad), Err(CodecError::InvalidAmountValue(_))),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn test_digitless_strings_are_zero() {
        for empty in ["", "-", "+", "e5", "-E-3"] {
            let parsed = AmountValue::parse(empty).unwrap();
            assert_eq!(parsed, AmountValue::ZERO, "{:?}", empty);
            assert_eq!(parsed.precision(), 1);
            assert!(!parsed.is_negative());
        }
    }

    #[test]
    fn test_precision_error() {
        assert!(matches!(
            AmountValue::parse("12345678901234567"),
            Err(CodecError::PrecisionError(_))
        ));
        assert!(matches!(
            AmountValue::parse("1e200"),
            Err(CodecError::PrecisionError(_))
        ));
    }

    #[test]
    fn test_illegal_offer_sentinel() {
        let v = value("1000000000000000100");
        assert!(v.is_illegal_offer());
        assert_eq!(v.precision(), 17);
        assert_eq!(v.to_string(), "1000000000000000100");

        let native = Amount::parse_native("1000000000000000100").unwrap();
        let mut bytes = Vec::new();
        native.to_bytes_sink(&mut bytes);
        let decoded = Amount::from_parser(&mut BinaryParser::new(&bytes)).unwrap();
        assert_eq!(decoded.to_string(), "1000000000000000100");

        let issued = Amount::issued(v, Currency::parse("USD").unwrap(), AccountId::NEUTRAL);
        assert!(matches!(issued, Err(CodecError::PrecisionError(_))));
    }

    #[test]
    fn test_native_encoding() {
        let amount = Amount::from_json(&json!("1000")).unwrap();
        assert_eq!(encode_hex(&amount), "40000000000003E8");
        let zero = Amount::from_json(&json!("0")).unwrap();
        assert_eq!(encode_hex(&zero), "4000000000000000");
        let negative = Amount::from_json(&json!("-1")).unwrap();
        assert_eq!(encode_hex(&negative), "0000000000000001");
    }

    #[test]
    fn test_issued_encoding() {
        assert_eq!(encode_hex(&usd("1")), "D4838D7EA4C68000");
        assert_eq!(encode_hex(&usd("-1")), "94838D7EA4C68000");
        assert_eq!(encode_hex(&usd("0.1")), "D4438D7EA4C68000");
        assert_eq!(encode_hex(&usd("0")), "8000000000000000");
    }

    #[test]
    fn test_issued_roundtrip() {
        for v in ["1", "-1", "0.1", "0", "99.123", "1234567890123456e-20", "-7e70"] {
            let amount = usd(v);
            let mut bytes = Vec::new();
            amount.to_bytes_sink(&mut bytes);
            assert_eq!(bytes.len(), 48);
            let mut parser = BinaryParser::new(&bytes);
            let decoded = Amount::from_parser(&mut parser).unwrap();
            assert_eq!(decoded, amount, "{}", v);
            assert!(parser.end(None));
        }
    }

    #[test]
    fn test_native_must_be_integral() {
        assert!(matches!(
            Amount::parse_native("1.5"),
            Err(CodecError::PrecisionError(_))
        ));
        assert!(Amount::parse_native("1.0").is_ok());
        assert!(Amount::from_drops(MAX_DROPS + 1).is_err());
    }

    #[test]
    fn test_json_shapes() {
        assert!(Amount::from_json(&json!(10)).unwrap().is_native());
        assert!(matches!(
            Amount::from_json(&json!([1, 2, 3])),
            Err(CodecError::InvalidAmountValue(_))
        ));
        let no_issuer = Amount::from_json(&json!({"value": "1", "currency": "USD"})).unwrap();
        match no_issuer {
            Amount::Issued { issuer, .. } => assert_eq!(issuer, AccountId::NEUTRAL),
            _ => panic!("expected issued amount"),
        }
    }

    #[test]
    fn test_json_roundtrip_issued() {
        let amount = usd("99.123");
        let json = amount.to_json();
        assert_eq!(json["value"], "99.123");
        assert_eq!(json["currency"], "USD");
        assert_eq!(Amount::from_json(&json).unwrap(), amount);
    }
}
