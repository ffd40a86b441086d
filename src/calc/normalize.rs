//! Conversions between fixed-point on-chain integers and display floats.

use alloy::primitives::U256;

use super::CalcError;
use crate::model::amount::{MAX_DECIMALS, ScaledAmount, pow10};

/// Decode a scaled amount into a float (`raw / 10^decimals`).
pub fn decode(value: &ScaledAmount) -> f64 {
    decode_raw(value.raw(), value.decimals())
}

/// Decode a raw integer with the given decimal count.
pub fn decode_raw(raw: U256, decimals: u8) -> f64 {
    // Going through the decimal string keeps precision for values above 2^64.
    let int = raw.to_string().parse::<f64>().unwrap_or(f64::INFINITY);
    int / 10f64.powi(decimals as i32)
}

/// Parse a decimal string ("1000.5", "0.01", "42") into a scaled amount.
///
/// Fraction digits beyond `decimals` are truncated. Signs, exponents and
/// anything non-numeric are rejected.
pub fn encode_str(input: &str, decimals: u8) -> Result<ScaledAmount, CalcError> {
    if decimals > MAX_DECIMALS {
        return Err(CalcError::DecimalsOutOfRange { decimals });
    }
    let invalid = || CalcError::InvalidNumericInput {
        input: input.to_string(),
    };

    let trimmed = input.trim();
    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (trimmed, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return Err(invalid());
    }

    let frac_len = frac_part.len().min(decimals as usize);
    let mut digits = String::with_capacity(int_part.len() + decimals as usize);
    digits.push_str(int_part);
    digits.push_str(&frac_part[..frac_len]);
    for _ in frac_len..decimals as usize {
        digits.push('0');
    }
    let digits = digits.trim_start_matches('0');
    let raw = if digits.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(digits, 10).map_err(|_| invalid())?
    };
    ScaledAmount::new(raw, decimals)
}

/// Encode a float, rounding to `decimals` fraction digits.
pub fn encode_f64(value: f64, decimals: u8) -> Result<ScaledAmount, CalcError> {
    if decimals > MAX_DECIMALS {
        return Err(CalcError::DecimalsOutOfRange { decimals });
    }
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::InvalidNumericInput {
            input: value.to_string(),
        });
    }
    let rendered = format!("{value:.prec$}", prec = decimals as usize);
    encode_str(&rendered, decimals)
}

/// Scale factor `10^decimals` as an amount with zero decimals.
pub fn unit(decimals: u8) -> Result<U256, CalcError> {
    if decimals > MAX_DECIMALS {
        return Err(CalcError::DecimalsOutOfRange { decimals });
    }
    Ok(pow10(decimals))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn decode_encode_roundtrip_for_common_decimals() {
        for d in [0u8, 2, 18] {
            for x in [0.0, 1.0, 42.0, 1234.0, 1_000_000.0] {
                let enc = encode_f64(x, d).unwrap();
                assert!(close(decode(&enc), x), "d={d} x={x}");
            }
        }
        for d in [2u8, 18] {
            for x in [0.5, 3.25, 99.99] {
                let enc = encode_f64(x, d).unwrap();
                assert!(close(decode(&enc), x), "d={d} x={x}");
            }
        }
    }

    #[test]
    fn zero_decimals_is_passthrough() {
        let a = encode_str("1500", 0).unwrap();
        assert_eq!(a.raw(), U256::from(1500u64));
        assert_eq!(decode(&a), 1500.0);
        // Fraction is truncated when no decimals are kept.
        assert_eq!(encode_str("7.9", 0).unwrap().raw(), U256::from(7u64));
    }

    #[test]
    fn encode_str_is_exact_for_token_amounts() {
        let a = encode_str("1.5", 18).unwrap();
        assert_eq!(a.raw(), U256::from(1_500_000_000_000_000_000u128));
        let b = encode_str(".25", 2).unwrap();
        assert_eq!(b.raw(), U256::from(25u64));
        let c = encode_str("3.", 2).unwrap();
        assert_eq!(c.raw(), U256::from(300u64));
    }

    #[test]
    fn price_rounds_to_two_decimals() {
        let p = encode_f64(1.239, 2).unwrap();
        assert_eq!(p.raw(), U256::from(124u64));
    }

    #[test]
    fn large_values_decode_without_u128_truncation() {
        let big = encode_str("500000000000000000000000", 18).unwrap();
        assert!(close(decode(&big), 5e23));
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", ".", "abc", "1.2.3", "-1", "1e18", "+5", " 1 2"] {
            assert!(
                matches!(encode_str(bad, 18), Err(CalcError::InvalidNumericInput { .. })),
                "accepted {bad:?}"
            );
        }
        assert!(matches!(
            encode_f64(f64::NAN, 18),
            Err(CalcError::InvalidNumericInput { .. })
        ));
        assert!(matches!(
            encode_f64(-1.0, 2),
            Err(CalcError::InvalidNumericInput { .. })
        ));
        assert!(matches!(
            encode_str("1", 80),
            Err(CalcError::DecimalsOutOfRange { decimals: 80 })
        ));
    }
}
