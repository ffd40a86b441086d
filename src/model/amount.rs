use std::fmt;

use alloy::primitives::U256;

use crate::calc::CalcError;

/// Largest decimal count whose scale factor still fits in a `U256`.
pub const MAX_DECIMALS: u8 = 77;

/// Decimals used by token amounts (LP tokens, NATION, veNATION).
pub const TOKEN_DECIMALS: u8 = 18;

/// Decimals used by the NATION price feed.
pub const PRICE_DECIMALS: u8 = 2;

/// A non-negative token quantity stored as an integer scaled by `10^decimals`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScaledAmount {
    raw: U256,
    decimals: u8,
}

impl ScaledAmount {
    pub fn new(raw: U256, decimals: u8) -> Result<Self, CalcError> {
        if decimals > MAX_DECIMALS {
            return Err(CalcError::DecimalsOutOfRange { decimals });
        }
        Ok(ScaledAmount { raw, decimals })
    }

    /// An 18-decimal token amount. Always valid.
    pub fn token(raw: U256) -> Self {
        ScaledAmount {
            raw,
            decimals: TOKEN_DECIMALS,
        }
    }

    pub fn zero(decimals: u8) -> Self {
        ScaledAmount {
            raw: U256::ZERO,
            decimals: decimals.min(MAX_DECIMALS),
        }
    }

    pub fn raw(&self) -> U256 {
        self.raw
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Convert to another decimal count. Scaling up is exact; scaling down
    /// truncates the dropped digits.
    pub fn rescale(&self, decimals: u8) -> Result<Self, CalcError> {
        if decimals > MAX_DECIMALS {
            return Err(CalcError::DecimalsOutOfRange { decimals });
        }
        let raw = if decimals >= self.decimals {
            self.raw
                .checked_mul(pow10(decimals - self.decimals))
                .ok_or(CalcError::Overflow)?
        } else {
            self.raw / pow10(self.decimals - decimals)
        };
        Ok(ScaledAmount { raw, decimals })
    }

    pub fn checked_add(&self, other: &ScaledAmount) -> Result<Self, CalcError> {
        self.ensure_same_decimals(other)?;
        let raw = self.raw.checked_add(other.raw).ok_or(CalcError::Overflow)?;
        Ok(ScaledAmount { raw, ..*self })
    }

    fn ensure_same_decimals(&self, other: &ScaledAmount) -> Result<(), CalcError> {
        if self.decimals != other.decimals {
            return Err(CalcError::DecimalsMismatch {
                left: self.decimals,
                right: other.decimals,
            });
        }
        Ok(())
    }
}

/// `10^exp` as a `U256`. Callers keep `exp <= MAX_DECIMALS`.
pub(crate) fn pow10(exp: u8) -> U256 {
    U256::from(10u8).pow(U256::from(exp))
}

// ── Display ──────────────────────────────────────────────────────────

/// Exact decimal rendering with trailing zeros trimmed ("1.5", "0", "12").
impl fmt::Display for ScaledAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.raw.to_string();
        let decimals = self.decimals as usize;
        if decimals == 0 {
            return f.write_str(&digits);
        }
        let padded = format!("{digits:0>width$}", width = decimals + 1);
        let (int_part, frac_part) = padded.split_at(padded.len() - decimals);
        let frac_part = frac_part.trim_end_matches('0');
        if frac_part.is_empty() {
            f.write_str(int_part)
        } else {
            write!(f, "{int_part}.{frac_part}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_trims_trailing_zeros() {
        let a = ScaledAmount::new(U256::from(1_500u64), 3).unwrap();
        assert_eq!(a.to_string(), "1.5");
        let b = ScaledAmount::new(U256::from(5u64), 2).unwrap();
        assert_eq!(b.to_string(), "0.05");
        assert_eq!(ScaledAmount::zero(18).to_string(), "0");
        let c = ScaledAmount::new(U256::from(42u64), 0).unwrap();
        assert_eq!(c.to_string(), "42");
    }

    #[test]
    fn rescale_up_and_down() {
        let price = ScaledAmount::new(U256::from(123u64), 2).unwrap();
        let up = price.rescale(18).unwrap();
        assert_eq!(up.raw(), U256::from(123u64) * pow10(16));
        let down = up.rescale(0).unwrap();
        assert_eq!(down.raw(), U256::from(1u64));
    }

    #[test]
    fn mixed_decimals_are_rejected() {
        let a = ScaledAmount::zero(18);
        let b = ScaledAmount::zero(2);
        assert!(matches!(
            a.checked_add(&b),
            Err(CalcError::DecimalsMismatch { left: 18, right: 2 })
        ));
    }

    #[test]
    fn decimals_above_max_are_rejected() {
        assert!(matches!(
            ScaledAmount::new(U256::ZERO, 78),
            Err(CalcError::DecimalsOutOfRange { decimals: 78 })
        ));
    }
}
