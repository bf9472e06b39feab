//! Amount conversion helpers

use crate::error::{LaunchError, LaunchResult};

/// Scale a human-readable token amount into base units, `amount * 10^decimals`.
///
/// Decimals is a per-mint property fixed at creation, so callers must fetch
/// it from the mint account rather than assuming a value.
pub fn to_base_units(amount: u64, decimals: u8) -> LaunchResult<u64> {
    if amount == 0 {
        return Err(LaunchError::InvalidAmount);
    }
    let factor = 10u64
        .checked_pow(decimals as u32)
        .ok_or(LaunchError::AmountOverflow { amount, decimals })?;
    amount
        .checked_mul(factor)
        .ok_or(LaunchError::AmountOverflow { amount, decimals })
}

/// Render base units back into a human-readable amount string
pub fn format_base_units(base_units: u64, decimals: u8) -> String {
    if decimals == 0 {
        return base_units.to_string();
    }
    let factor = 10u128.pow(decimals as u32);
    let whole = base_units as u128 / factor;
    let frac = base_units as u128 % factor;
    format!("{}.{:0width$}", whole, frac, width = decimals as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_exactly_across_decimals() {
        for decimals in 0..=12u8 {
            let expected = 7u64 * 10u64.pow(decimals as u32);
            assert_eq!(to_base_units(7, decimals).unwrap(), expected);
        }
    }

    #[test]
    fn two_decimal_mint_of_one_hundred() {
        assert_eq!(to_base_units(100, 2).unwrap(), 10_000);
    }

    #[test]
    fn zero_decimals_is_identity() {
        assert_eq!(to_base_units(42, 0).unwrap(), 42);
    }

    #[test]
    fn zero_amount_is_rejected() {
        assert!(matches!(to_base_units(0, 2), Err(LaunchError::InvalidAmount)));
    }

    #[test]
    fn overflow_is_rejected() {
        assert!(matches!(
            to_base_units(u64::MAX, 2),
            Err(LaunchError::AmountOverflow { .. })
        ));
        assert!(matches!(
            to_base_units(2, 20),
            Err(LaunchError::AmountOverflow { .. })
        ));
    }

    #[test]
    fn formats_fractional_amounts() {
        assert_eq!(format_base_units(10_000, 2), "100.00");
        assert_eq!(format_base_units(10_050, 2), "100.50");
        assert_eq!(format_base_units(5, 2), "0.05");
        assert_eq!(format_base_units(42, 0), "42");
    }
}
