use alloy::primitives::U256;

use crate::constants::ETHER_DECIMALS;

/// Render a raw integer amount scaled down by `10^decimals`.
///
/// Integer division only, so every digit of the input survives. The
/// fractional part has trailing zeros stripped but always keeps at
/// least one digit:
///
/// ```
/// # use alloy::primitives::U256;
/// # use ethbal::libs::eth::units::format_units;
/// assert_eq!(format_units(U256::from(1_500_000u64), 6), "1.5");
/// assert_eq!(format_units(U256::ZERO, 6), "0.0");
/// ```
pub fn format_units(value: U256, decimals: u8) -> String {
    if decimals == 0 {
        return format!("{value}.0");
    }
    let scale = U256::from(10u64).pow(U256::from(decimals));
    let whole = value / scale;
    let frac = value % scale;

    let mut frac_str = format!("{:0>width$}", frac.to_string(), width = decimals as usize);
    while frac_str.len() > 1 && frac_str.ends_with('0') {
        frac_str.pop();
    }
    format!("{whole}.{frac_str}")
}

/// Wei to ETH.
pub fn format_ether(wei: U256) -> String {
    format_units(wei, ETHER_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_whole_ether() {
        assert_eq!(format_ether(U256::ZERO), "0.0");
        assert_eq!(format_ether(U256::from(1_000_000_000_000_000_000u128)), "1.0");
        assert_eq!(format_ether(U256::from(42_000_000_000_000_000_000u128)), "42.0");
    }

    #[test]
    fn sub_ether_keeps_every_digit() {
        assert_eq!(
            format_ether(U256::from(123_456_789_012_345_678u128)),
            "0.123456789012345678"
        );
        assert_eq!(format_ether(U256::from(1u64)), "0.000000000000000001");
        assert_eq!(format_ether(U256::from(1_500_000_000_000_000_000u128)), "1.5");
    }

    #[test]
    fn huge_values_stay_exact() {
        // Well past f64 precision and past u128.
        assert_eq!(
            format_ether(U256::MAX),
            "115792089237316195423570985008687907853269984665640564039457.584007913129639935"
        );
    }

    #[test]
    fn other_decimal_widths() {
        assert_eq!(format_units(U256::from(1_234_567u64), 6), "1.234567");
        assert_eq!(format_units(U256::from(100u64), 2), "1.0");
        assert_eq!(format_units(U256::from(7u64), 0), "7.0");
    }

    #[test]
    fn formatting_is_pure() {
        let wei = U256::from(987_654_321_000_000_000u128);
        assert_eq!(format_ether(wei), format_ether(wei));
    }
}
