/// Balance unit conversion.
///
/// Providers report balances as hex-encoded wei (the smallest currency
/// unit). The UI shows ether with exactly 4 fractional digits, rounded at
/// the 5th digit. All arithmetic is integer `u128`; a balance that does not
/// parse is a malformed provider response.

use crate::error::WalletError;

const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;
/// One 4-fractional-digit step, in wei.
const STEP: u128 = WEI_PER_ETH / 10_000;

/// Convert hex wei (`"0xde0b6b3a7640000"`) to a decimal ether string with
/// exactly 4 fractional digits.
pub fn wei_hex_to_eth(raw: &str) -> Result<String, WalletError> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let wei = u128::from_str_radix(digits, 16)
        .map_err(|_| WalletError::InvalidResponse(format!("balance {:?} is not hex", raw)))?;

    let scaled = wei.saturating_add(STEP / 2) / STEP;
    Ok(format!("{}.{:04}", scaled / 10_000, scaled % 10_000))
}
