use crate::{errors::Error, types::MAX_BPS};

/// `amount * bps / 10_000`, floored.
#[inline]
pub fn mul_bps(amount: u64, bps: u32) -> Result<u64, Error> {
    let scaled = u128::from(amount) * u128::from(bps) / u128::from(MAX_BPS);
    u64::try_from(scaled).map_err(|_| Error::Overflow)
}

/// Whether `amount` lies within `tolerance_bps` of `reference` in either direction.
///
/// The boundary is inclusive and evaluated without rounding:
/// `|amount - reference| * 10_000 <= tolerance_bps * reference`.
#[inline]
pub fn within_slippage(amount: u64, reference: u64, tolerance_bps: u32) -> bool {
    let deviation = u128::from(amount.abs_diff(reference));
    deviation * u128::from(MAX_BPS) <= u128::from(tolerance_bps) * u128::from(reference)
}

/// Portion of `total` vested after `elapsed` out of `duration` seconds.
///
/// Linear and floored, except that a completed schedule yields `total` exactly.
pub fn vested_amount(total: u64, elapsed: u64, duration: u64) -> u64 {
    if duration == 0 || elapsed >= duration {
        return total;
    }
    // elapsed < duration, so the quotient is strictly below `total` and fits in u64.
    (u128::from(total) * u128::from(elapsed) / u128::from(duration)) as u64
}
