//! Core address arithmetic.
//!
//! Every address in the simulator is an index into a circular core. This module
//! provides the single normalisation routine used before any cell access:
//! 1. **Wraparound:** Folds arbitrarily large or negative indices into `[0, core_size)`.
//! 2. **Relative offsets:** Adds a signed displacement to an origin without overflow.

/// Normalises a signed index into the range `[0, core_size)`.
///
/// Equivalent to `((x mod core_size) + core_size) mod core_size`, so negative
/// indices wrap from the top of core and large positive indices wrap from the
/// bottom.
///
/// # Arguments
///
/// * `x` - The raw, possibly negative, index.
/// * `core_size` - Number of cells in core. Must be non-zero.
///
/// # Returns
///
/// The normalised cell index.
#[inline(always)]
pub const fn wrap(x: i64, core_size: usize) -> usize {
    x.rem_euclid(core_size as i64) as usize
}

/// Computes `wrap(origin + delta)`.
///
/// `delta` is widened to 64 bits first so that adding a full 32-bit cell value
/// to the origin can never overflow.
#[inline(always)]
pub const fn offset(origin: usize, delta: i32, core_size: usize) -> usize {
    wrap(origin as i64 + delta as i64, core_size)
}
