// Copyright 2025 the Blueprint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid spacing derived from the current scale.

/// Grid spacing, in screen pixels, of the major grid at `scale`.
///
/// The spacing is `100 * m` where `m` is the decimal mantissa of `scale`
/// (`scale = m * 10^e`, `1 <= m < 10`). It therefore stays within
/// `[100, 1000)` and wraps around at every power of ten instead of growing
/// without bound, which keeps the grid readable at any zoom level.
///
/// ```
/// use blueprint::grid_size;
///
/// assert_eq!(grid_size(1.0), 100.0);
/// assert_eq!(grid_size(0.5), 500.0);
/// assert_eq!(grid_size(20.0), 200.0);
/// ```
#[must_use]
pub fn grid_size(scale: f64) -> f64 {
    100.0 * mantissa(scale)
}

/// Decimal mantissa of `v` in `[1, 10)`.
///
/// The mantissa is rounded to 12 significant digits so that values such as
/// `0.3` (stored as `0.29999...`) step like their decimal spelling. Zero,
/// negative and non-finite inputs yield `1`.
#[must_use]
pub fn mantissa(v: f64) -> f64 {
    if !(v.is_finite() && v > 0.0) {
        return 1.0;
    }
    let exponent = v.log10().floor();
    let m = v / 10_f64.powf(exponent);
    let m = (m * 1e11).round() / 1e11;
    if m >= 10.0 {
        m / 10.0
    } else if m < 1.0 {
        m * 10.0
    } else {
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn mantissa_of_decimal_scales() {
        assert!(close(mantissa(1.1), 1.1));
        assert!(close(mantissa(0.3), 3.0));
        assert!(close(mantissa(0.25), 2.5));
        assert!(close(mantissa(10.0), 1.0));
        assert!(close(mantissa(9.99), 9.99));
        assert!(close(mantissa(1000.0), 1.0));
    }

    #[test]
    fn tiny_and_huge_scales_keep_stepping() {
        assert!(close(mantissa(1.5e-7), 1.5));
        assert!(close(mantissa(1e-7), 1.0));
        assert!(close(mantissa(4.2e21), 4.2));
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(mantissa(0.0), 1.0);
        assert_eq!(mantissa(-3.0), 1.0);
        assert_eq!(mantissa(f64::NAN), 1.0);
        assert_eq!(mantissa(f64::INFINITY), 1.0);
    }

    #[test]
    fn grid_size_stays_in_one_decade() {
        let mut scale = 0.1;
        while scale < 10.0 {
            let g = grid_size(scale);
            assert!((100.0..1000.0).contains(&g), "grid size {g} at scale {scale}");
            scale *= 1.1;
        }
    }

    #[test]
    fn grid_size_matches_zoom_steps() {
        assert!(close(grid_size(1.1), 110.0));
        assert!(close(grid_size(0.1), 100.0));
        assert!(close(grid_size(0.99), 990.0));
    }
}
