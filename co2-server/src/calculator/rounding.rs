//! Decimal rounding helpers.
//!
//! All figures are rounded by scaling to the requested number of places,
//! rounding to the nearest integer, and scaling back. Ties round away from
//! zero in both directions, so `-0.005` becomes `-0.01` just as `0.005`
//! becomes `0.01`.

/// Round `value` to `places` decimal places, ties away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Round to 4 decimal places.
pub fn round4(value: f64) -> f64 {
    round_to(value, 4)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Rounding is symmetric around zero
        #[test]
        fn symmetric(x in -1.0e6f64..1.0e6) {
            prop_assert_eq!(round2(-x), -round2(x));
            prop_assert_eq!(round4(-x), -round4(x));
        }

        /// Rounding an already-rounded value changes nothing
        #[test]
        fn idempotent(x in -1.0e6f64..1.0e6) {
            let once = round2(x);
            prop_assert_eq!(round2(once), once);
        }

        /// The result stays within half a unit of the input
        #[test]
        fn close_to_input(x in -1.0e6f64..1.0e6) {
            prop_assert!((round2(x) - x).abs() <= 0.005 + 1e-9);
        }
    }
}
