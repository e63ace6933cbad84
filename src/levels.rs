use std::fmt::Display;

use rust_decimal::Decimal;

use crate::{Configuration, Percent};

/// Top and lower percentage levels of one bar's volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Levels {
    top: Decimal,
    lower: Decimal,
}

impl Levels {
    /// `volume / 100 × top_percent`.
    #[inline]
    #[must_use]
    pub fn top(&self) -> Decimal {
        self.top
    }

    /// `volume / 100 × lower_percent`.
    #[inline]
    #[must_use]
    pub fn lower(&self) -> Decimal {
        self.lower
    }
}

impl Display for Levels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Levels(top: {}, lower: {})", self.top, self.lower)
    }
}

/// Computes both level lines for a bar with the given volume.
///
/// Levels always use volume, whatever the classification input kind.
///
/// # Rounding
///
/// The volume is divided by 100 before being multiplied by the percentage.
/// Decimal arithmetic rounds at 28 fractional digits, so the two orders can
/// differ in the last digit; this order is the one existing charts were
/// produced with.
///
/// ```
/// use rust_decimal::Decimal;
/// use volume_levels::{compute_levels, Configuration};
///
/// let config = Configuration::builder().top_percent(30).lower_percent(10).build();
/// let levels = compute_levels(Decimal::from(100), &config);
///
/// assert_eq!(levels.top(), Decimal::from(30));
/// assert_eq!(levels.lower(), Decimal::from(10));
/// ```
#[must_use]
pub fn compute_levels(volume: Decimal, config: &Configuration) -> Levels {
    Levels {
        top: level(volume, config.top_percent()),
        lower: level(volume, config.lower_percent()),
    }
}

#[inline]
fn level(volume: Decimal, percent: Percent) -> Decimal {
    volume / Decimal::ONE_HUNDRED * percent.as_decimal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn config(top: i32, lower: i32) -> Configuration {
        Configuration::builder()
            .top_percent(top)
            .lower_percent(lower)
            .build()
    }

    #[test]
    fn whole_percentages_of_hundred() {
        let levels = compute_levels(dec!(100), &config(30, 10));
        assert_eq!(levels.top(), dec!(30));
        assert_eq!(levels.lower(), dec!(10));
    }

    #[test]
    fn fractional_result() {
        // 333 / 100 = 3.33, × 33 = 109.89
        let levels = compute_levels(dec!(333), &config(33, 0));
        assert_eq!(levels.top(), dec!(3.33) * dec!(33));
        assert_eq!(levels.top(), dec!(109.89));
        assert_eq!(levels.lower(), Decimal::ZERO);
    }

    #[test]
    fn divides_before_multiplying() {
        // At 28 fractional digits the quotient loses its last two digits
        // before the multiplication, the product-first order does not.
        let volume = Decimal::new(123_456_789, 28);
        let levels = compute_levels(volume, &config(33, 33));

        assert_eq!(levels.top(), volume / dec!(100) * dec!(33));
        assert_ne!(levels.top(), volume * dec!(33) / dec!(100));
        assert_eq!(levels.lower(), levels.top());
    }

    #[test]
    fn full_and_zero_percent() {
        let levels = compute_levels(dec!(1234.5), &config(100, 0));
        assert_eq!(levels.top(), dec!(1234.5));
        assert_eq!(levels.lower(), Decimal::ZERO);
    }

    #[test]
    fn clamped_percentages_apply() {
        let levels = compute_levels(dec!(200), &config(150, -5));
        assert_eq!(levels.top(), dec!(200));
        assert_eq!(levels.lower(), Decimal::ZERO);
    }

    #[test]
    fn zero_volume() {
        let levels = compute_levels(Decimal::ZERO, &config(50, 25));
        assert_eq!(levels, Levels::default());
    }

    #[test]
    fn display() {
        let levels = Levels {
            top: dec!(30),
            lower: dec!(10.5),
        };
        assert_eq!(levels.to_string(), "Levels(top: 30, lower: 10.5)");
    }
}
