use crate::VolumeBar;

use rust_decimal::Decimal;
use std::fmt::{Debug, Display};

/// Magnitude extracted from a [`VolumeBar`] before classification.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub enum InputKind {
    /// Traded volume.
    #[default]
    Volume,
    /// Number of trades.
    Ticks,
}

impl Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl InputKind {
    #[inline]
    pub(crate) fn extract(self, bar: &impl VolumeBar) -> Decimal {
        match self {
            Self::Volume => bar.volume(),
            Self::Ticks => bar.ticks(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::bar;
    use rust_decimal_macros::dec;

    #[test]
    fn extract_volume() {
        let b = bar(dec!(10), dec!(11)).with_volume(dec!(1200)).with_ticks(dec!(35));
        assert_eq!(InputKind::Volume.extract(&b), dec!(1200));
    }

    #[test]
    fn extract_ticks() {
        let b = bar(dec!(10), dec!(11)).with_volume(dec!(1200)).with_ticks(dec!(35));
        assert_eq!(InputKind::Ticks.extract(&b), dec!(35));
    }

    #[test]
    fn volume_is_default() {
        assert_eq!(InputKind::default(), InputKind::Volume);
    }

    #[test]
    fn display_matches_variant() {
        assert_eq!(InputKind::Ticks.to_string(), "Ticks");
    }
}
