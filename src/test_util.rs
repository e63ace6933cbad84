// src/test_util.rs

use crate::BarInput;

use rust_decimal::Decimal;

/// Bar with prices only; chain the `with_*` setters to fill the rest.
pub fn bar(open: Decimal, close: Decimal) -> BarInput {
    BarInput::new(open, close)
}

/// Flat bar (open == close, zero delta) with the given volume.
pub fn flat(volume: Decimal) -> BarInput {
    bar(Decimal::ONE_HUNDRED, Decimal::ONE_HUNDRED).with_volume(volume)
}

/// Rising bar (close > open) with the given volume.
pub fn up(volume: Decimal) -> BarInput {
    bar(Decimal::ONE_HUNDRED, Decimal::ONE_HUNDRED + Decimal::ONE).with_volume(volume)
}

/// Falling bar (close < open) with the given volume.
pub fn down(volume: Decimal) -> BarInput {
    bar(Decimal::ONE_HUNDRED, Decimal::ONE_HUNDRED - Decimal::ONE).with_volume(volume)
}
