use std::{cmp::Ordering, fmt::Display};

use rust_decimal::Decimal;

use crate::{Channel, Configuration, VolumeBar};

/// Where a bar's magnitude goes.
///
/// `channel` is one of [`Channel::CLASSIFIED`]; the other three classified
/// channels receive zero for the same bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification {
    channel: Channel,
    value: Decimal,
}

impl Classification {
    #[inline]
    #[must_use]
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// The bar's magnitude for the configured input kind.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Value this classification writes into `channel`: the magnitude for
    /// its own channel, zero for the other classified channels.
    #[inline]
    #[must_use]
    pub fn value_for(&self, channel: Channel) -> Decimal {
        if channel == self.channel {
            self.value
        } else {
            Decimal::ZERO
        }
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.channel, self.value)
    }
}

/// Assigns a bar's magnitude to exactly one classified channel.
///
/// 1. The magnitude is the bar's volume or tick count, per
///    [`Configuration::input_kind`].
/// 2. With the filter enabled and a non-zero threshold, a magnitude strictly
///    above [`Configuration::filter_value`] goes to [`Channel::Filtered`] and
///    no directional classification happens.
/// 3. Otherwise the bar is positive, negative or neutral by the sign of its
///    delta (delta policy) or by close versus open (candle policy).
///
/// ```
/// use rust_decimal::Decimal;
/// use volume_levels::{classify, BarInput, Channel, Configuration};
///
/// let bar = BarInput::new(Decimal::from(100), Decimal::from(99))
///     .with_volume(Decimal::from(800))
///     .with_delta(Decimal::from(25));
///
/// let candle = classify(&bar, &Configuration::default());
/// assert_eq!(candle.channel(), Channel::Negative);
///
/// let delta = classify(&bar, &Configuration::builder().delta_colored(true).build());
/// assert_eq!(delta.channel(), Channel::Positive);
/// assert_eq!(delta.value(), Decimal::from(800));
/// ```
#[must_use]
pub fn classify(bar: &impl VolumeBar, config: &Configuration) -> Classification {
    let value = config.input_kind().extract(bar);

    let filter_value = config.filter_value();
    if config.use_filter() && !filter_value.is_zero() && value > filter_value {
        return Classification {
            channel: Channel::Filtered,
            value,
        };
    }

    let direction = if config.delta_colored() {
        bar.delta().cmp(&Decimal::ZERO)
    } else {
        bar.close().cmp(&bar.open())
    };

    let channel = match direction {
        Ordering::Greater => Channel::Positive,
        Ordering::Less => Channel::Negative,
        Ordering::Equal => Channel::Neutral,
    };

    Classification { channel, value }
}
