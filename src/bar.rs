use rust_decimal::Decimal;

/// Zero-based position of a bar within its series.
///
/// Bars are processed in non-decreasing index order. Only the live bar (the
/// highest index seen so far) may be fed more than once in a row.
pub type BarIndex = usize;

/// Per-bar data consumed by the classifier and level computer.
///
/// Implement this on your own candle type to avoid per-tick conversion.
/// [`VolumeLevels`](crate::VolumeLevels) accepts `&impl VolumeBar` and picks
/// the configured [`InputKind`](crate::InputKind) internally.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use volume_levels::VolumeBar;
///
/// struct MyCandle {
///     o: Decimal, c: Decimal,
///     vol: Decimal, trades: Decimal,
///     buys: Decimal, sells: Decimal,
/// }
///
/// impl VolumeBar for MyCandle {
///     fn open(&self) -> Decimal { self.o }
///     fn close(&self) -> Decimal { self.c }
///     fn volume(&self) -> Decimal { self.vol }
///     fn ticks(&self) -> Decimal { self.trades }
///     fn delta(&self) -> Decimal { self.buys - self.sells }
/// }
/// ```
pub trait VolumeBar {
    /// Opening price of the bar.
    fn open(&self) -> Decimal;

    /// Closing (or latest) price of the bar.
    fn close(&self) -> Decimal;

    /// Traded volume of the bar.
    fn volume(&self) -> Decimal;

    /// Number of trades in the bar. Defaults to zero.
    ///
    /// Only read when the input kind is [`InputKind::Ticks`](crate::InputKind::Ticks).
    fn ticks(&self) -> Decimal {
        Decimal::ZERO
    }

    /// Signed buy volume minus sell volume. Defaults to zero.
    ///
    /// Only read by the delta coloring policy. A bar source without
    /// aggressor data classifies every bar as neutral under that policy.
    fn delta(&self) -> Decimal {
        Decimal::ZERO
    }
}

/// Plain [`VolumeBar`] value.
///
/// ```
/// use rust_decimal::Decimal;
/// use volume_levels::{BarInput, VolumeBar};
///
/// let bar = BarInput::new(Decimal::from(100), Decimal::from(101))
///     .with_volume(Decimal::from(1_500))
///     .with_delta(Decimal::from(-40));
///
/// assert_eq!(bar.volume(), Decimal::from(1_500));
/// assert_eq!(bar.ticks(), Decimal::ZERO);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BarInput {
    pub open: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
    pub ticks: Decimal,
    pub delta: Decimal,
}

impl BarInput {
    /// Bar with the given prices and no volume, ticks or delta.
    #[must_use]
    pub fn new(open: Decimal, close: Decimal) -> Self {
        Self {
            open,
            close,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_volume(mut self, volume: Decimal) -> Self {
        self.volume = volume;
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: Decimal) -> Self {
        self.ticks = ticks;
        self
    }

    #[must_use]
    pub fn with_delta(mut self, delta: Decimal) -> Self {
        self.delta = delta;
        self
    }
}

impl VolumeBar for BarInput {
    fn open(&self) -> Decimal {
        self.open
    }

    fn close(&self) -> Decimal {
        self.close
    }

    fn volume(&self) -> Decimal {
        self.volume
    }

    fn ticks(&self) -> Decimal {
        self.ticks
    }

    fn delta(&self) -> Decimal {
        self.delta
    }
}

/// Pull access to the host's bar series.
///
/// The engine never owns bar data; it asks the source for a bar by index and
/// for the index of the live bar, the last and possibly still forming one.
pub trait BarSource {
    type Bar: VolumeBar;

    /// Bar at `index`, or `None` if the series is shorter.
    fn bar(&self, index: BarIndex) -> Option<&Self::Bar>;

    /// Index of the live bar, `None` while the series is empty.
    fn current_bar_index(&self) -> Option<BarIndex>;
}

impl<B: VolumeBar> BarSource for [B] {
    type Bar = B;

    #[inline]
    fn bar(&self, index: BarIndex) -> Option<&B> {
        self.get(index)
    }

    #[inline]
    fn current_bar_index(&self) -> Option<BarIndex> {
        self.len().checked_sub(1)
    }
}

impl<B: VolumeBar> BarSource for Vec<B> {
    type Bar = B;

    #[inline]
    fn bar(&self, index: BarIndex) -> Option<&B> {
        self.as_slice().bar(index)
    }

    #[inline]
    fn current_bar_index(&self) -> Option<BarIndex> {
        self.as_slice().current_bar_index()
    }
}
