use std::fmt::Display;

use rust_decimal::Decimal;

use crate::{BarIndex, Color};

/// Named output series written once per bar.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Channel {
    /// Magnitude of bars classified as positive.
    Positive,
    /// Magnitude of bars classified as negative.
    Negative,
    /// Magnitude of bars classified as neutral.
    Neutral,
    /// Magnitude of bars above the filter threshold.
    Filtered,
    /// Top percentage level of the bar's volume.
    TopLevel,
    /// Lower percentage level of the bar's volume.
    LowerLevel,
}

impl Channel {
    pub const ALL: [Self; 6] = [
        Self::Positive,
        Self::Negative,
        Self::Neutral,
        Self::Filtered,
        Self::TopLevel,
        Self::LowerLevel,
    ];

    /// The three mutually exclusive directional buckets.
    pub const DIRECTIONAL: [Self; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    /// The channels a classification writes: directional buckets plus
    /// [`Filtered`](Self::Filtered).
    pub const CLASSIFIED: [Self; 4] = [
        Self::Positive,
        Self::Negative,
        Self::Neutral,
        Self::Filtered,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::Filtered => "Filter",
            Self::TopLevel => "Top",
            Self::LowerLevel => "Low",
        }
    }

    #[inline]
    fn slot(self) -> usize {
        self as usize
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How a renderer should draw a channel.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum VisualKind {
    Histogram,
    Line,
}

/// Display metadata of a channel.
///
/// There is one style per channel, not per bar: restyling a channel
/// restyles every bar already emitted on it.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct ChannelStyle {
    pub color: Color,
    pub visual: VisualKind,
    pub label: String,
    /// Whether zero values are drawn. Classification channels hide them so
    /// only the bucket a bar landed in shows.
    pub show_zero: bool,
}

impl ChannelStyle {
    fn histogram(channel: Channel, color: Color) -> Self {
        Self {
            color,
            visual: VisualKind::Histogram,
            label: channel.name().to_owned(),
            show_zero: false,
        }
    }

    fn line(channel: Channel) -> Self {
        Self {
            color: Color::TRANSPARENT,
            visual: VisualKind::Line,
            label: channel.name().to_owned(),
            show_zero: true,
        }
    }
}

/// Dense per-bar values of one channel.
///
/// Indexed by [`BarIndex`]. Writing past the end pads the gap with zeros,
/// writing an existing index overwrites it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Series {
    values: Vec<Decimal>,
}

impl Series {
    /// Value at `index`, `None` if nothing was written that far.
    #[inline]
    #[must_use]
    pub fn get(&self, index: BarIndex) -> Option<Decimal> {
        self.values.get(index).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Decimal] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.values.iter().copied()
    }

    fn set(&mut self, index: BarIndex, value: Decimal) {
        if index >= self.values.len() {
            self.values.resize(index + 1, Decimal::ZERO);
        }
        self.values[index] = value;
    }
}

/// Output series owned by the engine, pulled by whatever renders them.
///
/// Read-only outside the engine, which keeps at most one classified
/// channel non-zero per bar:
///
/// ```compile_fail
/// use rust_decimal::Decimal;
/// use volume_levels::{Channel, OutputChannels};
///
/// let mut channels = OutputChannels::new();
/// channels.set_value(Channel::Positive, 0, Decimal::ONE);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputChannels {
    series: [Series; 6],
    styles: [ChannelStyle; 6],
}

impl Default for OutputChannels {
    fn default() -> Self {
        Self {
            series: Default::default(),
            styles: [
                ChannelStyle::histogram(Channel::Positive, Color::GREEN),
                ChannelStyle::histogram(Channel::Negative, Color::RED),
                ChannelStyle::histogram(Channel::Neutral, Color::GRAY),
                ChannelStyle::histogram(Channel::Filtered, Color::LIGHT_BLUE),
                ChannelStyle::line(Channel::TopLevel),
                ChannelStyle::line(Channel::LowerLevel),
            ],
        }
    }
}

impl OutputChannels {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `channel` at `index`, `None` if that bar was never written.
    #[inline]
    #[must_use]
    pub fn value(&self, channel: Channel, index: BarIndex) -> Option<Decimal> {
        self.series[channel.slot()].get(index)
    }

    #[inline]
    #[must_use]
    pub fn series(&self, channel: Channel) -> &Series {
        &self.series[channel.slot()]
    }

    #[inline]
    #[must_use]
    pub fn style(&self, channel: Channel) -> &ChannelStyle {
        &self.styles[channel.slot()]
    }

    /// Number of bars written, i.e. one past the highest written index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.iter().map(Series::len).max().unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn set_value(&mut self, channel: Channel, index: BarIndex, value: Decimal) {
        self.series[channel.slot()].set(index, value);
    }

    /// Restyles a level line: new color, label taken from the percentage.
    pub(crate) fn restyle_level(&mut self, channel: Channel, color: Color, label: String) {
        let style = &mut self.styles[channel.slot()];
        style.color = color;
        style.label = label;
    }

    /// Drops every value, keeping styles.
    pub(crate) fn clear(&mut self) {
        for series in &mut self.series {
            series.values.clear();
        }
    }
}
