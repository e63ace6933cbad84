use std::fmt::Display;

use log::{debug, info, trace};

use crate::{
    AlertGate, BarIndex, BarSource, Channel, Classification, ConfigPatch, Configuration, Error,
    Levels, LogNotifier, Notifier, OutputChannels, VolumeBar, classify, compute_levels,
};

/// Everything computed for one bar update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarOutput {
    classification: Classification,
    levels: Levels,
    alerted: bool,
}

impl BarOutput {
    #[inline]
    #[must_use]
    pub fn classification(&self) -> Classification {
        self.classification
    }

    #[inline]
    #[must_use]
    pub fn levels(&self) -> Levels {
        self.levels
    }

    /// Whether this update fired an alert.
    #[inline]
    #[must_use]
    pub fn alerted(&self) -> bool {
        self.alerted
    }
}

/// Volume classification with percentage levels and live-bar alerts.
///
/// Each bar's magnitude (volume or ticks) lands in exactly one of the
/// [`Positive`](Channel::Positive), [`Negative`](Channel::Negative),
/// [`Neutral`](Channel::Neutral) or [`Filtered`](Channel::Filtered)
/// channels, the other three getting zero. Two level lines, percentages of
/// the bar's volume, are written alongside. While the live bar forms, an
/// alert fires at most once when its volume reaches the filter threshold.
///
/// Results are kept in [`OutputChannels`], indexed by bar, and can be read
/// back at any time through [`channels`](Self::channels).
///
/// # Driver contract
///
/// Bars are fed in non-decreasing index order. Only the live bar, the highest
/// index so far, may be fed repeatedly as it updates. Re-feeding an older,
/// finished bar with the same data reproduces the same output.
///
/// # Configuration changes
///
/// A configuration change applies to every bar, not only future ones:
/// [`update_configuration`](Self::update_configuration) recalculates all
/// bars the source holds.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use volume_levels::{AlertLog, BarInput, Channel, ConfigPatch, Configuration, VolumeLevels};
///
/// let config = Configuration::builder().top_percent(30).lower_percent(10).build();
/// let mut ind = VolumeLevels::with_notifier(config, AlertLog::new());
///
/// let bars = vec![
///     BarInput::new(Decimal::from(100), Decimal::from(101))
///         .with_volume(Decimal::from(400))
///         .with_delta(Decimal::from(-25)),
/// ];
/// ind.calculate(&bars, 0).unwrap();
/// assert_eq!(ind.channels().value(Channel::Positive, 0), Some(Decimal::from(400)));
/// assert_eq!(ind.channels().value(Channel::TopLevel, 0), Some(Decimal::from(120)));
///
/// // Switching to delta coloring reclassifies bar 0 as well.
/// ind.update_configuration(ConfigPatch::new().delta_colored(true), &bars).unwrap();
/// assert_eq!(ind.channels().value(Channel::Positive, 0), Some(Decimal::ZERO));
/// assert_eq!(ind.channels().value(Channel::Negative, 0), Some(Decimal::from(400)));
/// ```
#[derive(Clone, Debug)]
pub struct VolumeLevels<N = LogNotifier> {
    config: Configuration,
    gate: AlertGate,
    channels: OutputChannels,
    notifier: N,
}

impl VolumeLevels {
    /// Engine that reports alerts through the `log` facade.
    #[must_use]
    pub fn new(config: Configuration) -> Self {
        Self::with_notifier(config, LogNotifier)
    }
}

impl<N: Notifier> VolumeLevels<N> {
    #[must_use]
    pub fn with_notifier(config: Configuration, notifier: N) -> Self {
        let mut channels = OutputChannels::new();
        restyle_levels(&mut channels, &config);

        Self {
            config,
            gate: AlertGate::new(),
            channels,
            notifier,
        }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn channels(&self) -> &OutputChannels {
        &self.channels
    }

    #[inline]
    #[must_use]
    pub fn alert_gate(&self) -> &AlertGate {
        &self.gate
    }

    #[inline]
    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    #[inline]
    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Processes one bar update.
    ///
    /// `live` marks the bar still forming; only the live bar can alert.
    /// Writes all six channels at `index` and returns what was written.
    pub fn compute(&mut self, index: BarIndex, bar: &impl VolumeBar, live: bool) -> BarOutput {
        debug_assert!(
            !live || self.gate.last_bar().is_none_or(|last| last <= index),
            "live bar index must be non-decreasing: last={:?}, got={index}",
            self.gate.last_bar(),
        );

        let levels = self.write_levels(index, bar);

        let alert = self
            .gate
            .evaluate(index, live, bar.volume(), &self.config);
        if let Some(alert) = &alert {
            info!("alert on bar {index}: {}", alert.message());
            self.notifier.notify(alert);
        }

        let classification = self.write_classification(index, bar);

        BarOutput {
            classification,
            levels,
            alerted: alert.is_some(),
        }
    }

    /// Pulls bar `index` from `source` and processes it.
    ///
    /// The bar is live when it is the source's current bar.
    ///
    /// # Errors
    ///
    /// [`Error::MissingBar`] if the source has no bar at `index`.
    pub fn calculate<S>(&mut self, source: &S, index: BarIndex) -> Result<BarOutput, Error>
    where
        S: BarSource + ?Sized,
    {
        let bar = source.bar(index).ok_or(Error::MissingBar { index })?;
        let live = source.current_bar_index() == Some(index);

        Ok(self.compute(index, bar, live))
    }

    /// Recomputes every bar from 0 to the source's current bar.
    ///
    /// The pass rewrites channels and styles only: it fires no alerts and
    /// leaves the alert gate as it was, so a live bar that already alerted
    /// does not alert again. Running it twice with the same configuration
    /// and bars yields the same channels.
    ///
    /// # Errors
    ///
    /// [`Error::MissingBar`] if the source reports a current bar it cannot
    /// return, or has a gap below it. The source is checked before anything
    /// is written, so on error the channels are left as they were.
    pub fn recalculate<S>(&mut self, source: &S) -> Result<(), Error>
    where
        S: BarSource + ?Sized,
    {
        let current = check_source(source)?;

        self.channels.clear();
        restyle_levels(&mut self.channels, &self.config);

        let Some(current) = current else {
            debug!("recalculate: empty source");
            return Ok(());
        };

        debug!("recalculating {} bars with {}", current + 1, self.config);

        for index in 0..=current {
            let bar = source.bar(index).ok_or(Error::MissingBar { index })?;
            self.write_levels(index, bar);
            self.write_classification(index, bar);
        }

        Ok(())
    }

    /// Applies `patch` and, unless it is empty, recalculates every bar.
    ///
    /// Returns whether a recalculation ran.
    ///
    /// # Errors
    ///
    /// See [`recalculate`](Self::recalculate). On error neither the
    /// configuration nor the channels change.
    pub fn update_configuration<S>(&mut self, patch: ConfigPatch, source: &S) -> Result<bool, Error>
    where
        S: BarSource + ?Sized,
    {
        if patch.is_empty() {
            return Ok(false);
        }

        check_source(source)?;
        patch.apply(&mut self.config);
        debug!("configuration updated: {}", self.config);

        self.recalculate(source)?;
        Ok(true)
    }

    /// Replaces the whole configuration and recalculates every bar.
    ///
    /// # Errors
    ///
    /// See [`recalculate`](Self::recalculate).
    pub fn set_config<S>(&mut self, config: Configuration, source: &S) -> Result<(), Error>
    where
        S: BarSource + ?Sized,
    {
        check_source(source)?;
        self.config = config;
        debug!("configuration replaced: {}", self.config);
        self.recalculate(source)
    }

    /// Forgets all bars and re-arms the alert gate. Configuration is kept.
    pub fn reset(&mut self) {
        self.channels.clear();
        self.gate.reset();
    }

    fn write_levels(&mut self, index: BarIndex, bar: &impl VolumeBar) -> Levels {
        let levels = compute_levels(bar.volume(), &self.config);

        self.channels.set_value(Channel::TopLevel, index, levels.top());
        self.channels
            .set_value(Channel::LowerLevel, index, levels.lower());
        restyle_levels(&mut self.channels, &self.config);

        levels
    }

    fn write_classification(&mut self, index: BarIndex, bar: &impl VolumeBar) -> Classification {
        let classification = classify(bar, &self.config);
        trace!("bar {index}: {classification}");

        for channel in Channel::CLASSIFIED {
            self.channels
                .set_value(channel, index, classification.value_for(channel));
        }

        classification
    }
}

/// Current bar index of `source`, once every bar up to it is available.
fn check_source<S>(source: &S) -> Result<Option<BarIndex>, Error>
where
    S: BarSource + ?Sized,
{
    let current = source.current_bar_index();
    if let Some(index) = current.and_then(|last| (0..=last).find(|&i| source.bar(i).is_none())) {
        return Err(Error::MissingBar { index });
    }
    Ok(current)
}

/// Level line labels and colors follow the configuration of the latest call.
fn restyle_levels(channels: &mut OutputChannels, config: &Configuration) {
    channels.restyle_level(
        Channel::TopLevel,
        config.top_color(),
        config.top_percent().to_string(),
    );
    channels.restyle_level(
        Channel::LowerLevel,
        config.lower_color(),
        config.lower_percent().to_string(),
    );
}

impl<N> Display for VolumeLevels<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "VolumeLevels({}, top {}, lower {})",
            self.config.input_kind(),
            self.config.top_percent(),
            self.config.lower_percent()
        )
    }
}
