use std::fmt::Display;

use rust_decimal::Decimal;

use crate::{BarIndex, Configuration};

/// Threshold alert raised for a live bar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alert {
    /// Copied from [`Configuration::alert_channel`].
    pub channel: String,
    pub bar: BarIndex,
    /// Bar volume at the moment the alert fired.
    pub volume: Decimal,
}

impl Alert {
    /// Human-readable text, e.g. `Candle volume: 1200`.
    #[must_use]
    pub fn message(&self) -> String {
        format!("Candle volume: {}", self.volume)
    }
}

impl Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] bar {}: {}", self.channel, self.bar, self.message())
    }
}

/// Delivers alerts to the outside world.
///
/// Delivery failures are the notifier's business; the engine neither retries
/// nor observes them.
pub trait Notifier {
    fn notify(&mut self, alert: &Alert);
}

impl<F> Notifier for F
where
    F: FnMut(&Alert),
{
    fn notify(&mut self, alert: &Alert) {
        self(alert);
    }
}

/// Keeps every alert in memory, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertLog {
    alerts: Vec<Alert>,
}

impl AlertLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Removes and returns everything collected so far.
    pub fn drain(&mut self) -> Vec<Alert> {
        std::mem::take(&mut self.alerts)
    }
}

impl Notifier for AlertLog {
    fn notify(&mut self, alert: &Alert) {
        self.alerts.push(alert.clone());
    }
}

/// Writes alerts to the `log` facade at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, alert: &Alert) {
        log::warn!(target: "volume_levels::alert", "{alert}");
    }
}

/// Fires at most one alert per bar.
///
/// A live bar is re-evaluated on every tick while it forms. Without the gate
/// a bar that stays above the threshold would alert on every one of those
/// ticks.
///
/// The gate re-arms the first time it sees a bar index above every index it
/// has seen so far, and disarms once it fires. Older bars fed again never
/// fire and leave the gate untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertGate {
    last_bar: Option<BarIndex>,
    armed: bool,
}

impl Default for AlertGate {
    fn default() -> Self {
        Self {
            last_bar: None,
            armed: true,
        }
    }
}

impl AlertGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest bar index passed to [`evaluate`](Self::evaluate).
    #[inline]
    #[must_use]
    pub fn last_bar(&self) -> Option<BarIndex> {
        self.last_bar
    }

    #[inline]
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Evaluates one bar update and returns the alert to send, if any.
    ///
    /// Fires when the bar is the live one, the gate is armed, alerts are
    /// enabled, the threshold is non-zero and `volume >= threshold`. Note the
    /// inclusive comparison, unlike the classifier's strict filter test.
    pub fn evaluate(
        &mut self,
        index: BarIndex,
        live: bool,
        volume: Decimal,
        config: &Configuration,
    ) -> Option<Alert> {
        match self.last_bar {
            Some(last) if index < last => return None,
            Some(last) if index == last => {}
            _ => {
                self.armed = true;
                self.last_bar = Some(index);
            }
        }

        let threshold = config.filter_value();
        let fire = live
            && self.armed
            && config.use_alerts()
            && !threshold.is_zero()
            && volume >= threshold;

        if !fire {
            return None;
        }

        self.armed = false;
        Some(Alert {
            channel: config.alert_channel().to_owned(),
            bar: index,
            volume,
        })
    }

    /// Back to the initial state: no bar seen, armed.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
