use std::fmt::Display;

use rust_decimal::Decimal;

use crate::{Color, InputKind};

/// Level percentage, always within `[0, 100]`.
///
/// Construction never fails: values above 100 clamp to 100, values below 0
/// clamp to 0.
///
/// ```
/// use volume_levels::Percent;
///
/// assert_eq!(Percent::new(150).value(), 100);
/// assert_eq!(Percent::new(-5).value(), 0);
/// assert_eq!(Percent::new(37).to_string(), "37%");
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default, Debug)]
pub struct Percent(u8);

impl Percent {
    pub const MAX: Self = Self(100);

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(value: i32) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    #[inline]
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub(crate) fn as_decimal(self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl From<i32> for Percent {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Parameters for [`VolumeLevels`](crate::VolumeLevels).
///
/// Configs are value types: cheap to clone, compare and hash. Build one with
/// [`Configuration::builder`], mutate it with the `set_*` methods, or change
/// a running engine with a [`ConfigPatch`].
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use volume_levels::{Configuration, InputKind};
///
/// let config = Configuration::builder()
///     .delta_colored(true)
///     .input_kind(InputKind::Ticks)
///     .filter(Decimal::from(5_000))
///     .top_percent(130)
///     .build();
///
/// assert!(config.use_filter());
/// assert_eq!(config.top_percent().value(), 100);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct Configuration {
    delta_colored: bool,
    use_filter: bool,
    filter_value: Decimal,
    input_kind: InputKind,
    use_alerts: bool,
    alert_channel: String,
    top_percent: Percent,
    top_color: Color,
    lower_percent: Percent,
    lower_color: Color,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            delta_colored: false,
            use_filter: false,
            filter_value: Decimal::ZERO,
            input_kind: InputKind::Volume,
            use_alerts: false,
            alert_channel: Self::DEFAULT_ALERT_CHANNEL.to_owned(),
            top_percent: Percent::default(),
            top_color: Color::TRANSPARENT,
            lower_percent: Percent::default(),
            lower_color: Color::TRANSPARENT,
        }
    }
}

impl Configuration {
    pub const DEFAULT_ALERT_CHANNEL: &'static str = "alert1";

    /// Returns a new builder with default values.
    #[must_use]
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    /// Classify by delta sign instead of candle direction.
    #[inline]
    #[must_use]
    pub fn delta_colored(&self) -> bool {
        self.delta_colored
    }

    #[inline]
    #[must_use]
    pub fn use_filter(&self) -> bool {
        self.use_filter
    }

    /// Shared threshold of the filter and the alert. Zero disables both.
    #[inline]
    #[must_use]
    pub fn filter_value(&self) -> Decimal {
        self.filter_value
    }

    #[inline]
    #[must_use]
    pub fn input_kind(&self) -> InputKind {
        self.input_kind
    }

    #[inline]
    #[must_use]
    pub fn use_alerts(&self) -> bool {
        self.use_alerts
    }

    /// Identifier handed to the [`Notifier`](crate::Notifier) with each alert.
    #[inline]
    #[must_use]
    pub fn alert_channel(&self) -> &str {
        &self.alert_channel
    }

    #[inline]
    #[must_use]
    pub fn top_percent(&self) -> Percent {
        self.top_percent
    }

    #[inline]
    #[must_use]
    pub fn top_color(&self) -> Color {
        self.top_color
    }

    #[inline]
    #[must_use]
    pub fn lower_percent(&self) -> Percent {
        self.lower_percent
    }

    #[inline]
    #[must_use]
    pub fn lower_color(&self) -> Color {
        self.lower_color
    }

    pub fn set_delta_colored(&mut self, delta_colored: bool) {
        self.delta_colored = delta_colored;
    }

    pub fn set_use_filter(&mut self, use_filter: bool) {
        self.use_filter = use_filter;
    }

    pub fn set_filter_value(&mut self, filter_value: Decimal) {
        self.filter_value = filter_value;
    }

    pub fn set_input_kind(&mut self, input_kind: InputKind) {
        self.input_kind = input_kind;
    }

    pub fn set_use_alerts(&mut self, use_alerts: bool) {
        self.use_alerts = use_alerts;
    }

    pub fn set_alert_channel(&mut self, alert_channel: impl Into<String>) {
        self.alert_channel = alert_channel.into();
    }

    /// Sets the top level percentage, clamped into `[0, 100]`.
    pub fn set_top_percent(&mut self, percent: impl Into<Percent>) {
        self.top_percent = percent.into();
    }

    pub fn set_top_color(&mut self, color: Color) {
        self.top_color = color;
    }

    /// Sets the lower level percentage, clamped into `[0, 100]`.
    pub fn set_lower_percent(&mut self, percent: impl Into<Percent>) {
        self.lower_percent = percent.into();
    }

    pub fn set_lower_color(&mut self, color: Color) {
        self.lower_color = color;
    }
}

impl Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let policy = if self.delta_colored { "Delta" } else { "Candle" };
        write!(
            f,
            "Configuration({}, {policy}, top {}, lower {}",
            self.input_kind, self.top_percent, self.lower_percent
        )?;
        if self.use_filter {
            write!(f, ", filter > {}", self.filter_value)?;
        }
        if self.use_alerts {
            write!(f, ", alerts @ {}", self.alert_channel)?;
        }
        write!(f, ")")
    }
}

/// Builder for [`Configuration`].
///
/// Every field starts at its [`Configuration::default`] value.
pub struct ConfigurationBuilder {
    config: Configuration,
}

impl ConfigurationBuilder {
    fn new() -> Self {
        Self {
            config: Configuration::default(),
        }
    }

    #[must_use]
    pub fn delta_colored(mut self, delta_colored: bool) -> Self {
        self.config.delta_colored = delta_colored;
        self
    }

    /// Enables the filter with the given threshold.
    #[must_use]
    pub fn filter(mut self, filter_value: Decimal) -> Self {
        self.config.use_filter = true;
        self.config.filter_value = filter_value;
        self
    }

    /// Sets the threshold without touching whether the filter is enabled.
    ///
    /// Use this for alert-only setups.
    #[must_use]
    pub fn filter_value(mut self, filter_value: Decimal) -> Self {
        self.config.filter_value = filter_value;
        self
    }

    #[must_use]
    pub fn input_kind(mut self, input_kind: InputKind) -> Self {
        self.config.input_kind = input_kind;
        self
    }

    /// Enables alerts delivered to `channel`.
    #[must_use]
    pub fn alerts(mut self, channel: impl Into<String>) -> Self {
        self.config.use_alerts = true;
        self.config.alert_channel = channel.into();
        self
    }

    #[must_use]
    pub fn top_percent(mut self, percent: impl Into<Percent>) -> Self {
        self.config.top_percent = percent.into();
        self
    }

    #[must_use]
    pub fn top_color(mut self, color: Color) -> Self {
        self.config.top_color = color;
        self
    }

    #[must_use]
    pub fn lower_percent(mut self, percent: impl Into<Percent>) -> Self {
        self.config.lower_percent = percent.into();
        self
    }

    #[must_use]
    pub fn lower_color(mut self, color: Color) -> Self {
        self.config.lower_color = color;
        self
    }

    #[must_use]
    pub fn build(self) -> Configuration {
        self.config
    }
}

/// A batch of configuration changes for a running engine.
///
/// Each field left unset keeps its current value. Applying a non-empty patch
/// through [`VolumeLevels::update_configuration`](crate::VolumeLevels::update_configuration)
/// recalculates every bar processed so far.
///
/// ```
/// use volume_levels::{ConfigPatch, Configuration};
///
/// let mut config = Configuration::default();
/// ConfigPatch::new().delta_colored(true).top_percent(150).apply(&mut config);
///
/// assert!(config.delta_colored());
/// assert_eq!(config.top_percent().value(), 100);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigPatch {
    delta_colored: Option<bool>,
    use_filter: Option<bool>,
    filter_value: Option<Decimal>,
    input_kind: Option<InputKind>,
    use_alerts: Option<bool>,
    alert_channel: Option<String>,
    top_percent: Option<Percent>,
    top_color: Option<Color>,
    lower_percent: Option<Percent>,
    lower_color: Option<Color>,
}

impl ConfigPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn delta_colored(mut self, delta_colored: bool) -> Self {
        self.delta_colored = Some(delta_colored);
        self
    }

    #[must_use]
    pub fn use_filter(mut self, use_filter: bool) -> Self {
        self.use_filter = Some(use_filter);
        self
    }

    #[must_use]
    pub fn filter_value(mut self, filter_value: Decimal) -> Self {
        self.filter_value = Some(filter_value);
        self
    }

    #[must_use]
    pub fn input_kind(mut self, input_kind: InputKind) -> Self {
        self.input_kind = Some(input_kind);
        self
    }

    #[must_use]
    pub fn use_alerts(mut self, use_alerts: bool) -> Self {
        self.use_alerts = Some(use_alerts);
        self
    }

    #[must_use]
    pub fn alert_channel(mut self, alert_channel: impl Into<String>) -> Self {
        self.alert_channel = Some(alert_channel.into());
        self
    }

    #[must_use]
    pub fn top_percent(mut self, percent: impl Into<Percent>) -> Self {
        self.top_percent = Some(percent.into());
        self
    }

    #[must_use]
    pub fn top_color(mut self, color: Color) -> Self {
        self.top_color = Some(color);
        self
    }

    #[must_use]
    pub fn lower_percent(mut self, percent: impl Into<Percent>) -> Self {
        self.lower_percent = Some(percent.into());
        self
    }

    #[must_use]
    pub fn lower_color(mut self, color: Color) -> Self {
        self.lower_color = Some(color);
        self
    }

    /// Writes every set field into `config`.
    pub fn apply(self, config: &mut Configuration) {
        if let Some(v) = self.delta_colored {
            config.set_delta_colored(v);
        }
        if let Some(v) = self.use_filter {
            config.set_use_filter(v);
        }
        if let Some(v) = self.filter_value {
            config.set_filter_value(v);
        }
        if let Some(v) = self.input_kind {
            config.set_input_kind(v);
        }
        if let Some(v) = self.use_alerts {
            config.set_use_alerts(v);
        }
        if let Some(v) = self.alert_channel {
            config.set_alert_channel(v);
        }
        if let Some(v) = self.top_percent {
            config.set_top_percent(v);
        }
        if let Some(v) = self.top_color {
            config.set_top_color(v);
        }
        if let Some(v) = self.lower_percent {
            config.set_lower_percent(v);
        }
        if let Some(v) = self.lower_color {
            config.set_lower_color(v);
        }
    }
}
