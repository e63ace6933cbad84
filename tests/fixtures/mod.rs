#![allow(dead_code)]

use rust_decimal::Decimal;
use serde::{Deserialize, de::DeserializeOwned};
use volume_levels::{Channel, OutputChannels, VolumeBar};

/// Bar parsed from the fixture CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct RefBar {
    #[serde(with = "rust_decimal::serde::str")]
    pub open: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub close: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub volume: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub ticks: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub delta: Decimal,
}

impl VolumeBar for RefBar {
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

/// Expected channel values for one bar.
#[derive(Debug, Deserialize)]
pub struct RefRow {
    pub index: usize,
    #[serde(with = "rust_decimal::serde::str")]
    pub positive: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub negative: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub neutral: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub filtered: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub top: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub lower: Decimal,
}

impl RefRow {
    pub fn expected(&self, channel: Channel) -> Decimal {
        match channel {
            Channel::Positive => self.positive,
            Channel::Negative => self.negative,
            Channel::Neutral => self.neutral,
            Channel::Filtered => self.filtered,
            Channel::TopLevel => self.top,
            Channel::LowerLevel => self.lower,
        }
    }
}

const BARS_PATH: &str = "tests/fixtures/data/bars.csv";

/// Load the reference bar series.
pub fn load_reference_bars() -> Vec<RefBar> {
    load_records(BARS_PATH, "invalid bar record")
}

/// Load expected channel values.
pub fn load_ref_rows(path: &str) -> Vec<RefRow> {
    load_records(path, "invalid reference record")
}

/// Assert every channel at every reference row matches exactly.
pub fn assert_channels_match(channels: &OutputChannels, reference: &[RefRow], context: &str) {
    assert_eq!(
        channels.len(),
        reference.len(),
        "{context}: bar count differs"
    );
    for row in reference {
        for channel in Channel::ALL {
            let actual = channels.value(channel, row.index);
            assert_eq!(
                actual,
                Some(row.expected(channel)),
                "{context}: {channel} at bar {}",
                row.index
            );
        }
    }
}

/// Assert the bucket invariants hold for every bar written.
pub fn assert_exclusive(channels: &OutputChannels) {
    for index in 0..channels.len() {
        let directional: Vec<_> = Channel::DIRECTIONAL
            .iter()
            .filter(|&&c| channels.value(c, index).is_some_and(|v| !v.is_zero()))
            .collect();
        assert!(
            directional.len() <= 1,
            "bar {index}: several directional channels set: {directional:?}"
        );

        let filtered = channels.value(Channel::Filtered, index).unwrap_or_default();
        if !filtered.is_zero() {
            assert!(
                directional.is_empty(),
                "bar {index}: filtered and directional at once"
            );
        }
    }
}

/// Creates growing versions of a bar to simulate live updates.
///
/// Returns 2 intermediate bars (volume and ticks short of the final value,
/// close still at open) followed by the original bar.
pub fn repaint_sequence(bar: &RefBar) -> Vec<RefBar> {
    let two = Decimal::TWO;
    vec![
        // First tick: price has not moved yet
        RefBar {
            close: bar.open,
            volume: bar.volume - two,
            ticks: bar.ticks - two,
            delta: Decimal::ZERO,
            ..bar.clone()
        },
        // Mid-bar: price moved, volume still short
        RefBar {
            volume: bar.volume - Decimal::ONE,
            ticks: bar.ticks - Decimal::ONE,
            ..bar.clone()
        },
        // Final: real values
        bar.clone(),
    ]
}

/// Generate a reference match test for one configuration.
///
/// Usage: `reference_test!(candle, Configuration::default(), "tests/fixtures/data/candle.csv");`
#[allow(unused_macros)]
macro_rules! reference_test {
    ($name:ident, $config:expr, $ref_path:expr) => {
        mod $name {
            use super::fixtures::*;
            use volume_levels::*;

            #[test]
            fn streamed_matches_reference() {
                let bars = load_reference_bars();
                let reference = load_ref_rows($ref_path);
                let mut ind = VolumeLevels::with_notifier($config, AlertLog::new());

                for index in 0..bars.len() {
                    ind.calculate(&bars, index).unwrap();
                }

                assert_channels_match(ind.channels(), &reference, stringify!($name));
                assert_exclusive(ind.channels());
            }

            #[test]
            fn repainted_matches_reference() {
                let bars = load_reference_bars();
                let reference = load_ref_rows($ref_path);
                let mut ind = VolumeLevels::with_notifier($config, AlertLog::new());

                let mut live = Vec::with_capacity(bars.len());
                for (index, bar) in bars.iter().enumerate() {
                    live.push(bar.clone());
                    for tick in repaint_sequence(bar) {
                        live[index] = tick;
                        ind.calculate(&live, index).unwrap();
                    }
                }

                assert_channels_match(ind.channels(), &reference, stringify!($name));
            }

            #[test]
            fn recalculated_matches_reference() {
                let bars = load_reference_bars();
                let reference = load_ref_rows($ref_path);
                let mut ind = VolumeLevels::with_notifier(
                    Configuration::builder().delta_colored(true).build(),
                    AlertLog::new(),
                );
                ind.recalculate(&bars).unwrap();

                ind.set_config($config, &bars).unwrap();

                assert_channels_match(ind.channels(), &reference, stringify!($name));
            }
        }
    };
}

#[allow(unused_imports)]
pub(crate) use reference_test;

fn load_records<D>(path: &str, expect_msg: &str) -> Vec<D>
where
    D: DeserializeOwned,
{
    let mut rdr =
        csv::Reader::from_path(path).unwrap_or_else(|e| panic!("failed to open {path}: {e}"));

    rdr.deserialize().map(|r| r.expect(expect_msg)).collect()
}
