//! Streaming per-bar volume classification for Rust.
//!
//! For every bar, [`VolumeLevels`] puts the bar's volume (or tick count)
//! into exactly one of four channels: positive, negative or neutral by the
//! bar's delta or candle direction, or filtered when it exceeds a threshold.
//! Two level lines, fixed percentages of the bar's volume, are written
//! alongside, and the live bar raises at most one threshold alert.
//!
//! The building blocks are usable on their own: [`classify`],
//! [`compute_levels`] and [`AlertGate`]. All arithmetic is
//! [`rust_decimal::Decimal`].
//!
//! ```
//! use rust_decimal::Decimal;
//! use volume_levels::{BarInput, Channel, Configuration, VolumeLevels};
//!
//! let mut ind = VolumeLevels::new(Configuration::builder().filter(Decimal::from(1_000)).build());
//!
//! let bars = vec![
//!     BarInput::new(Decimal::from(10), Decimal::from(9)).with_volume(Decimal::from(700)),
//!     BarInput::new(Decimal::from(9), Decimal::from(9)).with_volume(Decimal::from(1_500)),
//! ];
//! ind.recalculate(&bars).unwrap();
//!
//! assert_eq!(ind.channels().value(Channel::Negative, 0), Some(Decimal::from(700)));
//! assert_eq!(ind.channels().value(Channel::Filtered, 1), Some(Decimal::from(1_500)));
//! ```

mod alert;
mod bar;
mod channels;
mod classifier;
mod color;
mod config;
mod error;
mod input_kind;
mod levels;
mod volume_levels;

pub use crate::alert::{Alert, AlertGate, AlertLog, LogNotifier, Notifier};
pub use crate::bar::{BarIndex, BarInput, BarSource, VolumeBar};
pub use crate::channels::{Channel, ChannelStyle, OutputChannels, Series, VisualKind};
pub use crate::classifier::{Classification, classify};
pub use crate::color::{Color, ParseColorError};
pub use crate::config::{ConfigPatch, Configuration, ConfigurationBuilder, Percent};
pub use crate::error::Error;
pub use crate::input_kind::InputKind;
pub use crate::levels::{Levels, compute_levels};
pub use crate::volume_levels::{BarOutput, VolumeLevels};

#[cfg(test)]
mod test_util;
