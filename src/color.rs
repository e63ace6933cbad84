use std::{fmt::Display, str::FromStr};

use thiserror::Error;

/// RGBA color attached to an output channel's style.
///
/// Parsed from `#RRGGBB` or `#RRGGBBAA` hex strings; formatted back as
/// `#RRGGBBAA`.
///
/// ```
/// use volume_levels::Color;
///
/// let orange: Color = "#ff8000".parse().unwrap();
/// assert_eq!(orange, Color::rgb(255, 128, 0));
/// assert_eq!(orange.to_string(), "#ff8000ff");
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 128, 0);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const LIGHT_BLUE: Self = Self::rgb(173, 216, 230);

    /// Opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, u8::MAX)
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

/// Error returned when a string is not a `#RRGGBB` or `#RRGGBBAA` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("color must have 6 or 8 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digits in color: {0:?}")]
    InvalidDigit(String),
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ParseColorError::MissingHash(s.to_owned()))?;

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(s.to_owned()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ParseColorError::InvalidDigit(s.to_owned()))
        };

        match hex.len() {
            6 => Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Self::rgba(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)?,
            )),
            len => Err(ParseColorError::InvalidLength(len)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod parse {
        use super::*;

        #[test]
        fn rgb_is_opaque() {
            assert_eq!("#008000".parse::<Color>(), Ok(Color::GREEN));
        }

        #[test]
        fn rgba_keeps_alpha() {
            assert_eq!("#11223380".parse::<Color>(), Ok(Color::rgba(0x11, 0x22, 0x33, 0x80)));
        }

        #[test]
        fn accepts_uppercase() {
            assert_eq!("#ADD8E6".parse::<Color>(), Ok(Color::LIGHT_BLUE));
        }

        #[test]
        fn rejects_missing_hash() {
            assert_eq!(
                "ff0000".parse::<Color>(),
                Err(ParseColorError::MissingHash("ff0000".into()))
            );
        }

        #[test]
        fn rejects_wrong_length() {
            assert_eq!(
                "#fff".parse::<Color>(),
                Err(ParseColorError::InvalidLength(3))
            );
        }

        #[test]
        fn rejects_non_hex() {
            assert_eq!(
                "#gg0000".parse::<Color>(),
                Err(ParseColorError::InvalidDigit("#gg0000".into()))
            );
        }

        #[test]
        fn rejects_sign_prefix() {
            assert!("#+f0000".parse::<Color>().is_err());
        }

        #[test]
        fn rejects_multibyte() {
            assert!("#ff00é0".parse::<Color>().is_err());
        }
    }

    mod display {
        use super::*;

        #[test]
        fn round_trips_through_string() {
            let color = Color::rgba(1, 2, 3, 4);
            assert_eq!(color.to_string(), "#01020304");
            assert_eq!(color.to_string().parse::<Color>(), Ok(color));
        }
    }

    #[test]
    fn default_is_transparent() {
        assert_eq!(Color::default(), Color::TRANSPARENT);
    }
}
