//! Utility module with tinct's errors.

use crate::Float;

/// An erroneous color format.
///
/// This error indicates a color string that does not fit the supported
/// grammar, which comprises hashed hexadecimal notation with three or six
/// digits, the `rgb()` and `rgba()` functions with comma-separated integer
/// channels (and a floating point alpha for the latter), and the names of the
/// CSS named colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that neither starts with `#`, `rgb(`, or `rgba(` nor
    /// matches a known color name.
    UnknownFormat,

    /// A hashed color format with an unexpected number of characters. For
    /// example, `#ab` is missing a hexadecimal digit, whereas `#abcd` has one
    /// too many.
    UnexpectedCharacters,

    /// A hashed color format with characters that are not hexadecimal digits,
    /// such as `#0g0`.
    MalformedHex,

    /// A functional color format without the opening parenthesis, such as
    /// `rgb 0,0,0)`.
    NoOpeningParenthesis,

    /// A functional color format without the closing parenthesis, such as
    /// `rgb(0,0,0`.
    NoClosingParenthesis,

    /// A functional color format with too few components, such as `rgb(0,0)`.
    MissingComponent,

    /// A functional color format with too many components, such as
    /// `rgb(0,0,0,0.5)`; the four-component form requires the `rgba` prefix.
    TooManyComponents,

    /// A functional color format whose channel is not an integer in `0..=255`,
    /// such as `rgb(300,0,0)` or `rgb(1.5,0,0)`.
    MalformedChannel,

    /// A functional color format whose alpha is not a floating point number in
    /// `0..=1`, such as `rgba(0,0,0,2)`.
    MalformedAlpha,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => f.write_str(
                "color format should be `#` hex notation, `rgb()`, `rgba()`, or a known color name",
            ),
            UnexpectedCharacters => {
                f.write_str("hex color format should have exactly 3 or 6 digits")
            }
            MalformedHex => {
                f.write_str("hex color format should contain only hexadecimal digits but does not")
            }
            NoOpeningParenthesis => {
                f.write_str("functional color format should include an opening parenthesis but has none")
            }
            NoClosingParenthesis => {
                f.write_str("functional color format should include a closing parenthesis but has none")
            }
            MissingComponent => {
                f.write_str("functional color format should have all components but is missing one")
            }
            TooManyComponents => {
                f.write_str("functional color format should have 3 or 4 components but has more")
            }
            MalformedChannel => {
                f.write_str("color channels should be integers in 0..=255 but are not")
            }
            MalformedAlpha => {
                f.write_str("alpha component should be a floating point number in 0..=1 but is not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

// ====================================================================================================================

/// An out-of-range argument for a color transformation.
///
/// This error indicates a transformation method that received a numeric
/// argument outside its domain. It names the offending parameter and the
/// expected range. The ranges used by this crate are:
///
///   * `0.0..=1.0` for alpha, hue, saturation, and lightness as well as the
///     amount of [`Color::combine`](crate::Color::combine) and
///     [`Color::tint`](crate::Color::tint);
///   * `-1.0..=1.0` for the deltas of [`Color::saturate`](crate::Color::saturate),
///     [`Color::desaturate`](crate::Color::desaturate),
///     [`Color::lighten`](crate::Color::lighten), and
///     [`Color::darken`](crate::Color::darken).
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentError {
    pub name: &'static str,
    pub value: Float,
    pub expected: std::ops::RangeInclusive<Float>,
}

impl ArgumentError {
    /// Create a new argument error for the named parameter.
    pub const fn new(
        name: &'static str,
        value: Float,
        expected: std::ops::RangeInclusive<Float>,
    ) -> Self {
        Self {
            name,
            value,
            expected,
        }
    }
}

impl std::fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} should be in {}..={} but is {}",
            self.name,
            self.expected.start(),
            self.expected.end(),
            self.value
        ))
    }
}

impl std::error::Error for ArgumentError {}

// ====================================================================================================================

/// A structurally invalid color.
///
/// This error indicates a construction input that cannot be turned into a
/// color value: a string that fails the supported grammar, an HSL component or
/// alpha outside the unit range, or an out-of-range transformation argument
/// when resolving a target color.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorError {
    /// A color string that does not match the supported grammar.
    Format(ColorFormatError),

    /// An alpha value outside `0.0..=1.0`.
    InvalidAlpha(Float),

    /// An HSL component outside `0.0..=1.0`.
    InvalidHsl {
        component: &'static str,
        value: Float,
    },

    /// An out-of-range transformation argument.
    Argument(ArgumentError),
}

impl From<ColorFormatError> for ColorError {
    fn from(value: ColorFormatError) -> Self {
        Self::Format(value)
    }
}

impl From<ArgumentError> for ColorError {
    fn from(value: ArgumentError) -> Self {
        Self::Argument(value)
    }
}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Format(error) => error.fmt(f),
            Self::InvalidAlpha(value) => {
                f.write_fmt(format_args!("alpha should be in 0..=1 but is {}", value))
            }
            Self::InvalidHsl { component, value } => f.write_fmt(format_args!(
                "HSL component {} should be in 0..=1 but is {}",
                component, value
            )),
            Self::Argument(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for ColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Format(error) => Some(error),
            Self::Argument(error) => Some(error),
            _ => None,
        }
    }
}
