use std::sync::OnceLock;

use crate::core::{
    hsl_to_rgb, is_unit_value, parse, rgb_to_hex, rgb_to_hsl, to_eq_bits, ParsedColor,
};
use crate::error::{ArgumentError, ColorError, ColorFormatError};
use crate::names::{NameTable, CSS_NAMES};
use crate::Float;

/// A color in the HSL color model.
///
/// All three components are in unit range, with the hue's unit range covering
/// one full turn of the color wheel. Achromatic colors have zero saturation
/// and, by convention, zero hue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: Float,
    pub s: Float,
    pub l: Float,
}

// --------------------------------------------------------------------------------------------------------------------

/// An accepted construction input for [`Color::new`].
///
/// This enumeration spells out the accepted shapes as a tagged union, one
/// variant per shape, with an explicit dispatcher instead of runtime type
/// inspection. The `From` implementations keep call sites terse: they simply
/// pass a string slice, an array, an [`Hsl`] value, or another color.
#[derive(Clone, Copy, Debug)]
pub enum ColorInput<'a> {
    /// A single channel value, denoting the gray with all channels equal.
    Gray(u8),
    /// An RGB triple.
    Rgb([u8; 3]),
    /// An RGB triple with an embedded alpha.
    Rgba([u8; 3], Float),
    /// An HSL value.
    Hsl(Hsl),
    /// An HSL value with an embedded alpha.
    Hsla(Hsl, Float),
    /// A color string in any of the supported formats.
    Text(&'a str),
    /// Another color value.
    Value(&'a Color),
}

impl From<u8> for ColorInput<'_> {
    fn from(value: u8) -> Self {
        Self::Gray(value)
    }
}

impl From<[u8; 3]> for ColorInput<'_> {
    fn from(value: [u8; 3]) -> Self {
        Self::Rgb(value)
    }
}

impl From<([u8; 3], Float)> for ColorInput<'_> {
    fn from(value: ([u8; 3], Float)) -> Self {
        Self::Rgba(value.0, value.1)
    }
}

impl From<Hsl> for ColorInput<'_> {
    fn from(value: Hsl) -> Self {
        Self::Hsl(value)
    }
}

impl From<(Hsl, Float)> for ColorInput<'_> {
    fn from(value: (Hsl, Float)) -> Self {
        Self::Hsla(value.0, value.1)
    }
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a Color> for ColorInput<'a> {
    fn from(value: &'a Color) -> Self {
        Self::Value(value)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The channel storage of a color.
///
/// Exactly one representation is authoritative; the other is derived on first
/// access and memoized. Since a color is never mutated after construction,
/// the memo stays consistent with its source for the lifetime of the value.
#[derive(Clone, Debug)]
enum Channels {
    Rgb { rgb: [u8; 3], hsl: OnceLock<Hsl> },
    Hsl { hsl: Hsl, rgb: OnceLock<[u8; 3]> },
}

impl Channels {
    fn with_rgb(rgb: [u8; 3]) -> Self {
        Self::Rgb {
            rgb,
            hsl: OnceLock::new(),
        }
    }

    fn with_hsl(hsl: Hsl) -> Self {
        Self::Hsl {
            hsl,
            rgb: OnceLock::new(),
        }
    }

    fn rgb(&self) -> [u8; 3] {
        match self {
            Self::Rgb { rgb, .. } => *rgb,
            Self::Hsl { hsl, rgb } => *rgb.get_or_init(|| hsl_to_rgb(hsl)),
        }
    }

    fn hsl(&self) -> Hsl {
        match self {
            Self::Rgb { rgb, hsl } => *hsl.get_or_init(|| rgb_to_hsl(*rgb)),
            Self::Hsl { hsl, .. } => *hsl,
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// An immutable color value.
///
/// Every color holds either an RGB triple with integer channels in `0..=255`
/// or an HSL triple with unit-range components, plus an alpha in `0..=1`.
/// Whichever representation a color was constructed from stays authoritative;
/// the other is derived lazily through the RGB/HSL conversions and cached.
/// All transformations return a new color and never mutate the receiver,
/// which also makes colors safe to share across threads.
///
/// # Construction
///
/// [`Color::new`] accepts any [`ColorInput`] shape together with an optional
/// alpha. The explicit alpha always takes precedence over an alpha embedded
/// in the input, and an invalid explicit alpha is an error rather than being
/// silently ignored. The named factories [`Color::from_rgb`],
/// [`Color::from_rgba`], [`Color::from_gray`], [`Color::from_hsl`], and
/// [`Color::from_hsla`] cover the common shapes directly, and strings parse
/// through [`Color as FromStr`](struct.Color.html#impl-FromStr-for-Color).
///
/// # Serialization
///
/// The display form is the canonical CSS representation: `transparent` for
/// zero alpha, `rgba(R,G,B,A)` for translucent colors, and otherwise the
/// lowercase hashed hexadecimal form, collapsed to three digits when
/// possible.
///
/// ```
/// # use tinct::Color;
/// # use tinct::error::ColorError;
/// let red = Color::from_rgb(255, 0, 0);
/// assert_eq!(red.to_string(), "#f00");
/// assert_eq!(red.with_alpha(0.5)?.to_string(), "rgba(255,0,0,0.5)");
/// assert_eq!(red.with_alpha(0.0)?.to_string(), "transparent");
/// # Ok::<(), ColorError>(())
/// ```
/// <div class=color-swatch>
/// <div style="background-color: #f00;"></div>
/// </div>
pub struct Color {
    channels: Channels,
    alpha: Float,
}

impl Color {
    /// Instantiate a new color from the given input and optional alpha.
    ///
    /// This method is the explicit dispatcher over the accepted construction
    /// shapes. The explicit alpha, if given, must be in unit range and
    /// overrides any alpha embedded in the input.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tinct::Color;
    /// # use tinct::error::ColorError;
    /// let tomato = Color::new("tomato", None)?;
    /// assert_eq!(tomato.rgb(), [255, 99, 71]);
    ///
    /// let translucent = Color::new([255, 99, 71], Some(0.4))?;
    /// assert_eq!(translucent.to_string(), "rgba(255,99,71,0.4)");
    ///
    /// let copy = Color::new(&tomato, None)?;
    /// assert_eq!(copy, tomato);
    /// # Ok::<(), ColorError>(())
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: tomato;"></div>
    /// </div>
    pub fn new<'a>(
        input: impl Into<ColorInput<'a>>,
        alpha: Option<Float>,
    ) -> Result<Self, ColorError> {
        let alpha = match alpha {
            Some(value) => Some(validated_alpha(value)?),
            None => None,
        };

        match input.into() {
            ColorInput::Gray(value) => Ok(Self {
                channels: Channels::with_rgb([value, value, value]),
                alpha: alpha.unwrap_or(1.0),
            }),
            ColorInput::Rgb(rgb) => Ok(Self {
                channels: Channels::with_rgb(rgb),
                alpha: alpha.unwrap_or(1.0),
            }),
            ColorInput::Rgba(rgb, embedded) => {
                let embedded = validated_alpha(embedded)?;
                Ok(Self {
                    channels: Channels::with_rgb(rgb),
                    alpha: alpha.unwrap_or(embedded),
                })
            }
            ColorInput::Hsl(hsl) => Ok(Self {
                channels: Channels::with_hsl(validated_hsl(hsl)?),
                alpha: alpha.unwrap_or(1.0),
            }),
            ColorInput::Hsla(hsl, embedded) => {
                let embedded = validated_alpha(embedded)?;
                Ok(Self {
                    channels: Channels::with_hsl(validated_hsl(hsl)?),
                    alpha: alpha.unwrap_or(embedded),
                })
            }
            ColorInput::Text(s) => {
                let parsed = parse(s, CSS_NAMES)?;
                Ok(Self::from_parsed(parsed, alpha))
            }
            ColorInput::Value(color) => Ok(Self {
                channels: color.channels.clone(),
                alpha: alpha.unwrap_or(color.alpha),
            }),
        }
    }

    /// Instantiate a new opaque color with the given RGB channels.
    #[inline]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            channels: Channels::with_rgb([r, g, b]),
            alpha: 1.0,
        }
    }

    /// Instantiate a new color with the given RGB channels and alpha.
    ///
    /// The alpha must be in `0..=1`.
    pub fn from_rgba(r: u8, g: u8, b: u8, alpha: Float) -> Result<Self, ColorError> {
        Ok(Self {
            channels: Channels::with_rgb([r, g, b]),
            alpha: validated_alpha(alpha)?,
        })
    }

    /// Instantiate the opaque gray with all channels at the given value.
    ///
    /// ```
    /// # use tinct::Color;
    /// assert_eq!(Color::from_gray(0x66).to_string(), "#666");
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: #666;"></div>
    /// </div>
    #[inline]
    pub fn from_gray(value: u8) -> Self {
        Self::from_rgb(value, value, value)
    }

    /// Instantiate a new opaque color with the given HSL components.
    ///
    /// The components must be in `0..=1`. The HSL representation stays
    /// authoritative; RGB channels are derived on first access.
    pub fn from_hsl(h: Float, s: Float, l: Float) -> Result<Self, ColorError> {
        Ok(Self {
            channels: Channels::with_hsl(validated_hsl(Hsl { h, s, l })?),
            alpha: 1.0,
        })
    }

    /// Instantiate a new color with the given HSL components and alpha.
    pub fn from_hsla(h: Float, s: Float, l: Float, alpha: Float) -> Result<Self, ColorError> {
        Ok(Self {
            channels: Channels::with_hsl(validated_hsl(Hsl { h, s, l })?),
            alpha: validated_alpha(alpha)?,
        })
    }

    /// Parse a color string against the given name table.
    ///
    /// This method is the same as [`Color as
    /// FromStr`](struct.Color.html#impl-FromStr-for-Color), except that named
    /// colors resolve through the given table instead of the built-in
    /// [`CSS_NAMES`](crate::CSS_NAMES).
    pub fn parse_with(s: &str, names: &NameTable) -> Result<Self, ColorFormatError> {
        parse(s, names).map(|parsed| Self::from_parsed(parsed, None))
    }

    /// Access the built-in name table with the standard CSS named colors.
    #[inline]
    pub fn names() -> &'static NameTable {
        CSS_NAMES
    }

    fn from_parsed(parsed: ParsedColor, alpha: Option<Float>) -> Self {
        Self {
            channels: Channels::with_rgb(parsed.rgb()),
            alpha: alpha.or_else(|| parsed.alpha()).unwrap_or(1.0),
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access the RGB channels, deriving them from HSL if necessary.
    ///
    /// The returned array is a copy; the color itself never changes.
    #[inline]
    pub fn rgb(&self) -> [u8; 3] {
        self.channels.rgb()
    }

    /// Access the RGB channels and the alpha.
    #[inline]
    pub fn rgba(&self) -> ([u8; 3], Float) {
        (self.rgb(), self.alpha)
    }

    /// Access the HSL components, deriving them from RGB if necessary.
    ///
    /// ```
    /// # use tinct::Color;
    /// # use tinct::error::ColorFormatError;
    /// use std::str::FromStr;
    ///
    /// let red = Color::from_str("#f00")?;
    /// let hsl = red.hsl();
    /// assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 1.0, 0.5));
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    #[inline]
    pub fn hsl(&self) -> Hsl {
        self.channels.hsl()
    }

    /// Access the alpha.
    #[inline]
    pub fn alpha(&self) -> Float {
        self.alpha
    }

    /// Access the red channel.
    #[inline]
    pub fn red(&self) -> u8 {
        self.rgb()[0]
    }

    /// Access the green channel.
    #[inline]
    pub fn green(&self) -> u8 {
        self.rgb()[1]
    }

    /// Access the blue channel.
    #[inline]
    pub fn blue(&self) -> u8 {
        self.rgb()[2]
    }

    /// Access the hue.
    #[inline]
    pub fn hue(&self) -> Float {
        self.hsl().h
    }

    /// Access the saturation.
    #[inline]
    pub fn saturation(&self) -> Float {
        self.hsl().s
    }

    /// Access the lightness.
    #[inline]
    pub fn lightness(&self) -> Float {
        self.hsl().l
    }

    /// Format this color in hashed hexadecimal notation, ignoring the alpha.
    ///
    /// Unless `full_length` is set, the result collapses to the 3-digit short
    /// form when all three hexadecimal pairs consist of doubled digits.
    ///
    /// ```
    /// # use tinct::Color;
    /// let red = Color::from_rgb(255, 0, 0);
    /// assert_eq!(red.to_hex_format(false), "#f00");
    /// assert_eq!(red.to_hex_format(true), "#ff0000");
    /// ```
    #[inline]
    pub fn to_hex_format(&self, full_length: bool) -> String {
        rgb_to_hex(self.rgb(), full_length)
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Create a new color with the given alpha.
    ///
    /// The alpha must be in `0..=1`; the channels are unchanged.
    pub fn with_alpha(&self, alpha: Float) -> Result<Self, ArgumentError> {
        Ok(Self {
            channels: self.channels.clone(),
            alpha: checked_unit("alpha", alpha)?,
        })
    }

    /// Create a new color with the given red channel, preserving the other
    /// channels and the alpha.
    ///
    /// ```
    /// # use tinct::Color;
    /// let magenta = Color::from_rgb(0, 0, 255).with_red(255);
    /// assert_eq!(magenta.to_string(), "#f0f");
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: #f0f;"></div>
    /// </div>
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_red(&self, value: u8) -> Self {
        let [_, g, b] = self.rgb();
        Self {
            channels: Channels::with_rgb([value, g, b]),
            alpha: self.alpha,
        }
    }

    /// Create a new color with the given green channel, preserving the other
    /// channels and the alpha.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_green(&self, value: u8) -> Self {
        let [r, _, b] = self.rgb();
        Self {
            channels: Channels::with_rgb([r, value, b]),
            alpha: self.alpha,
        }
    }

    /// Create a new color with the given blue channel, preserving the other
    /// channels and the alpha.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn with_blue(&self, value: u8) -> Self {
        let [r, g, _] = self.rgb();
        Self {
            channels: Channels::with_rgb([r, g, value]),
            alpha: self.alpha,
        }
    }

    /// Create a new color with the given hue, preserving saturation,
    /// lightness, and alpha.
    ///
    /// The hue must be in `0..=1`. Since achromatic colors have zero
    /// saturation, setting their hue does not change their channels.
    ///
    /// ```
    /// # use tinct::Color;
    /// # use tinct::error::ArgumentError;
    /// use std::str::FromStr;
    ///
    /// let blue = Color::from_str("#f00").unwrap().with_hue(2.0 / 3.0)?;
    /// assert_eq!(blue.to_string(), "#00f");
    /// # Ok::<(), ArgumentError>(())
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: #00f;"></div>
    /// </div>
    pub fn with_hue(&self, value: Float) -> Result<Self, ArgumentError> {
        let value = checked_unit("hue", value)?;
        let hsl = self.hsl();
        Ok(self.derive_hsl(Hsl { h: value, ..hsl }))
    }

    /// Create a new color with the given saturation, preserving hue,
    /// lightness, and alpha. The saturation must be in `0..=1`.
    pub fn with_saturation(&self, value: Float) -> Result<Self, ArgumentError> {
        let value = checked_unit("saturation", value)?;
        let hsl = self.hsl();
        Ok(self.derive_hsl(Hsl { s: value, ..hsl }))
    }

    /// Create a new color with the given lightness, preserving hue,
    /// saturation, and alpha. The lightness must be in `0..=1`.
    pub fn with_lightness(&self, value: Float) -> Result<Self, ArgumentError> {
        let value = checked_unit("lightness", value)?;
        let hsl = self.hsl();
        Ok(self.derive_hsl(Hsl { l: value, ..hsl }))
    }

    /// Create a new color with the hue rotated by the given delta.
    ///
    /// The delta may have any magnitude and sign; the resulting hue wraps
    /// into unit range, so a full revolution is the identity and shifting by
    /// 1.1 is the same as shifting by 0.1.
    ///
    /// ```
    /// # use tinct::Color;
    /// let yellow = Color::from_rgb(255, 255, 0);
    /// assert_eq!(yellow.shift_hue(0.25).to_string(), "#00ff7f");
    /// assert_eq!(yellow.shift_hue(1.0), yellow);
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn shift_hue(&self, delta: Float) -> Self {
        self.shifted_hsl(delta, 0.0, 0.0)
    }

    /// Create a new color with hue, saturation, and lightness shifted by the
    /// given deltas.
    ///
    /// The hue delta may have any magnitude and wraps; the saturation and
    /// lightness deltas must be in `-1..=1` and the shifted components clamp
    /// into unit range.
    pub fn shift_hsl(&self, dh: Float, ds: Float, dl: Float) -> Result<Self, ArgumentError> {
        let ds = checked_delta("saturation delta", ds)?;
        let dl = checked_delta("lightness delta", dl)?;
        Ok(self.shifted_hsl(dh, ds, dl))
    }

    /// Create a new color with the saturation increased by the given delta.
    ///
    /// The delta must be in `-1..=1`; the shifted saturation clamps into unit
    /// range.
    pub fn saturate(&self, delta: Float) -> Result<Self, ArgumentError> {
        let delta = checked_delta("saturate_by", delta)?;
        Ok(self.shifted_hsl(0.0, delta, 0.0))
    }

    /// Create a new color with the saturation decreased by the given delta.
    ///
    /// The delta must be in `-1..=1`; the shifted saturation clamps into unit
    /// range.
    ///
    /// ```
    /// # use tinct::Color;
    /// # use tinct::error::ArgumentError;
    /// let gray = Color::from_rgb(170, 85, 85).desaturate(1.0)?;
    /// assert_eq!(gray.to_string(), "#808080");
    /// # Ok::<(), ArgumentError>(())
    /// ```
    pub fn desaturate(&self, delta: Float) -> Result<Self, ArgumentError> {
        let delta = checked_delta("desaturate_by", delta)?;
        Ok(self.shifted_hsl(0.0, -delta, 0.0))
    }

    /// Create a new color with the lightness increased by the given delta.
    ///
    /// The delta must be in `-1..=1`; the shifted lightness clamps into unit
    /// range.
    pub fn lighten(&self, delta: Float) -> Result<Self, ArgumentError> {
        let delta = checked_delta("lighten_by", delta)?;
        Ok(self.shifted_hsl(0.0, 0.0, delta))
    }

    /// Create a new color with the lightness decreased by the given delta.
    ///
    /// The delta must be in `-1..=1`; the shifted lightness clamps into unit
    /// range.
    ///
    /// ```
    /// # use tinct::Color;
    /// # use tinct::error::ArgumentError;
    /// use std::str::FromStr;
    ///
    /// let leather = Color::from_str("tan").unwrap().darken(0.1)?;
    /// assert_eq!(leather.to_string(), "#c49c67");
    /// # Ok::<(), ArgumentError>(())
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: tan;"></div>
    /// <div style="background-color: #c49c67;"></div>
    /// </div>
    pub fn darken(&self, delta: Float) -> Result<Self, ArgumentError> {
        let delta = checked_delta("darken_by", delta)?;
        Ok(self.shifted_hsl(0.0, 0.0, -delta))
    }

    /// Create a new color by interpolating the RGB channels toward the target
    /// color by the given amount.
    ///
    /// Every channel moves from source to target by
    /// `round((target - source) * amount)`. The amount must be in `0..=1` and
    /// defaults to 0.5; the target may be any accepted construction input.
    /// The source's alpha is preserved.
    ///
    /// ```
    /// # use tinct::Color;
    /// # use tinct::error::ColorError;
    /// let black = Color::from_gray(0);
    /// assert_eq!(black.combine("red", Some(0.2))?.to_string(), "#300");
    /// assert_eq!(black.combine("#fff", None)?.to_string(), "#808080");
    /// # Ok::<(), ColorError>(())
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: #300;"></div>
    /// <div style="background-color: #808080;"></div>
    /// </div>
    pub fn combine<'a>(
        &self,
        target: impl Into<ColorInput<'a>>,
        amount: Option<Float>,
    ) -> Result<Self, ColorError> {
        let amount = checked_unit("amount", amount.unwrap_or(0.5))?;
        let target = Self::new(target, None)?.rgb();
        let source = self.rgb();

        let mut rgb = [0_u8; 3];
        for (index, channel) in rgb.iter_mut().enumerate() {
            let s = source[index] as Float;
            let t = target[index] as Float;
            *channel = (s + ((t - s) * amount).round()) as u8;
        }

        Ok(Self {
            channels: Channels::with_rgb(rgb),
            alpha: self.alpha,
        })
    }

    /// Create a new color by shifting the hue toward the target color's hue
    /// by the given amount, along the shorter angular path.
    ///
    /// Only the hue changes; saturation, lightness, and alpha are preserved.
    /// The amount must be in `0..=1` and defaults to 0.5; the target may be
    /// any accepted construction input.
    ///
    /// Note that the shorter path from red to blue leads through magenta, not
    /// through green.
    ///
    /// ```
    /// # use tinct::Color;
    /// # use tinct::error::ColorError;
    /// use std::str::FromStr;
    ///
    /// let red = Color::from_str("red").unwrap();
    /// assert_eq!(red.tint("blue", None)?.to_string(), "#f0f");
    /// assert_eq!(red.tint("blue", Some(1.0))?.to_string(), "#00f");
    /// assert_eq!(red.tint("blue", Some(0.0))?.to_string(), "#f00");
    /// # Ok::<(), ColorError>(())
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: #f00;"></div>
    /// <div style="background-color: #f0f;"></div>
    /// <div style="background-color: #00f;"></div>
    /// </div>
    pub fn tint<'a>(
        &self,
        target: impl Into<ColorInput<'a>>,
        amount: Option<Float>,
    ) -> Result<Self, ColorError> {
        let amount = checked_unit("amount", amount.unwrap_or(0.5))?;
        let target = Self::new(target, None)?;

        let mut diff = target.hue() - self.hue();
        if diff > 0.5 {
            diff -= 1.0;
        } else if diff < -0.5 {
            diff += 1.0;
        }

        Ok(self.shifted_hsl(diff * amount, 0.0, 0.0))
    }

    /// Create a new color with every RGB channel replaced by its complement,
    /// preserving the alpha.
    ///
    /// Inverting twice restores the original color.
    ///
    /// ```
    /// # use tinct::Color;
    /// let red = Color::from_rgb(255, 0, 0);
    /// assert_eq!(red.invert().to_string(), "#0ff");
    /// assert_eq!(red.invert().invert(), red);
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: #0ff;"></div>
    /// </div>
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn invert(&self) -> Self {
        let [r, g, b] = self.rgb();
        Self {
            channels: Channels::with_rgb([255 - r, 255 - g, 255 - b]),
            alpha: self.alpha,
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Create a new color with the shifted HSL components, all arguments
    /// already validated.
    fn shifted_hsl(&self, dh: Float, ds: Float, dl: Float) -> Self {
        let hsl = self.hsl();
        self.derive_hsl(Hsl {
            h: wrap_hue(hsl.h + dh),
            s: (hsl.s + ds).clamp(0.0, 1.0),
            l: (hsl.l + dl).clamp(0.0, 1.0),
        })
    }

    /// Create a new color with the given HSL components and this color's
    /// alpha.
    fn derive_hsl(&self, hsl: Hsl) -> Self {
        Self {
            channels: Channels::with_hsl(hsl),
            alpha: self.alpha,
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Wrap the hue into unit range.
///
/// Sums above one lose their integral part, sums below minus one gain theirs
/// back, and a remaining negative fraction wraps up by one turn. This keeps
/// multi-revolution shifts equivalent to their fractional part.
fn wrap_hue(hue: Float) -> Float {
    let mut hue = hue;
    if hue > 1.0 {
        hue -= hue.floor();
    }
    if hue < -1.0 {
        hue += hue.floor().abs();
    }
    if hue < 0.0 {
        hue += 1.0;
    }
    hue
}

fn validated_alpha(value: Float) -> Result<Float, ColorError> {
    if is_unit_value(value) {
        Ok(value)
    } else {
        Err(ColorError::InvalidAlpha(value))
    }
}

fn validated_hsl(hsl: Hsl) -> Result<Hsl, ColorError> {
    for (component, value) in [("h", hsl.h), ("s", hsl.s), ("l", hsl.l)] {
        if !is_unit_value(value) {
            return Err(ColorError::InvalidHsl { component, value });
        }
    }
    Ok(hsl)
}

fn checked_unit(name: &'static str, value: Float) -> Result<Float, ArgumentError> {
    if is_unit_value(value) {
        Ok(value)
    } else {
        Err(ArgumentError::new(name, value, 0.0..=1.0))
    }
}

fn checked_delta(name: &'static str, value: Float) -> Result<Float, ArgumentError> {
    if (-1.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ArgumentError::new(name, value, -1.0..=1.0))
    }
}

// --------------------------------------------------------------------------------------------------------------------

impl Default for Color {
    /// Create an instance of the default color, transparent black.
    ///
    /// ```
    /// # use tinct::Color;
    /// let default = Color::default();
    /// assert_eq!(default.rgb(), [0, 0, 0]);
    /// assert_eq!(default.alpha(), 0.0);
    /// assert_eq!(default.to_string(), "transparent");
    /// ```
    #[inline]
    fn default() -> Self {
        Self {
            channels: Channels::with_rgb([0, 0, 0]),
            alpha: 0.0,
        }
    }
}

impl std::str::FromStr for Color {
    type Err = ColorFormatError;

    /// Instantiate a color from its string representation.
    ///
    /// Before parsing the string slice, this method trims any leading and
    /// trailing white space while also converting ASCII letters to lower
    /// case. That makes parsing effectively case-insensitive.
    ///
    /// The supported grammar comprises the *hashed notation* with three or
    /// six hexadecimal digits (the three digit version is a short form of the
    /// six digit version with every digit repeated, i.e., the red channel of
    /// `#123` is 0x11 and not 0x01), the `rgb(r,g,b)` and `rgba(r,g,b,a)`
    /// *functional notations* with comma-separated integer channels and, for
    /// the latter, a floating point alpha, and the *CSS color names*,
    /// including `transparent`, which denotes transparent black.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tinct::Color;
    /// # use tinct::error::ColorFormatError;
    /// use std::str::FromStr;
    ///
    /// let red = Color::from_str("#f00")?;
    /// assert_eq!(red.rgb(), [255, 0, 0]);
    ///
    /// let salmon: Color = str::parse("Salmon")?;
    /// assert_eq!(salmon.to_string(), "#fa8072");
    ///
    /// let shadow = Color::from_str("rgba(0, 0, 0, 0.25)")?;
    /// assert_eq!(shadow.alpha(), 0.25);
    ///
    /// let nothing = Color::from_str("transparent")?;
    /// assert_eq!(nothing.alpha(), 0.0);
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    /// <div class=color-swatch>
    /// <div style="background-color: #f00;"></div>
    /// <div style="background-color: salmon;"></div>
    /// </div>
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s, CSS_NAMES).map(|parsed| Self::from_parsed(parsed, None))
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        use std::str::FromStr;

        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        use std::str::FromStr;

        Color::from_str(value.as_str())
    }
}

impl Clone for Color {
    /// Clone this color, including any memoized derived representation.
    fn clone(&self) -> Self {
        Self {
            channels: self.channels.clone(),
            alpha: self.alpha,
        }
    }
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.channels {
            Channels::Rgb { rgb, .. } => f
                .debug_struct("Color")
                .field("rgb", rgb)
                .field("alpha", &self.alpha)
                .finish(),
            Channels::Hsl { hsl, .. } => f
                .debug_struct("Color")
                .field("hsl", hsl)
                .field("alpha", &self.alpha)
                .finish(),
        }
    }
}

impl std::fmt::Display for Color {
    /// Format this color in its canonical CSS representation.
    ///
    /// A fully transparent color formats as the literal `transparent` and a
    /// translucent color as `rgba(R,G,B,A)`, with the alpha printed as given.
    /// An opaque color formats in hashed hexadecimal notation, collapsed to
    /// three digits when possible.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.alpha == 0.0 {
            f.write_str("transparent")
        } else if self.alpha < 1.0 {
            let [r, g, b] = self.rgb();
            f.write_fmt(format_args!("rgba({},{},{},{})", r, g, b, self.alpha))
        } else {
            f.write_str(&rgb_to_hex(self.rgb(), false))
        }
    }
}

impl PartialEq for Color {
    /// Determine whether the two colors are equal.
    ///
    /// Colors compare by their derived RGB channels and their alpha, the
    /// latter normalized through the same reduced-resolution bit
    /// representation that hashing uses. Hence an HSL color equals the RGB
    /// color it converts to.
    fn eq(&self, other: &Self) -> bool {
        self.rgb() == other.rgb() && to_eq_bits(self.alpha) == to_eq_bits(other.alpha)
    }
}

impl Eq for Color {}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.rgb().hash(state);
        to_eq_bits(self.alpha).hash(state);
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::{Color, ColorInput, Hsl};
    use crate::assert_close_enough;
    use crate::error::{ArgumentError, ColorError, ColorFormatError};

    #[test]
    fn test_construction() -> Result<(), ColorError> {
        // Zero arguments: transparent black.
        assert_eq!(Color::default().rgb(), [0, 0, 0]);
        assert_eq!(Color::default().alpha(), 0.0);

        // A single channel value: the equal-channel gray.
        assert_eq!(Color::from_gray(100).rgb(), [100, 100, 100]);
        assert_eq!(Color::from_gray(100).alpha(), 1.0);

        // Triples and quads.
        assert_eq!(Color::from_rgb(255, 0, 0).to_string(), "#f00");
        assert_eq!(
            Color::from_rgba(255, 0, 0, 0.5)?.to_string(),
            "rgba(255,0,0,0.5)"
        );
        assert_eq!(Color::new([255, 0, 0], None)?.alpha(), 1.0);
        assert_eq!(Color::new(([255, 0, 0], 0.5), None)?.alpha(), 0.5);

        // The explicit alpha overrides the embedded one.
        assert_eq!(Color::new(([255, 0, 0], 0.5), Some(0.8))?.alpha(), 0.8);
        assert_eq!(Color::new("rgba(255,0,0,0.5)", Some(0.8))?.alpha(), 0.8);

        // HSL values stay authoritative until channels are derived.
        let green = Color::from_hsl(1.0 / 3.0, 1.0, 0.5)?;
        assert_eq!(green.hsl().h, 1.0 / 3.0);
        assert_eq!(green.rgb(), [0, 255, 0]);

        // The copy constructor preserves the representation and alpha.
        let copy = Color::new(&green, None)?;
        assert_eq!(copy, green);
        let faded = Color::new(&green, Some(0.5))?;
        assert_eq!(faded.alpha(), 0.5);

        Ok(())
    }

    #[test]
    fn test_invalid_construction() {
        assert_eq!(
            Color::new("this is not a color string", None),
            Err(ColorError::Format(ColorFormatError::UnknownFormat))
        );
        assert_eq!(
            Color::new([255, 0, 0], Some(1.5)),
            Err(ColorError::InvalidAlpha(1.5))
        );
        assert_eq!(
            Color::new(([255, 0, 0], 1.5), None),
            Err(ColorError::InvalidAlpha(1.5))
        );
        assert_eq!(
            Color::from_hsl(1.5, 0.0, 0.0),
            Err(ColorError::InvalidHsl {
                component: "h",
                value: 1.5
            })
        );
        assert_eq!(
            Color::from_hsla(0.0, 0.0, 0.0, -0.1),
            Err(ColorError::InvalidAlpha(-0.1))
        );
    }

    #[test]
    fn test_parsing() -> Result<(), ColorFormatError> {
        assert_eq!(Color::from_str("#f00")?.rgb(), [255, 0, 0]);
        assert_eq!(Color::from_str("#FF0000")?.to_string(), "#f00");
        assert_eq!(Color::from_str("red")?.to_string(), "#f00");
        assert_eq!(Color::from_str("rgb(255,0,0)")?.to_string(), "#f00");
        assert_eq!(Color::try_from("blue")?.to_string(), "#00f");
        assert_eq!(
            Color::try_from("salmon".to_owned())?.to_string(),
            "#fa8072"
        );
        assert_eq!(
            Color::from_str("transparent")?.to_string(),
            "transparent"
        );
        assert_eq!(
            Color::from_str("no such color"),
            Err(ColorFormatError::UnknownFormat)
        );
        Ok(())
    }

    #[test]
    fn test_to_string() -> Result<(), ColorError> {
        assert_eq!(Color::from_rgb(255, 0, 0).to_string(), "#f00");
        assert_eq!(Color::from_rgb(255, 0, 1).to_string(), "#ff0001");
        assert_eq!(
            Color::new("rgba(255,0,0,0.5)", None)?.to_string(),
            "rgba(255,0,0,0.5)"
        );
        assert_eq!(Color::from_rgba(255, 0, 0, 0.0)?.to_string(), "transparent");
        assert_eq!(Color::from_rgba(255, 0, 0, 1.0)?.to_string(), "#f00");
        Ok(())
    }

    #[test]
    fn test_channel_overrides() {
        let red = Color::from_rgb(255, 0, 0);
        assert_eq!(red.with_red(0).to_string(), "#000");
        assert_eq!(red.with_green(255).to_string(), "#ff0");
        assert_eq!(red.with_blue(255).to_string(), "#f0f");
        assert_eq!(red.red(), 255);
        assert_eq!(red.green(), 0);
        assert_eq!(red.blue(), 0);
    }

    #[test]
    fn test_hsl_overrides() -> Result<(), ArgumentError> {
        let red = Color::from_rgb(255, 0, 0);
        assert_eq!(red.with_hue(2.0 / 3.0)?.to_string(), "#00f");
        assert_eq!(red.with_hue(1.0 / 3.0)?.to_string(), "#0f0");
        assert_eq!(red.with_lightness(0.0)?.to_string(), "#000");
        assert_eq!(red.with_lightness(1.0)?.to_string(), "#fff");
        assert_eq!(red.with_saturation(0.0)?.to_string(), "#808080");

        // The achromatic fixed point: setting the hue of a gray is a no-op.
        let gray = Color::from_gray(100);
        assert_eq!(gray.with_hue(0.3)?.rgb(), [100, 100, 100]);

        assert_eq!(
            red.with_hue(1.5),
            Err(ArgumentError::new("hue", 1.5, 0.0..=1.0))
        );
        Ok(())
    }

    #[test]
    fn test_shift_hue() {
        // Yellow's hue is 1/6, which is not exact in binary, so the blue
        // channel lands just below the 127.5 midpoint and rounds down.
        let yellow = Color::from_rgb(255, 255, 0);
        assert_eq!(yellow.shift_hue(0.25).to_string(), "#00ff7f");

        // Full revolutions are the identity, whatever the direction.
        let tomato = Color::from_rgb(255, 99, 71);
        assert_eq!(tomato.shift_hue(1.0), tomato);
        assert_eq!(tomato.shift_hue(-1.0), tomato);
        assert_eq!(tomato.shift_hue(1.1), tomato.shift_hue(0.1));
        assert_eq!(tomato.shift_hue(-2.3), tomato.shift_hue(0.7));
        assert_eq!(tomato.shift_hue(2.5), tomato.shift_hue(0.5));
    }

    #[test]
    fn test_saturate_and_lighten() -> Result<(), ColorError> {
        // Shifted saturation and lightness clamp into unit range.
        let red = Color::from_rgb(255, 0, 0);
        assert_eq!(red.saturate(1.0)?, red);
        assert_eq!(red.desaturate(1.0)?.to_string(), "#808080");
        assert_eq!(red.lighten(1.0)?.to_string(), "#fff");
        assert_eq!(red.darken(1.0)?.to_string(), "#000");

        assert_eq!(red.lighten(0.5)?.to_string(), "#fff");
        assert_eq!(red.darken(0.1)?.to_string(), "#c00");

        let leather = Color::from_str("tan")?;
        assert_eq!(leather.darken(0.1)?.to_string(), "#c49c67");

        assert_eq!(
            red.saturate(1.5),
            Err(ArgumentError::new("saturate_by", 1.5, -1.0..=1.0))
        );
        assert_eq!(
            red.darken(-2.0),
            Err(ArgumentError::new("darken_by", -2.0, -1.0..=1.0))
        );
        Ok(())
    }

    #[test]
    fn test_combine() -> Result<(), ColorError> {
        let black = Color::from_gray(0);
        assert_eq!(black.combine("red", Some(0.2))?.to_string(), "#300");
        assert_eq!(black.combine("#fff", None)?.to_string(), "#808080");
        assert_eq!(
            Color::from_rgb(255, 0, 0)
                .combine([0, 0, 255], Some(0.25))?
                .to_string(),
            "#bf0040"
        );

        // The source's alpha survives the interpolation.
        let faded = Color::from_rgba(0, 0, 0, 0.5)?.combine("red", Some(0.2))?;
        assert_eq!(faded.to_string(), "rgba(51,0,0,0.5)");

        assert_eq!(
            black.combine("red", Some(1.5)),
            Err(ColorError::Argument(ArgumentError::new(
                "amount",
                1.5,
                0.0..=1.0
            )))
        );
        Ok(())
    }

    #[test]
    fn test_tint() -> Result<(), ColorError> {
        let red = Color::from_str("red")?;

        // The shorter path from red to blue leads through magenta.
        assert_eq!(red.tint("blue", None)?.to_string(), "#f0f");
        assert_eq!(red.tint("blue", Some(1.0))?.to_string(), "#00f");
        assert_eq!(red.tint("blue", Some(0.0))?.to_string(), "#f00");
        assert_eq!(
            Color::new("rgb(0,0,100)", None)?
                .tint("rgb(100,0,0)", Some(0.1))?
                .to_string(),
            "#140064"
        );

        // Only the hue changes, so the target's lightness is irrelevant.
        assert_eq!(
            red.tint([0, 0, 1], Some(0.5))?,
            red.tint([0, 0, 255], Some(0.5))?
        );

        // Saturation, lightness, and alpha are preserved.
        let faded = Color::from_rgba(255, 0, 0, 0.5)?.tint([0, 0, 255], Some(0.5))?;
        assert_eq!(faded.to_string(), "rgba(255,0,255,0.5)");
        Ok(())
    }

    #[test]
    fn test_invert() {
        let red = Color::from_rgb(255, 0, 0);
        assert_eq!(red.invert().to_string(), "#0ff");
        assert_eq!(red.invert().invert(), red);

        for rgb in [[0, 0, 0], [255, 255, 255], [1, 2, 3], [210, 180, 140]] {
            let color = Color::new(rgb, None).expect("valid triple");
            assert_eq!(color.invert().invert().rgb(), rgb);
        }
    }

    #[test]
    fn test_alpha() -> Result<(), ArgumentError> {
        let red = Color::from_rgb(255, 0, 0);
        assert_eq!(red.with_alpha(0.5)?.to_string(), "rgba(255,0,0,0.5)");
        assert_eq!(red.with_alpha(0.0)?.to_string(), "transparent");
        assert_eq!(
            red.with_alpha(1.5),
            Err(ArgumentError::new("alpha", 1.5, 0.0..=1.0))
        );
        Ok(())
    }

    #[test]
    fn test_equality() -> Result<(), ColorError> {
        use std::collections::HashSet;

        // An HSL color equals the RGB color it converts to.
        let hsl = Color::from_hsl(0.0, 1.0, 0.5)?;
        let rgb = Color::from_rgb(255, 0, 0);
        assert_eq!(hsl, rgb);

        let mut set = HashSet::new();
        set.insert(hsl);
        assert!(set.contains(&rgb), "equal colors should hash alike");

        assert_ne!(Color::from_rgb(255, 0, 0), Color::from_rgba(255, 0, 0, 0.5)?);
        Ok(())
    }

    #[test]
    fn test_input_shapes() -> Result<(), ColorError> {
        assert!(matches!(ColorInput::from(128_u8), ColorInput::Gray(128)));
        assert!(matches!(
            ColorInput::from("red"),
            ColorInput::Text("red")
        ));
        assert!(matches!(
            ColorInput::from(Hsl {
                h: 0.0,
                s: 0.0,
                l: 0.0
            }),
            ColorInput::Hsl(_)
        ));

        // HSL input with an embedded alpha.
        let color = Color::new(
            (
                Hsl {
                    h: 0.0,
                    s: 1.0,
                    l: 0.5,
                },
                0.5,
            ),
            None,
        )?;
        assert_eq!(color.to_string(), "rgba(255,0,0,0.5)");
        Ok(())
    }

    #[test]
    fn test_names() {
        let names = Color::names();
        assert_eq!(names.lookup("red"), Some([255, 0, 0]));
        assert!(!names.is_empty(), "built-in name table should be populated");
    }

    #[test]
    fn test_getters() -> Result<(), ColorFormatError> {
        let color = Color::from_str("#a1b2c1")?;
        assert_eq!(color.red(), 0xa1);
        assert_eq!(color.green(), 0xb2);
        assert_eq!(color.blue(), 0xc1);
        assert_eq!(color.rgba().0, [0xa1, 0xb2, 0xc1]);
        assert_eq!(color.rgba().1, 1.0);
        assert_close_enough!(color.hue(), 0.578125);
        assert_eq!(Color::from_str("#f00")?.saturation(), 1.0);
        assert_eq!(Color::from_str("#f00")?.lightness(), 0.5);
        Ok(())
    }

    #[test]
    fn test_shift_hsl() -> Result<(), ArgumentError> {
        let red = Color::from_rgb(255, 0, 0);
        let shifted = red.shift_hsl(1.0 / 3.0, 0.0, 0.0)?;
        assert_eq!(shifted.to_string(), "#0f0");
        assert_eq!(
            red.shift_hsl(0.0, 2.0, 0.0),
            Err(ArgumentError::new("saturation delta", 2.0, -1.0..=1.0))
        );
        Ok(())
    }
}
