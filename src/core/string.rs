use crate::error::ColorFormatError;
use crate::names::NameTable;
use crate::Float;

/// A parsed color string, before absorption into a
/// [`Color`](crate::Color).
///
/// The alpha-carrying variant results from the `rgba()` functional notation
/// and from the name `transparent`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ParsedColor {
    Rgb([u8; 3]),
    Rgba([u8; 3], Float),
}

impl ParsedColor {
    /// Access the RGB coordinates.
    pub(crate) fn rgb(&self) -> [u8; 3] {
        match *self {
            Self::Rgb(rgb) | Self::Rgba(rgb, _) => rgb,
        }
    }

    /// Access the embedded alpha, if the format carried one.
    pub(crate) fn alpha(&self) -> Option<Float> {
        match *self {
            Self::Rgb(_) => None,
            Self::Rgba(_, alpha) => Some(alpha),
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse a 24-bit color in hashed hexadecimal format. If successful, this
/// function returns the three channels as unsigned bytes. It transparently
/// handles single-digit channels, which are duplicated rather than scaled,
/// i.e., the red channel of `#123` is 0x11/0xff and not 0x1/0xf.
pub fn hex_to_rgb(s: &str) -> Result<[u8; 3], ColorFormatError> {
    if !s.starts_with('#') {
        return Err(ColorFormatError::UnknownFormat);
    } else if s.len() != 4 && s.len() != 7 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_channel(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = s.len() / 3;
        let t = s
            .get(1 + factor * index..1 + factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        // `from_str_radix` also accepts a sign, which the grammar does not.
        if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorFormatError::MalformedHex);
        }
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_channel(s, 0)?;
    let c2 = parse_channel(s, 1)?;
    let c3 = parse_channel(s, 2)?;
    Ok([c1, c2, c3])
}

/// Format the RGB coordinates in hashed hexadecimal notation.
///
/// Unless `full_length` is set, a color whose three hexadecimal pairs all
/// consist of doubled digits collapses to the familiar 3-digit short form,
/// e.g., `#ffaa00` becomes `#fa0`. Digits are lowercase either way.
pub fn rgb_to_hex(rgb: [u8; 3], full_length: bool) -> String {
    let [r, g, b] = rgb;
    if !full_length && r % 17 == 0 && g % 17 == 0 && b % 17 == 0 {
        format!("#{:x}{:x}{:x}", r / 17, g / 17, b / 17)
    } else {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse a color in `rgb()` or `rgba()` functional notation. Channels are
/// integers in `0..=255`, the alpha of the `rgba()` form is a floating point
/// number in `0..=1`, and whitespace around commas is optional.
fn parse_functional(s: &str) -> Result<ParsedColor, ColorFormatError> {
    // Munge function name. Try `rgba` first, since `rgb` is its prefix.
    let (has_alpha, rest) = s
        .strip_prefix("rgba")
        .map(|r| (true, r))
        .or_else(|| s.strip_prefix("rgb").map(|r| (false, r)))
        .ok_or(ColorFormatError::UnknownFormat)?;

    // Munge parentheses after trimming leading whitespace.
    let body = rest
        .trim_start()
        .strip_prefix('(')
        .ok_or(ColorFormatError::NoOpeningParenthesis)
        .and_then(|rest| {
            rest.strip_suffix(')')
                .ok_or(ColorFormatError::NoClosingParenthesis)
        })?;

    fn parse_channel(s: Option<&str>) -> Result<u8, ColorFormatError> {
        s.ok_or(ColorFormatError::MissingComponent).and_then(|t| {
            let t = t.trim();
            // Channels are plain decimal digits; `parse` alone would also
            // accept a leading `+`.
            if t.is_empty() || !t.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ColorFormatError::MalformedChannel);
            }
            t.parse().map_err(|_| ColorFormatError::MalformedChannel)
        })
    }

    let mut iter = body.split(',');
    let c1 = parse_channel(iter.next())?;
    let c2 = parse_channel(iter.next())?;
    let c3 = parse_channel(iter.next())?;

    let parsed = if has_alpha {
        let alpha: Float = iter
            .next()
            .ok_or(ColorFormatError::MissingComponent)
            .and_then(|t| {
                let t = t.trim();
                // Digits and a decimal point only: no sign, no exponent.
                if t.is_empty() || !t.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
                    return Err(ColorFormatError::MalformedAlpha);
                }
                t.parse().map_err(|_| ColorFormatError::MalformedAlpha)
            })?;
        if !super::is_alpha_value(alpha) {
            return Err(ColorFormatError::MalformedAlpha);
        }
        ParsedColor::Rgba([c1, c2, c3], alpha)
    } else {
        ParsedColor::Rgb([c1, c2, c3])
    };

    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyComponents);
    }

    Ok(parsed)
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string into a color.
///
/// This function recognizes the three and six digit hashed hexadecimal
/// formats, the `rgb()` and `rgba()` functional notations with comma-separated
/// components, and the names of the given name table, including the legacy
/// `" 1"` suffix tolerance. The name `transparent` carries zero alpha. Before
/// trying to parse either of these formats, this function trims leading and
/// trailing white space and converts ASCII letters to lowercase, which makes
/// parsing effectively case-insensitive.
pub(crate) fn parse(s: &str, names: &NameTable) -> Result<ParsedColor, ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    if s.starts_with('#') {
        hex_to_rgb(s).map(ParsedColor::Rgb)
    } else if s.starts_with("rgb") {
        parse_functional(s)
    } else if let Some(rgb) = names.lookup(s) {
        if s == "transparent" {
            Ok(ParsedColor::Rgba(rgb, 0.0))
        } else {
            Ok(ParsedColor::Rgb(rgb))
        }
    } else {
        Err(ColorFormatError::UnknownFormat)
    }
}

// ====================================================================================================================
