//! # Tinct: One Color, Many Tints 🎨
//!
//! This crate implements an immutable color abstraction for the 24-bit RGB
//! colors of CSS and the terminal, together with the transformations that make
//! working with them pleasant:
//!
//!  1. **Parsing and formatting** of the common CSS notations, i.e., hashed
//!     hexadecimal strings with three or six digits, the `rgb()` and `rgba()`
//!     functional notations, and the standard color names, `transparent`
//!     included. Formatting produces the most compact canonical notation.
//!  2. **High-resolution derivation**: every color exposes both its integer
//!     RGB channels and its floating point HSL components, converting between
//!     the two representations lazily and caching the result.
//!  3. **Pure transformations** for lightening, darkening, saturating,
//!     desaturating, rotating and blending hues, interpolating channels, and
//!     inverting, every one of which returns a new color value and leaves the
//!     receiver untouched.
//!
//! The one and only entry point is [`Color`]. Since colors never mutate after
//! construction, they are freely shared across threads.
//!
//! ```
//! # use tinct::Color;
//! # use tinct::error::ColorError;
//! use std::str::FromStr;
//!
//! let coral = Color::from_str("coral")?;
//! let darker = coral.darken(0.2)?;
//! assert_eq!(darker.to_string(), "#e93f00");
//! # Ok::<(), ColorError>(())
//! ```
//! <div class=color-swatch>
//! <div style="background-color: coral;"></div>
//! <div style="background-color: #e93f00;"></div>
//! </div>
//!
//! ## Feature Flags
//!
//! This crate has one feature flag, `f64`, which is enabled by default. If
//! enabled, the crate uses `f64` as its floating point type and `u64` as the
//! corresponding bit representation. Otherwise, it uses `f32` and `u32`. In
//! either case, the crate exports the aliases [`Float`] and [`Bits`] for the
//! selected types.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The bits of the floating point type in use.
#[cfg(feature = "f64")]
pub type Bits = u64;

/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;
/// The bits of the floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod names;
mod object;

pub use core::{
    hex_to_rgb, hsl_to_rgb, is_alpha_value, is_channel_value, is_unit_value, rgb_to_hex,
    rgb_to_hsl, to_eq_bits,
};
pub use names::{NameTable, CSS_NAMES};
pub use object::{Color, ColorInput, Hsl};
