mod conversion;
mod equality;
mod string;

// conversion
pub use conversion::{hsl_to_rgb, is_alpha_value, is_channel_value, is_unit_value, rgb_to_hsl};

// equality
pub use equality::to_eq_bits;

// string
pub use string::{hex_to_rgb, rgb_to_hex};
pub(crate) use string::{parse, ParsedColor};
