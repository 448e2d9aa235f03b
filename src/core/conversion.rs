use crate::object::Hsl;
use crate::Float;

/// Determine whether the value is a valid RGB channel, i.e., is in `0..=255`.
#[inline]
pub fn is_channel_value(value: Float) -> bool {
    (0.0..=255.0).contains(&value)
}

/// Determine whether the value is in the unit range `0..=1`, the shared domain
/// of hue, saturation, lightness, and alpha.
#[inline]
pub fn is_unit_value(value: Float) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Determine whether the value is a valid alpha, i.e., is in `0..=1`.
#[inline]
pub fn is_alpha_value(value: Float) -> bool {
    is_unit_value(value)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the given RGB coordinates to HSL coordinates.
///
/// All HSL components are in unit range, with the hue's unit range covering
/// one full turn of the color wheel. Achromatic colors, i.e., colors whose
/// channels are all equal, have zero saturation and, by convention, zero hue.
///
/// The saturation denominator depends on the lightness and the hue formula on
/// which channel is maximal; negative hues wrap around by one turn.
pub fn rgb_to_hsl(rgb: [u8; 3]) -> Hsl {
    let r = rgb[0] as Float / 255.0;
    let g = rgb[1] as Float / 255.0;
    let b = rgb[2] as Float / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic: saturation is zero and hue is undefined, hence zero.
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let mut h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        2.0 + (b - r) / d
    } else {
        4.0 + (r - g) / d
    };
    h /= 6.0;
    if h < 0.0 {
        h += 1.0;
    }

    Hsl { h, s, l }
}

/// Convert the given HSL coordinates to RGB coordinates.
///
/// This function is the inverse of [`rgb_to_hsl`], modulo the rounding of each
/// channel to the nearest integer. Zero saturation short-circuits to the gray
/// with all channels at `lightness * 255`.
pub fn hsl_to_rgb(hsl: &Hsl) -> [u8; 3] {
    let Hsl { h, s, l } = *hsl;

    if s == 0.0 {
        let gray = (l * 255.0).round() as u8;
        return [gray, gray, gray];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ]
}

/// Evaluate one RGB channel for the given `p`/`q` anchors at the given hue
/// rotation.
///
/// The rotation is wrapped into unit range and then resolved through a 4-way
/// piecewise linear formula over the sextants `[0,1/6)`, `[1/6,1/2)`,
/// `[1/2,2/3)`, and `[2/3,1)`. The result is scaled to `0..=255` and rounded.
#[inline]
fn hue_to_channel(p: Float, q: Float, rotation: Float) -> u8 {
    let mut t = rotation;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    let value = if 6.0 * t < 1.0 {
        p + (q - p) * 6.0 * t
    } else if 2.0 * t < 1.0 {
        q
    } else if 3.0 * t < 2.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    };

    (value * 255.0).round() as u8
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{hsl_to_rgb, is_alpha_value, is_channel_value, rgb_to_hsl};
    use crate::assert_close_enough;
    use crate::object::Hsl;

    #[test]
    fn test_validators() {
        assert!(is_channel_value(0.0), "zero is a channel value");
        assert!(is_channel_value(255.0), "255 is a channel value");
        assert!(!is_channel_value(255.5), "255.5 is out of channel range");
        assert!(!is_channel_value(-1.0), "-1 is out of channel range");
        assert!(is_alpha_value(1.0), "one is an alpha value");
        assert!(!is_alpha_value(1.01), "1.01 is out of alpha range");
    }

    #[test]
    fn test_rgb_to_hsl() {
        assert_close_enough!(rgb_to_hsl([255, 0, 0]).h, 0.0);
        assert_close_enough!(rgb_to_hsl([255, 0, 0]).s, 1.0);
        assert_close_enough!(rgb_to_hsl([255, 0, 0]).l, 0.5);

        assert_close_enough!(rgb_to_hsl([0, 255, 0]).h, 1.0 / 3.0);
        assert_close_enough!(rgb_to_hsl([0, 0, 255]).h, 2.0 / 3.0);

        // Blue is maximal and green less than blue, so the hue wraps.
        let purple = rgb_to_hsl([100, 50, 100]);
        assert_close_enough!(purple.h, 5.0 / 6.0);
        assert_close_enough!(purple.s, 1.0 / 3.0);
        assert_close_enough!(purple.l, 150.0 / (2.0 * 255.0));

        // Achromatic colors have zero saturation and zero hue.
        let gray = rgb_to_hsl([100, 100, 100]);
        assert_close_enough!(gray.h, 0.0);
        assert_close_enough!(gray.s, 0.0);
        assert_close_enough!(gray.l, 100.0 / 255.0);
    }

    #[test]
    fn test_hsl_to_rgb() {
        assert_eq!(
            hsl_to_rgb(&Hsl {
                h: 0.0,
                s: 1.0,
                l: 0.5
            }),
            [255, 0, 0]
        );
        assert_eq!(
            hsl_to_rgb(&Hsl {
                h: 2.0 / 3.0,
                s: 1.0,
                l: 0.5
            }),
            [0, 0, 255]
        );
        // The achromatic fast path rounds half up.
        assert_eq!(
            hsl_to_rgb(&Hsl {
                h: 0.7,
                s: 0.0,
                l: 0.5
            }),
            [128, 128, 128]
        );
        assert_eq!(
            hsl_to_rgb(&Hsl {
                h: 0.0,
                s: 0.0,
                l: 1.0
            }),
            [255, 255, 255]
        );
    }

    #[test]
    fn test_round_trip() {
        // RGB -> HSL -> RGB is exact up to rounding, i.e., within one step
        // per channel.
        for rgb in [
            [255, 0, 0],
            [210, 180, 140],
            [1, 2, 3],
            [250, 128, 114],
            [0, 0, 0],
            [255, 255, 255],
            [17, 17, 17],
        ] {
            let back = hsl_to_rgb(&rgb_to_hsl(rgb));
            for index in 0..3 {
                let delta = (back[index] as i16 - rgb[index] as i16).abs();
                assert!(
                    delta <= 1,
                    "channel {} of {:?} came back as {:?}",
                    index,
                    rgb,
                    back
                );
            }
        }
    }
}
