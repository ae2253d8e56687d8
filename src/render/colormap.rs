use crate::core::constants::VALUE_COLOR_SCALE;
use image::Rgba;

/// Plasma ramp sampled at nine evenly spaced stops
const PLASMA: [(u8, u8, u8); 9] = [
    (13, 8, 135),
    (75, 3, 161),
    (125, 3, 168),
    (168, 34, 150),
    (203, 70, 121),
    (229, 107, 93),
    (248, 148, 65),
    (253, 195, 40),
    (240, 249, 33),
];

/// Fully transparent color returned for NaN input
pub const BAD_COLOR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Plasma color at `t`.
///
/// Values below 0 take the first color and values above 1 the last one.
/// NaN maps to [`BAD_COLOR`].
pub fn plasma(t: f64) -> Rgba<u8> {
    if t.is_nan() {
        return BAD_COLOR;
    }

    let t = t.clamp(0.0, 1.0);
    let segs = (PLASMA.len() - 1) as f64;
    let x = t * segs;
    let i = x.floor() as usize;
    if i >= PLASMA.len() - 1 {
        let (r, g, b) = PLASMA[PLASMA.len() - 1];
        return Rgba([r, g, b, 255]);
    }

    let f = x - i as f64;
    let (r0, g0, b0) = PLASMA[i];
    let (r1, g1, b1) = PLASMA[i + 1];
    let mix = |a: u8, b: u8| (a as f64 + f * (b as f64 - a as f64)).round() as u8;
    Rgba([mix(r0, r1), mix(g0, g1), mix(b0, b1), 255])
}

/// Color of a data value: `plasma(-value / 100)`.
///
/// With this normalization every positive value saturates to the dark end of
/// the ramp; values between -100 and 0 sweep through it.
pub fn value_color(value: f64) -> Rgba<u8> {
    plasma(-value / VALUE_COLOR_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plasma_endpoints_and_clamping() {
        assert_eq!(plasma(0.0), Rgba([13, 8, 135, 255]));
        assert_eq!(plasma(1.0), Rgba([240, 249, 33, 255]));
        assert_eq!(plasma(-3.0), plasma(0.0));
        assert_eq!(plasma(7.0), plasma(1.0));
        assert_eq!(plasma(f64::NAN), BAD_COLOR);
    }

    #[test]
    fn test_plasma_interpolates_between_stops() {
        assert_eq!(plasma(0.5), Rgba([203, 70, 121, 255]));
        // Halfway between the first two stops
        assert_eq!(plasma(0.0625), Rgba([44, 6, 148, 255]));
    }

    #[test]
    fn test_value_color_normalization() {
        assert_eq!(value_color(-50.0), plasma(0.5));
        assert_eq!(value_color(-100.0), plasma(1.0));
        assert_eq!(value_color(30.0), plasma(0.0));
        assert_eq!(value_color(f64::NAN), BAD_COLOR);
    }
}
