//! Temperature band table and gradient sampling.
//!
//! The band table is hand-calibrated for the sensor's skin-temperature range
//! and must stay byte-for-byte stable: downstream imagery is only comparable
//! across captures if the same bands produce the same colors.

/// Lower edge of the color scale (°C).
pub const TEMP_SCALE_MIN: f32 = 27.99;

/// Upper edge of the color scale (°C).
pub const TEMP_SCALE_MAX: f32 = 35.00;

/// Number of gradient samples used to build the continuous color map.
pub const GRADIENT_SAMPLES: usize = 256;

/// RGB color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Calibrated temperature bands, ascending by upper bound (°C, exclusive).
/// A temperature matches the first band whose bound it is strictly below.
const BANDS: [(f32, Rgb); 16] = [
    (27.99, Rgb::new(235, 131, 52)),
    (28.51, Rgb::new(235, 195, 52)),
    (28.99, Rgb::new(228, 235, 52)),
    (29.51, Rgb::new(187, 235, 52)),
    (29.99, Rgb::new(177, 235, 52)),
    (30.51, Rgb::new(52, 235, 110)),
    (30.99, Rgb::new(52, 235, 191)),
    (31.55, Rgb::new(52, 235, 235)),
    (31.99, Rgb::new(83, 213, 83)),
    (32.55, Rgb::new(52, 177, 235)),
    (32.99, Rgb::new(52, 142, 235)),
    (33.55, Rgb::new(52, 112, 235)),
    (34.00, Rgb::new(52, 83, 235)),
    (34.55, Rgb::new(29, 63, 231)),
    (34.99, Rgb::new(0, 0, 255)),
    (35.00, Rgb::new(217, 39, 39)),
];

/// Color for temperatures at or above the last band bound.
const TERMINAL: Rgb = Rgb::new(2, 2, 196);

/// Map a temperature (°C) to its band color.
pub fn color_for(temp_celsius: f32) -> Rgb {
    for (bound, color) in BANDS {
        if temp_celsius < bound {
            return color;
        }
    }
    TERMINAL
}

/// Sample `color_for` at `steps` evenly spaced temperatures across
/// `[low, high]` inclusive.
///
/// The first sample is `color_for(low)` and the last is `color_for(high)`
/// exactly; intermediate sample temperatures are linearly spaced.
pub fn gradient(low: f32, high: f32, steps: usize) -> Vec<Rgb> {
    match steps {
        0 => Vec::new(),
        1 => vec![color_for(low)],
        _ => (0..steps)
            .map(|i| {
                // Pin the endpoints so float error cannot move them across a band bound.
                let t = if i == steps - 1 {
                    high
                } else {
                    low + (high - low) * (i as f32 / (steps - 1) as f32)
                };
                color_for(t)
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_ascending() {
        for pair in BANDS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }

    #[test]
    fn below_scale_is_orange() {
        assert_eq!(color_for(-40.0), Rgb::new(235, 131, 52));
        assert_eq!(color_for(27.98), Rgb::new(235, 131, 52));
    }

    #[test]
    fn above_scale_is_terminal_blue() {
        assert_eq!(color_for(35.00), TERMINAL);
        assert_eq!(color_for(120.0), TERMINAL);
    }
}
