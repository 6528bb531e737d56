//! Continuous color map interpolated from gradient samples.

use crate::color::Rgb;

/// A continuous value→color map built from an ordered list of gradient
/// samples spanning `[low, high]`.
///
/// `map` locates the two samples nearest the value and blends them linearly.
/// Values outside the range clamp to the endpoint colors.
#[derive(Debug, Clone)]
pub struct ColorMap {
    samples: Vec<Rgb>,
    low: f32,
    high: f32,
}

impl ColorMap {
    /// Build a color map from gradient samples.
    ///
    /// # Panics
    /// Panics if `samples` is empty or `low >= high`.
    pub fn from_gradient(samples: Vec<Rgb>, low: f32, high: f32) -> Self {
        assert!(!samples.is_empty(), "color map needs at least one sample");
        assert!(low < high, "color map range must be ascending");
        Self { samples, low, high }
    }

    pub fn low(&self) -> f32 {
        self.low
    }

    pub fn high(&self) -> f32 {
        self.high
    }

    /// Map a value to a color by interpolating between the two nearest samples.
    pub fn map(&self, value: f32) -> Rgb {
        let n = self.samples.len();
        if n == 1 {
            return self.samples[0];
        }

        let t = ((value - self.low) / (self.high - self.low)).clamp(0.0, 1.0);
        let pos = t * (n - 1) as f32;
        let i0 = (pos.floor() as usize).min(n - 1);
        let i1 = (i0 + 1).min(n - 1);
        let frac = pos - i0 as f32;

        interpolate(self.samples[i0], self.samples[i1], frac)
    }
}

/// Linear color interpolation.
fn interpolate(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let t_inv = 1.0 - t;

    Rgb::new(
        (a.r as f32 * t_inv + b.r as f32 * t).round() as u8,
        (a.g as f32 * t_inv + b.g as f32 * t).round() as u8,
        (a.b as f32 * t_inv + b.b as f32 * t).round() as u8,
    )
}
