//! Fixed-size thermal frame reshaped from one logged row.

use crate::error::RenderError;

/// Frame rows (sensor pixel rows).
pub const FRAME_HEIGHT: usize = 24;

/// Frame columns (sensor pixel columns).
pub const FRAME_WIDTH: usize = 32;

/// Readings per frame.
pub const FRAME_VALUES: usize = FRAME_HEIGHT * FRAME_WIDTH;

/// One 24×32 grid of temperature readings, row-major.
#[derive(Debug, Clone)]
pub struct Frame {
    values: Vec<f32>,
}

impl Frame {
    /// Reshape a flat row of readings into a frame.
    ///
    /// Fails unless exactly [`FRAME_VALUES`] readings are supplied.
    pub fn from_values(values: Vec<f32>) -> Result<Self, RenderError> {
        if values.len() != FRAME_VALUES {
            return Err(RenderError::FrameShape {
                expected: FRAME_VALUES,
                actual: values.len(),
            });
        }
        Ok(Self { values })
    }

    /// Reading at (row, col).
    ///
    /// # Panics
    /// Panics if the position is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(row < FRAME_HEIGHT && col < FRAME_WIDTH);
        self.values[row * FRAME_WIDTH + col]
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_indexing() {
        let values: Vec<f32> = (0..FRAME_VALUES).map(|i| i as f32).collect();
        let frame = Frame::from_values(values).unwrap();

        assert_eq!(frame.get(0, 0), 0.0);
        assert_eq!(frame.get(0, 31), 31.0);
        assert_eq!(frame.get(1, 0), 32.0);
        assert_eq!(frame.get(23, 31), 767.0);
    }
}
