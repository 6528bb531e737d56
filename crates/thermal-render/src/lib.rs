//! False-color rendering for thermal camera frames.
//!
//! Takes one 24×32 frame of temperature readings and produces a PNG figure:
//! - Piecewise temperature band table → 256-sample gradient
//! - Linearly interpolated color map over the gradient
//! - Figure composition (frame raster, title, colorbar legend)
//! - PNG encoding

pub mod color;
pub mod colormap;
pub mod error;
pub mod figure;
pub mod frame;
pub mod png;

pub use color::{color_for, gradient, Rgb, GRADIENT_SAMPLES, TEMP_SCALE_MAX, TEMP_SCALE_MIN};
pub use colormap::ColorMap;
pub use error::RenderError;
pub use figure::{render_figure, FigureLayout};
pub use frame::{Frame, FRAME_HEIGHT, FRAME_VALUES, FRAME_WIDTH};
