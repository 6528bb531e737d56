//! Capture tool configuration.

use std::path::PathBuf;
use std::time::Duration;

use thermal_render::FigureLayout;

/// Runtime configuration, assembled from CLI flags and environment in `main`
/// and passed explicitly into each component.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Sensor frame endpoint.
    pub sensor_url: String,
    /// HTTP request timeout for the sensor call.
    pub request_timeout: Duration,
    /// Path of the append-only frame log.
    pub log_file: PathBuf,
    /// Directory rendered images are written into.
    pub output_dir: PathBuf,
    /// Figure layout for rendered images.
    pub layout: FigureLayout,
    /// Skip the fetch step and only re-render the log.
    pub render_only: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            sensor_url: "http://192.168.0.14/save".to_string(),
            request_timeout: Duration::from_secs(30),
            log_file: PathBuf::from("thermal_data.csv"),
            output_dir: PathBuf::from("."),
            layout: FigureLayout::default(),
            render_only: false,
        }
    }
}
