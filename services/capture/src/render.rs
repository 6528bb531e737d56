//! Render pass: every logged row becomes one false-color PNG.
//!
//! The whole log is re-rendered on every run; output files are overwritten
//! in place, so the pass is idempotent. A malformed row is reported and
//! skipped without stopping the pass.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing::{debug, warn};

use thermal_render::{
    gradient, png, render_figure, ColorMap, FigureLayout, Frame, GRADIENT_SAMPLES,
    TEMP_SCALE_MAX, TEMP_SCALE_MIN,
};

use crate::store::{FrameLog, LoggedFrame};

/// Outcome counts for one render pass.
#[derive(Debug, Default)]
pub struct RenderSummary {
    pub rendered: usize,
    pub skipped: usize,
}

/// Render every logged row into `output_dir`.
///
/// Failing to read the log is fatal; failing to render a single row is not.
pub fn render_all(
    log: &FrameLog,
    output_dir: &Path,
    layout: &FigureLayout,
) -> Result<RenderSummary> {
    let rows = log.read_all().context("failed to read frame log")?;

    // One gradient per run is plenty; the map is reused across rows.
    let colormap = ColorMap::from_gradient(
        gradient(TEMP_SCALE_MIN, TEMP_SCALE_MAX, GRADIENT_SAMPLES),
        TEMP_SCALE_MIN,
        TEMP_SCALE_MAX,
    );

    let mut summary = RenderSummary::default();
    for row in &rows {
        match render_row(row, &colormap, output_dir, layout) {
            Ok(path) => {
                debug!(path = %path.display(), "Rendered frame");
                summary.rendered += 1;
            }
            Err(e) => {
                warn!(timestamp = %row.timestamp, error = %e, "Skipping row");
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}

/// Render one row: parse fields, reshape, compose the figure, write the PNG.
fn render_row(
    row: &LoggedFrame,
    colormap: &ColorMap,
    output_dir: &Path,
    layout: &FigureLayout,
) -> Result<PathBuf> {
    let mut values = Vec::with_capacity(row.fields.len());
    for field in &row.fields {
        let v: f32 = field
            .trim()
            .parse()
            .map_err(|_| anyhow!("non-numeric field '{}'", field))?;
        values.push(v);
    }

    let frame = Frame::from_values(values)?;
    let img = render_figure(&frame, colormap, &row.timestamp, layout);

    let encoded = png::encode_auto(img.as_raw(), img.width() as usize, img.height() as usize)?;

    let path = output_dir.join(image_filename(&row.timestamp));
    fs::write(&path, encoded)
        .with_context(|| format!("failed to write image {}", path.display()))?;

    Ok(path)
}

/// Deterministic image name for a timestamp; colons are not filesystem-safe.
pub fn image_filename(timestamp: &str) -> String {
    format!("thermal_image_{}.png", timestamp.replace(':', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use thermal_render::FRAME_VALUES;

    #[test]
    fn test_image_filename_replaces_colons() {
        assert_eq!(
            image_filename("2024-01-01 00:00:00"),
            "thermal_image_2024-01-01 00-00-00.png"
        );
    }

    #[test]
    fn test_render_pass_one_image_per_valid_row() {
        let dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let log = FrameLog::new(dir.path().join("thermal_data.csv"));

        log.append_at("2024-01-01 00:00:00", &vec![30.0; FRAME_VALUES])
            .unwrap();
        log.append_at("2024-01-01 00:05:00", &vec![32.0; FRAME_VALUES])
            .unwrap();

        let summary = render_all(&log, out.path(), &FigureLayout::default()).unwrap();
        assert_eq!(summary.rendered, 2);
        assert_eq!(summary.skipped, 0);

        assert!(out
            .path()
            .join("thermal_image_2024-01-01 00-00-00.png")
            .exists());
        assert!(out
            .path()
            .join("thermal_image_2024-01-01 00-05-00.png")
            .exists());
    }

    #[test]
    fn test_short_and_long_rows_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let log = FrameLog::new(dir.path().join("thermal_data.csv"));

        log.append_at("2024-01-01 00:00:00", &vec![30.0; FRAME_VALUES - 1])
            .unwrap();
        log.append_at("2024-01-01 00:05:00", &vec![30.0; FRAME_VALUES + 1])
            .unwrap();

        let summary = render_all(&log, out.path(), &FigureLayout::default()).unwrap();
        assert_eq!(summary.rendered, 0);
        assert_eq!(summary.skipped, 2);
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_non_numeric_field_skips_row_only() {
        let dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let log = FrameLog::new(dir.path().join("thermal_data.csv"));

        // One corrupt row between two good ones
        log.append_at("2024-01-01 00:00:00", &vec![30.0; FRAME_VALUES])
            .unwrap();
        let mut fields: Vec<String> = vec!["30.0".to_string(); FRAME_VALUES];
        fields[100] = "warm".to_string();
        let mut row = vec!["2024-01-01 00:05:00".to_string()];
        row.extend(fields);
        append_raw(log.path(), &row);
        log.append_at("2024-01-01 00:10:00", &vec![30.0; FRAME_VALUES])
            .unwrap();

        let summary = render_all(&log, out.path(), &FigureLayout::default()).unwrap();
        assert_eq!(summary.rendered, 2);
        assert_eq!(summary.skipped, 1);
        assert!(!out
            .path()
            .join("thermal_image_2024-01-01 00-05-00.png")
            .exists());
    }

    #[test]
    fn test_rerender_overwrites_existing_image() {
        let dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let log = FrameLog::new(dir.path().join("thermal_data.csv"));

        log.append_at("2024-01-01 00:00:00", &vec![30.0; FRAME_VALUES])
            .unwrap();

        render_all(&log, out.path(), &FigureLayout::default()).unwrap();
        let summary = render_all(&log, out.path(), &FigureLayout::default()).unwrap();

        assert_eq!(summary.rendered, 1);
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 1);
    }

    fn append_raw(path: &Path, row: &[String]) {
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .unwrap();
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(row).unwrap();
        writer.flush().unwrap();
    }
}
