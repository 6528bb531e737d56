//! Figure composition: frame raster, title, and colorbar legend.
//!
//! Mirrors the capture tool's plot layout: the frame drawn cell-by-cell
//! through the color map, a title above it, and a vertical colorbar on the
//! right with tick labels and a rotated axis label.

use image::imageops::{overlay, rotate270};
use image::{ImageBuffer, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use rusttype::{Font, Scale};
use tracing::warn;

use crate::colormap::ColorMap;
use crate::frame::{Frame, FRAME_HEIGHT, FRAME_WIDTH};

/// Embedded font for titles and legend labels.
const FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const TEXT_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
const BORDER_COLOR: Rgba<u8> = Rgba([64, 64, 64, 255]);

/// Axis label drawn beside the colorbar.
const LEGEND_LABEL: &str = "Temperature (°C)";

/// Pixel layout of a rendered figure.
#[derive(Debug, Clone)]
pub struct FigureLayout {
    /// Square pixels per frame cell.
    pub cell_size: u32,
    /// Outer margin on all sides.
    pub margin: u32,
    /// Vertical space reserved for the title strip.
    pub title_height: u32,
    /// Width of the colorbar.
    pub colorbar_width: u32,
    /// Gap between the frame raster and the colorbar.
    pub colorbar_gap: u32,
    /// Space to the right of the colorbar for tick and axis labels.
    pub label_area: u32,
    /// Number of tick labels along the colorbar.
    pub tick_count: usize,
    /// Font size for all text.
    pub font_size: f32,
}

impl Default for FigureLayout {
    fn default() -> Self {
        Self {
            cell_size: 16,
            margin: 16,
            title_height: 32,
            colorbar_width: 20,
            colorbar_gap: 16,
            label_area: 72,
            tick_count: 5,
            font_size: 14.0,
        }
    }
}

impl FigureLayout {
    /// Width and height of the frame raster area.
    pub fn plot_size(&self) -> (u32, u32) {
        (
            FRAME_WIDTH as u32 * self.cell_size,
            FRAME_HEIGHT as u32 * self.cell_size,
        )
    }

    /// Top-left corner of the frame raster area.
    pub fn plot_origin(&self) -> (u32, u32) {
        (self.margin, self.margin + self.title_height)
    }

    /// Full canvas dimensions.
    pub fn canvas_size(&self) -> (u32, u32) {
        let (plot_w, plot_h) = self.plot_size();
        (
            self.margin + plot_w + self.colorbar_gap + self.colorbar_width + self.label_area
                + self.margin,
            self.margin + self.title_height + plot_h + self.margin,
        )
    }
}

/// Render one frame as a complete figure.
///
/// The title reads `Thermal Image at <timestamp>`. Text is skipped with a
/// warning if the embedded font fails to load; the raster and colorbar are
/// drawn regardless.
pub fn render_figure(
    frame: &Frame,
    colormap: &ColorMap,
    timestamp: &str,
    layout: &FigureLayout,
) -> RgbaImage {
    let (canvas_w, canvas_h) = layout.canvas_size();
    let mut img: RgbaImage = ImageBuffer::from_pixel(canvas_w, canvas_h, BACKGROUND);

    let (plot_x, plot_y) = layout.plot_origin();
    let (plot_w, plot_h) = layout.plot_size();

    draw_frame_raster(&mut img, frame, colormap, layout);

    let bar_x = plot_x + plot_w + layout.colorbar_gap;
    draw_colorbar(&mut img, colormap, bar_x, plot_y, layout.colorbar_width, plot_h);

    // Axes borders
    draw_hollow_rect_mut(
        &mut img,
        Rect::at(plot_x as i32 - 1, plot_y as i32 - 1).of_size(plot_w + 2, plot_h + 2),
        BORDER_COLOR,
    );
    draw_hollow_rect_mut(
        &mut img,
        Rect::at(bar_x as i32 - 1, plot_y as i32 - 1)
            .of_size(layout.colorbar_width + 2, plot_h + 2),
        BORDER_COLOR,
    );

    let font = match Font::try_from_bytes(FONT_DATA) {
        Some(f) => f,
        None => {
            warn!("failed to load embedded font, rendering figure without text");
            return img;
        }
    };
    let scale = Scale::uniform(layout.font_size);

    draw_title(&mut img, &font, scale, timestamp, canvas_w, layout);
    draw_ticks(&mut img, &font, scale, colormap, bar_x, plot_y, plot_h, layout);
    draw_axis_label(&mut img, &font, scale, canvas_w, plot_y, plot_h, layout);

    img
}

/// Fill each frame cell with its mapped color, scaled up by `cell_size`.
fn draw_frame_raster(img: &mut RgbaImage, frame: &Frame, colormap: &ColorMap, layout: &FigureLayout) {
    let (plot_x, plot_y) = layout.plot_origin();

    for row in 0..FRAME_HEIGHT {
        for col in 0..FRAME_WIDTH {
            let c = colormap.map(frame.get(row, col));
            let x = plot_x + col as u32 * layout.cell_size;
            let y = plot_y + row as u32 * layout.cell_size;
            draw_filled_rect_mut(
                img,
                Rect::at(x as i32, y as i32).of_size(layout.cell_size, layout.cell_size),
                Rgba([c.r, c.g, c.b, 255]),
            );
        }
    }
}

/// Vertical colorbar, high temperatures at the top.
fn draw_colorbar(img: &mut RgbaImage, colormap: &ColorMap, x: u32, y: u32, width: u32, height: u32) {
    let span = colormap.high() - colormap.low();
    for dy in 0..height {
        let t = colormap.high() - span * (dy as f32 / (height - 1) as f32);
        let c = colormap.map(t);
        draw_filled_rect_mut(
            img,
            Rect::at(x as i32, (y + dy) as i32).of_size(width, 1),
            Rgba([c.r, c.g, c.b, 255]),
        );
    }
}

fn draw_title(
    img: &mut RgbaImage,
    font: &Font,
    scale: Scale,
    timestamp: &str,
    canvas_w: u32,
    layout: &FigureLayout,
) {
    let title = format!("Thermal Image at {}", timestamp);
    let (text_w, text_h) = text_size(scale, font, &title);
    let x = (canvas_w as i32 - text_w) / 2;
    let y = layout.margin as i32 + (layout.title_height as i32 - text_h) / 2;
    draw_text_mut(img, TEXT_COLOR, x.max(0), y.max(0), scale, font, &title);
}

/// Tick marks and value labels along the right edge of the colorbar.
#[allow(clippy::too_many_arguments)]
fn draw_ticks(
    img: &mut RgbaImage,
    font: &Font,
    scale: Scale,
    colormap: &ColorMap,
    bar_x: u32,
    bar_y: u32,
    bar_h: u32,
    layout: &FigureLayout,
) {
    if layout.tick_count < 2 {
        return;
    }

    let span = colormap.high() - colormap.low();
    let label_x = (bar_x + layout.colorbar_width + 8) as i32;

    for i in 0..layout.tick_count {
        let frac = i as f32 / (layout.tick_count - 1) as f32;
        let value = colormap.high() - span * frac;
        let y = bar_y as i32 + (frac * (bar_h - 1) as f32) as i32;

        draw_filled_rect_mut(
            img,
            Rect::at((bar_x + layout.colorbar_width) as i32, y).of_size(4, 1),
            BORDER_COLOR,
        );

        let label = format!("{:.1}", value);
        let (_, text_h) = text_size(scale, font, &label);
        draw_text_mut(img, TEXT_COLOR, label_x, y - text_h / 2, scale, font, &label);
    }
}

/// Rotated `Temperature (°C)` label to the right of the tick labels.
fn draw_axis_label(
    img: &mut RgbaImage,
    font: &Font,
    scale: Scale,
    canvas_w: u32,
    plot_y: u32,
    plot_h: u32,
    layout: &FigureLayout,
) {
    let (text_w, text_h) = text_size(scale, font, LEGEND_LABEL);
    if text_w <= 0 || text_h <= 0 {
        return;
    }

    // Draw horizontally on a transparent strip, then rotate to read bottom-up.
    let mut strip: RgbaImage =
        ImageBuffer::from_pixel(text_w as u32 + 2, text_h as u32 + 2, Rgba([0, 0, 0, 0]));
    draw_text_mut(&mut strip, TEXT_COLOR, 1, 1, scale, font, LEGEND_LABEL);
    let rotated = rotate270(&strip);

    let x = canvas_w.saturating_sub(layout.margin + rotated.width());
    let y = plot_y + plot_h.saturating_sub(rotated.height()) / 2;
    overlay(img, &rotated, x as i64, y as i64);
}
