//! Turns an assembled [`Scene`] into an image file.
//!
//! The output format follows the file extension: `.svg` produces an SVG
//! document, anything else goes through the `image` crate as a raster.

pub mod font;
pub mod raster;
pub mod svg;

use std::path::Path;

use log::info;

use crate::error::{IdeogramError, Result};
use crate::scene::{Bounds, Scene};
use crate::variant::Track;

/// Arm fill (whitesmoke).
pub const ARM_FILL: (u8, u8, u8) = (245, 245, 245);
/// Arm border and centromere (silver).
pub const ARM_EDGE: (u8, u8, u8) = (192, 192, 192);
pub const TEXT: (u8, u8, u8) = (0, 0, 0);
pub const MARK_ALPHA: f64 = 0.5;
/// Upper bound on the raster resolution; keeps the pixel buffer allocatable.
pub const MAX_PIXELS_PER_UNIT: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Output pixels per plot unit.
    pub pixels_per_unit: f64,
    pub legend: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            pixels_per_unit: 50.0,
            legend: true,
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> Result<()> {
        let ppu = self.pixels_per_unit;
        if ppu.is_finite() && ppu > 0.0 && ppu <= MAX_PIXELS_PER_UNIT {
            Ok(())
        } else {
            Err(IdeogramError::InvalidResolution {
                value: ppu,
                max: MAX_PIXELS_PER_UNIT,
            })
        }
    }
}

/// Plot space to pixel space (y axis flipped).
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    bounds: Bounds,
    ppu: f64,
}

impl Transform {
    pub fn new(bounds: Bounds, pixels_per_unit: f64) -> Self {
        Transform {
            bounds,
            ppu: pixels_per_unit,
        }
    }

    pub fn x(&self, x: f64) -> f64 {
        (x - self.bounds.x_min) * self.ppu
    }

    pub fn y(&self, y: f64) -> f64 {
        (self.bounds.y_max - y) * self.ppu
    }

    pub fn dist(&self, d: f64) -> f64 {
        d * self.ppu
    }

    pub fn width_px(&self) -> u32 {
        (self.bounds.width() * self.ppu).ceil().max(1.0) as u32
    }

    pub fn height_px(&self) -> u32 {
        (self.bounds.height() * self.ppu).ceil().max(1.0) as u32
    }
}

/// Plot-space height of label text.
pub const LABEL_HEIGHT: f64 = 0.45;
const LEGEND_ROW: f64 = 0.6;

/// One legend row: a colored dot followed by its label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry {
    pub track: Track,
    pub dot_x: f64,
    pub dot_y: f64,
    pub text_x: f64,
    pub baseline: f64,
}

/// Legend frame (x, y, width, height; lower-left origin) and its entries,
/// anchored in the lower right corner of the figure.
pub fn legend_layout(bounds: &Bounds) -> ((f64, f64, f64, f64), Vec<LegendEntry>) {
    let width = 5.0;
    let height = LEGEND_ROW * Track::LEGEND.len() as f64 + 0.4;
    let x = bounds.x_max - 0.5 - width;
    let y = bounds.y_min + 0.5;

    let entries = Track::LEGEND
        .iter()
        .enumerate()
        .map(|(i, &track)| {
            let dot_y = y + height - 0.5 - i as f64 * LEGEND_ROW;
            LegendEntry {
                track,
                dot_x: x + 0.4,
                dot_y,
                text_x: x + 0.8,
                baseline: dot_y - LABEL_HEIGHT / 2.5,
            }
        })
        .collect();

    ((x, y, width, height), entries)
}

pub fn is_svg(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

/// Render `scene` and write it to `path`.
pub fn save(scene: &Scene, path: &Path, options: &RenderOptions) -> Result<()> {
    options.validate()?;
    if is_svg(path) {
        info!("Rendering SVG...");
        let document = svg::render_svg(scene, options);
        info!("Saving to {:?}...", path);
        std::fs::write(path, document).map_err(|source| IdeogramError::Write {
            path: path.to_path_buf(),
            source,
        })
    } else {
        info!("Rendering image...");
        let img = raster::render_raster(scene, options);
        info!("Saving to {:?}...", path);
        img.save(path).map_err(|source| IdeogramError::Encode {
            path: path.to_path_buf(),
            source,
        })
    }
}
