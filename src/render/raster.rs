use image::{Rgb, RgbImage};
use log::debug;

use super::font;
use super::{legend_layout, RenderOptions, Transform, ARM_EDGE, ARM_FILL, LABEL_HEIGHT, MARK_ALPHA, TEXT};
use crate::scene::{DrawableShape, OutlinePass, Scene};
use crate::variant::Track;

type Color = (u8, u8, u8);

/// Whether a point lies in a rounded rectangle spanning `x0..x1`, `y0..y1`.
fn in_rounded_rect(px: f64, py: f64, x0: f64, y0: f64, x1: f64, y1: f64, r: f64) -> bool {
    if px < x0 || px > x1 || py < y0 || py > y1 {
        return false;
    }
    let cx = px.max(x0 + r).min(x1 - r);
    let cy = py.max(y0 + r).min(y1 - r);
    let (dx, dy) = (px - cx, py - cy);
    dx * dx + dy * dy <= r * r
}

/// White canvas with alpha-blended primitives, all in pixel coordinates.
struct Canvas {
    img: RgbImage,
}

impl Canvas {
    fn new(width: u32, height: u32) -> Self {
        Canvas {
            img: RgbImage::from_pixel(width, height, Rgb([255, 255, 255])),
        }
    }

    fn blend(&mut self, x: i64, y: i64, (r, g, b): Color, alpha: f64) {
        if x < 0 || y < 0 || x >= self.img.width() as i64 || y >= self.img.height() as i64 {
            return;
        }
        let px = self.img.get_pixel_mut(x as u32, y as u32);
        for (dst, src) in px.0.iter_mut().zip([r, g, b]) {
            *dst = (src as f64 * alpha + *dst as f64 * (1.0 - alpha)).round() as u8;
        }
    }

    /// Paint every pixel of the bounding box whose center satisfies `inside`.
    fn fill_where<F>(&mut self, bbox: (f64, f64, f64, f64), color: Color, alpha: f64, inside: F)
    where
        F: Fn(f64, f64) -> bool,
    {
        let (x0, y0, x1, y1) = bbox;
        for y in (y0.floor() as i64)..=(y1.ceil() as i64) {
            for x in (x0.floor() as i64)..=(x1.ceil() as i64) {
                if inside(x as f64 + 0.5, y as f64 + 0.5) {
                    self.blend(x, y, color, alpha);
                }
            }
        }
    }

    fn fill_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Color, alpha: f64) {
        self.fill_where((x0, y0, x1, y1), color, alpha, |px, py| {
            px >= x0 && px <= x1 && py >= y0 && py <= y1
        });
    }

    fn fill_rounded_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, radius: f64, color: Color) {
        let r = radius.min((x1 - x0) / 2.0).min((y1 - y0) / 2.0).max(0.0);
        self.fill_where((x0, y0, x1, y1), color, 1.0, |px, py| {
            in_rounded_rect(px, py, x0, y0, x1, y1, r)
        });
    }

    fn stroke_rounded_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, radius: f64, line: f64, color: Color) {
        let r = radius.min((x1 - x0) / 2.0).min((y1 - y0) / 2.0).max(0.0);
        let inner_r = (r - line).max(0.0);
        self.fill_where((x0, y0, x1, y1), color, 1.0, |px, py| {
            in_rounded_rect(px, py, x0, y0, x1, y1, r)
                && !in_rounded_rect(px, py, x0 + line, y0 + line, x1 - line, y1 - line, inner_r)
        });
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        let r2 = radius * radius;
        self.fill_where((cx - radius, cy - radius, cx + radius, cy + radius), color, 1.0, |px, py| {
            (px - cx).powi(2) + (py - cy).powi(2) <= r2
        });
    }

    fn vline(&mut self, x: f64, y0: f64, y1: f64, line: f64, color: Color, alpha: f64) {
        let half = (line / 2.0).max(0.5);
        self.fill_rect(x - half, y0.min(y1), x + half, y0.max(y1), color, alpha);
    }

    /// Draw `text` with its baseline at `baseline`, starting at `x`.
    fn text(&mut self, x: f64, baseline: f64, text: &str, scale: u32, color: Color) {
        let top = baseline.round() as i64 - (7 * scale) as i64;
        let mut left = x.round() as i64;
        for c in text.chars() {
            for (col, row) in font::pixels(c) {
                for dy in 0..scale {
                    for dx in 0..scale {
                        self.blend(
                            left + (col * scale + dx) as i64,
                            top + (row * scale + dy) as i64,
                            color,
                            1.0,
                        );
                    }
                }
            }
            left += (font::ADVANCE * scale) as i64;
        }
    }
}

/// Rasterize `scene`, painting shapes in scene order.
pub fn render_raster(scene: &Scene, options: &RenderOptions) -> RgbImage {
    let t = Transform::new(scene.bounds, options.pixels_per_unit);
    let mut canvas = Canvas::new(t.width_px(), t.height_px());
    debug!("image size: {}x{}", t.width_px(), t.height_px());

    let text_scale = ((t.dist(LABEL_HEIGHT) / font::GLYPH_ROWS as f64).round() as u32).max(1);
    let arm_line = t.dist(0.03).max(1.0);
    let mark_line = t.dist(0.02).max(1.0);

    for shape in &scene.shapes {
        match shape {
            DrawableShape::ChromosomeLabel { x, y, text } => {
                let width = (font::text_width(text) * text_scale) as f64;
                canvas.text(t.x(*x) - width, t.y(*y), text, text_scale, TEXT);
            }
            DrawableShape::ArmOutline {
                x,
                y,
                width,
                height,
                corner_radius,
                pass,
            } => {
                let (x0, x1) = (t.x(*x), t.x(x + width));
                let (y0, y1) = (t.y(y + height), t.y(*y));
                let r = t.dist(*corner_radius);
                if *pass == OutlinePass::Fill {
                    canvas.fill_rounded_rect(x0, y0, x1, y1, r, ARM_FILL);
                }
                canvas.stroke_rounded_rect(x0, y0, x1, y1, r, arm_line, ARM_EDGE);
            }
            DrawableShape::CentromereCircle { cx, cy, radius } => {
                canvas.fill_circle(t.x(*cx), t.y(*cy), t.dist(*radius), ARM_EDGE);
            }
            DrawableShape::VariantMark { x, y_min, y_max, class } => {
                let color = class.track().style().color;
                canvas.vline(t.x(*x), t.y(*y_min), t.y(*y_max), mark_line, color, MARK_ALPHA);
            }
            DrawableShape::RohBlock { x, y, width, height } => {
                let color = Track::Roh.style().color;
                canvas.fill_rect(t.x(*x), t.y(y + height), t.x(x + width), t.y(*y), color, 1.0);
            }
        }
    }

    if options.legend {
        let ((lx, ly, lw, lh), entries) = legend_layout(&scene.bounds);
        let (x0, y0, x1, y1) = (t.x(lx), t.y(ly + lh), t.x(lx + lw), t.y(ly));
        canvas.fill_rounded_rect(x0, y0, x1, y1, t.dist(0.1), (255, 255, 255));
        canvas.stroke_rounded_rect(x0, y0, x1, y1, t.dist(0.1), 1.0, (204, 204, 204));
        for entry in entries {
            let style = entry.track.style();
            canvas.fill_circle(t.x(entry.dot_x), t.y(entry.dot_y), t.dist(0.12), style.color);
            canvas.text(t.x(entry.text_x), t.y(entry.baseline), style.label, text_scale, TEXT);
        }
    }

    canvas.img
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;
    use crate::reference::GenomeBuild;
    use crate::scene::assemble;
    use crate::variant::{Variant, VariantClass};

    #[test]
    fn test_rounded_rect_cuts_corners() {
        assert!(in_rounded_rect(5.0, 5.0, 0.0, 0.0, 10.0, 10.0, 3.0));
        assert!(!in_rounded_rect(0.2, 0.2, 0.0, 0.0, 10.0, 10.0, 3.0));
        assert!(in_rounded_rect(0.2, 5.0, 0.0, 0.0, 10.0, 10.0, 3.0));
        assert!(!in_rounded_rect(11.0, 5.0, 0.0, 0.0, 10.0, 10.0, 3.0));
    }

    #[test]
    fn test_blend_half_alpha() {
        let mut canvas = Canvas::new(2, 2);
        canvas.blend(0, 0, (0, 0, 0), 0.5);
        canvas.blend(5, 5, (0, 0, 0), 1.0);
        assert_eq!(canvas.img.get_pixel(0, 0).0, [128, 128, 128]);
        assert_eq!(canvas.img.get_pixel(1, 1).0, [255, 255, 255]);
    }

    #[test]
    fn test_render_draws_arms_and_marks() {
        let layout = Layout::default();
        let variants = [Variant {
            chromosome: "1".into(),
            position_bp: 50_000_000,
            class: VariantClass::MaternalOnly,
            line: 1,
        }];
        let scene = assemble(GenomeBuild::Hg38, &variants, &[], &layout, "").unwrap();
        let options = RenderOptions {
            pixels_per_unit: 20.0,
            legend: true,
        };
        let img = render_raster(&scene, &options);
        assert_eq!((img.width(), img.height()), (600, 750));

        let t = Transform::new(scene.bounds, 20.0);
        // middle of chr1's first arm, away from the mark
        let fill = img.get_pixel(t.x(2.0) as u32, t.y(0.0) as u32);
        assert_eq!(fill.0, [245, 245, 245]);
        // centromere
        let centro = img.get_pixel(t.x(12.34) as u32, t.y(0.0) as u32);
        assert_eq!(centro.0, [192, 192, 192]);
        // maternal tick below the axis, blended over the arm fill
        let mark = img.get_pixel(t.x(5.0) as u32, t.y(-0.3) as u32);
        assert_ne!(mark.0, [245, 245, 245]);
        assert!(mark.0[0] > mark.0[1]);
        // background
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
    }
}
