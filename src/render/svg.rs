use super::{legend_layout, RenderOptions, Transform, ARM_EDGE, ARM_FILL, LABEL_HEIGHT, MARK_ALPHA};
use crate::scene::{DrawableShape, OutlinePass, Scene};
use crate::variant::Track;

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("rgb({},{},{})", r, g, b)
}

/// Render `scene` as a standalone SVG document with vector text.
pub fn render_svg(scene: &Scene, options: &RenderOptions) -> String {
    let t = Transform::new(scene.bounds, options.pixels_per_unit);
    let (width, height) = (t.width_px(), t.height_px());
    let font_size = t.dist(LABEL_HEIGHT);
    let arm_line = t.dist(0.03).max(1.0);
    let mark_line = t.dist(0.02).max(1.0);

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<style>text {{ font-family: sans-serif; font-size: {:.1}px; }}</style>"#,
        font_size
    ));
    svg.push('\n');
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");

    for shape in &scene.shapes {
        match shape {
            DrawableShape::ChromosomeLabel { x, y, text } => {
                svg.push_str(&format!(
                    r#"<text x="{:.2}" y="{:.2}" text-anchor="end">{}</text>"#,
                    t.x(*x),
                    t.y(*y),
                    escape_xml(text)
                ));
                svg.push('\n');
            }
            DrawableShape::ArmOutline {
                x,
                y,
                width,
                height,
                corner_radius,
                pass,
            } => {
                let fill = match pass {
                    OutlinePass::Fill => rgb(ARM_FILL),
                    OutlinePass::Border => "none".to_string(),
                };
                let r = t.dist(*corner_radius).min(t.dist(*width) / 2.0);
                svg.push_str(&format!(
                    r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{:.2}" ry="{:.2}" fill="{}" stroke="{}" stroke-width="{:.1}"/>"#,
                    t.x(*x),
                    t.y(y + height),
                    t.dist(*width),
                    t.dist(*height),
                    r,
                    r,
                    fill,
                    rgb(ARM_EDGE),
                    arm_line
                ));
                svg.push('\n');
            }
            DrawableShape::CentromereCircle { cx, cy, radius } => {
                svg.push_str(&format!(
                    r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
                    t.x(*cx),
                    t.y(*cy),
                    t.dist(*radius),
                    rgb(ARM_EDGE)
                ));
                svg.push('\n');
            }
            DrawableShape::VariantMark { x, y_min, y_max, class } => {
                svg.push_str(&format!(
                    r#"<line x1="{x:.2}" y1="{:.2}" x2="{x:.2}" y2="{:.2}" stroke="{}" stroke-width="{:.1}" stroke-opacity="{}" class="{}"/>"#,
                    t.y(*y_min),
                    t.y(*y_max),
                    rgb(class.track().style().color),
                    mark_line,
                    MARK_ALPHA,
                    class.token(),
                    x = t.x(*x)
                ));
                svg.push('\n');
            }
            DrawableShape::RohBlock { x, y, width, height } => {
                svg.push_str(&format!(
                    r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" class="ROH"/>"#,
                    t.x(*x),
                    t.y(y + height),
                    t.dist(*width),
                    t.dist(*height),
                    rgb(Track::Roh.style().color)
                ));
                svg.push('\n');
            }
        }
    }

    if options.legend {
        let ((lx, ly, lw, lh), entries) = legend_layout(&scene.bounds);
        svg.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{:.2}" fill="white" stroke="rgb(204,204,204)"/>"#,
            t.x(lx),
            t.y(ly + lh),
            t.dist(lw),
            t.dist(lh),
            t.dist(0.1)
        ));
        svg.push('\n');
        for entry in entries {
            let style = entry.track.style();
            svg.push_str(&format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
                t.x(entry.dot_x),
                t.y(entry.dot_y),
                t.dist(0.12),
                rgb(style.color)
            ));
            svg.push('\n');
            svg.push_str(&format!(
                r#"<text x="{:.2}" y="{:.2}">{}</text>"#,
                t.x(entry.text_x),
                t.y(entry.baseline),
                escape_xml(style.label)
            ));
            svg.push('\n');
        }
    }

    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;
    use crate::reference::GenomeBuild;
    use crate::scene::assemble;
    use crate::variant::{RohInterval, Variant, VariantClass};

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
    }

    #[test]
    fn test_document_structure() {
        let layout = Layout::default();
        let variants = [
            Variant {
                chromosome: "X".into(),
                position_bp: 100_000_000,
                class: VariantClass::PaternalOnly,
                line: 1,
            },
            Variant {
                chromosome: "X".into(),
                position_bp: 1,
                class: VariantClass::PaternalOnly,
                line: 2,
            },
        ];
        let intervals = [RohInterval {
            chromosome: "5".into(),
            start_bp: 1_000_000,
            end_bp: 20_000_000,
            line: 1,
        }];
        let scene = assemble(GenomeBuild::T2t, &variants, &intervals, &layout, "chr").unwrap();
        let svg = render_svg(&scene, &RenderOptions::default());

        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("class=\"FF\"").count(), 1);
        assert_eq!(svg.matches("class=\"ROH\"").count(), 1);
        assert_eq!(svg.matches("<circle").count(), 24 + 4);
        assert!(svg.contains(">chrX</text>"));
        assert!(svg.contains(">ROH regions</text>"));
    }

    #[test]
    fn test_legend_can_be_disabled() {
        let scene = assemble(GenomeBuild::Hg19, &[], &[], &Layout::default(), "").unwrap();
        let options = RenderOptions {
            legend: false,
            ..RenderOptions::default()
        };
        let svg = render_svg(&scene, &options);
        assert!(!svg.contains("Biparental"));
        assert_eq!(svg.matches("<circle").count(), 24);
    }
}
