//! Folds per-chromosome geometry, variant marks and ROH blocks into the
//! ordered shape list handed to the renderers.

use log::{debug, info};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::classify::{classify_variants, clip_roh, ChromosomeVariants, ClassCounts};
use crate::error::{IdeogramError, InputKind, Result};
use crate::geometry::{Arm, ArmGeometry};
use crate::layout::Layout;
use crate::reference::{ChromosomeRef, GenomeBuild};
use crate::variant::{RohInterval, Track, Variant, VariantClass};

/// Arms are painted twice: filled first, then re-stroked on top of the marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlinePass {
    Fill,
    Border,
}

/// A renderer-agnostic shape in plot coordinates (y grows upwards).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawableShape {
    /// Right-aligned text whose baseline sits at `y`.
    ChromosomeLabel { x: f64, y: f64, text: String },
    /// Rounded rectangle with lower-left corner at (`x`, `y`).
    ArmOutline {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        corner_radius: f64,
        pass: OutlinePass,
    },
    CentromereCircle { cx: f64, cy: f64, radius: f64 },
    VariantMark {
        x: f64,
        y_min: f64,
        y_max: f64,
        class: VariantClass,
    },
    RohBlock {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_variants: ClassCounts,
    pub filtered_variants: ClassCounts,
    /// ROH intervals lying entirely outside the drawable arms.
    pub dropped_roh: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.total_variants.total()
    }

    pub fn excluded(&self) -> usize {
        self.filtered_variants.total()
    }

    pub fn included(&self, class: VariantClass) -> usize {
        self.total_variants.get(class) - self.filtered_variants.get(class)
    }
}

/// Plot-space frame of the figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Frame for `rows` rows whose longest chromosome spans `max_length`.
    /// Never narrower than 30 units so that figures of all builds line up.
    fn for_rows(rows: usize, max_length: f64, layout: &Layout) -> Self {
        let last_row = layout.row_y(rows.saturating_sub(1));
        Bounds {
            x_min: -2.0,
            x_max: (max_length + 1.0).max(28.0),
            y_min: last_row - layout.arm_height,
            y_max: 2.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// The assembled figure.
#[derive(Debug, Clone)]
pub struct Scene {
    pub shapes: Vec<DrawableShape>,
    pub summary: Summary,
    pub rows: usize,
    /// Longest chromosome, in plot units.
    pub max_length: f64,
    pub bounds: Bounds,
}

/// Shapes and counts of a single chromosome row.
struct RowScene {
    shapes: Vec<DrawableShape>,
    total: ClassCounts,
    filtered: ClassCounts,
    dropped_roh: usize,
    length: f64,
}

fn arm_outline(arm: &Arm, geometry: &ArmGeometry, layout: &Layout, pass: OutlinePass) -> DrawableShape {
    DrawableShape::ArmOutline {
        x: arm.start,
        y: geometry.row_y - layout.arm_height / 2.0,
        width: arm.width,
        height: layout.arm_height,
        corner_radius: layout.tip_radius,
        pass,
    }
}

fn assemble_row(
    chrom: &ChromosomeRef,
    row_index: usize,
    variants: Option<&ChromosomeVariants>,
    intervals: &[&RohInterval],
    layout: &Layout,
    label_prefix: &str,
) -> Result<RowScene> {
    let geometry = ArmGeometry::compute(chrom, row_index, layout)?;
    let y = geometry.row_y;
    let mut shapes = Vec::new();

    shapes.push(DrawableShape::ChromosomeLabel {
        x: geometry.arm1.start - 1.0,
        y: y - 0.2,
        text: format!("{}{}", label_prefix, chrom.id),
    });
    shapes.push(arm_outline(&geometry.arm1, &geometry, layout, OutlinePass::Fill));
    shapes.push(arm_outline(&geometry.arm2, &geometry, layout, OutlinePass::Fill));
    shapes.push(DrawableShape::CentromereCircle {
        cx: geometry.centromere_center,
        cy: y,
        radius: geometry.centromere_radius,
    });

    let classification = match variants {
        Some(v) => classify_variants(v, &geometry, layout),
        None => Default::default(),
    };
    for &(class, x) in &classification.marks {
        let style = class.track().style();
        shapes.push(DrawableShape::VariantMark {
            x,
            y_min: y + style.y_min,
            y_max: y + style.y_max,
            class,
        });
    }

    let roh_style = Track::Roh.style();
    let mut dropped_roh = 0;
    for interval in intervals {
        match clip_roh(interval, &geometry, layout)? {
            Some(clipped) => shapes.push(DrawableShape::RohBlock {
                x: clipped.start,
                y: y + layout.arm_height / 2.0 + roh_style.y_min,
                width: clipped.width(),
                height: roh_style.y_max - roh_style.y_min,
            }),
            None => dropped_roh += 1,
        }
    }

    shapes.push(arm_outline(&geometry.arm1, &geometry, layout, OutlinePass::Border));
    shapes.push(arm_outline(&geometry.arm2, &geometry, layout, OutlinePass::Border));

    debug!(
        "chr{}: {} marks ({} filtered), {} ROH blocks",
        chrom.id,
        classification.marks.len(),
        classification.filtered.total(),
        intervals.len() - dropped_roh
    );

    Ok(RowScene {
        shapes,
        total: classification.total,
        filtered: classification.filtered,
        dropped_roh,
        length: geometry.length(),
    })
}

/// Build the figure for `genome`, one row per chromosome in display order.
///
/// Rows are classified in parallel; their counters are summed afterwards.
pub fn assemble(
    genome: GenomeBuild,
    variants: &[Variant],
    intervals: &[RohInterval],
    layout: &Layout,
    label_prefix: &str,
) -> Result<Scene> {
    let mut by_chrom: FxHashMap<&str, ChromosomeVariants> = FxHashMap::default();
    let mut collapsed = 0usize;
    for variant in variants {
        if !genome.contains(&variant.chromosome) {
            return Err(IdeogramError::UnknownChromosome {
                input: InputKind::Report,
                line: variant.line,
                chromosome: variant.chromosome.clone(),
                genome: genome.to_string(),
            });
        }
        if !by_chrom
            .entry(variant.chromosome.as_str())
            .or_default()
            .insert(variant, layout)
        {
            collapsed += 1;
        }
    }
    if collapsed > 0 {
        debug!("{} variants share a plotted position with another of the same class", collapsed);
    }

    let mut roh_by_chrom: FxHashMap<&str, Vec<&RohInterval>> = FxHashMap::default();
    for interval in intervals {
        if !genome.contains(&interval.chromosome) {
            return Err(IdeogramError::UnknownChromosome {
                input: InputKind::Roh,
                line: interval.line,
                chromosome: interval.chromosome.clone(),
                genome: genome.to_string(),
            });
        }
        roh_by_chrom
            .entry(interval.chromosome.as_str())
            .or_default()
            .push(interval);
    }

    info!("Assembling {} chromosome rows for {}...", genome.chromosomes().len(), genome);

    let rows: Vec<RowScene> = genome
        .chromosomes()
        .par_iter()
        .enumerate()
        .map(|(row_index, chrom)| {
            let intervals = roh_by_chrom.get(chrom.id).map(Vec::as_slice).unwrap_or(&[]);
            assemble_row(
                chrom,
                row_index,
                by_chrom.get(chrom.id),
                intervals,
                layout,
                label_prefix,
            )
        })
        .collect::<Result<_>>()?;

    let row_count = rows.len();
    let mut shapes = Vec::new();
    let mut summary = Summary::default();
    let mut max_length = 0.0f64;
    for row in rows {
        shapes.extend(row.shapes);
        summary.total_variants += row.total;
        summary.filtered_variants += row.filtered;
        summary.dropped_roh += row.dropped_roh;
        max_length = max_length.max(row.length);
    }

    Ok(Scene {
        shapes,
        summary,
        rows: row_count,
        max_length,
        bounds: Bounds::for_rows(row_count, max_length, layout),
    })
}
