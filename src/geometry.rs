use log::trace;

use crate::coords::normalize;
use crate::error::{IdeogramError, Result};
use crate::layout::Layout;
use crate::reference::ChromosomeRef;

/// Horizontal extent of one arm in row-local plot units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arm {
    pub start: f64,
    pub width: f64,
}

impl Arm {
    pub fn end(&self) -> f64 {
        self.start + self.width
    }

    /// The part of the arm away from its rounded tips, inclusive at both ends.
    pub fn safe_zone(&self, layout: &Layout) -> (f64, f64) {
        let margin = layout.tip_margin();
        (self.start + margin, self.end() - margin)
    }

    pub fn contains_safe(&self, x: f64, layout: &Layout) -> bool {
        let (lo, hi) = self.safe_zone(layout);
        lo <= x && x <= hi
    }
}

/// Two rounded arms joined by a circular centromere, for one chromosome row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmGeometry {
    pub row_y: f64,
    pub arm1: Arm,
    pub arm2: Arm,
    pub centromere_center: f64,
    pub centromere_radius: f64,
}

impl ArmGeometry {
    /// Compute the shape of `chrom` drawn on row `row_index` (0 is the top row).
    ///
    /// Fails when the centromere sits so close to either end that an arm would
    /// have no positive width.
    pub fn compute(chrom: &ChromosomeRef, row_index: usize, layout: &Layout) -> Result<Self> {
        let r_c = layout.centromere_radius;
        let centromere_norm = normalize(chrom.centromere_bp, layout.scale_factor);
        let length_norm = normalize(chrom.total_length_bp, layout.scale_factor);

        let arm1_start = 0.0;
        let arm1_width = centromere_norm - r_c;
        let arm2_start = arm1_start + arm1_width + 2.0 * r_c;
        let arm2_width = length_norm - centromere_norm - r_c;

        if arm1_width <= 0.0 || arm2_width <= 0.0 {
            return Err(IdeogramError::DegenerateArm {
                chromosome: chrom.id.to_string(),
                centromere_bp: chrom.centromere_bp,
                arm1_width,
                arm2_width,
            });
        }

        let geometry = ArmGeometry {
            row_y: layout.row_y(row_index),
            arm1: Arm {
                start: arm1_start,
                width: arm1_width,
            },
            arm2: Arm {
                start: arm2_start,
                width: arm2_width,
            },
            centromere_center: arm1_start + arm1_width + r_c,
            centromere_radius: r_c,
        };
        trace!("chr{} geometry: {:?}", chrom.id, geometry);
        Ok(geometry)
    }

    /// Leftmost renderable x: the start of arm1's safe zone.
    pub fn safe_start(&self, layout: &Layout) -> f64 {
        self.arm1.safe_zone(layout).0
    }

    /// Rightmost renderable x: the end of arm2's safe zone.
    pub fn safe_end(&self, layout: &Layout) -> f64 {
        self.arm2.safe_zone(layout).1
    }

    pub fn length(&self) -> f64 {
        self.arm2.end() - self.arm1.start
    }
}
