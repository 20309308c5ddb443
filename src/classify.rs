//! Variant inclusion against arm safe zones, and ROH clipping to the
//! renderable extent of a chromosome.

use std::collections::BTreeSet;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use log::warn;

use crate::coords::{key_to_norm, normalize, position_key};
use crate::error::{IdeogramError, Result};
use crate::geometry::ArmGeometry;
use crate::layout::Layout;
use crate::variant::{RohInterval, Variant, VariantClass};

/// One counter per variant class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassCounts([usize; 3]);

impl ClassCounts {
    pub fn get(&self, class: VariantClass) -> usize {
        self.0[class.index()]
    }

    pub fn increment(&mut self, class: VariantClass) {
        self.0[class.index()] += 1;
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}

impl Add for ClassCounts {
    type Output = ClassCounts;

    fn add(mut self, rhs: ClassCounts) -> ClassCounts {
        self += rhs;
        self
    }
}

impl AddAssign for ClassCounts {
    fn add_assign(&mut self, rhs: ClassCounts) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a += b;
        }
    }
}

impl Sum for ClassCounts {
    fn sum<I: Iterator<Item = ClassCounts>>(iter: I) -> Self {
        iter.fold(ClassCounts::default(), Add::add)
    }
}

/// Distinct normalized positions of one chromosome's variants, per class.
///
/// Positions are stored as quantized keys, so variants that normalize to the
/// same value collapse into a single mark.
#[derive(Debug, Clone, Default)]
pub struct ChromosomeVariants {
    positions: [BTreeSet<i64>; 3],
}

impl ChromosomeVariants {
    /// Returns false when the position was already present for this class.
    pub fn insert(&mut self, variant: &Variant, layout: &Layout) -> bool {
        let key = position_key(variant.position_bp, layout.scale_factor);
        self.positions[variant.class.index()].insert(key)
    }

    pub fn positions(&self, class: VariantClass) -> impl Iterator<Item = f64> + '_ {
        self.positions[class.index()].iter().map(|&k| key_to_norm(k))
    }

    pub fn len(&self) -> usize {
        self.positions.iter().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of classifying one chromosome's variants.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// Included marks in class order, ascending x within a class.
    pub marks: Vec<(VariantClass, f64)>,
    pub total: ClassCounts,
    pub filtered: ClassCounts,
}

/// True when `x` lies inside the safe zone of either arm.
pub fn is_renderable(x: f64, geometry: &ArmGeometry, layout: &Layout) -> bool {
    geometry.arm1.contains_safe(x, layout) || geometry.arm2.contains_safe(x, layout)
}

pub fn classify_variants(
    variants: &ChromosomeVariants,
    geometry: &ArmGeometry,
    layout: &Layout,
) -> Classification {
    let mut result = Classification::default();

    for class in VariantClass::ALL {
        for x in variants.positions(class) {
            result.total.increment(class);
            if is_renderable(x, geometry, layout) {
                result.marks.push((class, x));
            } else {
                result.filtered.increment(class);
            }
        }
    }

    result
}

/// An ROH interval clamped to the renderable extent of its chromosome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClippedRoh {
    pub start: f64,
    pub end: f64,
}

impl ClippedRoh {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Clamp an ROH interval to `[arm1 safe start, arm2 safe end]`.
///
/// Returns `Ok(None)` only when the interval does not touch that range at
/// all, e.g. one lying entirely beyond the end of the chromosome. Point
/// intervals inside it come back as zero-width blocks.
pub fn clip_roh(interval: &RohInterval, geometry: &ArmGeometry, layout: &Layout) -> Result<Option<ClippedRoh>> {
    if interval.start_bp > interval.end_bp {
        return Err(IdeogramError::InvertedInterval {
            line: interval.line,
            chromosome: interval.chromosome.clone(),
            start: interval.start_bp,
            end: interval.end_bp,
        });
    }

    let lo = geometry.safe_start(layout);
    let hi = geometry.safe_end(layout);
    let p1 = normalize(interval.start_bp, layout.scale_factor);
    let p2 = normalize(interval.end_bp, layout.scale_factor);

    if p2 < lo || p1 > hi {
        warn!(
            "Dropping ROH chr{}:{}-{} (line {}): outside the drawable arms",
            interval.chromosome, interval.start_bp, interval.end_bp, interval.line
        );
        return Ok(None);
    }
    Ok(Some(ClippedRoh {
        start: p1.max(lo),
        end: p2.min(hi),
    }))
}
