//! Fixed plot-space layout shared by the geometry engine, the classifier and
//! the renderers.

/// Immutable layout configuration. All lengths are in plot units; one unit
/// corresponds to `scale_factor` base pairs on the x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Base pairs per plot unit.
    pub scale_factor: f64,
    /// Vertical distance between consecutive chromosome rows.
    pub row_spacing: f64,
    pub arm_height: f64,
    /// Rounding radius of the arm end caps.
    pub tip_radius: f64,
    pub centromere_radius: f64,
    pub roh_band_height: f64,
}

impl Default for Layout {
    fn default() -> Self {
        let arm_height = 1.0;
        Layout {
            scale_factor: 10_000_000.0,
            row_spacing: 1.5,
            arm_height,
            tip_radius: 0.5,
            centromere_radius: arm_height / 8.0,
            roh_band_height: 0.15,
        }
    }
}

impl Layout {
    /// Distance kept between a variant mark and either end of an arm.
    pub fn tip_margin(&self) -> f64 {
        self.tip_radius / 2.0
    }

    pub fn row_y(&self, row_index: usize) -> f64 {
        -(row_index as f64) * self.row_spacing
    }
}
