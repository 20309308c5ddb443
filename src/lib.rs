//! Genome-wide ideograms of inherited variants.
//!
//! Each chromosome is drawn as two rounded arms joined by a circular
//! centromere. Biparental, paternal-only and maternal-only variants are
//! ticked along the arms and regions of homozygosity are shaded above them.

pub mod classify;
pub mod coords;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod loader;
pub mod reference;
pub mod render;
pub mod scene;
pub mod variant;

use std::path::PathBuf;

use log::{debug, info};

pub use error::{ErrorKind, IdeogramError, Result};
pub use layout::Layout;
pub use reference::GenomeBuild;
pub use render::RenderOptions;
pub use scene::{Scene, Summary};
pub use variant::VariantClass;

/// Everything a single run needs.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Genome build name, resolved with [`GenomeBuild`]'s `FromStr`.
    pub genome: String,
    pub report: PathBuf,
    pub roh: Option<PathBuf>,
    pub output: PathBuf,
    /// Prepended to every chromosome label, e.g. `chr`.
    pub label_prefix: String,
    pub layout: Layout,
    pub render: RenderOptions,
}

/// Load the inputs, assemble the ideogram and write it to `options.output`.
///
/// Any error aborts before the output file is created.
pub fn run(options: &RunOptions) -> Result<Summary> {
    options.render.validate()?;
    let genome: GenomeBuild = options.genome.parse()?;
    info!("Genome build: {}", genome);

    let variants = loader::load_report(&options.report, genome)?;
    let intervals = match &options.roh {
        Some(path) => loader::load_roh(path, genome)?,
        None => Vec::new(),
    };
    info!("Loaded {} variants and {} ROH intervals", variants.len(), intervals.len());

    let scene = scene::assemble(genome, &variants, &intervals, &options.layout, &options.label_prefix)?;
    debug!("Scene holds {} shapes", scene.shapes.len());

    render::save(&scene, &options.output, &options.render)?;

    let summary = scene.summary;
    for class in VariantClass::ALL {
        debug!(
            "{}: {} total, {} drawn, {} removed",
            class,
            summary.total_variants.get(class),
            summary.included(class),
            summary.filtered_variants.get(class)
        );
    }
    if summary.dropped_roh > 0 {
        info!("{} ROH intervals fell outside the drawable arms", summary.dropped_roh);
    }

    Ok(summary)
}
