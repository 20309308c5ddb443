use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

use updgraph::render::MAX_PIXELS_PER_UNIT;
use updgraph::{run, Layout, RenderOptions, RunOptions};

#[derive(Parser)]
#[command(name = "updgraph")]
#[command(about = "Draw a genome-wide ideogram of biparental, paternal and maternal variants.", long_about = None)]
struct Args {
    // MANDATORY OPTIONS
    /// Human genome build: hg19, hg38 or T2T.
    #[arg(short = 'g', long = "genome", value_name = "BUILD")]
    genome: String,

    /// Variant report with chromosome, position and class (BP, FF or FM) columns.
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    file: PathBuf,

    /// Write the ideogram to this FILE (PNG or SVG based on extension).
    #[arg(short = 'o', long = "output", value_name = "FILE", default_value = "ideogram.updgraph.png")]
    output: PathBuf,

    // Optional inputs
    /// ROH intervals (chromosome, start, end), e.g. as produced by AutoMap.
    #[arg(long = "roh", value_name = "FILE")]
    roh: Option<PathBuf>,

    // Visualization Options
    /// Prefix for chromosome labels in the plot (e.g. "chr"); none by default.
    #[arg(short = 'n', long = "naming-chr", value_name = "STRING", default_value = "")]
    naming_chr: String,

    /// Raster resolution in pixels per 10 Mb.
    #[arg(short = 'p', long = "pixels-per-unit", value_name = "N", default_value_t = 50.0, value_parser = parse_pixels_per_unit)]
    pixels_per_unit: f64,

    /// Don't draw the legend.
    #[arg(long = "no-legend")]
    no_legend: bool,

    // Threading
    /// Number of threads to use for parallel operations.
    #[arg(short = 't', long = "threads", value_name = "N")]
    threads: Option<usize>,

    // Logging
    /// Verbosity level (0 = error, 1 = info, 2 = debug, 3 = trace).
    #[arg(short = 'v', long = "verbose", value_name = "N", default_value_t = 1)]
    verbose: u8,
}

fn parse_pixels_per_unit(s: &str) -> Result<f64, String> {
    let ppu: f64 = s.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
    if ppu.is_finite() && ppu > 0.0 && ppu <= MAX_PIXELS_PER_UNIT {
        Ok(ppu)
    } else {
        Err(format!("must be greater than 0 and at most {}", MAX_PIXELS_PER_UNIT))
    }
}

fn main() {
    let args = Args::parse();

    // Initialize logger based on verbosity
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .init();

    if let Some(threads) = args.threads {
        if let Err(e) = rayon::ThreadPoolBuilder::new().num_threads(threads).build_global() {
            warn!("Could not configure {} threads: {}", threads, e);
        }
    }

    let options = RunOptions {
        genome: args.genome,
        report: args.file,
        roh: args.roh,
        output: args.output,
        label_prefix: args.naming_chr,
        layout: Layout::default(),
        render: RenderOptions {
            pixels_per_unit: args.pixels_per_unit,
            legend: !args.no_legend,
        },
    };

    info!("Starting ideogram...");

    let summary = match run(&options) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("Total variants: {}", summary.total());
    println!(
        "Variants removed (chromosome tips and centromere): {}",
        summary.excluded()
    );

    info!("Done.");
}
