//! Readers for the variant report and the ROH interval file.
//!
//! Both formats are whitespace-delimited, one record per line. Blank lines and
//! lines whose first character is `#` are skipped; a `#` after leading
//! whitespace is read as a chromosome name and rejected as unknown. Any
//! malformed line aborts the load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::error::{IdeogramError, InputKind, Result};
use crate::reference::GenomeBuild;
use crate::variant::{RohInterval, Variant, VariantClass};

/// Strip a leading `chr` prefix, in any letter case.
pub fn strip_chr_prefix(name: &str) -> &str {
    match name.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("chr") => &name[3..],
        _ => name,
    }
}

/// Data lines of `reader` as (1-based line number, fields).
fn records<'a, R: BufRead + 'a>(
    reader: R,
    path: &'a Path,
) -> impl Iterator<Item = Result<(usize, Vec<String>)>> + 'a {
    reader
        .lines()
        .enumerate()
        .filter_map(move |(idx, line)| {
            let line = match line {
                Ok(l) => l,
                Err(source) => {
                    return Some(Err(IdeogramError::Read {
                        path: path.to_path_buf(),
                        source,
                    }))
                }
            };
            let line = line.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() || line.starts_with('#') {
                return None;
            }
            let fields = line.split_whitespace().map(str::to_string).collect();
            Some(Ok((idx + 1, fields)))
        })
}

fn field<'a>(fields: &'a [String], col: usize, input: InputKind, line: usize, name: &'static str) -> Result<&'a str> {
    fields
        .get(col)
        .map(String::as_str)
        .ok_or(IdeogramError::MissingField { input, line, field: name })
}

fn parse_bp(value: &str, input: InputKind, line: usize, name: &'static str) -> Result<u64> {
    value.parse().map_err(|_| IdeogramError::InvalidField {
        input,
        line,
        field: name,
        value: value.to_string(),
    })
}

fn chromosome(fields: &[String], input: InputKind, line: usize, genome: GenomeBuild) -> Result<String> {
    let raw = field(fields, 0, input, line, "chromosome")?;
    let id = strip_chr_prefix(raw);
    if !genome.contains(id) {
        return Err(IdeogramError::UnknownChromosome {
            input,
            line,
            chromosome: raw.to_string(),
            genome: genome.to_string(),
        });
    }
    Ok(id.to_string())
}

/// Parse a variant report: chromosome, position, class token (`BP`/`FF`/`FM`).
pub fn read_report<R: BufRead>(reader: R, path: &Path, genome: GenomeBuild) -> Result<Vec<Variant>> {
    let input = InputKind::Report;
    let mut variants = Vec::new();

    for record in records(reader, path) {
        let (line, fields) = record?;
        let chromosome = chromosome(&fields, input, line, genome)?;
        let position_bp = parse_bp(field(&fields, 1, input, line, "position")?, input, line, "position")?;
        let token = field(&fields, 2, input, line, "variant class")?;
        let class = VariantClass::from_token(token).ok_or_else(|| IdeogramError::UnknownVariantClass {
            line,
            token: token.to_string(),
        })?;

        variants.push(Variant {
            chromosome,
            position_bp,
            class,
            line,
        });
    }

    debug!("Parsed {} report records", variants.len());
    Ok(variants)
}

/// Parse an ROH file: chromosome, start, end.
pub fn read_roh<R: BufRead>(reader: R, path: &Path, genome: GenomeBuild) -> Result<Vec<RohInterval>> {
    let input = InputKind::Roh;
    let mut intervals = Vec::new();

    for record in records(reader, path) {
        let (line, fields) = record?;
        let chromosome = chromosome(&fields, input, line, genome)?;
        let start_bp = parse_bp(field(&fields, 1, input, line, "start")?, input, line, "start")?;
        let end_bp = parse_bp(field(&fields, 2, input, line, "end")?, input, line, "end")?;

        intervals.push(RohInterval {
            chromosome,
            start_bp,
            end_bp,
            line,
        });
    }

    debug!("Parsed {} ROH records", intervals.len());
    Ok(intervals)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| IdeogramError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub fn load_report(path: &Path, genome: GenomeBuild) -> Result<Vec<Variant>> {
    info!("Loading variant report {:?}...", path);
    read_report(open(path)?, path, genome)
}

pub fn load_roh(path: &Path, genome: GenomeBuild) -> Result<Vec<RohInterval>> {
    info!("Loading ROH intervals {:?}...", path);
    read_roh(open(path)?, path, genome)
}
