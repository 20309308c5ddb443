use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which tabular input a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Report,
    Roh,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Report => write!(f, "report"),
            InputKind::Roh => write!(f, "ROH file"),
        }
    }
}

/// Coarse classification of every failure the pipeline can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Format,
    Reference,
    Io,
}

#[derive(Error, Debug)]
pub enum IdeogramError {
    #[error("unknown genome build '{0}' (expected one of hg19, hg38, T2T)")]
    UnknownGenome(String),

    #[error(
        "chromosome {chromosome}: centromere at {centromere_bp} bp gives a non-positive arm width \
         (arm1 {arm1_width:.3}, arm2 {arm2_width:.3})"
    )]
    DegenerateArm {
        chromosome: String,
        centromere_bp: u64,
        arm1_width: f64,
        arm2_width: f64,
    },

    #[error("pixels per unit must be a finite number in (0, {max}], got {value}")]
    InvalidResolution { value: f64, max: f64 },

    #[error("{input} line {line}: missing {field} column")]
    MissingField {
        input: InputKind,
        line: usize,
        field: &'static str,
    },

    #[error("{input} line {line}: invalid {field} '{value}'")]
    InvalidField {
        input: InputKind,
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("report line {line}: unrecognized variant class '{token}' (expected BP, FF or FM)")]
    UnknownVariantClass { line: usize, token: String },

    #[error("ROH file line {line}: interval end {end} precedes start {start} on chromosome {chromosome}")]
    InvertedInterval {
        line: usize,
        chromosome: String,
        start: u64,
        end: u64,
    },

    #[error("{input} line {line}: chromosome '{chromosome}' is not part of genome {genome}")]
    UnknownChromosome {
        input: InputKind,
        line: usize,
        chromosome: String,
        genome: String,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode image {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl IdeogramError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IdeogramError::UnknownGenome(_)
            | IdeogramError::DegenerateArm { .. }
            | IdeogramError::InvalidResolution { .. } => ErrorKind::Configuration,
            IdeogramError::MissingField { .. }
            | IdeogramError::InvalidField { .. }
            | IdeogramError::UnknownVariantClass { .. }
            | IdeogramError::InvertedInterval { .. } => ErrorKind::Format,
            IdeogramError::UnknownChromosome { .. } => ErrorKind::Reference,
            IdeogramError::Read { .. }
            | IdeogramError::Write { .. }
            | IdeogramError::Encode { .. } => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, IdeogramError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(
            IdeogramError::UnknownGenome("mm10".into()).kind(),
            ErrorKind::Configuration
        );
        let err = IdeogramError::UnknownVariantClass {
            line: 4,
            token: "XX".into(),
        };
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(
            err.to_string(),
            "report line 4: unrecognized variant class 'XX' (expected BP, FF or FM)"
        );
    }

    #[test]
    fn test_message_names_input_line_and_field() {
        let err = IdeogramError::InvalidField {
            input: InputKind::Roh,
            line: 12,
            field: "start",
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), "ROH file line 12: invalid start 'abc'");
    }
}
