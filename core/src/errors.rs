use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InteraxError {
    #[error("could not open report file {}: {source}", .path.display())]
    OpenReport {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not read report file {}: {source}", .path.display())]
    Csv { path: PathBuf, source: csv::Error },
    #[error(
        "malformed record in {} at line {line}: expected {expected} fields, but got {found}",
        .path.display()
    )]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error(
        "invalid weight \"{value}\" in {} at line {line}, expected a finite number",
        .path.display()
    )]
    InvalidWeight {
        path: PathBuf,
        line: u64,
        value: String,
    },
    #[error("empty node identifier in {} at line {line}", .path.display())]
    EmptyNodeId { path: PathBuf, line: u64 },
    #[error("node identifier \"{0}\" can't be written, it is empty or has surrounding whitespace")]
    UnwritableNodeId(String),
    #[error("invalid color \"{0}\", expected the format #rrggbb")]
    InvalidColor(String),
    #[error("invalid render settings: {0}")]
    InvalidSettings(String),
    #[error(transparent)]
    CsvWrite(#[from] csv::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InteraxError>;
