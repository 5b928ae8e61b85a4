// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Error types shared by the parsers, the renderer and the binary.

use std::path::PathBuf;
use thiserror::Error;

/// What went wrong on a particular line of an ISPD file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatErrorKind {
    #[error("unexpected end of file, expected {expected}")]
    UnexpectedEof { expected: String },
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("invalid integer '{token}'")]
    InvalidInteger { token: String },
    #[error("invalid number '{token}'")]
    InvalidNumber { token: String },
    #[error("section header '{section}' not found")]
    MissingSection { section: String },
    #[error("upper-right corner must dominate lower-left corner")]
    InvalidBounds,
    #[error("duplicate sink name '{name}'")]
    DuplicateSink { name: String },
}

/// A malformed or truncated problem/solution file.
///
/// `line` is 1-based and refers to the original file, blank lines included.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {kind}")]
pub struct FormatError {
    pub line: usize,
    pub kind: FormatErrorKind,
}

impl FormatError {
    pub fn new(line: usize, kind: FormatErrorKind) -> Self {
        Self { line, kind }
    }
}

/// Where an unresolved name was referenced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    SinkAssignment,
    WireEndpoint,
    Buffer,
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reference::SinkAssignment => write!(f, "sink assignment"),
            Reference::WireEndpoint => write!(f, "wire endpoint"),
            Reference::Buffer => write!(f, "buffer"),
        }
    }
}

/// A name used in the solution that has no coordinate at render time.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("unresolved name '{name}' referenced by {reference}")]
pub struct ResolutionError {
    pub name: String,
    pub reference: Reference,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    #[error("unsupported image format '{0}', expected svg or png")]
    UnsupportedFormat(String),
    #[error("failed to rasterize image: {0}")]
    Raster(String),
    #[error("failed to write image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error for a single viewer run.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("failed to export CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
}
