// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in database units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub llx: i64,
    pub lly: i64,
    pub urx: i64,
    pub ury: i64,
}

impl Rect {
    pub fn new(llx: i64, lly: i64, urx: i64, ury: i64) -> Self {
        Self { llx, lly, urx, ury }
    }

    /// Horizontal span, saturating at `i64::MAX` for extreme corners.
    pub fn width(&self) -> i64 {
        self.urx.saturating_sub(self.llx)
    }

    pub fn height(&self) -> i64 {
        self.ury.saturating_sub(self.lly)
    }

    /// True if the upper-right corner strictly dominates the lower-left one.
    pub fn is_proper(&self) -> bool {
        self.urx > self.llx && self.ury > self.lly
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub x: i64,
    pub y: i64,
    pub block_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sink {
    pub name: String,
    pub x: i64,
    pub y: i64,
    pub capacitance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireType {
    pub id: i64,
    pub capacitance: f64,
    pub resistance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BufferType {
    pub id: i64,
    pub name: String,
    pub inverted: bool,
    pub input_capacitance: f64,
    pub output_capacitance: f64,
    pub output_resistance: f64,
}

/// Wire/buffer libraries and electrical limits found between the sink block
/// and the blockage block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    pub wire_types: Vec<WireType>,
    pub buffer_types: Vec<BufferType>,
    pub vdd: Option<(f64, f64)>,
    pub slew_limit: Option<f64>,
    pub capacitance_limit: Option<f64>,
    /// Preamble lines that matched none of the above.
    pub skipped_lines: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemInstance {
    pub bounds: Rect,
    pub source: Source,
    pub sinks: Vec<Sink>,
    pub technology: Technology,
    pub blockages: Vec<Rect>,
}

pub mod parser;
pub mod reader;
pub mod technology;
