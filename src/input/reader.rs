// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::fs;
use std::path::Path;

use super::{parser::parse_input, ProblemInstance};
use crate::error::ViewerError;

pub struct InputReader;

impl InputReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<ProblemInstance, ViewerError> {
        let path = path.as_ref();
        log::info!("[LOAD] Loading ISPD input file: {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| ViewerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("[FILE] Input file size: {} bytes", content.len());

        match parse_input(&content) {
            Ok(problem) => {
                log::info!("[PASS] Input parsed successfully!");
                log::info!(
                    "[INFO] Bounds: ({}, {}) - ({}, {})",
                    problem.bounds.llx,
                    problem.bounds.lly,
                    problem.bounds.urx,
                    problem.bounds.ury
                );
                log::info!(
                    "[INFO] Source: {} at ({}, {})",
                    problem.source.name,
                    problem.source.x,
                    problem.source.y
                );
                log::info!("[INFO] Sinks: {}", problem.sinks.len());
                log::info!("[INFO] Blockages: {}", problem.blockages.len());

                let tech = &problem.technology;
                log::debug!(
                    "[INFO] Technology: {} wire types, {} buffer types, {} skipped preamble lines",
                    tech.wire_types.len(),
                    tech.buffer_types.len(),
                    tech.skipped_lines
                );
                Ok(problem)
            }
            Err(e) => {
                log::error!("[FAIL] Failed to parse input file: {e}");
                Err(ViewerError::Format {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        }
    }
}

impl Default for InputReader {
    fn default() -> Self {
        Self::new()
    }
}
