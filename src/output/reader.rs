// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::fs;
use std::path::Path;

use super::{parser::parse_output, SolutionTopology};
use crate::error::ViewerError;

pub struct OutputReader;

impl OutputReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<SolutionTopology, ViewerError> {
        let path = path.as_ref();
        log::info!("[LOAD] Loading ISPD output file: {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| ViewerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("[FILE] Output file size: {} bytes", content.len());

        let solution = parse_output(&content).map_err(|e| {
            log::error!("[FAIL] Failed to parse output file: {e}");
            ViewerError::Format {
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        log::info!("[PASS] Output parsed successfully!");
        log::info!("[INFO] Source node: {}", solution.source_name);
        log::info!(
            "[INFO] Statistics: {} nodes, {} sink nodes, {} wires, {} buffers",
            solution.nodes.len(),
            solution.sink_assignments.len(),
            solution.wires.len(),
            solution.buffers.len()
        );
        Ok(solution)
    }
}

impl Default for OutputReader {
    fn default() -> Self {
        Self::new()
    }
}
