// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Writes a [`SolutionTopology`] back out in the solution file format.

use std::fmt;
use std::fs;
use std::path::Path;

use super::SolutionTopology;

impl fmt::Display for SolutionTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "sourcenode {} {}", self.source_name, self.source_ref)?;

        writeln!(f, "num node {}", self.nodes.len())?;
        for node in &self.nodes {
            writeln!(f, "{} {} {}", node.name, node.x, node.y)?;
        }

        writeln!(f, "num sinknode {}", self.sink_assignments.len())?;
        for sink in &self.sink_assignments {
            writeln!(f, "{} {}", sink.node_name, sink.sink_name)?;
        }

        writeln!(f, "num wire {}", self.wires.len())?;
        for wire in &self.wires {
            writeln!(f, "{} {} {}", wire.from, wire.to, wire.kind)?;
        }

        writeln!(f, "num buffer {}", self.buffers.len())?;
        for buffer in &self.buffers {
            writeln!(f, "{} {} {}", buffer.from, buffer.to, buffer.kind)?;
        }
        Ok(())
    }
}

/// Save a solution to `file_path`.
pub fn write_solution<P: AsRef<Path>>(
    solution: &SolutionTopology,
    file_path: P,
) -> std::io::Result<()> {
    fs::write(file_path, solution.to_string())
}
