// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Parser for ISPD clock-network solution files.
//!
//! Five fixed blocks, each (except the first) introduced by a count header:
//! `sourcenode`, `num node`, `num sinknode`, `num wire`, `num buffer`.

use super::{Buffer, Node, SinkAssignment, SolutionTopology, Wire};
use crate::common::{fields, integer_field, read_block};
use crate::error::FormatError;
use crate::preprocessor::LineCursor;

pub fn parse_output(content: &str) -> Result<SolutionTopology, FormatError> {
    let mut cursor = LineCursor::new(content);

    let line = cursor.next_line("source node declaration")?;
    let [_tag, source_name, source_ref] = fields::<3>(&line)?;

    let nodes = read_block(&mut cursor, "node", |line| {
        let [name, x, y] = fields::<3>(line)?;
        Ok(Node {
            name: name.to_string(),
            x: integer_field(line, x)?,
            y: integer_field(line, y)?,
        })
    })?;

    let sink_assignments = read_block(&mut cursor, "sink node", |line| {
        let [node_name, sink_name] = fields::<2>(line)?;
        Ok(SinkAssignment {
            node_name: node_name.to_string(),
            sink_name: sink_name.to_string(),
        })
    })?;

    let wires = read_block(&mut cursor, "wire", |line| {
        let [from, to, kind] = fields::<3>(line)?;
        Ok(Wire {
            from: from.to_string(),
            to: to.to_string(),
            kind: kind.to_string(),
        })
    })?;

    let buffers = read_block(&mut cursor, "buffer", |line| {
        let [from, to, kind] = fields::<3>(line)?;
        Ok(Buffer {
            from: from.to_string(),
            to: to.to_string(),
            kind: kind.to_string(),
        })
    })?;

    if !cursor.is_empty() {
        log::debug!(
            "[INFO] Ignoring {} trailing lines after buffers",
            cursor.remaining()
        );
    }

    Ok(SolutionTopology {
        source_name: source_name.to_string(),
        source_ref: source_ref.to_string(),
        nodes,
        sink_assignments,
        wires,
        buffers,
    })
}
