// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use serde::{Deserialize, Serialize};

/// Internal topology point (Steiner point, merge point, buffer site).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinkAssignment {
    pub node_name: String,
    pub sink_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wire {
    pub from: String,
    pub to: String,
    pub kind: String, // wire library type, not used for drawing
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buffer {
    pub from: String,
    pub to: String,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionTopology {
    pub source_name: String,
    /// Third token of the `sourcenode` line, normally the problem's source name.
    pub source_ref: String,
    pub nodes: Vec<Node>,
    pub sink_assignments: Vec<SinkAssignment>,
    pub wires: Vec<Wire>,
    pub buffers: Vec<Buffer>,
}

pub mod parser;
pub mod reader;
pub mod writer;
