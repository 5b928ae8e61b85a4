// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Name to coordinate resolution for solution topologies.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{Reference, ResolutionError};
use crate::input::ProblemInstance;
use crate::output::SolutionTopology;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Every name a solution may refer to, mapped to the point it is drawn at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinateTable {
    entries: BTreeMap<String, Point>,
}

impl CoordinateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `name`, returning the previous point if any.
    pub fn insert(&mut self, name: &str, point: Point) -> Option<Point> {
        self.entries.insert(name.to_string(), point)
    }

    pub fn get(&self, name: &str) -> Option<Point> {
        self.entries.get(name).copied()
    }

    pub fn lookup(&self, name: &str, reference: Reference) -> Result<Point, ResolutionError> {
        self.get(name).ok_or_else(|| ResolutionError {
            name: name.to_string(),
            reference,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.entries.iter().map(|(name, point)| (name.as_str(), *point))
    }

    /// Build the table in four passes, later passes overwriting earlier ones:
    /// problem sinks by name, sink-assignment node names via their sink,
    /// the solution's source name, then the solution's own nodes.
    pub fn resolve(
        problem: &ProblemInstance,
        solution: &SolutionTopology,
    ) -> Result<Self, ResolutionError> {
        let mut table = Self::new();

        let sinks: HashMap<&str, Point> = problem
            .sinks
            .iter()
            .map(|sink| (sink.name.as_str(), Point::new(sink.x, sink.y)))
            .collect();
        for sink in &problem.sinks {
            table.insert(&sink.name, Point::new(sink.x, sink.y));
        }

        for assignment in &solution.sink_assignments {
            let point = sinks
                .get(assignment.sink_name.as_str())
                .copied()
                .ok_or_else(|| ResolutionError {
                    name: assignment.sink_name.clone(),
                    reference: Reference::SinkAssignment,
                })?;
            table.insert(&assignment.node_name, point);
        }

        table.insert(
            &solution.source_name,
            Point::new(problem.source.x, problem.source.y),
        );

        for node in &solution.nodes {
            let point = Point::new(node.x, node.y);
            if let Some(previous) = table.insert(&node.name, point) {
                if previous != point {
                    log::debug!(
                        "[INFO] Node {} shadows ({}, {}) with ({}, {})",
                        node.name,
                        previous.x,
                        previous.y,
                        point.x,
                        point.y
                    );
                }
            }
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parser::parse_input;
    use crate::output::parser::parse_output;

    const PROBLEM: &str = "0 0 100 100\nsource S1 10 10 BLK\nnum sink 2\nA 90 10 1\nB 50 90 1\nnum blockage 0\n";

    #[test]
    fn test_resolve_order() {
        let problem = parse_input(PROBLEM).unwrap();
        let solution = parse_output(
            "sourcenode SRC S1\nnum node 1\nN1 40 40\nnum sinknode 1\nT1 A\nnum wire 0\nnum buffer 0\n",
        )
        .unwrap();
        let table = CoordinateTable::resolve(&problem, &solution).unwrap();

        assert_eq!(table.get("A"), Some(Point::new(90, 10)));
        assert_eq!(table.get("T1"), Some(Point::new(90, 10)));
        assert_eq!(table.get("SRC"), Some(Point::new(10, 10)));
        assert_eq!(table.get("N1"), Some(Point::new(40, 40)));
        // the problem's own source name is not a key unless the solution uses it
        assert_eq!(table.get("S1"), None);
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_assignment_resolves_against_problem_sinks_only() {
        let problem = parse_input(PROBLEM).unwrap();
        // N1 is a node, but sink assignments only look at problem sinks
        let solution = parse_output(
            "sourcenode SRC S1\nnum node 1\nN1 40 40\nnum sinknode 1\nT1 N1\nnum wire 0\nnum buffer 0\n",
        )
        .unwrap();
        let err = CoordinateTable::resolve(&problem, &solution).unwrap_err();
        assert_eq!(err.name, "N1");
        assert_eq!(err.reference, Reference::SinkAssignment);
    }
}
