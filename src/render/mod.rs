// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Renders problem instances and their solutions.
//!
//! Rendering happens in two steps: the problem (and solution) is turned into
//! a [`Scene`], then the scene is serialized by an image backend. All styling
//! comes from the [`RenderConfig`] passed in, nothing is global.

use crate::error::{Reference, RenderError};
use crate::input::ProblemInstance;
use crate::output::SolutionTopology;

pub mod coords;
pub mod image;
pub mod scene;
pub mod svg;

pub use coords::{CoordinateTable, Point};
pub use image::{write_image, ImageFormat};
pub use scene::{MarkerKind, Scene, Shape, Viewport};

/// Colors used for each entity type.
#[derive(Debug, Clone)]
pub struct Palette {
    pub background: String,
    pub bounds: String,
    pub source: String,
    pub sink: String,
    pub blockage: String,
    pub node: String,
    pub wire: String,
    pub buffer: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            bounds: "#808080".to_string(),
            source: "#ff0000".to_string(),
            sink: "#0000ff".to_string(),
            blockage: "#00ffff".to_string(),
            node: "#00bfbf".to_string(),
            wire: "#008000".to_string(),
            buffer: "#bfbf00".to_string(),
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Width and height of the square image in pixels
    pub size: u32,
    /// Blank border between the image edge and the plot frame, in pixels
    pub margin: f64,
    /// Fraction of the largest bounds span added on every side
    pub padding_ratio: f64,
    /// Marker diameters in pixels
    pub source_marker: f64,
    pub sink_marker: f64,
    pub node_marker: f64,
    pub buffer_marker: f64,
    pub wire_width: f64,
    pub title: Option<String>,
    pub palette: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: 1000,
            margin: 40.0,
            padding_ratio: 0.1,
            source_marker: 20.0,
            sink_marker: 8.0,
            node_marker: 8.0,
            buffer_marker: 14.0,
            wire_width: 1.5,
            title: None,
            palette: Palette::default(),
        }
    }
}

impl RenderConfig {
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn marker_size(&self, kind: MarkerKind) -> f64 {
        match kind {
            MarkerKind::Source => self.source_marker,
            MarkerKind::Sink => self.sink_marker,
            MarkerKind::Node => self.node_marker,
            MarkerKind::Buffer => self.buffer_marker,
        }
    }
}

/// Bounds, source, sinks and blockages shared by both views.
fn problem_scene(problem: &ProblemInstance, config: &RenderConfig) -> Scene {
    let mut scene = Scene::new(Viewport::padded(&problem.bounds, config.padding_ratio));
    scene.push(Shape::Bounds(problem.bounds));
    scene.marker(
        MarkerKind::Source,
        Point::new(problem.source.x, problem.source.y),
    );
    for sink in &problem.sinks {
        scene.marker(MarkerKind::Sink, Point::new(sink.x, sink.y));
    }
    for blockage in &problem.blockages {
        scene.push(Shape::Blockage(*blockage));
    }
    scene
}

/// Geometric view of a problem instance.
pub fn render_problem(problem: &ProblemInstance, config: &RenderConfig) -> Scene {
    let scene = problem_scene(problem, config);
    log::debug!(
        "[INFO] Problem scene: {} shapes, {} sinks, {} blockages",
        scene.shapes.len(),
        scene.marker_count(MarkerKind::Sink),
        scene.blockage_count()
    );
    scene
}

/// Problem view with the solution's nodes, wires and buffers drawn on top.
pub fn render_solution(
    problem: &ProblemInstance,
    solution: &SolutionTopology,
    config: &RenderConfig,
) -> Result<Scene, RenderError> {
    let table = CoordinateTable::resolve(problem, solution)?;
    render_resolved(problem, solution, &table, config)
}

/// Same as [`render_solution`], for callers that already hold the resolved
/// coordinate table.
pub fn render_resolved(
    problem: &ProblemInstance,
    solution: &SolutionTopology,
    table: &CoordinateTable,
    config: &RenderConfig,
) -> Result<Scene, RenderError> {
    if solution.source_name != problem.source.name && solution.source_ref != problem.source.name {
        log::warn!(
            "[WARN] Solution source {} ({}) does not name problem source {}",
            solution.source_name,
            solution.source_ref,
            problem.source.name
        );
    }

    let mut scene = problem_scene(problem, config);

    for node in &solution.nodes {
        scene.marker(MarkerKind::Node, Point::new(node.x, node.y));
    }

    for wire in &solution.wires {
        let from = table.lookup(&wire.from, Reference::WireEndpoint)?;
        let to = table.lookup(&wire.to, Reference::WireEndpoint)?;
        scene.push(Shape::Wire { from, to });
    }

    for buffer in &solution.buffers {
        let at = table.lookup(&buffer.from, Reference::Buffer)?;
        scene.marker(MarkerKind::Buffer, at);
    }

    log::debug!(
        "[INFO] Solution scene: {} shapes, {} nodes, {} wires, {} buffers",
        scene.shapes.len(),
        scene.marker_count(MarkerKind::Node),
        scene.wire_count(),
        scene.marker_count(MarkerKind::Buffer)
    );
    Ok(scene)
}
