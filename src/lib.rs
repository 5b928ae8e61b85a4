//! ISPD CTS Viewer Library
//!
//! This library parses ISPD clock-network synthesis problem files and their
//! solution files, and renders both as SVG or PNG diagrams.

pub mod common;
pub mod error;
pub mod export;
pub mod input;
pub mod output;
pub mod preprocessor;
pub mod render;

// Re-export commonly used types
pub use error::{FormatError, FormatErrorKind, RenderError, ResolutionError, ViewerError};
pub use input::{ProblemInstance, Rect, Sink, Source, Technology};
pub use output::{Buffer, Node, SinkAssignment, SolutionTopology, Wire};
pub use render::{render_problem, render_solution, write_image, RenderConfig, Scene};
