// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! SVG backend.

use std::fmt;

use super::coords::Point;
use super::scene::{MarkerKind, Scene, Shape, Viewport};
use super::RenderConfig;
use crate::input::Rect;

/// Maps world coordinates into the plot frame, y pointing up.
#[derive(Debug, Clone, Copy)]
struct Transform {
    viewport: Viewport,
    origin: f64,
    scale_x: f64,
    scale_y: f64,
}

impl Transform {
    fn new(viewport: Viewport, config: &RenderConfig) -> Self {
        let extent = (config.size as f64 - 2.0 * config.margin).max(1.0);
        Self {
            viewport,
            origin: config.margin,
            scale_x: extent / viewport.width().max(1) as f64,
            scale_y: extent / viewport.height().max(1) as f64,
        }
    }

    fn x(&self, x: i64) -> f64 {
        self.origin + (x as f64 - self.viewport.min_x as f64) * self.scale_x
    }

    fn y(&self, y: i64) -> f64 {
        self.origin + (self.viewport.max_y as f64 - y as f64) * self.scale_y
    }

    /// Screen-space (x, y, width, height) of a world rectangle.
    fn rect(&self, rect: &Rect) -> (f64, f64, f64, f64) {
        let x = self.x(rect.llx);
        let y = self.y(rect.ury);
        (x, y, self.x(rect.urx) - x, self.y(rect.lly) - y)
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// A scene paired with the configuration needed to draw it.
pub struct SvgDocument<'a> {
    pub scene: &'a Scene,
    pub config: &'a RenderConfig,
}

impl SvgDocument<'_> {
    fn write_marker(
        &self,
        f: &mut fmt::Formatter<'_>,
        transform: &Transform,
        kind: MarkerKind,
        at: Point,
    ) -> fmt::Result {
        let palette = &self.config.palette;
        let cx = transform.x(at.x);
        let cy = transform.y(at.y);
        let r = self.config.marker_size(kind) / 2.0;
        match kind {
            MarkerKind::Source => writeln!(
                f,
                r#"  <circle class="source" cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="{}"/>"#,
                palette.source
            ),
            MarkerKind::Buffer => writeln!(
                f,
                r#"  <circle class="buffer" cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="{}"/>"#,
                palette.buffer
            ),
            MarkerKind::Node => writeln!(
                f,
                r#"  <rect class="node" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
                cx - r,
                cy - r,
                2.0 * r,
                2.0 * r,
                palette.node
            ),
            MarkerKind::Sink => writeln!(
                f,
                r#"  <path class="sink" d="M {:.2} {:.2} L {:.2} {:.2} M {:.2} {:.2} L {:.2} {:.2}" stroke="{}" stroke-width="1.5" fill="none"/>"#,
                cx - r,
                cy - r,
                cx + r,
                cy + r,
                cx - r,
                cy + r,
                cx + r,
                cy - r,
                palette.sink
            ),
        }
    }
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config;
        let palette = &config.palette;
        let size = config.size;
        let transform = Transform::new(self.scene.viewport, config);

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        )?;
        writeln!(
            f,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            palette.background
        )?;

        // plot frame = padded viewport
        let frame = size as f64 - 2.0 * config.margin;
        writeln!(
            f,
            r##"  <rect class="frame" x="{m:.2}" y="{m:.2}" width="{frame:.2}" height="{frame:.2}" fill="none" stroke="#000000" stroke-width="1"/>"##,
            m = config.margin
        )?;

        for shape in self.scene.painted() {
            match shape {
                Shape::Bounds(rect) => {
                    let (x, y, w, h) = transform.rect(rect);
                    writeln!(
                        f,
                        r#"  <rect class="bounds" x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" fill="none" stroke="{}" stroke-dasharray="4 2"/>"#,
                        palette.bounds
                    )?;
                }
                Shape::Blockage(rect) => {
                    let (x, y, w, h) = transform.rect(rect);
                    writeln!(
                        f,
                        r#"  <rect class="blockage" x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" fill="{}"/>"#,
                        palette.blockage
                    )?;
                }
                Shape::Wire { from, to } => {
                    writeln!(
                        f,
                        r#"  <line class="wire" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
                        transform.x(from.x),
                        transform.y(from.y),
                        transform.x(to.x),
                        transform.y(to.y),
                        palette.wire,
                        config.wire_width
                    )?;
                }
                Shape::Marker { kind, at } => self.write_marker(f, &transform, *kind, *at)?,
            }
        }

        if let Some(title) = &config.title {
            writeln!(
                f,
                r#"  <text x="{:.2}" y="{:.2}" text-anchor="middle" font-family="sans-serif" font-size="16">{}</text>"#,
                size as f64 / 2.0,
                config.margin / 2.0 + 6.0,
                escape(title)
            )?;
        }

        writeln!(f, "</svg>")
    }
}

impl Scene {
    pub fn to_svg(&self, config: &RenderConfig) -> String {
        SvgDocument {
            scene: self,
            config,
        }
        .to_string()
    }
}
